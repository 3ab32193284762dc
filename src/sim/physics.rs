//! Fixed-point physics for a single Game-mode tick
//!
//! Semi-implicit Euler: position moves by the current velocity, then gravity
//! updates the velocity for the next tick.

use rand::Rng;

use super::state::{GameState, Hazard, Player};
use crate::consts::*;

/// What the integrator did this tick that the caller may need to react to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepOutcome {
    pub jumped: bool,
    pub landed: bool,
    pub hazard_respawned: bool,
}

/// Advance player, hazard, and camera by one tick
pub fn integrate<R: Rng>(state: &mut GameState, jump: bool, rng: &mut R) -> StepOutcome {
    let mut outcome = StepOutcome::default();

    // Scroll
    state.player.pos.x += PLAYER_STEP_16;
    outcome.hazard_respawned = advance_hazard(&mut state.hazard, state.player.pos.x, rng);
    state.camera.x += CAMERA_STEP;

    if jump {
        outcome.jumped = try_jump(&mut state.player);
    }

    outcome.landed = integrate_vertical(&mut state.player);
    outcome
}

/// Move the hazard toward the player, re-spawning it ahead once it falls behind
///
/// Returns true on re-spawn.
pub fn advance_hazard<R: Rng>(hazard: &mut Hazard, player_x: i32, rng: &mut R) -> bool {
    hazard.pos.x -= HAZARD_STEP_16;
    if player_x - hazard.pos.x <= HAZARD_RESPAWN_DISTANCE_16 {
        return false;
    }
    hazard.pos.x = player_x + HAZARD_RESPAWN_AHEAD_16;
    hazard.pos.y = HAZARD_SPAWN_Y_16 - rng.random_range(0..HAZARD_SPAWN_JITTER_16);
    log::debug!("Hazard respawned at {:?}", hazard.pos);
    true
}

/// Spend one jump from the budget; false when the budget is empty
pub fn try_jump(player: &mut Player) -> bool {
    if player.jumps_left == 0 {
        return false;
    }
    player.jumps_left -= 1;
    player.vy = JUMP_IMPULSE_16;
    log::trace!("Jump ({} left)", player.jumps_left);
    true
}

/// Move, clamp to the floor, then apply gravity
///
/// Returns true if the player landed with an empty jump budget, which refills it.
pub fn integrate_vertical(player: &mut Player) -> bool {
    player.pos.y += player.vy;

    let mut landed = false;
    if player.pos.y > FLOOR_Y_16 {
        player.pos.y = FLOOR_Y_16;
        if player.jumps_left == 0 {
            player.jumps_left = MAX_JUMPS;
            landed = true;
        }
    }

    player.vy = (player.vy + GRAVITY_16).min(TERMINAL_VELOCITY_16);
    landed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::Assets;
    use crate::sim::obstacle::ObstacleCatalog;
    use glam::IVec2;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn new_state() -> (GameState, Pcg32) {
        let mut rng = Pcg32::seed_from_u64(42);
        let state = GameState::new(ObstacleCatalog::new(&Assets::default()), &mut rng);
        (state, rng)
    }

    /// Player y after `n` idle ticks from rest at the start height
    fn ballistic_y(n: i32) -> i32 {
        let fall: i32 = (0..n).map(|k| (k * GRAVITY_16).min(TERMINAL_VELOCITY_16)).sum();
        (PLAYER_START_Y_16 + fall).min(FLOOR_Y_16)
    }

    #[test]
    fn test_horizontal_motion() {
        let (mut state, mut rng) = new_state();
        integrate(&mut state, false, &mut rng);
        assert_eq!(state.player.pos.x, 64);
        assert_eq!(state.hazard.pos.x, 10000 - 32);
        assert_eq!(state.camera.x, -236);
    }

    #[test]
    fn test_gravity_after_move() {
        let (mut state, mut rng) = new_state();
        integrate(&mut state, false, &mut rng);
        // First tick moves by the old velocity (0), then accelerates
        assert_eq!(state.player.pos.y, PLAYER_START_Y_16);
        assert_eq!(state.player.vy, GRAVITY_16);
        integrate(&mut state, false, &mut rng);
        assert_eq!(state.player.pos.y, PLAYER_START_Y_16 + GRAVITY_16);
    }

    #[test]
    fn test_ballistic_trajectory() {
        let (mut state, mut rng) = new_state();
        for n in 1..=60 {
            integrate(&mut state, false, &mut rng);
            assert_eq!(state.player.pos.y, ballistic_y(n), "tick {n}");
        }
        assert_eq!(state.player.vy, TERMINAL_VELOCITY_16);
    }

    #[test]
    fn test_jump_impulse() {
        let (mut state, mut rng) = new_state();
        let outcome = integrate(&mut state, true, &mut rng);
        assert!(outcome.jumped);
        assert_eq!(state.player.jumps_left, 3);
        assert_eq!(state.player.pos.y, PLAYER_START_Y_16 + JUMP_IMPULSE_16);
        assert_eq!(state.player.vy, JUMP_IMPULSE_16 + GRAVITY_16);
    }

    #[test]
    fn test_jump_budget_exhausts() {
        let (mut state, mut rng) = new_state();
        for _ in 0..4 {
            assert!(integrate(&mut state, true, &mut rng).jumped);
        }
        assert_eq!(state.player.jumps_left, 0);
        let vy = state.player.vy;
        let outcome = integrate(&mut state, true, &mut rng);
        assert!(!outcome.jumped);
        assert_eq!(state.player.vy, (vy + GRAVITY_16).min(TERMINAL_VELOCITY_16));
    }

    #[test]
    fn test_landing_replenishes_only_when_empty() {
        let mut player = Player {
            pos: IVec2::new(0, FLOOR_Y_16),
            vy: 50,
            jumps_left: 2,
        };
        assert!(!integrate_vertical(&mut player));
        assert_eq!(player.pos.y, FLOOR_Y_16);
        assert_eq!(player.jumps_left, 2);

        player.jumps_left = 0;
        player.vy = 10;
        assert!(integrate_vertical(&mut player));
        assert_eq!(player.jumps_left, MAX_JUMPS);
    }

    #[test]
    fn test_hazard_respawn() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut hazard = Hazard {
            pos: IVec2::new(1000, 4700),
        };
        // Gap after the step is exactly the threshold: no respawn
        assert!(!advance_hazard(&mut hazard, 1000 - 32 + 3000, &mut rng));
        assert_eq!(hazard.pos.x, 968);

        let player_x = 968 - 32 + 3001;
        assert!(advance_hazard(&mut hazard, player_x, &mut rng));
        assert_eq!(hazard.pos.x, player_x + HAZARD_RESPAWN_AHEAD_16);
        assert!(hazard.pos.y > HAZARD_SPAWN_Y_16 - HAZARD_SPAWN_JITTER_16);
        assert!(hazard.pos.y <= HAZARD_SPAWN_Y_16);
    }

    #[test]
    fn test_hazard_respawn_reproducible() {
        let run = |seed| {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut hazard = Hazard::default();
            advance_hazard(&mut hazard, 20_000, &mut rng);
            hazard.pos
        };
        assert_eq!(run(8), run(8));
    }

    proptest! {
        #[test]
        fn prop_jump_budget_bounded(inputs in proptest::collection::vec(any::<bool>(), 1..400)) {
            let (mut state, mut rng) = new_state();
            for jump in inputs {
                let before = state.player.jumps_left;
                let outcome = integrate(&mut state, jump, &mut rng);
                let after = state.player.jumps_left;
                prop_assert!(after <= MAX_JUMPS);
                if outcome.landed {
                    prop_assert_eq!(after, MAX_JUMPS);
                } else if outcome.jumped {
                    prop_assert_eq!(after, before - 1);
                } else {
                    prop_assert_eq!(after, before);
                }
                prop_assert!(state.player.pos.y <= FLOOR_Y_16);
                prop_assert!(state.player.vy <= TERMINAL_VELOCITY_16);
            }
        }
    }
}
