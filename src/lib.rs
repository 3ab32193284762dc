//! Doge Dodge - an auto-scrolling jump-and-dodge arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game modes, scoring)
//! - `assets`: Opaque asset handles injected into the simulation
//! - `audio`: Fire-and-forget sound cue sink
//! - `settings`: Host configuration

pub mod assets;
pub mod audio;
pub mod settings;
pub mod sim;

pub use assets::{Assets, SpriteInfo, VisualHandle};
pub use audio::{AudioManager, AudioSink, SoundEffect};
pub use settings::Settings;

use glam::IVec2;

/// Game configuration constants
///
/// Values suffixed `_16` are in fixed-point world units (16 per pixel).
pub mod consts {
    /// Fixed-point sub-units per screen pixel
    pub const SUBPIXELS: i32 = 16;

    /// Screen dimensions (pixels)
    pub const SCREEN_WIDTH: i32 = 640;
    pub const SCREEN_HEIGHT: i32 = 480;
    pub const TILE_SIZE: i32 = 32;

    /// Obstacle placement: first eligible column, then one every interval
    pub const OBSTACLE_START_OFFSET_X: i32 = 8;
    pub const OBSTACLE_INTERVAL_X: i32 = 8;
    /// Rendered obstacle footprint, anchored at the tile's left edge
    pub const OBSTACLE_WIDTH: i32 = 58;
    /// Length of the repeating terrain pattern
    pub const PATTERN_LEN: usize = 256;

    /// Archetype heights (pixels)
    pub const ROCK_HEIGHT: i32 = 55;
    pub const CACTUS_HEIGHT: i32 = 65;
    pub const SPIKE_HEIGHT: i32 = 30;

    /// Player start and motion
    pub const PLAYER_START_X_16: i32 = 0;
    pub const PLAYER_START_Y_16: i32 = 5100;
    pub const PLAYER_STEP_16: i32 = 64;
    pub const JUMP_IMPULSE_16: i32 = -100;
    pub const MAX_JUMPS: u8 = 4;
    pub const GRAVITY_16: i32 = 4;
    pub const TERMINAL_VELOCITY_16: i32 = 96;
    pub const FLOOR_Y_16: i32 = 5600;

    /// Hazard (fireball) start and pursuit
    pub const HAZARD_START_X_16: i32 = 10000;
    pub const HAZARD_START_Y_16: i32 = 4700;
    pub const HAZARD_STEP_16: i32 = 32;
    /// Re-spawn once the hazard trails the player by more than this
    pub const HAZARD_RESPAWN_DISTANCE_16: i32 = 3000;
    pub const HAZARD_RESPAWN_AHEAD_16: i32 = 10000;
    pub const HAZARD_SPAWN_Y_16: i32 = 4500;
    pub const HAZARD_SPAWN_JITTER_16: i32 = 600;

    /// Camera start and scroll (pixels)
    pub const CAMERA_START_X: i32 = -240;
    pub const CAMERA_START_Y: i32 = 0;
    pub const CAMERA_STEP: i32 = 4;

    /// Player hitbox, centred inside the sprite's nominal size
    pub const PLAYER_HITBOX_WIDTH: i32 = 30;
    pub const PLAYER_HITBOX_HEIGHT: i32 = 60;
    /// Box top above this line is out of bounds
    pub const CEILING_Y: i32 = -TILE_SIZE * 4;
    /// Box bottom at or below this line is out of bounds
    pub const FLOOR_LINE_Y: i32 = SCREEN_HEIGHT - TILE_SIZE;
    /// Obstacles reach up to `OBSTACLE_COLLISION_Y - height`
    pub const OBSTACLE_COLLISION_Y: i32 = 372;

    /// Ticks the game-over screen holds before accepting a restart
    pub const GAMEOVER_TICKS: u32 = 30;
}

/// Integer division rounding toward negative infinity
///
/// Panics if `y == 0`.
#[inline]
pub fn floor_div(x: i32, y: i32) -> i32 {
    let d = x / y;
    if x % y != 0 && ((x < 0) != (y < 0)) {
        d - 1
    } else {
        d
    }
}

/// Remainder matching [`floor_div`]; non-negative for positive `y`
#[inline]
pub fn floor_mod(x: i32, y: i32) -> i32 {
    x - floor_div(x, y) * y
}

/// Project a fixed-point world position onto integer pixels
#[inline]
pub fn to_pixels(pos: IVec2) -> IVec2 {
    IVec2::new(
        floor_div(pos.x, consts::SUBPIXELS),
        floor_div(pos.y, consts::SUBPIXELS),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_floor_div_rounds_down() {
        assert_eq!(floor_div(7, 2), 3);
        assert_eq!(floor_div(-7, 2), -4);
        assert_eq!(floor_div(-8, 2), -4);
        assert_eq!(floor_div(-1, 16), -1);
        assert_eq!(floor_div(0, 16), 0);
        assert_eq!(floor_div(7, -2), -4);
        assert_eq!(floor_div(-7, -2), 3);
    }

    #[test]
    fn test_floor_mod_sign() {
        assert_eq!(floor_mod(-1, 8), 7);
        assert_eq!(floor_mod(-8, 8), 0);
        assert_eq!(floor_mod(9, 8), 1);
        assert_eq!(floor_mod(7, -2), -1);
    }

    #[test]
    fn test_to_pixels_negative() {
        assert_eq!(to_pixels(IVec2::new(-1, 15)), IVec2::new(-1, 0));
        assert_eq!(to_pixels(IVec2::new(5600, -17)), IVec2::new(350, -2));
    }

    proptest! {
        #[test]
        fn prop_division_identity(x in -1_000_000i32..1_000_000, y in 1i32..10_000) {
            let d = floor_div(x, y);
            let m = floor_mod(x, y);
            prop_assert_eq!(d * y + m, x);
            prop_assert!(0 <= m && m < y);
        }

        #[test]
        fn prop_identity_negative_divisor(x in -1_000_000i32..1_000_000, y in -10_000i32..0) {
            let m = floor_mod(x, y);
            prop_assert_eq!(floor_div(x, y) * y + m, x);
            prop_assert!(y < m && m <= 0);
        }
    }
}
