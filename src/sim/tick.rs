//! Fixed timestep simulation tick
//!
//! Mode state machine driving one run at a time:
//!
//! | From     | Trigger                    | To       |
//! |----------|----------------------------|----------|
//! | Title    | jump edge                  | Game     |
//! | Game     | collision                  | GameOver |
//! | GameOver | countdown at 0 + jump edge | Title    |

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::{Hit, detect};
use super::obstacle::ObstacleCatalog;
use super::physics::integrate;
use super::state::{GameState, Mode, Snapshot, VisibleObstacle};
use crate::assets::Assets;
use crate::audio::{AudioSink, SoundEffect};
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Jump gesture started this tick (key, click, or touch down).
    /// Edge-triggered: true once per gesture, not while held.
    pub jump: bool,
}

impl TickInput {
    pub fn jump() -> Self {
        Self { jump: true }
    }
}

impl From<bool> for TickInput {
    fn from(jump: bool) -> Self {
        Self { jump }
    }
}

/// One player's game: run state plus the collaborators it was built with
///
/// The random source lives here rather than in `GameState` so that every
/// reset continues the same stream.
pub struct Game<A: AudioSink, R: Rng = Pcg32> {
    state: GameState,
    assets: Assets,
    audio: A,
    rng: R,
    last_hit: Option<Hit>,
}

impl<A: AudioSink> Game<A, Pcg32> {
    /// Game with a `Pcg32` stream seeded from `seed`
    pub fn from_seed(assets: Assets, audio: A, seed: u64) -> Self {
        Self::new(assets, audio, Pcg32::seed_from_u64(seed))
    }
}

impl<A: AudioSink, R: Rng> Game<A, R> {
    pub fn new(assets: Assets, audio: A, mut rng: R) -> Self {
        let state = GameState::new(ObstacleCatalog::new(&assets), &mut rng);
        Self {
            state,
            assets,
            audio,
            rng,
            last_hit: None,
        }
    }

    /// Advance the game by one tick and return the state to draw
    pub fn tick(&mut self, input: TickInput) -> Snapshot {
        self.state.time_ticks += 1;

        match self.state.mode {
            Mode::Title => {
                if input.jump {
                    log::info!("Run started");
                    self.state.mode = Mode::Game;
                }
            }

            Mode::Game => {
                let outcome = integrate(&mut self.state, input.jump, &mut self.rng);
                if outcome.jumped {
                    self.audio.play(SoundEffect::Jump);
                }

                if let Some(hit) = detect(&self.state, &self.assets.player) {
                    self.audio.play(SoundEffect::Hit);
                    self.state.mode = Mode::GameOver;
                    self.state.gameover_countdown = GAMEOVER_TICKS;
                    self.last_hit = Some(hit);
                    log::info!(
                        "Game over: {:?} at tick {}, score {}",
                        hit,
                        self.state.time_ticks,
                        self.state.score()
                    );
                }
            }

            Mode::GameOver => {
                self.state.gameover_countdown = self.state.gameover_countdown.saturating_sub(1);
                if self.state.gameover_countdown == 0 && input.jump {
                    self.reset();
                }
            }
        }

        self.state.snapshot()
    }

    /// Throw away the run and start over on the title screen
    ///
    /// Draws a fresh terrain pattern from the continuing random stream.
    pub fn reset(&mut self) {
        log::info!("Reset to title");
        self.state = GameState::new(ObstacleCatalog::new(&self.assets), &mut self.rng);
        self.last_hit = None;
    }

    /// Read-only view for the renderer between ticks
    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn visible_obstacles(&self) -> Vec<VisibleObstacle> {
        self.state.visible_obstacles()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn assets(&self) -> &Assets {
        &self.assets
    }

    /// What ended the current run, if it has ended
    pub fn last_hit(&self) -> Option<Hit> {
        self.last_hit
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }
}
