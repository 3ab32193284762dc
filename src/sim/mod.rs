//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed tick per call, integer fixed-point math only
//! - Injected, seeded RNG only
//! - No rendering, audio, or platform dependencies beyond the injected sinks

pub mod collision;
pub mod obstacle;
pub mod physics;
pub mod state;
pub mod terrain;
pub mod tick;

pub use collision::{Hit, Hitbox, detect};
pub use obstacle::{ObstacleArchetype, ObstacleCatalog, ObstacleKind};
pub use physics::{StepOutcome, integrate};
pub use state::{GameState, Hazard, Mode, Player, Snapshot, VisibleObstacle};
pub use terrain::{TerrainPattern, score_for_x};
pub use tick::{Game, TickInput};
