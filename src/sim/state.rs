//! Game state and core simulation types
//!
//! `GameState` is the single mutable record of a run. Renderers never see it;
//! they get a [`Snapshot`] instead.

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::obstacle::{ObstacleArchetype, ObstacleCatalog};
use super::terrain::{TerrainPattern, score_for_x};
use crate::assets::VisualHandle;
use crate::consts::*;
use crate::to_pixels;

/// Current game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Waiting for a jump to start the run
    #[default]
    Title,
    /// Active gameplay
    Game,
    /// Run ended; frozen until the countdown expires and the player jumps
    GameOver,
}

impl Mode {
    /// Overlay text lines for this mode (empty strings are spacer lines)
    pub fn banner(self) -> &'static [&'static str] {
        match self {
            Mode::Title => &[
                "DOGE DODGE",
                "",
                "",
                "",
                "",
                "PRESS SPACE KEY",
                "",
                "OR TOUCH SCREEN",
            ],
            Mode::Game => &[],
            Mode::GameOver => &["", "GAME OVER!"],
        }
    }

    /// Small-print hint shown under the banner
    pub fn hint(self) -> Option<&'static str> {
        match self {
            Mode::Title => Some("4 JUMPS TILL YOU HAVE TO LAND"),
            _ => None,
        }
    }
}

/// The player character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Fixed-point world position
    pub pos: IVec2,
    /// Fixed-point vertical velocity (positive is down)
    pub vy: i32,
    pub jumps_left: u8,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: IVec2::new(PLAYER_START_X_16, PLAYER_START_Y_16),
            vy: 0,
            jumps_left: MAX_JUMPS,
        }
    }
}

/// The homing fireball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hazard {
    /// Fixed-point world position
    pub pos: IVec2,
}

impl Default for Hazard {
    fn default() -> Self {
        Self {
            pos: IVec2::new(HAZARD_START_X_16, HAZARD_START_Y_16),
        }
    }
}

/// Complete run state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub mode: Mode,
    pub player: Player,
    pub hazard: Hazard,
    /// Camera offset in pixels
    pub camera: IVec2,
    pub catalog: ObstacleCatalog,
    pub terrain: TerrainPattern,
    /// Ticks left before GameOver accepts a restart
    pub gameover_countdown: u32,
    /// Ticks since the last reset
    pub time_ticks: u64,
}

impl GameState {
    /// Fresh run in Title mode; draws a new terrain pattern from `rng`
    pub fn new<R: Rng>(catalog: ObstacleCatalog, rng: &mut R) -> Self {
        Self::with_terrain(catalog, TerrainPattern::generate(rng))
    }

    pub fn with_terrain(catalog: ObstacleCatalog, terrain: TerrainPattern) -> Self {
        Self {
            mode: Mode::Title,
            player: Player::default(),
            hazard: Hazard::default(),
            camera: IVec2::new(CAMERA_START_X, CAMERA_START_Y),
            catalog,
            terrain,
            gameover_countdown: 0,
            time_ticks: 0,
        }
    }

    /// Archetype of the obstacle on tile `column`, if any
    pub fn obstacle_at(&self, column: i32) -> Option<&ObstacleArchetype> {
        self.terrain
            .kind_at(column)
            .map(|kind| self.catalog.get(kind))
    }

    pub fn score(&self) -> u32 {
        score_for_x(self.player.pos.x)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            mode: self.mode,
            player: to_pixels(self.player.pos),
            hazard: to_pixels(self.hazard.pos),
            camera: self.camera,
            score: self.score(),
            jumps_left: self.player.jumps_left,
            gameover_countdown: self.gameover_countdown,
            time_ticks: self.time_ticks,
        }
    }

    /// Obstacles in the tile range a full screen at the current camera covers
    ///
    /// Scans two columns behind the left edge and one past the right edge so
    /// obstacles wider than a tile draw in from off-screen.
    pub fn visible_obstacles(&self) -> Vec<VisibleObstacle> {
        let first = crate::floor_div(self.camera.x, TILE_SIZE);
        let scroll = IVec2::new(
            crate::floor_mod(self.camera.x, TILE_SIZE),
            crate::floor_mod(self.camera.y, TILE_SIZE),
        );
        let ground_y = (SCREEN_HEIGHT / TILE_SIZE - 1) * TILE_SIZE;

        (-2..SCREEN_WIDTH / TILE_SIZE + 1)
            .filter_map(|i| {
                let column = first + i;
                let archetype = self.obstacle_at(column)?;
                Some(VisibleObstacle {
                    column,
                    screen: IVec2::new(i * TILE_SIZE, ground_y - archetype.height) - scroll,
                    visual: archetype.visual,
                })
            })
            .collect()
    }
}

/// An obstacle the renderer should draw this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleObstacle {
    pub column: i32,
    /// Top-left corner in screen pixels
    pub screen: IVec2,
    pub visual: VisualHandle,
}

/// Read-only projection of a run for rendering, audio, and text overlays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub mode: Mode,
    /// Player position in world pixels
    pub player: IVec2,
    /// Hazard position in world pixels
    pub hazard: IVec2,
    /// Camera offset in pixels
    pub camera: IVec2,
    pub score: u32,
    pub jumps_left: u8,
    pub gameover_countdown: u32,
    pub time_ticks: u64,
}

impl Snapshot {
    /// Player sprite position on screen
    pub fn player_screen(&self) -> IVec2 {
        self.player - self.camera
    }

    /// Hazard sprite position on screen
    pub fn hazard_screen(&self) -> IVec2 {
        self.hazard - self.camera
    }

    /// HUD score text, zero-padded to four digits
    pub fn score_text(&self) -> String {
        format!("{:04}", self.score)
    }

    /// Actors are hidden on the title screen
    pub fn actors_visible(&self) -> bool {
        self.mode != Mode::Title
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::Assets;
    use crate::sim::obstacle::ObstacleKind;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn new_state(seed: u64) -> GameState {
        let catalog = ObstacleCatalog::new(&Assets::default());
        GameState::new(catalog, &mut Pcg32::seed_from_u64(seed))
    }

    #[test]
    fn test_new_state_canonical() {
        let state = new_state(1);
        assert_eq!(state.mode, Mode::Title);
        assert_eq!(state.player.pos, IVec2::new(0, 5100));
        assert_eq!(state.player.vy, 0);
        assert_eq!(state.player.jumps_left, 4);
        assert_eq!(state.hazard.pos, IVec2::new(10000, 4700));
        assert_eq!(state.camera, IVec2::new(-240, 0));
        assert_eq!(state.score(), 0);
        assert_eq!(state.terrain.len(), PATTERN_LEN);
    }

    #[test]
    fn test_obstacle_at_resolves_catalog() {
        let state = new_state(5);
        let expected = state.terrain.kind_at(16).unwrap();
        let archetype = state.obstacle_at(16).unwrap();
        assert_eq!(archetype.kind, expected);
        assert_eq!(archetype.height, expected.height());
        assert!(state.obstacle_at(17).is_none());
    }

    #[test]
    fn test_snapshot_projects_pixels() {
        let state = new_state(2);
        let snap = state.snapshot();
        assert_eq!(snap.player, IVec2::new(0, 318));
        assert_eq!(snap.hazard, IVec2::new(625, 293));
        assert_eq!(snap.player_screen(), IVec2::new(240, 318));
        assert_eq!(snap.score_text(), "0000");
        assert!(!snap.actors_visible());
    }

    #[test]
    fn test_visible_obstacles_at_scroll() {
        let catalog = ObstacleCatalog::new(&Assets::default());
        let terrain = TerrainPattern::from_kinds(vec![ObstacleKind::Spike]);
        let mut state = GameState::with_terrain(catalog, terrain);
        state.camera.x = 16 * TILE_SIZE + 5;

        let visible = state.visible_obstacles();
        let columns: Vec<i32> = visible.iter().map(|o| o.column).collect();
        assert_eq!(columns, vec![16, 24, 32]);

        let first = visible[0];
        assert_eq!(first.screen, IVec2::new(-5, 448 - SPIKE_HEIGHT));
        assert_eq!(first.visual, catalog.get(ObstacleKind::Spike).visual);
    }

    #[test]
    fn test_banner_text() {
        assert_eq!(Mode::GameOver.banner()[1], "GAME OVER!");
        assert!(Mode::Game.banner().is_empty());
        assert!(Mode::Title.hint().is_some());
    }
}
