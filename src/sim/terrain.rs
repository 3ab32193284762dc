//! Terrain pattern and scoring
//!
//! Obstacles sit on every `OBSTACLE_INTERVAL_X`-th tile column past
//! `OBSTACLE_START_OFFSET_X`. Which kind sits there comes from a pattern of
//! `PATTERN_LEN` ids drawn once per run, repeated for as long as the run scrolls.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::obstacle::ObstacleKind;
use crate::consts::*;
use crate::{floor_div, floor_mod};

/// Repeating sequence of obstacle kinds, one per obstacle slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerrainPattern {
    kinds: Vec<ObstacleKind>,
}

impl TerrainPattern {
    /// Draw `PATTERN_LEN` kinds uniformly from the catalog
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let kinds = (0..PATTERN_LEN)
            .map(|_| ObstacleKind::ALL[rng.random_range(0..ObstacleKind::ALL.len())])
            .collect();
        Self { kinds }
    }

    /// Panics if `kinds` is empty.
    pub fn from_kinds(kinds: Vec<ObstacleKind>) -> Self {
        assert!(!kinds.is_empty(), "terrain pattern must not be empty");
        Self { kinds }
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn kinds(&self) -> &[ObstacleKind] {
        &self.kinds
    }

    /// Kind of the obstacle on `column`, if that column carries one
    pub fn kind_at(&self, column: i32) -> Option<ObstacleKind> {
        let slot = obstacle_slot(column)?;
        let idx = floor_mod(slot, self.kinds.len() as i32) as usize;
        Some(self.kinds[idx])
    }
}

/// Index of the obstacle slot on `column`, counting from the start offset
///
/// `None` for columns at or before the start offset and for columns between
/// slots.
pub fn obstacle_slot(column: i32) -> Option<i32> {
    let rel = column - OBSTACLE_START_OFFSET_X;
    if rel <= 0 || floor_mod(rel, OBSTACLE_INTERVAL_X) != 0 {
        return None;
    }
    Some(floor_div(rel, OBSTACLE_INTERVAL_X))
}

/// Tile column under a fixed-point horizontal position
pub fn column_for_x(x16: i32) -> i32 {
    floor_div(floor_div(x16, SUBPIXELS), TILE_SIZE)
}

/// Score for a player at horizontal position `x16`
///
/// Counts obstacle slots passed; zero until past the start offset.
pub fn score_for_x(x16: i32) -> u32 {
    let rel = column_for_x(x16) - OBSTACLE_START_OFFSET_X;
    if rel <= 0 {
        return 0;
    }
    floor_div(rel, OBSTACLE_INTERVAL_X) as u32
}
