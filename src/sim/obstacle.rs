//! Obstacle archetypes
//!
//! The id set is closed: three kinds, indexed 0..3.

use serde::{Deserialize, Serialize};

use crate::assets::{Assets, VisualHandle};
use crate::consts::*;

/// Obstacle kinds, in id order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleKind {
    Rock,
    Cactus,
    Spike,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 3] = [ObstacleKind::Rock, ObstacleKind::Cactus, ObstacleKind::Spike];

    /// Stable integer id
    pub fn id(self) -> u8 {
        match self {
            ObstacleKind::Rock => 0,
            ObstacleKind::Cactus => 1,
            ObstacleKind::Spike => 2,
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    /// Silhouette height in pixels
    pub fn height(self) -> i32 {
        match self {
            ObstacleKind::Rock => ROCK_HEIGHT,
            ObstacleKind::Cactus => CACTUS_HEIGHT,
            ObstacleKind::Spike => SPIKE_HEIGHT,
        }
    }
}

/// Immutable obstacle description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObstacleArchetype {
    pub kind: ObstacleKind,
    pub height: i32,
    pub visual: VisualHandle,
}

impl ObstacleArchetype {
    pub fn id(&self) -> u8 {
        self.kind.id()
    }
}

/// The fixed table of archetypes for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObstacleCatalog {
    archetypes: [ObstacleArchetype; 3],
}

impl ObstacleCatalog {
    pub fn new(assets: &Assets) -> Self {
        let archetypes = ObstacleKind::ALL.map(|kind| ObstacleArchetype {
            kind,
            height: kind.height(),
            visual: assets.obstacles[kind.id() as usize],
        });
        Self { archetypes }
    }

    pub fn get(&self, kind: ObstacleKind) -> &ObstacleArchetype {
        &self.archetypes[kind.id() as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ObstacleArchetype> {
        self.archetypes.iter()
    }
}
