//! Collision detection for the player
//!
//! Everything here works in integer screen-space pixels, projected from the
//! fixed-point world position with floor division.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::obstacle::ObstacleKind;
use super::state::GameState;
use crate::assets::SpriteInfo;
use crate::consts::*;
use crate::{floor_div, to_pixels};

/// What ended the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hit {
    /// Jumped too far above the top of the screen
    Ceiling,
    /// Fell through the bottom threshold
    Floor,
    /// Touched the fireball
    Hazard,
    /// Ran into an obstacle
    Obstacle { column: i32, kind: ObstacleKind },
}

/// Axis-aligned box in pixels, closed on all edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hitbox {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Hitbox {
    /// Player hitbox centred within the sprite at fixed-point `pos`
    pub fn for_player(pos: IVec2, sprite: &SpriteInfo) -> Self {
        let px = to_pixels(pos);
        let x0 = px.x + (sprite.width - PLAYER_HITBOX_WIDTH) / 2;
        let y0 = px.y + (sprite.height - PLAYER_HITBOX_HEIGHT) / 2;
        Self {
            x0,
            y0,
            x1: x0 + PLAYER_HITBOX_WIDTH,
            y1: y0 + PLAYER_HITBOX_HEIGHT,
        }
    }

    /// Inclusive on all four edges
    pub fn contains(&self, p: IVec2) -> bool {
        self.x0 <= p.x && p.x <= self.x1 && self.y0 <= p.y && p.y <= self.y1
    }

    /// Horizontal overlap with an obstacle footprint starting at `left`
    pub fn overlaps_footprint(&self, left: i32) -> bool {
        self.x0 < left + OBSTACLE_WIDTH && self.x1 >= left
    }
}

/// Check the player against screen bounds, the hazard, and nearby obstacles
///
/// Returns the first hit found, tested in that order.
pub fn detect(state: &GameState, sprite: &SpriteInfo) -> Option<Hit> {
    let hitbox = Hitbox::for_player(state.player.pos, sprite);

    if hitbox.y0 < CEILING_Y {
        return Some(Hit::Ceiling);
    }
    if hitbox.y1 >= FLOOR_LINE_Y {
        return Some(Hit::Floor);
    }
    if hitbox.contains(to_pixels(state.hazard.pos)) {
        return Some(Hit::Hazard);
    }
    obstacle_hit(state, &hitbox)
}

/// Scan the columns whose obstacle footprint could reach the hitbox
///
/// Footprints are wider than a tile, so the scan starts a full footprint
/// behind the box's leading edge.
fn obstacle_hit(state: &GameState, hitbox: &Hitbox) -> Option<Hit> {
    let first = floor_div(hitbox.x0 - OBSTACLE_WIDTH, TILE_SIZE);
    let last = floor_div(hitbox.x0 + PLAYER_HITBOX_WIDTH, TILE_SIZE);

    (first..=last).find_map(|column| {
        let archetype = state.obstacle_at(column)?;
        if !hitbox.overlaps_footprint(column * TILE_SIZE) {
            return None;
        }
        // Still low enough to be inside the silhouette
        (hitbox.y0 > OBSTACLE_COLLISION_Y - archetype.height).then_some(Hit::Obstacle {
            column,
            kind: archetype.kind,
        })
    })
}
