//! Asset handles
//!
//! The simulation never decodes images; it only carries opaque handles through
//! to the renderer, plus the one piece of image metadata collision needs: the
//! player sprite's nominal size.

use serde::{Deserialize, Serialize};

use crate::consts::{PLAYER_HITBOX_HEIGHT, PLAYER_HITBOX_WIDTH};

/// Opaque identifier the host maps to a decoded image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct VisualHandle(pub u32);

/// A sprite handle with its nominal pixel size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteInfo {
    pub handle: VisualHandle,
    pub width: i32,
    pub height: i32,
}

impl SpriteInfo {
    /// Panics if the sprite is smaller than the player hitbox.
    pub fn new(handle: VisualHandle, width: i32, height: i32) -> Self {
        assert!(
            width >= PLAYER_HITBOX_WIDTH && height >= PLAYER_HITBOX_HEIGHT,
            "sprite {width}x{height} is smaller than the {PLAYER_HITBOX_WIDTH}x{PLAYER_HITBOX_HEIGHT} hitbox"
        );
        Self {
            handle,
            width,
            height,
        }
    }
}

/// Everything the host loaded at startup, handed to the simulation once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assets {
    pub player: SpriteInfo,
    pub hazard: VisualHandle,
    pub ground_tiles: VisualHandle,
    pub background: VisualHandle,
    /// Indexed by obstacle id (rock, cactus, spike)
    pub obstacles: [VisualHandle; 3],
}

impl Assets {
    /// Sequentially numbered handles around a player sprite of the given size
    ///
    /// Suits headless hosts and tests that have no real images behind the handles.
    pub fn placeholder(player_width: i32, player_height: i32) -> Self {
        Self {
            player: SpriteInfo::new(VisualHandle(0), player_width, player_height),
            hazard: VisualHandle(1),
            ground_tiles: VisualHandle(2),
            background: VisualHandle(3),
            obstacles: [VisualHandle(4), VisualHandle(5), VisualHandle(6)],
        }
    }
}

impl Default for Assets {
    fn default() -> Self {
        Self::placeholder(98, 98)
    }
}
