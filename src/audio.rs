//! Sound cue sink
//!
//! The simulation fires sound effects and never waits on them. Playback itself
//! belongs to the host: [`AudioManager`] queues cues with their effective
//! volume and the host drains the queue after each tick.

use serde::{Deserialize, Serialize};

use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Player left the ground (or jumped mid-air)
    Jump,
    /// Run ended on a collision
    Hit,
}

/// Fire-and-forget receiver for sound effects
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// A queued cue, ready for the host's audio backend
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoundCue {
    pub effect: SoundEffect,
    /// Effective volume (0.0 - 1.0)
    pub volume: f32,
}

/// Audio manager for the game
#[derive(Debug, Clone)]
pub struct AudioManager {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
    pending: Vec<SoundCue>,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            pending: Vec::new(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let mut audio = Self::new();
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_muted(settings.muted);
        audio
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Cues waiting for playback, oldest first
    pub fn pending(&self) -> &[SoundCue] {
        &self.pending
    }

    /// Hand every queued cue to the host's backend
    pub fn drain(&mut self) -> std::vec::Drain<'_, SoundCue> {
        self.pending.drain(..)
    }
}

impl AudioSink for AudioManager {
    fn play(&mut self, effect: SoundEffect) {
        let volume = self.effective_volume();
        if volume <= 0.0 {
            log::trace!("Dropping {:?} (muted)", effect);
            return;
        }
        log::trace!("Queue {:?} at volume {:.2}", effect, volume);
        self.pending.push(SoundCue { effect, volume });
    }
}
