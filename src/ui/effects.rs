//! Transient visual effects for the game scene.
//!
//! The input box flashes red when a guess is rejected, then reverts. The
//! revert is a deadline check rather than a deferred callback, and every
//! flash carries the session generation that triggered it: a flash from a
//! discarded session never lights up the input box of a new one.

use std::time::{Duration, Instant};

/// How long a rejected-input flash stays lit.
pub const FLASH_DURATION: Duration = Duration::from_millis(350);

#[derive(Debug, Clone, Copy)]
struct PendingFlash {
    deadline: Instant,
    generation: u64,
}

/// Flash-and-revert state for the guess input box.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputFlash {
    pending: Option<PendingFlash>,
}

impl InputFlash {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a flash tied to the given session generation.
    pub fn trigger(&mut self, generation: u64, now: Instant) {
        self.pending = Some(PendingFlash {
            deadline: now + FLASH_DURATION,
            generation,
        });
    }

    /// True while the flash should be drawn for the live session.
    pub fn is_lit(&self, generation: u64, now: Instant) -> bool {
        match self.pending {
            Some(flash) => flash.generation == generation && now < flash.deadline,
            None => false,
        }
    }

    /// Drop the pending flash once it has expired or its session is gone.
    pub fn tick(&mut self, generation: u64, now: Instant) {
        if let Some(flash) = self.pending {
            if flash.generation != generation || now >= flash.deadline {
                self.pending = None;
            }
        }
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}
