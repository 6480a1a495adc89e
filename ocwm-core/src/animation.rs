//! Time-based visual transitions on views.
mod easing;
mod scheduler;

pub use easing::Easing;
pub use scheduler::{Animation, AnimationId, AnimationKind, AnimationScheduler, Completion};

use serde::{Deserialize, Serialize};

pub const DEFAULT_OPEN_DURATION: u32 = 250;
pub const DEFAULT_CLOSE_DURATION: u32 = 200;

/// Global switches for visual effects.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectSettings {
    pub enabled: bool,
    /// Milliseconds.
    pub open_duration: u32,
    /// Milliseconds.
    pub close_duration: u32,
}

impl Default for EffectSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            open_duration: DEFAULT_OPEN_DURATION,
            close_duration: DEFAULT_CLOSE_DURATION,
        }
    }
}
