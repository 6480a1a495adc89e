use serde::{Deserialize, Serialize};

/// Width of the usable area while no output is attached.
pub const FALLBACK_WIDTH: i32 = 1920;
/// Height of the usable area while no output is attached.
pub const FALLBACK_HEIGHT: i32 = 1080;

/// A physical or virtual monitor reported by the backend.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub name: String,
    pub width: i32,
    pub height: i32,
}

impl Output {
    #[must_use]
    pub fn new(name: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }
}
