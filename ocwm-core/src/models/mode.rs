use super::{ViewHandle, Xyhw};
use bitflags::bitflags;

bitflags! {
    /// Edges of a view being dragged during an interactive resize.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Edges: u32 {
        const TOP = 1;
        const BOTTOM = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

/// Pointer grab state. A grab only exists while a move or resize is running.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Mode {
    #[default]
    Passthrough,
    Move(MoveGrab),
    Resize(ResizeGrab),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveGrab {
    pub handle: ViewHandle,
    /// Pointer position relative to the view's node.
    pub anchor_x: f64,
    pub anchor_y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeGrab {
    pub handle: ViewHandle,
    /// Pointer position relative to the dragged border.
    pub anchor_x: f64,
    pub anchor_y: f64,
    /// Visible window box in layout coordinates when the grab began.
    pub start: Xyhw,
    pub edges: Edges,
}

impl Mode {
    #[must_use]
    pub const fn grabbed(&self) -> Option<ViewHandle> {
        match self {
            Self::Passthrough => None,
            Self::Move(grab) => Some(grab.handle),
            Self::Resize(grab) => Some(grab.handle),
        }
    }

    #[must_use]
    pub const fn is_passthrough(&self) -> bool {
        matches!(self, Self::Passthrough)
    }
}
