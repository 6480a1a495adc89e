use super::{WorkspaceId, Xyhw};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend-assigned identifier of a toplevel surface.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewHandle(pub u32);

impl fmt::Display for ViewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A managed toplevel window.
///
/// `x`/`y` is the position of the view's scene node in layout coordinates.
/// `geometry` is the window geometry committed by the client: the offset of
/// the visible window inside its node, and its size.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct View {
    pub handle: ViewHandle,
    pub title: Option<String>,
    pub app_id: Option<String>,
    pub workspace: Option<WorkspaceId>,
    pub x: i32,
    pub y: i32,
    pub geometry: Xyhw,
    pub mapped: bool,
    pub floating: bool,
    pub fullscreen: bool,
    /// Whether the scene node is enabled.
    pub visible: bool,
    opacity: f32,
    pub scale: f32,
    pub blur: bool,
    pub animating: bool,
}

impl View {
    #[must_use]
    pub fn new(handle: ViewHandle, title: Option<String>, app_id: Option<String>) -> Self {
        Self {
            handle,
            title,
            app_id,
            workspace: None,
            x: 0,
            y: 0,
            geometry: Xyhw::default(),
            mapped: false,
            floating: false,
            fullscreen: false,
            visible: true,
            opacity: 1.0,
            scale: 1.0,
            blur: false,
            animating: false,
        }
    }

    #[must_use]
    pub const fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Sets the opacity, clamped to `[0, 1]`.
    pub fn set_opacity(&mut self, value: f32) {
        self.opacity = value.clamp(0.0, 1.0);
    }

    /// A view takes part in tiling when it is mapped, not floating and not fullscreen.
    #[must_use]
    pub const fn is_tiled(&self) -> bool {
        self.mapped && !self.floating && !self.fullscreen
    }

    #[must_use]
    pub fn has_workspace(&self, id: WorkspaceId) -> bool {
        self.workspace == Some(id)
    }

    /// The visible window in layout coordinates.
    #[must_use]
    pub const fn layout_box(&self) -> Xyhw {
        Xyhw::new(
            self.x + self.geometry.x(),
            self.y + self.geometry.y(),
            self.geometry.w(),
            self.geometry.h(),
        )
    }
}
