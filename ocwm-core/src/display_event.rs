use crate::models::{Edges, Output, View, ViewHandle, Xyhw};
use crate::utils::keysym_lookup::Keysym;
use crate::{Command, ModMask};

/// Notifications from the backend to the session core.
#[derive(Debug, Clone)]
pub enum DisplayEvent {
    OutputAttached(Output),
    OutputDetached(String),
    ViewCreate(View),
    ViewMap(ViewHandle),
    ViewUnmap(ViewHandle),
    ViewDestroy(ViewHandle),
    /// The client committed a new window geometry.
    ViewGeometry(ViewHandle, Xyhw),
    RequestMove(ViewHandle),
    RequestResize(ViewHandle, Edges),
    RequestFullscreen(ViewHandle, bool),
    /// Frame tick, in monotonic milliseconds.
    Frame(u64),
    /// Absolute pointer position in layout coordinates.
    PointerMotion { x: f64, y: f64, time_ms: u32 },
    PointerButton(ButtonEvent),
    Key(KeyEvent),
    SendCommand(Command),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub keycode: u32,
    /// Every keysym the key produces in the current layout and level.
    pub keysyms: Vec<Keysym>,
    pub modmask: ModMask,
    pub pressed: bool,
    pub time_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonEvent {
    pub button: u32,
    pub pressed: bool,
    pub time_ms: u32,
}
