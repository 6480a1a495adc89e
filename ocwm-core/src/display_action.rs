use crate::display_event::{ButtonEvent, KeyEvent};
use crate::models::ViewHandle;

/// These are responses from the session core. The display server should
/// act on these actions.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayAction {
    /// Position the view's node in layout coordinates.
    MoveView(ViewHandle, i32, i32),
    /// Request a new window size from the client.
    ResizeView(ViewHandle, i32, i32),
    SetVisible(ViewHandle, bool),
    /// Put the view on top of the stacking order.
    RaiseView(ViewHandle),
    SetActivated(ViewHandle, bool),
    KeyboardFocus(ViewHandle),
    /// Give the view pointer focus and send it a motion event.
    PointerFocus {
        handle: ViewHandle,
        sx: f64,
        sy: f64,
        time_ms: u32,
    },
    ClearPointerFocus,
    SetCursor(String),
    ForwardKey(KeyEvent),
    ForwardButton(ButtonEvent),
    SetOpacity(ViewHandle, f32),
    SetScale(ViewHandle, f32),
    SetBlur(ViewHandle, bool),
    SetFullscreen(ViewHandle, bool),
    CloseView(ViewHandle),
}
