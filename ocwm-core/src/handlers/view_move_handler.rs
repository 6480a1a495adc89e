use crate::models::{Mode, MoveGrab, ViewHandle};
use crate::{DisplayAction, State};

impl State {
    /// Starts an interactive move. Only the view under the pointer may ask
    /// for one; other requests are ignored.
    pub fn begin_move(&mut self, handle: ViewHandle) -> bool {
        if self.pointer_focus != Some(handle) {
            tracing::debug!("Ignoring move request from {} without pointer focus", handle);
            return false;
        }
        let Some(view) = self.views.get(handle) else {
            return false;
        };
        let (x, y) = self.cursor;
        self.mode = Mode::Move(MoveGrab {
            handle,
            anchor_x: x - f64::from(view.x),
            anchor_y: y - f64::from(view.y),
        });
        true
    }

    /// Keeps the grabbed view at the same offset from the pointer.
    pub(crate) fn process_move(&mut self, grab: MoveGrab) {
        let Some(view) = self.views.get_mut(grab.handle) else {
            self.mode = Mode::Passthrough;
            return;
        };
        let (x, y) = self.cursor;
        view.x = (x - grab.anchor_x) as i32;
        view.y = (y - grab.anchor_y) as i32;
        self.actions
            .push_back(DisplayAction::MoveView(grab.handle, view.x, view.y));
    }
}
