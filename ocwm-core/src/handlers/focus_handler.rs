use crate::hooks::HookEvent;
use crate::models::ViewHandle;
use crate::{DisplayAction, State};

impl State {
    /// Raises the view, moves keyboard focus to it and notifies `window_focus`
    /// subscribers. Focusing the focused view does nothing.
    ///
    /// Returns `true` if focus changed.
    pub fn focus_view(&mut self, handle: ViewHandle) -> bool {
        if self.focused == Some(handle) {
            return false;
        }
        if !self.views.contains(handle) {
            tracing::debug!("Refusing to focus unknown view {}", handle);
            return false;
        }

        if let Some(previous) = self.focused.take() {
            if self.views.contains(previous) {
                self.actions
                    .push_back(DisplayAction::SetActivated(previous, false));
            }
        }
        self.actions.push_back(DisplayAction::RaiseView(handle));
        self.actions.push_back(DisplayAction::SetActivated(handle, true));
        self.actions.push_back(DisplayAction::KeyboardFocus(handle));
        self.focused = Some(handle);

        self.fire_hook(HookEvent::WindowFocus, handle);
        true
    }
}
