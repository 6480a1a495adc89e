use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::models::Mode;
use crate::{ButtonEvent, DisplayAction, Manager};

const DEFAULT_CURSOR: &str = "default";

impl<C: Config, SERVER: DisplayServer> Manager<C, SERVER> {
    pub fn cursor_motion_handler(&mut self, x: f64, y: f64, time_ms: u32) {
        self.state.cursor = (x, y);
        match self.state.mode {
            Mode::Move(grab) => self.state.process_move(grab),
            Mode::Resize(grab) => self.state.process_resize(grab),
            Mode::Passthrough => self.update_pointer_focus(time_ms),
        }
    }

    pub fn cursor_button_handler(&mut self, button: ButtonEvent) {
        self.state
            .actions
            .push_back(DisplayAction::ForwardButton(button));
        if !button.pressed {
            self.state.mode = Mode::Passthrough;
            return;
        }
        if !self.state.mode.is_passthrough() {
            return;
        }
        let (x, y) = self.state.cursor;
        // Hit tests run against the backend's scene, so it must be current.
        self.flush_actions();
        if let Some((handle, _, _)) = self.display_server.view_at(x, y) {
            self.state.focus_view(handle);
        }
    }

    fn update_pointer_focus(&mut self, time_ms: u32) {
        let (x, y) = self.state.cursor;
        self.flush_actions();
        match self.display_server.view_at(x, y) {
            Some((handle, sx, sy)) => {
                self.state.pointer_focus = Some(handle);
                self.state.actions.push_back(DisplayAction::PointerFocus {
                    handle,
                    sx,
                    sy,
                    time_ms,
                });
            }
            None => {
                self.state.pointer_focus = None;
                self.state
                    .actions
                    .push_back(DisplayAction::SetCursor(DEFAULT_CURSOR.to_owned()));
                self.state.actions.push_back(DisplayAction::ClearPointerFocus);
            }
        }
    }
}
