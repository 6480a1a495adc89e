use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::{DisplayEvent, Manager};

impl<C: Config, SERVER: DisplayServer> Manager<C, SERVER> {
    /// Applies one backend notification, then runs whatever commands the
    /// callbacks it triggered have queued.
    pub fn display_event_handler(&mut self, event: DisplayEvent) {
        let state = &mut self.state;
        match event {
            DisplayEvent::OutputAttached(output) => state.output_attached_handler(output),
            DisplayEvent::OutputDetached(name) => state.output_detached_handler(&name),

            DisplayEvent::ViewCreate(view) => state.view_created_handler(view),
            DisplayEvent::ViewMap(handle) => state.view_mapped_handler(handle),
            DisplayEvent::ViewUnmap(handle) => state.view_unmapped_handler(handle),
            DisplayEvent::ViewDestroy(handle) => state.view_destroyed_handler(handle),
            DisplayEvent::ViewGeometry(handle, geometry) => {
                state.view_geometry_handler(handle, geometry);
            }

            DisplayEvent::RequestMove(handle) => {
                state.begin_move(handle);
            }
            DisplayEvent::RequestResize(handle, edges) => {
                state.begin_resize(handle, edges);
            }
            DisplayEvent::RequestFullscreen(handle, fullscreen) => {
                state.set_fullscreen(handle, fullscreen);
            }

            DisplayEvent::Frame(now) => state.tick_animations(now),

            DisplayEvent::PointerMotion { x, y, time_ms } => {
                self.cursor_motion_handler(x, y, time_ms);
            }
            DisplayEvent::PointerButton(button) => self.cursor_button_handler(button),
            DisplayEvent::Key(key) => self.key_handler(key),

            DisplayEvent::SendCommand(command) => self.command_handler(&command),
        }
        self.run_deferred();
    }
}
