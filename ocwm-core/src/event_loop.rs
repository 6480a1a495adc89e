use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::errors::{OcwmError, Result};
use crate::Manager;
use std::sync::atomic::Ordering;

impl<C: Config, SERVER: DisplayServer> Manager<C, SERVER> {
    /// Runs until a quit is requested, then shuts the session down.
    ///
    /// # Errors
    ///
    /// Currently never errors; configuration problems are logged.
    pub async fn start_event_loop(mut self) -> Result<()> {
        match self.load_config() {
            Ok(()) => self.run_deferred(),
            Err(OcwmError::NoConfig) => {
                tracing::warn!("No configuration found, only built-in keybindings are active");
            }
            Err(err) => tracing::error!("Failed to load configuration: {}", err),
        }
        self.flush_actions();

        //main event loop
        let mut event_buffer = vec![];
        while !self.is_quitting() {
            self.display_server.flush();

            tokio::select! {
                () = self.display_server.wait_readable(), if event_buffer.is_empty() => {
                    event_buffer.append(&mut self.display_server.get_next_events());
                    continue;
                }
                else => {
                    for event in event_buffer.drain(..) {
                        self.display_event_handler(event);
                        self.flush_actions();
                    }
                }
            }

            if self.reap_requested.swap(false, Ordering::SeqCst) {
                self.children.remove_finished_children();
            }
        }

        self.shutdown();
        Ok(())
    }
}
