use crate::config::{Config, Registrations};
use crate::display_servers::DisplayServer;
use crate::errors::{OcwmError, Result};
use crate::state::State;
use crate::utils::child_process::{self, Children};
use std::path::PathBuf;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Maintains current program state.
#[derive(Debug)]
pub struct Manager<C, SERVER> {
    pub state: State,
    pub config: C,
    pub display_server: SERVER,

    pub(crate) children: Children,
    pub(crate) reap_requested: Arc<AtomicBool>,
    pub(crate) quit_requested: Arc<AtomicBool>,
    /// File the live registrations were loaded from.
    pub(crate) config_path: Option<PathBuf>,
}

impl<C, SERVER> Manager<C, SERVER>
where
    C: Config,
    SERVER: DisplayServer,
{
    /// # Errors
    ///
    /// Will error if the display server cannot be acquired.
    pub fn new(config: C) -> Result<Self> {
        let display_server = SERVER::new()?;
        Ok(Self::with_display_server(config, display_server))
    }

    pub fn with_display_server(config: C, display_server: SERVER) -> Self {
        Self {
            state: State::new(),
            config,
            display_server,
            children: Children::default(),
            reap_requested: Arc::default(),
            quit_requested: Arc::default(),
            config_path: None,
        }
    }

    pub fn register_child_hook(&self) {
        child_process::register_child_hook(self.reap_requested.clone());
    }

    pub fn register_quit_hook(&self) {
        child_process::register_quit_hook(&self.quit_requested);
    }

    pub fn quit(&self) {
        self.quit_requested.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_quitting(&self) -> bool {
        self.quit_requested.load(Ordering::SeqCst)
    }

    /// Runs the configuration and swaps its registrations in.
    ///
    /// The file loaded last is run again; when there is none the search path
    /// is walked. On error the live keybindings and hooks stay as they were.
    ///
    /// # Errors
    ///
    /// Will error if no configuration file is found or it fails to load.
    pub fn load_config(&mut self) -> Result<()> {
        let path = self
            .config_path
            .clone()
            .or_else(|| self.config.locate())
            .ok_or(OcwmError::NoConfig)?;

        let mut staged = Registrations::default();
        self.config.load(&path, &mut staged)?;

        tracing::info!(
            "Loaded {} keybindings and {} hooks from {}",
            staged.keybindings.len(),
            staged.hooks.len(),
            path.display()
        );
        self.config_path = Some(path);
        self.state.keybindings = staged.keybindings;
        self.state.hooks = staged.hooks;
        self.state.deferred.extend(staged.commands);
        Ok(())
    }

    pub fn reload_config(&mut self) {
        if let Err(err) = self.load_config() {
            tracing::error!("Reload failed, keeping the previous configuration: {}", err);
        }
    }

    /// Hands every queued action to the display server.
    pub fn flush_actions(&mut self) {
        while let Some(act) = self.state.actions.pop_front() {
            self.display_server.execute_action(act);
        }
    }

    /// Runs queued commands until none are left.
    pub fn run_deferred(&mut self) {
        while let Some(command) = self.state.deferred.pop_front() {
            self.command_handler(&command);
        }
    }

    /// Drains the display server until it has nothing more to report.
    pub fn process_events(&mut self) {
        loop {
            let events = self.display_server.get_next_events();
            if events.is_empty() {
                break;
            }
            for event in events {
                self.display_event_handler(event);
                self.flush_actions();
            }
        }
    }

    /// Tears the session down: configuration callbacks first, then
    /// animations, then workspaces, then the backend.
    pub fn shutdown(&mut self) {
        tracing::info!("Shutting down");
        self.state.keybindings.clear_all();
        self.state.hooks.clear_all();
        self.state.deferred.clear();
        self.state.animations.clear();
        self.state.workspaces.clear();
        self.state.actions.clear();
        self.display_server.shutdown();
    }
}

#[cfg(test)]
impl Manager<crate::config::TestConfig, crate::display_servers::HeadlessDisplayServer> {
    pub fn new_test() -> Self {
        Self::new_test_with(crate::config::TestConfig::default())
    }

    pub fn new_test_with(config: crate::config::TestConfig) -> Self {
        let display_server =
            crate::display_servers::HeadlessDisplayServer::with_output(1920, 1080)
                .without_frame_clock();
        let mut manager = Self::with_display_server(config, display_server);
        manager.process_events();
        manager
    }

    /// Opens and maps a 640x480 client.
    pub fn open_test_view(&mut self) -> crate::models::ViewHandle {
        let handle = self.display_server.open_view(None, None, 640, 480);
        self.process_events();
        handle
    }
}
