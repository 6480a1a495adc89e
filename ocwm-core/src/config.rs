//! The seam between the session core and the configuration source that
//! registers keybindings and hooks.
use crate::command::Command;
use crate::errors::Result;
use crate::hooks::HookBus;
use crate::keybindings::Keybindings;
use std::fs::File;
use std::path::{Path, PathBuf};

pub trait Config {
    /// Candidate configuration files, most preferred first.
    fn search_paths(&self) -> Vec<PathBuf>;

    /// Runs the configuration at `path`, registering into the staging set.
    ///
    /// # Errors
    ///
    /// Any error leaves the live registrations untouched.
    fn load(&self, path: &Path, registrations: &mut Registrations) -> Result<()>;

    /// The first candidate that exists and can be read.
    fn locate(&self) -> Option<PathBuf> {
        self.search_paths()
            .into_iter()
            .find(|path| File::open(path).is_ok())
    }
}

/// Everything a configuration run registers. Built fresh on every load and
/// swapped in only when the run succeeds.
#[derive(Debug, Default)]
pub struct Registrations {
    pub keybindings: Keybindings,
    pub hooks: HookBus,
    /// Run once after the registrations go live.
    pub commands: Vec<Command>,
}

#[cfg(test)]
pub use tests::TestConfig;

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::errors::OcwmError;
    use crate::hooks::HookEvent;
    use crate::Callback;

    /// In-memory configuration for tests.
    #[derive(Debug, Default)]
    pub struct TestConfig {
        pub keybinds: Vec<(String, Vec<Command>)>,
        pub hooks: Vec<(HookEvent, Vec<Command>)>,
        pub commands: Vec<Command>,
        pub fail: bool,
    }

    impl Config for TestConfig {
        fn search_paths(&self) -> Vec<PathBuf> {
            vec![PathBuf::from("test-config")]
        }

        fn locate(&self) -> Option<PathBuf> {
            self.search_paths().into_iter().next()
        }

        fn load(&self, path: &Path, registrations: &mut Registrations) -> Result<()> {
            for (binding, commands) in &self.keybinds {
                let commands = commands.clone();
                registrations
                    .keybindings
                    .register_str(binding, Callback::new(move |_| Ok(commands.clone())))?;
            }
            for (event, commands) in &self.hooks {
                let commands = commands.clone();
                registrations
                    .hooks
                    .register(*event, Callback::new(move |_| Ok(commands.clone())));
            }
            if self.fail {
                return Err(OcwmError::Config {
                    path: path.to_owned(),
                    reason: "failing on purpose".to_owned(),
                });
            }
            registrations.commands.extend(self.commands.iter().cloned());
            Ok(())
        }
    }

    #[test]
    fn locate_should_skip_missing_files() {
        struct Missing;
        impl Config for Missing {
            fn search_paths(&self) -> Vec<PathBuf> {
                vec![
                    PathBuf::from("/nonexistent/ocwm/config.toml"),
                    PathBuf::from("Cargo.toml"),
                ]
            }
            fn load(&self, _: &Path, _: &mut Registrations) -> Result<()> {
                Ok(())
            }
        }
        assert_eq!(Missing.locate(), Some(PathBuf::from("Cargo.toml")));
    }
}
