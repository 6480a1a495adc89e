//! The TOML configuration file.

mod checks;
mod keybind;

pub use self::keybind::{Keybind, Modifier, MODKEY};

use crate::{target_view, BaseCommand};
use anyhow::{Context, Result};
use ocwm_core::animation::{DEFAULT_CLOSE_DURATION, DEFAULT_OPEN_DURATION};
use ocwm_core::hooks::HookEvent;
use ocwm_core::layouts::Layout;
use ocwm_core::{Callback, Command, OcwmError, Registrations, View};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use xdg::BaseDirectories;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "OCWM_CONFIG";
const CONFIG_FILE_NAME: &str = "config.toml";
const SYSTEM_CONFIG: &str = "/etc/ocwm/config.toml";
const LOCAL_CONFIG: &str = "config/config.toml";

/// General configuration
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    /// Modifier substituted for `modkey` in keybinds.
    pub modkey: String,
    pub effects: Effects,
    pub workspaces: Vec<WorkspaceConfig>,
    pub keybind: Vec<Keybind>,
    /// Event name to the commands run when it fires.
    pub hooks: BTreeMap<String, Vec<Action>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            modkey: "Mod4".to_owned(),
            effects: Effects::default(),
            workspaces: vec![],
            keybind: vec![],
            hooks: BTreeMap::new(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Effects {
    pub enabled: bool,
    /// Milliseconds.
    pub open_duration: i64,
    /// Milliseconds.
    pub close_duration: i64,
}

impl Default for Effects {
    fn default() -> Self {
        Self {
            enabled: true,
            open_duration: i64::from(DEFAULT_OPEN_DURATION),
            close_duration: i64::from(DEFAULT_CLOSE_DURATION),
        }
    }
}

/// Per-workspace layout settings. Omitted fields keep their defaults.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct WorkspaceConfig {
    pub id: i32,
    pub layout: Option<String>,
    pub master_ratio: Option<f32>,
    pub master_count: Option<i32>,
    pub gap: Option<i32>,
}

/// A command with its argument, as written in hooks.
///
/// `app_id` and `title` restrict the action to matching views: the app id
/// must be equal, the title must contain the given text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub command: BaseCommand,
    #[serde(default)]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Action {
    /// Whether the action applies to `view`. Unfiltered actions apply even
    /// without a view.
    #[must_use]
    pub fn matches(&self, view: Option<&View>) -> bool {
        let app_id = match &self.app_id {
            Some(wanted) => view.and_then(|v| v.app_id.as_deref()) == Some(wanted.as_str()),
            None => true,
        };
        let title = match &self.title {
            Some(wanted) => view
                .and_then(|v| v.title.as_deref())
                .is_some_and(|title| title.contains(wanted.as_str())),
            None => true,
        };
        app_id && title
    }
}

impl Config {
    /// Commands run once the configuration is live: effect settings first,
    /// then workspace settings in file order.
    ///
    /// # Errors
    ///
    /// Will error if a workspace names an unknown layout.
    pub fn startup_commands(&self) -> Result<Vec<Command>> {
        let mut commands = vec![
            Command::EnableEffects(self.effects.enabled),
            Command::SetAnimationDurations {
                open: self.effects.open_duration,
                close: Some(self.effects.close_duration),
            },
        ];
        for ws in &self.workspaces {
            let workspace = Some(ws.id);
            if let Some(layout) = &ws.layout {
                let layout = Layout::from_str(layout)
                    .with_context(|| format!("workspace {}", ws.id))?;
                commands.push(Command::SetLayout { workspace, layout });
            }
            if let Some(ratio) = ws.master_ratio {
                commands.push(Command::SetMasterRatio { workspace, ratio });
            }
            if let Some(count) = ws.master_count {
                commands.push(Command::SetMasterCount { workspace, count });
            }
            if let Some(gap) = ws.gap {
                commands.push(Command::SetGap { workspace, gap });
            }
        }
        Ok(commands)
    }

    /// Registers every keybind, hook and startup command.
    ///
    /// # Errors
    ///
    /// Stops at the first entry that does not convert.
    pub fn register(&self, registrations: &mut Registrations) -> Result<()> {
        for keybind in &self.keybind {
            let (modmask, keysym, callback) = keybind
                .try_convert_to_core_keybind(&self.modkey)
                .with_context(|| format!("invalid keybind {keybind:?}"))?;
            registrations.keybindings.register(modmask, keysym, callback);
        }
        for (name, actions) in &self.hooks {
            let event = HookEvent::from_str(name)?;
            registrations.hooks.register(event, hook_callback(actions)?);
        }
        registrations.commands.extend(self.startup_commands()?);
        Ok(())
    }
}

/// Hook commands act on the view the event is about, skipping actions whose
/// filters it does not match.
fn hook_callback(actions: &[Action]) -> Result<Callback> {
    let actions = actions
        .iter()
        .map(|action| Ok((action.clone(), action.command.to_command(&action.value)?)))
        .collect::<Result<Vec<_>>>()?;
    Ok(Callback::new(move |view| {
        Ok(actions
            .iter()
            .filter(|(action, _)| action.matches(view))
            .map(|(_, command)| match view {
                Some(view) => target_view(command.clone(), view.handle),
                None => command.clone(),
            })
            .collect())
    }))
}

/// # Errors
///
/// Will error if the file cannot be read or is not a valid configuration.
pub fn load_from_file(path: &Path) -> Result<Config> {
    tracing::debug!("Loading config file {}", path.display());
    let contents = fs::read_to_string(path)
        .with_context(|| format!("could not read {}", path.display()))?;
    let config = toml::from_str(&contents)
        .with_context(|| format!("could not parse {}", path.display()))?;
    Ok(config)
}

/// Finds and loads the configuration file for the session core.
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    /// Given on the command line; replaces the search path.
    explicit: Option<PathBuf>,
}

impl ConfigFile {
    #[must_use]
    pub const fn new(explicit: Option<PathBuf>) -> Self {
        Self { explicit }
    }
}

impl ocwm_core::Config for ConfigFile {
    fn search_paths(&self) -> Vec<PathBuf> {
        if let Some(path) = &self.explicit {
            return vec![path.clone()];
        }
        let mut paths = vec![];
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            match shellexpand::full(&path) {
                Ok(expanded) => paths.push(PathBuf::from(expanded.as_ref())),
                Err(err) => tracing::warn!("Could not expand {}: {}", CONFIG_ENV, err),
            }
        }
        match BaseDirectories::with_prefix("ocwm") {
            Ok(dirs) => paths.push(dirs.get_config_file(CONFIG_FILE_NAME)),
            Err(err) => tracing::warn!("No XDG config directory: {}", err),
        }
        paths.push(PathBuf::from(SYSTEM_CONFIG));
        paths.push(PathBuf::from(LOCAL_CONFIG));
        paths
    }

    fn load(&self, path: &Path, registrations: &mut Registrations) -> ocwm_core::Result<()> {
        let to_error = |err: anyhow::Error| OcwmError::Config {
            path: path.to_owned(),
            reason: format!("{err:#}"),
        };
        let config = load_from_file(path).map_err(to_error)?;
        config.register(registrations).map_err(to_error)
    }
}
