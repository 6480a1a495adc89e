use super::{Config, Modifier, MODKEY};
use ocwm_core::hooks::HookEvent;
use ocwm_core::state::DEFAULT_WORKSPACE_COUNT;
use std::collections::HashSet;
use std::str::FromStr;

impl Config {
    /// Workspace settings must name existing workspaces, each at most once.
    #[must_use]
    pub fn check_workspace_ids(&self) -> Vec<String> {
        let mut problems = vec![];
        let mut seen = HashSet::new();
        for ws in &self.workspaces {
            if !(1..=DEFAULT_WORKSPACE_COUNT).contains(&ws.id) {
                problems.push(format!(
                    "Workspace id {} is out of range 1..={DEFAULT_WORKSPACE_COUNT}",
                    ws.id
                ));
            }
            if !seen.insert(ws.id) {
                problems.push(format!("Workspace id {} is configured twice", ws.id));
            }
        }
        problems
    }

    /// Check all keybinds to ensure that required values are provided,
    /// keys and modifiers are known and no combination is bound twice.
    #[must_use]
    pub fn check_keybinds(&self, verbose: bool) -> Vec<String> {
        let mut problems = vec![];
        let mut bindings = HashSet::new();
        for keybind in &self.keybind {
            if verbose {
                println!(
                    "Keybind: {:?} value field is empty: {}",
                    keybind,
                    keybind.value.is_empty()
                );
            }
            if let Err(err) = keybind.try_convert_to_core_keybind(&self.modkey) {
                problems.push(format!("{err:#} for keybind {keybind:?}"));
            }

            let mut modifier = keybind
                .modifier
                .clone()
                .unwrap_or_else(|| Modifier::List(vec![]));
            match &mut modifier {
                Modifier::Single(m) if m.as_str() == MODKEY => m.clone_from(&self.modkey),
                Modifier::List(list) => {
                    for m in list.iter_mut().filter(|m| m.as_str() == MODKEY) {
                        m.clone_from(&self.modkey);
                    }
                }
                Modifier::Single(_) => {}
            }
            modifier.sort_unstable();
            if let Some((conflict, _)) =
                bindings.replace((modifier.clone(), keybind.key.to_lowercase()))
            {
                problems.push(format!(
                    "Multiple commands bound to key combination {conflict} + {}",
                    keybind.key
                ));
            }
        }
        problems
    }

    #[must_use]
    pub fn check_hooks(&self) -> Vec<String> {
        let mut problems = vec![];
        for (name, actions) in &self.hooks {
            if let Err(err) = HookEvent::from_str(name) {
                problems.push(err.to_string());
            }
            for action in actions {
                if let Err(err) = action.command.to_command(&action.value) {
                    problems.push(format!("{err:#} in hook {name}"));
                }
            }
        }
        problems
    }
}
