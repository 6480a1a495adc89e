use crate::BaseCommand;
use anyhow::{Context, Result};
use ocwm_core::keybindings::parse_keybind;
use ocwm_core::{Callback, Command, ModMask};
use serde::{Deserialize, Serialize};

/// Placeholder modifier replaced by the configured `modkey`.
pub const MODKEY: &str = "modkey";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Keybind {
    pub command: BaseCommand,
    #[serde(default)]
    pub value: String,
    pub modifier: Option<Modifier>,
    pub key: String,
}

impl Keybind {
    /// The binding in `"Mod+Shift+Return"` form, `modkey` substituted.
    #[must_use]
    pub fn binding(&self, modkey: &str) -> String {
        let mut tokens: Vec<String> = self
            .modifier
            .iter()
            .flatten()
            .map(|m| if m == MODKEY { modkey.to_owned() } else { m })
            .collect();
        tokens.push(self.key.clone());
        tokens.join("+")
    }

    /// # Errors
    ///
    /// Will error if the key or a modifier is unknown, or the value does not
    /// suit the command.
    pub fn try_convert_to_core_keybind(&self, modkey: &str) -> Result<(ModMask, u32, Callback)> {
        let binding = self.binding(modkey);
        let (modmask, keysym) = parse_keybind(&binding)?;
        for token in self.modifier.iter().flatten() {
            if token != MODKEY && ocwm_core::utils::modmask_lookup::into_mod(&token).is_none() {
                anyhow::bail!("modifier `{token}` is not valid");
            }
        }
        let command = self
            .command
            .to_command(&self.value)
            .with_context(|| format!("keybind {binding}"))?;
        Ok((modmask, keysym, command_callback(vec![command])))
    }
}

/// A callback returning the same commands on every call.
pub(crate) fn command_callback(commands: Vec<Command>) -> Callback {
    Callback::new(move |_| Ok(commands.clone()))
}

#[derive(Serialize, Deserialize, Debug, Clone, Hash, Eq, PartialEq)]
#[serde(untagged)]
pub enum Modifier {
    Single(String),
    List(Vec<String>),
}

impl Modifier {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(single) => single.is_empty(),
            Self::List(list) => list.is_empty(),
        }
    }

    pub fn sort_unstable(&mut self) {
        match self {
            Self::Single(_) => {}
            Self::List(modifiers) => modifiers.sort_unstable(),
        }
    }
}

impl From<Modifier> for Vec<String> {
    fn from(m: Modifier) -> Self {
        match m {
            Modifier::Single(modifier) => vec![modifier],
            Modifier::List(modifiers) => modifiers,
        }
    }
}

impl IntoIterator for &Modifier {
    type Item = String;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        let ms = match self {
            Modifier::Single(m) => vec![m.clone()],
            Modifier::List(ms) => ms.clone(),
        };
        ms.into_iter()
    }
}

impl From<&str> for Modifier {
    fn from(m: &str) -> Self {
        Self::Single(m.to_owned())
    }
}

impl std::fmt::Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single(modifier) => write!(f, "{modifier}"),
            Self::List(modifiers) => write!(f, "{}", modifiers.join("+")),
        }
    }
}
