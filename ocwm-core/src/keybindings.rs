//! Maps modifier + key combinations to configuration callbacks.
use crate::callback::Callback;
use crate::command::Command;
use crate::errors::{OcwmError, Result};
use crate::utils::keysym_lookup::{into_keysym, Keysym, XK_ESCAPE};
use crate::utils::modmask_lookup::{into_mod, ModMask};

#[derive(Debug, Clone)]
pub struct Keybinding {
    pub modmask: ModMask,
    pub keysym: Keysym,
    pub callback: Callback,
}

/// Registered bindings in registration order. Duplicates are allowed; the
/// first one registered wins.
#[derive(Debug, Default, Clone)]
pub struct Keybindings {
    bindings: Vec<Keybinding>,
}

impl Keybindings {
    pub fn register(&mut self, modmask: ModMask, keysym: Keysym, callback: Callback) {
        self.bindings.push(Keybinding {
            modmask,
            keysym,
            callback,
        });
    }

    /// Registers a binding written as `"Mod+Shift+Return"`.
    ///
    /// # Errors
    ///
    /// Will error if the binding names no key or an unknown one.
    pub fn register_str(&mut self, binding: &str, callback: Callback) -> Result<()> {
        let (modmask, keysym) = parse_keybind(binding)?;
        self.register(modmask, keysym, callback);
        Ok(())
    }

    /// First binding matching exactly, if any.
    #[must_use]
    pub fn resolve(&self, modmask: ModMask, keysym: Keysym) -> Option<&Callback> {
        self.bindings
            .iter()
            .find(|b| b.modmask == modmask && b.keysym == keysym)
            .map(|b| &b.callback)
    }

    pub fn clear_all(&mut self) {
        self.bindings.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Keybinding> {
        self.bindings.iter()
    }
}

/// Splits a binding on `+`. Modifier names set bits in the mask, the
/// remaining token is the key.
///
/// # Errors
///
/// Will error if no key is named or the key name is unknown.
pub fn parse_keybind(binding: &str) -> Result<(ModMask, Keysym)> {
    let invalid = |reason: &str| OcwmError::InvalidKeybind {
        binding: binding.to_owned(),
        reason: reason.to_owned(),
    };

    let mut modmask = ModMask::empty();
    let mut key = None;
    for token in binding.split('+').map(str::trim).filter(|t| !t.is_empty()) {
        match into_mod(token) {
            Some(m) => modmask |= m,
            None => key = Some(token),
        }
    }
    let key = key.ok_or_else(|| invalid("no key given"))?;
    let keysym = into_keysym(key).ok_or_else(|| invalid("unknown key name"))?;
    Ok((modmask, keysym))
}

/// Bindings that work without any configuration.
#[must_use]
pub fn builtin_command(modmask: ModMask, keysym: Keysym) -> Option<Command> {
    if modmask == ModMask::Alt && keysym == XK_ESCAPE {
        return Some(Command::Quit);
    }
    None
}
