use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::keybindings::builtin_command;
use crate::{DisplayAction, KeyEvent, Manager, ModMask};

impl<C: Config, SERVER: DisplayServer> Manager<C, SERVER> {
    /// Runs the first binding any of the pressed key's keysyms resolves to,
    /// falling back to the built-in bindings. Unhandled keys and all
    /// releases go to the focused client.
    pub fn key_handler(&mut self, key: KeyEvent) {
        if key.pressed && self.try_keybinding(&key) {
            return;
        }
        self.state.actions.push_back(DisplayAction::ForwardKey(key));
    }

    fn try_keybinding(&mut self, key: &KeyEvent) -> bool {
        let modmask = clean_mask(key.modmask);
        for keysym in &key.keysyms {
            if let Some(callback) = self.state.keybindings.resolve(modmask, *keysym).cloned() {
                self.state.run_callback(&callback);
                return true;
            }
            if let Some(command) = builtin_command(modmask, *keysym) {
                self.state.deferred.push_back(command);
                return true;
            }
        }
        false
    }
}

/// Lock modifiers never take part in matching.
fn clean_mask(modmask: ModMask) -> ModMask {
    modmask.difference(ModMask::CapsLock | ModMask::NumLock)
}
