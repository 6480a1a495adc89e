use bitflags::bitflags;

bitflags! {
    /// Represents the state of modifier keys, laid out like the backend's
    /// keyboard modifier mask.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ModMask: u32 {
        const Shift = 1;
        const CapsLock = 1 << 1;
        const Control = 1 << 2;
        /// Mod1
        const Alt = 1 << 3;
        /// Mod2
        const NumLock = 1 << 4;
        const Mod3 = 1 << 5;
        /// Mod4, the logo key
        const Super = 1 << 6;
        const Mod5 = 1 << 7;
    }
}

/// Modifier named by a keybinding token, if the token names one.
#[must_use]
pub fn into_mod(key: &str) -> Option<ModMask> {
    match key {
        "Mod" | "Super" | "Win" | "Logo" | "Mod4" => Some(ModMask::Super),
        "Shift" => Some(ModMask::Shift),
        "Ctrl" | "Control" => Some(ModMask::Control),
        "Alt" | "Mod1" => Some(ModMask::Alt),
        "Mod3" => Some(ModMask::Mod3),
        "Mod5" => Some(ModMask::Mod5),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logo_aliases_map_to_super() {
        for name in ["Mod", "Super", "Win", "Logo"] {
            assert_eq!(into_mod(name), Some(ModMask::Super));
        }
        assert_eq!(into_mod("Return"), None);
    }

    #[test]
    fn lock_keys_are_not_binding_modifiers() {
        assert_eq!(into_mod("CapsLock"), None);
        assert_eq!(into_mod("NumLock"), None);
        assert_eq!(into_mod("Mod1"), Some(ModMask::Alt));
    }
}
