//! Key name resolution for keybindings, backed by libxkbcommon.
use xkbcommon::xkb;

pub type Keysym = u32;

pub const XK_SPACE: Keysym = 0x0020;
pub const XK_0: Keysym = 0x0030;
pub const XK_A: Keysym = 0x0061;
pub const XK_RETURN: Keysym = 0xff0d;
pub const XK_ESCAPE: Keysym = 0xff1b;
pub const XK_F1: Keysym = 0xffbe;

const NO_SYMBOL: Keysym = 0;

/// Resolves an XKB key name, ignoring case. When a name matches in more
/// than one case, the lowercase keysym wins.
#[must_use]
pub fn into_keysym(name: &str) -> Option<Keysym> {
    if name.is_empty() {
        return None;
    }
    let keysym = xkb::keysym_from_name(name, xkb::KEYSYM_CASE_INSENSITIVE).raw();
    (keysym != NO_SYMBOL).then_some(keysym)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(into_keysym("Return"), Some(XK_RETURN));
        assert_eq!(into_keysym("RETURN"), Some(XK_RETURN));
        assert_eq!(into_keysym("Q"), Some(XK_A + 16));
        assert_eq!(into_keysym("q"), Some(XK_A + 16));
        assert_eq!(into_keysym("7"), Some(XK_0 + 7));
        assert_eq!(into_keysym("space"), Some(XK_SPACE));
    }

    #[test]
    fn function_keys_are_contiguous() {
        assert_eq!(into_keysym("F1"), Some(XK_F1));
        assert_eq!(into_keysym("f12"), Some(XK_F1 + 11));
    }

    #[test]
    fn standard_xkb_names_resolve() {
        assert_eq!(into_keysym("KP_Enter"), Some(0xff8d));
        assert_eq!(into_keysym("Caps_Lock"), Some(0xffe5));
        assert_eq!(into_keysym("Super_L"), Some(0xffeb));
        assert_eq!(into_keysym("plus"), Some(0x002b));
        assert_eq!(into_keysym("Print"), Some(0xff61));
        assert_eq!(into_keysym("Page_Up"), Some(0xff55));
        assert_eq!(into_keysym("XF86AudioMicMute"), Some(0x1008_ffb2));
    }

    #[test]
    fn unknown_names_resolve_to_nothing() {
        assert_eq!(into_keysym("NotAKey"), None);
        assert_eq!(into_keysym(""), None);
    }
}
