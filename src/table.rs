//! Static key-name table mapping virtual-key codes to canonical names
//!
//! The table is ordered and searched linearly in both directions; the first
//! match wins. That ordering is load-bearing: `+`, `-` and `.` each name two
//! keys (the numpad operator and the OEM punctuation key), and the numpad
//! entry comes first.

/// Win32 virtual-key codes for every key the name table covers
///
/// Letters and digits are absent on purpose: their vkey IS the ASCII code of
/// the uppercase letter or digit, so the codec computes them directly.
pub mod vk {
    pub const BACK: i32 = 0x08;
    pub const TAB: i32 = 0x09;
    pub const RETURN: i32 = 0x0D;
    pub const ESCAPE: i32 = 0x1B;
    pub const SPACE: i32 = 0x20;
    pub const PRIOR: i32 = 0x21;
    pub const NEXT: i32 = 0x22;
    pub const END: i32 = 0x23;
    pub const HOME: i32 = 0x24;
    pub const LEFT: i32 = 0x25;
    pub const UP: i32 = 0x26;
    pub const RIGHT: i32 = 0x27;
    pub const DOWN: i32 = 0x28;
    pub const INSERT: i32 = 0x2D;
    pub const DELETE: i32 = 0x2E;
    pub const NUMPAD0: i32 = 0x60;
    pub const NUMPAD1: i32 = 0x61;
    pub const NUMPAD2: i32 = 0x62;
    pub const NUMPAD3: i32 = 0x63;
    pub const NUMPAD4: i32 = 0x64;
    pub const NUMPAD5: i32 = 0x65;
    pub const NUMPAD6: i32 = 0x66;
    pub const NUMPAD7: i32 = 0x67;
    pub const NUMPAD8: i32 = 0x68;
    pub const NUMPAD9: i32 = 0x69;
    pub const MULTIPLY: i32 = 0x6A;
    pub const ADD: i32 = 0x6B;
    pub const SUBTRACT: i32 = 0x6D;
    pub const DECIMAL: i32 = 0x6E;
    pub const DIVIDE: i32 = 0x6F;
    pub const F1: i32 = 0x70;
    pub const F2: i32 = 0x71;
    pub const F3: i32 = 0x72;
    pub const F4: i32 = 0x73;
    pub const F5: i32 = 0x74;
    pub const F6: i32 = 0x75;
    pub const F7: i32 = 0x76;
    pub const F8: i32 = 0x77;
    pub const F9: i32 = 0x78;
    pub const F10: i32 = 0x79;
    pub const F11: i32 = 0x7A;
    pub const F12: i32 = 0x7B;
    pub const F13: i32 = 0x7C;
    pub const F14: i32 = 0x7D;
    pub const F15: i32 = 0x7E;
    pub const F16: i32 = 0x7F;
    pub const F17: i32 = 0x80;
    pub const F18: i32 = 0x81;
    pub const F19: i32 = 0x82;
    pub const F20: i32 = 0x83;
    pub const F21: i32 = 0x84;
    pub const F22: i32 = 0x85;
    pub const F23: i32 = 0x86;
    pub const F24: i32 = 0x87;
    pub const OEM_PLUS: i32 = 0xBB;
    pub const OEM_COMMA: i32 = 0xBC;
    pub const OEM_MINUS: i32 = 0xBD;
    pub const OEM_PERIOD: i32 = 0xBE;
}

/// Ordered (code, canonical name) pairs for every nameable key
pub(crate) const VKEY_NAME_PAIRS: &[(i32, &str)] = &[
    (vk::BACK, "backspace"),
    (vk::TAB, "tab"),
    (vk::RETURN, "enter"),
    (vk::ESCAPE, "esc"),
    (vk::SPACE, "space"),
    (vk::PRIOR, "pgup"),
    (vk::NEXT, "pgdn"),
    (vk::END, "end"),
    (vk::HOME, "home"),
    (vk::LEFT, "left"),
    (vk::UP, "up"),
    (vk::RIGHT, "right"),
    (vk::DOWN, "down"),
    (vk::INSERT, "insert"),
    (vk::DELETE, "delete"),
    (vk::NUMPAD0, "numpad_0"),
    (vk::NUMPAD1, "numpad_1"),
    (vk::NUMPAD2, "numpad_2"),
    (vk::NUMPAD3, "numpad_3"),
    (vk::NUMPAD4, "numpad_4"),
    (vk::NUMPAD5, "numpad_5"),
    (vk::NUMPAD6, "numpad_6"),
    (vk::NUMPAD7, "numpad_7"),
    (vk::NUMPAD8, "numpad_8"),
    (vk::NUMPAD9, "numpad_9"),
    (vk::MULTIPLY, "*"),
    (vk::ADD, "+"),
    (vk::SUBTRACT, "-"),
    (vk::DECIMAL, "."),
    (vk::DIVIDE, "/"),
    (vk::F1, "f1"),
    (vk::F2, "f2"),
    (vk::F3, "f3"),
    (vk::F4, "f4"),
    (vk::F5, "f5"),
    (vk::F6, "f6"),
    (vk::F7, "f7"),
    (vk::F8, "f8"),
    (vk::F9, "f9"),
    (vk::F10, "f10"),
    (vk::F11, "f11"),
    (vk::F12, "f12"),
    (vk::F13, "f13"),
    (vk::F14, "f14"),
    (vk::F15, "f15"),
    (vk::F16, "f16"),
    (vk::F17, "f17"),
    (vk::F18, "f18"),
    (vk::F19, "f19"),
    (vk::F20, "f20"),
    (vk::F21, "f21"),
    (vk::F22, "f22"),
    (vk::F23, "f23"),
    (vk::F24, "f24"),
    (vk::OEM_PLUS, "+"),
    (vk::OEM_COMMA, ","),
    (vk::OEM_MINUS, "-"),
    (vk::OEM_PERIOD, "."),
];

/// Look up the key code for a canonical name (first match wins)
pub(crate) fn vkey_for_name(name: &str) -> Option<i32> {
    VKEY_NAME_PAIRS
        .iter()
        .find(|(_, n)| *n == name)
        .map(|(code, _)| *code)
}

/// Look up the canonical name for a key code (first match wins)
pub(crate) fn name_for_vkey(vkey: i32) -> Option<&'static str> {
    VKEY_NAME_PAIRS
        .iter()
        .find(|(code, _)| *code == vkey)
        .map(|(_, n)| *n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(vkey_for_name("backspace"), Some(vk::BACK));
        assert_eq!(vkey_for_name("f24"), Some(vk::F24));
        assert_eq!(vkey_for_name("numpad_7"), Some(vk::NUMPAD7));
        assert_eq!(vkey_for_name("bogus"), None);
    }

    #[test]
    fn test_lookup_by_code() {
        assert_eq!(name_for_vkey(vk::ESCAPE), Some("esc"));
        assert_eq!(name_for_vkey(vk::PRIOR), Some("pgup"));
        assert_eq!(name_for_vkey(0), None);
    }

    #[test]
    fn test_duplicate_names_resolve_to_numpad() {
        // "+", "-" and "." name both a numpad operator and an OEM key;
        // the numpad entry is listed first and must win by name.
        assert_eq!(vkey_for_name("+"), Some(vk::ADD));
        assert_eq!(vkey_for_name("-"), Some(vk::SUBTRACT));
        assert_eq!(vkey_for_name("."), Some(vk::DECIMAL));
    }

    #[test]
    fn test_duplicate_codes_keep_their_own_name() {
        // Both codes of a duplicated name still format to the same text.
        assert_eq!(name_for_vkey(vk::ADD), Some("+"));
        assert_eq!(name_for_vkey(vk::OEM_PLUS), Some("+"));
        assert_eq!(name_for_vkey(vk::OEM_COMMA), Some(","));
    }

    #[test]
    fn test_no_letters_or_digits_in_table() {
        for &(code, _) in VKEY_NAME_PAIRS {
            assert!(!(0x30..=0x39).contains(&code), "digit vkey in table");
            assert!(!(0x41..=0x5A).contains(&code), "letter vkey in table");
        }
    }
}
