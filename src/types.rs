//! Core value types: Modifiers and KeyChord

/// Modifier keys as a bitfield for efficient storage and comparison
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(0b001);
    pub const ALT: Modifiers = Modifiers(0b010);
    pub const SHIFT: Modifiers = Modifiers(0b100);

    /// Create modifiers from individual flags
    pub const fn new(ctrl: bool, alt: bool, shift: bool) -> Self {
        let mut bits = 0u8;
        if ctrl {
            bits |= 0b001;
        }
        if alt {
            bits |= 0b010;
        }
        if shift {
            bits |= 0b100;
        }
        Modifiers(bits)
    }

    /// Check if ctrl is held
    #[inline]
    pub const fn ctrl(self) -> bool {
        self.0 & 0b001 != 0
    }

    /// Check if alt is held
    #[inline]
    pub const fn alt(self) -> bool {
        self.0 & 0b010 != 0
    }

    /// Check if shift is held
    #[inline]
    pub const fn shift(self) -> bool {
        self.0 & 0b100 != 0
    }

    /// Check if no modifiers are held
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Combine two modifier sets
    #[inline]
    pub const fn union(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 | other.0)
    }

    /// Check if this contains all modifiers in other
    #[inline]
    pub const fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

/// A single keybinding: a modifier set plus a virtual-key code
///
/// `vkey` is an untyped `i32`; `0` means "no key assigned". The chord puts
/// no range restriction on it; resolving a code to a printable name is the
/// formatter's job, not the value type's.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct KeyChord {
    modifiers: Modifiers,
    vkey: i32,
}

impl KeyChord {
    /// Create a chord from individual modifier flags and a key code
    pub const fn new(ctrl: bool, alt: bool, shift: bool, vkey: i32) -> Self {
        Self {
            modifiers: Modifiers::new(ctrl, alt, shift),
            vkey,
        }
    }

    /// Create a chord from an already-built modifier set and a key code
    pub const fn with_modifiers(modifiers: Modifiers, vkey: i32) -> Self {
        Self { modifiers, vkey }
    }

    /// Get the modifier set
    #[inline]
    pub const fn modifiers(self) -> Modifiers {
        self.modifiers
    }

    /// Replace the modifier set
    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
    }

    /// Get the virtual-key code
    #[inline]
    pub const fn vkey(self) -> i32 {
        self.vkey
    }

    /// Replace the virtual-key code
    pub fn set_vkey(&mut self, vkey: i32) {
        self.vkey = vkey;
    }
}
