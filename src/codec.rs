//! Parsing and formatting of chord strings
//!
//! Strings fit the shape `[ctrl+][alt+][shift+]<key>`, where each modifier
//! is optional and `<key>` is a digit, a letter, or one of the names in the
//! key-name table. Parsing accepts modifiers in any order; formatting always
//! emits them as ctrl, alt, shift.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::table;
use crate::types::{KeyChord, Modifiers};

/// Errors that can occur when parsing a chord string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyChordError {
    /// The string is not a well-formed chord (too many tokens, or a token
    /// that is neither a modifier nor a known key)
    InvalidChord(String),
}

impl fmt::Display for KeyChordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyChordError::InvalidChord(s) => write!(f, "invalid key chord: \"{}\"", s),
        }
    }
}

impl std::error::Error for KeyChordError {}

/// Parse a chord string like "ctrl+shift+f1" into a [`KeyChord`]
///
/// Modifier tokens are matched case-sensitively in their lowercase spelling
/// only; anything else is treated as a key token. A key token resolves
/// either through the direct character ranges (`0-9`, `a-z`, `A-Z`) or
/// through the key-name table. Repeated modifiers are idempotent, and when
/// several key tokens appear the last one wins.
pub fn parse_chord(s: &str) -> Result<KeyChord, KeyChordError> {
    let parts: Vec<&str> = s.split('+').collect();

    // At most three modifiers plus one key token is well-formed.
    if parts.len() > 4 {
        return Err(KeyChordError::InvalidChord(s.to_string()));
    }

    let mut modifiers = Modifiers::NONE;
    let mut vkey = 0i32;

    for part in parts {
        match part {
            "ctrl" => modifiers = modifiers | Modifiers::CTRL,
            "alt" => modifiers = modifiers | Modifiers::ALT,
            "shift" => modifiers = modifiers | Modifiers::SHIFT,
            _ => {
                vkey = parse_key_token(part)
                    .ok_or_else(|| KeyChordError::InvalidChord(s.to_string()))?;
            }
        }
    }

    Ok(KeyChord::with_modifiers(modifiers, vkey))
}

/// Resolve a single key token to its virtual-key code
fn parse_key_token(token: &str) -> Option<i32> {
    let mut chars = token.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        // Quick path: character ranges whose vkey is the character itself
        // (letters are stored as the uppercase code).
        match ch {
            '0'..='9' | 'A'..='Z' => return Some(ch as i32),
            'a'..='z' => return Some(ch.to_ascii_uppercase() as i32),
            _ => {}
        }
    }

    table::vkey_for_name(token)
}

/// Format a [`KeyChord`] back into its canonical chord string
///
/// Modifiers are emitted in fixed ctrl, alt, shift order however the chord
/// was built. If the vkey resolves to no printable name the whole result is
/// discarded, including the modifier prefix already built, and the empty
/// string is returned. The empty string is the only failure signal.
pub fn format_chord(chord: KeyChord) -> String {
    let mut out = String::new();

    if chord.modifiers().ctrl() {
        out.push_str("ctrl+");
    }
    if chord.modifiers().alt() {
        out.push_str("alt+");
    }
    if chord.modifiers().shift() {
        out.push_str("shift+");
    }

    let vkey = chord.vkey();
    if ('0' as i32..='9' as i32).contains(&vkey) {
        out.push(vkey as u8 as char);
    } else if ('A' as i32..='Z' as i32).contains(&vkey) {
        out.push((vkey as u8).to_ascii_lowercase() as char);
    } else if let Some(name) = table::name_for_vkey(vkey) {
        out.push_str(name);
    } else {
        tracing::warn!(vkey, "no printable name for key code, dropping chord");
        return String::new();
    }

    out
}

impl FromStr for KeyChord {
    type Err = KeyChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_chord(s)
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_chord(*self))
    }
}

// Chords serialize as their canonical text form so a serde-based config
// layer round-trips them as plain strings.
impl Serialize for KeyChord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_chord(*self))
    }
}

impl<'de> Deserialize<'de> for KeyChord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_chord(&s).map_err(D::Error::custom)
    }
}
