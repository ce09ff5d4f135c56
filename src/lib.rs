//! Bidirectional codec between keybinding strings and key chords
//!
//! This crate converts human-readable keybinding strings like
//! `"ctrl+shift+f1"` to and from a structured [`KeyChord`] value: a
//! modifier set plus a virtual-key code. It is the textual boundary for a
//! configuration layer that reads keybindings from text and writes them
//! back; dispatching a chord to an action is the caller's business.
//!
//! # Architecture
//!
//! ```text
//! config text → parse_chord() → KeyChord → format_chord() → canonical text
//! ```
//!
//! # Usage
//!
//! ```
//! use keychord::{format_chord, parse_chord, KeyChord, Modifiers};
//!
//! let chord = parse_chord("shift+ctrl+f5").unwrap();
//! assert!(chord.modifiers().contains(Modifiers::CTRL | Modifiers::SHIFT));
//!
//! // Output is canonical: fixed modifier order, table-canonical key name.
//! assert_eq!(format_chord(chord), "ctrl+shift+f5");
//! ```
//!
//! Parsing rejects malformed strings with an error; formatting never fails
//! but returns the empty string for a chord whose key code has no printable
//! name. Both operations are pure and touch only the compiled-in name
//! table, so they are freely usable from concurrent callers.

mod codec;
mod table;
mod types;

pub use codec::{format_chord, parse_chord, KeyChordError};
pub use table::vk;
pub use types::{KeyChord, Modifiers};
