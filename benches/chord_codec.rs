//! Benchmarks for chord parsing and formatting
//!
//! Run with: cargo bench chord_codec

use keychord::{format_chord, parse_chord, KeyChord};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

// ============================================================================
// Parsing
// ============================================================================

#[divan::bench(args = ["a", "ctrl+c", "ctrl+alt+shift+f24"])]
fn parse_quick_path(input: &str) {
    divan::black_box(parse_chord(divan::black_box(input)).unwrap());
}

#[divan::bench(args = ["backspace", "numpad_9", "f24"])]
fn parse_table_path(input: &str) {
    // f24 and the late OEM entries are the worst case for the linear scan.
    divan::black_box(parse_chord(divan::black_box(input)).unwrap());
}

#[divan::bench]
fn parse_invalid(bencher: divan::Bencher) {
    bencher.bench(|| divan::black_box(parse_chord(divan::black_box("ctrl+bogus")).is_err()));
}

// ============================================================================
// Formatting
// ============================================================================

#[divan::bench]
fn format_letter_chord(bencher: divan::Bencher) {
    let chord = parse_chord("ctrl+shift+s").unwrap();
    bencher.bench(|| divan::black_box(format_chord(divan::black_box(chord))));
}

#[divan::bench]
fn format_table_chord(bencher: divan::Bencher) {
    let chord = parse_chord("ctrl+alt+f24").unwrap();
    bencher.bench(|| divan::black_box(format_chord(divan::black_box(chord))));
}

#[divan::bench]
fn format_unresolvable_chord(bencher: divan::Bencher) {
    let chord = KeyChord::new(true, false, false, 0);
    bencher.bench(|| divan::black_box(format_chord(divan::black_box(chord))));
}
