//! ANSI escape stripping for trigger matching.

use vte::{Parser, Perform};

/// Collects printable characters and discards control sequences.
struct Printable {
    text: String,
}

impl Perform for Printable {
    fn print(&mut self, c: char) {
        self.text.push(c);
    }

    fn execute(&mut self, byte: u8) {
        if byte == b'\t' {
            self.text.push('\t');
        }
    }
}

/// Remove ANSI escape sequences (colors, cursor movement, OSC titles) from `data`.
///
/// Invalid UTF-8 is replaced with U+FFFD. Control bytes other than tab are dropped.
pub fn strip_ansi(data: &[u8]) -> Vec<u8> {
    let mut parser = Parser::new();
    let mut printable = Printable {
        text: String::with_capacity(data.len()),
    };
    parser.advance(&mut printable, data);
    printable.text.into_bytes()
}
