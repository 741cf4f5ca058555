//! Alphabet parameters shared by every stage of the encoder.

use crate::error::{HuffmanError, Result};

/// Describes the symbol space an encoding run works over.
///
/// Every component receives the same configuration by reference, so the
/// frequency pass, the header and the content stream always agree on which
/// symbols exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphabetConfig {
    /// Number of symbols in the alphabet. Symbols are `0..alphabet_size`.
    pub alphabet_size: usize,
    /// Smallest byte value accepted from the input.
    pub min_symbol: u8,
    /// Synthetic symbol appended once after the content.
    pub end_of_stream: u8,
    /// Byte that separates lines; re-emitted after every line read.
    pub line_terminator: u8,
    /// Upper bound on the header's length-field width.
    pub max_length_bits: u32,
}

impl AlphabetConfig {
    /// 7-bit ASCII with ETX as the end-of-stream marker.
    pub const fn ascii() -> Self {
        AlphabetConfig {
            alphabet_size: 128,
            min_symbol: 0x04,
            end_of_stream: 0x03,
            line_terminator: b'\n',
            max_length_bits: 8,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.alphabet_size == 0 || self.alphabet_size > 256 {
            return Err(HuffmanError::InvalidConfig(format!(
                "alphabet size {} must be in 1..=256",
                self.alphabet_size
            )));
        }
        if self.end_of_stream as usize >= self.alphabet_size {
            return Err(HuffmanError::InvalidConfig(format!(
                "end-of-stream symbol 0x{:02x} lies outside the alphabet",
                self.end_of_stream
            )));
        }
        if self.accepts(self.end_of_stream) {
            return Err(HuffmanError::InvalidConfig(format!(
                "end-of-stream symbol 0x{:02x} collides with input symbols",
                self.end_of_stream
            )));
        }
        if !self.accepts(self.line_terminator) {
            return Err(HuffmanError::InvalidConfig(format!(
                "line terminator 0x{:02x} is not an accepted input symbol",
                self.line_terminator
            )));
        }
        if self.max_length_bits == 0 || self.max_length_bits > 8 {
            return Err(HuffmanError::InvalidConfig(format!(
                "length field limit {} must be in 1..=8",
                self.max_length_bits
            )));
        }
        Ok(())
    }

    /// Whether `byte` may appear in the input stream.
    pub fn accepts(&self, byte: u8) -> bool {
        byte >= self.min_symbol && (byte as usize) < self.alphabet_size
    }

    pub fn symbols(&self) -> impl Iterator<Item = u8> {
        // alphabet_size <= 256 once validated
        (0..self.alphabet_size).map(|s| s as u8)
    }
}

impl Default for AlphabetConfig {
    fn default() -> Self {
        Self::ascii()
    }
}
