use std::io::{BufRead, Write};

use tracing::debug;

use crate::bit_buffer::BitWriter;
use crate::canonical::CanonicalCodes;
use crate::config::AlphabetConfig;
use crate::error::{HuffmanError, Result};
use crate::frequency::for_each_symbol;

/// Encodes every symbol of `reader`, then the end-of-stream code.
///
/// Returns `(symbols, bytes)`: the number of input symbols encoded, line
/// terminators included, and the number of bytes written to `writer`.
pub fn encode_content<R, W>(
    reader: &mut R,
    codes: &CanonicalCodes,
    config: &AlphabetConfig,
    writer: W,
) -> Result<(u64, usize)>
where
    R: BufRead,
    W: Write,
{
    let mut bits = BitWriter::new(writer);
    let mut symbols = 0u64;

    for_each_symbol(reader, config, |symbol| {
        let code = codes
            .code(symbol)
            .ok_or(HuffmanError::UnsupportedSymbol(symbol))?;
        bits.push_bits(code)?;
        symbols += 1;
        Ok(())
    })?;

    let end = codes
        .code(config.end_of_stream)
        .ok_or(HuffmanError::UnsupportedSymbol(config.end_of_stream))?;
    bits.push_bits(end)?;

    let bit_count = bits.bit_count();
    let (_, written) = bits.finish()?;
    debug!(symbols, bits = bit_count, bytes = written, "encoded content");
    Ok((symbols, written))
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use super::*;

    fn codes_for(lengths: &[(u8, usize)]) -> CanonicalCodes {
        let mut table = vec![0usize; 128];
        for &(symbol, len) in lengths {
            table[symbol as usize] = len;
        }
        CanonicalCodes::from_lengths(&table)
    }

    #[test]
    fn encodes_symbols_then_end_of_stream() {
        // ETX=00 LF=01 a=10 b=11
        let codes = codes_for(&[(0x03, 2), (b'\n', 2), (b'a', 2), (b'b', 2)]);
        let mut out = Vec::new();

        let (symbols, written) = encode_content(
            &mut Cursor::new(b"ab\n"),
            &codes,
            &AlphabetConfig::ascii(),
            &mut out,
        )
        .unwrap();

        assert_eq!(symbols, 3);
        assert_eq!(written, 1);
        // 10 11 01 00
        assert_eq!(out, vec![0b1011_0100]);
    }

    #[test]
    fn pads_final_byte() {
        // a=0 b=10 ETX=110 LF=111
        let codes = codes_for(&[(b'a', 1), (b'b', 2), (0x03, 3), (b'\n', 3)]);
        let mut out = Vec::new();

        encode_content(
            &mut Cursor::new(b"aaaab\n"),
            &codes,
            &AlphabetConfig::ascii(),
            &mut out,
        )
        .unwrap();

        // 0 0 0 0 10 111 110 -> 00001011 1110_0000
        assert_eq!(out, vec![0b0000_1011, 0b1110_0000]);
    }

    #[test]
    fn symbol_without_code_is_unsupported() {
        let codes = codes_for(&[(0x03, 1), (b'\n', 1)]);
        let err = encode_content(
            &mut Cursor::new(b"x\n"),
            &codes,
            &AlphabetConfig::ascii(),
            Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(err, HuffmanError::UnsupportedSymbol(b'x')));
    }

    #[test]
    fn empty_input_writes_only_end_of_stream() {
        let codes = codes_for(&[(0x03, 1)]);
        let mut out = Vec::new();
        let (symbols, written) = encode_content(
            &mut Cursor::new(b""),
            &codes,
            &AlphabetConfig::ascii(),
            &mut out,
        )
        .unwrap();
        assert_eq!(symbols, 0);
        assert_eq!(written, 1);
        assert_eq!(out, vec![0]);
    }
}
