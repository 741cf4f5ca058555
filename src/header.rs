//! Code-length header.
//!
//! Layout: one byte holding the field width `w`, then one `w`-bit big-endian
//! code length per alphabet symbol in ascending symbol order, zero-padded to
//! a whole byte. Symbols without a code are written as length zero.

use std::io::{Read, Write};

use bitvec::prelude::*;
use tracing::debug;

use crate::bit_buffer::BitWriter;
use crate::canonical::CanonicalCodes;
use crate::config::AlphabetConfig;
use crate::error::{HuffmanError, Result};

/// Field width for a header whose longest code is `max_length` bits.
///
/// This is `floor(log2(max_length)) + 1`, the number of bits in the binary
/// form of `max_length`. A table without codes still uses one bit.
pub fn header_width(max_length: usize) -> u32 {
    if max_length == 0 {
        return 1;
    }
    usize::BITS - max_length.leading_zeros()
}

/// Total header size in bytes for a given field width.
pub fn header_len(config: &AlphabetConfig, width: u32) -> usize {
    1 + (config.alphabet_size * width as usize).div_ceil(8)
}

/// Writes the header for `codes` and returns the number of bytes written.
pub fn write_header<W: Write>(
    codes: &CanonicalCodes,
    config: &AlphabetConfig,
    writer: W,
) -> Result<usize> {
    let width = header_width(codes.max_length());
    if width > config.max_length_bits {
        return Err(HuffmanError::HeaderWidthOverflow {
            width,
            limit: config.max_length_bits,
        });
    }

    let mut bits = BitWriter::new(writer);
    bits.push_value(width, 8)?;
    for symbol in config.symbols() {
        bits.push_value(codes.length(symbol) as u32, width)?;
    }
    let (_, written) = bits.finish()?;

    debug!(width, bytes = written, "wrote code length header");
    Ok(written)
}

/// Reads a header back into per-symbol code lengths.
pub fn read_header<R: Read>(reader: &mut R, config: &AlphabetConfig) -> Result<Vec<usize>> {
    let mut width = [0u8; 1];
    reader.read_exact(&mut width)?;
    let width = width[0] as u32;

    if width == 0 || width > config.max_length_bits {
        return Err(HuffmanError::InvalidHeader(format!(
            "length field width {} outside 1..={}",
            width, config.max_length_bits
        )));
    }

    let mut packed = vec![0u8; header_len(config, width) - 1];
    reader.read_exact(&mut packed)?;

    let lengths = packed
        .view_bits::<Msb0>()
        .chunks_exact(width as usize)
        .take(config.alphabet_size)
        .map(|field| field.load_be::<u8>() as usize)
        .collect();
    Ok(lengths)
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn width_is_bit_length_of_longest_code() {
        assert_eq!(header_width(0), 1);
        assert_eq!(header_width(1), 1);
        assert_eq!(header_width(2), 2);
        assert_eq!(header_width(3), 2);
        assert_eq!(header_width(4), 3);
        assert_eq!(header_width(7), 3);
        assert_eq!(header_width(8), 4);
        assert_eq!(header_width(127), 7);
        assert_eq!(header_width(255), 8);
        assert_eq!(header_width(256), 9);
    }

    #[test]
    fn writes_width_byte_then_packed_lengths() {
        let config = AlphabetConfig::ascii();
        let mut lengths = vec![0usize; 128];
        lengths[0x03] = 2;
        lengths[b'\n' as usize] = 2;
        lengths[b'a' as usize] = 2;
        lengths[b'b' as usize] = 2;
        let codes = CanonicalCodes::from_lengths(&lengths);

        let mut out = Vec::new();
        let written = write_header(&codes, &config, &mut out).unwrap();

        assert_eq!(written, header_len(&config, 2));
        assert_eq!(out.len(), 33);
        assert_eq!(out[0], 2);

        // symbols 0..4 -> 00 00 00 10
        assert_eq!(out[1], 0b0000_0010);
        // symbols 8..12 -> 00 00 10 00 (line feed is 0x0a)
        assert_eq!(out[3], 0b0000_1000);
        // symbols 96..100 -> 00 10 10 00
        assert_eq!(out[25], 0b0010_1000);
        let nonzero = out[1..].iter().filter(|&&b| b != 0).count();
        assert_eq!(nonzero, 3);
    }

    #[test]
    fn header_round_trips() {
        let config = AlphabetConfig::ascii();
        let mut lengths = vec![0usize; 128];
        for (symbol, len) in [(0x03, 5), (b' ', 2), (b'e', 3), (b'q', 5), (b't', 3), (b'\n', 4), (b'z', 4), (b'x', 2)] {
            lengths[symbol as usize] = len;
        }
        let codes = CanonicalCodes::from_lengths(&lengths);

        let mut out = Vec::new();
        write_header(&codes, &config, &mut out).unwrap();
        assert_eq!(out[0], 3);

        let decoded = read_header(&mut Cursor::new(&out), &config).unwrap();
        assert_eq!(decoded, lengths);
        assert_eq!(CanonicalCodes::from_lengths(&decoded), codes);
    }

    #[test]
    fn single_symbol_table_uses_one_bit_fields() {
        let config = AlphabetConfig::ascii();
        let mut lengths = vec![0usize; 128];
        lengths[0x03] = 1;
        let codes = CanonicalCodes::from_lengths(&lengths);

        let mut out = Vec::new();
        write_header(&codes, &config, &mut out).unwrap();
        assert_eq!(out, {
            let mut expected = vec![0u8; 17];
            expected[0] = 1;
            expected[1] = 0b0001_0000;
            expected
        });
    }

    #[test]
    fn rejects_lengths_wider_than_limit() {
        let config = AlphabetConfig {
            max_length_bits: 2,
            ..AlphabetConfig::ascii()
        };
        let mut lengths = vec![0usize; 128];
        lengths[b'a' as usize] = 4;
        lengths[b'b' as usize] = 4;
        lengths[b'c' as usize] = 3;
        lengths[b'd' as usize] = 2;
        lengths[b'e' as usize] = 1;
        let codes = CanonicalCodes::from_lengths(&lengths);

        let err = write_header(&codes, &config, Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            HuffmanError::HeaderWidthOverflow { width: 3, limit: 2 }
        ));
    }

    #[test]
    fn rejects_zero_width() {
        let config = AlphabetConfig::ascii();
        let err = read_header(&mut Cursor::new(vec![0u8; 40]), &config).unwrap_err();
        assert!(matches!(err, HuffmanError::InvalidHeader(_)));
    }

    #[test]
    fn truncated_header_is_an_io_error() {
        let config = AlphabetConfig::ascii();
        let err = read_header(&mut Cursor::new(vec![3u8, 0, 0]), &config).unwrap_err();
        assert!(matches!(err, HuffmanError::Io(_)));
    }
}
