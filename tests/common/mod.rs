#![allow(dead_code)]

use std::collections::HashMap;
use std::io::Cursor;

use canonical_huffman::canonical::render;
use canonical_huffman::header::read_header;
use canonical_huffman::{AlphabetConfig, CanonicalCodes};

/// Reference decoder: rebuilds the canonical codes from the header and walks
/// the content bit by bit until the end-of-stream code.
pub fn decode(bytes: &[u8], config: &AlphabetConfig) -> Vec<u8> {
    let mut cursor = Cursor::new(bytes);
    let lengths = read_header(&mut cursor, config).expect("header");
    let codes = CanonicalCodes::from_lengths(&lengths);

    let lookup: HashMap<String, u8> = codes
        .iter()
        .map(|(symbol, code)| (render(code), symbol))
        .collect();

    let content = &bytes[cursor.position() as usize..];
    let mut decoded = Vec::new();
    let mut current = String::new();

    for &byte in content {
        for shift in (0..8).rev() {
            current.push(if (byte >> shift) & 1 == 1 { '1' } else { '0' });
            if let Some(&symbol) = lookup.get(&current) {
                if symbol == config.end_of_stream {
                    return decoded;
                }
                decoded.push(symbol);
                current.clear();
            }
        }
    }
    panic!("content ended without an end-of-stream code");
}

/// What the encoder sees: every line, unterminated last line included, ends
/// with a line feed.
pub fn normalized(text: &[u8]) -> Vec<u8> {
    let mut expected = text.to_vec();
    if !expected.is_empty() && expected.last() != Some(&b'\n') {
        expected.push(b'\n');
    }
    expected
}
