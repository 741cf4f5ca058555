use std::io::{Cursor, Write};

use crate::config::AlphabetConfig;
use crate::error::Result;
use crate::header::{header_len, read_header};

/// An encoded artifact held in memory: header segment then content segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedData {
    pub header: Vec<u8>,
    pub content: Vec<u8>,
}

impl CompressedData {
    pub fn serialize(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.len());
        bytes.extend_from_slice(&self.header);
        bytes.extend_from_slice(&self.content);
        bytes
    }

    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<usize> {
        writer.write_all(&self.header)?;
        writer.write_all(&self.content)?;
        writer.flush()?;
        Ok(self.len())
    }

    /// Splits a serialized artifact at the end of its header.
    pub fn deserialize(bytes: &[u8], config: &AlphabetConfig) -> Result<CompressedData> {
        // validates the width byte and that the whole header is present
        read_header(&mut Cursor::new(bytes), config)?;
        let split = header_len(config, bytes[0] as u32);

        Ok(CompressedData {
            header: bytes[..split].to_vec(),
            content: bytes[split..].to_vec(),
        })
    }

    pub fn len(&self) -> usize {
        self.header.len() + self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Statistics of one encoding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeSummary {
    /// Input symbols encoded, line terminators included.
    pub input_symbols: u64,
    pub distinct_symbols: usize,
    pub max_code_length: usize,
    /// Width of each header length field.
    pub width: u32,
    pub header_bytes: usize,
    pub content_bytes: usize,
}

impl EncodeSummary {
    pub fn total_bytes(&self) -> usize {
        self.header_bytes + self.content_bytes
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn serialize_concatenates_segments() {
        let data = CompressedData {
            header: vec![1, 2, 3],
            content: vec![4, 5],
        };
        assert_eq!(data.serialize(), vec![1, 2, 3, 4, 5]);
        assert_eq!(data.len(), 5);

        let mut out = Vec::new();
        assert_eq!(data.write_to(&mut out).unwrap(), 5);
        assert_eq!(out, data.serialize());
    }

    #[test]
    fn deserialize_splits_after_header() {
        let config = AlphabetConfig::ascii();
        let mut bytes = vec![0u8; 17];
        bytes[0] = 1;
        bytes[1] = 0b0001_0000;
        bytes.push(0b0000_0000);

        let data = CompressedData::deserialize(&bytes, &config).unwrap();
        assert_eq!(data.header.len(), 17);
        assert_eq!(data.content, vec![0]);
    }

    #[test]
    fn deserialize_rejects_truncated_header() {
        let config = AlphabetConfig::ascii();
        assert!(CompressedData::deserialize(&[2, 0, 0], &config).is_err());
        assert!(CompressedData::deserialize(&[], &config).is_err());
    }
}
