//! Error types for the encoding pipeline.

use thiserror::Error;

use crate::min_heap::HeapErr;

/// Result type alias for encoding operations.
pub type Result<T> = std::result::Result<T, HuffmanError>;

#[derive(Debug, Error)]
pub enum HuffmanError {
    /// Input byte outside the supported symbol range.
    #[error("unsupported symbol 0x{0:02x}")]
    UnsupportedSymbol(u8),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("priority queue error: {0}")]
    Heap(#[from] HeapErr),

    /// The frequency table had no symbol to build a tree from.
    #[error("no symbols to encode")]
    EmptyAlphabet,

    /// Code lengths need a wider header field than the format allows.
    #[error("code length field needs {width} bits, limit is {limit}")]
    HeaderWidthOverflow { width: u32, limit: u32 },

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("invalid alphabet configuration: {0}")]
    InvalidConfig(String),
}
