//! # canonical_huffman
//!
//! Canonical Huffman encoding for line-oriented ASCII text.
//!
//! The encoder reads its input twice: once to count symbols, once to emit
//! their codes. The output is a code-length header followed by the packed
//! content, terminated by an end-of-stream code.
//!
//! ## Quick Start
//!
//! ```no_run
//! use canonical_huffman::HuffmanCodec;
//! use std::path::Path;
//!
//! let codec = HuffmanCodec::default();
//! let (output, summary) = codec.encode_file(Path::new("input.txt"))?;
//! println!("wrote {} bytes to {}", summary.total_bytes(), output.display());
//! # Ok::<(), canonical_huffman::HuffmanError>(())
//! ```

pub mod canonical;
pub mod compressed_data;
pub mod config;
pub mod content;
pub mod error;
pub mod frequency;
pub mod header;
pub mod huffman_codec;
pub mod hufftree;

// Internal modules - not part of public API
mod bit_buffer;
mod min_heap;

// Re-export main types for convenience
pub use bit_buffer::Code;
pub use canonical::CanonicalCodes;
pub use compressed_data::{CompressedData, EncodeSummary};
pub use config::AlphabetConfig;
pub use error::{HuffmanError, Result};
pub use frequency::FrequencyTable;
pub use huffman_codec::{compressed_path, CodePlan, HuffmanCodec};
pub use hufftree::{HuffmanTree, RawCode};
pub use min_heap::HeapErr;
