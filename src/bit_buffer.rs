use std::io::{self, Write};

use bitvec::prelude::*;

/// A prefix code as a most-significant-bit-first bit string.
pub type Code = BitVec<u8, Msb0>;

// flush once this many whole bytes are pending
const FLUSH_THRESHOLD: usize = 8 * 1024;

/// Packs bits MSB-first into bytes and forwards whole bytes to `inner`.
///
/// The final partial byte is zero-padded by [`BitWriter::finish`].
#[derive(Debug)]
pub struct BitWriter<W: Write> {
    inner: W,
    pending: BitVec<u8, Msb0>,
    bytes_written: usize,
}

impl<W: Write> BitWriter<W> {
    pub fn new(inner: W) -> Self {
        BitWriter {
            inner,
            pending: BitVec::new(),
            bytes_written: 0,
        }
    }

    pub fn push_bits(&mut self, bits: &BitSlice<u8, Msb0>) -> io::Result<()> {
        self.pending.extend_from_bitslice(bits);
        if self.pending.len() >= FLUSH_THRESHOLD * 8 {
            self.flush_whole_bytes()?;
        }
        Ok(())
    }

    /// Pushes the low `width` bits of `value`, most significant first.
    pub fn push_value(&mut self, value: u32, width: u32) -> io::Result<()> {
        for bit_pos in (0..width).rev() {
            self.pending.push((value >> bit_pos) & 1 == 1);
        }
        if self.pending.len() >= FLUSH_THRESHOLD * 8 {
            self.flush_whole_bytes()?;
        }
        Ok(())
    }

    pub fn bit_count(&self) -> usize {
        self.bytes_written * 8 + self.pending.len()
    }

    /// Pads to a byte boundary, writes what is left and returns the inner
    /// writer with the total number of bytes written.
    pub fn finish(mut self) -> io::Result<(W, usize)> {
        while self.pending.len() % 8 != 0 {
            self.pending.push(false);
        }
        self.flush_whole_bytes()?;
        self.inner.flush()?;
        Ok((self.inner, self.bytes_written))
    }

    fn flush_whole_bytes(&mut self) -> io::Result<()> {
        let whole = self.pending.len() / 8;
        if whole == 0 {
            return Ok(());
        }
        // pending always starts on a byte boundary
        self.inner.write_all(&self.pending.as_raw_slice()[..whole])?;
        self.bytes_written += whole;

        let rest = self.pending[whole * 8..].to_bitvec();
        self.pending = rest;
        Ok(())
    }
}
