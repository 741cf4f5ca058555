use std::io::{BufRead, Cursor};

use tracing::debug;

use crate::config::AlphabetConfig;
use crate::error::{HuffmanError, Result};

/// Occurrence count of every symbol in the alphabet.
///
/// The table is dense: symbols that never appeared still have an entry,
/// holding zero. The end-of-stream symbol always counts exactly one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: Vec<u64>,
}

impl FrequencyTable {
    /// Scans `reader` once, line by line.
    ///
    /// Each line contributes its bytes followed by one line terminator, so an
    /// unterminated final line is counted as if it had one.
    pub fn extract<R: BufRead>(reader: &mut R, config: &AlphabetConfig) -> Result<Self> {
        let mut counts = vec![0u64; config.alphabet_size];

        for_each_symbol(reader, config, |symbol| {
            counts[symbol as usize] += 1;
            Ok(())
        })?;
        counts[config.end_of_stream as usize] += 1;

        let table = FrequencyTable { counts };
        debug!(
            distinct = table.distinct(),
            total = table.total(),
            "extracted symbol frequencies"
        );
        Ok(table)
    }

    pub fn from_bytes(bytes: &[u8], config: &AlphabetConfig) -> Result<Self> {
        Self::extract(&mut Cursor::new(bytes), config)
    }

    pub fn get(&self, symbol: u8) -> u64 {
        self.counts.get(symbol as usize).copied().unwrap_or(0)
    }

    /// Symbols with a nonzero count, in ascending symbol order.
    pub fn present(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(symbol, &count)| (symbol as u8, count))
    }

    pub fn distinct(&self) -> usize {
        self.present().count()
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn alphabet_size(&self) -> usize {
        self.counts.len()
    }
}

/// Walks `reader` the way both passes see it: every line's bytes, then the
/// line terminator. The end-of-stream symbol is left to the caller.
pub(crate) fn for_each_symbol<R, F>(reader: &mut R, config: &AlphabetConfig, mut f: F) -> Result<()>
where
    R: BufRead,
    F: FnMut(u8) -> Result<()>,
{
    let terminator = config.line_terminator;
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(terminator, &mut line)? == 0 {
            return Ok(());
        }
        if line.last() == Some(&terminator) {
            line.pop();
        }

        for &byte in line.iter().chain(std::iter::once(&terminator)) {
            if !config.accepts(byte) {
                return Err(HuffmanError::UnsupportedSymbol(byte));
            }
            f(byte)?;
        }
    }
}
