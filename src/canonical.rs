//! Canonical code assignment.
//!
//! Codes are handed out in (length, symbol) order: the first symbol gets the
//! all-zero code of its length and each following symbol gets the binary
//! successor of the previous code, zero-extended to its own length. A decoder
//! can rebuild the exact table from the code lengths alone.

use bitvec::prelude::*;
use tracing::trace;

use crate::bit_buffer::Code;
use crate::hufftree::RawCode;

/// Symbol to canonical code mapping over a fixed alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalCodes {
    codes: Vec<Option<Code>>,
}

impl CanonicalCodes {
    /// Assigns canonical codes to entries sorted by (length, symbol).
    ///
    /// A lone entry is given the one-bit code `0` so that it still occupies
    /// space on the wire.
    pub fn from_sorted(entries: &[RawCode], alphabet_size: usize) -> Self {
        let mut codes: Vec<Option<Code>> = vec![None; alphabet_size];

        let Some((first, rest)) = entries.split_first() else {
            return CanonicalCodes { codes };
        };

        let mut last = bitvec![u8, Msb0; 0; first.len().max(1)];
        trace!(symbol = first.symbol, code = %render(&last), "assigned canonical code");
        codes[first.symbol as usize] = Some(last.clone());

        for entry in rest {
            let mut current = next_code(&last);
            while current.len() < entry.len() {
                current.push(false);
            }
            trace!(symbol = entry.symbol, code = %render(&current), "assigned canonical code");
            codes[entry.symbol as usize] = Some(current.clone());
            last = current;
        }

        CanonicalCodes { codes }
    }

    /// Rebuilds the table from per-symbol code lengths, zero meaning absent.
    pub fn from_lengths(lengths: &[usize]) -> Self {
        let mut entries: Vec<RawCode> = lengths
            .iter()
            .enumerate()
            .filter(|&(_, &len)| len > 0)
            .map(|(symbol, &len)| RawCode {
                symbol: symbol as u8,
                code: bitvec![u8, Msb0; 0; len],
            })
            .collect();
        entries.sort_by(|a, b| a.len().cmp(&b.len()).then(a.symbol.cmp(&b.symbol)));

        Self::from_sorted(&entries, lengths.len())
    }

    pub fn code(&self, symbol: u8) -> Option<&BitSlice<u8, Msb0>> {
        self.codes
            .get(symbol as usize)
            .and_then(|c| c.as_deref())
    }

    /// Code length of `symbol`, zero when it has no code.
    pub fn length(&self, symbol: u8) -> usize {
        self.code(symbol).map_or(0, |code| code.len())
    }

    pub fn lengths(&self) -> Vec<usize> {
        self.codes
            .iter()
            .map(|c| c.as_ref().map_or(0, |code| code.len()))
            .collect()
    }

    pub fn max_length(&self) -> usize {
        self.lengths().into_iter().max().unwrap_or(0)
    }

    pub fn alphabet_size(&self) -> usize {
        self.codes.len()
    }

    /// Assigned codes in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &BitSlice<u8, Msb0>)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(symbol, c)| c.as_deref().map(|code| (symbol as u8, code)))
    }
}

/// Binary successor of `code` read as an unsigned integer.
///
/// A carry out of the most significant bit grows the code by a leading `1`.
pub fn next_code(code: &BitSlice<u8, Msb0>) -> Code {
    let mut next = code.to_bitvec();
    for idx in (0..next.len()).rev() {
        if next[idx] {
            next.set(idx, false);
        } else {
            next.set(idx, true);
            return next;
        }
    }
    next.insert(0, true);
    next
}

/// Renders a code as a string of `0` and `1`.
pub fn render(code: &BitSlice<u8, Msb0>) -> String {
    code.iter().map(|bit| if *bit { '1' } else { '0' }).collect()
}
