use std::cmp::Ordering;

use tracing::debug;

use crate::bit_buffer::Code;
use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use crate::min_heap::MinHeap;

#[derive(Debug, Clone)]
pub struct HuffmanTree {
    pub root: HuffNode,
}

/// A symbol paired with its tree-derived code, before canonicalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCode {
    pub symbol: u8,
    pub code: Code,
}

impl RawCode {
    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }
}

impl HuffmanTree {
    /// Builds the tree over every symbol with a nonzero count.
    ///
    /// Equal weights are resolved by rank: a leaf ranks by its symbol value and
    /// a merged node ranks after every leaf, in merge order. The same table
    /// therefore always produces the same tree.
    pub fn from_frequencies(table: &FrequencyTable) -> Result<Self> {
        let leaves: Vec<Pending> = table
            .present()
            .map(|(symbol, count)| Pending {
                rank: symbol as usize,
                node: HuffNode::new(symbol, count),
            })
            .collect();

        if leaves.is_empty() {
            return Err(HuffmanError::EmptyAlphabet);
        }

        let mut heap = MinHeap::build(leaves);
        let mut next_rank = table.alphabet_size();

        while heap.heap_size() > 1 {
            let x = heap.extract_min()?;
            let y = heap.extract_min()?;

            heap.insert(Pending {
                rank: next_rank,
                node: HuffNode::merge(x.node, y.node),
            });
            next_rank += 1;
        }

        let root = heap.extract_min()?.node;
        let tree = HuffmanTree { root };
        debug!(
            leaves = tree.leaf_count(),
            depth = tree.depth(),
            weight = tree.root.weight(),
            "built huffman tree"
        );
        Ok(tree)
    }

    /// Every leaf's code, sorted by (length, symbol).
    ///
    /// A tree that is a single leaf yields one entry with an empty code.
    pub fn raw_codes(&self) -> Vec<RawCode> {
        let mut codes = Vec::new();
        let mut prefix = Code::new();
        self.root.collect_codes(&mut prefix, &mut codes);

        codes.sort_by(|a, b| a.len().cmp(&b.len()).then(a.symbol.cmp(&b.symbol)));
        codes
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }
}

#[derive(Debug, Clone)]
pub enum HuffNode {
    Leaf {
        weight: u64,
        symbol: u8,
    },
    Internal {
        weight: u64,
        left: Box<HuffNode>,
        right: Box<HuffNode>,
    },
}

impl HuffNode {
    pub fn new(symbol: u8, weight: u64) -> Self {
        HuffNode::Leaf { weight, symbol }
    }

    pub fn weight(&self) -> u64 {
        match self {
            HuffNode::Leaf { weight, .. } => *weight,
            HuffNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn merge(a: Self, b: Self) -> Self {
        // a is the lighter node and goes left
        let weight = a.weight() + b.weight();
        HuffNode::Internal {
            weight,
            left: Box::new(a),
            right: Box::new(b),
        }
    }

    fn collect_codes(&self, prefix: &mut Code, codes: &mut Vec<RawCode>) {
        match self {
            HuffNode::Leaf { symbol, .. } => {
                codes.push(RawCode {
                    symbol: *symbol,
                    code: prefix.clone(),
                });
            }
            HuffNode::Internal { left, right, .. } => {
                prefix.push(false);
                left.collect_codes(prefix, codes);
                prefix.pop();

                prefix.push(true);
                right.collect_codes(prefix, codes);
                prefix.pop();
            }
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 1,
            HuffNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    fn depth(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 0,
            HuffNode::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Heap entry ordering nodes by (weight, rank).
#[derive(Debug)]
struct Pending {
    rank: usize,
    node: HuffNode,
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        self.node
            .weight()
            .cmp(&other.node.weight())
            .then(self.rank.cmp(&other.rank))
    }
}
