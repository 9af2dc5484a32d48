//! Huffman tree nodes.
//!
//! A node is either a symbol leaf or an internal merge of exactly two owned
//! subtrees. Children are moved in at construction and never reassigned, so
//! a node is reachable from at most one parent.

use crate::error::{Error, Result};

/// Huffman tree node.
///
/// Variants are non-exhaustive: outside this crate nodes are built only via
/// [`Node::leaf`] and [`Node::merge`], which keeps every internal frequency
/// equal to the sum of its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An original symbol and its occurrence count.
    #[non_exhaustive]
    Leaf {
        /// Symbol value.
        symbol: u8,
        /// Occurrence count.
        freq: u64,
    },
    /// The merger of two subtrees.
    #[non_exhaustive]
    Internal {
        /// Sum of both children's frequencies.
        freq: u64,
        /// First-extracted subtree (bit `0` by convention).
        left: Box<Node>,
        /// Second-extracted subtree (bit `1` by convention).
        right: Box<Node>,
    },
}

impl Node {
    /// Create a leaf for `symbol`.
    pub fn leaf(symbol: u8, freq: u64) -> Self {
        Node::Leaf { symbol, freq }
    }

    /// Combine two subtrees, taking ownership of both.
    ///
    /// # Errors
    /// Returns `Error::FrequencyOverflow` if the combined frequency does not
    /// fit in `u64`.
    pub fn merge(left: Node, right: Node) -> Result<Self> {
        let freq = left
            .freq()
            .checked_add(right.freq())
            .ok_or(Error::FrequencyOverflow)?;
        Ok(Node::Internal {
            freq,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Frequency of this subtree.
    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Internal { freq, .. } => *freq,
        }
    }

    /// Returns true for a symbol leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// The leaf's symbol, or `None` for an internal node.
    pub fn symbol(&self) -> Option<u8> {
        match self {
            Node::Leaf { symbol, .. } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }

    /// `(left, right)` children, or `None` for a leaf.
    pub fn children(&self) -> Option<(&Node, &Node)> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { left, right, .. } => Some((&**left, &**right)),
        }
    }

    /// Every leaf as `(symbol, freq, depth)`, left to right.
    ///
    /// The root sits at depth 0, so a single-leaf tree reports depth 0.
    pub fn leaves(&self) -> Vec<(u8, u64, usize)> {
        let mut out = Vec::new();
        let mut stack = vec![(self, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            match node {
                Node::Leaf { symbol, freq } => out.push((*symbol, *freq, depth)),
                Node::Internal { left, right, .. } => {
                    // Right first so the left subtree is visited first.
                    stack.push((&**right, depth + 1));
                    stack.push((&**left, depth + 1));
                }
            }
        }
        out
    }

    /// Number of leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Sum over leaves of `freq * depth`.
    ///
    /// # Errors
    /// Returns `Error::FrequencyOverflow` if the sum does not fit in `u64`.
    pub fn weighted_path_length(&self) -> Result<u64> {
        self.leaves()
            .iter()
            .try_fold(0u64, |acc, &(_, freq, depth)| {
                freq.checked_mul(depth as u64)
                    .and_then(|cost| acc.checked_add(cost))
            })
            .ok_or(Error::FrequencyOverflow)
    }
}
