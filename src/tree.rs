//! Greedy Huffman merge.
//!
//! Repeatedly pop the two lightest subtrees, join them under a new internal
//! node and push it back, until one subtree remains. The loop runs exactly
//! `forest.len() - 1` times.

use tracing::{debug, instrument, trace};

use crate::error::{Error, Result};
use crate::forest::{build_forest, Forest};
use crate::frequency::FrequencyTable;
use crate::node::Node;

/// Merge a forest down to a single Huffman tree root.
///
/// The first extracted node becomes `left`, the second `right`. A forest of
/// one leaf is returned unchanged.
///
/// # Errors
/// Returns `Error::EmptyInput` if the forest is empty, or
/// `Error::FrequencyOverflow` if a merged frequency does not fit in `u64`.
#[instrument(level = "debug", skip(forest), fields(leaves = forest.len()))]
pub fn build_tree(mut forest: Forest) -> Result<Node> {
    if forest.is_empty() {
        return Err(Error::EmptyInput);
    }

    while forest.len() > 1 {
        let first = forest.remove_min()?;
        let second = forest.remove_min()?;
        trace!(left = first.freq(), right = second.freq(), "merge");
        forest.insert(Node::merge(first, second)?);
    }

    let root = forest.remove_min()?;
    debug!(freq = root.freq(), depth = root.depth(), "tree built");
    Ok(root)
}

/// Build the Huffman tree for a frequency table.
///
/// # Errors
/// Returns `Error::EmptyInput` if no symbol has a positive count, or
/// `Error::FrequencyOverflow` if the counts sum past `u64::MAX`.
pub fn huffman_tree(table: &FrequencyTable) -> Result<Node> {
    build_tree(build_forest(table))
}
