//! # Huffman Tree Construction
//!
//! *Optimal prefix-code trees from symbol counts, built on a deterministic min-heap.*
//!
//! ## Intuition First
//!
//! Picture every symbol as a pile of coins, one coin per occurrence. Take the two
//! smallest piles, tie them together into one bigger pile, and put it back. Keep
//! going until a single pile remains. Rare symbols get tied up early and end up
//! buried deep in the final bundle; common symbols join late and stay near the top.
//! Depth in the bundle is the length of the symbol's codeword.
//!
//! ## The Problem
//!
//! Given counts `f_s` for each symbol, find the binary tree with the symbols at its
//! leaves that minimises the weighted path length `Σ f_s · depth(s)`. Any such tree
//! yields a prefix-free code of minimal total encoded length.
//!
//! ## Historical Context
//!
//! ```text
//! 1951  Fano        Poses minimum-redundancy coding as an MIT term-paper problem
//! 1952  Huffman     Greedy bottom-up merge is optimal
//! 1964  Williams    Binary heap (heapsort) gives O(log n) extract-min
//! 1976  van Leeuwen Two-queue O(n) construction for sorted counts
//! ```
//!
//! ## Algorithm
//!
//! ```text
//! forest := { leaf(s, f_s) : f_s > 0 }          (min-heap keyed by frequency)
//! while |forest| > 1:
//!     x := extract_min(forest)
//!     y := extract_min(forest)
//!     insert(forest, internal(f_x + f_y, left = x, right = y))
//! return the last remaining node
//! ```
//!
//! Ties between equal frequencies are broken by insertion order: leaves enter in
//! ascending symbol order and every merged node enters after all existing entries.
//! Tie-breaking changes the tree shape, never its cost.
//!
//! ## Complexity Analysis
//!
//! - **Time**: $O(n \log n)$ for `n` distinct symbols; the merge loop runs `n - 1` times.
//! - **Space**: $O(n)$ for the heap and the `2n - 1` tree nodes.
//!
//! ## Failure Modes
//!
//! 1. **Overflow**: counts whose sum exceeds `u64::MAX` are reported as
//!    [`Error::FrequencyOverflow`] rather than wrapped.
//! 2. **Empty input**: an all-zero table has no tree; [`build_tree`] reports
//!    [`Error::EmptyInput`] instead of a placeholder root.
//! 3. **Single symbol**: the tree is a bare leaf at depth 0. Code assignment must
//!    give it at least one bit on its own.
//!
//! ## Quick Start
//!
//! ```rust
//! use hufftree::{huffman_tree, FrequencyTable};
//!
//! let table = FrequencyTable::from_bytes(b"abracadabra");
//! let root = huffman_tree(&table)?;
//! assert_eq!(root.freq(), 11);
//! assert_eq!(root.leaf_count(), 5);
//! # Ok::<(), hufftree::Error>(())
//! ```
//!
//! ## References
//!
//! - Huffman, D. A. (1952). "A Method for the Construction of Minimum-Redundancy Codes."
//! - Cormen, T. H., et al. *Introduction to Algorithms*, §6 (Heapsort) and §16.3 (Huffman codes).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod forest;
pub mod frequency;
pub mod heap;
pub mod node;
pub mod tree;

pub use error::{Error, Result};
pub use forest::{build_forest, Forest};
pub use frequency::{FrequencyTable, MAX_SYMBOLS};
pub use heap::MinHeap;
pub use node::Node;
pub use tree::{build_tree, huffman_tree};
