//! Error types for heap and tree construction.

use thiserror::Error;

/// Error variants for Huffman tree construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `remove_min` or `peek_min` was called on a heap with no live elements.
    #[error("heap is empty")]
    EmptyHeap,

    /// The forest handed to the tree builder holds no leaves.
    #[error("no symbol has a positive frequency; nothing to encode")]
    EmptyInput,

    /// A signed frequency table contained a negative count.
    #[error("negative frequency {count} for symbol {symbol}")]
    NegativeFrequency {
        /// Index of the offending symbol.
        symbol: usize,
        /// The rejected count.
        count: i64,
    },

    /// The frequency table has more slots than single-byte symbols allow.
    #[error("alphabet of {0} symbols exceeds the 256-symbol limit")]
    AlphabetTooLarge(usize),

    /// A frequency sum or weighted path length does not fit in `u64`.
    #[error("frequency sum overflows u64")]
    FrequencyOverflow,
}

/// A specialized Result type for Huffman tree construction.
pub type Result<T> = std::result::Result<T, Error>;
