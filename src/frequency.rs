//! Per-symbol occurrence counts.

use crate::error::{Error, Result};

/// Number of distinct single-byte symbols.
pub const MAX_SYMBOLS: usize = 256;

/// Read-only mapping from symbol (its index) to a non-negative count.
///
/// Counts are stored as `u64`, so every non-negative `i64` and every byte
/// count is kept exactly. Negative counts cannot be stored: signed input is
/// checked up front by [`FrequencyTable::from_signed`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrequencyTable {
    counts: Vec<u64>,
}

impl FrequencyTable {
    /// Build a table where `counts[s]` is the count of symbol `s`.
    ///
    /// # Errors
    /// Returns `Error::AlphabetTooLarge` if `counts` has more than
    /// [`MAX_SYMBOLS`] slots.
    pub fn new(counts: &[u32]) -> Result<Self> {
        if counts.len() > MAX_SYMBOLS {
            return Err(Error::AlphabetTooLarge(counts.len()));
        }
        Ok(Self {
            counts: counts.iter().map(|&c| c as u64).collect(),
        })
    }

    /// Build a table from signed counts, failing fast on a negative entry.
    ///
    /// # Errors
    /// Returns `Error::NegativeFrequency` for the first negative entry,
    /// `Error::AlphabetTooLarge` for an oversized table.
    pub fn from_signed(counts: &[i64]) -> Result<Self> {
        if counts.len() > MAX_SYMBOLS {
            return Err(Error::AlphabetTooLarge(counts.len()));
        }
        let counts = counts
            .iter()
            .enumerate()
            .map(|(symbol, &count)| {
                if count < 0 {
                    Err(Error::NegativeFrequency { symbol, count })
                } else {
                    Ok(count as u64)
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { counts })
    }

    /// Count every byte of `data`.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut counts = vec![0u64; MAX_SYMBOLS];
        for &b in data {
            counts[b as usize] += 1;
        }
        Self { counts }
    }

    /// Count of `symbol`; slots past the end of the table count as zero.
    pub fn get(&self, symbol: u8) -> u64 {
        self.counts.get(symbol as usize).copied().unwrap_or(0)
    }

    /// Number of slots in the table.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if the table has no slots.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    ///
    /// # Errors
    /// Returns `Error::FrequencyOverflow` if the sum does not fit in `u64`.
    pub fn total(&self) -> Result<u64> {
        self.counts
            .iter()
            .try_fold(0u64, |acc, &c| acc.checked_add(c))
            .ok_or(Error::FrequencyOverflow)
    }

    /// Number of symbols with a positive count.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// `(symbol, count)` for every positive count, in ascending symbol order.
    pub fn iter_positive(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &c)| c > 0)
            .map(|(s, &c)| (s as u8, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes() {
        let table = FrequencyTable::from_bytes(b"abracadabra");
        assert_eq!(table.len(), MAX_SYMBOLS);
        assert_eq!(table.get(b'a'), 5);
        assert_eq!(table.get(b'b'), 2);
        assert_eq!(table.get(b'r'), 2);
        assert_eq!(table.get(b'c'), 1);
        assert_eq!(table.get(b'd'), 1);
        assert_eq!(table.get(b'z'), 0);
        assert_eq!(table.total(), Ok(11));
        assert_eq!(table.distinct(), 5);
    }

    #[test]
    fn test_iter_positive_skips_zeros() {
        let table = FrequencyTable::new(&[0, 3, 0, 1]).unwrap();
        assert_eq!(table.iter_positive().collect::<Vec<_>>(), vec![(1, 3), (3, 1)]);
        assert_eq!(table.get(200), 0);
    }

    #[test]
    fn test_rejects_oversized_alphabet() {
        let counts = vec![1u32; MAX_SYMBOLS + 1];
        assert_eq!(
            FrequencyTable::new(&counts),
            Err(Error::AlphabetTooLarge(MAX_SYMBOLS + 1))
        );
        assert!(FrequencyTable::new(&counts[..MAX_SYMBOLS]).is_ok());
    }

    #[test]
    fn test_signed_rejects_negative() {
        assert_eq!(
            FrequencyTable::from_signed(&[4, 0, -2, 7]),
            Err(Error::NegativeFrequency {
                symbol: 2,
                count: -2
            })
        );
        let table = FrequencyTable::from_signed(&[4, 0, 7]).unwrap();
        assert_eq!(table.total(), Ok(11));
    }

    #[test]
    fn test_signed_keeps_counts_beyond_u32() {
        let table = FrequencyTable::from_signed(&[5_000_000_000, 1]).unwrap();
        assert_eq!(table.get(0), 5_000_000_000);
        assert_eq!(table.total(), Ok(5_000_000_001));
        assert_eq!(
            table.iter_positive().collect::<Vec<_>>(),
            vec![(0, 5_000_000_000), (1, 1)]
        );
    }

    #[test]
    fn test_total_overflow_is_reported() {
        let table = FrequencyTable::from_signed(&[i64::MAX, i64::MAX, 2]).unwrap();
        assert_eq!(table.total(), Err(Error::FrequencyOverflow));
    }
}
