//! Initial forest: one leaf per symbol that occurs.

use tracing::{debug, instrument};

use crate::frequency::FrequencyTable;
use crate::heap::MinHeap;
use crate::node::Node;

/// The not-yet-merged subtrees, ordered by frequency.
pub type Forest = MinHeap<Node, u64>;

pub(crate) fn empty_forest(capacity: usize) -> Forest {
    MinHeap::with_capacity(capacity, Node::freq)
}

/// Build a forest holding one leaf per symbol with a positive count.
///
/// Symbols are scanned in ascending order, so leaves of equal frequency
/// leave the heap smallest symbol first. Zero-count symbols are skipped; an
/// all-zero table yields an empty forest.
#[instrument(level = "debug", skip(table), fields(slots = table.len()))]
pub fn build_forest(table: &FrequencyTable) -> Forest {
    let mut forest = empty_forest(table.distinct());
    forest.extend(
        table
            .iter_positive()
            .map(|(symbol, count)| Node::leaf(symbol, count)),
    );
    debug!(leaves = forest.len(), "forest built");
    forest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_leaf_per_positive_symbol() {
        let table = FrequencyTable::new(&[0, 5, 0, 2, 9]).unwrap();
        let forest = build_forest(&table);
        assert_eq!(forest.len(), 3);

        let leaves = forest.into_sorted_vec();
        assert_eq!(
            leaves,
            vec![Node::leaf(3, 2), Node::leaf(1, 5), Node::leaf(4, 9)]
        );
    }

    #[test]
    fn test_all_zero_table_gives_empty_forest() {
        let table = FrequencyTable::new(&[0; 16]).unwrap();
        assert!(build_forest(&table).is_empty());
        assert!(build_forest(&FrequencyTable::default()).is_empty());
    }

    #[test]
    fn test_equal_counts_ordered_by_symbol() {
        let table = FrequencyTable::new(&[3, 3, 3]).unwrap();
        let symbols: Vec<_> = build_forest(&table)
            .into_sorted_vec()
            .iter()
            .filter_map(Node::symbol)
            .collect();
        assert_eq!(symbols, vec![0, 1, 2]);
    }
}
