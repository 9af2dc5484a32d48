#![no_main]
use hufftree::{huffman_tree, Error, FrequencyTable, Node};
use libfuzzer_sys::fuzz_target;

fn sums_hold(node: &Node) -> bool {
    match node.children() {
        None => true,
        Some((l, r)) => node.freq() == l.freq() + r.freq() && sums_hold(l) && sums_hold(r),
    }
}

fuzz_target!(|counts: Vec<u32>| {
    let table = match FrequencyTable::new(&counts) {
        Ok(t) => t,
        Err(_) => return,
    };

    let root = match huffman_tree(&table) {
        Ok(root) => root,
        Err(e) => {
            assert_eq!(e, Error::EmptyInput);
            assert_eq!(table.distinct(), 0);
            return;
        }
    };

    assert_eq!(Ok(root.freq()), table.total());
    assert_eq!(root.leaf_count(), table.distinct());
    assert!(sums_hold(&root));
});
