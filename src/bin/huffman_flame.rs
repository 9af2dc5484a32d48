use hufftree::{huffman_tree, FrequencyTable};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> hufftree::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let input = (0..100_000u32)
        .map(|i| (i.wrapping_mul(2_654_435_761) >> 24) as u8 & (i as u8 | 0x0f))
        .collect::<Vec<_>>();
    let table = FrequencyTable::from_bytes(&input);
    info!(bytes = input.len(), symbols = table.distinct(), "profiling tree construction");

    let mut cost = 0;
    for _ in 0..10_000 {
        let root = huffman_tree(&table)?;
        cost = root.weighted_path_length()?;
    }

    info!(cost, "done");
    Ok(())
}
