// Example: basic cache reads and writes.
use rowheight::{IndexPath, IndexPathHeightCache};

fn main() {
    let mut cache = IndexPathHeightCache::new();

    // Writes grow the storage lazily; no upfront sizing call.
    cache.set_height(IndexPath::new(0, 0), 44.0);
    cache.set_height(IndexPath::new(2, 3), 96.5);

    println!(
        "sections={} rows_in_section_2={}",
        cache.section_count(),
        cache.rows_in_section(2)
    );
    println!(
        "(0,0)={:?} (2,3)={:?} (2,0)={:?}",
        cache.height(IndexPath::new(0, 0)),
        cache.height(IndexPath::new(2, 3)),
        cache.height(IndexPath::new(2, 0)), // padded, never measured
    );

    cache.clear_height(IndexPath::new(0, 0));
    println!("after clear: exists(0,0)={}", cache.exists(IndexPath::new(0, 0)));
}
