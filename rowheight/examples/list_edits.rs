// Example: mirroring structural list edits so cached heights stay aligned.
use rowheight::{IndexPath, IndexPathHeightCache, ListEdit};

fn main() {
    let mut cache = IndexPathHeightCache::new();
    for row in 0..5 {
        cache.set_height(IndexPath::new(0, row), 20.0 + row as f64);
    }

    // The hosted list inserts a row at (0, 2) and deletes the old row 4. Feeding the cache
    // the same edits shifts its entries instead of throwing everything away.
    let edits = [
        ListEdit::InsertRows(vec![IndexPath::new(0, 2)]),
        ListEdit::DeleteRows(vec![IndexPath::new(0, 5)]),
    ];
    for edit in &edits {
        cache.apply(edit);
    }

    for row in 0..cache.rows_in_section(0) {
        println!("row {row}: {:?}", cache.height(IndexPath::new(0, row)));
    }

    // A full reload drops everything.
    cache.apply(&ListEdit::ReloadData);
    println!("after reload: sections={}", cache.section_count());
}
