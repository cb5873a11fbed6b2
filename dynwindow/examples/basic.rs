// Example: store + viewport math without any host surface.
use dynwindow::{ItemStateStore, LoadDirection, compute_visible_range};

fn main() {
    let mut store = ItemStateStore::new(10_000, 150);
    println!("total_extent={}", store.total_extent());

    // The host measures a few rendered items; offsets after them shift.
    store.update_height(3, 420);
    store.update_height(4, 90);
    println!("offset_of(5)={}", store.offset_of(5));

    let range = compute_visible_range(1_200, 900, store.heights(), 4);
    println!("visible_range={range:?}");

    // Backfill ten older items at the head; everything shifts down by ten slots.
    store.grow_to(10_010, LoadDirection::Prepend, 150);
    println!("after backfill: offset_of(13)={}", store.offset_of(13));
}
