// Example: a simulated infinite feed — append at the bottom, backfill at the top.
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dynwindow_adapter::{
    DynamicWindow, LoadLatestFuture, ScrollBehavior, ScrollToTopOptions, WindowOptions,
};

fn main() {
    let append_requests = Arc::new(AtomicUsize::new(0));
    let backfill_requests = Arc::new(AtomicUsize::new(0));

    let appends = Arc::clone(&append_requests);
    let backfills = Arc::clone(&backfill_requests);

    let mut engine = DynamicWindow::new(
        WindowOptions::new(100)
            .with_item_height(150)
            .with_buffer_size(4)
            .with_threshold(0.9)
            .with_initial_viewport_height(Some(900))
            .with_on_load_more(Some(move || {
                appends.fetch_add(1, Ordering::SeqCst);
            }))
            .with_on_load_latest(Some(move || -> LoadLatestFuture {
                backfills.fetch_add(1, Ordering::SeqCst);
                Box::pin(std::future::ready(Ok(true)))
            })),
    );

    println!("initial range={:?}", engine.visible_range());

    // The user flings to the bottom; the append threshold is crossed.
    engine.handle_scroll(14_100, 0);
    println!(
        "at bottom: append_requests={} loading={}",
        append_requests.load(Ordering::SeqCst),
        engine.is_loading()
    );

    // The host fetched 20 more items and grew its data set.
    engine.set_total_items(120);
    println!(
        "after append growth: total_height={} offset={}",
        engine.total_height(),
        engine.scroll_offset()
    );

    // Scrolling back up into the head zone asks for newer data.
    engine.handle_scroll(9_000, 100);
    engine.handle_scroll(500, 200);
    println!(
        "near top: backfill_requests={}",
        backfill_requests.load(Ordering::SeqCst)
    );

    // Ten newer items land above the viewport; the anchor correction keeps the
    // items the user was looking at visually stationary.
    let before = engine.scroll_offset();
    engine.set_total_items(130);
    println!(
        "after backfill growth: offset {} -> {} (corrected by {})",
        before,
        engine.scroll_offset(),
        engine.scroll_offset() - before
    );

    // Jump back to the newest item; the next growth stays pinned to the top.
    engine.scroll_to_top(
        ScrollToTopOptions {
            behavior: ScrollBehavior::Auto,
        },
        300,
    );
    engine.set_total_items(140);
    println!("pinned at top: offset={}", engine.scroll_offset());
}
