use crate::*;

use alloc::vec::Vec;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    fn gen_range_u32(&mut self, start: u32, end_exclusive: u32) -> u32 {
        self.gen_range_u64(start as u64, end_exclusive as u64) as u32
    }
}

fn naive_offset(heights: &[u32], index: usize) -> u64 {
    heights[..index].iter().map(|&h| h as u64).sum()
}

fn naive_total(heights: &[u32]) -> u64 {
    heights.iter().map(|&h| h as u64).sum()
}

fn naive_visible_range(
    scroll_top: u64,
    viewport_height: u32,
    heights: &[u32],
    buffer_size: usize,
) -> VisibleRange {
    let len = heights.len();
    if len == 0 || viewport_height == 0 {
        return VisibleRange { start: 0, end: 0 };
    }
    let scroll_end = scroll_top + viewport_height as u64;

    let mut start = len;
    let mut top = 0u64;
    for (i, &h) in heights.iter().enumerate() {
        let bottom = top + h as u64;
        if top < scroll_end && bottom > scroll_top {
            start = i;
            break;
        }
        top = bottom;
    }

    let mut end = len;
    let mut top = 0u64;
    for (i, &h) in heights.iter().enumerate() {
        if top > scroll_end {
            end = i;
            break;
        }
        top += h as u64;
    }

    VisibleRange {
        start: start.saturating_sub(buffer_size),
        end: core::cmp::min(len, end + buffer_size),
    }
}

#[test]
fn uniform_store_extent_and_offsets() {
    let store = ItemStateStore::new(100, 50);
    assert_eq!(store.len(), 100);
    assert_eq!(store.total_extent(), 100 * 50);
    assert_eq!(store.offset_of(0), 0);
    assert_eq!(store.offset_of(1), 50);
    assert_eq!(store.offset_of(100), 5000);
}

#[test]
fn offsets_are_prefix_sums() {
    let mut rng = Lcg::new(7);
    let mut store = ItemStateStore::new(200, 150);
    for _ in 0..80 {
        let i = rng.gen_range_usize(0, 200);
        store.update_height(i, rng.gen_range_u32(10, 1000));
    }

    assert_eq!(store.offset_of(0), 0);
    for i in 0..store.len() {
        assert_eq!(
            store.offset_of(i + 1),
            store.offset_of(i) + store.height(i) as u64
        );
    }
    assert_eq!(store.total_extent(), naive_total(store.heights()));
}

#[test]
fn update_height_moves_extent_by_delta() {
    let mut store = ItemStateStore::new(10, 100);
    let before = store.total_extent();
    let offsets_before: Vec<u64> = (0..=10).map(|i| store.offset_of(i)).collect();

    let delta = store.update_height(3, 250);
    assert_eq!(delta, 150);
    assert_eq!(store.total_extent(), before + 150);

    for i in 0..=3 {
        assert_eq!(store.offset_of(i), offsets_before[i]);
    }
    for i in 4..=10 {
        assert_eq!(store.offset_of(i), offsets_before[i] + 150);
    }

    let delta = store.update_height(3, 100);
    assert_eq!(delta, -150);
    assert_eq!(store.total_extent(), before);
}

#[test]
fn update_height_same_value_is_a_no_op() {
    let mut store = ItemStateStore::new(5, 100);
    assert_eq!(store.update_height(2, 100), 0);
    assert_eq!(store.total_extent(), 500);
}

#[test]
#[should_panic(expected = "height index out of bounds")]
fn update_height_out_of_bounds_panics() {
    let mut store = ItemStateStore::new(5, 100);
    store.update_height(5, 100);
}

#[test]
fn toggle_expansion_round_trips() {
    let mut store = ItemStateStore::new(5, 100);
    assert!(!store.is_expanded(2));
    store.toggle_expansion(2);
    assert!(store.is_expanded(2));
    store.toggle_expansion(2);
    assert!(!store.is_expanded(2));
}

#[test]
fn grow_append_keeps_existing_entries_in_place() {
    let mut store = ItemStateStore::new(4, 100);
    store.update_height(1, 300);
    store.toggle_expansion(1);

    store.grow_to(7, LoadDirection::Append, 100);
    assert_eq!(store.len(), 7);
    assert_eq!(store.height(1), 300);
    assert!(store.is_expanded(1));
    assert_eq!(store.height(5), 100);
    assert!(!store.is_expanded(5));
    assert_eq!(store.total_extent(), 3 * 100 + 300 + 3 * 100);
    assert_eq!(store.offset_of(1), 100);
}

#[test]
fn grow_prepend_shifts_existing_entries() {
    let mut store = ItemStateStore::new(4, 100);
    store.update_height(1, 300);
    store.toggle_expansion(1);

    store.grow_to(7, LoadDirection::Prepend, 100);
    assert_eq!(store.len(), 7);
    // The measured height and the flag now live three slots later.
    assert_eq!(store.height(4), 300);
    assert!(store.is_expanded(4));
    assert_eq!(store.height(0), 100);
    assert!(!store.is_expanded(0));
    assert_eq!(store.offset_of(4), 4 * 100);
    assert_eq!(store.total_extent(), 6 * 100 + 300);
}

#[test]
fn grow_to_smaller_or_equal_is_a_no_op() {
    let mut store = ItemStateStore::new(4, 100);
    store.grow_to(4, LoadDirection::Append, 100);
    store.grow_to(2, LoadDirection::Prepend, 100);
    assert_eq!(store.len(), 4);
    assert_eq!(store.total_extent(), 400);
}

#[test]
fn randomized_store_matches_reference_model() {
    let mut rng = Lcg::new(42);
    let mut store = ItemStateStore::new(16, 150);
    let mut model: Vec<u32> = alloc::vec![150; 16];

    for _ in 0..300 {
        match rng.gen_range_usize(0, 4) {
            0 => {
                let i = rng.gen_range_usize(0, model.len());
                let h = rng.gen_range_u32(10, 1000);
                store.update_height(i, h);
                model[i] = h;
            }
            1 => {
                let added = rng.gen_range_usize(1, 5);
                let new_total = model.len() + added;
                store.grow_to(new_total, LoadDirection::Append, 150);
                model.extend(core::iter::repeat_n(150u32, added));
            }
            2 => {
                let added = rng.gen_range_usize(1, 5);
                let new_total = model.len() + added;
                store.grow_to(new_total, LoadDirection::Prepend, 150);
                let mut next = alloc::vec![150u32; added];
                next.extend_from_slice(&model);
                model = next;
            }
            _ => {
                let i = rng.gen_range_usize(0, model.len());
                store.toggle_expansion(i);
                store.toggle_expansion(i);
            }
        }

        assert_eq!(store.len(), model.len());
        assert_eq!(store.total_extent(), naive_total(&model));
        let probe = rng.gen_range_usize(0, model.len() + 1);
        assert_eq!(store.offset_of(probe), naive_offset(&model, probe));
    }
}

#[test]
fn visible_range_walk_on_uniform_heights() {
    let heights = alloc::vec![50u32; 100];

    let r = compute_visible_range(0, 500, &heights, 5);
    assert_eq!(r.start, 0);
    // First top past the 500px edge is item 11 (top 550), plus the buffer.
    assert_eq!(r.end, 16);

    let r = compute_visible_range(2500, 500, &heights, 5);
    assert_eq!(r.start, 50 - 5);
    assert_eq!(r.end, 61 + 5);
}

#[test]
fn visible_range_is_clamped_to_bounds() {
    let heights = alloc::vec![50u32; 10];

    let r = compute_visible_range(0, 500, &heights, 20);
    assert_eq!(r, VisibleRange { start: 0, end: 10 });

    // Scroll position past all content: the empty tail range, padded back by the buffer.
    let r = compute_visible_range(10_000, 500, &heights, 3);
    assert_eq!(r, VisibleRange { start: 7, end: 10 });
}

#[test]
fn visible_range_of_empty_or_unsized_viewport() {
    assert_eq!(
        compute_visible_range(0, 500, &[], 5),
        VisibleRange { start: 0, end: 0 }
    );
    let heights = alloc::vec![50u32; 10];
    assert_eq!(
        compute_visible_range(100, 0, &heights, 5),
        VisibleRange { start: 0, end: 0 }
    );
}

#[test]
fn visible_range_respects_variable_heights() {
    // Items: [100, 20, 400, 30, 200, ...]; offsets: 0, 100, 120, 520, 550.
    let heights = alloc::vec![100u32, 20, 400, 30, 200, 60, 60, 60];

    let r = compute_visible_range(110, 300, &heights, 1);
    // Viewport [110, 410): items 1 and 2 intersect; item 3 (top 520) ends the walk.
    assert_eq!(r.start, 0);
    assert_eq!(r.end, 4);

    let r = compute_visible_range(0, 100, &heights, 1);
    // Viewport [0, 100): only item 0; item 2's top (120) exceeds the edge.
    assert_eq!(r.start, 0);
    assert_eq!(r.end, 3);
}

#[test]
fn randomized_visible_range_matches_reference() {
    let mut rng = Lcg::new(99);
    for _ in 0..200 {
        let len = rng.gen_range_usize(0, 40);
        let heights: Vec<u32> = (0..len).map(|_| rng.gen_range_u32(10, 500)).collect();
        let total = naive_total(&heights);
        let scroll_top = rng.gen_range_u64(0, total + 1000);
        let viewport = rng.gen_range_u32(1, 1200);
        let buffer = rng.gen_range_usize(1, 21);

        let got = compute_visible_range(scroll_top, viewport, &heights, buffer);
        let want = naive_visible_range(scroll_top, viewport, &heights, buffer);
        assert_eq!(got, want, "heights={heights:?} top={scroll_top} view={viewport}");
        assert!(got.start <= got.end);
        assert!(got.end <= len);
    }
}

#[test]
fn initial_range_fits_viewport_plus_buffer() {
    // 10 items fit a 500px viewport at 50px each, plus a buffer of 5.
    let r = initial_visible_range(Some(500), 50, 5, 100);
    assert_eq!(r, VisibleRange { start: 0, end: 15 });

    // Clamped to the item count.
    let r = initial_visible_range(Some(500), 50, 5, 12);
    assert_eq!(r, VisibleRange { start: 0, end: 12 });

    // Partial last item still counts toward the fit.
    let r = initial_visible_range(Some(510), 50, 2, 100);
    assert_eq!(r, VisibleRange { start: 0, end: 13 });
}

#[test]
fn initial_range_without_viewport_uses_default() {
    assert_eq!(initial_visible_range(None, 50, 5, 100), DEFAULT_RANGE);
    assert_eq!(
        initial_visible_range(None, 50, 5, 2),
        VisibleRange { start: 0, end: 2 }
    );
    assert_eq!(
        initial_visible_range(Some(0), 50, 5, 100),
        DEFAULT_RANGE
    );
}

#[test]
fn config_values_clamp_out_of_range_input() {
    assert_eq!(Threshold::new(1.5).get(), Threshold::MAX);
    assert_eq!(Threshold::new(0.01).get(), Threshold::MIN);
    assert_eq!(Threshold::new(0.9).get(), 0.9);
    assert_eq!(Threshold::new(f64::NAN).get(), Threshold::DEFAULT);

    assert_eq!(ItemHeight::new(5).get(), ItemHeight::MIN);
    assert_eq!(ItemHeight::new(5_000).get(), ItemHeight::MAX);
    assert_eq!(ItemHeight::new(150).get(), 150);

    assert_eq!(BufferSize::new(0).get(), BufferSize::MIN);
    assert_eq!(BufferSize::new(200).get(), BufferSize::MAX);

    assert_eq!(TotalItems::new(60_000).get(), TotalItems::MAX);
    assert_eq!(TotalItems::new(0).get(), 0);
}

#[test]
fn config_defaults_match_constants() {
    assert_eq!(ItemHeight::default().get(), ItemHeight::DEFAULT);
    assert_eq!(BufferSize::default().get(), BufferSize::DEFAULT);
    assert_eq!(Threshold::default().get(), Threshold::DEFAULT);
}

#[test]
fn visible_range_helpers() {
    let r = VisibleRange { start: 3, end: 7 };
    assert!(!r.is_empty());
    assert_eq!(r.len(), 4);
    assert!(r.contains(3));
    assert!(!r.contains(7));
    assert!(VisibleRange { start: 2, end: 2 }.is_empty());
}
