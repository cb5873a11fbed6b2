use dynwindow::{
    ItemStateStore, TotalItems, VisibleRange, compute_visible_range, initial_visible_range,
};

use crate::loader::DataLoadCoordinator;
use crate::options::WindowOptions;
use crate::throttle::Throttle;
use crate::tween::{Easing, Tween};

/// Scroll-driven recomputation runs at most once per this window; calls inside it coalesce into
/// one trailing run.
pub const SCROLL_THROTTLE_MS: u64 = 50;

/// How an imperative scroll-to-top moves the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    /// Jump straight to the top.
    Auto,
    /// Animate to the top; the tween is advanced by [`DynamicWindow::tick`].
    Smooth { duration_ms: u64, easing: Easing },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollToTopOptions {
    pub behavior: ScrollBehavior,
}

impl Default for ScrollToTopOptions {
    fn default() -> Self {
        Self {
            behavior: ScrollBehavior::Auto,
        }
    }
}

/// The windowing engine a host surface drives.
///
/// Owns the item state store, the load coordinator, and the canonical scroll offset. The host:
///
/// - forwards every scroll event to [`handle_scroll`](Self::handle_scroll) with its timestamp
/// - calls [`tick`](Self::tick) on its frame/timer cadence (trailing throttle edge, backfill
///   future polling, tween advancement)
/// - reports measured item heights through [`update_item_height`](Self::update_item_height)
/// - grows the data set and then calls [`set_total_items`](Self::set_total_items)
/// - mirrors [`scroll_offset`](Self::scroll_offset) back to its real scroll surface after anchor
///   corrections or an imperative scroll-to-top
///
/// All state is owned here and mutated through named methods; nothing is aliased with the host.
#[derive(Debug)]
pub struct DynamicWindow {
    options: WindowOptions,
    store: ItemStateStore,
    loader: DataLoadCoordinator,
    throttle: Throttle,
    tween: Option<Tween>,
    viewport_height: u32,
    scroll_offset: u64,
    visible_range: VisibleRange,
    deferred_scroll_top: Option<u64>,
}

impl DynamicWindow {
    pub fn new(options: WindowOptions) -> Self {
        let total_items = options.total_items.get();
        let default_height = options.item_height.get();
        let visible_range = initial_visible_range(
            options.initial_viewport_height,
            default_height,
            options.buffer_size.get(),
            total_items,
        );

        let mut engine = Self {
            store: ItemStateStore::new(total_items, default_height),
            loader: DataLoadCoordinator::new(total_items),
            throttle: Throttle::new(SCROLL_THROTTLE_MS),
            tween: None,
            viewport_height: options.initial_viewport_height.unwrap_or(0),
            scroll_offset: 0,
            visible_range,
            deferred_scroll_top: None,
            options,
        };

        // Newer data may already be waiting while the surface starts at the top.
        engine.loader.check_at_top(
            engine.scroll_offset,
            engine.options.has_latest_data,
            engine.options.on_load_latest.as_ref(),
        );
        engine
    }

    pub fn options(&self) -> &WindowOptions {
        &self.options
    }

    pub fn visible_range(&self) -> VisibleRange {
        self.visible_range
    }

    pub fn total_height(&self) -> u64 {
        self.store.total_extent()
    }

    pub fn item_heights(&self) -> &[u32] {
        self.store.heights()
    }

    pub fn total_items(&self) -> usize {
        self.store.len()
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn is_loading(&self) -> bool {
        self.loader.is_loading()
    }

    pub fn is_item_expanded(&self, index: usize) -> bool {
        self.store.is_expanded(index)
    }

    pub fn item_offset(&self, index: usize) -> u64 {
        self.store.offset_of(index)
    }

    /// Handles one scroll event from the host.
    ///
    /// Throttled to [`SCROLL_THROTTLE_MS`]; a deferred event keeps its latest scroll top and
    /// fires from [`tick`](Self::tick) once the window elapses. A pass recomputes the visible
    /// range first, then evaluates the load triggers.
    pub fn handle_scroll(&mut self, scroll_top: u64, now_ms: u64) {
        // User scrolling overrides an in-flight scroll-to-top animation.
        self.tween = None;
        if self.throttle.should_run(now_ms) {
            self.deferred_scroll_top = None;
            self.scroll_pass(scroll_top);
        } else {
            self.deferred_scroll_top = Some(scroll_top);
        }
    }

    /// Advances time-driven work: the scroll-to-top tween, the trailing edge of the scroll
    /// throttle, and the outstanding backfill future.
    pub fn tick(&mut self, now_ms: u64) {
        if let Some(tween) = self.tween {
            self.scroll_offset = tween.sample(now_ms);
            if tween.is_done(now_ms) {
                self.tween = None;
            }
            self.refresh_visible_range();
        }

        if self.throttle.poll(now_ms) {
            if let Some(scroll_top) = self.deferred_scroll_top.take() {
                self.scroll_pass(scroll_top);
            }
        }

        self.loader.poll_pending();
    }

    fn scroll_pass(&mut self, scroll_top: u64) {
        self.scroll_offset = scroll_top;
        self.refresh_visible_range();
        self.loader.check_triggers(
            scroll_top,
            self.viewport_height,
            self.store.total_extent(),
            self.options.threshold.get(),
            self.options.on_load_more.as_ref(),
            self.options.on_load_latest.as_ref(),
        );
    }

    fn refresh_visible_range(&mut self) {
        if self.viewport_height == 0 {
            // No scrollable surface yet; keep the initial range.
            return;
        }
        self.visible_range = compute_visible_range(
            self.scroll_offset,
            self.viewport_height,
            self.store.heights(),
            self.options.buffer_size.get(),
        );
    }

    pub fn set_viewport_height(&mut self, viewport_height: u32) {
        self.viewport_height = viewport_height;
        self.refresh_visible_range();
    }

    /// The growth event: the host's data set now holds `new_total` items.
    ///
    /// Completes the in-flight load cycle. For head-side growth not preceded by a manual
    /// scroll-to-top, the scroll offset is advanced by the inserted slots' default extent first,
    /// so the content the user is looking at stays put; the host must mirror the corrected
    /// offset back to its surface.
    pub fn set_total_items(&mut self, new_total: usize) {
        let new_total = TotalItems::new(new_total);
        let default_height = self.options.item_height.get();

        let correction = self.loader.apply_growth(new_total.get(), default_height);
        if correction > 0 {
            self.scroll_offset = self.scroll_offset.saturating_add(correction);
        }
        self.store
            .grow_to(new_total.get(), self.loader.direction(), default_height);
        self.options.total_items = new_total;
        self.refresh_visible_range();
    }

    /// Updates the newer-data marker; turning it on while the surface is at the top triggers a
    /// proactive backfill.
    pub fn set_has_latest_data(&mut self, has_latest_data: bool) {
        self.options.has_latest_data = has_latest_data;
        self.loader.check_at_top(
            self.scroll_offset,
            has_latest_data,
            self.options.on_load_latest.as_ref(),
        );
    }

    /// Records a measured item height and refreshes the visible range.
    pub fn update_item_height(&mut self, index: usize, height: u32) {
        self.store.update_height(index, height);
        self.refresh_visible_range();
    }

    /// Flips an item's expansion flag and refreshes the visible range.
    pub fn toggle_item_expanded(&mut self, index: usize) {
        self.store.toggle_expansion(index);
        self.refresh_visible_range();
    }

    /// Imperatively scrolls the surface to offset 0.
    ///
    /// Marks the next growth event as manual so backfilled content does not push the view back
    /// down. `Smooth` behavior animates via the tween; the host mirrors
    /// [`scroll_offset`](Self::scroll_offset) each tick.
    pub fn scroll_to_top(&mut self, options: ScrollToTopOptions, now_ms: u64) {
        self.loader.mark_manual_scroll();
        match options.behavior {
            ScrollBehavior::Auto => {
                self.tween = None;
                self.scroll_offset = 0;
                self.refresh_visible_range();
            }
            ScrollBehavior::Smooth {
                duration_ms,
                easing,
            } => {
                self.tween = Some(Tween::new(
                    self.scroll_offset,
                    0,
                    now_ms,
                    duration_ms,
                    easing,
                ));
            }
        }
    }
}
