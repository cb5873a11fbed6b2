use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use dynwindow::LoadDirection;

/// Failure reported by a backfill callback's future.
pub type LoadError = Box<dyn std::error::Error + Send + Sync>;

/// Future returned by the backfill callback.
///
/// Resolves `Ok(true)` when more data will arrive (a growth event follows), `Ok(false)` when the
/// head is exhausted. Polled cooperatively on the host's single thread, so it need not be `Send`.
pub type LoadLatestFuture = Pin<Box<dyn Future<Output = Result<bool, LoadError>>>>;

/// Fire-and-forget append callback; completion is observed through the next growth event.
pub type LoadMoreCallback = Arc<dyn Fn() + Send + Sync>;

/// Backfill callback, invoked to load newer data at the head.
pub type LoadLatestCallback = Arc<dyn Fn() -> LoadLatestFuture + Send + Sync>;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Decides, from scroll telemetry, whether to request more data at the tail or backfill at the
/// head, and keeps the viewport anchored when backfilled content lands above it.
///
/// State machine: `Idle -> Loading -> Idle`. One shared in-flight flag covers both directions, so
/// at most one load is outstanding per engine instance; triggers seen while loading are ignored.
/// There is no cancellation and no timeout — a callback that never resolves blocks further loads.
pub struct DataLoadCoordinator {
    loading: bool,
    direction: LoadDirection,
    previous_total: usize,
    last_scroll_top: u64,
    manual_scroll: bool,
    pending: Option<LoadLatestFuture>,
}

impl std::fmt::Debug for DataLoadCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataLoadCoordinator")
            .field("loading", &self.loading)
            .field("direction", &self.direction)
            .field("previous_total", &self.previous_total)
            .field("last_scroll_top", &self.last_scroll_top)
            .field("manual_scroll", &self.manual_scroll)
            .field("pending", &self.pending.is_some())
            .finish()
    }
}

impl DataLoadCoordinator {
    /// Starts idle with the direction marker at `Prepend`: growth that arrives before any
    /// trigger has fired is treated as head-side.
    pub fn new(total_items: usize) -> Self {
        Self {
            loading: false,
            direction: LoadDirection::Prepend,
            previous_total: total_items,
            last_scroll_top: 0,
            manual_scroll: false,
            pending: None,
        }
    }

    /// True exactly while one load callback is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The end the most recent growth targeted; consulted when new slots arrive.
    pub fn direction(&self) -> LoadDirection {
        self.direction
    }

    /// Marks the next growth event as user-initiated, suppressing anchor correction once.
    pub fn mark_manual_scroll(&mut self) {
        self.manual_scroll = true;
    }

    /// Evaluates the append and backfill triggers for one scroll sample.
    ///
    /// Ignored entirely while a load is in flight — including the scroll-top sample itself, so
    /// the upward-movement comparison resumes from the pre-load position.
    pub fn check_triggers(
        &mut self,
        scroll_top: u64,
        viewport_height: u32,
        scroll_extent: u64,
        threshold: f64,
        on_load_more: Option<&LoadMoreCallback>,
        on_load_latest: Option<&LoadLatestCallback>,
    ) {
        if self.loading || scroll_extent == 0 {
            return;
        }

        let extent = scroll_extent as f64;
        let bottom_ratio = round2((scroll_top + viewport_height as u64) as f64 / extent);
        let scrolling_up = scroll_top < self.last_scroll_top;
        self.last_scroll_top = scroll_top;

        if let Some(load_more) = on_load_more {
            if bottom_ratio > threshold {
                dw_debug!(scroll_top, bottom_ratio, "append trigger");
                self.direction = LoadDirection::Append;
                self.loading = true;
                load_more();
                return;
            }
        }

        if let Some(load_latest) = on_load_latest {
            if scrolling_up && (scroll_top as f64 / extent) < 1.0 - threshold {
                dw_debug!(scroll_top, "backfill trigger");
                self.direction = LoadDirection::Prepend;
                self.loading = true;
                self.begin_backfill(load_latest);
            }
        }
    }

    /// Proactive backfill when newer data becomes available while the surface is already at the
    /// top. A no-op while loading or away from position 0.
    pub fn check_at_top(
        &mut self,
        scroll_top: u64,
        has_latest_data: bool,
        on_load_latest: Option<&LoadLatestCallback>,
    ) {
        if self.loading || scroll_top != 0 || !has_latest_data {
            return;
        }
        let Some(load_latest) = on_load_latest else {
            return;
        };
        dw_debug!("at-top backfill trigger");
        self.loading = true;
        self.begin_backfill(load_latest);
    }

    fn begin_backfill(&mut self, load_latest: &LoadLatestCallback) {
        self.pending = Some(load_latest());
        // An already-resolved future settles in the same pass.
        self.poll_pending();
    }

    /// Advances the outstanding backfill future, if any, without blocking.
    ///
    /// `Ok(true)` keeps the coordinator loading until the growth event arrives; `Ok(false)` and
    /// errors return it to idle so a later scroll event may retry.
    pub fn poll_pending(&mut self) {
        let Some(future) = self.pending.as_mut() else {
            return;
        };
        let waker = futures_task::noop_waker();
        let mut cx = Context::from_waker(&waker);
        match future.as_mut().poll(&mut cx) {
            Poll::Pending => {}
            Poll::Ready(Ok(true)) => {
                self.pending = None;
            }
            Poll::Ready(Ok(false)) => {
                self.pending = None;
                self.loading = false;
            }
            Poll::Ready(Err(_err)) => {
                dw_warn!(error = %_err, "backfill load failed");
                self.pending = None;
                self.loading = false;
            }
        }
    }

    /// Records a growth of the total item count and completes the in-flight load cycle.
    ///
    /// Returns the scroll-offset correction to apply before the next paint: for head-side growth
    /// that was not preceded by a manual scroll-to-top, the inserted slots' default extent; zero
    /// otherwise. The manual marker is consumed either way.
    pub fn apply_growth(&mut self, new_total: usize, default_height: u32) -> u64 {
        let grew = new_total > self.previous_total;
        let correction = if grew
            && self.direction == LoadDirection::Prepend
            && !self.manual_scroll
        {
            (new_total - self.previous_total) as u64 * default_height as u64
        } else {
            0
        };
        dw_debug!(
            previous_total = self.previous_total,
            new_total,
            correction,
            "growth event"
        );
        self.previous_total = new_total;
        self.loading = false;
        self.manual_scroll = false;
        correction
    }
}
