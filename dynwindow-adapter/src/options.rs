use std::sync::Arc;

use dynwindow::{BufferSize, ItemHeight, Threshold, TotalItems};

use crate::loader::{LoadLatestCallback, LoadLatestFuture, LoadMoreCallback};

/// Configuration for [`crate::DynamicWindow`].
///
/// Numeric fields are validated newtypes; the raw-number builder methods clamp out-of-range input
/// (with a warning through the tracing layer) rather than failing — configuration is never fatal.
pub struct WindowOptions {
    pub total_items: TotalItems,
    pub item_height: ItemHeight,
    pub buffer_size: BufferSize,
    pub threshold: Threshold,

    /// Whether newer data is known to exist at the head. While true and the surface sits at the
    /// top, the backfill callback is invoked proactively.
    pub has_latest_data: bool,

    /// Viewport height to assume before the first scroll event, if the host already knows it.
    /// Without it the engine starts from a small static range.
    pub initial_viewport_height: Option<u32>,

    /// Fire-and-forget append request; the host signals completion by growing the item count.
    pub on_load_more: Option<LoadMoreCallback>,

    /// Backfill request returning a future; `Ok(true)` promises a growth event, `Ok(false)`
    /// means the head is exhausted.
    pub on_load_latest: Option<LoadLatestCallback>,
}

impl WindowOptions {
    pub fn new(total_items: usize) -> Self {
        Self {
            total_items: TotalItems::new(total_items),
            item_height: ItemHeight::default(),
            buffer_size: BufferSize::default(),
            threshold: Threshold::default(),
            has_latest_data: false,
            initial_viewport_height: None,
            on_load_more: None,
            on_load_latest: None,
        }
    }

    pub fn with_item_height(mut self, item_height: u32) -> Self {
        self.item_height = ItemHeight::new(item_height);
        self
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = BufferSize::new(buffer_size);
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Threshold::new(threshold);
        self
    }

    pub fn with_has_latest_data(mut self, has_latest_data: bool) -> Self {
        self.has_latest_data = has_latest_data;
        self
    }

    pub fn with_initial_viewport_height(mut self, viewport_height: Option<u32>) -> Self {
        self.initial_viewport_height = viewport_height;
        self
    }

    pub fn with_on_load_more(
        mut self,
        on_load_more: Option<impl Fn() + Send + Sync + 'static>,
    ) -> Self {
        self.on_load_more = on_load_more.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_load_latest(
        mut self,
        on_load_latest: Option<impl Fn() -> LoadLatestFuture + Send + Sync + 'static>,
    ) -> Self {
        self.on_load_latest = on_load_latest.map(|f| Arc::new(f) as _);
        self
    }
}

impl Clone for WindowOptions {
    fn clone(&self) -> Self {
        Self {
            total_items: self.total_items,
            item_height: self.item_height,
            buffer_size: self.buffer_size,
            threshold: self.threshold,
            has_latest_data: self.has_latest_data,
            initial_viewport_height: self.initial_viewport_height,
            on_load_more: self.on_load_more.clone(),
            on_load_latest: self.on_load_latest.clone(),
        }
    }
}

impl std::fmt::Debug for WindowOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowOptions")
            .field("total_items", &self.total_items)
            .field("item_height", &self.item_height)
            .field("buffer_size", &self.buffer_size)
            .field("threshold", &self.threshold)
            .field("has_latest_data", &self.has_latest_data)
            .field("initial_viewport_height", &self.initial_viewport_height)
            .finish_non_exhaustive()
    }
}
