use core::cmp;

use crate::VisibleRange;

/// Fallback range used before any viewport geometry is known.
pub const DEFAULT_RANGE: VisibleRange = VisibleRange { start: 0, end: 4 };

/// Maps a scroll position onto a buffered range of item indices.
///
/// A single linear walk accumulates item offsets; heights are non-uniform so offsets must be
/// summed cumulatively. An item is visible when its half-open `[top, bottom)` interval intersects
/// `[scroll_top, scroll_top + viewport_height)`. `start` is the first visible index; `end` is the
/// first index whose top exceeds the viewport's bottom edge, or the item count if none does. When
/// the scroll position lies past all content, the empty range at the tail is used. The result is
/// padded by `buffer_size` on both sides and clamped to `[0, len]`.
///
/// Pure function of its inputs.
pub fn compute_visible_range(
    scroll_top: u64,
    viewport_height: u32,
    heights: &[u32],
    buffer_size: usize,
) -> VisibleRange {
    let len = heights.len();
    if len == 0 || viewport_height == 0 {
        return VisibleRange { start: 0, end: 0 };
    }

    let scroll_end = scroll_top.saturating_add(viewport_height as u64);

    let mut start = None;
    let mut end = None;
    let mut top = 0u64;
    for (i, &height) in heights.iter().enumerate() {
        let bottom = top.saturating_add(height as u64);
        if start.is_none() && top < scroll_end && bottom > scroll_top {
            start = Some(i);
        }
        if top > scroll_end {
            end = Some(i);
            break;
        }
        top = bottom;
    }

    let start = start.unwrap_or(len);
    let end = end.unwrap_or(len);

    VisibleRange {
        start: start.saturating_sub(buffer_size),
        end: cmp::min(len, end.saturating_add(buffer_size)),
    }
}

/// The visible range to use before the first scroll event.
///
/// With a viewport-height hint, fits `ceil(viewport / item_height)` items plus the buffer; with
/// no hint (no scrollable surface laid out yet), falls back to [`DEFAULT_RANGE`]. Either way the
/// result is clamped to `total_items`.
pub fn initial_visible_range(
    viewport_height: Option<u32>,
    item_height: u32,
    buffer_size: usize,
    total_items: usize,
) -> VisibleRange {
    let end = match viewport_height {
        Some(viewport) if viewport > 0 && item_height > 0 => {
            let fit = (viewport as usize).div_ceil(item_height as usize);
            cmp::max(1, fit).saturating_add(buffer_size)
        }
        _ => DEFAULT_RANGE.end,
    };
    VisibleRange {
        start: 0,
        end: cmp::min(end, total_items),
    }
}
