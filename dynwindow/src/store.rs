use alloc::vec::Vec;

use crate::LoadDirection;
use crate::fenwick::Fenwick;

/// Owns the per-item height and expansion-flag arrays.
///
/// Both arrays always have the same length as the current total item count. Growth only ever adds
/// entries at one end; nothing is removed or reordered. All mutation of the arrays goes through
/// this type.
///
/// Out-of-range indices are programming errors (a caller/engine desynchronization) and panic.
#[derive(Clone, Debug)]
pub struct ItemStateStore {
    heights: Vec<u32>,
    expanded: Vec<bool>,
    sums: Fenwick,
}

impl ItemStateStore {
    /// Allocates `total_items` slots, each with `default_height` and a cleared expansion flag.
    pub fn new(total_items: usize, default_height: u32) -> Self {
        let heights = alloc::vec![default_height; total_items];
        let sums = Fenwick::from_heights(&heights);
        Self {
            heights,
            expanded: alloc::vec![false; total_items],
            sums,
        }
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    pub fn heights(&self) -> &[u32] {
        &self.heights
    }

    pub fn height(&self, index: usize) -> u32 {
        self.heights[index]
    }

    /// Replaces the stored height for `index` with a measured value.
    ///
    /// Returns the signed change; the total extent moves by exactly this delta, as do the offsets
    /// of every item after `index`. Visible-range recomputation is the caller's job.
    pub fn update_height(&mut self, index: usize, new_height: u32) -> i64 {
        assert!(
            index < self.heights.len(),
            "height index out of bounds (index={index}, len={})",
            self.heights.len()
        );
        let old = self.heights[index];
        if old == new_height {
            return 0;
        }
        self.heights[index] = new_height;
        let delta = new_height as i64 - old as i64;
        self.sums.add(index, delta);
        delta
    }

    /// Flips the expansion flag at `index`. Two calls restore the original value.
    pub fn toggle_expansion(&mut self, index: usize) {
        assert!(
            index < self.expanded.len(),
            "expansion index out of bounds (index={index}, len={})",
            self.expanded.len()
        );
        self.expanded[index] = !self.expanded[index];
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded[index]
    }

    /// Sum of all heights strictly before `index`; `offset_of(0) == 0`.
    pub fn offset_of(&self, index: usize) -> u64 {
        assert!(
            index <= self.heights.len(),
            "offset index out of bounds (index={index}, len={})",
            self.heights.len()
        );
        self.sums.prefix_sum(index)
    }

    pub fn total_extent(&self) -> u64 {
        self.sums.total()
    }

    /// Grows both arrays to `new_total` entries of `default_height`/`false`.
    ///
    /// `Append` adds the new slots after the existing entries; `Prepend` inserts them before.
    /// No-op when `new_total` does not exceed the current length.
    pub fn grow_to(&mut self, new_total: usize, direction: LoadDirection, default_height: u32) {
        let cur = self.heights.len();
        if new_total <= cur {
            return;
        }
        let added = new_total - cur;
        dw_debug!(cur, new_total, ?direction, "ItemStateStore::grow_to");

        match direction {
            LoadDirection::Append => {
                for _ in 0..added {
                    self.heights.push(default_height);
                    self.expanded.push(false);
                    self.sums.push_value(default_height as u64);
                }
            }
            LoadDirection::Prepend => {
                let mut heights = alloc::vec![default_height; new_total];
                heights[added..].copy_from_slice(&self.heights);
                self.heights = heights;

                let mut expanded = alloc::vec![false; new_total];
                expanded[added..].copy_from_slice(&self.expanded);
                self.expanded = expanded;

                self.sums = Fenwick::from_heights(&self.heights);
            }
        }
        debug_assert_eq!(self.heights.len(), self.sums.len());
    }
}
