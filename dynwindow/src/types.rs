/// The contiguous span of logical indices currently materialized for rendering.
///
/// `end` is exclusive and already includes buffer padding. The invariant
/// `0 <= start <= end <= total items` holds for every range the engine produces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start: usize,
    pub end: usize, // exclusive
}

impl VisibleRange {
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }
}

/// Which end of the logical sequence the most recent data growth targeted.
///
/// `Prepend` growth inserts new slots before the existing ones and requires scroll-offset
/// compensation so content above the viewport does not visually shift.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoadDirection {
    Append,
    Prepend,
}
