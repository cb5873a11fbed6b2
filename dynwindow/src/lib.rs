//! A headless windowing engine for very large lists with measured item heights.
//!
//! For the host-facing orchestration (load coordination, throttling, scroll control), see the
//! `dynwindow-adapter` crate.
//!
//! This crate focuses on the core math and state needed to keep only a bounded window of a huge
//! list materialized: per-item heights with prefix sums over them, expansion flags, and the
//! mapping from a scroll position to a buffered visible index range.
//!
//! It is UI-agnostic. A rendering layer is expected to provide:
//! - viewport height and scroll offset
//! - measured item heights (falling back to a configured default until measured)
//! - data growth notifications (append at the tail, backfill at the head)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod config;
mod fenwick;
mod store;
mod types;
mod viewport;

#[cfg(test)]
mod tests;

pub use config::{BufferSize, ItemHeight, Threshold, TotalItems};
pub use store::ItemStateStore;
pub use types::{LoadDirection, VisibleRange};
pub use viewport::{DEFAULT_RANGE, compute_visible_range, initial_visible_range};
