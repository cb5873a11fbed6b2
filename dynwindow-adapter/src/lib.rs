//! Host-facing orchestration for the `dynwindow` crate.
//!
//! The `dynwindow` crate is UI-agnostic and focuses on the core math and state. This crate
//! composes it into a single engine a rendering surface drives directly:
//!
//! - [`DynamicWindow`]: the one object exposed to the host — scroll handling, growth events,
//!   height measurements, expansion toggles, imperative scroll-to-top
//! - [`DataLoadCoordinator`]: single-flight append/backfill triggering with scroll anchoring
//!   across head-side growth
//! - [`Throttle`]: leading-plus-trailing rate limiting for high-frequency scroll events
//! - [`Tween`]/[`Easing`]: smooth scroll-to-top, adapter-driven via `tick`
//!
//! The engine never blocks and never spawns: the backfill callback's future is polled
//! cooperatively with a no-op waker from [`DynamicWindow::tick`].
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod engine;
mod loader;
mod options;
mod throttle;
mod tween;


pub use engine::{DynamicWindow, SCROLL_THROTTLE_MS, ScrollBehavior, ScrollToTopOptions};
pub use loader::{DataLoadCoordinator, LoadError, LoadLatestCallback, LoadLatestFuture, LoadMoreCallback};
pub use options::WindowOptions;
pub use throttle::Throttle;
pub use tween::{Easing, Tween};
