//! A headless sliding-window buffer for infinitely scrollable lists.
//!
//! For the async driver (data provider + scroll container wiring), see the
//! `scroll-window-adapter` crate.
//!
//! The crate keeps a fixed-length slice ("window") of a conceptually unbounded, ordered
//! sequence in memory. When the viewport reaches the top or bottom edge, one page is fetched
//! for that side, the opposite end of the window is discarded, and the scroll offset is
//! moved so the content does not visually jump.
//!
//! It is UI-agnostic and performs no I/O. An adapter is expected to:
//! - forward scroll container readings (`scroll_top`, `client_height`, `scroll_height`)
//! - run the [`FetchRequest`]s the controller emits and report the results back
//! - apply the returned scroll offset to the container
//!
//! # Known offsets
//!
//! Two request offsets are kept as the window was originally specified even though they look
//! off by one: the initial load reads from `initial_offset + 1`, and an append reads from
//! `lower` rather than `lower + 1`. The anchor offsets assume exactly this overlap.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod anchor;
mod boundary;
mod controller;
mod error;
mod gate;
mod merge;
mod metrics;
mod options;
mod state;
mod types;


pub use anchor::{RowHeights, UniformRowHeight, anchor_offset};
pub use boundary::BoundaryState;
pub use controller::WindowController;
pub use error::{ConfigError, WindowError};
pub use gate::ConcurrencyGate;
pub use merge::merge_window;
pub use metrics::{RawScrollMetrics, ScrollCursor, classify, round_half_up};
pub use options::{MIN_PAGES_PER_WINDOW, WindowOptions};
pub use state::WindowSnapshot;
pub use types::{
    Applied, Edge, FetchKind, FetchRequest, Row, RowContent, ScrollDirection, ScrollOutcome,
    ScrollSample,
};
