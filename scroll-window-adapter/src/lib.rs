//! Async driver for the `scroll-window` crate.
//!
//! `scroll-window` is a sans-IO state machine. This crate connects it to the two external
//! collaborators an infinitely scrolling list needs:
//!
//! - a paged data source ([`PageFetcher`]), awaited once per edge fetch
//! - a scroll container ([`ScrollContainer`]), read on every scroll event and moved after
//!   each merge so the visible rows do not jump
//!
//! [`Controller`] targets single-threaded executors (UI event loops): scroll events that
//! arrive while a fetch is outstanding are dropped, never queued.
//!
//! This crate is intentionally framework-agnostic (no DOM/ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod container;
mod controller;
mod fetcher;

#[cfg(test)]
mod tests;

pub use container::{HeadlessContainer, ScrollContainer};
pub use controller::{Controller, ScrollReport};
pub use fetcher::{FetchFn, PageFetcher, fetch_fn};
