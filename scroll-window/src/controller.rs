use alloc::vec::Vec;
use core::mem;

use crate::anchor::{RowHeights, UniformRowHeight, anchor_offset};
use crate::merge::merge_window;
use crate::{
    Applied, BoundaryState, ConcurrencyGate, ConfigError, Edge, FetchKind, FetchRequest,
    RawScrollMetrics, Row, RowContent, ScrollCursor, ScrollOutcome, WindowError, WindowOptions,
    WindowSnapshot,
};

/// Sliding-window state machine.
///
/// The controller owns the window, its boundaries, the scroll cursor and the loading gate. It
/// never performs I/O: scroll events go in through [`WindowController::on_scroll`], fetch
/// requests come out, and fetch results go back in through [`WindowController::complete`].
/// The adapter crate wires this to an async data provider and a scroll container.
///
/// States:
/// - `Idle`: gate open, scroll events are classified and may start a fetch.
/// - `Loading`: exactly one [`FetchRequest`] is outstanding; scroll events are dropped
///   without touching any state.
///
/// Row geometry comes from `R`. [`WindowController::new`] uses
/// [`UniformRowHeight`] built from `options.row_height`; other providers are plugged in with
/// [`WindowController::with_row_heights`].
#[derive(Clone, Debug)]
pub struct WindowController<T, R = UniformRowHeight> {
    options: WindowOptions,
    rows: R,
    window: Vec<T>,
    boundaries: BoundaryState,
    cursor: ScrollCursor,
    gate: ConcurrencyGate,
    pending: Option<FetchRequest>,
}

impl<T> WindowController<T> {
    pub fn new(options: WindowOptions) -> Result<Self, ConfigError> {
        Self::with_row_heights(options, UniformRowHeight(options.row_height))
    }
}

impl<T, R: RowHeights> WindowController<T, R> {
    /// Like [`WindowController::new`], with a custom row geometry.
    ///
    /// Anchor offsets and [`WindowController::total_height`] are measured with `rows`;
    /// `options.row_height` is still validated but otherwise unused.
    pub fn with_row_heights(options: WindowOptions, rows: R) -> Result<Self, ConfigError> {
        options.validate()?;
        wdebug!(
            initial_offset = options.initial_offset,
            page_size = options.page_size,
            window_capacity = options.window_capacity,
            "WindowController::new"
        );
        Ok(Self {
            rows,
            window: Vec::with_capacity(options.window_capacity),
            boundaries: BoundaryState::new(
                options.initial_offset,
                options.window_capacity as i64,
            ),
            cursor: ScrollCursor::default(),
            gate: ConcurrencyGate::new(),
            pending: None,
            options,
        })
    }

    pub fn options(&self) -> &WindowOptions {
        &self.options
    }

    pub fn row_heights(&self) -> &R {
        &self.rows
    }

    pub fn window(&self) -> &[T] {
        &self.window
    }

    pub fn boundaries(&self) -> BoundaryState {
        self.boundaries
    }

    pub fn cursor(&self) -> i64 {
        self.cursor.get()
    }

    pub fn is_loading(&self) -> bool {
        self.gate.is_loading()
    }

    /// Returns `true` once a full window has been loaded. Edge fetches are only issued after
    /// that point.
    pub fn is_ready(&self) -> bool {
        self.window.len() == self.options.window_capacity
    }

    pub fn pending(&self) -> Option<FetchRequest> {
        self.pending
    }

    pub fn retention(&self) -> usize {
        self.options.retention()
    }

    pub fn snapshot(&self) -> WindowSnapshot {
        WindowSnapshot {
            boundaries: self.boundaries,
            cursor: self.cursor.get(),
            loading: self.gate.is_loading(),
            pending: self.pending,
            len: self.window.len(),
        }
    }

    /// Starts the full-window load issued on mount.
    ///
    /// The request reads `window_capacity` items from `initial_offset + 1`. Returns `None` if
    /// a fetch is already outstanding.
    pub fn begin_initial_load(&mut self) -> Option<FetchRequest> {
        let request = FetchRequest {
            kind: FetchKind::Initial,
            offset: self.options.initial_offset.saturating_add(1),
            len: self.options.window_capacity,
        };
        if !self.enter(request) {
            wtrace!("begin_initial_load: fetch already outstanding");
            return None;
        }
        wdebug!(offset = request.offset, len = request.len, "begin_initial_load");
        Some(request)
    }

    /// Feeds one scroll event.
    ///
    /// While loading, the event is dropped and nothing changes, not even the cursor.
    /// Otherwise the cursor always moves to the new offset, and a fetch request is returned
    /// if the top (while scrolling up) or the bottom (while scrolling down) was reached.
    pub fn on_scroll(&mut self, raw: RawScrollMetrics) -> ScrollOutcome {
        if self.gate.is_loading() {
            wtrace!(scroll_top = raw.scroll_top, "on_scroll: dropped while loading");
            return ScrollOutcome::Dropped;
        }

        let sample = self.cursor.observe(raw);
        let Some(edge) = sample.edge else {
            return ScrollOutcome::Moved(sample);
        };
        if !self.is_ready() {
            wtrace!("on_scroll: edge reached before the window was loaded");
            return ScrollOutcome::Moved(sample);
        }

        let request = match edge {
            Edge::Top => self.boundaries.prepend_request(self.options.page_size),
            Edge::Bottom => self.boundaries.append_request(self.options.page_size),
        };
        let Some(request) = request else {
            wwarn!(
                upper = self.boundaries.upper,
                lower = self.boundaries.lower,
                "on_scroll: window is at the end of the index range"
            );
            return ScrollOutcome::Moved(sample);
        };
        if !self.enter(request) {
            return ScrollOutcome::Dropped;
        }
        wdebug!(
            offset = request.offset,
            len = request.len,
            scroll_top = sample.scroll_top,
            "on_scroll: edge reached"
        );
        ScrollOutcome::Fetch(request)
    }

    /// Applies the result of `request` and reopens the gate.
    ///
    /// On success the page is merged, the boundaries shift by one page (edge fetches only)
    /// and the returned [`Applied::scroll_to`] tells the container where to scroll. On any
    /// failure the window and boundaries are left exactly as they were.
    pub fn complete<E>(
        &mut self,
        request: FetchRequest,
        result: Result<Vec<T>, E>,
    ) -> Result<Applied, WindowError<E>> {
        self.check_pending(request)?;
        self.release();

        let page = match result {
            Ok(page) => page,
            Err(source) => {
                wwarn!(offset = request.offset, len = request.len, "fetch failed");
                return Err(WindowError::Fetch { request, source });
            }
        };
        if page.len() != request.len {
            wwarn!(
                offset = request.offset,
                expected = request.len,
                actual = page.len(),
                "fetched page has the wrong length"
            );
            return Err(WindowError::PageLength {
                request,
                expected: request.len,
                actual: page.len(),
            });
        }

        let window = mem::take(&mut self.window);
        self.window = merge_window(request.kind, window, page, self.options.retention());
        let shifted = self.boundaries.shift(request.kind, self.options.page_size_i64());
        debug_assert!(shifted, "requests are only issued for shiftable boundaries");
        debug_assert_eq!(self.window.len(), self.options.window_capacity);

        let scroll_to = anchor_offset(request.kind, self.options.page_size, &self.rows);
        wdebug!(
            upper = self.boundaries.upper,
            lower = self.boundaries.lower,
            len = self.window.len(),
            "merge applied"
        );
        Ok(Applied {
            kind: request.kind,
            scroll_to,
        })
    }

    /// Reopens the gate for `request` without touching the window.
    ///
    /// Used when the caller gives up on a fetch (e.g. its future was dropped).
    pub fn abandon(&mut self, request: FetchRequest) -> bool {
        if self.pending != Some(request) {
            return false;
        }
        wwarn!(offset = request.offset, len = request.len, "fetch abandoned");
        self.release();
        true
    }

    /// Iterates the rows a renderer should draw, top to bottom.
    ///
    /// While a fetch is outstanding every row is reported as [`RowContent::Loading`].
    pub fn rows(&self) -> impl ExactSizeIterator<Item = Row<'_, T>> + '_ {
        let loading = self.gate.is_loading();
        self.window
            .iter()
            .enumerate()
            .map(move |(position, item)| Row {
                position,
                top: self.rows.offset_of(position),
                height: self.rows.row_height(position),
                content: if loading {
                    RowContent::Loading
                } else {
                    RowContent::Item(item)
                },
            })
    }

    /// Pixel height of the materialized window (what a container reports as `scrollHeight`).
    pub fn total_height(&self) -> u64 {
        self.rows.offset_of(self.window.len())
    }

    fn enter(&mut self, request: FetchRequest) -> bool {
        if !self.gate.try_enter() {
            return false;
        }
        self.pending = Some(request);
        true
    }

    fn release(&mut self) {
        self.pending = None;
        self.gate.leave();
    }

    fn check_pending<E>(&self, request: FetchRequest) -> Result<(), WindowError<E>> {
        match self.pending {
            None => Err(WindowError::NoPendingFetch),
            Some(expected) if expected != request => Err(WindowError::RequestMismatch {
                expected,
                actual: request,
            }),
            Some(_) => Ok(()),
        }
    }
}
