#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    /// Toward the end of the sequence (scroll offset grew or stayed put).
    Forward,
    /// Toward the start of the sequence (scroll offset shrank).
    Backward,
}

/// The edge of the window a scroll event reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Edge {
    Top,
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FetchKind {
    /// Full-window fetch issued on mount.
    Initial,
    /// One page placed before the window; the window's tail is dropped.
    Prepend,
    /// One page placed after the window; the window's head is dropped.
    Append,
}

impl From<Edge> for FetchKind {
    fn from(edge: Edge) -> Self {
        match edge {
            Edge::Top => Self::Prepend,
            Edge::Bottom => Self::Append,
        }
    }
}

/// A request for `len` items starting at virtual index `offset`.
///
/// Returned by [`crate::WindowController`] whenever it wants the data provider to run. The
/// same value must be handed back to `complete`/`abandon`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FetchRequest {
    pub kind: FetchKind,
    pub offset: i64,
    pub len: usize,
}

/// Result of feeding one scroll event to the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollOutcome {
    /// A fetch is outstanding; the event was ignored entirely.
    Dropped,
    /// The event was recorded but no fetch was started.
    Moved(ScrollSample),
    /// An edge was reached and the gate was entered. The caller must run the request and
    /// report back with `complete` (or `abandon`).
    Fetch(FetchRequest),
}

/// A normalized scroll reading plus its classification against the previous cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollSample {
    pub scroll_top: i64,
    pub client_height: i64,
    pub scroll_height: i64,
    pub direction: ScrollDirection,
    pub edge: Option<Edge>,
}

impl ScrollSample {
    pub fn is_up(&self) -> bool {
        self.direction == ScrollDirection::Backward
    }
}

/// A successfully applied fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Applied {
    pub kind: FetchKind,
    /// Vertical offset the scroll container should be moved to (`scrollTo(0, y)`).
    ///
    /// `None` for the initial load, which leaves the container where it is.
    pub scroll_to: Option<u64>,
}

/// What a renderer should draw for one row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowContent<'a, T> {
    Item(&'a T),
    Loading,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Row<'a, T> {
    /// Position inside the window (0-based).
    pub position: usize,
    /// Pixel offset of the row's top edge inside the scroll container.
    pub top: u64,
    pub height: u32,
    pub content: RowContent<'a, T>,
}

impl<T> Row<'_, T> {
    pub fn end(&self) -> u64 {
        self.top.saturating_add(self.height as u64)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.content, RowContent::Loading)
    }
}
