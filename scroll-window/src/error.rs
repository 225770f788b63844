use thiserror::Error;

use crate::FetchRequest;

/// Rejected [`crate::WindowOptions`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("page_size must be greater than zero")]
    ZeroPageSize,

    #[error("row_height must be greater than zero")]
    ZeroRowHeight,

    #[error("window_capacity {capacity} is not a multiple of page_size {page_size}")]
    CapacityNotMultiple { capacity: usize, page_size: usize },

    #[error("window_capacity {capacity} is smaller than the minimum of {minimum}")]
    CapacityTooSmall { capacity: usize, minimum: usize },

    #[error("window_capacity {capacity} does not fit the virtual index range")]
    CapacityOverflow { capacity: usize },

    #[error("initial_offset {initial_offset} leaves no room for a page on either side")]
    InitialOffsetOutOfRange { initial_offset: i64 },
}

/// Failure to apply a fetch to the window.
///
/// Every variant leaves the window and its boundaries untouched. All variants except
/// [`WindowError::NoPendingFetch`] and [`WindowError::RequestMismatch`] also release the
/// loading gate, so scrolling resumes.
#[derive(Debug, Error)]
pub enum WindowError<E> {
    #[error("page fetch at offset {} ({} items) failed", .request.offset, .request.len)]
    Fetch {
        request: FetchRequest,
        #[source]
        source: E,
    },

    #[error("page fetch at offset {} returned {actual} items, expected {expected}", .request.offset)]
    PageLength {
        request: FetchRequest,
        expected: usize,
        actual: usize,
    },

    #[error("no fetch is outstanding")]
    NoPendingFetch,

    #[error("completion for {actual:?} does not match the outstanding {expected:?}")]
    RequestMismatch {
        expected: FetchRequest,
        actual: FetchRequest,
    },
}

impl<E> WindowError<E> {
    /// Returns `true` when the error came from the data provider itself.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::Fetch { .. })
    }

    /// The request this error belongs to, when there is one.
    pub fn request(&self) -> Option<FetchRequest> {
        match self {
            Self::Fetch { request, .. } | Self::PageLength { request, .. } => Some(*request),
            Self::RequestMismatch { actual, .. } => Some(*actual),
            Self::NoPendingFetch => None,
        }
    }
}
