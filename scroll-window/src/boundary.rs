use crate::{FetchKind, FetchRequest};

/// The two logical indices describing where the window sits in the virtual sequence.
///
/// `upper` is where the next prepend reads from (minus one page), `lower` is where the next
/// append reads from. Both always move together, so `lower - upper` is fixed for the life of
/// the window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundaryState {
    pub upper: i64,
    pub lower: i64,
}

impl BoundaryState {
    /// `upper = initial_offset`, `lower = window_capacity - 1`.
    ///
    /// Note that `lower` does not include `initial_offset`; with a non-zero initial offset the
    /// first append reads from `window_capacity - 1` regardless.
    pub fn new(initial_offset: i64, window_capacity: i64) -> Self {
        Self {
            upper: initial_offset,
            lower: window_capacity - 1,
        }
    }

    pub fn span(&self) -> i64 {
        self.lower - self.upper
    }

    /// The boundaries after one page of `kind`, or `None` if either would leave the `i64`
    /// index range.
    pub fn shifted(&self, kind: FetchKind, page_size: i64) -> Option<Self> {
        let (upper, lower) = match kind {
            FetchKind::Initial => return Some(*self),
            FetchKind::Prepend => (
                self.upper.checked_sub(page_size)?,
                self.lower.checked_sub(page_size)?,
            ),
            FetchKind::Append => (
                self.upper.checked_add(page_size)?,
                self.lower.checked_add(page_size)?,
            ),
        };
        Some(Self { upper, lower })
    }

    /// `None` when the window already sits at the start of the index range.
    pub fn prepend_request(&self, page_size: usize) -> Option<FetchRequest> {
        let next = self.shifted(FetchKind::Prepend, i64::try_from(page_size).ok()?)?;
        Some(FetchRequest {
            kind: FetchKind::Prepend,
            offset: next.upper,
            len: page_size,
        })
    }

    /// The append request reads from `lower` itself, not `lower + 1`.
    ///
    /// `None` when the window already sits at the end of the index range.
    pub fn append_request(&self, page_size: usize) -> Option<FetchRequest> {
        self.shifted(FetchKind::Append, i64::try_from(page_size).ok()?)?;
        Some(FetchRequest {
            kind: FetchKind::Append,
            offset: self.lower,
            len: page_size,
        })
    }

    /// Shifts both boundaries by one page in the direction of `kind`.
    ///
    /// `FetchKind::Initial` leaves the boundaries where they are. Returns `false`, leaving
    /// them untouched, if the shift would overflow; requests built by
    /// [`BoundaryState::prepend_request`] and [`BoundaryState::append_request`] never do.
    pub fn shift(&mut self, kind: FetchKind, page_size: i64) -> bool {
        match self.shifted(kind, page_size) {
            Some(next) => {
                *self = next;
                true
            }
            None => false,
        }
    }
}
