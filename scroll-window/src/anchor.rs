use crate::FetchKind;

/// Maps window positions to pixel offsets.
///
/// Only [`UniformRowHeight`] ships with this crate. Keeping the anchor math behind this trait
/// means a variable-height provider only has to answer the same two questions.
pub trait RowHeights {
    /// Height of the row at `position` in the window.
    fn row_height(&self, position: usize) -> u32;

    /// Pixel offset of the top edge of the row at `position` (the sum of all rows before it).
    fn offset_of(&self, position: usize) -> u64;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UniformRowHeight(pub u32);

impl RowHeights for UniformRowHeight {
    fn row_height(&self, _position: usize) -> u32 {
        self.0
    }

    fn offset_of(&self, position: usize) -> u64 {
        (position as u64).saturating_mul(self.0 as u64)
    }
}

/// Scroll offset that keeps the viewport steady after a merge of `kind`.
///
/// - `Prepend`: one page down, past the rows that were just placed on top.
/// - `Append`: two pages down.
/// - `Initial`: `None`, the container is left alone.
pub fn anchor_offset(kind: FetchKind, page_size: usize, rows: &impl RowHeights) -> Option<u64> {
    match kind {
        FetchKind::Initial => None,
        FetchKind::Prepend => Some(rows.offset_of(page_size)),
        FetchKind::Append => Some(rows.offset_of(page_size.saturating_mul(2))),
    }
}
