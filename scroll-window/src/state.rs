use crate::{BoundaryState, FetchRequest};

/// A lightweight snapshot of the controller's bookkeeping (everything except the items).
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowSnapshot {
    pub boundaries: BoundaryState,
    pub cursor: i64,
    pub loading: bool,
    pub pending: Option<FetchRequest>,
    pub len: usize,
}
