use alloc::vec::Vec;

use crate::FetchKind;

/// Combines a fetched page with the retained part of the current window.
///
/// - `Prepend`: `page ++ window[..retain]` (the tail is dropped).
/// - `Append`: `window[len - retain..] ++ page` (the head is dropped).
/// - `Initial`: the page replaces the window.
///
/// With a full window and `page.len() == capacity - retain`, the result is exactly
/// `capacity` items long. Both inputs are consumed; no item is cloned.
pub fn merge_window<T>(
    kind: FetchKind,
    mut window: Vec<T>,
    mut page: Vec<T>,
    retain: usize,
) -> Vec<T> {
    match kind {
        FetchKind::Initial => page,
        FetchKind::Prepend => {
            window.truncate(retain);
            page.reserve_exact(window.len());
            page.append(&mut window);
            page
        }
        FetchKind::Append => {
            let drop = window.len().saturating_sub(retain);
            window.drain(..drop);
            window.reserve_exact(page.len());
            window.append(&mut page);
            window
        }
    }
}
