use crate::{Edge, ScrollDirection, ScrollSample};

/// Raw readings from a scroll container, as reported by the host (possibly fractional).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawScrollMetrics {
    pub scroll_top: f64,
    pub client_height: f64,
    pub scroll_height: f64,
}

impl RawScrollMetrics {
    pub fn new(scroll_top: f64, client_height: f64, scroll_height: f64) -> Self {
        Self {
            scroll_top,
            client_height,
            scroll_height,
        }
    }
}

/// The last observed (rounded) scroll offset, used to tell the direction of the next event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollCursor(pub i64);

impl ScrollCursor {
    pub fn get(&self) -> i64 {
        self.0
    }

    /// Classifies `raw` against the current cursor, then moves the cursor to the new offset.
    ///
    /// The cursor is overwritten whether or not an edge was reached.
    pub fn observe(&mut self, raw: RawScrollMetrics) -> ScrollSample {
        let sample = classify(self.0, raw);
        self.0 = sample.scroll_top;
        sample
    }
}

/// Rounds half toward positive infinity (`-2.5 -> -2`, `2.5 -> 3`).
///
/// NaN maps to `0`; values outside the `i64` range saturate.
pub fn round_half_up(value: f64) -> i64 {
    // `as` truncates toward zero and saturates; the fraction below is exact.
    let truncated = value as i64;
    let fraction = value - truncated as f64;
    if fraction < 0.0 {
        if fraction < -0.5 {
            truncated.saturating_sub(1)
        } else {
            truncated
        }
    } else if fraction >= 0.5 {
        truncated.saturating_add(1)
    } else {
        truncated
    }
}

/// Pure classification of one scroll reading against a previous cursor value.
pub fn classify(cursor: i64, raw: RawScrollMetrics) -> ScrollSample {
    let scroll_top = round_half_up(raw.scroll_top);
    let client_height = round_half_up(raw.client_height);
    let scroll_height = round_half_up(raw.scroll_height);

    let direction = if scroll_top < cursor {
        ScrollDirection::Backward
    } else {
        ScrollDirection::Forward
    };

    let edge = match direction {
        ScrollDirection::Backward if scroll_top == 0 => Some(Edge::Top),
        ScrollDirection::Forward
            if scroll_top.saturating_add(client_height) >= scroll_height =>
        {
            Some(Edge::Bottom)
        }
        _ => None,
    };

    ScrollSample {
        scroll_top,
        client_height,
        scroll_height,
        direction,
        edge,
    }
}
