use crate::ConfigError;

/// Smallest window, in pages, for which the retention math holds: one page is dropped on
/// every shift and at least two are kept.
pub const MIN_PAGES_PER_WINDOW: usize = 3;

/// Configuration for [`crate::WindowController`].
///
/// All fields are public so adapters can build it from their own settings; call
/// [`WindowOptions::validate`] (or let `WindowController::new` do it) before use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowOptions {
    /// Virtual index the window starts at. Seeds `upper_boundary`.
    pub initial_offset: i64,
    /// Items requested per edge fetch.
    pub page_size: usize,
    /// Number of items materialized at once. Must be a multiple of `page_size` and at least
    /// three pages.
    pub window_capacity: usize,
    /// Uniform row height in pixels.
    pub row_height: u32,
    /// Visible height of the scroll container in pixels (`0` when unknown).
    pub viewport_height: u32,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self::new(100, 39)
    }
}

impl WindowOptions {
    /// Creates options with a three-page window.
    pub fn new(page_size: usize, row_height: u32) -> Self {
        Self {
            initial_offset: 0,
            page_size,
            window_capacity: page_size.saturating_mul(MIN_PAGES_PER_WINDOW),
            row_height,
            viewport_height: 0,
        }
    }

    pub fn with_initial_offset(mut self, initial_offset: i64) -> Self {
        self.initial_offset = initial_offset;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_window_capacity(mut self, window_capacity: usize) -> Self {
        self.window_capacity = window_capacity;
        self
    }

    /// Sets the window capacity as a number of pages.
    pub fn with_pages_per_window(mut self, pages: usize) -> Self {
        self.window_capacity = self.page_size.saturating_mul(pages);
        self
    }

    pub fn with_row_height(mut self, row_height: u32) -> Self {
        self.row_height = row_height;
        self
    }

    pub fn with_viewport_height(mut self, viewport_height: u32) -> Self {
        self.viewport_height = viewport_height;
        self
    }

    /// Number of existing items kept across a shift (`window_capacity - page_size`).
    pub fn retention(&self) -> usize {
        self.window_capacity.saturating_sub(self.page_size)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if self.row_height == 0 {
            return Err(ConfigError::ZeroRowHeight);
        }
        if self.window_capacity % self.page_size != 0 {
            return Err(ConfigError::CapacityNotMultiple {
                capacity: self.window_capacity,
                page_size: self.page_size,
            });
        }
        let minimum = self.page_size.saturating_mul(MIN_PAGES_PER_WINDOW);
        if self.window_capacity < minimum {
            return Err(ConfigError::CapacityTooSmall {
                capacity: self.window_capacity,
                minimum,
            });
        }
        if i64::try_from(self.window_capacity).is_err() {
            return Err(ConfigError::CapacityOverflow {
                capacity: self.window_capacity,
            });
        }
        let page = self.page_size_i64();
        if self.initial_offset.checked_sub(page).is_none()
            || self.initial_offset.checked_add(1).is_none()
        {
            return Err(ConfigError::InitialOffsetOutOfRange {
                initial_offset: self.initial_offset,
            });
        }
        Ok(())
    }

    // Only valid after `validate`.
    pub(crate) fn page_size_i64(&self) -> i64 {
        self.page_size as i64
    }
}
