use core::cell::Cell;

use scroll_window::{RawScrollMetrics, WindowOptions};

/// A scroll container handle (e.g. a DOM element, or a TUI viewport).
///
/// Methods take `&self`: like a UI element handle, the container is shared between the event
/// source and any in-flight scroll handler.
pub trait ScrollContainer {
    /// Current `scroll_top`, `client_height` and `scroll_height`.
    fn scroll_metrics(&self) -> RawScrollMetrics;

    /// Moves the container to `(x, y)`.
    fn scroll_to(&self, x: u64, y: u64);

    /// Called after the window content changed, with its new pixel height.
    ///
    /// Containers that lay out their own content (a DOM element) can ignore this.
    fn set_content_height(&self, _height: u64) {}
}

impl<C: ScrollContainer + ?Sized> ScrollContainer for &C {
    fn scroll_metrics(&self) -> RawScrollMetrics {
        (**self).scroll_metrics()
    }

    fn scroll_to(&self, x: u64, y: u64) {
        (**self).scroll_to(x, y);
    }

    fn set_content_height(&self, height: u64) {
        (**self).set_content_height(height);
    }
}

/// An in-memory scroll container for headless adapters, tests and simulations.
///
/// `scroll_top` is always kept within `[0, scroll_height - client_height]`.
#[derive(Debug, Default)]
pub struct HeadlessContainer {
    scroll_left: Cell<u64>,
    scroll_top: Cell<f64>,
    client_height: Cell<f64>,
    scroll_height: Cell<f64>,
}

impl HeadlessContainer {
    pub fn new(client_height: f64) -> Self {
        Self {
            client_height: Cell::new(client_height.max(0.0)),
            ..Self::default()
        }
    }

    /// A container sized to `options.viewport_height`.
    pub fn for_options(options: &WindowOptions) -> Self {
        Self::new(options.viewport_height as f64)
    }

    pub fn scroll_top(&self) -> f64 {
        self.scroll_top.get()
    }

    pub fn scroll_left(&self) -> u64 {
        self.scroll_left.get()
    }

    pub fn client_height(&self) -> f64 {
        self.client_height.get()
    }

    pub fn scroll_height(&self) -> f64 {
        self.scroll_height.get()
    }

    pub fn max_scroll_top(&self) -> f64 {
        (self.scroll_height.get() - self.client_height.get()).max(0.0)
    }

    /// Simulates a user scroll (wheel, drag) to `scroll_top`, clamped.
    pub fn set_scroll_top(&self, scroll_top: f64) {
        self.scroll_top.set(scroll_top.clamp(0.0, self.max_scroll_top()));
    }

    /// Scrolls by `delta` pixels (negative scrolls up), clamped.
    pub fn scroll_by(&self, delta: f64) {
        self.set_scroll_top(self.scroll_top.get() + delta);
    }

    pub fn scroll_to_bottom(&self) {
        self.scroll_top.set(self.max_scroll_top());
    }

    pub fn set_client_height(&self, client_height: f64) {
        self.client_height.set(client_height.max(0.0));
        self.set_scroll_top(self.scroll_top.get());
    }
}

impl ScrollContainer for HeadlessContainer {
    fn scroll_metrics(&self) -> RawScrollMetrics {
        RawScrollMetrics::new(
            self.scroll_top.get(),
            self.client_height.get(),
            self.scroll_height.get(),
        )
    }

    fn scroll_to(&self, x: u64, y: u64) {
        self.scroll_left.set(x);
        self.set_scroll_top(y as f64);
    }

    fn set_content_height(&self, height: u64) {
        self.scroll_height.set(height as f64);
        self.set_scroll_top(self.scroll_top.get());
    }
}
