use alloc::rc::Rc;
use core::cell::RefCell;

use scroll_window::{
    Applied, ConfigError, FetchRequest, RowHeights, ScrollOutcome, ScrollSample,
    UniformRowHeight, WindowController, WindowError, WindowOptions,
};

use crate::{PageFetcher, ScrollContainer};

/// What a call to [`Controller::handle_scroll`] or [`Controller::mount`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollReport {
    /// Another fetch was outstanding; the event was ignored.
    Dropped,
    /// The event was recorded without reaching an edge.
    Moved(ScrollSample),
    /// A page was fetched and merged.
    Applied(Applied),
}

/// A framework-neutral async driver around [`WindowController`].
///
/// The handle is cheap to clone; clones share one window. It is meant for a single-threaded
/// executor (a UI event loop): the window is only borrowed between suspension points, so a
/// scroll handler started while another one is awaiting its fetch sees the window as loading
/// and returns [`ScrollReport::Dropped`].
///
/// Adapters drive it by calling:
/// - `mount` once, to load the first full window
/// - `handle_scroll` on every scroll event of the container
/// - `with_window` when rendering
pub struct Controller<T, F, R = UniformRowHeight> {
    window: Rc<RefCell<WindowController<T, R>>>,
    fetcher: Rc<F>,
}

impl<T, F, R> Clone for Controller<T, F, R> {
    fn clone(&self) -> Self {
        Self {
            window: Rc::clone(&self.window),
            fetcher: Rc::clone(&self.fetcher),
        }
    }
}

impl<T, F: PageFetcher<T>> Controller<T, F> {
    pub fn new(options: WindowOptions, fetcher: F) -> Result<Self, ConfigError> {
        Ok(Self::from_window(WindowController::new(options)?, fetcher))
    }
}

impl<T, F: PageFetcher<T>, R: RowHeights> Controller<T, F, R> {
    pub fn from_window(window: WindowController<T, R>, fetcher: F) -> Self {
        Self {
            window: Rc::new(RefCell::new(window)),
            fetcher: Rc::new(fetcher),
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Read access to the window (for rendering).
    pub fn with_window<O>(&self, f: impl FnOnce(&WindowController<T, R>) -> O) -> O {
        f(&self.window.borrow())
    }

    pub fn is_loading(&self) -> bool {
        self.window.borrow().is_loading()
    }

    /// Loads the first full window.
    ///
    /// The container is not scrolled; its content height is updated.
    pub async fn mount<C: ScrollContainer>(
        &self,
        container: &C,
    ) -> Result<ScrollReport, WindowError<F::Error>> {
        let Some(request) = self.window.borrow_mut().begin_initial_load() else {
            return Ok(ScrollReport::Dropped);
        };
        let applied = self.run(request, container).await?;
        Ok(ScrollReport::Applied(applied))
    }

    /// Handles one scroll event of `container`.
    ///
    /// Reads the container's metrics, and when an edge was reached fetches one page, merges
    /// it and moves the container to the anchor offset. On error the window is unchanged and
    /// scrolling stays enabled.
    pub async fn handle_scroll<C: ScrollContainer>(
        &self,
        container: &C,
    ) -> Result<ScrollReport, WindowError<F::Error>> {
        let outcome = self
            .window
            .borrow_mut()
            .on_scroll(container.scroll_metrics());
        let request = match outcome {
            ScrollOutcome::Dropped => return Ok(ScrollReport::Dropped),
            ScrollOutcome::Moved(sample) => return Ok(ScrollReport::Moved(sample)),
            ScrollOutcome::Fetch(request) => request,
        };
        let applied = self.run(request, container).await?;
        Ok(ScrollReport::Applied(applied))
    }

    async fn run<C: ScrollContainer>(
        &self,
        request: FetchRequest,
        container: &C,
    ) -> Result<Applied, WindowError<F::Error>> {
        let mut pending = PendingFetch::new(&self.window, request);
        let result = (*self.fetcher).fetch_page(request.offset, request.len).await;
        pending.disarm();

        let (applied, height) = {
            let mut window = self.window.borrow_mut();
            let applied = window.complete(request, result)?;
            (applied, window.total_height())
        };
        container.set_content_height(height);
        if let Some(y) = applied.scroll_to {
            wtrace!(y, "scroll_to");
            container.scroll_to(0, y);
        }
        Ok(applied)
    }
}

impl<T: core::fmt::Debug, F, R: core::fmt::Debug> core::fmt::Debug for Controller<T, F, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Controller")
            .field("window", &self.window)
            .finish_non_exhaustive()
    }
}

/// Reopens the gate if a handler future is dropped while its fetch is outstanding.
struct PendingFetch<'a, T, R: RowHeights> {
    window: &'a RefCell<WindowController<T, R>>,
    request: FetchRequest,
    armed: bool,
}

impl<'a, T, R: RowHeights> PendingFetch<'a, T, R> {
    fn new(window: &'a RefCell<WindowController<T, R>>, request: FetchRequest) -> Self {
        Self {
            window,
            request,
            armed: true,
        }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl<T, R: RowHeights> Drop for PendingFetch<'_, T, R> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        match self.window.try_borrow_mut() {
            Ok(mut window) => {
                window.abandon(self.request);
            }
            Err(_) => {
                wwarn!(
                    offset = self.request.offset,
                    "could not release the gate for an abandoned fetch"
                );
            }
        }
    }
}
