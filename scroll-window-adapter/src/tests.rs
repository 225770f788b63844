use crate::*;

use core::cell::{Cell, RefCell};
use core::future::{Future, poll_fn};
use core::pin::pin;
use core::task::{Context, Poll, Waker};
use std::boxed::Box;
use std::format;
use std::rc::Rc;
use std::string::String;
use std::vec::Vec;

use scroll_window::{
    BoundaryState, FetchKind, RowContent, RowHeights, WindowController, WindowError,
    WindowOptions,
};

#[derive(Debug, PartialEq, thiserror::Error)]
#[error("backend offline")]
struct Offline;

/// A data source whose pages only resolve once `open` is set.
#[derive(Clone, Default)]
struct ManualSource {
    open: Rc<Cell<bool>>,
    fail: Rc<Cell<bool>>,
    calls: Rc<RefCell<Vec<(i64, usize)>>>,
}

impl ManualSource {
    fn opened() -> Self {
        let s = Self::default();
        s.open.set(true);
        s
    }
}

impl PageFetcher<String> for ManualSource {
    type Error = Offline;

    fn fetch_page(
        &self,
        offset: i64,
        len: usize,
    ) -> impl Future<Output = Result<Vec<String>, Self::Error>> {
        self.calls.borrow_mut().push((offset, len));
        let open = Rc::clone(&self.open);
        let fail = Rc::clone(&self.fail);
        poll_fn(move |_cx| {
            if !open.get() {
                return Poll::Pending;
            }
            if fail.get() {
                return Poll::Ready(Err(Offline));
            }
            Poll::Ready(Ok((offset..offset + len as i64)
                .map(|i| format!("label {i}"))
                .collect()))
        })
    }
}

fn demo_options() -> WindowOptions {
    WindowOptions::new(100, 39).with_viewport_height(400)
}

fn mounted(source: &ManualSource) -> (Controller<String, ManualSource>, HeadlessContainer) {
    let c = Controller::new(demo_options(), source.clone()).unwrap();
    let opts = c.with_window(|w| *w.options());
    let container = HeadlessContainer::for_options(&opts);
    let report = pollster::block_on(c.mount(&container)).unwrap();
    assert!(matches!(report, ScrollReport::Applied(a) if a.kind == FetchKind::Initial));
    (c, container)
}

fn poll_once<F: Future>(fut: core::pin::Pin<&mut F>) -> Poll<F::Output> {
    let mut cx = Context::from_waker(Waker::noop());
    fut.poll(&mut cx)
}

#[test]
fn mount_loads_full_window_without_scrolling() {
    let source = ManualSource::opened();
    let (c, container) = mounted(&source);

    assert_eq!(source.calls.borrow().as_slice(), &[(1, 300)]);
    assert_eq!(container.scroll_height(), 11_700.0);
    assert_eq!(container.scroll_top(), 0.0);
    c.with_window(|w| {
        assert_eq!(w.window().len(), 300);
        assert_eq!(w.window()[0], "label 1");
        assert_eq!(w.boundaries(), BoundaryState { upper: 0, lower: 299 });
    });
}

#[test]
fn top_and_bottom_edges_fetch_and_reanchor() {
    let source = ManualSource::opened();
    let (c, container) = mounted(&source);

    container.set_scroll_top(2_000.0);
    let report = pollster::block_on(c.handle_scroll(&container)).unwrap();
    assert!(matches!(report, ScrollReport::Moved(s) if s.edge.is_none()));

    container.set_scroll_top(0.0);
    let report = pollster::block_on(c.handle_scroll(&container)).unwrap();
    assert!(matches!(report, ScrollReport::Applied(a) if a.scroll_to == Some(3_900)));
    assert_eq!(container.scroll_top(), 3_900.0);
    assert_eq!(source.calls.borrow().last(), Some(&(-100, 100)));
    c.with_window(|w| {
        assert_eq!(w.window()[0], "label -100");
        assert_eq!(w.window()[100], "label 1");
        assert_eq!(w.boundaries(), BoundaryState { upper: -100, lower: 199 });
    });

    // The programmatic jump is reported back as a plain scroll event.
    let report = pollster::block_on(c.handle_scroll(&container)).unwrap();
    assert!(matches!(report, ScrollReport::Moved(_)));

    container.scroll_to_bottom();
    let report = pollster::block_on(c.handle_scroll(&container)).unwrap();
    assert!(matches!(report, ScrollReport::Applied(a) if a.kind == FetchKind::Append));
    assert_eq!(container.scroll_top(), 7_800.0);
    assert_eq!(source.calls.borrow().last(), Some(&(199, 100)));
    c.with_window(|w| {
        assert_eq!(w.window().len(), 300);
        assert_eq!(w.boundaries(), BoundaryState { upper: 0, lower: 299 });
    });
}

#[test]
fn events_during_fetch_are_dropped() {
    let source = ManualSource::opened();
    let (c, container) = mounted(&source);
    source.open.set(false);

    container.scroll_to_bottom();
    let mut first = pin!(c.handle_scroll(&container));
    assert!(poll_once(first.as_mut()).is_pending());
    assert!(c.is_loading());

    let before = c.with_window(|w| w.snapshot());
    for top in [0.0, 500.0, 11_300.0] {
        container.set_scroll_top(top);
        let report = pollster::block_on(c.handle_scroll(&container)).unwrap();
        assert_eq!(report, ScrollReport::Dropped);
    }
    assert_eq!(c.with_window(|w| w.snapshot()), before);
    assert_eq!(source.calls.borrow().len(), 2);

    // Rendering sees placeholders while the page is in flight.
    c.with_window(|w| assert!(w.rows().all(|row| row.content == RowContent::Loading)));

    source.open.set(true);
    match poll_once(first.as_mut()) {
        Poll::Ready(Ok(ScrollReport::Applied(applied))) => {
            assert_eq!(applied.kind, FetchKind::Append);
            assert_eq!(applied.scroll_to, Some(7_800));
        }
        _ => panic!("fetch should have completed"),
    }
    assert!(!c.is_loading());
    assert_eq!(container.scroll_top(), 7_800.0);
}

#[test]
fn failed_fetch_reopens_gate() {
    let source = ManualSource::opened();
    let (c, container) = mounted(&source);
    let before = c.with_window(|w| w.snapshot());

    source.fail.set(true);
    container.scroll_to_bottom();
    let err = pollster::block_on(c.handle_scroll(&container)).unwrap_err();
    assert!(matches!(err, WindowError::Fetch { source: Offline, .. }));
    assert!(!c.is_loading());
    assert_eq!(c.with_window(|w| w.boundaries()), before.boundaries);
    assert_eq!(container.scroll_top(), 11_300.0);

    // The next bottom event retries the same page.
    source.fail.set(false);
    container.set_scroll_top(11_000.0);
    let _ = pollster::block_on(c.handle_scroll(&container)).unwrap();
    container.scroll_to_bottom();
    let report = pollster::block_on(c.handle_scroll(&container)).unwrap();
    assert!(matches!(report, ScrollReport::Applied(_)));
    let calls = source.calls.borrow();
    assert_eq!(calls[calls.len() - 1], calls[calls.len() - 2]);
}

#[test]
fn dropping_a_handler_mid_fetch_releases_the_gate() {
    let source = ManualSource::opened();
    let (c, container) = mounted(&source);
    source.open.set(false);

    container.scroll_to_bottom();
    let mut fut = Box::pin(c.handle_scroll(&container));
    assert!(poll_once(fut.as_mut()).is_pending());
    assert!(c.is_loading());
    drop(fut);

    assert!(!c.is_loading());
    c.with_window(|w| {
        assert_eq!(w.pending(), None);
        assert_eq!(w.boundaries(), BoundaryState { upper: 0, lower: 299 });
    });
}

#[test]
fn mount_while_loading_is_dropped() {
    let source = ManualSource::default();
    let c = Controller::new(demo_options(), source.clone()).unwrap();
    let container = HeadlessContainer::new(400.0);

    let mut first = pin!(c.mount(&container));
    assert!(poll_once(first.as_mut()).is_pending());
    let second = pollster::block_on(c.mount(&container)).unwrap();
    assert_eq!(second, ScrollReport::Dropped);

    source.open.set(true);
    assert!(matches!(poll_once(first.as_mut()), Poll::Ready(Ok(_))));
    assert_eq!(source.calls.borrow().len(), 1);
}

#[test]
fn closures_can_serve_pages() {
    let fetcher = fetch_fn(|offset: i64, len: usize| async move {
        Ok::<_, Offline>((offset..offset + len as i64).collect::<Vec<i64>>())
    });
    let opts = WindowOptions::new(5, 10)
        .with_initial_offset(-1)
        .with_viewport_height(30);
    let c = Controller::new(opts, fetcher).unwrap();
    let container = HeadlessContainer::for_options(&opts);

    pollster::block_on(c.mount(&container)).unwrap();
    c.with_window(|w| assert_eq!(w.window(), &(0..15).collect::<Vec<i64>>()[..]));

    container.set_scroll_top(50.0);
    pollster::block_on(c.handle_scroll(&container)).unwrap();
    container.set_scroll_top(0.0);
    pollster::block_on(c.handle_scroll(&container)).unwrap();
    c.with_window(|w| {
        assert_eq!(w.window()[..5], [-6, -5, -4, -3, -2]);
        assert_eq!(w.window()[5], 0);
    });
    assert_eq!(container.scroll_top(), 50.0);
}

#[test]
fn headless_container_clamps() {
    let container = HeadlessContainer::new(100.0);
    container.set_scroll_top(50.0);
    assert_eq!(container.scroll_top(), 0.0);

    container.set_content_height(1_000);
    container.set_scroll_top(5_000.0);
    assert_eq!(container.scroll_top(), 900.0);
    container.scroll_by(-1_000.0);
    assert_eq!(container.scroll_top(), 0.0);

    container.scroll_to(3, 250);
    assert_eq!(container.scroll_left(), 3);
    assert_eq!(container.scroll_metrics().scroll_top, 250.0);

    container.set_client_height(950.0);
    assert_eq!(container.scroll_top(), 50.0);
}

#[test]
fn controller_can_wrap_an_existing_window() {
    let window = WindowController::<String>::new(demo_options()).unwrap();
    let c = Controller::from_window(window, ManualSource::opened());
    let clone = c.clone();
    let container = HeadlessContainer::new(400.0);
    pollster::block_on(clone.mount(&container)).unwrap();
    assert!(c.with_window(|w| w.is_ready()));
    assert_eq!(c.fetcher().calls.borrow().len(), 1);
}

/// The first row of every page is a 60px section header, the rest are 20px.
#[derive(Debug)]
struct SectionRows {
    page_size: usize,
}

impl RowHeights for SectionRows {
    fn row_height(&self, position: usize) -> u32 {
        if position % self.page_size == 0 { 60 } else { 20 }
    }

    fn offset_of(&self, position: usize) -> u64 {
        let headers = position.div_ceil(self.page_size) as u64;
        headers * 60 + (position as u64 - headers) * 20
    }
}

#[test]
fn custom_row_heights_reach_the_container() {
    let opts = WindowOptions::new(10, 20).with_viewport_height(100);
    let window =
        WindowController::<String, _>::with_row_heights(opts, SectionRows { page_size: 10 })
            .unwrap();
    let c = Controller::from_window(window, ManualSource::opened());
    let container = HeadlessContainer::for_options(&opts);

    pollster::block_on(c.mount(&container)).unwrap();
    assert_eq!(container.scroll_height(), 720.0);

    container.scroll_to_bottom();
    let report = pollster::block_on(c.handle_scroll(&container)).unwrap();
    assert!(matches!(report, ScrollReport::Applied(a) if a.scroll_to == Some(480)));
    assert_eq!(container.scroll_top(), 480.0);
}
