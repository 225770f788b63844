// Example: an infinite list of "label N" rows served by a slow source.
//
// The source resolves each page after a few polls (standing in for network latency). While the
// edge fetch is pending, a second scroll event is fired and dropped.
use std::future::Future;
use std::pin::{Pin, pin};
use std::task::{Context, Poll, Waker};

use scroll_window::{RowContent, WindowOptions};
use scroll_window_adapter::{Controller, HeadlessContainer, PageFetcher, ScrollReport};

struct Latency {
    polls_left: u32,
    page: Option<Vec<String>>,
}

impl Future for Latency {
    type Output = Result<Vec<String>, std::convert::Infallible>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if self.polls_left > 0 {
            self.polls_left -= 1;
            cx.waker().wake_by_ref();
            return Poll::Pending;
        }
        Poll::Ready(Ok(self.page.take().unwrap_or_default()))
    }
}

struct LabelSource;

impl PageFetcher<String> for LabelSource {
    type Error = std::convert::Infallible;

    fn fetch_page(
        &self,
        offset: i64,
        len: usize,
    ) -> impl Future<Output = Result<Vec<String>, Self::Error>> {
        println!("  fetch_page(offset={offset}, len={len})");
        Latency {
            polls_left: 3,
            page: Some(
                (offset..offset + len as i64)
                    .map(|i| format!("label {i}"))
                    .collect(),
            ),
        }
    }
}

fn render(c: &Controller<String, LabelSource>, container: &HeadlessContainer) {
    c.with_window(|w| {
        let top = container.scroll_top() as u64;
        let bottom = top + container.client_height() as u64;
        let visible: Vec<String> = w
            .rows()
            .filter(|row| row.end() > top && row.top < bottom)
            .map(|row| match row.content {
                RowContent::Item(item) => item.clone(),
                RowContent::Loading => "Loading...".to_string(),
            })
            .collect();
        println!(
            "  scroll_top={top} first={:?} last={:?}",
            visible.first(),
            visible.last()
        );
    });
}

fn main() {
    let options = WindowOptions::new(100, 39).with_viewport_height(400);
    let c = Controller::new(options, LabelSource).expect("valid options");
    let container = HeadlessContainer::for_options(&options);

    println!("mount");
    pollster::block_on(c.mount(&container)).expect("initial load");
    render(&c, &container);

    println!("scroll to the bottom");
    container.scroll_to_bottom();
    let mut pending = pin!(c.handle_scroll(&container));
    let mut cx = Context::from_waker(Waker::noop());
    assert!(pending.as_mut().poll(&mut cx).is_pending());

    // The user keeps scrolling while the page is in flight.
    container.scroll_by(-200.0);
    let report = pollster::block_on(c.handle_scroll(&container)).expect("dropped event");
    println!("  second event while loading: {report:?}");
    render(&c, &container);

    let report = pollster::block_on(pending).expect("append");
    println!("  {report:?}");
    render(&c, &container);

    println!("scroll to the top");
    container.set_scroll_top(1_000.0);
    let _ = pollster::block_on(c.handle_scroll(&container));
    container.set_scroll_top(0.0);
    if let Ok(ScrollReport::Applied(applied)) = pollster::block_on(c.handle_scroll(&container)) {
        println!("  {applied:?}");
    }
    render(&c, &container);
    c.with_window(|w| println!("boundaries={:?}", w.boundaries()));
}
