// Example: drive the window by hand (no async runtime, no UI).
use scroll_window::{RawScrollMetrics, ScrollOutcome, WindowController, WindowOptions};

fn fetch(offset: i64, len: usize) -> Result<Vec<String>, core::convert::Infallible> {
    Ok((offset..offset + len as i64)
        .map(|i| format!("label {i}"))
        .collect())
}

fn main() {
    let mut c = WindowController::new(WindowOptions::new(100, 39).with_viewport_height(400))
        .expect("valid options");

    let init = c.begin_initial_load().expect("gate is open on mount");
    c.complete(init, fetch(init.offset, init.len))
        .expect("initial load");
    println!(
        "loaded {} rows, boundaries={:?}",
        c.window().len(),
        c.boundaries()
    );

    // A container that is 400px tall over 300 rows of 39px.
    let height = c.total_height() as f64;
    for target in [2_000.0, 0.0, 5_000.0, height - 400.0] {
        let mut scroll_top = target;
        match c.on_scroll(RawScrollMetrics::new(scroll_top, 400.0, height)) {
            ScrollOutcome::Fetch(req) => {
                println!("edge reached at {scroll_top}: fetching {req:?}");
                let applied = c
                    .complete(req, fetch(req.offset, req.len))
                    .expect("fetch applied");
                if let Some(y) = applied.scroll_to {
                    scroll_top = y as f64;
                }
                println!(
                    "  window[0]={} boundaries={:?} scroll_top={scroll_top}",
                    c.window()[0],
                    c.boundaries()
                );
            }
            ScrollOutcome::Moved(sample) => println!("moved: {sample:?}"),
            ScrollOutcome::Dropped => println!("dropped while loading"),
        }
    }
}
