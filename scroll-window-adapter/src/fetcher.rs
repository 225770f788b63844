use alloc::rc::Rc;
use alloc::vec::Vec;
use core::future::Future;

/// The external paged data source.
///
/// `fetch_page(offset, len)` must resolve to exactly `len` items in ascending order, covering
/// virtual indices `offset..offset + len`. Offsets may be negative. Any retry or timeout policy
/// belongs to the implementation; the window applies a failure as "nothing happened".
pub trait PageFetcher<T> {
    type Error;

    fn fetch_page(
        &self,
        offset: i64,
        len: usize,
    ) -> impl Future<Output = Result<Vec<T>, Self::Error>>;
}

impl<T, P: PageFetcher<T> + ?Sized> PageFetcher<T> for &P {
    type Error = P::Error;

    fn fetch_page(
        &self,
        offset: i64,
        len: usize,
    ) -> impl Future<Output = Result<Vec<T>, Self::Error>> {
        (**self).fetch_page(offset, len)
    }
}

impl<T, P: PageFetcher<T> + ?Sized> PageFetcher<T> for Rc<P> {
    type Error = P::Error;

    fn fetch_page(
        &self,
        offset: i64,
        len: usize,
    ) -> impl Future<Output = Result<Vec<T>, Self::Error>> {
        (**self).fetch_page(offset, len)
    }
}

/// A [`PageFetcher`] backed by a closure returning a future.
#[derive(Clone, Copy, Debug)]
pub struct FetchFn<F>(F);

/// Wraps `f(offset, len) -> impl Future<Output = Result<Vec<T>, E>>` as a [`PageFetcher`].
pub fn fetch_fn<F>(f: F) -> FetchFn<F> {
    FetchFn(f)
}

impl<T, E, F, Fut> PageFetcher<T> for FetchFn<F>
where
    F: Fn(i64, usize) -> Fut,
    Fut: Future<Output = Result<Vec<T>, E>>,
{
    type Error = E;

    fn fetch_page(
        &self,
        offset: i64,
        len: usize,
    ) -> impl Future<Output = Result<Vec<T>, Self::Error>> {
        (self.0)(offset, len)
    }
}
