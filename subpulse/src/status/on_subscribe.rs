//! First-poll hook for lazy streams.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use pin_project_lite::pin_project;

pin_project! {
    /// Stream adapter that runs a callback at the first poll.
    ///
    /// Construction does nothing; the callback fires when a consumer
    /// actually starts observing the stream. That is the "subscribe"
    /// moment of the lazy computation, and it is what
    /// [`ReportProgress`] uses to arm its debounce timer.
    ///
    /// Created by [`ReportProgressExt::on_subscribe`].
    ///
    /// [`ReportProgress`]: super::ReportProgress
    /// [`ReportProgressExt::on_subscribe`]: super::ReportProgressExt::on_subscribe
    #[must_use = "streams do nothing unless polled"]
    pub struct OnSubscribe<S, F> {
        #[pin]
        inner: S,
        callback: Option<F>,
    }
}

impl<S, F> OnSubscribe<S, F> {
    pub(crate) fn new(inner: S, callback: F) -> Self {
        Self {
            inner,
            callback: Some(callback),
        }
    }
}

impl<S, F> Stream for OnSubscribe<S, F>
where
    S: Stream,
    F: FnOnce(),
{
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        if let Some(callback) = this.callback.take() {
            callback();
        }
        this.inner.poll_next(cx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
