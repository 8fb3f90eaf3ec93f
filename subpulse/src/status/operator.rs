//! Progress-reporting stream adapter.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use futures::Stream;
use pin_project_lite::pin_project;
use tokio::time::{sleep, Sleep};
use tracing::warn;

use crate::status::{OnSubscribe, OperationStatus};

/// Debounce window before `executing` is reported.
pub const DEFAULT_EXECUTING_DELAY: Duration = Duration::from_millis(150);

pin_project! {
    /// Stream adapter reporting debounced status transitions.
    ///
    /// Yields exactly what the inner stream yields, with side effects on
    /// the status callback:
    ///
    /// - the debounce timer is armed at the first poll; if it fires before
    ///   the stream terminates, `Executing` is reported once;
    /// - end of stream disarms the timer and reports `Completed`;
    /// - the first `Err` item disarms the timer, logs the failure, reports
    ///   `Failed`, and passes the error through unchanged.
    ///
    /// After either terminal report the stream is fused: a producer that
    /// violates its terminate-once contract has the excess ignored. The
    /// inner stream is polled before the timer, so termination that is
    /// ready at the same instant wins the race and suppresses `Executing`.
    ///
    /// Dropping the adapter drops the timer, so abandoning the stream
    /// mid-flight reports nothing further.
    ///
    /// Created by [`ReportProgressExt::report_progress`].
    #[must_use = "streams do nothing unless polled"]
    pub struct ReportProgress<S, F> {
        #[pin]
        inner: S,
        report: F,
        delay: Duration,
        #[pin]
        timer: Option<Sleep>,
        armed: bool,
        terminated: bool,
    }
}

impl<S, F> ReportProgress<S, F> {
    pub(crate) fn new(inner: S, report: F, delay: Duration) -> Self {
        Self {
            inner,
            report,
            delay,
            timer: None,
            armed: false,
            terminated: false,
        }
    }
}

impl<S, T, E, F> Stream for ReportProgress<S, F>
where
    S: Stream<Item = Result<T, E>>,
    E: fmt::Display,
    F: FnMut(OperationStatus),
{
    type Item = Result<T, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if *this.terminated {
            return Poll::Ready(None);
        }

        // The first poll is the subscribe moment of the lazy stream; the
        // debounce window starts here, not at construction.
        if !*this.armed {
            *this.armed = true;
            this.timer.set(Some(sleep(*this.delay)));
        }

        match this.inner.poll_next(cx) {
            Poll::Ready(Some(Ok(value))) => Poll::Ready(Some(Ok(value))),
            Poll::Ready(Some(Err(error))) => {
                *this.terminated = true;
                this.timer.set(None);
                warn!(%error, "operation failed");
                (this.report)(OperationStatus::Failed);
                Poll::Ready(Some(Err(error)))
            }
            Poll::Ready(None) => {
                *this.terminated = true;
                this.timer.set(None);
                (this.report)(OperationStatus::Completed);
                Poll::Ready(None)
            }
            Poll::Pending => {
                if let Some(timer) = this.timer.as_mut().as_pin_mut() {
                    if timer.poll(cx).is_ready() {
                        this.timer.set(None);
                        (this.report)(OperationStatus::Executing);
                    }
                }
                Poll::Pending
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.terminated {
            (0, Some(0))
        } else {
            self.inner.size_hint()
        }
    }
}

/// Status-reporting extensions for streams.
pub trait ReportProgressExt: Stream + Sized {
    /// Reports debounced status transitions to `report` with the default
    /// 150 ms window.
    ///
    /// See [`ReportProgress`] for the exact semantics. The callback must
    /// be cheap and must not panic: it runs inline in `poll_next` and is
    /// not guarded by the adapter.
    fn report_progress<F>(self, report: F) -> ReportProgress<Self, F>
    where
        F: FnMut(OperationStatus),
    {
        self.report_progress_with_delay(report, DEFAULT_EXECUTING_DELAY)
    }

    /// Same as [`report_progress`], with an explicit debounce window.
    ///
    /// A zero window makes `Executing` fire at the first poll that does
    /// not terminate the stream.
    ///
    /// [`report_progress`]: ReportProgressExt::report_progress
    fn report_progress_with_delay<F>(self, report: F, delay: Duration) -> ReportProgress<Self, F>
    where
        F: FnMut(OperationStatus),
    {
        ReportProgress::new(self, report, delay)
    }

    /// Runs `callback` once at the first poll of the stream.
    fn on_subscribe<F>(self, callback: F) -> OnSubscribe<Self, F>
    where
        F: FnOnce(),
    {
        OnSubscribe::new(self, callback)
    }
}

impl<S: Stream + Sized> ReportProgressExt for S {}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use futures::{stream, StreamExt};
    use tokio::time;

    use super::*;
    use crate::status::OperationStatus::{Completed, Executing, Failed};

    type StatusLog = Arc<Mutex<Vec<OperationStatus>>>;

    fn recorder() -> (StatusLog, impl FnMut(OperationStatus)) {
        let log: StatusLog = Arc::default();
        let sink = log.clone();
        (log, move |status| sink.lock().unwrap().push(status))
    }

    fn resolves_at(ms: u64) -> impl Stream<Item = Result<u32, String>> {
        stream::once(async move {
            time::sleep(Duration::from_millis(ms)).await;
            Ok(7)
        })
    }

    fn fails_at(ms: u64) -> impl Stream<Item = Result<u32, String>> {
        stream::once(async move {
            time::sleep(Duration::from_millis(ms)).await;
            Err("backend unavailable".to_string())
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_fast_completion_skips_executing() {
        let (log, report) = recorder();
        let items: Vec<_> = resolves_at(50).report_progress(report).collect().await;

        assert_eq!(items, vec![Ok(7)]);
        assert_eq!(*log.lock().unwrap(), vec![Completed]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_completion_reports_executing_first() {
        let (log, report) = recorder();
        let items: Vec<_> = resolves_at(300).report_progress(report).collect().await;

        assert_eq!(items, vec![Ok(7)]);
        assert_eq!(*log.lock().unwrap(), vec![Executing, Completed]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fast_failure_reports_failed_and_surfaces_error() {
        let (log, report) = recorder();
        let items: Vec<_> = fails_at(50).report_progress(report).collect().await;

        assert_eq!(items, vec![Err("backend unavailable".to_string())]);
        assert_eq!(*log.lock().unwrap(), vec![Failed]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_failure_reports_executing_then_failed() {
        let (log, report) = recorder();
        let items: Vec<_> = fails_at(300).report_progress(report).collect().await;

        assert_eq!(items, vec![Err("backend unavailable".to_string())]);
        assert_eq!(*log.lock().unwrap(), vec![Executing, Failed]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_delay_reports_executing_immediately() {
        let (log, report) = recorder();
        let items: Vec<_> = resolves_at(10)
            .report_progress_with_delay(report, Duration::ZERO)
            .collect()
            .await;

        assert_eq!(items, vec![Ok(7)]);
        assert_eq!(*log.lock().unwrap(), vec![Executing, Completed]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_delay_synchronous_termination_still_wins() {
        let (log, report) = recorder();
        let items: Vec<Result<u32, String>> = stream::empty()
            .report_progress_with_delay(report, Duration::ZERO)
            .collect()
            .await;

        assert!(items.is_empty());
        assert_eq!(*log.lock().unwrap(), vec![Completed]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_values_pass_through_unchanged() {
        let (log, report) = recorder();
        let items: Vec<Result<u32, String>> = stream::iter([Ok(1), Ok(2), Ok(3)])
            .report_progress(report)
            .collect()
            .await;

        assert_eq!(items, vec![Ok(1), Ok(2), Ok(3)]);
        assert_eq!(*log.lock().unwrap(), vec![Completed]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_items_after_first_error_are_ignored() {
        let (log, report) = recorder();
        let items: Vec<Result<u32, String>> =
            stream::iter([Ok(1), Err("boom".to_string()), Ok(2)])
                .report_progress(report)
                .collect()
                .await;

        assert_eq!(items, vec![Ok(1), Err("boom".to_string())]);
        assert_eq!(*log.lock().unwrap(), vec![Failed]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_stream_disarms_timer_and_reports_nothing_more() {
        let (log, report) = recorder();
        let mut wrapped = Box::pin(stream::pending::<Result<u32, String>>().report_progress(report));

        // The operation never terminates; the window elapses while we wait.
        let poll = time::timeout(Duration::from_millis(200), wrapped.next()).await;
        assert!(poll.is_err());
        assert_eq!(*log.lock().unwrap(), vec![Executing]);

        drop(wrapped);
        time::sleep(Duration::from_millis(500)).await;
        assert_eq!(*log.lock().unwrap(), vec![Executing]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_executing_reported_at_most_once() {
        let (log, report) = recorder();
        let slow = stream::iter([(), ()]).then(|_| async {
            time::sleep(Duration::from_millis(200)).await;
            Ok::<_, String>(9)
        });
        let items: Vec<_> = slow.report_progress(report).collect().await;

        assert_eq!(items, vec![Ok(9), Ok(9)]);
        assert_eq!(*log.lock().unwrap(), vec![Executing, Completed]);
    }
}
