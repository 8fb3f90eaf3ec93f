//! Debounced status reporting for asynchronous operations.
//!
//! An asynchronous operation is modeled as a lazy stream of `Result` items
//! that terminates exactly once: end-of-stream is completion, the first
//! `Err` item is failure. [`ReportProgress`] wraps such a stream without
//! changing what it yields, and reports coarse status transitions to a
//! synchronous callback:
//!
//! ```text
//! first poll     ──► arm timer(delay)  ──► timer fires ──► report(Executing)
//! stream ends    ──► disarm timer      ──► report(Completed)
//! first Err item ──► disarm timer, log ──► report(Failed)
//! ```
//!
//! The timer is the debounce window: an operation that terminates before
//! `delay` elapses never reports `Executing` at all, so a UI spinner bound
//! to the callback does not flicker for fast operations. Dropping the
//! wrapped stream mid-flight disarms the timer and reports nothing.
//!
//! [`OnSubscribe`] is the smaller building block: it runs a callback at
//! the first poll of a stream, the moment a consumer actually starts
//! observing the lazy computation.
//!
//! # Example
//!
//! ```ignore
//! use subpulse::{OperationStatus, ReportProgressExt};
//!
//! let stream = fetch_items().report_progress(|status| match status {
//!     OperationStatus::Executing => spinner.show(),
//!     OperationStatus::Completed => spinner.hide(),
//!     OperationStatus::Failed => spinner.show_error(),
//! });
//! ```

mod on_subscribe;
mod operator;
mod report;

pub use on_subscribe::OnSubscribe;
pub use operator::{ReportProgress, ReportProgressExt, DEFAULT_EXECUTING_DELAY};
pub use report::OperationStatus;
