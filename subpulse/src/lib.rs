//! Subpulse - lifecycle-bound subscriptions with debounced progress reporting
//!
//! This library provides the reactive plumbing for driving UI busy/error
//! indicators from asynchronous operations:
//!
//! - [`subscription`] ties the creation and teardown of one asynchronous
//!   subscription to the active lifetime of its consumer, guaranteeing the
//!   underlying handle is created at most once and always released.
//! - [`status`] wraps an asynchronous operation (a stream of results) so
//!   that coarse, debounced status transitions (`executing`, `completed`,
//!   `failed`) are reported to a callback as a side effect of the stream's
//!   own activity.
//!
//! The two components compose: the stream a subscription factory hands out
//! is typically wrapped with [`ReportProgressExt::report_progress`] first,
//! so status callbacks fire while the subscription is live.
//!
//! # Example
//!
//! ```ignore
//! use subpulse::{LifecycleSubscription, ReportProgressExt};
//!
//! let subscription = LifecycleSubscription::new(|| async {
//!     let stream = open_event_stream()
//!         .await?
//!         .report_progress(|status| view.set_status(status));
//!     Ok(spawn_consumer(stream))
//! });
//!
//! // Host lifecycle hooks:
//! subscription.subscribe().await?;   // consumer became active
//! subscription.unsubscribe().await;  // consumer about to become inactive
//! ```

pub mod status;
pub mod subscription;

pub use status::{
    OnSubscribe, OperationStatus, ReportProgress, ReportProgressExt, DEFAULT_EXECUTING_DELAY,
};
pub use subscription::{
    LifecycleSubscription, SubscribeError, SubscriptionFactory, SubscriptionHandle,
};

/// Boxed error type used where the concrete error belongs to the host.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
