//! Error types for subscription management.

use thiserror::Error;

use crate::BoxError;

/// Errors surfaced by [`LifecycleSubscription::subscribe`].
///
/// Cancellation failures are deliberately absent: `unsubscribe()` treats
/// them as best-effort cleanup faults, logs them, and never lets them
/// block teardown.
///
/// [`LifecycleSubscription::subscribe`]: super::LifecycleSubscription::subscribe
#[derive(Debug, Error)]
pub enum SubscribeError {
    /// The subscription factory failed to produce a handle.
    ///
    /// The slot stays empty, so a later `subscribe()` call may retry.
    #[error("subscription creation failed: {0}")]
    Creation(#[source] BoxError),
}
