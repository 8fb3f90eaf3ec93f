//! Subscription handle trait.

use crate::BoxError;

/// An opaque live connection to a producer.
///
/// Handles are created by a [`SubscriptionFactory`], owned by exactly one
/// [`LifecycleSubscription`], and released exactly once. A producer may
/// close the connection from its own side, which the owner observes via
/// [`is_closed`].
///
/// Implementations do not need an idempotent [`cancel`]: the owner checks
/// [`is_closed`] before cancelling and never cancels twice.
///
/// [`SubscriptionFactory`]: super::SubscriptionFactory
/// [`LifecycleSubscription`]: super::LifecycleSubscription
/// [`is_closed`]: SubscriptionHandle::is_closed
/// [`cancel`]: SubscriptionHandle::cancel
pub trait SubscriptionHandle: Send {
    /// Returns true if the connection has already been torn down.
    fn is_closed(&self) -> bool;

    /// Cancels the connection.
    ///
    /// Errors are treated as best-effort cleanup failures by the owner:
    /// they are logged and the handle is discarded regardless.
    fn cancel(&mut self) -> Result<(), BoxError>;
}
