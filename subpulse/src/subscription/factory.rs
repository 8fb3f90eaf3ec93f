//! Subscription factory trait.
//!
//! The factory is the asynchronous, zero-argument callable that produces a
//! new [`SubscriptionHandle`] each time a consumer activates. It is
//! dyn-compatible (futures are boxed) so hosts can store factories as trait
//! objects; a blanket impl covers plain closures returning futures, which
//! is what most callers pass.

use std::future::Future;
use std::pin::Pin;

use crate::subscription::SubscriptionHandle;
use crate::BoxError;

/// Asynchronous producer of subscription handles.
///
/// Called by [`LifecycleSubscription::subscribe`] when no handle is held.
/// A factory may be invoked again after a failed creation (the slot stays
/// empty on failure), so it must be reusable, not consume-once.
///
/// [`LifecycleSubscription::subscribe`]: super::LifecycleSubscription::subscribe
pub trait SubscriptionFactory: Send + Sync {
    /// The handle type this factory produces.
    type Handle: SubscriptionHandle;

    /// Creates a new handle.
    ///
    /// Errors propagate to the `subscribe()` caller as
    /// [`SubscribeError::Creation`].
    ///
    /// [`SubscribeError::Creation`]: super::SubscribeError::Creation
    fn create(&self) -> Pin<Box<dyn Future<Output = Result<Self::Handle, BoxError>> + Send + '_>>;
}

impl<F, Fut, H> SubscriptionFactory for F
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<H, BoxError>> + Send + 'static,
    H: SubscriptionHandle,
{
    type Handle = H;

    fn create(&self) -> Pin<Box<dyn Future<Output = Result<H, BoxError>> + Send + '_>> {
        Box::pin((self)())
    }
}
