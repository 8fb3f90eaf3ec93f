//! Lifecycle-bound subscription slot.

use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::subscription::{SubscribeError, SubscriptionFactory, SubscriptionHandle};

/// Binds one subscription handle to the active lifetime of its consumer.
///
/// The handle slot is an explicit `Option` behind an async mutex: the slot
/// holds `Some(handle)` exactly while a subscription has been created and
/// not yet released. The mutex is held across the factory await, which
/// serializes concurrent `subscribe()` calls (no double-creation) and
/// makes `unsubscribe()` wait for an in-flight creation before cancelling
/// the handle it produced.
///
/// Host lifecycle wiring: call [`subscribe`] from the "became active" hook
/// and [`unsubscribe`] from the "about to become inactive" hook. Dropping
/// the value performs the same best-effort release, so a consumer torn
/// down without its deactivation hook still cannot leak a live handle.
///
/// [`subscribe`]: LifecycleSubscription::subscribe
/// [`unsubscribe`]: LifecycleSubscription::unsubscribe
pub struct LifecycleSubscription<F: SubscriptionFactory> {
    /// Creates a new handle each time the consumer activates.
    factory: F,

    /// The held handle, `Some` iff created and not yet released.
    slot: Mutex<Option<F::Handle>>,
}

impl<F: SubscriptionFactory> LifecycleSubscription<F> {
    /// Creates an inactive subscription around the given factory.
    ///
    /// Nothing runs until [`subscribe`] is called.
    ///
    /// [`subscribe`]: LifecycleSubscription::subscribe
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            slot: Mutex::new(None),
        }
    }

    /// Creates the underlying subscription if none is held.
    ///
    /// Idempotent: a call while a handle is held does nothing. Concurrent
    /// calls serialize on the slot, so at most one factory invocation is
    /// in flight and at most one handle is ever stored.
    ///
    /// # Errors
    ///
    /// Returns [`SubscribeError::Creation`] when the factory fails. The
    /// slot stays empty in that case, so the caller may retry later.
    pub async fn subscribe(&self) -> Result<(), SubscribeError> {
        let mut slot = self.slot.lock().await;
        if slot.is_some() {
            debug!("subscribe skipped: handle already held");
            return Ok(());
        }
        let handle = self
            .factory
            .create()
            .await
            .map_err(SubscribeError::Creation)?;
        *slot = Some(handle);
        Ok(())
    }

    /// Releases the underlying subscription if one is held.
    ///
    /// The handle is removed from the slot before anything else, so the
    /// slot is empty on every exit path. Cancellation is skipped when the
    /// producer already closed the connection, and cancellation failures
    /// are logged and swallowed: cleanup must never block teardown.
    ///
    /// Idempotent, and safe to call while a `subscribe()` creation is
    /// still pending: this call waits for the creation to finish and then
    /// immediately cancels the handle it stored.
    pub async fn unsubscribe(&self) {
        let mut slot = self.slot.lock().await;
        release(slot.take());
    }

    /// Returns true while a handle is held.
    pub async fn is_subscribed(&self) -> bool {
        self.slot.lock().await.is_some()
    }
}

impl<F: SubscriptionFactory> Drop for LifecycleSubscription<F> {
    fn drop(&mut self) {
        // Exclusive access, no locking needed.
        release(self.slot.get_mut().take());
    }
}

/// Best-effort release of a handle already removed from its slot.
fn release<H: SubscriptionHandle>(handle: Option<H>) {
    let Some(mut handle) = handle else {
        return;
    };
    if handle.is_closed() {
        debug!("handle already closed, skipping cancel");
        return;
    }
    if let Err(error) = handle.cancel() {
        warn!(%error, "subscription cancel failed, handle discarded");
    }
}
