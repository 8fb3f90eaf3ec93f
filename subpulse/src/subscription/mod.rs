//! Lifecycle-scoped management of one asynchronous subscription.
//!
//! A [`LifecycleSubscription`] binds the creation and release of a single
//! subscription handle to the active lifetime of its consumer (for example
//! one UI component instance). It guarantees:
//!
//! - at most one live handle at a time (`subscribe()` is idempotent, and
//!   concurrent calls serialize on the internal slot);
//! - the handle is always released on deactivation, even when cancellation
//!   itself fails (`unsubscribe()` clears the slot on every exit path);
//! - a consumer dropped while still active never leaks a live handle (the
//!   `Drop` impl performs the same best-effort cancel).
//!
//! # Architecture
//!
//! ```text
//! host "became active"    ──► subscribe()   ──► factory.create().await ──► slot = Some(handle)
//! host "becoming inactive"──► unsubscribe() ──► slot.take() ──► cancel if not closed
//! consumer dropped        ──► Drop          ──► same release path
//! ```
//!
//! # Example
//!
//! ```ignore
//! use subpulse::LifecycleSubscription;
//!
//! let subscription = LifecycleSubscription::new(|| async {
//!     Ok(server.open_events().await?)
//! });
//!
//! subscription.subscribe().await?;  // creates the handle
//! subscription.subscribe().await?;  // no-op, handle already held
//! subscription.unsubscribe().await; // cancels and clears
//! ```

mod error;
mod factory;
mod handle;
mod lifecycle;

pub use error::SubscribeError;
pub use factory::SubscriptionFactory;
pub use handle::SubscriptionHandle;
pub use lifecycle::LifecycleSubscription;
