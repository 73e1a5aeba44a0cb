//! # Visibility Controller
//!
//! A single-slot publish point for a boolean "show / hide" signal.
//!
//! ## Responsibilities:
//! - Hold at most one subscriber (the component that renders a modal)
//! - Forward `open()` / `close()` from any caller to that subscriber
//! - Hand out a `Registration` so the subscriber can detach on teardown
//!
//! ## Semantics:
//! - Last registration wins: `register` silently replaces the previous subscriber
//! - `open()` / `close()` with nobody registered is a no-op (logged at debug level)
//! - Every signal is forwarded, repeated identical signals included
//! - The subscriber runs outside the slot lock, so it may call back into any
//!   controller
//!
//! Cloning a controller clones the handle; all clones share one slot.

use log::debug;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Callback receiving `true` for open and `false` for close
pub type Subscriber = Arc<dyn Fn(bool) + Send + Sync + 'static>;

/// Whether a controller currently has a subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingState {
    Unbound,
    Bound,
}

struct Slot {
    subscriber: Option<(u64, Subscriber)>,
    next_token: u64,
}

impl Slot {
    fn holds(&self, token: u64) -> bool {
        self.subscriber.as_ref().map_or(false, |(current, _)| *current == token)
    }
}

fn lock_slot(slot: &Mutex<Slot>) -> MutexGuard<'_, Slot> {
    // A subscriber that panicked cannot leave the slot half-written
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Routes visibility signals to the one component that owns a modal
#[derive(Clone)]
pub struct VisibilityController {
    name: &'static str,
    slot: Arc<Mutex<Slot>>,
}

impl VisibilityController {
    /// Create an unbound controller; `name` is only used in log output
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            slot: Arc::new(Mutex::new(Slot {
                subscriber: None,
                next_token: 0,
            })),
        }
    }

    /// Make `callback` the sole subscriber, replacing any existing one.
    ///
    /// Keep the returned `Registration` for as long as the subscriber is
    /// alive; releasing it detaches the subscriber (if it is still current).
    pub fn register<F>(&self, callback: F) -> Registration
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        let (token, replaced) = {
            let mut slot = lock_slot(&self.slot);
            let token = slot.next_token;
            slot.next_token += 1;
            let replaced = slot.subscriber.replace((token, Arc::new(callback)));
            (token, replaced)
        };

        if replaced.is_some() {
            debug!("🔁 {} controller: subscriber replaced", self.name);
        } else {
            debug!("🔗 {} controller: subscriber registered", self.name);
        }
        // The previous subscriber is dropped here, outside the lock
        drop(replaced);

        Registration {
            name: self.name,
            slot: Arc::downgrade(&self.slot),
            token,
        }
    }

    /// Ask the subscriber to show its modal
    pub fn open(&self) {
        self.signal(true);
    }

    /// Ask the subscriber to hide its modal
    pub fn close(&self) {
        self.signal(false);
    }

    fn signal(&self, visible: bool) {
        let subscriber = lock_slot(&self.slot)
            .subscriber
            .as_ref()
            .map(|(_, subscriber)| Arc::clone(subscriber));

        match subscriber {
            Some(subscriber) => subscriber(visible),
            None => debug!(
                "{} controller: {} requested with no subscriber, ignoring",
                self.name,
                if visible { "open" } else { "close" }
            ),
        }
    }

    pub fn state(&self) -> BindingState {
        if lock_slot(&self.slot).subscriber.is_some() {
            BindingState::Bound
        } else {
            BindingState::Unbound
        }
    }

    pub fn is_bound(&self) -> bool {
        self.state() == BindingState::Bound
    }
}

impl fmt::Debug for VisibilityController {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("VisibilityController")
            .field("name", &self.name)
            .field("state", &self.state())
            .finish()
    }
}

/// Proof of a subscription; dropping it unregisters the subscriber
#[must_use = "dropping a Registration immediately unregisters the subscriber"]
pub struct Registration {
    name: &'static str,
    slot: Weak<Mutex<Slot>>,
    token: u64,
}

impl Registration {
    /// Detach the subscriber now (same as dropping the registration)
    pub fn unregister(self) {}

    /// Whether this registration's subscriber is still the controller's subscriber
    pub fn is_current(&self) -> bool {
        self.slot
            .upgrade()
            .map_or(false, |slot| lock_slot(&slot).holds(self.token))
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        let Some(slot) = self.slot.upgrade() else {
            return;
        };

        let removed = {
            let mut slot = lock_slot(&slot);
            if slot.holds(self.token) {
                slot.subscriber.take()
            } else {
                None
            }
        };

        if removed.is_some() {
            debug!("🔌 {} controller: subscriber unregistered", self.name);
        }
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .field("token", &self.token)
            .finish()
    }
}
