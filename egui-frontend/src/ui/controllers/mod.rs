//! # Modal Controllers Module
//!
//! One `VisibilityController` per global modal, bundled into a service that is
//! created once at startup and handed to whoever needs to open or close a modal.
//!
//! ## Usage:
//! ```rust,ignore
//! // Anywhere with access to the app's controllers:
//! app.controllers.top_up().open();
//!
//! // The modal's own component, on mount:
//! let registration = controllers.top_up().register(move |visible| flag.store(visible, Ordering::SeqCst));
//! ```
//!
//! Cloning `ModalControllers` shares the underlying controllers.

pub mod visibility;

pub use visibility::{BindingState, Registration, VisibilityController};

use log::debug;
use shared::ModalKind;

/// The app-wide set of modal visibility controllers
#[derive(Debug, Clone)]
pub struct ModalControllers {
    pin_entry: VisibilityController,
    send_crypto: VisibilityController,
    receive_crypto: VisibilityController,
    top_up: VisibilityController,
}

impl ModalControllers {
    pub fn new() -> Self {
        Self {
            pin_entry: VisibilityController::new(ModalKind::PinEntry.label()),
            send_crypto: VisibilityController::new(ModalKind::SendCrypto.label()),
            receive_crypto: VisibilityController::new(ModalKind::ReceiveCrypto.label()),
            top_up: VisibilityController::new(ModalKind::TopUp.label()),
        }
    }

    /// Controller for the given modal kind
    pub fn get(&self, kind: ModalKind) -> &VisibilityController {
        match kind {
            ModalKind::PinEntry => &self.pin_entry,
            ModalKind::SendCrypto => &self.send_crypto,
            ModalKind::ReceiveCrypto => &self.receive_crypto,
            ModalKind::TopUp => &self.top_up,
        }
    }

    pub fn pin_entry(&self) -> &VisibilityController {
        &self.pin_entry
    }

    pub fn send_crypto(&self) -> &VisibilityController {
        &self.send_crypto
    }

    pub fn receive_crypto(&self) -> &VisibilityController {
        &self.receive_crypto
    }

    pub fn top_up(&self) -> &VisibilityController {
        &self.top_up
    }

    pub fn open(&self, kind: ModalKind) {
        debug!("📂 Opening {} modal", kind);
        self.get(kind).open();
    }

    pub fn close(&self, kind: ModalKind) {
        debug!("📁 Closing {} modal", kind);
        self.get(kind).close();
    }

    /// Close every modal (Escape key)
    pub fn close_all(&self) {
        for kind in ModalKind::ALL {
            self.get(kind).close();
        }
    }
}

impl Default for ModalControllers {
    fn default() -> Self {
        Self::new()
    }
}
