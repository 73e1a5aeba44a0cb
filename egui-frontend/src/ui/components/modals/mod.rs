//! # Modals Module
//!
//! The wallet's global overlays. Each one owns a `ModalHost` that subscribes
//! to the modal's visibility controller, so any part of the UI can open it.
//!
//! ## Module Organization:
//! - `host` - modal-owning side of the controller contract
//! - `pin_entry` - PIN confirmation for sends and top-ups
//! - `send_crypto` - send form
//! - `receive_crypto` - deposit address display
//! - `top_up` - fiat top-up form
//! - `shared` - overlay layout and the modal coordinator

pub mod host;
pub mod pin_entry;
pub mod receive_crypto;
pub mod send_crypto;
pub mod shared;
pub mod top_up;

pub use host::ModalHost;
pub use pin_entry::{PinEntryModal, PinOutcome};
pub use receive_crypto::ReceiveCryptoModal;
pub use send_crypto::SendCryptoModal;
pub use top_up::TopUpModal;
