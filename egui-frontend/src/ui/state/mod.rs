//! # State Module
//!
//! Application state split by concern:
//! - `modal_state` - form state for each modal
//! - `confirmation` - the PIN confirmation flow for sends and top-ups
//! - `ui_state` - feedback banners

pub mod confirmation;
pub mod modal_state;
pub mod ui_state;

pub use confirmation::{ConfirmationFlow, PendingAction};
pub use modal_state::{PinFormState, ReceiveState, SendFormState, TopUpFormState};
pub use ui_state::UIState;
