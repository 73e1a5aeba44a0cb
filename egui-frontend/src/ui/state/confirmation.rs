//! # Confirmation Flow
//!
//! Two-step purchase flows: a send or top-up form hands over a validated
//! request, the PIN modal confirms it, and the confirmed request becomes a
//! `WalletRequest` for the API client.
//!
//! ## Flow:
//! 1. `begin()` stores the pending action, closes the originating modal and
//!    opens PIN entry, all through the modal controllers
//! 2. `confirm()` pairs the pending action with the PIN
//! 3. `cancel()` drops the pending action
//!
//! At most one action is pending; beginning a new one replaces the old one.

use log::{info, warn};
use shared::{format_crypto_amount, ModalKind, PinSubmission, SendCryptoRequest, TopUpRequest, WalletRequest};

use crate::ui::controllers::ModalControllers;

/// A validated request waiting for PIN confirmation
#[derive(Debug, Clone, PartialEq)]
pub enum PendingAction {
    Send(SendCryptoRequest),
    TopUp(TopUpRequest),
}

impl PendingAction {
    /// Modal the action was submitted from
    pub fn origin(&self) -> ModalKind {
        match self {
            PendingAction::Send(_) => ModalKind::SendCrypto,
            PendingAction::TopUp(_) => ModalKind::TopUp,
        }
    }

    /// Prompt shown above the PIN field
    pub fn prompt(&self) -> String {
        match self {
            PendingAction::Send(request) => format!(
                "Enter your PIN to send {} {}",
                format_crypto_amount(request.amount),
                request.asset.symbol()
            ),
            PendingAction::TopUp(request) => {
                format!("Enter your PIN to top up ${:.2}", request.amount)
            }
        }
    }

    fn into_request(self, pin: PinSubmission) -> WalletRequest {
        match self {
            PendingAction::Send(request) => WalletRequest::Send { request, pin },
            PendingAction::TopUp(request) => WalletRequest::TopUp { request, pin },
        }
    }
}

#[derive(Debug, Default)]
pub struct ConfirmationFlow {
    pending: Option<PendingAction>,
}

impl ConfirmationFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<&PendingAction> {
        self.pending.as_ref()
    }

    /// Hold `action` for confirmation and switch from its form to PIN entry
    pub fn begin(&mut self, action: PendingAction, controllers: &ModalControllers) {
        let origin = action.origin();
        info!("🔐 Awaiting PIN confirmation for {} request", origin);

        if let Some(previous) = self.pending.replace(action) {
            warn!("Replacing unconfirmed {} request", previous.origin());
        }

        controllers.close(origin);
        controllers.open(ModalKind::PinEntry);
    }

    /// Pair the pending action with `pin`; `None` if nothing was pending
    pub fn confirm(&mut self, pin: PinSubmission) -> Option<WalletRequest> {
        match self.pending.take() {
            Some(action) => {
                let request = action.into_request(pin);
                info!("✅ Confirmed request {}", request.request_id());
                Some(request)
            }
            None => {
                warn!("PIN confirmed with no pending request, ignoring");
                None
            }
        }
    }

    /// Abandon the pending action, if any
    pub fn cancel(&mut self) -> Option<PendingAction> {
        let cancelled = self.pending.take();
        if let Some(action) = &cancelled {
            info!("❌ Cancelled {} request", action.origin());
        }
        cancelled
    }
}
