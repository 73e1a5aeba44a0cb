//! # Modal State Module
//!
//! Form state owned by each of the wallet modals.
//!
//! ## Responsibilities:
//! - Raw text input for each form field
//! - The validation error currently shown in each form
//! - Turning raw input into validated `shared` request types
//!
//! Visibility is not stored here: each modal's `ModalHost` owns its own flag,
//! driven by the modal's visibility controller.

use shared::{
    CryptoAsset, PinSubmission, SendCryptoRequest, TopUpRequest, ValidationError, PIN_LENGTH,
};

/// PIN entry form state
#[derive(Debug, Clone, Default)]
pub struct PinFormState {
    pub input: String,
    pub error: Option<String>,
}

impl PinFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.error = None;
    }

    /// Drop anything that isn't a digit and cap the length
    pub fn sanitize(&mut self) {
        self.input.retain(|c| c.is_ascii_digit());
        self.input.truncate(PIN_LENGTH);
    }

    pub fn is_complete(&self) -> bool {
        self.input.len() == PIN_LENGTH
    }

    /// Validate the entered PIN, recording the error on failure
    pub fn submit(&mut self) -> Option<PinSubmission> {
        record(&mut self.error, PinSubmission::parse(&self.input))
    }
}

/// Send crypto form state
#[derive(Debug, Clone)]
pub struct SendFormState {
    pub asset: CryptoAsset,
    pub recipient: String,
    pub amount: String,
    pub memo: String,
    pub error: Option<String>,
}

impl SendFormState {
    pub fn new() -> Self {
        Self {
            asset: CryptoAsset::Bitcoin,
            recipient: String::new(),
            amount: String::new(),
            memo: String::new(),
            error: None,
        }
    }

    /// Clear the entered values, keeping the selected asset
    pub fn clear(&mut self) {
        self.recipient.clear();
        self.amount.clear();
        self.memo.clear();
        self.error = None;
    }

    pub fn submit(&mut self) -> Option<SendCryptoRequest> {
        let result = SendCryptoRequest::from_form(self.asset, &self.recipient, &self.amount, &self.memo);
        record(&mut self.error, result)
    }
}

impl Default for SendFormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Receive crypto modal state
#[derive(Debug, Clone)]
pub struct ReceiveState {
    pub asset: CryptoAsset,
    /// Set after the address was copied, until the asset changes or the modal closes
    pub copied: bool,
}

impl ReceiveState {
    pub fn new() -> Self {
        Self {
            asset: CryptoAsset::Bitcoin,
            copied: false,
        }
    }

    pub fn select(&mut self, asset: CryptoAsset) {
        if self.asset != asset {
            self.asset = asset;
            self.copied = false;
        }
    }
}

impl Default for ReceiveState {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-up form state
#[derive(Debug, Clone, Default)]
pub struct TopUpFormState {
    pub amount: String,
    pub error: Option<String>,
}

impl TopUpFormState {
    /// Quick-pick amounts offered under the amount field
    pub const PRESETS: [u32; 4] = [20, 50, 100, 250];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.amount.clear();
        self.error = None;
    }

    pub fn pick_preset(&mut self, amount: u32) {
        self.amount = amount.to_string();
        self.error = None;
    }

    pub fn submit(&mut self) -> Option<TopUpRequest> {
        record(&mut self.error, TopUpRequest::from_form(&self.amount))
    }
}

fn record<T>(error: &mut Option<String>, result: Result<T, ValidationError>) -> Option<T> {
    match result {
        Ok(value) => {
            *error = None;
            Some(value)
        }
        Err(e) => {
            log::debug!("Form validation failed: {}", e);
            *error = Some(e.to_string());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_sanitize_and_submit() {
        let mut form = PinFormState::new();
        form.input = "1a2-3 45".to_string();
        form.sanitize();
        assert_eq!(form.input, "1234");
        assert!(form.is_complete());

        let pin = form.submit().unwrap();
        assert_eq!(pin.expose(), "1234");
        assert!(form.error.is_none());
    }

    #[test]
    fn test_pasted_pin_with_separators_keeps_all_digits() {
        let mut form = PinFormState::new();
        form.input = "12-34".to_string();
        form.sanitize();
        assert_eq!(form.input, "1234");
        assert!(form.is_complete());
    }

    #[test]
    fn test_pin_submit_records_error() {
        let mut form = PinFormState::new();
        form.input = "12".to_string();
        assert!(form.submit().is_none());
        assert_eq!(form.error.as_deref(), Some("PIN must be exactly 4 digits"));

        form.clear();
        assert!(form.input.is_empty());
        assert!(form.error.is_none());
    }

    #[test]
    fn test_send_form_error_then_success() {
        let mut form = SendFormState::new();
        form.asset = CryptoAsset::Ethereum;
        form.recipient = "not an address".to_string();
        form.amount = "1".to_string();
        assert!(form.submit().is_none());
        assert_eq!(form.error.as_deref(), Some("That isn't a valid ETH address"));

        form.recipient = "0x52908400098527886E0F7030069857D2E4169EE7".to_string();
        let request = form.submit().unwrap();
        assert_eq!(request.amount, 1.0);
        assert!(form.error.is_none());

        form.clear();
        assert_eq!(form.asset, CryptoAsset::Ethereum);
        assert!(form.recipient.is_empty());
    }

    #[test]
    fn test_receive_select_resets_copied() {
        let mut state = ReceiveState::new();
        state.copied = true;
        state.select(CryptoAsset::Bitcoin);
        assert!(state.copied);

        state.select(CryptoAsset::Tether);
        assert_eq!(state.asset, CryptoAsset::Tether);
        assert!(!state.copied);
    }

    #[test]
    fn test_top_up_presets() {
        let mut form = TopUpFormState::new();
        form.error = Some("stale".to_string());
        form.pick_preset(TopUpFormState::PRESETS[1]);
        assert_eq!(form.amount, "50");
        assert!(form.error.is_none());

        let request = form.submit().unwrap();
        assert_eq!(request.amount, 50.0);
    }
}
