//! # UI State Module
//!
//! General UI state that affects the overall user experience but is not
//! specific to any particular component.
//!
//! ## Responsibilities:
//! - User feedback messages (error and success banners)
//! - Expiring those messages after a timeout

/// General UI state for user feedback
#[derive(Debug, Default)]
pub struct UIState {
    /// Error message to display to the user
    pub error_message: Option<String>,

    /// Success message to display to the user
    pub success_message: Option<String>,

    /// egui time (seconds) at which the current message was first rendered
    message_shown_at: Option<f64>,
}

impl UIState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear any error or success messages
    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
        self.message_shown_at = None;
    }

    /// Set an error message, replacing any success message
    pub fn set_error(&mut self, message: String) {
        self.clear_messages();
        self.error_message = Some(message);
    }

    /// Set a success message, replacing any error message
    pub fn set_success(&mut self, message: String) {
        self.clear_messages();
        self.success_message = Some(message);
    }

    pub fn has_messages(&self) -> bool {
        self.error_message.is_some() || self.success_message.is_some()
    }

    /// Clear messages that have been showing for at least `timeout_secs`.
    /// Returns true while a message is still on screen.
    pub fn expire_messages(&mut self, now: f64, timeout_secs: f64) -> bool {
        if !self.has_messages() {
            return false;
        }

        let shown_at = *self.message_shown_at.get_or_insert(now);
        if now - shown_at >= timeout_secs {
            self.clear_messages();
            false
        } else {
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_other_message() {
        let mut state = UIState::new();
        state.set_error("boom".to_string());
        state.set_success("queued".to_string());
        assert!(state.error_message.is_none());
        assert_eq!(state.success_message.as_deref(), Some("queued"));
    }

    #[test]
    fn test_messages_expire_after_timeout() {
        let mut state = UIState::new();
        assert!(!state.expire_messages(0.0, 5.0));

        state.set_success("queued".to_string());
        assert!(state.expire_messages(10.0, 5.0));
        assert!(state.expire_messages(14.9, 5.0));
        assert!(!state.expire_messages(15.0, 5.0));
        assert!(!state.has_messages());
    }

    #[test]
    fn test_new_message_restarts_timer() {
        let mut state = UIState::new();
        state.set_success("first".to_string());
        assert!(state.expire_messages(0.0, 5.0));

        state.set_error("second".to_string());
        assert!(state.expire_messages(4.0, 5.0));
        assert!(state.expire_messages(8.0, 5.0));
        assert!(!state.expire_messages(9.0, 5.0));
    }
}
