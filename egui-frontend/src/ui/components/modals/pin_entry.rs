//! # PIN Entry Modal
//!
//! Masked PIN input used to confirm sends and top-ups.
//!
//! ## Responsibilities:
//! - Accept exactly `PIN_LENGTH` digits (non-digits are dropped as typed)
//! - Show what is being confirmed
//! - Report Confirm / Cancel to the app

use eframe::egui;
use shared::{ModalKind, PinSubmission};

use super::host::ModalHost;
use super::shared::{error_label, field_label, modal_frame};
use crate::ui::components::theme::Theme;
use crate::ui::controllers::VisibilityController;
use crate::ui::state::{PendingAction, PinFormState};

/// What the user did with the PIN modal this frame
#[derive(Debug, Clone, PartialEq)]
pub enum PinOutcome {
    Confirmed(PinSubmission),
    Cancelled,
}

#[derive(Debug)]
pub struct PinEntryModal {
    pub host: ModalHost,
    pub form: PinFormState,
}

impl PinEntryModal {
    pub fn new() -> Self {
        Self {
            host: ModalHost::new(ModalKind::PinEntry),
            form: PinFormState::new(),
        }
    }

    pub fn mount(&mut self, controller: &VisibilityController, ctx: &egui::Context) {
        self.host.mount(controller, ctx);
    }

    /// Render the modal if visible
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        theme: &Theme,
        pending: Option<&PendingAction>,
    ) -> Option<PinOutcome> {
        if !self.host.is_visible() {
            // Closed from outside (Escape, a controller close): never keep digits around
            if !self.form.input.is_empty() || self.form.error.is_some() {
                self.form.clear();
            }
            return None;
        }

        let prompt = pending
            .map(PendingAction::prompt)
            .unwrap_or_else(|| "Enter your PIN".to_string());
        let form = &mut self.form;

        let outcome = modal_frame(
            ctx,
            "pin_entry_modal_overlay",
            "🔒 Confirm with PIN",
            theme.interactive.danger,
            theme,
            |ui| {
                field_label(ui, theme, &prompt);
                ui.add_space(10.0);

                let response = ui.add(
                    egui::TextEdit::singleline(&mut form.input)
                        .password(true)
                        .hint_text("••••")
                        .horizontal_align(egui::Align::Center)
                        .desired_width(140.0)
                        .font(egui::FontId::new(24.0, egui::FontFamily::Monospace)),
                );
                if response.changed() {
                    form.sanitize();
                    form.error = None;
                }
                if !response.has_focus() && form.input.is_empty() {
                    response.request_focus();
                }

                error_label(ui, theme, &form.error);
                ui.add_space(16.0);

                let enter_pressed = response.lost_focus()
                    && ui.input(|i| i.key_pressed(egui::Key::Enter));

                let mut outcome = None;
                ui.horizontal(|ui| {
                    let confirm = ui.add_enabled(
                        form.is_complete(),
                        theme.accent_button("Confirm", theme.interactive.danger),
                    );
                    if confirm.clicked() || (enter_pressed && form.is_complete()) {
                        outcome = form.submit().map(PinOutcome::Confirmed);
                    }

                    ui.add_space(12.0);

                    if ui.add(theme.outline_button("Cancel")).clicked() {
                        outcome = Some(PinOutcome::Cancelled);
                    }
                });
                outcome
            },
        )
        .flatten();

        if outcome.is_some() {
            self.form.clear();
            self.host.hide();
        }
        outcome
    }
}

impl Default for PinEntryModal {
    fn default() -> Self {
        Self::new()
    }
}
