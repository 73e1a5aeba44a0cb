//! # Header Module
//!
//! Application header with the wallet actions and the theme toggle.
//!
//! The action buttons are plain callers of the modal controllers: they never
//! touch the modals themselves.

use eframe::egui;
use shared::ModalKind;

use crate::ui::app_state::WalletApp;

impl WalletApp {
    /// Render the header
    pub fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("💼 Wallet")
                    .font(egui::FontId::new(26.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(self.theme.typography.primary),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.add(self.theme.outline_button(self.config.theme.toggle_label())).clicked() {
                    let ctx = ui.ctx().clone();
                    self.toggle_theme(&ctx);
                }
            });
        });

        ui.add_space(10.0);

        ui.horizontal(|ui| {
            let actions = [
                ("📤 Send", ModalKind::SendCrypto, self.theme.interactive.accent),
                ("📥 Receive", ModalKind::ReceiveCrypto, self.theme.interactive.positive),
                ("💳 Top up", ModalKind::TopUp, self.theme.interactive.accent),
            ];

            for (label, kind, color) in actions {
                if ui.add(self.theme.accent_button(label, color)).clicked() {
                    self.controllers.open(kind);
                }
                ui.add_space(8.0);
            }
        });
        ui.add_space(8.0);
    }
}
