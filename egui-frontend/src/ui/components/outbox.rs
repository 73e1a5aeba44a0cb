//! # Outbox Module
//!
//! Lists PIN-confirmed requests that are waiting to be submitted to the
//! wallet API, plus the feedback banners.

use eframe::egui;

use crate::ui::app_state::WalletApp;

impl WalletApp {
    /// Render error and success messages
    pub fn render_messages(&mut self, ui: &mut egui::Ui) {
        let mut dismissed = false;

        if let Some(error) = &self.ui.error_message {
            ui.horizontal(|ui| {
                ui.colored_label(self.theme.typography.error, format!("❌ {}", error));
                dismissed |= ui.small_button("✖").clicked();
            });
        }
        if let Some(success) = &self.ui.success_message {
            ui.horizontal(|ui| {
                ui.colored_label(self.theme.typography.success, format!("✅ {}", success));
                dismissed |= ui.small_button("✖").clicked();
            });
        }

        if dismissed {
            self.ui.clear_messages();
        }
    }

    /// Render the pending request list
    pub fn render_outbox(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(self.theme.layout.card_background)
            .stroke(egui::Stroke::new(1.0, self.theme.layout.card_border))
            .rounding(egui::Rounding::same(12.0))
            .inner_margin(egui::Margin::same(14.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("🕓 Pending requests")
                            .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                            .strong()
                            .color(self.theme.typography.primary),
                    );

                    if !self.outbox.is_empty() {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.small_button("Clear").clicked() {
                                log::info!("🧹 Cleared {} pending requests", self.outbox.len());
                                self.outbox.clear();
                            }
                        });
                    }
                });
                ui.add_space(8.0);

                if self.outbox.is_empty() {
                    ui.label(
                        egui::RichText::new("Nothing waiting. Confirmed sends and top-ups show up here.")
                            .color(self.theme.typography.secondary),
                    );
                    return;
                }

                egui::ScrollArea::vertical().max_height(360.0).show(ui, |ui| {
                    for request in self.outbox.iter().rev() {
                        ui.label(
                            egui::RichText::new(request.summary())
                                .color(self.theme.typography.primary),
                        );
                        ui.label(
                            egui::RichText::new(request.request_id())
                                .font(egui::FontId::new(11.0, egui::FontFamily::Monospace))
                                .color(self.theme.typography.secondary),
                        );
                        ui.separator();
                    }
                });
            });
    }
}
