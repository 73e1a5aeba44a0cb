//! # Shared Modal Utilities
//!
//! Common modal functionality shared across the wallet modals.
//!
//! ## Purpose:
//! - One overlay / card layout for every modal
//! - Consistent title, error and button styling
//! - The modal coordinator that renders all modals and routes their outcomes

use eframe::egui;

use crate::ui::app_state::WalletApp;
use crate::ui::components::theme::Theme;
use crate::ui::state::PendingAction;

const MODAL_WIDTH: f32 = 380.0;

/// Draw a dimmed overlay with a centered card and fill it with `add_contents`
pub fn modal_frame<R>(
    ctx: &egui::Context,
    id: &str,
    title: &str,
    accent: egui::Color32,
    theme: &Theme,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> Option<R> {
    let mut result = None;

    // Use Area with Foreground order to ensure it appears above everything
    egui::Area::new(egui::Id::new(id))
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            let screen_rect = ctx.screen_rect();
            ui.painter()
                .rect_filled(screen_rect, egui::Rounding::ZERO, theme.layout.overlay);

            ui.allocate_ui_at_rect(screen_rect, |ui| {
                ui.centered_and_justified(|ui| {
                    egui::Frame::window(ui.style())
                        .fill(theme.layout.card_background)
                        .stroke(egui::Stroke::new(2.0, accent))
                        .rounding(egui::Rounding::same(15.0))
                        .inner_margin(egui::Margin::same(20.0))
                        .show(ui, |ui| {
                            ui.set_max_width(MODAL_WIDTH);

                            ui.vertical_centered(|ui| {
                                ui.label(
                                    egui::RichText::new(title)
                                        .font(egui::FontId::new(24.0, egui::FontFamily::Proportional))
                                        .strong()
                                        .color(accent),
                                );
                                ui.add_space(12.0);
                                result = Some(add_contents(ui));
                            });
                        });
                });
            });
        });

    result
}

/// Field label in the modal's secondary text color
pub fn field_label(ui: &mut egui::Ui, theme: &Theme, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
            .color(theme.typography.secondary),
    );
}

/// Validation error under a form
pub fn error_label(ui: &mut egui::Ui, theme: &Theme, error: &Option<String>) {
    if let Some(error) = error {
        ui.add_space(4.0);
        ui.label(
            egui::RichText::new(error)
                .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
                .color(theme.typography.error),
        );
    }
}

impl WalletApp {
    /// Render all modals - main modal coordinator
    pub fn render_modals(&mut self, ctx: &egui::Context) {
        if let Some(request) = self.send_modal.show(ctx, &self.theme) {
            self.confirmation.begin(PendingAction::Send(request), &self.controllers);
        }

        if let Some(request) = self.top_up_modal.show(ctx, &self.theme) {
            self.confirmation.begin(PendingAction::TopUp(request), &self.controllers);
        }

        self.receive_modal.show(ctx, &self.theme, &self.config);

        // PIN entry last so it stacks above the form that opened it
        if let Some(outcome) = self.pin_modal.show(ctx, &self.theme, self.confirmation.pending()) {
            self.handle_pin_outcome(outcome);
        }
    }
}
