//! # Top-Up Modal
//!
//! Fiat top-up amount with quick-pick presets. Returns a validated
//! `TopUpRequest` on Continue; the app then asks for the PIN.

use eframe::egui;
use shared::{ModalKind, TopUpRequest, MAX_TOP_UP_AMOUNT, MIN_TOP_UP_AMOUNT, TOP_UP_CURRENCY};

use super::host::ModalHost;
use super::shared::{error_label, field_label, modal_frame};
use crate::ui::components::theme::Theme;
use crate::ui::controllers::VisibilityController;
use crate::ui::state::TopUpFormState;

#[derive(Debug)]
pub struct TopUpModal {
    pub host: ModalHost,
    pub form: TopUpFormState,
}

impl TopUpModal {
    pub fn new() -> Self {
        Self {
            host: ModalHost::new(ModalKind::TopUp),
            form: TopUpFormState::new(),
        }
    }

    pub fn mount(&mut self, controller: &VisibilityController, ctx: &egui::Context) {
        self.host.mount(controller, ctx);
    }

    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) -> Option<TopUpRequest> {
        if !self.host.is_visible() {
            return None;
        }

        let form = &mut self.form;
        let mut cancelled = false;

        let request = modal_frame(
            ctx,
            "top_up_modal_overlay",
            "💳 Top up",
            theme.interactive.accent,
            theme,
            |ui| {
                field_label(
                    ui,
                    theme,
                    &format!(
                        "Amount in {} (${:.0} - ${:.0})",
                        TOP_UP_CURRENCY, MIN_TOP_UP_AMOUNT, MAX_TOP_UP_AMOUNT
                    ),
                );
                ui.add_space(4.0);

                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("$")
                            .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                            .color(theme.typography.primary),
                    );
                    ui.add(
                        egui::TextEdit::singleline(&mut form.amount)
                            .hint_text("0.00")
                            .desired_width(160.0)
                            .font(egui::FontId::new(18.0, egui::FontFamily::Proportional)),
                    );
                });
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    for preset in TopUpFormState::PRESETS {
                        if ui.button(format!("${}", preset)).clicked() {
                            form.pick_preset(preset);
                        }
                    }
                });

                error_label(ui, theme, &form.error);
                ui.add_space(16.0);

                let mut request = None;
                ui.horizontal(|ui| {
                    if ui.add(theme.accent_button("Continue", theme.interactive.accent)).clicked() {
                        request = form.submit();
                    }
                    ui.add_space(12.0);
                    if ui.add(theme.outline_button("Cancel")).clicked() {
                        cancelled = true;
                    }
                });
                request
            },
        )
        .flatten();

        if request.is_some() || cancelled {
            self.form.clear();
        }
        if cancelled {
            self.host.hide();
        }
        request
    }
}

impl Default for TopUpModal {
    fn default() -> Self {
        Self::new()
    }
}
