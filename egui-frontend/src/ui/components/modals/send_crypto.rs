//! # Send Crypto Modal
//!
//! Form for sending crypto to an external address. Returns a validated
//! `SendCryptoRequest` on Continue; the app then asks for the PIN.

use eframe::egui;
use shared::{CryptoAsset, ModalKind, SendCryptoRequest, MAX_MEMO_LENGTH};

use super::host::ModalHost;
use super::shared::{error_label, field_label, modal_frame};
use crate::ui::components::theme::Theme;
use crate::ui::controllers::VisibilityController;
use crate::ui::state::SendFormState;

#[derive(Debug)]
pub struct SendCryptoModal {
    pub host: ModalHost,
    pub form: SendFormState,
}

impl SendCryptoModal {
    pub fn new() -> Self {
        Self {
            host: ModalHost::new(ModalKind::SendCrypto),
            form: SendFormState::new(),
        }
    }

    pub fn mount(&mut self, controller: &VisibilityController, ctx: &egui::Context) {
        self.host.mount(controller, ctx);
    }

    /// Render the modal if visible; `Some` once the form validates
    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) -> Option<SendCryptoRequest> {
        if !self.host.is_visible() {
            return None;
        }

        let form = &mut self.form;
        let mut cancelled = false;

        let request = modal_frame(
            ctx,
            "send_crypto_modal_overlay",
            "📤 Send crypto",
            theme.interactive.accent,
            theme,
            |ui| {
                ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                    field_label(ui, theme, "Asset");
                    egui::ComboBox::from_id_source("send_crypto_asset")
                        .selected_text(form.asset.symbol())
                        .width(ui.available_width())
                        .show_ui(ui, |ui| {
                            for asset in CryptoAsset::ALL {
                                ui.selectable_value(
                                    &mut form.asset,
                                    asset,
                                    format!("{} · {}", asset.symbol(), asset.network()),
                                );
                            }
                        });
                    ui.add_space(8.0);

                    field_label(ui, theme, &format!("Recipient ({} network)", form.asset.network()));
                    ui.add(
                        egui::TextEdit::singleline(&mut form.recipient)
                            .hint_text("Paste address")
                            .desired_width(f32::INFINITY),
                    );
                    ui.add_space(8.0);

                    field_label(ui, theme, &format!("Amount ({})", form.asset.symbol()));
                    ui.add(
                        egui::TextEdit::singleline(&mut form.amount)
                            .hint_text("0.00")
                            .desired_width(f32::INFINITY),
                    );
                    ui.add_space(8.0);

                    field_label(
                        ui,
                        theme,
                        &format!("Memo (optional, {}/{})", form.memo.chars().count(), MAX_MEMO_LENGTH),
                    );
                    ui.add(
                        egui::TextEdit::singleline(&mut form.memo)
                            .hint_text("What's it for?")
                            .desired_width(f32::INFINITY),
                    );

                    error_label(ui, theme, &form.error);
                });

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

impl Default for SendCryptoModal {
    fn default() -> Self {
        Self::new()
    }
}
