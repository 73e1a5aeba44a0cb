//! # Receive Crypto Modal
//!
//! Shows the deposit address for the selected asset with a copy button.
//! Addresses are issued by the wallet API and cached in the config file.

use eframe::egui;
use shared::{CryptoAsset, ModalKind};

use super::host::ModalHost;
use super::shared::{field_label, modal_frame};
use crate::config::WalletUiConfig;
use crate::ui::components::theme::Theme;
use crate::ui::controllers::VisibilityController;
use crate::ui::state::ReceiveState;

#[derive(Debug)]
pub struct ReceiveCryptoModal {
    pub host: ModalHost,
    pub state: ReceiveState,
}

impl ReceiveCryptoModal {
    pub fn new() -> Self {
        Self {
            host: ModalHost::new(ModalKind::ReceiveCrypto),
            state: ReceiveState::new(),
        }
    }

    pub fn mount(&mut self, controller: &VisibilityController, ctx: &egui::Context) {
        self.host.mount(controller, ctx);
    }

    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme, config: &WalletUiConfig) {
        if !self.host.is_visible() {
            self.state.copied = false;
            return;
        }

        let state = &mut self.state;
        let mut close = false;

        modal_frame(
            ctx,
            "receive_crypto_modal_overlay",
            "📥 Receive crypto",
            theme.interactive.positive,
            theme,
            |ui| {
                ui.horizontal(|ui| {
                    for asset in CryptoAsset::ALL {
                        let selected = state.asset == asset;
                        if ui.selectable_label(selected, asset.symbol()).clicked() {
                            state.select(asset);
                        }
                    }
                });
                ui.add_space(12.0);

                match config.receive_address(state.asset) {
                    Some(address) => {
                        field_label(ui, theme, &format!("Your {} address", state.asset.network()));
                        ui.add_space(4.0);
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(address)
                                    .font(egui::FontId::new(14.0, egui::FontFamily::Monospace))
                                    .color(theme.typography.primary),
                            )
                            .wrap(),
                        );
                        ui.add_space(4.0);
                        field_label(
                            ui,
                            theme,
                            &format!("Only send {} to this address.", state.asset.symbol()),
                        );
                        ui.add_space(12.0);

                        let copy_text = if state.copied { "✔ Copied" } else { "📋 Copy address" };
                        if ui.add(theme.accent_button(copy_text, theme.interactive.positive)).clicked() {
                            ui.output_mut(|o| o.copied_text = address.to_string());
                            log::info!("📋 Copied {} receive address", state.asset.symbol());
                            state.copied = true;
                        }
                    }
                    None => {
                        ui.label(
                            egui::RichText::new(format!(
                                "No {} address has been issued for this wallet yet.",
                                state.asset.symbol()
                            ))
                            .color(theme.typography.secondary),
                        );
                    }
                }

                ui.add_space(12.0);
                if ui.add(theme.outline_button("Close")).clicked() {
                    close = true;
                }
            },
        );

        if close {
            self.state.copied = false;
            self.host.hide();
        }
    }
}

impl Default for ReceiveCryptoModal {
    fn default() -> Self {
        Self::new()
    }
}
