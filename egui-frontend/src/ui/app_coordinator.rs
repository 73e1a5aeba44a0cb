//! # App Coordinator Module
//!
//! The main update loop.
//!
//! ## Application Flow:
//! 1. Handle global input (Escape closes every modal)
//! 2. Expire feedback messages
//! 3. Render the header (wallet actions)
//! 4. Render messages and the pending request list
//! 5. Render whichever modals are visible

use eframe::egui;
use std::time::Duration;

use crate::ui::app_state::WalletApp;

/// How long a feedback banner stays up
const MESSAGE_TIMEOUT: Duration = Duration::from_secs(5);

impl eframe::App for WalletApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.dismiss_all_modals();
        }

        let now = ctx.input(|i| i.time);
        if self.ui.expire_messages(now, MESSAGE_TIMEOUT.as_secs_f64()) {
            ctx.request_repaint_after(MESSAGE_TIMEOUT);
        }

        egui::TopBottomPanel::top("wallet_header").show(ctx, |ui| {
            self.render_header(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_messages(ui);
            ui.add_space(8.0);
            self.render_outbox(ui);
        });

        self.render_modals(ctx);
    }
}
