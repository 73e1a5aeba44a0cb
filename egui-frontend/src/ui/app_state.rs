//! # App State Module
//!
//! The central application state structure and initialization logic for the
//! wallet UI.
//!
//! ## Key Types:
//! - `WalletApp` - main application state struct
//!
//! ## Key Functions:
//! - `new()` / `with_context()` - build the app and mount every modal
//! - `toggle_theme()` - switch light/dark and persist the choice
//! - `handle_pin_outcome()` - finish or abandon a confirmation flow
//!
//! ## Modal Wiring:
//! `ModalControllers` is created here and injected everywhere else. All four
//! modals are mounted during construction, before the first frame, so no
//! caller can open a modal before its host is listening.

use eframe::egui;
use log::{debug, error, info};
use shared::WalletRequest;
use std::path::PathBuf;

use crate::config::WalletUiConfig;
use crate::ui::components::modals::{
    PinEntryModal, PinOutcome, ReceiveCryptoModal, SendCryptoModal, TopUpModal,
};
use crate::ui::components::theme::Theme;
use crate::ui::controllers::ModalControllers;
use crate::ui::state::{ConfirmationFlow, UIState};

/// Main application struct for the egui wallet
pub struct WalletApp {
    /// Visibility controllers for every global modal
    pub controllers: ModalControllers,

    pub config: WalletUiConfig,
    /// Where `config` is persisted; `None` when the platform has no config dir
    pub config_path: Option<PathBuf>,
    pub theme: Theme,

    pub ui: UIState,
    pub confirmation: ConfirmationFlow,

    /// PIN-confirmed requests waiting for the API client
    pub outbox: Vec<WalletRequest>,

    // Modals
    pub pin_modal: PinEntryModal,
    pub send_modal: SendCryptoModal,
    pub receive_modal: ReceiveCryptoModal,
    pub top_up_modal: TopUpModal,
}

impl WalletApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: WalletUiConfig,
        config_path: Option<PathBuf>,
    ) -> Self {
        Self::with_context(&cc.egui_ctx, config, config_path)
    }

    /// Build the app against an existing egui context
    pub fn with_context(
        ctx: &egui::Context,
        config: WalletUiConfig,
        config_path: Option<PathBuf>,
    ) -> Self {
        info!("🚀 Initializing WalletApp");

        let controllers = ModalControllers::new();
        let theme = Theme::for_mode(config.theme);
        theme.apply(ctx);

        let mut app = Self {
            controllers,
            config,
            config_path,
            theme,
            ui: UIState::new(),
            confirmation: ConfirmationFlow::new(),
            outbox: Vec::new(),
            pin_modal: PinEntryModal::new(),
            send_modal: SendCryptoModal::new(),
            receive_modal: ReceiveCryptoModal::new(),
            top_up_modal: TopUpModal::new(),
        };
        app.mount_modals(ctx);
        app
    }

    fn mount_modals(&mut self, ctx: &egui::Context) {
        self.pin_modal.mount(self.controllers.pin_entry(), ctx);
        self.send_modal.mount(self.controllers.send_crypto(), ctx);
        self.receive_modal.mount(self.controllers.receive_crypto(), ctx);
        self.top_up_modal.mount(self.controllers.top_up(), ctx);
        info!("🪟 Mounted {} modals", shared::ModalKind::ALL.len());
    }

    /// Switch between light and dark mode and persist the choice
    pub fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.config.theme = self.config.theme.toggled();
        self.theme = Theme::for_mode(self.config.theme);
        self.theme.apply(ctx);
        info!("🎨 Theme switched to {:?}", self.config.theme);
        self.save_config();
    }

    fn save_config(&mut self) {
        let Some(path) = &self.config_path else {
            return;
        };
        if let Err(e) = self.config.save(path) {
            error!("Failed to save config: {:#}", e);
            self.ui.set_error(format!("Couldn't save settings: {}", e));
        }
    }

    /// Finish or abandon the pending confirmation
    pub fn handle_pin_outcome(&mut self, outcome: PinOutcome) {
        match outcome {
            PinOutcome::Confirmed(pin) => {
                if let Some(request) = self.confirmation.confirm(pin) {
                    self.ui.set_success(format!("{} queued", request.summary()));
                    self.outbox.push(request);
                }
            }
            PinOutcome::Cancelled => {
                self.confirmation.cancel();
            }
        }
    }

    /// Escape key: close every modal and drop any pending confirmation
    pub fn dismiss_all_modals(&mut self) {
        self.controllers.close_all();
        self.confirmation.cancel();
        self.pin_modal.form.clear();
        self.receive_modal.state.copied = false;
    }

    fn unmount_modals(&mut self) {
        self.pin_modal.host.unmount();
        self.send_modal.host.unmount();
        self.receive_modal.host.unmount();
        self.top_up_modal.host.unmount();
    }
}

impl Drop for WalletApp {
    fn drop(&mut self) {
        self.unmount_modals();
        debug!("Unmounted all modals");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::theme::ThemeMode;
    use crate::ui::state::PendingAction;
    use shared::{CryptoAsset, PinSubmission, SendCryptoRequest, TopUpRequest};
    use tempfile::TempDir;

    fn test_app() -> (egui::Context, WalletApp) {
        let ctx = egui::Context::default();
        let app = WalletApp::with_context(&ctx, WalletUiConfig::default(), None);
        (ctx, app)
    }

    #[test]
    fn test_all_modals_mounted_at_startup() {
        let (_ctx, app) = test_app();
        assert!(app.pin_modal.host.is_mounted());
        assert!(app.send_modal.host.is_mounted());
        assert!(app.receive_modal.host.is_mounted());
        assert!(app.top_up_modal.host.is_mounted());
        for kind in shared::ModalKind::ALL {
            assert!(app.controllers.get(kind).is_bound());
        }
    }

    #[test]
    fn test_callers_open_modals_through_controllers() {
        let (_ctx, app) = test_app();
        let caller = app.controllers.clone();

        caller.top_up().open();
        assert!(app.top_up_modal.host.is_visible());
        assert!(!app.pin_modal.host.is_visible());

        caller.top_up().close();
        assert!(!app.top_up_modal.host.is_visible());
    }

    #[test]
    fn test_send_flow_queues_confirmed_request() {
        let (_ctx, mut app) = test_app();
        app.controllers.send_crypto().open();

        let request = SendCryptoRequest::from_form(
            CryptoAsset::Ethereum,
            "0x52908400098527886E0F7030069857D2E4169EE7",
            "0.5",
            "",
        )
        .unwrap();
        app.confirmation.begin(PendingAction::Send(request), &app.controllers);
        assert!(!app.send_modal.host.is_visible());
        assert!(app.pin_modal.host.is_visible());

        app.handle_pin_outcome(PinOutcome::Confirmed(PinSubmission::parse("2468").unwrap()));

        assert_eq!(app.outbox.len(), 1);
        assert!(matches!(app.outbox[0], WalletRequest::Send { .. }));
        assert!(app.ui.success_message.as_deref().unwrap().contains("0.5 ETH"));
    }

    #[test]
    fn test_cancelled_pin_queues_nothing() {
        let (_ctx, mut app) = test_app();
        let request = TopUpRequest::from_form("40").unwrap();
        app.confirmation.begin(PendingAction::TopUp(request), &app.controllers);

        app.handle_pin_outcome(PinOutcome::Cancelled);

        assert!(app.outbox.is_empty());
        assert!(app.confirmation.pending().is_none());
    }

    #[test]
    fn test_dismiss_all_modals() {
        let (_ctx, mut app) = test_app();
        app.controllers.receive_crypto().open();
        app.confirmation.begin(
            PendingAction::TopUp(TopUpRequest::from_form("40").unwrap()),
            &app.controllers,
        );

        app.dismiss_all_modals();

        assert!(!app.receive_modal.host.is_visible());
        assert!(!app.pin_modal.host.is_visible());
        assert!(app.confirmation.pending().is_none());
    }

    #[test]
    fn test_dismiss_all_modals_forgets_typed_pin() {
        let (_ctx, mut app) = test_app();
        app.confirmation.begin(
            PendingAction::TopUp(TopUpRequest::from_form("40").unwrap()),
            &app.controllers,
        );
        app.pin_modal.form.input = "12".to_string();

        app.dismiss_all_modals();
        app.confirmation.begin(
            PendingAction::TopUp(TopUpRequest::from_form("9000").unwrap()),
            &app.controllers,
        );

        assert!(app.pin_modal.host.is_visible());
        assert_eq!(app.pin_modal.form.input, "");
    }

    #[test]
    fn test_pin_closed_by_controller_is_cleared_on_next_frame() {
        let (ctx, mut app) = test_app();
        app.controllers.pin_entry().open();
        app.pin_modal.form.input = "987".to_string();

        app.controllers.pin_entry().close();
        let theme = app.theme.clone();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            assert!(app.pin_modal.show(ctx, &theme, None).is_none());
        });

        assert!(app.pin_modal.form.input.is_empty());
        assert!(app.pin_modal.form.error.is_none());
    }

    #[test]
    fn test_toggle_theme_persists() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        let ctx = egui::Context::default();
        let mut app = WalletApp::with_context(&ctx, WalletUiConfig::default(), Some(path.clone()));

        app.toggle_theme(&ctx);

        assert_eq!(app.theme.mode, ThemeMode::Dark);
        assert!(ctx.style().visuals.dark_mode);
        assert_eq!(WalletUiConfig::load(&path).unwrap().theme, ThemeMode::Dark);
        assert!(app.ui.error_message.is_none());
    }

    #[test]
    fn test_dropping_app_unbinds_controllers() {
        let (_ctx, app) = test_app();
        let caller = app.controllers.clone();

        drop(app);

        for kind in shared::ModalKind::ALL {
            assert!(!caller.get(kind).is_bound());
        }
        // Late callers are silently ignored
        caller.open(shared::ModalKind::PinEntry);
    }
}
