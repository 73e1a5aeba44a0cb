//! # Modal Host
//!
//! The modal-owning side of the visibility controller contract.
//!
//! A modal component keeps one `ModalHost`. On mount the host registers a
//! setter for its own visibility flag with the modal's controller; from then
//! on anyone holding the controller can show or hide the modal. Unmounting
//! releases the registration so the controller never calls into a modal that
//! is gone.

use eframe::egui;
use log::debug;
use shared::ModalKind;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::ui::controllers::{Registration, VisibilityController};

#[derive(Debug)]
pub struct ModalHost {
    kind: ModalKind,
    visible: Arc<AtomicBool>,
    registration: Option<Registration>,
}

impl ModalHost {
    /// A hidden, unmounted host
    pub fn new(kind: ModalKind) -> Self {
        Self {
            kind,
            visible: Arc::new(AtomicBool::new(false)),
            registration: None,
        }
    }

    /// Subscribe to `controller`. Signals set the visibility flag and ask
    /// `ctx` for a repaint so the change shows up on the next frame.
    pub fn mount(&mut self, controller: &VisibilityController, ctx: &egui::Context) {
        let visible = Arc::clone(&self.visible);
        let ctx = ctx.clone();
        let kind = self.kind;

        // Replacing an older registration of ours drops it after the new one is current
        self.registration = Some(controller.register(move |show| {
            debug!("{} modal visibility -> {}", kind, show);
            visible.store(show, Ordering::SeqCst);
            ctx.request_repaint();
        }));
    }

    pub fn unmount(&mut self) {
        if let Some(registration) = self.registration.take() {
            registration.unregister();
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.registration.as_ref().map_or(false, Registration::is_current)
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }

    /// Dismiss from inside the modal (Cancel / Close buttons)
    pub fn hide(&self) {
        self.visible.store(false, Ordering::SeqCst);
    }
}
