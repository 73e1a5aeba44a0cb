//! # UI Module
//!
//! Everything that draws the wallet or routes input to it.
//!
//! ## Module Organization:
//! - `controllers` - modal visibility controllers
//! - `components` - header, outbox, theme and the modals
//! - `state` - form, feedback and confirmation state
//! - `app_state` - the `WalletApp` struct and its wiring
//! - `app_coordinator` - the `eframe::App` update loop

pub mod app_coordinator;
pub mod app_state;
pub mod components;
pub mod controllers;
pub mod state;

pub use app_state::WalletApp;
