//! # UI Components Module
//!
//! This module organizes all UI components for the wallet application.
//!
//! ## Module Organization:
//! - `header` - title, wallet action buttons and theme toggle
//! - `modals` - the global overlays and their hosts
//! - `outbox` - pending request list and feedback banners
//! - `theme` - light and dark palettes

pub mod header;
pub mod modals;
pub mod outbox;
pub mod theme;
