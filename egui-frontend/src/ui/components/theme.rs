//! # Theme Configuration
//!
//! Centralized color and style configuration for the wallet UI.
//! All visual styling should go through a `Theme` so that the light and dark
//! palettes stay consistent.
//!
//! ## Usage
//! ```rust,ignore
//! let theme = Theme::for_mode(ThemeMode::Dark);
//! theme.apply(ctx);
//! let accent = theme.interactive.accent;
//! ```

use eframe::egui::{self, Color32};
use serde::{Deserialize, Serialize};

/// Light or dark appearance, persisted in the config file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Label for the button that switches away from this mode
    pub fn toggle_label(self) -> &'static str {
        match self {
            ThemeMode::Light => "🌙 Dark",
            ThemeMode::Dark => "☀ Light",
        }
    }
}

/// Main theme configuration structure
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub mode: ThemeMode,
    /// Interactive element colors (buttons, borders)
    pub interactive: InteractiveColors,
    /// Background and layout colors
    pub layout: LayoutColors,
    /// Text and typography colors
    pub typography: TypographyColors,
}

/// Colors for interactive elements
#[derive(Debug, Clone, PartialEq)]
pub struct InteractiveColors {
    /// Primary accent (send, continue buttons, modal borders)
    pub accent: Color32,
    /// Accent for receive / incoming money
    pub positive: Color32,
    /// Accent for destructive or security-sensitive actions (PIN entry)
    pub danger: Color32,
    /// Text drawn on top of accent fills
    pub on_accent: Color32,
}

/// Layout and container colors
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutColors {
    pub panel_background: Color32,
    pub card_background: Color32,
    pub card_border: Color32,
    /// Dimming layer drawn behind modals
    pub overlay: Color32,
    /// Background of text inputs
    pub input_background: Color32,
}

/// Text and typography colors
#[derive(Debug, Clone, PartialEq)]
pub struct TypographyColors {
    pub primary: Color32,
    pub secondary: Color32,
    pub error: Color32,
    pub success: Color32,
}

pub const LIGHT_THEME: Theme = Theme {
    mode: ThemeMode::Light,
    interactive: InteractiveColors {
        accent: Color32::from_rgb(79, 70, 229),
        positive: Color32::from_rgb(22, 163, 74),
        danger: Color32::from_rgb(220, 50, 50),
        on_accent: Color32::WHITE,
    },
    layout: LayoutColors {
        panel_background: Color32::from_rgb(246, 247, 251),
        card_background: Color32::WHITE,
        card_border: Color32::from_rgb(220, 220, 230),
        overlay: Color32::from_rgba_premultiplied(0, 0, 0, 128),
        input_background: Color32::from_rgb(248, 248, 248),
    },
    typography: TypographyColors {
        primary: Color32::from_rgb(30, 30, 40),
        secondary: Color32::from_rgb(100, 100, 115),
        error: Color32::from_rgb(220, 50, 50),
        success: Color32::from_rgb(22, 163, 74),
    },
};

pub const DARK_THEME: Theme = Theme {
    mode: ThemeMode::Dark,
    interactive: InteractiveColors {
        accent: Color32::from_rgb(129, 140, 248),
        positive: Color32::from_rgb(74, 222, 128),
        danger: Color32::from_rgb(248, 113, 113),
        on_accent: Color32::from_rgb(17, 17, 27),
    },
    layout: LayoutColors {
        panel_background: Color32::from_rgb(17, 17, 27),
        card_background: Color32::from_rgb(30, 30, 46),
        card_border: Color32::from_rgb(69, 71, 90),
        overlay: Color32::from_rgba_premultiplied(0, 0, 0, 170),
        input_background: Color32::from_rgb(24, 24, 37),
    },
    typography: TypographyColors {
        primary: Color32::from_rgb(230, 230, 240),
        secondary: Color32::from_rgb(166, 173, 200),
        error: Color32::from_rgb(248, 113, 113),
        success: Color32::from_rgb(74, 222, 128),
    },
};

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => LIGHT_THEME,
            ThemeMode::Dark => DARK_THEME,
        }
    }

    /// Configure global egui styling for this theme
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = match self.mode {
            ThemeMode::Light => egui::Visuals::light(),
            ThemeMode::Dark => egui::Visuals::dark(),
        };
        visuals.panel_fill = self.layout.panel_background;
        visuals.window_fill = self.layout.card_background;
        // Text edits use extreme_bg_color in egui 0.28
        visuals.extreme_bg_color = self.layout.input_background;
        visuals.selection.bg_fill = self.interactive.accent;
        ctx.set_visuals(visuals);
    }

    /// Filled button in the given accent color
    pub fn accent_button(&self, text: &str, fill: Color32) -> egui::Button<'static> {
        egui::Button::new(
            egui::RichText::new(text.to_string())
                .font(egui::FontId::new(15.0, egui::FontFamily::Proportional))
                .color(self.interactive.on_accent),
        )
        .fill(fill)
        .rounding(egui::Rounding::same(10.0))
        .min_size(egui::vec2(120.0, 38.0))
    }

    /// Outlined secondary button (Cancel, Close)
    pub fn outline_button(&self, text: &str) -> egui::Button<'static> {
        egui::Button::new(
            egui::RichText::new(text.to_string())
                .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                .color(self.typography.primary),
        )
        .fill(self.layout.card_background)
        .stroke(egui::Stroke::new(1.5, self.layout.card_border))
        .rounding(egui::Rounding::same(10.0))
        .min_size(egui::vec2(90.0, 38.0))
    }
}

impl Default for Theme {
    fn default() -> Self {
        LIGHT_THEME
    }
}
