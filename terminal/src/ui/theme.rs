//! # GUI Theme
//!
//! Dark terminal-style theme with red, white and black accents for egui.
//! High contrast, sharp edges, gains in green and losses in red.

use egui::{Color32, Context, Stroke, Visuals};

/// Color palette used by every widget.
#[derive(Clone)]
pub struct Theme {
    /// Pure black background
    pub background: Color32,
    /// Slightly raised panel fill
    pub panel: Color32,
    /// Bright white text
    pub normal: Color32,
    /// Medium gray for secondary text and placeholders
    pub dim: Color32,
    /// Red accent for headers and selection
    pub selected: Color32,
    /// Success green (gains)
    pub success: Color32,
    /// Error red (losses, failures)
    pub error: Color32,
    /// Warning yellow/orange
    pub warning: Color32,
    /// Dark gray borders
    pub border: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color32::from_rgb(0, 0, 0),
            panel: Color32::from_rgb(16, 16, 16),
            normal: Color32::from_rgb(255, 255, 255),
            dim: Color32::from_rgb(150, 150, 150),
            selected: Color32::from_rgb(204, 0, 0),
            success: Color32::from_rgb(0, 255, 0),
            error: Color32::from_rgb(255, 0, 0),
            warning: Color32::from_rgb(255, 170, 0),
            border: Color32::from_rgb(51, 51, 51),
        }
    }
}

impl Theme {
    /// Color for a price change classification.
    pub fn price_change_color(&self, is_positive: bool) -> Color32 {
        if is_positive {
            self.success
        } else {
            self.error
        }
    }

    /// Install the dark visuals on the egui context. Called once at
    /// startup.
    pub fn apply(ctx: &Context) {
        let theme = Theme::default();
        let mut visuals = Visuals::dark();

        visuals.override_text_color = Some(theme.normal);
        visuals.panel_fill = theme.background;
        visuals.window_fill = theme.panel;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, theme.border);
        visuals.widgets.inactive.bg_fill = theme.panel;
        visuals.widgets.hovered.bg_fill = theme.selected.linear_multiply(0.3);
        visuals.widgets.active.bg_fill = theme.selected;
        visuals.selection.bg_fill = theme.selected.linear_multiply(0.5);

        ctx.set_visuals(visuals);
    }
}
