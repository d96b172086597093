//! # Stat Card Widget
//!
//! Summary statistic card: a dim title, a large value, and an optional
//! colored footnote (e.g. the 24h market cap change).

use crate::ui::theme::Theme;
use egui::{Color32, RichText};

/// Render one summary card inside the current layout cell.
pub fn render_stat_card(
    ui: &mut egui::Ui,
    theme: &Theme,
    title: &str,
    value: &str,
    footnote: Option<(&str, Color32)>,
) {
    egui::Frame::new()
        .fill(theme.panel)
        .stroke(egui::Stroke::new(1.0, theme.border))
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_min_width(200.0);
            ui.vertical(|ui| {
                ui.colored_label(theme.dim, title);
                ui.label(RichText::new(value).size(22.0).strong());
                if let Some((text, color)) = footnote {
                    ui.colored_label(color, text);
                }
            });
        });
}
