//! # Highlight Panel Widget
//!
//! Numbered coin list used by the trending / top gainers / top losers
//! panels: rank in panel, name and symbol, price and 24h change.

use crate::app::state::HighlightCoin;
use crate::ui::theme::Theme;
use shared::utils::{format_percentage, format_price, PLACEHOLDER};

/// Render one highlight panel with its title and coin rows.
pub fn render_highlight_panel(
    ui: &mut egui::Ui,
    theme: &Theme,
    title: &str,
    coins: &[HighlightCoin],
) {
    egui::Frame::new()
        .fill(theme.panel)
        .stroke(egui::Stroke::new(1.0, theme.border))
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_min_width(260.0);
            ui.colored_label(theme.selected, title);
            ui.add_space(6.0);

            if coins.is_empty() {
                ui.colored_label(theme.dim, "No data");
                return;
            }

            for (index, coin) in coins.iter().enumerate() {
                ui.horizontal(|ui| {
                    ui.colored_label(theme.dim, format!("{}", index + 1));
                    ui.label(&coin.name);
                    ui.colored_label(theme.dim, coin.symbol.to_uppercase());

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        match coin.change_24h {
                            Some(change) => {
                                let pct = format_percentage(change);
                                ui.colored_label(
                                    theme.price_change_color(pct.is_positive),
                                    pct.formatted,
                                );
                            }
                            None => {
                                ui.colored_label(theme.dim, PLACEHOLDER);
                            }
                        }
                        match coin.current_price {
                            Some(price) => {
                                ui.label(format_price(price));
                            }
                            None => {
                                ui.colored_label(theme.dim, PLACEHOLDER);
                            }
                        }
                    });
                });
            }
        });
}
