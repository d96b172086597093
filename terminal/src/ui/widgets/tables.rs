//! # Table Components
//!
//! Reusable grid components for displaying tabular data consistently.

use crate::ui::theme::Theme;
use egui;

/// Configuration for table styling
pub struct TableConfig {
    pub num_columns: usize,
    pub spacing: [f32; 2],
    pub striped: bool,
    pub scrollable: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            num_columns: 4,
            spacing: [10.0, 6.0],
            striped: true,
            scrollable: false,
        }
    }
}

/// Render a data grid. The caller renders the header row and the data
/// rows through the callback; this helper owns the grid id, striping and
/// optional scrolling.
pub fn render_table<F>(ui: &mut egui::Ui, id: &str, config: TableConfig, render_rows: F)
where
    F: FnOnce(&mut egui::Ui),
{
    let table_render = |ui: &mut egui::Ui| {
        egui::Grid::new(id)
            .num_columns(config.num_columns)
            .spacing(config.spacing)
            .striped(config.striped)
            .show(ui, render_rows);
    };

    if config.scrollable {
        egui::ScrollArea::vertical().show(ui, table_render);
    } else {
        table_render(ui);
    }
}

/// Render an empty state message
pub fn render_empty_state(
    ui: &mut egui::Ui,
    primary_text: &str,
    secondary_text: Option<&str>,
    theme: &Theme,
) {
    ui.vertical_centered(|ui| {
        ui.add_space(20.0);
        ui.colored_label(theme.dim, primary_text);
        if let Some(secondary) = secondary_text {
            ui.add_space(10.0);
            ui.colored_label(theme.dim, secondary);
        }
    });
}
