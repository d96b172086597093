//! # Dashboard Screen
//!
//! The single main screen: summary stat cards, highlight panels and the
//! sortable/filterable coins table. Rendering reads the engine's derived
//! view under a short read lock; user intents are collected during the
//! frame and applied to the app after the lock is released.

use crate::app::state::{AppState, LoadPhase, OverviewState};
use crate::app::App;
use crate::table::{ColumnId, SortDirection, COLUMNS, PAGE_SIZES};
use crate::ui::theme::Theme;
use crate::ui::widgets::highlights::render_highlight_panel;
use crate::ui::widgets::stat_card::render_stat_card;
use crate::ui::widgets::tables;
use shared::dto::market::MarketRecord;
use shared::utils::{
    format_market_cap, format_number, format_percentage, format_price, format_rank, PLACEHOLDER,
};

/// User intents collected while the state lock is held.
enum Action {
    Search(String),
    Sort(ColumnId),
    PageSize(usize),
    PagePrev,
    PageNext,
    Refresh,
    Retry,
}

/// Render the dashboard and apply the frame's interactions.
pub fn render(ui: &mut egui::Ui, app: &mut App) {
    let theme = Theme::default();
    let mut actions: Vec<Action> = Vec::new();

    {
        let state = app.state.read();
        render_header(ui, &theme, &state, &mut actions);
        ui.add_space(10.0);
        render_stats_row(ui, &theme, &state.overview);
        ui.add_space(10.0);
        render_highlights_row(ui, &theme, &state.overview);
        ui.add_space(10.0);
        render_coins_table(ui, &theme, &state, &mut actions);
    }

    for action in actions {
        match action {
            Action::Search(text) => app.handle_search_input(text),
            Action::Sort(column) => app.handle_sort_click(column),
            Action::PageSize(size) => app.handle_page_size_change(size),
            Action::PagePrev => app.handle_page_prev(),
            Action::PageNext => app.handle_page_next(),
            Action::Refresh => app.handle_refresh_click(),
            Action::Retry => app.handle_retry_click(),
        }
    }
}

fn render_header(ui: &mut egui::Ui, theme: &Theme, state: &AppState, actions: &mut Vec<Action>) {
    ui.horizontal(|ui| {
        ui.heading("Market Dashboard");

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Refresh").clicked() {
                actions.push(Action::Refresh);
            }
            if state.market.refreshing {
                ui.spinner();
            }
            if let Some(updated) = state.market.last_update {
                ui.colored_label(
                    theme.dim,
                    format!("Updated {}s ago", updated.elapsed().as_secs()),
                );
            }
            if let Some(error) = &state.market.last_error {
                ui.colored_label(theme.warning, format!("Last refresh failed: {error}"));
            }
        });
    });
    ui.separator();
}

fn render_stats_row(ui: &mut egui::Ui, theme: &Theme, overview: &OverviewState) {
    match &overview.phase {
        LoadPhase::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.colored_label(theme.dim, "Loading market stats...");
            });
            return;
        }
        LoadPhase::Failed(error) => {
            ui.colored_label(theme.error, format!("Failed to load market stats: {error}"));
            return;
        }
        LoadPhase::Ready => {}
    }

    let Some(global) = &overview.global else {
        return;
    };

    let market_cap = global
        .market_cap_in("usd")
        .map(format_market_cap)
        .unwrap_or_else(|| PLACEHOLDER.to_string());
    let volume = global
        .volume_in("usd")
        .map(format_market_cap)
        .unwrap_or_else(|| PLACEHOLDER.to_string());
    let btc_dominance = global
        .dominance_of("btc")
        .map(|pct| format!("{pct:.1}%"))
        .unwrap_or_else(|| PLACEHOLDER.to_string());
    let active = format_number(global.active_cryptocurrencies as f64, 0);

    let cap_change = format_percentage(global.market_cap_change_percentage_24h_usd);
    let cap_color = theme.price_change_color(cap_change.is_positive);
    let cap_footnote = format!("{} 24h", cap_change.formatted);

    ui.horizontal_wrapped(|ui| {
        render_stat_card(
            ui,
            theme,
            "Total Market Cap",
            &market_cap,
            Some((&cap_footnote, cap_color)),
        );
        render_stat_card(ui, theme, "24h Volume", &volume, None);
        render_stat_card(ui, theme, "BTC Dominance", &btc_dominance, None);
        render_stat_card(ui, theme, "Active Cryptos", &active, None);
    });
}

fn render_highlights_row(ui: &mut egui::Ui, theme: &Theme, overview: &OverviewState) {
    if overview.phase != LoadPhase::Ready {
        return;
    }
    ui.horizontal_wrapped(|ui| {
        render_highlight_panel(ui, theme, "Trending Coins", &overview.trending);
        render_highlight_panel(ui, theme, "Top Gainers (24h)", &overview.top_gainers);
        render_highlight_panel(ui, theme, "Top Losers (24h)", &overview.top_losers);
    });
}

fn render_coins_table(
    ui: &mut egui::Ui,
    theme: &Theme,
    state: &AppState,
    actions: &mut Vec<Action>,
) {
    match &state.market.phase {
        LoadPhase::Loading => {
            ui.vertical_centered(|ui| {
                ui.add_space(60.0);
                ui.spinner();
                ui.colored_label(theme.dim, "Loading market data...");
            });
            return;
        }
        LoadPhase::Failed(error) => {
            ui.vertical_centered(|ui| {
                ui.add_space(60.0);
                ui.colored_label(theme.error, format!("Failed to fetch market data: {error}"));
                ui.add_space(10.0);
                if ui.button("Retry").clicked() {
                    actions.push(Action::Retry);
                }
            });
            return;
        }
        LoadPhase::Ready => {}
    }

    let engine = &state.market.engine;
    let view = engine.view();
    let page_size = engine.state().page_size;
    let page_index = engine.state().page_index;

    // Search box and page size selector
    ui.horizontal(|ui| {
        ui.label("Search:");
        let mut search = state.search_input.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut search)
                .hint_text("Search cryptocurrencies...")
                .desired_width(220.0),
        );
        if response.changed() {
            actions.push(Action::Search(search));
        }

        ui.separator();
        ui.label("Rows:");
        for &size in PAGE_SIZES {
            if ui
                .selectable_label(page_size == size, size.to_string())
                .clicked()
            {
                actions.push(Action::PageSize(size));
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.colored_label(theme.dim, format!("{} coins", engine.records().len()));
        });
    });
    ui.add_space(6.0);

    if view.total_filtered == 0 {
        tables::render_empty_state(
            ui,
            "No matching coins",
            Some("Adjust the search query or wait for the next refresh"),
            theme,
        );
        return;
    }

    let config = tables::TableConfig {
        num_columns: COLUMNS.len(),
        spacing: [14.0, 6.0],
        striped: true,
        scrollable: true,
    };

    let sort = engine.state().sort;
    tables::render_table(ui, "coins_table", config, |ui| {
        // Header row with sortable columns
        for spec in COLUMNS {
            let is_sorted = sort.map(|(column, _)| column == spec.id).unwrap_or(false);
            let indicator = match sort {
                Some((column, SortDirection::Ascending)) if column == spec.id => " \u{25b2}",
                Some((column, SortDirection::Descending)) if column == spec.id => " \u{25bc}",
                _ => "",
            };

            let button = if is_sorted {
                egui::Button::new(format!("{}{}", spec.label, indicator)).fill(theme.selected)
            } else {
                egui::Button::new(spec.label)
            };

            let response = ui.add_sized([spec.width, 22.0], button);
            if spec.sortable && response.clicked() {
                actions.push(Action::Sort(spec.id));
            }
        }
        ui.end_row();

        // Data rows
        for record in &view.rows {
            for spec in COLUMNS {
                render_cell(ui, theme, spec.id, record);
            }
            ui.end_row();
        }
    });

    ui.add_space(6.0);
    render_pagination(ui, theme, page_index, page_size, &view, actions);
}

/// Render one cell, dispatching on the column identifier.
fn render_cell(ui: &mut egui::Ui, theme: &Theme, column: ColumnId, record: &MarketRecord) {
    match column {
        ColumnId::Rank => {
            ui.colored_label(theme.dim, format_rank(record.market_cap_rank));
        }
        ColumnId::Name => {
            ui.horizontal(|ui| {
                ui.label(&record.name);
                ui.colored_label(theme.dim, record.symbol.to_uppercase());
            });
        }
        ColumnId::Price => match record.current_price {
            Some(price) => {
                ui.label(format_price(price));
            }
            None => {
                ui.colored_label(theme.dim, PLACEHOLDER);
            }
        },
        ColumnId::Change1h => {
            render_change_cell(ui, theme, record.price_change_percentage_1h_in_currency)
        }
        ColumnId::Change24h => render_change_cell(ui, theme, record.price_change_percentage_24h),
        ColumnId::Change7d => {
            render_change_cell(ui, theme, record.price_change_percentage_7d_in_currency)
        }
        ColumnId::Volume => match record.total_volume {
            Some(volume) => {
                ui.label(format_market_cap(volume));
            }
            None => {
                ui.colored_label(theme.dim, PLACEHOLDER);
            }
        },
        ColumnId::MarketCap => match record.market_cap {
            Some(cap) => {
                ui.label(format_market_cap(cap));
            }
            None => {
                ui.colored_label(theme.dim, PLACEHOLDER);
            }
        },
    }
}

fn render_change_cell(ui: &mut egui::Ui, theme: &Theme, change: Option<f64>) {
    match change {
        Some(change) => {
            let pct = format_percentage(change);
            ui.colored_label(theme.price_change_color(pct.is_positive), pct.formatted);
        }
        None => {
            ui.colored_label(theme.dim, PLACEHOLDER);
        }
    }
}

fn render_pagination(
    ui: &mut egui::Ui,
    theme: &Theme,
    page_index: usize,
    page_size: usize,
    view: &crate::table::TableView<'_>,
    actions: &mut Vec<Action>,
) {
    ui.horizontal(|ui| {
        let first = page_index * page_size + 1;
        let last = (first + view.rows.len()).saturating_sub(1);
        ui.colored_label(
            theme.dim,
            format!("Showing {} to {} of {} results", first, last, view.total_filtered),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let can_next = page_index + 1 < view.page_count;
            if ui.add_enabled(can_next, egui::Button::new("Next")).clicked() {
                actions.push(Action::PageNext);
            }
            ui.label(format!("Page {} of {}", page_index + 1, view.page_count.max(1)));
            let can_prev = page_index > 0;
            if ui
                .add_enabled(can_prev, egui::Button::new("Previous"))
                .clicked()
            {
                actions.push(Action::PagePrev);
            }
        });
    });
}
