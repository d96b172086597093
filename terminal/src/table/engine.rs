//! # Tabular Data Engine
//!
//! Owns the in-memory record set and the sort/filter/pagination state,
//! and derives the displayed view on demand. The engine is the sole
//! arbiter of that state: every mutation goes through its operations, all
//! of which are synchronous and never suspend. It knows nothing about the
//! UI; the presentation layer reads [`TableEngine::view`] each frame.

use crate::table::columns::{ColumnId, SortDirection, SortKey};
use shared::dto::market::MarketRecord;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Selectable page sizes.
pub const PAGE_SIZES: &[usize] = &[25, 50, 100];

/// Default rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Mutable sort/filter/pagination configuration.
///
/// `sort` holds at most one `(column, direction)` pair: the single-column
/// policy, last click wins. `column_filters` is part of the contract but
/// unbound in the default configuration.
#[derive(Debug, Clone)]
pub struct TableViewState {
    pub sort: Option<(ColumnId, SortDirection)>,
    pub global_query: String,
    pub column_filters: HashMap<ColumnId, String>,
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for TableViewState {
    fn default() -> Self {
        Self {
            sort: None,
            global_query: String::new(),
            column_filters: HashMap::new(),
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// The derived, display-ready slice of the record set.
pub struct TableView<'a> {
    pub rows: Vec<&'a MarketRecord>,
    pub page_count: usize,
    pub total_filtered: usize,
}

/// In-memory record set plus view state.
#[derive(Default)]
pub struct TableEngine {
    records: Vec<MarketRecord>,
    state: TableViewState,
}

impl TableEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full (unfiltered) record set, in source order.
    pub fn records(&self) -> &[MarketRecord] {
        &self.records
    }

    pub fn state(&self) -> &TableViewState {
        &self.state
    }

    /// Swap the record set wholesale. Sort, filter and page state are left
    /// untouched; a page index that ends up past the last page simply
    /// yields an empty slice until the user navigates.
    pub fn replace_records(&mut self, records: Vec<MarketRecord>) {
        self.records = records;
    }

    /// Cycle the sort on a column: unsorted or other column -> ascending,
    /// ascending -> descending, descending -> ascending. There is no way
    /// back to the unsorted state once a column has been clicked; clicking
    /// a different column clears the previous one.
    pub fn toggle_sort(&mut self, column: ColumnId) {
        if !column.spec().sortable {
            return;
        }
        self.state.sort = match self.state.sort {
            Some((current, SortDirection::Ascending)) if current == column => {
                Some((column, SortDirection::Descending))
            }
            _ => Some((column, SortDirection::Ascending)),
        };
    }

    /// Set the sort explicitly.
    pub fn set_sort(&mut self, column: ColumnId, direction: SortDirection) {
        if !column.spec().sortable {
            return;
        }
        self.state.sort = Some((column, direction));
    }

    /// Replace the free-text filter. The stored query is trimmed; the page
    /// index resets to 0 because the result set size changes.
    pub fn set_global_query(&mut self, query: &str) {
        self.state.global_query = query.trim().to_string();
        self.state.page_index = 0;
    }

    /// Set or clear a per-column filter. Resets the page index like any
    /// other filter change.
    pub fn set_column_filter(&mut self, column: ColumnId, filter: &str) {
        let filter = filter.trim();
        if filter.is_empty() {
            self.state.column_filters.remove(&column);
        } else {
            self.state.column_filters.insert(column, filter.to_string());
        }
        self.state.page_index = 0;
    }

    /// Replace the page size. Only the enumerated sizes are accepted;
    /// anything else is ignored. Resets the page index to 0.
    pub fn set_page_size(&mut self, size: usize) {
        if !PAGE_SIZES.contains(&size) {
            tracing::warn!(size, "Ignoring unsupported page size");
            return;
        }
        self.state.page_size = size;
        self.state.page_index = 0;
    }

    /// Request a page. Out-of-range requests are clamped into
    /// `[0, page_count - 1]`, not rejected.
    pub fn set_page_index(&mut self, index: usize) {
        let page_count = self.page_count();
        self.state.page_index = if page_count == 0 {
            0
        } else {
            index.min(page_count - 1)
        };
    }

    /// Number of pages for the current filtered set.
    pub fn page_count(&self) -> usize {
        let total = self.filtered().len();
        total.div_ceil(self.state.page_size)
    }

    /// Derive the current view: filter, then stable-sort, then slice the
    /// active page.
    pub fn view(&self) -> TableView<'_> {
        let mut filtered = self.filtered();

        if let Some((column, direction)) = self.state.sort {
            filtered.sort_by(|a, b| compare_records(column, direction, a, b));
        }

        let total_filtered = filtered.len();
        let page_count = total_filtered.div_ceil(self.state.page_size);

        let start = (self.state.page_index * self.state.page_size).min(total_filtered);
        let end = (start + self.state.page_size).min(total_filtered);
        let rows = filtered[start..end].to_vec();

        TableView {
            rows,
            page_count,
            total_filtered,
        }
    }

    /// Apply the global query and the per-column filters, preserving
    /// source order.
    fn filtered(&self) -> Vec<&MarketRecord> {
        let query = self.state.global_query.trim().to_lowercase();
        self.records
            .iter()
            .filter(|record| {
                query.is_empty()
                    || record.name.to_lowercase().contains(&query)
                    || record.symbol.to_lowercase().contains(&query)
            })
            .filter(|record| {
                self.state
                    .column_filters
                    .iter()
                    .all(|(column, filter)| column.matches_filter(record, filter))
            })
            .collect()
    }
}

/// Compare two records on a column. Numeric columns place absent values
/// last in both directions; the name column compares case-insensitively.
/// Equal keys return `Ordering::Equal`, and the caller's stable sort keeps
/// the source order for them.
fn compare_records(
    column: ColumnId,
    direction: SortDirection,
    a: &MarketRecord,
    b: &MarketRecord,
) -> Ordering {
    match (column.sort_key(a), column.sort_key(b)) {
        (SortKey::Number(x), SortKey::Number(y)) => match (x, y) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(x), Some(y)) => direction.apply(x.partial_cmp(&y).unwrap_or(Ordering::Equal)),
        },
        (SortKey::Text(x), SortKey::Text(y)) => {
            direction.apply(x.to_lowercase().cmp(&y.to_lowercase()))
        }
        // A column yields one key kind; mixed pairs cannot happen.
        _ => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        id: &str,
        name: &str,
        symbol: &str,
        rank: Option<u32>,
        price: Option<f64>,
        change_24h: Option<f64>,
    ) -> MarketRecord {
        MarketRecord {
            id: id.to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            image: String::new(),
            market_cap_rank: rank,
            current_price: price,
            price_change_percentage_1h_in_currency: None,
            price_change_percentage_24h: change_24h,
            price_change_percentage_7d_in_currency: None,
            total_volume: None,
            market_cap: None,
            circulating_supply: None,
            last_updated: None,
        }
    }

    fn engine_with(records: Vec<MarketRecord>) -> TableEngine {
        let mut engine = TableEngine::new();
        engine.replace_records(records);
        engine
    }

    fn row_ids<'a>(view: &TableView<'a>) -> Vec<&'a str> {
        view.rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn empty_record_set_yields_empty_view() {
        let engine = TableEngine::new();
        let view = engine.view();
        assert_eq!(view.page_count, 0);
        assert!(view.rows.is_empty());
        assert_eq!(view.total_filtered, 0);
    }

    #[test]
    fn sort_by_rank_ascending() {
        let mut engine = engine_with(vec![
            record("a", "Alpha", "alp", Some(2), Some(100.0), Some(-5.0)),
            record("b", "Beta", "bet", Some(1), Some(50.0), Some(10.0)),
        ]);
        engine.set_sort(ColumnId::Rank, SortDirection::Ascending);
        assert_eq!(row_ids(&engine.view()), vec!["b", "a"]);
    }

    #[test]
    fn numeric_nulls_sort_last_in_both_directions() {
        let records = vec![
            record("a", "A", "a", None, Some(3.0), None),
            record("b", "B", "b", None, None, None),
            record("c", "C", "c", None, Some(1.0), None),
            record("d", "D", "d", None, None, None),
            record("e", "E", "e", None, Some(2.0), None),
        ];
        let mut engine = engine_with(records);

        engine.set_sort(ColumnId::Price, SortDirection::Ascending);
        assert_eq!(row_ids(&engine.view()), vec!["c", "e", "a", "b", "d"]);

        engine.set_sort(ColumnId::Price, SortDirection::Descending);
        assert_eq!(row_ids(&engine.view()), vec!["a", "e", "c", "b", "d"]);
    }

    #[test]
    fn equal_keys_preserve_source_order() {
        let mut engine = engine_with(vec![
            record("first", "First", "f1", None, Some(1.0), None),
            record("second", "Second", "f2", None, Some(1.0), None),
            record("third", "Third", "f3", None, Some(1.0), None),
        ]);
        engine.set_sort(ColumnId::Price, SortDirection::Ascending);
        assert_eq!(row_ids(&engine.view()), vec!["first", "second", "third"]);

        // A descending sort of all-equal keys must not reverse the input
        engine.set_sort(ColumnId::Price, SortDirection::Descending);
        assert_eq!(row_ids(&engine.view()), vec!["first", "second", "third"]);
    }

    #[test]
    fn name_sort_is_case_insensitive() {
        let mut engine = engine_with(vec![
            record("b", "bitcoin", "btc", None, None, None),
            record("a", "Aave", "aave", None, None, None),
            record("z", "ZCash", "zec", None, None, None),
        ]);
        engine.set_sort(ColumnId::Name, SortDirection::Ascending);
        assert_eq!(row_ids(&engine.view()), vec!["a", "b", "z"]);
    }

    #[test]
    fn toggle_cycles_ascending_descending_and_switches_columns() {
        let mut engine = TableEngine::new();

        engine.toggle_sort(ColumnId::Price);
        assert_eq!(
            engine.state().sort,
            Some((ColumnId::Price, SortDirection::Ascending))
        );

        engine.toggle_sort(ColumnId::Price);
        assert_eq!(
            engine.state().sort,
            Some((ColumnId::Price, SortDirection::Descending))
        );

        engine.toggle_sort(ColumnId::Price);
        assert_eq!(
            engine.state().sort,
            Some((ColumnId::Price, SortDirection::Ascending))
        );

        // Clicking another column clears the previous sort and starts
        // ascending regardless of the old direction
        engine.toggle_sort(ColumnId::MarketCap);
        assert_eq!(
            engine.state().sort,
            Some((ColumnId::MarketCap, SortDirection::Ascending))
        );
    }

    #[test]
    fn global_query_matches_name_or_symbol_case_insensitively() {
        let mut engine = engine_with(vec![
            record("btc", "Bitcoin", "btc", Some(1), None, None),
            record("eth", "Ethereum", "eth", Some(2), None, None),
        ]);

        engine.set_global_query("bit");
        assert_eq!(row_ids(&engine.view()), vec!["btc"]);

        engine.set_global_query("  ETH  ");
        assert_eq!(row_ids(&engine.view()), vec!["eth"]);

        engine.set_global_query("");
        assert_eq!(engine.view().total_filtered, 2);
    }

    #[test]
    fn query_and_page_size_changes_reset_page_index() {
        let records = (0..120)
            .map(|i| record(&format!("c{i}"), &format!("Coin{i}"), "c", None, None, None))
            .collect();
        let mut engine = engine_with(records);

        engine.set_page_index(2);
        assert_eq!(engine.state().page_index, 2);

        engine.set_global_query("coin1");
        assert_eq!(engine.state().page_index, 0);

        engine.set_page_index(1);
        engine.set_page_size(25);
        assert_eq!(engine.state().page_index, 0);
        assert_eq!(engine.state().page_size, 25);
    }

    #[test]
    fn page_index_is_clamped_not_rejected() {
        let records = (0..60)
            .map(|i| record(&format!("c{i}"), &format!("Coin{i}"), "c", None, None, None))
            .collect();
        let mut engine = engine_with(records);

        // 60 records at page size 50 -> 2 pages
        engine.set_page_index(99);
        assert_eq!(engine.state().page_index, 1);

        let view = engine.view();
        assert_eq!(view.page_count, 2);
        assert_eq!(view.rows.len(), 10);
    }

    #[test]
    fn unsupported_page_size_is_ignored() {
        let mut engine = TableEngine::new();
        engine.set_page_size(33);
        assert_eq!(engine.state().page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn replace_records_keeps_view_state() {
        let mut engine = engine_with(vec![record("a", "A", "a", None, None, None)]);
        engine.set_global_query("a");
        engine.toggle_sort(ColumnId::Name);

        engine.replace_records(vec![
            record("a", "A", "a", None, None, None),
            record("b", "B", "b", None, None, None),
        ]);
        assert_eq!(engine.state().global_query, "a");
        assert!(engine.state().sort.is_some());
    }

    #[test]
    fn column_filter_on_rank_matches_exactly() {
        let mut engine = engine_with(vec![
            record("btc", "Bitcoin", "btc", Some(1), None, None),
            record("eth", "Ethereum", "eth", Some(12), None, None),
        ]);

        engine.set_column_filter(ColumnId::Rank, "1");
        assert_eq!(row_ids(&engine.view()), vec!["btc"]);

        engine.set_column_filter(ColumnId::Rank, "");
        assert_eq!(engine.view().total_filtered, 2);
    }

    #[test]
    fn pagination_slices_the_sorted_filtered_set() {
        let records = (0..7)
            .map(|i| {
                record(
                    &format!("c{i}"),
                    &format!("Coin{i}"),
                    "c",
                    Some(7 - i as u32),
                    None,
                    None,
                )
            })
            .collect();
        let mut engine = engine_with(records);
        engine.set_page_size(25);
        engine.set_sort(ColumnId::Rank, SortDirection::Ascending);

        let view = engine.view();
        assert_eq!(view.page_count, 1);
        assert_eq!(view.rows.len(), 7);
        // Rank ascending means the insertion order is reversed
        assert_eq!(view.rows[0].id, "c6");
        assert_eq!(view.rows[6].id, "c0");
    }
}
