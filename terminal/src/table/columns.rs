//! # Column Schema
//!
//! Static column configuration for the coins table. The column set is
//! fixed at startup and consumed both by the tabular data engine (sort
//! keys, filter values) and by the presentation layer, which selects a
//! cell renderer by [`ColumnId`].

use shared::dto::market::MarketRecord;

/// Identifier of a displayed column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnId {
    Rank,
    Name,
    Price,
    Change1h,
    Change24h,
    Change7d,
    Volume,
    MarketCap,
}

/// Sort direction for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Apply this direction to an ordering of two non-null keys.
    pub fn apply(self, ord: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

/// Sort key extracted from one record for one column.
///
/// Numeric keys carry `None` for absent values so the engine can place
/// them last regardless of direction.
pub enum SortKey<'a> {
    Text(&'a str),
    Number(Option<f64>),
}

/// Declarative configuration of one displayed column.
pub struct ColumnSpec {
    pub id: ColumnId,
    pub label: &'static str,
    pub sortable: bool,
    /// Relative width hint for the presentation layer.
    pub width: f32,
}

/// The dashboard's column set, in display order.
pub const COLUMNS: &[ColumnSpec] = &[
    ColumnSpec { id: ColumnId::Rank, label: "#", sortable: true, width: 60.0 },
    ColumnSpec { id: ColumnId::Name, label: "Name", sortable: true, width: 200.0 },
    ColumnSpec { id: ColumnId::Price, label: "Price", sortable: true, width: 120.0 },
    ColumnSpec { id: ColumnId::Change1h, label: "1h %", sortable: true, width: 100.0 },
    ColumnSpec { id: ColumnId::Change24h, label: "24h %", sortable: true, width: 100.0 },
    ColumnSpec { id: ColumnId::Change7d, label: "7d %", sortable: true, width: 100.0 },
    ColumnSpec { id: ColumnId::Volume, label: "24h Volume", sortable: true, width: 120.0 },
    ColumnSpec { id: ColumnId::MarketCap, label: "Market Cap", sortable: true, width: 140.0 },
];

impl ColumnId {
    /// Look up this column's spec in the static schema.
    pub fn spec(self) -> &'static ColumnSpec {
        // COLUMNS covers every variant
        COLUMNS
            .iter()
            .find(|spec| spec.id == self)
            .unwrap_or(&COLUMNS[0])
    }

    /// Value accessor used for sorting.
    pub fn sort_key(self, record: &MarketRecord) -> SortKey<'_> {
        match self {
            ColumnId::Rank => SortKey::Number(record.market_cap_rank.map(f64::from)),
            ColumnId::Name => SortKey::Text(&record.name),
            ColumnId::Price => SortKey::Number(record.current_price),
            ColumnId::Change1h => {
                SortKey::Number(record.price_change_percentage_1h_in_currency)
            }
            ColumnId::Change24h => SortKey::Number(record.price_change_percentage_24h),
            ColumnId::Change7d => {
                SortKey::Number(record.price_change_percentage_7d_in_currency)
            }
            ColumnId::Volume => SortKey::Number(record.total_volume),
            ColumnId::MarketCap => SortKey::Number(record.market_cap),
        }
    }

    /// Whether `record` matches a per-column filter value.
    ///
    /// The rank column matches exactly; the name column matches a
    /// case-insensitive substring of name or symbol; numeric columns match
    /// a substring of the plain decimal rendering. An empty filter matches
    /// everything.
    pub fn matches_filter(self, record: &MarketRecord, filter: &str) -> bool {
        let filter = filter.trim().to_lowercase();
        if filter.is_empty() {
            return true;
        }
        match self {
            ColumnId::Rank => record
                .market_cap_rank
                .map(|rank| rank.to_string() == filter)
                .unwrap_or(false),
            ColumnId::Name => {
                record.name.to_lowercase().contains(&filter)
                    || record.symbol.to_lowercase().contains(&filter)
            }
            _ => match self.sort_key(record) {
                SortKey::Number(Some(value)) => value.to_string().contains(&filter),
                _ => false,
            },
        }
    }
}
