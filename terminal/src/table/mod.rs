//! # Table Module
//!
//! The client-side tabular data engine: a static column schema
//! ([`columns`]) plus the record-set owner that derives the
//! sorted/filtered/paginated view ([`engine`]).
//!
//! The engine is deliberately independent of any UI mechanism — the
//! presentation layer calls [`TableEngine::view`] and renders the result,
//! and user interactions land here as plain method calls.

pub mod columns;
pub mod engine;

pub use columns::{ColumnId, ColumnSpec, SortDirection, COLUMNS};
pub use engine::{TableEngine, TableView, TableViewState, DEFAULT_PAGE_SIZE, PAGE_SIZES};
