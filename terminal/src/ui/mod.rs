//! # UI Rendering
//!
//! egui presentation layer. Screens read the derived view from the
//! tabular data engine and forward user intents to the app handlers;
//! no view state lives here.
//!
//! ```text
//! ui/
//! ├── screens/   - Screen-level rendering (dashboard)
//! ├── widgets/   - Reusable components (tables, stat cards, highlights)
//! └── theme.rs   - Color palette and egui visuals
//! ```

pub mod screens;
pub mod theme;
pub mod widgets;
