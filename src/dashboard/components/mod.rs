//! Reusable UI components for the dashboard

pub mod bubbles;
pub mod child_card;
pub mod progress_bar;
pub mod sparkles;
pub mod theme_selector;

pub use theme_selector::render_theme_selector;
