//! Dashboard UI Module
//!
//! The achievement board window: themed background, floating bubbles,
//! child cards and the theme selector.

pub mod app;
pub mod components;
pub mod fonts;
pub mod rtl;
pub mod state;
pub mod theme;
pub mod views;

pub use theme::ThemeName;
