//! Display font loading

use anyhow::{Context as _, Result};
use egui::{FontData, FontDefinitions, FontFamily};
use std::path::Path;
use tracing::info;

/// Name the display font is registered under
pub const DISPLAY_FONT: &str = "display";

/// Font definitions with `bytes` placed first in the proportional family,
/// ahead of egui's defaults (which keep covering emoji glyphs).
pub fn definitions_with(bytes: Vec<u8>) -> FontDefinitions {
    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(DISPLAY_FONT.to_owned(), FontData::from_owned(bytes));
    fonts
        .families
        .entry(FontFamily::Proportional)
        .or_default()
        .insert(0, DISPLAY_FONT.to_owned());
    fonts
}

/// Load the display font from disk and install it
pub fn install_display_font(ctx: &egui::Context, path: &Path) -> Result<()> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read font {}", path.display()))?;

    ctx.set_fonts(definitions_with(bytes));
    info!("Loaded display font from {:?}", path);

    Ok(())
}
