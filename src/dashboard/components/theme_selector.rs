//! Floating theme selector
//!
//! A round toggle in the bottom-right corner. When expanded it shows one
//! swatch per registered theme above the toggle.

use egui::{Align, Align2, Color32, Id, Layout, Sense, Stroke, Vec2};

use crate::dashboard::state::ThemeSelectorState;
use crate::dashboard::theme::{color_with_alpha, ThemeName};

const TOGGLE_SIZE: f32 = 48.0;
const SWATCH_SIZE: f32 = 32.0;
const PALETTE_GLYPH: &str = "🎨";

/// Widget id of the round toggle
pub fn toggle_id() -> Id {
    Id::new("theme_selector_toggle")
}

/// Widget id of the swatch for `theme`
pub fn swatch_id(theme: ThemeName) -> Id {
    Id::new(("theme_swatch", theme.key()))
}

/// Render the selector and return the theme picked this frame, if any
pub fn render_theme_selector(
    ctx: &egui::Context,
    selector: &mut ThemeSelectorState,
    current: ThemeName,
) -> Option<ThemeName> {
    let mut picked = None;

    egui::Area::new(egui::Id::new("theme_selector"))
        .anchor(Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.with_layout(Layout::bottom_up(Align::Max), |ui| {
                let toggle = round_button(ui, toggle_id(), TOGGLE_SIZE, current.theme().button, Some(PALETTE_GLYPH))
                    .on_hover_text("Open color scheme selector");
                if toggle.clicked() {
                    selector.toggle();
                }

                if selector.is_expanded() {
                    ui.add_space(8.0);
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        for theme in ThemeName::ALL {
                            let swatch = round_button(ui, swatch_id(theme), SWATCH_SIZE, theme.theme().button, None)
                                .on_hover_text(format!("Switch to {theme} theme"));
                            if swatch.clicked() {
                                picked = Some(selector.choose(theme));
                            }
                        }
                    });
                }
            });
        });

    picked
}

/// Circular button filled with `color`, with an optional centered glyph
fn round_button(ui: &mut egui::Ui, id: Id, size: f32, color: Color32, glyph: Option<&str>) -> egui::Response {
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(size), Sense::hover());
    let response = ui.interact(rect, id, Sense::click());

    if ui.is_rect_visible(rect) {
        let radius = size / 2.0;
        let fill = if response.hovered() {
            color_with_alpha(color, 220)
        } else {
            color
        };

        ui.painter().circle_filled(rect.center() + egui::vec2(0.0, 2.0), radius, Color32::from_black_alpha(30));
        ui.painter().circle_filled(rect.center(), radius, fill);
        if response.hovered() {
            ui.painter().circle_stroke(rect.center(), radius, Stroke::new(2.0, Color32::WHITE));
        }

        if let Some(glyph) = glyph {
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                glyph,
                egui::FontId::proportional(size / 2.0),
                Color32::WHITE,
            );
        }
    }

    response
}
