//! Right-to-left progress bar

use egui::{Color32, Rect, Rounding, Sense, Vec2};

use crate::dashboard::theme::palette;

/// Track height in points
pub const TRACK_HEIGHT: f32 = 8.0;

/// Filled part of `track` for a 0-100 `value`, anchored to the right edge.
///
/// Values above 100 are clamped.
pub fn fill_rect(track: Rect, value: u32) -> Rect {
    let fraction = value.min(100) as f32 / 100.0;
    let width = track.width() * fraction;
    Rect::from_min_max(egui::pos2(track.max.x - width, track.min.y), track.max)
}

/// Render a progress bar spanning the available width
pub fn progress_bar(ui: &mut egui::Ui, value: u32, color: Color32) -> egui::Response {
    let desired_size = Vec2::new(ui.available_width(), TRACK_HEIGHT);
    let (rect, response) = ui.allocate_exact_size(desired_size, Sense::hover());

    if ui.is_rect_visible(rect) {
        let rounding = Rounding::same(TRACK_HEIGHT / 2.0);
        ui.painter().rect_filled(rect, rounding, palette::GRAY_200);

        let fill = fill_rect(rect, value);
        if fill.width() > 0.0 {
            ui.painter().rect_filled(fill, rounding, color);
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track() -> Rect {
        Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(200.0, TRACK_HEIGHT))
    }

    #[test]
    fn test_zero_is_empty() {
        let fill = fill_rect(track(), 0);
        assert_eq!(fill.width(), 0.0);
        assert_eq!(fill.max, track().max);
    }

    #[test]
    fn test_hundred_is_full() {
        assert_eq!(fill_rect(track(), 100), track());
    }

    #[test]
    fn test_fill_grows_from_the_right() {
        let fill = fill_rect(track(), 25);
        assert_eq!(fill.width(), 50.0);
        assert_eq!(fill.max.x, track().max.x);
        assert_eq!(fill.min.x, 160.0);
        assert_eq!(fill.height(), TRACK_HEIGHT);
    }

    #[test]
    fn test_same_input_same_output() {
        assert_eq!(fill_rect(track(), 73), fill_rect(track(), 73));
    }

    #[test]
    fn test_values_above_hundred_clamp() {
        assert_eq!(fill_rect(track(), 250), track());
    }
}
