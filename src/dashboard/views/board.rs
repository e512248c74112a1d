//! Board view - the grid of child cards

use egui::{Align, Layout, Rect, RichText};
use std::path::Path;
use std::time::Instant;

use crate::dashboard::components::child_card::{ChildCard, CARD_MAX_WIDTH};
use crate::dashboard::components::sparkles::SparkleOverlay;
use crate::dashboard::rtl;
use crate::dashboard::state::ClickHighlight;
use crate::dashboard::theme::Theme;
use crate::roster::{self, Child};

/// Board title
pub const BOARD_TITLE: &str = "لوحة إنجازات الأطفال";

/// Space between cards, in points
const GRID_GAP: f32 = 80.0;

/// Number of card columns for the available width
pub fn grid_columns(available_width: f32) -> usize {
    if available_width < 768.0 {
        1
    } else if available_width < 1024.0 {
        2
    } else {
        3
    }
}

/// Width of each card for `columns` columns in `available_width`
pub fn card_width(available_width: f32, columns: usize) -> f32 {
    let columns = columns.max(1) as f32;
    let fit = (available_width - GRID_GAP * (columns - 1.0)) / columns;
    fit.clamp(0.0, CARD_MAX_WIDTH)
}

/// Everything the board needs for one frame
pub struct BoardProps<'a> {
    pub children: &'a [Child],
    pub sparkles: &'a [SparkleOverlay],
    pub theme: &'a Theme,
    pub highlight: &'a ClickHighlight,
    pub assets_dir: &'a Path,
    pub now: Instant,
}

/// What the board reports back after a frame
#[derive(Debug, Default)]
pub struct BoardResponse {
    /// Card clicked this frame
    pub clicked: Option<usize>,
    /// Screen rect of each card, by roster index
    pub card_rects: Vec<Rect>,
}

/// Render the board
pub fn render_board_view(ui: &mut egui::Ui, props: &BoardProps<'_>) -> BoardResponse {
    let mut response = BoardResponse {
        clicked: None,
        card_rects: vec![Rect::NOTHING; props.children.len()],
    };

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(
                    RichText::new(rtl::visual(BOARD_TITLE))
                        .size(36.0)
                        .strong()
                        .color(props.theme.text),
                );
            });
            ui.add_space(32.0);

            let available = ui.available_width();
            let columns = grid_columns(available);
            let width = card_width(available, columns);

            // crowns are worked out over the full roster every frame
            let crowns = roster::crowned(props.children);
            let sparkle_time = props
                .highlight
                .elapsed(props.now)
                .map(|d| d.as_secs_f32())
                .unwrap_or(0.0);

            let indices: Vec<usize> = (0..props.children.len()).collect();
            for row in indices.chunks(columns) {
                let row_width = row.len() as f32 * width + (row.len() - 1) as f32 * GRID_GAP;

                ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                    ui.spacing_mut().item_spacing.x = 0.0;
                    ui.add_space(((available - row_width) / 2.0).max(0.0));

                    for (n, &i) in row.iter().enumerate() {
                        if n > 0 {
                            ui.add_space(GRID_GAP);
                        }
                        let Some(sparkles) = props.sparkles.get(i) else {
                            continue;
                        };
                        let card = ChildCard::new(&props.children[i], i, props.theme, props.assets_dir)
                            .highlighted(props.highlight.is_highlighted(i))
                            .crowned(crowns[i]);
                        let shown = card.show(ui, width, sparkles, sparkle_time);
                        response.card_rects[i] = shown.response.rect;
                        if let Some(index) = shown.inner {
                            response.clicked = Some(index);
                        }
                    }
                });

                ui.add_space(GRID_GAP / 2.0);
            }
        });

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_breakpoints() {
        assert_eq!(grid_columns(400.0), 1);
        assert_eq!(grid_columns(767.9), 1);
        assert_eq!(grid_columns(768.0), 2);
        assert_eq!(grid_columns(1023.0), 2);
        assert_eq!(grid_columns(1024.0), 3);
        assert_eq!(grid_columns(2560.0), 3);
    }

    #[test]
    fn test_card_width_is_capped() {
        assert_eq!(card_width(2560.0, 3), CARD_MAX_WIDTH);
        assert_eq!(card_width(300.0, 1), 300.0);
        assert_eq!(card_width(880.0, 2), 384.0);
        assert_eq!(card_width(800.0, 2), 360.0);
    }

    #[test]
    fn test_card_width_never_negative() {
        assert_eq!(card_width(50.0, 3), 0.0);
        assert_eq!(card_width(100.0, 0), 100.0);
    }

    /// Lay the default roster out headless in a window `width` points wide
    fn card_rects(width: f32) -> Vec<Rect> {
        let ctx = egui::Context::default();
        let children = roster::default_roster();
        let sparkles: Vec<_> = children.iter().map(|_| SparkleOverlay::new()).collect();
        let highlight = ClickHighlight::default();
        let theme = crate::dashboard::ThemeName::Default.theme();
        let now = Instant::now();
        let input = egui::RawInput {
            screen_rect: Some(Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(width, 2400.0))),
            ..Default::default()
        };

        let mut rects = Vec::new();
        for _ in 0..3 {
            let _ = ctx.run(input.clone(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    let props = BoardProps {
                        children: &children,
                        sparkles: &sparkles,
                        theme,
                        highlight: &highlight,
                        assets_dir: Path::new("assets"),
                        now,
                    };
                    rects = render_board_view(ui, &props).card_rects;
                });
            });
        }
        rects
    }

    fn assert_on_screen(rects: &[Rect], width: f32) {
        for rect in rects {
            assert!(rect.min.x >= 0.0 && rect.max.x <= width, "{rect:?} off screen");
            assert!(rect.width() <= CARD_MAX_WIDTH + 0.5);
            assert!(rect.height() < 1200.0, "{rect:?} too tall");
        }
        for (i, a) in rects.iter().enumerate() {
            for b in &rects[i + 1..] {
                assert!(!a.shrink(1.0).intersects(*b), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn test_wide_window_lays_one_centered_row_right_to_left() {
        let rects = card_rects(1280.0);
        assert_eq!(rects.len(), 3);
        assert_on_screen(&rects, 1280.0);

        // first child on the right
        assert!(rects[0].min.x > rects[1].max.x);
        assert!(rects[1].min.x > rects[2].max.x);
        assert!(rects.iter().all(|r| (r.min.y - rects[0].min.y).abs() < 0.5));
        assert!(rects.iter().all(|r| (r.width() - rects[0].width()).abs() < 0.5));

        let row_center = (rects[0].max.x + rects[2].min.x) / 2.0;
        assert!((row_center - 640.0).abs() < 16.0, "row centered at {row_center}");
    }

    #[test]
    fn test_narrow_window_stacks_centered_cards() {
        let rects = card_rects(700.0);
        assert_eq!(rects.len(), 3);
        assert_on_screen(&rects, 700.0);

        for pair in rects.windows(2) {
            assert!(pair[1].min.y > pair[0].max.y);
            assert!((pair[1].min.x - pair[0].min.x).abs() < 0.5);
        }
        let center = rects[0].center().x;
        assert!((center - 350.0).abs() < 16.0, "card centered at {center}");
    }
}
