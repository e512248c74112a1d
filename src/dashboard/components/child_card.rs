//! Child card component
//!
//! One child's name, points, crown, avatar, skills and gift progress.

use egui::{Align, Align2, Color32, CursorIcon, Layout, Margin, RichText, Rounding, Sense, Stroke};
use std::path::Path;

use crate::dashboard::components::progress_bar::progress_bar;
use crate::dashboard::components::sparkles::SparkleOverlay;
use crate::dashboard::rtl;
use crate::dashboard::theme::{color_with_alpha, palette, Theme};
use crate::roster::Child;

/// Widest a card grows, in points
pub const CARD_MAX_WIDTH: f32 = 384.0;

const AVATAR_SIZE: f32 = 150.0;
const CARD_ROUNDING: f32 = 12.0;

const STAR_GLYPH: &str = "⭐";
const CROWN_GLYPH: &str = "👑";
const TROPHY_GLYPH: &str = "🏆";
const GIFT_GLYPH: &str = "🎁";

const SKILLS_HEADING: &str = "المهارات المكتسبة";
const GIFTS_HEADING: &str = "قائمة الهدايا";

/// `file://` URI of an avatar path inside the assets directory
pub fn avatar_uri(assets_dir: &Path, avatar_path: &str) -> String {
    format!("file://{}", assets_dir.join(avatar_path).display())
}

/// A card displaying one child's progress
pub struct ChildCard<'a> {
    child: &'a Child,
    index: usize,
    theme: &'a Theme,
    avatar_uri: String,
    highlighted: bool,
    crowned: bool,
}

impl<'a> ChildCard<'a> {
    pub fn new(child: &'a Child, index: usize, theme: &'a Theme, assets_dir: &Path) -> Self {
        Self {
            child,
            index,
            theme,
            avatar_uri: avatar_uri(assets_dir, &child.avatar_path),
            highlighted: false,
            crowned: false,
        }
    }

    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    pub fn crowned(mut self, crowned: bool) -> Self {
        self.crowned = crowned;
        self
    }

    /// Text of the point badge
    pub fn badge_text(&self) -> String {
        self.child.points.to_string()
    }

    /// Header strip color, cycled by card index
    pub fn header_color(&self) -> Color32 {
        self.theme.card_header(self.index)
    }

    #[allow(dead_code)]
    pub fn is_crowned(&self) -> bool {
        self.crowned
    }

    /// Render the card into a slot `width` points wide.
    ///
    /// `inner` is the card index when it was clicked this frame.
    pub fn show(
        &self,
        ui: &mut egui::Ui,
        width: f32,
        sparkles: &SparkleOverlay,
        sparkle_time: f32,
    ) -> egui::InnerResponse<Option<usize>> {
        // fixed-width slot at the layout cursor; card content stacks top-down
        let slot = ui.allocate_ui_with_layout(
            egui::vec2(width, f32::INFINITY),
            Layout::top_down(Align::Min),
            |ui| {
                egui::Frame::none()
                    .fill(color_with_alpha(Color32::WHITE, 204))
                    .rounding(Rounding::same(CARD_ROUNDING))
                    .shadow(egui::Shadow {
                        offset: egui::vec2(0.0, 4.0),
                        blur: 12.0,
                        spread: 0.0,
                        color: Color32::from_black_alpha(25),
                    })
                    .show(ui, |ui| {
                        ui.set_width(width);
                        ui.spacing_mut().item_spacing.y = 0.0;

                        self.show_header(ui);

                        egui::Frame::none()
                            .inner_margin(Margin::same(32.0))
                            .show(ui, |ui| {
                                ui.spacing_mut().item_spacing.y = 8.0;
                                self.show_avatar(ui);
                                ui.add_space(32.0);
                                self.show_skills(ui);
                                ui.add_space(32.0);
                                self.show_gifts(ui);
                            });
                    })
                    .response
            },
        );

        let response = slot
            .inner
            .interact(Sense::click())
            .on_hover_cursor(CursorIcon::PointingHand);

        sparkles.paint(ui.painter(), response.rect, self.highlighted, sparkle_time);

        let clicked = response.clicked().then_some(self.index);
        egui::InnerResponse::new(clicked, response)
    }

    fn show_header(&self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(self.header_color())
            .rounding(Rounding {
                nw: CARD_ROUNDING,
                ne: CARD_ROUNDING,
                sw: 0.0,
                se: 0.0,
            })
            .inner_margin(Margin::symmetric(24.0, 16.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    // point badge on the leading (left) side
                    egui::Frame::none()
                        .fill(Color32::from_rgb(243, 244, 246))
                        .rounding(Rounding::same(12.0))
                        .inner_margin(Margin::symmetric(10.0, 2.0))
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.spacing_mut().item_spacing.x = 4.0;
                                ui.label(
                                    RichText::new(self.badge_text())
                                        .size(18.0)
                                        .color(Color32::from_rgb(17, 24, 39))
                                        .strong(),
                                );
                                ui.label(RichText::new(STAR_GLYPH).size(16.0).color(palette::YELLOW_400));
                            });
                        });

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(
                            RichText::new(rtl::visual(&self.child.name))
                                .size(20.0)
                                .color(Color32::WHITE)
                                .strong(),
                        );
                    });
                });
            });
    }

    fn show_avatar(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(16.0);

            let size = egui::vec2(AVATAR_SIZE, AVATAR_SIZE);
            let response = ui.add(
                egui::Image::new(self.avatar_uri.clone())
                    .fit_to_exact_size(size)
                    .rounding(AVATAR_SIZE / 2.0),
            );

            let rect = response.rect;
            let painter = ui.painter();
            painter.circle_stroke(rect.center(), AVATAR_SIZE / 2.0, Stroke::new(4.0, Color32::WHITE));

            if self.crowned {
                painter.text(
                    rect.center_top(),
                    Align2::CENTER_CENTER,
                    CROWN_GLYPH,
                    egui::FontId::proportional(32.0),
                    palette::YELLOW_500,
                );
            }
        });
    }

    fn show_skills(&self, ui: &mut egui::Ui) {
        section_heading(ui, TROPHY_GLYPH, palette::YELLOW_500, SKILLS_HEADING);
        ui.add_space(12.0);

        ui.with_layout(Layout::right_to_left(Align::Min).with_main_wrap(true), |ui| {
            for skill in &self.child.skills {
                egui::Frame::none()
                    .stroke(Stroke::new(1.0, palette::GRAY_200))
                    .rounding(Rounding::same(12.0))
                    .inner_margin(Margin::symmetric(10.0, 2.0))
                    .show(ui, |ui| {
                        ui.label(RichText::new(rtl::visual(skill)).size(14.0));
                    });
            }
        });
    }

    fn show_gifts(&self, ui: &mut egui::Ui) {
        section_heading(ui, GIFT_GLYPH, palette::RED_500, GIFTS_HEADING);
        ui.add_space(12.0);

        for gift in &self.child.gifts {
            ui.horizontal(|ui| {
                ui.label(RichText::new(format!("{}%", gift.progress)).size(14.0));
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(RichText::new(rtl::visual(&gift.name)).size(14.0));
                });
            });
            progress_bar(ui, u32::from(gift.progress), self.theme.progress);
            ui.add_space(12.0);
        }
    }
}

/// Section heading with its icon on the trailing (right) side
fn section_heading(ui: &mut egui::Ui, glyph: &str, glyph_color: Color32, title: &str) {
    // one row tall, so centering does not stretch into the space below
    let row = egui::vec2(ui.available_width(), ui.spacing().interact_size.y);
    ui.allocate_ui_with_layout(row, Layout::right_to_left(Align::Center), |ui| {
        ui.label(RichText::new(glyph).size(20.0).color(glyph_color));
        ui.label(RichText::new(rtl::visual(title)).size(18.0).strong());
    });
}
