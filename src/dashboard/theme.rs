//! Dashboard theme and styling
//!
//! The fixed registry of named palettes and the helpers that push the active
//! palette into egui.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, TextStyle, Visuals};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Theme lookup failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("unknown theme `{0}`")]
    Unknown(String),
}

/// Tailwind shades used by the palettes
pub mod palette {
    use egui::Color32;

    pub const BLUE_50: Color32 = Color32::from_rgb(0xef, 0xf6, 0xff);
    pub const CYAN_50: Color32 = Color32::from_rgb(0xec, 0xfe, 0xff);
    pub const EMERALD_50: Color32 = Color32::from_rgb(0xec, 0xfd, 0xf5);
    pub const GREEN_50: Color32 = Color32::from_rgb(0xf0, 0xfd, 0xf4);
    pub const ORANGE_50: Color32 = Color32::from_rgb(0xff, 0xf7, 0xed);
    pub const PINK_50: Color32 = Color32::from_rgb(0xfd, 0xf2, 0xf8);
    pub const PURPLE_50: Color32 = Color32::from_rgb(0xfa, 0xf5, 0xff);
    pub const RED_50: Color32 = Color32::from_rgb(0xfe, 0xf2, 0xf2);

    pub const GRAY_200: Color32 = Color32::from_rgb(0xe5, 0xe7, 0xeb);
    pub const YELLOW_300: Color32 = Color32::from_rgb(0xfd, 0xe0, 0x47);
    pub const YELLOW_400: Color32 = Color32::from_rgb(0xfa, 0xcc, 0x15);

    pub const BLUE_500: Color32 = Color32::from_rgb(0x3b, 0x82, 0xf6);
    pub const CYAN_500: Color32 = Color32::from_rgb(0x06, 0xb6, 0xd4);
    pub const EMERALD_500: Color32 = Color32::from_rgb(0x10, 0xb9, 0x81);
    pub const FUCHSIA_500: Color32 = Color32::from_rgb(0xd9, 0x46, 0xef);
    pub const GREEN_500: Color32 = Color32::from_rgb(0x22, 0xc5, 0x5e);
    pub const LIME_500: Color32 = Color32::from_rgb(0x84, 0xcc, 0x16);
    pub const ORANGE_500: Color32 = Color32::from_rgb(0xf9, 0x73, 0x16);
    pub const PINK_500: Color32 = Color32::from_rgb(0xec, 0x48, 0x99);
    pub const PURPLE_500: Color32 = Color32::from_rgb(0xa8, 0x55, 0xf7);
    pub const RED_500: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);
    pub const TEAL_500: Color32 = Color32::from_rgb(0x14, 0xb8, 0xa6);
    pub const YELLOW_500: Color32 = Color32::from_rgb(0xea, 0xb3, 0x08);

    pub const BLUE_800: Color32 = Color32::from_rgb(0x1e, 0x40, 0xaf);
    pub const EMERALD_800: Color32 = Color32::from_rgb(0x06, 0x5f, 0x46);
    pub const FUCHSIA_800: Color32 = Color32::from_rgb(0x86, 0x19, 0x8f);
    pub const PURPLE_800: Color32 = Color32::from_rgb(0x6b, 0x21, 0xa8);
    pub const RED_800: Color32 = Color32::from_rgb(0x99, 0x1b, 0x1b);
}

use palette::*;

/// A named palette applied uniformly across the board
#[derive(Debug, PartialEq, Eq)]
pub struct Theme {
    /// Registry key this palette is filed under
    pub name: ThemeName,
    /// Background gradient start (top-right)
    pub gradient_from: Color32,
    /// Background gradient end (bottom-left)
    pub gradient_to: Color32,
    /// Card header colors, cycled by card index
    pub card_headers: &'static [Color32],
    /// Colors the background bubbles are drawn from
    pub bubbles: &'static [Color32],
    /// Title text color
    pub text: Color32,
    /// Theme selector button color
    pub button: Color32,
    /// Progress bar fill color
    pub progress: Color32,
}

impl Theme {
    /// Header color for the card at `index`
    pub fn card_header(&self, index: usize) -> Color32 {
        self.card_headers[index % self.card_headers.len()]
    }
}

static DEFAULT: Theme = Theme {
    name: ThemeName::Default,
    gradient_from: BLUE_50,
    gradient_to: PURPLE_50,
    card_headers: &[PINK_500, PURPLE_500, BLUE_500],
    bubbles: &[
        Color32::from_rgb(0xff, 0x9f, 0xf3),
        Color32::from_rgb(0xfe, 0xca, 0x57),
        Color32::from_rgb(0x54, 0xa0, 0xff),
        Color32::from_rgb(0x5e, 0xd4, 0xf3),
        Color32::from_rgb(0xff, 0x6b, 0x6b),
        Color32::from_rgb(0xc8, 0xd6, 0xe5),
    ],
    text: PURPLE_800,
    button: PURPLE_500,
    progress: PURPLE_500,
};

static OCEAN: Theme = Theme {
    name: ThemeName::Ocean,
    gradient_from: CYAN_50,
    gradient_to: BLUE_50,
    card_headers: &[CYAN_500, BLUE_500, TEAL_500],
    bubbles: &[
        Color32::from_rgb(0x48, 0xdb, 0xfb),
        Color32::from_rgb(0x54, 0xa0, 0xff),
        Color32::from_rgb(0x5f, 0x27, 0xcd),
        Color32::from_rgb(0x00, 0xd2, 0xd3),
        Color32::from_rgb(0x01, 0xa3, 0xa4),
        Color32::from_rgb(0x34, 0x1f, 0x97),
    ],
    text: BLUE_800,
    button: BLUE_500,
    progress: BLUE_500,
};

static SUNSET: Theme = Theme {
    name: ThemeName::Sunset,
    gradient_from: ORANGE_50,
    gradient_to: RED_50,
    card_headers: &[ORANGE_500, RED_500, YELLOW_500],
    bubbles: &[
        Color32::from_rgb(0xff, 0x9f, 0xf3),
        Color32::from_rgb(0xfe, 0xca, 0x57),
        Color32::from_rgb(0xff, 0x6b, 0x6b),
        Color32::from_rgb(0xff, 0x9f, 0xf3),
        Color32::from_rgb(0xfe, 0xca, 0x57),
        Color32::from_rgb(0xff, 0x6b, 0x6b),
    ],
    text: RED_800,
    button: RED_500,
    progress: RED_500,
};

static FOREST: Theme = Theme {
    name: ThemeName::Forest,
    gradient_from: GREEN_50,
    gradient_to: EMERALD_50,
    card_headers: &[GREEN_500, EMERALD_500, LIME_500],
    bubbles: &[
        Color32::from_rgb(0x1d, 0xd1, 0xa1),
        Color32::from_rgb(0x10, 0xac, 0x84),
        Color32::from_rgb(0x2e, 0xcc, 0x71),
        Color32::from_rgb(0x26, 0xde, 0x81),
        Color32::from_rgb(0x54, 0xa0, 0xff),
        Color32::from_rgb(0x48, 0xdb, 0xfb),
    ],
    text: EMERALD_800,
    button: GREEN_500,
    progress: GREEN_500,
};

static LAVENDER: Theme = Theme {
    name: ThemeName::Lavender,
    gradient_from: PURPLE_50,
    gradient_to: PINK_50,
    card_headers: &[PURPLE_500, PINK_500, FUCHSIA_500],
    bubbles: &[
        Color32::from_rgb(0xa2, 0x9b, 0xfe),
        Color32::from_rgb(0xdf, 0xe6, 0xe9),
        Color32::from_rgb(0xff, 0xea, 0xa7),
        Color32::from_rgb(0xfa, 0xb1, 0xa0),
        Color32::from_rgb(0xff, 0x76, 0x75),
        Color32::from_rgb(0xfd, 0x79, 0xa8),
    ],
    text: FUCHSIA_800,
    button: PINK_500,
    progress: PINK_500,
};

/// Registered theme keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeName {
    #[default]
    Default,
    Ocean,
    Sunset,
    Forest,
    Lavender,
}

impl ThemeName {
    /// All registered themes, in selector order
    pub const ALL: [ThemeName; 5] = [
        ThemeName::Default,
        ThemeName::Ocean,
        ThemeName::Sunset,
        ThemeName::Forest,
        ThemeName::Lavender,
    ];

    /// Registry key
    pub fn key(&self) -> &'static str {
        match self {
            ThemeName::Default => "default",
            ThemeName::Ocean => "ocean",
            ThemeName::Sunset => "sunset",
            ThemeName::Forest => "forest",
            ThemeName::Lavender => "lavender",
        }
    }

    /// Palette for this theme
    pub fn theme(&self) -> &'static Theme {
        match self {
            ThemeName::Default => &DEFAULT,
            ThemeName::Ocean => &OCEAN,
            ThemeName::Sunset => &SUNSET,
            ThemeName::Forest => &FOREST,
            ThemeName::Lavender => &LAVENDER,
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ThemeName {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeName::ALL
            .into_iter()
            .find(|name| name.key() == s)
            .ok_or_else(|| ThemeError::Unknown(s.to_string()))
    }
}

/// Look up a palette by registry key
pub fn lookup(name: &str) -> Result<&'static Theme, ThemeError> {
    name.parse::<ThemeName>().map(|n| n.theme())
}

/// Apply the palette to egui
pub fn apply_theme(ctx: &egui::Context, theme: &Theme) {
    let mut style = (*ctx.style()).clone();

    let mut visuals = Visuals::light();
    visuals.panel_fill = Color32::TRANSPARENT;
    visuals.window_fill = Color32::WHITE;
    visuals.override_text_color = Some(Color32::from_rgb(31, 41, 55));
    visuals.hyperlink_color = theme.button;
    visuals.selection.bg_fill = color_with_alpha(theme.button, 77);
    visuals.selection.stroke = Stroke::new(1.0, theme.button);

    visuals.widgets.inactive.rounding = Rounding::same(8.0);
    visuals.widgets.hovered.rounding = Rounding::same(8.0);
    visuals.widgets.active.rounding = Rounding::same(8.0);

    style.visuals = visuals;

    style.spacing.item_spacing = egui::vec2(8.0, 8.0);

    style.text_styles = [
        (TextStyle::Small, FontId::new(13.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(16.0, FontFamily::Proportional)),
        (TextStyle::Monospace, FontId::new(15.0, FontFamily::Monospace)),
        (TextStyle::Button, FontId::new(16.0, FontFamily::Proportional)),
        (TextStyle::Heading, FontId::new(36.0, FontFamily::Proportional)),
    ]
    .into();

    ctx.set_style(style);
}

/// Helper to create a color with modified alpha
pub fn color_with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Paint the background gradient, running from the top-right corner
/// towards the bottom-left.
pub fn paint_background(painter: &egui::Painter, rect: egui::Rect, theme: &Theme) {
    let mid = lerp_color(theme.gradient_from, theme.gradient_to, 0.5);

    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.right_top(), theme.gradient_from);
    mesh.colored_vertex(rect.left_top(), mid);
    mesh.colored_vertex(rect.left_bottom(), theme.gradient_to);
    mesh.colored_vertex(rect.right_bottom(), mid);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);

    painter.add(egui::Shape::mesh(mesh));
}

/// Linear blend between two opaque colors
pub fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f32 * (1.0 - t) + y as f32 * t).round() as u8;
    Color32::from_rgb(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}
