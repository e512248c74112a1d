//! Dashboard application entry point

use eframe::egui;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

use crate::config::{AppConfig, WindowConfig};
use crate::dashboard::components::bubbles::BubbleField;
use crate::dashboard::components::sparkles::SparkleOverlay;
use crate::dashboard::components::render_theme_selector;
use crate::dashboard::fonts;
use crate::dashboard::state::DashboardState;
use crate::dashboard::theme::{self, Theme, ThemeName};
use crate::dashboard::views::{render_board_view, BoardProps};
use crate::roster::{self, Child};

/// The main dashboard application
pub struct DashboardApp {
    /// Dashboard-specific state
    state: DashboardState,
    /// Children shown on the board
    children: Vec<Child>,
    /// One sparkle overlay per card, fixed from startup
    sparkles: Vec<SparkleOverlay>,
    /// Background bubbles for the active theme
    bubbles: BubbleField,
    /// Directory avatar paths are resolved against
    assets_dir: PathBuf,
    /// Whether the background bubbles float
    animate_background: bool,
    /// Theme last pushed into egui's style
    applied_theme: Option<ThemeName>,
    /// Animation clock origin
    started: Instant,
    /// Where each card was laid out last frame
    card_rects: Vec<egui::Rect>,
}

impl DashboardApp {
    /// Create a new dashboard application
    pub fn new(config: &AppConfig, theme: ThemeName) -> Self {
        let children = roster::default_roster();
        let sparkles = children.iter().map(|_| SparkleOverlay::new()).collect();

        Self {
            state: DashboardState::new(theme),
            children,
            sparkles,
            bubbles: BubbleField::new(theme.theme().bubbles),
            assets_dir: config.appearance.assets_dir.clone(),
            animate_background: config.appearance.animate_background,
            applied_theme: None,
            started: Instant::now(),
            card_rects: Vec::new(),
        }
    }

    /// Active theme name
    #[allow(dead_code)]
    pub fn theme_name(&self) -> ThemeName {
        self.state.theme
    }

    /// Active palette
    #[allow(dead_code)]
    pub fn theme(&self) -> &'static Theme {
        self.state.theme.theme()
    }

    /// Switch the active theme; the bubble field follows the new colors
    pub fn set_theme(&mut self, name: ThemeName) {
        if self.state.theme != name {
            info!("Switching theme {} -> {}", self.state.theme, name);
        }
        self.state.theme = name;
        self.bubbles.sync(name.theme().bubbles);
    }

    /// A card was clicked
    pub fn click_card(&mut self, index: usize, now: Instant) {
        self.state.highlight.click(index, now);
    }

    /// Index of the highlighted card
    pub fn clicked_index(&self) -> Option<usize> {
        self.state.highlight.index()
    }

    /// Clear the card highlight once it has run out
    pub fn tick(&mut self, now: Instant) {
        self.state.highlight.expire(now);
    }

    #[allow(dead_code)]
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    #[allow(dead_code)]
    pub fn bubbles(&self) -> &BubbleField {
        &self.bubbles
    }

    /// Screen rect of card `index` from the last frame
    #[allow(dead_code)]
    pub fn card_rect(&self, index: usize) -> Option<egui::Rect> {
        self.card_rects.get(index).copied()
    }

    /// Whether something on screen is still moving
    fn wants_repaint(&self) -> bool {
        self.animate_background || self.state.highlight.index().is_some()
    }

    /// Create eframe options for the dashboard window
    pub fn options(window: &WindowConfig) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([window.width, window.height])
                .with_min_inner_size([420.0, 500.0])
                .with_title(window.title.clone()),
            ..Default::default()
        }
    }

    /// Build one frame
    pub fn ui(&mut self, ctx: &egui::Context, now: Instant) {
        self.tick(now);

        // One palette for the whole frame
        let theme_name = self.state.theme;
        let palette = theme_name.theme();

        if self.applied_theme != Some(theme_name) {
            theme::apply_theme(ctx, palette);
            self.applied_theme = Some(theme_name);
        }

        let screen = ctx.screen_rect();
        let background = ctx.layer_painter(egui::LayerId::background());
        theme::paint_background(&background, screen, palette);

        let time = if self.animate_background {
            now.saturating_duration_since(self.started).as_secs_f32()
        } else {
            0.0
        };
        self.bubbles.paint(&background, screen, time);

        let picked = render_theme_selector(ctx, &mut self.state.selector, theme_name);

        let board = egui::CentralPanel::default()
            .frame(egui::Frame::none().inner_margin(32.0))
            .show(ctx, |ui| {
                let props = BoardProps {
                    children: &self.children,
                    sparkles: &self.sparkles,
                    theme: palette,
                    highlight: &self.state.highlight,
                    assets_dir: &self.assets_dir,
                    now,
                };
                render_board_view(ui, &props)
            })
            .inner;

        if let Some(index) = board.clicked {
            self.click_card(index, now);
        }
        self.card_rects = board.card_rects;

        // Takes effect from the next frame so no frame mixes two palettes
        if let Some(name) = picked {
            self.set_theme(name);
            ctx.request_repaint();
        }

        // sparkles pulse while a card is highlighted, and the highlight
        // needs a frame after its deadline to clear
        if self.wants_repaint() {
            ctx.request_repaint();
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx, Instant::now());
    }
}

/// Run the dashboard application
pub fn run_dashboard(config: AppConfig, theme: ThemeName) -> Result<(), eframe::Error> {
    let options = DashboardApp::options(&config.window);
    let title = config.window.title.clone();

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);

            if let Some(path) = config.appearance.font_path() {
                if let Err(e) = fonts::install_display_font(&cc.egui_ctx, &path) {
                    warn!("{:#}; using default fonts", e);
                }
            }

            Ok(Box::new(DashboardApp::new(&config, theme)))
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::components::bubbles::BUBBLE_COUNT;
    use crate::dashboard::components::theme_selector::{swatch_id, toggle_id};
    use crate::dashboard::state::HIGHLIGHT_DURATION;
    use std::time::Duration;

    fn app() -> DashboardApp {
        DashboardApp::new(&AppConfig::default(), ThemeName::Default)
    }

    #[test]
    fn test_starts_on_configured_theme() {
        let app = DashboardApp::new(&AppConfig::default(), ThemeName::Lavender);
        assert_eq!(app.theme_name(), ThemeName::Lavender);
        assert_eq!(app.clicked_index(), None);
        assert_eq!(app.children().len(), 3);
        let lavender = ThemeName::Lavender.theme().bubbles;
        assert!(app.bubbles().bubbles().iter().all(|b| lavender.contains(&b.color)));
    }

    #[test]
    fn test_theme_switch_replaces_whole_palette() {
        let mut app = app();
        app.set_theme(ThemeName::Ocean);

        let ocean = ThemeName::Ocean.theme();
        let active = app.theme();
        assert_eq!(active.gradient_from, ocean.gradient_from);
        assert_eq!(active.gradient_to, ocean.gradient_to);
        assert_eq!(active.card_headers, ocean.card_headers);
        assert_eq!(active.progress, ocean.progress);

        let bubbles = app.bubbles().bubbles();
        assert_eq!(bubbles.len(), BUBBLE_COUNT);
        assert!(bubbles.iter().all(|b| ocean.bubbles.contains(&b.color)));
    }

    #[test]
    fn test_theme_switch_keeps_roster() {
        let mut app = app();
        let before = app.children().to_vec();
        app.set_theme(ThemeName::Sunset);
        assert_eq!(app.children(), before.as_slice());
    }

    #[test]
    fn test_click_highlight_lifecycle() {
        let mut app = app();
        let start = Instant::now();

        app.click_card(1, start);
        assert_eq!(app.clicked_index(), Some(1));

        app.tick(start + Duration::from_millis(500));
        assert_eq!(app.clicked_index(), Some(1));

        app.click_card(2, start + Duration::from_millis(700));
        app.tick(start + HIGHLIGHT_DURATION);
        assert_eq!(app.clicked_index(), Some(2));

        app.tick(start + Duration::from_millis(700) + HIGHLIGHT_DURATION);
        assert_eq!(app.clicked_index(), None);
    }

    #[test]
    fn test_repaints_only_while_something_moves() {
        let mut config = AppConfig::default();
        config.appearance.animate_background = false;
        let mut app = DashboardApp::new(&config, ThemeName::Default);
        let start = Instant::now();
        assert!(!app.wants_repaint());

        app.click_card(0, start);
        assert!(app.wants_repaint());

        app.tick(start + HIGHLIGHT_DURATION);
        assert!(!app.wants_repaint());

        let animated = DashboardApp::new(&AppConfig::default(), ThemeName::Default);
        assert!(animated.wants_repaint());
    }

    #[test]
    fn test_headless_frame_renders() {
        let mut app = app();
        let ctx = egui::Context::default();
        let now = Instant::now();

        let output = ctx.run(egui::RawInput::default(), |ctx| app.ui(ctx, now));
        assert!(!output.shapes.is_empty());
        assert_eq!(app.applied_theme, Some(ThemeName::Default));
    }

    fn input(events: Vec<egui::Event>) -> egui::RawInput {
        egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(1280.0, 2400.0))),
            events,
            ..Default::default()
        }
    }

    fn frame(app: &mut DashboardApp, ctx: &egui::Context, events: Vec<egui::Event>, now: Instant) {
        let _ = ctx.run(input(events), |ctx| app.ui(ctx, now));
    }

    fn settle(app: &mut DashboardApp, ctx: &egui::Context, now: Instant) {
        for _ in 0..4 {
            frame(app, ctx, Vec::new(), now);
        }
    }

    /// Move the pointer to `pos`, then press and release the primary button
    fn click_at(app: &mut DashboardApp, ctx: &egui::Context, pos: egui::Pos2, now: Instant) {
        let button = |pressed| egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::default(),
        };
        frame(app, ctx, vec![egui::Event::PointerMoved(pos)], now);
        frame(app, ctx, vec![button(true)], now);
        frame(app, ctx, vec![button(false)], now);
    }

    fn widget_center(ctx: &egui::Context, id: egui::Id) -> egui::Pos2 {
        ctx.read_response(id)
            .map(|response| response.rect.center())
            .unwrap_or_else(|| panic!("{id:?} was not laid out"))
    }

    #[test]
    fn test_clicking_a_card_highlights_it() {
        let mut app = app();
        let ctx = egui::Context::default();
        let now = Instant::now();
        settle(&mut app, &ctx, now);

        for index in [2, 0, 1] {
            let rect = app.card_rect(index).unwrap();
            assert!(rect.is_positive());
            click_at(&mut app, &ctx, rect.center(), now);
            assert_eq!(app.clicked_index(), Some(index));
        }

        frame(&mut app, &ctx, Vec::new(), now + HIGHLIGHT_DURATION);
        assert_eq!(app.clicked_index(), None);
    }

    #[test]
    fn test_selector_switches_theme_through_swatch() {
        let mut app = app();
        let ctx = egui::Context::default();
        let now = Instant::now();
        settle(&mut app, &ctx, now);
        assert!(!app.state.selector.is_expanded());

        let toggle = widget_center(&ctx, toggle_id());
        click_at(&mut app, &ctx, toggle, now);
        assert!(app.state.selector.is_expanded());
        settle(&mut app, &ctx, now);

        let swatch = widget_center(&ctx, swatch_id(ThemeName::Forest));
        click_at(&mut app, &ctx, swatch, now);
        assert_eq!(app.theme_name(), ThemeName::Forest);
        assert!(!app.state.selector.is_expanded());

        let forest = ThemeName::Forest.theme().bubbles;
        assert!(app.bubbles().bubbles().iter().all(|b| forest.contains(&b.color)));

        frame(&mut app, &ctx, Vec::new(), now);
        assert_eq!(app.applied_theme, Some(ThemeName::Forest));
    }
}
