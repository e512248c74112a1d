//! Floating background bubbles
//!
//! Purely decorative: forty circles with random size, color, position and
//! drift, regenerated whenever the theme's bubble colors change.

use egui::{Color32, Painter, Pos2, Rect, Vec2};
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::debug;

/// Bubbles per field
pub const BUBBLE_COUNT: usize = 40;

/// Bubble opacity
const BUBBLE_OPACITY: f32 = 0.5;

/// Parameters of one bubble
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BubbleSpec {
    /// Diameter in points, 20 - 170
    pub diameter: f32,
    pub color: Color32,
    /// Float cycle length in seconds, 5 - 10
    pub duration: f32,
    /// Start delay in seconds, 0 - 1
    pub delay: f32,
    /// Distance of the top edge from the top of the window, in percent
    pub top: f32,
    /// Distance of the right edge from the right of the window, in percent
    pub right: f32,
    /// Drift at the middle of the cycle, -150 - 150 points each
    pub offset: Vec2,
}

impl BubbleSpec {
    /// Drift from the rest position at `time` seconds.
    ///
    /// Eases out to `offset` over the first half of the cycle and back over
    /// the second half. Nothing moves during the initial delay.
    pub fn drift(&self, time: f32) -> Vec2 {
        let t = time - self.delay;
        if t <= 0.0 || self.duration <= 0.0 {
            return Vec2::ZERO;
        }

        let phase = (t % self.duration) / self.duration;
        let amount = if phase < 0.5 {
            ease_in_out(phase * 2.0)
        } else {
            ease_in_out((1.0 - phase) * 2.0)
        };
        self.offset * amount
    }

    /// Center of the bubble inside `screen` at `time` seconds
    pub fn center(&self, screen: Rect, time: f32) -> Pos2 {
        let radius = self.diameter / 2.0;
        let corner = egui::pos2(
            screen.max.x - screen.width() * self.right / 100.0,
            screen.min.y + screen.height() * self.top / 100.0,
        );
        corner + egui::vec2(-radius, radius) + self.drift(time)
    }
}

/// Smoothstep easing on `[0, 1]`
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Generate a full field of bubbles drawn from `colors`
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, colors: &[Color32]) -> Vec<BubbleSpec> {
    (0..BUBBLE_COUNT)
        .map(|_| BubbleSpec {
            diameter: rng.random_range(20.0..=170.0),
            color: colors.choose(rng).copied().unwrap_or(Color32::WHITE),
            duration: rng.random_range(5.0..=10.0),
            delay: rng.random_range(0.0..=1.0),
            top: rng.random_range(0.0..=100.0),
            right: rng.random_range(0.0..=100.0),
            offset: egui::vec2(
                rng.random_range(-150.0..=150.0),
                rng.random_range(-150.0..=150.0),
            ),
        })
        .collect()
}

/// Generate a full field of bubbles using the thread RNG
pub fn generate(colors: &[Color32]) -> Vec<BubbleSpec> {
    generate_with(&mut rand::rng(), colors)
}

/// The background bubble field
#[derive(Debug)]
pub struct BubbleField {
    /// Color set the current bubbles were drawn from
    source: &'static [Color32],
    bubbles: Vec<BubbleSpec>,
}

impl BubbleField {
    pub fn new(colors: &'static [Color32]) -> Self {
        Self {
            source: colors,
            bubbles: generate(colors),
        }
    }

    /// Regenerate if `colors` is a different color set.
    ///
    /// Returns `true` when the bubbles were regenerated.
    pub fn sync(&mut self, colors: &'static [Color32]) -> bool {
        if std::ptr::eq(self.source, colors) {
            return false;
        }
        self.source = colors;
        self.bubbles = generate(colors);
        debug!(count = self.bubbles.len(), "regenerated background bubbles");
        true
    }

    #[allow(dead_code)]
    pub fn bubbles(&self) -> &[BubbleSpec] {
        &self.bubbles
    }

    /// Paint every bubble at `time` seconds
    pub fn paint(&self, painter: &Painter, screen: Rect, time: f32) {
        for bubble in &self.bubbles {
            painter.circle_filled(
                bubble.center(screen, time),
                bubble.diameter / 2.0,
                bubble.color.gamma_multiply(BUBBLE_OPACITY),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::theme::ThemeName;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_ranges() {
        let colors = ThemeName::Default.theme().bubbles;
        let mut rng = StdRng::seed_from_u64(7);
        let bubbles = generate_with(&mut rng, colors);

        assert_eq!(bubbles.len(), BUBBLE_COUNT);
        for b in &bubbles {
            assert!((20.0..=170.0).contains(&b.diameter));
            assert!((5.0..=10.0).contains(&b.duration));
            assert!((0.0..=1.0).contains(&b.delay));
            assert!((0.0..=100.0).contains(&b.top));
            assert!((0.0..=100.0).contains(&b.right));
            assert!((-150.0..=150.0).contains(&b.offset.x));
            assert!((-150.0..=150.0).contains(&b.offset.y));
            assert!(colors.contains(&b.color));
        }
    }

    #[test]
    fn test_sync_regenerates_only_on_new_colors() {
        let mut field = BubbleField::new(ThemeName::Default.theme().bubbles);
        let before = field.bubbles().to_vec();

        assert!(!field.sync(ThemeName::Default.theme().bubbles));
        assert_eq!(field.bubbles(), before.as_slice());

        let ocean = ThemeName::Ocean.theme().bubbles;
        assert!(field.sync(ocean));
        assert_eq!(field.bubbles().len(), BUBBLE_COUNT);
        assert!(field.bubbles().iter().all(|b| ocean.contains(&b.color)));
    }

    #[test]
    fn test_drift_cycle() {
        let bubble = BubbleSpec {
            diameter: 40.0,
            color: Color32::WHITE,
            duration: 6.0,
            delay: 1.0,
            top: 0.0,
            right: 0.0,
            offset: egui::vec2(100.0, -50.0),
        };

        assert_eq!(bubble.drift(0.5), Vec2::ZERO);
        assert_eq!(bubble.drift(1.0), Vec2::ZERO);
        assert_eq!(bubble.drift(4.0), egui::vec2(100.0, -50.0));
        assert!(bubble.drift(7.0).length() < 1e-3);
    }

    #[test]
    fn test_center_anchors_top_right() {
        let bubble = BubbleSpec {
            diameter: 40.0,
            color: Color32::WHITE,
            duration: 5.0,
            delay: 0.0,
            top: 10.0,
            right: 25.0,
            offset: Vec2::ZERO,
        };
        let screen = Rect::from_min_size(Pos2::ZERO, egui::vec2(800.0, 600.0));
        assert_eq!(bubble.center(screen, 0.0), egui::pos2(580.0, 80.0));
    }

    #[test]
    fn test_ease_in_out_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert_eq!(ease_in_out(0.5), 0.5);
    }
}
