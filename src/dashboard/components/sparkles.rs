//! Sparkle burst shown over a clicked card

use egui::{Painter, Rect};
use rand::Rng;

use crate::dashboard::theme::palette;

/// Sparkles per overlay
pub const SPARKLE_COUNT: usize = 20;

/// Length of one pulse in seconds
const PULSE_PERIOD: f32 = 0.8;

/// Dot diameter in points
const SPARKLE_SIZE: f32 = 8.0;

/// Parameters of one sparkle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SparkleSpec {
    /// Distance from the top of the card, in percent
    pub top: f32,
    /// Distance from the right of the card, in percent
    pub right: f32,
    /// Pulse delay in seconds, 0 - 0.5
    pub delay: f32,
}

impl SparkleSpec {
    /// Opacity and scale (both 0 - 1) at `time` seconds into the burst
    pub fn pulse(&self, time: f32) -> f32 {
        let t = time - self.delay;
        if t <= 0.0 {
            return 0.0;
        }
        let phase = (t % PULSE_PERIOD) / PULSE_PERIOD;
        let rising = if phase < 0.5 { phase * 2.0 } else { (1.0 - phase) * 2.0 };
        super::bubbles::ease_in_out(rising)
    }
}

/// Generate sparkle positions
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Vec<SparkleSpec> {
    (0..SPARKLE_COUNT)
        .map(|_| SparkleSpec {
            top: rng.random_range(0.0..=100.0),
            right: rng.random_range(0.0..=100.0),
            delay: rng.random_range(0.0..=0.5),
        })
        .collect()
}

/// Sparkles belonging to one card, fixed for the card's lifetime
#[derive(Debug, Clone)]
pub struct SparkleOverlay {
    sparkles: Vec<SparkleSpec>,
}

impl Default for SparkleOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl SparkleOverlay {
    pub fn new() -> Self {
        Self {
            sparkles: generate_with(&mut rand::rng()),
        }
    }

    #[allow(dead_code)]
    pub fn sparkles(&self) -> &[SparkleSpec] {
        &self.sparkles
    }

    /// Paint over `rect`; paints nothing while inactive
    pub fn paint(&self, painter: &Painter, rect: Rect, is_active: bool, time: f32) {
        if !is_active {
            return;
        }

        for sparkle in &self.sparkles {
            let amount = sparkle.pulse(time);
            if amount <= 0.0 {
                continue;
            }
            let center = egui::pos2(
                rect.max.x - rect.width() * sparkle.right / 100.0,
                rect.min.y + rect.height() * sparkle.top / 100.0,
            );
            painter.circle_filled(
                center,
                SPARKLE_SIZE / 2.0 * amount,
                palette::YELLOW_300.gamma_multiply(amount),
            );
        }
    }
}
