//! Dashboard view state management

use std::time::{Duration, Instant};
use tracing::debug;

use crate::dashboard::theme::ThemeName;

/// How long a clicked card stays highlighted
pub const HIGHLIGHT_DURATION: Duration = Duration::from_millis(1000);

/// The most recently clicked card and when the highlight runs out.
///
/// Holds at most one deadline; a new click replaces it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickHighlight {
    active: Option<(usize, Instant)>,
}

impl ClickHighlight {
    /// Highlight `index`, restarting the one-second countdown from `now`
    pub fn click(&mut self, index: usize, now: Instant) {
        debug!(index, "card clicked");
        self.active = Some((index, now));
    }

    /// Clear the highlight once its deadline has passed.
    ///
    /// Returns `true` if this call cleared it.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.active {
            Some((index, since)) if now.saturating_duration_since(since) >= HIGHLIGHT_DURATION => {
                debug!(index, "card highlight expired");
                self.active = None;
                true
            }
            _ => false,
        }
    }

    /// Index of the highlighted card
    pub fn index(&self) -> Option<usize> {
        self.active.map(|(index, _)| index)
    }

    /// Whether the card at `index` is highlighted
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.index() == Some(index)
    }

    /// Time since the highlight started
    pub fn elapsed(&self, now: Instant) -> Option<Duration> {
        self.active.map(|(_, since)| now.saturating_duration_since(since))
    }
}

/// Theme selector expansion state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeSelectorState {
    #[default]
    Collapsed,
    Expanded,
}

impl ThemeSelectorState {
    /// Main toggle button pressed
    pub fn toggle(&mut self) {
        *self = match self {
            ThemeSelectorState::Collapsed => ThemeSelectorState::Expanded,
            ThemeSelectorState::Expanded => ThemeSelectorState::Collapsed,
        };
    }

    /// A swatch was picked; collapses and hands the choice back
    pub fn choose(&mut self, theme: ThemeName) -> ThemeName {
        *self = ThemeSelectorState::Collapsed;
        theme
    }

    /// Whether swatches are showing
    pub fn is_expanded(&self) -> bool {
        *self == ThemeSelectorState::Expanded
    }
}

/// Overall dashboard state
#[derive(Debug, Default)]
pub struct DashboardState {
    /// Active theme
    pub theme: ThemeName,
    /// Clicked-card highlight
    pub highlight: ClickHighlight,
    /// Theme selector
    pub selector: ThemeSelectorState,
}

impl DashboardState {
    /// Create state starting on the given theme
    pub fn new(theme: ThemeName) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }
}
