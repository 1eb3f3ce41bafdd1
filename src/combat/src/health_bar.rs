//! Text health bars: `[██████────] 60/100`.

use std::fmt;

/// 默认长度
pub const DEFAULT_BAR_LENGTH: usize = 20;
pub const FILLED_GLYPH: char = '█';
pub const EMPTY_GLYPH: char = '─';

/// Cosmetic emphasis derived from the health ratio. Never feeds back into
/// battle logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// ratio >= 0.5
    Normal,
    /// 0.25 <= ratio < 0.5
    Warning,
    /// ratio < 0.25
    Critical,
}

impl Severity {
    pub fn classify(health: u32, max_health: u32) -> Self {
        let (health, max_health) = (u64::from(health), u64::from(max_health));
        if health * 2 >= max_health {
            Severity::Normal
        } else if health * 4 >= max_health {
            Severity::Warning
        } else {
            Severity::Critical
        }
    }
}

/// A bar split into its filled and empty runs, plus the numeric label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthBar {
    pub health: u32,
    pub max_health: u32,
    pub length: usize,
    pub filled: usize,
    pub severity: Severity,
}

impl HealthBar {
    pub fn new(health: u32, max_health: u32) -> Self {
        Self::with_length(health, max_health, DEFAULT_BAR_LENGTH)
    }

    /// # Panics
    ///
    /// If `max_health` is 0.
    pub fn with_length(health: u32, max_health: u32, length: usize) -> Self {
        assert!(max_health > 0, "max_health must be positive");
        // usize * u32 always fits in u128
        let filled = (length as u128 * u128::from(health) / u128::from(max_health))
            .min(length as u128) as usize;
        Self {
            health,
            max_health,
            length,
            filled,
            severity: Severity::classify(health, max_health),
        }
    }

    pub fn empty(&self) -> usize {
        self.length - self.filled
    }

    pub fn filled_glyphs(&self) -> String {
        FILLED_GLYPH.to_string().repeat(self.filled)
    }

    pub fn empty_glyphs(&self) -> String {
        EMPTY_GLYPH.to_string().repeat(self.empty())
    }

    pub fn label(&self) -> String {
        format!("{}/{}", self.health, self.max_health)
    }
}

impl fmt::Display for HealthBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}{}] {}",
            self.filled_glyphs(),
            self.empty_glyphs(),
            self.label()
        )
    }
}

/// Plain-text rendering of a bar of `length` glyphs.
pub fn format_health_bar(health: u32, max_health: u32, length: usize) -> String {
    HealthBar::with_length(health, max_health, length).to_string()
}
