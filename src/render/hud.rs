//! 战斗状态面板
//!
//! 每个战斗者一行名字、一行血条，中间以分隔线隔开：
//! ```text
//! You:
//!   HP: [████████████████────] 80/100
//! --------------------
//! Slime:
//!   HP: [████████████████████] 80/80
//! ```

use combat::{HealthBar, Severity};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Rows the panel needs, borders included.
pub const HUD_HEIGHT: u16 = 7;

/// Health as currently shown for one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FighterView<'a> {
    pub name: &'a str,
    pub health: u32,
    pub max_health: u32,
}

/// 血条颜色只取决于严重程度
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Normal => Color::Green,
        Severity::Warning => Color::Yellow,
        Severity::Critical => Color::Red,
    }
}

/// `[` filled (colored) empty `] label`
pub fn health_bar_spans(bar: &HealthBar) -> Vec<Span<'static>> {
    vec![
        Span::raw("["),
        Span::styled(
            bar.filled_glyphs(),
            Style::default().fg(severity_color(bar.severity)),
        ),
        Span::raw(bar.empty_glyphs()),
        Span::raw(format!("] {}", bar.label())),
    ]
}

pub struct HudRenderer {
    bar_length: usize,
}

impl HudRenderer {
    pub fn new(bar_length: usize) -> Self {
        Self { bar_length }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, player: &FighterView, enemy: &FighterView) {
        let mut lines = self.fighter_lines(player);
        lines.push(Line::from("-".repeat(20)));
        lines.extend(self.fighter_lines(enemy));

        let panel = Paragraph::new(lines).block(
            Block::default()
                .title(" Battle Status ")
                .borders(Borders::ALL),
        );
        frame.render_widget(panel, area);
    }

    fn fighter_lines(&self, fighter: &FighterView) -> Vec<Line<'static>> {
        let bar = HealthBar::with_length(fighter.health, fighter.max_health, self.bar_length);

        let mut hp = vec![Span::raw("  HP: ")];
        hp.extend(health_bar_spans(&bar));

        vec![
            Line::from(Span::styled(
                format!("{}:", fighter.name),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(hp),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spans_carry_severity_color_on_filled_part_only() {
        let bar = HealthBar::with_length(20, 100, 10);
        let spans = health_bar_spans(&bar);

        assert_eq!(spans[1].content, "██");
        assert_eq!(spans[1].style.fg, Some(Color::Red));
        assert_eq!(spans[2].content, "────────");
        assert_eq!(spans[2].style.fg, None);
        assert_eq!(spans[3].content, "] 20/100");
    }

    #[test]
    fn test_severity_colors() {
        assert_eq!(severity_color(Severity::Normal), Color::Green);
        assert_eq!(severity_color(Severity::Warning), Color::Yellow);
        assert_eq!(severity_color(Severity::Critical), Color::Red);
    }
}
