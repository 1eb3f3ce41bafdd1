//! 行动面板：回合标题 + 菜单 / 战斗叙述 / 结局

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::input::ActionMenu;

/// What the lower panel is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt<'a> {
    /// Waiting for the player to pick an action.
    Menu(&'a ActionMenu),
    /// Narrating one action; Enter continues.
    Message(String),
    /// Battle over; Enter exits.
    Finished { message: String, victory: bool },
}

pub struct PromptRenderer;

impl Default for PromptRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, turn: u32, prompt: &Prompt) {
        let mut lines = Vec::new();
        if !matches!(prompt, Prompt::Finished { .. }) {
            lines.push(Line::from(format!("--- Turn {} ---", turn)));
            lines.push(Line::default());
        }

        match prompt {
            Prompt::Menu(menu) => {
                lines.push(Line::from("What will you do?"));
                lines.extend(self.menu_lines(menu));
            }
            Prompt::Message(message) => {
                lines.push(Line::from(message.clone()));
                lines.push(Line::default());
                lines.push(hint("Press Enter to continue..."));
            }
            Prompt::Finished { message, victory } => {
                let color = if *victory { Color::Green } else { Color::Red };
                lines.push(Line::from(Span::styled(
                    message.clone(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::default());
                lines.push(hint("Press Enter to exit"));
            }
        }

        let panel = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL))
            .wrap(Wrap { trim: false });
        frame.render_widget(panel, area);
    }

    fn menu_lines(&self, menu: &ActionMenu) -> Vec<Line<'static>> {
        menu.options()
            .iter()
            .enumerate()
            .map(|(idx, action)| {
                if idx == menu.selected_index() {
                    Line::from(vec![
                        Span::raw("> "),
                        Span::styled(action.to_string(), Style::default().fg(Color::Cyan)),
                    ])
                } else {
                    Line::from(format!("  {}", action))
                }
            })
            .collect()
    }
}

fn hint(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
}
