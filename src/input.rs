//! Keyboard handling: crossterm key events to menu commands, and the
//! action menu's selection state.

use combat::Action;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use strum::IntoEnumIterator;

/// What a key press means to the battle screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Up,
    Down,
    Confirm,
    Quit,
}

/// Maps a key press to a command; releases and unbound keys yield `None`.
pub fn key_to_command(key: KeyEvent) -> Option<MenuCommand> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(MenuCommand::Quit)
        }
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(MenuCommand::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(MenuCommand::Down),
        KeyCode::Enter => Some(MenuCommand::Confirm),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(MenuCommand::Quit),
        _ => None,
    }
}

pub fn event_to_command(event: &Event) -> Option<MenuCommand> {
    match event {
        Event::Key(key) => key_to_command(*key),
        _ => None,
    }
}

/// 行动菜单：上下移动时循环选择
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionMenu {
    options: Vec<Action>,
    selected: usize,
}

impl Default for ActionMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionMenu {
    pub fn new() -> Self {
        Self {
            options: Action::iter().collect(),
            selected: 0,
        }
    }

    pub fn options(&self) -> &[Action] {
        &self.options
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Action {
        self.options[self.selected]
    }

    pub fn up(&mut self) {
        self.selected = (self.selected + self.options.len() - 1) % self.options.len();
    }

    pub fn down(&mut self) {
        self.selected = (self.selected + 1) % self.options.len();
    }
}
