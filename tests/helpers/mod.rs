//! Shared helpers for rendering battles into an in-memory terminal.

#![allow(dead_code)]

use combat::{Battle, Combatant, FixedRoll};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

/// The classic matchup with a fixed heal roll of 15.
pub fn classic_battle() -> Battle<FixedRoll> {
    Battle::new(
        Combatant::new("Hero", 100, 15),
        Combatant::new("Slime", 80, 10),
        FixedRoll(15),
    )
}

pub fn test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(width, height)).expect("failed to create terminal")
}

/// Buffer contents, one trimmed string per row.
pub fn buffer_lines(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    let width = buffer.area().width;
    let height = buffer.area().height;

    (0..height)
        .map(|y| {
            let mut line = String::new();
            for x in 0..width {
                line.push_str(buffer[(x, y)].symbol());
            }
            line.trim_end().to_string()
        })
        .collect()
}

pub fn has_line(lines: &[String], needle: &str) -> bool {
    lines.iter().any(|line| line.contains(needle))
}

pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}
