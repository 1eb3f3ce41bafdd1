//! 外层游戏循环
//!
//! `App` turns menu commands into calls on the battle core and keeps what is
//! currently on screen. It owns the battle for the whole run; rendering only
//! sees a [`BattleView`] borrowed from it.

use std::collections::VecDeque;
use std::io;

use combat::{Battle, BattleEvent, BattleRng, BattleState, HealSource, Side};
use crossterm::event::Event;
use error::GameError;
use ratatui::{Terminal, backend::Backend};
use tracing::{debug, info};

use crate::input::{ActionMenu, MenuCommand, event_to_command};
use crate::render::{self, BattleView, FighterView, Prompt, messages};
use crate::render::messages::Cast;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Screen {
    Choosing(ActionMenu),
    Narrating(BattleEvent),
    Finished(BattleState),
}

pub struct App<R: HealSource = BattleRng> {
    battle: Battle<R>,
    bar_length: usize,
    screen: Screen,
    pending: VecDeque<BattleEvent>,
    /// Health as of the last narrated event, player then enemy.
    shown_health: (u32, u32),
    shown_turn: u32,
    should_quit: bool,
}

impl<R: HealSource> App<R> {
    pub fn new(battle: Battle<R>, bar_length: usize) -> Self {
        let shown_health = (battle.player().health(), battle.enemy().health());
        let shown_turn = battle.turn();
        Self {
            battle,
            bar_length,
            screen: Screen::Choosing(ActionMenu::new()),
            pending: VecDeque::new(),
            shown_health,
            shown_turn,
            should_quit: false,
        }
    }

    pub fn battle(&self) -> &Battle<R> {
        &self.battle
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Final state once the result screen is reached.
    pub fn outcome(&self) -> Option<BattleState> {
        match self.screen {
            Screen::Finished(state) => Some(state),
            _ => None,
        }
    }

    pub fn handle(&mut self, command: MenuCommand) {
        if command == MenuCommand::Quit {
            info!(turn = self.battle.turn(), "player quit");
            self.should_quit = true;
            return;
        }

        match &mut self.screen {
            Screen::Choosing(menu) => match command {
                MenuCommand::Up => menu.up(),
                MenuCommand::Down => menu.down(),
                MenuCommand::Confirm => {
                    let action = menu.selected();
                    info!(turn = self.battle.turn(), %action, "player chose action");
                    let report = self.battle.advance_round(action);
                    self.pending.extend(report.events);
                    self.show_next_event();
                }
                MenuCommand::Quit => {}
            },
            Screen::Narrating(_) => {
                if command == MenuCommand::Confirm {
                    self.show_next_event();
                }
            }
            Screen::Finished(_) => {
                if command == MenuCommand::Confirm {
                    self.should_quit = true;
                }
            }
        }
    }

    fn show_next_event(&mut self) {
        self.screen = match self.pending.pop_front() {
            Some(BattleEvent::Defeated { side }) => {
                debug!(?side, "defeat reached the screen");
                Screen::Finished(self.battle.state())
            }
            Some(event) => {
                self.apply_to_display(&event);
                Screen::Narrating(event)
            }
            None if self.battle.is_over() => Screen::Finished(self.battle.state()),
            None => {
                self.shown_turn = self.battle.turn();
                Screen::Choosing(ActionMenu::new())
            }
        };
    }

    fn apply_to_display(&mut self, event: &BattleEvent) {
        let (side, health) = match *event {
            BattleEvent::Attacked {
                actor,
                target_health,
                ..
            } => (actor.opponent(), target_health),
            BattleEvent::Healed { actor, health, .. } => (actor, health),
            BattleEvent::Defeated { .. } => return,
        };
        match side {
            Side::Player => self.shown_health.0 = health,
            Side::Enemy => self.shown_health.1 = health,
        }
    }

    fn cast(&self) -> Cast<'_> {
        Cast {
            player: self.battle.player().name(),
            enemy: self.battle.enemy().name(),
        }
    }

    pub fn view(&self) -> BattleView<'_> {
        let cast = self.cast();
        let prompt = match &self.screen {
            Screen::Choosing(menu) => Prompt::Menu(menu),
            Screen::Narrating(event) => {
                Prompt::Message(messages::narrate(event, &cast).unwrap_or_default())
            }
            Screen::Finished(state) => Prompt::Finished {
                message: messages::outcome(*state, &cast).unwrap_or_default(),
                victory: *state == BattleState::PlayerWon,
            },
        };

        BattleView {
            player: FighterView {
                name: cast.player,
                health: self.shown_health.0,
                max_health: self.battle.player().max_health(),
            },
            enemy: FighterView {
                name: cast.enemy,
                health: self.shown_health.1,
                max_health: self.battle.enemy().max_health(),
            },
            turn: self.shown_turn,
            bar_length: self.bar_length,
            prompt,
        }
    }
}

/// Draw / read / handle until the player quits or dismisses the result.
///
/// Failures to draw are `IoError`; failures to read the next key are
/// `InputError`.
pub fn run<B, R, F>(terminal: &mut Terminal<B>, app: &mut App<R>, mut next_event: F) -> Result<(), GameError>
where
    B: Backend,
    R: HealSource,
    F: FnMut() -> io::Result<Event>,
{
    loop {
        terminal.draw(|frame| render::draw(frame, &app.view()))?;
        if app.should_quit() {
            return Ok(());
        }

        let event = next_event().map_err(|e| GameError::InputError(e.to_string()))?;
        if let Some(command) = event_to_command(&event) {
            app.handle(command);
        }
    }
}
