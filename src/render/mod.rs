//! 模块化渲染系统
//!
//! - `hud` - 双方生命值状态面板
//! - `menu` - 回合标题、行动菜单、叙述与结局
//! - `messages` - 事件叙述文本
//!
//! 渲染器只读取 [`BattleView`]，不直接接触战斗状态。

pub mod hud;
pub mod menu;
pub mod messages;

pub use hud::{FighterView, HudRenderer};
pub use menu::{Prompt, PromptRenderer};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// Everything one frame needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleView<'a> {
    pub player: FighterView<'a>,
    pub enemy: FighterView<'a>,
    pub turn: u32,
    pub bar_length: usize,
    pub prompt: Prompt<'a>,
}

pub fn draw(frame: &mut Frame, view: &BattleView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(hud::HUD_HEIGHT), Constraint::Min(3)])
        .split(frame.area());

    HudRenderer::new(view.bar_length).render(frame, chunks[0], &view.player, &view.enemy);
    PromptRenderer::new().render(frame, chunks[1], view.turn, &view.prompt);
}
