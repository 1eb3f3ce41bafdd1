//! Actions a combatant can take on its half-turn, and the decision sources
//! that pick them.

use strum::{Display, EnumIter};

use crate::combatant::Combatant;

/// 一次行动
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Action {
    Attack,
    Heal,
}

/// 行动选择器：根据双方状态选出本回合行动
pub trait ActionSelector {
    fn choose(&mut self, actor: &Combatant, opponent: &Combatant) -> Action;
}

/// 敌人的固定策略：永远攻击
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysAttack;

impl ActionSelector for AlwaysAttack {
    fn choose(&mut self, _actor: &Combatant, _opponent: &Combatant) -> Action {
        Action::Attack
    }
}
