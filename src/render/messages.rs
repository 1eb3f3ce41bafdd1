//! Narration text for battle events and outcomes.

use combat::{BattleEvent, BattleState, Side};

/// Names of both sides, for building sentences.
#[derive(Debug, Clone, Copy)]
pub struct Cast<'a> {
    pub player: &'a str,
    pub enemy: &'a str,
}

impl<'a> Cast<'a> {
    pub fn name(&self, side: Side) -> &'a str {
        match side {
            Side::Player => self.player,
            Side::Enemy => self.enemy,
        }
    }
}

/// One sentence per action. Defeats are reported through [`outcome`].
pub fn narrate(event: &BattleEvent, cast: &Cast) -> Option<String> {
    match event {
        BattleEvent::Attacked { actor, damage, .. } => Some(format!(
            "{} attacks! {} takes {} damage.",
            cast.name(*actor),
            cast.name(actor.opponent()),
            damage
        )),
        BattleEvent::Healed { actor, amount, .. } => {
            Some(format!("{} recovers {} HP.", cast.name(*actor), amount))
        }
        BattleEvent::Defeated { .. } => None,
    }
}

pub fn outcome(state: BattleState, cast: &Cast) -> Option<String> {
    match state {
        BattleState::PlayerWon => Some(format!("You defeated {}! Victory!", cast.enemy)),
        BattleState::EnemyWon => Some(format!("{} has fallen... Defeat.", cast.player)),
        BattleState::Continuing { .. } => None,
    }
}
