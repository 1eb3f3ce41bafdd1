//! Round-based battle between the player and a single enemy.
//!
//! Each call to [`Battle::advance_round`] resolves one round: the player's
//! half-turn, then (only if the enemy is still standing) the enemy's
//! half-turn. Termination is checked after every half-turn, so an enemy that
//! falls to the player's action never gets to act.

use tracing::{debug, info};

use crate::action::{Action, ActionSelector, AlwaysAttack};
use crate::combatant::Combatant;
use crate::rng::{BattleRng, HealSource};

/// 战斗双方
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}

/// Half-turn phases of a round, plus the two terminal phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    PlayerActs,
    EnemyActs,
    PlayerWon,
    EnemyWon,
}

/// Externally visible state after a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleState {
    /// Battle goes on; `turn` is the number of the next round.
    Continuing { turn: u32 },
    PlayerWon,
    EnemyWon,
}

impl BattleState {
    pub fn is_over(&self) -> bool {
        !matches!(self, BattleState::Continuing { .. })
    }
}

/// Something that happened during a round, in order, for narration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleEvent {
    /// `actor` hit its opponent for `damage`; `target_health` is the
    /// opponent's health afterwards.
    Attacked {
        actor: Side,
        damage: u32,
        target_health: u32,
    },
    /// `actor` drew `amount`; `health` is its health afterwards (may have
    /// gained less than `amount` because of the cap).
    Healed {
        actor: Side,
        amount: u32,
        health: u32,
    },
    /// `side` dropped to zero health.
    Defeated { side: Side },
}

/// Result of a single round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    pub state: BattleState,
    pub events: Vec<BattleEvent>,
}

/// Owns both combatants for the duration of one battle.
pub struct Battle<R: HealSource = BattleRng> {
    player: Combatant,
    enemy: Combatant,
    turn: u32,
    state: BattleState,
    rng: R,
    enemy_policy: Box<dyn ActionSelector>,
}

impl<R: HealSource> Battle<R> {
    /// Starts at turn 1 with the enemy on the fixed always-attack policy.
    pub fn new(player: Combatant, enemy: Combatant, rng: R) -> Self {
        Self {
            player,
            enemy,
            turn: 1,
            state: BattleState::Continuing { turn: 1 },
            rng,
            enemy_policy: Box::new(AlwaysAttack),
        }
    }

    /// 替换敌人的行动策略
    pub fn with_enemy_policy(mut self, policy: impl ActionSelector + 'static) -> Self {
        self.enemy_policy = Box::new(policy);
        self
    }

    pub fn player(&self) -> &Combatant {
        &self.player
    }

    pub fn enemy(&self) -> &Combatant {
        &self.enemy
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn state(&self) -> BattleState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Resolves one round with the player's chosen `action`.
    ///
    /// Once the battle has ended this is a no-op that reports the terminal
    /// state with no events.
    pub fn advance_round(&mut self, action: Action) -> RoundReport {
        let mut events = Vec::new();
        if self.state.is_over() {
            return RoundReport {
                state: self.state,
                events,
            };
        }

        let mut phase = Phase::PlayerActs;
        self.state = loop {
            phase = match phase {
                Phase::PlayerActs => {
                    events.push(self.apply(Side::Player, action));
                    if self.enemy.is_alive() {
                        Phase::EnemyActs
                    } else {
                        Phase::PlayerWon
                    }
                }
                Phase::EnemyActs => {
                    let enemy_action = self.enemy_policy.choose(&self.enemy, &self.player);
                    events.push(self.apply(Side::Enemy, enemy_action));
                    if !self.player.is_alive() {
                        Phase::EnemyWon
                    } else {
                        self.turn += 1;
                        break BattleState::Continuing { turn: self.turn };
                    }
                }
                Phase::PlayerWon => {
                    events.push(BattleEvent::Defeated { side: Side::Enemy });
                    break BattleState::PlayerWon;
                }
                Phase::EnemyWon => {
                    events.push(BattleEvent::Defeated { side: Side::Player });
                    break BattleState::EnemyWon;
                }
            };
        };

        if self.state.is_over() {
            info!(turn = self.turn, state = ?self.state, "battle finished");
        }

        RoundReport {
            state: self.state,
            events,
        }
    }

    fn apply(&mut self, actor: Side, action: Action) -> BattleEvent {
        let (acting, other) = match actor {
            Side::Player => (&mut self.player, &mut self.enemy),
            Side::Enemy => (&mut self.enemy, &mut self.player),
        };

        let event = match action {
            Action::Attack => {
                let damage = acting.attack(other);
                BattleEvent::Attacked {
                    actor,
                    damage,
                    target_health: other.health(),
                }
            }
            Action::Heal => {
                let amount = acting.heal(&mut self.rng);
                BattleEvent::Healed {
                    actor,
                    amount,
                    health: acting.health(),
                }
            }
        };

        debug!(turn = self.turn, ?actor, %action, ?event, "half-turn resolved");
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::FixedRoll;
    use pretty_assertions::assert_eq;

    fn battle() -> Battle<FixedRoll> {
        Battle::new(
            Combatant::new("Hero", 100, 15),
            Combatant::new("Slime", 80, 10),
            FixedRoll(15),
        )
    }

    #[test]
    fn test_first_round_both_attack() {
        let mut battle = battle();
        let report = battle.advance_round(Action::Attack);

        assert_eq!(
            report,
            RoundReport {
                state: BattleState::Continuing { turn: 2 },
                events: vec![
                    BattleEvent::Attacked {
                        actor: Side::Player,
                        damage: 15,
                        target_health: 65,
                    },
                    BattleEvent::Attacked {
                        actor: Side::Enemy,
                        damage: 10,
                        target_health: 90,
                    },
                ],
            }
        );
        assert_eq!(battle.turn(), 2);
    }

    #[test]
    fn test_player_heal_then_enemy_attacks() {
        let mut battle = Battle::new(
            Combatant::new("Hero", 100, 15).with_health(50),
            Combatant::new("Slime", 80, 10),
            FixedRoll(15),
        );
        let report = battle.advance_round(Action::Heal);

        assert_eq!(
            report.events,
            vec![
                BattleEvent::Healed {
                    actor: Side::Player,
                    amount: 15,
                    health: 65,
                },
                BattleEvent::Attacked {
                    actor: Side::Enemy,
                    damage: 10,
                    target_health: 55,
                },
            ]
        );
        assert_eq!(battle.enemy().health(), 80);
    }

    #[test]
    fn test_enemy_skips_turn_when_defeated() {
        let mut battle = Battle::new(
            Combatant::new("Hero", 10, 15),
            Combatant::new("Slime", 80, 10).with_health(15),
            FixedRoll(15),
        );
        let report = battle.advance_round(Action::Attack);

        assert_eq!(report.state, BattleState::PlayerWon);
        assert_eq!(
            report.events,
            vec![
                BattleEvent::Attacked {
                    actor: Side::Player,
                    damage: 15,
                    target_health: 0,
                },
                BattleEvent::Defeated { side: Side::Enemy },
            ]
        );
        // 敌人没有机会反击
        assert_eq!(battle.player().health(), 10);
        assert_eq!(battle.turn(), 1);
    }

    #[test]
    fn test_enemy_wins() {
        let mut battle = Battle::new(
            Combatant::new("Hero", 100, 15).with_health(10),
            Combatant::new("Slime", 80, 10),
            FixedRoll(15),
        );
        let report = battle.advance_round(Action::Attack);

        assert_eq!(report.state, BattleState::EnemyWon);
        assert_eq!(
            report.events.last(),
            Some(&BattleEvent::Defeated { side: Side::Player })
        );
        assert!(!battle.player().is_alive());
    }

    #[test]
    fn test_heal_does_not_outlast_killing_blow() {
        // 回复 15 后剩 25，仍不足以承受 30 点伤害
        let mut battle = Battle::new(
            Combatant::new("Hero", 100, 15).with_health(10),
            Combatant::new("Ogre", 80, 30),
            FixedRoll(15),
        );
        assert_eq!(battle.advance_round(Action::Heal).state, BattleState::EnemyWon);
        assert_eq!(battle.player().health(), 0);
    }

    #[test]
    fn test_finished_battle_ignores_further_rounds() {
        let mut battle = Battle::new(
            Combatant::new("Hero", 100, 15),
            Combatant::new("Slime", 80, 10).with_health(1),
            FixedRoll(15),
        );
        battle.advance_round(Action::Attack);
        let player_before = battle.player().clone();

        let report = battle.advance_round(Action::Attack);
        assert_eq!(report.state, BattleState::PlayerWon);
        assert!(report.events.is_empty());
        assert_eq!(battle.player(), &player_before);
        assert_eq!(battle.enemy().health(), 0);
    }

    #[test]
    fn test_custom_enemy_policy() {
        struct AlwaysHeal;
        impl ActionSelector for AlwaysHeal {
            fn choose(&mut self, _actor: &Combatant, _opponent: &Combatant) -> Action {
                Action::Heal
            }
        }

        let mut battle = battle().with_enemy_policy(AlwaysHeal);
        let report = battle.advance_round(Action::Attack);

        assert_eq!(
            report.events[1],
            BattleEvent::Healed {
                actor: Side::Enemy,
                amount: 15,
                health: 80,
            }
        );
        assert_eq!(battle.player().health(), 100);
    }

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Player.opponent(), Side::Enemy);
        assert_eq!(Side::Enemy.opponent(), Side::Player);
    }
}
