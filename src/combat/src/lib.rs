// src/combat/src/lib.rs
//! Battle core: combatants, the round state machine and health-bar formatting.
//!
//! Nothing in this crate touches the terminal. The presentation layer feeds
//! the player's [`Action`] into [`Battle::advance_round`] and narrates the
//! returned [`BattleEvent`]s.

pub mod action;
pub mod battle;
pub mod combatant;
pub mod health_bar;
pub mod rng;


pub use crate::action::{Action, ActionSelector, AlwaysAttack};
pub use crate::battle::{Battle, BattleEvent, BattleState, RoundReport, Side};
pub use crate::combatant::{Combatant, HEAL_RANGE};
pub use crate::health_bar::{DEFAULT_BAR_LENGTH, HealthBar, Severity, format_health_bar};
pub use crate::rng::{BattleRng, FixedRoll, HealSource};
