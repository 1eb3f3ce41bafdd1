//! 启动参数
//!
//! Command line flags are parsed with clap and then checked into a
//! [`BattleConfig`] that knows how to build the battle.

use std::path::PathBuf;

use clap::Parser;
use combat::{Battle, BattleRng, Combatant, DEFAULT_BAR_LENGTH};
use error::GameError;

#[derive(Debug, Clone, Parser)]
#[command(name = "terminal_battle")]
#[command(about = "Turn-based terminal battle: attack or heal until one side falls")]
pub struct Args {
    /// Name shown for the player
    #[arg(long, default_value = "Hero")]
    pub player_name: String,

    /// Player maximum (and starting) health
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
    pub player_health: u32,

    /// Damage dealt by each player attack
    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u32).range(1..))]
    pub player_attack: u32,

    /// Name shown for the enemy
    #[arg(long, default_value = "Slime")]
    pub enemy_name: String,

    /// Enemy maximum (and starting) health
    #[arg(long, default_value_t = 80, value_parser = clap::value_parser!(u32).range(1..))]
    pub enemy_health: u32,

    /// Damage dealt by each enemy attack
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    pub enemy_attack: u32,

    /// RNG seed for reproducible heal rolls (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Width of the health bars in glyphs
    #[arg(long, default_value_t = DEFAULT_BAR_LENGTH as u16, value_parser = clap::value_parser!(u16).range(1..=200))]
    pub bar_length: u16,

    /// Write logs to this file (the screen is owned by the battle view)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Validated settings for one battle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleConfig {
    pub player_name: String,
    pub player_health: u32,
    pub player_attack: u32,
    pub enemy_name: String,
    pub enemy_health: u32,
    pub enemy_attack: u32,
    pub seed: u64,
    pub bar_length: usize,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            player_name: "Hero".to_string(),
            player_health: 100,
            player_attack: 15,
            enemy_name: "Slime".to_string(),
            enemy_health: 80,
            enemy_attack: 10,
            seed: 0,
            bar_length: DEFAULT_BAR_LENGTH,
        }
    }
}

impl TryFrom<&Args> for BattleConfig {
    type Error = GameError;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        let player_name = non_blank("player name", &args.player_name)?;
        let enemy_name = non_blank("enemy name", &args.enemy_name)?;

        // clap 已限制数值下界，这里再次确认以防直接构造 Args
        for (what, value) in [
            ("player health", args.player_health),
            ("player attack", args.player_attack),
            ("enemy health", args.enemy_health),
            ("enemy attack", args.enemy_attack),
        ] {
            if value == 0 {
                return Err(GameError::InvalidConfig(format!("{} must be at least 1", what)));
            }
        }
        if args.bar_length == 0 {
            return Err(GameError::InvalidConfig("bar length must be at least 1".into()));
        }

        Ok(Self {
            player_name,
            player_health: args.player_health,
            player_attack: args.player_attack,
            enemy_name,
            enemy_health: args.enemy_health,
            enemy_attack: args.enemy_attack,
            seed: args.seed.unwrap_or_else(rand::random),
            bar_length: usize::from(args.bar_length),
        })
    }
}

impl BattleConfig {
    pub fn player(&self) -> Combatant {
        Combatant::new(&self.player_name, self.player_health, self.player_attack)
    }

    pub fn enemy(&self) -> Combatant {
        Combatant::new(&self.enemy_name, self.enemy_health, self.enemy_attack)
    }

    /// Fresh battle seeded from `seed`.
    pub fn build_battle(&self) -> Battle<BattleRng> {
        Battle::new(self.player(), self.enemy(), BattleRng::new(self.seed))
    }
}

fn non_blank(what: &str, value: &str) -> Result<String, GameError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(GameError::InvalidConfig(format!("{} is empty", what)))
    } else {
        Ok(trimmed.to_string())
    }
}
