// src/combat/src/combatant.rs

use std::ops::RangeInclusive;

use crate::rng::HealSource;

/// 治疗抽取的闭区间
pub const HEAL_RANGE: RangeInclusive<u32> = 10..=20;

/// 表示可以参加战斗的活体
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combatant {
    name: String,
    health: u32,
    max_health: u32,
    attack_power: u32,
}

impl Combatant {
    /// 以满生命值创建战斗者
    ///
    /// # Panics
    ///
    /// `max_health` 或 `attack_power` 为 0 时。
    pub fn new(name: impl Into<String>, max_health: u32, attack_power: u32) -> Self {
        assert!(max_health > 0, "max_health must be positive");
        assert!(attack_power > 0, "attack_power must be positive");
        Self {
            name: name.into(),
            health: max_health,
            max_health,
            attack_power,
        }
    }

    /// 以指定的初始生命值开始（截断到最大生命值）
    pub fn with_health(mut self, health: u32) -> Self {
        self.health = health.min(self.max_health);
        self
    }

    /// 获取名称
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 获取当前生命值
    pub fn health(&self) -> u32 {
        self.health
    }

    /// 获取最大生命值
    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    /// 获取攻击力
    pub fn attack_power(&self) -> u32 {
        self.attack_power
    }

    /// 是否存活
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// 攻击目标，返回名义伤害
    ///
    /// 伤害恒等于攻击力；目标生命值最低降到 0，即使目标已倒下也照常返回伤害值。
    pub fn attack(&self, target: &mut Combatant) -> u32 {
        let damage = self.attack_power;
        target.health = target.health.saturating_sub(damage);
        damage
    }

    /// 自我治疗，返回抽取值
    ///
    /// The returned value is the raw draw, not the health actually gained, so
    /// it overstates the gain when the combatant is close to full health.
    pub fn heal<R: HealSource + ?Sized>(&mut self, rng: &mut R) -> u32 {
        let amount = rng.roll(HEAL_RANGE);
        self.health = self.health.saturating_add(amount).min(self.max_health);
        amount
    }
}
