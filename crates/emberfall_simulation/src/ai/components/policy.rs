//! Enemy policy: тюнинг вероятностного decision source.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{check_non_negative, check_positive, check_probability, ConfigError};

/// Гейты и дистанции AI врага
///
/// Вероятности — за тик (frame-coupled): при другой частоте тиков
/// поведение меняется.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyPolicy {
    /// Дистанция атаки
    pub attack_range: f32,
    /// engage = attack_range × factor: зона блока и отскока
    pub engage_range_factor: f32,
    /// Шанс войти в блок за тик (в зоне engage)
    pub block_chance: f32,
    /// Шанс отскока прыжком за тик (в зоне engage, на земле, jump cooldown готов)
    pub retreat_jump_chance: f32,
    /// Горизонтальная скорость отскока = move_speed × factor
    pub retreat_speed_factor: f32,
    /// Гейт атаки при готовом cooldown
    pub attack_chance: f32,
    /// Случайная добавка к cooldown атаки: [0, jitter)
    pub attack_cooldown_jitter: f32,
    /// Варианты атаки 1..=N
    pub attack_variants: u8,
    /// Гейт переката при готовом roll cooldown
    pub roll_chance: f32,
}

impl Default for EnemyPolicy {
    fn default() -> Self {
        Self {
            attack_range: 1.5,
            engage_range_factor: 1.5,
            block_chance: 0.005,
            retreat_jump_chance: 0.1,
            retreat_speed_factor: 1.2,
            attack_chance: 0.7,
            attack_cooldown_jitter: 0.3,
            attack_variants: 2,
            roll_chance: 0.3,
        }
    }
}

impl EnemyPolicy {
    pub fn engage_range(&self) -> f32 {
        self.attack_range * self.engage_range_factor
    }

    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        let policy: Self = ron::from_str(source)?;
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("attack_range", self.attack_range)?;
        check_non_negative("engage_range_factor", self.engage_range_factor)?;
        check_probability("block_chance", self.block_chance)?;
        check_probability("retreat_jump_chance", self.retreat_jump_chance)?;
        check_non_negative("retreat_speed_factor", self.retreat_speed_factor)?;
        check_probability("attack_chance", self.attack_chance)?;
        check_non_negative("attack_cooldown_jitter", self.attack_cooldown_jitter)?;
        if self.attack_variants == 0 {
            return Err(ConfigError::invalid("attack_variants", "must be at least 1"));
        }
        check_probability("roll_chance", self.roll_chance)?;
        Ok(())
    }
}

/// Кого преследует враг (None — стоит на месте)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChaseTarget(pub Option<Entity>);
