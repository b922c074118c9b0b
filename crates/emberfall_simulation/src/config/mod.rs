//! Тюнинг бойцов и симуляции.
//!
//! `CombatantConfig` висит на entity как компонент и параметризует общее ядро:
//! player и enemy отличаются только значениями и `Capabilities`.
//! Пресеты `player()` / `enemy()` — значения из оригинальной игры,
//! те же значения лежат в `assets/combatants/*.ron`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::components::Facing;

mod error;

pub use error::ConfigError;
pub(crate) use error::{check_non_negative, check_positive, check_probability};

/// Полный тюнинг одного бойца
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatantConfig {
    pub max_health: u32,
    /// Длительность hurt flash (секунды, перезапускается каждым ударом)
    pub hurt_flash: f32,
    pub locomotion: LocomotionTuning,
    pub attack: AttackTuning,
    pub block: BlockTuning,
    pub roll: RollTuning,
    pub capabilities: Capabilities,
    /// Удаление entity через N секунд после смерти (None — труп остаётся)
    pub despawn_delay: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocomotionTuning {
    pub move_speed: f32,
    pub jump_force: f32,
    pub jump_cooldown: f32,
    /// Сколько AnimState держит 1 после отпускания направления
    pub idle_anim_delay: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackTuning {
    pub cooldown: f32,
    /// Сколько открыт hitbox после старта атаки
    pub hitbox_window: f32,
    pub damage: u32,
    /// Длина комбо-цепочки (Attack1..AttackN)
    pub combo_length: u8,
    /// Пауза после атаки, после которой цепочка начинается с Attack1
    pub combo_window: f32,
    /// None — атака проигрывается, но урона нет
    pub hitbox: Option<HitboxShape>,
    /// Запрашивать hit-impact VFX над атакующим при попадании
    pub impact_vfx: bool,
}

/// Круглая зона удара относительно центра бойца
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitboxShape {
    /// Смещение при facing = Right; по x зеркалится
    pub offset: [f32; 2],
    pub radius: f32,
}

impl HitboxShape {
    pub fn center(&self, origin: Vec2, facing: Facing) -> Vec2 {
        origin + Vec2::new(self.offset[0] * facing.sign(), self.offset[1])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockTuning {
    pub max_charges: u32,
    /// Задержка восстановления зарядов (перезапускается каждым поглощением)
    pub recovery_delay: f32,
    /// Минимальное время в блоке; release раньше откладывается
    pub min_duration: f32,
    /// Выход из блока сам по истечении min_duration (enemy)
    pub auto_release: bool,
    pub stun_duration: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollTuning {
    pub force: f32,
    pub duration: f32,
    pub cooldown: f32,
}

/// Флаги, которыми player и enemy отличаются поведенчески
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    pub roll_invincibility: bool,
    pub hearts_ui: bool,
    pub camera_shake: bool,
}

impl CombatantConfig {
    pub fn player() -> Self {
        Self {
            max_health: 5,
            hurt_flash: 0.3,
            locomotion: LocomotionTuning {
                move_speed: 5.0,
                jump_force: 7.5,
                jump_cooldown: 0.0,
                idle_anim_delay: 0.05,
            },
            attack: AttackTuning {
                cooldown: 0.25,
                hitbox_window: 0.2,
                damage: 1,
                combo_length: 3,
                combo_window: 1.0,
                hitbox: Some(HitboxShape {
                    offset: [0.9, 0.0],
                    radius: 0.7,
                }),
                impact_vfx: false,
            },
            block: BlockTuning {
                max_charges: 3,
                recovery_delay: 2.0,
                min_duration: 0.0,
                auto_release: false,
                stun_duration: 1.0,
            },
            roll: RollTuning {
                force: 6.0,
                duration: 8.0 / 14.0,
                cooldown: 0.0,
            },
            capabilities: Capabilities {
                roll_invincibility: true,
                hearts_ui: false,
                camera_shake: true,
            },
            despawn_delay: None,
        }
    }

    pub fn enemy() -> Self {
        Self {
            max_health: 5,
            hurt_flash: 0.3,
            locomotion: LocomotionTuning {
                move_speed: 3.0,
                jump_force: 7.0,
                jump_cooldown: 2.0,
                idle_anim_delay: 0.0,
            },
            attack: AttackTuning {
                cooldown: 0.7,
                hitbox_window: 0.2,
                damage: 1,
                combo_length: 2,
                combo_window: 0.0,
                hitbox: Some(HitboxShape {
                    offset: [0.9, 0.0],
                    radius: 0.7,
                }),
                impact_vfx: true,
            },
            block: BlockTuning {
                max_charges: 3,
                recovery_delay: 2.0,
                min_duration: 1.5,
                auto_release: true,
                stun_duration: 1.0,
            },
            roll: RollTuning {
                force: 6.0,
                duration: 0.5,
                cooldown: 2.0,
            },
            capabilities: Capabilities {
                roll_invincibility: false,
                hearts_ui: true,
                camera_shake: false,
            },
            despawn_delay: Some(2.0),
        }
    }

    /// Парсит RON и валидирует
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_health == 0 {
            return Err(ConfigError::invalid("max_health", "must be greater than zero"));
        }
        check_non_negative("hurt_flash", self.hurt_flash)?;

        check_non_negative("locomotion.move_speed", self.locomotion.move_speed)?;
        check_non_negative("locomotion.jump_force", self.locomotion.jump_force)?;
        check_non_negative("locomotion.jump_cooldown", self.locomotion.jump_cooldown)?;
        check_non_negative("locomotion.idle_anim_delay", self.locomotion.idle_anim_delay)?;

        check_non_negative("attack.cooldown", self.attack.cooldown)?;
        check_non_negative("attack.hitbox_window", self.attack.hitbox_window)?;
        check_non_negative("attack.combo_window", self.attack.combo_window)?;
        if self.attack.combo_length == 0 {
            return Err(ConfigError::invalid("attack.combo_length", "must be at least 1"));
        }
        if let Some(shape) = &self.attack.hitbox {
            check_non_negative("attack.hitbox.radius", shape.radius)?;
        }

        check_non_negative("block.recovery_delay", self.block.recovery_delay)?;
        check_non_negative("block.min_duration", self.block.min_duration)?;
        check_non_negative("block.stun_duration", self.block.stun_duration)?;

        check_non_negative("roll.force", self.roll.force)?;
        check_positive("roll.duration", self.roll.duration)?;
        check_non_negative("roll.cooldown", self.roll.cooldown)?;

        if let Some(delay) = self.despawn_delay {
            check_non_negative("despawn_delay", delay)?;
        }
        Ok(())
    }
}

/// Допустимый диапазон частоты тиков, Гц
pub const MIN_TICK_HZ: f64 = 1.0;
pub const MAX_TICK_HZ: f64 = 1000.0;

/// Параметры запуска симуляции
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSettings {
    /// Частота FixedUpdate
    pub tick_hz: f64,
    pub seed: u64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            tick_hz: 60.0,
            seed: 42,
        }
    }
}

impl SimulationSettings {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Длительность одного тика (и для Time<Fixed>, и для ManualDuration в тестах)
    ///
    /// Частота вне [MIN_TICK_HZ, MAX_TICK_HZ] прижимается к границе, NaN → 60 Гц.
    pub fn tick_duration(&self) -> Duration {
        let hz = if self.tick_hz.is_nan() {
            Self::default().tick_hz
        } else {
            self.tick_hz.clamp(MIN_TICK_HZ, MAX_TICK_HZ)
        };
        Duration::try_from_secs_f64(1.0 / hz).unwrap_or(Duration::from_millis(16))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_TICK_HZ..=MAX_TICK_HZ).contains(&self.tick_hz) {
            return Err(ConfigError::invalid(
                "tick_hz",
                format!(
                    "expected a rate in [{}, {}], got {}",
                    MIN_TICK_HZ, MAX_TICK_HZ, self.tick_hz
                ),
            ));
        }
        Ok(())
    }

    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        let settings: Self = ron::from_str(source)?;
        settings.validate()?;
        Ok(settings)
    }
}
