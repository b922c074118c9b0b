//! Damage events и исходы ledger'а.
//!
//! DamageIntent — входящий удар (из overlap check или извне).
//! Ledger решает, что с ним стало (`HitOutcome`), и публикует DamageDealt / EntityDied.

use bevy::prelude::*;

/// Событие: удар по цели (one-way, без повторов)
///
/// attacker = None — урон из окружения/скрипта.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct DamageIntent {
    pub attacker: Option<Entity>,
    pub target: Entity,
    pub amount: u32,
}

impl DamageIntent {
    pub fn new(attacker: Option<Entity>, target: Entity, amount: u32) -> Self {
        Self {
            attacker,
            target,
            amount,
        }
    }
}

/// Событие: удар обработан ledger'ом (не отброшен)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct DamageDealt {
    pub attacker: Option<Entity>,
    pub target: Entity,
    pub amount: u32,
    pub outcome: HitOutcome,
}

/// Событие: entity умер (health == 0)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct EntityDied {
    pub entity: Entity,
    pub killer: Option<Entity>,
}

/// Что ledger сделал с ударом
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// Удар отброшен, состояние не изменилось
    Ignored(IgnoreReason),
    /// Блок поглотил удар, здоровье не тронуто
    Absorbed { remaining: u32 },
    /// Последний заряд щита ушёл: выход из блока + stun
    ShieldBroken,
    /// Здоровье снято, боец жив
    Wounded { remaining: u32 },
    Killed,
}

impl HitOutcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, HitOutcome::Ignored(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    Dead,
    Invincible,
}

/// Компонент-маркер: деспавн entity после указанного времени
///
/// Вешается при смерти, если в конфиге есть `despawn_delay`.
/// Система `despawn_after_timeout` сравнивает с временем FixedUpdate.
#[derive(Component, Debug, Clone, Copy)]
pub struct DespawnAfter {
    /// Время деспавна (в секундах от старта симуляции)
    pub despawn_time: f32,
}
