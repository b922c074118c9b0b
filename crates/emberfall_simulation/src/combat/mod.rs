//! Combat module: state machine, timer bank, health & shield ledger, hitbox.
//!
//! ECS ответственность:
//! - Game state: ActionState, TimerBank, Health, ShieldCharges, AttackHitbox
//! - Combat rules: методы `CombatCore` (ledger, переходы, эффекты таймеров)
//! - Events: DamageIntent → DamageDealt, EntityDied
//!
//! Внешняя ответственность (через cue events):
//! - анимация, VFX, звук, тряска камеры, health UI

use bevy::prelude::*;

pub mod components;
pub mod damage;
pub mod systems;

// Re-export основных типов
pub use components::*;
pub use damage::{
    DamageDealt, DamageIntent, DespawnAfter, EntityDied, HitOutcome, IgnoreReason,
};

use crate::schedule::TickSet;

/// Combat Plugin
///
/// Регистрирует combat системы в FixedUpdate.
///
/// Порядок выполнения (фазы `TickSet`):
/// 1. Timers — tick_combat_timers (hitbox close, конец переката/stun, восстановление щита)
/// 2. Damage — apply_incoming_damage (ledger)
/// 3. Act — execute_combat_intents (один переход за тик)
/// 4. Overlap — detect_hitbox_overlaps → DamageIntent на следующий тик
/// 5. Cleanup — despawn_after_timeout
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        // Регистрация событий
        app.add_event::<DamageIntent>()
            .add_event::<DamageDealt>()
            .add_event::<EntityDied>();

        // Регистрация систем в FixedUpdate
        app.add_systems(
            FixedUpdate,
            (
                systems::timers::tick_combat_timers.in_set(TickSet::Timers),
                systems::damage::apply_incoming_damage.in_set(TickSet::Damage),
                systems::actions::execute_combat_intents.in_set(TickSet::Act),
                systems::hitbox::detect_hitbox_overlaps.in_set(TickSet::Overlap),
                systems::damage::despawn_after_timeout.in_set(TickSet::Cleanup),
            ),
        );
    }
}
