//! Combatant core: один набор компонентов и правил для player и enemy.
//!
//! `CombatCore` — mutable view на компоненты одного бойца. Правила боя
//! (ledger, переходы, эффекты таймеров, локомоция) реализованы как методы
//! `CombatCore` в своих модулях и не знают про ECS: системы собирают view
//! из `CombatantQuery`, тесты — из `testing::Rig`.

use bevy::ecs::query::QueryData;
use bevy::prelude::*;

use crate::combat::{
    ActionState, AttackChain, AttackHitbox, BlockRegion, CombatIntent, TimerBank, TimerKey,
};
use crate::components::{Combatant, Health, Locomotion, PhysicsBody, ShieldCharges};
use crate::config::CombatantConfig;
use crate::cues::{AnimCue, AnimTrigger, Cue, CueBuffer, HitboxRegion};
use crate::logger::{log, log_info};

pub mod spawn;

pub use spawn::{enemy_bundle, player_bundle};

#[cfg(test)]
pub(crate) mod testing;

/// Все компоненты бойца одним query
#[derive(QueryData)]
#[query_data(mutable)]
pub struct CombatantQuery {
    pub entity: Entity,
    pub combatant: &'static Combatant,
    pub config: &'static CombatantConfig,
    pub transform: &'static Transform,
    pub intent: &'static CombatIntent,
    pub state: &'static mut ActionState,
    pub timers: &'static mut TimerBank,
    pub health: &'static mut Health,
    pub shield: &'static mut ShieldCharges,
    pub hitbox: &'static mut AttackHitbox,
    pub block: &'static mut BlockRegion,
    pub chain: &'static mut AttackChain,
    pub locomotion: &'static mut Locomotion,
    pub body: &'static mut PhysicsBody,
}

impl CombatantQueryItem<'_> {
    pub fn core(&mut self) -> CombatCore<'_> {
        CombatCore {
            entity: self.entity,
            config: self.config,
            state: &mut *self.state,
            timers: &mut *self.timers,
            health: &mut *self.health,
            shield: &mut *self.shield,
            hitbox: &mut *self.hitbox,
            block: &mut *self.block,
            chain: &mut *self.chain,
            locomotion: &mut *self.locomotion,
            body: &mut *self.body,
        }
    }

    /// Позиция бойца на плоскости (для VFX offset'ов)
    pub fn origin(&self) -> Vec2 {
        self.transform.translation.truncate()
    }
}

/// Mutable view на одного бойца
pub struct CombatCore<'a> {
    pub entity: Entity,
    pub config: &'a CombatantConfig,
    pub state: &'a mut ActionState,
    pub timers: &'a mut TimerBank,
    pub health: &'a mut Health,
    pub shield: &'a mut ShieldCharges,
    pub hitbox: &'a mut AttackHitbox,
    pub block: &'a mut BlockRegion,
    pub chain: &'a mut AttackChain,
    pub locomotion: &'a mut Locomotion,
    pub body: &'a mut PhysicsBody,
}

impl CombatCore<'_> {
    pub fn is_dead(&self) -> bool {
        self.state.is_dead()
    }

    /// Неуязвимость в перекате (capability player'а)
    pub fn is_invincible(&self) -> bool {
        *self.state == ActionState::Rolling && self.config.capabilities.roll_invincibility
    }

    pub(crate) fn set_state(&mut self, next: ActionState) {
        if *self.state == next {
            return;
        }
        log(&format!(
            "🔄 {:?}: {} → {}",
            self.entity,
            self.state.as_str(),
            next.as_str()
        ));
        *self.state = next;
    }

    /// Принудительно закрывает attack hitbox (cue только если был открыт)
    pub(crate) fn close_hitbox(&mut self, cues: &mut CueBuffer) {
        if self.hitbox.close() {
            cues.push(Cue::Hitbox {
                region: HitboxRegion::Attack,
                enabled: false,
            });
        }
    }

    /// Выход из блока: зона выключается, Blocking → Idle
    pub(crate) fn stop_blocking(&mut self, cues: &mut CueBuffer) {
        let was_enabled = self.block.enabled;
        self.block.enabled = false;
        self.block.release_pending = false;
        self.timers.cancel(TimerKey::BlockMinimum);

        if was_enabled {
            cues.anim(AnimCue::IdleBlock(false));
            cues.push(Cue::Hitbox {
                region: HitboxRegion::Block,
                enabled: false,
            });
        }

        if *self.state == ActionState::Blocking {
            self.set_state(ActionState::Idle);
        }
    }

    /// Смерть: терминальное состояние, всё выключено, таймеры заморожены
    pub(crate) fn die(&mut self, cues: &mut CueBuffer) {
        self.stop_blocking(cues);
        self.close_hitbox(cues);

        if self.timers.is_running(TimerKey::HurtFlash) {
            cues.push(Cue::Flash(false));
        }

        self.set_state(ActionState::Dead);
        cues.trigger(AnimTrigger::Death);

        self.body.stop();
        self.body.kinematic = true;
        self.timers.freeze();

        log_info(&format!("💀 {:?} погиб", self.entity));
    }
}
