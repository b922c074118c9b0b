//! Timer Bank tick и эффекты истечения.

use bevy::prelude::*;

use crate::combat::{ActionState, ExpiredTimers, TimerKey};
use crate::combatant::{CombatCore, CombatantQuery};
use crate::cues::{Cue, CueBuffer, CueWriters};
use crate::logger::log;

impl CombatCore<'_> {
    /// Тик банка таймеров + эффекты истёкших (каждый ровно один раз)
    ///
    /// Dead: банк заморожен, ничего не происходит.
    pub fn advance_timers(&mut self, dt: f32, cues: &mut CueBuffer) -> ExpiredTimers {
        if self.is_dead() {
            return ExpiredTimers::default();
        }

        let expired = self.timers.tick(dt);
        for key in expired.iter() {
            self.on_timer_expired(key, cues);
        }
        expired
    }

    fn on_timer_expired(&mut self, key: TimerKey, cues: &mut CueBuffer) {
        match key {
            // Окно удара закрывается всегда, даже если состояние уже сменилось
            TimerKey::HitboxWindow => {
                self.close_hitbox(cues);
                if *self.state == ActionState::Attacking {
                    self.set_state(ActionState::Idle);
                }
            }
            TimerKey::Roll => {
                if *self.state == ActionState::Rolling {
                    self.set_state(ActionState::Idle);
                }
            }
            TimerKey::BlockMinimum => {
                let release = self.config.block.auto_release || self.block.release_pending;
                if *self.state == ActionState::Blocking && release {
                    self.stop_blocking(cues);
                }
            }
            TimerKey::Stun => {
                if *self.state == ActionState::Stunned {
                    self.set_state(ActionState::Idle);
                }
                self.timers
                    .start(TimerKey::ShieldRecovery, self.config.block.recovery_delay);
            }
            TimerKey::ShieldRecovery => {
                self.shield.restore();
                log(&format!(
                    "🔋 {:?}: щит восстановлен ({})",
                    self.entity, self.shield.current
                ));
            }
            TimerKey::HurtFlash => cues.push(Cue::Flash(false)),
            TimerKey::AttackCooldown
            | TimerKey::RollCooldown
            | TimerKey::JumpCooldown
            | TimerKey::ComboWindow
            | TimerKey::IdleAnimDelay => {}
        }
    }
}

/// Система: тик всех банков таймеров (до обработки урона и решений)
pub fn tick_combat_timers(
    time: Res<Time>,
    mut combatants: Query<CombatantQuery>,
    mut cues: CueWriters,
) {
    let dt = time.delta_secs();

    for mut combatant in combatants.iter_mut() {
        let origin = combatant.origin();
        let mut buffer = CueBuffer::default();

        combatant.core().advance_timers(dt, &mut buffer);

        if !buffer.is_empty() {
            cues.flush(combatant.entity, origin, &mut buffer);
        }
    }
}
