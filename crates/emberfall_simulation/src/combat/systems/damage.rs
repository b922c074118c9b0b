//! Health & Shield Ledger и системы смерти.

use bevy::prelude::*;

use crate::combat::{
    ActionState, DamageDealt, DamageIntent, DespawnAfter, EntityDied, HitOutcome, IgnoreReason,
    TimerKey,
};
use crate::combatant::{CombatCore, CombatantQuery};
use crate::cues::{AnimTrigger, Cue, CueBuffer, CueWriters, ShakeProfile, SoundId, VfxEffect};
use crate::logger::{log, log_info, log_warning};

/// Смещение VFX блока/удара относительно бойца
pub const IMPACT_VFX_OFFSET: Vec2 = Vec2::new(0.0, 2.0);

impl CombatCore<'_> {
    /// Применяет удар
    ///
    /// Порядок проверок:
    /// 1. Dead или неуязвим (перекат) → Ignored
    /// 2. Blocking с зарядами → поглощение, перезапуск ShieldRecovery; 0 зарядов → shield break
    /// 3. Иначе health -= amount (saturating), hurt flash; 0 → Dead
    pub fn apply_damage(&mut self, amount: u32, cues: &mut CueBuffer) -> HitOutcome {
        if self.is_dead() {
            return HitOutcome::Ignored(IgnoreReason::Dead);
        }
        if self.is_invincible() {
            log(&format!("🌀 {:?}: удар пропущен (перекат)", self.entity));
            return HitOutcome::Ignored(IgnoreReason::Invincible);
        }

        if *self.state == ActionState::Blocking && !self.shield.is_depleted() {
            return self.absorb_hit(cues);
        }

        self.health.take_damage(amount);

        if self.config.capabilities.hearts_ui {
            cues.push(Cue::Hearts(self.health.current));
        }

        if !self.health.is_alive() {
            self.die(cues);
            return HitOutcome::Killed;
        }

        cues.trigger(AnimTrigger::Hurt);
        // Flash перезапускается каждым ударом
        cues.push(Cue::Flash(true));
        self.timers.start(TimerKey::HurtFlash, self.config.hurt_flash);

        if self.config.capabilities.camera_shake {
            cues.push(Cue::Shake(ShakeProfile::Hurt));
        }

        log(&format!(
            "🩸 {:?}: -{} HP ({}/{})",
            self.entity, amount, self.health.current, self.health.max
        ));

        HitOutcome::Wounded {
            remaining: self.health.current,
        }
    }

    fn absorb_hit(&mut self, cues: &mut CueBuffer) -> HitOutcome {
        let remaining = self.shield.absorb();

        cues.push(Cue::Vfx {
            effect: VfxEffect::BlockImpact,
            offset: IMPACT_VFX_OFFSET,
        });

        if remaining > 0 {
            cues.push(Cue::Audio(SoundId::BlockHit));
            self.timers
                .start(TimerKey::ShieldRecovery, self.config.block.recovery_delay);
            log(&format!(
                "🛡️ {:?}: удар поглощён, зарядов {}/{}",
                self.entity, remaining, self.shield.max
            ));
            return HitOutcome::Absorbed { remaining };
        }

        self.break_shield(cues);
        HitOutcome::ShieldBroken
    }

    /// Shield break: выход из блока, Stunned, скорость 0.
    /// Восстановление стартует по окончании stun.
    fn break_shield(&mut self, cues: &mut CueBuffer) {
        cues.push(Cue::Audio(SoundId::ShieldBreak));
        cues.push(Cue::Vfx {
            effect: VfxEffect::ShieldBreak,
            offset: IMPACT_VFX_OFFSET,
        });

        self.stop_blocking(cues);
        self.timers.cancel(TimerKey::ShieldRecovery);

        self.set_state(ActionState::Stunned);
        cues.trigger(AnimTrigger::Hurt);
        self.body.stop();
        self.timers
            .start(TimerKey::Stun, self.config.block.stun_duration);

        if self.config.capabilities.camera_shake {
            cues.push(Cue::Shake(ShakeProfile::ShieldBreak));
        }

        log_info(&format!("💥 {:?}: щит сломан, stun", self.entity));
    }
}

/// Система: входящие DamageIntent → ledger → DamageDealt / EntityDied
///
/// Неизвестные target пропускаются с warning. При смерти вешается
/// DespawnAfter (если в конфиге есть despawn_delay).
pub fn apply_incoming_damage(
    mut commands: Commands,
    mut intents: EventReader<DamageIntent>,
    mut combatants: Query<CombatantQuery>,
    mut damage_dealt_events: EventWriter<DamageDealt>,
    mut entity_died_events: EventWriter<EntityDied>,
    mut cues: CueWriters,
    time: Res<Time>,
) {
    for intent in intents.read() {
        let Ok(mut target) = combatants.get_mut(intent.target) else {
            log_warning(&format!(
                "⚠️ DamageIntent: target {:?} не боец, пропускаем",
                intent.target
            ));
            continue;
        };

        let mut buffer = CueBuffer::default();
        let outcome = target.core().apply_damage(intent.amount, &mut buffer);
        cues.flush(intent.target, target.origin(), &mut buffer);

        if outcome.is_ignored() {
            continue;
        }

        damage_dealt_events.write(DamageDealt {
            attacker: intent.attacker,
            target: intent.target,
            amount: intent.amount,
            outcome,
        });

        if outcome == HitOutcome::Killed {
            entity_died_events.write(EntityDied {
                entity: intent.target,
                killer: intent.attacker,
            });

            if let Some(delay) = target.config.despawn_delay {
                commands.entity(intent.target).insert(DespawnAfter {
                    despawn_time: time.elapsed_secs() + delay,
                });
            }
        }
    }
}

/// Система: деспавн entities с истёкшим DespawnAfter timeout
pub fn despawn_after_timeout(
    mut commands: Commands,
    query: Query<(Entity, &DespawnAfter)>,
    time: Res<Time>,
) {
    let current_time = time.elapsed_secs();

    for (entity, despawn_after) in query.iter() {
        if current_time >= despawn_after.despawn_time {
            log_info(&format!("⚰️ Despawning entity {:?} (timeout)", entity));
            commands.entity(entity).despawn();
        }
    }
}
