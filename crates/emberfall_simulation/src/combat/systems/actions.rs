//! Action State Machine: переходы по запросам из CombatIntent.

use bevy::prelude::*;

use crate::combat::{locomotion_state, ActionRequest, ActionState, TimerKey};
use crate::combatant::{CombatCore, CombatantQuery};
use crate::cues::{AnimCue, AnimTrigger, Cue, CueBuffer, CueWriters, HitboxRegion, SoundId};
use crate::logger::log;

impl CombatCore<'_> {
    /// Один запрос действия. Возвращает true, если запрос принят.
    ///
    /// Dead игнорирует всё. Отклонённый запрос не меняет состояние.
    pub fn request(&mut self, request: ActionRequest, cues: &mut CueBuffer) -> bool {
        if self.is_dead() {
            return false;
        }

        match request {
            ActionRequest::Roll => self.start_roll(cues),
            ActionRequest::Attack {
                variant,
                cooldown_jitter,
            } => self.start_attack(variant, cooldown_jitter, cues),
            ActionRequest::BlockStart => self.start_blocking(cues),
            ActionRequest::BlockRelease => self.release_block(cues),
        }
    }

    /// Idle ↔ Moving по направлению intent (остальные состояния не трогаем)
    pub fn settle_locomotion_state(&mut self, direction: i8) {
        if self.state.is_free() {
            self.set_state(locomotion_state(direction));
        }
    }

    fn start_roll(&mut self, cues: &mut CueBuffer) -> bool {
        if !self.state.can_roll() || self.timers.is_running(TimerKey::RollCooldown) {
            return false;
        }

        // Перекат прерывает блок
        if *self.state == ActionState::Blocking {
            self.stop_blocking(cues);
        }

        self.set_state(ActionState::Rolling);
        self.locomotion.roll_direction = self.locomotion.facing;
        self.timers.start(TimerKey::Roll, self.config.roll.duration);
        if self.config.roll.cooldown > 0.0 {
            self.timers
                .start(TimerKey::RollCooldown, self.config.roll.cooldown);
        }
        cues.trigger(AnimTrigger::Roll);
        true
    }

    fn start_attack(
        &mut self,
        variant: Option<u8>,
        cooldown_jitter: f32,
        cues: &mut CueBuffer,
    ) -> bool {
        if !self.state.is_free() || self.timers.is_running(TimerKey::AttackCooldown) {
            return false;
        }

        let config = self.config;
        let attack = &config.attack;
        let variant = variant.unwrap_or_else(|| {
            self.chain.advance(
                self.timers.is_running(TimerKey::ComboWindow),
                attack.combo_length,
            )
        });

        self.timers.start(
            TimerKey::AttackCooldown,
            attack.cooldown + cooldown_jitter.max(0.0),
        );
        if attack.combo_window > 0.0 {
            self.timers.start(TimerKey::ComboWindow, attack.combo_window);
        }

        // Hitbox открыт фиксированное окно, закрывается только по таймеру
        self.hitbox.open();
        self.timers.start(TimerKey::HitboxWindow, attack.hitbox_window);
        cues.push(Cue::Hitbox {
            region: HitboxRegion::Attack,
            enabled: true,
        });

        cues.trigger(AnimTrigger::Attack(variant));
        self.set_state(ActionState::Attacking);
        log(&format!("⚔️ {:?}: Attack{}", self.entity, variant));
        true
    }

    fn start_blocking(&mut self, cues: &mut CueBuffer) -> bool {
        // Без зарядов блок недоступен до восстановления
        if !self.state.is_free() || self.shield.is_depleted() {
            return false;
        }

        self.set_state(ActionState::Blocking);
        self.block.enabled = true;
        self.block.release_pending = false;

        let config = self.config;
        let block = &config.block;
        if block.min_duration > 0.0 || block.auto_release {
            self.timers.start(TimerKey::BlockMinimum, block.min_duration);
        }

        cues.trigger(AnimTrigger::Block);
        cues.anim(AnimCue::IdleBlock(true));
        cues.push(Cue::Hitbox {
            region: HitboxRegion::Block,
            enabled: true,
        });
        cues.push(Cue::Audio(SoundId::BlockRaise));
        true
    }

    /// Release до истечения BlockMinimum откладывается до него
    fn release_block(&mut self, cues: &mut CueBuffer) -> bool {
        if *self.state != ActionState::Blocking {
            return false;
        }

        if self.timers.is_running(TimerKey::BlockMinimum) {
            self.block.release_pending = true;
            return true;
        }

        self.stop_blocking(cues);
        true
    }
}

/// Система: один переход за тик по CombatIntent + пересчёт Idle/Moving
pub fn execute_combat_intents(mut combatants: Query<CombatantQuery>, mut cues: CueWriters) {
    for mut combatant in combatants.iter_mut() {
        let intent = *combatant.intent;
        let origin = combatant.origin();
        let mut buffer = CueBuffer::default();

        let mut core = combatant.core();
        if core.is_dead() {
            continue;
        }
        if let Some(request) = intent.action {
            core.request(request, &mut buffer);
        }
        core.settle_locomotion_state(intent.direction);

        cues.flush(combatant.entity, origin, &mut buffer);
    }
}
