//! Locomotion: intent → горизонтальная скорость, прыжок, facing, grounded.

use bevy::prelude::*;

use crate::combat::{ActionState, CombatIntent, JumpRequest, TimerKey};
use crate::combatant::{CombatCore, CombatantQuery};
use crate::components::Locomotion;
use crate::cues::{AnimCue, AnimTrigger, CueBuffer, CueWriters};
use crate::logger::log;

use super::events::{ContactLost, ContactReport};

/// Изменение AirSpeedY меньше порога не репортится
const AIR_SPEED_EPSILON: f32 = 1e-3;

impl CombatCore<'_> {
    /// Скорость на тик по состоянию и intent
    ///
    /// - Blocking/Stunned/Dead: горизонталь 0
    /// - Rolling: импульс переката в roll_direction весь перекат
    /// - иначе: direction × move_speed
    pub fn drive_locomotion(&mut self, intent: &CombatIntent, cues: &mut CueBuffer) {
        if self.is_dead() {
            self.body.stop();
            return;
        }

        let state = *self.state;
        self.body.velocity.x = if state.locks_horizontal() {
            0.0
        } else if state == ActionState::Rolling {
            self.locomotion.roll_direction.sign() * self.config.roll.force
        } else {
            f32::from(intent.direction) * self.config.locomotion.move_speed
        };

        if let Some(jump) = intent.jump {
            self.try_jump(jump, cues);
        }

        self.update_anim_state(intent.direction, cues);
        self.report_air_speed(cues);
    }

    /// Прыжок: только с земли, по готовому JumpCooldown, не в перекате/блоке/stun
    pub fn try_jump(&mut self, jump: JumpRequest, cues: &mut CueBuffer) -> bool {
        let blocked_by_state = matches!(
            *self.state,
            ActionState::Rolling | ActionState::Blocking | ActionState::Stunned | ActionState::Dead
        );
        if !self.locomotion.grounded
            || blocked_by_state
            || self.timers.is_running(TimerKey::JumpCooldown)
        {
            return false;
        }

        self.body.velocity.y = self.config.locomotion.jump_force;
        if let Some(horizontal) = jump.horizontal {
            self.body.velocity.x = horizontal;
        }

        self.locomotion.grounded = false;
        cues.anim(AnimCue::Grounded(false));
        cues.trigger(AnimTrigger::Jump);

        let cooldown = self.config.locomotion.jump_cooldown;
        if cooldown > 0.0 {
            self.timers.start(TimerKey::JumpCooldown, cooldown);
        }

        log(&format!("🦘 {:?}: прыжок", self.entity));
        true
    }

    /// AnimState 1 пока есть направление; 0 — после idle_anim_delay без него
    fn update_anim_state(&mut self, direction: i8, cues: &mut CueBuffer) {
        let can_move = !self.state.locks_horizontal();

        let moving = if direction != 0 && can_move {
            self.timers.start(
                TimerKey::IdleAnimDelay,
                self.config.locomotion.idle_anim_delay,
            );
            true
        } else {
            can_move && self.timers.is_running(TimerKey::IdleAnimDelay)
        };

        if moving != self.locomotion.anim_moving {
            self.locomotion.anim_moving = moving;
            cues.anim(AnimCue::AnimState(u8::from(moving)));
        }
    }

    fn report_air_speed(&mut self, cues: &mut CueBuffer) {
        let air_speed = self.body.velocity.y;
        if (air_speed - self.locomotion.reported_air_speed).abs() > AIR_SPEED_EPSILON {
            self.locomotion.reported_air_speed = air_speed;
            cues.anim(AnimCue::AirSpeedY(air_speed));
        }
    }
}

/// Обновляет grounded; возвращает true, если значение изменилось
pub fn set_grounded(locomotion: &mut Locomotion, grounded: bool) -> bool {
    if locomotion.grounded == grounded {
        return false;
    }
    locomotion.grounded = grounded;
    true
}

/// Система: ContactReport / ContactLost → grounded (+ Grounded cue при смене)
///
/// Сначала потери, потом касания: касание в том же тике побеждает.
pub fn apply_contact_reports(
    mut reports: EventReader<ContactReport>,
    mut lost: EventReader<ContactLost>,
    mut bodies: Query<&mut Locomotion>,
    mut cues: CueWriters,
) {
    for event in lost.read() {
        if let Ok(mut locomotion) = bodies.get_mut(event.entity) {
            if set_grounded(&mut locomotion, false) {
                cues.anim(event.entity, AnimCue::Grounded(false));
            }
        }
    }

    for report in reports.read() {
        if !report.is_ground() {
            continue;
        }
        if let Ok(mut locomotion) = bodies.get_mut(report.entity) {
            if set_grounded(&mut locomotion, true) {
                cues.anim(report.entity, AnimCue::Grounded(true));
            }
        }
    }
}

/// Система: facing из intent (flip дискретный; Dead и Stunned не поворачиваются)
pub fn update_facing(mut query: Query<(&CombatIntent, &ActionState, &mut Locomotion)>) {
    for (intent, state, mut locomotion) in query.iter_mut() {
        if state.is_dead() || *state == ActionState::Stunned {
            continue;
        }
        if let Some(face) = intent.face {
            if locomotion.facing != face {
                locomotion.facing = face;
            }
        }
    }
}

/// Система: velocity + прыжок по состоянию после перехода
pub fn drive_locomotion(mut combatants: Query<CombatantQuery>, mut cues: CueWriters) {
    for mut combatant in combatants.iter_mut() {
        let intent = *combatant.intent;
        let origin = combatant.origin();
        let mut buffer = CueBuffer::default();

        combatant.core().drive_locomotion(&intent, &mut buffer);

        if !buffer.is_empty() {
            cues.flush(combatant.entity, origin, &mut buffer);
        }
    }
}
