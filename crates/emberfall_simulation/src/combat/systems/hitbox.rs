//! Attack hitbox overlap check.

use bevy::prelude::*;

use crate::combat::{ActionState, AttackHitbox, DamageIntent};
use crate::components::{Combatant, Locomotion};
use crate::config::CombatantConfig;
use crate::cues::{Cue, CueBuffer, CueWriters, VfxEffect};
use crate::logger::log;

use super::damage::IMPACT_VFX_OFFSET;

/// Система: открытые attack hitbox → DamageIntent (применяется в следующем тике)
///
/// Правила:
/// - только противоположная фракция, мёртвые не цели
/// - одна цель получает не больше одного удара за взмах
/// - нет формы hitbox / нулевой радиус / нулевой урон → урона нет
pub fn detect_hitbox_overlaps(
    mut attackers: Query<(
        Entity,
        &Combatant,
        &CombatantConfig,
        &Transform,
        &Locomotion,
        &mut AttackHitbox,
    )>,
    targets: Query<(Entity, &Combatant, &Transform, &ActionState)>,
    mut damage_intents: EventWriter<DamageIntent>,
    mut cues: CueWriters,
) {
    for (attacker, combatant, config, transform, locomotion, mut hitbox) in attackers.iter_mut() {
        if !hitbox.enabled {
            continue;
        }
        let Some(shape) = config.attack.hitbox else {
            continue;
        };
        if shape.radius <= 0.0 || config.attack.damage == 0 {
            continue;
        }

        let origin = transform.translation.truncate();
        let center = shape.center(origin, locomotion.facing);

        for (target, target_combatant, target_transform, target_state) in targets.iter() {
            if target == attacker
                || !combatant.is_hostile_to(target_combatant)
                || target_state.is_dead()
            {
                continue;
            }

            let distance = center.distance(target_transform.translation.truncate());
            if distance > shape.radius || !hitbox.register_hit(target) {
                continue;
            }

            damage_intents.write(DamageIntent::new(
                Some(attacker),
                target,
                config.attack.damage,
            ));
            log(&format!("🎯 {:?} попал по {:?}", attacker, target));

            if config.attack.impact_vfx {
                let mut buffer = CueBuffer::default();
                buffer.push(Cue::Vfx {
                    effect: VfxEffect::HitImpact,
                    offset: IMPACT_VFX_OFFSET,
                });
                cues.flush(attacker, origin, &mut buffer);
            }
        }
    }
}
