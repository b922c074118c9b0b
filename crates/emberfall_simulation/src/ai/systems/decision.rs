//! Enemy decision source: policy → CombatIntent.

use bevy::prelude::*;

use crate::ai::{ChaseTarget, DecisionRoll, EnemyPolicy};
use crate::combat::{ActionRequest, ActionState, CombatIntent, JumpRequest, TimerBank, TimerKey};
use crate::components::{Facing, Locomotion, ShieldCharges};
use crate::config::CombatantConfig;
use crate::DeterministicRng;

/// Что видит policy на этом тике
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolicyInput {
    pub state: ActionState,
    /// Смещение до цели (None — цели нет или она мертва)
    pub target_offset: Option<Vec2>,
    pub grounded: bool,
    /// Есть заряды щита (при 0 блок недоступен)
    pub block_available: bool,
    pub attack_ready: bool,
    pub roll_ready: bool,
    pub jump_ready: bool,
    pub move_speed: f32,
}

/// Решение врага на тик (ровно одно)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnemyDecision {
    /// Перекат/блок/stun/смерть: ничего нового не запрашиваем
    Hold,
    /// Цели нет
    Idle,
    EnterBlock,
    /// Отскок прыжком от цели
    RetreatJump { velocity_x: f32 },
    Chase { direction: i8 },
    Attack { variant: u8, cooldown_jitter: f32 },
    Roll,
    /// В зоне атаки, но гейты не прошли
    HoldInRange,
}

impl EnemyDecision {
    pub fn into_intent(self, face: Option<Facing>) -> CombatIntent {
        let intent = CombatIntent::idle().with_face(face);
        match self {
            EnemyDecision::Hold | EnemyDecision::HoldInRange => intent,
            EnemyDecision::Idle => CombatIntent::idle(),
            EnemyDecision::EnterBlock => intent.with_action(ActionRequest::BlockStart),
            EnemyDecision::RetreatJump { velocity_x } => intent.with_jump(JumpRequest {
                horizontal: Some(velocity_x),
            }),
            EnemyDecision::Chase { direction } => CombatIntent::moving(direction).with_face(face),
            EnemyDecision::Attack {
                variant,
                cooldown_jitter,
            } => intent.with_action(ActionRequest::Attack {
                variant: Some(variant),
                cooldown_jitter,
            }),
            EnemyDecision::Roll => intent.with_action(ActionRequest::Roll),
        }
    }
}

/// Направление на цель; на нулевом смещении смотрим вправо
pub fn facing_toward(offset: f32) -> Facing {
    Facing::from_direction(offset).unwrap_or(Facing::Right)
}

/// Приоритет за тик:
/// блок (≈0.5%) → отскок (≈10%) → погоня, если далеко →
/// в зоне: атака (70% при готовом cooldown) → перекат (30%) → стоять.
///
/// Броски тянутся в том же порядке и только когда до них доходит проверка,
/// так что последовательность draw'ов воспроизводима.
pub fn decide(
    policy: &EnemyPolicy,
    input: &PolicyInput,
    roll: &mut impl DecisionRoll,
) -> EnemyDecision {
    if matches!(input.state, ActionState::Dead | ActionState::Stunned) {
        return EnemyDecision::Hold;
    }

    let Some(offset) = input.target_offset else {
        return EnemyDecision::Idle;
    };

    // Блок держится до auto-release, перекат — до конца
    if matches!(input.state, ActionState::Blocking | ActionState::Rolling) {
        return EnemyDecision::Hold;
    }

    // Дистанция — по прямой, направление — только по x
    let distance = offset.length();
    let toward = facing_toward(offset.x);
    let engage = policy.engage_range();

    if input.block_available && roll.chance(policy.block_chance) && distance < engage {
        return EnemyDecision::EnterBlock;
    }

    if distance < engage
        && input.grounded
        && input.jump_ready
        && roll.chance(policy.retreat_jump_chance)
    {
        return EnemyDecision::RetreatJump {
            velocity_x: -toward.sign() * input.move_speed * policy.retreat_speed_factor,
        };
    }

    if distance > policy.attack_range {
        return EnemyDecision::Chase {
            direction: toward.sign() as i8,
        };
    }

    if input.attack_ready && roll.chance(policy.attack_chance) {
        let variant = 1 + roll.pick(policy.attack_variants);
        let cooldown_jitter = roll.range(0.0, policy.attack_cooldown_jitter);
        return EnemyDecision::Attack {
            variant,
            cooldown_jitter,
        };
    }

    if input.roll_ready && roll.chance(policy.roll_chance) {
        return EnemyDecision::Roll;
    }

    EnemyDecision::HoldInRange
}

/// Система: решения всех врагов (общий DeterministicRng, порядок query стабилен)
pub fn enemy_decisions(
    mut rng: ResMut<DeterministicRng>,
    mut enemies: Query<(
        &EnemyPolicy,
        &ChaseTarget,
        &Transform,
        &ActionState,
        &TimerBank,
        &ShieldCharges,
        &Locomotion,
        &CombatantConfig,
        &mut CombatIntent,
    )>,
    targets: Query<(&Transform, &ActionState)>,
) {
    for (policy, chase, transform, state, timers, shield, locomotion, config, mut intent) in
        enemies.iter_mut()
    {
        let target_offset = chase
            .0
            .and_then(|target| targets.get(target).ok())
            .filter(|(_, target_state)| !target_state.is_dead())
            .map(|(target_transform, _)| {
                (target_transform.translation - transform.translation).truncate()
            });

        let input = PolicyInput {
            state: *state,
            target_offset,
            grounded: locomotion.grounded,
            block_available: !shield.is_depleted(),
            attack_ready: timers.is_ready(TimerKey::AttackCooldown),
            roll_ready: timers.is_ready(TimerKey::RollCooldown),
            jump_ready: timers.is_ready(TimerKey::JumpCooldown),
            move_speed: config.locomotion.move_speed,
        };

        let decision = decide(policy, &input, &mut *rng);

        let face = match (decision, target_offset) {
            (EnemyDecision::Idle, _) | (_, None) => None,
            (_, Some(offset)) => Some(facing_toward(offset.x)),
        };
        *intent = decision.into_intent(face);
    }
}
