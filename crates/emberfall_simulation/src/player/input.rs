//! Player decision source: сырой input → CombatIntent.

use bevy::prelude::*;

use crate::combat::{ActionRequest, ActionState, CombatIntent, JumpRequest};
use crate::components::Facing;

use super::Player;

/// Ось ниже порога считается нулём
pub const AXIS_DEADZONE: f32 = f32::EPSILON;

/// Сырой input игрока за тик
///
/// `block_held` — уровень (зажата кнопка), остальные кнопки — фронты нажатия:
/// они сбрасываются после того, как тик их прочитал.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerInput {
    /// Горизонтальная ось [-1, 1]
    pub axis: f32,
    pub block_held: bool,
    pub attack_pressed: bool,
    pub roll_pressed: bool,
    pub jump_pressed: bool,
}

impl PlayerInput {
    pub fn clear_edges(&mut self) {
        self.attack_pressed = false;
        self.roll_pressed = false;
        self.jump_pressed = false;
    }
}

/// Input → intent
///
/// Приоритет действия: roll > attack > блок (start при зажатой кнопке
/// из Idle/Moving, release при отпущенной в Blocking). Прыжок независим.
pub fn map_player_input(input: &PlayerInput, state: ActionState) -> CombatIntent {
    if state.is_dead() {
        return CombatIntent::idle();
    }

    let direction: i8 = if input.axis > AXIS_DEADZONE {
        1
    } else if input.axis < -AXIS_DEADZONE {
        -1
    } else {
        0
    };

    let action = if input.roll_pressed {
        Some(ActionRequest::Roll)
    } else if input.attack_pressed {
        Some(ActionRequest::attack())
    } else if input.block_held && state.is_free() {
        Some(ActionRequest::BlockStart)
    } else if !input.block_held && state == ActionState::Blocking {
        Some(ActionRequest::BlockRelease)
    } else {
        None
    };

    CombatIntent {
        direction,
        face: Facing::from_direction(f32::from(direction)),
        action,
        jump: input.jump_pressed.then_some(JumpRequest::default()),
    }
}

/// Система: PlayerInput → CombatIntent (фронты сбрасываются)
pub fn player_decisions(
    mut players: Query<(&mut PlayerInput, &ActionState, &mut CombatIntent), With<Player>>,
) {
    for (mut input, state, mut intent) in players.iter_mut() {
        *intent = map_player_input(&input, *state);
        input.clear_edges();
    }
}
