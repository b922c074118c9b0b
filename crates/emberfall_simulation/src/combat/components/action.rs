//! Action State Machine: текущее действие бойца.

use bevy::prelude::*;

/// Состояние бойца
///
/// Прыжок — не состояние: это `Locomotion::grounded == false`.
/// Dead — терминальное.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
#[reflect(Component)]
pub enum ActionState {
    #[default]
    Idle,
    Moving,
    Rolling,
    Attacking,
    Blocking,
    Stunned,
    Dead,
}

impl ActionState {
    pub fn is_dead(self) -> bool {
        self == ActionState::Dead
    }

    /// Idle/Moving: свободен для атаки и блока
    pub fn is_free(self) -> bool {
        matches!(self, ActionState::Idle | ActionState::Moving)
    }

    /// Перекат: из любого состояния, кроме Dead/Stunned и уже идущего переката
    pub fn can_roll(self) -> bool {
        !matches!(
            self,
            ActionState::Dead | ActionState::Stunned | ActionState::Rolling
        )
    }

    /// Горизонтальная скорость принудительно 0
    pub fn locks_horizontal(self) -> bool {
        matches!(
            self,
            ActionState::Blocking | ActionState::Stunned | ActionState::Dead
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActionState::Idle => "Idle",
            ActionState::Moving => "Moving",
            ActionState::Rolling => "Rolling",
            ActionState::Attacking => "Attacking",
            ActionState::Blocking => "Blocking",
            ActionState::Stunned => "Stunned",
            ActionState::Dead => "Dead",
        }
    }
}

/// Idle/Moving из направления intent
pub fn locomotion_state(direction: i8) -> ActionState {
    if direction != 0 {
        ActionState::Moving
    } else {
        ActionState::Idle
    }
}
