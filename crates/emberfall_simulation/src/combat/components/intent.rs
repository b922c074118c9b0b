//! CombatIntent: единый выход decision source (player input или enemy policy).

use bevy::prelude::*;

use crate::components::Facing;

/// Намерение бойца на текущий тик
///
/// Decision source перезаписывает его целиком каждый тик.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct CombatIntent {
    /// Горизонтальное направление: -1, 0, +1
    pub direction: i8,
    /// Желаемый facing (None — не трогать)
    pub face: Option<Facing>,
    /// Не больше одного действия за тик
    pub action: Option<ActionRequest>,
    pub jump: Option<JumpRequest>,
}

impl CombatIntent {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn moving(direction: i8) -> Self {
        Self {
            direction: direction.signum(),
            ..Default::default()
        }
    }

    pub fn with_face(mut self, face: Option<Facing>) -> Self {
        self.face = face;
        self
    }

    pub fn with_action(mut self, action: ActionRequest) -> Self {
        self.action = Some(action);
        self
    }

    pub fn with_jump(mut self, jump: JumpRequest) -> Self {
        self.jump = Some(jump);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActionRequest {
    /// variant: None — следующий шаг комбо-цепочки;
    /// cooldown_jitter добавляется к базовому cooldown атаки
    Attack {
        variant: Option<u8>,
        cooldown_jitter: f32,
    },
    Roll,
    BlockStart,
    BlockRelease,
}

impl ActionRequest {
    pub fn attack() -> Self {
        ActionRequest::Attack {
            variant: None,
            cooldown_jitter: 0.0,
        }
    }
}

/// Прыжок; horizontal — скорость по x на момент отрыва (отскок врага)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JumpRequest {
    pub horizontal: Option<f32>,
}
