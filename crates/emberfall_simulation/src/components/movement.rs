//! Movement компоненты: facing, grounded, скорость тела

use bevy::prelude::*;

/// Направление взгляда (±1 по x)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    /// Facing по знаку направления; 0 — без изменения
    pub fn from_direction(direction: f32) -> Option<Self> {
        if direction > 0.0 {
            Some(Facing::Right)
        } else if direction < 0.0 {
            Some(Facing::Left)
        } else {
            None
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }
}

/// Состояние локомоции бойца
///
/// Facing меняется дискретно (flip), roll_direction фиксируется на старте переката.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Locomotion {
    pub facing: Facing,
    pub grounded: bool,
    pub roll_direction: Facing,
    /// Последний отправленный AnimState (1 — движение)
    pub anim_moving: bool,
    /// Последний отправленный AirSpeedY
    pub reported_air_speed: f32,
}

/// Тело для внешнего mover'а: Locomotion пишет velocity, mover интегрирует
///
/// `kinematic` — mover больше не двигает тело (после смерти).
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct PhysicsBody {
    pub velocity: Vec2,
    pub kinematic: bool,
}

impl PhysicsBody {
    pub fn stop(&mut self) {
        self.velocity = Vec2::ZERO;
    }
}
