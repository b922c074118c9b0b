//! Movement events: контакты от внешнего mover'а.

use bevy::prelude::*;

/// Event: тело касается поверхности (каждый тик контакта)
///
/// normal — нормаль контакта; grounded только если normal.y > 0.5.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ContactReport {
    pub entity: Entity,
    pub normal: Vec2,
}

/// Event: контакт с поверхностью потерян
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ContactLost {
    pub entity: Entity,
}

/// Порог нормали для "стоит на земле"
pub const GROUND_NORMAL_THRESHOLD: f32 = 0.5;

impl ContactReport {
    pub fn is_ground(&self) -> bool {
        self.normal.y > GROUND_NORMAL_THRESHOLD
    }
}
