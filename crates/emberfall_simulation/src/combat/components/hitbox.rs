//! Зоны удара и блока.

use bevy::prelude::*;

/// Runtime-состояние attack hitbox
///
/// Геометрия (offset/radius) и урон — в `CombatantConfig::attack`.
/// `hit_entities` — кого уже задели этим взмахом (один удар по цели за взмах).
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct AttackHitbox {
    pub enabled: bool,
    pub hit_entities: Vec<Entity>,
}

impl AttackHitbox {
    /// Новый взмах: включаем и чистим список попаданий
    pub fn open(&mut self) {
        self.enabled = true;
        self.hit_entities.clear();
    }

    /// Возвращает true, если hitbox был включён
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.enabled, false)
    }

    /// false — цель уже получила удар этим взмахом
    pub fn register_hit(&mut self, target: Entity) -> bool {
        if self.hit_entities.contains(&target) {
            return false;
        }
        self.hit_entities.push(target);
        true
    }
}

/// Зона блока: включена только в ActionState::Blocking
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct BlockRegion {
    pub enabled: bool,
    /// Release пришёл раньше BlockMinimum — выйти, когда таймер истечёт
    pub release_pending: bool,
}

/// Комбо-цепочка атак (Attack1 → Attack2 → … → AttackN → Attack1)
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct AttackChain {
    pub step: u8,
}

impl AttackChain {
    /// Следующий вариант атаки; `window_open` — ComboWindow ещё идёт
    pub fn advance(&mut self, window_open: bool, length: u8) -> u8 {
        if !window_open || self.step >= length.max(1) {
            self.step = 1;
        } else {
            self.step += 1;
        }
        self.step
    }
}
