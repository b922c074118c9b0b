//! Базовые компоненты бойца: Combatant, Faction, Health, ShieldCharges

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Боец (player или enemy) — общее ядро боевой логики
///
/// Через Required Components получает state machine, timer bank, intent,
/// locomotion и hitbox. Health/ShieldCharges/CombatantConfig задаются при спавне
/// (зависят от тюнинга).
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
#[require(
    crate::combat::ActionState,
    crate::combat::TimerBank,
    crate::combat::CombatIntent,
    crate::combat::AttackHitbox,
    crate::combat::AttackChain,
    crate::combat::BlockRegion,
    crate::components::Locomotion,
    crate::components::PhysicsBody,
    Transform
)]
pub struct Combatant {
    pub faction: Faction,
}

impl Combatant {
    pub fn new(faction: Faction) -> Self {
        Self { faction }
    }

    pub fn is_hostile_to(&self, other: &Combatant) -> bool {
        self.faction != other.faction
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum Faction {
    Player,
    Enemy,
}

/// Здоровье бойца
///
/// Инвариант: 0 ≤ current ≤ max. Вне явного спавна только убывает.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

impl Health {
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    /// Возвращает реально снятое количество (saturating)
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let applied = amount.min(self.current);
        self.current -= applied;
        applied
    }
}

/// Заряды щита: сколько ударов блок ещё поглотит
///
/// Инвариант: 0 ≤ current ≤ max. При 0 блок недоступен до восстановления.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct ShieldCharges {
    pub current: u32,
    pub max: u32,
}

impl ShieldCharges {
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }

    /// Поглощает один удар, возвращает оставшиеся заряды
    pub fn absorb(&mut self) -> u32 {
        self.current = self.current.saturating_sub(1);
        self.current
    }

    /// Восстановление до максимума (по истечении ShieldRecovery)
    pub fn restore(&mut self) {
        self.current = self.max;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_damage() {
        let mut health = Health::new(5);
        assert_eq!(health.current, 5);

        assert_eq!(health.take_damage(2), 2);
        assert_eq!(health.current, 3);
        assert!(health.is_alive());

        // Saturating: снимается только то, что осталось
        assert_eq!(health.take_damage(10), 3);
        assert_eq!(health.current, 0);
        assert!(!health.is_alive());

        assert_eq!(health.take_damage(1), 0);
        assert_eq!(health.current, 0);
    }

    #[test]
    fn test_shield_absorb_and_restore() {
        let mut shield = ShieldCharges::new(3);

        assert_eq!(shield.absorb(), 2);
        assert_eq!(shield.absorb(), 1);
        assert_eq!(shield.absorb(), 0);
        assert!(shield.is_depleted());

        // Ниже нуля не уходит
        assert_eq!(shield.absorb(), 0);

        shield.restore();
        assert_eq!(shield.current, 3);
        assert!(!shield.is_depleted());
    }

    #[test]
    fn test_factions_hostility() {
        let player = Combatant::new(Faction::Player);
        let enemy = Combatant::new(Faction::Enemy);

        assert!(player.is_hostile_to(&enemy));
        assert!(!enemy.is_hostile_to(&Combatant::new(Faction::Enemy)));
    }
}
