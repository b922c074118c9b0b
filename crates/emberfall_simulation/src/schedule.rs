//! Порядок фаз одного FixedUpdate тика.
//!
//! Все подсистемы кладут свои системы в `TickSet`, `SimulationPlugin`
//! выстраивает фазы в `.chain()`.

use bevy::prelude::*;

/// Фазы тика (в порядке выполнения)
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickSet {
    /// ContactReport / ContactLost → grounded
    Contacts,
    /// Timer bank tick + эффекты истечения
    Timers,
    /// DamageIntent → ledger
    Damage,
    /// Decision sources → CombatIntent
    Decide,
    Facing,
    /// Один переход state machine + Idle/Moving
    Act,
    /// Intent → velocity, прыжок
    Locomote,
    /// Внешний mover (headless physics)
    Integrate,
    /// Hitbox overlap → DamageIntent на следующий тик
    Overlap,
    /// Деспавн после смерти, ambient
    Cleanup,
}

pub fn configure_tick_sets(app: &mut App) {
    app.configure_sets(
        FixedUpdate,
        (
            TickSet::Contacts,
            TickSet::Timers,
            TickSet::Damage,
            TickSet::Decide,
            TickSet::Facing,
            TickSet::Act,
            TickSet::Locomote,
            TickSet::Integrate,
            TickSet::Overlap,
            TickSet::Cleanup,
        )
            .chain(),
    );
}
