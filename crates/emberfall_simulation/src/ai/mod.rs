//! AI decision-making module
//!
//! Decision source врага: вероятностная policy по дистанции до цели
//! и случайным броскам каждый тик. Выход — `CombatIntent`, дальше общее ядро.

use bevy::prelude::*;

pub mod components;
pub mod roll;
pub mod systems;

// Re-export основных типов
pub use components::{ChaseTarget, EnemyPolicy};
pub use roll::{DecisionRoll, ScriptedRolls};
pub use systems::{decide, EnemyDecision, PolicyInput};

use crate::schedule::TickSet;

/// AI Plugin
///
/// Регистрирует enemy_decisions в фазе `TickSet::Decide` (после урона, до facing).
pub struct AIPlugin;

impl Plugin for AIPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            systems::enemy_decisions.in_set(TickSet::Decide),
        );
    }
}
