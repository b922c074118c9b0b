//! ECS Components бойца
//!
//! Организация по доменам:
//! - actor: идентичность и ресурсы (Combatant, Faction, Health, ShieldCharges)
//! - movement: facing, grounded, velocity (Locomotion, PhysicsBody)
//!
//! Боевые компоненты (ActionState, TimerBank, hitbox) — в `crate::combat`.

pub mod actor;
pub mod movement;

// Re-exports для удобного импорта
pub use actor::*;
pub use movement::*;
