//! Bundles для спавна бойцов.
//!
//! Остальное (ActionState, TimerBank, CombatIntent, hitbox, Locomotion,
//! PhysicsBody) приходит через Required Components `Combatant`.

use bevy::prelude::*;

use crate::ai::{ChaseTarget, EnemyPolicy};
use crate::components::{Combatant, Faction, Health, ShieldCharges};
use crate::config::CombatantConfig;
use crate::player::{Player, PlayerInput};

fn combatant_bundle(faction: Faction, position: Vec2, config: CombatantConfig) -> impl Bundle {
    (
        Combatant::new(faction),
        Transform::from_xyz(position.x, position.y, 0.0),
        Health::new(config.max_health),
        ShieldCharges::new(config.block.max_charges),
        config,
    )
}

/// Player: управляется `PlayerInput`
pub fn player_bundle(position: Vec2, config: CombatantConfig) -> impl Bundle {
    (
        combatant_bundle(Faction::Player, position, config),
        Player,
        PlayerInput::default(),
    )
}

/// Enemy: управляется `EnemyPolicy`, преследует `target`
pub fn enemy_bundle(
    position: Vec2,
    config: CombatantConfig,
    policy: EnemyPolicy,
    target: Option<Entity>,
) -> impl Bundle {
    (
        combatant_bundle(Faction::Enemy, position, config),
        policy,
        ChaseTarget(target),
    )
}
