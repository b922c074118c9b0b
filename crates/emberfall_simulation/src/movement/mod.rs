//! Movement domain — локомоция бойца
//!
//! Содержит:
//! - ContactReport / ContactLost (вход от внешнего mover'а)
//! - locomotion: grounded, facing, velocity + прыжок (методы `CombatCore`)
//! - headless: HeadlessPhysicsPlugin (гравитация + пол, без движка)

use bevy::prelude::*;

pub mod events;
pub mod headless;
pub mod locomotion;


pub use events::*;
pub use headless::{HeadlessPhysics, HeadlessPhysicsPlugin};

use crate::schedule::TickSet;

/// Movement Plugin
///
/// Порядок выполнения (фазы `TickSet`):
/// 1. Contacts — apply_contact_reports (grounded)
/// 2. Facing — update_facing
/// 3. Locomote — drive_locomotion (velocity, прыжок, AnimState/AirSpeedY)
pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ContactReport>().add_event::<ContactLost>();

        app.add_systems(
            FixedUpdate,
            (
                locomotion::apply_contact_reports.in_set(TickSet::Contacts),
                locomotion::update_facing.in_set(TickSet::Facing),
                locomotion::drive_locomotion.in_set(TickSet::Locomote),
            ),
        );
    }
}
