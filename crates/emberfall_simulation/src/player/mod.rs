//! Player domain: marker + input → intent

use bevy::prelude::*;

pub mod input;
pub mod player;

pub use input::{map_player_input, PlayerInput};
pub use player::Player;

use crate::schedule::TickSet;

/// Player Plugin
///
/// player_decisions в фазе `TickSet::Decide` (рядом с enemy policy).
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            input::player_decisions.in_set(TickSet::Decide),
        );
    }
}
