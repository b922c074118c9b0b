//! Player control marker component
//!
//! Отмечает бойца, которым управляет игрок через `PlayerInput` (в отличие от policy).

use bevy::prelude::Component;

/// Marker component для player-controlled бойца
///
/// - AI systems фильтруют по `EnemyPolicy` (player его не имеет)
/// - Input systems используют `With<Player>`
/// - Windlines следуют за единственным `Player`
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;
