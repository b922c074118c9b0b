//! Headless mover: простейшая физика без движка
//!
//! Гравитация + плоский пол на `floor_y`. Интегрирует PhysicsBody.velocity
//! в Transform и шлёт ContactReport / ContactLost, как это делал бы движок.
//! Kinematic тела (мёртвые) не двигаются.

use bevy::prelude::*;

use crate::components::{Locomotion, PhysicsBody};
use crate::schedule::TickSet;

use super::events::{ContactLost, ContactReport};

/// Параметры headless физики
#[derive(Resource, Debug, Clone, Copy)]
pub struct HeadlessPhysics {
    /// Ускорение свободного падения (m/s², отрицательное)
    pub gravity: f32,
    pub floor_y: f32,
}

impl Default for HeadlessPhysics {
    fn default() -> Self {
        Self {
            gravity: -20.0,
            floor_y: 0.0,
        }
    }
}

/// Система применения gravity к velocity (только в воздухе)
pub fn apply_gravity(
    physics: Res<HeadlessPhysics>,
    time: Res<Time>,
    mut query: Query<(&Locomotion, &mut PhysicsBody)>,
) {
    let delta = time.delta_secs();

    for (locomotion, mut body) in query.iter_mut() {
        if body.kinematic || locomotion.grounded {
            continue;
        }
        body.velocity.y += physics.gravity * delta;
    }
}

/// Система интеграции velocity → Transform + контакт с полом
pub fn integrate_bodies(
    physics: Res<HeadlessPhysics>,
    time: Res<Time>,
    mut query: Query<(Entity, &Locomotion, &mut PhysicsBody, &mut Transform)>,
    mut contacts: EventWriter<ContactReport>,
    mut lost: EventWriter<ContactLost>,
) {
    let delta = time.delta_secs();

    for (entity, locomotion, mut body, mut transform) in query.iter_mut() {
        if body.kinematic {
            continue;
        }

        transform.translation.x += body.velocity.x * delta;
        transform.translation.y += body.velocity.y * delta;

        if transform.translation.y <= physics.floor_y {
            transform.translation.y = physics.floor_y;
            if body.velocity.y < 0.0 {
                body.velocity.y = 0.0;
            }
            contacts.write(ContactReport {
                entity,
                normal: Vec2::Y,
            });
        } else if locomotion.grounded {
            lost.write(ContactLost { entity });
        }
    }
}

/// Plugin для headless mover'а
///
/// Системы в фазе `TickSet::Integrate`: после locomotion, до hitbox overlap.
pub struct HeadlessPhysicsPlugin;

impl Plugin for HeadlessPhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HeadlessPhysics>().add_systems(
            FixedUpdate,
            (apply_gravity, integrate_bodies)
                .chain()
                .in_set(TickSet::Integrate),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gravity_logic() {
        // Логика гравитации напрямую (без App schedule)
        let physics = HeadlessPhysics::default();
        let mut body = PhysicsBody::default();
        let delta = 1.0 / 60.0;

        body.velocity.y += physics.gravity * delta;

        // -20 * (1/60) ≈ -0.333
        assert!(body.velocity.y < -0.33);
        assert!(body.velocity.y > -0.34);
    }
}
