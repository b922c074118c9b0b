//! Общие helpers для integration тестов

#![allow(dead_code)]

use bevy::prelude::*;
use emberfall_simulation::ai::EnemyPolicy;
use emberfall_simulation::*;

/// Полный combat App (без headless физики: Transform стоит на месте)
pub fn create_combat_app(seed: u64) -> App {
    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin);
    app
}

/// Все события типа `E` за прогон (собираются в конце каждого тика)
#[derive(Resource)]
pub struct Collected<E: Event + Clone> {
    pub events: Vec<E>,
}

impl<E: Event + Clone> Default for Collected<E> {
    fn default() -> Self {
        Self { events: Vec::new() }
    }
}

fn collect<E: Event + Clone>(mut reader: EventReader<E>, mut collected: ResMut<Collected<E>>) {
    collected.events.extend(reader.read().cloned());
}

pub fn track<E: Event + Clone>(app: &mut App) {
    app.init_resource::<Collected<E>>()
        .add_systems(FixedUpdate, collect::<E>.after(TickSet::Cleanup));
}

pub fn collected<E: Event + Clone>(app: &App) -> Vec<E> {
    app.world().resource::<Collected<E>>().events.clone()
}

pub fn spawn_player(app: &mut App, x: f32) -> Entity {
    app.world_mut()
        .spawn(player_bundle(Vec2::new(x, 0.0), CombatantConfig::player()))
        .id()
}

pub fn spawn_enemy(app: &mut App, x: f32, target: Option<Entity>) -> Entity {
    app.world_mut()
        .spawn(enemy_bundle(
            Vec2::new(x, 0.0),
            CombatantConfig::enemy(),
            EnemyPolicy::default(),
            target,
        ))
        .id()
}

pub fn state(app: &App, entity: Entity) -> ActionState {
    *app.world()
        .get::<ActionState>(entity)
        .expect("entity has ActionState")
}

pub fn input(app: &mut App, player: Entity) -> Mut<'_, PlayerInput> {
    app.world_mut()
        .get_mut::<PlayerInput>(player)
        .expect("player has PlayerInput")
}

pub fn hit(app: &mut App, target: Entity, amount: u32) {
    app.world_mut()
        .send_event(DamageIntent::new(None, target, amount));
}
