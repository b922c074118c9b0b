//! Headless дуэль Emberfall
//!
//! Scripted player против enemy policy без рендера: headless физика,
//! фиксированный seed, сводка в лог.

use bevy::prelude::*;
use emberfall_simulation::ai::EnemyPolicy;
use emberfall_simulation::{
    create_headless_app, enemy_bundle, log_info, player_bundle, run_ticks, set_log_level,
    ActionState, CombatantConfig, DamageDealt, EntityDied, HeadlessPhysicsPlugin, Health,
    HitOutcome, LogLevel, Player, PlayerInput, ShieldCharges, SimulationPlugin, TickSet,
};

const SEED: u64 = 42;
const TICKS: u32 = 1800;
const REPORT_EVERY: u32 = 300;

/// Дистанция, с которой scripted player бьёт
const PLAYER_REACH: f32 = 1.4;

#[derive(Resource, Debug, Default)]
struct DuelStats {
    wounds: u32,
    absorbed: u32,
    shield_breaks: u32,
    deaths: u32,
}

/// Простой скрипт игрока: идти к врагу, бить, иногда блок и перекат
fn scripted_player(
    mut tick: Local<u32>,
    mut players: Query<(&Transform, &mut PlayerInput), With<Player>>,
    enemies: Query<&Transform, With<EnemyPolicy>>,
) {
    *tick += 1;

    let Ok((transform, mut input)) = players.single_mut() else {
        return;
    };

    let nearest = enemies
        .iter()
        .map(|enemy| enemy.translation.x - transform.translation.x)
        .min_by(|a, b| a.abs().total_cmp(&b.abs()));

    let Some(offset) = nearest else {
        *input = PlayerInput::default();
        return;
    };

    input.axis = if offset.abs() > PLAYER_REACH {
        offset.signum()
    } else {
        0.0
    };
    input.attack_pressed = offset.abs() <= PLAYER_REACH && *tick % 20 == 0;
    input.block_held = (*tick / 90) % 4 == 3;
    input.roll_pressed = *tick % 240 == 0;
}

fn collect_stats(
    mut stats: ResMut<DuelStats>,
    mut damage: EventReader<DamageDealt>,
    mut deaths: EventReader<EntityDied>,
) {
    for event in damage.read() {
        match event.outcome {
            HitOutcome::Absorbed { .. } => stats.absorbed += 1,
            HitOutcome::ShieldBroken => stats.shield_breaks += 1,
            HitOutcome::Wounded { .. } | HitOutcome::Killed => stats.wounds += 1,
            HitOutcome::Ignored(_) => {}
        }
    }
    stats.deaths += deaths.read().count() as u32;
}

fn report(world: &mut World, tick: u32) {
    let mut query = world.query::<(Entity, &ActionState, &Health, &ShieldCharges, &Transform)>();
    for (entity, state, health, shield, transform) in query.iter(world) {
        log_info(&format!(
            "📊 tick {}: {:?} {} HP {}/{} shield {}/{} x={:.2}",
            tick,
            entity,
            state.as_str(),
            health.current,
            health.max,
            shield.current,
            shield.max,
            transform.translation.x
        ));
    }
}

fn main() {
    let mut app = create_headless_app(SEED);
    set_log_level(LogLevel::Info);

    app.add_plugins((SimulationPlugin, HeadlessPhysicsPlugin))
        .init_resource::<DuelStats>()
        .add_systems(
            FixedUpdate,
            (
                scripted_player.before(TickSet::Decide).after(TickSet::Damage),
                collect_stats.in_set(TickSet::Cleanup),
            ),
        );

    let player = app
        .world_mut()
        .spawn(player_bundle(Vec2::new(-4.0, 0.0), CombatantConfig::player()))
        .id();
    app.world_mut().spawn(enemy_bundle(
        Vec2::new(4.0, 0.0),
        CombatantConfig::enemy(),
        EnemyPolicy::default(),
        Some(player),
    ));

    log_info(&format!("⚔️ Emberfall headless duel (seed: {})", SEED));

    let mut elapsed = 0;
    while elapsed < TICKS {
        run_ticks(&mut app, REPORT_EVERY);
        elapsed += REPORT_EVERY;
        report(app.world_mut(), elapsed);
    }

    let stats = app.world().resource::<DuelStats>();
    log_info(&format!(
        "🏁 Duel complete: {} wounds, {} absorbed, {} shield breaks, {} deaths",
        stats.wounds, stats.absorbed, stats.shield_breaks, stats.deaths
    ));
}
