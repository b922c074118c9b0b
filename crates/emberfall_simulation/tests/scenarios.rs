//! Сценарии боя end-to-end: блок, shield break, смерть, перекат, погоня.

mod common;

use bevy::prelude::*;
use common::*;
use emberfall_simulation::combat::DespawnAfter;
use emberfall_simulation::*;

#[test]
fn test_blocking_player_absorbs_hit() {
    let mut app = create_combat_app(42);
    track::<DamageDealt>(&mut app);
    let player = spawn_player(&mut app, 0.0);

    input(&mut app, player).block_held = true;
    run_ticks(&mut app, 1);
    assert_eq!(state(&app, player), ActionState::Blocking);

    hit(&mut app, player, 1);
    run_ticks(&mut app, 1);

    assert_eq!(app.world().get::<Health>(player).expect("health").current, 5);
    assert_eq!(app.world().get::<ShieldCharges>(player).expect("shield").current, 2);
    assert_eq!(state(&app, player), ActionState::Blocking);
    assert_eq!(
        collected::<DamageDealt>(&app)[0].outcome,
        HitOutcome::Absorbed { remaining: 2 }
    );
}

#[test]
fn test_three_blocked_hits_stun_then_shield_recovers() {
    let mut app = create_combat_app(42);
    let player = spawn_player(&mut app, 0.0);

    input(&mut app, player).block_held = true;
    run_ticks(&mut app, 1);

    for _ in 0..3 {
        hit(&mut app, player, 1);
        run_ticks(&mut app, 1);
    }
    assert_eq!(state(&app, player), ActionState::Stunned);
    assert_eq!(app.world().get::<ShieldCharges>(player).expect("shield").current, 0);
    assert_eq!(app.world().get::<Health>(player).expect("health").current, 5);

    // Stun 1s: блок всё ещё зажат, но без зарядов он недоступен
    run_ticks(&mut app, 61);
    assert_eq!(state(&app, player), ActionState::Idle);

    // Восстановление 2s после stun: до этого заряды остаются 0
    run_ticks(&mut app, 110);
    assert_eq!(app.world().get::<ShieldCharges>(player).expect("shield").current, 0);

    run_ticks(&mut app, 15);
    assert_eq!(app.world().get::<ShieldCharges>(player).expect("shield").current, 3);
    assert_eq!(state(&app, player), ActionState::Blocking);
}

#[test]
fn test_last_hit_kills_once_and_enemy_despawns() {
    let mut app = create_combat_app(42);
    track::<EntityDied>(&mut app);
    track::<DamageDealt>(&mut app);

    let enemy = spawn_enemy(&mut app, 0.0, None);
    run_ticks(&mut app, 1);
    app.world_mut()
        .get_mut::<Health>(enemy)
        .expect("health")
        .current = 1;

    hit(&mut app, enemy, 1);
    run_ticks(&mut app, 1);

    assert_eq!(state(&app, enemy), ActionState::Dead);
    assert!(app.world().get::<DespawnAfter>(enemy).is_some());
    assert!(app.world().get::<PhysicsBody>(enemy).expect("body").kinematic);

    // Удары по мёртвому игнорируются
    hit(&mut app, enemy, 1);
    hit(&mut app, enemy, 3);
    run_ticks(&mut app, 1);

    assert_eq!(collected::<EntityDied>(&app).len(), 1);
    assert_eq!(collected::<DamageDealt>(&app).len(), 1);
    assert_eq!(app.world().get::<Health>(enemy).expect("health").current, 0);

    // despawn через 2s
    run_ticks(&mut app, 125);
    assert!(app.world().get_entity(enemy).is_err());
}

#[test]
fn test_dead_player_stays_in_world() {
    let mut app = create_combat_app(42);
    let player = spawn_player(&mut app, 0.0);

    hit(&mut app, player, 5);
    run_ticks(&mut app, 200);

    assert_eq!(state(&app, player), ActionState::Dead);
    assert!(app.world().get::<DespawnAfter>(player).is_none());

    // Input мёртвого игрока ничего не делает
    input(&mut app, player).axis = 1.0;
    input(&mut app, player).attack_pressed = true;
    run_ticks(&mut app, 1);
    assert_eq!(state(&app, player), ActionState::Dead);
    assert_eq!(app.world().get::<PhysicsBody>(player).expect("body").velocity, Vec2::ZERO);
}

#[test]
fn test_roll_overrides_velocity_and_reverts() {
    let mut app = create_combat_app(42);
    let player = spawn_player(&mut app, 0.0);

    {
        let mut input = input(&mut app, player);
        input.axis = -1.0;
        input.roll_pressed = true;
    }
    run_ticks(&mut app, 1);

    // Facing повернулся влево до переката → катимся влево
    assert_eq!(state(&app, player), ActionState::Rolling);
    let velocity = app.world().get::<PhysicsBody>(player).expect("body").velocity;
    assert_eq!(velocity.x, -6.0);

    // Разворот во время переката не меняет направление
    input(&mut app, player).axis = 1.0;
    run_ticks(&mut app, 10);
    let velocity = app.world().get::<PhysicsBody>(player).expect("body").velocity;
    assert_eq!(velocity.x, -6.0);

    run_ticks(&mut app, 30);
    assert_eq!(state(&app, player), ActionState::Moving);
    let velocity = app.world().get::<PhysicsBody>(player).expect("body").velocity;
    assert_eq!(velocity.x, 5.0);
}

#[test]
fn test_rolling_player_ignores_hits() {
    let mut app = create_combat_app(42);
    track::<DamageDealt>(&mut app);
    let player = spawn_player(&mut app, 0.0);

    input(&mut app, player).roll_pressed = true;
    run_ticks(&mut app, 1);

    hit(&mut app, player, 2);
    run_ticks(&mut app, 1);

    assert_eq!(app.world().get::<Health>(player).expect("health").current, 5);
    assert!(collected::<DamageDealt>(&app).is_empty());
}

#[test]
fn test_far_enemy_keeps_chasing_and_never_attacks() {
    let mut app = create_combat_app(42);
    let player = spawn_player(&mut app, 0.0);
    let enemy = spawn_enemy(&mut app, 20.0, Some(player));

    for _ in 0..300 {
        run_ticks(&mut app, 1);
        assert_eq!(state(&app, enemy), ActionState::Moving);

        let velocity = app.world().get::<PhysicsBody>(enemy).expect("body").velocity;
        assert_eq!(velocity.x, -3.0);
    }

    let locomotion = app.world().get::<Locomotion>(enemy).expect("locomotion");
    assert_eq!(locomotion.facing, Facing::Left);
}

#[test]
fn test_enemy_without_target_idles() {
    let mut app = create_combat_app(42);
    let enemy = spawn_enemy(&mut app, 0.0, None);

    run_ticks(&mut app, 120);

    assert_eq!(state(&app, enemy), ActionState::Idle);
    assert_eq!(*app.world().get::<CombatIntent>(enemy).expect("intent"), CombatIntent::idle());
}

#[test]
fn test_enemy_stops_after_target_dies() {
    let mut app = create_combat_app(42);
    let player = spawn_player(&mut app, 0.0);
    let enemy = spawn_enemy(&mut app, 20.0, Some(player));
    run_ticks(&mut app, 5);
    assert_eq!(state(&app, enemy), ActionState::Moving);

    hit(&mut app, player, 5);
    run_ticks(&mut app, 2);

    assert_eq!(state(&app, player), ActionState::Dead);
    assert_eq!(state(&app, enemy), ActionState::Idle);
}
