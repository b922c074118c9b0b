//! Emberfall Simulation Core
//!
//! ECS-симуляция боя на Bevy 0.16: player и enemy на одном боевом ядре.
//!
//! Архитектура:
//! - Ядро = game state и правила (state machine, timer bank, ledger, locomotion)
//! - Decision source = player input или enemy policy, выход — `CombatIntent`
//! - Внешний слой (движок, рендер, звук) = cue events на выходе,
//!   ContactReport / DamageIntent на входе

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod ai;
pub mod ambient;
pub mod combat;
pub mod combatant;
pub mod components;
pub mod config;
pub mod cues;
pub mod logger;
pub mod movement;
pub mod player;
pub mod schedule;

// Re-export базовых типов для удобства
pub use ai::{AIPlugin, ChaseTarget, EnemyPolicy};
pub use ambient::{AmbientPlugin, VfxFinished, WindlineSettings, WindlineSpawner};
pub use combat::{
    ActionRequest, ActionState, CombatIntent, CombatPlugin, DamageDealt, DamageIntent,
    EntityDied, HitOutcome, TimerBank, TimerKey,
};
pub use combatant::{enemy_bundle, player_bundle};
pub use components::*;
pub use config::{CombatantConfig, ConfigError, SimulationSettings};
pub use cues::CuePlugin;
pub use logger::{
    init_logger, log, log_error, log_info, log_warning, set_log_level, set_logger, LogLevel,
    LogPrinter,
};
pub use movement::{ContactLost, ContactReport, HeadlessPhysicsPlugin, MovementPlugin};
pub use player::{Player, PlayerInput, PlayerPlugin};
pub use schedule::TickSet;

/// Главный plugin симуляции (объединяет все подсистемы)
///
/// Берёт `SimulationSettings` и `DeterministicRng` из мира, если они уже есть,
/// иначе ставит значения по умолчанию. Headless mover не включён:
/// его добавляет тот, кто не имеет своего движка.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let settings = app
            .world()
            .get_resource::<SimulationSettings>()
            .cloned()
            .unwrap_or_default();

        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(settings.seed));
        }

        app
            // Fixed timestep из настроек (60Hz по умолчанию)
            .insert_resource(Time::<Fixed>::from_duration(settings.tick_duration()))
            .insert_resource(settings);

        schedule::configure_tick_sets(app);

        app.add_plugins((
            CuePlugin,
            CombatPlugin,
            MovementPlugin,
            AIPlugin,
            PlayerPlugin,
            AmbientPlugin,
        ));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время ручное: каждый `app.update()` продвигает часы ровно на один fixed
/// шаг, так что один update = один тик (см. `run_ticks`).
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();

    let settings = SimulationSettings::new(seed);
    let step = settings.tick_duration();

    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(settings)
        .insert_resource(Time::<Fixed>::from_duration(step))
        .insert_resource(TimeUpdateStrategy::ManualDuration(step));

    app
}

/// Прогоняет `ticks` fixed тиков
///
/// Первый update после создания App только запускает часы (нулевой delta),
/// поэтому при незапущенных часах делаем его отдельно.
pub fn run_ticks(app: &mut App, ticks: u32) {
    let clock_started = app
        .world()
        .get_resource::<Time<Real>>()
        .is_some_and(|time| time.first_update().is_some());
    if !clock_started {
        app.update();
    }

    for _ in 0..ticks {
        app.update();
    }
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    // Собираем все компоненты в детерминированный формат
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Сериализуем в байты через Debug (простейший способ)
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
