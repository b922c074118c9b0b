//! Ambient windlines вокруг игрока.
//!
//! Spawner следует за `Player` и раз в `interval` секунд просит внешний слой
//! показать windline VFX над игроком. Живых эффектов не больше `max_active`;
//! слот освобождает `VfxFinished` или fallback lifetime.

use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::config::{check_non_negative, check_positive, ConfigError, SimulationSettings};
use crate::cues::{CueWriters, VfxEffect};
use crate::logger::{log, log_warning};
use crate::player::Player;
use crate::schedule::TickSet;

/// Сдвиг seed'а windlines относительно seed'а симуляции (отдельный поток RNG)
const WINDLINE_SEED_SALT: u64 = 0x57_49_4E_44;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindlineSettings {
    pub interval: f32,
    pub radius: f32,
    pub max_active: usize,
    /// Количество вариантов эффекта (0 — спавнить нечего)
    pub variants: u8,
    /// Сколько живёт эффект, если внешний слой не прислал VfxFinished
    pub fallback_lifetime: f32,
}

impl Default for WindlineSettings {
    fn default() -> Self {
        Self {
            interval: 3.0,
            radius: 8.0,
            max_active: 10,
            variants: 3,
            fallback_lifetime: 5.0,
        }
    }
}

impl WindlineSettings {
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        let settings: Self = ron::from_str(source)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("interval", self.interval)?;
        check_non_negative("radius", self.radius)?;
        check_positive("fallback_lifetime", self.fallback_lifetime)?;
        Ok(())
    }
}

/// Внешний слой сообщает, что windline `id` отыграл
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct VfxFinished {
    pub id: u64,
}

/// Запрос на спавн одного windline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindlineSpawn {
    pub id: u64,
    pub variant: u8,
    pub position: Vec2,
}

#[derive(Debug, Clone, Copy)]
struct ActiveWindline {
    id: u64,
    remaining: f32,
}

#[derive(Resource, Debug)]
pub struct WindlineSpawner {
    pub settings: WindlineSettings,
    rng: ChaCha8Rng,
    timer: f32,
    active: Vec<ActiveWindline>,
    next_id: u64,
}

impl WindlineSpawner {
    pub fn new(settings: WindlineSettings, seed: u64) -> Self {
        Self {
            settings,
            rng: ChaCha8Rng::seed_from_u64(seed ^ WINDLINE_SEED_SALT),
            timer: 0.0,
            active: Vec::new(),
            next_id: 0,
        }
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Освобождает слот; false — такого эффекта нет (уже истёк)
    pub fn finish(&mut self, id: u64) -> bool {
        let before = self.active.len();
        self.active.retain(|windline| windline.id != id);
        self.active.len() != before
    }

    /// Один тик рядом с игроком в `anchor`
    ///
    /// Таймер копится и при заполненных слотах: спавн случится сразу,
    /// как только слот освободится. Сбрасывается только попыткой спавна.
    pub fn tick(&mut self, dt: f32, anchor: Vec2) -> Option<WindlineSpawn> {
        for windline in &mut self.active {
            windline.remaining -= dt;
        }
        self.active.retain(|windline| windline.remaining > 0.0);

        self.timer += dt;
        if self.timer < self.settings.interval || self.active.len() >= self.settings.max_active
        {
            return None;
        }
        self.timer = 0.0;

        if self.settings.variants == 0 {
            log_warning("⚠️ Windlines: нет вариантов эффекта, пропускаем");
            return None;
        }

        let angle = self.rng.gen_range(0.0..TAU);
        let offset = Vec2::new(angle.cos(), angle.sin().abs()) * self.settings.radius;
        let variant = self.rng.gen_range(0..self.settings.variants);

        let id = self.next_id;
        self.next_id += 1;
        self.active.push(ActiveWindline {
            id,
            remaining: self.settings.fallback_lifetime,
        });

        Some(WindlineSpawn {
            id,
            variant,
            position: anchor + offset,
        })
    }
}

/// Система: windlines вокруг игрока (нет игрока — ничего не делаем)
pub fn spawn_windlines(
    time: Res<Time>,
    mut spawner: ResMut<WindlineSpawner>,
    mut finished: EventReader<VfxFinished>,
    players: Query<&Transform, With<Player>>,
    mut cues: CueWriters,
) {
    for event in finished.read() {
        spawner.finish(event.id);
    }

    let Ok(player) = players.single() else {
        return;
    };

    if let Some(spawn) = spawner.tick(time.delta_secs(), player.translation.truncate()) {
        log(&format!(
            "🌬️ Windline #{} (variant {}) at {:?}",
            spawn.id, spawn.variant, spawn.position
        ));
        cues.vfx_at(
            VfxEffect::Windline {
                variant: spawn.variant,
                id: spawn.id,
            },
            spawn.position,
        );
    }
}

/// Ambient Plugin
///
/// Spawner сидится от `SimulationSettings::seed`, если ресурса ещё нет.
pub struct AmbientPlugin;

impl Plugin for AmbientPlugin {
    fn build(&self, app: &mut App) {
        let seed = app
            .world()
            .get_resource::<SimulationSettings>()
            .map(|settings| settings.seed)
            .unwrap_or_default();

        if !app.world().contains_resource::<WindlineSpawner>() {
            app.insert_resource(WindlineSpawner::new(WindlineSettings::default(), seed));
        }

        app.add_event::<VfxFinished>().add_systems(
            FixedUpdate,
            spawn_windlines.in_set(TickSet::Cleanup),
        );
    }
}
