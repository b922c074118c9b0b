//! Test rig: боец без ECS, те же правила `CombatCore`.

use bevy::prelude::Entity;

use crate::combat::{
    ActionRequest, ActionState, AttackChain, AttackHitbox, BlockRegion, CombatIntent,
    ExpiredTimers, HitOutcome, TimerBank,
};
use crate::components::{Health, Locomotion, PhysicsBody, ShieldCharges};
use crate::config::CombatantConfig;
use crate::cues::CueBuffer;

use super::CombatCore;

/// Фиксированный шаг для unit тестов (60Hz)
pub const DT: f32 = 1.0 / 60.0;

pub struct Rig {
    pub entity: Entity,
    pub config: CombatantConfig,
    pub state: ActionState,
    pub timers: TimerBank,
    pub health: Health,
    pub shield: ShieldCharges,
    pub hitbox: AttackHitbox,
    pub block: BlockRegion,
    pub chain: AttackChain,
    pub locomotion: Locomotion,
    pub body: PhysicsBody,
    /// Все cues с момента последнего `take_cues`
    pub cues: CueBuffer,
}

impl Rig {
    pub fn new(config: CombatantConfig) -> Self {
        Self {
            entity: Entity::from_raw(1),
            health: Health::new(config.max_health),
            shield: ShieldCharges::new(config.block.max_charges),
            config,
            state: ActionState::Idle,
            timers: TimerBank::default(),
            hitbox: AttackHitbox::default(),
            block: BlockRegion::default(),
            chain: AttackChain::default(),
            locomotion: Locomotion {
                grounded: true,
                ..Default::default()
            },
            body: PhysicsBody::default(),
            cues: CueBuffer::default(),
        }
    }

    pub fn player() -> Self {
        Self::new(CombatantConfig::player())
    }

    pub fn enemy() -> Self {
        Self::new(CombatantConfig::enemy())
    }

    /// View + буфер cues (раздельные borrow'ы полей)
    pub fn parts(&mut self) -> (CombatCore<'_>, &mut CueBuffer) {
        let core = CombatCore {
            entity: self.entity,
            config: &self.config,
            state: &mut self.state,
            timers: &mut self.timers,
            health: &mut self.health,
            shield: &mut self.shield,
            hitbox: &mut self.hitbox,
            block: &mut self.block,
            chain: &mut self.chain,
            locomotion: &mut self.locomotion,
            body: &mut self.body,
        };
        (core, &mut self.cues)
    }

    pub fn damage(&mut self, amount: u32) -> HitOutcome {
        let (mut core, cues) = self.parts();
        core.apply_damage(amount, cues)
    }

    pub fn request(&mut self, request: ActionRequest) -> bool {
        let (mut core, cues) = self.parts();
        core.request(request, cues)
    }

    pub fn advance(&mut self, dt: f32) -> ExpiredTimers {
        let (mut core, cues) = self.parts();
        core.advance_timers(dt, cues)
    }

    /// Тик в порядке системы: timers → action + Idle/Moving → locomotion
    pub fn step(&mut self, intent: CombatIntent) {
        let (mut core, cues) = self.parts();
        core.advance_timers(DT, cues);
        if !core.is_dead() {
            if let Some(request) = intent.action {
                core.request(request, cues);
            }
            core.settle_locomotion_state(intent.direction);
        }
        core.drive_locomotion(&intent, cues);
    }

    /// `ticks` пустых тиков
    pub fn idle_for(&mut self, ticks: u32) {
        for _ in 0..ticks {
            self.step(CombatIntent::idle());
        }
    }

    pub fn take_cues(&mut self) -> CueBuffer {
        std::mem::take(&mut self.cues)
    }
}
