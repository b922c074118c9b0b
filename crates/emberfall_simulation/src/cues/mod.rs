//! Исходящие cue events для внешних коллабораторов.
//!
//! Ядро ничего не рендерит и не проигрывает: оно только сообщает, что нужно
//! показать/сыграть (анимация, hitbox, VFX, звук, тряска камеры, flash, сердечки).
//!
//! Правила боя пишут cues в локальный `CueBuffer` (чистые функции, без ECS),
//! система в конце обработки entity сбрасывает буфер в events через `CueWriters`.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use std::fmt;

// ============================================================================
// Cue payloads
// ============================================================================

/// Параметры/триггеры анимации
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimCue {
    /// 0 — idle, 1 — движение
    AnimState(u8),
    Trigger(AnimTrigger),
    IdleBlock(bool),
    Grounded(bool),
    AirSpeedY(f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimTrigger {
    /// Вариант атаки (Attack1, Attack2, ...)
    Attack(u8),
    Roll,
    Jump,
    Block,
    Hurt,
    Death,
}

impl fmt::Display for AnimTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimTrigger::Attack(variant) => write!(f, "Attack{}", variant),
            AnimTrigger::Roll => f.write_str("Roll"),
            AnimTrigger::Jump => f.write_str("Jump"),
            AnimTrigger::Block => f.write_str("Block"),
            AnimTrigger::Hurt => f.write_str("Hurt"),
            AnimTrigger::Death => f.write_str("Death"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitboxRegion {
    Attack,
    Block,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VfxEffect {
    HitImpact,
    BlockImpact,
    ShieldBreak,
    /// Ambient windline (id нужен, чтобы внешний слой сообщил о завершении)
    Windline { variant: u8, id: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundId {
    BlockRaise,
    BlockHit,
    ShieldBreak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShakeProfile {
    Hurt,
    ShieldBreak,
}

// ============================================================================
// Events
// ============================================================================

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct AnimationCue {
    pub entity: Entity,
    pub cue: AnimCue,
}

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct HitboxToggled {
    pub entity: Entity,
    pub region: HitboxRegion,
    pub enabled: bool,
}

/// VFX в мировой позиции
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct VfxRequest {
    pub source: Option<Entity>,
    pub effect: VfxEffect,
    pub position: Vec2,
}

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct AudioCue {
    pub entity: Entity,
    pub sound: SoundId,
}

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct CameraShake {
    pub entity: Entity,
    pub profile: ShakeProfile,
}

/// Hurt flash вкл/выкл
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct FlashToggled {
    pub entity: Entity,
    pub on: bool,
}

/// Сколько сердечек показывать (health UI)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct HeartsChanged {
    pub entity: Entity,
    pub visible: u32,
}

// ============================================================================
// Buffer
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cue {
    Anim(AnimCue),
    Hitbox { region: HitboxRegion, enabled: bool },
    /// offset — относительно позиции бойца
    Vfx { effect: VfxEffect, offset: Vec2 },
    Audio(SoundId),
    Shake(ShakeProfile),
    Flash(bool),
    Hearts(u32),
}

/// Cues одного бойца за один проход системы
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CueBuffer {
    cues: Vec<Cue>,
}

impl CueBuffer {
    pub fn push(&mut self, cue: Cue) {
        self.cues.push(cue);
    }

    pub fn anim(&mut self, cue: AnimCue) {
        self.push(Cue::Anim(cue));
    }

    pub fn trigger(&mut self, trigger: AnimTrigger) {
        self.push(Cue::Anim(AnimCue::Trigger(trigger)));
    }

    pub fn as_slice(&self) -> &[Cue] {
        &self.cues
    }

    pub fn contains(&self, cue: &Cue) -> bool {
        self.cues.contains(cue)
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, Cue> {
        self.cues.drain(..)
    }
}

/// Все cue writers одним SystemParam
#[derive(SystemParam)]
pub struct CueWriters<'w> {
    anim: EventWriter<'w, AnimationCue>,
    hitbox: EventWriter<'w, HitboxToggled>,
    vfx: EventWriter<'w, VfxRequest>,
    audio: EventWriter<'w, AudioCue>,
    shake: EventWriter<'w, CameraShake>,
    flash: EventWriter<'w, FlashToggled>,
    hearts: EventWriter<'w, HeartsChanged>,
}

impl CueWriters<'_> {
    /// Сбрасывает буфер бойца `entity`, стоящего в `origin`
    pub fn flush(&mut self, entity: Entity, origin: Vec2, buffer: &mut CueBuffer) {
        for cue in buffer.drain() {
            match cue {
                Cue::Anim(cue) => {
                    self.anim.write(AnimationCue { entity, cue });
                }
                Cue::Hitbox { region, enabled } => {
                    self.hitbox.write(HitboxToggled {
                        entity,
                        region,
                        enabled,
                    });
                }
                Cue::Vfx { effect, offset } => {
                    self.vfx.write(VfxRequest {
                        source: Some(entity),
                        effect,
                        position: origin + offset,
                    });
                }
                Cue::Audio(sound) => {
                    self.audio.write(AudioCue { entity, sound });
                }
                Cue::Shake(profile) => {
                    self.shake.write(CameraShake { entity, profile });
                }
                Cue::Flash(on) => {
                    self.flash.write(FlashToggled { entity, on });
                }
                Cue::Hearts(visible) => {
                    self.hearts.write(HeartsChanged { entity, visible });
                }
            }
        }
    }

    /// Одиночный анимационный cue (без буфера)
    pub fn anim(&mut self, entity: Entity, cue: AnimCue) {
        self.anim.write(AnimationCue { entity, cue });
    }

    /// VFX без бойца-источника (ambient)
    pub fn vfx_at(&mut self, effect: VfxEffect, position: Vec2) {
        self.vfx.write(VfxRequest {
            source: None,
            effect,
            position,
        });
    }
}

/// Регистрирует все cue events
pub struct CuePlugin;

impl Plugin for CuePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<AnimationCue>()
            .add_event::<HitboxToggled>()
            .add_event::<VfxRequest>()
            .add_event::<AudioCue>()
            .add_event::<CameraShake>()
            .add_event::<FlashToggled>()
            .add_event::<HeartsChanged>();
    }
}
