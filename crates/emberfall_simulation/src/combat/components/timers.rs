//! Timer Bank: именованные обратные отсчёты бойца.
//!
//! Все отложенные действия ("через N секунд сделать X") — это записи в банке.
//! Эффект истечения применяется системой `tick_combat_timers` ровно один раз.

use bevy::prelude::*;

/// Остаток ≤ EPSILON считается истёкшим (накопление ошибки f32 за тики)
pub const TIMER_EPSILON: f32 = 1e-4;

// ============================================================================
// Timer Keys
// ============================================================================

/// Ключи таймеров
///
/// Порядок вариантов = порядок применения эффектов, если несколько таймеров
/// истекли в одном тике.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum TimerKey {
    AttackCooldown,
    RollCooldown,
    JumpCooldown,
    /// Окно комбо: пока идёт, следующая атака продолжает цепочку
    ComboWindow,
    /// Гистерезис AnimState (движение → idle)
    IdleAnimDelay,
    HitboxWindow,
    Roll,
    BlockMinimum,
    Stun,
    ShieldRecovery,
    HurtFlash,
}

impl TimerKey {
    pub const COUNT: usize = 11;

    pub const ALL: [TimerKey; TimerKey::COUNT] = [
        TimerKey::AttackCooldown,
        TimerKey::RollCooldown,
        TimerKey::JumpCooldown,
        TimerKey::ComboWindow,
        TimerKey::IdleAnimDelay,
        TimerKey::HitboxWindow,
        TimerKey::Roll,
        TimerKey::BlockMinimum,
        TimerKey::Stun,
        TimerKey::ShieldRecovery,
        TimerKey::HurtFlash,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn bit(self) -> u16 {
        1 << self.index()
    }
}

// ============================================================================
// Timer Bank Component
// ============================================================================

/// Банк таймеров (remaining seconds на ключ, None — не запущен)
///
/// Инварианты:
/// - remaining никогда не отрицательный
/// - start на запущенном ключе перезапускает его (last-writer-wins)
/// - ready ⇔ не запущен
/// - после `freeze` (смерть) ничего не тикает и не стартует
#[derive(Component, Debug, Clone, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct TimerBank {
    slots: [Option<f32>; TimerKey::COUNT],
    frozen: bool,
}

impl TimerBank {
    pub fn start(&mut self, key: TimerKey, seconds: f32) {
        if self.frozen {
            return;
        }
        self.slots[key.index()] = Some(seconds.max(0.0));
    }

    /// Возвращает true, если таймер был запущен
    pub fn cancel(&mut self, key: TimerKey) -> bool {
        self.slots[key.index()].take().is_some()
    }

    pub fn remaining(&self, key: TimerKey) -> f32 {
        self.slots[key.index()].unwrap_or(0.0)
    }

    pub fn is_running(&self, key: TimerKey) -> bool {
        self.slots[key.index()].is_some_and(|remaining| remaining > TIMER_EPSILON)
    }

    pub fn is_ready(&self, key: TimerKey) -> bool {
        !self.is_running(key)
    }

    /// Один тик: уменьшает все запущенные таймеры на `dt`,
    /// истёкшие очищает и возвращает
    pub fn tick(&mut self, dt: f32) -> ExpiredTimers {
        let mut expired = ExpiredTimers::default();
        if self.frozen {
            return expired;
        }

        for key in TimerKey::ALL {
            let slot = &mut self.slots[key.index()];
            if let Some(remaining) = *slot {
                let remaining = remaining - dt;
                if remaining <= TIMER_EPSILON {
                    *slot = None;
                    expired.insert(key);
                } else {
                    *slot = Some(remaining);
                }
            }
        }

        expired
    }

    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }
}

/// Набор истёкших за тик ключей (bitmask, итерация в порядке `TimerKey::ALL`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpiredTimers(u16);

impl ExpiredTimers {
    fn insert(&mut self, key: TimerKey) {
        self.0 |= key.bit();
    }

    pub fn contains(&self, key: TimerKey) -> bool {
        self.0 & key.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = TimerKey> {
        TimerKey::ALL
            .into_iter()
            .filter(move |key| self.contains(*key))
    }
}
