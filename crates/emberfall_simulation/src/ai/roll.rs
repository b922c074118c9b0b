//! Источник случайности для решений AI.
//!
//! Policy не знает про конкретный RNG: в App это `DeterministicRng` (ChaCha8),
//! в тестах — `ScriptedRolls` с заранее заданными значениями.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

use crate::DeterministicRng;

pub trait DecisionRoll {
    /// Равномерное значение в [0, 1)
    fn unit(&mut self) -> f32;

    /// true с вероятностью `probability`
    fn chance(&mut self, probability: f32) -> bool {
        self.unit() < probability
    }

    /// Равномерное значение в [low, high)
    fn range(&mut self, low: f32, high: f32) -> f32 {
        low + (high - low) * self.unit()
    }

    /// Индекс в 0..count
    fn pick(&mut self, count: u8) -> u8 {
        let last = count.saturating_sub(1);
        ((self.unit() * f32::from(count)) as u8).min(last)
    }
}

impl DecisionRoll for ChaCha8Rng {
    fn unit(&mut self) -> f32 {
        self.gen::<f32>()
    }
}

impl DecisionRoll for DeterministicRng {
    fn unit(&mut self) -> f32 {
        self.rng.unit()
    }
}

/// Заранее заданная последовательность значений; когда кончается — `fallback`
#[derive(Debug, Clone)]
pub struct ScriptedRolls {
    values: VecDeque<f32>,
    fallback: f32,
}

impl ScriptedRolls {
    pub fn new(values: impl IntoIterator<Item = f32>) -> Self {
        Self {
            values: values.into_iter().collect(),
            fallback: 0.999,
        }
    }

    pub fn with_fallback(mut self, fallback: f32) -> Self {
        self.fallback = fallback;
        self
    }

    /// Сколько заданных значений ещё не использовано
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl Default for ScriptedRolls {
    fn default() -> Self {
        Self::new(Vec::<f32>::new())
    }
}

impl DecisionRoll for ScriptedRolls {
    fn unit(&mut self) -> f32 {
        self.values.pop_front().unwrap_or(self.fallback)
    }
}
