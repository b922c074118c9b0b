//! Combat systems: timer bank, ledger, переходы, hitbox overlap, смерть

pub mod actions;
pub mod damage;
pub mod hitbox;
pub mod timers;

#[cfg(test)]
mod timers_tests;
