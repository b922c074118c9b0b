//! Combat components

pub mod action;
pub mod hitbox;
pub mod intent;
pub mod timers;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod timers_tests;

// Re-export all components
pub use action::*;
pub use hitbox::*;
pub use intent::*;
pub use timers::*;
