//! AI systems

pub mod decision;

// Re-export all systems
pub use decision::*;
