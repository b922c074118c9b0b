//! AI components

pub mod policy;


// Re-export all components
pub use policy::*;
