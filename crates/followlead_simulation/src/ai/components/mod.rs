//! AI components (state machine, config, timers, animation snapshot)

pub mod animation;
pub mod config;
pub mod state;
pub mod timers;

#[cfg(test)]
mod timers_tests;

// Re-export all components
pub use animation::*;
pub use config::*;
pub use state::*;
pub use timers::*;
