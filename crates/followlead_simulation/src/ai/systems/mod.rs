//! AI systems (Ally behavior loop)

pub mod animation;
pub mod handlers;
pub mod polling;
pub mod session;

// Re-export all systems
pub use animation::*;
pub use handlers::*;
pub use polling::*;
pub use session::*;
