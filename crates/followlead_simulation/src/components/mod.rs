//! ECS Components для агентов
//!
//! Организация по доменам:
//! - ally: NPC-компаньон (Ally + required FSM компоненты)
//! - player: player control marker (Player)
//! - movement: команды перемещения и скорость (MovementCommand, MovementSpeed, Velocity)

pub mod ally;
pub mod movement;
pub mod player;

// Re-exports для удобного импорта
pub use ally::*;
pub use movement::*;
pub use player::*;
