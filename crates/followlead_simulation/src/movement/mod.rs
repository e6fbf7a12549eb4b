//! Movement domain - обратный канал navigation коллаборатора
//!
//! Содержит:
//! - MoveCompleted (event: хост завершил/прервал move-команду)
//! - MoveResult (чем закончилась команда)
//!
//! Сами команды (MovementCommand) - в `components::movement`.

pub mod events;

pub use events::*;
