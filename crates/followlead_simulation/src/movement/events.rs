//! Movement events

use bevy::prelude::*;

use crate::components::MoveRequestId;

/// Чем закончилась move-команда
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// Агент в пределах acceptance radius
    Success,
    /// Команда заменена новой или прервана `MovementCommand::Stop`
    Aborted,
    /// Путь заблокирован
    Blocked,
    /// Цель недостижима / невалидна
    Invalid,
}

/// Event: navigation коллаборатор закончил move-команду
///
/// Генерируется хостом ровно один раз на каждый выданный `request`.
///
/// Обрабатывается:
/// - handle_move_completed (AI): FSM сама перепроверяет текущий режим,
///   поэтому устаревшие request'ы безопасны.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCompleted {
    pub agent: Entity,
    pub request: MoveRequestId,
    pub result: MoveResult,
}
