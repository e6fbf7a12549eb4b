//! Waypoint events

use bevy::prelude::*;

use super::WaypointIndex;

/// Event: arrival sensor Ally пересёкся с trigger volume waypoint'а
///
/// Генерируется хостом (physics overlap). Это авторитетный сигнал "дошёл",
/// отдельный от завершения move-команды.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaypointOverlap {
    pub ally: Entity,
    pub waypoint_index: WaypointIndex,
}
