//! Lead controller - ведёт Ally к текущему waypoint'у, ждёт отставшего игрока.

use bevy::prelude::*;

use crate::ai::{AllyBehaviorState, AllyConfig};
use crate::components::{MoveRequestIds, MovementCommand};
use crate::proximity;
use crate::waypoints::{WaypointIndex, WaypointRegistry};

/// Результат одного lead poll'а
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LeadStep {
    /// Ally не в Lead - ничего не делаем
    NotLeading,
    /// Нужно ждать игрока, но ссылка на игрока не назначена
    PlayerUnset,
    /// Игрок отстал: Ally остановлен
    WaitingForPlayer { distance: f32 },
    /// Выдана move-команда к waypoint'у
    MovingTo(WaypointIndex),
    /// Текущего индекса нет в registry (маршрут не прошёл валидацию)
    MissingWaypoint(WaypointIndex),
}

/// Один шаг Lead: stop (ждём игрока) или move к `current_waypoint`.
///
/// `player_transform` нужен только при `wait_for_player_while_leading`.
pub fn move_toward_current_waypoint(
    state: &AllyBehaviorState,
    config: &AllyConfig,
    registry: &WaypointRegistry,
    ally_transform: &Transform,
    player_transform: Option<&Transform>,
    command: &mut MovementCommand,
    ids: &mut MoveRequestIds,
) -> LeadStep {
    if !state.is_leading() {
        return LeadStep::NotLeading;
    }
    let Some(index) = state.current_waypoint() else {
        return LeadStep::NotLeading;
    };

    if state.wait_for_player_while_leading() {
        let Some(player_transform) = player_transform else {
            return LeadStep::PlayerUnset;
        };

        let distance = proximity::distance(ally_transform, player_transform);
        if distance >= config.max_distance_from_player_while_leading {
            if *command != MovementCommand::Stop {
                *command = MovementCommand::Stop;
            }
            return LeadStep::WaitingForPlayer { distance };
        }
    }

    let Ok(waypoint) = registry.get(index) else {
        return LeadStep::MissingWaypoint(index);
    };

    *command = MovementCommand::MoveToPosition {
        target: waypoint.position,
        acceptance_radius: config.waypoint_acceptance_radius,
        request: ids.issue(),
    };

    LeadStep::MovingTo(index)
}
