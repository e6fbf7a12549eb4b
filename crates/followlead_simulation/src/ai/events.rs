//! AI Events - входящие команды игрока и исходящие уведомления Ally
//!
//! Input layer хоста → LeadActionPressed / LeadRequest → state machine
//! State machine → AllyBehaviorEvent → хост (UI, звук, тесты)

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::ai::AllyMode;
use crate::waypoints::WaypointIndex;

/// Запрос "веди меня": пройти waypoint'ы `start_index..=end_index`.
///
/// Не хранится - сразу инициализирует Lead состояние всех Ally.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeadRequest {
    pub start_index: WaypointIndex,
    pub end_index: WaypointIndex,
    /// Останавливаться, если игрок отстал дальше `max_distance_from_player_while_leading`
    pub wait_for_player: bool,
}

impl LeadRequest {
    pub fn new(start_index: WaypointIndex, end_index: WaypointIndex, wait_for_player: bool) -> Self {
        Self {
            start_index,
            end_index,
            wait_for_player,
        }
    }
}

/// Игрок нажал "AllyLead" (маппинг устройства - на стороне хоста)
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct LeadActionPressed;

/// Во что превращается `LeadActionPressed`
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadActionBinding {
    pub start_index: WaypointIndex,
    pub end_index: WaypointIndex,
    pub wait_for_player: bool,
}

impl Default for LeadActionBinding {
    fn default() -> Self {
        Self {
            start_index: 0,
            end_index: 1,
            wait_for_player: true,
        }
    }
}

impl LeadActionBinding {
    pub fn request(&self) -> LeadRequest {
        LeadRequest::new(self.start_index, self.end_index, self.wait_for_player)
    }
}

/// Уведомления о переходах FSM Ally
#[derive(Event, Debug, Clone, PartialEq)]
pub enum AllyBehaviorEvent {
    ModeChanged {
        ally: Entity,
        mode: AllyMode,
    },
    LeadStarted {
        ally: Entity,
        start_index: WaypointIndex,
        end_index: WaypointIndex,
    },
    /// Запрос отклонён (индексы не в registry или start > end), состояние не тронуто
    LeadRejected {
        ally: Entity,
        request: LeadRequest,
        reason: String,
    },
    WaypointAdvanced {
        ally: Entity,
        from: WaypointIndex,
        to: WaypointIndex,
    },
    LeadFinished {
        ally: Entity,
        end_index: WaypointIndex,
    },
    SprintChanged {
        ally: Entity,
        sprinting: bool,
    },
}
