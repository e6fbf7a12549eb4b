//! AllyBehaviorState - единственная авторитетная запись режима Ally.

use bevy::prelude::*;

use crate::ai::events::LeadRequest;
use crate::waypoints::WaypointIndex;

/// Режим поведения Ally
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Reflect)]
pub enum AllyMode {
    /// Следует за игроком (начальное состояние)
    #[default]
    Follow,
    /// Ведёт игрока по waypoint'ам
    Lead,
}

/// Состояние FSM Ally
///
/// Инвариант: `mode == Lead` ⇒ `current_waypoint` и `end_waypoint` заданы
/// и существуют в `WaypointRegistry` (проверяется при приёме `LeadRequest`).
/// Мутируется только state machine (`crate::ai::state_machine`) и её таймерами.
#[derive(Component, Debug, Clone, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct AllyBehaviorState {
    mode: AllyMode,
    current_waypoint: Option<WaypointIndex>,
    end_waypoint: Option<WaypointIndex>,
    has_arrived_at_current_waypoint: bool,
    wait_for_player_while_leading: bool,
    is_sprinting: bool,
}

impl AllyBehaviorState {
    pub fn mode(&self) -> AllyMode {
        self.mode
    }

    pub fn is_leading(&self) -> bool {
        self.mode == AllyMode::Lead
    }

    pub fn current_waypoint(&self) -> Option<WaypointIndex> {
        self.current_waypoint
    }

    pub fn end_waypoint(&self) -> Option<WaypointIndex> {
        self.end_waypoint
    }

    pub fn has_arrived_at_current_waypoint(&self) -> bool {
        self.has_arrived_at_current_waypoint
    }

    pub fn wait_for_player_while_leading(&self) -> bool {
        self.wait_for_player_while_leading
    }

    pub fn is_sprinting(&self) -> bool {
        self.is_sprinting
    }

    /// Текущий waypoint == последний waypoint маршрута
    pub fn is_at_final_waypoint(&self) -> bool {
        self.current_waypoint.is_some() && self.current_waypoint == self.end_waypoint
    }

    /// Перезаписывает любой текущий маршрут (без очереди)
    pub(crate) fn begin_lead(&mut self, request: &LeadRequest) {
        self.mode = AllyMode::Lead;
        self.current_waypoint = Some(request.start_index);
        self.end_waypoint = Some(request.end_index);
        self.wait_for_player_while_leading = request.wait_for_player;
        self.has_arrived_at_current_waypoint = false;
    }

    /// Маршрут пройден → Follow. Индексы остаются для отладки.
    pub(crate) fn finish_lead(&mut self) {
        self.mode = AllyMode::Follow;
        self.has_arrived_at_current_waypoint = false;
    }

    pub(crate) fn advance_to(&mut self, next: WaypointIndex) {
        self.current_waypoint = Some(next);
        self.has_arrived_at_current_waypoint = false;
    }

    pub(crate) fn mark_arrived(&mut self) {
        self.has_arrived_at_current_waypoint = true;
    }

    pub(crate) fn set_sprinting(&mut self, sprinting: bool) {
        self.is_sprinting = sprinting;
    }
}
