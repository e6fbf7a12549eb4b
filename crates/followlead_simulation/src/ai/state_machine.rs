//! Ally behavior state machine: переходы FOLLOW ↔ LEAD.
//!
//! Чистые функции над `AllyBehaviorState` + `WaypointRegistry`.
//! Таймеры, move-команды и события - на стороне систем (`ai::systems::handlers`),
//! которые исполняют возвращённый outcome.

use crate::ai::events::LeadRequest;
use crate::ai::{AllyBehaviorState, AllyMode};
use crate::waypoints::{RegistryError, WaypointIndex, WaypointRegistry};

/// Что делать после завершения move-команды
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// FOLLOW, Ally ещё двигается → снова к игроку
    RepathToPlayer,
    /// FOLLOW, Ally стоит → arm player-motion poll (sprint poll снимается)
    AwaitPlayerMotion,
    /// LEAD, дошли до промежуточного waypoint'а → `current = to`
    Advanced { from: WaypointIndex, to: WaypointIndex },
    /// LEAD, дошли до последнего waypoint'а → FOLLOW
    Finished { end: WaypointIndex },
    /// LEAD, arrival sensor ещё не сработал
    AwaitingArrival,
    /// LEAD, после `at` в registry ничего нет (маршрут стоит)
    RouteBroken { at: WaypointIndex },
}

/// Реакция на `MoveCompleted`. Режим перепроверяется здесь,
/// поэтому устаревшие completion'ы безопасны.
pub fn on_move_completed(
    state: &mut AllyBehaviorState,
    registry: &WaypointRegistry,
    ally_moving: bool,
) -> CompletionOutcome {
    match state.mode() {
        AllyMode::Follow => {
            if ally_moving {
                CompletionOutcome::RepathToPlayer
            } else {
                CompletionOutcome::AwaitPlayerMotion
            }
        }
        AllyMode::Lead => {
            if !state.has_arrived_at_current_waypoint() {
                return CompletionOutcome::AwaitingArrival;
            }

            let Some(current) = state.current_waypoint() else {
                return CompletionOutcome::AwaitingArrival;
            };

            if state.is_at_final_waypoint() {
                state.finish_lead();
                return CompletionOutcome::Finished { end: current };
            }

            match registry.next(current) {
                Some(next) => {
                    state.advance_to(next.index);
                    CompletionOutcome::Advanced {
                        from: current,
                        to: next.index,
                    }
                }
                None => CompletionOutcome::RouteBroken { at: current },
            }
        }
    }
}

/// Принимает lead request в любом режиме (перезаписывает текущий маршрут).
///
/// Невалидный маршрут отклоняется ДО мутации состояния.
pub fn on_lead_requested(
    state: &mut AllyBehaviorState,
    registry: &WaypointRegistry,
    request: &LeadRequest,
) -> Result<(), RegistryError> {
    registry.validate_route(request.start_index, request.end_index)?;
    state.begin_lead(request);
    Ok(())
}

/// Arrival sensor. Вне LEAD игнорируется; `true` если флаг выставлен.
pub fn on_waypoint_overlap(state: &mut AllyBehaviorState) -> bool {
    if !state.is_leading() {
        return false;
    }
    state.mark_arrived();
    true
}
