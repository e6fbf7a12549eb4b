//! Event handlers: lead requests, arrival sensor, move completion.

use bevy::ecs::error::BevyError;
use bevy::prelude::*;

use crate::ai::controllers::move_toward_player;
use crate::ai::events::{AllyBehaviorEvent, LeadActionBinding, LeadActionPressed, LeadRequest};
use crate::ai::state_machine::{self, CompletionOutcome};
use crate::ai::{AllyBehaviorState, AllyConfig, AllyMode, AllyTimer, AllyTimers};
use crate::components::{Ally, MoveRequestIds, MovementCommand, Velocity};
use crate::movement::MoveCompleted;
use crate::proximity;
use crate::waypoints::{WaypointOverlap, WaypointRegistry};
use crate::DeterministicRng;

/// Startup система: binding "AllyLead" должен указывать на валидный маршрут.
///
/// Ошибка конфигурации уровня → fallible system (default error handler паникует).
pub fn validate_lead_action_binding(
    binding: Option<Res<LeadActionBinding>>,
    registry: Res<WaypointRegistry>,
) -> Result<(), BevyError> {
    let Some(binding) = binding else {
        return Ok(());
    };

    registry.validate_route(binding.start_index, binding.end_index)?;

    crate::log_info(&format!(
        "Lead action bound to waypoints {} → {} (wait for player: {})",
        binding.start_index, binding.end_index, binding.wait_for_player
    ));
    Ok(())
}

/// Система: LeadActionPressed → LeadRequest по binding'у
///
/// Без `LeadActionBinding` нажатие игнорируется.
pub fn handle_lead_action(
    mut presses: EventReader<LeadActionPressed>,
    binding: Option<Res<LeadActionBinding>>,
    mut requests: EventWriter<LeadRequest>,
) {
    let Some(binding) = binding else {
        if !presses.is_empty() {
            crate::log_warning("Lead action pressed, but no LeadActionBinding is configured");
            presses.clear();
        }
        return;
    };

    for _ in presses.read() {
        requests.write(binding.request());
    }
}

/// Система: LeadRequest → LEAD для каждого Ally (любой режим, без очереди)
pub fn handle_lead_requests(
    mut requests: EventReader<LeadRequest>,
    mut allies: Query<(Entity, &AllyConfig, &mut AllyBehaviorState, &mut AllyTimers)>,
    registry: Res<WaypointRegistry>,
    mut behavior_events: EventWriter<AllyBehaviorEvent>,
) {
    for request in requests.read() {
        for (entity, config, mut state, mut timers) in allies.iter_mut() {
            let was_leading = state.is_leading();

            if let Err(err) = state_machine::on_lead_requested(&mut state, &registry, request) {
                crate::log_error(&format!("Ally {:?}: lead request rejected: {}", entity, err));
                behavior_events.write(AllyBehaviorEvent::LeadRejected {
                    ally: entity,
                    request: *request,
                    reason: err.to_string(),
                });
                continue;
            }

            timers.clear(AllyTimer::PlayerMotion);
            timers.arm(AllyTimer::LeadWaypoint, config.lead_poll_interval);

            crate::log_info(&format!(
                "🧭 Ally {:?}: lead {} → {} (wait for player: {})",
                entity, request.start_index, request.end_index, request.wait_for_player
            ));

            if !was_leading {
                behavior_events.write(AllyBehaviorEvent::ModeChanged {
                    ally: entity,
                    mode: AllyMode::Lead,
                });
            }
            behavior_events.write(AllyBehaviorEvent::LeadStarted {
                ally: entity,
                start_index: request.start_index,
                end_index: request.end_index,
            });
        }
    }
}

/// Система: arrival sensor → `has_arrived_at_current_waypoint`
///
/// Любой waypoint считается (индекс не сверяется с текущим).
pub fn handle_waypoint_overlaps(
    mut overlaps: EventReader<WaypointOverlap>,
    mut allies: Query<&mut AllyBehaviorState>,
) {
    for overlap in overlaps.read() {
        let Ok(mut state) = allies.get_mut(overlap.ally) else {
            continue;
        };

        if state_machine::on_waypoint_overlap(&mut state) {
            crate::log(&format!(
                "📍 Ally {:?}: overlapped waypoint {} (current {:?})",
                overlap.ally,
                overlap.waypoint_index,
                state.current_waypoint()
            ));
        }
    }
}

/// Система: MoveCompleted → FSM
///
/// Completion устаревшего request'а (команда уже заменена новой или Stop) пропускается.
/// Для актуального FSM сама перепроверяет режим и флаги.
#[allow(clippy::type_complexity)]
pub fn handle_move_completed(
    mut completions: EventReader<MoveCompleted>,
    mut allies: Query<(
        &Ally,
        &AllyConfig,
        &Velocity,
        &mut AllyBehaviorState,
        &mut AllyTimers,
        &mut MovementCommand,
    )>,
    registry: Res<WaypointRegistry>,
    mut ids: ResMut<MoveRequestIds>,
    mut rng: ResMut<DeterministicRng>,
    mut behavior_events: EventWriter<AllyBehaviorEvent>,
) {
    for completion in completions.read() {
        let entity = completion.agent;
        let Ok((ally, config, velocity, mut state, mut timers, mut command)) = allies.get_mut(entity) else {
            continue;
        };

        if command.request() != Some(completion.request) {
            continue;
        }

        let outcome = state_machine::on_move_completed(&mut state, &registry, proximity::is_moving(velocity));

        match outcome {
            CompletionOutcome::RepathToPlayer => {
                move_toward_player(ally, config, &mut command, &mut ids, &mut rng.rng);
            }
            CompletionOutcome::AwaitPlayerMotion => {
                timers.arm(AllyTimer::PlayerMotion, config.player_motion_poll_interval);
                timers.clear(AllyTimer::Sprint);
            }
            CompletionOutcome::Advanced { from, to } => {
                crate::log(&format!("➡️ Ally {:?}: waypoint {} → {}", entity, from, to));
                behavior_events.write(AllyBehaviorEvent::WaypointAdvanced { ally: entity, from, to });
            }
            CompletionOutcome::Finished { end } => {
                timers.clear(AllyTimer::LeadWaypoint);
                crate::log_info(&format!("🏁 Ally {:?}: reached final waypoint {}, back to follow", entity, end));
                behavior_events.write(AllyBehaviorEvent::LeadFinished { ally: entity, end_index: end });
                behavior_events.write(AllyBehaviorEvent::ModeChanged {
                    ally: entity,
                    mode: AllyMode::Follow,
                });
                move_toward_player(ally, config, &mut command, &mut ids, &mut rng.rng);
            }
            CompletionOutcome::RouteBroken { at } => {
                crate::log_error(&format!(
                    "Ally {:?}: no waypoint registered after {}, lead route is broken",
                    entity, at
                ));
            }
            CompletionOutcome::AwaitingArrival => {}
        }
    }
}
