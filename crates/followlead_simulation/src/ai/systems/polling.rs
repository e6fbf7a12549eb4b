//! Poll системы: три независимых repeating таймера Ally.
//!
//! Таймеры тикают от `Time` (Update). Каждая система трогает только свой таймер,
//! кроме player motion → он передаёт эстафету sprint poll'у.

use bevy::prelude::*;

use crate::ai::controllers::{manage_sprint, move_toward_current_waypoint, move_toward_player, LeadStep};
use crate::ai::events::AllyBehaviorEvent;
use crate::ai::{AllyBehaviorState, AllyConfig, AllyTimer, AllyTimers};
use crate::components::{Ally, MoveRequestIds, MovementCommand, MovementSpeed, Velocity};
use crate::proximity;
use crate::waypoints::WaypointRegistry;
use crate::DeterministicRng;

/// Система: "игрок снова двигается?" (FOLLOW, Ally стоит)
///
/// Игрок двигается → снимаем этот poll, армим sprint poll, снова к игроку.
pub fn poll_player_motion(
    mut allies: Query<(Entity, &Ally, &AllyConfig, &mut AllyTimers, &mut MovementCommand)>,
    players: Query<&Velocity>,
    mut ids: ResMut<MoveRequestIds>,
    mut rng: ResMut<DeterministicRng>,
    time: Res<Time>,
) {
    let delta = time.delta();

    for (entity, ally, config, mut timers, mut command) in allies.iter_mut() {
        if !timers.tick(AllyTimer::PlayerMotion, delta) {
            continue;
        }

        let Some(player) = ally.player else {
            continue;
        };
        let Ok(player_velocity) = players.get(player) else {
            continue;
        };

        if proximity::is_moving(player_velocity) {
            timers.clear(AllyTimer::PlayerMotion);
            timers.arm(AllyTimer::Sprint, config.sprint_poll_interval);

            crate::log(&format!("👣 Ally {:?}: player {:?} is moving again", entity, player));
            move_toward_player(ally, config, &mut command, &mut ids, &mut rng.rng);
        }
    }
}

/// Система: sprint hysteresis (FOLLOW)
pub fn poll_sprint(
    mut allies: Query<(
        Entity,
        &Ally,
        &AllyConfig,
        &Transform,
        &mut AllyBehaviorState,
        &mut AllyTimers,
        &mut MovementSpeed,
    )>,
    players: Query<&Transform>,
    mut behavior_events: EventWriter<AllyBehaviorEvent>,
    time: Res<Time>,
) {
    let delta = time.delta();

    for (entity, ally, config, transform, mut state, mut timers, mut speed) in allies.iter_mut() {
        if !timers.tick(AllyTimer::Sprint, delta) {
            continue;
        }

        let Some(player_transform) = ally.player.and_then(|player| players.get(player).ok()) else {
            continue;
        };

        let distance = proximity::distance(transform, player_transform);
        if let Some(transition) = manage_sprint(&mut state, &mut speed, config, distance) {
            let sprinting = state.is_sprinting();
            crate::log(&format!(
                "🏃 Ally {:?}: {:?} sprint (distance {:.2}m, speed {:.1})",
                entity, transition, distance, speed.speed
            ));
            behavior_events.write(AllyBehaviorEvent::SprintChanged { ally: entity, sprinting });
        }
    }
}

/// Система: переоценка текущего waypoint'а (LEAD)
pub fn poll_lead_waypoint(
    mut allies: Query<(
        Entity,
        &Ally,
        &AllyConfig,
        &Transform,
        &AllyBehaviorState,
        &mut AllyTimers,
        &mut MovementCommand,
    )>,
    players: Query<&Transform>,
    registry: Res<WaypointRegistry>,
    mut ids: ResMut<MoveRequestIds>,
    time: Res<Time>,
) {
    let delta = time.delta();

    for (entity, ally, config, transform, state, mut timers, mut command) in allies.iter_mut() {
        if !timers.tick(AllyTimer::LeadWaypoint, delta) {
            continue;
        }

        let player_transform = ally.player.and_then(|player| players.get(player).ok());

        match move_toward_current_waypoint(
            state,
            config,
            &registry,
            transform,
            player_transform,
            &mut command,
            &mut ids,
        ) {
            LeadStep::WaitingForPlayer { distance } => {
                crate::log(&format!(
                    "⏸️ Ally {:?}: waiting for player ({:.2}m behind)",
                    entity, distance
                ));
            }
            LeadStep::PlayerUnset => {
                crate::log_warning(&format!(
                    "Ally {:?}: lead waits for player, but player reference is unset",
                    entity
                ));
            }
            LeadStep::MissingWaypoint(index) => {
                crate::log_error(&format!("Ally {:?}: waypoint {} is not registered", entity, index));
            }
            LeadStep::MovingTo(_) | LeadStep::NotLeading => {}
        }
    }
}
