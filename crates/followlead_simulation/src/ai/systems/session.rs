//! Session start: новый Ally → FOLLOW + один вызов Follow controller.

use bevy::prelude::*;

use crate::ai::controllers::move_toward_player;
use crate::ai::{AllyBehaviorState, AllyConfig, AllyTimers};
use crate::components::{Ally, MoveRequestIds, MovementCommand, MovementSpeed};
use crate::DeterministicRng;

/// Система: старт сессии для только что заспавненных Ally
///
/// Сбрасывает FSM в FOLLOW, выставляет walk speed из config
/// и сразу отправляет Ally к игроку. Таймеры не армятся:
/// follow цикл дальше крутится от `MoveCompleted`.
pub fn start_ally_sessions(
    mut allies: Query<
        (
            Entity,
            &Ally,
            &AllyConfig,
            &mut AllyBehaviorState,
            &mut AllyTimers,
            &mut MovementSpeed,
            &mut MovementCommand,
        ),
        Added<Ally>,
    >,
    mut ids: ResMut<MoveRequestIds>,
    mut rng: ResMut<DeterministicRng>,
) {
    for (entity, ally, config, mut state, mut timers, mut speed, mut command) in allies.iter_mut() {
        if let Err(err) = config.validate() {
            crate::log_error(&format!("Ally {:?}: {}", entity, err));
        }

        *state = AllyBehaviorState::default();
        *timers = AllyTimers::default();
        *speed = MovementSpeed::walking(config.walk_speed);

        crate::log_info(&format!("🤝 Ally {:?} session start (player {:?})", entity, ally.player));

        move_toward_player(ally, config, &mut command, &mut ids, &mut rng.rng);
    }
}
