//! Ally AI module
//!
//! Follow/Lead FSM для NPC-компаньона:
//! - components: AllyBehaviorState, AllyConfig, AllyTimers, AllyAnimationState
//! - controllers: follow / lead / sprint (что делать в каждом режиме)
//! - state_machine: переходы FOLLOW ↔ LEAD (чистые функции)
//! - systems: ECS обвязка (таймеры, события, move completion)

use bevy::prelude::*;

pub mod components;
pub mod controllers;
pub mod events;
pub mod state_machine;
pub mod systems;


// Re-export основных типов
pub use components::*;
pub use events::{AllyBehaviorEvent, LeadActionBinding, LeadActionPressed, LeadRequest};
pub use state_machine::CompletionOutcome;

use crate::movement::MoveCompleted;
use crate::waypoints::{WaypointOverlap, WaypointRegistry};

/// SystemSet всего Ally behavior loop'а.
///
/// Хост (navigation, sensors) пишет свои события `.before(AllyBehaviorSystems)`,
/// читатели `AllyBehaviorEvent` ставятся `.after(AllyBehaviorSystems)`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct AllyBehaviorSystems;

/// Ally Behavior Plugin
///
/// Регистрирует Ally системы в Update (таймеры тикают от `Time`).
/// Порядок выполнения:
/// 1. start_ally_sessions - новый Ally → FOLLOW + move к игроку
/// 2. poll_player_motion / poll_sprint / poll_lead_waypoint - таймеры
///    (до обработки событий: таймер, взведённый в кадре N, тикает с кадра N+1)
/// 3. handle_lead_action / handle_lead_requests - команды игрока
/// 4. handle_waypoint_overlaps - arrival sensor
/// 5. handle_move_completed - обратный канал navigation
/// 6. update_animation_state - snapshot для анимации
pub struct AllyBehaviorPlugin;

impl Plugin for AllyBehaviorPlugin {
    fn build(&self, app: &mut App) {
        // Регистрация событий
        app.add_event::<LeadRequest>()
            .add_event::<LeadActionPressed>()
            .add_event::<WaypointOverlap>()
            .add_event::<MoveCompleted>()
            .add_event::<AllyBehaviorEvent>();

        app.init_resource::<WaypointRegistry>()
            .init_resource::<crate::components::MoveRequestIds>();

        if !app.world().contains_resource::<crate::DeterministicRng>() {
            app.insert_resource(crate::DeterministicRng::new(crate::DEFAULT_SEED));
        }

        app.add_systems(Startup, systems::validate_lead_action_binding);

        app.add_systems(
            Update,
            (
                systems::start_ally_sessions,
                systems::poll_player_motion,
                systems::poll_sprint,
                systems::poll_lead_waypoint,
                systems::handle_lead_action,
                systems::handle_lead_requests,
                systems::handle_waypoint_overlaps,
                systems::handle_move_completed,
                systems::update_animation_state,
            )
                .chain() // Последовательное выполнение для детерминизма
                .in_set(AllyBehaviorSystems),
        );
    }
}
