//! Общие helpers интеграционных тестов
//!
//! Тестовый App: ManualDuration 50ms (ровно один player-motion poll за кадр),
//! без navigation хоста - completions и overlaps шлёт сам тест.

#![allow(dead_code)]

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use followlead_simulation::ai::{AllyTimer, AllyTimers};
use followlead_simulation::*;
use std::time::Duration;

pub const TEST_SEED: u64 = 42;

/// Шаг времени тестового App
pub const STEP: Duration = Duration::from_millis(50);

/// Кадров на один lead/sprint poll (0.5 сек)
pub const SLOW_POLL_FRAMES: usize = 10;

/// Все AllyBehaviorEvent за прогон
#[derive(Resource, Default)]
pub struct RecordedEvents(pub Vec<AllyBehaviorEvent>);

fn record_behavior_events(mut events: EventReader<AllyBehaviorEvent>, mut recorded: ResMut<RecordedEvents>) {
    recorded.0.extend(events.read().cloned());
}

/// Waypoint'ы на оси X: index i → (i * 10, 0, 0)
pub fn line_registry(indices: &[i32]) -> WaypointRegistry {
    WaypointRegistry::from_waypoints(
        indices
            .iter()
            .map(|&index| Waypoint::new(index, waypoint_position(index))),
    )
    .expect("unique waypoint indices")
}

pub fn waypoint_position(index: i32) -> Vec3 {
    Vec3::new(index as f32 * 10.0, 0.0, 0.0)
}

/// App с FollowLeadPlugin и записью событий (без хоста)
pub fn create_test_app(registry: WaypointRegistry) -> App {
    let mut app = create_headless_app(TEST_SEED);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(STEP))
        .insert_resource(registry)
        .init_resource::<RecordedEvents>()
        .add_plugins(FollowLeadPlugin)
        .add_systems(Update, record_behavior_events.after(AllyBehaviorSystems));
    app
}

/// Spawn игрока и Ally; первый update = старт сессии
pub fn spawn_pair(app: &mut App, ally_position: Vec3, player_position: Vec3) -> (Entity, Entity) {
    let player = app
        .world_mut()
        .spawn((Player, Transform::from_translation(player_position)))
        .id();
    let ally = app
        .world_mut()
        .spawn((Ally::following(player), Transform::from_translation(ally_position)))
        .id();
    app.update();
    (ally, player)
}

pub fn run_frames(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}

pub fn command(app: &App, ally: Entity) -> MovementCommand {
    app.world().get::<MovementCommand>(ally).expect("ally has MovementCommand").clone()
}

pub fn state(app: &App, ally: Entity) -> AllyBehaviorState {
    app.world()
        .get::<AllyBehaviorState>(ally)
        .expect("ally has AllyBehaviorState")
        .clone()
}

pub fn speed(app: &App, ally: Entity) -> MovementSpeed {
    *app.world().get::<MovementSpeed>(ally).expect("ally has MovementSpeed")
}

pub fn timer_armed(app: &App, ally: Entity, which: AllyTimer) -> bool {
    app.world()
        .get::<AllyTimers>(ally)
        .expect("ally has AllyTimers")
        .is_armed(which)
}

pub fn set_velocity(app: &mut App, entity: Entity, velocity: Vec3) {
    app.world_mut().entity_mut(entity).insert(Velocity(velocity));
}

pub fn set_position(app: &mut App, entity: Entity, position: Vec3) {
    app.world_mut()
        .entity_mut(entity)
        .insert(Transform::from_translation(position));
}

/// Хост завершил текущую move-команду Ally (без update)
pub fn complete_current_move(app: &mut App, ally: Entity, result: MoveResult) -> MoveRequestId {
    let request = command(app, ally).request().expect("ally has an active move request");
    app.world_mut().send_event(MoveCompleted {
        agent: ally,
        request,
        result,
    });
    request
}

pub fn overlap_waypoint(app: &mut App, ally: Entity, waypoint_index: i32) {
    app.world_mut().send_event(WaypointOverlap { ally, waypoint_index });
}

pub fn request_lead(app: &mut App, start_index: i32, end_index: i32, wait_for_player: bool) {
    app.world_mut()
        .send_event(LeadRequest::new(start_index, end_index, wait_for_player));
}

pub fn recorded(app: &App) -> Vec<AllyBehaviorEvent> {
    app.world().resource::<RecordedEvents>().0.clone()
}
