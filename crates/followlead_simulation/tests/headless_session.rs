//! Headless session integration test
//!
//! Полный цикл с KinematicNavigationPlugin (60Hz, без ручных completions):
//! - Ally догоняет уходящего игрока (со спринтом) и останавливается рядом
//! - lead 0 → 3 проходит все waypoint'ы и возвращается в FOLLOW
//! - lead, начатый внутри trigger'а первого waypoint'а, тоже доходит до конца
//! - одинаковый seed → идентичный прогон

use bevy::prelude::*;
use followlead_simulation::*;

const MAX_TICKS: usize = 60 * 40;

#[derive(Resource, Default)]
struct SessionLog(Vec<AllyBehaviorEvent>);

fn record_session(mut events: EventReader<AllyBehaviorEvent>, mut log: ResMut<SessionLog>) {
    log.0.extend(events.read().cloned());
}

/// Waypoint'ы в 5м друг от друга (trigger volumes не пересекаются)
fn session_registry() -> WaypointRegistry {
    WaypointRegistry::from_waypoints((0..4).map(|index| Waypoint::new(index, Vec3::new(5.0 + index as f32 * 5.0, 0.0, 0.0))))
        .expect("unique waypoint indices")
}

fn create_session_app(seed: u64) -> App {
    let mut app = create_headless_app(seed);
    app.insert_resource(session_registry())
        .init_resource::<SessionLog>()
        .add_plugins((FollowLeadPlugin, KinematicNavigationPlugin))
        .add_systems(Update, record_session.after(AllyBehaviorSystems));
    app
}

fn spawn_ally(app: &mut App, player: Entity, position: Vec3) -> Entity {
    app.world_mut()
        .spawn((
            Ally::following(player),
            Transform::from_translation(position),
            KinematicNavigator::default(),
            WaypointSensor::default(),
        ))
        .id()
}

fn distance(app: &App, a: Entity, b: Entity) -> f32 {
    let world = app.world();
    let a = world.get::<Transform>(a).expect("transform").translation;
    let b = world.get::<Transform>(b).expect("transform").translation;
    a.distance(b)
}

/// Игрок уходит на 20м по -Z быстрее шага Ally, потом стоит
fn run_follow_session(seed: u64) -> (App, Entity, Entity) {
    let mut app = create_session_app(seed);
    let player = app
        .world_mut()
        .spawn((
            Player,
            ScriptedMotion::new(vec![Vec3::new(0.0, 0.0, -20.0)], 3.0).with_delay(0.5),
        ))
        .id();
    let ally = spawn_ally(&mut app, player, Vec3::new(0.0, 0.0, 2.0));

    for _ in 0..MAX_TICKS {
        app.update();
    }

    (app, ally, player)
}

#[test]
fn test_ally_catches_up_with_player() {
    let (app, ally, player) = run_follow_session(42);
    let config = AllyConfig::default();

    let sprinted = app
        .world()
        .resource::<SessionLog>()
        .0
        .iter()
        .any(|event| matches!(event, AllyBehaviorEvent::SprintChanged { sprinting: true, .. }));
    assert!(sprinted, "игрок уходил быстрее шага - Ally должен был бежать");

    let final_distance = distance(&app, ally, player);
    assert!(
        final_distance <= config.max_distance_from_player + 0.01,
        "Ally остановился слишком далеко: {:.2}m",
        final_distance
    );

    let world = app.world();
    assert_eq!(world.get::<AllyBehaviorState>(ally).map(|s| s.mode()), Some(AllyMode::Follow));
    assert_eq!(world.get::<Velocity>(ally).map(|v| v.0), Some(Vec3::ZERO));
    assert_eq!(world.get::<AllyAnimationState>(ally).map(|a| a.is_moving()), Some(false));
}

#[test]
fn test_lead_session_visits_every_waypoint() {
    let mut app = create_session_app(42);
    let player = app
        .world_mut()
        .spawn((Player, Transform::from_xyz(-6.0, 0.0, 4.0)))
        .id();
    let ally = spawn_ally(&mut app, player, Vec3::new(-3.0, 0.0, 0.0));

    // Follow успевает устояться
    for _ in 0..60 {
        app.update();
    }
    app.world_mut().send_event(LeadRequest::new(0, 3, false));

    let mut finished_at = None;
    for tick in 0..MAX_TICKS {
        app.update();
        let finished = app
            .world()
            .resource::<SessionLog>()
            .0
            .iter()
            .any(|event| matches!(event, AllyBehaviorEvent::LeadFinished { .. }));
        if finished {
            finished_at = Some(tick);
            break;
        }
    }
    assert!(finished_at.is_some(), "lead не завершился за {} тиков", MAX_TICKS);

    assert_eq!(traversal(&app), vec![(0, 1), (1, 2), (2, 3), (3, 3)]);

    assert_eq!(
        app.world().get::<AllyBehaviorState>(ally).map(|s| s.mode()),
        Some(AllyMode::Follow)
    );
    assert!(matches!(
        app.world().get::<MovementCommand>(ally),
        Some(MovementCommand::FollowEntity { target, .. }) if *target == player
    ));
}

/// Индексы из WaypointAdvanced / LeadFinished в порядке появления
fn traversal(app: &App) -> Vec<(WaypointIndex, WaypointIndex)> {
    app.world()
        .resource::<SessionLog>()
        .0
        .iter()
        .filter_map(|event| match event {
            AllyBehaviorEvent::WaypointAdvanced { from, to, .. } => Some((*from, *to)),
            AllyBehaviorEvent::LeadFinished { end_index, .. } => Some((*end_index, *end_index)),
            _ => None,
        })
        .collect()
}

#[test]
fn test_lead_started_inside_first_trigger_finishes() {
    let mut app = create_headless_app(42);
    app.insert_resource(
        WaypointRegistry::from_waypoints([
            Waypoint::new(0, Vec3::ZERO),
            Waypoint::new(1, Vec3::new(10.0, 0.0, 0.0)),
        ])
        .expect("unique waypoint indices"),
    )
    .init_resource::<SessionLog>()
    .add_plugins((FollowLeadPlugin, KinematicNavigationPlugin))
    .add_systems(Update, record_session.after(AllyBehaviorSystems));

    // Игрок ближе min_distance_from_player: Ally не сдвигается с waypoint'а 0
    let player = app
        .world_mut()
        .spawn((Player, Transform::from_xyz(0.0, 0.0, 0.8)))
        .id();
    let ally = spawn_ally(&mut app, player, Vec3::ZERO);

    for _ in 0..60 {
        app.update();
    }
    assert!(app
        .world()
        .get::<WaypointSensor>(ally)
        .map(|sensor| sensor.is_overlapping(0))
        .unwrap_or(false));

    app.world_mut().send_event(LeadRequest::new(0, 1, false));
    for _ in 0..MAX_TICKS {
        app.update();
        if traversal(&app).contains(&(1, 1)) {
            break;
        }
    }

    assert_eq!(traversal(&app), vec![(0, 1), (1, 1)]);
    assert_eq!(
        app.world().get::<AllyBehaviorState>(ally).map(|s| s.mode()),
        Some(AllyMode::Follow)
    );
}

#[test]
fn test_same_seed_replays_identically() {
    let (mut first, _, _) = run_follow_session(7);
    let (mut second, _, _) = run_follow_session(7);

    assert_eq!(
        world_snapshot::<Transform>(first.world_mut()),
        world_snapshot::<Transform>(second.world_mut())
    );
    assert_eq!(
        world_snapshot::<MovementCommand>(first.world_mut()),
        world_snapshot::<MovementCommand>(second.world_mut())
    );
}
