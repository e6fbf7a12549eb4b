//! Headless сессия FollowLead
//!
//! Игрок идёт по прямой, Ally следует; через 8 сек игрок жмёт "AllyLead"
//! и Ally ведёт его по waypoint'ам 0 → 3.

use bevy::prelude::*;
use followlead_simulation::{
    create_headless_app, log_error, Ally, AllyBehaviorEvent, AllyBehaviorState, AllyBehaviorSystems,
    FollowLeadPlugin, KinematicNavigationPlugin, KinematicNavigator, LeadActionBinding, LeadActionPressed,
    Player, ScriptedMotion, Waypoint, WaypointRegistry, WaypointSensor,
};
use followlead_simulation::logger::{set_log_level, LogLevel};

const TICKS: u32 = 60 * 40;
const LEAD_PRESS_TICK: u32 = 60 * 8;

fn report_behavior_events(mut events: EventReader<AllyBehaviorEvent>) {
    for event in events.read() {
        println!("  event: {:?}", event);
    }
}

fn main() {
    let seed = 42;
    println!("Starting FollowLead headless session (seed: {})", seed);

    let registry = match WaypointRegistry::from_waypoints([
        Waypoint::new(0, Vec3::new(10.0, 0.0, 0.0)),
        Waypoint::new(1, Vec3::new(20.0, 0.0, 5.0)),
        Waypoint::new(2, Vec3::new(30.0, 0.0, 0.0)),
        Waypoint::new(3, Vec3::new(40.0, 0.0, -5.0)),
    ]) {
        Ok(registry) => registry,
        Err(err) => {
            log_error(&format!("Level waypoints are broken: {}", err));
            return;
        }
    };

    let mut app = create_headless_app(seed);
    // Debug логи пишутся каждый poll; в демо достаточно переходов FSM
    set_log_level(LogLevel::Info);
    app.insert_resource(registry)
        .insert_resource(LeadActionBinding {
            start_index: 0,
            end_index: 3,
            wait_for_player: true,
        })
        .add_plugins((FollowLeadPlugin, KinematicNavigationPlugin))
        .add_systems(Update, report_behavior_events.after(AllyBehaviorSystems));

    let player = app
        .world_mut()
        .spawn((
            Player,
            Transform::from_xyz(0.0, 0.0, 0.0),
            ScriptedMotion::new(vec![Vec3::new(6.0, 0.0, 0.0), Vec3::new(6.0, 0.0, 6.0)], 1.5).with_delay(1.0),
        ))
        .id();

    // Второй скрипт игрока (после нажатия): идёт за Ally вдоль маршрута
    let follow_route = ScriptedMotion::new(
        vec![
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(20.0, 0.0, 5.0),
            Vec3::new(30.0, 0.0, 0.0),
            Vec3::new(40.0, 0.0, -5.0),
        ],
        1.8,
    )
    .with_delay(1.0);

    let ally = app
        .world_mut()
        .spawn((
            Ally::following(player),
            Transform::from_xyz(-4.0, 0.0, 2.0),
            KinematicNavigator::default(),
            WaypointSensor::default(),
        ))
        .id();

    for tick in 0..TICKS {
        if tick == LEAD_PRESS_TICK {
            println!("Tick {}: player presses AllyLead", tick);
            app.world_mut().send_event(LeadActionPressed);
            app.world_mut().entity_mut(player).insert(follow_route.clone());
        }

        app.update();

        if tick % 120 == 0 {
            let world = app.world();
            let ally_position = world.get::<Transform>(ally).map(|t| t.translation);
            let player_position = world.get::<Transform>(player).map(|t| t.translation);
            let mode = world.get::<AllyBehaviorState>(ally).map(|s| s.mode());
            println!(
                "Tick {}: ally {:?} player {:?} mode {:?}",
                tick, ally_position, player_position, mode
            );
        }
    }

    println!("Session complete!");
}
