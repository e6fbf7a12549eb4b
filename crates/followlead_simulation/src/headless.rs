//! Headless хост: простая замена движка для демо и интеграционных тестов.
//!
//! - `KinematicNavigator`: исполняет `MovementCommand` прямолинейно на `MovementSpeed`,
//!   пишет `Velocity`, отвечает `MoveCompleted`
//! - `WaypointSensor`: AABB overlap с waypoint'ами → `WaypointOverlap` (begin-overlap,
//!   плюс повтор для занятого trigger'а, когда waypoint становится текущим)
//! - `ScriptedMotion`: игрок едет по ломаной
//!
//! Никакого pathfinding'а: препятствий в headless мире нет.

use bevy::prelude::*;
use std::collections::BTreeSet;

use crate::ai::{AllyBehaviorEvent, AllyBehaviorSystems};
use crate::components::{MoveRequestId, MovementCommand, MovementSpeed, Velocity};
use crate::movement::{MoveCompleted, MoveResult};
use crate::waypoints::{WaypointIndex, WaypointOverlap, WaypointRegistry};

/// Half extents trigger volume каждого waypoint'а (метры)
pub const WAYPOINT_TRIGGER_HALF_EXTENTS: Vec3 = Vec3::new(0.9, 0.9, 0.9);

/// Half extents arrival sensor'а Ally по умолчанию (капсула ~ 1.7м ростом)
pub const DEFAULT_SENSOR_HALF_EXTENTS: Vec3 = Vec3::new(0.9, 0.85, 0.9);

/// Состояние navigation для одного агента
///
/// `last_seen` - последний принятый request (чтобы не перезапускать завершённую команду),
/// `in_flight` - request, который ещё исполняется.
#[derive(Component, Debug, Default, Clone)]
pub struct KinematicNavigator {
    in_flight: Option<MoveRequestId>,
    last_seen: Option<MoveRequestId>,
}

impl KinematicNavigator {
    pub fn in_flight(&self) -> Option<MoveRequestId> {
        self.in_flight
    }
}

/// Arrival sensor (AABB вокруг агента)
#[derive(Component, Debug, Clone)]
pub struct WaypointSensor {
    pub half_extents: Vec3,
    overlapping: BTreeSet<WaypointIndex>,
}

impl Default for WaypointSensor {
    fn default() -> Self {
        Self {
            half_extents: DEFAULT_SENSOR_HALF_EXTENTS,
            overlapping: BTreeSet::new(),
        }
    }
}

impl WaypointSensor {
    pub fn is_overlapping(&self, index: WaypointIndex) -> bool {
        self.overlapping.contains(&index)
    }
}

/// Скриптовое движение (игрок в headless сессии)
///
/// Ждёт `delay` секунд, потом идёт по `path` со скоростью `speed`.
#[derive(Component, Debug, Clone)]
#[require(Transform, Velocity)]
pub struct ScriptedMotion {
    pub path: Vec<Vec3>,
    pub speed: f32,
    pub delay: f32,
    next: usize,
}

impl ScriptedMotion {
    pub fn new(path: Vec<Vec3>, speed: f32) -> Self {
        Self {
            path,
            speed,
            delay: 0.0,
            next: 0,
        }
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    pub fn is_finished(&self) -> bool {
        self.next >= self.path.len()
    }
}

/// Kinematic Navigation Plugin
///
/// Системы хоста в Update ДО `AllyBehaviorSystems`:
/// 1. drive_scripted_motion - игрок
/// 2. drive_kinematic_navigators - исполнение MovementCommand
/// 3. detect_waypoint_overlaps - arrival sensor
/// 4. reannounce_occupied_waypoints - overlap для текущего waypoint'а, внутри которого уже стоим
pub struct KinematicNavigationPlugin;

impl Plugin for KinematicNavigationPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<MoveCompleted>()
            .add_event::<WaypointOverlap>()
            .add_event::<AllyBehaviorEvent>()
            .init_resource::<WaypointRegistry>();

        app.add_systems(
            Update,
            (
                drive_scripted_motion,
                drive_kinematic_navigators,
                detect_waypoint_overlaps,
                reannounce_occupied_waypoints,
            )
                .chain()
                .before(AllyBehaviorSystems),
        );
    }
}

/// Сдвигает `from` к `to` не дальше `max_step`; возвращает пройденный вектор.
fn step_toward(from: Vec3, to: Vec3, max_step: f32) -> Vec3 {
    let offset = to - from;
    let distance = offset.length();
    if distance <= max_step || distance <= f32::EPSILON {
        offset
    } else {
        offset / distance * max_step
    }
}

fn velocity_from_travel(travel: Vec3, dt: f32) -> Vec3 {
    if dt > 0.0 {
        travel / dt
    } else {
        Vec3::ZERO
    }
}

/// Поворот лицом по горизонтальному направлению движения
fn face_along(transform: &mut Transform, travel: Vec3) {
    let horizontal = Vec3::new(travel.x, 0.0, travel.z);
    if horizontal.length_squared() > f32::EPSILON {
        transform.look_to(horizontal, Vec3::Y);
    }
}

/// Система: игрок по скрипту
pub fn drive_scripted_motion(
    mut actors: Query<(&mut ScriptedMotion, &mut Transform, &mut Velocity)>,
    time: Res<Time>,
) {
    let dt = time.delta_secs();

    for (mut motion, mut transform, mut velocity) in actors.iter_mut() {
        if motion.delay > 0.0 {
            motion.delay = (motion.delay - dt).max(0.0);
            velocity.set_if_neq(Velocity(Vec3::ZERO));
            continue;
        }

        let Some(&waypoint) = motion.path.get(motion.next) else {
            velocity.set_if_neq(Velocity(Vec3::ZERO));
            continue;
        };

        let max_step = motion.speed * dt;
        let reached = transform.translation.distance(waypoint) <= max_step;
        let travel = step_toward(transform.translation, waypoint, max_step);

        if reached {
            transform.translation = waypoint;
            motion.next += 1;
        } else {
            transform.translation += travel;
        }
        face_along(&mut transform, travel);
        velocity.set_if_neq(Velocity(velocity_from_travel(travel, dt)));
    }
}

/// Система: исполнение MovementCommand
///
/// - новый request прерывает предыдущий (`MoveResult::Aborted`)
/// - `Stop` / `Idle` прерывают текущий
/// - цель в пределах acceptance radius → `MoveResult::Success`
/// - FollowEntity без Transform у цели → `MoveResult::Invalid`
///
/// Цель FollowEntity не может сама быть KinematicNavigator (Without filter).
#[allow(clippy::type_complexity)]
pub fn drive_kinematic_navigators(
    mut agents: Query<(
        Entity,
        &MovementCommand,
        &MovementSpeed,
        &mut KinematicNavigator,
        &mut Transform,
        &mut Velocity,
    )>,
    targets: Query<&Transform, Without<KinematicNavigator>>,
    mut completions: EventWriter<MoveCompleted>,
    time: Res<Time>,
) {
    let dt = time.delta_secs();

    for (agent, command, speed, mut navigator, mut transform, mut velocity) in agents.iter_mut() {
        let Some(request) = command.request() else {
            // Stop / Idle
            if let Some(aborted) = navigator.in_flight.take() {
                crate::log(&format!("⛔ Nav {:?}: {:?} stopped", agent, aborted));
                completions.write(MoveCompleted {
                    agent,
                    request: aborted,
                    result: MoveResult::Aborted,
                });
            }
            velocity.set_if_neq(Velocity(Vec3::ZERO));
            continue;
        };

        if navigator.last_seen != Some(request) {
            if let Some(superseded) = navigator.in_flight.take() {
                completions.write(MoveCompleted {
                    agent,
                    request: superseded,
                    result: MoveResult::Aborted,
                });
            }
            navigator.last_seen = Some(request);
            navigator.in_flight = Some(request);
        }

        if navigator.in_flight != Some(request) {
            // Уже завершена, ждём следующую команду
            velocity.set_if_neq(Velocity(Vec3::ZERO));
            continue;
        }

        let target = match *command {
            MovementCommand::MoveToPosition { target, .. } => target,
            MovementCommand::FollowEntity { target, .. } => match targets.get(target) {
                Ok(target_transform) => target_transform.translation,
                Err(_) => {
                    navigator.in_flight = None;
                    velocity.set_if_neq(Velocity(Vec3::ZERO));
                    completions.write(MoveCompleted {
                        agent,
                        request,
                        result: MoveResult::Invalid,
                    });
                    continue;
                }
            },
            MovementCommand::Idle | MovementCommand::Stop => continue,
        };

        let acceptance_radius = command.acceptance_radius().unwrap_or(0.0);
        let remaining = (transform.translation.distance(target) - acceptance_radius).max(0.0);
        let travel = step_toward(transform.translation, target, (speed.speed * dt).min(remaining));

        transform.translation += travel;
        face_along(&mut transform, travel);
        velocity.set_if_neq(Velocity(velocity_from_travel(travel, dt)));

        if transform.translation.distance(target) <= acceptance_radius + 1e-4 {
            navigator.in_flight = None;
            completions.write(MoveCompleted {
                agent,
                request,
                result: MoveResult::Success,
            });
        }
    }
}

/// Система: arrival sensor
///
/// Событие только на входе в trigger volume; выход сбрасывает флаг overlap'а.
pub fn detect_waypoint_overlaps(
    mut sensors: Query<(Entity, &Transform, &mut WaypointSensor)>,
    registry: Res<WaypointRegistry>,
    mut overlaps: EventWriter<WaypointOverlap>,
) {
    for (entity, transform, mut sensor) in sensors.iter_mut() {
        let reach = sensor.half_extents + WAYPOINT_TRIGGER_HALF_EXTENTS;

        for waypoint in registry.sorted() {
            let offset = (waypoint.position - transform.translation).abs();
            let inside = offset.cmple(reach).all();

            if inside {
                if sensor.overlapping.insert(waypoint.index) {
                    overlaps.write(WaypointOverlap {
                        ally: entity,
                        waypoint_index: waypoint.index,
                    });
                }
            } else {
                sensor.overlapping.remove(&waypoint.index);
            }
        }
    }
}

/// Система: повторный overlap при смене текущего waypoint'а
///
/// Begin-overlap уже отработал, если Ally вошёл в trigger раньше, чем waypoint стал
/// текущим (lead стартует рядом с первым waypoint'ом, соседние waypoint'ы ближе reach).
/// Без повтора `has_arrived_at_current_waypoint` не взводится и lead не продвигается.
pub fn reannounce_occupied_waypoints(
    mut behavior_events: EventReader<AllyBehaviorEvent>,
    sensors: Query<&WaypointSensor>,
    mut overlaps: EventWriter<WaypointOverlap>,
) {
    for event in behavior_events.read() {
        let (ally, waypoint_index) = match *event {
            AllyBehaviorEvent::LeadStarted { ally, start_index, .. } => (ally, start_index),
            AllyBehaviorEvent::WaypointAdvanced { ally, to, .. } => (ally, to),
            _ => continue,
        };

        let Ok(sensor) = sensors.get(ally) else {
            continue;
        };

        if sensor.is_overlapping(waypoint_index) {
            crate::log(&format!(
                "📍 Sensor {:?}: already inside waypoint {}, re-announcing",
                ally, waypoint_index
            ));
            overlaps.write(WaypointOverlap { ally, waypoint_index });
        }
    }
}
