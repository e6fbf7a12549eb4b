//! FollowLead Simulation Core
//!
//! ECS-симуляция на Bevy 0.16: NPC-компаньон (Ally), который следует за игроком
//! или ведёт его по waypoint'ам.
//!
//! HYBRID ARCHITECTURE:
//! - ECS = поведение (FSM Ally, таймеры, sprint, выбор целей)
//! - хост = navigation, сенсоры, анимация (читает MovementCommand / AllyAnimationState)
//! - `headless` - простой хост без движка (демо бинарь, интеграционные тесты)

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

// Публичные модули
pub mod ai;
pub mod components;
pub mod headless;
pub mod logger;
pub mod movement;
pub mod proximity;
pub mod waypoints;


// Re-export базовых типов для удобства
pub use ai::{
    AllyAnimationState, AllyBehaviorEvent, AllyBehaviorPlugin, AllyBehaviorState, AllyBehaviorSystems, AllyConfig,
    AllyMode, LeadActionBinding, LeadActionPressed, LeadRequest,
};
pub use components::*;
pub use headless::{KinematicNavigationPlugin, KinematicNavigator, ScriptedMotion, WaypointSensor};
pub use logger::{init_logger, log, log_error, log_info, log_warning};
pub use movement::{MoveCompleted, MoveResult};
pub use waypoints::{RegistryError, Waypoint, WaypointIndex, WaypointOverlap, WaypointRegistry};

/// Seed по умолчанию (если хост не вставил свой `DeterministicRng`)
pub const DEFAULT_SEED: u64 = 42;

/// Шаг headless симуляции (60Hz)
pub const HEADLESS_STEP_SECS: f64 = 1.0 / 60.0;

/// Главный plugin (объединяет все подсистемы поведения)
pub struct FollowLeadPlugin;

impl Plugin for FollowLeadPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(AllyBehaviorPlugin);
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время двигается вручную фиксированным шагом: один `app.update()` = 1/60 сек.
/// Плагины поведения/хоста добавляет вызывающий.
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            HEADLESS_STEP_SECS,
        )));

    app
}

/// Snapshot компонентов `T` для сравнения детерминизма
///
/// Сортировка по Entity index, формат - Debug.
pub fn world_snapshot<T>(world: &mut World) -> Vec<String>
where
    T: Component + std::fmt::Debug,
{
    let mut query = world.query::<(Entity, &T)>();
    let mut entries: Vec<_> = query
        .iter(world)
        .map(|(entity, component)| (entity.index(), format!("{:?}", component)))
        .collect();

    entries.sort_by_key(|(index, _)| *index);

    entries
        .into_iter()
        .map(|(index, component)| format!("{}: {}", index, component))
        .collect()
}
