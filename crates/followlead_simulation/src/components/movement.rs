//! Movement компоненты: команды перемещения, скорость, velocity

use bevy::prelude::*;

/// Идентификатор move-команды.
///
/// Каждая выданная команда получает новый id; хост возвращает его в `MoveCompleted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Reflect)]
pub struct MoveRequestId(pub u64);

/// Счётчик move-команд (монотонный, один на мир)
#[derive(Resource, Debug, Default)]
pub struct MoveRequestIds {
    next: u64,
}

impl MoveRequestIds {
    pub fn issue(&mut self) -> MoveRequestId {
        self.next += 1;
        MoveRequestId(self.next)
    }
}

/// Команда движения для агента (выполняется navigation коллаборатором хоста)
///
/// Архитектура:
/// - AI системы пишут MovementCommand (high-level intent)
/// - хост читает `Changed<MovementCommand>` и запускает pathfinding
/// - по завершении хост шлёт `MoveCompleted` с тем же `request`
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub enum MovementCommand {
    /// Стоять на месте (нет активной команды)
    Idle,
    /// Двигаться к точке (world coordinates)
    MoveToPosition {
        target: Vec3,
        acceptance_radius: f32,
        request: MoveRequestId,
    },
    /// Следовать за entity (target обновляется хостом каждый frame)
    FollowEntity {
        target: Entity,
        acceptance_radius: f32,
        request: MoveRequestId,
    },
    /// Остановиться немедленно (активная команда прерывается)
    Stop,
}

impl Default for MovementCommand {
    fn default() -> Self {
        Self::Idle
    }
}

impl MovementCommand {
    pub fn request(&self) -> Option<MoveRequestId> {
        match self {
            Self::MoveToPosition { request, .. } | Self::FollowEntity { request, .. } => Some(*request),
            Self::Idle | Self::Stop => None,
        }
    }

    pub fn acceptance_radius(&self) -> Option<f32> {
        match self {
            Self::MoveToPosition { acceptance_radius, .. }
            | Self::FollowEntity { acceptance_radius, .. } => Some(*acceptance_radius),
            Self::Idle | Self::Stop => None,
        }
    }
}

/// Velocity агента (м/с), пишется хостом каждый frame
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Velocity(pub Vec3);

/// Уровень скорости (walk/sprint)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
pub enum SpeedTier {
    #[default]
    Walk,
    Sprint,
}

/// Максимальная скорость движения агента (м/с)
///
/// Читается navigation коллаборатором; AI меняет только tier + speed.
#[derive(Component, Clone, Copy, Debug, PartialEq, Reflect)]
#[reflect(Component)]
pub struct MovementSpeed {
    pub speed: f32,
    pub tier: SpeedTier,
}

impl Default for MovementSpeed {
    fn default() -> Self {
        Self::walking(2.0) // 2 m/s - базовая скорость ходьбы
    }
}

impl MovementSpeed {
    pub fn walking(speed: f32) -> Self {
        Self { speed, tier: SpeedTier::Walk }
    }

    pub fn set_tier(&mut self, tier: SpeedTier, speed: f32) {
        self.tier = tier;
        self.speed = speed;
    }
}
