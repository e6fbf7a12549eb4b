//! WaypointRegistry - индексированные waypoint'ы уровня.

use bevy::prelude::*;
use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};
use thiserror::Error;

/// Порядковый ключ waypoint'а (обход идёт по возрастанию)
pub type WaypointIndex = i32;

/// Точка маршрута. Иммутабельна после регистрации.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    pub index: WaypointIndex,
    pub position: Vec3,
}

impl Waypoint {
    pub fn new(index: WaypointIndex, position: Vec3) -> Self {
        Self { index, position }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("waypoint index {0} is registered twice")]
    DuplicateIndex(WaypointIndex),
    #[error("waypoint index {0} is not registered")]
    NotFound(WaypointIndex),
    #[error("lead route {start} -> {end} runs backwards")]
    InvalidRange {
        start: WaypointIndex,
        end: WaypointIndex,
    },
}

/// Registry waypoint'ов, ключ - индекс
///
/// Строится хостом из полного списка (`from_waypoints`) и вставляется как resource.
/// После старта сессии только читается.
///
/// Индексы могут идти с пропусками: `next` возвращает следующий ПРИСУТСТВУЮЩИЙ индекс.
#[derive(Resource, Debug, Clone, Default)]
pub struct WaypointRegistry {
    waypoints: BTreeMap<WaypointIndex, Waypoint>,
}

impl WaypointRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Порядок входа не важен; дубликат индекса - ошибка конфигурации уровня.
    pub fn from_waypoints(waypoints: impl IntoIterator<Item = Waypoint>) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for waypoint in waypoints {
            registry.register(waypoint)?;
        }
        Ok(registry)
    }

    pub fn register(&mut self, waypoint: Waypoint) -> Result<(), RegistryError> {
        if self.waypoints.contains_key(&waypoint.index) {
            return Err(RegistryError::DuplicateIndex(waypoint.index));
        }
        self.waypoints.insert(waypoint.index, waypoint);
        Ok(())
    }

    pub fn get(&self, index: WaypointIndex) -> Result<&Waypoint, RegistryError> {
        self.waypoints.get(&index).ok_or(RegistryError::NotFound(index))
    }

    /// Waypoint'ы по возрастанию индекса
    pub fn sorted(&self) -> impl Iterator<Item = &Waypoint> {
        self.waypoints.values()
    }

    /// Waypoint со следующим большим индексом
    pub fn next(&self, index: WaypointIndex) -> Option<&Waypoint> {
        self.waypoints
            .range((Excluded(index), Unbounded))
            .next()
            .map(|(_, waypoint)| waypoint)
    }

    /// Маршрут `start → end` валиден: оба индекса есть и `start <= end`.
    pub fn validate_route(&self, start: WaypointIndex, end: WaypointIndex) -> Result<(), RegistryError> {
        self.get(start)?;
        self.get(end)?;
        if start > end {
            return Err(RegistryError::InvalidRange { start, end });
        }
        Ok(())
    }

    /// Индексы, которые посетит Lead от `start` до `end` включительно.
    pub fn route(&self, start: WaypointIndex, end: WaypointIndex) -> Result<Vec<WaypointIndex>, RegistryError> {
        self.validate_route(start, end)?;
        Ok(self.waypoints.range(start..=end).map(|(index, _)| *index).collect())
    }
}
