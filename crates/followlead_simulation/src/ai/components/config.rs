//! Параметры Ally (designer tunables).
//!
//! Все дистанции в метрах, скорости в м/с, интервалы в секундах.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse ally config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid ally config: {0}")]
    Invalid(String),
}

/// Параметры Ally
#[derive(Component, Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
#[serde(default)]
pub struct AllyConfig {
    /// Нижняя граница acceptance radius при следовании (метры)
    pub min_distance_from_player: f32,
    /// Верхняя граница acceptance radius при следовании (метры)
    pub max_distance_from_player: f32,
    /// Дистанция до игрока, начиная с которой Ally бежит
    pub max_distance_before_sprint: f32,
    /// Дистанция, начиная с которой Ally ждёт игрока (если wait_for_player)
    pub max_distance_from_player_while_leading: f32,
    /// Acceptance radius для move-команды к waypoint'у
    pub waypoint_acceptance_radius: f32,
    pub walk_speed: f32,
    pub sprint_speed: f32,
    /// Период опроса "игрок снова двигается?" (секунды)
    pub player_motion_poll_interval: f32,
    /// Период переоценки текущего waypoint'а в Lead
    pub lead_poll_interval: f32,
    /// Период sprint hysteresis
    pub sprint_poll_interval: f32,
}

impl Default for AllyConfig {
    fn default() -> Self {
        Self {
            min_distance_from_player: 1.0,
            max_distance_from_player: 5.0,
            max_distance_before_sprint: 6.0, // max_distance_from_player + 1м
            max_distance_from_player_while_leading: 5.0,
            waypoint_acceptance_radius: 0.5,
            walk_speed: 2.0,
            sprint_speed: 5.0,
            player_motion_poll_interval: 0.05,
            lead_poll_interval: 0.5,
            sprint_poll_interval: 0.5,
        }
    }
}

impl AllyConfig {
    /// Парсит JSON (отсутствующие поля берутся из `Default`) и валидирует.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let distances = [
            ("min_distance_from_player", self.min_distance_from_player),
            ("max_distance_from_player", self.max_distance_from_player),
            ("max_distance_before_sprint", self.max_distance_before_sprint),
            (
                "max_distance_from_player_while_leading",
                self.max_distance_from_player_while_leading,
            ),
            ("waypoint_acceptance_radius", self.waypoint_acceptance_radius),
            ("walk_speed", self.walk_speed),
            ("sprint_speed", self.sprint_speed),
        ];
        for (name, value) in distances {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!("{name} must be finite and >= 0, got {value}")));
            }
        }

        let intervals = [
            ("player_motion_poll_interval", self.player_motion_poll_interval),
            ("lead_poll_interval", self.lead_poll_interval),
            ("sprint_poll_interval", self.sprint_poll_interval),
        ];
        for (name, value) in intervals {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!("{name} must be > 0, got {value}")));
            }
        }

        if self.min_distance_from_player > self.max_distance_from_player {
            return Err(ConfigError::Invalid(format!(
                "min_distance_from_player ({}) > max_distance_from_player ({})",
                self.min_distance_from_player, self.max_distance_from_player
            )));
        }

        Ok(())
    }
}
