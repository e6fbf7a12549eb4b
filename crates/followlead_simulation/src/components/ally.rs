//! Ally - NPC-компаньон, который следует за игроком и ведёт его.

use bevy::prelude::*;

use super::movement::{MovementCommand, MovementSpeed, Velocity};
use crate::ai::{AllyAnimationState, AllyBehaviorState, AllyConfig, AllyTimers};

/// Ally компонент
///
/// Автоматически добавляет FSM state, config, timers и movement компоненты
/// через Required Components.
///
/// `player: None` - ссылка не назначена: контроллеры молча ничего не делают.
#[derive(Component, Debug, Clone, Copy, Default)]
#[require(
    Transform,
    Velocity,
    MovementSpeed,
    MovementCommand,
    AllyBehaviorState,
    AllyConfig,
    AllyTimers,
    AllyAnimationState
)]
pub struct Ally {
    pub player: Option<Entity>,
}

impl Ally {
    pub fn following(player: Entity) -> Self {
        Self { player: Some(player) }
    }
}
