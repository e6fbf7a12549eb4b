//! Player control marker component
//!
//! Отмечает entity которым управляет игрок (его Ally сопровождает и ведёт).

use bevy::prelude::*;

use super::movement::Velocity;

/// Marker component для player-controlled entity
///
/// Позиция и velocity пишутся хостом (input + character movement).
/// AI только читает их через proximity запросы.
#[derive(Component, Debug, Clone, Copy, Default)]
#[require(Transform, Velocity)]
pub struct Player;
