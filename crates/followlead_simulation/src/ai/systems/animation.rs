//! Animation snapshot system.

use bevy::prelude::*;

use crate::ai::{AllyAnimationState, AllyBehaviorState};
use crate::components::Velocity;

/// Система: пересчёт `AllyAnimationState` каждый frame
///
/// Пишет только при изменении (иначе `Changed<AllyAnimationState>` срабатывает каждый frame).
pub fn update_animation_state(
    mut allies: Query<(&Velocity, &Transform, &AllyBehaviorState, &mut AllyAnimationState)>,
) {
    for (velocity, transform, state, mut animation) in allies.iter_mut() {
        let snapshot = AllyAnimationState::from_motion(velocity.0, transform.rotation, state.is_sprinting());
        animation.set_if_neq(snapshot);
    }
}
