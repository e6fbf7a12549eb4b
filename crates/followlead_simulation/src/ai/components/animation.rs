//! Read-only snapshot для animation коллаборатора.

use bevy::prelude::*;

/// Порог локальной компоненты нормализованной velocity
pub const MOVING_COMPONENT_THRESHOLD: f32 = 0.1;

/// Две булевы для выбора анимации (idle/walk/run).
///
/// Пересчитывается каждый frame системой `update_animation_state`;
/// animation код читает только этот компонент, не `AllyBehaviorState`.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct AllyAnimationState {
    is_moving: bool,
    is_sprinting: bool,
}

impl AllyAnimationState {
    /// Нормализованная velocity разворачивается в локальные оси агента;
    /// moving = forward > 0.1 || right > 0.1 (назад/влево не считается).
    pub fn from_motion(velocity: Vec3, rotation: Quat, is_sprinting: bool) -> Self {
        let local = rotation.inverse() * velocity.normalize_or_zero();
        let forward = -local.z;
        let lateral = local.x;

        Self {
            is_moving: forward > MOVING_COMPONENT_THRESHOLD || lateral > MOVING_COMPONENT_THRESHOLD,
            is_sprinting,
        }
    }

    pub fn is_moving(&self) -> bool {
        self.is_moving
    }

    pub fn is_sprinting(&self) -> bool {
        self.is_sprinting
    }
}
