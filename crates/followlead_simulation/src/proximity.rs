//! Proximity monitor - чистые запросы дистанции/движения между агентами.

use bevy::prelude::*;

use crate::components::Velocity;

/// Евклидова дистанция между позициями агентов
pub fn distance(a: &Transform, b: &Transform) -> f32 {
    a.translation.distance(b.translation)
}

/// Агент двигается ⇔ |velocity| > 0
///
/// Без deadband: остаточная velocity после физики тоже считается движением.
pub fn is_moving(velocity: &Velocity) -> bool {
    velocity.0.length() > 0.0
}
