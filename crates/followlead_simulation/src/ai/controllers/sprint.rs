//! Sprint manager - hysteresis переключение walk/sprint в Follow.

use crate::ai::{AllyBehaviorState, AllyConfig};
use crate::components::{MovementSpeed, SpeedTier};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SprintTransition {
    Started,
    Stopped,
}

/// Оценка sprint по дистанции до игрока.
///
/// Старт: `distance >= max_distance_before_sprint`, стоп: `distance < ...`.
/// Флаг `is_sprinting` - единственный guard, отдельного dead-band нет.
/// В Lead не вызывает переходов.
pub fn manage_sprint(
    state: &mut AllyBehaviorState,
    speed: &mut MovementSpeed,
    config: &AllyConfig,
    distance: f32,
) -> Option<SprintTransition> {
    if state.is_leading() {
        return None;
    }

    let threshold = config.max_distance_before_sprint;

    if !state.is_sprinting() && distance >= threshold {
        state.set_sprinting(true);
        speed.set_tier(SpeedTier::Sprint, config.sprint_speed);
        Some(SprintTransition::Started)
    } else if state.is_sprinting() && distance < threshold {
        state.set_sprinting(false);
        speed.set_tier(SpeedTier::Walk, config.walk_speed);
        Some(SprintTransition::Stopped)
    } else {
        None
    }
}
