//! Periodic timers Ally (player motion / lead waypoint / sprint).
//!
//! Три независимых repeating таймера: каждый gate'ит своё состояние,
//! поэтому они не объединяются в один общий tick.

use bevy::prelude::*;
use std::time::Duration;

/// Какой таймер
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AllyTimer {
    /// Опрос "игрок снова двигается?" (Follow, Ally стоит)
    PlayerMotion,
    /// Переоценка текущего waypoint'а (Lead)
    LeadWaypoint,
    /// Sprint hysteresis (Follow)
    Sprint,
}

/// Интервал с точностью до микросекунды: 0.05f32 → ровно 50ms, не 50.000001ms.
fn interval_duration(interval_secs: f32) -> Duration {
    let micros = (f64::from(interval_secs.max(0.0)) * 1_000_000.0).round();
    Duration::from_micros(micros as u64)
}

#[derive(Component, Debug, Clone, Default)]
pub struct AllyTimers {
    player_motion: Option<Timer>,
    lead_waypoint: Option<Timer>,
    sprint: Option<Timer>,
}

impl AllyTimers {
    /// Clear + set: повторный arm просто перезапускает таймер.
    pub fn arm(&mut self, which: AllyTimer, interval_secs: f32) {
        *self.slot_mut(which) = Some(Timer::new(interval_duration(interval_secs), TimerMode::Repeating));
    }

    pub fn clear(&mut self, which: AllyTimer) {
        *self.slot_mut(which) = None;
    }

    pub fn is_armed(&self, which: AllyTimer) -> bool {
        self.slot(which).is_some()
    }

    /// Тикает таймер; `true` если период истёк в этом тике.
    /// Неактивный таймер никогда не срабатывает.
    pub fn tick(&mut self, which: AllyTimer, delta: Duration) -> bool {
        match self.slot_mut(which) {
            Some(timer) => timer.tick(delta).just_finished(),
            None => false,
        }
    }

    fn slot(&self, which: AllyTimer) -> &Option<Timer> {
        match which {
            AllyTimer::PlayerMotion => &self.player_motion,
            AllyTimer::LeadWaypoint => &self.lead_waypoint,
            AllyTimer::Sprint => &self.sprint,
        }
    }

    fn slot_mut(&mut self, which: AllyTimer) -> &mut Option<Timer> {
        match which {
            AllyTimer::PlayerMotion => &mut self.player_motion,
            AllyTimer::LeadWaypoint => &mut self.lead_waypoint,
            AllyTimer::Sprint => &mut self.sprint,
        }
    }
}
