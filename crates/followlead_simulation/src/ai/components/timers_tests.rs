//! Tests for AllyTimers component.

#[cfg(test)]
mod tests {
    use super::super::timers::{AllyTimer, AllyTimers};
    use std::time::Duration;

    #[test]
    fn test_unarmed_timer_never_fires() {
        let mut timers = AllyTimers::default();
        assert!(!timers.is_armed(AllyTimer::Sprint));
        assert!(!timers.tick(AllyTimer::Sprint, Duration::from_secs(10)));
    }

    #[test]
    fn test_repeating_timer_fires_every_interval() {
        let mut timers = AllyTimers::default();
        timers.arm(AllyTimer::LeadWaypoint, 0.5);

        let step = Duration::from_millis(250);
        assert!(!timers.tick(AllyTimer::LeadWaypoint, step));
        assert!(timers.tick(AllyTimer::LeadWaypoint, step));
        assert!(!timers.tick(AllyTimer::LeadWaypoint, step));
        assert!(timers.tick(AllyTimer::LeadWaypoint, step));
    }

    #[test]
    fn test_rearm_restarts_countdown() {
        let mut timers = AllyTimers::default();
        timers.arm(AllyTimer::PlayerMotion, 0.1);
        assert!(!timers.tick(AllyTimer::PlayerMotion, Duration::from_millis(80)));

        timers.arm(AllyTimer::PlayerMotion, 0.1);
        assert!(!timers.tick(AllyTimer::PlayerMotion, Duration::from_millis(80)));
        assert!(timers.tick(AllyTimer::PlayerMotion, Duration::from_millis(40)));
    }

    #[test]
    fn test_timers_are_independent() {
        let mut timers = AllyTimers::default();
        timers.arm(AllyTimer::PlayerMotion, 0.05);
        timers.arm(AllyTimer::Sprint, 0.5);

        timers.clear(AllyTimer::PlayerMotion);

        assert!(!timers.is_armed(AllyTimer::PlayerMotion));
        assert!(timers.is_armed(AllyTimer::Sprint));
        assert!(!timers.is_armed(AllyTimer::LeadWaypoint));
    }
}
