use std::time::Duration;

/// Fixed-cadence trigger fed by frame deltas.
///
/// Fires once per whole `interval` of accumulated time; leftover time carries into
/// the next frame so the cadence doesn't drift with the frame rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnTimer {
    interval: Duration,
    elapsed: Duration,
}

impl SpawnTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            elapsed: Duration::ZERO,
        }
    }

    /// Adds `dt` and returns how many times the timer fired.
    pub fn tick(&mut self, dt: Duration) -> u32 {
        self.elapsed = self.elapsed.saturating_add(dt);
        let interval_ns = self.interval.as_nanos();
        let fired = self.elapsed.as_nanos() / interval_ns;
        if fired == 0 {
            return 0;
        }
        let leftover = self.elapsed.as_nanos() - fired * interval_ns;
        self.elapsed = Duration::from_nanos(leftover as u64);
        fired.min(u32::MAX as u128) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_interval() {
        let mut t = SpawnTimer::new(Duration::from_millis(400));
        assert_eq!(t.tick(Duration::from_millis(399)), 0);
        assert_eq!(t.tick(Duration::from_millis(1)), 1);
        assert_eq!(t.tick(Duration::from_millis(399)), 0);
    }

    #[test]
    fn leftover_time_carries_over() {
        let mut t = SpawnTimer::new(Duration::from_millis(400));
        assert_eq!(t.tick(Duration::from_millis(500)), 1);
        assert_eq!(t.tick(Duration::from_millis(299)), 0);
        assert_eq!(t.tick(Duration::from_millis(1)), 1);
    }

    #[test]
    fn long_frames_fire_several_times() {
        let mut t = SpawnTimer::new(Duration::from_millis(400));
        assert_eq!(t.tick(Duration::from_millis(1250)), 3);
        assert_eq!(t.tick(Duration::from_millis(349)), 0);
        assert_eq!(t.tick(Duration::from_millis(1)), 1);
    }

    #[test]
    fn sixty_fps_frames_spawn_on_cadence() {
        let mut t = SpawnTimer::new(Duration::from_millis(400));
        let frame = Duration::from_micros(16_667);
        let fired: u32 = (0..60).map(|_| t.tick(frame)).sum();
        // One second of frames at 400 ms cadence.
        assert_eq!(fired, 2);
    }

    #[test]
    fn zero_interval_is_clamped_to_a_millisecond() {
        let mut t = SpawnTimer::new(Duration::ZERO);
        assert_eq!(t.tick(Duration::from_micros(999)), 0);
        assert_eq!(t.tick(Duration::from_millis(3)), 3);
    }
}
