use super::{BurstOptions, CelebrationConfig, Origin};

/// Maps a unit sample in `[0, 1)` onto `[min, max)`.
pub fn random_in_range(min: f64, max: f64, unit: f64) -> f64 {
    unit * (max - min) + min
}

/// One celebration's timing window, anchored to an absolute end time.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    config: CelebrationConfig,
    end_ms: f64,
}

impl Schedule {
    pub fn new(config: CelebrationConfig, now_ms: f64) -> Self {
        let end_ms = now_ms + f64::from(config.duration_ms);
        Self { config, end_ms }
    }

    #[cfg(test)]
    pub fn config(&self) -> &CelebrationConfig {
        &self.config
    }

    pub fn time_left(&self, now_ms: f64) -> f64 {
        self.end_ms - now_ms
    }

    pub fn is_over(&self, now_ms: f64) -> bool {
        self.time_left(now_ms) <= 0.0
    }

    /// Decays linearly from `max_particles` to zero across the window.
    pub fn particle_count(&self, time_left_ms: f64) -> f64 {
        self.config.max_particles * (time_left_ms / f64::from(self.config.duration_ms))
    }

    /// Bursts for the tick at `now_ms`: left then right. `None` once the
    /// window has closed, which is the signal to stop repeating.
    ///
    /// `random` yields unit samples in `[0, 1)` and is drawn four times, in
    /// order: left x, left y, right x, right y.
    pub fn tick(&self, now_ms: f64, mut random: impl FnMut() -> f64) -> Option<[BurstOptions; 2]> {
        if self.is_over(now_ms) {
            return None;
        }
        let time_left = self.time_left(now_ms);

        let particle_count = self.particle_count(time_left);
        let (y_min, y_max) = self.config.origin_y;
        let mut burst = |(x_min, x_max): (f64, f64)| {
            let x = random_in_range(x_min, x_max, random());
            let y = random_in_range(y_min, y_max, random());
            BurstOptions {
                start_velocity: self.config.burst.start_velocity,
                spread: self.config.burst.spread,
                ticks: self.config.burst.ticks,
                z_index: self.config.burst.z_index,
                particle_count,
                origin: Origin { x, y },
            }
        };

        let left = burst(self.config.left_origin_x);
        let right = burst(self.config.right_origin_x);
        Some([left, right])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: f64 = 1_700_000_000_000.0;

    /// Drives a schedule with a clock that advances exactly one tick per step,
    /// starting with an immediate tick at the invocation instant.
    fn run(schedule: &Schedule, mut random: impl FnMut() -> f64) -> Vec<[BurstOptions; 2]> {
        let tick_ms = f64::from(schedule.config().tick_ms);
        let mut fired = Vec::new();
        for n in 0.. {
            let now = START + tick_ms * n as f64;
            match schedule.tick(now, &mut random) {
                Some(bursts) => fired.push(bursts),
                None => break,
            }
        }
        fired
    }

    fn scripted(samples: &'static [f64]) -> impl FnMut() -> f64 {
        let mut i = 0;
        move || {
            let v = samples[i % samples.len()];
            i += 1;
            v
        }
    }

    #[test]
    fn test_random_in_range_bounds() {
        assert!((random_in_range(0.1, 0.3, 0.0) - 0.1).abs() < 1e-12);
        assert!((random_in_range(0.1, 0.3, 0.5) - 0.2).abs() < 1e-12);
        assert!(random_in_range(0.7, 0.9, 0.999_999) < 0.9);
    }

    #[test]
    fn test_full_window_fires_twenty_ticks_forty_bursts() {
        let schedule = Schedule::new(CelebrationConfig::default(), START);
        let fired = run(&schedule, scripted(&[0.5]));
        assert_eq!(fired.len(), 20);
        assert_eq!(fired.iter().map(|b| b.len()).sum::<usize>(), 40);
    }

    #[test]
    fn test_tick_at_window_end_stops_without_bursts() {
        let schedule = Schedule::new(CelebrationConfig::default(), START);
        assert!(schedule.is_over(START + 5_000.0));
        assert!(schedule.tick(START + 5_000.0, || 0.5).is_none());
        assert!(schedule.tick(START + 5_250.0, || 0.5).is_none());
        assert!(schedule.tick(START + 4_999.0, || 0.5).is_some());
    }

    #[test]
    fn test_particle_count_decays_linearly() {
        let schedule = Schedule::new(CelebrationConfig::default(), START);
        let fired = run(&schedule, scripted(&[0.5]));
        for (n, [left, right]) in fired.iter().enumerate() {
            let remaining = 5_000.0 - 250.0 * n as f64;
            let expected = 50.0 * (remaining / 5_000.0);
            assert!((left.particle_count - expected).abs() < 1e-9, "tick {n}");
            assert_eq!(left.particle_count, right.particle_count);
        }
        assert!((fired[0][0].particle_count - 50.0).abs() < 1e-9);
        assert!((fired[19][0].particle_count - 2.5).abs() < 1e-9);
        assert!(fired.windows(2).all(|w| w[1][0].particle_count < w[0][0].particle_count));
    }

    #[test]
    fn test_origins_stay_in_their_bands() {
        let schedule = Schedule::new(CelebrationConfig::default(), START);
        let fired = run(&schedule, scripted(&[0.0, 0.999_999, 0.37, 0.5, 0.999_999, 0.0, 0.81]));
        for [left, right] in &fired {
            assert!((0.1..=0.3).contains(&left.origin.x), "left x {}", left.origin.x);
            assert!((0.7..=0.9).contains(&right.origin.x), "right x {}", right.origin.x);
            for y in [left.origin.y, right.origin.y] {
                assert!((-0.2..0.8).contains(&y), "y {y}");
            }
        }
    }

    #[test]
    fn test_random_draw_order_left_then_right() {
        let schedule = Schedule::new(CelebrationConfig::default(), START);
        let [left, right] = schedule.tick(START, scripted(&[0.0, 0.2, 1.0 - 1e-9, 0.7])).unwrap();
        assert!((left.origin.x - 0.1).abs() < 1e-9);
        assert!((left.origin.y - 0.0).abs() < 1e-9);
        assert!((right.origin.x - 0.9).abs() < 1e-6);
        assert!((right.origin.y - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_bursts_carry_fixed_defaults() {
        let schedule = Schedule::new(CelebrationConfig::default(), START);
        let [left, right] = schedule.tick(START + 250.0, || 0.5).unwrap();
        for burst in [left, right] {
            assert_eq!(burst.start_velocity, 30.0);
            assert_eq!(burst.spread, 360.0);
            assert_eq!(burst.ticks, 60);
            assert_eq!(burst.z_index, 0);
        }
    }

    #[test]
    fn test_shorter_window_scales_tick_count() {
        let config = CelebrationConfig { duration_ms: 1_000, tick_ms: 100, ..CelebrationConfig::default() };
        let schedule = Schedule::new(config, START);
        assert_eq!(run(&schedule, || 0.5).len(), 10);
    }
}
