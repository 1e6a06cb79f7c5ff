use std::time::{Duration, Instant};

/// Periodic snapshot of loop health, logged by the runner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopMetrics {
    pub fps: f64,
    pub tps: f64,
    pub frame_time_ms: f64,
}

/// Accumulates frame/tick counts over a fixed interval and emits one
/// averaged snapshot per interval.
pub(crate) struct MetricsAccumulator {
    interval: Duration,
    window_start: Instant,
    frames: u32,
    ticks: u32,
    frame_time_sum: Duration,
}

impl MetricsAccumulator {
    pub(crate) fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            window_start: now,
            frames: 0,
            ticks: 0,
            frame_time_sum: Duration::ZERO,
        }
    }

    pub(crate) fn record_frame(&mut self, frame_time: Duration) {
        self.frames += 1;
        self.frame_time_sum += frame_time;
    }

    pub(crate) fn record_tick(&mut self) {
        self.ticks += 1;
    }

    /// Emits a snapshot once per interval, then starts a new window.
    pub(crate) fn sample(&mut self, now: Instant) -> Option<LoopMetrics> {
        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed < self.interval {
            return None;
        }
        let seconds = elapsed.as_secs_f64().max(f64::EPSILON);
        let snapshot = LoopMetrics {
            fps: f64::from(self.frames) / seconds,
            tps: f64::from(self.ticks) / seconds,
            frame_time_ms: if self.frames == 0 {
                0.0
            } else {
                self.frame_time_sum.as_secs_f64() * 1000.0 / f64::from(self.frames)
            },
        };
        self.window_start = now;
        self.frames = 0;
        self.ticks = 0;
        self.frame_time_sum = Duration::ZERO;
        Some(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_emitted_before_interval_elapses() {
        let start = Instant::now();
        let mut acc = MetricsAccumulator::new(Duration::from_secs(1), start);
        acc.record_frame(Duration::from_millis(16));
        acc.record_tick();

        assert!(acc.sample(start + Duration::from_millis(500)).is_none());
    }

    #[test]
    fn snapshot_computes_expected_averages() {
        let start = Instant::now();
        let mut acc = MetricsAccumulator::new(Duration::from_secs(1), start);
        for _ in 0..60 {
            acc.record_frame(Duration::from_millis(10));
        }
        for _ in 0..120 {
            acc.record_tick();
        }

        let snapshot = acc
            .sample(start + Duration::from_secs(1))
            .unwrap_or_else(|| panic!("interval elapsed, snapshot expected"));
        assert!((snapshot.fps - 60.0).abs() < 0.5);
        assert!((snapshot.tps - 120.0).abs() < 0.5);
        assert!((snapshot.frame_time_ms - 10.0).abs() < 0.1);
    }

    #[test]
    fn window_resets_after_sample() {
        let start = Instant::now();
        let mut acc = MetricsAccumulator::new(Duration::from_secs(1), start);
        acc.record_frame(Duration::from_millis(16));
        acc.record_tick();
        let _ = acc.sample(start + Duration::from_secs(1));

        // Fresh window, nothing recorded yet.
        let snapshot = acc.sample(start + Duration::from_secs(2));
        assert_eq!(
            snapshot,
            Some(LoopMetrics {
                fps: 0.0,
                tps: 0.0,
                frame_time_ms: 0.0,
            })
        );
    }
}
