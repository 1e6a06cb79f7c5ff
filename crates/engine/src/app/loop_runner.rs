use std::thread;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::content::MissingAssetError;
use crate::{resolve_app_paths, AssetCatalog, StartupError};

use super::metrics::MetricsAccumulator;
use super::physics::Vec2;
use super::scene::{InputSnapshot, SceneCommand, SceneDirector, SceneMachine, SceneRequest};

/// Supplies one input snapshot per simulation tick. A windowing backend
/// implements this against its event queue; tests hand in a scripted one.
pub trait InputSource {
    fn poll(&mut self) -> InputSnapshot;
}

#[derive(Debug, Clone)]
pub struct LoopConfig {
    pub world_width: f32,
    pub world_height: f32,
    pub target_tps: u32,
    pub max_frame_delta: Duration,
    pub max_ticks_per_frame: u32,
    pub metrics_log_interval: Duration,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            world_width: 960.0,
            world_height: 600.0,
            target_tps: 60,
            max_frame_delta: Duration::from_millis(250),
            max_ticks_per_frame: 5,
            metrics_log_interval: Duration::from_secs(1),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Startup(#[from] StartupError),
    #[error(transparent)]
    Assets(#[from] MissingAssetError),
}

pub fn run_app(
    config: LoopConfig,
    director: Box<dyn SceneDirector>,
    mut input: Box<dyn InputSource>,
) -> Result<(), AppError> {
    let app_paths = resolve_app_paths()?;
    info!(
        root = %app_paths.root.display(),
        assets_dir = %app_paths.assets_dir.display(),
        data_dir = %app_paths.data_dir.display(),
        "startup"
    );
    let assets = std::sync::Arc::new(AssetCatalog::load(&app_paths)?);

    let target_tps = config.target_tps.max(1);
    let max_frame_delta =
        normalize_non_zero_duration(config.max_frame_delta, Duration::from_millis(250));
    let max_ticks_per_frame = config.max_ticks_per_frame.max(1);
    let metrics_log_interval =
        normalize_non_zero_duration(config.metrics_log_interval, Duration::from_secs(1));
    let fixed_dt = Duration::from_secs_f64(1.0 / f64::from(target_tps));
    let fixed_dt_seconds = fixed_dt.as_secs_f32();
    let world_bounds = Vec2 {
        x: config.world_width,
        y: config.world_height,
    };

    let mut machine = SceneMachine::new(
        director,
        assets,
        world_bounds,
        SceneRequest::loading(),
    );

    info!(
        target_tps,
        max_frame_delta_ms = max_frame_delta.as_millis() as u64,
        max_ticks_per_frame,
        metrics_log_interval_ms = metrics_log_interval.as_millis() as u64,
        "loop_config"
    );

    let mut accumulator = Duration::ZERO;
    let mut last_frame_instant = Instant::now();
    let mut metrics = MetricsAccumulator::new(metrics_log_interval, Instant::now());

    loop {
        let now = Instant::now();
        let raw_frame_dt = now.saturating_duration_since(last_frame_instant);
        last_frame_instant = now;

        let clamped_frame_dt = clamp_frame_delta(raw_frame_dt, max_frame_delta);
        accumulator = accumulator.saturating_add(clamped_frame_dt);

        let step_plan = plan_sim_steps(accumulator, fixed_dt, max_ticks_per_frame);
        for _ in 0..step_plan.ticks_to_run {
            let snapshot = input.poll();
            if snapshot.quit_requested() {
                info!(reason = "input", "shutdown_requested");
                machine.shutdown();
                info!("shutdown");
                return Ok(());
            }

            let command = machine.update(fixed_dt_seconds, &snapshot);
            for key in machine.world_mut().audio.take_queued() {
                debug!(sfx = key, "sfx_play");
            }
            match command {
                SceneCommand::Switch(request) => machine.switch(request),
                SceneCommand::Quit => {
                    info!(reason = "scene", "shutdown_requested");
                    machine.shutdown();
                    info!("shutdown");
                    return Ok(());
                }
                SceneCommand::None => {}
            }
            metrics.record_tick();
        }
        accumulator = step_plan.remaining_accumulator;

        if step_plan.dropped_backlog > Duration::ZERO {
            warn!(
                dropped_backlog_ms = step_plan.dropped_backlog.as_millis() as u64,
                max_ticks_per_frame, "sim_clamp_triggered"
            );
        }

        metrics.record_frame(raw_frame_dt);
        if let Some(snapshot) = metrics.sample(Instant::now()) {
            info!(
                fps = snapshot.fps,
                tps = snapshot.tps,
                frame_time_ms = snapshot.frame_time_ms,
                body_count = machine.world().physics.body_count(),
                title = machine.debug_title().as_deref().unwrap_or(""),
                "loop_metrics"
            );
        }

        // Pace the loop toward target tps.
        let frame_elapsed = Instant::now().saturating_duration_since(now);
        if let Some(sleep) = fixed_dt.checked_sub(frame_elapsed) {
            thread::sleep(sleep);
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct StepPlan {
    ticks_to_run: u32,
    remaining_accumulator: Duration,
    dropped_backlog: Duration,
}

fn plan_sim_steps(
    mut accumulator: Duration,
    fixed_dt: Duration,
    max_ticks_per_frame: u32,
) -> StepPlan {
    let mut ticks_to_run = 0u32;

    while accumulator >= fixed_dt && ticks_to_run < max_ticks_per_frame {
        accumulator = accumulator.saturating_sub(fixed_dt);
        ticks_to_run = ticks_to_run.saturating_add(1);
    }

    if accumulator >= fixed_dt {
        StepPlan {
            ticks_to_run,
            remaining_accumulator: Duration::ZERO,
            dropped_backlog: accumulator,
        }
    } else {
        StepPlan {
            ticks_to_run,
            remaining_accumulator: accumulator,
            dropped_backlog: Duration::ZERO,
        }
    }
}

fn clamp_frame_delta(frame_dt: Duration, max_frame_delta: Duration) -> Duration {
    frame_dt.min(max_frame_delta)
}

fn normalize_non_zero_duration(value: Duration, fallback: Duration) -> Duration {
    if value.is_zero() {
        fallback
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_frame_delta_caps_large_frame() {
        let max_frame_delta = Duration::from_millis(250);
        let raw_frame_dt = Duration::from_millis(600);

        assert_eq!(
            clamp_frame_delta(raw_frame_dt, max_frame_delta),
            max_frame_delta
        );
    }

    #[test]
    fn plan_sim_steps_runs_expected_ticks_without_drop() {
        let fixed_dt = Duration::from_millis(16);
        let result = plan_sim_steps(Duration::from_millis(48), fixed_dt, 5);

        assert_eq!(result.ticks_to_run, 3);
        assert_eq!(result.remaining_accumulator, Duration::ZERO);
        assert_eq!(result.dropped_backlog, Duration::ZERO);
    }

    #[test]
    fn plan_sim_steps_drops_backlog_when_tick_cap_hit() {
        let fixed_dt = Duration::from_millis(16);
        let result = plan_sim_steps(Duration::from_millis(120), fixed_dt, 3);

        assert_eq!(result.ticks_to_run, 3);
        assert_eq!(result.remaining_accumulator, Duration::ZERO);
        assert_eq!(result.dropped_backlog, Duration::from_millis(72));
    }

    #[test]
    fn plan_sim_steps_keeps_partial_step_in_accumulator() {
        let fixed_dt = Duration::from_millis(16);
        let result = plan_sim_steps(Duration::from_millis(40), fixed_dt, 5);

        assert_eq!(result.ticks_to_run, 2);
        assert_eq!(result.remaining_accumulator, Duration::from_millis(8));
        assert_eq!(result.dropped_backlog, Duration::ZERO);
    }

    #[test]
    fn normalize_non_zero_duration_keeps_valid_value() {
        let value = Duration::from_millis(100);
        assert_eq!(
            normalize_non_zero_duration(value, Duration::from_secs(1)),
            value
        );
    }

    #[test]
    fn normalize_non_zero_duration_substitutes_fallback_for_zero() {
        assert_eq!(
            normalize_non_zero_duration(Duration::ZERO, Duration::from_secs(1)),
            Duration::from_secs(1)
        );
    }
}
