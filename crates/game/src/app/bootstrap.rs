use engine::{InputSnapshot, InputSource, LoopConfig, SceneDirector};
use tracing::info;
use tracing_subscriber::EnvFilter;

use super::gameplay;

pub(crate) struct AppWiring {
    pub(crate) config: LoopConfig,
    pub(crate) director: Box<dyn SceneDirector>,
    pub(crate) input: Box<dyn InputSource>,
}

pub(crate) fn build_app() -> AppWiring {
    init_tracing();
    info!("=== Limelight Startup ===");

    AppWiring {
        config: LoopConfig::default(),
        director: Box::new(gameplay::GameDirector::new()),
        input: Box::new(IdleInput),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}

/// Placeholder input backend until a windowing frontend is wired in.
struct IdleInput;

impl InputSource for IdleInput {
    fn poll(&mut self) -> InputSnapshot {
        InputSnapshot::empty()
    }
}
