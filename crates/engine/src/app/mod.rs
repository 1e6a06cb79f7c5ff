mod animation;
mod audio;
mod display;
mod input;
mod loop_runner;
mod metrics;
mod physics;
mod scene;

pub use animation::Animator;
pub use audio::AudioMixer;
pub use display::{Camera, FadeEvent, Overlay};
pub use input::InputAction;
pub use loop_runner::{run_app, AppError, InputSource, LoopConfig};
pub use metrics::LoopMetrics;
pub use physics::{Body, BodyId, PhysicsWorld, Touching, Vec2};
pub use scene::{
    InputSnapshot, Scene, SceneCommand, SceneDirector, SceneKind, SceneMachine, SceneRequest,
    SceneWorld,
};
