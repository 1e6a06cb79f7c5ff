use engine::{
    Animator, AudioMixer, Body, BodyId, FadeEvent, InputAction, InputSnapshot, MissingAssetError,
    Overlay, PhysicsWorld, Scene, SceneCommand, SceneDirector, SceneKind, SceneRequest, SceneWorld,
    Vec2,
};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, error, info, warn};

const RUN_SPEED: f32 = 200.0;
const CLIMB_SPEED: f32 = 200.0;
const JUMP_SPEED: f32 = 400.0;
const BOUNCE_SPEED: f32 = 200.0;
const SPIDER_SPEED: f32 = 100.0;
const LEVEL_GRAVITY: f32 = 1200.0;
const LEVEL_COUNT: usize = 2;
const LEVEL_TIME_SECONDS: u32 = 260;
const JUMP_BOOST_SECONDS: f32 = 0.2;
const SPRINT_FACTOR: f32 = 2.0;
const TITLE_OPTION_COUNT: usize = 3;

const HERO_SIZE: Vec2 = Vec2 { x: 36.0, y: 42.0 };
const SPIDER_SIZE: Vec2 = Vec2 { x: 42.0, y: 32.0 };
const COIN_SIZE: Vec2 = Vec2 { x: 22.0, y: 22.0 };
const LADDER_SIZE: Vec2 = Vec2 { x: 24.0, y: 144.0 };
const WATER_SIZE: Vec2 = Vec2 { x: 22.0, y: 30.0 };
const GOAL_SIZE: Vec2 = Vec2 { x: 48.0, y: 62.0 };
const FUSEBOX_SIZE: Vec2 = Vec2 { x: 36.0, y: 48.0 };
const TIMER_SIZE: Vec2 = Vec2 { x: 30.0, y: 44.0 };
const SWITCH_SIZE: Vec2 = Vec2 { x: 24.0, y: 34.0 };
const ENEMY_WALL_SIZE: Vec2 = Vec2 { x: 8.0, y: 42.0 };

const SFX_JUMP: &str = "sfx:jump";
const SFX_COIN: &str = "sfx:coin";
const SFX_WATER: &str = "sfx:water";
const SFX_STOMP: &str = "sfx:stomp";
const SFX_DOOR: &str = "sfx:door";
const SFX_ELECTRICITY: &str = "sfx:electricity";
const SFX_SWITCH: &str = "sfx:switch";
const SFX_TIMER_DROP: &str = "sfx:timer_drop";
const SFX_BREAKER: &str = "sfx:breaker";

include!("types.rs");
include!("level.rs");
include!("actors.rs");
include!("hazards.rs");
include!("scene_state.rs");
include!("resolver.rs");
include!("scene_impl.rs");
include!("util.rs");

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
