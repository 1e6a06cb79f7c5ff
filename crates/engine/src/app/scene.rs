use std::sync::Arc;

use tracing::info;

use crate::content::AssetCatalog;

use super::audio::AudioMixer;
use super::display::Camera;
use super::input::{ActionStates, InputAction};
use super::physics::{PhysicsWorld, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneKind {
    Loading,
    Title,
    Play,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneRequest {
    pub kind: SceneKind,
    pub level: usize,
}

impl SceneRequest {
    pub fn loading() -> Self {
        Self {
            kind: SceneKind::Loading,
            level: 0,
        }
    }

    pub fn title() -> Self {
        Self {
            kind: SceneKind::Title,
            level: 0,
        }
    }

    pub fn play(level: usize) -> Self {
        Self {
            kind: SceneKind::Play,
            level,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneCommand {
    None,
    Switch(SceneRequest),
    Quit,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    quit_requested: bool,
    actions: ActionStates,
}

impl InputSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn is_down(&self, action: InputAction) -> bool {
        self.actions.is_down(action)
    }

    /// Key-up edge for this tick.
    pub fn released(&self, action: InputAction) -> bool {
        self.actions.released(action)
    }

    /// How long the action has been held, as of this tick.
    pub fn down_seconds(&self, action: InputAction) -> f32 {
        self.actions.down_seconds(action)
    }

    pub fn with_quit_requested(mut self, quit_requested: bool) -> Self {
        self.quit_requested = quit_requested;
        self
    }

    pub fn with_action_down(mut self, action: InputAction, is_down: bool) -> Self {
        self.actions.set_down(action, is_down);
        self
    }

    pub fn with_action_released(mut self, action: InputAction, released: bool) -> Self {
        self.actions.set_released(action, released);
        self
    }

    pub fn with_down_seconds(mut self, action: InputAction, seconds: f32) -> Self {
        self.actions.set_down_seconds(action, seconds);
        self
    }
}

/// Everything a scene owns for its lifetime: bodies, queued audio, the
/// camera, and a shared handle to the loaded assets. A scene switch
/// discards the whole world and builds a fresh one, so no state leaks
/// across restarts.
pub struct SceneWorld {
    pub physics: PhysicsWorld,
    pub audio: AudioMixer,
    pub camera: Camera,
    assets: Arc<AssetCatalog>,
}

impl SceneWorld {
    pub fn new(assets: Arc<AssetCatalog>, bounds: Vec2) -> Self {
        Self {
            physics: PhysicsWorld::new(bounds),
            audio: AudioMixer::default(),
            camera: Camera::default(),
            assets,
        }
    }

    pub fn assets(&self) -> &AssetCatalog {
        &self.assets
    }
}

pub trait Scene {
    fn load(&mut self, world: &mut SceneWorld);
    fn update(
        &mut self,
        fixed_dt_seconds: f32,
        input: &InputSnapshot,
        world: &mut SceneWorld,
    ) -> SceneCommand;
    fn unload(&mut self, world: &mut SceneWorld);
    fn debug_title(&self, _world: &SceneWorld) -> Option<String> {
        None
    }
}

/// Builds a fresh scene instance per request. Restarting a level goes
/// through here too, so a restarted scene never reuses old state.
pub trait SceneDirector {
    fn build(&mut self, request: SceneRequest) -> Box<dyn Scene>;
}

pub struct SceneMachine {
    director: Box<dyn SceneDirector>,
    assets: Arc<AssetCatalog>,
    world_bounds: Vec2,
    active: Box<dyn Scene>,
    active_request: SceneRequest,
    world: SceneWorld,
}

impl SceneMachine {
    pub fn new(
        mut director: Box<dyn SceneDirector>,
        assets: Arc<AssetCatalog>,
        world_bounds: Vec2,
        initial: SceneRequest,
    ) -> Self {
        let mut world = SceneWorld::new(assets.clone(), world_bounds);
        let mut active = director.build(initial);
        active.load(&mut world);
        info!(
            scene = ?initial.kind,
            level = initial.level,
            body_count = world.physics.body_count(),
            "scene_loaded"
        );
        Self {
            director,
            assets,
            world_bounds,
            active,
            active_request: initial,
            world,
        }
    }

    pub fn active_request(&self) -> SceneRequest {
        self.active_request
    }

    pub fn world(&self) -> &SceneWorld {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut SceneWorld {
        &mut self.world
    }

    pub fn update(&mut self, fixed_dt_seconds: f32, input: &InputSnapshot) -> SceneCommand {
        self.active.update(fixed_dt_seconds, input, &mut self.world)
    }

    pub fn switch(&mut self, request: SceneRequest) {
        self.active.unload(&mut self.world);
        self.world = SceneWorld::new(self.assets.clone(), self.world_bounds);
        self.active = self.director.build(request);
        self.active.load(&mut self.world);
        self.active_request = request;
        info!(
            scene = ?request.kind,
            level = request.level,
            body_count = self.world.physics.body_count(),
            "scene_switched"
        );
    }

    pub fn debug_title(&self) -> Option<String> {
        self.active.debug_title(&self.world)
    }

    pub fn shutdown(&mut self) {
        self.active.unload(&mut self.world);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_assets() -> Arc<AssetCatalog> {
        Arc::new(AssetCatalog::from_parts(
            Vec::new(),
            std::iter::empty(),
            std::iter::empty(),
        ))
    }

    struct SpawningScene {
        spawn_count: usize,
        unload_calls: usize,
    }

    impl Scene for SpawningScene {
        fn load(&mut self, world: &mut SceneWorld) {
            for index in 0..self.spawn_count {
                world.physics.insert(
                    Vec2 {
                        x: index as f32,
                        y: 0.0,
                    },
                    Vec2 { x: 1.0, y: 1.0 },
                );
            }
        }

        fn update(
            &mut self,
            _fixed_dt_seconds: f32,
            _input: &InputSnapshot,
            _world: &mut SceneWorld,
        ) -> SceneCommand {
            SceneCommand::None
        }

        fn unload(&mut self, _world: &mut SceneWorld) {
            self.unload_calls += 1;
        }
    }

    struct CountingDirector {
        builds: usize,
    }

    impl SceneDirector for CountingDirector {
        fn build(&mut self, request: SceneRequest) -> Box<dyn Scene> {
            self.builds += 1;
            Box::new(SpawningScene {
                spawn_count: request.level + 1,
                unload_calls: 0,
            })
        }
    }

    fn machine() -> SceneMachine {
        SceneMachine::new(
            Box::new(CountingDirector { builds: 0 }),
            empty_assets(),
            Vec2 { x: 100.0, y: 100.0 },
            SceneRequest::play(0),
        )
    }

    #[test]
    fn switch_builds_fresh_world() {
        let mut machine = machine();
        assert_eq!(machine.world().physics.body_count(), 1);

        machine
            .world_mut()
            .physics
            .insert(Vec2::default(), Vec2 { x: 1.0, y: 1.0 });
        assert_eq!(machine.world().physics.body_count(), 2);

        machine.switch(SceneRequest::play(2));
        assert_eq!(machine.active_request(), SceneRequest::play(2));
        // Only the new scene's own spawns survive the switch.
        assert_eq!(machine.world().physics.body_count(), 3);
    }

    #[test]
    fn switching_to_same_request_still_reconstructs() {
        let mut machine = machine();
        machine
            .world_mut()
            .physics
            .insert(Vec2::default(), Vec2 { x: 1.0, y: 1.0 });

        machine.switch(SceneRequest::play(0));
        assert_eq!(machine.world().physics.body_count(), 1);
    }

    #[test]
    fn snapshot_builders_round_through_accessors() {
        let snapshot = InputSnapshot::empty()
            .with_action_down(InputAction::Jump, true)
            .with_down_seconds(InputAction::Jump, 0.15)
            .with_action_released(InputAction::Confirm, true)
            .with_quit_requested(true);

        assert!(snapshot.is_down(InputAction::Jump));
        assert!((snapshot.down_seconds(InputAction::Jump) - 0.15).abs() < f32::EPSILON);
        assert!(snapshot.released(InputAction::Confirm));
        assert!(!snapshot.is_down(InputAction::MoveLeft));
        assert!(snapshot.quit_requested());
    }

    #[test]
    fn releasing_action_clears_held_duration() {
        let snapshot = InputSnapshot::empty()
            .with_action_down(InputAction::Jump, true)
            .with_down_seconds(InputAction::Jump, 0.4)
            .with_action_down(InputAction::Jump, false);

        assert_eq!(snapshot.down_seconds(InputAction::Jump), 0.0);
    }
}
