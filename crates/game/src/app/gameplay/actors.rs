/// Shared die-then-remove lifecycle. Killing an actor disables its body
/// and plays the death clip; the actor is marked removed only when that
/// clip finishes, so the corpse stays visible for the clip's duration.
trait Mortal {
    fn body(&self) -> BodyId;
    fn alive(&self) -> bool;
    fn animator_mut(&mut self) -> &mut Animator;
    fn on_killed(&mut self);
    fn on_removed(&mut self);

    fn kill(&mut self, physics: &mut PhysicsWorld) {
        if !self.alive() {
            return;
        }
        self.on_killed();
        if let Some(body) = physics.body_mut(self.body()) {
            body.enabled = false;
        }
        self.animator_mut().play("die");
    }

    fn apply_clip_completion(&mut self, finished: &str) {
        if finished == "die" {
            self.on_removed();
        }
    }
}

struct Hero {
    body: BodyId,
    animator: Animator,
    facing: Facing,
    alive: bool,
    frozen: bool,
    climbing: bool,
    boosting: bool,
    removed: bool,
}

impl Hero {
    fn spawn(physics: &mut PhysicsWorld, position: Vec2) -> Self {
        let body = physics.insert(position, HERO_SIZE);
        if let Some(body) = physics.body_mut(body) {
            body.collide_world_bounds = true;
        }

        let mut animator = Animator::new();
        animator.add_clip("stop", &[0], 1.0, false);
        animator.add_clip("run", &[1, 2], 8.0, true);
        animator.add_clip("jump", &[3], 1.0, false);
        animator.add_clip("fall", &[4], 1.0, false);
        animator.add_clip("die", &[5, 5, 5, 5, 6, 6, 6, 6, 5, 5, 6, 6], 12.0, false);
        animator.add_clip("climb", &[7, 8], 6.0, true);
        animator.add_clip("ladder", &[7], 1.0, false);
        animator.play("stop");

        Self {
            body,
            animator,
            facing: Facing::Right,
            alive: true,
            frozen: false,
            climbing: false,
            boosting: false,
            removed: false,
        }
    }

    /// `direction` is -1, 0, or 1. Sprinting doubles the speed.
    fn run(&mut self, physics: &mut PhysicsWorld, direction: f32, sprint: bool) {
        if !self.alive || self.frozen {
            return;
        }
        if direction < 0.0 {
            self.facing = Facing::Left;
        } else if direction > 0.0 {
            self.facing = Facing::Right;
        }
        let speed = if direction == 0.0 {
            0.0
        } else {
            self.facing.sign() * RUN_SPEED * sprint_factor(sprint)
        };
        if let Some(body) = physics.body_mut(self.body) {
            body.velocity.x = speed;
        }
    }

    fn climb(&mut self, physics: &mut PhysicsWorld, direction: f32, sprint: bool) {
        if !self.alive || self.frozen {
            return;
        }
        if let Some(body) = physics.body_mut(self.body) {
            body.velocity.y = direction * CLIMB_SPEED * sprint_factor(sprint);
        }
    }

    fn set_climbing(&mut self, physics: &mut PhysicsWorld, climbing: bool) {
        self.climbing = climbing;
        if let Some(body) = physics.body_mut(self.body) {
            body.allow_gravity = !climbing;
            if climbing {
                body.velocity.y = 0.0;
            }
        }
    }

    /// Returns true only on the tick the jump actually starts. Holding
    /// jump keeps boosting until `stop_jump_boost`, even while airborne.
    fn jump(&mut self, physics: &mut PhysicsWorld) -> bool {
        let grounded = physics
            .body(self.body)
            .map(Body::grounded)
            .unwrap_or(false);
        let can_jump = grounded && self.alive && !self.frozen;

        if can_jump || self.boosting {
            if let Some(body) = physics.body_mut(self.body) {
                body.velocity.y = -JUMP_SPEED;
            }
            self.boosting = true;
        }
        can_jump
    }

    fn stop_jump_boost(&mut self) {
        self.boosting = false;
    }

    fn bounce(&mut self, physics: &mut PhysicsWorld) {
        if let Some(body) = physics.body_mut(self.body) {
            body.velocity.y = -BOUNCE_SPEED;
        }
    }

    /// Quest-complete freeze: the hero stops reacting to everything
    /// while the exit fade plays.
    fn freeze(&mut self, physics: &mut PhysicsWorld) {
        self.frozen = true;
        if let Some(body) = physics.body_mut(self.body) {
            body.enabled = false;
            body.velocity = Vec2::default();
        }
    }

    fn update(&mut self, dt_seconds: f32, physics: &PhysicsWorld) {
        if let Some(finished) = self.animator.step(dt_seconds) {
            self.apply_clip_completion(finished);
        }

        let (velocity, grounded) = match physics.body(self.body) {
            Some(body) => (body.velocity, body.grounded()),
            None => (Vec2::default(), false),
        };
        let state =
            select_hero_animation(self.alive, self.frozen, self.climbing, velocity, grounded);
        let clip = state.clip();
        if self.animator.current() != Some(clip) {
            self.animator.play(clip);
        }
    }
}

impl Mortal for Hero {
    fn body(&self) -> BodyId {
        self.body
    }

    fn alive(&self) -> bool {
        self.alive
    }

    fn animator_mut(&mut self) -> &mut Animator {
        &mut self.animator
    }

    fn on_killed(&mut self) {
        self.alive = false;
    }

    fn on_removed(&mut self) {
        self.removed = true;
    }
}

/// Picks the hero clip by fixed priority: death wins over everything,
/// freeze pins the idle pose, then climbing, then airborne states, then
/// ground movement.
fn select_hero_animation(
    alive: bool,
    frozen: bool,
    climbing: bool,
    velocity: Vec2,
    grounded: bool,
) -> AnimationState {
    if !alive {
        return AnimationState::Dying;
    }
    if frozen {
        return AnimationState::Idle;
    }
    if climbing {
        if velocity.y != 0.0 {
            return AnimationState::Climbing;
        }
        return AnimationState::OnLadder;
    }
    if velocity.y < 0.0 {
        return AnimationState::Jumping;
    }
    if velocity.y >= 0.0 && !grounded {
        return AnimationState::Falling;
    }
    if velocity.x != 0.0 && grounded {
        return AnimationState::Running;
    }
    AnimationState::Idle
}

struct Spider {
    body: BodyId,
    animator: Animator,
    alive: bool,
    removed: bool,
}

impl Spider {
    fn spawn(physics: &mut PhysicsWorld, position: Vec2) -> Self {
        let body = physics.insert(position, SPIDER_SIZE);
        if let Some(body) = physics.body_mut(body) {
            body.collide_world_bounds = true;
            body.velocity.x = SPIDER_SPEED;
        }

        let mut animator = Animator::new();
        animator.add_clip("crawl", &[0, 1, 2], 8.0, true);
        animator.add_clip("die", &[0, 4, 0, 4, 0, 4, 3, 3, 3, 3], 12.0, false);
        animator.play("crawl");

        Self {
            body,
            animator,
            alive: true,
            removed: false,
        }
    }

    /// Patrols between obstacles: reverses on any lateral contact.
    fn update(&mut self, dt_seconds: f32, physics: &mut PhysicsWorld) {
        if let Some(finished) = self.animator.step(dt_seconds) {
            self.apply_clip_completion(finished);
        }
        if !self.alive {
            return;
        }
        if let Some(body) = physics.body_mut(self.body) {
            if body.touching.left || body.blocked.left {
                body.velocity.x = SPIDER_SPEED;
            } else if body.touching.right || body.blocked.right {
                body.velocity.x = -SPIDER_SPEED;
            }
        }
    }
}

impl Mortal for Spider {
    fn body(&self) -> BodyId {
        self.body
    }

    fn alive(&self) -> bool {
        self.alive
    }

    fn animator_mut(&mut self) -> &mut Animator {
        &mut self.animator
    }

    fn on_killed(&mut self) {
        self.alive = false;
    }

    fn on_removed(&mut self) {
        self.removed = true;
    }
}
