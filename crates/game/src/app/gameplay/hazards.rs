#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FuseState {
    Lit,
    Blowing,
    Dark,
}

/// The fusebox darkens the stage. Blowing it starts a blow clip; the
/// lights only go out when that clip finishes, and the box cannot be
/// repaired until then.
struct FuseboxController {
    body: BodyId,
    animator: Animator,
    state: FuseState,
}

impl FuseboxController {
    fn spawn(physics: &mut PhysicsWorld, position: Vec2) -> Self {
        let body = spawn_static_body(physics, position, FUSEBOX_SIZE);

        let mut animator = Animator::new();
        animator.add_clip("lit", &[0, 1], 4.0, true);
        animator.add_clip("dying", &[2, 3, 2, 3, 2, 3], 10.0, false);
        animator.add_clip("dark", &[4], 1.0, false);
        animator.play("lit");

        Self {
            body,
            animator,
            state: FuseState::Lit,
        }
    }

    fn blow(&mut self, audio: &mut AudioMixer) {
        if self.state != FuseState::Lit {
            return;
        }
        self.state = FuseState::Blowing;
        self.animator.play("dying");
        audio.play(SFX_ELECTRICITY);
    }

    fn repair(&mut self, audio: &mut AudioMixer) {
        if self.state != FuseState::Dark {
            return;
        }
        self.state = FuseState::Lit;
        self.animator.play("lit");
        audio.play(SFX_SWITCH);
    }

    fn update(&mut self, dt_seconds: f32, audio: &mut AudioMixer) {
        if self.animator.step(dt_seconds) == Some("dying") {
            self.state = FuseState::Dark;
            self.animator.play("dark");
            audio.play(SFX_SWITCH);
        }
    }

    fn is_dark(&self) -> bool {
        self.state == FuseState::Dark
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerPropState {
    Up,
    Falling,
    Down,
}

/// The show-countdown prop. Knocking it over hides its readout until a
/// stagehand rights it again.
struct TimerPropController {
    body: BodyId,
    animator: Animator,
    state: TimerPropState,
    display_visible: bool,
}

impl TimerPropController {
    fn spawn(physics: &mut PhysicsWorld, position: Vec2) -> Self {
        let body = spawn_static_body(physics, position, TIMER_SIZE);

        let mut animator = Animator::new();
        animator.add_clip("up", &[0], 1.0, false);
        animator.add_clip("falling", &[1, 2, 3], 8.0, false);
        animator.add_clip("down", &[3], 1.0, false);
        animator.play("up");

        Self {
            body,
            animator,
            state: TimerPropState::Up,
            display_visible: true,
        }
    }

    fn knock_over(&mut self, audio: &mut AudioMixer) {
        if self.state != TimerPropState::Up {
            return;
        }
        self.state = TimerPropState::Falling;
        self.animator.play("falling");
        self.display_visible = false;
        audio.play(SFX_TIMER_DROP);
    }

    fn fix(&mut self, audio: &mut AudioMixer) {
        if self.state == TimerPropState::Up {
            return;
        }
        self.state = TimerPropState::Up;
        self.animator.play("up");
        self.display_visible = true;
        audio.play(SFX_COIN);
    }

    fn update(&mut self, dt_seconds: f32) {
        if self.animator.step(dt_seconds) == Some("falling") {
            self.state = TimerPropState::Down;
            self.animator.play("down");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpotlightState {
    On,
    Off,
}

/// Wall switch controlling the stage spotlights. Unlike the fusebox
/// there is no transition clip: the lighting overlays flip instantly.
struct SpotlightController {
    switch_body: BodyId,
    switch_animator: Animator,
    lighting: Overlay,
    blackout: Overlay,
    state: SpotlightState,
}

impl SpotlightController {
    fn spawn(physics: &mut PhysicsWorld, position: Vec2) -> Self {
        let switch_body = spawn_static_body(physics, position, SWITCH_SIZE);

        let mut switch_animator = Animator::new();
        switch_animator.add_clip("on", &[0], 1.0, false);
        switch_animator.add_clip("off", &[1], 1.0, false);
        switch_animator.play("on");

        let mut blackout = Overlay::default();
        blackout.position = position;

        Self {
            switch_body,
            switch_animator,
            lighting: Overlay::shown_at(position),
            blackout,
            state: SpotlightState::On,
        }
    }

    fn turn_off(&mut self, audio: &mut AudioMixer) {
        if self.state != SpotlightState::On {
            return;
        }
        self.state = SpotlightState::Off;
        self.switch_animator.play("off");
        self.lighting.visible = false;
        self.blackout.visible = true;
        audio.play(SFX_BREAKER);
    }

    fn turn_on(&mut self, audio: &mut AudioMixer) {
        if self.state != SpotlightState::Off {
            return;
        }
        self.state = SpotlightState::On;
        self.switch_animator.play("on");
        self.lighting.visible = true;
        self.blackout.visible = false;
        audio.play(SFX_COIN);
    }

    fn is_off(&self) -> bool {
        self.state == SpotlightState::Off
    }
}
