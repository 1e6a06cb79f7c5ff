#[derive(Debug, Error)]
enum LevelBuildError {
    #[error(transparent)]
    Malformed(#[from] MalformedLevelError),
    #[error(transparent)]
    Asset(#[from] MissingAssetError),
}

struct LoadingScene;

struct TitleScene {
    selected: usize,
}

impl TitleScene {
    fn new() -> Self {
        Self { selected: 0 }
    }

    fn move_cursor(&mut self, delta: i32) {
        let moved = self.selected as i32 + delta;
        self.selected = moved.clamp(0, TITLE_OPTION_COUNT as i32 - 1) as usize;
    }
}

struct PlayScene {
    level_index: usize,
    hero: Option<Hero>,
    spiders: Vec<Spider>,
    platforms: Vec<BodyId>,
    enemy_walls: Vec<BodyId>,
    ladders: Vec<BodyId>,
    coins: Vec<BodyId>,
    water: Option<BodyId>,
    goal: Option<BodyId>,
    bubble: Overlay,
    darkness: Overlay,
    fusebox: Option<FuseboxController>,
    timer_prop: Option<TimerPropController>,
    spotlights: Option<SpotlightController>,
    progress: LevelProgress,
    time_left: u32,
    second_accumulator: f32,
    level_over: bool,
    quest_complete: bool,
    restart_on_death: bool,
    load_error: Option<String>,
    decor_count: usize,
}

impl PlayScene {
    fn new(level_index: usize) -> Self {
        Self {
            level_index,
            hero: None,
            spiders: Vec::new(),
            platforms: Vec::new(),
            enemy_walls: Vec::new(),
            ladders: Vec::new(),
            coins: Vec::new(),
            water: None,
            goal: None,
            bubble: Overlay::default(),
            darkness: Overlay::default(),
            fusebox: None,
            timer_prop: None,
            spotlights: None,
            progress: LevelProgress::default(),
            time_left: LEVEL_TIME_SECONDS,
            second_accumulator: 0.0,
            level_over: false,
            quest_complete: false,
            restart_on_death: false,
            load_error: None,
            decor_count: 0,
        }
    }

    /// Parses and validates the whole level before touching the world,
    /// so a bad file leaves no half-spawned bodies behind.
    fn build_level(&mut self, world: &mut SceneWorld) -> Result<(), LevelBuildError> {
        let raw = world.assets().level_text(self.level_index)?.to_string();
        let level = parse_level(&raw)?;

        {
            let assets = world.assets();
            for platform in &level.platforms {
                assets.require_image(&platform.image)?;
            }
            for key in [
                "hero",
                "spider",
                "coin",
                "ladder",
                "decoration",
                "stage",
                "water",
                "goal",
                "bubble",
                "fusebox",
                "darkness",
                "timer",
                "switch",
            ] {
                assets.require_image(key)?;
            }
            for key in [
                SFX_JUMP,
                SFX_COIN,
                SFX_WATER,
                SFX_STOMP,
                SFX_DOOR,
                SFX_ELECTRICITY,
                SFX_SWITCH,
                SFX_TIMER_DROP,
                SFX_BREAKER,
            ] {
                assets.require_audio(key)?;
            }
        }

        let physics = &mut world.physics;
        for platform in &level.platforms {
            let extent = platform_extent(&platform.image);
            let top_left = Vec2 {
                x: platform.x,
                y: platform.y,
            };
            let center = Vec2 {
                x: top_left.x + extent.x / 2.0,
                y: top_left.y + extent.y / 2.0,
            };
            self.platforms.push(spawn_static_body(physics, center, extent));

            let (left, right) = enemy_wall_positions(top_left, extent);
            self.enemy_walls
                .push(spawn_static_body(physics, left, ENEMY_WALL_SIZE));
            self.enemy_walls
                .push(spawn_static_body(physics, right, ENEMY_WALL_SIZE));
        }

        for placement in &level.ladders {
            let center = Vec2 {
                x: placement.x,
                y: placement.y,
            };
            self.ladders
                .push(spawn_static_body(physics, center, LADDER_SIZE));
        }
        for placement in &level.coins {
            let center = Vec2 {
                x: placement.x,
                y: placement.y,
            };
            self.coins.push(spawn_static_body(physics, center, COIN_SIZE));
        }
        let water_center = Vec2 {
            x: level.water.x,
            y: level.water.y,
        };
        self.water = Some(spawn_static_body(physics, water_center, WATER_SIZE));

        let goal_center = Vec2 {
            x: level.table.x,
            y: level.table.y,
        };
        self.goal = Some(spawn_static_body(physics, goal_center, GOAL_SIZE));
        self.bubble = Overlay::shown_at(Vec2 {
            x: goal_center.x,
            y: goal_center.y - GOAL_SIZE.y,
        });

        self.fusebox = Some(FuseboxController::spawn(
            physics,
            Vec2 {
                x: level.fusebox.x,
                y: level.fusebox.y,
            },
        ));
        self.timer_prop = Some(TimerPropController::spawn(
            physics,
            Vec2 {
                x: level.timer.x,
                y: level.timer.y,
            },
        ));
        self.spotlights = Some(SpotlightController::spawn(
            physics,
            Vec2 {
                x: level.spotlights.x,
                y: level.spotlights.y,
            },
        ));

        self.hero = Some(Hero::spawn(
            physics,
            Vec2 {
                x: level.hero.x,
                y: level.hero.y,
            },
        ));
        for placement in &level.spiders {
            self.spiders.push(Spider::spawn(
                physics,
                Vec2 {
                    x: placement.x,
                    y: placement.y,
                },
            ));
        }

        for spec in &level.decoration {
            debug!(x = spec.x, y = spec.y, frame = spec.frame, "decoration_placed");
        }
        debug!(x = level.stage.x, y = level.stage.y, "stage_backdrop_placed");
        self.decor_count = level.decoration.len() + 1;
        Ok(())
    }

    fn tick_clock(&mut self, dt_seconds: f32) {
        self.second_accumulator += dt_seconds;
        while self.second_accumulator >= 1.0 {
            self.second_accumulator -= 1.0;
            if self.time_left > 0 {
                self.time_left -= 1;
                if self.time_left == 0 && !self.level_over {
                    self.level_over = true;
                    warn!(level = self.level_index, "show_clock_expired");
                }
            }
        }
    }

    fn handle_input(&mut self, input: &InputSnapshot, world: &mut SceneWorld, on_ladder: bool) {
        let Some(hero) = self.hero.as_mut() else {
            return;
        };

        let sprint = input.is_down(InputAction::Sprint);
        let mut direction = 0.0;
        if input.is_down(InputAction::MoveLeft) {
            direction -= 1.0;
        }
        if input.is_down(InputAction::MoveRight) {
            direction += 1.0;
        }
        hero.run(&mut world.physics, direction, sprint);

        let wants_climb =
            input.is_down(InputAction::MoveUp) || input.is_down(InputAction::MoveDown);
        if on_ladder && wants_climb && !hero.climbing {
            hero.set_climbing(&mut world.physics, true);
        } else if !on_ladder && hero.climbing {
            hero.set_climbing(&mut world.physics, false);
        }
        if hero.climbing {
            let mut vertical = 0.0;
            if input.is_down(InputAction::MoveUp) {
                vertical -= 1.0;
            }
            if input.is_down(InputAction::MoveDown) {
                vertical += 1.0;
            }
            hero.climb(&mut world.physics, vertical, sprint);
        }

        if input.is_down(InputAction::Jump)
            && input.down_seconds(InputAction::Jump) <= JUMP_BOOST_SECONDS
        {
            if hero.jump(&mut world.physics) {
                world.audio.play(SFX_JUMP);
            }
        }
        if input.released(InputAction::Jump) {
            hero.stop_jump_boost();
        }

        if input.released(InputAction::FuseCheat) {
            if let Some(fusebox) = self.fusebox.as_mut() {
                fusebox.blow(&mut world.audio);
            }
        }
        if input.released(InputAction::TimerCheat) {
            if let Some(timer) = self.timer_prop.as_mut() {
                timer.knock_over(&mut world.audio);
            }
        }
        if input.released(InputAction::SpotlightCheat) {
            if let Some(spotlights) = self.spotlights.as_mut() {
                spotlights.turn_off(&mut world.audio);
            }
        }
    }

    fn update_overlays(&mut self, world: &SceneWorld) {
        let dark = self.fusebox.as_ref().map(FuseboxController::is_dark) == Some(true);
        self.darkness.visible = dark;
        if let Some(hero) = self.hero.as_ref() {
            if let Some(body) = world.physics.body(hero.body) {
                self.darkness.position = body.position;
            }
        }
    }
}
