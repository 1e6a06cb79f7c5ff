impl Scene for LoadingScene {
    fn load(&mut self, world: &mut SceneWorld) {
        info!(levels = world.assets().level_count(), "assets_ready");
    }

    fn update(
        &mut self,
        _fixed_dt_seconds: f32,
        _input: &InputSnapshot,
        _world: &mut SceneWorld,
    ) -> SceneCommand {
        SceneCommand::Switch(SceneRequest::title())
    }

    fn unload(&mut self, _world: &mut SceneWorld) {}
}

impl Scene for TitleScene {
    fn load(&mut self, _world: &mut SceneWorld) {
        info!("title_shown");
    }

    fn update(
        &mut self,
        _fixed_dt_seconds: f32,
        input: &InputSnapshot,
        _world: &mut SceneWorld,
    ) -> SceneCommand {
        if input.released(InputAction::MoveUp) {
            self.move_cursor(-1);
        }
        if input.released(InputAction::MoveDown) {
            self.move_cursor(1);
        }
        if input.released(InputAction::Confirm) {
            // TODO: route self.selected once the other menu modes exist.
            info!(option = self.selected, "title_confirmed");
            return SceneCommand::Switch(SceneRequest::play(0));
        }
        SceneCommand::None
    }

    fn unload(&mut self, _world: &mut SceneWorld) {}

    fn debug_title(&self, _world: &SceneWorld) -> Option<String> {
        Some(format!("Limelight | Title | Option {}", self.selected))
    }
}

impl Scene for PlayScene {
    fn load(&mut self, world: &mut SceneWorld) {
        world.physics.set_gravity(LEVEL_GRAVITY);
        match self.build_level(world) {
            Ok(()) => {
                world.camera.flash();
                info!(
                    level = self.level_index,
                    platforms = self.platforms.len(),
                    spiders = self.spiders.len(),
                    coins = self.coins.len(),
                    decor = self.decor_count,
                    "level_loaded"
                );
            }
            Err(err) => {
                error!(level = self.level_index, error = %err, "level_load_failed");
                self.load_error = Some(err.to_string());
            }
        }
    }

    fn update(
        &mut self,
        fixed_dt_seconds: f32,
        input: &InputSnapshot,
        world: &mut SceneWorld,
    ) -> SceneCommand {
        if self.load_error.is_some() {
            return SceneCommand::None;
        }

        world.physics.step(fixed_dt_seconds);
        let on_ladder = self.resolve_interactions(world);
        self.handle_input(input, world, on_ladder);

        if let Some(hero) = self.hero.as_mut() {
            hero.update(fixed_dt_seconds, &world.physics);
        }
        for spider in &mut self.spiders {
            spider.update(fixed_dt_seconds, &mut world.physics);
        }
        let removed_spiders: Vec<BodyId> = self
            .spiders
            .iter()
            .filter(|spider| spider.removed)
            .map(|spider| spider.body)
            .collect();
        for body in removed_spiders {
            world.physics.remove(body);
        }
        self.spiders.retain(|spider| !spider.removed);

        if let Some(fusebox) = self.fusebox.as_mut() {
            fusebox.update(fixed_dt_seconds, &mut world.audio);
        }
        if let Some(timer) = self.timer_prop.as_mut() {
            timer.update(fixed_dt_seconds);
        }
        self.update_overlays(world);
        self.tick_clock(fixed_dt_seconds);

        if let Some(event) = world.camera.step(fixed_dt_seconds) {
            if event == FadeEvent::FadeFinished && self.quest_complete {
                let next = next_level_index(self.level_index, LEVEL_COUNT);
                return SceneCommand::Switch(SceneRequest::play(next));
            }
        }

        let hero_gone = self.hero.as_ref().map(|hero| hero.removed).unwrap_or(false);
        if hero_gone && self.restart_on_death {
            return SceneCommand::Switch(SceneRequest::play(self.level_index));
        }

        SceneCommand::None
    }

    fn unload(&mut self, _world: &mut SceneWorld) {
        info!(
            level = self.level_index,
            coins = self.progress.coins,
            quest_complete = self.quest_complete,
            "level_unloaded"
        );
    }

    fn debug_title(&self, _world: &SceneWorld) -> Option<String> {
        Some(format!(
            "Limelight | Level {} | {} | Coins {}",
            self.level_index,
            format_clock(self.time_left),
            self.progress.coins
        ))
    }
}

pub(crate) struct GameDirector;

impl GameDirector {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl SceneDirector for GameDirector {
    fn build(&mut self, request: SceneRequest) -> Box<dyn Scene> {
        match request.kind {
            SceneKind::Loading => Box::new(LoadingScene),
            SceneKind::Title => Box::new(TitleScene::new()),
            SceneKind::Play => Box::new(PlayScene::new(request.level)),
        }
    }
}
