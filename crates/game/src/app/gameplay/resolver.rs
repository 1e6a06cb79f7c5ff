impl PlayScene {
    /// Fixed-order per-tick interaction pass. Order matters: enemies
    /// settle against geometry before the hero, pickups before the
    /// delivery check, and combat runs last so every touch flag from
    /// earlier passes is already in place. Returns whether the hero is
    /// standing in a ladder zone this tick.
    fn resolve_interactions(&mut self, world: &mut SceneWorld) -> bool {
        let physics = &mut world.physics;

        for spider in &self.spiders {
            if spider.removed {
                continue;
            }
            for platform in &self.platforms {
                physics.collide(spider.body, *platform);
            }
            for wall in &self.enemy_walls {
                physics.collide(spider.body, *wall);
            }
        }

        let Some(hero) = self.hero.as_mut() else {
            return false;
        };

        for platform in &self.platforms {
            physics.collide(hero.body, *platform);
        }

        let coins = std::mem::take(&mut self.coins);
        for coin in coins {
            if physics.overlap(hero.body, coin) {
                world.audio.play(SFX_COIN);
                self.progress.collect_coin();
                physics.remove(coin);
            } else {
                self.coins.push(coin);
            }
        }

        let mut on_ladder = false;
        for ladder in &self.ladders {
            if physics.overlap(hero.body, *ladder) {
                on_ladder = true;
            }
        }

        if let Some(water) = self.water {
            if physics.overlap(hero.body, water) {
                world.audio.play(SFX_WATER);
                self.progress.has_water = true;
                physics.remove(water);
                self.water = None;
            }
        }

        if let Some(goal) = self.goal {
            if self.progress.has_water
                && !self.quest_complete
                && physics.overlap(hero.body, goal)
            {
                self.progress.has_water = false;
                self.progress.collect_coin();
                self.bubble.visible = false;
                self.quest_complete = true;
                world.audio.play(SFX_DOOR);
                world.camera.fade();
                hero.freeze(physics);
                info!(level = self.level_index, "water_delivered");
            }
        }

        if let Some(fusebox) = self.fusebox.as_mut() {
            if physics.overlap(hero.body, fusebox.body) {
                fusebox.repair(&mut world.audio);
            }
        }
        if let Some(timer) = self.timer_prop.as_mut() {
            if physics.overlap(hero.body, timer.body) {
                timer.fix(&mut world.audio);
            }
        }
        if let Some(spotlights) = self.spotlights.as_mut() {
            if physics.overlap(hero.body, spotlights.switch_body) {
                spotlights.turn_on(&mut world.audio);
            }
        }

        if hero.alive {
            for spider in &mut self.spiders {
                if !spider.alive {
                    continue;
                }
                let spider_touching_before = physics
                    .body(spider.body)
                    .map(|body| body.was_touching)
                    .unwrap_or_default();
                if !physics.overlap(hero.body, spider.body) {
                    continue;
                }
                let falling = physics
                    .body(hero.body)
                    .map(|body| body.velocity.y > 0.0)
                    .unwrap_or(false);
                if falling {
                    spider.kill(physics);
                    hero.bounce(physics);
                    world.audio.play(SFX_STOMP);
                } else {
                    // The overlap test above set touch flags on the
                    // spider; put back last tick's flags so its patrol
                    // does not reverse off a corpse collision.
                    if let Some(body) = physics.body_mut(spider.body) {
                        body.touching = spider_touching_before;
                    }
                    hero.kill(physics);
                    self.restart_on_death = true;
                    world.audio.play(SFX_STOMP);
                    break;
                }
            }
        }

        on_ladder
    }
}
