#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(u32);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Touching {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Touching {
    pub const NONE: Self = Self {
        up: false,
        down: false,
        left: false,
        right: false,
    };

    pub fn any(self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: Vec2,
    pub enabled: bool,
    pub allow_gravity: bool,
    pub immovable: bool,
    pub collide_world_bounds: bool,
    pub touching: Touching,
    pub was_touching: Touching,
    pub blocked: Touching,
}

impl Body {
    fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::default(),
            size,
            enabled: true,
            allow_gravity: true,
            immovable: false,
            collide_world_bounds: false,
            touching: Touching::NONE,
            was_touching: Touching::NONE,
            blocked: Touching::NONE,
        }
    }

    pub fn half_width(&self) -> f32 {
        self.size.x * 0.5
    }

    pub fn half_height(&self) -> f32 {
        self.size.y * 0.5
    }

    pub fn grounded(&self) -> bool {
        self.touching.down || self.blocked.down
    }
}

/// Axis-aligned body simulation in screen coordinates: y grows downward,
/// so gravity is positive and an upward jump is a negative y velocity.
/// `position` is the body center.
#[derive(Debug)]
pub struct PhysicsWorld {
    bodies: Vec<Option<Body>>,
    gravity_y: f32,
    bounds: Vec2,
}

impl PhysicsWorld {
    pub fn new(bounds: Vec2) -> Self {
        Self {
            bodies: Vec::new(),
            gravity_y: 0.0,
            bounds,
        }
    }

    pub fn set_gravity(&mut self, gravity_y: f32) {
        self.gravity_y = gravity_y;
    }

    pub fn gravity(&self) -> f32 {
        self.gravity_y
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn insert(&mut self, position: Vec2, size: Vec2) -> BodyId {
        let id = BodyId(self.bodies.len() as u32);
        self.bodies.push(Some(Body::new(position, size)));
        id
    }

    pub fn remove(&mut self, id: BodyId) -> bool {
        match self.bodies.get_mut(id.0 as usize) {
            Some(slot) => slot.take().is_some(),
            None => false,
        }
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.0 as usize).and_then(Option::as_ref)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(id.0 as usize).and_then(Option::as_mut)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.iter().filter(|slot| slot.is_some()).count()
    }

    /// Advances every enabled body one fixed step: rolls `touching` into
    /// `was_touching`, applies gravity, integrates, and clamps against the
    /// world bounds (setting `blocked` on any struck side).
    pub fn step(&mut self, dt_seconds: f32) {
        let gravity_y = self.gravity_y;
        let bounds = self.bounds;
        for slot in &mut self.bodies {
            let Some(body) = slot.as_mut() else {
                continue;
            };
            if !body.enabled {
                continue;
            }

            body.was_touching = body.touching;
            body.touching = Touching::NONE;
            body.blocked = Touching::NONE;

            if body.allow_gravity && !body.immovable {
                body.velocity.y += gravity_y * dt_seconds;
            }
            body.position.x += body.velocity.x * dt_seconds;
            body.position.y += body.velocity.y * dt_seconds;

            if body.collide_world_bounds {
                let half_w = body.half_width();
                let half_h = body.half_height();
                if body.position.x - half_w < 0.0 {
                    body.position.x = half_w;
                    body.velocity.x = 0.0;
                    body.blocked.left = true;
                }
                if body.position.x + half_w > bounds.x {
                    body.position.x = bounds.x - half_w;
                    body.velocity.x = 0.0;
                    body.blocked.right = true;
                }
                if body.position.y - half_h < 0.0 {
                    body.position.y = half_h;
                    body.velocity.y = 0.0;
                    body.blocked.up = true;
                }
                if body.position.y + half_h > bounds.y {
                    body.position.y = bounds.y - half_h;
                    body.velocity.y = 0.0;
                    body.blocked.down = true;
                }
            }
        }
    }

    /// Solid collision: separates the movable body out along the axis of
    /// least penetration, kills its velocity into the contact, and sets
    /// facing `touching` flags on both bodies.
    pub fn collide(&mut self, a: BodyId, b: BodyId) -> bool {
        let Some((first, second)) = self.pair_mut(a, b) else {
            return false;
        };
        let Some((overlap_x, overlap_y)) = aabb_overlap(first, second) else {
            return false;
        };

        let (mover, fixed) = if first.immovable && !second.immovable {
            (second, first)
        } else {
            (first, second)
        };
        if mover.immovable {
            return true;
        }

        if overlap_y <= overlap_x {
            if mover.position.y < fixed.position.y {
                mover.position.y -= overlap_y;
                mover.touching.down = true;
                fixed.touching.up = true;
                if mover.velocity.y > 0.0 {
                    mover.velocity.y = 0.0;
                }
            } else {
                mover.position.y += overlap_y;
                mover.touching.up = true;
                fixed.touching.down = true;
                if mover.velocity.y < 0.0 {
                    mover.velocity.y = 0.0;
                }
            }
        } else if mover.position.x < fixed.position.x {
            mover.position.x -= overlap_x;
            mover.touching.right = true;
            fixed.touching.left = true;
            if mover.velocity.x > 0.0 {
                mover.velocity.x = 0.0;
            }
        } else {
            mover.position.x += overlap_x;
            mover.touching.left = true;
            fixed.touching.right = true;
            if mover.velocity.x < 0.0 {
                mover.velocity.x = 0.0;
            }
        }
        true
    }

    /// Detection-only AABB test. It still writes the facing `touching`
    /// flags on both bodies, matching the arcade-physics lineage this is
    /// modeled on; callers that need the pre-test flags must restore them
    /// from `was_touching`.
    pub fn overlap(&mut self, a: BodyId, b: BodyId) -> bool {
        let Some((first, second)) = self.pair_mut(a, b) else {
            return false;
        };
        let Some((overlap_x, overlap_y)) = aabb_overlap(first, second) else {
            return false;
        };

        if overlap_y <= overlap_x {
            if first.position.y < second.position.y {
                first.touching.down = true;
                second.touching.up = true;
            } else {
                first.touching.up = true;
                second.touching.down = true;
            }
        } else if first.position.x < second.position.x {
            first.touching.right = true;
            second.touching.left = true;
        } else {
            first.touching.left = true;
            second.touching.right = true;
        }
        true
    }

    fn pair_mut(&mut self, a: BodyId, b: BodyId) -> Option<(&mut Body, &mut Body)> {
        let a_index = a.0 as usize;
        let b_index = b.0 as usize;
        if a_index == b_index || a_index >= self.bodies.len() || b_index >= self.bodies.len() {
            return None;
        }

        let (first, second) = if a_index < b_index {
            let (head, tail) = self.bodies.split_at_mut(b_index);
            (head[a_index].as_mut()?, tail[0].as_mut()?)
        } else {
            let (head, tail) = self.bodies.split_at_mut(a_index);
            let (second, first) = (head[b_index].as_mut()?, tail[0].as_mut()?);
            (first, second)
        };

        if !first.enabled || !second.enabled {
            return None;
        }
        Some((first, second))
    }
}

fn aabb_overlap(a: &Body, b: &Body) -> Option<(f32, f32)> {
    let overlap_x = a.half_width() + b.half_width() - (a.position.x - b.position.x).abs();
    let overlap_y = a.half_height() + b.half_height() - (a.position.y - b.position.y).abs();
    if overlap_x > 0.0 && overlap_y > 0.0 {
        Some((overlap_x, overlap_y))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Vec2 = Vec2 { x: 960.0, y: 600.0 };

    fn world() -> PhysicsWorld {
        let mut world = PhysicsWorld::new(BOUNDS);
        world.set_gravity(1200.0);
        world
    }

    fn static_platform(world: &mut PhysicsWorld, position: Vec2, size: Vec2) -> BodyId {
        let id = world.insert(position, size);
        let body = world.body_mut(id).expect("platform body");
        body.immovable = true;
        body.allow_gravity = false;
        id
    }

    #[test]
    fn gravity_accelerates_falling_body() {
        let mut world = world();
        let id = world.insert(Vec2 { x: 100.0, y: 100.0 }, Vec2 { x: 32.0, y: 32.0 });

        world.step(0.5);

        let body = world.body(id).expect("body");
        assert!((body.velocity.y - 600.0).abs() < 0.001);
        assert!(body.position.y > 100.0);
    }

    #[test]
    fn collide_lands_falling_body_on_platform() {
        let mut world = world();
        let platform = static_platform(
            &mut world,
            Vec2 { x: 100.0, y: 200.0 },
            Vec2 { x: 200.0, y: 40.0 },
        );
        let faller = world.insert(Vec2 { x: 100.0, y: 170.0 }, Vec2 { x: 32.0, y: 32.0 });
        world.body_mut(faller).expect("faller").velocity.y = 300.0;

        assert!(world.collide(faller, platform));

        let body = world.body(faller).expect("faller");
        assert_eq!(body.velocity.y, 0.0);
        assert!(body.touching.down);
        assert!((body.position.y - 164.0).abs() < 0.001);
        assert!(world.body(platform).expect("platform").touching.up);
    }

    #[test]
    fn collide_against_side_blocks_horizontal_motion() {
        let mut world = world();
        let wall = static_platform(
            &mut world,
            Vec2 { x: 200.0, y: 100.0 },
            Vec2 { x: 8.0, y: 100.0 },
        );
        let walker = world.insert(Vec2 { x: 190.0, y: 100.0 }, Vec2 { x: 20.0, y: 20.0 });
        world.body_mut(walker).expect("walker").velocity.x = 100.0;

        assert!(world.collide(walker, wall));

        let body = world.body(walker).expect("walker");
        assert!(body.touching.right);
        assert_eq!(body.velocity.x, 0.0);
        assert!(body.position.x < 190.0);
    }

    #[test]
    fn collide_misses_separated_bodies() {
        let mut world = world();
        let platform = static_platform(
            &mut world,
            Vec2 { x: 100.0, y: 400.0 },
            Vec2 { x: 100.0, y: 40.0 },
        );
        let other = world.insert(Vec2 { x: 500.0, y: 100.0 }, Vec2 { x: 32.0, y: 32.0 });

        assert!(!world.collide(other, platform));
        assert!(!world.body(other).expect("other").touching.any());
    }

    #[test]
    fn overlap_reports_and_mutates_touching_flags() {
        let mut world = world();
        let upper = world.insert(Vec2 { x: 100.0, y: 90.0 }, Vec2 { x: 30.0, y: 30.0 });
        let lower = world.insert(Vec2 { x: 100.0, y: 110.0 }, Vec2 { x: 30.0, y: 30.0 });

        assert!(world.overlap(upper, lower));

        assert!(world.body(upper).expect("upper").touching.down);
        assert!(world.body(lower).expect("lower").touching.up);
        // No separation happens.
        assert_eq!(world.body(upper).expect("upper").position.y, 90.0);
    }

    #[test]
    fn step_rolls_touching_into_history() {
        let mut world = world();
        let id = world.insert(Vec2 { x: 100.0, y: 100.0 }, Vec2 { x: 30.0, y: 30.0 });
        world.body_mut(id).expect("body").touching.down = true;

        world.step(0.016);

        let body = world.body(id).expect("body");
        assert!(body.was_touching.down);
        assert!(!body.touching.down);
    }

    #[test]
    fn disabled_body_is_skipped_by_step_and_tests() {
        let mut world = world();
        let frozen = world.insert(Vec2 { x: 100.0, y: 100.0 }, Vec2 { x: 30.0, y: 30.0 });
        let other = world.insert(Vec2 { x: 100.0, y: 100.0 }, Vec2 { x: 30.0, y: 30.0 });
        world.body_mut(frozen).expect("frozen").enabled = false;

        world.step(0.5);
        assert_eq!(world.body(frozen).expect("frozen").position.y, 100.0);
        assert!(!world.overlap(frozen, other));
        assert!(!world.collide(frozen, other));
    }

    #[test]
    fn world_bounds_clamp_sets_blocked_side() {
        let mut world = world();
        let id = world.insert(Vec2 { x: 100.0, y: 590.0 }, Vec2 { x: 32.0, y: 32.0 });
        {
            let body = world.body_mut(id).expect("body");
            body.collide_world_bounds = true;
            body.velocity.y = 500.0;
        }

        world.step(0.1);

        let body = world.body(id).expect("body");
        assert!(body.blocked.down);
        assert_eq!(body.velocity.y, 0.0);
        assert!((body.position.y - (BOUNDS.y - 16.0)).abs() < 0.001);
    }

    #[test]
    fn removed_body_slot_stays_dead() {
        let mut world = world();
        let id = world.insert(Vec2 { x: 10.0, y: 10.0 }, Vec2 { x: 4.0, y: 4.0 });
        assert!(world.remove(id));
        assert!(!world.remove(id));
        assert!(world.body(id).is_none());
        assert_eq!(world.body_count(), 0);
    }

    #[test]
    fn immovable_pair_reports_contact_without_separation() {
        let mut world = world();
        let a = static_platform(
            &mut world,
            Vec2 { x: 100.0, y: 100.0 },
            Vec2 { x: 40.0, y: 40.0 },
        );
        let b = static_platform(
            &mut world,
            Vec2 { x: 110.0, y: 100.0 },
            Vec2 { x: 40.0, y: 40.0 },
        );

        assert!(world.collide(a, b));
        assert_eq!(world.body(a).expect("a").position.x, 100.0);
        assert_eq!(world.body(b).expect("b").position.x, 110.0);
    }
}
