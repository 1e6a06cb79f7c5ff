fn spawn_static_body(physics: &mut PhysicsWorld, center: Vec2, size: Vec2) -> BodyId {
    let id = physics.insert(center, size);
    if let Some(body) = physics.body_mut(id) {
        body.immovable = true;
        body.allow_gravity = false;
    }
    id
}

/// Platform footprint by image key. Level files place platforms by
/// top-left corner; the extent converts that into a body rectangle.
fn platform_extent(image: &str) -> Vec2 {
    match image {
        "ground" => Vec2 { x: 960.0, y: 80.0 },
        "platform:8x1" => Vec2 { x: 336.0, y: 42.0 },
        "platform:6x1" => Vec2 { x: 252.0, y: 42.0 },
        "platform:4x1" => Vec2 { x: 168.0, y: 42.0 },
        "platform:2x1" => Vec2 { x: 84.0, y: 42.0 },
        "platform:1x1" => Vec2 { x: 42.0, y: 42.0 },
        _ => Vec2 { x: 42.0, y: 42.0 },
    }
}

/// Invisible walls flanking a platform so patrolling enemies turn
/// around at its edges. Centers sit just outside the platform, raised
/// so only ground-level enemies hit them.
fn enemy_wall_positions(top_left: Vec2, extent: Vec2) -> (Vec2, Vec2) {
    let wall_y = top_left.y - ENEMY_WALL_SIZE.y / 2.0;
    (
        Vec2 {
            x: top_left.x - ENEMY_WALL_SIZE.x / 2.0,
            y: wall_y,
        },
        Vec2 {
            x: top_left.x + extent.x + ENEMY_WALL_SIZE.x / 2.0,
            y: wall_y,
        },
    )
}

/// Speed multiplier shared by running and climbing.
fn sprint_factor(sprint: bool) -> f32 {
    if sprint {
        SPRINT_FACTOR
    } else {
        1.0
    }
}

fn next_level_index(current: usize, count: usize) -> usize {
    (current + 1) % count.max(1)
}

/// Countdown readout, `m:ss`.
fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
