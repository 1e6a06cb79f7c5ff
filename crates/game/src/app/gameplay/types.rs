#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AnimationState {
    Idle,
    Running,
    Jumping,
    Falling,
    Climbing,
    OnLadder,
    Dying,
}

impl AnimationState {
    fn clip(self) -> &'static str {
        match self {
            AnimationState::Idle => "stop",
            AnimationState::Running => "run",
            AnimationState::Jumping => "jump",
            AnimationState::Falling => "fall",
            AnimationState::Climbing => "climb",
            AnimationState::OnLadder => "ladder",
            AnimationState::Dying => "die",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Facing {
    Left,
    Right,
}

impl Facing {
    fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct LevelProgress {
    coins: u32,
    has_water: bool,
}

impl LevelProgress {
    fn collect_coin(&mut self) {
        self.coins = self.coins.saturating_add(1);
    }
}
