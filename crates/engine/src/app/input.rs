#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Jump,
    Sprint,
    Confirm,
    FuseCheat,
    TimerCheat,
    SpotlightCheat,
}

const ACTION_COUNT: usize = 10;

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ActionStates {
    down: [bool; ACTION_COUNT],
    released: [bool; ACTION_COUNT],
    down_seconds: [f32; ACTION_COUNT],
}

impl ActionStates {
    pub(crate) fn set_down(&mut self, action: InputAction, is_down: bool) {
        self.down[action.index()] = is_down;
        if !is_down {
            self.down_seconds[action.index()] = 0.0;
        }
    }

    pub(crate) fn set_released(&mut self, action: InputAction, released: bool) {
        self.released[action.index()] = released;
    }

    pub(crate) fn set_down_seconds(&mut self, action: InputAction, seconds: f32) {
        self.down_seconds[action.index()] = seconds;
    }

    pub(crate) fn is_down(&self, action: InputAction) -> bool {
        self.down[action.index()]
    }

    pub(crate) fn released(&self, action: InputAction) -> bool {
        self.released[action.index()]
    }

    pub(crate) fn down_seconds(&self, action: InputAction) -> f32 {
        self.down_seconds[action.index()]
    }
}

impl InputAction {
    const fn index(self) -> usize {
        match self {
            InputAction::MoveLeft => 0,
            InputAction::MoveRight => 1,
            InputAction::MoveUp => 2,
            InputAction::MoveDown => 3,
            InputAction::Jump => 4,
            InputAction::Sprint => 5,
            InputAction::Confirm => 6,
            InputAction::FuseCheat => 7,
            InputAction::TimerCheat => 8,
            InputAction::SpotlightCheat => 9,
        }
    }
}
