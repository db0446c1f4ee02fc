//! Held-key steering state
//!
//! `Direction` is the command currently held by the player. `ControlState` is
//! the two-state machine (Idle / Thrusting) driven by press and release
//! events through [`ControlState::transition`].

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Idle,
    Left,
    Right,
    Up,
    Down,
}

/// Command intents handed to the simulation by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Pressed(Direction),
    Released(Direction),
    Reset,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlState {
    #[default]
    Idle,
    /// Never holds `Direction::Idle`
    Thrusting(Direction),
}

impl ControlState {
    /// Direction currently applied, `Idle` when not thrusting
    pub fn direction(&self) -> Direction {
        match self {
            ControlState::Idle => Direction::Idle,
            ControlState::Thrusting(d) => *d,
        }
    }

    pub fn is_thrusting(&self) -> bool {
        matches!(self, ControlState::Thrusting(_))
    }

    /// A press switches to (or within) Thrusting. Releasing the active
    /// direction returns to Idle; releasing any other key changes nothing.
    pub fn on_pressed(self, direction: Direction) -> Self {
        match direction {
            Direction::Idle => self,
            d => ControlState::Thrusting(d),
        }
    }

    pub fn on_released(self, direction: Direction) -> Self {
        match self {
            ControlState::Thrusting(active) if active == direction => ControlState::Idle,
            state => state,
        }
    }

    /// Apply a press/release event. Reset and Quit leave the state alone,
    /// they are handled by the simulation and the frame loop.
    pub fn transition(self, event: InputEvent) -> Self {
        match event {
            InputEvent::Pressed(d) => self.on_pressed(d),
            InputEvent::Released(d) => self.on_released(d),
            InputEvent::Reset | InputEvent::Quit => self,
        }
    }
}
