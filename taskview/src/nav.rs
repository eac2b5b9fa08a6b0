/// Input the viewer reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    StepLeft,
    StepRight,
    Redraw,
}

/// Position in the task list. Always `< len` for a non-empty list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    current_index: usize,
}

impl ViewState {
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Next state for `command` over a list of `len` tasks. Clamps, never wraps.
    pub fn apply(self, command: Command, len: usize) -> ViewState {
        let last = len.saturating_sub(1);
        let current_index = match command {
            Command::StepLeft => self.current_index.saturating_sub(1),
            Command::StepRight => (self.current_index + 1).min(last),
            Command::Redraw => self.current_index.min(last),
        };
        ViewState { current_index }
    }
}
