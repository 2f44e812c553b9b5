use std::mem;

use wordhunt_core::Position;

use crate::state::Settings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Action {
    BeginSelection(Position),
    ExtendSelection(Position),
    EndSelection,
    StartPuzzle,
    ResetPuzzle,
    UpdateSettings(Settings),
    DismissSolved,
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, ActionRequestQueue};

    #[test]
    fn take_all_returns_actions_and_clears_queue() {
        let mut queue = ActionRequestQueue::default();
        queue.request(Action::StartPuzzle);
        queue.request(Action::EndSelection);

        let drained = queue.take_all();
        assert_eq!(drained, [Action::StartPuzzle, Action::EndSelection]);

        let drained_again = queue.take_all();
        assert!(drained_again.is_empty());
    }
}
