use std::mem;

/// User intents collected while drawing a frame and applied afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Action {
    /// Button click or Enter in the city field.
    Submit,
    /// An entry was picked from the history selector.
    SelectHistory(String),
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
        queue.request(Action::Submit);
        queue.request(Action::SelectHistory("Pune".into()));

        let drained = queue.take_all();
        assert_eq!(drained, [Action::Submit, Action::SelectHistory("Pune".into())]);

        assert!(queue.take_all().is_empty());
    }
}
