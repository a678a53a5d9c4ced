//! Mutable store around the pure reducer.

use crate::engine::action::RollAction;
use crate::engine::reducer;
use crate::engine::state::DiceState;

type Listener = Box<dyn FnMut(&DiceState) + Send>;

/// Holds the current [`DiceState`] and notifies subscribers on every apply.
///
/// Listeners run synchronously, in subscription order, before
/// [`DiceStore::apply`] returns to its caller.
pub struct DiceStore {
    state: DiceState,
    listeners: Vec<Listener>,
}

impl DiceStore {
    pub fn new() -> Self {
        Self {
            state: DiceState::new(),
            listeners: Vec::new(),
        }
    }

    pub fn state(&self) -> &DiceState {
        &self.state
    }

    /// Register a listener invoked with every new state snapshot.
    pub fn subscribe(&mut self, listener: impl FnMut(&DiceState) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Reduce the action into the state and notify every subscriber.
    pub fn apply(&mut self, action: &RollAction) {
        self.state = reducer::apply(&self.state, action);
        for listener in &mut self.listeners {
            listener(&self.state);
        }
    }
}

impl Default for DiceStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::dice::DieKind;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_listener_sees_snapshot_before_apply_returns() {
        let mut store = DiceStore::new();
        let observed = Arc::new(Mutex::new(Vec::new()));
        let sink = observed.clone();
        store.subscribe(move |snapshot| {
            sink.lock().unwrap().push(snapshot.value(DieKind::D10));
        });

        store.apply(&RollAction::SetValue {
            die: DieKind::D10,
            value: 7,
        });
        assert_eq!(*observed.lock().unwrap(), vec![7]);

        store.apply(&RollAction::Reset);
        assert_eq!(*observed.lock().unwrap(), vec![7, 0]);
    }

    #[test]
    fn test_listeners_run_in_subscription_order() {
        let mut store = DiceStore::new();
        let order = Arc::new(Mutex::new(Vec::new()));
        for tag in ["first", "second"] {
            let sink = order.clone();
            store.subscribe(move |_| sink.lock().unwrap().push(tag));
        }
        store.apply(&RollAction::Reset);
        assert_eq!(*order.lock().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn test_state_reflects_latest_apply() {
        let mut store = DiceStore::new();
        store.apply(&RollAction::SetValue {
            die: DieKind::D4,
            value: 2,
        });
        assert_eq!(store.state().value(DieKind::D4), 2);
    }
}
