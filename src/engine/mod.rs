//! Dice roll animation and state engine.
//!
//! Pure data and transitions live in [`state`], [`action`] and [`reducer`];
//! [`store`] owns the current state and notifies subscribers; [`rng`] is the
//! draw generator and [`roller`] the settling-animation state machine.
//! [`DiceEngine`] ties them to the runtime: each roll runs as a spawned task
//! that sends one `SetValue` per step over a channel, and whoever owns the
//! engine pumps that channel from a single loop. Roll tasks never touch the
//! store, so the state has exactly one writer.

pub mod action;
pub mod dice;
pub mod reducer;
pub mod rng;
pub mod roller;
pub mod state;
pub mod store;

use tokio::sync::mpsc;

use crate::engine::action::RollAction;
use crate::engine::dice::DieKind;
use crate::engine::roller::RollSession;
use crate::engine::state::DiceState;
use crate::engine::store::DiceStore;

/// The engine surface the presentation layer drives.
pub struct DiceEngine {
    store: DiceStore,
    actions_tx: mpsc::UnboundedSender<RollAction>,
    actions_rx: mpsc::UnboundedReceiver<RollAction>,
}

impl DiceEngine {
    pub fn new() -> Self {
        let (actions_tx, actions_rx) = mpsc::unbounded_channel();
        Self {
            store: DiceStore::new(),
            actions_tx,
            actions_rx,
        }
    }

    /// Snapshot of the current state.
    pub fn current_state(&self) -> DiceState {
        self.store.state().clone()
    }

    /// Register a listener invoked with every new state snapshot.
    pub fn subscribe(&mut self, listener: impl FnMut(&DiceState) + Send + 'static) {
        self.store.subscribe(listener);
    }

    /// Start an animated roll for `die` and return immediately.
    ///
    /// The session runs as a spawned task sending one `SetValue` per step.
    /// Re-triggering a die that is already animating starts a second,
    /// independent session; both run their full step budget and the last
    /// scheduled write wins.
    pub fn start_roll(&self, die: DieKind) {
        let tx = self.actions_tx.clone();
        tracing::debug!(%die, "starting roll");
        tokio::spawn(async move {
            let mut session = RollSession::new(die);
            loop {
                let step = session.advance();
                if tx
                    .send(RollAction::SetValue {
                        die,
                        value: step.value,
                    })
                    .is_err()
                {
                    // Engine is gone; nothing left to animate.
                    return;
                }
                match step.wait {
                    Some(wait) => tokio::time::sleep(wait).await,
                    None => {
                        tracing::debug!(%die, value = step.value, "roll settled");
                        return;
                    }
                }
            }
        });
    }

    /// Clear every die to zero, immediately.
    ///
    /// In-flight sessions are not cancelled; they keep writing fresh draws
    /// until their own step budgets run out.
    pub fn dispatch_reset(&mut self) {
        tracing::debug!("dice reset");
        self.store.apply(&RollAction::Reset);
    }

    /// Next queued action from the roll tasks. Pending while no session is
    /// running.
    pub async fn recv(&mut self) -> RollAction {
        // The engine itself holds a sender, so the channel never closes.
        self.actions_rx
            .recv()
            .await
            .expect("engine keeps a sender alive")
    }

    /// Apply one action to the store, notifying subscribers.
    pub fn apply(&mut self, action: &RollAction) {
        self.store.apply(action);
    }
}

impl Default for DiceEngine {
    fn default() -> Self {
        Self::new()
    }
}
