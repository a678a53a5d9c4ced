//! Per-die value state.

use std::collections::BTreeMap;

use crate::engine::dice::DieKind;

/// Current displayed value for every die.
///
/// Every kind is always present; `0` means the die has not been rolled since
/// the last reset, anything else is a face value in `[1, faces]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceState {
    values: BTreeMap<DieKind, u16>,
}

impl DiceState {
    /// All six dice at zero.
    pub fn new() -> Self {
        let values = DieKind::ALL.iter().map(|&die| (die, 0)).collect();
        Self { values }
    }

    pub fn value(&self, die: DieKind) -> u16 {
        // Every kind is inserted at construction.
        self.values[&die]
    }

    /// Copy of this state with one die's entry replaced.
    pub(crate) fn with_value(&self, die: DieKind, value: u16) -> Self {
        let mut next = self.clone();
        next.values.insert(die, value);
        next
    }

    /// Iterate `(die, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (DieKind, u16)> + '_ {
        self.values.iter().map(|(&die, &value)| (die, value))
    }
}

impl Default for DiceState {
    fn default() -> Self {
        Self::new()
    }
}
