use crate::engine::dice::DieKind;

/// Side-effecting commands the handler asks the main loop to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Start an animated roll for one die.
    Roll(DieKind),
    /// Clear all dice back to zero.
    ResetDice,
    /// Persist the current configuration to disk.
    SaveConfig,
    Quit,
}
