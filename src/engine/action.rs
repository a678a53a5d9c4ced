//! State transition commands.

use crate::engine::dice::DieKind;

/// A command applied to the dice state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollAction {
    /// Clear every die back to zero.
    Reset,
    /// Overwrite one die's displayed value. The value must already be a
    /// valid face for `die`; the reducer does not re-validate.
    SetValue { die: DieKind, value: u16 },
}
