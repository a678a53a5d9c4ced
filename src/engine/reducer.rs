//! Pure state transition function.

use crate::engine::action::RollAction;
use crate::engine::state::DiceState;

/// Apply one action, producing the next state.
///
/// Total over its declared inputs; validation belongs to the caller.
pub fn apply(state: &DiceState, action: &RollAction) -> DiceState {
    match action {
        RollAction::Reset => DiceState::new(),
        RollAction::SetValue { die, value } => state.with_value(*die, *value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::dice::DieKind;

    #[test]
    fn test_reset_yields_initial_state_from_anywhere() {
        let mut state = DiceState::new();
        for (i, &die) in DieKind::ALL.iter().enumerate() {
            state = apply(
                &state,
                &RollAction::SetValue {
                    die,
                    value: (i + 1) as u16,
                },
            );
        }
        assert_eq!(apply(&state, &RollAction::Reset), DiceState::new());
    }

    #[test]
    fn test_set_value_touches_only_its_die() {
        let state = apply(
            &DiceState::new(),
            &RollAction::SetValue {
                die: DieKind::D20,
                value: 17,
            },
        );
        let next = apply(
            &state,
            &RollAction::SetValue {
                die: DieKind::D6,
                value: 4,
            },
        );
        assert_eq!(next.value(DieKind::D6), 4);
        assert_eq!(next.value(DieKind::D20), 17);
        for &die in &DieKind::ALL {
            if die != DieKind::D6 && die != DieKind::D20 {
                assert_eq!(next.value(die), 0);
            }
        }
    }

    #[test]
    fn test_set_value_overwrites_previous_value() {
        let state = apply(
            &DiceState::new(),
            &RollAction::SetValue {
                die: DieKind::D8,
                value: 3,
            },
        );
        let next = apply(
            &state,
            &RollAction::SetValue {
                die: DieKind::D8,
                value: 8,
            },
        );
        assert_eq!(next.value(DieKind::D8), 8);
    }
}
