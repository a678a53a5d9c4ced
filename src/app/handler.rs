use std::time::Instant;

use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Position;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::{AppState, ColorPickerState, ColorTarget, PALETTE};
use crate::engine::dice::DieKind;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => {
            state.expire_status(Instant::now());
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => {
            state.dirty = true;
            if state.color_picker.is_some() {
                handle_picker_key(state, key)
            } else {
                handle_key(state, key)
            }
        }
        CEvent::Mouse(mouse) if state.color_picker.is_none() => handle_mouse(state, mouse),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }
    match key.code {
        KeyCode::Char('q') => vec![Action::Quit],
        KeyCode::Char('r') => vec![Action::ResetDice],
        KeyCode::Char('c') => {
            state.color_picker = Some(ColorPickerState::new());
            vec![]
        }
        KeyCode::Char(ch @ '1'..='6') => {
            let idx = ch as usize - '1' as usize;
            state.selected = idx;
            vec![Action::Roll(DieKind::ALL[idx])]
        }
        KeyCode::Enter | KeyCode::Char(' ') => vec![Action::Roll(state.selected_die())],
        KeyCode::Left | KeyCode::Char('h') => {
            state.move_selection(-1, 0);
            vec![]
        }
        KeyCode::Right | KeyCode::Char('l') => {
            state.move_selection(1, 0);
            vec![]
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.move_selection(0, -1);
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.move_selection(0, 1);
            vec![]
        }
        KeyCode::Tab => {
            state.select_next();
            vec![]
        }
        _ => vec![],
    }
}

/// A left click on a die card selects and rolls it, like a tap in a touch UI.
fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return vec![];
    }
    let position = Position::new(mouse.column, mouse.row);
    for (idx, cell) in state.dice_cells.iter().enumerate() {
        if cell.contains(position) {
            state.selected = idx;
            state.dirty = true;
            return vec![Action::Roll(DieKind::ALL[idx])];
        }
    }
    vec![]
}

fn handle_picker_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let Some(picker) = state.color_picker.as_mut() else {
        return vec![];
    };
    match key.code {
        KeyCode::Esc | KeyCode::Char('c') | KeyCode::Char('q') => {
            state.color_picker = None;
            vec![]
        }
        KeyCode::Tab => {
            picker.target = picker.target.next();
            vec![]
        }
        KeyCode::BackTab => {
            picker.target = picker.target.prev();
            vec![]
        }
        KeyCode::Left | KeyCode::Char('h') => {
            picker.swatch = (picker.swatch + PALETTE.len() - 1) % PALETTE.len();
            vec![]
        }
        KeyCode::Right | KeyCode::Char('l') => {
            picker.swatch = (picker.swatch + 1) % PALETTE.len();
            vec![]
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Down | KeyCode::Char('j') => {
            // Two rows of five swatches; vertical movement flips rows.
            picker.swatch = (picker.swatch + PALETTE.len() / 2) % PALETTE.len();
            vec![]
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            let target = picker.target;
            let hex = PALETTE[picker.swatch];
            match target {
                ColorTarget::Background => state.config.colors.background = hex.to_string(),
                ColorTarget::Die => state.config.colors.die = hex.to_string(),
                ColorTarget::Font => state.config.colors.font = hex.to_string(),
            }
            state.refresh_theme();
            state.set_status(format!("{} color set to {}", target.label(), hex));
            vec![Action::SaveConfig]
        }
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crossterm::event::KeyEvent;

    fn state() -> AppState {
        AppState::new(AppConfig::default())
    }

    fn press(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    #[test]
    fn test_digit_keys_roll_their_die() {
        let mut state = state();
        assert_eq!(
            handle_event(&mut state, press(KeyCode::Char('1'))),
            vec![Action::Roll(DieKind::D4)]
        );
        assert_eq!(
            handle_event(&mut state, press(KeyCode::Char('6'))),
            vec![Action::Roll(DieKind::D20)]
        );
        assert_eq!(state.selected_die(), DieKind::D20);
    }

    #[test]
    fn test_enter_rolls_selected_die() {
        let mut state = state();
        state.move_selection(1, 1);
        assert_eq!(
            handle_event(&mut state, press(KeyCode::Enter)),
            vec![Action::Roll(DieKind::D10)]
        );
    }

    #[test]
    fn test_reset_and_quit_keys() {
        let mut state = state();
        assert_eq!(
            handle_event(&mut state, press(KeyCode::Char('r'))),
            vec![Action::ResetDice]
        );
        assert_eq!(
            handle_event(&mut state, press(KeyCode::Char('q'))),
            vec![Action::Quit]
        );
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut state = state();
        let event = AppEvent::Terminal(CEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert_eq!(handle_event(&mut state, event), vec![Action::Quit]);
    }

    #[test]
    fn test_c_opens_picker_and_esc_closes_it() {
        let mut state = state();
        handle_event(&mut state, press(KeyCode::Char('c')));
        assert!(state.color_picker.is_some());
        handle_event(&mut state, press(KeyCode::Esc));
        assert!(state.color_picker.is_none());
    }

    #[test]
    fn test_picker_enter_applies_color_and_saves() {
        let mut state = state();
        handle_event(&mut state, press(KeyCode::Char('c')));
        // Background target, move to the fourth swatch.
        for _ in 0..3 {
            handle_event(&mut state, press(KeyCode::Right));
        }
        let actions = handle_event(&mut state, press(KeyCode::Enter));
        assert_eq!(actions, vec![Action::SaveConfig]);
        assert_eq!(state.config.colors.background, PALETTE[3]);
        assert!(state.status_message.is_some());
    }

    #[test]
    fn test_picker_tab_switches_target() {
        let mut state = state();
        handle_event(&mut state, press(KeyCode::Char('c')));
        handle_event(&mut state, press(KeyCode::Tab));
        assert_eq!(state.color_picker.unwrap().target, ColorTarget::Die);
        let actions = handle_event(&mut state, press(KeyCode::Enter));
        assert_eq!(actions, vec![Action::SaveConfig]);
        assert_eq!(state.config.colors.die, PALETTE[0]);
    }

    #[test]
    fn test_digits_ignored_while_picker_open() {
        let mut state = state();
        handle_event(&mut state, press(KeyCode::Char('c')));
        assert!(handle_event(&mut state, press(KeyCode::Char('3'))).is_empty());
    }

    #[test]
    fn test_click_on_card_rolls_it() {
        let mut state = state();
        state.dice_cells[2] = ratatui::layout::Rect::new(0, 10, 20, 5);
        let event = AppEvent::Terminal(CEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 5,
            row: 12,
            modifiers: KeyModifiers::NONE,
        }));
        assert_eq!(
            handle_event(&mut state, event),
            vec![Action::Roll(DieKind::D8)]
        );
        assert_eq!(state.selected_die(), DieKind::D8);
    }
}
