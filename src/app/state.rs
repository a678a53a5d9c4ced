use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::config::AppConfig;
use crate::engine::dice::DieKind;
use crate::engine::state::DiceState;
use crate::ui::theme::Theme;

/// Grid columns; the six dice sit in a 2-wide, 3-tall grid.
pub const GRID_COLS: usize = 2;
pub const GRID_ROWS: usize = 3;

/// Preset swatches offered by the color picker.
pub const PALETTE: [&str; 10] = [
    "#000814", "#001d3d", "#003566", "#ffc300", "#ffd60a", "#0d1b2a", "#1b263b", "#415a77",
    "#778da9", "#e0e1dd",
];

/// Which color the picker is currently editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTarget {
    Background,
    Die,
    Font,
}

impl ColorTarget {
    pub const ALL: [ColorTarget; 3] = [
        ColorTarget::Background,
        ColorTarget::Die,
        ColorTarget::Font,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ColorTarget::Background => "Background",
            ColorTarget::Die => "Die",
            ColorTarget::Font => "Font",
        }
    }

    pub fn next(self) -> ColorTarget {
        match self {
            ColorTarget::Background => ColorTarget::Die,
            ColorTarget::Die => ColorTarget::Font,
            ColorTarget::Font => ColorTarget::Background,
        }
    }

    pub fn prev(self) -> ColorTarget {
        match self {
            ColorTarget::Background => ColorTarget::Font,
            ColorTarget::Die => ColorTarget::Background,
            ColorTarget::Font => ColorTarget::Die,
        }
    }
}

/// Color picker overlay state.
#[derive(Debug, Clone, Copy)]
pub struct ColorPickerState {
    pub target: ColorTarget,
    pub swatch: usize,
}

impl ColorPickerState {
    pub fn new() -> Self {
        Self {
            target: ColorTarget::Background,
            swatch: 0,
        }
    }
}

/// A transient status bar message.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub expires_at: Instant,
}

pub struct AppState {
    pub config: AppConfig,
    pub theme: Theme,
    /// Latest snapshot from the dice engine.
    pub dice: DiceState,
    /// Index into [`DieKind::ALL`] of the keyboard-selected card.
    pub selected: usize,
    /// Screen rects of the six die cards, for mouse hit-testing. Updated
    /// before every draw.
    pub dice_cells: [Rect; 6],
    pub color_picker: Option<ColorPickerState>,
    pub status_message: Option<StatusMessage>,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let theme = Theme::from_config(&config.colors);
        Self {
            config,
            theme,
            dice: DiceState::new(),
            selected: 0,
            dice_cells: [Rect::default(); 6],
            color_picker: None,
            status_message: None,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn selected_die(&self) -> DieKind {
        DieKind::ALL[self.selected]
    }

    /// Move the grid selection by one column/row, clamped to the grid edges.
    pub fn move_selection(&mut self, dx: i32, dy: i32) {
        let col = ((self.selected % GRID_COLS) as i32 + dx).clamp(0, GRID_COLS as i32 - 1);
        let row = ((self.selected / GRID_COLS) as i32 + dy).clamp(0, GRID_ROWS as i32 - 1);
        self.selected = row as usize * GRID_COLS + col as usize;
        self.dirty = true;
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % DieKind::ALL.len();
        self.dirty = true;
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        let ttl = Duration::from_secs(self.config.ui.status_message_secs);
        self.status_message = Some(StatusMessage {
            text: text.into(),
            expires_at: Instant::now() + ttl,
        });
        self.dirty = true;
    }

    /// Drop the status message once its time is up.
    pub fn expire_status(&mut self, now: Instant) {
        if let Some(msg) = &self.status_message {
            if now >= msg.expires_at {
                self.status_message = None;
                self.dirty = true;
            }
        }
    }

    /// Rebuild the theme after a color change.
    pub fn refresh_theme(&mut self) {
        self.theme = Theme::from_config(&self.config.colors);
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(AppConfig::default())
    }

    #[test]
    fn test_selection_moves_and_clamps() {
        let mut state = state();
        assert_eq!(state.selected_die(), DieKind::D4);

        state.move_selection(1, 0);
        assert_eq!(state.selected_die(), DieKind::D6);
        state.move_selection(1, 0);
        assert_eq!(state.selected_die(), DieKind::D6);

        state.move_selection(0, 1);
        assert_eq!(state.selected_die(), DieKind::D10);
        state.move_selection(0, 1);
        state.move_selection(0, 1);
        assert_eq!(state.selected_die(), DieKind::D20);

        state.move_selection(-1, 0);
        assert_eq!(state.selected_die(), DieKind::D12);
    }

    #[test]
    fn test_select_next_wraps() {
        let mut state = state();
        for _ in 0..6 {
            state.select_next();
        }
        assert_eq!(state.selected_die(), DieKind::D4);
    }

    #[test]
    fn test_status_message_expires() {
        let mut state = state();
        state.set_status("Dice cleared");
        assert!(state.status_message.is_some());

        state.expire_status(Instant::now());
        assert!(state.status_message.is_some());

        let ttl = Duration::from_secs(state.config.ui.status_message_secs);
        state.expire_status(Instant::now() + ttl + Duration::from_millis(1));
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_color_target_cycles() {
        let mut target = ColorTarget::Background;
        for _ in 0..3 {
            target = target.next();
        }
        assert_eq!(target, ColorTarget::Background);
        assert_eq!(ColorTarget::Background.prev(), ColorTarget::Font);
    }
}
