use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::state::AppState;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let title = format!(" Dice Tower v{} ", env!("CARGO_PKG_VERSION"));
    let right = " press a die to roll ";

    let used = title.len() + right.len();
    let remaining = (area.width as usize).saturating_sub(used);

    let line = Line::from(vec![
        Span::styled(title, state.theme.header()),
        Span::styled(" ".repeat(remaining), state.theme.screen()),
        Span::styled(right, state.theme.hint()),
    ]);
    frame.render_widget(Paragraph::new(line).style(state.theme.screen()), area);
}
