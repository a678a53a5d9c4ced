use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::state::AppState;
use crate::engine::dice::DieKind;

pub fn render(frame: &mut Frame, cells: &[Rect; 6], state: &AppState) {
    for (idx, &die) in DieKind::ALL.iter().enumerate() {
        render_card(frame, cells[idx], state, die, idx == state.selected);
    }
}

fn render_card(frame: &mut Frame, area: Rect, state: &AppState, die: DieKind, selected: bool) {
    let theme = &state.theme;
    let border_style = if selected {
        theme.die_border_selected()
    } else {
        theme.die_border()
    };

    let block = Block::default()
        .title(format!(" {} ", die))
        .title_style(theme.die_name())
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(theme.die_card());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    // Value sits on the middle line of the card.
    let value_area = Rect {
        x: inner.x,
        y: inner.y + (inner.height - 1) / 2,
        width: inner.width,
        height: 1,
    };
    let value = state.dice.value(die);
    let paragraph = Paragraph::new(value.to_string())
        .alignment(Alignment::Center)
        .style(theme.die_value());
    frame.render_widget(paragraph, value_area);
}
