//! Color settings overlay.
//!
//! A centered modal with the three tintable targets and a fixed set of
//! preset swatches. Enter applies the highlighted swatch to the active
//! target and persists the config.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::state::{AppState, ColorTarget, PALETTE};
use crate::ui::layout;
use crate::ui::theme;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(picker) = state.color_picker else {
        return;
    };

    let popup = layout::centered_rect(60, 55, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Colors ")
        .title_style(state.theme.picker_title())
        .borders(Borders::ALL)
        .border_style(state.theme.picker_border())
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let mut lines: Vec<Line> = Vec::new();

    // Target row
    let mut targets: Vec<Span> = vec![Span::raw(" ")];
    for target in ColorTarget::ALL {
        let style = if target == picker.target {
            state.theme.picker_target_active()
        } else {
            state.theme.picker_target()
        };
        targets.push(Span::styled(format!(" {} ", target.label()), style));
        targets.push(Span::raw("  "));
    }
    lines.push(Line::from(targets));
    lines.push(Line::default());

    // Swatches, two rows of five
    let row_len = PALETTE.len() / 2;
    for (row_idx, row) in PALETTE.chunks(row_len).enumerate() {
        let mut spans: Vec<Span> = vec![Span::raw(" ")];
        for (offset, hex) in row.iter().enumerate() {
            let idx = row_idx * row_len + offset;
            let swatch_color = theme::parse_color(hex).unwrap_or(Color::Black);
            let marker = if idx == picker.swatch { ("[", "]") } else { (" ", " ") };
            spans.push(Span::raw(marker.0));
            spans.push(Span::styled("    ", Style::default().bg(swatch_color)));
            spans.push(Span::raw(marker.1));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    // Current selection readout
    lines.push(Line::from(vec![
        Span::styled(" ", Style::default()),
        Span::styled(
            format!("{} ", picker.target.label()),
            state.theme.picker_target(),
        ),
        Span::styled(
            PALETTE[picker.swatch],
            Style::default().fg(Color::White),
        ),
    ]));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        " tab target | arrows swatch | enter apply | esc close",
        state.theme.hint(),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}
