use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::state::AppState;

const HINTS: &str = "1-6 roll | enter roll selected | r reset | c colors | q quit";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    // Selected die indicator
    parts.push(Span::styled(
        format!(" [{}] ", state.selected_die()),
        state.theme.status_accent(),
    ));

    // Transient message wins over the hint line
    let status_text = match &state.status_message {
        Some(msg) => msg.text.as_str(),
        None if state.config.ui.show_hints => HINTS,
        None => "",
    };
    parts.push(Span::styled(
        format!(" {} ", status_text),
        state.theme.status_bar(),
    ));

    // Mode indicator, right-aligned
    let mode = if state.color_picker.is_some() {
        "COLORS"
    } else {
        "DICE"
    };
    let used: usize = parts.iter().map(|s| s.content.len()).sum();
    let remaining = (area.width as usize).saturating_sub(used + mode.len() + 3);
    parts.push(Span::styled(" ".repeat(remaining), state.theme.status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", mode),
        state.theme.status_mode(),
    ));

    let line = Line::from(parts);
    frame.render_widget(Paragraph::new(line), area);
}
