mod color_picker;
mod dice_grid;
mod header_bar;
pub mod layout;
mod status_bar;
pub mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::Block;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Paint the configured background behind everything.
    frame.render_widget(Block::default().style(state.theme.screen()), area);

    let app_layout = layout::compute_layout(area);
    header_bar::render(frame, app_layout.header_bar, state);
    dice_grid::render(frame, &app_layout.dice_cells, state);
    status_bar::render(frame, app_layout.status_bar, state);
    color_picker::render(frame, area, state);
}
