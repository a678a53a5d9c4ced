use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::app::state::{GRID_COLS, GRID_ROWS};

pub struct AppLayout {
    pub header_bar: Rect,
    /// Die card rects in [`crate::engine::dice::DieKind::ALL`] order.
    pub dice_cells: [Rect; 6],
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: header | dice grid | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(9),    // Dice grid
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let header_bar = main_chunks[0];
    let grid = main_chunks[1];
    let status_bar = main_chunks[2];

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, GRID_ROWS as u32); GRID_ROWS])
        .split(grid);

    let mut dice_cells = [Rect::default(); 6];
    for (row_idx, row) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, GRID_COLS as u32); GRID_COLS])
            .split(*row);
        for (col_idx, col) in cols.iter().enumerate() {
            dice_cells[row_idx * GRID_COLS + col_idx] = *col;
        }
    }

    AppLayout {
        header_bar,
        dice_cells,
        status_bar,
    }
}

/// Rect centered in `area`, sized as a percentage of it. Used for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_has_six_distinct_cells() {
        let layout = compute_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.header_bar.height, 1);
        assert_eq!(layout.status_bar.height, 1);
        for (i, a) in layout.dice_cells.iter().enumerate() {
            assert!(a.width > 0 && a.height > 0);
            for b in layout.dice_cells.iter().skip(i + 1) {
                assert!(a.intersection(*b).is_empty(), "cells {a:?} and {b:?} overlap");
            }
        }
    }

    #[test]
    fn test_centered_rect_is_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(60, 50, area);
        assert!(popup.x > 0 && popup.y > 0);
        assert!(popup.right() <= area.right());
        assert!(popup.bottom() <= area.bottom());
    }
}
