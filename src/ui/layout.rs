//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Host layout: the widget's frame region on top, dead space in the
    /// middle, a one-line host status bar at the bottom.
    #[must_use]
    pub fn host_layout(area: Rect, frame_rows: u16) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(frame_rows),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area)
            .to_vec()
    }

    /// Rows the host grants the widget frame for a reported pixel height.
    #[must_use]
    pub fn frame_rows(height_px: u16, cell_height: u16, area: Rect) -> u16 {
        let rows = height_px.div_ceil(cell_height.max(1));
        rows.min(area.height.saturating_sub(1))
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}
