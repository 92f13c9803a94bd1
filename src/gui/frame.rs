use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear},
    Frame,
};

use super::canvas::{GRID_COLS, GRID_ROWS};

pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Renders the bordered device screen in the middle of the terminal and
/// returns the drawable area inside it.
pub fn device_frame(frame: &mut Frame, title: &str) -> Rect {
    let area = centered_rect(frame.area(), GRID_COLS + 2, GRID_ROWS + 2);
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}
