use ratatui::{
    layout::Rect,
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Pixel dimensions of the device display.
pub const SCREEN_WIDTH: u16 = 128;
pub const SCREEN_HEIGHT: u16 = 64;

/// Character grid the pixel space maps onto: 2 px per column, 8 px per row.
pub const GRID_COLS: u16 = SCREEN_WIDTH / 2;
pub const GRID_ROWS: u16 = SCREEN_HEIGHT / 8;

/// A single text draw instruction in display pixel coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawOp {
    pub x: u16,
    pub y: u16,
    pub text: String,
}

/// Collects the draw instructions of one draw pass over a view.
#[derive(Debug, Default)]
pub struct Canvas {
    ops: Vec<DrawOp>,
}

impl Canvas {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    pub fn draw_str(&mut self, x: u16, y: u16, text: &str) {
        self.ops.push(DrawOp {
            x,
            y,
            text: text.to_string(),
        });
    }

    /// Recorded instructions, in call order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Lays the instructions out on the character grid. Text past the right
    /// edge is clipped; instructions below the bottom edge are dropped.
    fn grid(&self) -> Vec<String> {
        let mut rows = vec![vec![' '; GRID_COLS as usize]; GRID_ROWS as usize];
        for op in &self.ops {
            let row = (op.y / 8) as usize;
            let col = (op.x / 2) as usize;
            let Some(cells) = rows.get_mut(row) else {
                continue;
            };
            for (offset, ch) in op.text.chars().enumerate() {
                let Some(cell) = cells.get_mut(col + offset) else {
                    break;
                };
                *cell = ch;
            }
        }
        rows.into_iter().map(|row| row.into_iter().collect()).collect()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self.grid().into_iter().map(Line::from).collect();
        frame.render_widget(Paragraph::new(lines), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_instructions_in_call_order() {
        let mut canvas = Canvas::new();
        canvas.draw_str(10, 10, "Tasks:");
        canvas.draw_str(10, 20, "Buy milk");

        assert_eq!(
            canvas.ops(),
            [
                DrawOp {
                    x: 10,
                    y: 10,
                    text: "Tasks:".into()
                },
                DrawOp {
                    x: 10,
                    y: 20,
                    text: "Buy milk".into()
                },
            ]
        );
    }

    #[test]
    fn grid_places_text_at_the_mapped_cell() {
        let mut canvas = Canvas::new();
        canvas.draw_str(10, 20, "hi");

        let rows = canvas.grid();
        assert_eq!(rows.len(), GRID_ROWS as usize);
        assert_eq!(&rows[2][5..7], "hi");
    }

    #[test]
    fn grid_clips_text_at_the_right_edge() {
        let mut canvas = Canvas::new();
        let wide = "y".repeat(GRID_COLS as usize + 10);
        canvas.draw_str(0, 0, &wide);

        let rows = canvas.grid();
        assert_eq!(rows[0].chars().count(), GRID_COLS as usize);
        assert!(rows[0].chars().all(|ch| ch == 'y'));
    }

    #[test]
    fn grid_drops_instructions_below_the_bottom_edge() {
        let mut canvas = Canvas::new();
        canvas.draw_str(10, SCREEN_HEIGHT + 40, "off screen");

        assert!(canvas.grid().iter().all(|row| !row.contains("off screen")));
    }
}
