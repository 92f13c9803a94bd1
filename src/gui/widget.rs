use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetAction {
    Consumed,
    Back,
}

/// Static text widget with vertical scrolling.
pub struct TextWidget {
    text: &'static str,
    scroll: u16,
}

impl TextWidget {
    pub const fn new(text: &'static str) -> Self {
        Self { text, scroll: 0 }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> WidgetAction {
        match key.code {
            KeyCode::Esc => WidgetAction::Back,
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
                WidgetAction::Consumed
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let last_line = self.text.lines().count().saturating_sub(1) as u16;
                if self.scroll < last_line {
                    self.scroll += 1;
                }
                WidgetAction::Consumed
            }
            _ => WidgetAction::Consumed,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.text)
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn escape_maps_to_back() {
        let mut widget = TextWidget::new("Coming Soon");
        assert_eq!(widget.handle_key(key(KeyCode::Esc)), WidgetAction::Back);
    }

    #[test]
    fn scroll_clamps_to_the_text() {
        let mut widget = TextWidget::new("one\ntwo\nthree");
        widget.handle_key(key(KeyCode::Up));
        assert_eq!(widget.scroll, 0);

        for _ in 0..10 {
            widget.handle_key(key(KeyCode::Down));
        }
        assert_eq!(widget.scroll, 2);
    }
}
