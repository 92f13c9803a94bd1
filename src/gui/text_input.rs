use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub enum TextInputAction {
    Consumed,
    Dismiss,
    Submit(String),
}

/// Single-line text entry. The entered text is handed over untrimmed on
/// submit; any input policy lives with the caller.
pub struct TextInput {
    header: &'static str,
    text: String,
    /// Cursor position in characters, not bytes.
    cursor: usize,
}

impl TextInput {
    pub const fn new(header: &'static str) -> Self {
        Self {
            header,
            text: String::new(),
            cursor: 0,
        }
    }

    pub fn reset(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self) -> usize {
        self.text
            .char_indices()
            .nth(self.cursor)
            .map_or(self.text.len(), |(index, _)| index)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> TextInputAction {
        match key.code {
            KeyCode::Esc => TextInputAction::Dismiss,
            KeyCode::Enter => TextInputAction::Submit(self.text.clone()),
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let index = self.byte_index();
                    self.text.remove(index);
                }
                TextInputAction::Consumed
            }
            KeyCode::Left => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
                TextInputAction::Consumed
            }
            KeyCode::Right => {
                if self.cursor < self.char_count() {
                    self.cursor += 1;
                }
                TextInputAction::Consumed
            }
            KeyCode::Char(c) => {
                let index = self.byte_index();
                self.text.insert(index, c);
                self.cursor += 1;
                TextInputAction::Consumed
            }
            _ => TextInputAction::Consumed,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::vertical([
            Constraint::Length(1), // header
            Constraint::Length(1), // pad
            Constraint::Length(1), // input
            Constraint::Length(1), // pad
            Constraint::Length(1), // hints
            Constraint::Min(0),    // pad
        ])
        .split(area);

        frame.render_widget(
            Paragraph::new(self.header).style(Style::default().fg(Color::Cyan)),
            rows[0],
        );

        let input_area = Rect {
            x: rows[2].x + 1,
            width: rows[2].width.saturating_sub(2),
            ..rows[2]
        };
        let available_width = input_area.width as usize;

        let scroll = self.cursor.saturating_sub(available_width);
        let visible_text: String = self
            .text
            .chars()
            .skip(scroll)
            .take(available_width)
            .collect();
        let cursor_pos = self.cursor - scroll;

        let input_line = Line::from(Span::styled(
            &visible_text,
            Style::default().fg(Color::White),
        ));
        frame.render_widget(Paragraph::new(input_line), input_area);

        let cursor_x = input_area.x + cursor_pos as u16;
        if cursor_x < input_area.x + input_area.width {
            frame.set_cursor_position((cursor_x, input_area.y));
        }

        let hints = Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
            Span::raw(" Save "),
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::raw(" Cancel"),
        ]);
        frame.render_widget(
            Paragraph::new(hints).alignment(Alignment::Center),
            rows[4],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn type_str(input: &mut TextInput, text: &str) {
        for c in text.chars() {
            input.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn typing_builds_the_text_and_submit_hands_it_over() {
        let mut input = TextInput::new("Enter Task");
        type_str(&mut input, "Buy milk");

        match input.handle_key(key(KeyCode::Enter)) {
            TextInputAction::Submit(text) => assert_eq!(text, "Buy milk"),
            _ => panic!("expected submit"),
        }
    }

    #[test]
    fn submit_does_not_trim() {
        let mut input = TextInput::new("Enter Task");
        type_str(&mut input, "  ");

        match input.handle_key(key(KeyCode::Enter)) {
            TextInputAction::Submit(text) => assert_eq!(text, "  "),
            _ => panic!("expected submit"),
        }
    }

    #[test]
    fn backspace_removes_the_character_before_the_cursor() {
        let mut input = TextInput::new("Enter Task");
        type_str(&mut input, "milk");
        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Backspace));

        match input.handle_key(key(KeyCode::Enter)) {
            TextInputAction::Submit(text) => assert_eq!(text, "mik"),
            _ => panic!("expected submit"),
        }
    }

    #[test]
    fn editing_handles_multibyte_characters() {
        let mut input = TextInput::new("Enter Task");
        type_str(&mut input, "café");
        input.handle_key(key(KeyCode::Backspace));
        type_str(&mut input, "és");

        match input.handle_key(key(KeyCode::Enter)) {
            TextInputAction::Submit(text) => assert_eq!(text, "cafés"),
            _ => panic!("expected submit"),
        }
    }

    #[test]
    fn cursor_movement_clamps_at_the_ends() {
        let mut input = TextInput::new("Enter Task");
        type_str(&mut input, "ab");
        for _ in 0..5 {
            input.handle_key(key(KeyCode::Left));
        }
        type_str(&mut input, "x");

        match input.handle_key(key(KeyCode::Enter)) {
            TextInputAction::Submit(text) => assert_eq!(text, "xab"),
            _ => panic!("expected submit"),
        }
    }

    #[test]
    fn escape_dismisses() {
        let mut input = TextInput::new("Enter Task");
        assert!(matches!(
            input.handle_key(key(KeyCode::Esc)),
            TextInputAction::Dismiss
        ));
    }

    #[test]
    fn reset_clears_text_and_cursor() {
        let mut input = TextInput::new("Enter Task");
        type_str(&mut input, "stale");
        input.reset();
        type_str(&mut input, "fresh");

        match input.handle_key(key(KeyCode::Enter)) {
            TextInputAction::Submit(text) => assert_eq!(text, "fresh"),
            _ => panic!("expected submit"),
        }
    }
}
