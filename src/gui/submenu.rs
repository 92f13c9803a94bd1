use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

/// Result of feeding a key press to the submenu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmenuAction {
    Consumed,
    Selected(usize),
    Back,
}

/// Selectable menu list, one visible cursor.
pub struct Submenu {
    items: Vec<&'static str>,
    cursor: usize,
}

impl Submenu {
    pub fn new(items: Vec<&'static str>) -> Self {
        Self { items, cursor: 0 }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> SubmenuAction {
        match key.code {
            KeyCode::Esc => SubmenuAction::Back,
            KeyCode::Enter => SubmenuAction::Selected(self.cursor),
            KeyCode::Up | KeyCode::Char('k') => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
                SubmenuAction::Consumed
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 1 < self.items.len() {
                    self.cursor += 1;
                }
                SubmenuAction::Consumed
            }
            _ => SubmenuAction::Consumed,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(area);

        let items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let content = if i == self.cursor {
                    Line::from(vec![
                        Span::styled("> ", Style::default().fg(Color::Cyan)),
                        Span::styled(
                            *label,
                            Style::default()
                                .fg(Color::White)
                                .add_modifier(Modifier::BOLD),
                        ),
                    ])
                } else {
                    Line::from(vec![
                        Span::raw("  "),
                        Span::styled(*label, Style::default().fg(Color::Gray)),
                    ])
                };
                ListItem::new(content)
            })
            .collect();
        frame.render_widget(List::new(items), rows[0]);

        let hints = Line::from(vec![
            Span::styled("[Up/Down]", Style::default().fg(Color::Yellow)),
            Span::raw(" Move "),
            Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
            Span::raw(" Select "),
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::raw(" Back"),
        ]);
        frame.render_widget(
            Paragraph::new(hints).alignment(Alignment::Center),
            rows[1],
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

    fn menu() -> Submenu {
        Submenu::new(vec!["Add Task", "View Tasks", "About"])
    }

    #[test]
    fn enter_selects_the_item_under_the_cursor() {
        let mut menu = menu();
        assert_eq!(menu.handle_key(key(KeyCode::Enter)), SubmenuAction::Selected(0));

        menu.handle_key(key(KeyCode::Down));
        assert_eq!(menu.handle_key(key(KeyCode::Enter)), SubmenuAction::Selected(1));
    }

    #[test]
    fn cursor_clamps_at_both_ends() {
        let mut menu = menu();
        menu.handle_key(key(KeyCode::Up));
        assert_eq!(menu.handle_key(key(KeyCode::Enter)), SubmenuAction::Selected(0));

        for _ in 0..10 {
            menu.handle_key(key(KeyCode::Down));
        }
        assert_eq!(menu.handle_key(key(KeyCode::Enter)), SubmenuAction::Selected(2));
    }

    #[test]
    fn escape_maps_to_back() {
        let mut menu = menu();
        assert_eq!(menu.handle_key(key(KeyCode::Esc)), SubmenuAction::Back);
    }

    #[test]
    fn unrelated_keys_are_consumed() {
        let mut menu = menu();
        assert_eq!(
            menu.handle_key(key(KeyCode::Char('x'))),
            SubmenuAction::Consumed
        );
        assert_eq!(menu.handle_key(key(KeyCode::Enter)), SubmenuAction::Selected(0));
    }
}
