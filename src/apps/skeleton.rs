use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;

use crate::gui::{self, Canvas, Submenu, SubmenuAction};
use crate::notifications::Notifications;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Menu,
    ComingSoon,
}

/// Skeleton app: a three-item menu where every entry leads to the same
/// placeholder screen. Keeps the backlight on for as long as it runs.
pub struct SkeletonApp {
    exited: bool,
    screen: Screen,
    menu: Submenu,
    _notifications: Notifications,
}

impl SkeletonApp {
    pub fn new(notifications: Notifications) -> Self {
        notifications.backlight_enforce_on();
        Self {
            exited: false,
            screen: Screen::Menu,
            menu: Submenu::new(vec!["Config", "Play", "About"]),
            _notifications: notifications,
        }
    }

    pub fn exited(&self) -> bool {
        self.exited
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.screen {
            Screen::Menu => match self.menu.handle_key(key) {
                SubmenuAction::Consumed => {}
                SubmenuAction::Selected(_) => self.screen = Screen::ComingSoon,
                SubmenuAction::Back => self.exited = true,
            },
            Screen::ComingSoon => {
                if key.code == KeyCode::Esc {
                    self.screen = Screen::Menu;
                }
            }
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        let inner = gui::device_frame(frame, " Skeleton ");
        match self.screen {
            Screen::Menu => self.menu.render(frame, inner),
            Screen::ComingSoon => {
                let mut canvas = Canvas::new();
                canvas.draw_str(10, 10, "Coming Soon");
                canvas.render(frame, inner);
            }
        }
    }
}
