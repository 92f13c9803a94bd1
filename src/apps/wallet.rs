use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;

use crate::gui::{self, Canvas, Submenu, SubmenuAction};
use crate::notifications::Notifications;
use crate::wifi;

const CONFIG_INDEX: usize = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Menu,
    ComingSoon,
}

/// Wallet stub: Config brings up Wi-Fi as a fire-and-forget side effect,
/// everything else is a placeholder screen.
pub struct WalletApp {
    exited: bool,
    screen: Screen,
    menu: Submenu,
    notifications: Notifications,
}

impl WalletApp {
    pub fn new(notifications: Notifications) -> Self {
        notifications.backlight_enforce_on();
        Self {
            exited: false,
            screen: Screen::Menu,
            menu: Submenu::new(vec!["Config", "Play", "About"]),
            notifications,
        }
    }

    pub fn exited(&self) -> bool {
        self.exited
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.screen {
            Screen::Menu => match self.menu.handle_key(key) {
                SubmenuAction::Consumed => {}
                SubmenuAction::Selected(CONFIG_INDEX) => {
                    wifi::init_sta();
                    self.notifications.success("Wi-Fi connection started");
                }
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
        let inner = gui::device_frame(frame, " Wallet ");
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
