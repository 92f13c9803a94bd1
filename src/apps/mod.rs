mod skeleton;
mod todo;
mod wallet;

pub use skeleton::SkeletonApp;
pub use todo::TodoApp;
pub use wallet::WalletApp;

use crossterm::event::KeyEvent;
use ratatui::Frame;

/// The demo application selected at startup.
pub enum Demo {
    Todo(TodoApp),
    Skeleton(SkeletonApp),
    Wallet(WalletApp),
}

impl Demo {
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self {
            Self::Todo(app) => app.handle_key(key),
            Self::Skeleton(app) => app.handle_key(key),
            Self::Wallet(app) => app.handle_key(key),
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        match self {
            Self::Todo(app) => app.render(frame),
            Self::Skeleton(app) => app.render(frame),
            Self::Wallet(app) => app.render(frame),
        }
    }

    pub fn exited(&self) -> bool {
        match self {
            Self::Todo(app) => app.exited(),
            Self::Skeleton(app) => app.exited(),
            Self::Wallet(app) => app.exited(),
        }
    }
}
