mod nav;
mod store;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;

use crate::gui::{
    self, Canvas, Submenu, SubmenuAction, TextInput, TextInputAction, TextWidget, WidgetAction,
};
use nav::{dispatch, Event, MenuItem, Screen, Step};
use store::TaskStore;

const ABOUT_TEXT: &str = "This is a simple ToDo list app.";

pub struct TodoApp {
    exited: bool,
    screen: Screen,
    /// Show an intermediate confirmation screen after a successful append.
    confirm_on_add: bool,
    store: TaskStore,
    menu: Submenu,
    input: TextInput,
    about: TextWidget,
    confirm: TextWidget,
}

impl TodoApp {
    pub fn new(confirm_on_add: bool) -> Self {
        Self {
            exited: false,
            screen: Screen::Menu,
            confirm_on_add,
            store: TaskStore::new(),
            menu: Submenu::new(MenuItem::ALL.iter().map(|item| item.label()).collect()),
            input: TextInput::new("Enter Task"),
            about: TextWidget::new(ABOUT_TEXT),
            confirm: TextWidget::new("Task Entered!"),
        }
    }

    pub fn exited(&self) -> bool {
        self.exited
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let event = match self.screen {
            Screen::Menu => match self.menu.handle_key(key) {
                SubmenuAction::Consumed => return,
                SubmenuAction::Selected(index) => {
                    let Some(item) = MenuItem::from_index(index) else {
                        return;
                    };
                    Event::Selected(item)
                }
                SubmenuAction::Back => Event::Back,
            },
            Screen::AddTask => match self.input.handle_key(key) {
                TextInputAction::Consumed => return,
                TextInputAction::Submit(text) => Event::Submitted(text),
                TextInputAction::Dismiss => Event::Back,
            },
            Screen::ViewTasks => {
                if key.code == KeyCode::Esc {
                    Event::Back
                } else {
                    return;
                }
            }
            Screen::About => match self.about.handle_key(key) {
                WidgetAction::Consumed => return,
                WidgetAction::Back => Event::Back,
            },
            Screen::Confirm => match self.confirm.handle_key(key) {
                WidgetAction::Consumed => return,
                WidgetAction::Back => Event::Back,
            },
        };

        match dispatch(self.screen, event) {
            Step::Stay => {}
            Step::Goto(next) => self.switch_to(next),
            Step::Submit(text) => {
                let next = self.submit(&text);
                self.switch_to(next);
            }
            Step::Exit => self.exited = true,
        }
    }

    fn switch_to(&mut self, next: Screen) {
        log::info!("switching to {next:?}");
        if next == Screen::AddTask {
            self.input.reset();
        }
        self.screen = next;
    }

    /// Append flow for submitted text; picks the screen shown afterwards.
    /// A full store is log-only: the user lands back on the menu either way.
    fn submit(&mut self, text: &str) -> Screen {
        let text = text.trim();
        if text.is_empty() {
            log::debug!("empty task input discarded");
            return Screen::Menu;
        }
        match self.store.append(text) {
            Ok(()) if self.confirm_on_add => Screen::Confirm,
            Ok(()) => Screen::Menu,
            Err(err) => {
                log::warn!("{err}");
                Screen::Menu
            }
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        let inner = gui::device_frame(frame, " ToDo ");
        match self.screen {
            Screen::Menu => self.menu.render(frame, inner),
            Screen::AddTask => self.input.render(frame, inner),
            Screen::ViewTasks => {
                let mut canvas = Canvas::new();
                self.draw_task_list(&mut canvas);
                canvas.render(frame, inner);
            }
            Screen::About => self.about.render(frame, inner),
            Screen::Confirm => self.confirm.render(frame, inner),
        }
    }

    /// Draw pass for the view-tasks screen, one line per task below the
    /// header, each at a fixed vertical stride.
    fn draw_task_list(&self, canvas: &mut Canvas) {
        log::debug!("drawing task list, count: {}", self.store.count());
        canvas.draw_str(10, 10, "Tasks:");
        if self.store.count() == 0 {
            canvas.draw_str(10, 20, "No tasks recorded.");
            return;
        }
        for (i, task) in self.store.tasks().iter().enumerate() {
            canvas.draw_str(10, 20 + (i as u16) * 10, task.text());
        }
    }
}
