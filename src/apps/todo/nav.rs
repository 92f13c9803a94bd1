/// One visible screen of the to-do app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    AddTask,
    ViewTasks,
    About,
    Confirm,
}

/// Menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    AddTask,
    ViewTasks,
    About,
}

impl MenuItem {
    pub const ALL: [Self; 3] = [Self::AddTask, Self::ViewTasks, Self::About];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::AddTask => "Add Task",
            Self::ViewTasks => "View Tasks",
            Self::About => "About",
        }
    }
}

/// A discrete user action, as delivered by the host toolkit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Selected(MenuItem),
    Submitted(String),
    Back,
}

/// What the controller should do in response to an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The event does not apply to the current screen.
    Stay,
    Goto(Screen),
    /// Run the append flow for the entered text.
    Submit(String),
    Exit,
}

/// The transition table. Selections only fire on the menu, submissions
/// only on the add-task screen; back returns to the menu from every other
/// screen and exits the app from the menu itself.
pub fn dispatch(screen: Screen, event: Event) -> Step {
    match (screen, event) {
        (Screen::Menu, Event::Selected(MenuItem::AddTask)) => Step::Goto(Screen::AddTask),
        (Screen::Menu, Event::Selected(MenuItem::ViewTasks)) => Step::Goto(Screen::ViewTasks),
        (Screen::Menu, Event::Selected(MenuItem::About)) => Step::Goto(Screen::About),
        (Screen::Menu, Event::Back) => Step::Exit,
        (Screen::AddTask, Event::Submitted(text)) => Step::Submit(text),
        (
            Screen::AddTask | Screen::ViewTasks | Screen::About | Screen::Confirm,
            Event::Back,
        ) => Step::Goto(Screen::Menu),
        _ => Step::Stay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_selections_reach_their_screens() {
        assert_eq!(
            dispatch(Screen::Menu, Event::Selected(MenuItem::AddTask)),
            Step::Goto(Screen::AddTask)
        );
        assert_eq!(
            dispatch(Screen::Menu, Event::Selected(MenuItem::ViewTasks)),
            Step::Goto(Screen::ViewTasks)
        );
        assert_eq!(
            dispatch(Screen::Menu, Event::Selected(MenuItem::About)),
            Step::Goto(Screen::About)
        );
    }

    #[test]
    fn back_from_the_menu_exits() {
        assert_eq!(dispatch(Screen::Menu, Event::Back), Step::Exit);
    }

    #[test]
    fn back_returns_to_the_menu_from_every_other_screen() {
        for screen in [
            Screen::AddTask,
            Screen::ViewTasks,
            Screen::About,
            Screen::Confirm,
        ] {
            assert_eq!(dispatch(screen, Event::Back), Step::Goto(Screen::Menu));
        }
    }

    #[test]
    fn submission_only_applies_on_the_add_task_screen() {
        assert_eq!(
            dispatch(Screen::AddTask, Event::Submitted("Buy milk".into())),
            Step::Submit("Buy milk".into())
        );
        for screen in [Screen::Menu, Screen::ViewTasks, Screen::About, Screen::Confirm] {
            assert_eq!(
                dispatch(screen, Event::Submitted("Buy milk".into())),
                Step::Stay
            );
        }
    }

    #[test]
    fn selections_are_ignored_off_the_menu() {
        for screen in [
            Screen::AddTask,
            Screen::ViewTasks,
            Screen::About,
            Screen::Confirm,
        ] {
            assert_eq!(
                dispatch(screen, Event::Selected(MenuItem::About)),
                Step::Stay
            );
        }
    }

    #[test]
    fn menu_item_index_round_trip() {
        for (index, item) in MenuItem::ALL.iter().enumerate() {
            assert_eq!(MenuItem::from_index(index), Some(*item));
        }
        assert_eq!(MenuItem::from_index(MenuItem::ALL.len()), None);
    }
}
