mod canvas;
mod frame;
mod submenu;
mod text_input;
mod widget;

pub use canvas::{Canvas, DrawOp};
pub use frame::device_frame;
pub use submenu::{Submenu, SubmenuAction};
pub use text_input::{TextInput, TextInputAction};
pub use widget::{TextWidget, WidgetAction};
