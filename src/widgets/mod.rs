//! Built-in widgets: Container, Label, Button, CheckBox, TextBox, Slider,
//! ProgressBar, Image, OptionsBox.

pub mod button;
pub mod checkbox;
pub mod container;
pub mod image;
pub mod label;
pub mod options_box;
pub mod progress_bar;
pub mod slider;
pub mod textbox;

pub use button::Button;
pub use checkbox::CheckBox;
pub use container::Container;
pub use image::{Image, ImageSource};
pub use label::Label;
pub use options_box::{Arrow, OptionValue, OptionsBox};
pub use progress_bar::{LabelPlacement, ProgressBar};
pub use slider::Slider;
pub use textbox::TextBox;

/// Axis of sliders and progress bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}
