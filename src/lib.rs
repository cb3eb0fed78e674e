//! # sfw-core
//!
//! A retained-mode widget toolkit core: a widget tree with stack and form
//! layouts, an interaction state machine, focus cycling, a name registry and
//! switchable themes. The host owns the window; it feeds input to a
//! [`Gui`](gui::Gui) and draws it through a [`Renderer`](render::Renderer).
//!
//! ## Core Systems
//!
//! - **[`tree`]**: slotmap-backed widget arena with sibling links
//! - **[`layout`]**: taffy-powered vertical, horizontal and form layouts
//! - **[`widget`]**: the Widget trait, interaction states, callbacks, hook context
//! - **[`widgets`]**: Container, Label, Button, CheckBox, TextBox, Slider,
//!   ProgressBar, Image, OptionsBox
//! - **[`event`]**: input events, crossterm translation, focus key bindings
//! - **[`gui`]**: the root controller: routing, focus, names, commands
//! - **[`theme`]**: metrics, colors, fonts and textures, TOML configuration
//! - **[`render`]**: the draw seam implemented by backends
//! - **[`testing`]**: headless Pilot, recording renderer, stub assets
//! - **[`geometry`]**: Offset, Size, Region, Transform primitives
//!
//! ## Example
//!
//! ```
//! use sfw_core::prelude::*;
//!
//! let mut gui = Gui::new(GuiConfig::default(), Theme::default());
//! let form = gui.add(gui.root(), Container::form()).unwrap();
//! let name = gui.add_row(form, "Name", TextBox::new()).unwrap();
//! gui.register_name("name", name).unwrap();
//!
//! gui.process(InputEvent::key(Key::Tab));
//! for ch in "Ada".chars() {
//!     gui.process(InputEvent::TextEntered(ch));
//! }
//! assert_eq!(gui.find::<TextBox>("name").unwrap().text(), "Ada");
//! ```

// Foundation
pub mod error;
pub mod geometry;

// Core systems
pub mod layout;
pub mod theme;
pub mod tree;

// Widget system
pub mod widget;
pub mod widgets;

// Input
pub mod event;

// Controller and output
pub mod gui;
pub mod render;

// Test tooling
pub mod testing;

pub use error::{GuiError, Result};

/// The types most programs need.
pub mod prelude {
    pub use crate::error::{GuiError, Result};
    pub use crate::event::{InputEvent, Key, KeyEvent, Modifiers, MouseButton};
    pub use crate::geometry::{Offset, Region, Size};
    pub use crate::gui::{CommandSender, Gui, GuiConfig};
    pub use crate::layout::LayoutKind;
    pub use crate::render::{DrawItem, Renderer};
    pub use crate::theme::{AssetLoader, Theme, ThemeConfig};
    pub use crate::tree::WidgetId;
    pub use crate::widget::{Callback, Widget, WidgetCtx, WidgetState};
    pub use crate::widgets::{
        Button, CheckBox, Container, Image, Label, LabelPlacement, OptionsBox, Orientation,
        ProgressBar, Slider, TextBox,
    };
}
