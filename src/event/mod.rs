//! Event system: input events, key bindings, crossterm translation.

pub mod binding;
pub mod input;

pub use binding::{BindingAction, KeyBindingRegistry};
pub use input::{translate, InputEvent, Key, KeyEvent, Modifiers, MouseButton};
