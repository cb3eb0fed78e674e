//! Widget system: trait, hook context, interaction state, callbacks.

pub mod callback;
pub mod context;
pub mod state;
pub mod traits;

pub use callback::Callback;
pub use context::WidgetCtx;
pub use state::WidgetState;
pub use traits::Widget;
