//! Cross-thread command queue.
//!
//! The `Gui` is single-threaded. Other threads send closures through a
//! [`CommandSender`]; the UI thread runs them with `Gui::drain_commands`,
//! typically once per frame.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::Gui;
use crate::error::{GuiError, Result};

/// A mutation to run on the UI thread.
pub type Command = Box<dyn FnOnce(&mut Gui) + Send>;

/// Cloneable handle for queueing commands from any thread.
#[derive(Clone)]
pub struct CommandSender {
    tx: UnboundedSender<Command>,
}

impl CommandSender {
    /// Queue `command`. Fails once the owning `Gui` is gone.
    pub fn send(&self, command: impl FnOnce(&mut Gui) + Send + 'static) -> Result<()> {
        self.tx
            .send(Box::new(command))
            .map_err(|_| GuiError::Disconnected)
    }

    /// Whether the owning `Gui` has been dropped.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl std::fmt::Debug for CommandSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandSender")
            .field("closed", &self.is_closed())
            .finish()
    }
}

/// Receiving end, owned by the `Gui`.
pub(crate) struct CommandQueue {
    tx: UnboundedSender<Command>,
    rx: UnboundedReceiver<Command>,
}

impl CommandQueue {
    pub(crate) fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { tx, rx }
    }

    pub(crate) fn sender(&self) -> CommandSender {
        CommandSender {
            tx: self.tx.clone(),
        }
    }

    /// The next queued command, without blocking.
    pub(crate) fn try_next(&mut self) -> Option<Command> {
        self.rx.try_recv().ok()
    }
}
