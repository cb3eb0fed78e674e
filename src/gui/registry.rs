//! Name registry: string names to widget ids.

use std::collections::HashMap;

use tracing::warn;

use crate::error::{GuiError, Result};
use crate::tree::WidgetId;

/// Maps names to widgets for later lookup.
///
/// The first registration of a name wins; later attempts are rejected and
/// logged. A widget may carry several names.
#[derive(Debug, Default)]
pub struct NameRegistry {
    names: HashMap<String, WidgetId>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` for `id`.
    ///
    /// Registering the same pair twice is a no-op.
    pub fn register(&mut self, name: impl Into<String>, id: WidgetId) -> Result<()> {
        let name = name.into();
        match self.names.get(&name) {
            Some(&existing) if existing == id => Ok(()),
            Some(&existing) => {
                warn!(%name, ?existing, rejected = ?id, "duplicate widget name");
                Err(GuiError::DuplicateName(name))
            }
            None => {
                self.names.insert(name, id);
                Ok(())
            }
        }
    }

    /// Whether `name` is taken.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    pub fn lookup(&self, name: &str) -> Option<WidgetId> {
        self.names.get(name).copied()
    }

    /// Forget one name, returning the widget it pointed at.
    pub fn unregister(&mut self, name: &str) -> Option<WidgetId> {
        self.names.remove(name)
    }

    /// Drop every name that points at one of `removed`.
    pub fn purge(&mut self, removed: &[WidgetId]) {
        self.names.retain(|_, id| !removed.contains(id));
    }

    /// All names of one widget, sorted.
    pub fn names_of(&self, id: WidgetId) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .names
            .iter()
            .filter(|(_, &target)| target == id)
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use slotmap::SlotMap;

    use super::*;

    fn ids(n: usize) -> Vec<WidgetId> {
        let mut map: SlotMap<WidgetId, ()> = SlotMap::with_key();
        (0..n).map(|_| map.insert(())).collect()
    }

    #[test]
    fn register_and_lookup() {
        let ids = ids(1);
        let mut reg = NameRegistry::new();
        reg.register("ok", ids[0]).unwrap();
        assert_eq!(reg.lookup("ok"), Some(ids[0]));
        assert_eq!(reg.lookup("missing"), None);
        assert!(reg.contains("ok"));
    }

    #[test]
    fn first_registration_wins() {
        let ids = ids(2);
        let mut reg = NameRegistry::new();
        reg.register("name", ids[0]).unwrap();
        let err = reg.register("name", ids[1]).unwrap_err();
        assert!(matches!(err, GuiError::DuplicateName(ref n) if n == "name"));
        assert_eq!(reg.lookup("name"), Some(ids[0]));
        // Same pair again is fine.
        reg.register("name", ids[0]).unwrap();
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn several_names_per_widget() {
        let ids = ids(1);
        let mut reg = NameRegistry::new();
        reg.register("b", ids[0]).unwrap();
        reg.register("a", ids[0]).unwrap();
        assert_eq!(reg.names_of(ids[0]), vec!["a", "b"]);
    }

    #[test]
    fn purge_drops_removed_widgets() {
        let ids = ids(3);
        let mut reg = NameRegistry::new();
        reg.register("a", ids[0]).unwrap();
        reg.register("b", ids[1]).unwrap();
        reg.register("c", ids[2]).unwrap();
        reg.purge(&ids[..2]);
        assert_eq!(reg.lookup("a"), None);
        assert_eq!(reg.lookup("b"), None);
        assert_eq!(reg.lookup("c"), Some(ids[2]));
        assert_eq!(reg.unregister("c"), Some(ids[2]));
        assert!(reg.is_empty());
    }
}
