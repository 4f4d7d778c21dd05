use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::errors::Result;
use crate::identity::TableIdentity;

/// Tracks which views select from which tables.
///
/// Sources are kept in identity order, so tables that haven't been assigned a
/// UUID are visited before tables that have one.
#[derive(Debug, Clone, Default)]
pub struct ViewDependencies {
    dependencies: BTreeMap<TableIdentity, BTreeSet<TableIdentity>>,
}

impl ViewDependencies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `view` reads from `from`.
    pub fn add_dependency(&mut self, from: TableIdentity, view: TableIdentity) -> Result<()> {
        from.assert_not_empty()?;
        view.assert_not_empty()?;

        debug!(from = %from, view = %view, "adding view dependency");
        self.dependencies.entry(from).or_default().insert(view);
        Ok(())
    }

    /// Remove a dependency, returning if it existed.
    pub fn remove_dependency(&mut self, from: &TableIdentity, view: &TableIdentity) -> Result<bool> {
        from.assert_not_empty()?;
        view.assert_not_empty()?;

        let views = match self.dependencies.get_mut(from) {
            Some(views) => views,
            None => return Ok(false),
        };

        let removed = views.remove(view);
        if views.is_empty() {
            self.dependencies.remove(from);
        }

        if removed {
            debug!(from = %from, view = %view, "removed view dependency");
        }

        Ok(removed)
    }

    /// Views that read from `from`, in identity order.
    pub fn dependents(&self, from: &TableIdentity) -> Vec<TableIdentity> {
        self.dependencies
            .get(from)
            .map(|views| views.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Tables that have at least one dependent view, in identity order.
    pub fn sources(&self) -> impl Iterator<Item = &TableIdentity> {
        self.dependencies.keys()
    }

    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn id(database: &str, table: &str) -> TableIdentity {
        TableIdentity::new(database, table).unwrap()
    }

    #[test]
    fn add_and_get() {
        let mut deps = ViewDependencies::new();
        deps.add_dependency(id("db", "t1"), id("db", "v2")).unwrap();
        deps.add_dependency(id("db", "t1"), id("db", "v1")).unwrap();

        assert_eq!(vec![id("db", "v1"), id("db", "v2")], deps.dependents(&id("db", "t1")));
        assert!(deps.dependents(&id("db", "t2")).is_empty());
        assert_eq!(1, deps.len());
    }

    #[test]
    fn sources_name_identified_first() {
        let mut deps = ViewDependencies::new();
        let with_uuid = id("a", "a").with_uuid(Uuid::from_u128(1));
        deps.add_dependency(with_uuid.clone(), id("db", "v1")).unwrap();
        deps.add_dependency(id("z", "z"), id("db", "v2")).unwrap();

        let sources: Vec<_> = deps.sources().cloned().collect();
        assert_eq!(vec![id("z", "z"), with_uuid], sources);
    }

    #[test]
    fn renamed_source_matches_by_uuid() {
        let uuid = Uuid::from_u128(3);
        let mut deps = ViewDependencies::new();
        deps.add_dependency(id("db", "old").with_uuid(uuid), id("db", "v1"))
            .unwrap();

        let renamed = id("db", "new").with_uuid(uuid);
        assert_eq!(vec![id("db", "v1")], deps.dependents(&renamed));
    }

    #[test]
    fn remove_drops_empty_sources() {
        let mut deps = ViewDependencies::new();
        deps.add_dependency(id("db", "t1"), id("db", "v1")).unwrap();

        assert!(!deps.remove_dependency(&id("db", "t1"), &id("db", "v2")).unwrap());
        assert!(deps.remove_dependency(&id("db", "t1"), &id("db", "v1")).unwrap());
        assert!(!deps.remove_dependency(&id("db", "t2"), &id("db", "v1")).unwrap());
        assert!(deps.is_empty());
    }

    #[test]
    fn rejects_empty_identity() {
        let mut deps = ViewDependencies::new();
        let err = deps
            .add_dependency(TableIdentity::empty(), id("db", "v1"))
            .unwrap_err();
        assert!(err.is_logical());

        let err = deps
            .remove_dependency(&id("db", "t1"), &TableIdentity::empty())
            .unwrap_err();
        assert!(err.is_logical());
        assert!(deps.is_empty());
    }
}
