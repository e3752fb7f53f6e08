use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::dsu::Dsu;
use crate::entity::Entity;
use crate::error::{ResolverError, Result};
use crate::index::KeyIndex;
use crate::internal_invariant;

/// The resolver's full in-memory state: the entity store, the key index,
/// and the union-find forest over entity ids. Owned by exactly one caller
/// at a time (see the concurrency discipline around `AppState` in `http.rs`)
/// — nothing outside this module holds a reference into the three maps
/// across a `Resolve` call.
#[derive(Debug, Default)]
pub struct ResolverState {
    pub(crate) entities: HashMap<String, Entity>,
    pub(crate) index: KeyIndex,
    pub(crate) dsu: Dsu,
}

/// `GetEntity`'s response shape: attrs rendered as sorted lists so JSON
/// output is deterministic regardless of the underlying set's iteration
/// order.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntityView {
    pub id: String,
    pub record_ids: Vec<String>,
    pub attrs: HashMap<String, Vec<String>>,
}

/// `Stats`'s response shape.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsView {
    pub entities: usize,
    pub indexed_keys: usize,
}

impl From<&Entity> for EntityView {
    fn from(ent: &Entity) -> Self {
        let mut record_ids: Vec<String> = ent.record_ids.iter().cloned().collect();
        record_ids.sort();
        let mut attrs: HashMap<String, Vec<String>> = HashMap::with_capacity(ent.attrs.len());
        for (name, values) in &ent.attrs {
            let mut sorted: Vec<String> = values.iter().cloned().collect();
            sorted.sort();
            attrs.insert(name.clone(), sorted);
        }
        EntityView { id: ent.id.clone(), record_ids, attrs }
    }
}

impl ResolverState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves `id` to its current root through the union-find forest.
    /// Accepts ids that have been fused away (historical ids), since they
    /// remain in the forest as redirects. Returns `None` if `id` was never
    /// observed by the forest at all.
    fn resolve_to_root(&mut self, id: &str) -> Option<String> {
        if self.dsu.contains(id) {
            Some(self.dsu.find_root(id))
        } else {
            None
        }
    }

    /// `GetEntity(id)` (§6): accepts both current root ids and historical
    /// (pre-merge) ids, resolving through the forest first.
    pub fn get_entity(&mut self, id: &str) -> Result<EntityView> {
        let root = self
            .resolve_to_root(id)
            .ok_or_else(|| ResolverError::NotFound(id.to_string()))?;
        match self.entities.get(&root) {
            Some(ent) => Ok(EntityView::from(ent)),
            None => internal_invariant!("root {root} has no entity store entry"),
        }
    }

    /// `Stats()` (§6).
    pub fn stats(&self) -> StatsView {
        StatsView {
            entities: self.entities.len(),
            indexed_keys: self.index.len(),
        }
    }
}
