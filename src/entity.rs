use std::collections::{HashMap, HashSet};

use rand::Rng;

use crate::normalize::normalize;
use crate::record::Individual;

/// A resolved group: the fused record-ids and per-attribute value sets for
/// one real-world entity. Only roots of the union-find forest have a live
/// `Entity`; a fused-away id survives solely as a forest redirect.
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: String,
    pub record_ids: HashSet<String>,
    pub attrs: HashMap<String, HashSet<String>>,
}

/// Allocates a fresh, globally-unique entity id: 128 bits of randomness
/// rendered as 32 lowercase hex characters. Collision probability is
/// negligible at any realistic entity count and is not guarded against,
/// matching the source's `uuid4().hex` allocation.
pub fn new_entity_id() -> String {
    let bits: u128 = rand::thread_rng().r#gen();
    format!("{bits:032x}")
}

impl Entity {
    /// Seeds a brand-new entity from a record that matched no existing key.
    pub fn new(rec: &Individual) -> Self {
        let mut ent = Entity {
            id: new_entity_id(),
            record_ids: HashSet::new(),
            attrs: HashMap::new(),
        };
        ent.append(rec);
        ent
    }

    /// Attaches a record to an already-live entity: the record's id joins
    /// the member set, and each non-absent normalized attribute value joins
    /// its per-attribute set (sets absorb duplicates, so re-appending the
    /// same record is a no-op beyond the first time).
    pub fn append(&mut self, rec: &Individual) {
        self.record_ids.insert(rec.id.clone());
        for (name, raw) in rec.attrs() {
            if let Some(token) = normalize(raw) {
                self.attrs.entry(name.to_string()).or_default().insert(token);
            }
        }
    }

    /// Merges `other` into `self`: record-ids union, and each attribute's
    /// value-set unions into the corresponding set here (creating it if
    /// `self` didn't have that attribute yet). `other` is consumed — its
    /// store entry must be removed by the caller.
    pub fn fuse(&mut self, other: Entity) {
        self.record_ids.extend(other.record_ids);
        for (name, values) in other.attrs {
            self.attrs.entry(name).or_default().extend(values);
        }
    }
}
