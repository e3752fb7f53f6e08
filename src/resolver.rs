use std::collections::HashSet;

use crate::config::ResolutionConfiguration;
use crate::entity::Entity;
use crate::error::Result;
use crate::internal_invariant;
use crate::keys::{keys_for_entity, keys_for_record};
use crate::record::Individual;
use crate::state::ResolverState;

/// Unions `other` into `root` and fuses `other`'s entity data into `root`'s,
/// removing `other`'s store entry. `other` must be a live root distinct
/// from `root` when this is called.
fn merge_into(state: &mut ResolverState, root: &str, other: &str) {
    state.dsu.union(root, other);
    let other_ent = match state.entities.remove(other) {
        Some(ent) => ent,
        None => internal_invariant!("candidate root {other} missing from entity store"),
    };
    match state.entities.get_mut(root) {
        Some(ent) => ent.fuse(other_ent),
        None => internal_invariant!("surviving root {root} missing from entity store"),
    }
}

/// The single entry point into the core: resolves one record against all
/// previously seen records and returns the (possibly newly-created) entity
/// id it now belongs to. See §4.6 for the step-by-step contract.
pub fn resolve(
    cfg: &ResolutionConfiguration,
    state: &mut ResolverState,
    rec: &Individual,
) -> Result<String> {
    let record_keys = keys_for_record(rec, &cfg.keys);

    let mut roots: HashSet<String> = HashSet::new();
    for value in record_keys.values() {
        if let Some(id) = state.index.get(value) {
            let id = id.to_string();
            roots.insert(state.dsu.find_root(&id));
        }
    }

    if roots.is_empty() {
        let ent = Entity::new(rec);
        let ent_id = ent.id.clone();
        state.dsu.make_set(&ent_id);
        state.entities.insert(ent_id.clone(), ent);
        for value in record_keys.into_values() {
            state.index.put_if_absent(value, ent_id.clone());
        }
        log::debug!("resolve: record {} unmatched, created entity {ent_id}", rec.id);
        return Ok(ent_id);
    }

    let mut candidates: Vec<String> = roots.into_iter().collect();
    candidates.sort();
    let root = candidates[0].clone();
    let merged_on_entry = candidates.len() - 1;

    for other in &candidates[1..] {
        merge_into(state, &root, other);
    }

    match state.entities.get_mut(&root) {
        Some(ent) => ent.append(rec),
        None => internal_invariant!("root {root} missing from entity store after merge"),
    }

    // Transitive closure: each iteration either merges at least one more
    // root in or terminates, so this loop is bounded by the number of live
    // entities.
    let mut transitive_merges = 0usize;
    loop {
        let composite = {
            let ent = state
                .entities
                .get(&root)
                .unwrap_or_else(|| internal_invariant!("root {root} missing while building composite keys"));
            keys_for_entity(ent, &cfg.keys)
        };

        let mut more: HashSet<String> = HashSet::new();
        for (_, value) in &composite {
            if let Some(id) = state.index.get(value) {
                let id = id.to_string();
                let candidate_root = state.dsu.find_root(&id);
                if candidate_root != root {
                    more.insert(candidate_root);
                }
            }
        }

        if more.is_empty() {
            break;
        }

        let mut more_sorted: Vec<String> = more.into_iter().collect();
        more_sorted.sort();
        transitive_merges += more_sorted.len();
        for other in &more_sorted {
            merge_into(state, &root, other);
        }
    }

    let composite = {
        let ent = state
            .entities
            .get(&root)
            .unwrap_or_else(|| internal_invariant!("root {root} missing before final indexing"));
        keys_for_entity(ent, &cfg.keys)
    };
    for (_, value) in composite {
        state.index.put_if_absent(value, root.clone());
    }

    log::debug!(
        "resolve: record {} attached to entity {root} ({merged_on_entry} direct merges, {transitive_merges} transitive)",
        rec.id
    );
    Ok(root)
}
