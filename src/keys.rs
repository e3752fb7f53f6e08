use std::collections::HashMap;

use crate::config::KeyPattern;
use crate::entity::Entity;
use crate::normalize::normalize;
use crate::record::Individual;

/// U+00AC NOT SIGN — separates normalized attribute values within one
/// blocking key-value. Attribute values must not themselves contain this
/// code point (rejected at the HTTP boundary).
pub const VALUE_SEPARATOR: char = '\u{00AC}';

fn key_name(pattern: &KeyPattern) -> String {
    pattern.join("_")
}

/// For each pattern, collects the normalized values of its attributes in
/// pattern order; a pattern is skipped entirely if any of its attributes is
/// absent. A record yields at most one key-value per pattern.
pub fn keys_for_record(rec: &Individual, patterns: &[KeyPattern]) -> HashMap<String, String> {
    let mut out = HashMap::new();
    for pattern in patterns {
        let mut values = Vec::with_capacity(pattern.len());
        let mut complete = true;
        for attr in pattern {
            match normalize(rec.attr(attr)) {
                Some(v) => values.push(v),
                None => {
                    complete = false;
                    break;
                }
            }
        }
        if complete {
            out.insert(key_name(pattern), values.join(&VALUE_SEPARATOR.to_string()));
        }
    }
    out
}

/// For each pattern whose every attribute has at least one value in the
/// entity, enumerates the Cartesian product of the per-attribute value sets
/// and emits one `(key_name, key_value)` pair per tuple. An entity with
/// fused alternatives can therefore emit several key-values per pattern,
/// each a potential bridge to another entity — callers must see every
/// distinct tuple, not just one per key-name.
pub fn keys_for_entity(ent: &Entity, patterns: &[KeyPattern]) -> Vec<(String, String)> {
    let mut out = Vec::new();
    for pattern in patterns {
        let value_sets: Option<Vec<Vec<&str>>> = pattern
            .iter()
            .map(|attr| {
                ent.attrs
                    .get(*attr)
                    .filter(|set| !set.is_empty())
                    .map(|set| set.iter().map(String::as_str).collect())
            })
            .collect();
        let Some(value_sets) = value_sets else { continue };

        let name = key_name(pattern);
        let mut tuples: Vec<Vec<&str>> = vec![Vec::new()];
        for values in &value_sets {
            let mut next = Vec::with_capacity(tuples.len() * values.len());
            for prefix in &tuples {
                for v in values {
                    let mut combo = prefix.clone();
                    combo.push(v);
                    next.push(combo);
                }
            }
            tuples = next;
        }
        for combo in tuples {
            out.push((name.clone(), combo.join(&VALUE_SEPARATOR.to_string())));
        }
    }
    out
}
