use std::collections::HashMap;

use crate::internal_invariant;

/// Union-find forest over entity ids. Every live entity id is a key; a root
/// satisfies `parent[id] == id`. Non-root ids remain as redirects pointing
/// (possibly transitively) at the id that absorbed them.
#[derive(Debug, Default)]
pub struct Dsu {
    parent: HashMap<String, String>,
}

impl Dsu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a fresh singleton set. Idempotent.
    pub fn make_set(&mut self, id: &str) {
        self.parent.entry(id.to_string()).or_insert_with(|| id.to_string());
    }

    pub fn contains(&self, id: &str) -> bool {
        self.parent.contains_key(id)
    }

    /// Walks parent pointers to the root, applying one-step path-compression
    /// (halving) as it goes. Calling with an id never observed by this
    /// forest is an internal invariant violation, not a recoverable error.
    pub fn find_root(&mut self, id: &str) -> String {
        let mut cur = match self.parent.get(id) {
            Some(p) => p.clone(),
            None => internal_invariant!("find_root on unknown id {id}"),
        };
        if cur == id {
            return cur;
        }
        loop {
            let grandparent = match self.parent.get(&cur) {
                Some(p) => p.clone(),
                None => internal_invariant!("dangling parent pointer at {cur}"),
            };
            if grandparent == cur {
                break;
            }
            // Path-halving: point `id`'s chain one link closer to the root as we walk.
            self.parent.insert(id.to_string(), grandparent.clone());
            cur = grandparent;
        }
        cur
    }

    /// Resolves both ids to roots and, unless they already agree, points the
    /// root of `b` at the root of `a`. Survivor selection is the driver's
    /// responsibility — `a` always becomes (or stays) the surviving root.
    pub fn union(&mut self, a: &str, b: &str) {
        let ra = self.find_root(a);
        let rb = self.find_root(b);
        if ra == rb {
            return;
        }
        self.parent.insert(rb, ra);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn make_set_is_idempotent_and_self_rooted() {
        let mut dsu = Dsu::new();
        dsu.make_set("a");
        dsu.make_set("a");
        assert_eq!(dsu.find_root("a"), "a");
    }

    #[test]
    fn union_points_b_at_a() {
        let mut dsu = Dsu::new();
        dsu.make_set("a");
        dsu.make_set("b");
        dsu.union("a", "b");
        assert_eq!(dsu.find_root("b"), "a");
        assert_eq!(dsu.find_root("a"), "a");
    }

    #[test]
    fn union_is_noop_when_already_same_root() {
        let mut dsu = Dsu::new();
        dsu.make_set("a");
        dsu.make_set("b");
        dsu.union("a", "b");
        dsu.union("a", "b");
        assert_eq!(dsu.find_root("b"), "a");
    }

    #[test]
    fn find_root_compresses_chains() {
        let mut dsu = Dsu::new();
        dsu.make_set("a");
        dsu.make_set("b");
        dsu.make_set("c");
        dsu.union("a", "b");
        dsu.union("a", "c");
        assert_eq!(dsu.find_root("b"), "a");
        assert_eq!(dsu.find_root("c"), "a");
    }

    #[test]
    #[should_panic(expected = "internal invariant violated")]
    fn find_root_on_unknown_id_panics() {
        let mut dsu = Dsu::new();
        dsu.find_root("ghost");
    }
}
