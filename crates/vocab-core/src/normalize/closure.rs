//! Cycle-safe transitive closure.

use std::collections::HashSet;
use std::hash::Hash;

/// Breadth-first closure from `seeds`.
///
/// `children_of` receives a whole frontier at once so a store-backed caller
/// can answer each level with one query. Every key is emitted once, in
/// discovery order, seeds first. A key that was already visited is ignored,
/// so cyclic input terminates after each reachable key has been expanded
/// exactly once.
pub fn transitive_closure<K, E, F>(
    seeds: impl IntoIterator<Item = K>,
    mut children_of: F,
) -> Result<Vec<K>, E>
where
    K: Clone + Eq + Hash,
    F: FnMut(&[K]) -> Result<Vec<K>, E>,
{
    let mut visited: HashSet<K> = HashSet::new();
    let mut order = Vec::new();
    let mut frontier = Vec::new();

    for seed in seeds {
        if visited.insert(seed.clone()) {
            order.push(seed.clone());
            frontier.push(seed);
        }
    }

    let mut depth = 0usize;
    while !frontier.is_empty() {
        let children = children_of(&frontier)?;
        let mut next = Vec::new();
        for child in children {
            if visited.insert(child.clone()) {
                order.push(child.clone());
                next.push(child);
            }
        }
        depth += 1;
        tracing::trace!(depth, discovered = next.len(), total = order.len(), "closure level");
        frontier = next;
    }

    Ok(order)
}
