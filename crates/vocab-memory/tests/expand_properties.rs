//! Property tests: memory expansion agrees with naive reachability.

use std::collections::{BTreeSet, HashMap};

use proptest::prelude::*;
use serde_json::json;

use vocab_core::VocabularyProvider;
use vocab_memory::MemoryProvider;

/// Nodes `0..n`; every third one is a collection.
fn is_collection(i: u8) -> bool {
    i % 3 == 2
}

fn build(n: u8, edges: &[(u8, u8)]) -> MemoryProvider {
    let mut down: HashMap<u8, Vec<u8>> = HashMap::new();
    for &(from, to) in edges {
        if from < n && to < n {
            down.entry(from).or_default().push(to);
        }
    }
    let nodes: Vec<_> = (0..n)
        .map(|i| {
            let targets = down.get(&i).cloned().unwrap_or_default();
            if is_collection(i) {
                json!({
                    "id": i, "uri": format!("http://x/{i}"), "type": "collection",
                    "labels": [{ "text": format!("c{i}"), "language": "en" }],
                    "members": targets,
                })
            } else {
                json!({
                    "id": i, "uri": format!("http://x/{i}"), "type": "concept",
                    "labels": [{ "text": format!("n{i}"), "language": "en" }],
                    "narrower": targets,
                })
            }
        })
        .collect();
    let doc = json!({ "id": "PROP", "nodes": nodes });
    MemoryProvider::from_json(&doc.to_string()).unwrap()
}

fn reachable(n: u8, edges: &[(u8, u8)], seed: u8) -> BTreeSet<u8> {
    let mut set = BTreeSet::from([seed]);
    loop {
        let before = set.len();
        let next: Vec<u8> = edges
            .iter()
            .filter(|(from, to)| *from < n && *to < n && set.contains(from))
            .map(|&(_, to)| to)
            .collect();
        set.extend(next);
        if set.len() == before {
            return set;
        }
    }
}

proptest! {
    #[test]
    fn expand_matches_reachability(
        n in 1u8..16,
        edges in prop::collection::vec((0u8..16, 0u8..16), 0..40),
        seed in 0u8..16,
    ) {
        prop_assume!(seed < n);
        let provider = build(n, &edges);

        let expected: BTreeSet<String> = reachable(n, &edges, seed)
            .into_iter()
            .filter(|&i| !is_collection(i))
            .map(|i| i.to_string())
            .collect();

        let got = provider.expand(&seed.to_string()).unwrap().unwrap();
        let unique: BTreeSet<String> = got.iter().cloned().collect();
        prop_assert_eq!(unique.len(), got.len());
        prop_assert_eq!(unique, expected);
    }
}
