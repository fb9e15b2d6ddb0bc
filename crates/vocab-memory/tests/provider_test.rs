//! Memory provider operations over the trees vocabulary.

use std::io::Write;

use vocab_core::errors::{ConfigError, QueryError, VocabError};
use vocab_core::models::{
    Depth, FindQuery, ListOptions, NodeKind, SortKey, SortOrder, TypeFilter,
};
use vocab_core::{ResultRecord, VocabularyProvider};
use vocab_memory::MemoryProvider;

use test_fixtures::load_fixture_text;

fn trees() -> MemoryProvider {
    MemoryProvider::from_json(&load_fixture_text("vocabularies/trees.json")).unwrap()
}

fn ids(records: &[ResultRecord]) -> Vec<&str> {
    records.iter().map(|r| r.id.as_str()).collect()
}

// --- Construction ---

#[test]
fn metadata_comes_from_the_document() {
    let p = trees();
    assert_eq!(p.vocabulary_id(), "TREES");
    assert_eq!(p.metadata().default_language, "en");
    assert_eq!(
        p.metadata().concept_scheme.as_deref(),
        Some("http://id.trees.org/scheme")
    );
    assert_eq!(p.graph().node_count(), 11);
}

#[test]
fn relations_declared_from_both_ends_are_stored_once() {
    let p = trees();
    // 1→4 and 4→5 are declared as narrower on one side and broader on the other.
    // Edges: 1→4, 4→5, 1~2, 3∋1, 3∋2, 7∋4, 7∋8, 8∋9, alpha→beta, beta→alpha.
    assert_eq!(p.graph().edge_count(), 10);
}

#[test]
fn duplicate_ids_are_rejected() {
    let json = r#"{
        "id": "DUP",
        "nodes": [
            { "id": 1, "uri": "http://x/1", "type": "concept" },
            { "id": "1", "uri": "http://x/other", "type": "concept" }
        ]
    }"#;
    let err = MemoryProvider::from_json(json).unwrap_err();
    assert!(matches!(
        err,
        VocabError::Config(ConfigError::ValidationFailed { ref field, .. }) if field == "nodes"
    ));
}

#[test]
fn invalid_default_language_is_rejected() {
    let json = r#"{ "id": "BAD", "default_language": "not a tag", "nodes": [] }"#;
    assert!(matches!(
        MemoryProvider::from_json(json),
        Err(VocabError::Config(ConfigError::ValidationFailed { .. }))
    ));
}

#[test]
fn missing_default_language_falls_back_to_english() {
    let p = MemoryProvider::from_json(r#"{ "id": "EMPTY" }"#).unwrap();
    assert_eq!(p.metadata().default_language, "en");
    assert!(p.get_all(&ListOptions::default()).unwrap().is_empty());
}

#[test]
fn dangling_relations_are_skipped() {
    let json = r#"{
        "id": "DANGLING",
        "nodes": [
            { "id": 1, "uri": "http://x/1", "type": "concept",
              "labels": [{ "text": "One", "language": "en" }],
              "narrower": [2, 99] },
            { "id": 2, "uri": "http://x/2", "type": "concept",
              "labels": [{ "text": "Two", "language": "en" }] }
        ]
    }"#;
    let p = MemoryProvider::from_json(json).unwrap();
    assert_eq!(p.graph().edge_count(), 1);
    assert_eq!(p.expand("1").unwrap(), Some(vec!["1".to_string(), "2".to_string()]));
}

#[test]
fn malformed_json_is_a_serialization_error() {
    assert!(matches!(
        MemoryProvider::from_json("{ not json"),
        Err(VocabError::Serialization(_))
    ));
}

#[test]
fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(load_fixture_text("vocabularies/trees.json").as_bytes())
        .unwrap();
    let p = MemoryProvider::from_file(file.path()).unwrap();
    assert_eq!(p.vocabulary_id(), "TREES");
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = MemoryProvider::from_file(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, VocabError::Config(ConfigError::FileNotFound { .. })));
}

#[test]
fn unreadable_file_is_not_reported_as_missing() {
    let dir = tempfile::tempdir().unwrap();
    let err = MemoryProvider::from_file(dir.path()).unwrap_err();
    assert!(matches!(
        err,
        VocabError::Config(ConfigError::ReadFailed { ref message, .. }) if !message.is_empty()
    ));
}

// --- Lookups ---

#[test]
fn get_by_id_fills_relations() {
    let p = trees();
    let larch = p.get_by_id("1").unwrap().unwrap();
    assert_eq!(larch.uri, "http://id.trees.org/1");
    assert_eq!(larch.kind, NodeKind::Concept);
    assert_eq!(larch.labels.get("nl").map(String::as_str), Some("De Lariks"));
    assert_eq!(larch.sort_labels.get("en").map(String::as_str), Some("Larch"));
    assert_eq!(larch.alt_labels.len(), 1);
    assert!(larch.broader.is_empty());
    assert_eq!(larch.narrower, vec!["4"]);
    assert_eq!(larch.related, vec!["2"]);
    assert_eq!(larch.member_of, vec!["3"]);

    let chestnut = p.get_by_id("2").unwrap().unwrap();
    assert_eq!(chestnut.related, vec!["1"]);
}

#[test]
fn get_by_id_of_a_collection_lists_members() {
    let p = trees();
    let conifers = p.get_by_id("7").unwrap().unwrap();
    assert_eq!(conifers.kind, NodeKind::Collection);
    assert_eq!(conifers.members, vec!["4", "8"]);

    let european = p.get_by_id("4").unwrap().unwrap();
    assert_eq!(european.broader, vec!["1"]);
    assert_eq!(european.member_of, vec!["7"]);
}

#[test]
fn lookups_that_miss_return_none() {
    let p = trees();
    assert!(p.get_by_id("999").unwrap().is_none());
    assert!(p.get_by_uri("http://id.trees.org/999").unwrap().is_none());
}

#[test]
fn ids_compare_type_agnostically() {
    let p = trees();
    assert_eq!(p.get_by_id("01").unwrap().unwrap().id, "1");
    assert_eq!(p.get_by_id(" 4 ").unwrap().unwrap().id, "4");
}

#[test]
fn get_by_uri_finds_the_node() {
    let p = trees();
    let node = p.get_by_uri("http://id.trees.org/alpha").unwrap().unwrap();
    assert_eq!(node.id, "alpha");
    assert_eq!(node.narrower, vec!["beta"]);
    assert_eq!(node.broader, vec!["beta"]);
}

// --- Listings ---

#[test]
fn get_all_skips_nodes_without_a_usable_label() {
    let p = trees();
    let all = p.get_all(&ListOptions::default()).unwrap();
    assert_eq!(
        ids(&all),
        vec!["1", "2", "3", "4", "5", "7", "8", "9", "alpha", "beta"]
    );

    let french = p.get_all(&ListOptions::new().language("fr")).unwrap();
    assert!(ids(&french).contains(&"6"));
}

#[test]
fn untagged_labels_do_not_count_as_a_fallback() {
    let json = r#"{
        "id": "CHURCHES",
        "nodes": [
            { "id": 1, "uri": "http://x/1", "type": "concept",
              "labels": [{ "text": "Eglise", "language": "fr" }, { "text": "Kerk" }] },
            { "id": 2, "uri": "http://x/2", "type": "concept",
              "labels": [{ "text": "Chapel", "language": "en" }] }
        ]
    }"#;
    let p = MemoryProvider::from_json(json).unwrap();
    let dutch = p.get_all(&ListOptions::new().language("nl")).unwrap();
    assert_eq!(ids(&dutch), vec!["2"]);

    let french = p.get_all(&ListOptions::new().language("fr")).unwrap();
    assert_eq!(french[0].label, "Eglise");
}

#[test]
fn get_all_uses_the_requested_language_with_fallback() {
    let p = trees();
    let all = p.get_all(&ListOptions::new().language("nl")).unwrap();
    let label = |id: &str| all.iter().find(|r| r.id == id).unwrap().label.clone();
    assert_eq!(label("1"), "De Lariks");
    assert_eq!(label("4"), "European Larch");
    assert_eq!(label("9"), "Grove den");
    assert!(!ids(&all).contains(&"6"));
}

#[test]
fn get_all_sorts() {
    let p = trees();
    let by_label = p
        .get_all(&ListOptions::new().sort(SortKey::Label))
        .unwrap();
    assert_eq!(by_label.first().unwrap().label, "Alpha");
    assert_eq!(by_label.last().unwrap().label, "Trees by species");

    let by_sort_label = p
        .get_top_concepts(&ListOptions::new().sort(SortKey::SortLabel))
        .unwrap();
    assert_eq!(ids(&by_sort_label), vec!["2", "1"]);

    let by_id_desc = p
        .get_all(&ListOptions::new().sort(SortKey::Id).order(SortOrder::Desc))
        .unwrap();
    assert_eq!(by_id_desc.first().unwrap().id, "beta");
    assert_eq!(by_id_desc.last().unwrap().id, "1");
}

#[test]
fn invalid_language_is_a_query_error() {
    let p = trees();
    let err = p
        .get_all(&ListOptions::new().language("12 34"))
        .unwrap_err();
    assert!(matches!(err, VocabError::Query(_)));
}

#[test]
fn top_concepts_are_concepts_only() {
    let p = trees();
    let top = p.get_top_concepts(&ListOptions::default()).unwrap();
    assert_eq!(ids(&top), vec!["1", "2"]);
    assert!(top.iter().all(|r| r.kind == NodeKind::Concept));
}

#[test]
fn top_display_lists_unparented_nodes() {
    let p = trees();
    let top = p.get_top_display(&ListOptions::default()).unwrap();
    assert_eq!(ids(&top), vec!["3", "7"]);

    let french = p.get_top_display(&ListOptions::new().language("fr")).unwrap();
    assert!(ids(&french).contains(&"6"));
}

#[test]
fn children_display_covers_narrower_and_members() {
    let p = trees();
    let opts = ListOptions::default();
    let larch = p.get_children_display("1", &opts).unwrap().unwrap();
    assert_eq!(ids(&larch), vec!["4"]);

    let conifers = p
        .get_children_display("7", &opts.clone().sort(SortKey::Label))
        .unwrap()
        .unwrap();
    assert_eq!(ids(&conifers), vec!["4", "8"]);

    let leaf = p.get_children_display("5", &opts).unwrap().unwrap();
    assert!(leaf.is_empty());

    assert!(p.get_children_display("999", &opts).unwrap().is_none());
}

// --- Find ---

#[test]
fn find_by_label_contains_ignoring_case() {
    let p = trees();
    let found = p
        .find(&FindQuery::new().label("larch"), &ListOptions::default())
        .unwrap();
    assert_eq!(ids(&found), vec!["1", "4", "5"]);
}

#[test]
fn find_by_label_returns_both_kinds() {
    let p = trees();
    let found = p
        .find(&FindQuery::new().label("pine"), &ListOptions::default())
        .unwrap();
    assert_eq!(ids(&found), vec!["8", "9"]);
    assert_eq!(found[0].kind, NodeKind::Collection);
    assert_eq!(found[1].kind, NodeKind::Concept);

    let all = p
        .find(
            &FindQuery::new().label("pine").kind(TypeFilter::All),
            &ListOptions::default(),
        )
        .unwrap();
    assert_eq!(ids(&all), vec!["8", "9"]);
}

#[test]
fn find_by_exact_label() {
    let p = trees();
    let found = p
        .find(
            &FindQuery::new().label("european larch").exact(),
            &ListOptions::default(),
        )
        .unwrap();
    assert_eq!(ids(&found), vec!["4"]);

    let none = p
        .find(&FindQuery::new().label("larch").exact(), &ListOptions::default())
        .unwrap();
    assert!(none.is_empty());
}

#[test]
fn find_by_label_uses_the_display_language() {
    let p = trees();
    let found = p
        .find(
            &FindQuery::new().label("lariks"),
            &ListOptions::new().language("nl"),
        )
        .unwrap();
    assert_eq!(ids(&found), vec!["1"]);
}

#[test]
fn find_by_type() {
    let p = trees();
    let collections = p
        .find(
            &FindQuery::new().kind(TypeFilter::Collection),
            &ListOptions::default(),
        )
        .unwrap();
    assert_eq!(ids(&collections), vec!["3", "7", "8"]);
}

#[test]
fn find_in_collection_members() {
    let p = trees();
    let found = p
        .find(
            &FindQuery::new().in_collection("3", Depth::Members),
            &ListOptions::default(),
        )
        .unwrap();
    assert_eq!(ids(&found), vec!["1", "2"]);
}

#[test]
fn find_in_collection_all_reaches_the_expansion() {
    let p = trees();
    let found = p
        .find(
            &FindQuery::new().in_collection("3", Depth::All),
            &ListOptions::default(),
        )
        .unwrap();
    assert_eq!(ids(&found), vec!["1", "2", "4", "5"]);

    let conifers = p
        .find(
            &FindQuery::new()
                .in_collection("7", Depth::All)
                .kind(TypeFilter::Concept),
            &ListOptions::default(),
        )
        .unwrap();
    assert_eq!(ids(&conifers), vec!["4", "5", "9"]);

    let nested = p
        .find(
            &FindQuery::new()
                .in_collection("7", Depth::Members)
                .kind(TypeFilter::Collection),
            &ListOptions::default(),
        )
        .unwrap();
    assert_eq!(ids(&nested), vec!["8"]);
}

#[test]
fn find_in_unknown_collection_fails() {
    let p = trees();
    for id in ["999", "1"] {
        let err = p
            .find(
                &FindQuery::new().in_collection(id, Depth::Members),
                &ListOptions::default(),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            VocabError::Query(QueryError::UnknownCollection { id: ref missing }) if missing == id
        ));
    }
}

// --- Expand ---

#[test]
fn expand_a_concept_includes_itself() {
    let p = trees();
    assert_eq!(
        p.expand("1").unwrap(),
        Some(vec!["1".to_string(), "4".to_string(), "5".to_string()])
    );
    assert_eq!(p.expand("5").unwrap(), Some(vec!["5".to_string()]));
}

#[test]
fn expand_a_collection_excludes_collections() {
    let p = trees();
    let mut via_3 = p.expand("3").unwrap().unwrap();
    via_3.sort();
    assert_eq!(via_3, vec!["1", "2", "4", "5"]);

    let mut via_7 = p.expand("7").unwrap().unwrap();
    via_7.sort();
    assert_eq!(via_7, vec!["4", "5", "9"]);
}

#[test]
fn expand_terminates_on_cycles() {
    let p = trees();
    let mut cycle = p.expand("alpha").unwrap().unwrap();
    cycle.sort();
    assert_eq!(cycle, vec!["alpha", "beta"]);
}

#[test]
fn expand_unknown_id_is_none() {
    assert_eq!(trees().expand("999").unwrap(), None);
}

// --- Sharing ---

#[test]
fn provider_is_shareable_across_threads() {
    let p = std::sync::Arc::new(trees());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let p = p.clone();
            std::thread::spawn(move || p.expand("3").unwrap().unwrap().len())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 4);
    }
}
