//! Shared helpers: a scripted in-process transport and result-set builders.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use vocab_core::errors::TransportError;
use vocab_core::models::{ConceptSchemeHandle, ProviderMetadata};
use vocab_sparql::transport::{Bindings, Head, RdfTerm, SelectResults, SparqlTransport};
use vocab_sparql::SparqlProvider;

pub const ENDPOINT: &str = "http://localhost:8890/sparql";
pub const GRAPH: &str = "http://id.trees.org/graph";
pub const SCHEME: &str = "http://id.trees.org/scheme";
pub const SKOS: &str = "http://www.w3.org/2004/02/skos/core#";

pub fn uri(id: &str) -> String {
    format!("http://id.trees.org/{id}")
}

/// Answers queries from a queue and records what it was asked.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<SelectResults, TransportError>>>,
    queries: Mutex<Vec<(String, String)>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push(&self, results: SelectResults) -> &Self {
        self.responses.lock().unwrap().push_back(Ok(results));
        self
    }

    pub fn push_err(&self, err: TransportError) -> &Self {
        self.responses.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().iter().map(|(q, _)| q.clone()).collect()
    }

    pub fn graphs(&self) -> Vec<String> {
        self.queries.lock().unwrap().iter().map(|(_, g)| g.clone()).collect()
    }

    pub fn remaining(&self) -> usize {
        self.responses.lock().unwrap().len()
    }
}

impl SparqlTransport for ScriptedTransport {
    fn select(&self, query: &str, graph: &str) -> Result<SelectResults, TransportError> {
        self.queries
            .lock()
            .unwrap()
            .push((query.to_string(), graph.to_string()));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted response for query:\n{query}"))
    }
}

pub fn handle() -> ConceptSchemeHandle {
    ConceptSchemeHandle::new(ENDPOINT, GRAPH).with_scheme(SCHEME)
}

pub fn metadata() -> ProviderMetadata {
    let mut metadata = ProviderMetadata::new("TREES", "en");
    metadata.concept_scheme = Some(SCHEME.to_string());
    metadata
}

pub fn provider(transport: &Arc<ScriptedTransport>) -> SparqlProvider {
    SparqlProvider::new(handle(), metadata(), Box::new(Arc::clone(transport))).unwrap()
}

fn results(vars: &[&str], bindings: Vec<HashMap<String, RdfTerm>>) -> SelectResults {
    SelectResults {
        head: Head {
            vars: vars.iter().map(|v| v.to_string()).collect(),
        },
        results: Bindings { bindings },
    }
}

/// A node for [`node_results`]: id, kind (`"Concept"` / `"Collection"`), pref labels.
pub struct N<'a>(pub &'a str, pub &'a str, pub &'a [(&'a str, &'a str)]);

/// Node-query rows: one row per pref label, or one bare row for an unlabelled node.
pub fn node_results(nodes: &[N<'_>]) -> SelectResults {
    let mut bindings = Vec::new();
    for N(id, kind, labels) in nodes {
        let base = HashMap::from([
            ("uri".to_string(), RdfTerm::uri(uri(id))),
            ("type".to_string(), RdfTerm::uri(format!("{SKOS}{kind}"))),
            ("id".to_string(), RdfTerm::literal(*id, None)),
        ]);
        if labels.is_empty() {
            bindings.push(base);
            continue;
        }
        for (lang, text) in labels.iter() {
            let mut row = base.clone();
            row.insert("labelKind".into(), RdfTerm::literal("pref", None));
            let lang = (!lang.is_empty()).then_some(*lang);
            row.insert("label".into(), RdfTerm::literal(*text, lang));
            bindings.push(row);
        }
    }
    results(&["uri", "type", "id", "labelKind", "label"], bindings)
}

/// Same as [`node_results`] plus sort-label rows: (id, lang, sort label).
pub fn with_sort_labels(mut base: SelectResults, sort_labels: &[(&str, &str, &str)]) -> SelectResults {
    for (id, lang, text) in sort_labels {
        let kind = base
            .results
            .bindings
            .iter()
            .find(|b| b["uri"].value == uri(id))
            .map(|b| b["type"].clone())
            .expect("sort label for an unknown node");
        base.results.bindings.push(HashMap::from([
            ("uri".to_string(), RdfTerm::uri(uri(id))),
            ("type".to_string(), kind),
            ("id".to_string(), RdfTerm::literal(*id, None)),
            ("labelKind".to_string(), RdfTerm::literal("sort", None)),
            ("label".to_string(), RdfTerm::literal(*text, Some(*lang))),
        ]));
    }
    base
}

/// An edge for [`edge_results`]: relation, target id, target kind if typed.
pub struct E<'a>(pub &'a str, pub &'a str, pub Option<&'a str>);

pub fn edge_results(source: &str, edges: &[E<'_>]) -> SelectResults {
    let bindings = edges
        .iter()
        .map(|E(rel, target, kind)| {
            let mut row = HashMap::from([
                ("source".to_string(), RdfTerm::uri(uri(source))),
                ("rel".to_string(), RdfTerm::literal(*rel, None)),
                ("target".to_string(), RdfTerm::uri(uri(target))),
                ("targetId".to_string(), RdfTerm::literal(*target, None)),
            ]);
            if let Some(kind) = kind {
                row.insert("targetType".into(), RdfTerm::uri(format!("{SKOS}{kind}")));
            }
            row
        })
        .collect();
    results(&["source", "rel", "target", "targetId", "targetType"], bindings)
}

pub fn empty_nodes() -> SelectResults {
    node_results(&[])
}

pub fn empty_edges() -> SelectResults {
    edge_results("none", &[])
}
