//! [`VocabularyProvider`] over an [`IndexedGraph`].

use std::collections::HashSet;
use std::convert::Infallible;
use std::path::Path;

use petgraph::stable_graph::NodeIndex;

use vocab_core::constants::DEFAULT_LANGUAGE;
use vocab_core::errors::{ConfigError, QueryError, VocabResult};
use vocab_core::models::{
    normalize_language_tag, CollectionFilter, Depth, FindQuery, ListOptions, Node, NodeKind,
    ProviderMetadata, ResultRecord,
};
use vocab_core::normalize::{project_records, project_records_where, transitive_closure};
use vocab_core::{provider_span, VocabularyProvider};

use crate::document::VocabularyDocument;
use crate::graph::{EdgeKind, IndexedGraph};

/// Serves one concept scheme from memory. Immutable after construction.
#[derive(Debug)]
pub struct MemoryProvider {
    metadata: ProviderMetadata,
    graph: IndexedGraph,
    top_concepts: Vec<NodeIndex>,
}

impl MemoryProvider {
    /// Build the graph from a document.
    ///
    /// Duplicate ids or URIs are rejected. Relations naming an unknown id are
    /// skipped with a warning.
    pub fn from_document(doc: VocabularyDocument) -> VocabResult<Self> {
        let default_language = match &doc.default_language {
            Some(lang) => normalize_language_tag(lang).map_err(|_| ConfigError::ValidationFailed {
                field: "default_language".to_string(),
                message: format!("'{lang}' is not a language tag"),
            })?,
            None => DEFAULT_LANGUAGE.to_string(),
        };
        let metadata = ProviderMetadata {
            id: doc.id.clone(),
            default_language,
            concept_scheme: doc.concept_scheme.clone(),
        };

        let mut graph = IndexedGraph::new();
        let mut indices = Vec::with_capacity(doc.nodes.len());
        let mut top_concepts = Vec::new();

        for entry in &doc.nodes {
            let mut node = Node::new(entry.id.clone(), entry.uri.clone(), entry.kind);
            for label in &entry.labels {
                node.add_label(&label.language, label.text.clone());
            }
            for label in &entry.sort_labels {
                node.add_sort_label(&label.language, label.text.clone());
            }
            node.alt_labels = entry.alt_labels.clone();

            let idx = graph.insert(node).ok_or_else(|| ConfigError::ValidationFailed {
                field: "nodes".to_string(),
                message: format!("duplicate id or uri: {} <{}>", entry.id, entry.uri),
            })?;
            if entry.top_concept && entry.kind == NodeKind::Concept {
                top_concepts.push(idx);
            }
            indices.push(idx);
        }

        for (entry, &idx) in doc.nodes.iter().zip(&indices) {
            let mut link = |target: &str, kind: EdgeKind, downward_from_self: bool| {
                let Some(other) = graph.by_id(target) else {
                    tracing::warn!(
                        vocabulary = %doc.id,
                        from = %entry.id,
                        to = target,
                        "relation to unknown id skipped"
                    );
                    return;
                };
                if downward_from_self {
                    graph.link(idx, other, kind);
                } else {
                    graph.link(other, idx, kind);
                }
            };
            for id in &entry.narrower {
                link(id, EdgeKind::Narrower, true);
            }
            for id in &entry.broader {
                link(id, EdgeKind::Narrower, false);
            }
            for id in &entry.members {
                link(id, EdgeKind::Member, true);
            }
            for id in &entry.related {
                link(id, EdgeKind::Related, true);
            }
        }

        tracing::info!(
            vocabulary = %metadata.id,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "memory provider loaded"
        );

        Ok(Self {
            metadata,
            graph,
            top_concepts,
        })
    }

    pub fn from_json(json: &str) -> VocabResult<Self> {
        Self::from_document(VocabularyDocument::from_json(json)?)
    }

    pub fn from_file(path: &Path) -> VocabResult<Self> {
        Self::from_document(VocabularyDocument::from_file(path)?)
    }

    pub fn graph(&self) -> &IndexedGraph {
        &self.graph
    }

    fn records<'a>(
        &'a self,
        indices: impl IntoIterator<Item = NodeIndex>,
        options: &ListOptions,
    ) -> Vec<ResultRecord> {
        let nodes: Vec<&'a Node> = indices
            .into_iter()
            .filter_map(|idx| self.graph.node(idx))
            .collect();
        project_records(nodes, options, &self.metadata.default_language)
    }

    /// Everything reachable downward from `start`, `start` first.
    fn descendants(&self, start: NodeIndex) -> Vec<NodeIndex> {
        let walk = transitive_closure([start], |frontier: &[NodeIndex]| {
            Ok::<_, Infallible>(
                frontier
                    .iter()
                    .flat_map(|&idx| self.graph.children(idx))
                    .collect(),
            )
        });
        match walk {
            Ok(order) => order,
            Err(never) => match never {},
        }
    }

    /// Concepts below `start`, never a collection.
    fn expansion(&self, start: NodeIndex) -> Vec<NodeIndex> {
        self.descendants(start)
            .into_iter()
            .filter(|&idx| self.graph.node(idx).is_some_and(Node::is_concept))
            .collect()
    }

    fn collection_candidates(&self, filter: &CollectionFilter) -> VocabResult<Vec<NodeIndex>> {
        let collection = self
            .graph
            .by_id(&filter.id)
            .filter(|&idx| self.graph.node(idx).is_some_and(Node::is_collection))
            .ok_or_else(|| QueryError::UnknownCollection {
                id: filter.id.clone(),
            })?;

        let mut seen = HashSet::new();
        let mut candidates = Vec::new();
        let members = self
            .graph
            .neighbors(collection, EdgeKind::Member, petgraph::Direction::Outgoing);
        let expansion = match filter.depth {
            Depth::Members => Vec::new(),
            Depth::All => self.expansion(collection),
        };
        for idx in members.into_iter().chain(expansion) {
            if seen.insert(idx) {
                candidates.push(idx);
            }
        }
        Ok(candidates)
    }
}

impl VocabularyProvider for MemoryProvider {
    fn metadata(&self) -> &ProviderMetadata {
        &self.metadata
    }

    fn get_by_id(&self, id: &str) -> VocabResult<Option<Node>> {
        let _span = provider_span!("get_by_id", self.metadata.id).entered();
        Ok(self.graph.by_id(id).and_then(|idx| self.graph.detail(idx)))
    }

    fn get_by_uri(&self, uri: &str) -> VocabResult<Option<Node>> {
        let _span = provider_span!("get_by_uri", self.metadata.id).entered();
        Ok(self.graph.by_uri(uri).and_then(|idx| self.graph.detail(idx)))
    }

    fn get_all(&self, options: &ListOptions) -> VocabResult<Vec<ResultRecord>> {
        let _span = provider_span!("get_all", self.metadata.id).entered();
        let options = options.validated()?;
        Ok(self.records(self.graph.nodes().map(|(idx, _)| idx), &options))
    }

    fn get_top_concepts(&self, options: &ListOptions) -> VocabResult<Vec<ResultRecord>> {
        let _span = provider_span!("get_top_concepts", self.metadata.id).entered();
        let options = options.validated()?;
        Ok(self.records(self.top_concepts.iter().copied(), &options))
    }

    fn find(&self, query: &FindQuery, options: &ListOptions) -> VocabResult<Vec<ResultRecord>> {
        let _span = provider_span!("find", self.metadata.id).entered();
        let options = options.validated()?;

        let candidates: Vec<NodeIndex> = match &query.collection {
            Some(filter) => self.collection_candidates(filter)?,
            None => self.graph.nodes().map(|(idx, _)| idx).collect(),
        };
        let nodes = candidates.into_iter().filter_map(|idx| self.graph.node(idx));

        let type_filter = query.type_filter();
        Ok(project_records_where(
            nodes,
            &options,
            &self.metadata.default_language,
            |node, record| type_filter.matches(node.kind) && query.label_matches(&record.label),
        ))
    }

    fn expand(&self, id: &str) -> VocabResult<Option<Vec<String>>> {
        let _span = provider_span!("expand", self.metadata.id).entered();
        let Some(start) = self.graph.by_id(id) else {
            return Ok(None);
        };
        let ids = self
            .expansion(start)
            .into_iter()
            .filter_map(|idx| self.graph.node(idx).map(|node| node.id.clone()))
            .collect();
        Ok(Some(ids))
    }

    fn get_top_display(&self, options: &ListOptions) -> VocabResult<Vec<ResultRecord>> {
        let _span = provider_span!("get_top_display", self.metadata.id).entered();
        let options = options.validated()?;
        let roots = self.graph.nodes().map(|(idx, _)| idx).filter(|&idx| {
            !self.graph.has_incoming(idx, EdgeKind::Narrower)
                && !self.graph.has_incoming(idx, EdgeKind::Member)
        });
        Ok(self.records(roots, &options))
    }

    fn get_children_display(
        &self,
        id: &str,
        options: &ListOptions,
    ) -> VocabResult<Option<Vec<ResultRecord>>> {
        let _span = provider_span!("get_children_display", self.metadata.id).entered();
        let options = options.validated()?;
        let Some(parent) = self.graph.by_id(id) else {
            return Ok(None);
        };
        Ok(Some(self.records(self.graph.children(parent), &options)))
    }
}
