//! [`VocabularyProvider`] over a SPARQL endpoint.

use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use vocab_core::config::VocabConfig;
use vocab_core::constants::MAX_VALUES_PER_QUERY;
use vocab_core::errors::{QueryError, VocabResult};
use vocab_core::models::{
    CollectionFilter, ConceptSchemeHandle, Depth, FindQuery, ListOptions, Node, NodeKind,
    ProviderMetadata, ResultRecord,
};
use vocab_core::normalize::{ids_match, project_records, project_records_where, transitive_closure};
use vocab_core::{provider_span, query_span, VocabularyProvider};

use crate::query::QueryBuilder;
use crate::rows::{apply_relations, assemble_nodes, decode_edge_rows, decode_node_rows, EdgeRow};
use crate::transport::{HttpTransport, SelectResults, SparqlTransport};

/// A node reached during downward traversal.
#[derive(Debug, Clone)]
struct Reached {
    uri: String,
    id: String,
    kind: NodeKind,
}

/// Reads one concept scheme from one graph of a SPARQL store.
///
/// Every operation builds its queries with [`QueryBuilder`], runs them through
/// the owned transport, and normalizes the rows with the shared
/// `vocab_core::normalize` functions.
pub struct SparqlProvider {
    metadata: ProviderMetadata,
    handle: ConceptSchemeHandle,
    builder: QueryBuilder,
    transport: Box<dyn SparqlTransport>,
}

impl std::fmt::Debug for SparqlProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SparqlProvider")
            .field("metadata", &self.metadata)
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}

impl SparqlProvider {
    /// Provider with default predicates over an explicit transport.
    pub fn new(
        handle: ConceptSchemeHandle,
        metadata: ProviderMetadata,
        transport: Box<dyn SparqlTransport>,
    ) -> VocabResult<Self> {
        let builder = QueryBuilder::new(&handle)?;
        Ok(Self::assemble(handle, metadata, builder, transport))
    }

    /// Provider over HTTP, configured from `config`.
    pub fn from_config(config: &VocabConfig) -> VocabResult<Self> {
        let handle = config.scheme_handle()?;
        let transport = HttpTransport::new(handle.endpoint.clone(), &config.transport)?;
        Self::from_config_with_transport(config, Box::new(transport))
    }

    /// Provider configured from `config` over an explicit transport.
    pub fn from_config_with_transport(
        config: &VocabConfig,
        transport: Box<dyn SparqlTransport>,
    ) -> VocabResult<Self> {
        VocabConfig::validate(config)?;
        let handle = config.scheme_handle()?;
        let mut builder = QueryBuilder::new(&handle)?;
        if let Some(predicate) = &config.sparql.identifier_predicate {
            builder = builder.with_identifier_predicate(predicate)?;
        }
        if let Some(predicate) = &config.sparql.sort_label_predicate {
            builder = builder.with_sort_label_predicate(predicate)?;
        }
        Ok(Self::assemble(handle, config.metadata(), builder, transport))
    }

    fn assemble(
        handle: ConceptSchemeHandle,
        metadata: ProviderMetadata,
        builder: QueryBuilder,
        transport: Box<dyn SparqlTransport>,
    ) -> Self {
        tracing::info!(
            provider = %metadata.id,
            endpoint = %handle.endpoint,
            graph = %handle.graph,
            scheme = ?handle.scheme_uri,
            "sparql provider ready"
        );
        Self {
            metadata,
            handle,
            builder,
            transport,
        }
    }

    pub fn handle(&self) -> &ConceptSchemeHandle {
        &self.handle
    }

    fn execute(&self, query: &str) -> VocabResult<SelectResults> {
        let request_id = Uuid::new_v4();
        let span = query_span!(request_id);
        let _guard = span.enter();
        tracing::debug!(graph = %self.handle.graph, query_len = query.len(), "sending query");
        tracing::trace!(%query);
        let results = self.transport.select(query, &self.handle.graph)?;
        tracing::debug!(rows = results.len(), "query answered");
        Ok(results)
    }

    fn fetch_nodes(&self, query: &str) -> VocabResult<Vec<Node>> {
        let results = self.execute(query)?;
        Ok(assemble_nodes(decode_node_rows(&results)?))
    }

    fn fetch_edges(&self, query: &str) -> VocabResult<Vec<EdgeRow>> {
        let results = self.execute(query)?;
        Ok(decode_edge_rows(&results)?)
    }

    /// Node for `id` without its relations.
    fn find_node(&self, id: &str) -> VocabResult<Option<Node>> {
        let nodes = self.fetch_nodes(&self.builder.node_by_id(id))?;
        Ok(nodes.into_iter().find(|node| ids_match(&node.id, id)))
    }

    fn with_relations(&self, mut node: Node) -> VocabResult<Node> {
        let edges = self.fetch_edges(&self.builder.relations(&node.uri)?)?;
        apply_relations(&mut node, edges);
        Ok(node)
    }

    /// Breadth-first walk down narrower and member edges from `start`,
    /// one query per level and per chunk of the frontier.
    fn descendants(&self, start: &Node) -> VocabResult<Vec<Reached>> {
        let mut known: HashMap<String, (String, NodeKind)> = HashMap::new();
        known.insert(start.uri.clone(), (start.id.clone(), start.kind));

        let step = |frontier: &[String]| -> VocabResult<Vec<String>> {
            let mut children = Vec::new();
            for chunk in frontier.chunks(MAX_VALUES_PER_QUERY) {
                for edge in self.fetch_edges(&self.builder.closure_step(chunk)?)? {
                    let Some(kind) = edge.target_kind else {
                        continue;
                    };
                    known
                        .entry(edge.target.clone())
                        .or_insert_with(|| (edge.target_id.clone(), kind));
                    children.push(edge.target);
                }
            }
            Ok(children)
        };
        let order = transitive_closure([start.uri.clone()], step)?;

        Ok(order
            .into_iter()
            .filter_map(|uri| {
                let (id, kind) = known.get(&uri)?.clone();
                Some(Reached { uri, id, kind })
            })
            .collect())
    }

    /// Concept ids below `start`, excluding every collection.
    fn expansion(&self, start: &Node) -> VocabResult<Vec<Reached>> {
        let mut seen = HashSet::new();
        Ok(self
            .descendants(start)?
            .into_iter()
            .filter(|r| r.kind == NodeKind::Concept && seen.insert(r.id.clone()))
            .collect())
    }

    /// URIs a collection-scoped find may return.
    fn collection_candidates(&self, filter: &CollectionFilter) -> VocabResult<Vec<String>> {
        let collection = self
            .find_node(&filter.id)?
            .filter(Node::is_collection)
            .ok_or_else(|| QueryError::UnknownCollection {
                id: filter.id.clone(),
            })?;

        let mut seen = HashSet::new();
        let mut uris = Vec::new();
        for edge in self.fetch_edges(&self.builder.members(&collection.uri)?)? {
            if seen.insert(edge.target.clone()) {
                uris.push(edge.target);
            }
        }
        if filter.depth == Depth::All {
            for reached in self.expansion(&collection)? {
                if seen.insert(reached.uri.clone()) {
                    uris.push(reached.uri);
                }
            }
        }
        Ok(uris)
    }

    fn records(&self, nodes: &[Node], options: &ListOptions) -> Vec<ResultRecord> {
        project_records(nodes, options, &self.metadata.default_language)
    }
}

impl VocabularyProvider for SparqlProvider {
    fn metadata(&self) -> &ProviderMetadata {
        &self.metadata
    }

    fn get_by_id(&self, id: &str) -> VocabResult<Option<Node>> {
        let _span = provider_span!("get_by_id", self.metadata.id).entered();
        match self.find_node(id)? {
            Some(node) => Ok(Some(self.with_relations(node)?)),
            None => Ok(None),
        }
    }

    fn get_by_uri(&self, uri: &str) -> VocabResult<Option<Node>> {
        let _span = provider_span!("get_by_uri", self.metadata.id).entered();
        let nodes = self.fetch_nodes(&self.builder.node_by_uri(uri)?)?;
        match nodes.into_iter().find(|node| node.uri == uri) {
            Some(node) => Ok(Some(self.with_relations(node)?)),
            None => Ok(None),
        }
    }

    fn get_all(&self, options: &ListOptions) -> VocabResult<Vec<ResultRecord>> {
        let _span = provider_span!("get_all", self.metadata.id).entered();
        let options = options.validated()?;
        let nodes = self.fetch_nodes(&self.builder.all_nodes())?;
        Ok(self.records(&nodes, &options))
    }

    fn get_top_concepts(&self, options: &ListOptions) -> VocabResult<Vec<ResultRecord>> {
        let _span = provider_span!("get_top_concepts", self.metadata.id).entered();
        let options = options.validated()?;
        let nodes = self.fetch_nodes(&self.builder.top_concepts())?;
        Ok(self.records(&nodes, &options))
    }

    fn find(&self, query: &FindQuery, options: &ListOptions) -> VocabResult<Vec<ResultRecord>> {
        let _span = provider_span!("find", self.metadata.id).entered();
        let options = options.validated()?;

        let nodes = match &query.collection {
            None => self.fetch_nodes(&self.builder.find(query, None)?)?,
            Some(filter) => {
                let candidates = self.collection_candidates(filter)?;
                let mut nodes = Vec::new();
                for chunk in candidates.chunks(MAX_VALUES_PER_QUERY) {
                    nodes.extend(self.fetch_nodes(&self.builder.find(query, Some(chunk))?)?);
                }
                nodes
            }
        };

        let type_filter = query.type_filter();
        Ok(project_records_where(
            &nodes,
            &options,
            &self.metadata.default_language,
            |node, record| type_filter.matches(node.kind) && query.label_matches(&record.label),
        ))
    }

    fn expand(&self, id: &str) -> VocabResult<Option<Vec<String>>> {
        let _span = provider_span!("expand", self.metadata.id).entered();
        let Some(start) = self.find_node(id)? else {
            return Ok(None);
        };
        let ids = self
            .expansion(&start)?
            .into_iter()
            .map(|reached| reached.id)
            .collect::<Vec<_>>();
        tracing::debug!(id, expanded = ids.len(), "expanded");
        Ok(Some(ids))
    }

    fn get_top_display(&self, options: &ListOptions) -> VocabResult<Vec<ResultRecord>> {
        let _span = provider_span!("get_top_display", self.metadata.id).entered();
        let options = options.validated()?;
        let nodes = self.fetch_nodes(&self.builder.top_display())?;
        Ok(self.records(&nodes, &options))
    }

    fn get_children_display(
        &self,
        id: &str,
        options: &ListOptions,
    ) -> VocabResult<Option<Vec<ResultRecord>>> {
        let _span = provider_span!("get_children_display", self.metadata.id).entered();
        let options = options.validated()?;
        let Some(parent) = self.find_node(id)? else {
            return Ok(None);
        };
        let nodes = self.fetch_nodes(&self.builder.children_display(&parent.uri)?)?;
        Ok(Some(self.records(&nodes, &options)))
    }
}
