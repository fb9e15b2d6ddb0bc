//! Turns provider operations into SPARQL SELECT queries.
//!
//! Two result shapes are produced:
//!
//! - node queries: `?uri ?type ?id ?labelKind ?label`, one row per label
//!   (or one row with no label) per node;
//! - edge queries: `?source ?rel ?target ?targetId ?targetType`.
//!
//! Every query reads from the configured graph via `FROM`. The local id of a
//! node is its identifier literal, or the URI tail when it has none.

use vocab_core::errors::QueryError;
use vocab_core::models::{ConceptSchemeHandle, FindQuery, MatchType, TypeFilter};
use vocab_core::normalize::canonical_id;

use super::literal::{iri, literal};
use super::prefixes::{prologue, DCTERMS_IDENTIFIER};

/// Label kinds bound to `?labelKind` in node queries.
pub mod label_kind {
    pub const PREF: &str = "pref";
    pub const ALT: &str = "alt";
    pub const SORT: &str = "sort";
}

/// Relation names bound to `?rel` in edge queries.
pub mod relation {
    pub const BROADER: &str = "broader";
    pub const NARROWER: &str = "narrower";
    pub const RELATED: &str = "related";
    pub const MEMBER: &str = "member";
    pub const MEMBER_OF: &str = "memberOf";
}

/// Query factory for one concept scheme. Holds only pre-validated IRIs.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    graph: String,
    scheme: Option<String>,
    identifier: String,
    sort_label: Option<String>,
}

impl QueryBuilder {
    /// Fails when the graph or scheme IRI cannot be embedded safely.
    pub fn new(handle: &ConceptSchemeHandle) -> Result<Self, QueryError> {
        Ok(Self {
            graph: iri(&handle.graph)?,
            scheme: handle.scheme_uri.as_deref().map(iri).transpose()?,
            identifier: iri(DCTERMS_IDENTIFIER)?,
            sort_label: None,
        })
    }

    /// Predicate that carries scheme-local ids.
    pub fn with_identifier_predicate(mut self, predicate: &str) -> Result<Self, QueryError> {
        self.identifier = iri(predicate)?;
        Ok(self)
    }

    /// Predicate that carries sort labels.
    pub fn with_sort_label_predicate(mut self, predicate: &str) -> Result<Self, QueryError> {
        self.sort_label = Some(iri(predicate)?);
        Ok(self)
    }

    /// The node whose local id equals `id`.
    ///
    /// An integer id also matches any stored integer literal of the same
    /// value, so `5` finds a stored `"05"` and `"05"` finds a stored `5`.
    pub fn node_by_id(&self, id: &str) -> String {
        let canonical = canonical_id(id);
        let mut condition = format!("?id = {}", literal(&canonical));
        if canonical.parse::<i128>().is_ok() {
            condition.push_str(&format!(
                " || (REGEX(?id, \"^[+-]?[0-9]+$\") && xsd:integer(?id) = {canonical})"
            ));
        }
        let tail = format!("  FILTER ({condition})\n");
        self.node_query("", TypeFilter::All, None, &tail)
    }

    /// The node at `uri`.
    pub fn node_by_uri(&self, uri: &str) -> Result<String, QueryError> {
        let patterns = format!("  VALUES ?uri {{ {} }}\n", iri(uri)?);
        Ok(self.node_query(&patterns, TypeFilter::All, None, ""))
    }

    /// Every concept and collection in the graph.
    pub fn all_nodes(&self) -> String {
        self.node_query("", TypeFilter::All, None, "")
    }

    /// Concepts linked to a scheme through `hasTopConcept` or `topConceptOf`,
    /// restricted to the configured scheme when there is one.
    pub fn top_concepts(&self) -> String {
        let mut patterns = String::from(
            "  { ?scheme skos:hasTopConcept ?uri } UNION { ?uri skos:topConceptOf ?scheme }\n",
        );
        if let Some(scheme) = &self.scheme {
            patterns.push_str(&format!("  FILTER (?scheme = {scheme})\n"));
        }
        self.node_query(&patterns, TypeFilter::Concept, None, "")
    }

    /// Nodes with no broader concept that belong to no collection.
    pub fn top_display(&self) -> String {
        let patterns = "  FILTER NOT EXISTS { ?uri skos:broader ?anyBroader }\n  \
                        FILTER NOT EXISTS { ?anyNarrower skos:narrower ?uri }\n  \
                        FILTER NOT EXISTS { ?anyCollection skos:member ?uri }\n";
        self.node_query(patterns, TypeFilter::All, None, "")
    }

    /// Narrower concepts and members of the node at `uri`.
    pub fn children_display(&self, uri: &str) -> Result<String, QueryError> {
        let parent = iri(uri)?;
        let patterns = format!(
            "  {{ {parent} skos:narrower ?uri }}\n  \
             UNION {{ ?uri skos:broader {parent} }}\n  \
             UNION {{ {parent} skos:member ?uri }}\n"
        );
        Ok(self.node_query(&patterns, TypeFilter::All, None, ""))
    }

    /// Candidates for a find: type filter, label pre-filter, and an optional
    /// restriction to `candidates`.
    ///
    /// The label filter here only narrows the candidates to nodes with some
    /// matching preferred label; the final match is made on the label shown
    /// to the caller.
    pub fn find(
        &self,
        query: &FindQuery,
        candidates: Option<&[String]>,
    ) -> Result<String, QueryError> {
        let patterns = match candidates {
            Some(uris) => format!("  VALUES ?uri {{ {} }}\n", iri_list(uris)?),
            None => String::new(),
        };
        let label = query.label_filter().map(|l| (l, query.match_type));
        Ok(self.node_query(&patterns, query.type_filter(), label, ""))
    }

    /// Broader, narrower, related, member, and member-of edges of `uri`.
    /// Both directions of each SKOS property are read.
    pub fn relations(&self, uri: &str) -> Result<String, QueryError> {
        let patterns = format!(
            "  VALUES ?source {{ {} }}\n  \
             {{ ?source skos:broader ?target . BIND (\"{b}\" AS ?rel) }}\n  \
             UNION {{ ?target skos:narrower ?source . BIND (\"{b}\" AS ?rel) }}\n  \
             UNION {{ ?source skos:narrower ?target . BIND (\"{n}\" AS ?rel) }}\n  \
             UNION {{ ?target skos:broader ?source . BIND (\"{n}\" AS ?rel) }}\n  \
             UNION {{ ?source skos:related ?target . BIND (\"{r}\" AS ?rel) }}\n  \
             UNION {{ ?target skos:related ?source . BIND (\"{r}\" AS ?rel) }}\n  \
             UNION {{ ?source skos:member ?target . BIND (\"{m}\" AS ?rel) }}\n  \
             UNION {{ ?target skos:member ?source . BIND (\"{mo}\" AS ?rel) }}\n",
            iri(uri)?,
            b = relation::BROADER,
            n = relation::NARROWER,
            r = relation::RELATED,
            m = relation::MEMBER,
            mo = relation::MEMBER_OF,
        );
        Ok(self.edge_query(&patterns))
    }

    /// One level of downward traversal: the narrower concepts and members of
    /// every node in `frontier`, typed concept or collection.
    pub fn closure_step(&self, frontier: &[String]) -> Result<String, QueryError> {
        let patterns = format!(
            "  VALUES ?source {{ {} }}\n  \
             {{ ?source skos:narrower ?target . BIND (\"{n}\" AS ?rel) }}\n  \
             UNION {{ ?target skos:broader ?source . BIND (\"{n}\" AS ?rel) }}\n  \
             UNION {{ ?source skos:member ?target . BIND (\"{m}\" AS ?rel) }}\n  \
             ?target rdf:type ?targetType .\n  \
             FILTER (?targetType IN (skos:Concept, skos:Collection))\n",
            iri_list(frontier)?,
            n = relation::NARROWER,
            m = relation::MEMBER,
        );
        Ok(self.edge_query(&patterns))
    }

    /// Direct members of the collection at `uri`.
    pub fn members(&self, uri: &str) -> Result<String, QueryError> {
        let patterns = format!(
            "  VALUES ?source {{ {} }}\n  \
             ?source skos:member ?target .\n  \
             BIND (\"{m}\" AS ?rel)\n  \
             ?target rdf:type ?targetType .\n  \
             FILTER (?targetType IN (skos:Concept, skos:Collection))\n",
            iri(uri)?,
            m = relation::MEMBER,
        );
        Ok(self.edge_query(&patterns))
    }

    fn node_query(
        &self,
        patterns: &str,
        types: TypeFilter,
        label: Option<(&str, MatchType)>,
        tail: &str,
    ) -> String {
        let mut q = prologue();
        q.push_str("SELECT ?uri ?type ?id ?labelKind ?label\n");
        q.push_str(&format!("FROM {}\nWHERE {{\n", self.graph));
        q.push_str(patterns);
        q.push_str("  ?uri rdf:type ?type .\n");
        q.push_str(&format!("  FILTER ({})\n", type_condition("?type", types)));
        if let Some((needle, match_type)) = label {
            q.push_str(&label_prefilter(needle, match_type));
        }
        q.push_str(&self.id_binding("?uri", "?ident", "?id"));
        q.push_str(&format!(
            "  OPTIONAL {{\n    \
             {{ ?uri skos:prefLabel ?label . BIND (\"{}\" AS ?labelKind) }}\n    \
             UNION {{ ?uri skos:altLabel ?label . BIND (\"{}\" AS ?labelKind) }}\n",
            label_kind::PREF,
            label_kind::ALT,
        ));
        if let Some(sort_label) = &self.sort_label {
            q.push_str(&format!(
                "    UNION {{ ?uri {sort_label} ?label . BIND (\"{}\" AS ?labelKind) }}\n",
                label_kind::SORT,
            ));
        }
        q.push_str("  }\n");
        q.push_str(tail);
        q.push_str("}\n");
        q
    }

    fn edge_query(&self, patterns: &str) -> String {
        let mut q = prologue();
        q.push_str("SELECT ?source ?rel ?target ?targetId ?targetType\n");
        q.push_str(&format!("FROM {}\nWHERE {{\n", self.graph));
        q.push_str(patterns);
        q.push_str(&self.id_binding("?target", "?targetIdent", "?targetId"));
        q.push_str("}\n");
        q
    }

    fn id_binding(&self, node: &str, ident: &str, id: &str) -> String {
        format!(
            "  OPTIONAL {{ {node} {} {ident} }}\n  \
             BIND (COALESCE(STR({ident}), REPLACE(STR({node}), \"^.*[/#]\", \"\")) AS {id})\n",
            self.identifier,
        )
    }
}

fn iri_list(uris: &[String]) -> Result<String, QueryError> {
    let refs = uris
        .iter()
        .map(|u| iri(u))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(refs.join(" "))
}

fn type_condition(var: &str, types: TypeFilter) -> String {
    match types {
        TypeFilter::Concept => format!("{var} = skos:Concept"),
        TypeFilter::Collection => format!("{var} = skos:Collection"),
        TypeFilter::All => format!("{var} IN (skos:Concept, skos:Collection)"),
    }
}

fn label_prefilter(needle: &str, match_type: MatchType) -> String {
    let needle = literal(&needle.to_lowercase());
    let condition = match match_type {
        MatchType::Contains => format!("CONTAINS(LCASE(STR(?anyLabel)), {needle})"),
        MatchType::Exact => format!("LCASE(STR(?anyLabel)) = {needle}"),
    };
    format!("  FILTER EXISTS {{ ?uri skos:prefLabel ?anyLabel . FILTER ({condition}) }}\n")
}
