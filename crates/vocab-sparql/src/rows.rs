//! Typed rows decoded once from result bindings, and node assembly.
//!
//! Rows whose type is not a concept or a collection, and rows whose subject
//! is not an IRI, are dropped with a warning. A row missing a variable the
//! query always binds means the store answered something else, which is a
//! [`TransportError::MalformedResponse`].

use std::collections::HashMap;

use vocab_core::errors::TransportError;
use vocab_core::models::{Label, Node, NodeKind};
use vocab_core::normalize::derive_kind;

use crate::query::builder::{label_kind, relation};
use crate::transport::{Binding, RdfTerm, SelectResults};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    Pref,
    Alt,
    Sort,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRow {
    pub kind: LabelKind,
    pub text: String,
    /// Lowercased tag, empty when the literal was untagged.
    pub language: String,
}

/// One row of a node query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRow {
    pub uri: String,
    pub kind: NodeKind,
    pub id: String,
    pub label: Option<LabelRow>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Broader,
    Narrower,
    Related,
    Member,
    MemberOf,
}

impl Relation {
    fn parse(s: &str) -> Option<Self> {
        match s {
            relation::BROADER => Some(Relation::Broader),
            relation::NARROWER => Some(Relation::Narrower),
            relation::RELATED => Some(Relation::Related),
            relation::MEMBER => Some(Relation::Member),
            relation::MEMBER_OF => Some(Relation::MemberOf),
            _ => None,
        }
    }
}

/// One row of an edge query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRow {
    pub source: Option<String>,
    pub relation: Relation,
    pub target: String,
    pub target_id: String,
    /// Present when the query typed the target.
    pub target_kind: Option<NodeKind>,
}

pub fn decode_node_rows(results: &SelectResults) -> Result<Vec<NodeRow>, TransportError> {
    let mut rows = Vec::with_capacity(results.len());
    for binding in results.rows() {
        let uri = required(binding, "uri")?;
        if !uri.is_iri() {
            tracing::warn!(value = %uri.value, "dropping row with a blank node subject");
            continue;
        }
        let type_iri = &required(binding, "type")?.value;
        let Some(kind) = derive_kind(type_iri) else {
            tracing::warn!(uri = %uri.value, type_iri = %type_iri, "dropping row with unknown type");
            continue;
        };
        let id = match binding.get("id") {
            Some(term) if !term.value.is_empty() => term.value.clone(),
            _ => uri_tail(&uri.value).to_string(),
        };
        rows.push(NodeRow {
            uri: uri.value.clone(),
            kind,
            id,
            label: decode_label(binding),
        });
    }
    Ok(rows)
}

fn decode_label(binding: &Binding) -> Option<LabelRow> {
    let text = binding.get("label")?;
    let kind = match binding.get("labelKind").map(|t| t.value.as_str()) {
        Some(label_kind::PREF) => LabelKind::Pref,
        Some(label_kind::ALT) => LabelKind::Alt,
        Some(label_kind::SORT) => LabelKind::Sort,
        _ => return None,
    };
    Some(LabelRow {
        kind,
        text: text.value.clone(),
        language: text.lang.as_deref().unwrap_or("").to_ascii_lowercase(),
    })
}

pub fn decode_edge_rows(results: &SelectResults) -> Result<Vec<EdgeRow>, TransportError> {
    let mut rows = Vec::with_capacity(results.len());
    for binding in results.rows() {
        let rel = &required(binding, "rel")?.value;
        let Some(relation) = Relation::parse(rel) else {
            tracing::warn!(relation = %rel, "dropping edge with unknown relation");
            continue;
        };
        let target = required(binding, "target")?;
        if !target.is_iri() {
            tracing::warn!(value = %target.value, "dropping edge to a blank node");
            continue;
        }
        let target_kind = match binding.get("targetType") {
            None => None,
            Some(term) => match derive_kind(&term.value) {
                Some(kind) => Some(kind),
                None => {
                    tracing::warn!(
                        target = %target.value,
                        type_iri = %term.value,
                        "dropping edge to a node of unknown type"
                    );
                    continue;
                }
            },
        };
        let target_id = match binding.get("targetId") {
            Some(term) if !term.value.is_empty() => term.value.clone(),
            _ => uri_tail(&target.value).to_string(),
        };
        rows.push(EdgeRow {
            source: binding.get("source").map(|t| t.value.clone()),
            relation,
            target: target.value.clone(),
            target_id,
            target_kind,
        });
    }
    Ok(rows)
}

/// Fold node rows into nodes, one per URI, in first-seen order.
/// The first id seen for a URI wins, as does the first label per language.
pub fn assemble_nodes(rows: Vec<NodeRow>) -> Vec<Node> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut nodes: Vec<Node> = Vec::new();

    for row in rows {
        let position = *index.entry(row.uri.clone()).or_insert_with(|| {
            nodes.push(Node::new(row.id.clone(), row.uri.clone(), row.kind));
            nodes.len() - 1
        });
        let node = &mut nodes[position];
        let Some(label) = row.label else {
            continue;
        };
        match label.kind {
            LabelKind::Pref => node.add_label(&label.language, label.text),
            LabelKind::Sort => node.add_sort_label(&label.language, label.text),
            LabelKind::Alt => {
                let alt = Label::new(label.text, label.language);
                if !node.alt_labels.contains(&alt) {
                    node.alt_labels.push(alt);
                }
            }
        }
    }

    nodes
}

/// Copy relation edges onto `node` as id lists, without duplicates.
pub fn apply_relations(node: &mut Node, edges: Vec<EdgeRow>) {
    for edge in edges {
        let list = match edge.relation {
            Relation::Broader => &mut node.broader,
            Relation::Narrower => &mut node.narrower,
            Relation::Related => &mut node.related,
            Relation::Member => &mut node.members,
            Relation::MemberOf => &mut node.member_of,
        };
        if !list.contains(&edge.target_id) {
            list.push(edge.target_id);
        }
    }
}

fn required<'a>(binding: &'a Binding, var: &str) -> Result<&'a RdfTerm, TransportError> {
    binding
        .get(var)
        .ok_or_else(|| TransportError::MalformedResponse {
            reason: format!("result row has no binding for ?{var}"),
        })
}

fn uri_tail(uri: &str) -> &str {
    uri.rfind(&['/', '#'][..])
        .map(|i| &uri[i + 1..])
        .unwrap_or(uri)
}
