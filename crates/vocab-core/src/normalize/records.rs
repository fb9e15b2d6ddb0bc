//! Node → ResultRecord projection with malformed-node exclusion.

use super::sort::{sort_records, SortableRecord};
use crate::models::{ListOptions, Node, ResultRecord};

/// Project nodes into sorted records, keeping only those `keep` accepts.
///
/// A node without a label in any fallback language is skipped with a
/// warning; it never fails the listing.
pub fn project_records_where<'a, I, F>(
    nodes: I,
    options: &ListOptions,
    default_language: &str,
    keep: F,
) -> Vec<ResultRecord>
where
    I: IntoIterator<Item = &'a Node>,
    F: Fn(&Node, &ResultRecord) -> bool,
{
    let language = options.language.as_deref();
    let mut items = Vec::new();

    for node in nodes {
        let Some(label) = node.label(language, default_language) else {
            tracing::warn!(
                event = "malformed_node",
                id = %node.id,
                uri = %node.uri,
                language = ?language,
                default_language,
                "node has no label in any fallback language, excluded"
            );
            continue;
        };
        let record = ResultRecord {
            id: node.id.clone(),
            uri: node.uri.clone(),
            kind: node.kind,
            label: label.to_string(),
        };
        if !keep(node, &record) {
            continue;
        }
        let sort_label = node
            .sort_label(language, default_language)
            .unwrap_or(label)
            .to_string();
        items.push(SortableRecord { record, sort_label });
    }

    sort_records(&mut items, options.sort, options.sort_order);
    items.into_iter().map(|item| item.record).collect()
}

/// Project every labelled node into sorted records.
pub fn project_records<'a, I>(
    nodes: I,
    options: &ListOptions,
    default_language: &str,
) -> Vec<ResultRecord>
where
    I: IntoIterator<Item = &'a Node>,
{
    project_records_where(nodes, options, default_language, |_, _| true)
}
