use serde::{Deserialize, Serialize};

use super::node::NodeKind;

/// The normalized listing shape: `{id, uri, type, label}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub id: String,
    pub uri: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub label: String,
}
