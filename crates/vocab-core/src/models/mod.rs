//! Data model shared by every provider.

pub mod id_format;
pub mod language;
pub mod node;
pub mod options;
pub mod query;
pub mod record;
pub mod scheme;

pub use language::normalize_language_tag;
pub use node::{Label, Node, NodeKind};
pub use options::{ListOptions, SortKey, SortOrder};
pub use query::{CollectionFilter, Depth, FindQuery, MatchType, TypeFilter};
pub use record::ResultRecord;
pub use scheme::{ConceptSchemeHandle, ProviderMetadata};
