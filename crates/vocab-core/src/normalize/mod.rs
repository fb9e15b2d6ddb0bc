//! Store-independent result normalization: label fallback, type tags, id
//! comparison, record projection, stable sorting, and transitive closure.
//! Every provider funnels its nodes through these functions so listings
//! behave the same regardless of the backing store.

pub mod closure;
pub mod ids;
pub mod labels;
pub mod records;
pub mod sort;
pub mod type_tag;

pub use closure::transitive_closure;
pub use ids::{canonical_id, compare_ids, ids_match};
pub use labels::select_label;
pub use records::{project_records, project_records_where};
pub use sort::sort_records;
pub use type_tag::{derive_kind, type_tag};
