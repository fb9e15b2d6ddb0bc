//! SPARQL query construction.

pub mod builder;
pub mod literal;
pub mod prefixes;

pub use builder::QueryBuilder;
pub use literal::{iri, literal};
