use crate::errors::VocabResult;
use crate::models::{FindQuery, ListOptions, Node, ProviderMetadata, ResultRecord};

/// Uniform read access to one SKOS concept scheme.
///
/// Every backing store implements the full set. Lookups that can miss return
/// `Ok(None)`; `Err` is reserved for transport, configuration, and invalid
/// parameter failures. Implementations hold no mutable state and can be
/// shared across threads.
pub trait VocabularyProvider: Send + Sync {
    /// Provider id, default language, and scheme.
    fn metadata(&self) -> &ProviderMetadata;

    /// A concept or collection by scheme-local id. Ids compare type-agnostically.
    fn get_by_id(&self, id: &str) -> VocabResult<Option<Node>>;

    /// A concept or collection by URI.
    fn get_by_uri(&self, uri: &str) -> VocabResult<Option<Node>>;

    /// Every concept and collection.
    fn get_all(&self, options: &ListOptions) -> VocabResult<Vec<ResultRecord>>;

    /// Concepts linked to the scheme as top concepts. Never collections.
    fn get_top_concepts(&self, options: &ListOptions) -> VocabResult<Vec<ResultRecord>>;

    /// Concepts and collections matching a label, kind, and collection scope.
    fn find(&self, query: &FindQuery, options: &ListOptions) -> VocabResult<Vec<ResultRecord>>;

    /// Ids of every concept reachable downward from `id`.
    ///
    /// A concept's own id is included; a collection's never is.
    fn expand(&self, id: &str) -> VocabResult<Option<Vec<String>>>;

    /// Roots of a display tree: nodes with no broader concept that belong to no collection.
    fn get_top_display(&self, options: &ListOptions) -> VocabResult<Vec<ResultRecord>>;

    /// Children in a display tree: narrower concepts of a concept, members of a collection.
    fn get_children_display(
        &self,
        id: &str,
        options: &ListOptions,
    ) -> VocabResult<Option<Vec<ResultRecord>>>;

    /// The vocabulary id.
    fn vocabulary_id(&self) -> &str {
        &self.metadata().id
    }
}
