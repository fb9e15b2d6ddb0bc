pub mod provider;

pub use provider::VocabularyProvider;
