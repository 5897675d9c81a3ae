//! Core domain types

pub mod embedding;
pub mod network;
pub mod store;

pub use network::{build, Edge, SimilarityMatrix, SimilarityNetwork, WordList};
pub use store::EmbeddingStore;
