//! Pairwise cosine similarity networks over a word list

use std::collections::HashSet;

use ndarray::{Array2, ArrayView2};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::embedding::{cosine, row_norms};
use super::store::EmbeddingStore;
use crate::error::Result;
use crate::ui;

/// One unordered word pair and its similarity (long-form row)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
	pub w1: String,
	pub w2: String,
	pub cosine_similarity: f64,
}

impl Edge {
	pub fn new(w1: impl Into<String>, w2: impl Into<String>, cosine_similarity: f64) -> Self {
		Self {
			w1: w1.into(),
			w2: w2.into(),
			cosine_similarity,
		}
	}
}

/// Ordered, distinct words that all have a vector in the store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList(Vec<String>);

impl WordList {
	/// Keep the first `limit` requested words that the store knows, in order, without repeats.
	/// Empty entries use up a slot but are never words. Returns the list and the words that
	/// were dropped as unknown.
	pub fn select<S: AsRef<str>>(store: &EmbeddingStore, requested: &[S], limit: usize) -> (Self, Vec<String>) {
		let mut seen = HashSet::new();
		let mut words = Vec::new();
		let mut missing = Vec::new();

		for word in requested.iter().take(limit) {
			let word: &str = word.as_ref();
			if word.is_empty() {
				continue;
			}
			if !store.contains(word) {
				missing.push(word.to_string());
			} else if seen.insert(word) {
				words.push(word.to_string());
			}
		}

		(Self(words), missing)
	}

	pub fn as_slice(&self) -> &[String] {
		&self.0
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.0.iter().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

/// Square, exactly symmetric cosine similarity matrix
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix(Array2<f64>);

impl SimilarityMatrix {
	/// All-pairs cosine similarity of the rows of `vectors`.
	///
	/// Each unordered pair is evaluated once and mirrored, so `sim[i][j]` and
	/// `sim[j][i]` are bitwise equal. Rows are computed in parallel.
	pub fn compute(vectors: ArrayView2<'_, f64>) -> Self {
		let n = vectors.nrows();
		let norms = row_norms(vectors);

		let upper: Vec<Vec<f64>> = (0..n)
			.into_par_iter()
			.map(|i| {
				(i..n)
					.map(|j| cosine(vectors.row(i), vectors.row(j), norms[i], norms[j]))
					.collect()
			})
			.collect();

		let mut sim = Array2::<f64>::zeros((n, n));
		for (i, row) in upper.into_iter().enumerate() {
			for (offset, value) in row.into_iter().enumerate() {
				let j = i + offset;
				sim[[i, j]] = value;
				sim[[j, i]] = value;
			}
		}

		Self(sim)
	}

	pub fn get(&self, i: usize, j: usize) -> f64 {
		self.0[[i, j]]
	}

	/// Number of rows (and columns)
	pub fn size(&self) -> usize {
		self.0.nrows()
	}

	pub fn view(&self) -> ArrayView2<'_, f64> {
		self.0.view()
	}

	/// Upper-triangle pairs `(i, j)`, `i < j`, in row-major order
	pub fn upper_pairs(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
		let n = self.size();
		(0..n).flat_map(move |i| ((i + 1)..n).map(move |j| (i, j, self.get(i, j))))
	}
}

/// Everything one network run produces
#[derive(Debug, Clone)]
pub struct SimilarityNetwork {
	pub words: WordList,
	pub matrix: SimilarityMatrix,
	pub edges: Vec<Edge>,
	/// Requested words with no vector in the store
	pub missing: Vec<String>,
}

impl SimilarityNetwork {
	/// Words whose vector has zero magnitude (their similarities are NaN)
	pub fn degenerate_words(&self) -> Vec<&str> {
		self.words
			.iter()
			.enumerate()
			.filter(|(i, _)| self.matrix.get(*i, *i).is_nan())
			.map(|(_, w)| w)
			.collect()
	}
}

/// Build the similarity network for the first `limit` requested words known to `store`.
pub fn build<S: AsRef<str>>(store: &EmbeddingStore, requested: &[S], limit: usize) -> Result<SimilarityNetwork> {
	let (words, missing) = WordList::select(store, requested, limit);

	if !missing.is_empty() {
		ui::debug(&format!("Skipped {} words missing from the model: {}", missing.len(), missing.join(", ")));
	}

	let vectors = store.stack(words.as_slice())?;
	let n = words.len();
	ui::debug(&format!(
		"Network of {} words, {} pairwise, {} unique non-identical pairs",
		n,
		n * n,
		n * n.saturating_sub(1) / 2
	));

	let matrix = SimilarityMatrix::compute(vectors.view());
	let edges = matrix
		.upper_pairs()
		.map(|(i, j, sim)| Edge::new(&words.as_slice()[i], &words.as_slice()[j], sim))
		.collect();

	let network = SimilarityNetwork {
		words,
		matrix,
		edges,
		missing,
	};

	let degenerate = network.degenerate_words();
	if !degenerate.is_empty() {
		ui::warn(&format!(
			"Zero-magnitude vectors give undefined similarity for: {}",
			degenerate.join(", ")
		));
	}

	Ok(network)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::StoreConfig;
	use std::io::Cursor;
	use std::path::Path;

	fn store(text: &str, dimension: usize) -> EmbeddingStore {
		EmbeddingStore::from_reader(Cursor::new(text.to_string()), Path::new("mem.vec"), StoreConfig::new(100, dimension))
			.unwrap()
	}

	fn sample_store() -> EmbeddingStore {
		store(
			"5 3\nking 0.9 0.1 0.3\nqueen 0.8 0.2 0.35\napple -0.1 0.9 0.2\npear -0.2 0.8 0.1\nzero 0 0 0\n",
			3,
		)
	}

	#[test]
	fn select_filters_limits_and_dedupes() {
		let store = sample_store();
		let requested = ["queen", "banana", "king", "queen", "apple", "pear"];
		let (words, missing) = WordList::select(&store, &requested, 5);
		assert_eq!(words.as_slice(), &["queen", "king", "apple"]);
		assert_eq!(missing, vec!["banana"]);
	}

	#[test]
	fn matrix_is_symmetric_with_unit_diagonal() {
		let store = sample_store();
		let network = build(&store, &["king", "queen", "apple", "pear"], 100).unwrap();
		let m = &network.matrix;
		assert_eq!(m.size(), 4);
		for i in 0..4 {
			assert!((m.get(i, i) - 1.0).abs() < 1e-12);
			for j in 0..4 {
				assert_eq!(m.get(i, j), m.get(j, i));
				assert!(m.get(i, j) <= 1.0 + 1e-12 && m.get(i, j) >= -1.0 - 1e-12);
			}
		}
	}

	#[test]
	fn edge_list_covers_each_pair_once() {
		let store = sample_store();
		let network = build(&store, &["king", "queen", "apple", "pear"], 100).unwrap();
		assert_eq!(network.edges.len(), 4 * 3 / 2);

		let pairs: Vec<(&str, &str)> = network.edges.iter().map(|e| (e.w1.as_str(), e.w2.as_str())).collect();
		assert_eq!(
			pairs,
			vec![
				("king", "queen"),
				("king", "apple"),
				("king", "pear"),
				("queen", "apple"),
				("queen", "pear"),
				("apple", "pear"),
			]
		);
		for edge in &network.edges {
			let i = network.words.iter().position(|w| w == edge.w1).unwrap();
			let j = network.words.iter().position(|w| w == edge.w2).unwrap();
			assert!(i < j);
			assert_eq!(edge.cosine_similarity, network.matrix.get(i, j));
		}
	}

	#[test]
	fn similarity_is_scale_invariant() {
		let base = store("2 3\na 0.3 -0.7 0.2\nb 0.5 0.1 0.9\n", 3);
		let scaled = store("2 3\na 0.6 -1.4 0.4\nb 0.5 0.1 0.9\n", 3);
		let s1 = build(&base, &["a", "b"], 100).unwrap().edges[0].cosine_similarity;
		let s2 = build(&scaled, &["a", "b"], 100).unwrap().edges[0].cosine_similarity;
		assert!((s1 - s2).abs() < 1e-12);
	}

	#[test]
	fn zero_vector_propagates_nan() {
		let store = sample_store();
		let network = build(&store, &["king", "zero"], 100).unwrap();
		assert_eq!(network.degenerate_words(), vec!["zero"]);
		assert!(network.edges[0].cosine_similarity.is_nan());
	}

	#[test]
	fn single_word_has_no_edges() {
		let store = sample_store();
		let network = build(&store, &["king"], 100).unwrap();
		assert_eq!(network.matrix.size(), 1);
		assert!(network.edges.is_empty());
	}

	#[test]
	fn limit_applies_before_filtering() {
		let store = sample_store();
		let network = build(&store, &["missing", "king", "queen"], 2).unwrap();
		assert_eq!(network.words.as_slice(), &["king"]);
		assert_eq!(network.missing, vec!["missing"]);
	}

	#[test]
	fn empty_rows_count_toward_limit() {
		let store = sample_store();
		let requested = ["king", "", "queen"];
		let network = build(&store, &requested, 2).unwrap();
		assert_eq!(network.words.as_slice(), &["king"]);
		assert!(network.missing.is_empty());

		let network = build(&store, &requested, 3).unwrap();
		assert_eq!(network.words.as_slice(), &["king", "queen"]);
	}
}
