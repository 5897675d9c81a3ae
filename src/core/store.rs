//! In-memory embedding table loaded from `.vec` text files

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ndarray::{Array2, ArrayView1, Axis};

use crate::config::StoreConfig;
use crate::error::{NetError, Result};
use crate::ui;

/// Rows reserved up front; the table grows past this on demand.
const PREALLOC_ROWS: usize = 65_536;

/// Dense word vectors plus the word lookup that addresses them.
///
/// Rows are only reachable through their word, so the lookup and the
/// matrix can never drift apart.
#[derive(Debug, Clone)]
pub struct EmbeddingStore {
	vectors: Array2<f64>,
	index: HashMap<String, usize>,
}

impl EmbeddingStore {
	/// Load a store from a `.vec` file: one header line, then `word d_0 .. d_{D-1}` per line.
	pub fn load(path: &Path, config: StoreConfig) -> Result<Self> {
		let file = File::open(path).map_err(|e| NetError::file_access(path, e))?;
		Self::from_reader(BufReader::new(file), path, config)
	}

	/// Same as [`EmbeddingStore::load`] for any buffered source; `source` names it in errors.
	pub fn from_reader<R: BufRead>(reader: R, source: &Path, config: StoreConfig) -> Result<Self> {
		let StoreConfig { capacity, dimension } = config;
		let mut lines = reader.lines();

		match lines.next() {
			Some(header) => {
				let header = header.map_err(|e| NetError::file_access(source, e))?;
				check_header(&header, dimension);
			}
			None => {
				ui::warn(&format!("{} is empty", source.display()));
				return Ok(Self::empty(dimension));
			}
		}

		let mut data: Vec<f64> = Vec::new();
		capacity
			.min(PREALLOC_ROWS)
			.checked_mul(dimension)
			.and_then(|values| data.try_reserve(values).ok())
			.ok_or_else(|| NetError::malformed(source, 1, format!("cannot hold vectors of dimension {}", dimension)))?;
		let mut index: HashMap<String, usize> = HashMap::new();
		let mut rows = 0;
		let mut parsed = 0;
		let mut duplicates = 0;

		for (offset, line) in lines.enumerate() {
			if parsed >= capacity {
				ui::debug(&format!("Vocabulary capped at {} entries", capacity));
				break;
			}

			let line = line.map_err(|e| NetError::file_access(source, e))?;
			let line_no = offset + 2;
			let mut tokens = line.split_whitespace();
			let Some(word) = tokens.next() else {
				return Err(NetError::malformed(
					source,
					line_no,
					format!("expected a word and {} values, found 0", dimension),
				));
			};
			parsed += 1;

			let start = data.len();
			for found in 0..dimension {
				let token = tokens.next().ok_or_else(|| {
					NetError::malformed(
						source,
						line_no,
						format!("expected {} values after '{}', found {}", dimension, word, found),
					)
				})?;
				let value: f64 = token.parse().map_err(|_| {
					NetError::malformed(source, line_no, format!("'{}' is not a number", token))
				})?;
				data.push(value);
			}

			match index.entry(word.to_string()) {
				Entry::Occupied(entry) => {
					// Later occurrence replaces the earlier row.
					let row = *entry.get();
					let fresh: Vec<f64> = data.drain(start..).collect();
					data[row * dimension..(row + 1) * dimension].copy_from_slice(&fresh);
					duplicates += 1;
				}
				Entry::Vacant(entry) => {
					entry.insert(rows);
					rows += 1;
				}
			}
		}

		if duplicates > 0 {
			ui::warn(&format!("{} duplicate words in {}, kept last occurrence", duplicates, source.display()));
		}

		data.shrink_to_fit();
		let vectors = Array2::from_shape_vec((rows, dimension), data)
			.map_err(|e| NetError::malformed(source, 0, e.to_string()))?;

		Ok(Self { vectors, index })
	}

	fn empty(dimension: usize) -> Self {
		Self {
			vectors: Array2::zeros((0, dimension)),
			index: HashMap::new(),
		}
	}

	/// Vector for `word`
	pub fn lookup(&self, word: &str) -> Result<ArrayView1<'_, f64>> {
		self.index
			.get(word)
			.map(|&row| self.vectors.row(row))
			.ok_or_else(|| NetError::UnknownWord(word.to_string()))
	}

	pub fn contains(&self, word: &str) -> bool {
		self.index.contains_key(word)
	}

	/// Stack the vectors of `words` into an `n x D` matrix, in the given order.
	pub fn stack<S: AsRef<str>>(&self, words: &[S]) -> Result<Array2<f64>> {
		let rows = words
			.iter()
			.map(|w| {
				let w: &str = w.as_ref();
				self.index.get(w).copied().ok_or_else(|| NetError::UnknownWord(w.to_string()))
			})
			.collect::<Result<Vec<usize>>>()?;

		Ok(self.vectors.select(Axis(0), &rows))
	}

	/// Number of distinct words held
	pub fn len(&self) -> usize {
		self.vectors.nrows()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn dimension(&self) -> usize {
		self.vectors.ncols()
	}
}

/// fastText headers read `<count> <dim>`; anything else is ignored.
fn check_header(header: &str, dimension: usize) {
	let fields: Vec<&str> = header.split_whitespace().collect();
	if let [count, dim] = fields.as_slice() {
		if let (Ok(count), Ok(dim)) = (count.parse::<usize>(), dim.parse::<usize>()) {
			ui::debug(&format!("Header declares {} words of {}D", count, dim));
			if dim != dimension {
				ui::warn(&format!(
					"Header declares {}D vectors but store is configured for {}D",
					dim, dimension
				));
			}
		}
	}
}
