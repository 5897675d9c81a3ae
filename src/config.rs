//! Application configuration and constants

use std::path::PathBuf;

// === Embedding Model ===
pub const MAX_VOCABULARY: usize = 500_000;
pub const EMBEDDING_DIM: usize = 300;
pub const DEFAULT_VECFILE: &str = "wiki.en.vec";
pub const VECFILE_ENV: &str = "SEMNET_VECTORS";

// === Network ===
pub const DEFAULT_WORDLIST: &str = "wordlist.csv";
pub const DEFAULT_WORD_LIMIT: usize = 100;
pub const WORD_COLUMN: &str = "word";

// === Artifacts ===
pub const MATRIX_FILE: &str = "network-matrix.txt";
pub const INDEX_FILE: &str = "network-index.csv";
pub const LONGFORM_FILE: &str = "network-longform.csv";
pub const DIAGRAM_FILE: &str = "radial-network.svg";

// === Rendering ===
pub const RADIUS: f64 = 1.0;
pub const TEXT_OFFSET: f64 = 0.025;
pub const PLOT_EXTENT: f64 = 1.25;
pub const BEZIER_SAMPLES: usize = 100;
pub const ARC_COLOR: &str = "#808080";
pub const HIGHLIGHT_COLOR: &str = "#ff0054";
pub const STROKE_WIDTH: f64 = 0.65;
pub const FONT_SIZE: f64 = 8.0;
pub const DEFAULT_CANVAS_PX: u32 = 800;

/// Shape of an embedding store: how many rows it may hold and how wide each row is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
	pub capacity: usize,
	pub dimension: usize,
}

impl StoreConfig {
	pub fn new(capacity: usize, dimension: usize) -> Self {
		Self { capacity, dimension }
	}
}

impl Default for StoreConfig {
	fn default() -> Self {
		Self::new(MAX_VOCABULARY, EMBEDDING_DIM)
	}
}

/// Resolve the embedding file (explicit flag, then SEMNET_VECTORS, then the default name)
pub fn vector_file(explicit: Option<PathBuf>) -> PathBuf {
	if let Some(path) = explicit {
		return path;
	}

	if let Ok(env_path) = std::env::var(VECFILE_ENV) {
		if !env_path.is_empty() {
			crate::ui::debug(&format!("Using {}: {}", VECFILE_ENV, env_path));
			return PathBuf::from(env_path);
		}
	}

	PathBuf::from(DEFAULT_VECFILE)
}
