//! Error types for loading, building and drawing networks

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NetError {
	/// Input file missing or unreadable
	#[error("Cannot access {}: {source}", path.display())]
	FileAccess {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// Record with the wrong shape or an unparsable value
	#[error("Malformed record at {}:{line}: {reason}", path.display())]
	MalformedRecord {
		path: PathBuf,
		line: usize,
		reason: String,
	},

	/// Word absent from the embedding vocabulary
	#[error("Unknown word: {0}")]
	UnknownWord(String),

	/// Not enough nodes to draw a single arc
	#[error("Graph needs at least 2 nodes to draw, got {nodes}")]
	EmptyGraph { nodes: usize },

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
}

impl NetError {
	pub(crate) fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
		Self::FileAccess { path: path.into(), source }
	}

	pub(crate) fn malformed(path: impl Into<PathBuf>, line: usize, reason: impl Into<String>) -> Self {
		Self::MalformedRecord {
			path: path.into(),
			line,
			reason: reason.into(),
		}
	}
}

pub type Result<T> = std::result::Result<T, NetError>;
