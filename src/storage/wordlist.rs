//! Word list input (CSV with a `word` column)

use std::fs;
use std::path::Path;

use super::csv::split_record;
use crate::config::WORD_COLUMN;
use crate::error::{NetError, Result};

/// Read the `word` column of a CSV file, in row order.
///
/// Every row keeps its slot, so an empty cell comes back as `""` and still
/// counts toward a word limit. Blank lines are not rows.
pub fn read_word_list(path: &Path) -> Result<Vec<String>> {
	let text = fs::read_to_string(path).map_err(|e| NetError::file_access(path, e))?;
	parse_word_list(&text, path)
}

pub fn parse_word_list(text: &str, source: &Path) -> Result<Vec<String>> {
	let mut lines = text.lines().enumerate();

	let Some((_, header)) = lines.next() else {
		return Err(NetError::malformed(source, 1, "empty word list"));
	};
	let header = split_record(header.trim_start_matches('\u{feff}')).map_err(|e| NetError::malformed(source, 1, e))?;
	let column = header
		.iter()
		.position(|h| h.trim() == WORD_COLUMN)
		.ok_or_else(|| NetError::malformed(source, 1, format!("no '{}' column in header", WORD_COLUMN)))?;

	let mut words = Vec::new();
	for (offset, line) in lines {
		if line.trim().is_empty() {
			continue;
		}
		let fields = split_record(line).map_err(|e| NetError::malformed(source, offset + 1, e))?;
		let word = fields.get(column).map(|w| w.trim()).unwrap_or_default();
		words.push(word.to_string());
	}

	Ok(words)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reads_word_column_anywhere() {
		let text = ",word,freq\n0,cat,12\n1,dog,9\n2,,3\n3,\"a,b\",1\n";
		let words = parse_word_list(text, Path::new("w.csv")).unwrap();
		assert_eq!(words, vec!["cat", "dog", "", "a,b"]);
	}

	#[test]
	fn empty_cells_keep_their_row() {
		let words = parse_word_list("word\na\n\"\"\nb\n\nc\n", Path::new("w.csv")).unwrap();
		assert_eq!(words, vec!["a", "", "b", "c"]);

		let short = parse_word_list("id,word\n1,cat\n2\n3,dog\n", Path::new("w.csv")).unwrap();
		assert_eq!(short, vec!["cat", "", "dog"]);
	}

	#[test]
	fn missing_column_is_malformed() {
		let err = parse_word_list("term\ncat\n", Path::new("w.csv")).unwrap_err();
		assert!(matches!(err, NetError::MalformedRecord { line: 1, .. }));
	}

	#[test]
	fn byte_order_mark_is_ignored() {
		let words = parse_word_list("\u{feff}word\nλόγος\n", Path::new("w.csv")).unwrap();
		assert_eq!(words, vec!["λόγος"]);
	}
}
