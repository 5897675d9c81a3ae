//! Network artifacts on disk: dense matrix, row index and long-form edge list

use std::fs;
use std::path::{Path, PathBuf};

use super::csv::{join_record, split_record};
use crate::config::{INDEX_FILE, LONGFORM_FILE, MATRIX_FILE};
use crate::core::{Edge, SimilarityMatrix, SimilarityNetwork};
use crate::error::{NetError, Result};

const LONGFORM_HEADER: [&str; 3] = ["w1", "w2", "cosine_similarity"];

/// Where a network run wrote its files
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
	pub matrix: PathBuf,
	pub index: PathBuf,
	pub longform: PathBuf,
}

impl ArtifactPaths {
	pub fn in_dir(dir: &Path) -> Self {
		Self {
			matrix: dir.join(MATRIX_FILE),
			index: dir.join(INDEX_FILE),
			longform: dir.join(LONGFORM_FILE),
		}
	}
}

/// Write all three artifacts into `dir`. Contents are formatted before the first write.
pub fn save_network(dir: &Path, network: &SimilarityNetwork) -> Result<ArtifactPaths> {
	let paths = ArtifactPaths::in_dir(dir);
	let matrix = format_matrix(&network.matrix);
	let index = format_index(network.words.as_slice());
	let longform = format_longform(&network.edges);

	fs::create_dir_all(dir).map_err(|e| NetError::file_access(dir, e))?;
	for (path, contents) in [(&paths.matrix, matrix), (&paths.index, index), (&paths.longform, longform)] {
		fs::write(path, contents).map_err(|e| NetError::file_access(path, e))?;
	}

	Ok(paths)
}

/// One row per line, values in `%.18e` notation separated by spaces
pub fn format_matrix(matrix: &SimilarityMatrix) -> String {
	let mut out = String::new();
	for row in matrix.view().rows() {
		let line: Vec<String> = row.iter().map(|&v| scientific(v)).collect();
		out.push_str(&line.join(" "));
		out.push('\n');
	}
	out
}

/// `d.ddddddddddddddddddde+XX`, with `nan`/`inf` for non-finite values
fn scientific(value: f64) -> String {
	if value.is_nan() {
		return "nan".to_string();
	}
	if value.is_infinite() {
		return if value > 0.0 { "inf" } else { "-inf" }.to_string();
	}

	let formatted = format!("{:.18e}", value);
	match formatted.split_once('e') {
		Some((mantissa, exponent)) => {
			let exponent: i32 = exponent.parse().unwrap_or(0);
			let sign = if exponent < 0 { '-' } else { '+' };
			format!("{}e{}{:02}", mantissa, sign, exponent.abs())
		}
		None => formatted,
	}
}

/// Row position and word, one per line
pub fn format_index(words: &[String]) -> String {
	let mut out = String::from(",word\n");
	for (i, word) in words.iter().enumerate() {
		out.push_str(&join_record(&[i.to_string(), word.clone()]));
		out.push('\n');
	}
	out
}

/// `w1,w2,cosine_similarity` rows; NaN similarities are left empty
pub fn format_longform(edges: &[Edge]) -> String {
	let mut out = join_record(&LONGFORM_HEADER);
	out.push('\n');
	for edge in edges {
		let sim = if edge.cosine_similarity.is_nan() {
			String::new()
		} else {
			edge.cosine_similarity.to_string()
		};
		out.push_str(&join_record(&[edge.w1.as_str(), edge.w2.as_str(), sim.as_str()]));
		out.push('\n');
	}
	out
}

pub fn read_longform(path: &Path) -> Result<Vec<Edge>> {
	let text = fs::read_to_string(path).map_err(|e| NetError::file_access(path, e))?;
	parse_longform(&text, path)
}

/// Parse a long-form edge list; columns are located by header name.
pub fn parse_longform(text: &str, source: &Path) -> Result<Vec<Edge>> {
	let mut lines = text.lines().enumerate();
	let Some((_, header)) = lines.next() else {
		return Ok(Vec::new());
	};

	let header = split_record(header.trim_start_matches('\u{feff}')).map_err(|e| NetError::malformed(source, 1, e))?;
	let column = |name: &str| {
		header
			.iter()
			.position(|h| h.trim() == name)
			.ok_or_else(|| NetError::malformed(source, 1, format!("no '{}' column in header", name)))
	};
	let (c1, c2, cs) = (column("w1")?, column("w2")?, column("cosine_similarity")?);

	let mut edges = Vec::new();
	for (offset, line) in lines {
		if line.trim().is_empty() {
			continue;
		}
		let line_no = offset + 1;
		let fields = split_record(line).map_err(|e| NetError::malformed(source, line_no, e))?;
		if fields.len() != header.len() {
			return Err(NetError::malformed(
				source,
				line_no,
				format!("expected {} fields, found {}", header.len(), fields.len()),
			));
		}

		let raw = fields[cs].trim();
		let sim = if raw.is_empty() {
			f64::NAN
		} else {
			raw.parse::<f64>()
				.map_err(|_| NetError::malformed(source, line_no, format!("'{}' is not a number", raw)))?
		};
		edges.push(Edge::new(fields[c1].clone(), fields[c2].clone(), sim));
	}

	Ok(edges)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn scientific_matches_numpy_layout() {
		assert_eq!(scientific(1.0), "1.000000000000000000e+00");
		assert_eq!(scientific(-0.5), "-5.000000000000000000e-01");
		assert_eq!(scientific(0.0), "0.000000000000000000e+00");
		assert_eq!(scientific(f64::NAN), "nan");
	}

	#[test]
	fn index_lists_rows() {
		let words = vec!["cat".to_string(), "dog".to_string()];
		assert_eq!(format_index(&words), ",word\n0,cat\n1,dog\n");
	}

	#[test]
	fn longform_parses_what_it_writes() {
		let edges = vec![
			Edge::new("cat", "dog", 0.8125),
			Edge::new("cat", "big, red", -0.25),
			Edge::new("dog", "big, red", f64::NAN),
		];
		let text = format_longform(&edges);
		assert!(text.starts_with("w1,w2,cosine_similarity\n"));

		let parsed = parse_longform(&text, Path::new("edges.csv")).unwrap();
		assert_eq!(parsed.len(), 3);
		assert_eq!(parsed[0], edges[0]);
		assert_eq!(parsed[1], edges[1]);
		assert!(parsed[2].cosine_similarity.is_nan());
	}

	#[test]
	fn longform_columns_found_by_name() {
		let text = "cosine_similarity,w2,w1\n0.5,b,a\n";
		let parsed = parse_longform(text, Path::new("edges.csv")).unwrap();
		assert_eq!(parsed, vec![Edge::new("a", "b", 0.5)]);
	}

	#[test]
	fn longform_rejects_short_rows_and_bad_numbers() {
		let short = parse_longform("w1,w2,cosine_similarity\na,b\n", Path::new("e.csv")).unwrap_err();
		assert!(matches!(short, NetError::MalformedRecord { line: 2, .. }));

		let bad = parse_longform("w1,w2,cosine_similarity\na,b,high\n", Path::new("e.csv")).unwrap_err();
		assert!(matches!(bad, NetError::MalformedRecord { line: 2, .. }));
	}

	#[test]
	fn save_writes_all_files() {
		use crate::config::StoreConfig;
		use crate::core::{build, EmbeddingStore};
		use std::io::Cursor;

		let store = EmbeddingStore::from_reader(
			Cursor::new("2 2\nup 0 1\nright 1 0\n"),
			Path::new("mem.vec"),
			StoreConfig::new(10, 2),
		)
		.unwrap();
		let network = build(&store, &["up", "right"], 100).unwrap();

		let dir = tempfile::tempdir().unwrap();
		let paths = save_network(dir.path(), &network).unwrap();

		let matrix = fs::read_to_string(&paths.matrix).unwrap();
		assert_eq!(matrix.lines().count(), 2);
		assert_eq!(
			matrix.lines().next().unwrap(),
			"1.000000000000000000e+00 0.000000000000000000e+00"
		);
		assert_eq!(fs::read_to_string(&paths.index).unwrap(), ",word\n0,up\n1,right\n");
		assert_eq!(read_longform(&paths.longform).unwrap(), vec![Edge::new("up", "right", 0.0)]);
	}
}
