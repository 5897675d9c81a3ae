//! # Draw Command
//!
//! Render a long-form edge list as a radial chord diagram.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use colored::*;

use crate::config::DIAGRAM_FILE;
use crate::processing::{self, NodeLayout, RenderOptions};
use crate::storage;
use crate::ui;

/// Strong edges listed in verbose mode
const STRONG_PREVIEW: usize = 10;

pub fn run(file: &Path, highlight: bool, output: Option<&Path>, size: u32) -> Result<()> {
	let start = Instant::now();
	let output = output.map(Path::to_path_buf).unwrap_or_else(|| default_output(file));

	ui::info(&format!("Reading edges from {}", ui::path_link(file, 60)));
	let edges = storage::read_longform(file).with_context(|| format!("Failed to read edge list {}", file.display()))?;

	let layout = NodeLayout::from_edges(&edges);
	ui::debug(&format!("Laying out {} nodes and {} edges", layout.len(), edges.len()));

	let options = RenderOptions {
		highlight,
		canvas_px: size,
		..RenderOptions::default()
	};
	let diagram = processing::render(&edges, &layout, &options).context("Failed to draw network")?;

	let nan_edges = diagram.arcs.iter().filter(|a| a.similarity.is_nan()).count();
	if nan_edges > 0 {
		ui::warn(&format!("{} edges have undefined similarity and are drawn transparent", nan_edges));
	}

	if let Some(threshold) = diagram.threshold {
		let mut strong: Vec<_> = diagram.strong_arcs().collect();
		ui::info(&format!(
			"Highlighting {} edges above {}",
			strong.len(),
			format!("{:.3}", threshold).bright_yellow()
		));

		strong.sort_by(|a, b| b.similarity.partial_cmp(&a.similarity).unwrap_or(std::cmp::Ordering::Equal));
		for styled in strong.iter().take(STRONG_PREVIEW) {
			ui::debug(&format!(
				"{} - {} {}",
				styled.w1,
				styled.w2,
				ui::log::similarity_colored(styled.similarity)
			));
		}
	}

	std::fs::write(&output, diagram.to_svg()).with_context(|| format!("Failed to write {}", output.display()))?;

	ui::success(&format!(
		"Drew {} arcs between {} nodes in {:.2}s",
		diagram.arcs.len(),
		diagram.nodes.len(),
		start.elapsed().as_secs_f32()
	));
	ui::success(&format!("Diagram: {}", ui::path_link(&output, 60)));

	Ok(())
}

fn default_output(input: &Path) -> PathBuf {
	input
		.parent()
		.map(|dir| dir.join(DIAGRAM_FILE))
		.unwrap_or_else(|| PathBuf::from(DIAGRAM_FILE))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn diagram_lands_next_to_input() {
		assert_eq!(
			default_output(Path::new("runs/a/network-longform.csv")),
			PathBuf::from("runs/a/radial-network.svg")
		);
		assert_eq!(default_output(Path::new("edges.csv")), PathBuf::from("radial-network.svg"));
	}

	#[test]
	fn draws_svg_file() {
		let dir = tempfile::tempdir().unwrap();
		let edges = dir.path().join("edges.csv");
		std::fs::write(&edges, "w1,w2,cosine_similarity\na,b,0.5\na,c,0.9\nb,c,0.1\n").unwrap();

		run(&edges, true, None, 400).unwrap();
		let svg = std::fs::read_to_string(dir.path().join(DIAGRAM_FILE)).unwrap();
		assert_eq!(svg.matches("<polyline").count(), 3);
		assert_eq!(svg.matches("<text").count(), 3);
	}

	#[test]
	fn empty_edge_list_fails() {
		let dir = tempfile::tempdir().unwrap();
		let edges = dir.path().join("edges.csv");
		std::fs::write(&edges, "w1,w2,cosine_similarity\n").unwrap();
		let out = dir.path().join("out.svg");

		assert!(run(&edges, false, Some(&out), 400).is_err());
		assert!(!out.exists());
	}
}
