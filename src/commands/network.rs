//! # Network Command
//!
//! Load the embedding model, keep the requested words it knows, and write
//! the dense similarity matrix, its row index and the long-form edge list.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;

use crate::config::{self, StoreConfig};
use crate::core::{EmbeddingStore, Edge, SimilarityNetwork};
use crate::processing::SimilarityStats;
use crate::storage;
use crate::ui;

#[derive(Debug, Serialize)]
struct NetworkExport<'a> {
	timestamp: String,
	words: &'a [String],
	missing: &'a [String],
	degenerate: Vec<&'a str>,
	pairs: usize,
	stats: SimilarityStats,
	edges: &'a [Edge],
}

#[derive(Debug)]
pub struct NetworkArgs {
	pub vecfile: Option<PathBuf>,
	pub wordlist: PathBuf,
	pub limit: usize,
	pub out_dir: PathBuf,
	pub store: StoreConfig,
	pub export: Option<PathBuf>,
}

pub fn run(args: NetworkArgs) -> Result<()> {
	let start = Instant::now();
	let vecfile = config::vector_file(args.vecfile);

	ui::header("Computing Semantic Network");
	ui::info(&format!("Preprocessing > Retrieving semantic model from {}", ui::path_link(&vecfile, 40)));
	ui::debug(&format!(
		"Store capacity {} rows of {}D",
		args.store.capacity, args.store.dimension
	));
	let load_start = Instant::now();
	let store = EmbeddingStore::load(&vecfile, args.store)
		.with_context(|| format!("Failed to load embeddings from {}", vecfile.display()))?;
	ui::success(&format!(
		"Loaded {} vectors in {:.2}s",
		store.len(),
		load_start.elapsed().as_secs_f32()
	));

	ui::info(&format!("Preprocessing > Reading words from {}", ui::path_link(&args.wordlist, 40)));
	let requested = storage::read_word_list(&args.wordlist)
		.with_context(|| format!("Failed to read word list {}", args.wordlist.display()))?;

	ui::info("Compute > Looping over network");
	let network = crate::core::build(&store, &requested, args.limit)?;
	if !network.missing.is_empty() {
		ui::warn(&format!("{} words not in the model were skipped", network.missing.len()));
	}

	let n = network.words.len();
	if n < 2 {
		ui::warn(&format!("Only {} known words; the network has no edges", n));
	}

	ui::info(&format!("Save > Writing network to {}", args.out_dir.display()));
	let paths = storage::save_network(&args.out_dir, &network).context("Failed to save network")?;
	ui::success(&format!("Matrix form: {}", ui::path_link(&paths.matrix, 60)));
	ui::success(&format!("Row index: {}", ui::path_link(&paths.index, 60)));
	ui::success(&format!("Long form: {}", ui::path_link(&paths.longform, 60)));

	let stats = SimilarityStats::from_values(network.edges.iter().map(|e| e.cosine_similarity));

	if let Some(export_path) = &args.export {
		export_network(&network, stats, export_path)?;
	}

	print_summary(&network, &stats, start.elapsed().as_secs_f32());
	Ok(())
}

fn export_network(network: &SimilarityNetwork, stats: SimilarityStats, export_path: &Path) -> Result<()> {
	let export_data = NetworkExport {
		timestamp: chrono::Local::now().to_rfc3339(),
		words: network.words.as_slice(),
		missing: &network.missing,
		degenerate: network.degenerate_words(),
		pairs: network.edges.len(),
		stats,
		edges: &network.edges,
	};

	let json = serde_json::to_string_pretty(&export_data)?;
	if export_path.to_str() == Some("-") || export_path.as_os_str().is_empty() {
		println!("{}", json);
	} else {
		std::fs::write(export_path, json)
			.with_context(|| format!("Failed to write export {}", export_path.display()))?;
		ui::success(&format!("Exported to {}", export_path.display()));
	}

	Ok(())
}

fn print_summary(network: &SimilarityNetwork, stats: &SimilarityStats, duration_secs: f32) {
	ui::header("Summary");
	ui::stat("Words", network.words.len());
	ui::stat("Pairs", network.edges.len());
	if !network.missing.is_empty() {
		ui::stat("Skipped", network.missing.len().to_string().yellow());
	}
	let degenerate = network.degenerate_words();
	if !degenerate.is_empty() {
		ui::stat("Zero vectors", degenerate.len().to_string().red());
	}
	if stats.count > 0 {
		ui::stat(
			"Similarity",
			format!(
				"mean {} sd {:.3} range [{}, {}]",
				ui::log::similarity_colored(stats.mean),
				stats.std_dev,
				ui::log::similarity_colored(stats.min),
				ui::log::similarity_colored(stats.max)
			),
		);
	}
	ui::stat("Duration", format!("{:.2}s", duration_secs));
	eprintln!();
}
