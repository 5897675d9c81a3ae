use clap::{builder::Styles, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{DEFAULT_CANVAS_PX, DEFAULT_WORDLIST, DEFAULT_WORD_LIMIT, EMBEDDING_DIM, LONGFORM_FILE, MAX_VOCABULARY};

fn parse_positive(s: &str) -> Result<usize, String> {
	let val: usize = s.parse().map_err(|_| format!("'{}' is not a valid count", s))?;
	if val == 0 {
		Err("value must be at least 1".to_string())
	} else {
		Ok(val)
	}
}

fn styles() -> Styles {
	Styles::styled()
		.header(anstyle::Style::new().bold().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))))
		.usage(anstyle::Style::new().bold().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))))
		.literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))))
		.placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))))
		.valid(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))))
		.invalid(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))))
}

#[derive(Parser, Debug)]
#[command(
	name = "semnet",
	author,
	version,
	about = "Semantic similarity networks from word embeddings",
	styles = styles(),
	disable_help_subcommand = true,
	after_help = format!(
		"{title}
  {semnet} {network}  {network_args}   {network_desc}
  {semnet} {draw}     {draw_args}                {draw_desc}
  {semnet} {help}     {help_args}                     {help_desc}",
		title = "Examples:".bright_blue().bold(),
		semnet = "semnet".bright_blue(),
		network = "network".yellow(),
		network_args = "-v wiki.en.vec -w wordlist.csv",
		network_desc = "Build the similarity network".dimmed(),
		draw = "draw".yellow(),
		draw_args = "-f network-longform.csv -H",
		draw_desc = "Draw it, highlighting outliers".dimmed(),
		help = "help".yellow(),
		help_args = "draw",
		help_desc = "Show help for draw".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(long = "verbose", global = true)]
	pub verbose: bool,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Compute pairwise cosine similarities for a word list
	Network {
		/// Embedding file (.vec text format); falls back to $SEMNET_VECTORS, then wiki.en.vec
		#[arg(short = 'v', long = "vecfile", value_name = "PATH")]
		vecfile: Option<PathBuf>,

		/// CSV file with a `word` column
		#[arg(short = 'w', long = "wordlist", value_name = "PATH", default_value = DEFAULT_WORDLIST)]
		wordlist: PathBuf,

		/// Only consider the first N rows of the word list
		#[arg(short = 'n', long = "limit", default_value_t = DEFAULT_WORD_LIMIT, value_parser = parse_positive)]
		limit: usize,

		/// Directory for the matrix, index and long-form files
		#[arg(short = 'o', long = "out", default_value = ".")]
		out_dir: PathBuf,

		/// Maximum number of embedding rows to load
		#[arg(long = "capacity", default_value_t = MAX_VOCABULARY, value_parser = parse_positive)]
		capacity: usize,

		/// Vector dimension of the embedding file
		#[arg(long = "dim", default_value_t = EMBEDDING_DIM, value_parser = parse_positive)]
		dimension: usize,

		/// Also write a JSON summary of the network ("-" for stdout)
		#[arg(long = "export", value_name = "PATH")]
		export: Option<PathBuf>,
	},

	/// Draw a long-form edge list as a radial chord diagram
	Draw {
		/// Long-form edge list (w1, w2, cosine_similarity)
		#[arg(short = 'f', long = "file", value_name = "PATH", default_value = LONGFORM_FILE)]
		file: PathBuf,

		/// Highlight edges above mean + 2 standard deviations
		#[arg(short = 'H', long = "highlight")]
		highlight: bool,

		/// Output SVG path (defaults to radial-network.svg next to the input)
		#[arg(short = 'o', long = "out", value_name = "PATH")]
		output: Option<PathBuf>,

		/// Canvas width and height in pixels
		#[arg(long = "size", default_value_t = DEFAULT_CANVAS_PX)]
		size: u32,
	},

	/// Show help for a subcommand
	Help {
		/// Subcommand name
		subcommand: Option<String>,
	},
}
