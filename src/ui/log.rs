//! Unified logging system

use chrono::Local;
use colored::*;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

const LOGO: &str = r#"
                                 __
   ________  ____ ___  ____  ___/ /_
  / ___/ _ \/ __ `__ \/ __ \/ _ \ __/
 (__  )  __/ / / / / / / / /  __/ /_
/____/\___/_/ /_/ /_/_/ /_/\___/\__/  "#;

const SLOGANS: &[&str] = &[
	"You shall know a word by the company it keeps",
	"Three hundred dimensions, one circle",
	"king - man + woman = chord diagram",
	"Cosines all the way down",
	"Every word, every pair, no shortcuts",
	"Bezier curves for distributional semantics",
	"Now with 4950 unique non-identical pairs",
	"Turning word vectors into spaghetti since today",
];

pub fn random_slogan() -> &'static str {
	let idx = rand::rng().random_range(0..SLOGANS.len());
	SLOGANS[idx]
}

pub fn print_logo() {
	eprintln!("{}", LOGO.bright_blue().bold());
	eprintln!("{}", random_slogan().dimmed().italic());
}

pub struct Log;

impl Log {
	pub fn set_verbose(enabled: bool) {
		VERBOSE.store(enabled, Ordering::Relaxed);
	}

	pub fn is_verbose() -> bool {
		VERBOSE.load(Ordering::Relaxed)
	}
}

fn timestamp() -> ColoredString {
	Local::now().format("%H:%M:%S").to_string().dimmed()
}

pub fn info(msg: &str) {
	eprintln!("[{}] {} {}", timestamp(), "ℹ".bright_blue().bold(), msg.bright_white());
}

pub fn success(msg: &str) {
	eprintln!("[{}] {} {}", timestamp(), "✓".bright_green().bold(), msg.bright_white());
}

pub fn warn(msg: &str) {
	eprintln!("[{}] {} {}", timestamp(), "⚠".bright_yellow().bold(), msg.bright_white());
}

pub fn error(msg: &str) {
	eprintln!("[{}] {} {}", timestamp(), "✗".bright_red().bold(), msg.bright_white());
}

pub fn debug(msg: &str) {
	if Log::is_verbose() {
		eprintln!("[{}] {} {}", timestamp(), "⚙".bright_black().bold(), msg.dimmed());
	}
}

pub fn header(text: &str) {
	eprintln!("\n{}", format!("─── {} ───", text).bright_blue().bold());
}

/// Clickable file path (OSC 8 terminal hyperlink)
pub fn path_link(path: &std::path::Path, max_len: usize) -> String {
	let absolute = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

	let uri = if cfg!(windows) {
		let path_str = absolute.to_string_lossy();
		let cleaned = path_str.strip_prefix(r"\\?\").unwrap_or(&path_str);
		format!("file:///{}", cleaned.replace('\\', "/"))
	} else {
		format!("file://{}", absolute.display())
	};

	let filename = path
		.file_name()
		.and_then(|n| n.to_str())
		.unwrap_or("unknown");

	let display_name = if filename.chars().count() > max_len {
		let head: String = filename.chars().take(max_len / 2).collect();
		let tail_len = (max_len / 2).saturating_sub(3);
		let tail: String = filename.chars().rev().take(tail_len).collect::<Vec<_>>().into_iter().rev().collect();
		format!("{}...{}", head, tail)
	} else {
		filename.to_string()
	};

	format!("\x1b]8;;{}\x1b\\{}\x1b]8;;\x1b\\", uri, display_name)
}

/// Key/value line inside a summary block
pub fn stat(label: &str, value: impl std::fmt::Display) {
	eprintln!("  {} {}", format!("{}:", label).bright_blue(), value);
}

/// Color a similarity from red (low) through yellow to green (high)
pub fn similarity_colored(value: f64) -> ColoredString {
	let text = format!("{:.3}", value);
	if value.is_nan() {
		text.dimmed()
	} else if value >= 0.6 {
		text.bright_green()
	} else if value >= 0.3 {
		text.yellow()
	} else {
		text.red()
	}
}
