//! semnet - semantic similarity networks from word embeddings
//!
//! A command-line tool that computes all-pairs cosine similarity for a word
//! list and draws the resulting network as a radial chord diagram.

use anyhow::Result;
use clap::{CommandFactory, Parser};

use semnet::cli::{Cli, Command};
use semnet::commands::{self, network::NetworkArgs};
use semnet::config::StoreConfig;
use semnet::ui::{self, Log};

fn main() {
	if let Err(e) = run() {
		ui::error(&format!("{:#}", e));
		std::process::exit(1);
	}
}

fn run() -> Result<()> {
	let cli = Cli::parse();
	Log::set_verbose(cli.verbose);

	match cli.command {
		Command::Network {
			vecfile,
			wordlist,
			limit,
			out_dir,
			capacity,
			dimension,
			export,
		} => {
			ui::print_logo();
			commands::network::run(NetworkArgs {
				vecfile,
				wordlist,
				limit,
				out_dir,
				store: StoreConfig::new(capacity, dimension),
				export,
			})
		}
		Command::Draw {
			file,
			highlight,
			output,
			size,
		} => commands::draw::run(&file, highlight, output.as_deref(), size),
		Command::Help { subcommand } => {
			let mut cmd = Cli::command();
			if let Some(sub) = subcommand {
				if let Some(sub_cmd) = cmd.find_subcommand_mut(&sub) {
					sub_cmd.print_help()?;
				} else {
					ui::warn(&format!("Unknown subcommand: {}", sub));
					cmd.print_help()?;
				}
			} else {
				cmd.print_help()?;
			}
			Ok(())
		}
	}
}
