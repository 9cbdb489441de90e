#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "regdump", about = "Game registry and block data export tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Execute a data dump using the given profile.
	Run(cmd::run::Args),
	/// List available profiles.
	List(cmd::list::Args),
	/// Reset preset profiles to their default contents.
	Reset(cmd::reset::Args),
}

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("regdump=info")),
		)
		.init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> regdump::dump::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Run(args) => cmd::run::run(args),
		Commands::List(args) => cmd::list::run(args),
		Commands::Reset(args) => cmd::reset::run(args),
	}
}
