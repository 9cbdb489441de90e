use std::path::PathBuf;

use regdump::dump::{ProfileStore, Result};

#[derive(clap::Args)]
pub struct Args {
	/// Directory holding profile files.
	#[arg(long, default_value = "profiles")]
	pub config_dir: PathBuf,
}

/// List available profiles.
pub fn run(args: Args) -> Result<()> {
	let store = ProfileStore::new(args.config_dir);
	store.ensure_defaults()?;

	let names = store.list()?;
	if names.is_empty() {
		println!("no profiles found, run 'regdump reset' to create the defaults");
		return Ok(());
	}

	println!("available profiles:");
	for name in names {
		println!("  {name}");
	}
	println!("use 'regdump run <profile>' to execute a profile");
	Ok(())
}
