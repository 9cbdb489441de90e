use std::path::PathBuf;

use regdump::dump::{ProfileStore, Result};

#[derive(clap::Args)]
pub struct Args {
	/// Directory holding profile files.
	#[arg(long, default_value = "profiles")]
	pub config_dir: PathBuf,
}

/// Reset preset profiles to their default contents.
pub fn run(args: Args) -> Result<()> {
	let store = ProfileStore::new(args.config_dir);
	store.reset()?;
	println!("profiles have been reset to defaults at: {}", store.dir().display());
	Ok(())
}
