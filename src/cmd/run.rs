use std::path::PathBuf;

use regdump::dump::{DumpError, ProfileStore, Providers, Result, SnapshotProvider, run_profile};

#[derive(clap::Args)]
pub struct Args {
	/// Profile name to execute.
	pub profile: String,
	/// Snapshot file holding the captured block and registry collections.
	#[arg(long)]
	pub snapshot: PathBuf,
	/// Directory holding profile files.
	#[arg(long, default_value = "profiles")]
	pub config_dir: PathBuf,
	/// Directory to write dump output into.
	#[arg(long, default_value = "datadump")]
	pub out_dir: PathBuf,
}

/// Execute one dump run against a snapshot dataset.
pub fn run(args: Args) -> Result<()> {
	let Args { profile, snapshot, config_dir, out_dir } = args;

	let store = ProfileStore::new(config_dir);
	store.ensure_defaults()?;

	let provider = SnapshotProvider::load(&snapshot)?;
	let providers = Providers { blocks: &provider, registries: &provider };

	let outcome = run_profile(&store, &profile, &providers, &out_dir);
	if !outcome.is_success() {
		return Err(DumpError::RunFailed { message: outcome.message });
	}
	println!("{}", outcome.message);
	Ok(())
}
