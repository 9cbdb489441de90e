use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::dump::builder::TreeBuilder;
use crate::dump::json_builder::JsonBuilder;
use crate::dump::nbt::TagCompound;
use crate::dump::nbt_builder::NbtBuilder;
use crate::dump::output::{ensure_parent_dir, write_json_file};
use crate::dump::profile::{DumpFormat, ExportConfig, ProfileConfig};
use crate::dump::provider::{BlockProvider, RegistryProvider};
use crate::dump::store::ProfileStore;
use crate::dump::{DumpError, Result, block_dump, nbt, registry_dump};

/// Collaborators a dump run needs, passed in explicitly by the caller.
pub struct Providers<'a> {
	/// Source of the block collection.
	pub blocks: &'a dyn BlockProvider,
	/// Source of the registry collection.
	pub registries: &'a dyn RegistryProvider,
}

/// Severity of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
	/// Run completed; output was produced.
	Success,
	/// Run failed; no usable output.
	Error,
	/// Informational result with no output.
	Info,
}

/// User-visible result of one dump run.
#[derive(Debug, Clone)]
pub struct Outcome {
	/// Result severity.
	pub kind: OutcomeKind,
	/// Human-readable summary.
	pub message: String,
}

impl Outcome {
	/// Successful run.
	pub fn success(message: impl Into<String>) -> Self {
		Self { kind: OutcomeKind::Success, message: message.into() }
	}

	/// Failed run.
	pub fn error(message: impl Into<String>) -> Self {
		Self { kind: OutcomeKind::Error, message: message.into() }
	}

	/// Informational result.
	pub fn info(message: impl Into<String>) -> Self {
		Self { kind: OutcomeKind::Info, message: message.into() }
	}

	/// Whether the run did not fail.
	pub fn is_success(&self) -> bool {
		self.kind != OutcomeKind::Error
	}
}

/// Load `profile_name` from the store and execute it, writing output files
/// under `out_dir`.
pub fn run_profile(
	store: &ProfileStore,
	profile_name: &str,
	providers: &Providers<'_>,
	out_dir: &Path,
) -> Outcome {
	let profile = match store.load(profile_name) {
		Ok(profile) => profile,
		Err(err) => {
			error!(profile = profile_name, %err, "failed to load profile");
			return Outcome::error(format!("failed to run data dump: {err}"));
		}
	};

	if profile.export.single_file {
		run_single_file(&profile, providers, out_dir)
	} else {
		run_multi_file(&profile, providers, out_dir)
	}
}

fn run_single_file(profile: &ProfileConfig, providers: &Providers<'_>, out_dir: &Path) -> Outcome {
	match generate_combined(profile, providers, out_dir) {
		Ok(path) => Outcome::success(format!(
			"data dump completed successfully, file saved to: {}",
			path.display()
		)),
		Err(err) => {
			error!(%err, "failed to run single-file dump");
			Outcome::error(format!("failed to run dump: {err}"))
		}
	}
}

/// Combined dump: one file whose root carries a sub-tree per enabled section.
fn generate_combined(
	profile: &ProfileConfig,
	providers: &Providers<'_>,
	out_dir: &Path,
) -> Result<PathBuf> {
	// Format dispatch happens before any provider work.
	let format = DumpFormat::parse(&profile.export.format)?;
	let path = out_dir.join(resolve_filename(&profile.export.filename, format));
	ensure_parent_dir(&path)?;
	info!(path = %path.display(), "running combined data dump");

	match format {
		DumpFormat::Json => {
			let mut builder = JsonBuilder::new();
			let root = build_combined(profile, providers, &mut builder)?;
			write_json_file(&path, &builder.finish(root), profile.export.pretty())?;
		}
		DumpFormat::Nbt => {
			let mut builder = NbtBuilder::new(TagCompound::new());
			build_combined(profile, providers, &mut builder)?;
			nbt::write_file(&builder.finish(), &path, profile.export.compressed())?;
		}
	}

	info!(path = %path.display(), "dumped combined data");
	Ok(path)
}

fn build_combined<B: TreeBuilder>(
	profile: &ProfileConfig,
	providers: &Providers<'_>,
	builder: &mut B,
) -> Result<B::Node> {
	// Claim the root before building sections so each section gets its own
	// nested node rather than the root itself.
	let root = builder.create_object();

	if profile.blocks.is_some() {
		let blocks = providers.blocks.all_blocks()?;
		info!(count = blocks.len(), "building blocks section");
		let section = block_dump::build_block_data(&blocks, profile, builder);
		builder.add_to_object(root, "blocks", section);
	}

	if profile.registries.is_some() {
		let registries = providers.registries.all_registries()?;
		info!(count = registries.len(), "building registries section");
		let section = registry_dump::build_registry_data(&registries, profile, builder);
		builder.add_to_object(root, "registries", section);
	}

	Ok(root)
}

fn run_multi_file(profile: &ProfileConfig, providers: &Providers<'_>, out_dir: &Path) -> Outcome {
	let mut success_count = 0_usize;
	let mut fail_count = 0_usize;

	if let Some(outputs) = &profile.multi_output {
		for (category, output) in outputs {
			let result = run_category(
				category,
				output.format.as_str(),
				output.file.as_str(),
				profile,
				providers,
				out_dir,
			);
			match result {
				Ok(true) => success_count += 1,
				Ok(false) => {}
				Err(err) => {
					error!(category, %err, "failed to dump category");
					fail_count += 1;
				}
			}
		}
	}

	if success_count == 0 && fail_count == 0 {
		return Outcome::error(DumpError::NoOutputs.to_string());
	}
	if fail_count > 0 {
		Outcome::success(format!(
			"data dump completed with errors, success: {success_count}, failed: {fail_count}"
		))
	} else {
		Outcome::success(format!(
			"data dump completed successfully, generated {success_count} file(s) in: {}",
			out_dir.display()
		))
	}
}

/// Run one multi-output category. Returns `Ok(false)` for unknown categories,
/// which are skipped without counting as failures.
fn run_category(
	category: &str,
	format: &str,
	file: &str,
	profile: &ProfileConfig,
	providers: &Providers<'_>,
	out_dir: &Path,
) -> Result<bool> {
	let parsed = DumpFormat::parse(format)?;
	let path = out_dir.join(resolve_filename(file, parsed));

	// Per-category profile: the category's format with the parent profile's
	// format-specific settings carried over.
	let mut scoped = ProfileConfig {
		export: ExportConfig {
			format: format.to_owned(),
			single_file: true,
			filename: file.to_owned(),
			json: profile.export.json.clone(),
			nbt: profile.export.nbt.clone(),
		},
		blocks: None,
		registries: None,
		multi_output: None,
	};

	match category {
		"blocks" => {
			scoped.blocks = profile.blocks.clone();
			info!(category, path = %path.display(), "running category dump");
			block_dump::generate_dump(&path, &scoped, providers.blocks)?;
			Ok(true)
		}
		"registries" => {
			scoped.registries = profile.registries.clone();
			info!(category, path = %path.display(), "running category dump");
			registry_dump::generate_dump(&path, &scoped, providers.registries)?;
			Ok(true)
		}
		_ => {
			warn!(category, "unknown category, skipping");
			Ok(false)
		}
	}
}

fn resolve_filename(name: &str, format: DumpFormat) -> String {
	if name.contains('.') { name.to_owned() } else { format!("{name}.{}", format.extension()) }
}
