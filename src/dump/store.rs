use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::dump::profile::{
	BlocksConfig, ExportConfig, JsonConfig, MultiOutputConfig, NbtConfig, ProfileConfig,
	RegistriesConfig,
};
use crate::dump::{DumpError, Result};

/// Directory-backed store of export profiles, one JSON document per profile.
#[derive(Debug, Clone)]
pub struct ProfileStore {
	dir: PathBuf,
}

impl ProfileStore {
	/// Create a store rooted at `dir`.
	pub fn new(dir: impl Into<PathBuf>) -> Self {
		Self { dir: dir.into() }
	}

	/// Directory holding the profile files.
	pub fn dir(&self) -> &Path {
		&self.dir
	}

	/// Load a profile by name.
	pub fn load(&self, name: &str) -> Result<ProfileConfig> {
		let path = self.profile_path(name);
		if !path.is_file() {
			return Err(DumpError::ProfileNotFound { name: name.to_owned() });
		}
		let contents = fs::read_to_string(&path)?;
		Ok(serde_json::from_str(&contents)?)
	}

	/// List available profile names, sorted.
	pub fn list(&self) -> Result<Vec<String>> {
		let mut names = Vec::new();
		if self.dir.is_dir() {
			for entry in fs::read_dir(&self.dir)? {
				let path = entry?.path();
				if path.extension().is_some_and(|ext| ext == "json")
					&& let Some(stem) = path.file_stem().and_then(|stem| stem.to_str())
				{
					names.push(stem.to_owned());
				}
			}
		}
		names.sort();
		Ok(names)
	}

	/// Write the built-in default profiles, overwriting existing ones.
	pub fn reset(&self) -> Result<()> {
		fs::create_dir_all(&self.dir)?;
		for (name, profile) in default_profiles() {
			let contents = serde_json::to_string_pretty(&profile)?;
			fs::write(self.profile_path(name), contents)?;
		}
		info!(dir = %self.dir.display(), "wrote default profiles");
		Ok(())
	}

	/// Write the default profiles if the store is empty.
	pub fn ensure_defaults(&self) -> Result<()> {
		if self.list()?.is_empty() {
			self.reset()?;
		}
		Ok(())
	}

	fn profile_path(&self, name: &str) -> PathBuf {
		self.dir.join(format!("{name}.json"))
	}
}

fn default_profiles() -> Vec<(&'static str, ProfileConfig)> {
	let combined = ProfileConfig {
		export: ExportConfig {
			format: "json".to_owned(),
			single_file: true,
			filename: "datadump".to_owned(),
			json: Some(JsonConfig { pretty: true }),
			nbt: None,
		},
		blocks: Some(BlocksConfig::default()),
		registries: Some(RegistriesConfig::default()),
		multi_output: None,
	};

	let registries_nbt = ProfileConfig {
		export: ExportConfig {
			format: "nbt".to_owned(),
			single_file: true,
			filename: "registries".to_owned(),
			json: None,
			nbt: Some(NbtConfig { compressed: true }),
		},
		blocks: None,
		registries: Some(RegistriesConfig::default()),
		multi_output: None,
	};

	let split = ProfileConfig {
		export: ExportConfig {
			format: "json".to_owned(),
			single_file: false,
			filename: "datadump".to_owned(),
			json: Some(JsonConfig { pretty: true }),
			nbt: Some(NbtConfig { compressed: true }),
		},
		blocks: Some(BlocksConfig::default()),
		registries: Some(RegistriesConfig::default()),
		multi_output: Some(
			[
				(
					"blocks".to_owned(),
					MultiOutputConfig { format: "json".to_owned(), file: "blocks".to_owned() },
				),
				(
					"registries".to_owned(),
					MultiOutputConfig { format: "nbt".to_owned(), file: "registries".to_owned() },
				),
			]
			.into_iter()
			.collect(),
		),
	};

	vec![("default", combined), ("registries_nbt", registries_nbt), ("split", split)]
}

#[cfg(test)]
mod tests;
