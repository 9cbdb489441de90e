use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dump::{DumpError, Result};

/// Resolved output format for one dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DumpFormat {
	/// Textual JSON document.
	Json,
	/// Binary tag stream.
	Nbt,
}

impl DumpFormat {
	/// Resolve a profile format string, case-insensitively.
	///
	/// The reserved `binary` packed mode and any unrecognized value both fail
	/// here, before any provider or builder work begins.
	pub fn parse(format: &str) -> Result<Self> {
		match format.to_lowercase().as_str() {
			"json" => Ok(Self::Json),
			"nbt" => Ok(Self::Nbt),
			"binary" => Err(DumpError::BinaryFormatUnimplemented),
			_ => Err(DumpError::UnknownFormat { format: format.to_owned() }),
		}
	}

	/// Default output file extension for this format.
	pub fn extension(self) -> &'static str {
		match self {
			Self::Json => "json",
			Self::Nbt => "nbt",
		}
	}
}

/// Export profile controlling what gets dumped, where, and in which format.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileConfig {
	/// Output format and file settings.
	#[serde(default)]
	pub export: ExportConfig,
	/// Block dump settings; block data is skipped when absent.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub blocks: Option<BlocksConfig>,
	/// Registry dump settings; registry data is skipped when absent.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub registries: Option<RegistriesConfig>,
	/// Per-category outputs for multi-file mode, keyed by category name.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub multi_output: Option<BTreeMap<String, MultiOutputConfig>>,
}

/// Output format and file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
	/// Requested format: `json`, `nbt`, or the rejected `binary`.
	pub format: String,
	/// Whether everything goes into one combined file.
	#[serde(default = "default_true")]
	pub single_file: bool,
	/// Output filename; the format's extension is appended if missing.
	#[serde(default = "default_filename")]
	pub filename: String,
	/// JSON-specific settings.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub json: Option<JsonConfig>,
	/// Binary-tag-specific settings.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub nbt: Option<NbtConfig>,
}

impl Default for ExportConfig {
	fn default() -> Self {
		Self {
			format: "json".to_owned(),
			single_file: true,
			filename: default_filename(),
			json: None,
			nbt: None,
		}
	}
}

impl ExportConfig {
	/// Whether JSON output should be pretty-printed.
	pub fn pretty(&self) -> bool {
		self.json.as_ref().is_some_and(|json| json.pretty)
	}

	/// Whether binary tag output should be gzip-compressed.
	pub fn compressed(&self) -> bool {
		self.nbt.as_ref().is_some_and(|nbt| nbt.compressed)
	}
}

/// JSON output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JsonConfig {
	/// Pretty-print the document.
	#[serde(default)]
	pub pretty: bool,
}

/// Binary tag output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NbtConfig {
	/// Gzip-compress the stream.
	#[serde(default)]
	pub compressed: bool,
}

/// Block dump settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlocksConfig {
	/// Include each block's property definitions.
	#[serde(default = "default_true")]
	pub properties: bool,
	/// Include each block's possible states.
	#[serde(default = "default_true")]
	pub states: bool,
}

impl Default for BlocksConfig {
	fn default() -> Self {
		Self { properties: true, states: true }
	}
}

/// Registry dump settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistriesConfig {
	/// Include codec-derived element payloads.
	#[serde(default = "default_true")]
	pub codec: bool,
}

impl Default for RegistriesConfig {
	fn default() -> Self {
		Self { codec: true }
	}
}

/// One category output in multi-file mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiOutputConfig {
	/// Requested format for this category.
	pub format: String,
	/// Output filename for this category.
	pub file: String,
}

fn default_true() -> bool {
	true
}

fn default_filename() -> String {
	"datadump".to_owned()
}
