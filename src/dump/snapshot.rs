use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::dump::Result;
use crate::dump::decode::{TagKind, TagView, decode_root};
use crate::dump::provider::{
	BlockInfo, BlockProvider, BlockStateInfo, PropertyInfo, RegistryEntry, RegistryInfo,
	RegistryProvider,
};

/// Captured game dataset loaded from a snapshot file.
///
/// Snapshots stand in for a live game process: they carry the block and
/// registry collections a platform provider would otherwise enumerate, with
/// codec-derived element payloads kept as raw JSON and decoded through the
/// tag-inspection contract on demand.
#[derive(Debug, Default, Deserialize)]
pub struct Snapshot {
	/// Captured block collection.
	#[serde(default)]
	pub blocks: Vec<SnapshotBlock>,
	/// Captured registry collection.
	#[serde(default)]
	pub registries: Vec<SnapshotRegistry>,
}

/// One captured block.
#[derive(Debug, Deserialize)]
pub struct SnapshotBlock {
	/// Namespaced identifier.
	pub identifier: String,
	/// Property definitions.
	#[serde(default)]
	pub properties: Vec<SnapshotProperty>,
	/// Possible states.
	#[serde(default)]
	pub states: Vec<SnapshotState>,
}

/// One captured block property definition.
#[derive(Debug, Deserialize)]
pub struct SnapshotProperty {
	/// Property name.
	pub name: String,
	/// Possible values.
	pub values: Vec<String>,
}

/// One captured block state.
#[derive(Debug, Deserialize)]
pub struct SnapshotState {
	/// Protocol-level state id.
	pub id: i32,
	/// Property assignments for this state.
	#[serde(default)]
	pub properties: BTreeMap<String, String>,
	/// Whether this is the default state.
	#[serde(default)]
	pub default: bool,
}

/// One captured registry.
#[derive(Debug, Deserialize)]
pub struct SnapshotRegistry {
	/// Namespaced registry identifier.
	pub identifier: String,
	/// Entries in registration order.
	#[serde(default)]
	pub entries: Vec<SnapshotEntry>,
}

/// One captured registry entry.
#[derive(Debug, Deserialize)]
pub struct SnapshotEntry {
	/// Namespaced entry identifier.
	pub name: String,
	/// Raw protocol id.
	pub id: i32,
	/// Codec-derived payload as captured, if any.
	#[serde(default)]
	pub element: Option<Value>,
}

/// Snapshot-backed implementation of both provider contracts.
#[derive(Debug)]
pub struct SnapshotProvider {
	snapshot: Snapshot,
}

impl SnapshotProvider {
	/// Wrap an already-loaded snapshot.
	pub fn new(snapshot: Snapshot) -> Self {
		Self { snapshot }
	}

	/// Load a snapshot file.
	pub fn load(path: &Path) -> Result<Self> {
		let contents = fs::read_to_string(path)?;
		Ok(Self::new(serde_json::from_str(&contents)?))
	}
}

impl BlockProvider for SnapshotProvider {
	fn all_blocks(&self) -> Result<Vec<BlockInfo>> {
		Ok(self
			.snapshot
			.blocks
			.iter()
			.map(|block| BlockInfo {
				identifier: block.identifier.clone(),
				properties: block
					.properties
					.iter()
					.map(|property| PropertyInfo {
						name: property.name.clone(),
						values: property.values.clone(),
					})
					.collect(),
				states: block
					.states
					.iter()
					.map(|state| BlockStateInfo {
						state_id: state.id,
						properties: state
							.properties
							.iter()
							.map(|(name, value)| (name.clone(), value.clone()))
							.collect(),
						is_default: state.default,
					})
					.collect(),
			})
			.collect())
	}
}

impl RegistryProvider for SnapshotProvider {
	fn all_registries(&self) -> Result<Vec<RegistryInfo>> {
		Ok(self
			.snapshot
			.registries
			.iter()
			.map(|registry| RegistryInfo {
				identifier: registry.identifier.clone(),
				entries: registry
					.entries
					.iter()
					.map(|entry| RegistryEntry {
						identifier: entry.name.clone(),
						raw_id: entry.id,
						encoded: decode_element(&entry.name, entry.element.as_ref()),
					})
					.collect(),
			})
			.collect())
	}
}

fn decode_element(
	identifier: &str,
	element: Option<&Value>,
) -> Option<crate::dump::value::Compound> {
	match element {
		Some(Value::Null) | None => {
			debug!(identifier, "no codec data for entry");
			None
		}
		Some(value) => Some(decode_root(value)),
	}
}

/// JSON values satisfy the tag-inspection contract: objects are compounds,
/// arrays are lists, booleans decode as bytes (the tag model has no boolean
/// kind), and integers pick int or long width by magnitude. Null children are
/// skipped by compound iteration, as the contract requires.
impl TagView for Value {
	fn kind(&self) -> TagKind {
		match self {
			Value::Object(_) => TagKind::Compound,
			Value::Array(_) => TagKind::List,
			Value::String(_) => TagKind::String,
			Value::Bool(_) => TagKind::Byte,
			Value::Number(number) => {
				if let Some(int) = number.as_i64() {
					if i32::try_from(int).is_ok() { TagKind::Int } else { TagKind::Long }
				} else if number.is_u64() {
					TagKind::Long
				} else {
					TagKind::Double
				}
			}
			Value::Null => TagKind::Other,
		}
	}

	fn as_byte(&self) -> i8 {
		match self {
			Value::Bool(flag) => i8::from(*flag),
			Value::Number(number) => number.as_i64().unwrap_or(0) as i8,
			_ => 0,
		}
	}

	fn as_short(&self) -> i16 {
		self.as_i64().unwrap_or(0) as i16
	}

	fn as_int(&self) -> i32 {
		self.as_i64().unwrap_or(0) as i32
	}

	fn as_long(&self) -> i64 {
		self.as_i64().unwrap_or_else(|| self.as_u64().unwrap_or(0) as i64)
	}

	fn as_float(&self) -> f32 {
		self.as_f64().unwrap_or(0.0) as f32
	}

	fn as_double(&self) -> f64 {
		self.as_f64().unwrap_or(0.0)
	}

	fn as_string(&self) -> String {
		match self {
			Value::String(text) => text.clone(),
			Value::Bool(flag) => flag.to_string(),
			Value::Number(number) => number.to_string(),
			Value::Null => "null".to_owned(),
			_ => String::new(),
		}
	}

	fn as_byte_array(&self) -> Vec<i8> {
		Vec::new()
	}

	fn as_int_array(&self) -> Vec<i32> {
		Vec::new()
	}

	fn as_long_array(&self) -> Vec<i64> {
		Vec::new()
	}

	fn compound_entries(&self) -> Vec<(String, &Self)> {
		match self {
			Value::Object(map) => map
				.iter()
				.filter(|(_, value)| !value.is_null())
				.map(|(key, value)| (key.clone(), value))
				.collect(),
			_ => Vec::new(),
		}
	}

	fn list_items(&self) -> Vec<&Self> {
		match self {
			Value::Array(items) => items.iter().collect(),
			_ => Vec::new(),
		}
	}
}

#[cfg(test)]
mod tests;
