use crate::dump::Result;
use crate::dump::value::Compound;

/// One registered block with its property definitions and states.
#[derive(Debug, Clone)]
pub struct BlockInfo {
	/// Namespaced identifier, e.g. `minecraft:stone`.
	pub identifier: String,
	/// Property definitions in declaration order.
	pub properties: Vec<PropertyInfo>,
	/// All possible states in registration order.
	pub states: Vec<BlockStateInfo>,
}

/// One block property definition.
#[derive(Debug, Clone)]
pub struct PropertyInfo {
	/// Property name.
	pub name: String,
	/// Possible values in declaration order.
	pub values: Vec<String>,
}

/// One concrete block state.
#[derive(Debug, Clone)]
pub struct BlockStateInfo {
	/// Protocol-level state id.
	pub state_id: i32,
	/// Property assignments for this state, in declaration order.
	pub properties: Vec<(String, String)>,
	/// Whether this is the block's default state.
	pub is_default: bool,
}

/// One registry with all its entries.
#[derive(Debug, Clone)]
pub struct RegistryInfo {
	/// Namespaced registry identifier, e.g. `minecraft:block`.
	pub identifier: String,
	/// Entries in registration order.
	pub entries: Vec<RegistryEntry>,
}

/// One entry in a registry.
#[derive(Debug, Clone)]
pub struct RegistryEntry {
	/// Namespaced entry identifier.
	pub identifier: String,
	/// Raw protocol id.
	pub raw_id: i32,
	/// Codec-derived payload, already decoded into the canonical model.
	///
	/// Providers catch per-entry codec failures themselves, log them at low
	/// severity, and supply `None`; a missing payload never fails the dump.
	pub encoded: Option<Compound>,
}

impl RegistryEntry {
	/// Whether a non-empty codec payload is available.
	pub fn has_encoded(&self) -> bool {
		self.encoded.as_ref().is_some_and(|compound| !compound.is_empty())
	}
}

/// Supplies the full block collection for one dump; one bulk fetch per call.
pub trait BlockProvider {
	/// Get all registered blocks.
	fn all_blocks(&self) -> Result<Vec<BlockInfo>>;
}

/// Supplies the full registry collection for one dump; one bulk fetch per call.
pub trait RegistryProvider {
	/// Get all registries with their entries.
	fn all_registries(&self) -> Result<Vec<RegistryInfo>>;
}
