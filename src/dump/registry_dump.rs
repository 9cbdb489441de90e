use std::path::Path;

use tracing::info;

use crate::dump::builder::TreeBuilder;
use crate::dump::encode::build_compound;
use crate::dump::json_builder::JsonBuilder;
use crate::dump::nbt::TagCompound;
use crate::dump::nbt_builder::NbtBuilder;
use crate::dump::output::{ensure_parent_dir, write_json_file};
use crate::dump::profile::{DumpFormat, ProfileConfig};
use crate::dump::provider::{RegistryInfo, RegistryProvider};
use crate::dump::{Result, nbt};

/// Generate a registry data dump at `path` according to `profile`.
///
/// The requested format is resolved before the provider is touched.
pub fn generate_dump(
	path: &Path,
	profile: &ProfileConfig,
	provider: &dyn RegistryProvider,
) -> Result<()> {
	let format = DumpFormat::parse(&profile.export.format)?;
	info!("fetching registries from provider");
	let registries = provider.all_registries()?;
	info!(count = registries.len(), "retrieved registries");
	ensure_parent_dir(path)?;

	match format {
		DumpFormat::Json => {
			let mut builder = JsonBuilder::new();
			let root = build_registry_data(&registries, profile, &mut builder);
			write_json_file(path, &builder.finish(root), profile.export.pretty())?;
			info!(path = %path.display(), "dumped registry data");
		}
		DumpFormat::Nbt => {
			let mut builder = NbtBuilder::new(TagCompound::new());
			build_registry_data(&registries, profile, &mut builder);
			let compressed = profile.export.compressed();
			nbt::write_file(&builder.finish(), path, compressed)?;
			info!(path = %path.display(), compressed, "dumped registry data");
		}
	}
	Ok(())
}

/// Build the registry tree into `builder` and return its root node.
///
/// Registries are attached under their identifier keys in ascending
/// lexicographic order; entries keep their registration order. Codec-derived
/// payloads are delegated to the value encoder and attached under `element`.
pub fn build_registry_data<B: TreeBuilder>(
	registries: &[RegistryInfo],
	profile: &ProfileConfig,
	builder: &mut B,
) -> B::Node {
	let root = builder.create_object();
	let include_codec = profile.registries.as_ref().is_some_and(|config| config.codec);

	let mut total_entries = 0_usize;
	let mut entries_with_codec = 0_usize;

	let mut sorted: Vec<&RegistryInfo> = registries.iter().collect();
	sorted.sort_by(|left, right| left.identifier.cmp(&right.identifier));

	for registry in &sorted {
		let registry_data = builder.create_object();
		builder.add_string_property(registry_data, "type", &registry.identifier);

		let entries = builder.create_array();
		for entry in &registry.entries {
			let entry_object = builder.create_object();
			builder.add_string_property(entry_object, "name", &entry.identifier);
			builder.add_int_property(entry_object, "id", entry.raw_id);

			if include_codec
				&& entry.has_encoded()
				&& let Some(encoded) = &entry.encoded
			{
				let element = build_compound(builder, encoded);
				builder.add_to_object(entry_object, "element", element);
				entries_with_codec += 1;
			}

			builder.add_to_array(entries, entry_object);
			total_entries += 1;
		}

		builder.add_to_object(registry_data, "value", entries);
		builder.add_to_object(root, &registry.identifier, registry_data);
	}

	info!(
		registries = sorted.len(),
		entries = total_entries,
		with_codec = entries_with_codec,
		"built registry data"
	);

	root
}

#[cfg(test)]
mod tests;
