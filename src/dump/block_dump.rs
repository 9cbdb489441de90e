use std::path::Path;

use tracing::info;

use crate::dump::builder::TreeBuilder;
use crate::dump::json_builder::JsonBuilder;
use crate::dump::nbt::TagCompound;
use crate::dump::nbt_builder::NbtBuilder;
use crate::dump::output::{ensure_parent_dir, write_json_file};
use crate::dump::profile::{BlocksConfig, DumpFormat, ProfileConfig};
use crate::dump::provider::{BlockInfo, BlockProvider};
use crate::dump::{Result, nbt};

/// Generate a block data dump at `path` according to `profile`.
///
/// The requested format is resolved before the provider is touched, so an
/// unsupported format never produces a partial file or a provider call.
pub fn generate_dump(path: &Path, profile: &ProfileConfig, provider: &dyn BlockProvider) -> Result<()> {
	let format = DumpFormat::parse(&profile.export.format)?;
	let blocks = provider.all_blocks()?;
	ensure_parent_dir(path)?;

	match format {
		DumpFormat::Json => {
			let mut builder = JsonBuilder::new();
			let root = build_block_data(&blocks, profile, &mut builder);
			write_json_file(path, &builder.finish(root), profile.export.pretty())?;
			info!(path = %path.display(), "dumped block data");
		}
		DumpFormat::Nbt => {
			let mut builder = NbtBuilder::new(TagCompound::new());
			build_block_data(&blocks, profile, &mut builder);
			let compressed = profile.export.compressed();
			nbt::write_file(&builder.finish(), path, compressed)?;
			info!(path = %path.display(), compressed, "dumped block data");
		}
	}
	Ok(())
}

/// Build the block tree into `builder` and return its root node.
///
/// Blocks are attached under their identifier keys in ascending lexicographic
/// order regardless of provider iteration order; two runs over the same data
/// produce identical trees.
pub fn build_block_data<B: TreeBuilder>(
	blocks: &[BlockInfo],
	profile: &ProfileConfig,
	builder: &mut B,
) -> B::Node {
	let root = builder.create_object();
	let config = profile.blocks.clone().unwrap_or_else(BlocksConfig::default);

	let mut sorted: Vec<&BlockInfo> = blocks.iter().collect();
	sorted.sort_by(|left, right| left.identifier.cmp(&right.identifier));

	for block in sorted {
		let block_data = builder.create_object();

		if config.properties && !block.properties.is_empty() {
			let properties = builder.create_object();
			for property in &block.properties {
				let values = builder.create_array();
				for value in &property.values {
					builder.add_string_to_array(values, value);
				}
				builder.add_to_object(properties, &property.name, values);
			}
			builder.add_to_object(block_data, "properties", properties);
		}

		if config.states {
			let states = builder.create_array();
			for state in &block.states {
				let state_object = builder.create_object();
				builder.add_int_property(state_object, "id", state.state_id);

				if !state.properties.is_empty() {
					let state_properties = builder.create_object();
					for (name, value) in &state.properties {
						builder.add_string_property(state_properties, name, value);
					}
					builder.add_to_object(state_object, "properties", state_properties);
				}

				// Only the default state carries the marker.
				if state.is_default {
					builder.add_bool_property(state_object, "default", true);
				}

				builder.add_to_array(states, state_object);
			}
			builder.add_to_object(block_data, "states", states);
		}

		builder.add_to_object(root, &block.identifier, block_data);
	}

	root
}

#[cfg(test)]
mod tests;
