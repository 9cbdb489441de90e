use std::fs;

use serde_json::json;

use crate::dump::nbt::{Tag, TagCompound};
use crate::dump::profile::{BlocksConfig, ExportConfig, ProfileConfig};
use crate::dump::provider::{BlockInfo, BlockProvider, BlockStateInfo, PropertyInfo};
use crate::dump::{DumpError, JsonBuilder, NbtBuilder, Result, build_block_data, generate_block_dump};

fn sample_blocks() -> Vec<BlockInfo> {
	vec![
		BlockInfo {
			identifier: "minecraft:water".to_owned(),
			properties: vec![PropertyInfo {
				name: "level".to_owned(),
				values: vec!["0".to_owned(), "1".to_owned()],
			}],
			states: vec![
				BlockStateInfo {
					state_id: 34,
					properties: vec![("level".to_owned(), "0".to_owned())],
					is_default: true,
				},
				BlockStateInfo {
					state_id: 35,
					properties: vec![("level".to_owned(), "1".to_owned())],
					is_default: false,
				},
			],
		},
		BlockInfo {
			identifier: "minecraft:air".to_owned(),
			properties: Vec::new(),
			states: vec![BlockStateInfo { state_id: 0, properties: Vec::new(), is_default: true }],
		},
	]
}

fn profile(format: &str) -> ProfileConfig {
	ProfileConfig {
		export: ExportConfig { format: format.to_owned(), ..ExportConfig::default() },
		blocks: Some(BlocksConfig::default()),
		registries: None,
		multi_output: None,
	}
}

struct StaticBlocks(Vec<BlockInfo>);

impl BlockProvider for StaticBlocks {
	fn all_blocks(&self) -> Result<Vec<BlockInfo>> {
		Ok(self.0.clone())
	}
}

/// Panics if the dump pipeline touches the provider at all.
struct ExplodingBlocks;

impl BlockProvider for ExplodingBlocks {
	fn all_blocks(&self) -> Result<Vec<BlockInfo>> {
		panic!("provider must not be invoked");
	}
}

#[test]
fn blocks_are_attached_in_sorted_identifier_order() {
	// The binary builder preserves insertion order, so the compound key order
	// shows exactly what order the orchestrator attached blocks in.
	let mut builder = NbtBuilder::new(TagCompound::new());
	build_block_data(&sample_blocks(), &profile("nbt"), &mut builder);

	let finished = builder.finish();
	let keys: Vec<_> = finished.iter().map(|(key, _)| key).collect();
	assert_eq!(keys, ["minecraft:air", "minecraft:water"]);
}

#[test]
fn block_tree_shape_matches_profile() {
	let mut builder = JsonBuilder::new();
	let root = build_block_data(&sample_blocks(), &profile("json"), &mut builder);

	assert_eq!(
		builder.finish(root),
		json!({
			"minecraft:air": {
				"states": [{ "id": 0, "default": true }],
			},
			"minecraft:water": {
				"properties": { "level": ["0", "1"] },
				"states": [
					{ "id": 34, "properties": { "level": "0" }, "default": true },
					{ "id": 35, "properties": { "level": "1" } },
				],
			},
		})
	);
}

#[test]
fn profile_flags_gate_properties_and_states() {
	let mut config = profile("json");
	config.blocks = Some(BlocksConfig { properties: false, states: false });

	let mut builder = JsonBuilder::new();
	let root = build_block_data(&sample_blocks(), &config, &mut builder);
	assert_eq!(
		builder.finish(root),
		json!({ "minecraft:air": {}, "minecraft:water": {} })
	);
}

#[test]
fn repeated_dumps_are_byte_identical() {
	let dir = tempfile::tempdir().expect("tempdir");
	let provider = StaticBlocks(sample_blocks());

	for format in ["json", "nbt"] {
		let first = dir.path().join(format!("first.{format}"));
		let second = dir.path().join(format!("second.{format}"));
		generate_block_dump(&first, &profile(format), &provider).expect("first dump");
		generate_block_dump(&second, &profile(format), &provider).expect("second dump");
		assert_eq!(fs::read(&first).expect("read"), fs::read(&second).expect("read"));
	}
}

#[test]
fn provider_order_does_not_change_output() {
	let dir = tempfile::tempdir().expect("tempdir");
	let forward = StaticBlocks(sample_blocks());
	let mut reversed_blocks = sample_blocks();
	reversed_blocks.reverse();
	let reversed = StaticBlocks(reversed_blocks);

	let first = dir.path().join("forward.json");
	let second = dir.path().join("reversed.json");
	generate_block_dump(&first, &profile("json"), &forward).expect("forward dump");
	generate_block_dump(&second, &profile("json"), &reversed).expect("reversed dump");
	assert_eq!(fs::read(&first).expect("read"), fs::read(&second).expect("read"));
}

#[test]
fn unknown_format_fails_before_the_provider_is_fetched() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = dir.path().join("out.dat");

	let result = generate_block_dump(&path, &profile("yaml"), &ExplodingBlocks);
	assert!(matches!(result, Err(DumpError::UnknownFormat { .. })));
	assert!(!path.exists());
}

#[test]
fn binary_format_is_rejected_before_the_provider_is_fetched() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = dir.path().join("out.bin");

	let result = generate_block_dump(&path, &profile("binary"), &ExplodingBlocks);
	assert!(matches!(result, Err(DumpError::BinaryFormatUnimplemented)));
	assert!(!path.exists());
}
