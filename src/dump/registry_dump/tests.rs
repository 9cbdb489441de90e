use std::fs;

use serde_json::json;

use crate::dump::nbt::TagCompound;
use crate::dump::profile::{ExportConfig, ProfileConfig, RegistriesConfig};
use crate::dump::provider::{RegistryEntry, RegistryInfo, RegistryProvider};
use crate::dump::value::{Compound, IntWidth, StructuralValue};
use crate::dump::{
	DumpError, JsonBuilder, NbtBuilder, Result, build_registry_data, generate_registry_dump,
};

fn sample_registries() -> Vec<RegistryInfo> {
	let mut encoded = Compound::new();
	encoded.insert("sound_id", StructuralValue::String("minecraft:ambient.cave".to_owned()));
	encoded.insert("range", StructuralValue::int(16, IntWidth::Int));

	vec![
		RegistryInfo {
			identifier: "minecraft:sound_event".to_owned(),
			entries: vec![
				RegistryEntry {
					identifier: "minecraft:ambient.cave".to_owned(),
					raw_id: 0,
					encoded: Some(encoded),
				},
				RegistryEntry {
					identifier: "minecraft:block.anvil.break".to_owned(),
					raw_id: 1,
					encoded: None,
				},
			],
		},
		RegistryInfo { identifier: "minecraft:attribute".to_owned(), entries: Vec::new() },
	]
}

fn profile(format: &str, codec: bool) -> ProfileConfig {
	ProfileConfig {
		export: ExportConfig { format: format.to_owned(), ..ExportConfig::default() },
		blocks: None,
		registries: Some(RegistriesConfig { codec }),
		multi_output: None,
	}
}

struct StaticRegistries(Vec<RegistryInfo>);

impl RegistryProvider for StaticRegistries {
	fn all_registries(&self) -> Result<Vec<RegistryInfo>> {
		Ok(self.0.clone())
	}
}

/// Panics if the dump pipeline touches the provider at all.
struct ExplodingRegistries;

impl RegistryProvider for ExplodingRegistries {
	fn all_registries(&self) -> Result<Vec<RegistryInfo>> {
		panic!("provider must not be invoked");
	}
}

#[test]
fn registry_tree_carries_type_value_and_elements() {
	let mut builder = JsonBuilder::new();
	let root = build_registry_data(&sample_registries(), &profile("json", true), &mut builder);

	assert_eq!(
		builder.finish(root),
		json!({
			"minecraft:attribute": {
				"type": "minecraft:attribute",
				"value": [],
			},
			"minecraft:sound_event": {
				"type": "minecraft:sound_event",
				"value": [
					{
						"name": "minecraft:ambient.cave",
						"id": 0,
						"element": { "sound_id": "minecraft:ambient.cave", "range": 16 },
					},
					{ "name": "minecraft:block.anvil.break", "id": 1 },
				],
			},
		})
	);
}

#[test]
fn codec_flag_suppresses_elements() {
	let mut builder = JsonBuilder::new();
	let root = build_registry_data(&sample_registries(), &profile("json", false), &mut builder);

	let value = builder.finish(root);
	let entries = &value["minecraft:sound_event"]["value"];
	assert!(entries[0].get("element").is_none());
}

#[test]
fn registries_are_attached_in_sorted_identifier_order() {
	let mut builder = NbtBuilder::new(TagCompound::new());
	build_registry_data(&sample_registries(), &profile("nbt", true), &mut builder);

	let finished = builder.finish();
	let keys: Vec<_> = finished.iter().map(|(key, _)| key).collect();
	assert_eq!(keys, ["minecraft:attribute", "minecraft:sound_event"]);
}

#[test]
fn entry_without_payload_still_dumps() {
	let registries = vec![RegistryInfo {
		identifier: "minecraft:attribute".to_owned(),
		entries: vec![RegistryEntry {
			identifier: "minecraft:generic.armor".to_owned(),
			raw_id: 4,
			encoded: None,
		}],
	}];

	let mut builder = JsonBuilder::new();
	let root = build_registry_data(&registries, &profile("json", true), &mut builder);
	assert_eq!(
		builder.finish(root),
		json!({
			"minecraft:attribute": {
				"type": "minecraft:attribute",
				"value": [{ "name": "minecraft:generic.armor", "id": 4 }],
			},
		})
	);
}

#[test]
fn repeated_dumps_are_byte_identical() {
	let dir = tempfile::tempdir().expect("tempdir");
	let provider = StaticRegistries(sample_registries());

	for format in ["json", "nbt"] {
		let first = dir.path().join(format!("first.{format}"));
		let second = dir.path().join(format!("second.{format}"));
		generate_registry_dump(&first, &profile(format, true), &provider).expect("first dump");
		generate_registry_dump(&second, &profile(format, true), &provider).expect("second dump");
		assert_eq!(fs::read(&first).expect("read"), fs::read(&second).expect("read"));
	}
}

#[test]
fn unknown_format_fails_before_the_provider_is_fetched() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = dir.path().join("out.dat");

	let result = generate_registry_dump(&path, &profile("parquet", true), &ExplodingRegistries);
	assert!(matches!(result, Err(DumpError::UnknownFormat { .. })));
	assert!(!path.exists());
}
