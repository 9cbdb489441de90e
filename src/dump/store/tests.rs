use crate::dump::{DumpError, ProfileStore};

#[test]
fn reset_then_list_and_load_round_trips() {
	let dir = tempfile::tempdir().expect("tempdir");
	let store = ProfileStore::new(dir.path());

	store.reset().expect("reset succeeds");
	let names = store.list().expect("list succeeds");
	assert_eq!(names, ["default", "registries_nbt", "split"]);

	let profile = store.load("default").expect("default loads");
	assert_eq!(profile.export.format, "json");
	assert!(profile.export.pretty());
	assert!(profile.blocks.is_some());
	assert!(profile.registries.is_some());

	let split = store.load("split").expect("split loads");
	assert!(!split.export.single_file);
	let outputs = split.multi_output.expect("multi output present");
	assert_eq!(outputs.len(), 2);
	assert_eq!(outputs["registries"].format, "nbt");
}

#[test]
fn missing_profile_is_a_distinct_error() {
	let dir = tempfile::tempdir().expect("tempdir");
	let store = ProfileStore::new(dir.path());
	store.reset().expect("reset succeeds");

	match store.load("nope") {
		Err(DumpError::ProfileNotFound { name }) => assert_eq!(name, "nope"),
		other => panic!("expected profile-not-found, got {other:?}"),
	}
}

#[test]
fn ensure_defaults_is_idempotent_and_preserves_edits() {
	let dir = tempfile::tempdir().expect("tempdir");
	let store = ProfileStore::new(dir.path());

	store.ensure_defaults().expect("first ensure succeeds");
	std::fs::write(dir.path().join("custom.json"), r#"{ "export": { "format": "nbt" } }"#)
		.expect("write custom profile");
	store.ensure_defaults().expect("second ensure succeeds");

	let names = store.list().expect("list succeeds");
	assert_eq!(names, ["custom", "default", "registries_nbt", "split"]);
	assert_eq!(store.load("custom").expect("custom loads").export.format, "nbt");
}
