use std::fs;

use angle_domain::references::{self, ReferenceDocument};

#[test]
fn missing_directory_is_an_empty_corpus() {
	let dir = tempfile::tempdir().expect("Failed to create temp dir.");
	let docs = references::load_dir(&dir.path().join("does-not-exist"));

	assert!(docs.is_empty());
}

#[test]
fn loads_visible_files_sorted_and_trimmed() {
	let dir = tempfile::tempdir().expect("Failed to create temp dir.");

	fs::write(dir.path().join("b.md"), "\n  second script  \n").expect("write b");
	fs::write(dir.path().join("a.txt"), "first script\n").expect("write a");
	fs::write(dir.path().join(".hidden"), "secret").expect("write hidden");
	fs::create_dir(dir.path().join("nested")).expect("create nested");
	fs::write(dir.path().join("nested").join("c.txt"), "nested script").expect("write nested");

	let docs = references::load_dir(dir.path());

	assert_eq!(
		docs,
		vec![
			ReferenceDocument { name: "a.txt".to_string(), body: "first script".to_string() },
			ReferenceDocument { name: "b.md".to_string(), body: "second script".to_string() },
		]
	);
}

#[test]
fn invalid_utf8_is_decoded_lossily() {
	let dir = tempfile::tempdir().expect("Failed to create temp dir.");

	fs::write(dir.path().join("good.txt"), "fine").expect("write good");
	fs::write(dir.path().join("latin1.txt"), b"caf\xe9 \xff").expect("write latin1");

	let docs = references::load_dir(dir.path());

	assert_eq!(docs.len(), 2);
	assert_eq!(docs[0].name, "good.txt");
	assert_eq!(docs[1].name, "latin1.txt");
	assert_eq!(docs[1].body, "caf\u{FFFD} \u{FFFD}");
}

#[cfg(unix)]
#[test]
fn broken_symlinks_are_skipped() {
	let dir = tempfile::tempdir().expect("Failed to create temp dir.");

	fs::write(dir.path().join("good.txt"), "fine").expect("write good");
	std::os::unix::fs::symlink(dir.path().join("gone.txt"), dir.path().join("dangling.txt"))
		.expect("create symlink");

	let docs = references::load_dir(dir.path());

	assert_eq!(docs, vec![ReferenceDocument { name: "good.txt".to_string(), body: "fine".to_string() }]);
}

#[test]
fn loaded_corpus_formats_into_a_single_block() {
	let dir = tempfile::tempdir().expect("Failed to create temp dir.");

	fs::write(dir.path().join("hook.txt"), "00:00-00:04: Ever feel tired?").expect("write hook");

	let docs = references::load_dir(dir.path());
	let block = references::format_for_context(&docs, 40_000);

	assert!(block.contains("=== REFERENCE SCRIPTS (1 scripts) ==="));
	assert!(block.contains("--- Script: hook.txt ---\n00:00-00:04: Ever feel tired?"));
	assert!(!block.contains("[Note:"));
}
