use std::{fs, io::ErrorKind, path::Path};

/// Remaining room below which a partially included script is not worth emitting.
const MIN_PARTIAL_CHARS: usize = 100;
/// Room held back from a partial script for its `(truncated)` header and ellipsis.
const PARTIAL_HEADER_CHARS: usize = 50;

const FOOTER: &str = "\n=== END REFERENCE SCRIPTS ===\n\n";
const USAGE: &str = "Use these reference scripts as examples of style, structure, and format when generating new scripts.\n";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReferenceDocument {
	pub name: String,
	pub body: String,
}

/// Reads every visible regular file in `dir`, sorted by file name.
///
/// A missing directory is an empty corpus. Entries that cannot be stat'ed or read are skipped with
/// a warning. Bodies are decoded lossily, so invalid UTF-8 becomes U+FFFD instead of dropping the
/// file.
pub fn load_dir(dir: &Path) -> Vec<ReferenceDocument> {
	let entries = match fs::read_dir(dir) {
		Ok(entries) => entries,
		Err(err) => {
			if err.kind() != ErrorKind::NotFound {
				tracing::warn!(error = %err, dir = %dir.display(), "Failed to list reference directory.");
			}

			return Vec::new();
		},
	};
	let mut docs = Vec::new();

	for entry in entries {
		let entry = match entry {
			Ok(entry) => entry,
			Err(err) => {
				tracing::warn!(error = %err, dir = %dir.display(), "Failed to read reference directory entry.");

				continue;
			},
		};
		let file_name = entry.file_name();
		let Some(name) = file_name.to_str() else {
			tracing::warn!(file = ?file_name, "Skipping reference file with a non UTF-8 name.");

			continue;
		};

		if name.starts_with('.') {
			continue;
		}

		let path = entry.path();

		// Follows symlinks.
		match fs::metadata(&path) {
			Ok(meta) if meta.is_file() => {},
			Ok(_) => continue,
			Err(err) => {
				tracing::warn!(
					error = %err,
					file = name,
					"Skipping reference entry that cannot be stat'ed."
				);

				continue;
			},
		}

		match fs::read(&path) {
			Ok(bytes) => docs.push(ReferenceDocument {
				name: name.to_string(),
				body: String::from_utf8_lossy(&bytes).trim().to_string(),
			}),
			Err(err) => {
				tracing::warn!(error = %err, file = name, "Skipping unreadable reference file.");
			},
		}
	}

	docs.sort_by(|a, b| a.name.cmp(&b.name));

	docs
}

/// Renders the corpus as a prompt block of at most `max_chars` characters plus fixed overhead.
///
/// Documents are appended whole until the next one would overflow the budget. That document is
/// included partially when more than 100 characters remain, and a note reports how many
/// documents, counting the partial one, did not fit.
pub fn format_for_context(docs: &[ReferenceDocument], max_chars: usize) -> String {
	if docs.is_empty() {
		return String::new();
	}

	let mut out = format!("\n\n=== REFERENCE SCRIPTS ({} scripts) ===\n\n", docs.len());
	let mut used = out.chars().count();

	for (index, doc) in docs.iter().enumerate() {
		let section = format!("--- Script: {} ---\n{}\n\n", doc.name, doc.body);
		let section_chars = section.chars().count();

		if used + section_chars > max_chars {
			let remaining = max_chars.saturating_sub(used);

			if remaining > MIN_PARTIAL_CHARS {
				let partial: String =
					doc.body.chars().take(remaining - PARTIAL_HEADER_CHARS).collect();

				out.push_str(&format!("--- Script: {} (truncated) ---\n{partial}...\n\n", doc.name));
			}

			out.push_str(&format!(
				"\n[Note: {} more scripts were truncated to fit context window]",
				docs.len() - index
			));

			break;
		}

		out.push_str(&section);

		used += section_chars;
	}

	out.push_str(FOOTER);
	out.push_str(USAGE);

	out
}
