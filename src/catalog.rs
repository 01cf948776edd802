//! Loading the mapped-types catalog.
//!
//! The catalog is a JSON list of source/target name pairs, each optionally
//! carrying a nullability suffix (`?` or `!`) on the target name:
//!
//! ```json
//! [
//! 	{ "java": "java.lang.String", "kotlin": "kotlin.String!" },
//! 	{ "java": "java.util.Map<K, V>", "kotlin": "kotlin.collections.MutableMap" }
//! ]
//! ```
//!
//! Loading folds the entries into a [`MappingTable`], so every entry is keyed
//! both by its full source name and by the name stripped of generic
//! arguments.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;
use vellum::mapping::{build_table, MappingTable};

/// One catalog line, a source type name and its mapped counterpart.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
	pub java: String,
	pub kotlin: String,
}

/// Reads a catalog from JSON text.
pub fn read(text: &str) -> Result<MappingTable> {
	let entries: Vec<CatalogEntry> = serde_json::from_str(text)
		.context("malformed catalog json")?;
	debug!("catalog has {} entries", entries.len());

	Ok(build_table(entries.into_iter().map(|entry| (entry.java, entry.kotlin))))
}

/// Reads a catalog from a JSON file.
pub fn read_file(path: impl AsRef<Path>) -> Result<MappingTable> {
	let path = path.as_ref();
	let file = File::open(path)
		.with_context(|| format!("failed to open catalog file {path:?}"))?;

	let entries: Vec<CatalogEntry> = serde_json::from_reader(BufReader::new(file))
		.with_context(|| format!("malformed catalog json in {path:?}"))?;
	debug!("catalog {path:?} has {} entries", entries.len());

	Ok(build_table(entries.into_iter().map(|entry| (entry.java, entry.kotlin))))
}

#[cfg(test)]
mod testing {
	use pretty_assertions::assert_eq;
	use vellum::mapping::Nullability;
	use super::read;

	#[test]
	fn entries_become_table_rows() {
		let table = read(r#"[
			{ "java": "java.lang.String", "kotlin": "kotlin.String!" },
			{ "java": "java.util.Map<K, V>", "kotlin": "kotlin.collections.MutableMap" }
		]"#).unwrap();

		let string = &table["java.lang.String"];
		assert_eq!(string.target, "kotlin.String");
		assert_eq!(string.nullability, Nullability::Platform);

		// generic entries are keyed with and without their arguments
		assert_eq!(table["java.util.Map<K, V>"], table["java.util.Map"]);
	}

	#[test]
	fn malformed_json_fails() {
		assert!(read("{ not a catalog").is_err());
	}
}
