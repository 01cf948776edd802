//! Wires the member crates into an end-to-end mapping pipeline: Java
//! declaration text is parsed into a descriptor ([`vellum::java`]), projected
//! into a neutral declaration document ([`vellum::project`]), rewritten
//! against a mapped-types table ([`vellum::rewrite`]) and rendered back to
//! text ([`nib::writer`]).
//!
//! The table itself usually comes from a catalog file, see [`catalog`].

use anyhow::{Context, Result};
use log::{debug, info};
use serde::Serialize;
use vellum::correspond::{match_members, MemberPair};
use vellum::mapping::MappingTable;
use vellum::rewrite::{rewrite, AppliedMapping};

pub mod catalog;

/// Where declaration text comes from.
///
/// Implementations hand out the raw source text for a qualified type name,
/// be it from a directory of files, an archive, or an in-memory fixture.
/// `Ok(None)` means the source has no declaration for that name; it is never
/// treated as an empty declaration.
pub trait DeclarationSource {
	fn fetch_declaration(&self, qualified_name: &str) -> Result<Option<String>>;
}

/// The rendered result of mapping one Java declaration.
#[derive(Debug, Serialize)]
pub struct MappingResult {
	/// The rewritten declaration document, rendered to text.
	pub document: String,
	pub applied: Vec<AppliedMapping>,
	pub unmapped: Vec<String>,
}

/// Maps a Java declaration against the table.
pub fn map_java_declaration(java_text: &str, table: &MappingTable) -> Result<MappingResult> {
	let parsed = vellum::java::parse(java_text)
		.context("failed to parse the java declaration")?;
	debug!("parsed {} with {} member(s)", parsed.name, parsed.members.len());

	let document = vellum::project::to_document(&parsed)
		.with_context(|| format!("failed to project {} into a declaration document", parsed.name))?;

	let outcome = rewrite(&document, table);
	info!("mapped {}: {} substitution(s), {} unmapped type name(s)",
		parsed.name, outcome.applied.len(), outcome.unmapped.len());

	Ok(MappingResult {
		document: nib::writer::write_string(&outcome.document)?,
		applied: outcome.applied,
		unmapped: outcome.unmapped,
	})
}

/// Parses both declarations and pairs up their corresponding members.
pub fn calc_member_pairs(java_text: &str, kotlin_text: &str) -> Result<Vec<MemberPair>> {
	let source = vellum::java::parse(java_text)
		.context("failed to parse the java declaration")?;
	let target = vellum::kotlin::parse(kotlin_text)
		.context("failed to parse the kotlin declaration")?;

	let pairs = match_members(&source, &target)
		.with_context(|| format!("cannot match members of {} against {}", source.name, target.name))?;
	debug!("{} -> {}: {} member pair(s)", source.name, target.name, pairs.len());

	Ok(pairs)
}

/// Fetches a declaration by qualified name and maps it against the table.
///
/// Returns `Ok(None)` if the source has no declaration for the name.
pub fn fetch_and_map(source: &impl DeclarationSource, qualified_name: &str, table: &MappingTable)
		-> Result<Option<MappingResult>> {
	let Some(text) = source.fetch_declaration(qualified_name)
		.with_context(|| format!("failed to fetch the declaration of {qualified_name}"))? else {
		debug!("no declaration for {qualified_name}");
		return Ok(None);
	};

	map_java_declaration(&text, table)
		.with_context(|| format!("failed to map {qualified_name}"))
		.map(Some)
}

/// Splits a qualified type name at its last dot into package and simple name.
///
/// A name without a dot has no package:
/// ```
/// assert_eq!(scriptorium::split_qualified_name("java.lang.String"), (Some("java.lang"), "String"));
/// assert_eq!(scriptorium::split_qualified_name("String"), (None, "String"));
/// ```
pub fn split_qualified_name(qualified_name: &str) -> (Option<&str>, &str) {
	match qualified_name.rsplit_once('.') {
		Some((package, simple)) => (Some(package), simple),
		None => (None, qualified_name),
	}
}

#[cfg(test)]
mod testing {
	use super::split_qualified_name;

	#[test]
	fn qualified_name_splitting() {
		assert_eq!(split_qualified_name("java.util.Map"), (Some("java.util"), "Map"));
		assert_eq!(split_qualified_name("kotlin.collections.Map"), (Some("kotlin.collections"), "Map"));
		assert_eq!(split_qualified_name("Map"), (None, "Map"));
	}
}
