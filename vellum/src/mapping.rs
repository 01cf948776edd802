//! The type mapping table the rewriter works against.
//!
//! A table maps source type names to [`TypeMapping`]s. Each catalog entry is
//! keyed twice, under its full name and under the name stripped of generic
//! arguments, so both `Map<K, V>` and `Map` hit the same entry.

use indexmap::IndexMap;
use serde::Serialize;

/// A mapping table, keyed by source type name, in catalog order.
pub type MappingTable = IndexMap<String, TypeMapping>;

/// The target side of one type mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeMapping {
	/// The target type name, with any nullability suffix stripped off.
	pub target: String,
	pub nullability: Nullability,
}

/// The three-state nullability marker carried alongside a mapped type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Nullability {
	/// No marker, the target type is not nullable.
	None,
	/// A trailing `?`, the target type is nullable.
	Nullable,
	/// A trailing `!`, nullability is unknown to the target language.
	Platform,
}

/// Splits a trailing `?` or `!` nullability marker off a target type name.
pub fn split_nullability(target: &str) -> (&str, Nullability) {
	if let Some(clean) = target.strip_suffix('?') {
		(clean, Nullability::Nullable)
	} else if let Some(clean) = target.strip_suffix('!') {
		(clean, Nullability::Platform)
	} else {
		(target, Nullability::None)
	}
}

/// Strips a trailing generic argument list, `Map<K, V>` becoming `Map`.
pub fn strip_generics(name: &str) -> &str {
	match name.find('<') {
		Some(open) if name.ends_with('>') => name[..open].trim_end(),
		_ => name,
	}
}

/// Builds a mapping table from `(source, target)` name pairs.
///
/// The target names may carry a trailing nullability marker. Every pair is
/// inserted under the full source name and under the generic-stripped source
/// name; later pairs win on key collisions.
pub fn build_table(pairs: impl IntoIterator<Item = (String, String)>) -> MappingTable {
	let mut table = MappingTable::new();

	for (source, target) in pairs {
		let (clean, nullability) = split_nullability(target.trim());
		let mapping = TypeMapping { target: clean.to_owned(), nullability };

		let base = strip_generics(&source).to_owned();
		table.insert(source, mapping.clone());
		table.insert(base, mapping);
	}

	table
}
