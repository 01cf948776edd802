//! The member correspondence engine.
//!
//! [`match_members`] pairs members of a source (Java) descriptor with members
//! of a target (Kotlin) descriptor. Only non-static nullary instance methods
//! of the source participate in the rule loop; matching multi-argument
//! overloads generically is deliberately not attempted. The one exception is
//! the indexer equivalence of `charAt` and `get`, which is paired separately.
//!
//! The rules are an ordered list evaluated per source method, first match
//! wins, and a source method that no rule matches is silently left out of the
//! result. Callers report those as unmatched, they're not an error here.

use std::fmt;
use crate::descriptor::{ParsedMember, ParsedType};
use crate::error::MatchError;
use crate::signature::simplify;

/// One matched source/target member pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberPair {
	pub source: ParsedMember,
	pub target: ParsedMember,
}

impl fmt::Display for MemberPair {
	/// Renders both sides as simplified signatures, like `charAt(index) -> get(index)`.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} -> {}", simplify(&self.source), simplify(&self.target))
	}
}

/// The named property aliases, source method name to target property name.
const PROPERTY_ALIASES: &[(&str, &str)] = &[
	("keySet", "keys"),
	("entrySet", "entries"),
];

/// The heuristics, in priority order.
const RULES: &[fn(&ParsedMember, &ParsedType) -> Option<ParsedMember>] = &[
	accessor_property,
	direct_property,
	aliased_property,
	value_suffix_method,
];

/// A `get<X>`/`set<X>` accessor matches a target property named `<x>`.
fn accessor_property(method: &ParsedMember, target: &ParsedType) -> Option<ParsedMember> {
	let property_name = ["get", "set"].iter()
		.find_map(|prefix| method.name.strip_prefix(prefix))
		.filter(|rest| !rest.is_empty())
		.map(lower_case_first)?;

	target.find_property(&property_name).cloned()
}

/// A method matches a target property of exactly the same name.
fn direct_property(method: &ParsedMember, target: &ParsedType) -> Option<ParsedMember> {
	target.find_property(&method.name).cloned()
}

/// A method in the alias list matches its aliased target property.
fn aliased_property(method: &ParsedMember, target: &ParsedType) -> Option<ParsedMember> {
	PROPERTY_ALIASES.iter()
		.find(|(source_name, _)| *source_name == method.name)
		.and_then(|(_, target_name)| target.find_property(target_name))
		.cloned()
}

/// A `<p>Value` method matches a target nullary method named `to<P>`.
fn value_suffix_method(method: &ParsedMember, target: &ParsedType) -> Option<ParsedMember> {
	let base = method.name.strip_suffix("Value").filter(|base| !base.is_empty())?;
	target.find_nullary_method(&format!("to{}", upper_case_first(base))).cloned()
}

/// Matches members of the source type to members of the target type.
///
/// Fails if the two descriptors aren't the same kind of declaration.
pub fn match_members(source: &ParsedType, target: &ParsedType) -> Result<Vec<MemberPair>, MatchError> {
	if source.kind != target.kind {
		return Err(MatchError::KindMismatch {
			source: source.kind,
			target: target.kind,
		});
	}

	let mut pairs = Vec::new();

	let nullary_instance_methods = source.members.iter()
		.filter(|m| !m.is_static() && m.is_nullary_method());

	for method in nullary_instance_methods {
		let matched = RULES.iter()
			.find_map(|rule| rule(method, target));

		if let Some(matched) = matched {
			pairs.push(MemberPair { source: method.clone(), target: matched });
		}
	}

	// indexer equivalence: s.charAt(i) reads like s.get(i), i.e. s[i]
	if let (Some(char_at), Some(get)) = (source.find_unary_method("charAt"), target.find_unary_method("get")) {
		pairs.push(MemberPair { source: char_at.clone(), target: get.clone() });
	}

	Ok(pairs)
}

fn lower_case_first(s: &str) -> String {
	let mut chars = s.chars();
	match chars.next() {
		Some(first) => first.to_lowercase().chain(chars).collect(),
		None => String::new(),
	}
}

fn upper_case_first(s: &str) -> String {
	let mut chars = s.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
