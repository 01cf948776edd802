//! Helpers for picking signature fragments apart.
//!
//! Parameter lists and generic argument lists are split on commas at bracket
//! depth zero, so `Map<K, V> entries` stays one segment. Both parameter
//! notations are recognized per segment: `name: Type` (Kotlin style) and
//! `Type name` (Java style).

use nib::tree::{Keyword, Param, TypeExpr};
use crate::descriptor::{leading_paren_group, MemberKind, ParsedMember};

/// Splits on `sep` at angle/paren bracket depth zero, dropping empty segments.
pub(crate) fn split_top_level(s: &str, sep: char) -> Vec<&str> {
	let mut segments = Vec::new();
	let mut depth = 0usize;
	let mut start = 0;

	for (i, c) in s.char_indices() {
		match c {
			'<' | '(' => depth += 1,
			'>' | ')' => depth = depth.saturating_sub(1),
			c if c == sep && depth == 0 => {
				segments.push(&s[start..i]);
				start = i + c.len_utf8();
			},
			_ => {},
		}
	}
	segments.push(&s[start..]);

	segments.into_iter()
		.map(str::trim)
		.filter(|segment| !segment.is_empty())
		.collect()
}

/// Parses a textual type expression like `Map<String, Integer>` or `int[]`.
///
/// Anything that can't be picked apart further is kept whole as a named
/// reference, so no input is rejected here.
pub(crate) fn parse_type_expr(s: &str) -> TypeExpr {
	let s = s.trim();

	if let Some(inner) = s.strip_suffix("[]") {
		return TypeExpr::Array(Box::new(parse_type_expr(inner)));
	}

	if let Some(open) = s.find('<') {
		if let Some(inner) = s[open..].strip_prefix('<').and_then(|rest| rest.strip_suffix('>')) {
			let name = s[..open].trim().to_owned();
			let args = split_top_level(inner, ',')
				.into_iter()
				.map(parse_type_expr)
				.collect();
			return TypeExpr::Named { name, args };
		}
	}

	match Keyword::parse(s) {
		Some(keyword) => TypeExpr::Keyword(keyword),
		None => TypeExpr::named(s),
	}
}

/// Parses one parameter segment in either notation.
///
/// A segment that is just a bare type gets a synthesized `argN` name.
pub(crate) fn parse_param(segment: &str, index: usize) -> Param {
	if let Some((name_part, ty_part)) = split_once_top_level(segment, ':') {
		// Kotlin style: `name: Type`, possibly with leading modifiers like `vararg`
		let name = name_part.split_whitespace().last().unwrap_or(name_part).to_owned();
		return Param { name, ty: parse_type_expr(ty_part) };
	}

	// Java style: `Type name`, with the name as the last top-level word
	match last_top_level_word(segment) {
		Some((before, word)) if !before.trim().is_empty() => {
			let mut ty = before.trim().to_owned();
			if word.contains('[') {
				// old-style `Type name[]` arrays keep the suffix on the type
				ty.push_str("[]");
			}
			Param {
				name: word.trim_matches(|c| c == '[' || c == ']').to_owned(),
				ty: parse_type_expr(&ty),
			}
		},
		_ => Param {
			name: format!("arg{index}"),
			ty: parse_type_expr(segment),
		},
	}
}

/// Splits on the first `sep` at bracket depth zero.
fn split_once_top_level(s: &str, sep: char) -> Option<(&str, &str)> {
	let mut depth = 0usize;
	for (i, c) in s.char_indices() {
		match c {
			'<' | '(' => depth += 1,
			'>' | ')' => depth = depth.saturating_sub(1),
			c if c == sep && depth == 0 => {
				return Some((s[..i].trim(), s[i + c.len_utf8()..].trim()));
			},
			_ => {},
		}
	}
	None
}

/// Returns the last whitespace separated word at bracket depth zero, together
/// with everything before it.
fn last_top_level_word(s: &str) -> Option<(&str, &str)> {
	let s = s.trim_end();
	let mut depth = 0usize;
	let mut last_start = None;

	for (i, c) in s.char_indices() {
		match c {
			'<' | '(' => depth += 1,
			'>' | ')' => depth = depth.saturating_sub(1),
			c if depth == 0 && !c.is_whitespace() => {
				let at_word_start = s[..i].ends_with(char::is_whitespace) || i == 0;
				if at_word_start {
					last_start = Some(i);
				}
			},
			_ => {},
		}
	}

	last_start.map(|start| (&s[..start], &s[start..]))
}

/// Renders a member as a simplified signature: just the name, plus parameter
/// names for methods and constructors.
pub(crate) fn simplify(member: &ParsedMember) -> String {
	match member.kind {
		MemberKind::Property => member.name.clone(),
		MemberKind::Method | MemberKind::Constructor => {
			let names: Vec<String> = leading_paren_group(&member.signature)
				.map(|params| {
					split_top_level(params, ',')
						.into_iter()
						.enumerate()
						.map(|(i, segment)| parse_param(segment, i).name)
						.collect()
				})
				.unwrap_or_default();

			format!("{}({})", member.name, names.join(", "))
		},
	}
}

#[cfg(test)]
mod testing {
	use pretty_assertions::assert_eq;
	use nib::tree::{Keyword, TypeExpr};
	use super::*;

	#[test]
	fn split_respects_generics() {
		assert_eq!(
			split_top_level("Map<K, V> entries, int count", ','),
			vec!["Map<K, V> entries", "int count"],
		);
	}

	#[test]
	fn type_exprs() {
		assert_eq!(parse_type_expr("String"), TypeExpr::named("String"));
		assert_eq!(parse_type_expr("boolean"), TypeExpr::Keyword(Keyword::Boolean));
		assert_eq!(parse_type_expr("int[]"), TypeExpr::Array(Box::new(TypeExpr::named("int"))));
		assert_eq!(
			parse_type_expr("Map<String, List<Integer>>"),
			TypeExpr::Named {
				name: "Map".to_owned(),
				args: vec![
					TypeExpr::named("String"),
					TypeExpr::Named {
						name: "List".to_owned(),
						args: vec![TypeExpr::named("Integer")],
					},
				],
			},
		);
	}

	#[test]
	fn params_in_both_notations() {
		let java = parse_param("int index", 0);
		assert_eq!(java.name, "index");
		assert_eq!(java.ty, TypeExpr::named("int"));

		let kotlin = parse_param("index: Int", 0);
		assert_eq!(kotlin.name, "index");
		assert_eq!(kotlin.ty, TypeExpr::named("Int"));

		let array = parse_param("String[] args", 0);
		assert_eq!(array.name, "args");
		assert_eq!(array.ty, TypeExpr::Array(Box::new(TypeExpr::named("String"))));

		let bare = parse_param("int", 2);
		assert_eq!(bare.name, "arg2");
		assert_eq!(bare.ty, TypeExpr::named("int"));
	}

	#[test]
	fn generic_param_keeps_name() {
		let param = parse_param("Map<K, V> entries", 0);
		assert_eq!(param.name, "entries");
		assert_eq!(
			param.ty,
			TypeExpr::Named {
				name: "Map".to_owned(),
				args: vec![TypeExpr::named("K"), TypeExpr::named("V")],
			},
		);
	}
}
