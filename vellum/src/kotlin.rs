//! Parsing Kotlin declaration text into a descriptor.
//!
//! The expected shape is a package line, a type declaration line, members one
//! per line, and a closing `}` line if the declaration opened a body.
//! Annotation lines and empty-bodied lines are dropped, a primary constructor
//! on the declaration line becomes a synthesized constructor member, and
//! nested brace-delimited declarations are stripped out entirely:
//!
//! ```
//! let text = "\
//! package kotlin
//!
//! public class String : Comparable<String> {
//!     public val length: Int
//!     public fun get(index: Int): Char
//! }
//! ";
//!
//! let parsed = vellum::kotlin::parse(text).unwrap();
//!
//! assert_eq!(parsed.name, "String");
//! assert_eq!(parsed.members.len(), 2);
//! ```

use crate::comments::strip_comments;
use crate::descriptor::{DescriptorKind, MemberKind, ParsedMember, ParsedType};
use crate::error::ParseError;
use crate::mapping::strip_generics;

/// Parses a Kotlin class or interface declaration.
pub fn parse(text: &str) -> Result<ParsedType, ParseError> {
	let stripped = strip_comments(text);
	let mut lines: Vec<&str> = stripped.lines()
		.map(str::trim)
		.filter(|line| !line.is_empty())
		.filter(|line| !line.starts_with('@'))
		.filter(|line| !line.ends_with("{}"))
		.collect();

	if lines.is_empty() {
		return Err(ParseError::MissingPackageDeclaration);
	}
	let package = lines.remove(0)
		.strip_prefix("package ")
		.ok_or(ParseError::MissingPackageDeclaration)?
		.trim()
		.to_owned();

	if lines.is_empty() {
		return Err(ParseError::MissingTypeDeclaration);
	}
	let decl_line = lines.remove(0);
	let (modifiers, kind, name, primary_constructor, supers, has_body) = parse_decl_line(decl_line)?;

	if has_body {
		match lines.pop() {
			Some("}") => {},
			_ => return Err(ParseError::UnterminatedBlock),
		}
	}

	strip_nested_blocks(&mut lines)?;

	let mut members = lines.iter()
		.map(|line| parse_member_line(line, &name))
		.collect::<Result<Vec<_>, _>>()?;
	if let Some(primary_constructor) = primary_constructor {
		members.insert(0, primary_constructor);
	}

	Ok(ParsedType { package, name, kind, modifiers, supers, members })
}

type DeclLine = (Vec<String>, DescriptorKind, String, Option<ParsedMember>, Vec<String>, bool);

fn parse_decl_line(line: &str) -> Result<DeclLine, ParseError> {
	let (body, has_body) = match line.strip_suffix('{') {
		Some(body) => (body.trim_end(), true),
		None => (line, false),
	};

	let mut modifiers = Vec::new();
	let mut remaining = body;
	let (kind, after) = loop {
		let (word, rest) = match remaining.split_once(char::is_whitespace) {
			Some((word, rest)) => (word, rest.trim_start()),
			None => (remaining, ""),
		};
		match word {
			"class" => break (DescriptorKind::Class, rest),
			"interface" => break (DescriptorKind::Interface, rest),
			"" => return Err(ParseError::MissingTypeDeclaration),
			word => modifiers.push(word.to_owned()),
		}
		if rest.is_empty() {
			return Err(ParseError::MissingTypeDeclaration);
		}
		remaining = rest;
	};

	// the supertype list follows the first `:` outside of brackets
	let (name_part, supers) = match split_once_outside_brackets(after, ':') {
		Some((name_part, supers)) => (name_part, vec![supers.trim().to_owned()]),
		None => (after, Vec::new()),
	};

	let name_part = name_part.trim();
	let (name, primary_constructor) = match name_part.strip_suffix(')') {
		Some(before_close) => {
			let open = before_close.rfind('(')
				.ok_or(ParseError::MissingTypeDeclaration)?;
			let name = name_part[..open].trim().to_owned();
			let constructor = ParsedMember {
				kind: MemberKind::Constructor,
				name: name.clone(),
				modifiers: Vec::new(),
				signature: name_part[open..].to_owned(),
			};
			(name, Some(constructor))
		},
		None => (name_part.to_owned(), None),
	};

	if name.is_empty() {
		return Err(ParseError::MissingTypeDeclaration);
	}

	Ok((modifiers, kind, name, primary_constructor, supers, has_body))
}

fn split_once_outside_brackets(s: &str, sep: char) -> Option<(&str, &str)> {
	let mut depth = 0usize;
	for (i, c) in s.char_indices() {
		match c {
			'<' | '(' => depth += 1,
			'>' | ')' => depth = depth.saturating_sub(1),
			c if c == sep && depth == 0 => {
				return Some((&s[..i], &s[i + c.len_utf8()..]));
			},
			_ => {},
		}
	}
	None
}

/// Removes nested brace-delimited blocks, like companion objects and inner
/// declarations, from the member lines.
fn strip_nested_blocks(lines: &mut Vec<&str>) -> Result<(), ParseError> {
	loop {
		let Some(open) = lines.iter().position(|line| line.ends_with('{')) else {
			return Ok(());
		};
		let close = lines[open..].iter().position(|line| *line == "}")
			.ok_or(ParseError::UnterminatedBlock)?;
		lines.drain(open..=open + close);
	}
}

fn parse_member_line(line: &str, type_name: &str) -> Result<ParsedMember, ParseError> {
	let malformed = || ParseError::MalformedMemberLine(line.to_owned());

	let mut modifiers = Vec::new();
	let mut remaining = line;
	loop {
		// the parameter list follows a `constructor` keyword directly
		if let Some(rest) = remaining.strip_prefix("constructor") {
			if rest.starts_with('(') {
				return Ok(ParsedMember {
					kind: MemberKind::Constructor,
					name: strip_generics(type_name).to_owned(),
					modifiers,
					signature: rest.trim_start().to_owned(),
				});
			}
		}

		let (word, rest) = match remaining.split_once(char::is_whitespace) {
			Some((word, rest)) => (word, rest.trim_start()),
			None => (remaining, ""),
		};

		let kind = match word {
			"val" | "var" => MemberKind::Property,
			"fun" => MemberKind::Method,
			"" => return Err(malformed()),
			word => {
				modifiers.push(word.to_owned());
				if rest.is_empty() {
					return Err(malformed());
				}
				remaining = rest;
				continue;
			},
		};

		let name_end = rest.find(|c: char| !(c.is_alphanumeric() || c == '_'))
			.unwrap_or(rest.len());
		let name = &rest[..name_end];
		if name.is_empty() {
			return Err(malformed());
		}

		let signature = rest[name_end..].trim_start();
		let signature = match kind {
			// a property's fragment is the type alone, without the `:`
			MemberKind::Property => signature.strip_prefix(':')
				.unwrap_or(signature)
				.trim_start(),
			_ => signature,
		};
		if signature.is_empty() {
			return Err(malformed());
		}

		return Ok(ParsedMember {
			kind,
			name: name.to_owned(),
			modifiers,
			signature: signature.to_owned(),
		});
	}
}
