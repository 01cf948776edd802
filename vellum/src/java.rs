//! Parsing Java declaration text into a descriptor.
//!
//! The expected shape is a package line, a type declaration line ending in
//! `{`, one member per line each ending in `;`, and a closing `}` line:
//!
//! ```
//! let text = "\
//! package java.lang;
//!
//! public final class String implements CharSequence {
//!     public int length();
//!     public char charAt(int index);
//! }
//! ";
//!
//! let parsed = vellum::java::parse(text).unwrap();
//!
//! assert_eq!(parsed.name, "String");
//! assert_eq!(parsed.members.len(), 2);
//! ```

use crate::comments::strip_comments;
use crate::descriptor::{DescriptorKind, MemberKind, ParsedMember, ParsedType};
use crate::error::ParseError;
use crate::mapping::strip_generics;

/// The declared member modifiers the parser recognizes.
const MODIFIERS: &[&str] = &[
	"public", "private", "protected", "static", "final", "abstract",
	"synchronized", "native", "transient", "volatile", "strictfp",
];

/// Parses a Java class or interface declaration.
pub fn parse(text: &str) -> Result<ParsedType, ParseError> {
	let stripped = strip_comments(text);
	let lines: Vec<&str> = stripped.lines()
		.map(str::trim)
		.filter(|line| !line.is_empty())
		.collect();

	let (package_line, lines) = lines.split_first()
		.ok_or(ParseError::MissingPackageDeclaration)?;
	let package = package_line
		.strip_prefix("package ")
		.and_then(|rest| rest.strip_suffix(';'))
		.ok_or(ParseError::MissingPackageDeclaration)?
		.trim()
		.to_owned();

	let (decl_line, lines) = lines.split_first()
		.ok_or(ParseError::MissingTypeDeclaration)?;
	let (modifiers, kind, name, supers) = parse_decl_line(decl_line)?;

	let (last_line, member_lines) = lines.split_last()
		.ok_or(ParseError::UnterminatedBlock)?;
	if *last_line != "}" {
		return Err(ParseError::UnterminatedBlock);
	}

	let members = member_lines.iter()
		.map(|line| parse_member_line(line, &name))
		.collect::<Result<Vec<_>, _>>()?;

	Ok(ParsedType { package, name, kind, modifiers, supers, members })
}

fn parse_decl_line(line: &str) -> Result<(Vec<String>, DescriptorKind, String, Vec<String>), ParseError> {
	let body = line.strip_suffix('{')
		.ok_or(ParseError::MissingTypeDeclaration)?
		.trim();

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

	let (head, implements) = match after.find(" implements ") {
		Some(i) => (&after[..i], Some(&after[i + " implements ".len()..])),
		None => (after, None),
	};
	let (name, extends) = match head.find(" extends ") {
		Some(i) => (&head[..i], Some(&head[i + " extends ".len()..])),
		None => (head, None),
	};

	let name = name.trim();
	if name.is_empty() {
		return Err(ParseError::MissingTypeDeclaration);
	}

	let supers = [extends, implements].into_iter()
		.flatten()
		.map(|clause| clause.trim().to_owned())
		.collect();

	Ok((modifiers, kind, name.to_owned(), supers))
}

fn parse_member_line(line: &str, type_name: &str) -> Result<ParsedMember, ParseError> {
	let malformed = || ParseError::MalformedMemberLine(line.to_owned());

	let rest = line.strip_suffix(';').ok_or_else(malformed)?.trim_end();

	let (mut kind, params, rest) = if rest.ends_with(')') {
		let open = rest.rfind('(').ok_or_else(malformed)?;
		(MemberKind::Method, Some(&rest[open..]), rest[..open].trim_end())
	} else {
		(MemberKind::Property, None, rest)
	};

	let (before, name) = match rest.rfind(' ') {
		Some(i) => (&rest[..i], &rest[i + 1..]),
		None => ("", rest),
	};

	let mut modifiers = Vec::new();
	let mut remaining = before.trim();
	loop {
		let end = remaining.find(char::is_whitespace).unwrap_or(remaining.len());
		let word = &remaining[..end];
		if word.is_empty() || !MODIFIERS.contains(&word) {
			break;
		}
		modifiers.push(word.to_owned());
		remaining = remaining[end..].trim_start();
	}

	let ty = remaining.trim();
	if ty.is_empty() && !(kind == MemberKind::Method && name == strip_generics(type_name)) {
		return Err(malformed());
	}
	if ty.is_empty() {
		kind = MemberKind::Constructor;
	}

	let signature = match (kind, params) {
		(MemberKind::Method, Some(params)) => format!("{params}: {ty}"),
		(MemberKind::Constructor, Some(params)) => params.to_owned(),
		_ => ty.to_owned(),
	};

	Ok(ParsedMember { kind, name: name.to_owned(), modifiers, signature })
}

#[cfg(test)]
mod testing {
	use pretty_assertions::assert_eq;
	use crate::descriptor::{DescriptorKind, MemberKind};
	use crate::error::ParseError;
	use super::parse;

	#[test]
	fn class_with_members() {
		let text = "\
// Source: https://example.invalid/java/lang/String
package java.lang;

public final class String extends Object implements Serializable, CharSequence {
	public String(byte[] bytes);
	public int length();
	public char charAt(int index);
	public static String valueOf(int i);
	public int value;
}
";
		let parsed = parse(text).unwrap();

		assert_eq!(parsed.package, "java.lang");
		assert_eq!(parsed.name, "String");
		assert_eq!(parsed.kind, DescriptorKind::Class);
		assert_eq!(parsed.modifiers, vec!["public".to_owned(), "final".to_owned()]);
		assert_eq!(parsed.supers, vec!["Object".to_owned(), "Serializable, CharSequence".to_owned()]);

		let members = &parsed.members;
		assert_eq!(members.len(), 5);

		assert_eq!(members[0].kind, MemberKind::Constructor);
		assert_eq!(members[0].name, "String");
		assert_eq!(members[0].signature, "(byte[] bytes)");

		assert_eq!(members[1].kind, MemberKind::Method);
		assert_eq!(members[1].name, "length");
		assert_eq!(members[1].modifiers, vec!["public".to_owned()]);
		assert_eq!(members[1].signature, "(): int");

		assert_eq!(members[2].signature, "(int index): char");

		assert_eq!(members[3].kind, MemberKind::Method);
		assert_eq!(members[3].modifiers, vec!["public".to_owned(), "static".to_owned()]);

		assert_eq!(members[4].kind, MemberKind::Property);
		assert_eq!(members[4].signature, "int");
	}

	#[test]
	fn interface_supers_stay_raw() {
		let text = "\
package java.util;

public interface Map<K, V> extends Iterable, Serializable {
	public int size();
}
";
		let parsed = parse(text).unwrap();

		assert_eq!(parsed.kind, DescriptorKind::Interface);
		assert_eq!(parsed.name, "Map<K, V>");
		assert_eq!(parsed.supers, vec!["Iterable, Serializable".to_owned()]);
	}

	#[test]
	fn constructor_of_generic_type() {
		let text = "\
package java.util;

public class HashMap<K, V> {
	public HashMap();
}
";
		let parsed = parse(text).unwrap();
		assert_eq!(parsed.members[0].kind, MemberKind::Constructor);
		assert_eq!(parsed.members[0].signature, "()");
	}

	#[test]
	fn missing_package() {
		let text = "public class Foo {\n}\n";
		assert!(matches!(parse(text), Err(ParseError::MissingPackageDeclaration)));
	}

	#[test]
	fn missing_declaration() {
		let text = "package a.b;\n";
		assert!(matches!(parse(text), Err(ParseError::MissingTypeDeclaration)));
	}

	#[test]
	fn missing_closing_brace() {
		let text = "\
package a.b;

public class Foo {
	public int size();
";
		assert!(matches!(parse(text), Err(ParseError::UnterminatedBlock)));
	}

	#[test]
	fn member_without_type() {
		let text = "\
package a.b;

public class Foo {
	public bar();
}
";
		assert!(matches!(parse(text), Err(ParseError::MalformedMemberLine(_))));
	}
}
