//! Reading declaration documents from text.
//!
//! The entry point is [`read`]:
//!
//! ```
//! # use pretty_assertions::assert_eq;
//! let text = "\
//! interface Test {
//!     getValue(): String;
//! }
//! ";
//!
//! let document = nib::reader::read(text).unwrap();
//!
//! assert_eq!(document.decls.len(), 1);
//! assert_eq!(document.decls[0].name, "Test");
//! assert_eq!(document.decls[0].members.len(), 1);
//! ```

use anyhow::{anyhow, bail, Context, Result};
use crate::tree::{DeclKind, Document, Keyword, Member, Param, TypeDecl, TypeExpr};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
	Ident(String),
	Punct(char),
}

fn is_ident_char(c: char) -> bool {
	c.is_alphanumeric() || c == '_' || c == '$' || c == '.'
}

/// Splits the text into tokens, skipping comments.
///
/// A block comment line of the form `Package: a.b.c` names the package of the
/// document, as emitted by the writer; the last such line wins.
fn tokenize(text: &str) -> Result<(Vec<Token>, Option<String>)> {
	let mut tokens = Vec::new();
	let mut package = None;

	let chars: Vec<char> = text.chars().collect();
	let mut i = 0;

	while i < chars.len() {
		let c = chars[i];

		if c.is_whitespace() {
			i += 1;
		} else if c == '/' && chars.get(i + 1) == Some(&'/') {
			while i < chars.len() && chars[i] != '\n' {
				i += 1;
			}
		} else if c == '/' && chars.get(i + 1) == Some(&'*') {
			let start = i + 2;
			let mut end = None;
			let mut j = start;
			while j + 1 < chars.len() {
				if chars[j] == '*' && chars[j + 1] == '/' {
					end = Some(j);
					break;
				}
				j += 1;
			}
			let end = end.context("a block comment is never closed")?;

			let body: String = chars[start..end].iter().collect();
			for line in body.lines() {
				if let Some((_, rest)) = line.split_once("Package:") {
					package = Some(rest.trim().to_owned());
				}
			}

			i = end + 2;
		} else if is_ident_char(c) {
			let start = i;
			while i < chars.len() && is_ident_char(chars[i]) {
				i += 1;
			}
			tokens.push(Token::Ident(chars[start..i].iter().collect()));
		} else if matches!(c, '{' | '}' | '(' | ')' | '<' | '>' | ',' | ':' | ';' | '[' | ']') {
			tokens.push(Token::Punct(c));
			i += 1;
		} else {
			bail!("unexpected character {c:?} in declaration document");
		}
	}

	Ok((tokens, package))
}

struct Parser {
	tokens: Vec<Token>,
	pos: usize,
}

impl Parser {
	fn peek(&self) -> Option<&Token> {
		self.tokens.get(self.pos)
	}

	fn advance(&mut self) -> Option<Token> {
		let token = self.tokens.get(self.pos).cloned();
		if token.is_some() {
			self.pos += 1;
		}
		token
	}

	fn eat_punct(&mut self, c: char) -> bool {
		if self.peek() == Some(&Token::Punct(c)) {
			self.pos += 1;
			true
		} else {
			false
		}
	}

	fn expect_punct(&mut self, c: char) -> Result<()> {
		match self.advance() {
			Some(Token::Punct(p)) if p == c => Ok(()),
			other => bail!("expected {c:?}, got {other:?}"),
		}
	}

	fn expect_ident(&mut self) -> Result<String> {
		match self.advance() {
			Some(Token::Ident(ident)) => Ok(ident),
			other => bail!("expected an identifier, got {other:?}"),
		}
	}

	fn parse_decl(&mut self) -> Result<TypeDecl> {
		let mut modifiers = Vec::new();

		let kind = loop {
			let ident = self.expect_ident().context("in a type declaration header")?;
			match ident.as_str() {
				"class" => break DeclKind::Class,
				"interface" => break DeclKind::Interface,
				_ => modifiers.push(ident),
			}
		};

		let name = self.expect_ident().context("no type name after `class`/`interface`")?;

		let mut type_params = Vec::new();
		if self.eat_punct('<') {
			loop {
				// a type parameter may carry a bound, like `K extends Object`
				let mut param = self.expect_ident()?;
				while let Some(Token::Ident(_)) = self.peek() {
					param.push(' ');
					param.push_str(&self.expect_ident()?);
				}
				type_params.push(param);

				if !self.eat_punct(',') {
					break;
				}
			}
			self.expect_punct('>')?;
		}

		let mut extends = Vec::new();
		let mut implements = Vec::new();
		while let Some(Token::Ident(ident)) = self.peek() {
			let list = match ident.as_str() {
				"extends" => &mut extends,
				"implements" => &mut implements,
				_ => bail!("expected `extends`, `implements` or a body, got {ident:?}"),
			};
			self.pos += 1;

			loop {
				list.push(self.parse_type_expr()?);
				if !self.eat_punct(',') {
					break;
				}
			}
		}

		self.expect_punct('{')
			.with_context(|| anyhow!("no body for type declaration {name:?}"))?;

		let mut members = Vec::new();
		while !self.eat_punct('}') {
			members.push(self.parse_member()
				.with_context(|| anyhow!("in a member of type declaration {name:?}"))?);
		}

		Ok(TypeDecl { modifiers, kind, name, type_params, extends, implements, members })
	}

	fn parse_member(&mut self) -> Result<Member> {
		let mut modifiers = Vec::new();

		loop {
			let ident = self.expect_ident()?;

			match self.peek() {
				Some(Token::Punct('(')) => {
					let params = self.parse_params()?;

					return if ident == "constructor" {
						self.expect_punct(';')?;
						Ok(Member::Constructor { modifiers, params })
					} else {
						self.expect_punct(':')
							.with_context(|| anyhow!("no return type for method {ident:?}"))?;
						let ret = self.parse_type_expr()?;
						self.expect_punct(';')?;
						Ok(Member::Method { modifiers, name: ident, params, ret })
					};
				},
				Some(Token::Punct(':')) => {
					self.pos += 1;
					let ty = self.parse_type_expr()?;
					self.expect_punct(';')?;
					return Ok(Member::Property { modifiers, name: ident, ty });
				},
				_ => modifiers.push(ident),
			}
		}
	}

	fn parse_params(&mut self) -> Result<Vec<Param>> {
		self.expect_punct('(')?;

		let mut params = Vec::new();
		if self.eat_punct(')') {
			return Ok(params);
		}

		loop {
			let name = self.expect_ident().context("in a parameter list")?;
			self.expect_punct(':')
				.with_context(|| anyhow!("no type for parameter {name:?}"))?;
			let ty = self.parse_type_expr()?;
			params.push(Param { name, ty });

			if !self.eat_punct(',') {
				break;
			}
		}
		self.expect_punct(')')?;

		Ok(params)
	}

	fn parse_type_expr(&mut self) -> Result<TypeExpr> {
		let name = self.expect_ident().context("in a type expression")?;

		let mut args = Vec::new();
		if self.eat_punct('<') {
			loop {
				args.push(self.parse_type_expr()?);
				if !self.eat_punct(',') {
					break;
				}
			}
			self.expect_punct('>')?;
		}

		let mut expr = match Keyword::parse(&name) {
			Some(keyword) if args.is_empty() => TypeExpr::Keyword(keyword),
			_ => TypeExpr::Named { name, args },
		};

		while self.eat_punct('[') {
			self.expect_punct(']')?;
			expr = TypeExpr::Array(Box::new(expr));
		}

		Ok(expr)
	}
}

/// Reads a declaration document from the given text.
pub fn read(text: &str) -> Result<Document> {
	let (tokens, package) = tokenize(text)?;

	let mut parser = Parser { tokens, pos: 0 };

	let mut decls = Vec::new();
	while parser.peek().is_some() {
		decls.push(parser.parse_decl()?);
	}

	Ok(Document { package, decls })
}

#[cfg(test)]
mod testing {
	use pretty_assertions::assert_eq;
	use crate::tree::{DeclKind, Keyword, Member, Param, TypeExpr};
	use super::read;

	#[test]
	fn generics_and_heritage() {
		let text = "\
declare class HashMap<K, V> extends AbstractMap implements Map, Cloneable {
	get(key: K): V;
	size(): number;
}
";
		let document = read(text).unwrap();
		let decl = &document.decls[0];

		assert_eq!(decl.modifiers, vec!["declare".to_owned()]);
		assert_eq!(decl.kind, DeclKind::Class);
		assert_eq!(decl.name, "HashMap");
		assert_eq!(decl.type_params, vec!["K".to_owned(), "V".to_owned()]);
		assert_eq!(decl.extends, vec![TypeExpr::named("AbstractMap")]);
		assert_eq!(decl.implements, vec![TypeExpr::named("Map"), TypeExpr::named("Cloneable")]);
		assert_eq!(decl.members, vec![
			Member::Method {
				modifiers: Vec::new(),
				name: "get".to_owned(),
				params: vec![Param { name: "key".to_owned(), ty: TypeExpr::named("K") }],
				ret: TypeExpr::named("V"),
			},
			Member::Method {
				modifiers: Vec::new(),
				name: "size".to_owned(),
				params: Vec::new(),
				ret: TypeExpr::Keyword(Keyword::Number),
			},
		]);
	}

	#[test]
	fn nested_generic_arguments() {
		let text = "\
interface Test {
	entries: Set<Entry<K, V>>;
}
";
		let document = read(text).unwrap();

		assert_eq!(document.decls[0].members, vec![
			Member::Property {
				modifiers: Vec::new(),
				name: "entries".to_owned(),
				ty: TypeExpr::Named {
					name: "Set".to_owned(),
					args: vec![TypeExpr::Named {
						name: "Entry".to_owned(),
						args: vec![TypeExpr::named("K"), TypeExpr::named("V")],
					}],
				},
			},
		]);
	}

	#[test]
	fn package_header_comment() {
		let text = "\
/**
 * @packageDocumentation
 * Package: java.lang
 */

interface Test {
}
";
		let document = read(text).unwrap();
		assert_eq!(document.package.as_deref(), Some("java.lang"));
	}

	#[test]
	fn constructor_and_arrays() {
		let text = "\
class Test {
	constructor(values: String[]);
}
";
		let document = read(text).unwrap();

		assert_eq!(document.decls[0].members, vec![
			Member::Constructor {
				modifiers: Vec::new(),
				params: vec![Param {
					name: "values".to_owned(),
					ty: TypeExpr::Array(Box::new(TypeExpr::named("String"))),
				}],
			},
		]);
	}

	#[test]
	fn missing_body_fails() {
		assert!(read("interface Test").is_err());
	}
}
