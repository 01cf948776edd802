//! The declaration tree.
//!
//! A [`Document`] holds an optional package name and the type declarations.
//! Each [`TypeDecl`] holds its supertypes and [`Member`]s, and every type
//! position in a member is a [`TypeExpr`].
//!
//! Type expressions distinguish named references (which may carry generic
//! arguments) from the reserved keyword types of the notation, so that code
//! walking a tree can match exhaustively instead of probing strings.

use std::fmt;

/// A whole declaration document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
	/// The package the declarations belong to, if any.
	pub package: Option<String>,
	pub decls: Vec<TypeDecl>,
}

/// One `class` or `interface` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
	pub modifiers: Vec<String>,
	pub kind: DeclKind,
	pub name: String,
	/// The declared generic type parameters, for instance `K` and `V` of `Map<K, V>`.
	pub type_params: Vec<String>,
	/// The extended supertypes. For a class there is at most one entry.
	pub extends: Vec<TypeExpr>,
	/// The implemented interfaces. Always empty for an interface declaration.
	pub implements: Vec<TypeExpr>,
	pub members: Vec<Member>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
	Class,
	Interface,
}

impl DeclKind {
	pub fn as_str(self) -> &'static str {
		match self {
			DeclKind::Class => "class",
			DeclKind::Interface => "interface",
		}
	}
}

/// One member of a type declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
	Method {
		modifiers: Vec<String>,
		name: String,
		params: Vec<Param>,
		ret: TypeExpr,
	},
	Property {
		modifiers: Vec<String>,
		name: String,
		ty: TypeExpr,
	},
	Constructor {
		modifiers: Vec<String>,
		params: Vec<Param>,
	},
}

/// A parameter declaration, `name: Type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
	pub name: String,
	pub ty: TypeExpr,
}

/// A type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
	/// A named type reference, optionally with generic arguments.
	Named {
		name: String,
		args: Vec<TypeExpr>,
	},
	/// One of the reserved keyword types of the notation.
	Keyword(Keyword),
	/// An array type, `T[]`.
	Array(Box<TypeExpr>),
}

impl TypeExpr {
	/// A named reference without generic arguments.
	pub fn named(name: impl Into<String>) -> TypeExpr {
		TypeExpr::Named { name: name.into(), args: Vec::new() }
	}
}

impl fmt::Display for TypeExpr {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			TypeExpr::Named { name, args } => {
				write!(f, "{name}")?;
				if !args.is_empty() {
					write!(f, "<")?;
					for (i, arg) in args.iter().enumerate() {
						if i > 0 {
							write!(f, ", ")?;
						}
						write!(f, "{arg}")?;
					}
					write!(f, ">")?;
				}
				Ok(())
			},
			TypeExpr::Keyword(keyword) => write!(f, "{}", keyword.as_str()),
			TypeExpr::Array(inner) => write!(f, "{inner}[]"),
		}
	}
}

/// The reserved keyword types of the declaration notation.
///
/// Everything else written in a type position is a named reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
	Any,
	Boolean,
	Never,
	Null,
	Number,
	Object,
	String,
	Undefined,
	Void,
}

impl Keyword {
	pub fn as_str(self) -> &'static str {
		match self {
			Keyword::Any => "any",
			Keyword::Boolean => "boolean",
			Keyword::Never => "never",
			Keyword::Null => "null",
			Keyword::Number => "number",
			Keyword::Object => "object",
			Keyword::String => "string",
			Keyword::Undefined => "undefined",
			Keyword::Void => "void",
		}
	}

	/// Parses a keyword type, returning `None` for anything that's a named
	/// reference instead.
	pub fn parse(s: &str) -> Option<Keyword> {
		Some(match s {
			"any" => Keyword::Any,
			"boolean" => Keyword::Boolean,
			"never" => Keyword::Never,
			"null" => Keyword::Null,
			"number" => Keyword::Number,
			"object" => Keyword::Object,
			"string" => Keyword::String,
			"undefined" => Keyword::Undefined,
			"void" => Keyword::Void,
			_ => return None,
		})
	}
}
