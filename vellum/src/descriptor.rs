//! The descriptor model shared by the parsers and the correspondence engine.
//!
//! A descriptor is the structured form of one declaration, independent of
//! whether Java or Kotlin text produced it.

/// One declared class or interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedType {
	/// The dotted namespace, may be empty.
	pub package: String,
	/// The simple type name. May carry generic parameters, like `Map<K, V>`.
	pub name: String,
	pub kind: DescriptorKind,
	pub modifiers: Vec<String>,
	/// The raw supertype expressions, in declaration order.
	///
	/// For a class the first entry is the extended class and any further
	/// entries are the implemented interfaces; for an interface all entries
	/// are extended interfaces. An entry may be a comma separated list.
	pub supers: Vec<String>,
	/// The members, in declaration order.
	pub members: Vec<ParsedMember>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorKind {
	Class,
	Interface,
}

/// One declared member of a type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMember {
	pub kind: MemberKind,
	/// The member name. For a constructor this equals the owning type's name.
	pub name: String,
	pub modifiers: Vec<String>,
	/// The signature fragment.
	///
	/// For a method this is the parenthesized parameter list plus the return
	/// type, like `(index: Int): Char` or `(int index): char`. For a
	/// constructor it's just the parameter list. For a property it's the type
	/// expression alone, which never contains a parenthesized group.
	pub signature: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
	Property,
	Method,
	Constructor,
}

impl ParsedMember {
	pub fn is_static(&self) -> bool {
		self.modifiers.iter().any(|m| m == "static")
	}

	/// Whether this is a method taking no parameters.
	pub fn is_nullary_method(&self) -> bool {
		self.kind == MemberKind::Method
			&& leading_paren_group(&self.signature).is_some_and(|params| params.trim().is_empty())
	}

	/// Whether this is a method taking exactly one parameter.
	pub fn is_unary_method(&self) -> bool {
		self.kind == MemberKind::Method
			&& leading_paren_group(&self.signature)
				.is_some_and(|params| !params.trim().is_empty() && !params.contains(','))
	}
}

impl ParsedType {
	pub fn find_property(&self, name: &str) -> Option<&ParsedMember> {
		self.members.iter()
			.find(|m| m.kind == MemberKind::Property && m.name == name)
	}

	pub fn find_nullary_method(&self, name: &str) -> Option<&ParsedMember> {
		self.members.iter()
			.find(|m| m.name == name && m.is_nullary_method())
	}

	pub fn find_unary_method(&self, name: &str) -> Option<&ParsedMember> {
		self.members.iter()
			.find(|m| m.name == name && m.is_unary_method())
	}
}

/// Returns the text between the leading `(` of the signature and the next `)`.
///
/// Returns `None` if the signature doesn't start with a parenthesized group,
/// which for a well-formed member means it's a property.
pub(crate) fn leading_paren_group(signature: &str) -> Option<&str> {
	let rest = signature.trim_start().strip_prefix('(')?;
	let end = rest.find(')')?;
	Some(&rest[..end])
}
