//! The failure kinds of the parsers and of the correspondence engine.
//!
//! All of these are fatal to the single call that raised them; no partial
//! descriptor is ever returned. Unmatched members and unmapped type names are
//! not errors, they're reported as regular outputs instead.

use thiserror::Error;
use crate::descriptor::DescriptorKind;

/// A declaration text could not be parsed.
#[derive(Debug, Error)]
pub enum ParseError {
	#[error("no package declaration found")]
	MissingPackageDeclaration,

	#[error("no class or interface declaration found")]
	MissingTypeDeclaration,

	#[error("malformed member line: {0:?}")]
	MalformedMemberLine(String),

	#[error("a block is never closed")]
	UnterminatedBlock,
}

/// Two descriptors could not be matched against each other.
// Not derived via `thiserror` because a field named `source` would be treated
// as the error source, which `DescriptorKind` is not; here it's plain data.
#[derive(Debug)]
pub enum MatchError {
	KindMismatch {
		source: DescriptorKind,
		target: DescriptorKind,
	},
}

impl std::fmt::Display for MatchError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::KindMismatch { source, target } =>
				write!(f, "type kinds do not match: source is {source:?}, target is {target:?}"),
		}
	}
}

impl std::error::Error for MatchError {}
