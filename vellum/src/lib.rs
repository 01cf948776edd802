//! Crate for mapping Java type declarations to their Kotlin equivalents.
//!
//! The three main pieces are:
//! - the declaration parsers, [`java::parse`] and [`kotlin::parse`], which turn
//!   loosely formatted declaration text into a [`descriptor::ParsedType`],
//! - the member correspondence engine, [`correspond::match_members`], which
//!   pairs up members of a Java descriptor with members of a Kotlin
//!   descriptor using naming heuristics,
//! - the declaration tree rewriter, [`rewrite::rewrite`], which substitutes
//!   every mapped type reference in a [`nib`] document and records where each
//!   substitution happened.
//!
//! The [`project`] module turns a descriptor into a [`nib`] document, and the
//! [`mapping`] module builds the lookup table the rewriter works against.

pub mod descriptor;
pub mod error;

pub mod java;
pub mod kotlin;

pub mod correspond;
pub mod mapping;
pub mod project;
pub mod rewrite;

mod comments;
mod signature;
