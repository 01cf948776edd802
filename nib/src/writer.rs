//! Writing declaration documents as text.
//!
//! The output of [`write`][fn@write] is accepted by [`reader::read`][crate::reader::read],
//! and reading it back yields an equal tree.
//!
//! Note that there are also the helper methods [`write_vec`] for writing into a `Vec<u8>` directly,
//! and the helper method [`write_string`] that also tries to convert that `Vec<u8>` into a `String`.

use std::io::{BufWriter, Write};
use anyhow::{Context, Result};
use crate::tree::{Document, Member, Param, TypeDecl};

/// Writes the given document into a `String`.
///
/// This is equivalent to first calling [`write_vec`] and then [`String::from_utf8`].
///
/// This method is of most use in test cases, where you also use the `pretty_assertions` crate for viewing string diffs.
pub fn write_string(document: &Document) -> Result<String> {
	let vec = write_vec(document)?;
	String::from_utf8(vec).context("failed to convert written document to utf8")
}

/// Writes the given document into a `Vec<u8>`.
///
/// This is equivalent to letting [`write`][fn@write] write into a `Vec<u8>`.
pub fn write_vec(document: &Document) -> Result<Vec<u8>> {
	let mut vec = Vec::new();
	write(document, &mut vec)?;
	Ok(vec)
}

fn write_params(w: &mut impl Write, params: &[Param]) -> Result<()> {
	write!(w, "(")?;
	for (i, param) in params.iter().enumerate() {
		if i > 0 {
			write!(w, ", ")?;
		}
		write!(w, "{}: {}", param.name, param.ty)?;
	}
	write!(w, ")")?;
	Ok(())
}

fn write_modifiers(w: &mut impl Write, modifiers: &[String]) -> Result<()> {
	for modifier in modifiers {
		write!(w, "{modifier} ")?;
	}
	Ok(())
}

fn write_decl(w: &mut impl Write, decl: &TypeDecl) -> Result<()> {
	write_modifiers(w, &decl.modifiers)?;
	write!(w, "{} {}", decl.kind.as_str(), decl.name)?;

	if !decl.type_params.is_empty() {
		write!(w, "<{}>", decl.type_params.join(", "))?;
	}

	for (clause, list) in [("extends", &decl.extends), ("implements", &decl.implements)] {
		for (i, ty) in list.iter().enumerate() {
			if i == 0 {
				write!(w, " {clause} {ty}")?;
			} else {
				write!(w, ", {ty}")?;
			}
		}
	}

	writeln!(w, " {{")?;

	for member in &decl.members {
		write!(w, "\t")?;
		match member {
			Member::Method { modifiers, name, params, ret } => {
				write_modifiers(w, modifiers)?;
				write!(w, "{name}")?;
				write_params(w, params)?;
				writeln!(w, ": {ret};")?;
			},
			Member::Property { modifiers, name, ty } => {
				write_modifiers(w, modifiers)?;
				writeln!(w, "{name}: {ty};")?;
			},
			Member::Constructor { modifiers, params } => {
				write_modifiers(w, modifiers)?;
				write!(w, "constructor")?;
				write_params(w, params)?;
				writeln!(w, ";")?;
			},
		}
	}

	writeln!(w, "}}")?;
	Ok(())
}

#[allow(clippy::tabs_in_doc_comments)]
/// Writes the given document to the given writer.
///
/// ```
/// # use pretty_assertions::assert_eq;
/// let text = "\
/// interface Comparator<T> {
/// 	compare(a: T, b: T): number;
/// }
/// ";
///
/// let document = nib::reader::read(text).unwrap();
/// let written = nib::writer::write_string(&document).unwrap();
///
/// assert_eq!(written, text);
/// ```
pub fn write(document: &Document, w: &mut impl Write) -> Result<()> {
	let mut w = BufWriter::new(w);
	let w = &mut w;

	if let Some(ref package) = document.package {
		writeln!(w, "/**")?;
		writeln!(w, " * @packageDocumentation")?;
		writeln!(w, " * Package: {package}")?;
		writeln!(w, " */")?;
		writeln!(w)?;
	}

	for (i, decl) in document.decls.iter().enumerate() {
		if i > 0 {
			writeln!(w)?;
		}
		write_decl(w, decl)?;
	}

	Ok(())
}
