//! Projecting a descriptor into a declaration document.
//!
//! This is the bridge between the textual parsers and the tree rewriter: the
//! signature fragments of a [`ParsedType`]'s members are picked apart into
//! parameters and type expressions, and the supertype clauses are distributed
//! onto `extends`/`implements` (the first entry of a class's supers is the
//! extended class, everything else is implemented; an interface only extends).

use anyhow::{anyhow, Result};
use nib::tree::{DeclKind, Document, Member, Param, TypeDecl, TypeExpr};
use crate::descriptor::{DescriptorKind, MemberKind, ParsedMember, ParsedType};
use crate::mapping::strip_generics;
use crate::signature::{parse_param, parse_type_expr, split_top_level};

/// Projects a parsed declaration into a single-declaration document.
pub fn to_document(parsed: &ParsedType) -> Result<Document> {
	let package = if parsed.package.is_empty() {
		None
	} else {
		Some(parsed.package.clone())
	};

	Ok(Document {
		package,
		decls: vec![to_decl(parsed)?],
	})
}

fn to_decl(parsed: &ParsedType) -> Result<TypeDecl> {
	let name = strip_generics(&parsed.name).to_owned();

	let type_params = match parsed.name.find('<') {
		Some(open) if parsed.name.ends_with('>') => {
			let inner = &parsed.name[open + 1..parsed.name.len() - 1];
			split_top_level(inner, ',')
				.into_iter()
				.map(str::to_owned)
				.collect()
		},
		_ => Vec::new(),
	};

	let split_clause = |clause: &String| -> Vec<TypeExpr> {
		split_top_level(clause, ',')
			.into_iter()
			.map(parse_type_expr)
			.collect()
	};

	let (extends, implements) = match parsed.kind {
		DescriptorKind::Class => {
			let mut supers = parsed.supers.iter();
			let extends = supers.next().map(split_clause).unwrap_or_default();
			let implements = supers.flat_map(|clause| split_clause(clause)).collect();
			(extends, implements)
		},
		DescriptorKind::Interface => {
			let extends = parsed.supers.iter().flat_map(split_clause).collect();
			(extends, Vec::new())
		},
	};

	let kind = match parsed.kind {
		DescriptorKind::Class => DeclKind::Class,
		DescriptorKind::Interface => DeclKind::Interface,
	};

	let members = parsed.members.iter()
		.map(to_member)
		.collect::<Result<Vec<_>>>()?;

	Ok(TypeDecl {
		modifiers: parsed.modifiers.clone(),
		kind,
		name,
		type_params,
		extends,
		implements,
		members,
	})
}

fn to_member(member: &ParsedMember) -> Result<Member> {
	match member.kind {
		MemberKind::Property => Ok(Member::Property {
			modifiers: member.modifiers.clone(),
			name: member.name.clone(),
			ty: parse_type_expr(&member.signature),
		}),
		MemberKind::Constructor => {
			let (params, _) = split_signature(member)?;
			Ok(Member::Constructor {
				modifiers: member.modifiers.clone(),
				params,
			})
		},
		MemberKind::Method => {
			let (params, rest) = split_signature(member)?;
			let ret = rest
				.and_then(|rest| rest.trim_start().strip_prefix(':'))
				.map(str::trim)
				.filter(|ret| !ret.is_empty())
				.ok_or_else(|| anyhow!("method {:?} has no return type in {:?}", member.name, member.signature))?;

			Ok(Member::Method {
				modifiers: member.modifiers.clone(),
				name: member.name.clone(),
				params,
				ret: parse_type_expr(ret),
			})
		},
	}
}

/// Splits a member signature into its parameters and the text after the
/// parameter list, if any.
fn split_signature(member: &ParsedMember) -> Result<(Vec<Param>, Option<&str>)> {
	let inner_and_rest = member.signature
		.trim_start()
		.strip_prefix('(')
		.and_then(|rest| rest.find(')').map(|close| (&rest[..close], &rest[close + 1..])))
		.ok_or_else(|| anyhow!("member {:?} has no parameter list in {:?}", member.name, member.signature))?;
	let (inner, rest) = inner_and_rest;

	let params = split_top_level(inner, ',')
		.into_iter()
		.enumerate()
		.map(|(i, segment)| parse_param(segment, i))
		.collect();

	let rest = if rest.trim().is_empty() { None } else { Some(rest) };
	Ok((params, rest))
}
