//! The declaration tree rewriter.
//!
//! [`rewrite`] walks a [`nib`] document top-down and substitutes every type
//! reference that has an entry in the mapping table, including references
//! nested in generic argument lists and the notation's keyword types. Each
//! substitution is recorded as an [`AppliedMapping`] carrying a locator path:
//!
//! - `Parameters<Type["member"]>[i]` for a parameter type,
//! - `ReturnType<Type["member"]>` for a return type,
//! - `Type["member"]` for a property type,
//! - `unknown` when there is no enclosing member, e.g. in a supertype clause.
//!
//! Named references with no table entry are left untouched and reported in
//! [`RewriteOutcome::unmapped`], deduplicated in first-occurrence order.
//! Keyword types with no table entry aren't mappable references, so they're
//! not reported at all.

use indexmap::IndexSet;
use serde::Serialize;
use nib::tree::{Document, Member, Param, TypeDecl, TypeExpr};
use crate::mapping::{MappingTable, TypeMapping};

/// One successful substitution, the full list being the audit trail of a
/// rewrite call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedMapping {
	pub from: String,
	pub to: String,
	/// The locator of the substitution site.
	pub path: String,
}

/// What [`rewrite`] returns.
#[derive(Debug)]
pub struct RewriteOutcome {
	pub document: Document,
	pub applied: Vec<AppliedMapping>,
	/// The named references with no table entry, deduplicated by name,
	/// in first-occurrence order.
	pub unmapped: Vec<String>,
}

#[derive(Debug, Default)]
struct Acc {
	applied: Vec<AppliedMapping>,
	unmapped: IndexSet<String>,
}

struct Ctx<'a> {
	table: &'a MappingTable,
	/// The document's package, for resolving unqualified references.
	package: Option<&'a str>,
}

impl Ctx<'_> {
	fn lookup(&self, name: &str) -> Option<&TypeMapping> {
		if let Some(mapping) = self.table.get(name) {
			return Some(mapping);
		}
		match self.package {
			Some(package) if !name.contains('.') => self.table.get(&format!("{package}.{name}")),
			_ => None,
		}
	}
}

/// Rewrites the document against the table.
///
/// Named references are looked up as written; an unqualified reference that
/// misses is retried qualified with the document's package. The input is not
/// modified; an empty table yields an equal document and an empty audit trail.
pub fn rewrite(document: &Document, table: &MappingTable) -> RewriteOutcome {
	let mut acc = Acc::default();
	let ctx = Ctx { table, package: document.package.as_deref() };

	let decls = document.decls.iter()
		.map(|decl| rewrite_decl(decl, &ctx, &mut acc))
		.collect();

	RewriteOutcome {
		document: Document {
			package: document.package.clone(),
			decls,
		},
		applied: acc.applied,
		unmapped: acc.unmapped.into_iter().collect(),
	}
}

fn rewrite_decl(decl: &TypeDecl, ctx: &Ctx<'_>, acc: &mut Acc) -> TypeDecl {
	// supertype clauses have no enclosing member to locate by
	let extends = decl.extends.iter()
		.map(|ty| rewrite_expr(ty, ctx, "unknown", acc))
		.collect();
	let implements = decl.implements.iter()
		.map(|ty| rewrite_expr(ty, ctx, "unknown", acc))
		.collect();

	let members = decl.members.iter()
		.map(|member| rewrite_member(member, &decl.name, ctx, acc))
		.collect();

	TypeDecl {
		modifiers: decl.modifiers.clone(),
		kind: decl.kind,
		name: decl.name.clone(),
		type_params: decl.type_params.clone(),
		extends,
		implements,
		members,
	}
}

fn rewrite_params(params: &[Param], member_path: &str, ctx: &Ctx<'_>, acc: &mut Acc) -> Vec<Param> {
	params.iter()
		.enumerate()
		.map(|(i, param)| Param {
			name: param.name.clone(),
			ty: rewrite_expr(&param.ty, ctx, &format!("Parameters<{member_path}>[{i}]"), acc),
		})
		.collect()
}

fn rewrite_member(member: &Member, decl_name: &str, ctx: &Ctx<'_>, acc: &mut Acc) -> Member {
	match member {
		Member::Method { modifiers, name, params, ret } => {
			let member_path = format!("{decl_name}[\"{name}\"]");
			Member::Method {
				modifiers: modifiers.clone(),
				name: name.clone(),
				params: rewrite_params(params, &member_path, ctx, acc),
				ret: rewrite_expr(ret, ctx, &format!("ReturnType<{member_path}>"), acc),
			}
		},
		Member::Property { modifiers, name, ty } => Member::Property {
			modifiers: modifiers.clone(),
			name: name.clone(),
			ty: rewrite_expr(ty, ctx, &format!("{decl_name}[\"{name}\"]"), acc),
		},
		Member::Constructor { modifiers, params } => Member::Constructor {
			modifiers: modifiers.clone(),
			params: rewrite_params(params, &format!("{decl_name}[\"constructor\"]"), ctx, acc),
		},
	}
}

fn rewrite_expr(expr: &TypeExpr, ctx: &Ctx<'_>, path: &str, acc: &mut Acc) -> TypeExpr {
	match expr {
		TypeExpr::Named { name, args } => {
			let replacement = ctx.lookup(name);
			match replacement {
				Some(mapping) => acc.applied.push(AppliedMapping {
					from: name.clone(),
					to: mapping.target.clone(),
					path: path.to_owned(),
				}),
				None => {
					acc.unmapped.insert(name.clone());
				},
			}

			// the original generic arguments are recursed either way, so
			// nested references are substituted independently
			let args = args.iter()
				.map(|arg| rewrite_expr(arg, ctx, path, acc))
				.collect();

			TypeExpr::Named {
				name: replacement.map_or_else(|| name.clone(), |mapping| mapping.target.clone()),
				args,
			}
		},
		TypeExpr::Keyword(keyword) => match ctx.table.get(keyword.as_str()) {
			Some(mapping) => {
				acc.applied.push(AppliedMapping {
					from: keyword.as_str().to_owned(),
					to: mapping.target.clone(),
					path: path.to_owned(),
				});
				// a mapped keyword becomes a named reference
				TypeExpr::named(mapping.target.clone())
			},
			None => TypeExpr::Keyword(*keyword),
		},
		TypeExpr::Array(inner) => TypeExpr::Array(Box::new(rewrite_expr(inner, ctx, path, acc))),
	}
}
