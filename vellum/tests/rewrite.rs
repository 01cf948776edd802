use anyhow::Result;
use pretty_assertions::assert_eq;
use vellum::mapping::{build_table, MappingTable};
use vellum::rewrite::rewrite;

fn table(pairs: &[(&str, &str)]) -> MappingTable {
	build_table(pairs.iter().map(|(source, target)| (source.to_string(), target.to_string())))
}

#[test]
fn empty_table_is_a_no_op() -> Result<()> {
	let text = "\
interface Test {
	getValue(): String;
	name: String;
}
";
	let document = nib::reader::read(text)?;

	let outcome = rewrite(&document, &table(&[]));

	assert_eq!(outcome.document, document);
	assert_eq!(nib::writer::write_string(&outcome.document)?, text);
	assert!(outcome.applied.is_empty());

	Ok(())
}

#[test]
fn generic_arguments_are_substituted_independently() -> Result<()> {
	let text = "\
interface Test {
	getMap(): Map<String, Integer>;
}
";
	let document = nib::reader::read(text)?;

	let outcome = rewrite(&document, &table(&[
		("Map", "kotlin.collections.MutableMap"),
		("String", "kotlin.String"),
		("Integer", "kotlin.Int"),
	]));

	assert_eq!(nib::writer::write_string(&outcome.document)?, "\
interface Test {
	getMap(): kotlin.collections.MutableMap<kotlin.String, kotlin.Int>;
}
");
	assert_eq!(outcome.applied.len(), 3);
	for applied in &outcome.applied {
		assert_eq!(applied.path, "ReturnType<Test[\"getMap\"]>");
	}

	Ok(())
}

#[test]
fn parameter_locator() -> Result<()> {
	let text = "\
interface Test {
	setName(name: String): void;
}
";
	let document = nib::reader::read(text)?;

	let outcome = rewrite(&document, &table(&[("String", "kotlin.String")]));

	assert_eq!(outcome.applied.len(), 1);
	assert_eq!(outcome.applied[0].from, "String");
	assert_eq!(outcome.applied[0].to, "kotlin.String");
	assert_eq!(outcome.applied[0].path, "Parameters<Test[\"setName\"]>[0]");

	Ok(())
}

#[test]
fn return_type_locator() -> Result<()> {
	let text = "\
interface Test {
	getValue(): String;
}
";
	let document = nib::reader::read(text)?;

	let outcome = rewrite(&document, &table(&[("String", "kotlin.String")]));

	assert_eq!(outcome.applied.len(), 1);
	assert_eq!(outcome.applied[0].path, "ReturnType<Test[\"getValue\"]>");

	Ok(())
}

#[test]
fn property_locator() -> Result<()> {
	let text = "\
interface Test {
	name: String;
}
";
	let document = nib::reader::read(text)?;

	let outcome = rewrite(&document, &table(&[("String", "kotlin.String")]));

	assert_eq!(outcome.applied.len(), 1);
	assert_eq!(outcome.applied[0].path, "Test[\"name\"]");

	Ok(())
}

#[test]
fn multiple_parameter_locators_are_indexed() -> Result<()> {
	let text = "\
interface Test {
	compare(a: String, b: int): boolean;
}
";
	let document = nib::reader::read(text)?;

	let outcome = rewrite(&document, &table(&[
		("String", "kotlin.String"),
		("int", "kotlin.Int"),
		("boolean", "kotlin.Boolean"),
	]));

	let paths: Vec<&str> = outcome.applied.iter().map(|a| a.path.as_str()).collect();
	assert_eq!(paths, vec![
		"Parameters<Test[\"compare\"]>[0]",
		"Parameters<Test[\"compare\"]>[1]",
		"ReturnType<Test[\"compare\"]>",
	]);

	Ok(())
}

#[test]
fn keyword_types_are_replaced() -> Result<()> {
	let text = "\
interface Test {
	isValid(): boolean;
}
";
	let document = nib::reader::read(text)?;

	let outcome = rewrite(&document, &table(&[("boolean", "kotlin.Boolean")]));

	assert_eq!(nib::writer::write_string(&outcome.document)?, "\
interface Test {
	isValid(): kotlin.Boolean;
}
");
	assert_eq!(outcome.applied.len(), 1);
	assert_eq!(outcome.applied[0].from, "boolean");
	assert_eq!(outcome.applied[0].path, "ReturnType<Test[\"isValid\"]>");

	Ok(())
}

#[test]
fn unmapped_names_are_deduplicated() -> Result<()> {
	let text = "\
interface Test {
	first(): Foo;
	second(): Foo;
	third(): Bar;
}
";
	let document = nib::reader::read(text)?;

	let outcome = rewrite(&document, &table(&[]));

	assert_eq!(outcome.unmapped, vec!["Foo".to_owned(), "Bar".to_owned()]);

	Ok(())
}

#[test]
fn mapped_types_leave_unmapped_neighbors_alone() -> Result<()> {
	let text = "\
interface Test {
	known(): String;
	strange(): CustomThing;
}
";
	let document = nib::reader::read(text)?;

	let outcome = rewrite(&document, &table(&[("String", "kotlin.String")]));

	assert_eq!(nib::writer::write_string(&outcome.document)?, "\
interface Test {
	known(): kotlin.String;
	strange(): CustomThing;
}
");
	assert_eq!(outcome.applied.len(), 1);
	assert_eq!(outcome.unmapped, vec!["CustomThing".to_owned()]);

	Ok(())
}

#[test]
fn supertypes_locate_as_unknown() -> Result<()> {
	let text = "\
interface TestInterface extends BaseInterface {
	value(): int;
}
";
	let document = nib::reader::read(text)?;

	let outcome = rewrite(&document, &table(&[("BaseInterface", "kotlin.Base")]));

	assert_eq!(nib::writer::write_string(&outcome.document)?, "\
interface TestInterface extends kotlin.Base {
	value(): int;
}
");
	assert_eq!(outcome.applied.len(), 1);
	assert_eq!(outcome.applied[0].path, "unknown");

	Ok(())
}

#[test]
fn constructor_parameter_locator() -> Result<()> {
	let text = "\
class Test {
	constructor(value: String);
}
";
	let document = nib::reader::read(text)?;

	let outcome = rewrite(&document, &table(&[("String", "kotlin.String")]));

	assert_eq!(outcome.applied.len(), 1);
	assert_eq!(outcome.applied[0].path, "Parameters<Test[\"constructor\"]>[0]");

	Ok(())
}

#[test]
fn array_element_types_are_substituted() -> Result<()> {
	let text = "\
interface Test {
	lines(): String[];
}
";
	let document = nib::reader::read(text)?;

	let outcome = rewrite(&document, &table(&[("String", "kotlin.String")]));

	assert_eq!(nib::writer::write_string(&outcome.document)?, "\
interface Test {
	lines(): kotlin.String[];
}
");
	assert_eq!(outcome.applied[0].path, "ReturnType<Test[\"lines\"]>");

	Ok(())
}
