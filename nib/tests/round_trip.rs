use anyhow::Result;
use pretty_assertions::assert_eq;

#[test]
fn read_write_read() -> Result<()> {
	let text = "\
/**
 * @packageDocumentation
 * Package: java.util
 */

declare interface Map<K, V> extends Object {
	size(): number;
	get(key: K): V;
	keySet(): Set<K>;
	put(key: K, value: V): V;
	empty: boolean;
}
";

	let document = nib::reader::read(text)?;
	let written = nib::writer::write_string(&document)?;

	assert_eq!(written, text, "left: written, right: input");

	let reread = nib::reader::read(&written)?;
	assert_eq!(reread, document);

	Ok(())
}

#[test]
fn multiple_declarations() -> Result<()> {
	let text = "\
class A {
	constructor(value: int);
}

interface B {
	value(): int;
}
";

	let document = nib::reader::read(text)?;
	assert_eq!(document.decls.len(), 2);

	let written = nib::writer::write_string(&document)?;
	assert_eq!(written, text, "left: written, right: input");

	Ok(())
}
