//! Crate for reading and writing structural declaration documents.
//!
//! A declaration document is a language-neutral description of one or more
//! class or interface declarations: typed members (methods with parameter
//! lists and a return type, properties with a type expression, constructors),
//! supertype lists, and generic type arguments.
//!
//! The tree lives in the [`tree`] module. Text can be turned into a tree with
//! [`reader::read`], and a tree back into text with [`writer::write_string`].

pub mod tree;

pub mod reader;
pub mod writer;
