/// Removes block (`/* ... */`) and line (`// ...`) comments from the text.
///
/// Declaration text contains no string literals, so no quoting is honored.
pub(crate) fn strip_comments(text: &str) -> String {
	let mut out = String::with_capacity(text.len());

	let chars: Vec<char> = text.chars().collect();
	let mut i = 0;

	while i < chars.len() {
		if chars[i] == '/' && chars.get(i + 1) == Some(&'*') {
			i += 2;
			while i < chars.len() && !(chars[i] == '*' && chars.get(i + 1) == Some(&'/')) {
				i += 1;
			}
			// an unterminated block comment just swallows the rest
			i = (i + 2).min(chars.len());
		} else if chars[i] == '/' && chars.get(i + 1) == Some(&'/') {
			while i < chars.len() && chars[i] != '\n' {
				i += 1;
			}
		} else {
			out.push(chars[i]);
			i += 1;
		}
	}

	out
}

#[cfg(test)]
mod testing {
	use super::strip_comments;

	#[test]
	fn strips_both_comment_styles() {
		let text = "package a.b; // trailing\n/* block\nspanning lines */class X {";
		assert_eq!(strip_comments(text), "package a.b; \nclass X {");
	}

	#[test]
	fn leaves_plain_text_alone() {
		assert_eq!(strip_comments("val x: Int"), "val x: Int");
	}
}
