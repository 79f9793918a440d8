//! Shell-style tokenization of typed command lines.

use thiserror::Error;

/// Errors for lines that cannot be split into words
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError {
	#[error("unbalanced quotes in input")]
	UnbalancedQuotes,

	#[error("trailing backslash in input")]
	TrailingBackslash,
}

/// Split one typed line into command and argument words.
///
/// Whitespace separates words. Single quotes preserve their content
/// literally; double quotes honor backslash escapes (`\"`, `\\`, `\n`,
/// `\t`, `\r`); a backslash outside quotes escapes the next character.
/// Adjacent segments join into one word, so `foo"bar"` is `foobar` and
/// `''` is an empty word.
pub fn split_line(line: &str) -> Result<Vec<String>, TokenizeError> {
	let mut words = Vec::new();
	let mut current = String::new();
	let mut in_word = false;
	let mut chars = line.chars();

	while let Some(c) = chars.next() {
		match c {
			c if c.is_whitespace() => {
				if in_word {
					words.push(std::mem::take(&mut current));
					in_word = false;
				}
			}
			'\'' => {
				in_word = true;
				loop {
					match chars.next() {
						Some('\'') => break,
						Some(c) => current.push(c),
						None => return Err(TokenizeError::UnbalancedQuotes),
					}
				}
			}
			'"' => {
				in_word = true;
				loop {
					match chars.next() {
						Some('"') => break,
						Some('\\') => match chars.next() {
							Some(e) => current.push(unescape(e)),
							None => return Err(TokenizeError::UnbalancedQuotes),
						},
						Some(c) => current.push(c),
						None => return Err(TokenizeError::UnbalancedQuotes),
					}
				}
			}
			'\\' => {
				in_word = true;
				match chars.next() {
					Some(c) => current.push(c),
					None => return Err(TokenizeError::TrailingBackslash),
				}
			}
			c => {
				in_word = true;
				current.push(c);
			}
		}
	}

	if in_word {
		words.push(current);
	}

	Ok(words)
}

fn unescape(c: char) -> char {
	match c {
		'n' => '\n',
		't' => '\t',
		'r' => '\r',
		other => other,
	}
}
