//! Bus syntax: `[0xa0 0x00 [0xa1 r:4]`
//!
//! - `[` / `{`: START (REPEATED-START if one is outstanding)
//! - `]` / `}`: STOP
//! - numbers (`0x..`, `0b..`, decimal): write a byte
//! - `r`: read a byte
//! - `"text"`: write the bytes of `text`
//! - `:N` after a write or read repeats it `N` times

use std::iter::Peekable;
use std::str::CharIndices;

use crate::sequencer::Token;

pub const MAX_REPEAT: u32 = 0x1_0000;

type Chars<'a> = Peekable<CharIndices<'a>>;

/// the alphanumeric word starting at `start` (already consumed)
fn take_word<'a>(input: &'a str, start: usize, chars: &mut Chars<'a>) -> &'a str {
	let mut end = input.len();
	while let Some(&(i, c)) = chars.peek() {
		if !c.is_ascii_alphanumeric() {
			end = i;
			break;
		}
		chars.next();
	}
	&input[start..end]
}

fn take_repeat<'a>(input: &'a str, chars: &mut Chars<'a>) -> crate::AResult<u32> {
	match chars.peek() {
		Some(&(i, ':')) => {
			chars.next();
			let word = take_word(input, i + 1, chars);
			let count = with_context!(("invalid repeat count {:?}", word), crate::parse_number(word))?;
			ensure!(count >= 1 && count <= MAX_REPEAT, "repeat count {} out of range (1 to {})", count, MAX_REPEAT);
			Ok(count)
		},
		_ => Ok(1),
	}
}

pub fn parse(input: &str) -> crate::AResult<Vec<Token>> {
	let mut tokens = Vec::new();
	let mut chars = input.char_indices().peekable();
	while let Some((pos, c)) = chars.next() {
		let token = match c {
			'[' => Token::Start,
			'{' => Token::StartAlt,
			']' => Token::Stop,
			'}' => Token::StopAlt,
			'r' | 'R' => Token::Read,
			'0'..='9' => {
				let word = take_word(input, pos, &mut chars);
				Token::Write(crate::parse_byte(word)?)
			},
			'"' => {
				let rest = &input[pos + 1..];
				let len = match rest.find('"') {
					Some(len) => len,
					None => bail!("unterminated string at position {}", pos),
				};
				tokens.extend(rest[..len].bytes().map(Token::Write));
				// skip the text and the closing quote
				for _ in rest[..=len].chars() {
					chars.next();
				}
				continue;
			},
			',' => continue,
			c if c.is_whitespace() => continue,
			c => bail!("unexpected {:?} at position {}", c, pos),
		};
		let count = take_repeat(input, &mut chars)?;
		match token {
			Token::Write(_) | Token::Read => {
				tokens.extend(std::iter::repeat(token).take(count as usize));
			},
			_ => {
				ensure!(count == 1, "{:?} can't be repeated", token);
				tokens.push(token);
			},
		}
	}
	Ok(tokens)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::sequencer::Token::*;

	#[test]
	fn parses_transaction() {
		assert_eq!(parse("[0xa0 0x00 [0xa1 r:3]").unwrap(), vec![
			Start, Write(0xa0), Write(0x00), Start, Write(0xa1), Read, Read, Read, Stop,
		]);
	}

	#[test]
	fn separators_and_formats() {
		assert_eq!(parse("{0b1010,10 , 0X0a}").unwrap(), vec![
			StartAlt, Write(10), Write(10), Write(10), StopAlt,
		]);
		assert_eq!(parse("0x55:2 R").unwrap(), vec![Write(0x55), Write(0x55), Read]);
		assert_eq!(parse("").unwrap(), vec![]);
	}

	#[test]
	fn strings() {
		assert_eq!(parse("[0xa0 \"hi\"]").unwrap(), vec![
			Start, Write(0xa0), Write(b'h'), Write(b'i'), Stop,
		]);
		assert!(parse("[\"open").is_err());
	}

	#[test]
	fn rejects_garbage() {
		assert!(parse("[0x100]").is_err());
		assert!(parse("r:0").is_err());
		assert!(parse("[:2").is_err());
		assert!(parse("x").is_err());
		assert!(parse("0xzz").is_err());
	}
}
