use once_cell::sync::Lazy;
use regex::Regex;

use super::Parser;
use crate::value::Value;

/// Number grammar: optional sign, leading digits, optional fraction,
/// optional exponent. The longest match at the current position is consumed.
static NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?[0-9]+([.][0-9]*)?([eE][+-]?[0-9]*)?").expect("number pattern is valid")
});

/// Advance the cursor one character.
pub(super) fn bump(parser: &mut Parser) -> Option<char> {
    let c = peek(parser)?;
    parser.pos += c.len_utf8();
    Some(c)
}

/// The character at the cursor, without consuming it.
pub(super) fn peek(parser: &Parser) -> Option<char> {
    parser.input[parser.pos..].chars().next()
}

fn tail<'a>(parser: &Parser<'a>) -> &'a str {
    &parser.input[parser.pos..]
}

/// Scan a string literal body, the opening quote already consumed.
///
/// Characters are copied verbatim until an unescaped closing quote. A
/// backslash escapes the next character through the fixed table below; an
/// unknown escape marks the parse failed and the character is dropped,
/// scanning continues. End of input closes the literal.
pub(super) fn string_body(parser: &mut Parser) -> String {
    let mut text = String::new();
    while let Some(c) = bump(parser) {
        match c {
            '"' => break,
            '\\' => match bump(parser) {
                Some(esc) => match unescape(esc) {
                    Some(decoded) => text.push(decoded),
                    None => parser.failed = true,
                },
                // The input ended mid-escape.
                None => break,
            },
            other => text.push(other),
        }
    }
    text
}

/// The fixed escape table; the writer holds the reverse mapping.
fn unescape(c: char) -> Option<char> {
    match c {
        '\\' => Some('\\'),
        't' => Some('\t'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        'b' => Some('\u{0008}'),
        'f' => Some('\u{000C}'),
        '"' => Some('"'),
        _ => None,
    }
}

/// Recognize `true`/`false`/`null` by direct prefix match, or a number by
/// the fixed grammar. Anything else marks the parse failed and one character
/// is skipped.
pub(super) fn literal(parser: &mut Parser) {
    let rest = tail(parser);
    if rest.starts_with("true") {
        parser.pos += 4;
        parser.attach(Value::Bool(true));
    } else if rest.starts_with("false") {
        parser.pos += 5;
        parser.attach(Value::Bool(false));
    } else if rest.starts_with("null") {
        parser.pos += 4;
        parser.attach(Value::Null);
    } else if let Some(m) = NUMBER.find(rest) {
        parser.pos += m.end();
        match m.as_str().parse::<f64>() {
            Ok(n) => parser.attach(Value::Number(n)),
            // Matched the grammar but not the float syntax, e.g. a bare
            // trailing exponent like "1e".
            Err(_) => parser.failed = true,
        }
    } else {
        parser.failed = true;
        bump(parser);
    }
}
