// License: MIT

use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use crate::error::JsonError;
use crate::value::Value;

mod scan;

/// Parse JSON text into a value tree.
///
/// Never fails outright: malformed input is folded into the returned flag
/// while scanning continues, so the best-effort partial tree comes back
/// alongside `ok = false`. An unclosed container still appears in that tree,
/// attached to its parent. When nothing at all was recognized the value is
/// `Value::Null`.
///
/// The scan is a single left-to-right pass over the input with an explicit
/// container stack; nesting depth never grows the native call stack.
///
/// Known leniency: inside an object, a bare string with no name pending
/// becomes the next property name. On well-formed input this is exactly the
/// key position; on truncated input it can classify a would-be value as a
/// key without raising the flag.
pub fn parse(input: &str) -> (Value, bool) {
    let mut parser = Parser::new(input.trim());
    parser.run();
    parser.finish()
}

/// Parse JSON text, discarding the success flag.
pub fn parse_value(input: &str) -> Value {
    parse(input).0
}

/// Read a file and parse its contents.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<(Value, bool), JsonError> {
    let content = fs::read_to_string(&path).map_err(|e| JsonError::FileError {
        message: format!("Failed to read file: {}", e),
        path: path.as_ref().to_string_lossy().to_string(),
    })?;
    Ok(parse(&content))
}

/// A container still being filled, with the slot it goes to once closed.
struct Frame {
    node: Open,
    attach: Attach,
}

enum Open {
    Object(IndexMap<String, Value>),
    Array(Vec<Value>),
}

impl Open {
    fn into_value(self) -> Value {
        match self {
            Open::Object(entries) => Value::Object(entries),
            Open::Array(items) => Value::Array(items),
        }
    }
}

/// Where a finished container is attached. Decided when the container
/// *opens*, so a container left unclosed at end of input still lands in the
/// partial tree exactly where a closed one would have.
enum Attach {
    Root,
    Push,
    Key(String),
    Discard,
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
    stack: Vec<Frame>,
    /// A just-scanned string waiting to become a property name's value.
    pending: Option<String>,
    root: Option<Value>,
    root_taken: bool,
    failed: bool,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Parser {
            input,
            pos: 0,
            stack: Vec::new(),
            pending: None,
            root: None,
            root_taken: false,
            failed: false,
        }
    }

    fn run(&mut self) {
        while let Some(c) = scan::peek(self) {
            match c {
                '{' => {
                    scan::bump(self);
                    self.open(Open::Object(IndexMap::new()));
                }
                '[' => {
                    scan::bump(self);
                    self.open(Open::Array(Vec::new()));
                }
                '}' | ']' => {
                    scan::bump(self);
                    self.close();
                }
                '"' => {
                    scan::bump(self);
                    let text = scan::string_body(self);
                    self.attach(Value::String(text));
                }
                // Whitespace and separators carry no structure of their own;
                // the stack and the pending name already capture it.
                ' ' | '\t' | '\n' | '\r' | ',' | ':' => {
                    scan::bump(self);
                }
                _ => scan::literal(self),
            }
        }
    }

    /// Place a finished scalar. Containers go through `open` instead, so the
    /// string-as-key rule below never applies to them.
    fn attach(&mut self, value: Value) {
        let mut next_pending = None;
        match self.stack.last_mut() {
            None => {
                // The root slot is claimed once; later top-level values are
                // dropped without touching the flag.
                if !self.root_taken {
                    self.root_taken = true;
                    self.root = Some(value);
                }
            }
            Some(frame) => match &mut frame.node {
                Open::Array(items) => items.push(value),
                Open::Object(entries) => match self.pending.take() {
                    Some(name) => {
                        entries.insert(name, value);
                    }
                    // A bare string inside an object is the next key.
                    None => match value {
                        Value::String(text) => next_pending = Some(text),
                        _ => self.failed = true,
                    },
                },
            },
        }
        self.pending = next_pending;
    }

    /// Open a container: decide its future slot now, then make it the top.
    fn open(&mut self, node: Open) {
        let attach = match self.stack.last() {
            None => {
                if self.root_taken {
                    Attach::Discard
                } else {
                    self.root_taken = true;
                    Attach::Root
                }
            }
            Some(frame) => match &frame.node {
                Open::Array(_) => Attach::Push,
                Open::Object(_) => match self.pending.take() {
                    Some(name) => Attach::Key(name),
                    None => {
                        // A container cannot serve as a property name.
                        self.failed = true;
                        Attach::Discard
                    }
                },
            },
        };
        self.pending = None;
        self.stack.push(Frame { node, attach });
    }

    /// Close the top container and attach it where `open` decided.
    fn close(&mut self) {
        match self.stack.pop() {
            Some(frame) => self.attach_closed(frame),
            // A closer with nothing open.
            None => self.failed = true,
        }
    }

    fn attach_closed(&mut self, frame: Frame) {
        let value = frame.node.into_value();
        match frame.attach {
            Attach::Root => self.root = Some(value),
            Attach::Discard => {}
            Attach::Push => {
                if let Some(Frame { node: Open::Array(items), .. }) = self.stack.last_mut() {
                    items.push(value);
                }
            }
            Attach::Key(name) => {
                if let Some(Frame { node: Open::Object(entries), .. }) = self.stack.last_mut() {
                    entries.insert(name, value);
                }
            }
        }
    }

    /// Flush still-open containers into the tree and report the outcome.
    fn finish(mut self) -> (Value, bool) {
        if !self.stack.is_empty() {
            self.failed = true;
        }
        while let Some(frame) = self.stack.pop() {
            self.attach_closed(frame);
        }
        (self.root.unwrap_or(Value::Null), !self.failed)
    }
}

#[cfg(test)]
mod tests;
