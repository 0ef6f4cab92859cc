//! Recursive-descent parser turning command-line arguments into [`Value`]s.
//!
//! One argument is one token. Objects are written as `[ key: value ... ]`, where the brackets may
//! be left off when the whole argument list is one object; arrays as `.[ value ... ]`. A bare
//! token that is neither a keyword nor a number is a string. The type assertions `str`, `num`,
//! `bool`, `json` and `jsonstr` force the meaning of what follows, and `key` introduces a key
//! that is taken verbatim.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;
use tracing::*;

use crate::coerce;
use crate::cursor::Cursor;
use crate::error::SyntaxError;
use crate::value::Value;

/// How arguments that do not start with an object key are read.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Grammar {
    /// Any number of independent top-level values.
    #[default]
    Sequence,
    /// Exactly one top-level value.
    Single,
}

#[derive(Debug, Error)]
#[error("unknown grammar {0:?}, expected \"sequence\" or \"single\"")]
pub struct UnknownGrammar(String);

impl FromStr for Grammar {
    type Err = UnknownGrammar;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sequence" => Ok(Grammar::Sequence),
            "single" => Ok(Grammar::Single),
            _ => Err(UnknownGrammar(s.to_owned())),
        }
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grammar::Sequence => f.write_str("sequence"),
            Grammar::Single => f.write_str("single"),
        }
    }
}

/// The outcome of a successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    Single(Value),
    Sequence(Vec<Value>),
}

impl Document {
    /// The top-level values in output order.
    pub fn values(&self) -> &[Value] {
        match self {
            Document::Single(value) => std::slice::from_ref(value),
            Document::Sequence(values) => values,
        }
    }
}

/// Parse a whole argument list.
///
/// If the first argument is an object key (`name:` or `key`), the entire list is one object and
/// `a: b` means the same as `[ a: b ]`. Otherwise the list is read according to `grammar`.
#[instrument(level = "debug", skip(tokens), fields(args = tokens.len()))]
pub fn parse_program<S: AsRef<str>>(
    tokens: &[S],
    grammar: Grammar,
) -> Result<Document, SyntaxError> {
    let mut cursor = Cursor::new(tokens);

    let Some(first) = cursor.peek() else {
        debug!("no arguments");
        return Ok(match grammar {
            Grammar::Sequence => Document::Sequence(Vec::new()),
            Grammar::Single => Document::Single(Value::Null),
        });
    };

    if coerce::is_key_token(first) {
        debug!("leading key, reading all arguments as one object");
        let object = Value::Object(parse_key_values(&mut cursor)?);
        if let Some(arg) = cursor.peek() {
            return Err(SyntaxError::TrailingArgument {
                arg: arg.to_owned(),
                position: cursor.position(),
            });
        }
        return Ok(match grammar {
            Grammar::Sequence => Document::Sequence(vec![object]),
            Grammar::Single => Document::Single(object),
        });
    }

    match grammar {
        Grammar::Sequence => {
            let mut values = Vec::new();
            while let Some(arg) = cursor.peek() {
                if arg == "]" {
                    return Err(SyntaxError::StrayCloseBracket {
                        position: cursor.position(),
                    });
                }
                let value = parse_value(&mut cursor)?;
                debug!(kind = value.kind_desc(), "top-level value");
                values.push(value);
            }
            Ok(Document::Sequence(values))
        }
        Grammar::Single => {
            let value = parse_value(&mut cursor)?;
            if let Some(arg) = cursor.peek() {
                return Err(SyntaxError::MultipleTopLevelValues {
                    arg: arg.to_owned(),
                    position: cursor.position(),
                });
            }
            Ok(Document::Single(value))
        }
    }
}

/// Members up to a `]` or the end of the arguments. The `]` itself is left for the caller.
fn parse_key_values<S: AsRef<str>>(
    cursor: &mut Cursor<'_, S>,
) -> Result<IndexMap<String, Value>, SyntaxError> {
    let mut members = IndexMap::new();
    loop {
        let key = match cursor.peek() {
            None | Some("]") => return Ok(members),
            Some("key") => {
                cursor.next();
                cursor.must_next("key argument")?
            }
            Some(arg) => match coerce::strip_key_colon(arg) {
                Some(key) => {
                    cursor.next();
                    key
                }
                None => {
                    return Err(SyntaxError::ExpectedKey {
                        arg: arg.to_owned(),
                        position: cursor.position(),
                    })
                }
            },
        };
        let value = parse_value(cursor)?;
        trace!(key, kind = value.kind_desc(), "member");
        members.insert(key.to_owned(), value);
    }
}

fn parse_value<S: AsRef<str>>(cursor: &mut Cursor<'_, S>) -> Result<Value, SyntaxError> {
    let arg = cursor.must_next("value")?;
    let position = cursor.last_position();

    let value = match arg {
        "[" => {
            let members = parse_key_values(cursor)?;
            // Members only stop at `]` or the end, so the only way to miss the `]` is running out.
            cursor.must_next("]")?;
            Value::Object(members)
        }
        ".[" => {
            let mut items = Vec::new();
            while cursor.must_peek("]")? != "]" {
                items.push(parse_value(cursor)?);
            }
            cursor.next();
            Value::Array(items)
        }
        "]" => return Err(SyntaxError::StrayCloseBracket { position }),
        "null" => Value::Null,
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "str" => Value::String(cursor.must_next("str argument")?.to_owned()),
        "json" => {
            let text = cursor.must_next("json argument")?;
            let json: serde_json::Value =
                serde_json::from_str(text).map_err(|source| SyntaxError::InvalidEmbeddedJson {
                    arg: text.to_owned(),
                    position: cursor.last_position(),
                    source,
                })?;
            Value::from(json)
        }
        "jsonstr" => {
            let inner = parse_value(cursor)?;
            let text = serde_json::to_string(&inner)
                .map_err(|source| SyntaxError::Unencodable { position, source })?;
            Value::String(text)
        }
        "num" => {
            let text = cursor.must_next("numeric value")?;
            Value::Number(coerce::assert_number(text, cursor.last_position())?)
        }
        "bool" => {
            let text = cursor.must_next("boolean value")?;
            Value::Bool(coerce::assert_bool(text, cursor.last_position())?)
        }
        other if coerce::is_key_token(other) => {
            return Err(SyntaxError::UnexpectedKey { position });
        }
        other => coerce::auto_detect(other),
    };

    Ok(value)
}
