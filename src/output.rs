use std::io::Write;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::parser::Document;
use crate::value::Value;

/// How values are laid out when written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    Compact,
    /// One member per line, nested levels indented by repeating the unit.
    Indented(String),
}

/// Write one value followed by a newline.
pub fn write_value<W: Write>(
    out: &mut W,
    value: &Value,
    layout: &Layout,
) -> serde_json::Result<()> {
    match layout {
        Layout::Compact => serde_json::to_writer(&mut *out, value)?,
        Layout::Indented(unit) => {
            let formatter = PrettyFormatter::with_indent(unit.as_bytes());
            let mut serializer = serde_json::Serializer::with_formatter(&mut *out, formatter);
            value.serialize(&mut serializer)?;
        }
    }
    out.write_all(b"\n").map_err(serde_json::Error::io)
}

/// Write every top-level value of `document`, one JSON text per value.
pub fn write_document<W: Write>(
    out: &mut W,
    document: &Document,
    layout: &Layout,
) -> serde_json::Result<()> {
    document
        .values()
        .iter()
        .try_for_each(|value| write_value(out, value, layout))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse_program, Grammar};

    fn render(args: &[&str], layout: Layout) -> String {
        let document = parse_program(args, Grammar::Sequence).unwrap();
        let mut out = Vec::new();
        write_document(&mut out, &document, &layout).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn compact_values_one_per_line() {
        assert_eq!(
            render(&["1", "str", "x", ".[", "]"], Layout::Compact),
            "1\n\"x\"\n[]\n"
        );
    }

    #[test]
    fn indented_with_custom_unit() {
        assert_eq!(
            render(
                &["a:", ".[", "1", "]", "b:", "num", "1.50"],
                Layout::Indented("  ".into())
            ),
            "{\n  \"a\": [\n    1\n  ],\n  \"b\": 1.50\n}\n"
        );
    }

    #[test]
    fn empty_sequence_writes_nothing() {
        assert_eq!(render(&[], Layout::Compact), "");
    }

    #[test]
    fn single_null_document() {
        let mut out = Vec::new();
        write_document(&mut out, &Document::Single(Value::Null), &Layout::Compact).unwrap();
        assert_eq!(out, b"null\n");
    }
}
