//! Pretty syntax error reports on stderr.
//!
//! The arguments are laid out on one line the way a shell user would have typed them, and the
//! offending argument is labelled.

use std::ops::Range;

use argjson::{ErrorKind, SyntaxError};
use ariadne::{Color, Label, Report, ReportKind, Source};

/// The arguments joined by spaces, with the character span of each argument.
#[derive(Debug)]
struct ArgumentLine {
    text: String,
    spans: Vec<Range<usize>>,
}

impl ArgumentLine {
    fn new(args: &[String]) -> Self {
        let mut text = String::new();
        let mut spans = Vec::with_capacity(args.len());
        let mut offset = 0;

        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                text.push(' ');
                offset += 1;
            }
            let shown = if arg.is_empty() || arg.contains(char::is_whitespace) {
                format!("{arg:?}")
            } else {
                arg.clone()
            };
            // ariadne counts characters, not bytes.
            let width = shown.chars().count();
            spans.push(offset..offset + width);
            offset += width;
            text.push_str(&shown);
        }

        Self { text, spans }
    }

    /// The span to blame for `error`. Running out of arguments blames the last one.
    fn blame(&self, error: &SyntaxError) -> Range<usize> {
        let index = error
            .position()
            .unwrap_or_else(|| self.spans.len().saturating_sub(1));
        self.spans.get(index).cloned().unwrap_or(0..0)
    }
}

fn label_message(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::UnexpectedEnd => "more arguments were expected after this",
        ErrorKind::ExpectedKey => "expected a key ending in `:` or the `key` keyword",
        ErrorKind::UnexpectedKey => "expected a value, found a key",
        ErrorKind::ExpectedCloseBracket => "expected `]` to close the object",
        ErrorKind::StrayCloseBracket => "this `]` does not close anything",
        ErrorKind::TrailingArgument => "left over after the top-level object",
        ErrorKind::MultipleTopLevelValues => "only one top-level value is allowed",
        ErrorKind::InvalidNumber => "not a number",
        ErrorKind::NonFiniteNumber => "JSON has no infinities or NaN",
        ErrorKind::InvalidBoolean => {
            "not one of 1, t, T, TRUE, true, True, 0, f, F, FALSE, false, False"
        }
        ErrorKind::InvalidEmbeddedJson => "not well-formed JSON",
        ErrorKind::Unencodable => "cannot be encoded",
    }
}

pub fn emit(args: &[String], error: &SyntaxError) -> std::io::Result<()> {
    let line = ArgumentLine::new(args);
    let span = line.blame(error);
    let id = String::from("arguments");

    let mut message = error.to_string();
    if error.kind() == ErrorKind::InvalidEmbeddedJson {
        if let Some(source) = std::error::Error::source(error) {
            message = format!("{message}: {source}");
        }
    }

    Report::build(ReportKind::Error, &id, span.start)
        .with_message(message)
        .with_label(
            Label::new((&id, span))
                .with_message(label_message(error.kind()))
                .with_color(Color::Red),
        )
        .finish()
        .eprint((&id, Source::from(line.text)))
}

#[cfg(test)]
mod tests {
    use argjson::{parse_program, Grammar};

    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn spans_cover_each_argument() {
        let line = ArgumentLine::new(&args(&["a:", "héllo", "two words", ""]));

        assert_eq!(line.text, r#"a: héllo "two words" """#);
        assert_eq!(line.spans, vec![0..2, 3..8, 9..20, 21..23]);
    }

    #[test]
    fn blames_offending_argument() {
        let list = args(&["x:", "num", "bad"]);
        let err = parse_program(&list, Grammar::Sequence).unwrap_err();
        let line = ArgumentLine::new(&list);

        assert_eq!(line.blame(&err), 7..10);
    }

    #[test]
    fn running_out_blames_last_argument() {
        let list = args(&[".[", "1"]);
        let err = parse_program(&list, Grammar::Sequence).unwrap_err();
        let line = ArgumentLine::new(&list);

        assert_eq!(err.kind(), ErrorKind::UnexpectedEnd);
        assert_eq!(line.blame(&err), 3..4);
    }

    #[test]
    fn bad_boolean_label_lists_accepted_literals() {
        let list = args(&["bool", "yes"]);
        let err = parse_program(&list, Grammar::Sequence).unwrap_err();
        let line = ArgumentLine::new(&list);

        assert_eq!(err.kind(), ErrorKind::InvalidBoolean);
        assert_eq!(line.blame(&err), 5..8);
        assert!(label_message(err.kind()).starts_with("not one of 1, t, T,"));
    }
}
