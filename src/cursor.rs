use crate::error::SyntaxError;

/// A forward-only view over the argument list with one token of lookahead.
#[derive(Debug)]
pub(crate) struct Cursor<'a, S> {
    tokens: &'a [S],
    index: usize,
}

impl<'a, S: AsRef<str>> Cursor<'a, S> {
    pub(crate) fn new(tokens: &'a [S]) -> Self {
        Self { tokens, index: 0 }
    }

    pub(crate) fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.index).map(AsRef::as_ref)
    }

    pub(crate) fn next(&mut self) -> Option<&'a str> {
        let token = self.peek()?;
        self.index += 1;
        Some(token)
    }

    pub(crate) fn must_peek(&self, expected: &'static str) -> Result<&'a str, SyntaxError> {
        self.peek().ok_or(SyntaxError::UnexpectedEnd { expected })
    }

    pub(crate) fn must_next(&mut self, expected: &'static str) -> Result<&'a str, SyntaxError> {
        let token = self.must_peek(expected)?;
        self.index += 1;
        Ok(token)
    }

    /// Position of the token [`Self::peek`] would return.
    pub(crate) fn position(&self) -> usize {
        self.index
    }

    /// Position of the most recently consumed token.
    pub(crate) fn last_position(&self) -> usize {
        self.index.saturating_sub(1)
    }
}
