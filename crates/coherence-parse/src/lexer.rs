//! Line lexer for the QASM dialect.
//!
//! Whitespace is a token rather than skipped: the dialect distinguishes
//! `h q[0];` from `hq[0];`, and the line matcher needs to see the gap.

use logos::Logos;

/// Tokens of a single statement line.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token {
    #[regex(r"[ \t\r\x0B\x0C]+")]
    Space,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    #[regex(r"[0-9]+")]
    Digits,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,
}

/// Position within a line, advanced one token at a time.
///
/// `Copy`, so a lookahead is just a copy that gets thrown away.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cursor<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(line: &'a str) -> Self {
        Self { line, pos: 0 }
    }

    /// Next token and its text, or `None` at end of line or on a character
    /// the lexer does not know.
    pub(crate) fn next_token(&mut self) -> Option<(Token, &'a str)> {
        let rest = &self.line[self.pos..];
        let mut lex = Token::lexer(rest);
        let token = lex.next()?.ok()?;
        let span = lex.span();
        self.pos += span.end;
        Some((token, &rest[span]))
    }

    /// Consume a token of the given kind, returning its text.
    pub(crate) fn expect(&mut self, kind: Token) -> Option<&'a str> {
        match self.next_token()? {
            (token, text) if token == kind => Some(text),
            _ => None,
        }
    }

    /// Consume an identifier spelled exactly `word`.
    pub(crate) fn keyword(&mut self, word: &str) -> Option<()> {
        (self.expect(Token::Ident)? == word).then_some(())
    }

    /// Consume whitespace if present.
    pub(crate) fn skip_space(&mut self) {
        let mut ahead = *self;
        if let Some((Token::Space, _)) = ahead.next_token() {
            *self = ahead;
        }
    }

    /// Consume raw text up to (not including) `delim`. Fails if `delim` never
    /// occurs or the text would be empty.
    pub(crate) fn take_until(&mut self, delim: char) -> Option<&'a str> {
        let rest = &self.line[self.pos..];
        let end = rest.find(delim)?;
        if end == 0 {
            return None;
        }
        self.pos += end;
        Some(&rest[..end])
    }
}
