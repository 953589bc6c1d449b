//! Token-level building blocks shared by every grammar.
//!
//! Grammar rules are plain functions over a token slice:
//!
//! ```text
//! fn rule(input: Tokens<'_>) -> PResult<'_, Node>
//! ```
//!
//! On success a rule returns the unconsumed tokens together with its output,
//! the same `(rest, output)` convention nom uses for text. Because the input is
//! an immutable slice, backtracking is free: a failed alternative simply leaves
//! the caller holding the original slice.
//!
//! The cursor operations mirror a hand-written recursive descent parser:
//! [`peek_nth`] looks ahead, [`bump`] takes one token, [`eat_punct`] takes a
//! token only if it matches, and [`punct`] / [`keyword`] / [`ident`] expect a
//! token and report what was found instead.
//!
//! Token slices produced by [`Lexer::tokenize`](crate::lexer::Lexer::tokenize)
//! end with an end-of-input token. The helpers here never consume it, so a
//! rule can always look at "the next token", even at the end.

use crate::error::SyntaxError;
use crate::lexer::string::escape;
use crate::lexer::token::{Position, Token, TokenKind};

/// Input of every grammar rule.
pub type Tokens<'a> = &'a [Token];

/// Result of every grammar rule: the remaining tokens and the output.
pub type PResult<'a, O> = Result<(Tokens<'a>, O), SyntaxError>;

static END: Token = Token {
    kind: TokenKind::Eof,
    text: String::new(),
    pos: Position::new(0, 1, 1),
    end: 0,
};

/// The next token, or an end-of-input token if the slice is exhausted.
pub fn peek(input: Tokens<'_>) -> &Token {
    peek_nth(input, 0)
}

/// LL(k) lookahead. Past the end this keeps returning the end-of-input token.
pub fn peek_nth(input: Tokens<'_>, n: usize) -> &Token {
    input.get(n).or(input.last()).unwrap_or(&END)
}

/// Take the next token. End of input is returned but never consumed.
pub fn bump(input: Tokens<'_>) -> (Tokens<'_>, &Token) {
    match input.split_first() {
        Some((token, rest)) if !token.is_eof() => (rest, token),
        _ => (input, peek(input)),
    }
}

/// Take the next token if it is the punctuation `c`.
pub fn eat_punct(input: Tokens<'_>, c: char) -> Option<Tokens<'_>> {
    let (rest, token) = bump(input);
    token.is_punct(c).then_some(rest)
}

/// Expect a punctuation character.
pub fn punct(input: Tokens<'_>, c: char) -> PResult<'_, &Token> {
    let (rest, token) = bump(input);
    if token.is_punct(c) {
        Ok((rest, token))
    } else {
        Err(SyntaxError::expected(&format!("`{c}`"), token))
    }
}

/// Match a punctuation character written directly after `prev`.
pub fn adjacent_punct<'a>(input: Tokens<'a>, prev: &Token, c: char) -> Option<(Tokens<'a>, &'a Token)> {
    let (rest, token) = bump(input);
    (token.is_punct(c) && prev.touches(token)).then_some((rest, token))
}

/// Match a keyword (case-insensitive).
pub fn keyword<'a>(input: Tokens<'a>, kw: &str) -> PResult<'a, &'a Token> {
    let (rest, token) = bump(input);
    if token.is_keyword(kw) {
        Ok((rest, token))
    } else {
        Err(SyntaxError::expected(&format!("`{kw}`"), token))
    }
}

/// Match any identifier token.
pub fn ident(input: Tokens<'_>) -> PResult<'_, &Token> {
    let (rest, token) = bump(input);
    if token.kind == TokenKind::Ident {
        Ok((rest, token))
    } else {
        Err(SyntaxError::expected("an identifier", token))
    }
}

/// Succeed only when all input has been consumed.
pub fn expect_end(input: Tokens<'_>) -> Result<(), SyntaxError> {
    let token = peek(input);
    if token.is_eof() {
        Ok(())
    } else {
        Err(SyntaxError::new(
            format!("unexpected {token} after the end of the query"),
            token.pos,
        ))
    }
}

/// Run `rule` and require it to consume everything up to end of input.
pub fn complete<'a, O>(
    input: Tokens<'a>,
    rule: impl FnOnce(Tokens<'a>) -> PResult<'a, O>,
) -> Result<O, SyntaxError> {
    let (rest, output) = rule(input)?;
    expect_end(rest)?;
    Ok(output)
}

/// Error positioned at the next token.
pub fn error_at(input: Tokens<'_>, message: impl Into<String>) -> SyntaxError {
    SyntaxError::new(message, peek(input).pos)
}

/// A run of adjacent tokens read as a single word.
///
/// Names and values in this language may contain characters that are also
/// punctuation: `system.cpu.user`, `bar/hello`, `*value-*`, `200-299`. The lexer
/// splits them, and [`bareword`] glues them back together as long as no
/// whitespace separates the pieces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bareword<'a> {
    /// Concatenated token texts
    pub text: String,
    /// The tokens the word was built from
    pub tokens: Tokens<'a>,
}

impl Bareword<'_> {
    /// The word is exactly one number token
    pub fn is_number(&self) -> bool {
        self.tokens.len() == 1 && self.tokens[0].is_number()
    }

    /// The word starts with an identifier token
    pub fn starts_with_ident(&self) -> bool {
        self.tokens
            .first()
            .is_some_and(|t| t.kind == TokenKind::Ident)
    }
}

fn can_start_word(token: &Token) -> bool {
    matches!(
        token.kind,
        TokenKind::Ident | TokenKind::Int | TokenKind::Float
    ) || token.is_punct('*')
        || token.is_punct('!')
}

fn can_continue_word(token: &Token) -> bool {
    matches!(
        token.kind,
        TokenKind::Ident | TokenKind::Int | TokenKind::Float
    ) || ['.', '/', '-', '*'].iter().any(|&c| token.is_punct(c))
}

/// Parse a bareword: identifiers, numbers, `.`, `/`, `-` and `*` written
/// without whitespace in between, optionally starting with `!`.
pub fn bareword(input: Tokens<'_>) -> PResult<'_, Bareword<'_>> {
    let first = peek(input);
    if !can_start_word(first) {
        return Err(SyntaxError::expected("a name or value", first));
    }

    let mut len = 1;
    let mut text = first.text.clone();
    let mut prev = first;
    while let Some(token) = input.get(len) {
        if !prev.touches(token) || !can_continue_word(token) {
            break;
        }
        text.push_str(&token.text);
        prev = token;
        len += 1;
    }

    if first.is_punct('!') && len == 1 {
        return Err(SyntaxError::new(
            "expected a name after `!`",
            peek(&input[1..]).pos,
        ));
    }

    Ok((
        &input[len..],
        Bareword {
            text,
            tokens: &input[..len],
        },
    ))
}

/// Source text of a token, with strings quoted and escaped again.
pub fn source_text(token: &Token) -> String {
    match token.kind {
        TokenKind::Str(quote) => {
            let q = quote.as_char();
            format!("{q}{}{q}", escape(&token.text, quote))
        }
        _ => token.text.clone(),
    }
}
