//! Grouping clause parsing: `by {tag1, tag2}`.
//!
//! Each entry is either a tag key or `*` alone. At least one entry is
//! required.
//!
//! # Examples
//!
//! ```rust
//! use rusty_metric_query_parser::lexer::Lexer;
//! use rusty_metric_query_parser::parser::grouping::grouping;
//!
//! let tokens = Lexer::new().tokenize("by {host, availability-zone}").unwrap();
//! let (_, g) = grouping(&tokens).unwrap();
//! assert_eq!(g.entries, vec!["host", "availability-zone"]);
//! assert_eq!(g.to_string(), "by {host,availability-zone}");
//! ```

use std::fmt;

use crate::error::SyntaxError;
use crate::lexer::identifier::Keyword;
use crate::parser::primitives::{PResult, Tokens, bareword, bump, keyword, peek, punct};

/// Tag keys a query is grouped by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouping {
    pub entries: Vec<String>,
}

impl Grouping {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Grouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "by {{{}}}", self.entries.join(","))
    }
}

/// Parse `by { entry (, entry)* }`.
pub fn grouping(input: Tokens<'_>) -> PResult<'_, Grouping> {
    let (input, _) = keyword(input, Keyword::By.as_str())?;
    let (mut input, _) = punct(input, '{')?;
    let mut entries = Vec::new();
    loop {
        let (rest, entry) = grouping_entry(input)?;
        entries.push(entry);
        input = rest;

        let (rest, token) = bump(input);
        if token.is_punct('}') {
            return Ok((rest, Grouping { entries }));
        }
        if !token.is_punct(',') {
            return Err(SyntaxError::expected("`,` or `}` in grouping", token));
        }
        input = rest;
    }
}

/// A tag key, or `*` on its own.
fn grouping_entry(input: Tokens<'_>) -> PResult<'_, String> {
    let token = peek(input);
    if token.is_punct('*') {
        let (rest, star) = bump(input);
        let after = peek(rest);
        if star.touches(after) && !after.is_punct(',') && !after.is_punct('}') {
            return Err(SyntaxError::new(
                "a grouping wildcard must be `*` on its own",
                star.pos,
            ));
        }
        return Ok((rest, "*".to_string()));
    }
    let (rest, word) = bareword(input)?;
    if !word.starts_with_ident() {
        return Err(SyntaxError::expected("a tag key", token));
    }
    Ok((rest, word.text))
}
