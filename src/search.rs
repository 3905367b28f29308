//! Search patterns.
//!
//! A [`Search`] is what callers hand in: either a literal string or an
//! already compiled [`Pattern`]. It is resolved once, before any parsing,
//! into a `Pattern` that knows how to find occurrences inside one text
//! node's data.
//!
//! Patterns use a backtracking engine so lookahead and lookbehind work.
//! Capture groups are allowed but only the whole match is ever used.

use std::ops::Range;

use fancy_regex::Regex;

use crate::error::{Error, Result};
use crate::patterns::PATTERN_LITERAL;

/// The search argument of [`crate::replace_in_html`].
#[derive(Debug, Clone)]
pub enum Search {
    /// Matched literally, every occurrence.
    Literal(String),
    /// Matched with the pattern's own flags.
    Pattern(Pattern),
}

impl Search {
    /// Resolve into a compiled pattern.
    pub fn into_pattern(self) -> Result<Pattern> {
        match self {
            Self::Literal(text) => Pattern::literal(&text),
            Self::Pattern(pattern) => Ok(pattern),
        }
    }
}

impl From<&str> for Search {
    fn from(text: &str) -> Self {
        Self::Literal(text.to_string())
    }
}

impl From<String> for Search {
    fn from(text: String) -> Self {
        Self::Literal(text)
    }
}

impl From<Pattern> for Search {
    fn from(pattern: Pattern) -> Self {
        Self::Pattern(pattern)
    }
}

/// A compiled search pattern with JavaScript-style matching modes.
///
/// # Example
///
/// ```rust
/// use replace_in_html::Pattern;
///
/// let pattern = Pattern::parse("/m(eow|iau)/gi")?;
/// assert!(pattern.is_global());
/// assert_eq!(pattern.occurrences("Meow miau")?, vec![0..4, 5..9]);
/// # Ok::<(), replace_in_html::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    global: bool,
    sticky: bool,
}

impl Pattern {
    /// Compile `source` as a non-global, case-sensitive pattern.
    pub fn new(source: &str) -> Result<Self> {
        Ok(Self {
            regex: compile(source)?,
            global: false,
            sticky: false,
        })
    }

    /// Compile `source` with JavaScript-style flags.
    ///
    /// - `g`: replace every occurrence
    /// - `y`: sticky, the match must start at the beginning of the text node
    /// - `i`: case-insensitive
    /// - `m`: `^` and `$` match at line boundaries
    /// - `s`: `.` matches newlines
    /// - `u`, `d`, `v`: accepted, no effect
    pub fn with_flags(source: &str, flags: &str) -> Result<Self> {
        let mut seen = String::new();
        let mut inline = String::new();
        let mut global = false;
        let mut sticky = false;

        for flag in flags.chars() {
            if seen.contains(flag) {
                return Err(Error::InvalidFlag(flag));
            }
            seen.push(flag);

            match flag {
                'g' => global = true,
                'y' => sticky = true,
                'i' | 'm' | 's' => inline.push(flag),
                'u' | 'd' | 'v' => {}
                other => return Err(Error::InvalidFlag(other)),
            }
        }

        let regex = if inline.is_empty() {
            compile(source)?
        } else {
            compile(&format!("(?{inline}){source}"))?
        };

        Ok(Self {
            regex,
            global,
            sticky,
        })
    }

    /// Parse a `/source/flags` literal.
    pub fn parse(literal: &str) -> Result<Self> {
        let caps = PATTERN_LITERAL.captures(literal).ok_or_else(|| {
            Error::InvalidPattern(format!("expected /source/flags, got {literal:?}"))
        })?;

        let source = caps.get(1).map_or("", |m| m.as_str());
        let flags = caps.get(2).map_or("", |m| m.as_str());
        Self::with_flags(source, flags)
    }

    /// A global pattern matching `text` literally.
    pub fn literal(text: &str) -> Result<Self> {
        Ok(Self::new(&fancy_regex::escape(text))?.global())
    }

    /// Replace every occurrence instead of only the first one.
    #[must_use]
    pub fn global(mut self) -> Self {
        self.global = true;
        self
    }

    /// Only match at the very start of each text node.
    #[must_use]
    pub fn sticky(mut self) -> Self {
        self.sticky = true;
        self
    }

    #[must_use]
    pub fn is_global(&self) -> bool {
        self.global
    }

    #[must_use]
    pub fn is_sticky(&self) -> bool {
        self.sticky
    }

    /// The compiled expression.
    #[must_use]
    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }

    /// Byte ranges of the occurrences to replace in `text`, left to right.
    ///
    /// Sticky patterns ignore the global flag.
    ///
    /// Ranges are the positions the expression matched at, never found again
    /// by searching for the matched text. Empty matches therefore sit between
    /// characters: `x*` on `ab` yields `0..0`, `1..1` and `2..2`, so a `-`
    /// replacement gives `-a-b-` rather than piling up at the start.
    pub fn occurrences(&self, text: &str) -> Result<Vec<Range<usize>>> {
        if self.sticky {
            let first = self.first(text)?.filter(|range| range.start == 0);
            return Ok(first.into_iter().collect());
        }

        if !self.global {
            return Ok(self.first(text)?.into_iter().collect());
        }

        self.regex
            .find_iter(text)
            .map(|found| {
                found
                    .map(|m| m.start()..m.end())
                    .map_err(|e| Error::Match(e.to_string()))
            })
            .collect()
    }

    fn first(&self, text: &str) -> Result<Option<Range<usize>>> {
        self.regex
            .find(text)
            .map(|found| found.map(|m| m.start()..m.end()))
            .map_err(|e| Error::Match(e.to_string()))
    }
}

impl From<Regex> for Pattern {
    /// Wrap an existing expression as a non-global pattern.
    fn from(regex: Regex) -> Self {
        Self {
            regex,
            global: false,
            sticky: false,
        }
    }
}

fn compile(source: &str) -> Result<Regex> {
    Regex::new(source).map_err(|e| Error::InvalidPattern(e.to_string()))
}
