// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The grammar the lexer is driven by: which strings delimit lists,
//! comments and literals, and how booleans and numbers are recognized.

use crate::cursor::{Cursor, Match};
use kstring::KString;
use std::fmt::{Debug, Formatter};

/// An opening and a closing string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub open: KString,
    pub close: KString,
}

impl Pair {
    pub fn new(open: &str, close: &str) -> Pair {
        Pair {
            open: KString::from_ref(open),
            close: KString::from_ref(close),
        }
    }

    fn contains(&self, c: char) -> bool {
        self.open.contains(c) || self.close.contains(c)
    }
}

/// A pluggable "is there a literal of my kind at the cursor" test.
///
/// On `Match::Matched` the consumed input becomes the token. The lexer
/// puts the cursor back where it was on `Match::NoMatch`, so an
/// implementation is free to give up half-way.
pub trait Recognizer: Send + Sync {
    fn try_match(&self, cursor: &mut Cursor<'_>) -> Match;
}

impl<F> Recognizer for F
    where F: Fn(&mut Cursor<'_>) -> Match + Send + Sync
{
    fn try_match(&self, cursor: &mut Cursor<'_>) -> Match {
        self(cursor)
    }
}

/// Recognizes two fixed words, `true` and `false` by default.
#[derive(Debug, Clone)]
pub struct BooleanWords {
    pub truth: KString,
    pub falsity: KString,
}

impl BooleanWords {
    pub fn new(truth: &str, falsity: &str) -> BooleanWords {
        BooleanWords {
            truth: KString::from_ref(truth),
            falsity: KString::from_ref(falsity),
        }
    }
}

impl Default for BooleanWords {
    fn default() -> Self {
        BooleanWords {
            truth: KString::from_static("true"),
            falsity: KString::from_static("false"),
        }
    }
}

impl Recognizer for BooleanWords {
    fn try_match(&self, cursor: &mut Cursor<'_>) -> Match {
        if cursor.is_eof() {
            Match::Exhausted
        } else if cursor.accept_literal(&self.truth)
            || cursor.accept_literal(&self.falsity)
        {
            Match::Matched
        } else {
            Match::NoMatch
        }
    }
}

const DIGITS: &str = "0123456789abcdefABCDEF";

pub(crate) fn digits_for_radix(radix: u32) -> &'static str {
    match radix {
        16 => DIGITS,
        8 => &DIGITS[..8],
        2 => &DIGITS[..2],
        _ => &DIGITS[..10],
    }
}

/// Recognizes numbers like `1234`, `-0.1234`, `+1E+32`, `0xff12AE`,
/// `0b0101` and `0644` (octal). This is a reasonable likeness test,
/// not a validation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberLiteral;

impl Recognizer for NumberLiteral {
    fn try_match(&self, cursor: &mut Cursor<'_>) -> Match {
        if cursor.is_eof() {
            return Match::Exhausted
        }
        cursor.accept("+-");
        let mut radix = 10;
        let zero = cursor.mark();
        if cursor.accept("0") == Match::Matched {
            if cursor.accept("xX") == Match::Matched {
                radix = 16;
            } else if cursor.accept("bB") == Match::Matched {
                radix = 2;
            } else {
                // the 0 is the first octal digit
                radix = 8;
                cursor.reset(zero);
            }
        }
        let digits = digits_for_radix(radix);
        if cursor.accept_run(digits) == 0 {
            return Match::NoMatch
        }
        if cursor.accept(".") == Match::Matched {
            cursor.accept_run(digits);
        }
        if cursor.accept("eE") != Match::Matched {
            return Match::Matched
        }
        cursor.accept("+-");
        if cursor.accept_run(digits_for_radix(10)) == 0 {
            Match::NoMatch
        } else {
            Match::Matched
        }
    }
}

/// A set of lexing rules. Built once, then shared by any number of
/// read sessions.
#[derive(Default)]
pub struct Syntax {
    /// List delimiters, tried in this order.
    pub delimiters: Vec<Pair>,
    /// Starts a comment running to the end of the line.
    pub single_line_comment: Option<KString>,
    pub multi_line_comment: Option<Pair>,
    pub string_lit: Option<Pair>,
    /// The content is taken verbatim, `escape` does not apply.
    pub raw_string_lit: Option<Pair>,
    pub char_lit: Option<Pair>,
    /// Inside string and char literals, the code point after this one
    /// never closes the literal.
    pub escape: Option<char>,
    pub boolean: Option<Box<dyn Recognizer>>,
    pub number: Option<Box<dyn Recognizer>>,
}

impl Debug for Syntax {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        f.debug_struct("Syntax")
            .field("delimiters", &self.delimiters)
            .field("single_line_comment", &self.single_line_comment)
            .field("multi_line_comment", &self.multi_line_comment)
            .field("string_lit", &self.string_lit)
            .field("raw_string_lit", &self.raw_string_lit)
            .field("char_lit", &self.char_lit)
            .field("escape", &self.escape)
            .field("boolean", &self.boolean.is_some())
            .field("number", &self.number.is_some())
            .finish()
    }
}

impl Syntax {
    /// A Scheme-like syntax: `()` and `[]` lists, `;` and `#| |#`
    /// comments, `"` strings with `\` escapes, `#t`/`#f`, and the
    /// reference number syntax.
    pub fn scheme() -> Syntax {
        Syntax {
            delimiters: vec![Pair::new("(", ")"), Pair::new("[", "]")],
            single_line_comment: Some(KString::from_static(";")),
            multi_line_comment: Some(Pair::new("#|", "|#")),
            string_lit: Some(Pair::new("\"", "\"")),
            escape: Some('\\'),
            boolean: Some(Box::new(BooleanWords::new("#t", "#f"))),
            number: Some(Box::new(NumberLiteral)),
            ..Syntax::default()
        }
    }

    /// Whether `c` appears in any delimiter, comment or literal
    /// marker. Identifiers stop at reserved code points.
    pub fn is_reserved(&self, c: char) -> bool {
        self.single_line_comment.as_ref().map_or(false, |s| s.contains(c))
            || self.delimiters.iter().any(|p| p.contains(c))
            || [&self.multi_line_comment,
                &self.char_lit,
                &self.string_lit,
                &self.raw_string_lit]
            .into_iter()
            .flatten()
            .any(|p| p.contains(c))
    }
}
