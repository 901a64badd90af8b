// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::pos::Pos;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexError {
    #[error("missing {0} delimiter")]
    MissingDelimiter(&'static str),
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),
    #[error("recognizer matched without consuming input")]
    EmptyToken,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    ListOpen,
    ListClose,
    Comment,
    Ident,
    String,
    RawString,
    Char,
    Number,
    Boolean,
    Eof,
    Err(LexError),
}

impl TokenKind {
    /// Whether nothing follows a token of this kind.
    pub fn is_final(self) -> bool {
        matches!(self, TokenKind::Eof | TokenKind::Err(_))
    }

    pub fn name(self) -> &'static str {
        match self {
            TokenKind::ListOpen => "list opening",
            TokenKind::ListClose => "list closing",
            TokenKind::Comment => "comment",
            TokenKind::Ident => "identifier",
            TokenKind::String => "string",
            TokenKind::RawString => "raw string",
            TokenKind::Char => "char",
            TokenKind::Number => "number",
            TokenKind::Boolean => "boolean",
            TokenKind::Eof => "end of input",
            TokenKind::Err(_) => "error",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        f.write_str(self.name())
    }
}

/// A classified span of the input. For delimited literals and
/// comments `data` is the content without the delimiters, and `pos`
/// is where that content starts. For `Err` tokens `pos` is where the
/// offending input starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'s> {
    pub kind: TokenKind,
    pub data: &'s [u8],
    /// Byte offset of `data` in the input.
    pub offset: usize,
    pub pos: Pos,
}

impl<'s> Token<'s> {
    pub fn span(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.data.len()
    }
}

impl<'s> std::fmt::Display for Token<'s> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        let text = String::from_utf8_lossy(self.data);
        if text.chars().count() > 30 {
            let head: String = text.chars().take(30).collect();
            f.write_fmt(format_args!("{}({:?}...)", self.kind, head))
        } else {
            f.write_fmt(format_args!("{}({:?})", self.kind, text))
        }
    }
}
