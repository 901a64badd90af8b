// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Translating a byte buffer into a token stream, driven by a
//! [Syntax](../syntax/struct.Syntax.html). The only tokens that denote
//! nesting are `TokenKind::ListOpen` and `TokenKind::ListClose`. See
//! [read](../read/index.html) if interested in trees rather than
//! tokens.

//! Rules are tried in a fixed order at every token start: line
//! comment, block comment, char, string and raw string literals, the
//! list delimiters in registration order, the boolean recognizer, the
//! number recognizer, and finally identifiers.

use crate::cursor::{Cursor, Mark, Match};
use crate::syntax::{Pair, Recognizer, Syntax};
use crate::token::{LexError, Token, TokenKind};
use genawaiter::rc::Gen;
use tracing::trace;

/// Single use: one lexer per input buffer.
#[derive(Debug)]
pub struct Lexer<'s> {
    cursor: Cursor<'s>,
    syntax: &'s Syntax,
    // where the current token started
    start: Mark,
}

impl<'s> Lexer<'s> {
    pub fn new(input: &'s [u8], syntax: &'s Syntax) -> Lexer<'s> {
        let cursor = Cursor::new(input);
        let start = cursor.mark();
        Lexer { cursor, syntax, start }
    }

    pub fn cursor(&self) -> &Cursor<'s> {
        &self.cursor
    }

    fn commit(&mut self) {
        self.start = self.cursor.mark();
    }

    fn emit(&mut self, kind: TokenKind) -> Token<'s> {
        let token = Token {
            kind,
            data: self.cursor.since(self.start),
            offset: self.start.offset(),
            pos: self.start.pos(),
        };
        self.commit();
        trace!(kind = %token.kind, pos = %token.pos, len = token.data.len(),
               "token");
        token
    }

    // The token covers the input from `at` to the cursor.
    fn error(&mut self, err: LexError, at: Mark) -> Token<'s> {
        self.start = at;
        self.emit(TokenKind::Err(err))
    }

    /// Returns the next token, `TokenKind::Eof` once the input is used
    /// up.
    pub fn next_token(&mut self) -> Token<'s> {
        self.cursor.accept_space();
        self.commit();
        if self.cursor.is_eof() {
            return self.emit(TokenKind::Eof)
        }
        let before = self.start;
        let token = self.classify();
        if ! token.kind.is_final() && self.cursor.offset() == before.offset() {
            // Would never get anywhere.
            return self.error(LexError::EmptyToken, before)
        }
        token
    }

    fn classify(&mut self) -> Token<'s> {
        let syntax = self.syntax;

        if let Some(prefix) = &syntax.single_line_comment {
            if self.cursor.accept_literal(prefix) {
                self.commit();
                self.cursor.accept_until("\r\n");
                return self.emit(TokenKind::Comment)
            }
        }

        let literals = [
            (&syntax.multi_line_comment, TokenKind::Comment, "comment", None),
            (&syntax.char_lit, TokenKind::Char, "char", syntax.escape),
            (&syntax.string_lit, TokenKind::String, "string", syntax.escape),
            (&syntax.raw_string_lit, TokenKind::RawString, "raw string", None),
        ];
        for (pair, kind, what, escape) in literals {
            if let Some(pair) = pair {
                if let Some(token) = self.lex_pair(pair, kind, what, escape) {
                    return token
                }
            }
        }

        for pair in &syntax.delimiters {
            if self.cursor.accept_literal(&pair.open) {
                return self.emit(TokenKind::ListOpen)
            }
            if self.cursor.accept_literal(&pair.close) {
                return self.emit(TokenKind::ListClose)
            }
        }

        let recognizers = [
            (&syntax.boolean, TokenKind::Boolean),
            (&syntax.number, TokenKind::Number),
        ];
        for (recognizer, kind) in recognizers {
            if let Some(recognizer) = recognizer {
                if let Some(token) = self.recognize(&**recognizer, kind) {
                    return token
                }
            }
        }

        if self.cursor.accept_identifier(syntax) > 0 {
            return self.emit(TokenKind::Ident)
        }

        let at = self.cursor.mark();
        match self.cursor.next_char() {
            Some(c) => self.error(LexError::UnexpectedChar(c), at),
            None => self.emit(TokenKind::Eof),
        }
    }

    fn recognize(
        &mut self,
        recognizer: &dyn Recognizer,
        kind: TokenKind
    ) -> Option<Token<'s>> {
        let mark = self.cursor.mark();
        match recognizer.try_match(&mut self.cursor) {
            Match::Matched => Some(self.emit(kind)),
            Match::NoMatch => {
                self.cursor.reset(mark);
                None
            }
            Match::Exhausted => {
                self.cursor.reset(mark);
                Some(self.emit(TokenKind::Eof))
            }
        }
    }

    // Returns None if `pair.open` is not next in the input.
    fn lex_pair(
        &mut self,
        pair: &Pair,
        kind: TokenKind,
        what: &'static str,
        escape: Option<char>,
    ) -> Option<Token<'s>> {
        let opener = self.cursor.mark();
        if ! self.cursor.accept_literal(&pair.open) {
            return None
        }
        self.commit();
        if ! self.cursor.accept_until_literal_escaped(&pair.close, escape) {
            return Some(self.error(LexError::MissingDelimiter(what), opener))
        }
        let token = self.emit(kind);
        self.cursor.accept_literal(&pair.close);
        self.commit();
        Some(token)
    }
}

/// Lazily tokenize `input`. The last item is the first `Eof` or `Err`
/// token.
pub fn tokens<'s>(
    input: &'s [u8],
    syntax: &'s Syntax,
) -> impl Iterator<Item = Token<'s>> + 's
{
    Gen::new(|co| async move {
        let mut lexer = Lexer::new(input, syntax);
        loop {
            let token = lexer.next_token();
            let done = token.kind.is_final();
            co.yield_(token).await;
            if done {
                return
            }
        }
    }).into_iter()
}
