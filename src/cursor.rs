// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Get code points and their positions out of an in-memory byte
//! buffer, plus the small matching primitives the lexer and the
//! pluggable recognizers are written in.

//! Invalid UTF-8 is not an error at this level: each maximal invalid
//! sequence decodes to U+FFFD, so the cursor always makes progress.

use crate::pos::Pos;
use crate::syntax::Syntax;
use utf8::DecodeError;

const REPLACEMENT: char = '\u{FFFD}';

/// Result of trying to match something at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Match {
    /// Input was consumed.
    Matched,
    /// Nothing was consumed.
    NoMatch,
    /// The input ended before anything could be looked at.
    Exhausted,
}

/// A saved cursor state, see [Cursor::mark](Cursor::mark) and
/// [Cursor::reset](Cursor::reset).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    offset: usize,
    pos: Pos,
}

impl Mark {
    pub fn offset(&self) -> usize {
        self.offset
    }
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

#[derive(Debug)]
pub struct Cursor<'s> {
    input: &'s [u8],
    offset: usize,
    pos: Pos,
    // State before the last `next_char`; taken by `rewind`, so a
    // second rewind without a decode in between does nothing.
    undo: Option<Mark>,
}

// `bytes` must not be empty. Returns the code point and its width in
// bytes.
fn decode_one(bytes: &[u8]) -> (char, usize) {
    let window = &bytes[..bytes.len().min(4)];
    let prefix = match utf8::decode(window) {
        Ok(s) => s,
        Err(DecodeError::Invalid { valid_prefix, invalid_sequence, .. }) => {
            if valid_prefix.is_empty() {
                return (REPLACEMENT, invalid_sequence.len().max(1))
            }
            valid_prefix
        }
        Err(DecodeError::Incomplete { valid_prefix, incomplete_suffix }) => {
            if valid_prefix.is_empty() {
                // truncated sequence at the very end of the input
                return (REPLACEMENT,
                        usize::from(incomplete_suffix.buffer_len).max(1))
            }
            valid_prefix
        }
    };
    match prefix.chars().next() {
        Some(c) => (c, c.len_utf8()),
        None => (REPLACEMENT, 1),
    }
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0)
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

impl<'s> Cursor<'s> {
    pub fn new(input: &'s [u8]) -> Cursor<'s> {
        Cursor {
            input,
            offset: 0,
            pos: Pos::START,
            undo: None,
        }
    }

    pub fn input(&self) -> &'s [u8] {
        self.input
    }

    /// Byte offset of the next code point.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Position of the next code point.
    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn is_eof(&self) -> bool {
        self.offset >= self.input.len()
    }

    /// The not yet consumed input.
    pub fn rest(&self) -> &'s [u8] {
        &self.input[self.offset.min(self.input.len())..]
    }

    pub fn mark(&self) -> Mark {
        Mark { offset: self.offset, pos: self.pos }
    }

    /// Go back (or forward) to a state saved with `mark`. Clears the
    /// rewind state.
    pub fn reset(&mut self, mark: Mark) {
        self.offset = mark.offset;
        self.pos = mark.pos;
        self.undo = None;
    }

    /// The input between `mark` and the current offset.
    pub fn since(&self, mark: Mark) -> &'s [u8] {
        &self.input[mark.offset..self.offset]
    }

    /// Decode the next code point and advance past it. Returns `None`
    /// at the end of the input.
    pub fn next_char(&mut self) -> Option<char> {
        if self.is_eof() {
            self.undo = None;
            return None
        }
        let (c, width) = decode_one(&self.input[self.offset..]);
        self.undo = Some(self.mark());
        self.offset += width;
        if c == '\n' {
            self.pos.line = self.pos.line.saturating_add(1);
            self.pos.col = 1;
        } else {
            self.pos.col = self.pos.col.saturating_add(1);
        }
        Some(c)
    }

    pub fn peek(&self) -> Option<char> {
        if self.is_eof() {
            None
        } else {
            Some(decode_one(&self.input[self.offset..]).0)
        }
    }

    /// Undo the last `next_char`. Only one step is remembered; returns
    /// false if there was nothing to undo.
    pub fn rewind(&mut self) -> bool {
        match self.undo.take() {
            Some(Mark { offset, pos }) => {
                self.offset = offset;
                self.pos = pos;
                true
            }
            None => false
        }
    }

    /// Consume one code point if it is contained in `valid`.
    pub fn accept(&mut self, valid: &str) -> Match {
        match self.next_char() {
            None => Match::Exhausted,
            Some(c) => {
                if valid.contains(c) {
                    Match::Matched
                } else {
                    self.rewind();
                    Match::NoMatch
                }
            }
        }
    }

    fn accept_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let mut n = 0;
        while let Some(c) = self.next_char() {
            if ! pred(c) {
                self.rewind();
                break
            }
            n += 1;
        }
        n
    }

    /// Consume code points as long as they are contained in
    /// `valid`. Returns the number consumed.
    pub fn accept_run(&mut self, valid: &str) -> usize {
        self.accept_while(|c| valid.contains(c))
    }

    /// Consume code points up to (not including) the first one
    /// contained in `stop`, or to the end of input.
    pub fn accept_until(&mut self, stop: &str) -> usize {
        self.accept_while(|c| ! stop.contains(c))
    }

    /// Consume exactly `lit` if the input continues with it, byte for
    /// byte. Leaves the cursor unchanged otherwise.
    pub fn accept_literal(&mut self, lit: &str) -> bool {
        if lit.is_empty() || ! self.rest().starts_with(lit.as_bytes()) {
            return false
        }
        for _ in lit.chars() {
            self.next_char();
        }
        true
    }

    /// Consume everything up to (not including) the first occurrence
    /// of `lit`. Leaves the cursor unchanged if there is none.
    pub fn accept_until_literal(&mut self, lit: &str) -> bool {
        match find_subslice(self.rest(), lit.as_bytes()) {
            Some(i) => {
                let end = self.offset + i;
                while self.offset < end {
                    self.next_char();
                }
                true
            }
            None => false
        }
    }

    /// Like `accept_until_literal`, but a code point following
    /// `escape` is never taken as the start of `lit`.
    pub fn accept_until_literal_escaped(
        &mut self,
        lit: &str,
        escape: Option<char>
    ) -> bool {
        let escape = match escape {
            Some(e) => e,
            None => return self.accept_until_literal(lit),
        };
        let start = self.mark();
        loop {
            if self.rest().starts_with(lit.as_bytes()) {
                return true
            }
            match self.next_char() {
                None => {
                    self.reset(start);
                    return false
                }
                Some(c) => {
                    if c == escape && self.next_char().is_none() {
                        self.reset(start);
                        return false
                    }
                }
            }
        }
    }

    /// Consume an identifier: code points that are printable, not
    /// whitespace and not reserved by `syntax`.
    pub fn accept_identifier(&mut self, syntax: &Syntax) -> usize {
        self.accept_while(|c| {
            ! c.is_whitespace() && ! c.is_control() && ! syntax.is_reserved(c)
        })
    }

    pub fn accept_space(&mut self) -> usize {
        self.accept_while(char::is_whitespace)
    }
}
