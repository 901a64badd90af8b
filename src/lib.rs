// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A tokenizer and tree builder for parenthesized, S-Expression-like
//! languages whose concrete syntax is given at runtime:
//!
//! * A [Syntax](syntax::Syntax) says which strings open and close
//!   lists, comments, and string, raw string and char literals, and
//!   plugs in recognizers for booleans and numbers.
//!
//! * [lexer](lexer) turns a byte buffer into positioned tokens, using
//!   the primitives of [cursor](cursor), which recognizers are written
//!   in, too.
//!
//! * [read](read) builds an untyped [Ast](ast::Ast) of lists and atoms
//!   from the tokens. One `Ast` can take the output of several read
//!   sessions; every node knows which source it came from.
//!
//! Interpreting the atoms is left to the caller. A malformed token or
//! a list nesting problem ends the read session with an error carrying
//! the source name, line and column.
//!
//! ```
//! use sexpr_reader::{read, Ast, NodeKind, Settings, Syntax};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let syntax = Syntax::scheme();
//!     let mut ast = Ast::new();
//!     read(&mut ast, "example.scm", b"(define x 10)", &Settings::new(&syntax))?;
//!     let top: Vec<_> = ast.children(ast.root()).collect();
//!     assert_eq!(top.len(), 1);
//!     assert_eq!(top[0].kind(), NodeKind::List);
//!     assert_eq!(ast.len(), 4);
//!     Ok(())
//! }
//! ```

pub mod ast;
pub mod cursor;
pub mod lexer;
pub mod number;
pub mod pos;
pub mod read;
pub mod settings;
pub mod syntax;
pub mod token;

pub use ast::{Ast, Node, NodeId, NodeKind};
pub use read::{read, read_file, ReadError, ReadErrorWithLocation};
pub use settings::{Modes, Settings};
pub use syntax::Syntax;
