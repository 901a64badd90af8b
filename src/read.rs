// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Building an [Ast](../ast/struct.Ast.html) from the token stream.

use crate::ast::{Ast, NodeId, NodeKind};
use crate::lexer::tokens;
use crate::pos::Pos;
use crate::settings::{Modes, Settings};
use crate::token::{LexError, Token, TokenKind};
use kstring::KString;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    #[error("{0}")]
    Lex(LexError),
    #[error("unexpected '{0}', no list is open")]
    UnexpectedClose(String),
    #[error("unexpected {0} outside of any list")]
    AtomOutsideList(TokenKind),
    #[error("premature end of input, list opened by '{0}' is not closed")]
    UnclosedList(String),
}

impl ReadError {
    /// Whether the token stream was fine but does not nest properly.
    pub fn is_structural(&self) -> bool {
        ! matches!(self, ReadError::Lex(_))
    }

    fn at(self, p: Pos) -> ReadErrorWithPos {
        ReadErrorWithPos {
            err: self,
            pos: p
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{err} {pos}")]
pub struct ReadErrorWithPos {
    pub err: ReadError,
    pub pos: Pos
}

#[derive(Error, Debug)]
pub enum ReadErrorWithLocation {
    #[error("{file}:{}:{} {}", .err.pos.line, .err.pos.col, .err.err)]
    At { file: KString, err: ReadErrorWithPos },
    #[error("parsing duplicate file {0:?}")]
    DuplicateFile(KString),
    #[error("{1:?}: {0}")]
    IO(std::io::Error, PathBuf),
}

impl ReadErrorWithLocation {
    /// The source name, for errors in the input.
    pub fn file(&self) -> Option<&str> {
        match self {
            ReadErrorWithLocation::At { file, .. } => Some(file.as_str()),
            _ => None
        }
    }

    pub fn pos(&self) -> Option<Pos> {
        match self {
            ReadErrorWithLocation::At { err, .. } => Some(err.pos),
            _ => None
        }
    }

    pub fn line(&self) -> Option<u32> {
        self.pos().map(|p| p.line)
    }

    pub fn col(&self) -> Option<u32> {
        self.pos().map(|p| p.col)
    }

    pub fn read_error(&self) -> Option<&ReadError> {
        match self {
            ReadErrorWithLocation::At { err, .. } => Some(&err.err),
            _ => None
        }
    }

    /// The reason without location information.
    pub fn message(&self) -> String {
        match self {
            ReadErrorWithLocation::At { err, .. } => err.err.to_string(),
            ReadErrorWithLocation::DuplicateFile(_) => self.to_string(),
            ReadErrorWithLocation::IO(e, _) => e.to_string(),
        }
    }
}

enum Step {
    Continue,
    Done,
}

// Holds the innermost open list; None means the root.
struct TreeBuilder<'a> {
    ast: &'a mut Ast,
    modes: &'a Modes,
    file: usize,
    open: Option<NodeId>,
}

impl<'a> TreeBuilder<'a> {
    fn push(&mut self, kind: NodeKind, token: &Token) -> NodeId {
        let parent = self.open.unwrap_or_else(|| self.ast.root());
        self.ast.push(parent, kind, token.data, token.pos, self.file)
    }

    fn feed(&mut self, token: &Token) -> Result<Step, ReadErrorWithPos> {
        match token.kind {
            TokenKind::Eof => {
                if let Some(id) = self.open {
                    let list = self.ast.node(id);
                    return Err(ReadError::UnclosedList(
                        String::from_utf8_lossy(list.data()).into_owned())
                               .at(list.pos()))
                }
                Ok(Step::Done)
            }
            TokenKind::Err(e) => Err(ReadError::Lex(e).at(token.pos)),
            TokenKind::ListOpen => {
                let id = self.push(NodeKind::List, token);
                self.open = Some(id);
                Ok(Step::Continue)
            }
            TokenKind::ListClose => {
                if let Some(id) = self.open {
                    let root = self.ast.root();
                    self.open = self.ast.parent(id).filter(|p| *p != root);
                    Ok(Step::Continue)
                } else {
                    Err(ReadError::UnexpectedClose(
                        String::from_utf8_lossy(token.data).into_owned())
                        .at(token.pos))
                }
            }
            TokenKind::Comment => {
                if self.modes.retain_comments {
                    self.push(NodeKind::Comment, token);
                }
                Ok(Step::Continue)
            }
            kind => {
                let node_kind = match NodeKind::of_token(kind) {
                    Some(k) => k,
                    None => return Ok(Step::Continue),
                };
                if self.open.is_none() && ! self.modes.toplevel_atoms {
                    return Err(ReadError::AtomOutsideList(kind).at(token.pos))
                }
                self.push(node_kind, token);
                Ok(Step::Continue)
            }
        }
    }
}

/// Read all of `input` into `ast`, naming the source `file`. Nodes are
/// appended after those of earlier sessions. On error, the nodes built
/// before the offending token stay in `ast`.
pub fn read(
    ast: &mut Ast,
    file: &str,
    input: &[u8],
    settings: &Settings,
) -> Result<(), ReadErrorWithLocation>
{
    if ast.file_index(file).is_some() {
        return Err(ReadErrorWithLocation::DuplicateFile(KString::from_ref(file)))
    }
    let file_index = ast.register_file(file);
    let nodes_before = ast.len();
    debug!(file, bytes = input.len(), "reading");

    let mut builder = TreeBuilder {
        ast: &mut *ast,
        modes: settings.modes,
        file: file_index,
        open: None,
    };
    for token in tokens(input, settings.syntax) {
        match builder.feed(&token) {
            Ok(Step::Continue) => {}
            Ok(Step::Done) => break,
            Err(err) => {
                debug!(file, error = %err, "read aborted");
                return Err(ReadErrorWithLocation::At {
                    file: KString::from_ref(file),
                    err
                })
            }
        }
    }
    debug!(file, nodes = ast.len() - nodes_before, "read complete");
    Ok(())
}

/// Read a whole file into memory, then into `ast` under its path.
pub fn read_file(
    ast: &mut Ast,
    path: &Path,
    settings: &Settings,
) -> Result<(), ReadErrorWithLocation>
{
    let name = path.to_string_lossy();
    if ast.file_index(&name).is_some() {
        return Err(ReadErrorWithLocation::DuplicateFile(KString::from_ref(&name)))
    }
    let data = std::fs::read(path)
        .map_err(|e| ReadErrorWithLocation::IO(e, path.to_path_buf()))?;
    read(ast, &name, &data, settings)
}
