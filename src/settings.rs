// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Settings for reading: the syntax to lex with, and how the tree
//! builder treats comments and top-level atoms.

use crate::syntax::Syntax;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modes {
    /// Keep comments as `Comment` nodes instead of dropping them.
    pub retain_comments: bool,
    /// Allow atoms directly under the root, outside of any list.
    pub toplevel_atoms: bool,
}

pub const DEFAULT_MODES: Modes = Modes {
    retain_comments: false,
    toplevel_atoms: false,
};

impl Default for Modes {
    fn default() -> Self {
        DEFAULT_MODES
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Settings<'t> {
    pub syntax: &'t Syntax,
    pub modes: &'t Modes,
}

impl<'t> Settings<'t> {
    /// `syntax` with `DEFAULT_MODES`.
    pub fn new(syntax: &'t Syntax) -> Settings<'t> {
        Settings {
            syntax,
            modes: &DEFAULT_MODES,
        }
    }
}
