// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The tree built by [read](../read/index.html): a forest of list and
//! atom nodes under a synthetic root, plus the names of the sources
//! the nodes came from.

//! Nodes live in an arena owned by [Ast](Ast) and refer to each other
//! through [NodeId](NodeId)s. Several read sessions can be merged into
//! one `Ast`; every node records which source it came from.

use crate::number::{parse_number, NumberValue};
use crate::pos::Pos;
use crate::token::TokenKind;
use kstring::KString;
use std::ops::Index;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Only the synthetic root container.
    Root,
    List,
    Comment,
    Ident,
    String,
    RawString,
    Char,
    Number,
    Boolean,
}

impl NodeKind {
    /// The node kind for a token, None for tokens that never become
    /// nodes.
    pub fn of_token(kind: TokenKind) -> Option<NodeKind> {
        match kind {
            TokenKind::ListOpen => Some(NodeKind::List),
            TokenKind::Comment => Some(NodeKind::Comment),
            TokenKind::Ident => Some(NodeKind::Ident),
            TokenKind::String => Some(NodeKind::String),
            TokenKind::RawString => Some(NodeKind::RawString),
            TokenKind::Char => Some(NodeKind::Char),
            TokenKind::Number => Some(NodeKind::Number),
            TokenKind::Boolean => Some(NodeKind::Boolean),
            TokenKind::ListClose | TokenKind::Eof | TokenKind::Err(_) => None,
        }
    }

    pub fn is_atom(self) -> bool {
        ! matches!(self, NodeKind::Root | NodeKind::List | NodeKind::Comment)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    data: Box<[u8]>,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    pos: Pos,
    file: usize,
    kind: NodeKind,
}

impl Node {
    /// The token text. For lists this is the opening delimiter, for
    /// delimited literals the content between the delimiters.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.data).ok()
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// None only for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Index into [Ast::files](Ast::files). Meaningless for the root.
    pub fn file(&self) -> usize {
        self.file
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// The value of a `Number` node, if its text follows the
    /// reference number syntax.
    pub fn number(&self) -> Option<NumberValue> {
        if self.kind == NodeKind::Number {
            parse_number(&self.data)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ast {
    nodes: Vec<Node>,
    files: Vec<KString>,
}

impl Default for Ast {
    fn default() -> Self {
        Ast::new()
    }
}

const ROOT: NodeId = NodeId(0);

impl Ast {
    pub fn new() -> Ast {
        Ast {
            nodes: vec![Node {
                data: Box::default(),
                children: Vec::new(),
                parent: None,
                pos: Pos::START,
                file: 0,
                kind: NodeKind::Root,
            }],
            files: Vec::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        ROOT
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// The nodes directly under `id`, in source order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &Node> + '_ {
        self.nodes[id.0].children.iter().map(move |c| &self.nodes[c.0])
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Number of nodes, not counting the root.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// How many lists enclose `id`. Root children have depth 0.
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut cur = self.parent(id);
        while let Some(p) = cur {
            if p == ROOT {
                break
            }
            depth += 1;
            cur = self.parent(p);
        }
        depth
    }

    /// All nodes except the root, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.nodes.iter().enumerate().skip(1).map(|(i, n)| (NodeId(i), n))
    }

    /// The names of the sources read into this tree, in registration
    /// order.
    pub fn files(&self) -> &[KString] {
        &self.files
    }

    pub fn file_index(&self, name: &str) -> Option<usize> {
        self.files.iter().position(|f| f.as_str() == name)
    }

    /// Returns the index of `name`, adding it if it is not known yet.
    pub fn register_file(&mut self, name: &str) -> usize {
        if let Some(i) = self.file_index(name) {
            return i
        }
        self.files.push(KString::from_ref(name));
        self.files.len() - 1
    }

    /// Append a new last child to `parent`; the data is copied.
    pub(crate) fn push(
        &mut self,
        parent: NodeId,
        kind: NodeKind,
        data: &[u8],
        pos: Pos,
        file: usize,
    ) -> NodeId {
        debug_assert!(file < self.files.len());
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            data: data.into(),
            children: Vec::new(),
            parent: Some(parent),
            pos,
            file,
            kind,
        });
        self.nodes[parent.0].children.push(id);
        id
    }
}

impl Index<NodeId> for Ast {
    type Output = Node;
    fn index(&self, id: NodeId) -> &Node {
        self.node(id)
    }
}
