use serde::Serialize;

use super::Token;

/// Index of a token inside a [`TokenTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TokenId(usize);

impl TokenId {
    /// The synthetic root of every tree.
    pub const ROOT: TokenId = TokenId(0);

    /// Position of the token in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A token together with its position in the tree.
#[derive(Debug, Clone)]
pub struct Node {
    token: Token,
    parent: Option<TokenId>,
    children: Vec<TokenId>,
}

impl Node {
    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn parent(&self) -> Option<TokenId> {
        self.parent
    }

    pub fn children(&self) -> &[TokenId] {
        &self.children
    }
}

/// Arena holding the block structure of one script file.
///
/// Nodes are stored in insertion order; children keep source order and the
/// parent link is a plain index, so the tree has no ownership cycles and can
/// be rendered any number of times without being modified.
#[derive(Debug, Clone)]
pub struct TokenTree {
    nodes: Vec<Node>,
}

impl TokenTree {
    /// Creates a tree containing only the root token.
    pub fn new(root: Token) -> Self {
        Self {
            nodes: vec![Node {
                token: root,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// Appends `token` as the last child of `parent` and returns its id.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this tree.
    pub fn push(&mut self, parent: TokenId, token: Token) -> TokenId {
        let id = TokenId(self.nodes.len());
        self.nodes.push(Node {
            token,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn root(&self) -> TokenId {
        TokenId::ROOT
    }

    pub fn node(&self, id: TokenId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn token(&self, id: TokenId) -> &Token {
        &self.nodes[id.0].token
    }

    pub fn parent(&self, id: TokenId) -> Option<TokenId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: TokenId) -> &[TokenId] {
        &self.nodes[id.0].children
    }

    /// True if the token opens a block with at least one statement inside.
    pub fn has_children(&self, id: TokenId) -> bool {
        !self.nodes[id.0].children.is_empty()
    }

    /// Number of tokens including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree contains at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
