use std::fmt::{Debug, Formatter};

use derive_new::new;

use crate::alphabet::{get_idx, letter, ALPHABET};
use crate::wordlist::trie::iterators::Children;

/// Position of a node in the trie's node arena. The root is always `ROOT`.
pub(crate) type NodeId = usize;

pub(crate) const ROOT: NodeId = 0;

#[derive(new, Clone)]
pub(crate) struct TrieNode {
    #[new(default)]
    pub(crate) children: [Option<NodeId>; ALPHABET.len()],
    /// `next_child[i]` is the next occupied slot after `i`. Filled in by the
    /// builder once insertion is over.
    #[new(default)]
    pub(crate) next_child: [Option<usize>; ALPHABET.len()],
    #[new(default)]
    pub(crate) is_terminal: bool,
    pub(crate) depth: usize,
}

impl TrieNode {
    pub(crate) fn build_next_child(&mut self) {
        let mut next_child = [None; ALPHABET.len()];
        let mut next_idx = None;
        for idx in (0..ALPHABET.len()).rev() {
            next_child[idx] = next_idx;
            if self.children[idx].is_some() {
                next_idx = Some(idx)
            }
        }
        self.next_child = next_child;
    }

    pub(crate) fn first_child(&self) -> Option<usize> {
        if self.children[0].is_some() {
            Some(0)
        } else {
            self.next_child[0]
        }
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("depth", &self.depth)
            .field("is_terminal", &self.is_terminal)
            .field("children", &self.children.iter()
                .enumerate()
                .filter(|(_, x)| x.is_some())
                .map(|(idx, _)| letter(idx))
                .collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// A borrowed view of one node of a [`Trie`](crate::Trie).
///
/// A `NodeRef` never outlives the trie it was found in, and the trie cannot be
/// mutated while one exists.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    nodes: &'a [TrieNode],
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(nodes: &'a [TrieNode], id: NodeId) -> NodeRef<'a> {
        NodeRef { nodes, id }
    }

    pub(crate) fn id(&self) -> NodeId {
        self.id
    }

    fn node(&self) -> &'a TrieNode {
        &self.nodes[self.id]
    }

    /// Length of the prefix this node stands for. The root has depth 0.
    pub fn depth(&self) -> usize {
        self.node().depth
    }

    /// Whether the prefix this node stands for is itself a word.
    pub fn is_terminal(&self) -> bool {
        self.node().is_terminal
    }

    /// Whether no longer word continues through this node.
    pub fn is_leaf(&self) -> bool {
        self.node().is_leaf()
    }

    pub fn child(&self, c: char) -> Option<NodeRef<'a>> {
        get_idx(c)
            .and_then(|idx| self.node().children[idx])
            .map(|id| NodeRef::new(self.nodes, id))
    }

    /// Outgoing edges in alphabetical order.
    pub fn children(&self) -> Children<'a> {
        Children::new(self.nodes, self.id)
    }
}

impl Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.node().fmt(f)
    }
}
