use std::fmt::{Debug, Formatter};

use crate::error::Result;
use crate::wordlist::trie::iterators::Words;
use crate::wordlist::trie::node::{NodeRef, TrieNode, ROOT};
use crate::wordlist::trie::trie_builder::TrieBuilder;

/// An immutable prefix tree over lowercase words.
///
/// Nodes live in one arena owned by the trie; edges are indices into it, so a
/// node is reachable only from its parent and never points back up.
///
/// Two tries are equal when they hold the same words, whatever order those
/// words were added in.
#[derive(Clone)]
pub struct Trie {
    pub(crate) nodes: Vec<TrieNode>,
    word_count: usize,
}

impl Trie {
    /// Builds a trie holding exactly `words`.
    ///
    /// Fails with [`DictionaryError::InvalidWord`](crate::DictionaryError::InvalidWord)
    /// on the first word that is empty or not made of `a..=z`; no partial
    /// dictionary is returned.
    pub fn new<I>(words: I) -> Result<Trie>
        where I: IntoIterator, I::Item: AsRef<str> {
        Ok(TrieBuilder::new().add_all(words)?.build())
    }

    pub fn builder() -> TrieBuilder {
        TrieBuilder::new()
    }

    pub(crate) fn from_parts(nodes: Vec<TrieNode>, word_count: usize) -> Trie {
        Trie { nodes, word_count }
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn root(&self) -> NodeRef {
        NodeRef::new(&self.nodes, ROOT)
    }

    pub fn iter(&self) -> Words {
        Words::new(&self.nodes, ROOT)
    }
}

impl<'a> IntoIterator for &'a Trie {
    type Item = String;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Words<'a> {
        self.iter()
    }
}

impl PartialEq for Trie {
    fn eq(&self, other: &Self) -> bool {
        self.word_count == other.word_count && same_shape(self.root(), other.root())
    }
}

impl Eq for Trie {}

// Arena positions depend on insertion order, so compare by walking both trees.
fn same_shape(a: NodeRef, b: NodeRef) -> bool {
    a.is_terminal() == b.is_terminal()
        && a.children().map(|(c, _)| c).eq(b.children().map(|(c, _)| c))
        && a.children().zip(b.children()).all(|((_, x), (_, y))| same_shape(x, y))
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
