use std::mem::take;

use tracing::debug;

use crate::alphabet::{get_idx, is_valid_word};
use crate::error::{DictionaryError, Result};
use crate::wordlist::trie::node::{NodeId, TrieNode, ROOT};
use crate::wordlist::trie::trie::Trie;

/// Accumulates words and produces an immutable [`Trie`].
///
/// A word that is empty or has a character outside `a..=z` is rejected with
/// [`DictionaryError::InvalidWord`] and leaves the builder unchanged.
pub struct TrieBuilder {
    nodes: Vec<TrieNode>,
    word_count: usize,
    offered: usize,
}

impl Default for TrieBuilder {
    fn default() -> Self {
        TrieBuilder::new()
    }
}

impl TrieBuilder {
    pub fn new() -> TrieBuilder {
        TrieBuilder {
            nodes: vec![TrieNode::new(0)],
            word_count: 0,
            offered: 0,
        }
    }

    pub fn add(&mut self, word: &str) -> Result<&mut TrieBuilder> {
        let position = self.offered;
        self.offered += 1;
        if !is_valid_word(word) {
            return Err(DictionaryError::InvalidWord { word: word.to_string(), position });
        }

        let mut current = ROOT;
        for idx in word.chars().filter_map(get_idx) {
            current = self.get_or_create_child(current, idx);
        }

        let end = &mut self.nodes[current];
        if !end.is_terminal {
            end.is_terminal = true;
            self.word_count += 1;
        }
        Ok(self)
    }

    pub fn add_all<I>(&mut self, items: I) -> Result<&mut TrieBuilder>
        where I: IntoIterator, I::Item: AsRef<str> {
        for item in items {
            self.add(item.as_ref())?;
        }
        Ok(self)
    }

    /// Finishes the trie and resets the builder to empty.
    pub fn build(&mut self) -> Trie {
        let mut nodes = take(&mut self.nodes);
        nodes.iter_mut().for_each(|node| node.build_next_child());
        let trie = Trie::from_parts(nodes, self.word_count);
        debug!(words = trie.len(), nodes = trie.node_count(), "built trie");
        *self = TrieBuilder::new();
        trie
    }

    fn get_or_create_child(&mut self, parent: NodeId, idx: usize) -> NodeId {
        if let Some(child) = self.nodes[parent].children[idx] {
            return child;
        }
        let child = self.nodes.len();
        let depth = self.nodes[parent].depth + 1;
        self.nodes.push(TrieNode::new(depth));
        self.nodes[parent].children[idx] = Some(child);
        child
    }
}
