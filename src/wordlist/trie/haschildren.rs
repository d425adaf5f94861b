use crate::alphabet::get_idx;
use crate::wordlist::trie::node::{NodeId, TrieNode};

impl TrieNode {
    pub(crate) fn get_child(&self, c: char) -> Option<NodeId> {
        get_idx(c).and_then(|idx| self.children[idx])
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.children.iter().all(|x| x.is_none())
    }
}

/// Follows `word` letter by letter from `start`. Any missing edge, including a
/// letter outside the alphabet, ends the walk with `None`.
pub(crate) fn walk(nodes: &[TrieNode], start: NodeId, word: &str) -> Option<NodeId> {
    word.chars().try_fold(start, |node, c| nodes[node].get_child(c))
}
