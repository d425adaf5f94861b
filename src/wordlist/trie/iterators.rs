use crate::alphabet::letter;
use crate::wordlist::trie::node::{NodeId, NodeRef, TrieNode};

/// Cursor over a node's occupied child slots, using the node's `next_child`
/// table to hop over empty ones.
pub struct Children<'a> {
    idx: Option<usize>,
    nodes: &'a [TrieNode],
    node: NodeId,
}

impl<'a> Children<'a> {
    pub(crate) fn new(nodes: &'a [TrieNode], node: NodeId) -> Children<'a> {
        Children { idx: nodes[node].first_child(), nodes, node }
    }
}

impl<'a> Iterator for Children<'a> {
    type Item = (char, NodeRef<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.idx?;
        let node = &self.nodes[self.node];
        self.idx = node.next_child[idx];
        node.children[idx].map(|id| (letter(idx), NodeRef::new(self.nodes, id)))
    }
}

/// Every word of a trie, in alphabetical order.
pub struct Words<'a> {
    nodes: &'a [TrieNode],
    stack: Vec<(NodeId, String)>,
}

impl<'a> Words<'a> {
    pub(crate) fn new(nodes: &'a [TrieNode], root: NodeId) -> Words<'a> {
        Words { nodes, stack: vec![(root, String::new())] }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some((id, path)) = self.stack.pop() {
            let node = &self.nodes[id];
            // Reversed so the smallest letter is popped first.
            for (idx, child) in node.children.iter().enumerate().rev() {
                if let Some(child) = child {
                    let mut child_path = path.clone();
                    child_path.push(letter(idx));
                    self.stack.push((*child, child_path));
                }
            }
            if node.is_terminal {
                return Some(path);
            }
        }
        None
    }
}
