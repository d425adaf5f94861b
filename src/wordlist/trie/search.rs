use crate::letterset::LetterSet;
use crate::wordlist::trie::haschildren::walk;
use crate::wordlist::trie::node::{NodeId, NodeRef, ROOT};
use crate::wordlist::trie::trie::Trie;

// Every query here is total: an empty string or a letter outside a-z is an
// ordinary "no" (false, None, or the empty set).
impl Trie {
    fn get_node(&self, prefix: &str) -> Option<NodeId> {
        if prefix.is_empty() {
            return None;
        }
        walk(&self.nodes, ROOT, prefix)
    }

    /// The node standing for `prefix`, if any word starts with it.
    pub fn find_node_with_prefix(&self, prefix: &str) -> Option<NodeRef> {
        self.get_node(prefix).map(|id| NodeRef::new(&self.nodes, id))
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.get_node(word)
            .map(|x| self.nodes[x].is_terminal).unwrap_or(false)
    }

    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.get_node(prefix).is_some()
    }

    /// Front hooks: letters `l` such that `l` followed by `suffix` is a word.
    pub fn valid_first_letters(&self, suffix: &str) -> LetterSet {
        if suffix.is_empty() {
            return LetterSet::new();
        }
        self.root().children()
            .filter(|(_, child)| {
                walk(&self.nodes, child.id(), suffix)
                    .map(|x| self.nodes[x].is_terminal)
                    .unwrap_or(false)
            })
            .map(|(letter, _)| letter)
            .collect()
    }

    /// Back hooks: letters `l` such that `prefix` followed by `l` is a word.
    /// Only one-letter extensions count; deeper words are not looked at.
    pub fn valid_last_letters(&self, prefix: &str) -> LetterSet {
        match self.find_node_with_prefix(prefix) {
            Some(node) if !node.is_leaf() => node.children()
                .filter(|(_, child)| child.is_terminal())
                .map(|(letter, _)| letter)
                .collect(),
            _ => LetterSet::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use maplit::btreeset;

    use crate::letterset::LetterSet;
    use crate::wordlist::trie::trie::Trie;

    fn letters(set: LetterSet) -> Vec<char> {
        set.iter().collect()
    }

    #[test]
    fn prefixes_of_words_are_found() {
        let trie = Trie::new(vec!["hello", "help", "goodbye", "good"]).unwrap();
        for prefix in vec!["h", "he", "hel", "hell", "hello", "go", "goodb"] {
            assert!(trie.contains_prefix(prefix), "{}", prefix);
        }
        for prefix in vec!["x", "ha", "helpo", "goodbyes"] {
            assert!(!trie.contains_prefix(prefix), "{}", prefix);
        }
    }

    #[test]
    fn terminal_node_can_have_children() {
        let trie = Trie::new(vec!["cat", "cats"]).unwrap();
        assert!(trie.contains_word("cat"));
        assert!(trie.contains_word("cats"));

        let cat = trie.find_node_with_prefix("cat").unwrap();
        assert!(cat.is_terminal());
        assert!(!cat.is_leaf());
        assert_eq!(cat.depth(), 3);
        assert_eq!(cat.children().map(|(c, _)| c).collect::<Vec<_>>(), vec!['s']);

        let cats = cat.child('s').unwrap();
        assert!(cats.is_terminal());
        assert!(cats.is_leaf());
        assert_eq!(cats.depth(), 4);
    }

    #[test]
    fn word_only_present_as_prefix_is_not_a_word() {
        let trie = Trie::new(vec!["cats"]).unwrap();
        assert!(!trie.contains_word("cat"));
        assert!(trie.contains_prefix("cat"));
        assert!(!trie.find_node_with_prefix("cat").unwrap().is_terminal());
    }

    #[test]
    fn front_hooks() {
        let trie = Trie::new(vec!["at", "cat", "hat"]).unwrap();
        let hooks = trie.valid_first_letters("at");
        assert_eq!(hooks.iter().collect::<std::collections::BTreeSet<_>>(), btreeset! {'c', 'h'});
        assert!(trie.valid_first_letters("og").is_empty());
    }

    #[test]
    fn front_hooks_need_a_complete_word() {
        let trie = Trie::new(vec!["cats", "bat", "oat"]).unwrap();
        // "cat" is only a prefix of "cats".
        assert_eq!(letters(trie.valid_first_letters("at")), vec!['b', 'o']);
    }

    #[test]
    fn back_hooks_are_single_letters() {
        let trie = Trie::new(vec!["cat", "cats", "car"]).unwrap();
        assert_eq!(letters(trie.valid_last_letters("ca")), vec!['r', 't']);
        assert_eq!(letters(trie.valid_last_letters("cat")), vec!['s']);
        assert!(trie.valid_last_letters("cats").is_empty());
        assert!(trie.valid_last_letters("dog").is_empty());
    }

    #[test]
    fn back_hooks_skip_non_terminal_children() {
        let trie = Trie::new(vec!["cart", "cat"]).unwrap();
        assert_eq!(letters(trie.valid_last_letters("ca")), vec!['t']);
    }

    #[test]
    fn empty_and_foreign_queries_are_plain_misses() {
        let trie = Trie::new(vec!["a", "at"]).unwrap();
        assert!(!trie.contains_word(""));
        assert!(!trie.contains_prefix(""));
        assert!(trie.find_node_with_prefix("").is_none());
        assert!(trie.valid_first_letters("").is_empty());
        assert!(trie.valid_last_letters("").is_empty());

        assert!(!trie.contains_word("A"));
        assert!(!trie.contains_prefix("a1"));
        assert!(trie.find_node_with_prefix("é").is_none());
        assert!(trie.valid_first_letters("T").is_empty());
        assert!(trie.valid_last_letters("A").is_empty());
    }

    #[test]
    fn every_prefix_of_a_word_is_a_prefix() {
        let words = vec!["quixotic", "quiz", "zebra", "zeal"];
        let trie = Trie::new(&words).unwrap();
        for word in &words {
            for end in 1..=word.len() {
                let node = trie.find_node_with_prefix(&word[..end]).unwrap();
                assert_eq!(node.depth(), end);
            }
        }
    }
}
