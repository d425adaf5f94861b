pub mod trie;
mod search;
pub mod trie_builder;
pub mod node;
pub mod iterators;

mod haschildren;

pub use iterators::{Children, Words};
pub use node::NodeRef;
pub use trie::Trie;
pub use trie_builder::TrieBuilder;
