use crate::iterators::PrefixIter;
use crate::types::*;

pub const ALPHABET_SIZE: usize = 26;

///A single trie node: one child slot per letter of the alphabet and a
///marker for being a complete stored word. Children are arena indices
///rather than owned pointers, which keeps ownership trivially acyclic.
#[derive(Clone, Default)]
pub(crate) struct TrieNode {
    pub(crate) children: [Option<NodeId>; ALPHABET_SIZE],
    pub(crate) is_word: bool,
}

///A prefix index over a fixed lowercase a-z vocabulary. Nodes live in an
///arena for the lifetime of the index; there is no removal operation.
///The root node (index 0) represents the empty prefix.
pub struct PrefixIndex {
    pub(crate) nodes: Vec<TrieNode>,
    len: usize,
}

impl Default for PrefixIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixIndex {
    pub fn new() -> PrefixIndex {
        PrefixIndex {
            nodes: vec![TrieNode::default()],
            len: 0,
        }
    }

    ///Number of distinct words stored in the index
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    ///Number of allocated trie nodes, including the root
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    ///Insert a normalized word into the index, creating any missing
    ///nodes along its path. Inserting the same word twice has no
    ///additional effect. Callers normalize beforehand; bytes outside
    ///a-z are ignored here, consistent with the lookup path.
    pub fn insert(&mut self, word: &str) {
        let mut node: NodeId = 0;
        let mut depth = 0;
        for index in word.bytes().filter_map(slot) {
            node = match self.nodes[node].children[index] {
                Some(child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[node].children[index] = Some(child);
                    child
                }
            };
            depth += 1;
        }
        //never mark the root: an input without any letters stores nothing
        if depth > 0 && !self.nodes[node].is_word {
            self.nodes[node].is_word = true;
            self.len += 1;
        }
    }

    ///Test whether the exact word is stored in the index
    pub fn contains(&self, word: &str) -> bool {
        match self.walk(word) {
            Some(node) => self.nodes[node].is_word,
            None => false,
        }
    }

    ///Return all stored words beginning with the given prefix, in
    ///lexicographically ascending order, truncated at `limit`. Characters
    ///outside a-z are silently dropped from the search path, matching the
    ///normalization policy. A prefix with no matching path yields an
    ///empty result. The underlying traversal is lazy and visits no more
    ///nodes than needed to fill `limit`.
    pub fn autocomplete(&self, prefix: &str, limit: usize) -> Vec<String> {
        self.iter_prefix(prefix).take(limit).collect()
    }

    ///Lazily enumerate all stored words under a prefix in lexicographic
    ///order. `autocomplete()` is the bounded form of this.
    pub fn iter_prefix(&self, prefix: &str) -> PrefixIter {
        let cleaned: String = prefix
            .chars()
            .filter(|c| c.is_ascii_lowercase())
            .collect();
        match self.walk(&cleaned) {
            Some(node) => PrefixIter::new(self, node, cleaned),
            None => PrefixIter::empty(self),
        }
    }

    ///Walk the trie along a cleaned prefix, returning the node the
    ///prefix path ends at, if it exists
    fn walk(&self, prefix: &str) -> Option<NodeId> {
        let mut node: NodeId = 0;
        for index in prefix.bytes().filter_map(slot) {
            node = self.nodes[node].children[index]?;
        }
        Some(node)
    }
}

///Map a byte to its child slot; bytes outside a-z have none
fn slot(byte: u8) -> Option<usize> {
    if byte.is_ascii_lowercase() {
        Some((byte - b'a') as usize)
    } else {
        None
    }
}
