use crate::trie::{PrefixIndex, ALPHABET_SIZE};
use crate::types::*;

///Depth-first enumeration of all stored words under a trie node, in
///lexicographically ascending order (child slots are visited a to z).
///The traversal is lazy: nodes are only visited as items are pulled, so
///bounding with `take(limit)` never walks more of the subtree than
///needed to produce `limit` words.
pub struct PrefixIter<'a> {
    index: &'a PrefixIndex,
    ///Work stack of (node, next child slot to try); the bottom frame is
    ///the node the prefix path ended at
    stack: Vec<(NodeId, u8)>,
    ///Text spelled by the path from the root to the current node
    buffer: String,
    ///The start node itself may be a complete word; it is emitted first
    emit_start: bool,
}

impl<'a> PrefixIter<'a> {
    pub(crate) fn new(index: &'a PrefixIndex, start: NodeId, prefix: String) -> PrefixIter<'a> {
        PrefixIter {
            index,
            emit_start: index.nodes[start].is_word,
            stack: vec![(start, 0)],
            buffer: prefix,
        }
    }

    ///An iterator that yields nothing, for prefixes with no matching path
    pub(crate) fn empty(index: &'a PrefixIndex) -> PrefixIter<'a> {
        PrefixIter {
            index,
            emit_start: false,
            stack: Vec::new(),
            buffer: String::new(),
        }
    }
}

impl<'a> Iterator for PrefixIter<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.emit_start {
            self.emit_start = false;
            return Some(self.buffer.clone());
        }
        loop {
            let (node, cursor) = *self.stack.last()?;
            if cursor as usize == ALPHABET_SIZE {
                //subtree exhausted; drop the frame and the character it
                //added to the path (the bottom frame added none)
                self.stack.pop();
                if !self.stack.is_empty() {
                    self.buffer.pop();
                }
                continue;
            }
            self.stack.last_mut().expect("frame checked above").1 += 1;
            if let Some(child) = self.index.nodes[node].children[cursor as usize] {
                self.buffer.push((b'a' + cursor) as char);
                self.stack.push((child, 0));
                if self.index.nodes[child].is_word {
                    return Some(self.buffer.clone());
                }
            }
        }
    }
}
