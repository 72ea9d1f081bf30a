//! Lazy traversal iterators over the prefix tree.
//!
//! Both iterators drive an explicit stack rather than recursion, seeding
//! it with the root's children in reverse so that popping yields siblings
//! in insertion order (preorder, left to right across the tree).

use super::{NodeId, TrieDict};

/// Iterator over the nodes at one fixed depth.
///
/// Depth 0 is the root's sibling group. Subtrees deeper than the target
/// depth are pruned: once a node at the target depth is produced, its
/// children are never pushed.
///
/// Returned by [`TrieDict::nodes_at_depth`].
pub struct FixedDepthIter<'a> {
    dict: &'a TrieDict,
    target: usize,
    /// Pending (node, depth) pairs, children pushed in reverse.
    stack: Vec<(NodeId, usize)>,
}

impl<'a> FixedDepthIter<'a> {
    pub(crate) fn new(dict: &'a TrieDict, target: usize) -> Self {
        let stack = dict
            .root_children()
            .iter()
            .rev()
            .map(|&child| (child, 0))
            .collect();
        FixedDepthIter {
            dict,
            target,
            stack,
        }
    }
}

impl Iterator for FixedDepthIter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        while let Some((id, depth)) = self.stack.pop() {
            if depth == self.target {
                return Some(id);
            }
            self.stack.extend(
                self.dict
                    .children(id)
                    .iter()
                    .rev()
                    .map(|&child| (child, depth + 1)),
            );
        }
        None
    }
}

/// Iterator over every stored word, in preorder.
///
/// Returned by [`TrieDict::words`].
pub struct Words<'a> {
    dict: &'a TrieDict,
    stack: Vec<NodeId>,
}

impl<'a> Words<'a> {
    pub(crate) fn new(dict: &'a TrieDict) -> Self {
        let stack = dict.root_children().iter().rev().copied().collect();
        Words { dict, stack }
    }
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some(id) = self.stack.pop() {
            self.stack
                .extend(self.dict.children(id).iter().rev().copied());
            if self.dict.is_terminal(id) {
                return Some(self.dict.word_at(id));
            }
        }
        None
    }
}
