//! Shared-prefix tree dictionary.
//!
//! The dictionary is a rooted tree where each node carries one character;
//! the path from the root down to a terminal node spells one stored word.
//! Words sharing a prefix share the nodes of that prefix.
//!
//! Nodes live in an arena (`Vec` of slots addressed by [`NodeId`]), with
//! owning child links running downward and a non-owning parent index
//! running upward. The parent link exists only so a word can be rebuilt
//! by walking from a leaf to the root; ownership flows strictly downward,
//! so the structure cannot form a reference cycle.

pub mod iterator;

pub use iterator::{FixedDepthIter, Words};

/// Index of a node in the dictionary's arena.
pub type NodeId = usize;

/// Arena index of the sentinel root node.
const ROOT: NodeId = 0;

/// Character stored in the sentinel root, standing for the empty prefix.
const ROOT_VALUE: char = '.';

/// A single node of the prefix tree.
#[derive(Debug, Clone)]
struct Node {
    /// The character this node contributes to any word passing through it.
    value: char,
    /// Non-owning back-reference; `None` only for the root.
    parent: Option<NodeId>,
    /// Owned children, insertion order preserved. Search and rendering
    /// iterate siblings in exactly this order.
    children: Vec<NodeId>,
    /// Word-completion marker. Tracked explicitly rather than inferred
    /// from childlessness, so a stored word survives being extended by a
    /// longer word that shares its path.
    terminal: bool,
}

impl Node {
    fn new(value: char, parent: Option<NodeId>) -> Self {
        Node {
            value,
            parent,
            children: Vec::new(),
            terminal: false,
        }
    }
}

/// A fuzzy-matching word dictionary backed by a character trie.
///
/// Created empty with only the sentinel root. Nodes are only ever added;
/// there is no per-word removal. The whole tree can be discarded at once
/// with [`TrieDict::clear`].
///
/// # Depth convention
///
/// Children of the root sit at depth 0, so a word of `n` characters
/// terminates at depth `n - 1`. [`TrieDict::max_depth`] and
/// [`TrieDict::nodes_at_depth`] both follow this convention.
///
/// # Invariants
///
/// - Every non-root node is reachable by exactly one path from the root.
/// - No two sibling nodes share the same character value.
/// - Every childless non-root node is terminal; interior nodes may also
///   be terminal when a stored word is a proper prefix of another.
#[derive(Debug, Clone)]
pub struct TrieDict {
    nodes: Vec<Node>,
    word_count: usize,
}

impl TrieDict {
    /// Create an empty dictionary containing only the sentinel root.
    pub fn new() -> Self {
        TrieDict {
            nodes: vec![Node::new(ROOT_VALUE, None)],
            word_count: 0,
        }
    }

    /// True iff no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.nodes[ROOT].children.is_empty()
    }

    /// Number of distinct words stored.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of tree nodes, excluding the sentinel root.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Depth of the deepest node, or 0 for an empty tree.
    ///
    /// Recomputed from the current structure on every call. The longest
    /// stored word has `max_depth() + 1` characters.
    pub fn max_depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(NodeId, usize)> = self.nodes[ROOT]
            .children
            .iter()
            .map(|&child| (child, 0))
            .collect();

        while let Some((id, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(self.nodes[id].children.iter().map(|&c| (c, depth + 1)));
        }

        deepest
    }

    /// Insert one word, sharing any existing prefix.
    ///
    /// Walks the tree character by character, descending into an existing
    /// sibling with a matching value or appending a new node at the end
    /// of the sibling group. Once a character is missing, the remaining
    /// suffix is chained downward without further searching. The last
    /// node is marked terminal.
    ///
    /// Returns `true` if the word was not previously stored. Re-inserting
    /// an existing word is a no-op returning `false`, as is the empty
    /// string. Insertion never fails.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut current = ROOT;
        for ch in word.chars() {
            current = match self.child_with_value(current, ch) {
                Some(child) => child,
                None => self.push_child(current, ch),
            };
        }

        if current == ROOT {
            return false;
        }

        if self.nodes[current].terminal {
            return false;
        }
        self.nodes[current].terminal = true;
        self.word_count += 1;
        true
    }

    /// Insert a comma-delimited list of words.
    ///
    /// Empty tokens (consecutive commas, leading/trailing comma) are
    /// dropped. Returns `true` iff at least one non-empty token was
    /// found, whether or not any token was new.
    pub fn insert_all(&mut self, words: &str) -> bool {
        let mut found = false;
        for token in words.split(',') {
            if token.is_empty() {
                continue;
            }
            found = true;
            self.insert(token);
        }
        found
    }

    /// Exact-match probe: true iff `word` is stored in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let mut current = ROOT;
        for ch in word.chars() {
            match self.child_with_value(current, ch) {
                Some(child) => current = child,
                None => return false,
            }
        }
        self.nodes[current].terminal
    }

    /// Lazily enumerate the nodes at the given depth, left to right
    /// across the tree with siblings in insertion order.
    ///
    /// The iterator borrows the dictionary and is recomputed per call.
    pub fn nodes_at_depth(&self, depth: usize) -> FixedDepthIter<'_> {
        FixedDepthIter::new(self, depth)
    }

    /// Enumerate every stored word in preorder.
    pub fn words(&self) -> Words<'_> {
        Words::new(self)
    }

    /// Rebuild the word spelled by the path from the root down to `id`,
    /// walking the parent references upward. The sentinel root is
    /// excluded.
    pub fn word_at(&self, id: NodeId) -> String {
        let mut chars = Vec::new();
        let mut current = id;
        while let Some(parent) = self.nodes[current].parent {
            chars.push(self.nodes[current].value);
            current = parent;
        }
        chars.into_iter().rev().collect()
    }

    /// True iff the node marks the end of a stored word.
    pub fn is_terminal(&self, id: NodeId) -> bool {
        self.nodes[id].terminal
    }

    /// The character carried by the node.
    pub fn value(&self, id: NodeId) -> char {
        self.nodes[id].value
    }

    /// Bracketed rendering of the whole tree, sentinel root included:
    /// `.(c(a(t(s), r)), f(o(x)))`.
    pub fn render_bracketed(&self) -> String {
        let mut out = String::new();
        out.push(self.nodes[ROOT].value);
        self.render_children(ROOT, &mut out);
        out
    }

    /// Discard every word, replacing the tree with a fresh empty one.
    pub fn clear(&mut self) {
        *self = TrieDict::new();
    }

    /// Linear scan of `parent`'s sibling group for a child carrying
    /// `value`. Sibling groups stay small (at most the alphabet size),
    /// so a scan beats keeping a map per node.
    fn child_with_value(&self, parent: NodeId, value: char) -> Option<NodeId> {
        self.nodes[parent]
            .children
            .iter()
            .copied()
            .find(|&child| self.nodes[child].value == value)
    }

    /// Append a new node at the end of `parent`'s sibling group.
    fn push_child(&mut self, parent: NodeId, value: char) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node::new(value, Some(parent)));
        self.nodes[parent].children.push(id);
        id
    }

    fn render_children(&self, id: NodeId, out: &mut String) {
        let children = &self.nodes[id].children;
        if children.is_empty() {
            return;
        }
        out.push('(');
        for (i, &child) in children.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push(self.nodes[child].value);
            self.render_children(child, out);
        }
        out.push(')');
    }

    /// Children of `id` in insertion order. Used by the iterators.
    pub(crate) fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id].children
    }

    /// Children of the root, i.e. the depth-0 sibling group.
    pub(crate) fn root_children(&self) -> &[NodeId] {
        &self.nodes[ROOT].children
    }
}

impl Default for TrieDict {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> FromIterator<&'a str> for TrieDict {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut dict = TrieDict::new();
        for word in iter {
            dict.insert(word);
        }
        dict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_dict_is_empty() {
        let dict = TrieDict::new();
        assert!(dict.is_empty());
        assert_eq!(dict.word_count(), 0);
        assert_eq!(dict.node_count(), 0);
        assert_eq!(dict.max_depth(), 0);
    }

    #[test]
    fn insert_and_contains() {
        let mut dict = TrieDict::new();
        assert!(dict.insert("hello"));
        assert!(dict.insert("world"));
        assert!(dict.contains("hello"));
        assert!(dict.contains("world"));
        assert!(!dict.contains("hell"));
        assert!(!dict.contains("goodbye"));
    }

    #[test]
    fn reinsert_is_noop() {
        let mut dict = TrieDict::new();
        assert!(dict.insert("test"));
        let nodes = dict.node_count();
        assert!(!dict.insert("test"));
        assert_eq!(dict.node_count(), nodes);
        assert_eq!(dict.word_count(), 1);
    }

    #[test]
    fn empty_word_is_noop() {
        let mut dict = TrieDict::new();
        assert!(!dict.insert(""));
        assert!(dict.is_empty());
        assert!(!dict.contains(""));
    }

    #[test]
    fn shared_prefix_shares_nodes() {
        let mut dict = TrieDict::new();
        dict.insert("cat");
        dict.insert("car");
        // "ca" shared, then "t" and "r": 4 nodes, not 6.
        assert_eq!(dict.node_count(), 4);
    }

    #[test]
    fn prefix_word_survives_extension() {
        // Word completion is an explicit flag: attaching children to the
        // node ending "cat" must not lose "cat" itself.
        let mut dict = TrieDict::new();
        dict.insert("cat");
        dict.insert("cats");
        assert!(dict.contains("cat"));
        assert!(dict.contains("cats"));
        assert_eq!(dict.word_count(), 2);
    }

    #[test]
    fn extension_first_then_prefix() {
        let mut dict = TrieDict::new();
        dict.insert("cats");
        assert!(!dict.contains("cat"));
        assert!(dict.insert("cat"));
        assert!(dict.contains("cat"));
        // Marking an interior node terminal creates no nodes.
        assert_eq!(dict.node_count(), 4);
    }

    #[test]
    fn max_depth_follows_longest_word() {
        let mut dict = TrieDict::new();
        dict.insert("a");
        assert_eq!(dict.max_depth(), 0);
        dict.insert("abc");
        assert_eq!(dict.max_depth(), 2);
        dict.insert("ab");
        assert_eq!(dict.max_depth(), 2);
    }

    #[test]
    fn word_at_reconstructs_path() {
        let mut dict = TrieDict::new();
        dict.insert("fox");
        let terminal = dict
            .nodes_at_depth(2)
            .find(|&id| dict.is_terminal(id))
            .expect("terminal node at depth 2");
        assert_eq!(dict.word_at(terminal), "fox");
    }

    #[test]
    fn insert_all_skips_empty_tokens() {
        let mut dict = TrieDict::new();
        assert!(dict.insert_all("fox,wolf,,bear"));
        assert_eq!(dict.word_count(), 3);
        assert!(dict.contains("fox"));
        assert!(dict.contains("wolf"));
        assert!(dict.contains("bear"));
    }

    #[test]
    fn insert_all_without_tokens_reports_failure() {
        let mut dict = TrieDict::new();
        assert!(!dict.insert_all(""));
        assert!(!dict.insert_all(",,,"));
        assert!(dict.is_empty());
    }

    #[test]
    fn insert_all_with_duplicates_still_succeeds() {
        let mut dict = TrieDict::new();
        dict.insert("fox");
        assert!(dict.insert_all("fox,fox"));
        assert_eq!(dict.word_count(), 1);
    }

    #[test]
    fn clear_resets_to_empty() {
        let mut dict = TrieDict::new();
        dict.insert_all("one,two,three");
        dict.clear();
        assert!(dict.is_empty());
        assert_eq!(dict.node_count(), 0);
        assert!(!dict.contains("one"));
    }

    #[test]
    fn render_bracketed_shows_structure() {
        let mut dict = TrieDict::new();
        dict.insert("cat");
        dict.insert("car");
        assert_eq!(dict.render_bracketed(), ".(c(a(t, r)))");
    }

    #[test]
    fn render_bracketed_empty_tree() {
        let dict = TrieDict::new();
        assert_eq!(dict.render_bracketed(), ".");
    }

    #[test]
    fn siblings_keep_insertion_order() {
        let mut dict = TrieDict::new();
        dict.insert("b");
        dict.insert("a");
        dict.insert("c");
        let order: Vec<char> = dict.nodes_at_depth(0).map(|id| dict.value(id)).collect();
        assert_eq!(order, vec!['b', 'a', 'c']);
    }
}
