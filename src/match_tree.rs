use std::collections::BTreeMap;

/// Index of a node inside a [`MatchTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Default)]
struct MatchNode<'w> {
    children: BTreeMap<char, NodeId>,
    word: Option<&'w str>,
}

/// A prefix tree over candidate words.
///
/// Lets a search tell whether a string is a prefix of any inserted word in
/// constant time per letter. For `["a", "an", "the", "them"]`:
///
/// ```text
/// ROOT: {a, t}
/// a: {n} ends "a"
/// n: {} ends "an"
/// t: {h}
/// h: {e}
/// e: {m} ends "the"
/// m: {} ends "them"
/// ```
///
/// Nodes live in a single arena and are only ever reached from their one
/// parent, so the structure stays a tree.
#[derive(Debug)]
pub struct MatchTree<'w> {
    nodes: Vec<MatchNode<'w>>,
}

impl<'w> MatchTree<'w> {
    pub const ROOT: NodeId = NodeId(0);

    pub fn new() -> Self {
        MatchTree {
            nodes: vec![MatchNode::default()],
        }
    }

    pub fn build<I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'w str>,
    {
        let mut tree = Self::new();
        for word in words {
            tree.insert(word);
        }
        tree
    }

    /// Adds `word`. Empty words are ignored and inserting the same word
    /// twice is harmless.
    pub fn insert(&mut self, word: &'w str) {
        if word.is_empty() {
            return;
        }

        let mut node = Self::ROOT;
        for letter in word.chars() {
            node = match self.nodes[node.0].children.get(&letter) {
                Some(&child) => child,
                None => {
                    let child = NodeId(self.nodes.len());
                    self.nodes.push(MatchNode::default());
                    self.nodes[node.0].children.insert(letter, child);
                    child
                }
            };
        }
        self.nodes[node.0].word = Some(word);
    }

    pub fn child(&self, node: NodeId, letter: char) -> Option<NodeId> {
        self.nodes[node.0].children.get(&letter).copied()
    }

    /// The word spelled by the path ending at `node`, if one ends there.
    pub fn terminal(&self, node: NodeId) -> Option<&'w str> {
        self.nodes[node.0].word
    }

    /// Follows `prefix` from the root.
    pub fn walk(&self, prefix: &str) -> Option<NodeId> {
        prefix
            .chars()
            .try_fold(Self::ROOT, |node, letter| self.child(node, letter))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.walk(word)
            .and_then(|node| self.terminal(node))
            .is_some()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl Default for MatchTree<'_> {
    fn default() -> Self {
        Self::new()
    }
}
