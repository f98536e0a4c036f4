//! An unbalanced BST. Keys go exactly where the comparisons send them and
//! nothing is ever rotated, so the shape of the tree depends entirely on the
//! order keys are added in.
//!
//! Every child slot is an exclusively owned `Option<Box<Node>>`. There are no
//! parent pointers, so dropping a `Tree` (or a subtree) releases everything
//! beneath it and cloning produces a completely independent copy.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert!(!tree.has(&20));
//!
//! for key in [20, 40, 10, 70, 99, -2, 59, 43] {
//!     tree.add(key);
//! }
//! assert_eq!(tree.size(), 8);
//! assert_eq!(tree.pre_order_traversal(), "20 10 -2 40 70 59 43 99 ");
//!
//! // Adding a key that's already present changes nothing.
//! assert!(!tree.add(40));
//! assert_eq!(tree.size(), 8);
//!
//! // 70 has two children so its left subtree's largest key (59) takes its place.
//! assert!(tree.remove(&70));
//! assert_eq!(tree.pre_order_traversal(), "20 10 -2 40 59 43 99 ");
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;

use crate::traversal::{self, Order};

/// An owned, possibly empty, subtree.
type Link<K> = Option<Box<Node<K>>>;

/// A Binary Search Tree holding unique keys. Keys can be added, looked up, and
/// removed; the shape of the tree can be queried; and its keys can be walked in
/// any of the four [`Order`]s.
///
/// Adding and dropping walk the tree with a loop. Everything else recurses once
/// per level, so a tree built from a long run of sorted keys is limited by the
/// stack depth of the calling thread.
pub struct Tree<K> {
    root: Link<K>,
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        Node::release(self.root.take());
    }
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Clone for Tree<K>
where
    K: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
        }
    }

    /// Releases every node this tree owns and then deep copies `source`. The
    /// borrow checker rules out `source` being `self`.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.root = source.root.clone();
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.in_order()).finish()
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.add(key);
        }
    }
}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Adds `key` to the tree if it isn't already present. Returns whether the
    /// key was added; adding a key twice leaves the tree exactly as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.add("gene"));
    /// assert!(!tree.add("gene"));
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn add(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => return false,
                Ordering::Greater => &mut node.right,
            };
        }
        *link = Some(Node::new_boxed(key));
        true
    }

    /// Whether `key` is in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::Tree;
    ///
    /// let tree: Tree<_> = [20, 40, 10].into_iter().collect();
    ///
    /// assert!(tree.has(&10));
    /// assert!(!tree.has(&100));
    /// ```
    pub fn has(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.root().is_some_and(|n| n.has(key))
    }

    /// Removes `key` from the tree and returns whether it was present. Removing
    /// a key that isn't in the tree does nothing.
    ///
    /// A node with at most one child is replaced by that child. A node with two
    /// children takes the largest key of its left subtree (its in-order
    /// predecessor) and the predecessor's node is unlinked instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert!(tree.remove(&5));
    /// assert!(!tree.remove(&5));
    /// assert_eq!(tree.pre_order_traversal(), "3 8 ");
    /// ```
    pub fn remove(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        Node::remove(&mut self.root, key)
    }

    /// Drops every node in the tree.
    pub fn clear(&mut self) {
        Node::release(self.root.take());
    }

    /// Whether the tree has no keys at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of keys in the tree.
    pub fn size(&self) -> usize {
        self.root().map_or(0, Node::size)
    }

    /// The number of nodes without any children.
    pub fn leaf_count(&self) -> usize {
        self.root().map_or(0, Node::leaf_count)
    }

    /// The number of nodes on the longest path from the root to a leaf. An
    /// empty tree has height 0 and a lone root has height 1.
    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }

    /// The number of nodes at depth `level`, where the root is at level 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::Tree;
    ///
    /// let tree: Tree<_> = [20, 40, 10, 70, 99, -2, 59, 43].into_iter().collect();
    ///
    /// assert_eq!(tree.level_width(0), 1);
    /// assert_eq!(tree.level_width(2), 2);
    /// assert_eq!(tree.level_width(9), 0);
    /// ```
    pub fn level_width(&self, level: usize) -> usize {
        self.root().map_or(0, |n| n.level_width(level))
    }

    /// The largest number of nodes found at any one level of the tree. Each
    /// level is counted once in a single breadth first pass.
    pub fn width(&self) -> usize {
        let mut widest = 0;
        let mut level: Vec<&Node<K>> = self.root().into_iter().collect();
        while !level.is_empty() {
            widest = widest.max(level.len());
            level = level.into_iter().flat_map(|n| n.children()).collect();
        }
        widest
    }

    /// The smallest key in the tree.
    pub fn min(&self) -> Option<&K> {
        self.root().map(|n| &n.min().key)
    }

    /// The largest key in the tree.
    pub fn max(&self) -> Option<&K> {
        self.root().map(|n| &n.max().key)
    }

    /// Keys in pre-order: node, left subtree, right subtree.
    pub fn pre_order(&self) -> Vec<&K> {
        let mut keys = Vec::new();
        if let Some(root) = self.root() {
            root.pre_order(&mut keys);
        }
        keys
    }

    /// Keys in in-order: left subtree, node, right subtree. These are always in
    /// ascending order.
    pub fn in_order(&self) -> Vec<&K> {
        let mut keys = Vec::new();
        if let Some(root) = self.root() {
            root.in_order(&mut keys);
        }
        keys
    }

    /// Keys in post-order: left subtree, right subtree, node.
    pub fn post_order(&self) -> Vec<&K> {
        let mut keys = Vec::new();
        if let Some(root) = self.root() {
            root.post_order(&mut keys);
        }
        keys
    }

    /// Keys level by level from the root down, left to right within a level.
    pub fn level_order(&self) -> Vec<&K> {
        let mut keys = Vec::new();
        let mut queue: VecDeque<&Node<K>> = self.root().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            keys.push(&node.key);
            queue.extend(node.children());
        }
        keys
    }

    /// Keys in the given `order`.
    pub fn traverse(&self, order: Order) -> Vec<&K> {
        match order {
            Order::Pre => self.pre_order(),
            Order::In => self.in_order(),
            Order::Post => self.post_order(),
            Order::Level => self.level_order(),
        }
    }

    /// The keys in `order`, rendered as a single line with a space after every
    /// key. See [`traversal::render`].
    pub fn traversal(&self, order: Order) -> String
    where
        K: fmt::Display,
    {
        traversal::render(self.traverse(order))
    }

    /// [`Tree::pre_order`] rendered as one line.
    pub fn pre_order_traversal(&self) -> String
    where
        K: fmt::Display,
    {
        self.traversal(Order::Pre)
    }

    /// [`Tree::in_order`] rendered as one line.
    pub fn in_order_traversal(&self) -> String
    where
        K: fmt::Display,
    {
        self.traversal(Order::In)
    }

    /// [`Tree::post_order`] rendered as one line.
    pub fn post_order_traversal(&self) -> String
    where
        K: fmt::Display,
    {
        self.traversal(Order::Post)
    }

    /// [`Tree::level_order`] rendered as one line. Empty for an empty tree.
    pub fn level_order_traversal(&self) -> String
    where
        K: fmt::Display,
    {
        self.traversal(Order::Level)
    }

    fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }
}

#[derive(Clone)]
struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// The present children, left first.
    fn children(&self) -> impl Iterator<Item = &Self> {
        self.left().into_iter().chain(self.right())
    }

    fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Drops every node under `link` one at a time, so how deep the subtree
    /// goes doesn't matter.
    fn release(link: Link<K>) {
        let mut stack: Vec<Box<Self>> = link.into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }

    fn has(&self, key: &K) -> bool
    where
        K: Ord,
    {
        match key.cmp(&self.key) {
            Ordering::Less => self.left().is_some_and(|n| n.has(key)),
            Ordering::Equal => true,
            Ordering::Greater => self.right().is_some_and(|n| n.has(key)),
        }
    }

    /// Removes `key` from the subtree at `link`, replacing the subtree's root if
    /// that's where the key was.
    fn remove(link: &mut Link<K>, key: &K) -> bool
    where
        K: Ord,
    {
        let Some(node) = link.as_mut() else {
            return false;
        };

        match key.cmp(&node.key) {
            Ordering::Less => Self::remove(&mut node.left, key),
            Ordering::Greater => Self::remove(&mut node.right, key),
            Ordering::Equal => {
                match (node.left.is_some(), node.right.is_some()) {
                    (false, _) => {
                        let right = node.right.take();
                        *link = right;
                    }
                    (true, false) => {
                        let left = node.left.take();
                        *link = left;
                    }
                    // Take the predecessor's key and unlink its node. This
                    // keeps every key on the left smaller and every key on the
                    // right larger without moving any other node.
                    (true, true) => {
                        if let Some(predecessor) = Self::pop_max(&mut node.left) {
                            node.key = predecessor;
                        }
                    }
                }
                true
            }
        }
    }

    /// Unlinks the right-most node of the subtree at `link` and returns its key.
    /// That node's left child (if any) takes its place.
    fn pop_max(link: &mut Link<K>) -> Option<K> {
        let node = link.as_mut()?;
        if node.right.is_some() {
            return Self::pop_max(&mut node.right);
        }

        let Node { key, left, .. } = *link.take()?;
        *link = left;
        Some(key)
    }

    fn min(&self) -> &Self {
        self.left().map_or(self, Node::min)
    }

    fn max(&self) -> &Self {
        self.right().map_or(self, Node::max)
    }

    fn size(&self) -> usize {
        self.left().map_or(0, Node::size) + 1 + self.right().map_or(0, Node::size)
    }

    fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.left().map_or(0, Node::leaf_count) + self.right().map_or(0, Node::leaf_count)
        }
    }

    fn height(&self) -> usize {
        let left_height = self.left().map_or(0, Node::height);
        let right_height = self.right().map_or(0, Node::height);
        left_height.max(right_height) + 1
    }

    /// Counts the nodes `levels` below this one by walking down until there are
    /// no levels left to descend.
    fn level_width(&self, levels: usize) -> usize {
        match levels {
            0 => 1,
            _ => self.children().map(|n| n.level_width(levels - 1)).sum(),
        }
    }

    fn pre_order<'a>(&'a self, keys: &mut Vec<&'a K>) {
        keys.push(&self.key);
        if let Some(left) = self.left() {
            left.pre_order(keys);
        }
        if let Some(right) = self.right() {
            right.pre_order(keys);
        }
    }

    fn in_order<'a>(&'a self, keys: &mut Vec<&'a K>) {
        if let Some(left) = self.left() {
            left.in_order(keys);
        }
        keys.push(&self.key);
        if let Some(right) = self.right() {
            right.in_order(keys);
        }
    }

    fn post_order<'a>(&'a self, keys: &mut Vec<&'a K>) {
        if let Some(left) = self.left() {
            left.post_order(keys);
        }
        if let Some(right) = self.right() {
            right.post_order(keys);
        }
        keys.push(&self.key);
    }
}
