//! The four orders a [`Tree`][crate::tree::Tree] can be walked in, and the
//! legacy text rendering of a walk.

use std::fmt::{self, Write};

/// Which order to visit the nodes of a tree in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// The node, then its left subtree, then its right subtree.
    Pre,
    /// The left subtree, then the node, then the right subtree. For a BST this
    /// yields the keys in ascending order.
    In,
    /// The left subtree, then the right subtree, then the node.
    Post,
    /// Breadth first: every node at depth `d` before any node at depth `d + 1`,
    /// left to right within a level.
    Level,
}

impl Order {
    /// Every order, in the order the report prints them.
    pub const ALL: [Order; 4] = [Order::Pre, Order::In, Order::Post, Order::Level];

    /// The label the report prints before a traversal of this order.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pre => "Pre-order:",
            Self::In => "In-order:",
            Self::Post => "Post-order:",
            Self::Level => "Level-order:",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pre => "pre-order",
            Self::In => "in-order",
            Self::Post => "post-order",
            Self::Level => "level-order",
        })
    }
}

/// Renders keys as one line where every key is followed by a single space,
/// including the last one. An empty sequence renders as the empty string.
///
/// # Examples
///
/// ```
/// use ordered_tree::traversal::render;
///
/// assert_eq!(render([1, 2, 3]), "1 2 3 ");
/// assert_eq!(render(Vec::<i32>::new()), "");
/// ```
pub fn render<I>(keys: I) -> String
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    let mut out = String::new();
    for key in keys {
        // Writing to a `String` can't fail.
        let _ = write!(out, "{} ", key);
    }
    out
}
