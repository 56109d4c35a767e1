use serde::{Deserialize, Serialize};

use crate::ids::NodeId;

/// Placeholder text given to every freshly created child node.
pub const PLACEHOLDER_TEXT: &str = "New Idea";

/// Text of the single root the forest starts with.
pub const DEFAULT_ROOT_TEXT: &str = "Central Idea";

/// Nested node shape shared by exports, templates, and the persisted JSON.
///
/// `children` is always present in memory and on write; input that omits the
/// field deserializes to an empty list, so a missing and an empty child list
/// are indistinguishable downstream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub text: String,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(id: NodeId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(id: NodeId, text: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            id,
            text: text.into(),
            children,
        }
    }

    /// Number of nodes in this subtree, itself included.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Node::count).sum::<usize>()
    }
}

/// Total number of nodes across a forest.
pub fn forest_len(nodes: &[Node]) -> usize {
    nodes.iter().map(Node::count).sum()
}

/// Collect every id in the forest in depth-first order.
pub fn forest_ids(nodes: &[Node]) -> Vec<NodeId> {
    fn walk(node: &Node, out: &mut Vec<NodeId>) {
        out.push(node.id);
        for child in &node.children {
            walk(child, out);
        }
    }
    let mut out = Vec::new();
    for node in nodes {
        walk(node, &mut out);
    }
    out
}
