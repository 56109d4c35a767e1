use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::ids::{IdAllocator, NodeId};
use crate::node::{Node, DEFAULT_ROOT_TEXT, PLACEHOLDER_TEXT};

#[derive(Clone, Debug)]
struct NodeEntry {
    text: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// The live mind-map forest.
///
/// Nodes live in an arena keyed by id, each entry holding its child ids in
/// sibling order; top-level nodes are tracked in `roots`. Callers only ever
/// see the nested [`Node`] shape via [`ForestStore::export`], so nothing
/// outside the store can alias its internals.
///
/// Every mutation validates its target before touching state, so a failed
/// operation leaves the forest exactly as it was.
#[derive(Clone, Debug)]
pub struct ForestStore {
    nodes: HashMap<NodeId, NodeEntry>,
    roots: Vec<NodeId>,
    ids: IdAllocator,
}

impl Default for ForestStore {
    /// A single root labeled "Central Idea", the state a fresh map starts in.
    fn default() -> Self {
        let root = NodeId(1);
        let mut nodes = HashMap::new();
        nodes.insert(
            root,
            NodeEntry {
                text: DEFAULT_ROOT_TEXT.to_string(),
                parent: None,
                children: Vec::new(),
            },
        );
        Self {
            nodes,
            roots: vec![root],
            ids: IdAllocator::seeded(root.0),
        }
    }
}

impl ForestStore {
    /// A forest with no nodes at all.
    pub fn empty() -> Self {
        Self {
            nodes: HashMap::new(),
            roots: Vec::new(),
            ids: IdAllocator::new(),
        }
    }

    /// Build a store from a nested forest, e.g. one read back from storage.
    ///
    /// Rejects duplicate ids: two nodes sharing an id would be
    /// indistinguishable to every subsequent edit.
    pub fn from_nodes(nodes: Vec<Node>) -> Result<Self> {
        let mut store = Self::empty();
        store.import(nodes)?;
        Ok(store)
    }

    /// Replace the whole forest with `nodes`, keeping the id allocator ahead
    /// of every id the new forest contains.
    pub fn import(&mut self, nodes: Vec<Node>) -> Result<()> {
        let mut arena = HashMap::new();
        let mut roots = Vec::with_capacity(nodes.len());
        for node in &nodes {
            Self::index_subtree(node, None, &mut arena)?;
            roots.push(node.id);
        }
        for id in arena.keys() {
            self.ids.observe(id.0);
        }
        self.nodes = arena;
        self.roots = roots;
        Ok(())
    }

    fn index_subtree(
        node: &Node,
        parent: Option<NodeId>,
        arena: &mut HashMap<NodeId, NodeEntry>,
    ) -> Result<()> {
        let entry = NodeEntry {
            text: node.text.clone(),
            parent,
            children: node.children.iter().map(|c| c.id).collect(),
        };
        if arena.insert(node.id, entry).is_some() {
            return Err(Error::DuplicateNodeId(node.id));
        }
        for child in &node.children {
            Self::index_subtree(child, Some(node.id), arena)?;
        }
        Ok(())
    }

    /// Replace the text of the node with `id`. Children and sibling order are
    /// untouched.
    pub fn rename(&mut self, id: NodeId, new_text: impl Into<String>) -> Result<()> {
        let entry = self.nodes.get_mut(&id).ok_or(Error::NodeNotFound(id))?;
        entry.text = new_text.into();
        Ok(())
    }

    /// Append a fresh placeholder leaf to the children of `parent_id` and
    /// return its id. Never creates a new root.
    pub fn add_child(&mut self, parent_id: NodeId) -> Result<NodeId> {
        if !self.nodes.contains_key(&parent_id) {
            return Err(Error::NodeNotFound(parent_id));
        }
        let id = NodeId(self.ids.next());
        self.nodes.insert(
            id,
            NodeEntry {
                text: PLACEHOLDER_TEXT.to_string(),
                parent: Some(parent_id),
                children: Vec::new(),
            },
        );
        if let Some(parent) = self.nodes.get_mut(&parent_id) {
            parent.children.push(id);
        }
        Ok(id)
    }

    /// Remove the node with `id` together with its entire subtree, from
    /// wherever it sits in the forest. Returns how many nodes were removed.
    pub fn delete(&mut self, id: NodeId) -> Result<usize> {
        let parent = self.nodes.get(&id).ok_or(Error::NodeNotFound(id))?.parent;

        match parent {
            Some(pid) => {
                if let Some(p) = self.nodes.get_mut(&pid) {
                    p.children.retain(|c| c != &id);
                }
            }
            None => self.roots.retain(|r| r != &id),
        }

        let mut removed = 0;
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(entry) = self.nodes.remove(&next) {
                removed += 1;
                stack.extend(entry.children);
            }
        }
        Ok(removed)
    }

    /// Deep nested copy of the forest for rendering or snapshotting. The
    /// returned trees share nothing with the store, so later edits on either
    /// side cannot leak across.
    pub fn export(&self) -> Vec<Node> {
        self.roots.iter().map(|root| self.export_node(*root)).collect()
    }

    fn export_node(&self, id: NodeId) -> Node {
        let entry = &self.nodes[&id];
        Node {
            id,
            text: entry.text.clone(),
            children: entry
                .children
                .iter()
                .map(|child| self.export_node(*child))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(&id).map(|entry| entry.text.as_str())
    }

    /// Top-level node ids in display order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn children(&self, id: NodeId) -> Option<&[NodeId]> {
        self.nodes.get(&id).map(|entry| entry.children.as_slice())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(&id).and_then(|entry| entry.parent)
    }

    /// Validate arena invariants: parent pointers match child lists, no
    /// duplicate child entries, every referenced node present, roots
    /// parentless. Intended for tests and debugging.
    pub fn validate_invariants(&self) -> Result<()> {
        for root in &self.roots {
            match self.nodes.get(root) {
                Some(entry) if entry.parent.is_some() => {
                    return Err(Error::InconsistentForest("root has a parent".into()))
                }
                Some(_) => {}
                None => return Err(Error::InconsistentForest("root not present".into())),
            }
        }
        for (pid, pentry) in &self.nodes {
            let mut seen = std::collections::HashSet::new();
            for child in &pentry.children {
                if !seen.insert(child) {
                    return Err(Error::InconsistentForest("duplicate child entry".into()));
                }
                match self.nodes.get(child) {
                    Some(centry) if centry.parent != Some(*pid) => {
                        return Err(Error::InconsistentForest("child parent mismatch".into()))
                    }
                    Some(_) => {}
                    None => {
                        return Err(Error::InconsistentForest("child not present".into()))
                    }
                }
            }
        }
        let reachable: usize = self
            .roots
            .iter()
            .map(|root| self.export_node(*root).count())
            .sum();
        if reachable != self.nodes.len() {
            return Err(Error::InconsistentForest("orphaned arena entries".into()));
        }
        Ok(())
    }
}
