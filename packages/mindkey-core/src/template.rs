use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::ids::{IdAllocator, NodeId, TemplateId};
use crate::node::{Node, DEFAULT_ROOT_TEXT};
use crate::tree::ForestStore;

/// A named, independently owned snapshot of a forest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: TemplateId,
    pub name: String,
    pub nodes: Vec<Node>,
}

/// Library of forest snapshots, separate from the live forest.
///
/// Snapshots are deep copies in both directions: saving one detaches it from
/// the live forest, applying one hands the forest a fresh copy. Names are
/// caller-supplied and may repeat; the id disambiguates.
#[derive(Clone, Debug)]
pub struct TemplateLibrary {
    templates: Vec<Template>,
    ids: IdAllocator,
}

impl Default for TemplateLibrary {
    /// The two built-in templates the app ships with.
    fn default() -> Self {
        let templates = vec![
            Template {
                id: TemplateId(1),
                name: "Default".to_string(),
                nodes: vec![Node::new(NodeId(1), DEFAULT_ROOT_TEXT)],
            },
            Template {
                id: TemplateId(2),
                name: "Problem Solving".to_string(),
                nodes: vec![Node::with_children(
                    NodeId(1),
                    "Problem",
                    vec![
                        Node::new(NodeId(2), "Causes"),
                        Node::new(NodeId(3), "Effects"),
                        Node::new(NodeId(4), "Solutions"),
                    ],
                )],
            },
        ];
        Self {
            templates,
            ids: IdAllocator::seeded(2),
        }
    }
}

impl TemplateLibrary {
    /// Rebuild the library from persisted templates, keeping the id
    /// allocator ahead of every stored id.
    pub fn from_templates(templates: Vec<Template>) -> Self {
        let mut ids = IdAllocator::new();
        for template in &templates {
            ids.observe(template.id.0);
        }
        Self { templates, ids }
    }

    /// Replace the live forest wholesale with a deep copy of the template's
    /// nodes. Returns the template name for user feedback. On a miss the
    /// forest is left untouched.
    pub fn apply(&self, id: TemplateId, forest: &mut ForestStore) -> Result<&str> {
        let template = self
            .templates
            .iter()
            .find(|t| t.id == id)
            .ok_or(Error::TemplateNotFound(id))?;
        forest.import(template.nodes.clone())?;
        Ok(&template.name)
    }

    /// Snapshot the live forest under `name` and return the new template id.
    pub fn save_current(&mut self, name: impl Into<String>, forest: &ForestStore) -> TemplateId {
        let id = TemplateId(self.ids.next());
        self.templates.push(Template {
            id,
            name: name.into(),
            nodes: forest.export(),
        });
        id
    }

    pub fn get(&self, id: TemplateId) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Persisted view of the library.
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }
}
