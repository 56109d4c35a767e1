use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::ids::{IdAllocator, IdeaId};

/// The canned brainstorming prompts the generator draws from.
pub const PROMPTS: [&str; 10] = [
    "What if...",
    "How might we...",
    "Imagine a world where...",
    "Combine ... and ...",
    "Reverse the purpose of...",
    "Make ... more efficient by...",
    "Create a ... for ...",
    "Redesign ... to be more...",
    "What would happen if ... didn't exist?",
    "How can ... solve the problem of ...?",
];

/// Pick one prompt uniformly at random.
pub fn random_prompt<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    PROMPTS[rng.gen_range(0..PROMPTS.len())]
}

/// A saved idea with the category it was filed under.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    pub id: IdeaId,
    pub text: String,
    pub category: String,
    pub timestamp: DateTime<Utc>,
}

/// Saved ideas plus the user-managed category list.
#[derive(Clone, Debug)]
pub struct IdeaBank {
    ideas: Vec<Idea>,
    categories: Vec<String>,
    ids: IdAllocator,
}

impl Default for IdeaBank {
    fn default() -> Self {
        Self {
            ideas: Vec::new(),
            categories: vec!["General".to_string()],
            ids: IdAllocator::new(),
        }
    }
}

impl IdeaBank {
    /// Rebuild the bank from persisted ideas and categories.
    pub fn from_parts(ideas: Vec<Idea>, categories: Vec<String>) -> Self {
        let mut ids = IdAllocator::new();
        for idea in &ideas {
            ids.observe(idea.id.0);
        }
        Self {
            ideas,
            categories,
            ids,
        }
    }

    /// Save an idea under a category, stamped with the current time.
    pub fn save(&mut self, text: impl Into<String>, category: impl Into<String>) -> IdeaId {
        let id = IdeaId(self.ids.next());
        self.ideas.push(Idea {
            id,
            text: text.into(),
            category: category.into(),
            timestamp: Utc::now(),
        });
        id
    }

    pub fn edit(&mut self, id: IdeaId, new_text: impl Into<String>) -> Result<()> {
        let idea = self
            .ideas
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(Error::IdeaNotFound(id))?;
        idea.text = new_text.into();
        Ok(())
    }

    pub fn delete(&mut self, id: IdeaId) -> Result<()> {
        let before = self.ideas.len();
        self.ideas.retain(|i| i.id != id);
        if self.ideas.len() == before {
            return Err(Error::IdeaNotFound(id));
        }
        Ok(())
    }

    /// Add a category. Empty and duplicate names are skipped; returns whether
    /// the list changed.
    pub fn add_category(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if name.is_empty() || self.categories.contains(&name) {
            return false;
        }
        self.categories.push(name);
        true
    }

    /// All ideas, or only those filed under `category`.
    pub fn filtered(&self, category: Option<&str>) -> Vec<&Idea> {
        match category {
            None => self.ideas.iter().collect(),
            Some(wanted) => self.ideas.iter().filter(|i| i.category == wanted).collect(),
        }
    }

    pub fn ideas(&self) -> &[Idea] {
        &self.ideas
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }
}
