use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::ids::{IdAllocator, NoteId};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// Ordered list of notes. Insertion order is display order.
#[derive(Clone, Debug, Default)]
pub struct Notebook {
    notes: Vec<Note>,
    ids: IdAllocator,
}

impl Notebook {
    pub fn from_notes(notes: Vec<Note>) -> Self {
        let mut ids = IdAllocator::new();
        for note in &notes {
            ids.observe(note.id.0);
        }
        Self { notes, ids }
    }

    /// Append a note. Both title and content must be non-empty.
    pub fn add(&mut self, title: impl Into<String>, content: impl Into<String>) -> Result<NoteId> {
        let title = title.into();
        let content = content.into();
        if title.is_empty() || content.is_empty() {
            return Err(Error::EmptyNote);
        }
        let id = NoteId(self.ids.next());
        self.notes.push(Note {
            id,
            title,
            content,
            timestamp: Utc::now(),
        });
        Ok(id)
    }

    /// Replace a note's title and content, refreshing its timestamp.
    pub fn update(
        &mut self,
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<()> {
        let note = self
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(Error::NoteNotFound(id))?;
        note.title = title.into();
        note.content = content.into();
        note.timestamp = Utc::now();
        Ok(())
    }

    pub fn delete(&mut self, id: NoteId) -> Result<()> {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        if self.notes.len() == before {
            return Err(Error::NoteNotFound(id));
        }
        Ok(())
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
