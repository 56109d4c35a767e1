use crate::error::Result;
use crate::ids::{IdeaId, NodeId, NoteId, TemplateId};
use crate::ideas::IdeaBank;
use crate::notes::Notebook;
use crate::persist;
use crate::settings::Settings;
use crate::storage::KeyValueStore;
use crate::template::TemplateLibrary;
use crate::tree::ForestStore;

/// Everything the app holds in memory, wired to one injected key-value store.
///
/// Each mutating method delegates to the owning module and then persists that
/// concern's key. Persistence is fire-and-forget (see [`crate::persist`]);
/// a failed operation persists nothing because the in-memory state did not
/// change.
pub struct Workspace<S: KeyValueStore> {
    store: S,
    forest: ForestStore,
    templates: TemplateLibrary,
    ideas: IdeaBank,
    notes: Notebook,
    settings: Settings,
}

impl<S: KeyValueStore> Workspace<S> {
    /// Hydrate every concern from `store`, falling back per key where data is
    /// missing or unreadable.
    pub fn load(store: S) -> Self {
        let forest = persist::load_forest(&store);
        let templates = persist::load_templates(&store);
        let ideas = persist::load_ideas(&store);
        let notes = persist::load_notes(&store);
        let settings = persist::load_settings(&store);
        Self {
            store,
            forest,
            templates,
            ideas,
            notes,
            settings,
        }
    }

    pub fn forest(&self) -> &ForestStore {
        &self.forest
    }

    pub fn templates(&self) -> &TemplateLibrary {
        &self.templates
    }

    pub fn ideas(&self) -> &IdeaBank {
        &self.ideas
    }

    pub fn notes(&self) -> &Notebook {
        &self.notes
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Hand the underlying store back, e.g. to inspect it in tests.
    pub fn into_store(self) -> S {
        self.store
    }

    // --- mind map ---

    pub fn rename_node(&mut self, id: NodeId, new_text: impl Into<String>) -> Result<()> {
        self.forest.rename(id, new_text)?;
        persist::save_forest(&mut self.store, &self.forest);
        Ok(())
    }

    pub fn add_child(&mut self, parent_id: NodeId) -> Result<NodeId> {
        let id = self.forest.add_child(parent_id)?;
        persist::save_forest(&mut self.store, &self.forest);
        Ok(id)
    }

    pub fn delete_node(&mut self, id: NodeId) -> Result<usize> {
        let removed = self.forest.delete(id)?;
        persist::save_forest(&mut self.store, &self.forest);
        Ok(removed)
    }

    /// Replace the live forest with a template. Returns the template name so
    /// the caller can surface "Applied template: {name}".
    pub fn apply_template(&mut self, id: TemplateId) -> Result<String> {
        let name = self.templates.apply(id, &mut self.forest)?.to_string();
        persist::save_forest(&mut self.store, &self.forest);
        Ok(name)
    }

    /// Snapshot the live forest as a new named template.
    pub fn save_template(&mut self, name: impl Into<String>) -> TemplateId {
        let id = self.templates.save_current(name, &self.forest);
        persist::save_templates(&mut self.store, &self.templates);
        id
    }

    // --- ideas ---

    pub fn save_idea(&mut self, text: impl Into<String>, category: impl Into<String>) -> IdeaId {
        let id = self.ideas.save(text, category);
        persist::save_ideas(&mut self.store, &self.ideas);
        id
    }

    pub fn edit_idea(&mut self, id: IdeaId, new_text: impl Into<String>) -> Result<()> {
        self.ideas.edit(id, new_text)?;
        persist::save_ideas(&mut self.store, &self.ideas);
        Ok(())
    }

    pub fn delete_idea(&mut self, id: IdeaId) -> Result<()> {
        self.ideas.delete(id)?;
        persist::save_ideas(&mut self.store, &self.ideas);
        Ok(())
    }

    pub fn add_category(&mut self, name: impl Into<String>) -> bool {
        let added = self.ideas.add_category(name);
        if added {
            persist::save_ideas(&mut self.store, &self.ideas);
        }
        added
    }

    // --- notes ---

    pub fn add_note(&mut self, title: impl Into<String>, content: impl Into<String>) -> Result<NoteId> {
        let id = self.notes.add(title, content)?;
        persist::save_notes(&mut self.store, &self.notes);
        Ok(id)
    }

    pub fn update_note(
        &mut self,
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<()> {
        self.notes.update(id, title, content)?;
        persist::save_notes(&mut self.store, &self.notes);
        Ok(())
    }

    pub fn delete_note(&mut self, id: NoteId) -> Result<()> {
        self.notes.delete(id)?;
        persist::save_notes(&mut self.store, &self.notes);
        Ok(())
    }

    // --- settings ---

    pub fn update_settings(&mut self, settings: Settings) {
        self.settings = settings;
        persist::save_settings(&mut self.store, &self.settings);
    }

    /// Restore defaults and drop the persisted entry.
    pub fn reset_settings(&mut self) {
        self.settings = Settings::default();
        persist::clear_settings(&mut self.store);
    }
}
