//! Load/save policy for every persisted concern.
//!
//! Loading never fails: a missing key, an unreadable backend, or malformed
//! JSON all fall back to that concern's default (with a warning), because a
//! broken storage entry must not keep the app from starting. Saving is
//! fire-and-forget: a write failure is logged and only costs durability of
//! the latest mutation, never in-memory state.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::ideas::{Idea, IdeaBank};
use crate::node::Node;
use crate::notes::{Note, Notebook};
use crate::settings::Settings;
use crate::storage::{keys, KeyValueStore};
use crate::template::{Template, TemplateLibrary};
use crate::tree::ForestStore;

fn load_json<S, T>(store: &S, key: &str) -> Option<T>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    let raw = match store.get(key) {
        Ok(raw) => raw?,
        Err(err) => {
            warn!(key, %err, "storage read failed, using defaults");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(key, %err, "malformed persisted data, using defaults");
            None
        }
    }
}

fn save_json<S, T>(store: &mut S, key: &str, value: &T)
where
    S: KeyValueStore + ?Sized,
    T: Serialize,
{
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(err) => {
            warn!(key, %err, "failed to encode value, skipping save");
            return;
        }
    };
    if let Err(err) = store.set(key, &raw) {
        warn!(key, %err, "storage write failed, latest change not durable");
    }
}

pub fn load_forest<S: KeyValueStore + ?Sized>(store: &S) -> ForestStore {
    let Some(nodes) = load_json::<S, Vec<Node>>(store, keys::FOREST) else {
        return ForestStore::default();
    };
    match ForestStore::from_nodes(nodes) {
        Ok(forest) => forest,
        Err(err) => {
            warn!(key = keys::FOREST, %err, "rejected persisted forest, using defaults");
            ForestStore::default()
        }
    }
}

pub fn save_forest<S: KeyValueStore + ?Sized>(store: &mut S, forest: &ForestStore) {
    save_json(store, keys::FOREST, &forest.export());
}

pub fn load_templates<S: KeyValueStore + ?Sized>(store: &S) -> TemplateLibrary {
    match load_json::<S, Vec<Template>>(store, keys::TEMPLATES) {
        Some(templates) => TemplateLibrary::from_templates(templates),
        None => TemplateLibrary::default(),
    }
}

pub fn save_templates<S: KeyValueStore + ?Sized>(store: &mut S, library: &TemplateLibrary) {
    save_json(store, keys::TEMPLATES, &library.templates());
}

pub fn load_ideas<S: KeyValueStore + ?Sized>(store: &S) -> IdeaBank {
    let defaults = IdeaBank::default();
    let ideas = load_json::<S, Vec<Idea>>(store, keys::IDEAS).unwrap_or_default();
    let categories = load_json::<S, Vec<String>>(store, keys::CATEGORIES)
        .unwrap_or_else(|| defaults.categories().to_vec());
    IdeaBank::from_parts(ideas, categories)
}

pub fn save_ideas<S: KeyValueStore + ?Sized>(store: &mut S, bank: &IdeaBank) {
    save_json(store, keys::IDEAS, &bank.ideas());
    save_json(store, keys::CATEGORIES, &bank.categories());
}

pub fn load_notes<S: KeyValueStore + ?Sized>(store: &S) -> Notebook {
    match load_json::<S, Vec<Note>>(store, keys::NOTES) {
        Some(notes) => Notebook::from_notes(notes),
        None => Notebook::default(),
    }
}

pub fn save_notes<S: KeyValueStore + ?Sized>(store: &mut S, notebook: &Notebook) {
    save_json(store, keys::NOTES, &notebook.notes());
}

pub fn load_settings<S: KeyValueStore + ?Sized>(store: &S) -> Settings {
    load_json::<S, Settings>(store, keys::SETTINGS).unwrap_or_default()
}

pub fn save_settings<S: KeyValueStore + ?Sized>(store: &mut S, settings: &Settings) {
    save_json(store, keys::SETTINGS, settings);
}

/// Drop the persisted settings entry entirely (used by reset-to-default).
pub fn clear_settings<S: KeyValueStore + ?Sized>(store: &mut S) {
    if let Err(err) = store.remove(keys::SETTINGS) {
        warn!(key = keys::SETTINGS, %err, "failed to remove persisted settings");
    }
}
