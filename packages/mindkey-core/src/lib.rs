#![forbid(unsafe_code)]
//! Core MindKey library: the mind-map forest, template library, idea bank,
//! notebook, and settings, persisted through a pluggable key-value store.
//! This crate stays independent of concrete storage backends so it can sit
//! behind a desktop shell, a TUI, or anything else that can hold strings by
//! key (see the `KeyValueStore` trait).

pub mod error;
pub mod ideas;
pub mod ids;
pub mod node;
pub mod notes;
pub mod persist;
pub mod settings;
pub mod storage;
pub mod template;
pub mod tree;
pub mod workspace;

pub use error::{Error, Result};
pub use ideas::{random_prompt, Idea, IdeaBank, PROMPTS};
pub use ids::{IdAllocator, IdeaId, NodeId, NoteId, TemplateId};
pub use node::{forest_ids, forest_len, Node, DEFAULT_ROOT_TEXT, PLACEHOLDER_TEXT};
pub use notes::{Note, Notebook};
pub use settings::{FontSize, Settings};
pub use storage::{keys, KeyValueStore, MemoryStore};
pub use template::{Template, TemplateLibrary};
pub use tree::ForestStore;
pub use workspace::Workspace;
