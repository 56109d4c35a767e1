use thiserror::Error;

use crate::ids::{IdeaId, NodeId, NoteId, TemplateId};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("storage error: {0}")]
    Storage(String),
    #[error("node not found: {0:?}")]
    NodeNotFound(NodeId),
    #[error("duplicate node id: {0:?}")]
    DuplicateNodeId(NodeId),
    #[error("template not found: {0:?}")]
    TemplateNotFound(TemplateId),
    #[error("idea not found: {0:?}")]
    IdeaNotFound(IdeaId),
    #[error("note not found: {0:?}")]
    NoteNotFound(NoteId),
    #[error("a note requires both a title and content")]
    EmptyNote,
    #[error("inconsistent forest: {0}")]
    InconsistentForest(String),
}
