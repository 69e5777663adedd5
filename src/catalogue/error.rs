use crate::model::{ItemId, StatusId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogueError {
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    #[error("Status {status} not found on item {item}")]
    StatusNotFound { item: ItemId, status: StatusId },

    #[error("Item {id} has {incomplete} incomplete status(es) and cannot be archived")]
    ArchiveBlocked { id: ItemId, incomplete: usize },

    #[error("Item {0} is already archived")]
    AlreadyArchived(ItemId),

    #[error("Item {0} is NOT active, it is archived")]
    ItemArchived(ItemId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(String),
}

impl CatalogueError {
    /// True for the "no such record" family of failures.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CatalogueError::ItemNotFound(_) | CatalogueError::StatusNotFound { .. }
        )
    }

    /// True when a lifecycle guard refused the operation.
    pub fn is_guard_violation(&self) -> bool {
        matches!(
            self,
            CatalogueError::ArchiveBlocked { .. }
                | CatalogueError::AlreadyArchived(_)
                | CatalogueError::ItemArchived(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CatalogueError>;
