//! # API Facade
//!
//! A thin layer over the command modules and the single entry point for every
//! catalogue operation, whatever the UI.
//!
//! The facade owns the [`Catalogue`]. It is built explicitly by its caller and
//! lives exactly as long as the session holding it; there is no process-wide
//! instance. All mutating methods take `&mut self`, which serializes access.
//!
//! It does not:
//! - hold business rules (those live in `commands/*.rs` and `store/`)
//! - print, prompt or format for a terminal
//!
//! API tests check dispatch and return shapes, not command logic.

use crate::commands;
use crate::error::Result;
use crate::model::{ItemDetails, ItemId, StatusId};
use crate::store::Catalogue;

pub struct CatalogueApi {
    catalogue: Catalogue,
}

impl Default for CatalogueApi {
    fn default() -> Self {
        Self::new(Catalogue::new())
    }
}

impl CatalogueApi {
    pub fn new(catalogue: Catalogue) -> Self {
        Self { catalogue }
    }

    pub fn add_item(&mut self, details: ItemDetails) -> Result<CmdResult> {
        commands::add::run(&mut self.catalogue, details)
    }

    pub fn list_items(&self, filter: ListFilter) -> Result<CmdResult> {
        commands::list::run(&self.catalogue, filter)
    }

    pub fn update_item(&mut self, id: ItemId, details: ItemDetails) -> Result<CmdResult> {
        commands::update::run(&mut self.catalogue, id, details)
    }

    pub fn delete_item(&mut self, id: ItemId) -> Result<CmdResult> {
        commands::delete::run(&mut self.catalogue, id)
    }

    pub fn archive_item(&mut self, id: ItemId) -> Result<CmdResult> {
        commands::archive::run(&mut self.catalogue, id)
    }

    pub fn add_status(&mut self, item_id: ItemId, contents: String) -> Result<CmdResult> {
        commands::status::add(&mut self.catalogue, item_id, contents)
    }

    pub fn update_status(
        &mut self,
        item_id: ItemId,
        status_id: StatusId,
        contents: String,
        complete: bool,
    ) -> Result<CmdResult> {
        commands::status::update(&mut self.catalogue, item_id, status_id, contents, complete)
    }

    pub fn delete_status(&mut self, item_id: ItemId, status_id: StatusId) -> Result<CmdResult> {
        commands::status::delete(&mut self.catalogue, item_id, status_id)
    }

    pub fn list_statuses(&self, item_id: ItemId) -> Result<CmdResult> {
        commands::status::list(&self.catalogue, item_id)
    }

    pub fn search_items(&self, term: &str) -> Result<CmdResult> {
        commands::search::by_name(&self.catalogue, term)
    }

    pub fn search_statuses(&self, term: &str) -> Result<CmdResult> {
        commands::search::by_status(&self.catalogue, term)
    }

    pub fn item_count(&self) -> usize {
        self.catalogue.count()
    }

    pub fn active_count(&self) -> usize {
        self.catalogue.active_count()
    }

    pub fn archived_count(&self) -> usize {
        self.catalogue.archived_count()
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, StatusMatch};
pub use crate::store::ListFilter;
