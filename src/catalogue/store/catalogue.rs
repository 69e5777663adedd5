use crate::error::{CatalogueError, Result};
use crate::model::{Item, ItemDetails, ItemId, Status, StatusId};

/// Which slice of the catalogue a listing covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListFilter {
    #[default]
    All,
    Active,
    Archived,
}

impl ListFilter {
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            ListFilter::All => true,
            ListFilter::Active => !item.archived,
            ListFilter::Archived => item.archived,
        }
    }

    /// Message shown in place of a listing that came back empty.
    pub fn empty_message(&self) -> &'static str {
        match self {
            ListFilter::All => "No items stored",
            ListFilter::Active => "No active items stored",
            ListFilter::Archived => "No archived items stored",
        }
    }
}

/// The in-memory item catalogue.
///
/// Items keep their insertion order. Ids come from a counter starting at 0 that
/// is never rewound, so an id is never handed out twice in the lifetime of a
/// catalogue. Lookups only hand out shared borrows; every change goes through
/// one of the mutation methods below.
///
/// Each mutation comes in two flavours: a `try_*` method that names the failure,
/// and a plain method that collapses it to `bool`.
#[derive(Debug, Default)]
pub struct Catalogue {
    items: Vec<Item>,
    next_id: ItemId,
}

impl Catalogue {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> ItemId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    fn item_mut(&mut self, id: ItemId) -> Result<&mut Item> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(CatalogueError::ItemNotFound(id))
    }

    // --- Items ---

    pub fn add(&mut self, details: ItemDetails) -> ItemId {
        let id = self.next_id();
        self.items.push(Item::new(id, details));
        id
    }

    pub fn find_by_id(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn try_update(&mut self, id: ItemId, details: ItemDetails) -> Result<()> {
        self.item_mut(id)?.apply(details);
        Ok(())
    }

    pub fn update(&mut self, id: ItemId, details: ItemDetails) -> bool {
        self.try_update(id, details).is_ok()
    }

    /// Removes the item together with its statuses.
    pub fn try_delete(&mut self, id: ItemId) -> Result<Item> {
        let index = self.position(id).ok_or(CatalogueError::ItemNotFound(id))?;
        Ok(self.items.remove(index))
    }

    pub fn delete(&mut self, id: ItemId) -> bool {
        self.try_delete(id).is_ok()
    }

    pub fn try_archive(&mut self, id: ItemId) -> Result<()> {
        let item = self.item_mut(id)?;
        if item.archived {
            return Err(CatalogueError::AlreadyArchived(id));
        }
        let incomplete = item.statuses.incomplete_count();
        if incomplete > 0 {
            return Err(CatalogueError::ArchiveBlocked { id, incomplete });
        }
        item.archived = true;
        Ok(())
    }

    pub fn archive(&mut self, id: ItemId) -> bool {
        self.try_archive(id).is_ok()
    }

    // --- Counts and listings ---

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn active_count(&self) -> usize {
        self.active_items().count()
    }

    pub fn archived_count(&self) -> usize {
        self.archived_items().count()
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn active_items(&self) -> impl Iterator<Item = &Item> {
        self.items_in(ListFilter::Active)
    }

    pub fn archived_items(&self) -> impl Iterator<Item = &Item> {
        self.items_in(ListFilter::Archived)
    }

    pub fn items_in(&self, filter: ListFilter) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(move |item| filter.matches(item))
    }

    /// Renders the filtered items one per entry, or the filter's empty message.
    pub fn list(&self, filter: ListFilter) -> String {
        let rendered: Vec<String> = self.items_in(filter).map(|item| item.to_string()).collect();
        if rendered.is_empty() {
            filter.empty_message().to_string()
        } else {
            rendered.join("\n")
        }
    }

    pub fn list_all(&self) -> String {
        self.list(ListFilter::All)
    }

    pub fn list_active(&self) -> String {
        self.list(ListFilter::Active)
    }

    pub fn list_archived(&self) -> String {
        self.list(ListFilter::Archived)
    }

    // --- Search ---

    pub fn search_by_name(&self, term: &str) -> Vec<&Item> {
        let term_lower = term.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.name.to_lowercase().contains(&term_lower))
            .collect()
    }

    pub fn search_by_status_contents(&self, term: &str) -> Vec<(&Item, &Status)> {
        self.items
            .iter()
            .flat_map(|item| {
                item.statuses
                    .search(term)
                    .into_iter()
                    .map(move |status| (item, status))
            })
            .collect()
    }

    // --- Statuses ---

    pub fn try_add_status(
        &mut self,
        item_id: ItemId,
        contents: impl Into<String>,
        complete: bool,
    ) -> Result<Status> {
        Ok(self.item_mut(item_id)?.statuses.add_status(contents, complete))
    }

    pub fn add_status(
        &mut self,
        item_id: ItemId,
        contents: impl Into<String>,
        complete: bool,
    ) -> Option<Status> {
        self.try_add_status(item_id, contents, complete).ok()
    }

    pub fn find_status(&self, item_id: ItemId, status_id: StatusId) -> Option<&Status> {
        self.find_by_id(item_id)?.statuses.find_by_id(status_id)
    }

    pub fn try_update_status(
        &mut self,
        item_id: ItemId,
        status_id: StatusId,
        contents: impl Into<String>,
        complete: bool,
    ) -> Result<()> {
        let item = self.item_mut(item_id)?;
        if item.statuses.update(status_id, contents, complete) {
            Ok(())
        } else {
            Err(CatalogueError::StatusNotFound {
                item: item_id,
                status: status_id,
            })
        }
    }

    pub fn update_status(
        &mut self,
        item_id: ItemId,
        status_id: StatusId,
        contents: impl Into<String>,
        complete: bool,
    ) -> bool {
        self.try_update_status(item_id, status_id, contents, complete)
            .is_ok()
    }

    pub fn try_delete_status(&mut self, item_id: ItemId, status_id: StatusId) -> Result<()> {
        let item = self.item_mut(item_id)?;
        if item.statuses.delete(status_id) {
            Ok(())
        } else {
            Err(CatalogueError::StatusNotFound {
                item: item_id,
                status: status_id,
            })
        }
    }

    pub fn delete_status(&mut self, item_id: ItemId, status_id: StatusId) -> bool {
        self.try_delete_status(item_id, status_id).is_ok()
    }
}
