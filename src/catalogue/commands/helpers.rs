use crate::error::{CatalogueError, Result};
use crate::model::{Item, ItemId};
use crate::store::Catalogue;

pub fn find_item(catalogue: &Catalogue, id: ItemId) -> Result<&Item> {
    catalogue
        .find_by_id(id)
        .ok_or(CatalogueError::ItemNotFound(id))
}

/// Status work is only offered on items that have not been archived.
pub fn find_active_item(catalogue: &Catalogue, id: ItemId) -> Result<&Item> {
    let item = find_item(catalogue, id)?;
    if item.archived {
        return Err(CatalogueError::ItemArchived(id));
    }
    Ok(item)
}
