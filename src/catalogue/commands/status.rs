//! # Status Commands
//!
//! Add, update, remove and list the statuses of a single item:
//! - [`add`]: attaches a new TODO status
//! - [`update`]: replaces contents and completion of an existing status
//! - [`delete`]: removes a status without touching the item
//! - [`list`]: returns the statuses of an item, for picking one
//!
//! Mutations are refused on archived items: an archived item keeps the
//! statuses it had when it was archived, all of them complete.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CatalogueError, Result};
use crate::model::{ItemId, StatusId};
use crate::store::Catalogue;
use log::info;

use super::helpers::{find_active_item, find_item};

pub fn add(catalogue: &mut Catalogue, item_id: ItemId, contents: String) -> Result<CmdResult> {
    find_active_item(catalogue, item_id)?;
    let status = catalogue.try_add_status(item_id, contents, false)?;
    info!("event=status_add item={} status={}", item_id, status.id);

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Add Successful! Status {} added to item {}",
            status.id, item_id
        )))
        .with_listed_statuses(vec![status]))
}

pub fn update(
    catalogue: &mut Catalogue,
    item_id: ItemId,
    status_id: StatusId,
    contents: String,
    complete: bool,
) -> Result<CmdResult> {
    find_active_item(catalogue, item_id)?;
    catalogue.try_update_status(item_id, status_id, contents, complete)?;
    info!(
        "event=status_update item={} status={} complete={}",
        item_id, status_id, complete
    );

    let status = catalogue
        .find_status(item_id, status_id)
        .cloned()
        .ok_or(CatalogueError::StatusNotFound {
            item: item_id,
            status: status_id,
        })?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success("Status updated"))
        .with_listed_statuses(vec![status]))
}

pub fn delete(catalogue: &mut Catalogue, item_id: ItemId, status_id: StatusId) -> Result<CmdResult> {
    find_active_item(catalogue, item_id)?;
    catalogue.try_delete_status(item_id, status_id)?;
    info!("event=status_delete item={} status={}", item_id, status_id);

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Delete Successful! Status {} removed from item {}",
        status_id, item_id
    ))))
}

pub fn list(catalogue: &Catalogue, item_id: ItemId) -> Result<CmdResult> {
    let item = find_item(catalogue, item_id)?;
    let statuses: Vec<_> = item.statuses.list().cloned().collect();
    let mut result = CmdResult::default();
    if statuses.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Item {} has no statuses",
            item_id
        )));
    }
    Ok(result.with_listed_statuses(statuses))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemDetails;

    fn catalogue_with_item() -> Catalogue {
        let mut catalogue = Catalogue::new();
        catalogue.add(ItemDetails::new("Gadget", 200, "Elec", "19.99"));
        catalogue
    }

    #[test]
    fn add_creates_todo_status() {
        let mut catalogue = catalogue_with_item();
        let result = add(&mut catalogue, 0, "wiring".into()).unwrap();
        let status = &result.listed_statuses[0];
        assert_eq!(status.id, 0);
        assert!(!status.complete);
        assert_eq!(catalogue.find_by_id(0).unwrap().statuses.count(), 1);
    }

    #[test]
    fn update_sets_contents_and_completion() {
        let mut catalogue = catalogue_with_item();
        add(&mut catalogue, 0, "wiring".into()).unwrap();

        let result = update(&mut catalogue, 0, 0, "wired".into(), true).unwrap();
        assert_eq!(result.listed_statuses[0].contents, "wired");
        assert!(catalogue.find_status(0, 0).unwrap().complete);
    }

    #[test]
    fn delete_removes_only_the_status() {
        let mut catalogue = catalogue_with_item();
        add(&mut catalogue, 0, "a".into()).unwrap();
        add(&mut catalogue, 0, "b".into()).unwrap();

        delete(&mut catalogue, 0, 0).unwrap();
        let remaining = list(&catalogue, 0).unwrap().listed_statuses;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, 1);
        assert_eq!(catalogue.count(), 1);
    }

    #[test]
    fn missing_status_is_reported() {
        let mut catalogue = catalogue_with_item();
        let err = update(&mut catalogue, 0, 5, "x".into(), false).unwrap_err();
        assert!(matches!(
            err,
            CatalogueError::StatusNotFound { item: 0, status: 5 }
        ));
        assert!(delete(&mut catalogue, 0, 5).unwrap_err().is_not_found());
    }

    #[test]
    fn archived_items_reject_status_changes() {
        let mut catalogue = catalogue_with_item();
        add(&mut catalogue, 0, "done".into()).unwrap();
        update(&mut catalogue, 0, 0, "done".into(), true).unwrap();
        assert!(catalogue.archive(0));

        assert!(matches!(
            add(&mut catalogue, 0, "late".into()),
            Err(CatalogueError::ItemArchived(0))
        ));
        assert!(matches!(
            update(&mut catalogue, 0, 0, "undo".into(), false),
            Err(CatalogueError::ItemArchived(0))
        ));
        assert!(matches!(
            delete(&mut catalogue, 0, 0),
            Err(CatalogueError::ItemArchived(0))
        ));
        assert_eq!(list(&catalogue, 0).unwrap().listed_statuses.len(), 1);
    }

    #[test]
    fn list_reports_empty_item() {
        let catalogue = catalogue_with_item();
        let result = list(&catalogue, 0).unwrap();
        assert!(result.listed_statuses.is_empty());
        assert_eq!(result.messages[0].content, "Item 0 has no statuses");
    }
}
