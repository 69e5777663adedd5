use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ItemId;
use crate::store::Catalogue;
use log::info;

pub fn run(catalogue: &mut Catalogue, id: ItemId) -> Result<CmdResult> {
    let removed = catalogue.try_delete(id)?;
    info!(
        "event=item_delete id={} statuses_dropped={}",
        id,
        removed.statuses.count()
    );

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Delete Successful ({}): {}",
            id, removed.name
        )))
        .with_affected_items(vec![removed]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogueError;
    use crate::model::ItemDetails;

    #[test]
    fn removes_item() {
        let mut catalogue = Catalogue::new();
        catalogue.add(ItemDetails::new("A", 1, "c", "p"));
        catalogue.add(ItemDetails::new("B", 2, "c", "p"));

        let result = run(&mut catalogue, 0).unwrap();
        assert_eq!(result.affected_items[0].name, "A");
        assert_eq!(catalogue.count(), 1);
        assert!(catalogue.find_by_id(1).is_some());
    }

    #[test]
    fn missing_item_leaves_count_alone() {
        let mut catalogue = Catalogue::new();
        catalogue.add(ItemDetails::new("A", 1, "c", "p"));
        let err = run(&mut catalogue, 4).unwrap_err();
        assert!(err.is_not_found());
        assert!(matches!(err, CatalogueError::ItemNotFound(4)));
        assert_eq!(catalogue.count(), 1);
    }
}
