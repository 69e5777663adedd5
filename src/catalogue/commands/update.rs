use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{ItemDetails, ItemId};
use crate::store::Catalogue;
use log::info;

use super::helpers::find_item;

pub fn run(catalogue: &mut Catalogue, id: ItemId, details: ItemDetails) -> Result<CmdResult> {
    catalogue.try_update(id, details)?;
    info!("event=item_update id={}", id);

    let item = find_item(catalogue, id)?.clone();
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Update Successful ({}): {}",
            id, item.name
        )))
        .with_affected_items(vec![item]))
}
