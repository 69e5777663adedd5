use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ItemDetails;
use crate::store::Catalogue;
use log::info;

use super::helpers::find_item;

pub fn run(catalogue: &mut Catalogue, details: ItemDetails) -> Result<CmdResult> {
    let id = catalogue.add(details);
    info!("event=item_add id={}", id);

    let item = find_item(catalogue, id)?.clone();
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Added Successfully ({}): {}",
            id, item.name
        )))
        .with_affected_items(vec![item]))
}
