use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ItemId;
use crate::store::Catalogue;
use log::{debug, info};

use super::helpers::find_item;

pub fn run(catalogue: &mut Catalogue, id: ItemId) -> Result<CmdResult> {
    if let Err(err) = catalogue.try_archive(id) {
        debug!("event=item_archive id={} status=refused reason=\"{}\"", id, err);
        return Err(err);
    }
    info!("event=item_archive id={} status=ok", id);

    let item = find_item(catalogue, id)?.clone();
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Archive Successful ({}): {}",
            id, item.name
        )))
        .with_affected_items(vec![item]))
}
