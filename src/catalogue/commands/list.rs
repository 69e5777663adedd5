use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{Catalogue, ListFilter};

pub fn run(catalogue: &Catalogue, filter: ListFilter) -> Result<CmdResult> {
    let listed: Vec<_> = catalogue.items_in(filter).cloned().collect();
    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info(filter.empty_message()));
    }
    Ok(result.with_listed_items(listed))
}
