use crate::commands::{CmdMessage, CmdResult, StatusMatch};
use crate::error::Result;
use crate::store::Catalogue;
use log::debug;

pub fn by_name(catalogue: &Catalogue, term: &str) -> Result<CmdResult> {
    let listed: Vec<_> = catalogue
        .search_by_name(term)
        .into_iter()
        .cloned()
        .collect();
    debug!("event=search_name hits={}", listed.len());

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No items found matching: {}",
            term
        )));
    }
    Ok(result.with_listed_items(listed))
}

pub fn by_status(catalogue: &Catalogue, term: &str) -> Result<CmdResult> {
    let matches: Vec<_> = catalogue
        .search_by_status_contents(term)
        .into_iter()
        .map(|(item, status)| StatusMatch {
            item_id: item.id,
            item_name: item.name.clone(),
            status: status.clone(),
        })
        .collect();
    debug!("event=search_status hits={}", matches.len());

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info("Status not found"));
    }
    Ok(result.with_status_matches(matches))
}
