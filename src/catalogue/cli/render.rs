//! # Rendering
//!
//! Turns `CmdResult`s into terminal text. Layout (truncation to the configured
//! line width) is done on plain strings first; styling is applied last so
//! widths are never measured over escape codes.

use super::styles::{
    BANNER, ITEM_ACTIVE, ITEM_ARCHIVED, MATCH_ITEM, STATUS_COMPLETE, STATUS_TODO,
};
use catalogue::api::{CmdMessage, CmdResult, MessageLevel, StatusMatch};
use catalogue::model::{Item, Status};
use colored::Colorize;
use std::io::{self, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const MENU: &str = "
 -----------------------------------------------------
 |                  Cataloguing App                  |
 -----------------------------------------------------
 | Item Catalogue                                    |
 |   1) Add an item                                  |
 |   2) List items                                   |
 |   3) Update an item                               |
 |   4) Delete an item                               |
 |   5) Archive an item                              |
 |   6) Add status to an item                        |
 |   7) Update the status of an item                 |
 |   8) Remove a status applied to an item           |
 |   9) Search for an item                           |
 |   10) Search for a status                         |
 |   11) Give Help navigating the catalogue          |
 -----------------------------------------------------
 |   0) Exit the Catalogue                           |
 -----------------------------------------------------
 ==>> ";

pub const LIST_MENU: &str = "
 --------------------------------
 |   1) View ALL items          |
 |   2) View ACTIVE items       |
 |   3) View ARCHIVED items     |
 --------------------------------
 ==>> ";

pub const HELP: &str = " -----------------------------------------------------
 |                      Help                         |
 -----------------------------------------------------
 |   Press the number key that matches the action    |
 |              you wish to perform                  |
 |   1) Add a new item to the catalogue              |
 |   2) List the items currently in the catalogue    |
 |   3) Update the details of an item                |
 |   4) Delete an item from the catalogue            |
 |   5) Archive an item. Only items whose statuses   |
 |      are all complete can be archived             |
 |   6) Add a status to an item, e.g. Available,     |
 |      Incoming, Expired                            |
 |   7) Change the contents or completion of a       |
 |      status already given to an item              |
 |   8) Remove a status applied to an item without   |
 |      deleting the item itself                     |
 |   9) Search for an item by name                   |
 |   10) Search every item's statuses by contents    |
 |   0) Leave the catalogue                          |
 -----------------------------------------------------";

pub fn write_banner<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out, "{}", BANNER.apply_to(text))
}

pub fn write_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
        }
    }
    Ok(())
}

pub fn write_error<W: Write>(out: &mut W, label: &str, err: &dyn std::fmt::Display) -> io::Result<()> {
    writeln!(out, "{}", format!("{}: {}", label, err).red())
}

/// The single-line form of an item, cut to `max_width` columns.
pub fn item_line(item: &Item, max_width: usize) -> String {
    truncate_to_width(&item.summary(), max_width)
}

pub fn status_line(status: &Status) -> String {
    format!("\t{}", status)
}

pub fn write_items<W: Write>(out: &mut W, items: &[Item], max_width: usize) -> io::Result<()> {
    for item in items {
        let style = if item.archived {
            &*ITEM_ARCHIVED
        } else {
            &*ITEM_ACTIVE
        };
        writeln!(out, "{}", style.apply_to(item_line(item, max_width)))?;
        for status in item.statuses.list() {
            write_status(out, status)?;
        }
    }
    Ok(())
}

pub fn write_statuses<W: Write>(out: &mut W, statuses: &[Status]) -> io::Result<()> {
    for status in statuses {
        write_status(out, status)?;
    }
    Ok(())
}

fn write_status<W: Write>(out: &mut W, status: &Status) -> io::Result<()> {
    let style = if status.complete {
        &*STATUS_COMPLETE
    } else {
        &*STATUS_TODO
    };
    writeln!(out, "{}", style.apply_to(status_line(status)))
}

pub fn match_header(hit: &StatusMatch, max_width: usize) -> String {
    truncate_to_width(&format!("{}: {}", hit.item_id, hit.item_name), max_width)
}

pub fn write_status_matches<W: Write>(
    out: &mut W,
    matches: &[StatusMatch],
    max_width: usize,
) -> io::Result<()> {
    let mut last_item = None;
    for hit in matches {
        if last_item != Some(hit.item_id) {
            writeln!(out, "{}", MATCH_ITEM.apply_to(match_header(hit, max_width)))?;
            last_item = Some(hit.item_id);
        }
        write_status(out, &hit.status)?;
    }
    Ok(())
}

pub fn write_result<W: Write>(out: &mut W, result: &CmdResult, max_width: usize) -> io::Result<()> {
    write_items(out, &result.listed_items, max_width)?;
    write_statuses(out, &result.listed_statuses)?;
    write_status_matches(out, &result.status_matches, max_width)?;
    write_messages(out, &result.messages)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
