//! # Shell
//!
//! `run()` is the binary's entry point: it parses arguments, resolves the home
//! directory, loads configuration, starts logging and then either handles the
//! `config` subcommand or hands control to an interactive [`Session`].
//!
//! A `Session` is generic over its input and output streams so menu flows can
//! be driven from tests with in-memory buffers. Catalogue failures (unknown
//! ids, refused archives) are printed and the menu continues; only I/O errors
//! end the session.

use super::input::Prompter;
use super::render::{
    write_banner, write_error, write_messages, write_result, write_statuses, HELP, LIST_MENU,
    MENU,
};
use super::setup::{Cli, Commands};
use catalogue::api::{CatalogueApi, CmdResult, ListFilter};
use catalogue::config::{resolve_home, CatalogueConfig};
use catalogue::error::Result;
use catalogue::logging::{init_logging, log_dir_for};
use catalogue::model::{ItemDetails, ItemId, StatusId};
use clap::Parser;
use log::{debug, info};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;

/// Whether the menu loop should keep going after a handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Unwraps a prompt answer, leaving the handler when input has run out.
macro_rules! answer_or_exit {
    ($prompt:expr) => {
        match $prompt? {
            Some(value) => value,
            None => return Ok(Flow::Exit),
        }
    };
}

/// Unwraps a choice, going back to the menu when nothing valid was picked.
macro_rules! chosen_or_return {
    ($choice:expr) => {
        match $choice? {
            Choice::Picked(value) => value,
            Choice::Nothing => return Ok(Flow::Continue),
            Choice::EndOfInput => return Ok(Flow::Exit),
        }
    };
}

enum Choice<T> {
    Picked(T),
    Nothing,
    EndOfInput,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let home = resolve_home(cli.home.clone())?;
    let config = CatalogueConfig::load(&home)?;

    match cli.command {
        Some(Commands::Config { key, value }) => handle_config(&home, config, key, value),
        Some(Commands::Run) | None => {
            let level = if cli.verbose {
                "debug"
            } else {
                config.log_level.as_str()
            };
            init_logging(level, &log_dir_for(&home))?;
            configure_colors(config.color && !cli.no_color);

            let stdin = io::stdin();
            let prompter = Prompter::new(stdin.lock(), io::stdout(), io::stderr());
            let mut session = Session::new(CatalogueApi::default(), prompter, config.line_width);
            session.run()
        }
    }
}

fn configure_colors(enabled: bool) {
    let enabled = enabled && io::stdout().is_terminal();
    colored::control::set_override(enabled);
    console::set_colors_enabled(enabled);
}

fn handle_config(
    home: &Path,
    mut config: CatalogueConfig,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    match (key, value) {
        (None, _) => {
            for (key, value) in config.entries() {
                println!("{} = {}", key, value);
            }
        }
        (Some(key), None) => println!("{} = {}", key, config.get(&key)?),
        (Some(key), Some(value)) => {
            config.set(&key, &value)?;
            config.save(home)?;
            println!("{} = {}", key, config.get(&key)?);
        }
    }
    Ok(())
}

pub struct Session<R, W, E> {
    api: CatalogueApi,
    prompter: Prompter<R, W, E>,
    line_width: usize,
}

impl<R: BufRead, W: Write, E: Write> Session<R, W, E> {
    pub fn new(api: CatalogueApi, prompter: Prompter<R, W, E>, line_width: usize) -> Self {
        Self {
            api,
            prompter,
            line_width,
        }
    }

    fn out(&mut self) -> &mut W {
        self.prompter.output()
    }

    /// Runs the menu until the user picks 0 or input ends.
    pub fn run(&mut self) -> Result<()> {
        info!("event=session_start");
        loop {
            let Some(option) = self.prompter.read_number::<i64>(MENU)? else {
                break;
            };
            debug!("event=menu_option option={}", option);

            let flow = match option {
                1 => self.add_item()?,
                2 => self.list_items()?,
                3 => self.update_item()?,
                4 => self.delete_item()?,
                5 => self.archive_item()?,
                6 => self.add_status()?,
                7 => self.update_status()?,
                8 => self.delete_status()?,
                9 => self.search_items()?,
                10 => self.search_statuses()?,
                11 => self.give_help()?,
                0 => {
                    writeln!(self.out(), "Exiting")?;
                    Flow::Exit
                }
                _ => {
                    writeln!(
                        self.out(),
                        "Invalid option entered. Please enter a valid option between 0 and 11"
                    )?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }
        info!(
            "event=session_end items={} archived={}",
            self.api.item_count(),
            self.api.archived_count()
        );
        Ok(())
    }

    fn report(&mut self, outcome: Result<CmdResult>, failure: &str) -> Result<()> {
        let width = self.line_width;
        match outcome {
            Ok(result) => write_result(self.out(), &result, width)?,
            Err(err) => write_error(self.out(), failure, &err)?,
        }
        Ok(())
    }

    fn read_details(&mut self, name_prompt: &str) -> Result<Option<ItemDetails>> {
        let Some(name) = self.prompter.read_line(name_prompt)? else {
            return Ok(None);
        };
        let Some(code) = self
            .prompter
            .read_number::<i64>("Enter an identification number for the item: ")?
        else {
            return Ok(None);
        };
        let Some(category) = self.prompter.read_line("Enter a category for the item: ")? else {
            return Ok(None);
        };
        let Some(price) = self.prompter.read_line("Enter the item's price: ")? else {
            return Ok(None);
        };
        Ok(Some(ItemDetails::new(name, code, category, price)))
    }

    fn show_items(&mut self, filter: ListFilter) -> Result<()> {
        let outcome = self.api.list_items(filter);
        self.report(outcome, "Listing failed")
    }

    /// Prints the "nothing yet" hint and returns false when the catalogue is empty.
    fn require_items(&mut self) -> Result<bool> {
        if self.api.item_count() == 0 {
            writeln!(
                self.out(),
                "No items are available. Please add an item first"
            )?;
            return Ok(false);
        }
        Ok(true)
    }

    fn add_item(&mut self) -> Result<Flow> {
        let details = answer_or_exit!(self.read_details("Enter a title for the item: "));
        let outcome = self.api.add_item(details);
        self.report(outcome, "Add Failed")?;
        Ok(Flow::Continue)
    }

    fn list_items(&mut self) -> Result<Flow> {
        if !self.require_items()? {
            return Ok(Flow::Continue);
        }
        let option = answer_or_exit!(self.prompter.read_number::<i64>(LIST_MENU));
        match option {
            1 => self.show_items(ListFilter::All)?,
            2 => self.show_items(ListFilter::Active)?,
            3 => self.show_items(ListFilter::Archived)?,
            _ => writeln!(
                self.out(),
                "Invalid option entered. Please enter a valid option between 1 and 3"
            )?,
        }
        Ok(Flow::Continue)
    }

    fn update_item(&mut self) -> Result<Flow> {
        if !self.require_items()? {
            return Ok(Flow::Continue);
        }
        self.show_items(ListFilter::All)?;
        let id = answer_or_exit!(self
            .prompter
            .read_number::<ItemId>("Enter the id of the item you wish to update: "));
        if self.api.catalogue().find_by_id(id).is_none() {
            writeln!(self.out(), "There is no item with id {}", id)?;
            return Ok(Flow::Continue);
        }
        let details = answer_or_exit!(self.read_details("Enter the item's name: "));
        let outcome = self.api.update_item(id, details);
        self.report(outcome, "Update Failed")?;
        Ok(Flow::Continue)
    }

    fn delete_item(&mut self) -> Result<Flow> {
        if !self.require_items()? {
            return Ok(Flow::Continue);
        }
        self.show_items(ListFilter::All)?;
        let id = answer_or_exit!(self
            .prompter
            .read_number::<ItemId>("Enter the id of the item to delete: "));
        let outcome = self.api.delete_item(id);
        self.report(outcome, "Delete NOT Successful")?;
        Ok(Flow::Continue)
    }

    fn archive_item(&mut self) -> Result<Flow> {
        self.show_items(ListFilter::Active)?;
        if self.api.active_count() == 0 {
            return Ok(Flow::Continue);
        }
        let id = answer_or_exit!(self
            .prompter
            .read_number::<ItemId>("Enter the id of the item to archive: "));
        let outcome = self.api.archive_item(id);
        self.report(outcome, "Archive NOT Successful")?;
        Ok(Flow::Continue)
    }

    /// Shows active items and asks for one of them.
    fn choose_active_item(&mut self) -> Result<Choice<ItemId>> {
        self.show_items(ListFilter::Active)?;
        if self.api.active_count() == 0 {
            return Ok(Choice::Nothing);
        }
        let Some(id) = self
            .prompter
            .read_number::<ItemId>("\nEnter the id of the item: ")?
        else {
            return Ok(Choice::EndOfInput);
        };
        let archived = self.api.catalogue().find_by_id(id).map(|item| item.archived);
        match archived {
            None => {
                writeln!(self.out(), "Item id is not valid")?;
                Ok(Choice::Nothing)
            }
            Some(true) => {
                writeln!(self.out(), "Item is NOT Active, it is Archived")?;
                Ok(Choice::Nothing)
            }
            Some(false) => Ok(Choice::Picked(id)),
        }
    }

    /// Shows the statuses of an item and asks for one of them.
    fn choose_status(&mut self, item_id: ItemId) -> Result<Choice<StatusId>> {
        let listing = self.api.list_statuses(item_id)?;
        if listing.listed_statuses.is_empty() {
            write_messages(self.out(), &listing.messages)?;
            return Ok(Choice::Nothing);
        }
        write_statuses(self.out(), &listing.listed_statuses)?;

        let Some(status_id) = self
            .prompter
            .read_number::<StatusId>("\nEnter the id of the status: ")?
        else {
            return Ok(Choice::EndOfInput);
        };
        if self.api.catalogue().find_status(item_id, status_id).is_none() {
            writeln!(self.out(), "Invalid Status")?;
            return Ok(Choice::Nothing);
        }
        Ok(Choice::Picked(status_id))
    }

    fn add_status(&mut self) -> Result<Flow> {
        let item_id = chosen_or_return!(self.choose_active_item());
        let contents = answer_or_exit!(self.prompter.read_line("\t Status Contents: "));
        let outcome = self.api.add_status(item_id, contents);
        self.report(outcome, "Add NOT Successful")?;
        Ok(Flow::Continue)
    }

    fn update_status(&mut self) -> Result<Flow> {
        let item_id = chosen_or_return!(self.choose_active_item());
        let status_id = chosen_or_return!(self.choose_status(item_id));
        let contents = answer_or_exit!(self.prompter.read_line("Enter new contents: "));
        let complete = answer_or_exit!(self
            .prompter
            .read_number::<i64>("Is the status complete? (1 = yes, 0 = no): "));
        let outcome = self
            .api
            .update_status(item_id, status_id, contents, complete == 1);
        self.report(outcome, "Status NOT updated")?;
        Ok(Flow::Continue)
    }

    fn delete_status(&mut self) -> Result<Flow> {
        let item_id = chosen_or_return!(self.choose_active_item());
        let status_id = chosen_or_return!(self.choose_status(item_id));
        let outcome = self.api.delete_status(item_id, status_id);
        self.report(outcome, "Delete NOT Successful")?;
        Ok(Flow::Continue)
    }

    fn search_items(&mut self) -> Result<Flow> {
        let term = answer_or_exit!(self
            .prompter
            .read_line("Enter a description of the item to search by: "));
        let outcome = self.api.search_items(&term);
        self.report(outcome, "Search failed")?;
        Ok(Flow::Continue)
    }

    fn search_statuses(&mut self) -> Result<Flow> {
        let term = answer_or_exit!(self
            .prompter
            .read_line("Enter the status you wish to search: "));
        let outcome = self.api.search_statuses(&term);
        self.report(outcome, "Search failed")?;
        Ok(Flow::Continue)
    }

    fn give_help(&mut self) -> Result<Flow> {
        write_banner(self.out(), HELP)?;
        Ok(Flow::Continue)
    }

    #[cfg(test)]
    fn api(&self) -> &CatalogueApi {
        &self.api
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    type TestSession = Session<Cursor<Vec<u8>>, Vec<u8>, Vec<u8>>;

    fn session(script: &str) -> TestSession {
        console::set_colors_enabled(false);
        colored::control::set_override(false);
        let prompter = Prompter::new(
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
            Vec::new(),
        );
        Session::new(CatalogueApi::default(), prompter, 100)
    }

    fn run_script(script: &str) -> (TestSession, String) {
        let mut s = session(script);
        s.run().unwrap();
        let out = String::from_utf8(s.prompter.output().clone()).unwrap();
        (s, out)
    }

    #[test]
    fn exits_on_zero() {
        let (_, out) = run_script("0\n11\n");
        assert!(out.contains("Exiting"));
        assert!(!out.contains("Press the number key"));
    }

    #[test]
    fn end_of_input_ends_session() {
        let (s, out) = run_script("1\nWidget\n");
        assert_eq!(s.api().item_count(), 0);
        assert!(!out.contains("Exiting"));
    }

    #[test]
    fn rejects_unknown_options() {
        let (_, out) = run_script("42\n0\n");
        assert!(out.contains("Please enter a valid option between 0 and 11"));
    }

    #[test]
    fn adds_and_lists_items() {
        let (s, out) = run_script("1\nWidget\n100\nTools\n9.99\n2\n1\n0\n");
        assert_eq!(s.api().item_count(), 1);
        assert!(out.contains("Added Successfully (0): Widget"));
        assert!(out.contains("0: Widget (code 100) [Tools] 9.99 - Active"));
    }

    #[test]
    fn non_numeric_code_is_reprompted() {
        let (s, _) = run_script("1\nWidget\nabc\n100\nTools\n9.99\n0\n");
        let item = s.api().catalogue().find_by_id(0).unwrap();
        assert_eq!(item.code, 100);
        assert_eq!(item.category, "Tools");
    }

    #[test]
    fn listing_empty_catalogue_hints_to_add() {
        let (_, out) = run_script("2\n0\n");
        assert!(out.contains("No items are available. Please add an item first"));
    }

    #[test]
    fn archive_waits_for_completed_statuses() {
        let script = [
            "1", "Gadget", "200", "Elec", "19.99", // add item 0
            "6", "0", "wiring", // add status 0
            "5", "0", // archive refused
            "7", "0", "0", "wiring", "1", // complete status
            "5", "0", // archive succeeds
            "0",
        ]
        .join("\n")
            + "\n";
        let (s, out) = run_script(&script);

        assert!(out.contains("Archive NOT Successful: Item 0 has 1 incomplete status(es)"));
        assert!(out.contains("Status updated"));
        assert!(out.contains("Archive Successful (0): Gadget"));
        assert!(s.api().catalogue().find_by_id(0).unwrap().archived);
    }

    #[test]
    fn status_work_requires_an_active_item() {
        let script = [
            "1", "Widget", "1", "Tools", "1", // add item 0
            "5", "0", // archive
            "6", // no active items to pick from
            "0",
        ]
        .join("\n")
            + "\n";
        let (s, out) = run_script(&script);
        assert!(out.contains("No active items stored"));
        assert_eq!(s.api().catalogue().find_by_id(0).unwrap().statuses.count(), 0);
    }

    #[test]
    fn invalid_item_id_for_status() {
        let (_, out) = run_script("1\nA\n1\nc\np\n6\n9\n0\n");
        assert!(out.contains("Item id is not valid"));
    }

    #[test]
    fn delete_status_flow() {
        let script = [
            "1", "A", "1", "c", "p", // add item 0
            "6", "0", "first", // status 0
            "6", "0", "second", // status 1
            "8", "0", "0", // delete status 0
            "8", "0", "7", // no such status
            "0",
        ]
        .join("\n")
            + "\n";
        let (s, out) = run_script(&script);
        assert!(out.contains("Delete Successful! Status 0 removed from item 0"));
        assert!(out.contains("Invalid Status"));
        let item = s.api().catalogue().find_by_id(0).unwrap();
        let ids: Vec<_> = item.statuses.list().map(|st| st.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn update_and_delete_items() {
        let script = [
            "1", "Old", "1", "c", "p", // add item 0
            "1", "Other", "2", "c", "p", // add item 1
            "3", "0", "New", "5", "d", "q", // update item 0
            "3", "9", // no such item
            "4", "1", // delete item 1
            "4", "1", // already gone
            "0",
        ]
        .join("\n")
            + "\n";
        let (s, out) = run_script(&script);
        assert!(out.contains("Update Successful (0): New"));
        assert!(out.contains("There is no item with id 9"));
        assert!(out.contains("Delete Successful (1): Other"));
        assert!(out.contains("Delete NOT Successful: Item not found: 1"));
        assert_eq!(s.api().item_count(), 1);
        assert_eq!(s.api().catalogue().find_by_id(0).unwrap().price, "q");
    }

    #[test]
    fn searches_names_and_statuses() {
        let script = [
            "1", "Milk", "1", "Food", "1.20", // add item 0
            "6", "0", "Expired", // status
            "9", "MILK", // name hit
            "9", "bread", // name miss
            "10", "expir", // status hit
            "10", "fresh", // status miss
            "0",
        ]
        .join("\n")
            + "\n";
        let (_, out) = run_script(&script);
        assert!(out.contains("0: Milk (code 1) [Food] 1.20 - Active"));
        assert!(out.contains("No items found matching: bread"));
        assert!(out.contains("\t0: Expired (TODO)"));
        assert!(out.contains("Status not found"));
    }

    #[test]
    fn help_is_printed() {
        let (_, out) = run_script("11\n0\n");
        assert!(out.contains("Press the number key that matches the action"));
    }
}
