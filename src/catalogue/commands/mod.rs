use crate::model::{Item, ItemId, Status};

pub mod add;
pub mod archive;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod search;
pub mod status;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

/// A status hit from a search, with enough of its item to display it.
#[derive(Debug, Clone)]
pub struct StatusMatch {
    pub item_id: ItemId,
    pub item_name: String,
    pub status: Status,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_items: Vec<Item>,
    pub listed_items: Vec<Item>,
    pub listed_statuses: Vec<Status>,
    pub status_matches: Vec<StatusMatch>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_items(mut self, items: Vec<Item>) -> Self {
        self.affected_items = items;
        self
    }

    pub fn with_listed_items(mut self, items: Vec<Item>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_listed_statuses(mut self, statuses: Vec<Status>) -> Self {
        self.listed_statuses = statuses;
        self
    }

    pub fn with_status_matches(mut self, matches: Vec<StatusMatch>) -> Self {
        self.status_matches = matches;
        self
    }
}
