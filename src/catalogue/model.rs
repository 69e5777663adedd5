use crate::store::statuses::StatusStore;
use std::fmt;

pub type ItemId = u32;
pub type StatusId = u32;

/// The two observable lifecycle states of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemState {
    Active,
    Archived,
}

impl fmt::Display for ItemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemState::Active => write!(f, "Active"),
            ItemState::Archived => write!(f, "Archived"),
        }
    }
}

/// The user-editable fields of an item. Add and update both take one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDetails {
    pub name: String,
    pub code: i64,
    pub category: String,
    // Free text, never parsed as a number
    pub price: String,
}

impl ItemDetails {
    pub fn new(
        name: impl Into<String>,
        code: i64,
        category: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            code,
            category: category.into(),
            price: price.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub id: StatusId,
    pub contents: String,
    pub complete: bool,
}

impl Status {
    pub(crate) fn new(id: StatusId, contents: String, complete: bool) -> Self {
        Self {
            id,
            contents,
            complete,
        }
    }

    pub fn marker(&self) -> &'static str {
        if self.complete {
            "(Complete)"
        } else {
            "(TODO)"
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {}", self.id, self.contents, self.marker())
    }
}

#[derive(Debug, Clone)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub code: i64,
    pub category: String,
    pub price: String,
    pub archived: bool,
    pub statuses: StatusStore,
}

impl Item {
    pub(crate) fn new(id: ItemId, details: ItemDetails) -> Self {
        Self {
            id,
            name: details.name,
            code: details.code,
            category: details.category,
            price: details.price,
            archived: false,
            statuses: StatusStore::new(),
        }
    }

    pub fn state(&self) -> ItemState {
        if self.archived {
            ItemState::Archived
        } else {
            ItemState::Active
        }
    }

    pub fn details(&self) -> ItemDetails {
        ItemDetails {
            name: self.name.clone(),
            code: self.code,
            category: self.category.clone(),
            price: self.price.clone(),
        }
    }

    pub(crate) fn apply(&mut self, details: ItemDetails) {
        self.name = details.name;
        self.code = details.code;
        self.category = details.category;
        self.price = details.price;
    }

    /// An item may be archived when none of its statuses is still TODO.
    /// Items without statuses qualify.
    pub fn is_archivable(&self) -> bool {
        !self.archived && self.statuses.is_all_complete()
    }

    /// Single-line form without the status block.
    pub fn summary(&self) -> String {
        format!(
            "{}: {} (code {}) [{}] {} - {}",
            self.id,
            self.name,
            self.code,
            self.category,
            self.price,
            self.state()
        )
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())?;
        if self.statuses.count() > 0 {
            write!(f, "\n{}", self.statuses.format())?;
        }
        Ok(())
    }
}
