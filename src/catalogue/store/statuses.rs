use crate::model::{Status, StatusId};
use std::collections::BTreeMap;

/// The statuses attached to a single item.
///
/// Records are keyed on their immutable id, so editing a status never moves it.
/// Ids come from a per-store counter that starts at 0 and is never rewound,
/// which keeps ids unique within the owning item even after deletions.
#[derive(Debug, Clone, Default)]
pub struct StatusStore {
    statuses: BTreeMap<StatusId, Status>,
    next_id: StatusId,
}

impl StatusStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> StatusId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn add_status(&mut self, contents: impl Into<String>, complete: bool) -> Status {
        let id = self.next_id();
        let status = Status::new(id, contents.into(), complete);
        self.statuses.insert(id, status.clone());
        status
    }

    pub fn find_by_id(&self, id: StatusId) -> Option<&Status> {
        self.statuses.get(&id)
    }

    pub fn update(&mut self, id: StatusId, contents: impl Into<String>, complete: bool) -> bool {
        match self.statuses.get_mut(&id) {
            Some(status) => {
                status.contents = contents.into();
                status.complete = complete;
                true
            }
            None => false,
        }
    }

    pub fn delete(&mut self, id: StatusId) -> bool {
        self.statuses.remove(&id).is_some()
    }

    pub fn count(&self) -> usize {
        self.statuses.len()
    }

    /// Statuses in ascending id order, which is also insertion order.
    pub fn list(&self) -> impl Iterator<Item = &Status> {
        self.statuses.values()
    }

    pub fn incomplete_count(&self) -> usize {
        self.list().filter(|s| !s.complete).count()
    }

    /// Vacuously true for an empty store.
    pub fn is_all_complete(&self) -> bool {
        self.list().all(|s| s.complete)
    }

    pub fn search(&self, term: &str) -> Vec<&Status> {
        let term_lower = term.to_lowercase();
        self.list()
            .filter(|s| s.contents.to_lowercase().contains(&term_lower))
            .collect()
    }

    /// One tab-indented line per status.
    pub fn format(&self) -> String {
        self.list()
            .map(|s| format!("\t{}", s))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
