//! # Storage Layer
//!
//! Everything the catalogue knows lives in process memory, owned by a single
//! [`Catalogue`] value that the caller constructs and passes around. There is
//! no global instance and nothing is written to disk.
//!
//! ## Ownership
//!
//! ```text
//! Catalogue
//! ├── next_id            # item id counter, never rewound
//! └── items: Vec<Item>   # insertion order
//!     └── statuses: StatusStore
//!         ├── next_id    # per-item status id counter
//!         └── BTreeMap<StatusId, Status>
//! ```
//!
//! Deleting an item drops its `StatusStore` with it.
//!
//! ## Failure Reporting
//!
//! Failures are either "not found" (item or status id) or a guard refusing a
//! lifecycle change. Neither mutates anything. Mutations exist as `try_*`
//! methods returning [`crate::error::Result`] and as plain methods returning
//! `bool`; the latter are thin wrappers, so the two can never disagree.
//!
//! Concurrent callers must wrap the whole `Catalogue` in one lock; id
//! assignment and the archive guard both rely on exclusive access.

pub mod catalogue;
pub mod statuses;

pub use self::catalogue::{Catalogue, ListFilter};
pub use self::statuses::StatusStore;
