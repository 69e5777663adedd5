//! # Catalogue Architecture
//!
//! Catalogue is an **in-memory item catalogue library** with an interactive
//! shell on top. Items carry a name, a numeric code, a category and a price,
//! and collect statuses (units of work that are either TODO or complete). An
//! item can be archived once all of its statuses are complete.
//!
//! Nothing is persisted: a catalogue lives exactly as long as the value that
//! owns it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Numbered menu, prompts, integer re-prompting, rendering  │
//! │  - The ONLY place that knows about stdin/stdout/stderr      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the Catalogue, dispatches to commands               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per action, returns Result<CmdResult>         │
//! │  - User-facing messages, logging                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Catalogue: items, id assignment, filters, archive guard  │
//! │  - StatusStore: per-item statuses with their own ids        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Item Lifecycle
//!
//! ```text
//! ACTIVE ──archive()──▶ ARCHIVED
//!        guard: no TODO statuses (items without statuses pass)
//! ```
//!
//! ARCHIVED is terminal. Item ids are unique across the catalogue; status ids
//! are unique only within their item. Neither is ever reused.
//!
//! ## Testing Strategy
//!
//! 1. **Store** (`store/*.rs`): invariants of id assignment, filtering, search
//!    and the archive guard.
//! 2. **Commands** (`commands/*.rs`): messages, error mapping, archived-item
//!    rules.
//! 3. **API** (`api.rs`): dispatch only.
//! 4. **Shell** (`cli/` and `tests/`): menu flows driven through stdin.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each action
//! - [`store`]: `Catalogue` and `StatusStore`
//! - [`model`]: `Item`, `Status`, `ItemDetails`
//! - [`config`]: Configuration file and home directory resolution
//! - [`logging`]: File logger bootstrap
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod store;
