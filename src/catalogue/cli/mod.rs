//! # CLI Layer
//!
//! This module is **one possible UI client** for the catalogue library. It is
//! the only place in the codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Parses process arguments
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `setup`: clap argument definitions
//! - `commands`: `run()` entry point, `config` subcommand and the menu `Session`
//! - `input`: `Prompter`, line and number prompts with re-prompting
//! - `render`: menu text and `CmdResult` rendering
//! - `styles`: terminal styles
//!
//! CLI tests cover argument parsing, prompting and full menu scripts. Business
//! rules are tested in the library.

mod commands;
mod input;
mod render;
mod setup;
mod styles;

pub use commands::run;
