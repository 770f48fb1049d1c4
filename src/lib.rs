// src/lib.rs
//! Fetch animal records, filter them by skin type and render the matches into
//! a static HTML page.
//!
//! ```text
//! source::RecordSource → filter::distinct_values → (user picks) → filter::matching
//!                      → card::render_cards → page::assemble → file::write_page
//! ```
//! `runner` sequences the steps and owns all user interaction.

#[macro_use]
pub mod macros;

pub mod card;
pub mod config;
pub mod console;
pub mod core;
pub mod error;
pub mod file;
pub mod filter;
pub mod log;
pub mod page;
pub mod record;
pub mod runner;
pub mod source;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, Result};
pub use record::{AttrPath, AttrValue, Record};
