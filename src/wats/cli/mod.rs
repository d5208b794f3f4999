//! # CLI Behavior
//!
//! This is **one possible UI client** for wats, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! ## Choosing the Database
//!
//! The tracking database is a single SQLite file. It is resolved in this order:
//!
//! 1. `--db <PATH>`
//! 2. the `WATS_DB` environment variable
//! 3. the `db` key of the config file (set by `wats init <PATH>` or `wats config db <PATH>`)
//!
//! Every command except `init` and `config` opens the file once at startup to check it is
//! usable, then hands a store for it to the API.
//!
//! ## Entry Validation
//!
//! `add` and `update` take raw text flags. They are parsed and validated by
//! [`wats::form`], so a typo is reported without touching the database.
//!
//! ## Exit Codes
//!
//! `0` on success, `1` when the operation reports failure (unknown Tag ID, duplicate Tag ID,
//! invalid input, database error).
//!
//! ## Module Structure
//!
//! - `commands`: Dispatch, context setup, per-command handlers
//! - `render`: Output formatting (record table, messages)
//! - `setup`: Argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
