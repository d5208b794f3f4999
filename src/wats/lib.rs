//! # Wats Architecture
//!
//! Wats (Wildlife Animal Tracking System) keeps one table of animal records in a single
//! SQLite file: Tag ID, species, name, age, gender, weight and health status. It supports
//! create/read/update/delete by Tag ID and one aggregate, the average weight of a species.
//!
//! Like any UI-agnostic library, the core never prints and never exits. The `wats` binary
//! is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders tables, sets exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Turns every error into a CmdResult value                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + Entry Surface (form.rs)    │
//! │  - Validates raw input, applies business rules              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore trait                                        │
//! │  - SqliteStore (production), InMemoryStore (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`form`]: Parsing and validation of raw entry text
//! - [`model`]: [`model::AnimalRecord`] and the gender / health vocabularies
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration (remembered database path)
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod model;
pub mod store;
