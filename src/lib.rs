//! # Taskedit - task node editor engine
//!
//! Keeps a set of task nodes, each with a note, an attached file path, a
//! priority, an active/inactive status and a short info line, and stores
//! them in single-table SQLite `.task` files.
//!
//! ## Features
//!
//! - **Node Store**: Sequential, never-reused ids and partial field updates
//! - **Filter and Sort**: Substring search and stable ordering by any field
//! - **Task Files**: Lossless save/load with atomic replacement on save
//! - **Sessions**: New/open/save/save-as lifecycle for one open document
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskedit::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
