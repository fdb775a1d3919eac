//! Core library modules for taskedit.
//!
//! The node engine lives here: the [`node`] record, the [`store`] that owns
//! records and assigns ids, the [`field`] table and [`filter`] functions used
//! to search and order records, and the [`session`] that binds a store to a
//! `.task` file. The remaining modules support the command-line front end.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskedit::libs::field::Field;
//! use taskedit::libs::node::NodeUpdate;
//! use taskedit::libs::session::Session;
//!
//! let mut session = Session::new();
//! let node = session.store_mut().create()?;
//! session.store_mut().update(node.id, &NodeUpdate::new().priority(3))?;
//! let by_priority = session.view(Field::Priority, "");
//! session.save_as("work.task")?;
//! # Ok::<(), taskedit::libs::error::NodeError>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod editor;
pub mod error;
pub mod field;
pub mod filter;
pub mod messages;
pub mod node;
pub mod session;
pub mod store;
pub mod view;
