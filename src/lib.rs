//! # Taskflow - a terminal to-do list
//!
//! Create, edit, complete and delete tasks, organised into views:
//!
//! - **Today**: undated tasks plus everything due today or earlier
//! - **Upcoming**: tasks due a month or more from now
//! - **All**: the whole list
//!
//! A persisted focus mode hides the month-ahead preview panel while it is on.
//!
//! ## Layout
//!
//! - [`libs`]: the task model, view classification, display ordering and
//!   everything the commands print
//! - [`db`]: SQLite-backed persistence of the task collection and settings
//! - [`commands`]: the clap command line
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskflow::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
