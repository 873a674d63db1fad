//! Core library modules for the taskflow application.
//!
//! ## Features
//!
//! - **Domain**: the task model and its validation
//! - **Classification**: view membership and display order, as pure functions
//! - **Core Infrastructure**: configuration, data storage, clock, messaging
//! - **User Interface**: table rendering and date formatting
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskflow::db::tasks::Tasks;
//! use taskflow::libs::classifier::{classify, sort_for_display};
//! use taskflow::libs::clock::{Clock, SystemClock};
//! use taskflow::libs::task::TaskView;
//!
//! let tasks = Tasks::new()?.get_all()?;
//! let today = sort_for_display(classify(&tasks, TaskView::Today, SystemClock.now()));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod classifier;
pub mod clock;
pub mod config;
pub mod data_storage;
pub mod formatter;
pub mod messages;
pub mod task;
pub mod view;
