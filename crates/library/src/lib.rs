//! Library panel: the game list and the actions around it.
//!
//! This crate holds the **behaviour** of the library screen with no
//! toolkit dependency. A host application supplies a [`Dialogs`]
//! implementation for prompts and blocking message boxes, renders
//! [`GameList`] and the [`NoticeQueue`], and calls
//! [`LibraryPanel::pump_launch_events`] from its UI loop.
//!
//! # Operations
//!
//! - **Launch**: start the selected game, one at a time
//! - **Add**: prompt for name, executable and working directory
//! - **Remove**: delete the selected game
//! - **Refresh**: rebuild the list from the registry

pub mod dialogs;
pub mod list;
pub mod notice;
pub mod panel;

// Re-export primary types for convenience.
pub use dialogs::{Dialogs, Severity};
pub use list::GameList;
pub use notice::{Notice, NoticeQueue};
pub use panel::LibraryPanel;
