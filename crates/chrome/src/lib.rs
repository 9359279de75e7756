//! Custom window chrome for frameless windows.
//!
//! A window without native decorations still needs to be moved,
//! minimized, maximized and closed. [`ChromeWindow`] implements that on
//! top of any [`WindowBackend`]: pressing and dragging inside the top
//! [`DRAG_BAND_HEIGHT`] pixels moves the window, while presses below the
//! band are left to the window's content.
//!
//! With the `winit` feature (on by default), [`WinitChrome`] drives a
//! `ChromeWindow` straight from winit window events.

pub mod geometry;
pub mod title;
pub mod window;
#[cfg(feature = "winit")]
pub mod winit_backend;

// Re-export primary types for convenience.
pub use geometry::Point;
pub use title::{TitleButton, title_button_at};
pub use window::{ChromeWindow, DragState};
#[cfg(feature = "winit")]
pub use winit_backend::{WinitBackend, WinitChrome};

/// Height in pixels of the strip at the top of the window that starts a drag.
pub const DRAG_BAND_HEIGHT: i32 = 70;

/// Window-system operations the chrome needs.
pub trait WindowBackend {
    /// Top-left corner of the window in screen coordinates.
    fn position(&self) -> Point;

    /// Moves the window's top-left corner to `position`.
    fn set_position(&mut self, position: Point);

    fn minimize(&mut self);

    fn is_maximized(&self) -> bool;

    fn set_maximized(&mut self, maximized: bool);

    fn close(&mut self);
}
