//! Title-bar buttons.
//!
//! The three buttons sit in the top-right corner of the drag band,
//! right to left: close, maximize, minimize.

use crate::geometry::Point;

/// Width of one title-bar button in pixels.
pub const BUTTON_WIDTH: i32 = 46;

/// Height of the title-bar buttons in pixels.
pub const BUTTON_HEIGHT: i32 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleButton {
    Minimize,
    Maximize,
    Close,
}

impl TitleButton {
    /// All buttons, left to right.
    pub const ALL: [TitleButton; 3] = [Self::Minimize, Self::Maximize, Self::Close];

    /// Slot counted from the right edge.
    fn slot(self) -> i32 {
        match self {
            Self::Close => 0,
            Self::Maximize => 1,
            Self::Minimize => 2,
        }
    }

    /// Top-left corner of the button in a window `window_width` wide.
    pub fn origin(self, window_width: i32) -> Point {
        Point::new(window_width - (self.slot() + 1) * BUTTON_WIDTH, 0)
    }

    /// Whether `local` falls on this button.
    pub fn contains(self, local: Point, window_width: i32) -> bool {
        let origin = self.origin(window_width);
        local.x >= origin.x
            && local.x < origin.x + BUTTON_WIDTH
            && local.y >= origin.y
            && local.y < origin.y + BUTTON_HEIGHT
    }
}

/// Returns the title-bar button under `local`, if any.
pub fn title_button_at(local: Point, window_width: i32) -> Option<TitleButton> {
    TitleButton::ALL
        .into_iter()
        .find(|b| b.contains(local, window_width))
}
