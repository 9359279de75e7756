//! Drag-to-move and window actions.

use tracing::debug;

use crate::geometry::Point;
use crate::title::{TitleButton, title_button_at};
use crate::{DRAG_BAND_HEIGHT, WindowBackend};

/// Per-gesture drag state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragState {
    /// Last pointer position in screen coordinates while a button is held.
    pub anchor: Option<Point>,
    /// Set once a move inside the band has started dragging; kept until
    /// release so the pointer may leave the band mid-drag.
    pub dragging: bool,
}

/// A frameless window with hand-made chrome.
#[derive(Debug)]
pub struct ChromeWindow<W> {
    backend: W,
    drag: DragState,
}

impl<W: WindowBackend> ChromeWindow<W> {
    pub fn new(backend: W) -> Self {
        Self {
            backend,
            drag: DragState::default(),
        }
    }

    /// Records the press position as the drag anchor.
    pub fn on_pointer_down(&mut self, global: Point) {
        self.drag.anchor = Some(global);
    }

    /// Ends the gesture.
    pub fn on_pointer_up(&mut self) {
        if self.drag.dragging {
            debug!(position = ?self.backend.position(), "window drag finished");
        }
        self.drag = DragState::default();
    }

    /// Handles pointer motion while a button is held.
    ///
    /// `local` is the pointer in window coordinates, `global` in screen
    /// coordinates. Returns `true` if the window moved.
    pub fn on_pointer_move(&mut self, local: Point, global: Point) -> bool {
        let Some(anchor) = self.drag.anchor else {
            return false;
        };

        if local.y >= DRAG_BAND_HEIGHT && !self.drag.dragging {
            return false;
        }

        let delta = global - anchor;
        self.drag.dragging = true;
        let target = self.backend.position() + delta;
        self.backend.set_position(target);
        self.drag.anchor = Some(global);
        true
    }

    /// Handles a primary-button press at `local` (window) / `global`
    /// (screen) coordinates in a window `window_width` wide.
    ///
    /// A press on a title button runs its action without arming a drag.
    /// Returns `true` in that case.
    pub fn on_primary_press(&mut self, local: Point, global: Point, window_width: i32) -> bool {
        match title_button_at(local, window_width) {
            Some(button) => {
                self.press_title_button(button);
                true
            }
            None => {
                self.on_pointer_down(global);
                false
            }
        }
    }

    /// Handles a primary-button release. Returns `true` if it ended a drag.
    pub fn on_primary_release(&mut self) -> bool {
        let was_dragging = self.drag.dragging;
        self.on_pointer_up();
        was_dragging
    }

    pub fn minimize(&mut self) {
        self.backend.minimize();
    }

    /// Toggles between maximized and normal size.
    pub fn maximize(&mut self) {
        let maximized = self.backend.is_maximized();
        self.backend.set_maximized(!maximized);
    }

    pub fn close(&mut self) {
        self.backend.close();
    }

    /// Performs the action of a title-bar button.
    pub fn press_title_button(&mut self, button: TitleButton) {
        debug!(?button, "title button pressed");
        match button {
            TitleButton::Minimize => self.minimize(),
            TitleButton::Maximize => self.maximize(),
            TitleButton::Close => self.close(),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.dragging
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn backend(&self) -> &W {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut W {
        &mut self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct FakeWindow {
        position: Point,
        minimized: bool,
        maximized: bool,
        closed: bool,
        moves: usize,
    }

    impl WindowBackend for FakeWindow {
        fn position(&self) -> Point {
            self.position
        }

        fn set_position(&mut self, position: Point) {
            self.position = position;
            self.moves += 1;
        }

        fn minimize(&mut self) {
            self.minimized = true;
        }

        fn is_maximized(&self) -> bool {
            self.maximized
        }

        fn set_maximized(&mut self, maximized: bool) {
            self.maximized = maximized;
        }

        fn close(&mut self) {
            self.closed = true;
        }
    }

    fn window_at(x: i32, y: i32) -> ChromeWindow<FakeWindow> {
        ChromeWindow::new(FakeWindow {
            position: Point::new(x, y),
            ..FakeWindow::default()
        })
    }

    #[test]
    fn drag_in_band_moves_by_delta() {
        let mut w = window_at(100, 100);

        w.on_pointer_down(Point::new(150, 110));
        assert!(w.on_pointer_move(Point::new(60, 15), Point::new(160, 115)));

        assert_eq!(w.backend().position, Point::new(110, 105));
        assert!(w.is_dragging());
        assert_eq!(w.drag_state().anchor, Some(Point::new(160, 115)));
    }

    #[test]
    fn consecutive_moves_accumulate() {
        let mut w = window_at(0, 0);

        w.on_pointer_down(Point::new(10, 10));
        w.on_pointer_move(Point::new(10, 10), Point::new(15, 10));
        w.on_pointer_move(Point::new(10, 10), Point::new(20, 30));

        assert_eq!(w.backend().position, Point::new(10, 20));
        assert_eq!(w.backend().moves, 2);
    }

    #[test]
    fn press_below_band_does_not_move() {
        let mut w = window_at(100, 100);

        w.on_pointer_down(Point::new(300, 300));
        assert!(!w.on_pointer_move(Point::new(200, 200), Point::new(320, 310)));

        assert_eq!(w.backend().position, Point::new(100, 100));
        assert!(!w.is_dragging());
        assert_eq!(w.backend().moves, 0);
    }

    #[test]
    fn band_edge_is_exclusive() {
        let mut w = window_at(0, 0);

        w.on_pointer_down(Point::new(0, 69));
        assert!(!w.on_pointer_move(Point::new(0, DRAG_BAND_HEIGHT), Point::new(5, 70)));
        assert!(w.on_pointer_move(Point::new(0, DRAG_BAND_HEIGHT - 1), Point::new(5, 69)));
    }

    #[test]
    fn drag_continues_outside_band() {
        let mut w = window_at(0, 0);

        w.on_pointer_down(Point::new(10, 10));
        w.on_pointer_move(Point::new(10, 10), Point::new(10, 20));
        // Pointer now far below the band; drag must continue.
        assert!(w.on_pointer_move(Point::new(10, 400), Point::new(10, 420)));

        assert_eq!(w.backend().position, Point::new(0, 410));
    }

    #[test]
    fn release_ends_drag() {
        let mut w = window_at(0, 0);

        w.on_pointer_down(Point::new(10, 10));
        w.on_pointer_move(Point::new(10, 10), Point::new(20, 10));
        w.on_pointer_up();

        assert!(!w.is_dragging());
        assert_eq!(w.drag_state(), DragState::default());

        // A new press below the band does not inherit the old drag.
        w.on_pointer_down(Point::new(20, 300));
        assert!(!w.on_pointer_move(Point::new(10, 290), Point::new(40, 300)));
        assert_eq!(w.backend().position, Point::new(10, 0));
    }

    #[test]
    fn move_without_press_is_ignored() {
        let mut w = window_at(5, 5);
        assert!(!w.on_pointer_move(Point::new(10, 10), Point::new(50, 50)));
        assert_eq!(w.backend().position, Point::new(5, 5));
    }

    #[test]
    fn maximize_toggles() {
        let mut w = window_at(0, 0);

        w.maximize();
        assert!(w.backend().maximized);
        w.maximize();
        assert!(!w.backend().maximized);
    }

    #[test]
    fn minimize_and_close_delegate() {
        let mut w = window_at(0, 0);

        w.minimize();
        w.close();

        assert!(w.backend().minimized);
        assert!(w.backend().closed);
    }

    #[test]
    fn title_buttons_map_to_actions() {
        let mut w = window_at(0, 0);

        w.press_title_button(TitleButton::Maximize);
        assert!(w.backend().maximized);
        w.press_title_button(TitleButton::Minimize);
        assert!(w.backend().minimized);
        w.press_title_button(TitleButton::Close);
        assert!(w.backend().closed);
    }

    #[test]
    fn press_on_title_button_does_not_arm_drag() {
        let mut w = window_at(0, 0);

        // Close button of an 800 px window.
        assert!(w.on_primary_press(Point::new(790, 10), Point::new(790, 10), 800));
        assert!(w.backend().closed);
        assert_eq!(w.drag_state().anchor, None);

        assert!(!w.on_pointer_move(Point::new(780, 10), Point::new(780, 10)));
        assert_eq!(w.backend().moves, 0);
    }

    #[test]
    fn press_elsewhere_in_band_arms_drag() {
        let mut w = window_at(0, 0);

        assert!(!w.on_primary_press(Point::new(100, 10), Point::new(100, 10), 800));
        assert_eq!(w.drag_state().anchor, Some(Point::new(100, 10)));
        assert!(!w.backend().closed && !w.backend().minimized && !w.backend().maximized);
    }

    #[test]
    fn release_reports_whether_drag_ended() {
        let mut w = window_at(0, 0);

        // Press and release without moving.
        w.on_primary_press(Point::new(100, 10), Point::new(100, 10), 800);
        assert!(!w.on_primary_release());

        w.on_primary_press(Point::new(100, 10), Point::new(100, 10), 800);
        w.on_pointer_move(Point::new(110, 10), Point::new(110, 10));
        assert!(w.on_primary_release());
        assert_eq!(w.drag_state(), DragState::default());
    }
}
