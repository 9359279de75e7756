//! winit integration.

use std::sync::Arc;

use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::window::Window;

use crate::WindowBackend;
use crate::geometry::Point;
use crate::window::ChromeWindow;

/// [`WindowBackend`] over a winit window.
///
/// winit cannot close a window from the inside, so [`close`] only raises
/// a flag the event loop checks with [`close_requested`].
///
/// [`close`]: WindowBackend::close
/// [`close_requested`]: WinitBackend::close_requested
pub struct WinitBackend {
    window: Arc<Window>,
    close_requested: bool,
}

impl WinitBackend {
    pub fn new(window: Arc<Window>) -> Self {
        Self {
            window,
            close_requested: false,
        }
    }

    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    /// Screen position of the client area, used to turn cursor positions
    /// into screen coordinates.
    fn inner_position(&self) -> Point {
        match self.window.inner_position() {
            Ok(p) => Point::new(p.x, p.y),
            // Not available on Wayland; drags then degrade to no-ops.
            Err(_) => Point::default(),
        }
    }
}

impl WindowBackend for WinitBackend {
    fn position(&self) -> Point {
        match self.window.outer_position() {
            Ok(p) => Point::new(p.x, p.y),
            Err(_) => Point::default(),
        }
    }

    fn set_position(&mut self, position: Point) {
        self.window
            .set_outer_position(PhysicalPosition::new(position.x, position.y));
    }

    fn minimize(&mut self) {
        self.window.set_minimized(true);
    }

    fn is_maximized(&self) -> bool {
        self.window.is_maximized()
    }

    fn set_maximized(&mut self, maximized: bool) {
        self.window.set_maximized(maximized);
    }

    fn close(&mut self) {
        self.close_requested = true;
    }
}

/// A [`ChromeWindow`] fed from winit events.
pub struct WinitChrome {
    chrome: ChromeWindow<WinitBackend>,
    /// Last cursor position in window coordinates.
    cursor: Point,
}

impl WinitChrome {
    pub fn new(window: Arc<Window>) -> Self {
        Self {
            chrome: ChromeWindow::new(WinitBackend::new(window)),
            cursor: Point::default(),
        }
    }

    /// Feeds one window event. Returns `true` if the chrome consumed it.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = cursor_point(*position);
                let global = self.global_cursor();
                self.chrome.on_pointer_move(self.cursor, global)
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => {
                    let width = self.window().inner_size().width as i32;
                    let global = self.global_cursor();
                    self.chrome.on_primary_press(self.cursor, global, width)
                }
                ElementState::Released => self.chrome.on_primary_release(),
            },
            _ => false,
        }
    }

    fn global_cursor(&self) -> Point {
        self.chrome.backend().inner_position() + self.cursor
    }

    pub fn window(&self) -> &Arc<Window> {
        self.chrome.backend().window()
    }

    pub fn close_requested(&self) -> bool {
        self.chrome.backend().close_requested()
    }

    pub fn chrome(&self) -> &ChromeWindow<WinitBackend> {
        &self.chrome
    }

    pub fn chrome_mut(&mut self) -> &mut ChromeWindow<WinitBackend> {
        &mut self.chrome
    }
}

/// Cursor position in whole pixels. Floors so positions left of or above
/// the window stay negative.
fn cursor_point(position: PhysicalPosition<f64>) -> Point {
    Point::new(position.x.floor() as i32, position.y.floor() as i32)
}
