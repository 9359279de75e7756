//! Frameless GameShelf window.
//!
//! Opens an undecorated window, paints a title band with minimize,
//! maximize and close buttons, and lets [`WinitChrome`] handle dragging
//! and the window actions.

use std::num::NonZeroU32;
use std::sync::Arc;

use gameshelf_chrome::title::BUTTON_HEIGHT;
use gameshelf_chrome::{DRAG_BAND_HEIGHT, Point, TitleButton, WinitChrome};
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{WindowAttributes, WindowId};

const WIDTH: u32 = 960;
const HEIGHT: u32 = 600;

const BACKGROUND: u32 = 0x001e1f24;
const TITLE_BAND: u32 = 0x0014151a;
const BUTTON: u32 = 0x002a2c33;
const CLOSE_BUTTON: u32 = 0x00a3303a;

type Surface = softbuffer::Surface<Arc<winit::window::Window>, Arc<winit::window::Window>>;

#[derive(Default)]
struct ChromeApp {
    chrome: Option<WinitChrome>,
    surface: Option<Surface>,
}

impl ChromeApp {
    fn create(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let attrs = WindowAttributes::default()
            .with_title("GameShelf")
            .with_decorations(false)
            .with_inner_size(winit::dpi::PhysicalSize::new(WIDTH, HEIGHT));

        let window = Arc::new(event_loop.create_window(attrs)?);
        let context = softbuffer::Context::new(window.clone())
            .map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
        let surface = softbuffer::Surface::new(&context, window.clone())
            .map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;

        tracing::info!("window created");
        self.chrome = Some(WinitChrome::new(window));
        self.surface = Some(surface);
        Ok(())
    }

    fn redraw(&mut self) {
        let (Some(chrome), Some(surface)) = (self.chrome.as_ref(), self.surface.as_mut()) else {
            return;
        };

        let size = chrome.window().inner_size();
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return;
        };

        if let Err(e) = surface.resize(width, height) {
            tracing::warn!(error = %e, "failed to resize surface");
            return;
        }

        let mut buffer = match surface.buffer_mut() {
            Ok(b) => b,
            Err(e) => {
                tracing::warn!(error = %e, "failed to map surface");
                return;
            }
        };

        let width = size.width as i32;
        for (i, pixel) in buffer.iter_mut().enumerate() {
            let p = Point::new(i as i32 % width, i as i32 / width);
            *pixel = color_at(p, width);
        }

        if let Err(e) = buffer.present() {
            tracing::warn!(error = %e, "failed to present frame");
        }
    }
}

/// Pixel color for the window layout.
fn color_at(p: Point, width: i32) -> u32 {
    if p.y >= DRAG_BAND_HEIGHT {
        return BACKGROUND;
    }

    for button in TitleButton::ALL {
        if button.contains(p, width) {
            let origin = button.origin(width);
            // One-pixel gap between buttons.
            if p.x == origin.x || p.y == BUTTON_HEIGHT - 1 {
                return TITLE_BAND;
            }
            return match button {
                TitleButton::Close => CLOSE_BUTTON,
                _ => BUTTON,
            };
        }
    }

    TITLE_BAND
}

impl ApplicationHandler for ChromeApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.chrome.is_some() {
            return;
        }
        if let Err(e) = self.create(event_loop) {
            tracing::error!(error = %e, "failed to create window");
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(chrome) = self.chrome.as_mut() else {
            return;
        };

        if chrome.handle_window_event(&event) && chrome.close_requested() {
            tracing::info!("close requested");
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(_) => chrome.window().request_redraw(),
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting GameShelf window");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = ChromeApp::default();
    event_loop.run_app(&mut app)?;

    Ok(())
}
