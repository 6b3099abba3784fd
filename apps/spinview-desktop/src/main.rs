mod viewer;

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use viewer::{InitError, Viewer};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

#[derive(Parser)]
#[command(name = "spinview-desktop", about = "Rotating wireframe cube viewer")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Initial window width in pixels
    #[arg(long, default_value = "1280")]
    width: u32,

    /// Initial window height in pixels
    #[arg(long, default_value = "720")]
    height: u32,
}

struct App {
    initial_size: PhysicalSize<u32>,
    window: Option<Arc<Window>>,
    viewer: Option<Viewer>,
    init_error: Option<InitError>,
}

impl App {
    fn new(cli: &Cli) -> Self {
        Self {
            initial_size: PhysicalSize::new(cli.width.max(1), cli.height.max(1)),
            window: None,
            viewer: None,
            init_error: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("spinview")
            .with_inner_size(self.initial_size);
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                let err = InitError::from(e);
                tracing::error!("initialization failed: {err}");
                self.init_error = Some(err);
                event_loop.exit();
                return;
            }
        };

        match Viewer::initialize(window.clone()) {
            Ok(viewer) => {
                // Kick off the animation loop
                window.request_redraw();
                self.viewer = Some(viewer);
                self.window = Some(window);
            }
            Err(e) => {
                // Single error path: report once, abort with no further
                // side effects.
                tracing::error!("initialization failed: {e}");
                self.init_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                if let Some(viewer) = &self.viewer {
                    viewer.handle().stop();
                }
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(viewer) = &mut self.viewer {
                    viewer.resize(new_size.width, new_size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                let (Some(viewer), Some(window)) = (&mut self.viewer, &self.window) else {
                    return;
                };
                // Reschedule before any frame work, like a recursive frame
                // callback would.
                if viewer.is_running() {
                    window.request_redraw();
                }
                viewer.frame();
            }
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("spinview-desktop starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(&cli);
    event_loop.run_app(&mut app)?;

    if let Some(e) = app.init_error.take() {
        return Err(e.into());
    }

    Ok(())
}
