mod config;
mod controller;
mod graphics;
mod grid;
mod mapper;
mod renderer;
mod viewport;

use std::path::Path;

use winit::{
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use crate::config::Config;
use crate::controller::InteractionController;
use crate::graphics::GraphicsRenderer;
use crate::grid::{GridModel, PointGrid};
use crate::mapper::SurfaceBounds;
use crate::viewport::SurfaceLayout;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = Config::load(Path::new(config::CONFIG_FILE))?;
    let layout = SurfaceLayout::compute(
        config.viewport_width,
        config.viewport_height,
        config.cell_size,
    );
    log::info!(
        "Surface {}x{} px, grid {} rows x {} cols, cell size {}",
        layout.surface_width,
        layout.surface_height,
        layout.rows,
        layout.cols,
        layout.cell_size
    );

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Dotgrid")
        .with_inner_size(winit::dpi::LogicalSize::new(
            layout.surface_width.max(1),
            layout.surface_height.max(1),
        ))
        .with_resizable(false)
        .build(&event_loop)?;

    let mut graphics = GraphicsRenderer::new(&window, layout)?;
    let mut controller = InteractionController::new(PointGrid::new(), layout);

    let continuous_redraw = config.continuous_redraw;
    let inner_size = window.inner_size();
    let mut bounds = SurfaceBounds::new(0.0, 0.0, inner_size.width as f64, inner_size.height as f64);
    let mut cursor_position = (0.0f64, 0.0f64);
    // Initial paint on the first pass through the loop.
    let mut redraw_requested = true;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = if continuous_redraw {
            ControlFlow::Poll
        } else {
            ControlFlow::Wait
        };

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(size) => {
                    // The grid and the backing buffer stay fixed; only the
                    // displayed scale changes.
                    graphics.resize_surface(size.width, size.height);
                    bounds = SurfaceBounds::new(0.0, 0.0, size.width as f64, size.height as f64);
                    redraw_requested = true;
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor_position = (position.x, position.y);
                }
                WindowEvent::MouseInput {
                    state: ElementState::Pressed,
                    button: MouseButton::Left,
                    ..
                } => {
                    let outcome =
                        controller.handle_click(cursor_position.0, cursor_position.1, &bounds);
                    if outcome.state_changed() {
                        redraw_requested = true;
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                if continuous_redraw {
                    redraw_requested = true;
                }
                if redraw_requested {
                    graphics.render(&controller.grid().active_points());
                    if let Err(err) = graphics.present() {
                        log::error!("Render error: {}", err);
                        *control_flow = ControlFlow::Exit;
                    }
                    redraw_requested = false;
                }
            }
            _ => {}
        }
    });
}
