use pixels::{Pixels, SurfaceTexture};
use winit::{
    dpi::{LogicalSize, PhysicalSize},
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::{Window, WindowBuilder},
};

use pixel_grid::input::InputHandler;
use pixel_grid::{GridConfig, GridEvent, LayoutHost, Listeners, Notification, PixelGrid};

const WIDTH: u32 = 530;
const HEIGHT: u32 = 400;

/// The window is the grid's host page.
struct WindowLayout {
    size: PhysicalSize<u32>,
}

impl LayoutHost for WindowLayout {
    fn available_width(&self) -> u32 {
        self.size.width
    }

    fn available_height(&self) -> u32 {
        self.size.height
    }
}

fn log_notification(notification: &Notification) {
    match notification {
        Notification::DimensionsInitialized { width, height } => {
            log::info!("Grid ready: {}x{} px", width, height);
        }
        Notification::PixelAdded { col, row, color } => {
            log::info!("Pixel added: ({}, {}) {}", col, row, color);
        }
        Notification::Cleared => log::info!("Grid cleared"),
    }
}

/// Runs one request, then keeps the `pixels` buffer the same size as the grid.
fn dispatch(grid: &mut PixelGrid, pixels: &mut Pixels, buffer_size: &mut (u32, u32), window: &Window, event: GridEvent) {
    if let Err(err) = grid.handle_event(event) {
        log::warn!("Request ignored: {}", err);
        return;
    }

    let size = (grid.width(), grid.height());
    if size != *buffer_size {
        if let Err(err) = pixels.resize_buffer(size.0, size.1) {
            log::error!("Failed to resize buffer: {}", err);
            return;
        }
        *buffer_size = size;
    }
    window.request_redraw();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => GridConfig::load(path)?,
        None => GridConfig::default(),
    };

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(config.window_title.as_str())
        .with_inner_size(LogicalSize::new(WIDTH, HEIGHT))
        .with_resizable(true)
        .build(&event_loop)?;

    let mut listeners = Listeners::new();
    listeners.subscribe(log_notification);

    let cell_size = config.cell_pixel_size;
    let mut input = InputHandler::new(config.palette.clone());
    let layout = WindowLayout { size: window.inner_size() };
    let (initial_width, initial_height) = (config.initial_width, config.initial_height);
    let mut grid = PixelGrid::init(config, &layout, initial_width, initial_height, listeners)?;

    let window_size = window.inner_size();
    let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
    let mut pixels = Pixels::new(grid.width(), grid.height(), surface_texture)?;
    let mut buffer_size = (grid.width(), grid.height());

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(size) => {
                    if let Err(err) = pixels.resize_surface(size.width, size.height) {
                        log::error!("Failed to resize surface: {}", err);
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    let position = pixels
                        .window_pos_to_pixel((position.x as f32, position.y as f32))
                        .ok()
                        .map(|(x, y)| (x as f64, y as f64));
                    input.handle_cursor_moved(position);
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    if let Some(request) = input.handle_mouse_input(state, button) {
                        dispatch(&mut grid, &mut pixels, &mut buffer_size, &window, request);
                    }
                }
                WindowEvent::KeyboardInput { input: key, .. } => {
                    let cells = (grid.width() / cell_size, grid.height() / cell_size);
                    if let Some(request) = input.handle_keyboard_input(&key, cells) {
                        dispatch(&mut grid, &mut pixels, &mut buffer_size, &window, request);
                    }
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                let frame = pixels.frame_mut();
                let source = grid.surface().frame();
                if frame.len() == source.len() {
                    frame.copy_from_slice(source);
                }
                if let Err(err) = pixels.render() {
                    log::error!("Render error: {}", err);
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });
}
