use crate::batch::BatchRequest;
use crate::color::Color;
use crate::config::GridConfig;
use crate::error::{Axis, GridError};
use crate::events::{GridEvent, Listeners, Notification};
use crate::graphics::{self, CellAddress};
use crate::grid::{validate_dimension, GridState};
use crate::surface::Surface;

/// Horizontal padding the host keeps around the grid, in physical pixels.
pub const LAYOUT_PADDING: u32 = 30;

/// Whatever the grid is embedded in. Only consulted for dimensions the
/// caller leaves out at init.
pub trait LayoutHost {
    /// Width of the area the grid sits in, padding included.
    fn available_width(&self) -> u32;
    fn available_height(&self) -> u32;
}

/// A layout with fixed measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedLayout {
    pub width: u32,
    pub height: u32,
}

impl LayoutHost for FixedLayout {
    fn available_width(&self) -> u32 {
        self.width
    }

    fn available_height(&self) -> u32 {
        self.height
    }
}

/// A pixel-art grid: one surface, its state, and whoever listens to it.
#[derive(Debug)]
pub struct PixelGrid {
    state: GridState,
    surface: Surface,
    listeners: Listeners,
}

impl PixelGrid {
    /// Creates the surface, draws an empty grid and announces the size.
    ///
    /// Missing dimensions are taken from `layout`. Fails if no surface of the
    /// resulting size can be created; the grid is unusable in that case.
    pub fn init(
        config: GridConfig,
        layout: &dyn LayoutHost,
        width: Option<u32>,
        height: Option<u32>,
        listeners: Listeners,
    ) -> Result<Self, GridError> {
        config.validate()?;

        let width = width.unwrap_or_else(|| layout.available_width().saturating_sub(LAYOUT_PADDING));
        let height = height.unwrap_or_else(|| layout.available_height());

        let surface = match Surface::new(width, height) {
            Ok(surface) => surface,
            Err(err) => {
                log::error!("Error: could not get a drawing surface: {}", err);
                return Err(err);
            }
        };

        let mut grid = Self {
            state: GridState::new(config, width, height),
            surface,
            listeners,
        };
        graphics::draw(&mut grid.surface, &grid.state, width, height, false);
        log::info!("Grid initialized at {}x{}", width, height);

        grid.listeners.emit(Notification::DimensionsInitialized { width, height });
        Ok(grid)
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&Notification) + 'static,
    {
        self.listeners.subscribe(listener);
    }

    pub fn width(&self) -> u32 {
        self.state.width
    }

    pub fn height(&self) -> u32 {
        self.state.height
    }

    pub fn current_color(&self) -> Color {
        self.state.current_color()
    }

    pub fn state(&self) -> &GridState {
        &self.state
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Color at a physical pixel, or `None` outside the surface.
    pub fn pixel_at(&self, x: u32, y: u32) -> Option<Color> {
        self.surface.pixel(x, y)
    }

    /// Handles one host request to completion.
    pub fn handle_event(&mut self, event: GridEvent) -> Result<(), GridError> {
        match event {
            GridEvent::SetWidth(cells) => {
                let width = cells.saturating_mul(self.state.cell_pixel_size());
                self.resize(Some(width), None)
            }
            GridEvent::SetHeight(cells) => {
                let height = cells.saturating_mul(self.state.cell_pixel_size());
                self.resize(None, Some(height))
            }
            GridEvent::SetCurrentColor(color) => {
                self.state.set_current_color(color);
                Ok(())
            }
            GridEvent::PointerClick { x, y } => {
                self.click(x, y);
                Ok(())
            }
            GridEvent::ClearRequest => {
                self.clear();
                Ok(())
            }
        }
    }

    pub fn set_current_color(&mut self, color: Color) {
        self.state.set_current_color(color);
    }

    /// Sets the surface width in physical pixels (`1..=1000`, fractions
    /// truncated).
    pub fn set_width(&mut self, width: f64) -> Result<(), GridError> {
        let width = Self::checked_dimension(Axis::Width, width)?;
        self.resize(Some(width), None)
    }

    /// Sets the surface height in physical pixels (`1..=1000`, fractions
    /// truncated).
    pub fn set_height(&mut self, height: f64) -> Result<(), GridError> {
        let height = Self::checked_dimension(Axis::Height, height)?;
        self.resize(None, Some(height))
    }

    fn checked_dimension(axis: Axis, value: f64) -> Result<u32, GridError> {
        // Anything under one pixel counts as "not specified"
        if !validate_dimension(value) || value < 1.0 {
            let err = GridError::InvalidDimension { axis, value };
            log::error!("Error: {}", err);
            return Err(err);
        }
        Ok(value as u32)
    }

    fn resize(&mut self, width: Option<u32>, height: Option<u32>) -> Result<(), GridError> {
        if let Err(err) = self.state.set_dimensions(&mut self.surface, width, height) {
            log::error!("Error: resize rejected: {}", err);
            return Err(err);
        }
        let (width, height) = (self.state.width, self.state.height);
        graphics::draw(&mut self.surface, &self.state, width, height, true);
        Ok(())
    }

    /// Colors the cell under a physical offset with the current color.
    pub fn click(&mut self, x: f64, y: f64) {
        match graphics::snap_to_cell(x, y, self.state.cell_pixel_size()) {
            Some(cell) => {
                log::debug!("Click at ({}, {}) -> cell ({}, {})", x, y, cell.col, cell.row);
                let color = self.state.current_color();
                self.color_cell(cell, color);
            }
            None => log::warn!("Ignoring click outside the grid at ({}, {})", x, y),
        }
    }

    /// Colors one cell. Cells past the surface edge are clipped away but
    /// still announced.
    pub fn color_pixel(&mut self, col: u32, row: u32, color: Color) {
        self.color_cell(CellAddress::new(col, row), color);
    }

    fn color_cell(&mut self, cell: CellAddress, color: Color) {
        let mapped = graphics::fill_cell(&mut self.surface, cell, self.state.cell_pixel_size(), color);
        self.listeners.emit(Notification::PixelAdded {
            col: mapped.col,
            row: mapped.row,
            color,
        });
    }

    /// Colors every entry of `request` in order. Nothing is drawn if any
    /// entry names a palette key that `colors` lacks.
    pub fn batch_color(&mut self, request: &BatchRequest) -> Result<(), GridError> {
        let cells = match request.resolve() {
            Ok(cells) => cells,
            Err(err) => {
                log::error!("Error: batch rejected: {}", err);
                return Err(err);
            }
        };
        for (col, row, color) in cells {
            self.color_pixel(col, row, color);
        }
        Ok(())
    }

    /// Wipes the artwork and redraws an empty grid.
    pub fn clear(&mut self) {
        let (width, height) = (self.state.width, self.state.height);
        self.surface.clear_rect(0, 0, width as i64, height as i64);
        graphics::draw(&mut self.surface, &self.state, width, height, false);
        self.listeners.emit(Notification::Cleared);
    }
}
