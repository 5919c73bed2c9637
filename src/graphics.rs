use crate::color::Color;
use crate::grid::GridState;
use crate::surface::Surface;

/// A logical grid position, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellAddress {
    pub col: u32,
    pub row: u32,
}

impl CellAddress {
    pub fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }
}

/// Top-left pixel of a cell's fill area. The `+ 1` skips the grid line.
pub fn cell_to_pixel(cell: CellAddress, cell_size: u32) -> (u64, u64) {
    let size = cell_size as u64;
    (cell.col as u64 * size + 1, cell.row as u64 * size + 1)
}

/// Inverse of [`cell_to_pixel`] for a fill origin.
pub fn pixel_to_cell(origin: (u64, u64), cell_size: u32) -> CellAddress {
    let size = cell_size as u64;
    CellAddress {
        col: (origin.0.saturating_sub(1) / size) as u32,
        row: (origin.1.saturating_sub(1) / size) as u32,
    }
}

/// Cell enclosing a physical offset, or `None` when the offset is negative,
/// not finite, or past the addressable range.
pub fn snap_to_cell(x: f64, y: f64, cell_size: u32) -> Option<CellAddress> {
    if !x.is_finite() || !y.is_finite() || x < 0.0 || y < 0.0 {
        return None;
    }
    let size = cell_size as f64;
    let col = (x / size).floor();
    let row = (y / size).floor();
    if col > u32::MAX as f64 || row > u32::MAX as f64 {
        return None;
    }
    Some(CellAddress::new(col as u32, row as u32))
}

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Fills the inside of one cell and returns the address it maps back to.
pub fn fill_cell(surface: &mut Surface, cell: CellAddress, cell_size: u32, color: Color) -> CellAddress {
    let (start_x, start_y) = cell_to_pixel(cell, cell_size);
    let side = cell_size as i64 - 1;
    surface.fill_rect(to_i64(start_x), to_i64(start_y), side, side, color);
    pixel_to_cell((start_x, start_y), cell_size)
}

/// Redraws background and grid lines over `width x height`, then puts the
/// last snapshot back on top when `preserve` is set.
pub fn draw(surface: &mut Surface, state: &GridState, width: u32, height: u32, preserve: bool) {
    let (w, h) = (width as i64, height as i64);

    surface.fill_rect(0, 0, w, h, state.background_color());

    draw_grid_lines(surface, width, height, state.cell_pixel_size(), Color::GRID_LINE);
    draw_grid_lines(surface, width, height, state.config().major_line_spacing(), Color::GRID_ACCENT);

    if preserve {
        if let Some(snapshot) = state.snapshot() {
            surface.blit(snapshot);
        }
    }
    log::debug!("Drew {}x{} grid (preserve: {})", width, height, preserve);
}

/// One-pixel lines every `spacing` pixels on both axes.
///
/// Keeps going while either axis still has room, so the longer axis gets all
/// of its lines even on a very wide but short grid.
fn draw_grid_lines(surface: &mut Surface, width: u32, height: u32, spacing: u32, color: Color) {
    let (w, h) = (width as i64, height as i64);
    let step = spacing.max(1) as i64;

    let mut i: i64 = 0;
    while i < w || i < h {
        surface.fill_rect(i, 0, 1, h, color);
        surface.fill_rect(0, i, w, 1, color);
        i += step;
    }
}
