use winit::event::{ElementState, KeyboardInput, MouseButton, VirtualKeyCode};
use crate::color::Color;
use crate::events::GridEvent;

/// Turns window input into grid requests, the way the page's width/height
/// fields, color picker and clear button used to.
pub struct InputHandler {
    palette: Vec<Color>,
    cursor: Option<(f64, f64)>,
}

impl InputHandler {
    pub fn new(palette: Vec<Color>) -> Self {
        Self {
            palette,
            cursor: None,
        }
    }

    /// `grid_cells` is the grid's current (width, height) in cells.
    pub fn handle_keyboard_input(&self, input: &KeyboardInput, grid_cells: (u32, u32)) -> Option<GridEvent> {
        match (input.state, input.virtual_keycode) {
            (ElementState::Pressed, Some(key_code)) => self.handle_key_press(key_code, grid_cells),
            _ => None,
        }
    }

    pub fn handle_key_press(&self, key_code: VirtualKeyCode, grid_cells: (u32, u32)) -> Option<GridEvent> {
        let (cols, rows) = grid_cells;

        match key_code {
            VirtualKeyCode::C | VirtualKeyCode::Delete => Some(GridEvent::ClearRequest),

            VirtualKeyCode::Right => Some(GridEvent::SetWidth(cols.saturating_add(1))),
            VirtualKeyCode::Left => Some(GridEvent::SetWidth(cols.saturating_sub(1).max(1))),
            VirtualKeyCode::Down => Some(GridEvent::SetHeight(rows.saturating_add(1))),
            VirtualKeyCode::Up => Some(GridEvent::SetHeight(rows.saturating_sub(1).max(1))),

            _ => {
                let slot = Self::palette_slot(key_code)?;
                self.palette.get(slot).copied().map(GridEvent::SetCurrentColor)
            }
        }
    }

    fn palette_slot(key_code: VirtualKeyCode) -> Option<usize> {
        match key_code {
            VirtualKeyCode::Key1 => Some(0),
            VirtualKeyCode::Key2 => Some(1),
            VirtualKeyCode::Key3 => Some(2),
            VirtualKeyCode::Key4 => Some(3),
            VirtualKeyCode::Key5 => Some(4),
            VirtualKeyCode::Key6 => Some(5),
            VirtualKeyCode::Key7 => Some(6),
            VirtualKeyCode::Key8 => Some(7),
            VirtualKeyCode::Key9 => Some(8),
            _ => None,
        }
    }

    /// Records the pointer position in surface pixels; `None` when the
    /// pointer is off the surface.
    pub fn handle_cursor_moved(&mut self, position: Option<(f64, f64)>) {
        self.cursor = position;
    }

    pub fn handle_mouse_input(&self, state: ElementState, button: MouseButton) -> Option<GridEvent> {
        if button != MouseButton::Left || state != ElementState::Pressed {
            return None;
        }
        self.cursor.map(|(x, y)| GridEvent::PointerClick { x, y })
    }
}
