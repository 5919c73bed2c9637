use crate::color::Color;
use crate::config::GridConfig;
use crate::error::GridError;
use crate::surface::{Snapshot, Surface};

/// Largest width or height the public setters accept, in physical pixels.
pub const MAX_DIMENSION: f64 = 1000.0;

/// Returns true iff `value` is a finite number in `0..=1000`.
pub fn validate_dimension(value: f64) -> bool {
    value.is_finite() && (0.0..=MAX_DIMENSION).contains(&value)
}

/// Dimensions, scale and paint color of one grid, plus the raster copy
/// taken at the start of the last resize.
#[derive(Debug, Clone)]
pub struct GridState {
    pub width: u32,
    pub height: u32,
    current_color: Color,
    background_color: Color,
    snapshot: Option<Snapshot>,
    config: GridConfig,
}

impl GridState {
    pub fn new(config: GridConfig, width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            current_color: Color::BLACK,
            background_color: Color::BACKGROUND,
            snapshot: None,
            config,
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn cell_pixel_size(&self) -> u32 {
        self.config.cell_pixel_size
    }

    pub fn current_color(&self) -> Color {
        self.current_color
    }

    /// Any color is accepted.
    pub fn set_current_color(&mut self, color: Color) {
        self.current_color = color;
    }

    pub fn background_color(&self) -> Color {
        self.background_color
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    /// Captures the surface, then resizes whichever axes are `Some`.
    ///
    /// The capture always happens before the resize since resizing wipes the
    /// surface. A size the surface refuses leaves dimensions and the stored
    /// snapshot as they were.
    pub fn set_dimensions(
        &mut self,
        surface: &mut Surface,
        width: Option<u32>,
        height: Option<u32>,
    ) -> Result<(), GridError> {
        let new_width = width.unwrap_or(self.width);
        let new_height = height.unwrap_or(self.height);
        Surface::check_size(new_width, new_height)?;

        self.snapshot = Some(surface.capture());
        surface.resize(new_width, new_height)?;

        self.width = new_width;
        self.height = new_height;
        log::debug!("Grid resized to {}x{}", self.width, self.height);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_dimension_range() {
        assert!(validate_dimension(500.0));
        assert!(validate_dimension(0.0));
        assert!(validate_dimension(1000.0));
        assert!(!validate_dimension(-1.0));
        assert!(!validate_dimension(1001.0));
        assert!(!validate_dimension(f64::NAN));
        assert!(!validate_dimension(f64::INFINITY));
    }

    #[test]
    fn new_state_has_defaults() {
        let state = GridState::new(GridConfig::default(), 100, 50);
        assert_eq!(state.current_color(), Color::BLACK);
        assert_eq!(state.background_color(), Color::BACKGROUND);
        assert_eq!(state.cell_pixel_size(), 10);
        assert!(state.snapshot().is_none());
    }

    #[test]
    fn set_current_color_replaces_color() {
        let mut state = GridState::new(GridConfig::default(), 10, 10);
        state.set_current_color(Color::rgba(1, 2, 3, 0));
        assert_eq!(state.current_color(), Color::rgba(1, 2, 3, 0));
    }

    #[test]
    fn set_dimensions_only_touches_given_axis() {
        let mut state = GridState::new(GridConfig::default(), 100, 50);
        let mut surface = Surface::new(100, 50).unwrap();

        state.set_dimensions(&mut surface, Some(200), None).unwrap();
        assert_eq!((state.width, state.height), (200, 50));
        assert_eq!((surface.width(), surface.height()), (200, 50));

        state.set_dimensions(&mut surface, None, Some(80)).unwrap();
        assert_eq!((state.width, state.height), (200, 80));
    }

    #[test]
    fn set_dimensions_snapshots_before_resizing() {
        let mut state = GridState::new(GridConfig::default(), 20, 20);
        let mut surface = Surface::new(20, 20).unwrap();
        surface.fill_rect(0, 0, 20, 20, Color::WHITE);

        state.set_dimensions(&mut surface, Some(40), None).unwrap();

        let snapshot = state.snapshot().unwrap();
        assert_eq!((snapshot.width(), snapshot.height()), (20, 20));
        // The surface itself was wiped by the resize
        assert_eq!(surface.pixel(0, 0), Some(Color::TRANSPARENT));
    }

    #[test]
    fn refused_resize_keeps_dimensions() {
        let mut state = GridState::new(GridConfig::default(), 20, 20);
        let mut surface = Surface::new(20, 20).unwrap();
        let result = state.set_dimensions(&mut surface, Some(u32::MAX), None);
        assert!(matches!(result, Err(GridError::UnsupportedSurface { .. })));
        assert_eq!((state.width, state.height), (20, 20));
        assert!(state.snapshot().is_none());
    }

    #[test]
    fn refused_resize_keeps_previous_snapshot() {
        let mut state = GridState::new(GridConfig::default(), 20, 20);
        let mut surface = Surface::new(20, 20).unwrap();
        state.set_dimensions(&mut surface, Some(30), None).unwrap();
        let kept = state.snapshot().cloned();

        surface.fill_rect(0, 0, 30, 20, Color::WHITE);
        assert!(state.set_dimensions(&mut surface, Some(30_000), Some(30_000)).is_err());

        assert_eq!(state.snapshot().cloned(), kept);
        assert_eq!(surface.pixel(0, 0), Some(Color::WHITE));
    }
}
