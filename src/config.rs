use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::color::Color;
use crate::error::GridError;

pub const DEFAULT_CELL_PIXEL_SIZE: u32 = 10;
/// Major (red) grid lines are drawn every this many cells.
pub const CELLS_PER_MAJOR_LINE: u32 = 10;

/// Per-session settings. The scale is fixed once the grid is created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Physical pixels per logical cell.
    pub cell_pixel_size: u32,
    pub window_title: String,
    pub initial_width: Option<u32>,
    pub initial_height: Option<u32>,
    /// Colors bound to the number keys in the desktop host.
    pub palette: Vec<Color>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_pixel_size: DEFAULT_CELL_PIXEL_SIZE,
            window_title: "Pixel Grid".to_string(),
            initial_width: None,
            initial_height: None,
            palette: vec![
                Color::BLACK,
                Color::WHITE,
                Color::rgb(0xd9, 0x53, 0x4f),
                Color::rgb(0xf0, 0xad, 0x4e),
                Color::rgb(0xff, 0xeb, 0x3b),
                Color::rgb(0x5c, 0xb8, 0x5c),
                Color::rgb(0x5b, 0xc0, 0xde),
                Color::rgb(0x33, 0x7a, 0xb7),
                Color::rgb(0x8e, 0x44, 0xad),
            ],
        }
    }
}

impl GridConfig {
    pub fn from_json_str(json: &str) -> Result<Self, GridError> {
        let config: GridConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, GridError> {
        let contents = fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&contents)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GridError> {
        if self.cell_pixel_size == 0 {
            return Err(GridError::Config("cell_pixel_size must be greater than 0".to_string()));
        }
        Ok(())
    }

    /// Spacing of the red major grid lines, in physical pixels.
    pub fn major_line_spacing(&self) -> u32 {
        self.cell_pixel_size.saturating_mul(CELLS_PER_MAJOR_LINE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_grid() {
        let config = GridConfig::default();
        assert_eq!(config.cell_pixel_size, 10);
        assert_eq!(config.major_line_spacing(), 100);
        assert_eq!(config.palette[0], Color::BLACK);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config = GridConfig::from_json_str(r##"{"cell_pixel_size": 4, "palette": ["#fff", "red"]}"##).unwrap();
        assert_eq!(config.cell_pixel_size, 4);
        assert_eq!(config.palette, vec![Color::WHITE, Color::rgb(255, 0, 0)]);
        assert_eq!(config.window_title, "Pixel Grid");
        assert_eq!(config.initial_width, None);
    }

    #[test]
    fn zero_scale_is_rejected() {
        assert!(matches!(
            GridConfig::from_json_str(r#"{"cell_pixel_size": 0}"#),
            Err(GridError::Config(_))
        ));
    }

    #[test]
    fn bad_palette_color_is_a_json_error() {
        assert!(matches!(
            GridConfig::from_json_str(r#"{"palette": ["not-a-color"]}"#),
            Err(GridError::Json(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            GridConfig::load("/definitely/not/here.json"),
            Err(GridError::Io(_))
        ));
    }
}
