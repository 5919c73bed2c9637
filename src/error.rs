use thiserror::Error;

/// Which side of the grid a dimension applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Width => write!(f, "width"),
            Axis::Height => write!(f, "height"),
        }
    }
}

#[derive(Error, Debug)]
pub enum GridError {
    #[error("Could not create a {width}x{height} drawing surface")]
    UnsupportedSurface { width: u32, height: u32 },
    #[error("Please specify a valid {axis} (got {value})")]
    InvalidDimension { axis: Axis, value: f64 },
    #[error("Invalid color: {0}")]
    InvalidColor(String),
    #[error("Unknown palette key: {0}")]
    UnknownPaletteKey(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
