//! A pixel-art drawing grid: fixed-size cells on an RGBA surface, colored by
//! clicks or programmatically, with artwork kept across resizes.

pub mod batch;
pub mod color;
pub mod config;
pub mod error;
pub mod events;
pub mod graphics;
pub mod grid;
pub mod input;
pub mod surface;
pub mod widget;

pub use batch::{BatchEntry, BatchRequest};
pub use color::Color;
pub use config::GridConfig;
pub use error::{Axis, GridError};
pub use events::{GridEvent, Listeners, Notification};
pub use graphics::CellAddress;
pub use grid::{validate_dimension, GridState};
pub use surface::{Snapshot, Surface};
pub use widget::{FixedLayout, LayoutHost, PixelGrid};
