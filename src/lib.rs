#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod error;
pub mod export;
pub mod history;
pub mod input;
pub mod panels;
pub mod scene;
pub mod shortcuts;
pub mod stroke;
pub mod style;
pub mod surface;

pub use app::SketchApp;
pub use config::SurfaceConfig;
pub use error::{ExportError, SurfaceError};
pub use history::StrokeHistory;
pub use input::{InputEvent, InputHandler};
pub use scene::{LayerKind, PathLayer, Scene};
pub use stroke::{Stroke, StrokeRef, StrokeStyle};
pub use style::StyleState;
pub use surface::{DrawState, DrawingSurface};
