use thiserror::Error;

/// Errors from mapping input onto the drawing surface
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SurfaceError {
    /// The surface has not been laid out on screen, so its position is unknown
    #[error("Drawing surface is not mounted")]
    NotMounted,
}

/// Errors that can occur while exporting the drawing
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Cannot export: {0}")]
    Surface(#[from] SurfaceError),

    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),

    /// A browser API call failed while triggering the download
    #[error("Browser download failed: {0}")]
    Web(String),
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;
