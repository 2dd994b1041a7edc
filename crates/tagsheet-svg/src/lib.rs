//! SVG output for tag sheets.
//!
//! [`SvgDocument`] builds the sheet in memory; [`SvgSurface`] stages it next
//! to the output path and publishes it atomically on
//! [`finish`](SvgSurface::finish). Both implement
//! [`tagsheet_core::TagSurface`].

mod document;
mod surface;

use std::path::PathBuf;

pub use document::SvgDocument;
pub use surface::SvgSurface;

/// Errors produced while rendering or writing a sheet.
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("dpi must be positive")]
    InvalidDpi,
    #[error("invalid canvas {width}x{height} mm")]
    InvalidCanvas { width: f64, height: f64 },
    #[error("cannot create output for {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to move finished sheet to {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Format(#[from] std::fmt::Error),
}
