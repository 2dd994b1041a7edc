//! Printable fiducial tag sheets.
//!
//! `tagsheet` places AprilTag and ArUco markers on a page, either scattered
//! at random (arena layout) or packed into columns, and writes the result as
//! a print-ready SVG.
//!
//! ```no_run
//! use tagsheet::{generate_sheet, LayoutOptions, SheetConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SheetConfig::new(
//!     "tags.svg",
//!     vec!["tag36h11:30:0-20".into(), "tag16h5:15".into()],
//!     LayoutOptions {
//!         column_number: 3,
//!         ..LayoutOptions::default()
//!     },
//! );
//! let report = generate_sheet(&config)?;
//! println!("placed {} tags", report.tags.len());
//! # Ok(())
//! # }
//! ```
//!
//! The building blocks live in [`core`], [`families`] and [`svg`].

mod logger;
mod sheet;

pub use logger::init_with_level;
#[cfg(feature = "tracing")]
pub use logger::init_tracing;
pub use sheet::{generate_sheet, SheetConfig, SheetError, SheetIoError, SheetReport, DEFAULT_DPI};

pub use tagsheet_core as core;
pub use tagsheet_core::{
    build_requests, Canvas, ConfigError, FamilyAndSize, LayoutError, LayoutOptions,
    LayoutStrategy, ParseError, PlacedTag,
};
pub use tagsheet_families as families;
pub use tagsheet_svg as svg;
pub use tagsheet_svg::RenderError;
