//! Placement engine for printable fiducial tag sheets.
//!
//! This crate is intentionally small and purely geometric. It turns
//! `name:size[:range]` specifications into [`FamilyAndSize`] requests and
//! places every requested tag on a [`Canvas`] with one of two strategies:
//!
//! - **arena**: random, non-overlapping scatter (rejection sampling with a
//!   bounded attempt budget),
//! - **column**: deterministic column grid.
//!
//! Drawing is delegated to any [`TagSurface`] implementation.
//!
//! ```
//! use tagsheet_core::{build_requests, Canvas, LayoutOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let requests = build_requests(&["tag36h11:20:0-8"])?;
//! let strategy = LayoutOptions {
//!     column_number: 2,
//!     ..LayoutOptions::default()
//! }
//! .strategy()?;
//! let placed = strategy.layout(&requests, &Canvas::default())?;
//! assert_eq!(placed.len(), 8);
//! # Ok(())
//! # }
//! ```

mod collision;
mod config;
mod geometry;
pub mod layout;
mod placed;
mod render;
mod request;

pub use collision::touches;
pub use config::{ConfigError, LayoutOptions};
pub use geometry::{Canvas, Point, Rect};
pub use layout::{
    arena_layout, column_layout, ArenaParams, ColumnParams, LayoutError, LayoutStrategy,
    OverflowCause,
};
pub use placed::{GridSlot, PlacedTag};
pub use render::{render_tags, TagSurface};
pub use request::{build_requests, parse_family_and_size, FamilyAndSize, ParseError};

pub use tagsheet_families as families;
