//! Layout strategies turning placement requests into placed tags.
//!
//! Two strategies are available:
//! - [`arena_layout`]: random, non-overlapping scatter by rejection sampling;
//! - [`column_layout`]: deterministic column grid.
//!
//! [`LayoutStrategy`] selects one of them at configuration time.

mod arena;
mod column;

use std::fmt;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::{Canvas, FamilyAndSize, PlacedTag};

pub use arena::{arena_layout, min_separation, ArenaParams, DEFAULT_MAX_ATTEMPTS};
pub use column::{column_layout, ColumnParams};

/// Why a column layout ran out of room.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OverflowCause {
    /// Every column is full.
    OutOfColumns { columns: usize },
    /// A single tag does not fit the column width.
    TagWiderThanColumn { size: f64, column_width: f64 },
    /// A single tag does not fit the usable page height.
    TagTallerThanPage { size: f64, usable_height: f64 },
    /// Margins leave no width for the columns.
    NoColumnWidth { column_width: f64 },
}

impl fmt::Display for OverflowCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::OutOfColumns { columns } => write!(f, "all {columns} columns are full"),
            Self::TagWiderThanColumn { size, column_width } => write!(
                f,
                "{size} mm tag is wider than the {column_width:.2} mm column"
            ),
            Self::TagTallerThanPage {
                size,
                usable_height,
            } => write!(
                f,
                "{size} mm tag is taller than the {usable_height:.2} mm usable height"
            ),
            Self::NoColumnWidth { column_width } => {
                write!(f, "columns would be {column_width:.2} mm wide")
            }
        }
    }
}

/// Errors returned by the layout strategies.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("no tag families requested")]
    NoRequests,
    #[error("a {border} mm border leaves no usable area on a {width}x{height} mm canvas")]
    NoUsableArea { width: f64, height: f64, border: f64 },
    #[error(
        "arena cannot hold {requested} tags: placed {placed} before {attempts} attempts failed \
         (minimum separation {separation:.2} mm)"
    )]
    CapacityExceeded {
        placed: usize,
        requested: usize,
        attempts: usize,
        separation: f64,
    },
    #[error("column layout cannot hold {requested} tags: placed {placed}, {cause}")]
    LayoutOverflow {
        placed: usize,
        requested: usize,
        cause: OverflowCause,
    },
}

impl LayoutError {
    pub(crate) fn no_usable_area(canvas: &Canvas) -> Self {
        Self::NoUsableArea {
            width: canvas.width,
            height: canvas.height,
            border: canvas.border,
        }
    }
}

/// The active layout strategy and its parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutStrategy {
    Arena(ArenaParams),
    Column(ColumnParams),
}

impl LayoutStrategy {
    /// Place every requested tag on `canvas`.
    ///
    /// The arena strategy seeds its generator from `ArenaParams::seed` when
    /// set, and from the operating system otherwise.
    pub fn layout(
        &self,
        requests: &[FamilyAndSize],
        canvas: &Canvas,
    ) -> Result<Vec<PlacedTag>, LayoutError> {
        match self {
            Self::Arena(params) => {
                let mut rng = match params.seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_os_rng(),
                };
                arena_layout(requests, canvas, params, &mut rng)
            }
            Self::Column(params) => column_layout(requests, canvas, params),
        }
    }

    /// Short name used in logs and reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Arena(_) => "arena",
            Self::Column(_) => "column",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagsheet_families::builtins::TAG16H5;

    #[test]
    fn seeded_arena_is_reproducible() {
        let requests = [FamilyAndSize::full(&TAG16H5, 10.0).expect("request")];
        let strategy = LayoutStrategy::Arena(ArenaParams {
            seed: Some(7),
            ..ArenaParams::new(12)
        });
        let a = strategy.layout(&requests, &Canvas::default()).expect("layout");
        let b = strategy.layout(&requests, &Canvas::default()).expect("layout");
        assert_eq!(a, b);
    }

    #[test]
    fn strategy_dispatches_to_column_layout() {
        let requests = [FamilyAndSize::new(&TAG16H5, 10.0, 0, 3).expect("request")];
        let strategy = LayoutStrategy::Column(ColumnParams::new(2));
        let placed = strategy
            .layout(&requests, &Canvas::default())
            .expect("layout");
        assert_eq!(placed.len(), 3);
        assert!(placed.iter().all(|t| t.slot.is_some()));
        assert_eq!(strategy.name(), "column");
    }

    #[test]
    fn strategy_json_is_tagged_by_kind() {
        let strategy: LayoutStrategy =
            serde_json::from_str(r#"{"kind": "arena", "count": 5, "seed": 3}"#).expect("json");
        assert_eq!(
            strategy,
            LayoutStrategy::Arena(ArenaParams {
                seed: Some(3),
                ..ArenaParams::new(5)
            })
        );
    }
}
