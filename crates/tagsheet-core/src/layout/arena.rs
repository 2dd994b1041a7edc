//! Arena layout: random scatter with rejection sampling.

use log::{debug, info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

use super::LayoutError;
use crate::{touches, Canvas, FamilyAndSize, PlacedTag, Point, Rect};

/// Candidate draws allowed per tag before the arena is declared full.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

fn default_max_attempts() -> usize {
    DEFAULT_MAX_ATTEMPTS
}

/// Parameters of the arena strategy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaParams {
    /// Number of tag instances to scatter.
    pub count: usize,
    /// Candidate draws per tag before giving up with `CapacityExceeded`.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
    /// Seed for reproducible sheets.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl ArenaParams {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
        }
    }
}

/// Minimum center distance between any two arena tags.
///
/// This is the diagonal of the largest requested tag: two squares whose
/// centers are at least this far apart cannot overlap.
pub fn min_separation(requests: &[FamilyAndSize]) -> f64 {
    requests
        .iter()
        .map(FamilyAndSize::size)
        .fold(0.0, f64::max)
        * std::f64::consts::SQRT_2
}

/// Scatter `params.count` tags inside the usable area of `canvas`.
///
/// Requests are used round-robin; the k-th use of a request takes the k-th
/// code of its range, wrapping around. Output is in placement order.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(requests, canvas, rng), fields(count = params.count))
)]
pub fn arena_layout<R: Rng>(
    requests: &[FamilyAndSize],
    canvas: &Canvas,
    params: &ArenaParams,
    rng: &mut R,
) -> Result<Vec<PlacedTag>, LayoutError> {
    if requests.is_empty() {
        return Err(LayoutError::NoRequests);
    }
    let area = canvas
        .usable_area()
        .ok_or_else(|| LayoutError::no_usable_area(canvas))?;
    let separation = min_separation(requests);
    debug!(
        "arena: {} tags in {:.1}x{:.1} mm, separation {:.2} mm",
        params.count,
        area.width(),
        area.height(),
        separation
    );

    let mut centers: Vec<Point> = Vec::with_capacity(params.count);
    let mut placed = Vec::with_capacity(params.count);
    let mut total_attempts = 0usize;

    for i in 0..params.count {
        let request = &requests[i % requests.len()];
        let index = request.index_at(i / requests.len());

        let Some((center, attempts)) =
            sample_free_point(&centers, &area, separation, params.max_attempts, rng)
        else {
            warn!(
                "arena: gave up after {} attempts with {} of {} tags placed",
                params.max_attempts, i, params.count
            );
            return Err(LayoutError::CapacityExceeded {
                placed: i,
                requested: params.count,
                attempts: params.max_attempts,
                separation,
            });
        };
        total_attempts += attempts;
        if is_crowded(attempts, params.max_attempts) {
            warn!(
                "arena: tag {} of {} needed {} of {} attempts; the sheet is nearly full",
                i + 1,
                params.count,
                attempts,
                params.max_attempts
            );
        }

        let family = request.family();
        centers.push(center);
        placed.push(PlacedTag {
            family,
            index,
            code: family.codes[index],
            center,
            size: request.size(),
            slot: None,
        });
    }

    info!(
        "arena: placed {} tags using {} candidate draws",
        placed.len(),
        total_attempts
    );
    Ok(placed)
}

/// True when a single tag used more than half of its attempt budget.
fn is_crowded(attempts: usize, max_attempts: usize) -> bool {
    attempts.saturating_mul(2) > max_attempts
}

/// Draw candidates until one is clear of every placed center.
///
/// Returns the accepted point and the number of draws it took.
fn sample_free_point<R: Rng>(
    centers: &[Point],
    area: &Rect,
    separation: f64,
    max_attempts: usize,
    rng: &mut R,
) -> Option<(Point, usize)> {
    (1..=max_attempts).find_map(|attempt| {
        let candidate = Point::new(
            rng.random_range(area.min.x..=area.max.x),
            rng.random_range(area.min.y..=area.max.y),
        );
        (!touches(centers, candidate, separation)).then_some((candidate, attempt))
    })
}
