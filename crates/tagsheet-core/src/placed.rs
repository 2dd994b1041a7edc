use serde::{Deserialize, Serialize};
use tagsheet_families::Family;

use crate::Point;

/// Column/row cell assigned by the column layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSlot {
    pub column: usize,
    /// Row index, counted from the top of `column`.
    pub row: usize,
}

/// One tag instance with its final position on the page.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacedTag {
    #[serde(with = "tagsheet_families::serde_name")]
    pub family: &'static Family,
    /// Index of the code inside the family.
    pub index: usize,
    pub code: u64,
    /// Center of the tag, in millimeters.
    pub center: Point,
    /// Side length of the black frame, in millimeters.
    pub size: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot: Option<GridSlot>,
}

impl PlacedTag {
    /// Top-left corner of the tag footprint.
    #[inline]
    pub fn top_left(&self) -> Point {
        Point::new(self.center.x - self.size / 2.0, self.center.y - self.size / 2.0)
    }

    /// True if the square footprints of `self` and `other` share interior area.
    pub fn overlaps(&self, other: &PlacedTag) -> bool {
        let reach = (self.size + other.size) / 2.0;
        (self.center.x - other.center.x).abs() < reach
            && (self.center.y - other.center.y).abs() < reach
    }
}
