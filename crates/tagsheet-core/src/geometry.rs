//! Page geometry in millimeters.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// A 2-D position on the page, in millimeters. `y` grows downward.
pub type Point = Point2<f64>;

/// Axis-aligned rectangle `[min.x, max.x] × [min.y, max.y]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Inclusive containment test.
    #[inline]
    pub fn contains(&self, p: &Point) -> bool {
        (self.min.x..=self.max.x).contains(&p.x) && (self.min.y..=self.max.y).contains(&p.y)
    }
}

fn default_width() -> f64 {
    210.0
}

fn default_height() -> f64 {
    297.0
}

fn default_border() -> f64 {
    20.0
}

/// The printed page: an A4 sheet with a 20 mm border by default.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    /// Margin kept free along every page edge.
    #[serde(default = "default_border")]
    pub border: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            border: default_border(),
        }
    }
}

impl Canvas {
    pub fn new(width: f64, height: f64, border: f64) -> Self {
        Self {
            width,
            height,
            border,
        }
    }

    /// The canvas rectangle inset by the border.
    ///
    /// Returns `None` when the border leaves no area of positive size, when the
    /// border is negative (the area would extend past the page), or when any
    /// dimension is not finite.
    pub fn usable_area(&self) -> Option<Rect> {
        if !(self.width.is_finite() && self.height.is_finite() && self.border.is_finite()) {
            return None;
        }
        if self.border < 0.0 {
            return None;
        }
        let rect = Rect {
            min: Point::new(self.border, self.border),
            max: Point::new(self.width - self.border, self.height - self.border),
        };
        (rect.width() > 0.0 && rect.height() > 0.0).then_some(rect)
    }
}
