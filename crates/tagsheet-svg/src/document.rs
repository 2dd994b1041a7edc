//! In-memory SVG document for one sheet.

use std::fmt::Write as _;

use tagsheet_core::{PlacedTag, TagSurface};

use crate::RenderError;

const MM_PER_INCH: f64 = 25.4;

/// An SVG sheet under construction.
///
/// Geometry is emitted in device dots (`dpi / 25.4` dots per millimeter) so
/// every cell edge lands on a whole dot; the root element carries the
/// physical size in millimeters.
#[derive(Clone, Debug)]
pub struct SvgDocument {
    width: f64,
    height: f64,
    dpi: u32,
    body: String,
    tags: usize,
}

impl SvgDocument {
    pub fn new(width: f64, height: f64, dpi: u32) -> Result<Self, RenderError> {
        if dpi == 0 {
            return Err(RenderError::InvalidDpi);
        }
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(RenderError::InvalidCanvas { width, height });
        }
        Ok(Self {
            width,
            height,
            dpi,
            body: String::new(),
            tags: 0,
        })
    }

    /// Dots per millimeter.
    #[inline]
    pub fn scale(&self) -> f64 {
        f64::from(self.dpi) / MM_PER_INCH
    }

    #[inline]
    fn dots(&self, mm: f64) -> i64 {
        (mm * self.scale()).round() as i64
    }

    /// Number of tags drawn so far.
    pub fn tag_count(&self) -> usize {
        self.tags
    }

    /// Append one tag: a black square with its white cells punched out.
    ///
    /// White cells are merged into horizontal runs per grid row.
    pub fn push_tag(&mut self, tag: &PlacedTag) -> Result<(), RenderError> {
        let family = tag.family;
        let grid = family.grid_size();
        let cell = tag.size / grid as f64;
        let origin = tag.top_left();
        let xs: Vec<i64> = (0..=grid)
            .map(|i| self.dots(origin.x + i as f64 * cell))
            .collect();
        let ys: Vec<i64> = (0..=grid)
            .map(|i| self.dots(origin.y + i as f64 * cell))
            .collect();

        writeln!(
            self.body,
            r#"  <g class="tag" data-family="{}" data-index="{}">"#,
            family.name, tag.index
        )?;
        writeln!(
            self.body,
            r#"    <rect x="{}" y="{}" width="{}" height="{}" fill="black"/>"#,
            xs[0],
            ys[0],
            xs[grid] - xs[0],
            ys[grid] - ys[0]
        )?;
        for gy in 0..grid {
            let mut gx = 0;
            while gx < grid {
                if family.is_black(tag.code, gx, gy) {
                    gx += 1;
                    continue;
                }
                let start = gx;
                while gx < grid && !family.is_black(tag.code, gx, gy) {
                    gx += 1;
                }
                writeln!(
                    self.body,
                    r#"    <rect x="{}" y="{}" width="{}" height="{}" fill="white"/>"#,
                    xs[start],
                    ys[gy],
                    xs[gx] - xs[start],
                    ys[gy + 1] - ys[gy]
                )?;
            }
        }
        writeln!(self.body, "  </g>")?;
        self.tags += 1;
        Ok(())
    }

    /// Render the complete document.
    pub fn to_svg_string(&self) -> Result<String, RenderError> {
        let w = self.dots(self.width);
        let h = self.dots(self.height);
        let mut svg = String::with_capacity(self.body.len() + 512);
        writeln!(svg, r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#)?;
        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{}mm" height="{}mm" viewBox="0 0 {} {}" shape-rendering="crispEdges">"#,
            self.width, self.height, w, h
        )?;
        writeln!(
            svg,
            r#"  <rect x="0" y="0" width="{w}" height="{h}" fill="white"/>"#
        )?;
        svg.push_str(&self.body);
        writeln!(svg, "</svg>")?;
        Ok(svg)
    }
}

impl TagSurface for SvgDocument {
    type Error = RenderError;

    fn draw_tag(&mut self, tag: &PlacedTag) -> Result<(), RenderError> {
        self.push_tag(tag)
    }
}
