//! Column layout: a deterministic grid of tags split into page columns.

use log::debug;
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

use super::{LayoutError, OverflowCause};
use crate::{Canvas, FamilyAndSize, GridSlot, PlacedTag, Point};

const EPS: f64 = 1e-9;

fn default_tag_border() -> f64 {
    0.2
}

fn default_family_margin() -> f64 {
    2.0
}

/// Parameters of the column strategy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColumnParams {
    /// Number of page columns.
    pub columns: usize,
    /// Gap between neighbouring tags inside a column, in mm.
    #[serde(default = "default_tag_border")]
    pub tag_border: f64,
    /// Gap between columns and between consecutive requests, in mm.
    #[serde(default = "default_family_margin")]
    pub family_margin: f64,
}

impl ColumnParams {
    pub fn new(columns: usize) -> Self {
        Self {
            columns,
            tag_border: default_tag_border(),
            family_margin: default_family_margin(),
        }
    }
}

struct Cursor {
    column: usize,
    row: usize,
    /// Top edge of the next row, in mm.
    top: f64,
    empty: bool,
}

/// Lay out every code of every request in columns, top to bottom.
///
/// Each request starts on a fresh row; rows hold as many tags as fit the
/// column width. When a row would cross the bottom border the layout moves
/// to the next column.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(requests, canvas), fields(columns = params.columns))
)]
pub fn column_layout(
    requests: &[FamilyAndSize],
    canvas: &Canvas,
    params: &ColumnParams,
) -> Result<Vec<PlacedTag>, LayoutError> {
    if requests.is_empty() {
        return Err(LayoutError::NoRequests);
    }
    let area = canvas
        .usable_area()
        .ok_or_else(|| LayoutError::no_usable_area(canvas))?;

    let requested: usize = requests.iter().map(FamilyAndSize::len).sum();
    let overflow = |placed: usize, cause: OverflowCause| LayoutError::LayoutOverflow {
        placed,
        requested,
        cause,
    };

    let n = params.columns as f64;
    let column_width = (area.width() - (n - 1.0) * params.family_margin) / n;
    if params.columns == 0 || !(column_width > 0.0) {
        return Err(overflow(0, OverflowCause::NoColumnWidth { column_width }));
    }
    debug!(
        "column: {} tags in {} columns of {:.2} mm",
        requested, params.columns, column_width
    );

    let mut out = Vec::with_capacity(requested);
    let mut cursor = Cursor {
        column: 0,
        row: 0,
        top: area.min.y,
        empty: true,
    };

    for request in requests {
        let size = request.size();
        if size > area.height() + EPS {
            return Err(overflow(
                out.len(),
                OverflowCause::TagTallerThanPage {
                    size,
                    usable_height: area.height(),
                },
            ));
        }
        let pitch = size + params.tag_border;
        let per_row = ((column_width + params.tag_border + EPS) / pitch).floor() as usize;
        if per_row == 0 {
            return Err(overflow(
                out.len(),
                OverflowCause::TagWiderThanColumn { size, column_width },
            ));
        }
        if !cursor.empty {
            // previous block already advanced by one pitch
            cursor.top += params.family_margin - params.tag_border;
        }

        let mut slot = 0usize;
        for index in request.indices() {
            if slot == 0 && cursor.top + size > area.max.y + EPS {
                cursor.column += 1;
                cursor.row = 0;
                cursor.top = area.min.y;
                if cursor.column >= params.columns {
                    return Err(overflow(
                        out.len(),
                        OverflowCause::OutOfColumns {
                            columns: params.columns,
                        },
                    ));
                }
            }

            let left = area.min.x + cursor.column as f64 * (column_width + params.family_margin);
            let family = request.family();
            out.push(PlacedTag {
                family,
                index,
                code: family.codes[index],
                center: Point::new(
                    left + slot as f64 * pitch + size / 2.0,
                    cursor.top + size / 2.0,
                ),
                size,
                slot: Some(GridSlot {
                    column: cursor.column,
                    row: cursor.row,
                }),
            });
            cursor.empty = false;

            slot += 1;
            if slot == per_row {
                slot = 0;
                cursor.top += pitch;
                cursor.row += 1;
            }
        }
        if slot > 0 {
            cursor.top += pitch;
            cursor.row += 1;
        }
    }

    debug!("column: used {} of {} columns", cursor.column + 1, params.columns);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tagsheet_families::builtins::{TAG16H5, TAG36H11};

    fn assert_no_overlap_and_contained(placed: &[PlacedTag], canvas: &Canvas) {
        let area = canvas.usable_area().expect("area");
        for (i, a) in placed.iter().enumerate() {
            let tl = a.top_left();
            assert!(tl.x >= area.min.x - EPS && tl.y >= area.min.y - EPS);
            assert!(tl.x + a.size <= area.max.x + 1e-6 && tl.y + a.size <= area.max.y + 1e-6);
            for b in &placed[i + 1..] {
                assert!(!a.overlaps(b), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn fills_rows_left_to_right_then_down() {
        // usable 170 mm wide; 2 columns of 84 mm; 20 mm tags + 0.2 -> 4 per row
        let requests = [FamilyAndSize::new(&TAG36H11, 20.0, 0, 6).expect("request")];
        let canvas = Canvas::default();
        let placed = column_layout(&requests, &canvas, &ColumnParams::new(2)).expect("layout");
        assert_eq!(placed.len(), 6);

        assert_relative_eq!(placed[0].center.x, 30.0, epsilon = 1e-9);
        assert_relative_eq!(placed[0].center.y, 30.0, epsilon = 1e-9);
        assert_relative_eq!(placed[1].center.x, 50.2, epsilon = 1e-9);
        assert_eq!(placed[3].slot, Some(GridSlot { column: 0, row: 0 }));
        assert_eq!(placed[4].slot, Some(GridSlot { column: 0, row: 1 }));
        assert_relative_eq!(placed[4].center.y, 50.2, epsilon = 1e-9);
        assert_no_overlap_and_contained(&placed, &canvas);
    }

    #[test]
    fn spills_into_the_next_column() {
        // 100x100 page, 10 mm border: 80 mm usable; 2 columns of 39 mm.
        // 30 mm tags: one per row, two rows per column.
        let requests = [FamilyAndSize::new(&TAG36H11, 30.0, 0, 4).expect("request")];
        let canvas = Canvas::new(100.0, 100.0, 10.0);
        let params = ColumnParams {
            family_margin: 2.0,
            tag_border: 1.0,
            ..ColumnParams::new(2)
        };
        let placed = column_layout(&requests, &canvas, &params).expect("layout");
        let slots: Vec<(usize, usize)> = placed
            .iter()
            .map(|t| t.slot.map(|s| (s.column, s.row)).expect("slot"))
            .collect();
        assert_eq!(slots, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_relative_eq!(placed[2].center.x, 10.0 + 39.0 + 2.0 + 15.0, epsilon = 1e-9);
        assert_no_overlap_and_contained(&placed, &canvas);
    }

    #[test]
    fn requests_start_on_fresh_rows_separated_by_margin() {
        let requests = [
            FamilyAndSize::new(&TAG36H11, 10.0, 0, 1).expect("request"),
            FamilyAndSize::new(&TAG16H5, 10.0, 0, 1).expect("request"),
        ];
        let canvas = Canvas::default();
        let params = ColumnParams::new(1);
        let placed = column_layout(&requests, &canvas, &params).expect("layout");
        assert_relative_eq!(placed[0].center.y, 25.0, epsilon = 1e-9);
        // bottom of first tag (30) + family margin (2) + half size (5)
        assert_relative_eq!(placed[1].center.y, 37.0, epsilon = 1e-9);
        assert_relative_eq!(placed[1].center.x, placed[0].center.x, epsilon = 1e-9);
        assert_eq!(placed[1].slot, Some(GridSlot { column: 0, row: 1 }));
    }

    #[test]
    fn whole_family_fits_on_a_sheet() {
        let requests = [
            FamilyAndSize::full(&TAG16H5, 15.0).expect("request"),
            FamilyAndSize::new(&TAG36H11, 8.0, 0, 100).expect("request"),
        ];
        let canvas = Canvas::default();
        let placed = column_layout(&requests, &canvas, &ColumnParams::new(3)).expect("layout");
        assert_eq!(placed.len(), 130);
        assert_no_overlap_and_contained(&placed, &canvas);
    }

    #[test]
    fn too_many_tags_overflow() {
        let requests = [FamilyAndSize::full(&TAG36H11, 30.0).expect("request")];
        let err = column_layout(&requests, &Canvas::default(), &ColumnParams::new(2)).unwrap_err();
        match err {
            LayoutError::LayoutOverflow {
                placed,
                requested,
                cause,
            } => {
                assert_eq!(requested, 587);
                assert!(placed > 0 && placed < requested);
                assert_eq!(cause, OverflowCause::OutOfColumns { columns: 2 });
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn tag_wider_than_column_overflows() {
        let requests = [FamilyAndSize::new(&TAG36H11, 60.0, 0, 1).expect("request")];
        let err = column_layout(&requests, &Canvas::default(), &ColumnParams::new(4)).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::LayoutOverflow {
                cause: OverflowCause::TagWiderThanColumn { .. },
                ..
            }
        ));
    }

    #[test]
    fn margins_wider_than_page_overflow() {
        let requests = [FamilyAndSize::new(&TAG36H11, 5.0, 0, 1).expect("request")];
        let params = ColumnParams {
            family_margin: 100.0,
            ..ColumnParams::new(3)
        };
        let err = column_layout(&requests, &Canvas::default(), &params).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::LayoutOverflow {
                cause: OverflowCause::NoColumnWidth { .. },
                placed: 0,
                ..
            }
        ));
    }
}
