//! Seam between the layout engine and drawing backends.

use std::convert::Infallible;

use crate::PlacedTag;

/// A drawing surface that can print placed tags.
pub trait TagSurface {
    type Error;

    /// Draw one tag centered at `tag.center` with side `tag.size`.
    fn draw_tag(&mut self, tag: &PlacedTag) -> Result<(), Self::Error>;
}

/// Collects tags instead of drawing them.
impl TagSurface for Vec<PlacedTag> {
    type Error = Infallible;

    fn draw_tag(&mut self, tag: &PlacedTag) -> Result<(), Self::Error> {
        self.push(*tag);
        Ok(())
    }
}

/// Draw every tag in order, stopping at the first failure.
pub fn render_tags<S: TagSurface + ?Sized>(
    surface: &mut S,
    tags: &[PlacedTag],
) -> Result<(), S::Error> {
    tags.iter().try_for_each(|tag| surface.draw_tag(tag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point;
    use tagsheet_families::builtins::TAG16H5;

    struct FailAfter(usize);

    impl TagSurface for FailAfter {
        type Error = String;

        fn draw_tag(&mut self, tag: &PlacedTag) -> Result<(), String> {
            if self.0 == 0 {
                return Err(format!("no room for tag {}", tag.index));
            }
            self.0 -= 1;
            Ok(())
        }
    }

    fn tags(n: usize) -> Vec<PlacedTag> {
        (0..n)
            .map(|index| PlacedTag {
                family: &TAG16H5,
                index,
                code: TAG16H5.codes[index],
                center: Point::new(index as f64, 0.0),
                size: 1.0,
                slot: None,
            })
            .collect()
    }

    #[test]
    fn renders_in_order() {
        let mut sink: Vec<PlacedTag> = Vec::new();
        render_tags(&mut sink, &tags(3)).expect("infallible");
        assert_eq!(sink, tags(3));
    }

    #[test]
    fn stops_at_first_error() {
        let mut surface = FailAfter(2);
        assert_eq!(
            render_tags(&mut surface, &tags(5)),
            Err("no room for tag 2".to_string())
        );
    }
}
