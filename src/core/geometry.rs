//! Page-space geometry for text structures.
//!
//! Bounds are `Option<Rect>` throughout: `None` is the "no bounds" value of a
//! node that never received a glyph, and it is inert under union. Zero-area
//! rectangles are inert as well: a degenerate glyph never moves its word's
//! bounds.

use std::fmt;

/// Axis-aligned rectangle in page coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// Build from two corners, in any order.
    pub fn from_corners(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        let min_x = x0.min(x1);
        let min_y = y0.min(y1);
        Rect::new(min_x, min_y, x0.max(x1) - min_x, y0.max(y1) - min_y)
    }

    pub fn min_x(&self) -> f64 {
        self.x
    }

    pub fn min_y(&self) -> f64 {
        self.y
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// True when the rectangle encloses no area.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Smallest rectangle enclosing both.
    ///
    /// Raw union of two corners; use [`union_bounds`] to skip empty rectangles.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect::from_corners(
            self.min_x().min(other.min_x()),
            self.min_y().min(other.min_y()),
            self.max_x().max(other.max_x()),
            self.max_y().max(other.max_y()),
        )
    }

    /// Overlap test; touching edges count as intersecting.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min_x() <= other.max_x()
            && other.min_x() <= self.max_x()
            && self.min_y() <= other.max_y()
            && other.min_y() <= self.max_y()
    }

    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x() && x <= self.max_x() && y >= self.min_y() && y <= self.max_y()
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.2} {:.2} {:.2} {:.2}]",
            self.x, self.y, self.width, self.height
        )
    }
}

/// Union of two optional bounds. `None` or a zero-area rectangle on either
/// side is ignored.
pub fn union_bounds(a: Option<Rect>, b: Option<Rect>) -> Option<Rect> {
    let a = a.filter(|r| !r.is_empty());
    let b = b.filter(|r| !r.is_empty());
    match (a, b) {
        (Some(a), Some(b)) => Some(a.union(&b)),
        (a, None) => a,
        (None, b) => b,
    }
}

/// Union of every rectangle in the iterator, `None` when it yields nothing.
pub fn union_all<I>(rects: I) -> Option<Rect>
where
    I: IntoIterator<Item = Option<Rect>>,
{
    rects.into_iter().fold(None, union_bounds)
}

/// One element of an outline path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathElement {
    /// Start a new subpath
    MoveTo(f64, f64),
    /// Line to a point
    LineTo(f64, f64),
    /// Close the current subpath
    ClosePath,
}

impl fmt::Display for PathElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathElement::MoveTo(x, y) => write!(f, "M {} {}", x, y),
            PathElement::LineTo(x, y) => write!(f, "L {} {}", x, y),
            PathElement::ClosePath => write!(f, "Z"),
        }
    }
}

/// Closed path traced around a line's bounds, used by the UI to paint
/// selection and highlight backgrounds.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Outline {
    elements: Vec<PathElement>,
}

impl Outline {
    /// Empty outline, for nodes with no bounds.
    pub fn empty() -> Self {
        Outline::default()
    }

    /// Outline of a rectangle:
    /// ```text
    /// move_to(x, y)
    /// line_to(x + width, y)
    /// line_to(x + width, y + height)
    /// line_to(x, y + height)
    /// close
    /// ```
    pub fn from_rect(rect: &Rect) -> Self {
        Outline {
            elements: vec![
                PathElement::MoveTo(rect.min_x(), rect.min_y()),
                PathElement::LineTo(rect.max_x(), rect.min_y()),
                PathElement::LineTo(rect.max_x(), rect.max_y()),
                PathElement::LineTo(rect.min_x(), rect.max_y()),
                PathElement::ClosePath,
            ],
        }
    }

    pub fn from_bounds(bounds: Option<Rect>) -> Self {
        bounds.as_ref().map_or_else(Outline::empty, Outline::from_rect)
    }

    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Min/max box over the path points.
    pub fn bounding_box(&self) -> Option<Rect> {
        let mut points = self.elements.iter().filter_map(|el| match el {
            PathElement::MoveTo(x, y) | PathElement::LineTo(x, y) => Some((*x, *y)),
            PathElement::ClosePath => None,
        });
        let (x0, y0) = points.next()?;
        let (min_x, min_y, max_x, max_y) =
            points.fold((x0, y0, x0, y0), |(min_x, min_y, max_x, max_y), (x, y)| {
                (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
            });
        Some(Rect::from_corners(min_x, min_y, max_x, max_y))
    }
}

impl fmt::Display for Outline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for el in &self.elements {
            write!(f, "{} ", el)?;
        }
        Ok(())
    }
}
