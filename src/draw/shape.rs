//! Shape definitions and gesture geometry rules.

use super::paint::PaintAttributes;
use crate::util::Rect;

/// A point in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box with `left <= right` and `top <= bottom`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Bounds {
    /// Zero-area box sitting on a single point.
    pub fn degenerate(at: Point) -> Self {
        Self::spanning(at, at)
    }

    /// Box covering two corners given in any order.
    pub fn spanning(a: Point, b: Point) -> Self {
        Self {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            right: a.x.max(b.x),
            bottom: a.y.max(b.y),
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }
}

/// Geometry of one drawing step.
///
/// Each variant carries only its own geometry; paint lives next to it in
/// [`Step`](super::history::Step).
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Freehand polyline, grows by one point per drag event
    Curve {
        /// Points in the order they were traced
        points: Vec<Point>,
    },
    /// Rectangle outline spanning the press anchor and the latest drag point
    Rectangle {
        /// Current box
        bounds: Bounds,
        /// Press location, fixed for the whole gesture
        anchor: Point,
    },
    /// Ellipse outline inscribed in a box spanning anchor and drag point
    Oval {
        /// Current box
        bounds: Bounds,
        /// Press location, fixed for the whole gesture
        anchor: Point,
    },
    /// Text placed with its baseline starting at `anchor`
    Label {
        /// Baseline start
        anchor: Point,
        /// Label content (may be empty)
        text: String,
    },
}

impl Shape {
    /// Curve seeded with the press point.
    pub fn curve(start: Point) -> Self {
        Shape::Curve {
            points: vec![start],
        }
    }

    /// Zero-area rectangle anchored at the press point.
    pub fn rectangle(anchor: Point) -> Self {
        Shape::Rectangle {
            bounds: Bounds::degenerate(anchor),
            anchor,
        }
    }

    /// Zero-area oval anchored at the press point.
    pub fn oval(anchor: Point) -> Self {
        Shape::Oval {
            bounds: Bounds::degenerate(anchor),
            anchor,
        }
    }

    pub fn label(anchor: Point, text: impl Into<String>) -> Self {
        Shape::Label {
            anchor,
            text: text.into(),
        }
    }

    /// Applies one drag event to the shape.
    ///
    /// Curves append the point, rectangles and ovals recompute their box from
    /// the anchor. Labels are fixed at creation and ignore drags.
    pub fn extend_to(&mut self, point: Point) {
        match self {
            Shape::Curve { points } => points.push(point),
            Shape::Rectangle { bounds, anchor } | Shape::Oval { bounds, anchor } => {
                *bounds = Bounds::spanning(*anchor, point);
            }
            Shape::Label { .. } => {}
        }
    }

    /// Short variant name for log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Curve { .. } => "curve",
            Shape::Rectangle { .. } => "rectangle",
            Shape::Oval { .. } => "oval",
            Shape::Label { .. } => "label",
        }
    }

    /// Returns the axis-aligned pixel box this shape paints, expanded to cover stroke width.
    ///
    /// Hosts use it for damage hints. Returns `None` when nothing would be drawn
    /// (empty label text).
    pub fn bounding_box(&self, paint: &PaintAttributes) -> Option<Rect> {
        match self {
            Shape::Curve { points } => bounding_box_for_points(points, paint.width),
            Shape::Rectangle { bounds, .. } | Shape::Oval { bounds, .. } => {
                bounding_box_for_bounds(bounds, paint.width)
            }
            Shape::Label { anchor, text } => bounding_box_for_label(*anchor, text, paint),
        }
    }
}

fn stroke_padding(width: f64) -> f64 {
    (width / 2.0).ceil().max(1.0)
}

pub(crate) fn bounding_box_for_points(points: &[Point], width: f64) -> Option<Rect> {
    let first = points.first()?;
    let mut bounds = Bounds::degenerate(*first);
    for point in &points[1..] {
        bounds.left = bounds.left.min(point.x);
        bounds.top = bounds.top.min(point.y);
        bounds.right = bounds.right.max(point.x);
        bounds.bottom = bounds.bottom.max(point.y);
    }
    bounding_box_for_bounds(&bounds, width)
}

pub(crate) fn bounding_box_for_bounds(bounds: &Bounds, width: f64) -> Option<Rect> {
    let padding = stroke_padding(width);
    ensure_positive_rect(
        bounds.left - padding,
        bounds.top - padding,
        bounds.right + padding,
        bounds.bottom + padding,
    )
}

pub(crate) fn bounding_box_for_label(
    anchor: Point,
    text: &str,
    paint: &PaintAttributes,
) -> Option<Rect> {
    if text.is_empty() {
        return None;
    }

    // Use a tiny image surface for measurement; the layout is all we need.
    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 1, 1).ok()?;
    let ctx = cairo::Context::new(&surface).ok()?;
    let layout = pangocairo::functions::create_layout(&ctx);
    layout.set_font_description(Some(&paint.font.to_font_description(paint.text_size)));
    layout.set_text(text);

    let (ink_rect, _logical_rect) = layout.extents();
    let scale = pango::SCALE as f64;
    let baseline = layout.baseline() as f64 / scale;

    let left = anchor.x + ink_rect.x() as f64 / scale;
    let top = anchor.y - baseline + ink_rect.y() as f64 / scale;
    let right = left + ink_rect.width() as f64 / scale;
    let bottom = top + ink_rect.height() as f64 / scale;

    let padding = stroke_padding(paint.width);
    ensure_positive_rect(
        left - padding,
        top - padding,
        right + padding,
        bottom + padding,
    )
}

fn ensure_positive_rect(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Option<Rect> {
    let min_x = min_x.floor() as i32;
    let min_y = min_y.floor() as i32;
    let mut max_x = max_x.ceil() as i32;
    let mut max_y = max_y.ceil() as i32;
    if min_x == max_x {
        max_x = max_x.checked_add(1)?;
    }
    if min_y == max_y {
        max_y = max_y.checked_add(1)?;
    }
    Rect::from_min_max(min_x, min_y, max_x, max_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{FontDescriptor, color::BLACK};

    fn paint(width: f64) -> PaintAttributes {
        PaintAttributes::new(width, BLACK, 100.0, FontDescriptor::default())
    }

    #[test]
    fn curve_appends_each_drag_point() {
        let mut shape = Shape::curve(Point::new(1.0, 1.0));
        shape.extend_to(Point::new(2.0, 3.0));
        shape.extend_to(Point::new(5.0, 8.0));

        let Shape::Curve { points } = shape else {
            panic!("expected curve");
        };
        assert_eq!(
            points,
            vec![
                Point::new(1.0, 1.0),
                Point::new(2.0, 3.0),
                Point::new(5.0, 8.0)
            ]
        );
    }

    #[test]
    fn rectangle_box_is_recomputed_from_anchor() {
        let mut shape = Shape::rectangle(Point::new(10.0, 10.0));
        shape.extend_to(Point::new(30.0, 40.0));
        shape.extend_to(Point::new(2.0, 4.0));

        let Shape::Rectangle { bounds, anchor } = shape else {
            panic!("expected rectangle");
        };
        assert_eq!(anchor, Point::new(10.0, 10.0));
        assert_eq!(
            bounds,
            Bounds {
                left: 2.0,
                top: 4.0,
                right: 10.0,
                bottom: 10.0
            }
        );
    }

    #[test]
    fn oval_starts_degenerate_at_anchor() {
        let shape = Shape::oval(Point::new(7.0, 9.0));
        let Shape::Oval { bounds, .. } = shape else {
            panic!("expected oval");
        };
        assert!(bounds.is_degenerate());
        assert_eq!((bounds.left, bounds.top), (7.0, 9.0));
        assert_eq!((bounds.right, bounds.bottom), (7.0, 9.0));
    }

    #[test]
    fn label_ignores_drags() {
        let mut shape = Shape::label(Point::new(3.0, 4.0), "hi");
        let before = shape.clone();
        shape.extend_to(Point::new(100.0, 100.0));
        assert_eq!(shape, before);
    }

    #[test]
    fn curve_bounding_box_expands_with_width() {
        let shape = Shape::Curve {
            points: vec![Point::new(10.0, 20.0), Point::new(30.0, 40.0)],
        };

        let rect = shape.bounding_box(&paint(6.0)).expect("curve should have bounds");
        assert_eq!(rect.x, 7);
        assert_eq!(rect.y, 17);
        assert_eq!(rect.width, 26);
        assert_eq!(rect.height, 26);
    }

    #[test]
    fn degenerate_rectangle_still_has_bounds() {
        let shape = Shape::rectangle(Point::new(5.0, 5.0));
        let rect = shape.bounding_box(&paint(1.0)).expect("stroke padding gives area");
        assert!(rect.is_valid());
        assert_eq!((rect.x, rect.y), (4, 4));
    }

    #[test]
    fn empty_label_has_no_bounds() {
        let shape = Shape::label(Point::new(0.0, 0.0), "");
        assert!(shape.bounding_box(&paint(3.0)).is_none());
    }

    #[test]
    fn label_bounding_box_sits_above_baseline() {
        let shape = Shape::label(Point::new(10.0, 120.0), "Hello");
        let rect = shape
            .bounding_box(&paint(3.0))
            .expect("label should have bounds");
        assert!(rect.width > 0);
        assert!(rect.height > 0);
        assert!(rect.y < 120);
    }
}
