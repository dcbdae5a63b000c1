//! Shape definitions for the page.
//!
//! A [`Shape`] is a common record (id, origin, rotation, opacity, flags) wrapping
//! a closed [`ShapeKind`] union. Every operation that depends on the variant
//! matches exhaustively on `ShapeKind`.

mod arrow;
mod circle;
mod color;
mod freehand;
mod image;
mod line;
mod properties;
mod rectangle;
mod text;

pub use arrow::Arrow;
pub use circle::Circle;
pub use color::{ColorParseError, Rgba};
pub use freehand::Freehand;
pub use image::Image;
pub use line::{Line, LineCap, LineJoin};
pub use properties::{PropertyKey, ShapeProperty};
pub use rectangle::Rectangle;
pub use text::{Text, TextAlign};

use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

fn default_opacity() -> f64 {
    1.0
}

fn default_visible() -> bool {
    true
}

/// Variant-specific geometry and styling.
///
/// Serialized with an internal `"type"` tag so a persisted shape reads as
/// `{"type": "rectangle", "x": .., "width": .., ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle(Rectangle),
    Circle(Circle),
    Text(Text),
    Image(Image),
    Line(Line),
    Arrow(Arrow),
    Freehand(Freehand),
}

impl ShapeKind {
    /// Lowercase variant name, as used in the persisted `"type"` tag.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle(_) => "rectangle",
            ShapeKind::Circle(_) => "circle",
            ShapeKind::Text(_) => "text",
            ShapeKind::Image(_) => "image",
            ShapeKind::Line(_) => "line",
            ShapeKind::Arrow(_) => "arrow",
            ShapeKind::Freehand(_) => "freehand",
        }
    }

    /// Bounding box relative to the shape origin.
    pub fn local_bounds(&self) -> Rect {
        match self {
            ShapeKind::Rectangle(r) => r.local_bounds(),
            ShapeKind::Circle(c) => c.local_bounds(),
            ShapeKind::Text(t) => t.local_bounds(),
            ShapeKind::Image(i) => i.local_bounds(),
            ShapeKind::Line(l) => l.local_bounds(),
            ShapeKind::Arrow(a) => a.local_bounds(),
            ShapeKind::Freehand(f) => f.local_bounds(),
        }
    }
}

impl From<Rectangle> for ShapeKind {
    fn from(value: Rectangle) -> Self {
        ShapeKind::Rectangle(value)
    }
}

impl From<Circle> for ShapeKind {
    fn from(value: Circle) -> Self {
        ShapeKind::Circle(value)
    }
}

impl From<Text> for ShapeKind {
    fn from(value: Text) -> Self {
        ShapeKind::Text(value)
    }
}

impl From<Image> for ShapeKind {
    fn from(value: Image) -> Self {
        ShapeKind::Image(value)
    }
}

impl From<Line> for ShapeKind {
    fn from(value: Line) -> Self {
        ShapeKind::Line(value)
    }
}

impl From<Arrow> for ShapeKind {
    fn from(value: Arrow) -> Self {
        ShapeKind::Arrow(value)
    }
}

impl From<Freehand> for ShapeKind {
    fn from(value: Freehand) -> Self {
        ShapeKind::Freehand(value)
    }
}

/// A drawable object on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shape {
    pub(crate) id: ShapeId,
    /// Origin. Top-left for boxes, centre for circles, offset for point lists.
    pub x: f64,
    pub y: f64,
    /// Rotation in degrees.
    #[serde(default)]
    pub rotation: f64,
    /// Opacity (0.0 = fully transparent, 1.0 = fully opaque).
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    /// Locked shapes cannot be dragged.
    #[serde(default)]
    pub locked: bool,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(flatten)]
    pub kind: ShapeKind,
}

impl Shape {
    /// Create a new shape with a fresh id at `origin`.
    pub fn new(origin: Point, kind: impl Into<ShapeKind>) -> Self {
        Self {
            id: Uuid::new_v4(),
            x: origin.x,
            y: origin.y,
            rotation: 0.0,
            opacity: 1.0,
            locked: false,
            visible: true,
            kind: kind.into(),
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// Lowercase variant name.
    pub fn type_name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn set_origin(&mut self, origin: Point) {
        self.x = origin.x;
        self.y = origin.y;
    }

    /// Move the origin by `delta`.
    pub fn translate(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }

    /// Axis-aligned bounding box in page coordinates.
    pub fn bounds(&self) -> Rect {
        self.kind.local_bounds() + Vec2::new(self.x, self.y)
    }

    /// Check if a page-space point falls inside the bounding box.
    /// Rotation is not taken into account.
    pub fn contains(&self, point: Point) -> bool {
        let b = self.bounds();
        point.x >= b.x0 && point.x <= b.x1 && point.y >= b.y0 && point.y <= b.y1
    }
}

/// Bounding box of a flat `[x0, y0, x1, y1, ...]` point list.
/// An empty list yields a zero-size box at the origin.
pub(crate) fn flat_points_bounds(points: &[f64]) -> Rect {
    let mut pairs = flat_points(points);
    let Some(first) = pairs.next() else {
        return Rect::ZERO;
    };
    pairs.fold(Rect::from_points(first, first), |rect, p| {
        rect.union_pt(p)
    })
}

/// Iterate a flat point list as points. A trailing odd value is ignored.
pub fn flat_points(points: &[f64]) -> impl Iterator<Item = Point> + '_ {
    points.chunks_exact(2).map(|c| Point::new(c[0], c[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_shape_defaults() {
        let shape = Shape::new(Point::new(10.0, 20.0), Rectangle::new(100.0, 50.0));
        assert!((shape.x - 10.0).abs() < f64::EPSILON);
        assert!((shape.y - 20.0).abs() < f64::EPSILON);
        assert!((shape.opacity - 1.0).abs() < f64::EPSILON);
        assert!(shape.visible);
        assert!(!shape.locked);
        assert_eq!(shape.type_name(), "rectangle");
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Shape::new(Point::ZERO, Circle::new(5.0));
        let b = Shape::new(Point::ZERO, Circle::new(5.0));
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_bounds_every_variant() {
        let origin = Point::new(10.0, 10.0);
        let cases: Vec<(ShapeKind, Rect)> = vec![
            (Rectangle::new(100.0, 50.0).into(), Rect::new(10.0, 10.0, 110.0, 60.0)),
            (Circle::new(5.0).into(), Rect::new(5.0, 5.0, 15.0, 15.0)),
            (Text::new("hi").into(), Rect::new(10.0, 10.0, 210.0, 10.0 + 16.0 * 1.2)),
            (Image::new("a.png", 40.0, 30.0).into(), Rect::new(10.0, 10.0, 50.0, 40.0)),
            (Line::new(vec![0.0, 0.0, 20.0, -10.0]).into(), Rect::new(10.0, 0.0, 30.0, 10.0)),
            (Arrow::new(vec![5.0, 5.0, 0.0, 15.0]).into(), Rect::new(10.0, 15.0, 15.0, 25.0)),
            (
                Freehand::new(vec![0.0, 0.0, 3.0, 4.0, 6.0, 1.0]).into(),
                Rect::new(10.0, 10.0, 16.0, 14.0),
            ),
        ];
        for (kind, expected) in cases {
            let name = kind.name();
            let shape = Shape::new(origin, kind);
            let bounds = shape.bounds();
            assert!(
                (bounds.x0 - expected.x0).abs() < 1e-9
                    && (bounds.y0 - expected.y0).abs() < 1e-9
                    && (bounds.x1 - expected.x1).abs() < 1e-9
                    && (bounds.y1 - expected.y1).abs() < 1e-9,
                "{name}: got {bounds:?}, expected {expected:?}"
            );
        }
    }

    #[test]
    fn test_empty_points_bounds() {
        let shape = Shape::new(Point::new(3.0, 4.0), Line::new(Vec::new()));
        let bounds = shape.bounds();
        assert_eq!(bounds, Rect::new(3.0, 4.0, 3.0, 4.0));
    }

    #[test]
    fn test_contains() {
        let shape = Shape::new(Point::new(0.0, 0.0), Rectangle::new(100.0, 100.0));
        assert!(shape.contains(Point::new(50.0, 50.0)));
        assert!(!shape.contains(Point::new(150.0, 50.0)));
    }

    #[test]
    fn test_serde_uses_type_tag() {
        let shape = Shape::new(Point::new(1.0, 2.0), Circle::new(7.0));
        let json = serde_json::to_value(&shape).unwrap();
        assert_eq!(json["type"], "circle");
        assert_eq!(json["radius"], 7.0);
        assert_eq!(json["strokeWidth"], 2.0);

        let back: Shape = serde_json::from_value(json).unwrap();
        assert_eq!(back, shape);
    }

    #[test]
    fn test_deserialize_fills_common_defaults() {
        let json = r##"{
            "id": "6f1c1b57-7d5c-4a43-9d1e-2f4a3f7a1b11",
            "type": "rectangle",
            "x": 1, "y": 2,
            "width": 3, "height": 4,
            "fill": "#ff0000", "stroke": "#000000",
            "strokeWidth": 1, "cornerRadius": 0
        }"##;
        let shape: Shape = serde_json::from_str(json).unwrap();
        assert!(shape.visible);
        assert!((shape.opacity - 1.0).abs() < f64::EPSILON);
        match shape.kind {
            ShapeKind::Rectangle(r) => assert_eq!(r.fill, Rgba::rgb(255, 0, 0)),
            other => panic!("unexpected kind {}", other.name()),
        }
    }
}
