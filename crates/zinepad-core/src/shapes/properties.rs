//! Named, typed access to individual shape fields.
//!
//! Used by property-level commands and by partial updates
//! (`DocumentStore::update_shape`).

use super::{LineCap, LineJoin, Rgba, Shape, ShapeKind, TextAlign};
use serde::{Deserialize, Serialize};

/// Name of an editable shape field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyKey {
    X,
    Y,
    Rotation,
    Opacity,
    Locked,
    Visible,
    Width,
    Height,
    Radius,
    CornerRadius,
    Fill,
    Stroke,
    StrokeWidth,
    Text,
    FontSize,
    FontFamily,
    Align,
    Src,
    Points,
    LineCap,
    LineJoin,
    PointerLength,
    PointerWidth,
    Tension,
}

impl PropertyKey {
    /// Every key, common fields first.
    pub const ALL: [PropertyKey; 24] = [
        PropertyKey::X,
        PropertyKey::Y,
        PropertyKey::Rotation,
        PropertyKey::Opacity,
        PropertyKey::Locked,
        PropertyKey::Visible,
        PropertyKey::Width,
        PropertyKey::Height,
        PropertyKey::Radius,
        PropertyKey::CornerRadius,
        PropertyKey::Fill,
        PropertyKey::Stroke,
        PropertyKey::StrokeWidth,
        PropertyKey::Text,
        PropertyKey::FontSize,
        PropertyKey::FontFamily,
        PropertyKey::Align,
        PropertyKey::Src,
        PropertyKey::Points,
        PropertyKey::LineCap,
        PropertyKey::LineJoin,
        PropertyKey::PointerLength,
        PropertyKey::PointerWidth,
        PropertyKey::Tension,
    ];

    /// Field name as it appears in the persisted payload.
    pub fn name(self) -> &'static str {
        match self {
            PropertyKey::X => "x",
            PropertyKey::Y => "y",
            PropertyKey::Rotation => "rotation",
            PropertyKey::Opacity => "opacity",
            PropertyKey::Locked => "locked",
            PropertyKey::Visible => "visible",
            PropertyKey::Width => "width",
            PropertyKey::Height => "height",
            PropertyKey::Radius => "radius",
            PropertyKey::CornerRadius => "cornerRadius",
            PropertyKey::Fill => "fill",
            PropertyKey::Stroke => "stroke",
            PropertyKey::StrokeWidth => "strokeWidth",
            PropertyKey::Text => "text",
            PropertyKey::FontSize => "fontSize",
            PropertyKey::FontFamily => "fontFamily",
            PropertyKey::Align => "align",
            PropertyKey::Src => "src",
            PropertyKey::Points => "points",
            PropertyKey::LineCap => "lineCap",
            PropertyKey::LineJoin => "lineJoin",
            PropertyKey::PointerLength => "pointerLength",
            PropertyKey::PointerWidth => "pointerWidth",
            PropertyKey::Tension => "tension",
        }
    }
}

/// A single shape field together with its value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "key", content = "value", rename_all = "camelCase")]
pub enum ShapeProperty {
    X(f64),
    Y(f64),
    Rotation(f64),
    Opacity(f64),
    Locked(bool),
    Visible(bool),
    Width(f64),
    Height(f64),
    Radius(f64),
    CornerRadius(f64),
    Fill(Rgba),
    Stroke(Rgba),
    StrokeWidth(f64),
    Text(String),
    FontSize(f64),
    FontFamily(String),
    Align(TextAlign),
    Src(String),
    Points(Vec<f64>),
    LineCap(LineCap),
    LineJoin(LineJoin),
    PointerLength(f64),
    PointerWidth(f64),
    Tension(f64),
}

impl ShapeProperty {
    pub fn key(&self) -> PropertyKey {
        match self {
            ShapeProperty::X(_) => PropertyKey::X,
            ShapeProperty::Y(_) => PropertyKey::Y,
            ShapeProperty::Rotation(_) => PropertyKey::Rotation,
            ShapeProperty::Opacity(_) => PropertyKey::Opacity,
            ShapeProperty::Locked(_) => PropertyKey::Locked,
            ShapeProperty::Visible(_) => PropertyKey::Visible,
            ShapeProperty::Width(_) => PropertyKey::Width,
            ShapeProperty::Height(_) => PropertyKey::Height,
            ShapeProperty::Radius(_) => PropertyKey::Radius,
            ShapeProperty::CornerRadius(_) => PropertyKey::CornerRadius,
            ShapeProperty::Fill(_) => PropertyKey::Fill,
            ShapeProperty::Stroke(_) => PropertyKey::Stroke,
            ShapeProperty::StrokeWidth(_) => PropertyKey::StrokeWidth,
            ShapeProperty::Text(_) => PropertyKey::Text,
            ShapeProperty::FontSize(_) => PropertyKey::FontSize,
            ShapeProperty::FontFamily(_) => PropertyKey::FontFamily,
            ShapeProperty::Align(_) => PropertyKey::Align,
            ShapeProperty::Src(_) => PropertyKey::Src,
            ShapeProperty::Points(_) => PropertyKey::Points,
            ShapeProperty::LineCap(_) => PropertyKey::LineCap,
            ShapeProperty::LineJoin(_) => PropertyKey::LineJoin,
            ShapeProperty::PointerLength(_) => PropertyKey::PointerLength,
            ShapeProperty::PointerWidth(_) => PropertyKey::PointerWidth,
            ShapeProperty::Tension(_) => PropertyKey::Tension,
        }
    }
}

impl Shape {
    /// Read one field. `None` if this variant has no such field.
    pub fn property(&self, key: PropertyKey) -> Option<ShapeProperty> {
        use PropertyKey as K;
        use ShapeKind as S;
        use ShapeProperty as P;

        let value = match (key, &self.kind) {
            (K::X, _) => P::X(self.x),
            (K::Y, _) => P::Y(self.y),
            (K::Rotation, _) => P::Rotation(self.rotation),
            (K::Opacity, _) => P::Opacity(self.opacity),
            (K::Locked, _) => P::Locked(self.locked),
            (K::Visible, _) => P::Visible(self.visible),

            (K::Width, S::Rectangle(r)) => P::Width(r.width),
            (K::Width, S::Text(t)) => P::Width(t.width),
            (K::Width, S::Image(i)) => P::Width(i.width),
            (K::Height, S::Rectangle(r)) => P::Height(r.height),
            (K::Height, S::Image(i)) => P::Height(i.height),
            (K::Radius, S::Circle(c)) => P::Radius(c.radius),
            (K::CornerRadius, S::Rectangle(r)) => P::CornerRadius(r.corner_radius),

            (K::Fill, S::Rectangle(r)) => P::Fill(r.fill),
            (K::Fill, S::Circle(c)) => P::Fill(c.fill),
            (K::Fill, S::Text(t)) => P::Fill(t.fill),

            (K::Stroke, S::Rectangle(r)) => P::Stroke(r.stroke),
            (K::Stroke, S::Circle(c)) => P::Stroke(c.stroke),
            (K::Stroke, S::Line(l)) => P::Stroke(l.stroke),
            (K::Stroke, S::Arrow(a)) => P::Stroke(a.stroke),
            (K::Stroke, S::Freehand(f)) => P::Stroke(f.stroke),

            (K::StrokeWidth, S::Rectangle(r)) => P::StrokeWidth(r.stroke_width),
            (K::StrokeWidth, S::Circle(c)) => P::StrokeWidth(c.stroke_width),
            (K::StrokeWidth, S::Line(l)) => P::StrokeWidth(l.stroke_width),
            (K::StrokeWidth, S::Arrow(a)) => P::StrokeWidth(a.stroke_width),
            (K::StrokeWidth, S::Freehand(f)) => P::StrokeWidth(f.stroke_width),

            (K::Text, S::Text(t)) => P::Text(t.text.clone()),
            (K::FontSize, S::Text(t)) => P::FontSize(t.font_size),
            (K::FontFamily, S::Text(t)) => P::FontFamily(t.font_family.clone()),
            (K::Align, S::Text(t)) => P::Align(t.align),

            (K::Src, S::Image(i)) => P::Src(i.src.clone()),

            (K::Points, S::Line(l)) => P::Points(l.points.clone()),
            (K::Points, S::Arrow(a)) => P::Points(a.points.clone()),
            (K::Points, S::Freehand(f)) => P::Points(f.points.clone()),
            (K::LineCap, S::Line(l)) => P::LineCap(l.line_cap),
            (K::LineCap, S::Arrow(a)) => P::LineCap(a.line_cap),
            (K::LineJoin, S::Line(l)) => P::LineJoin(l.line_join),
            (K::LineJoin, S::Arrow(a)) => P::LineJoin(a.line_join),
            (K::PointerLength, S::Arrow(a)) => P::PointerLength(a.pointer_length),
            (K::PointerWidth, S::Arrow(a)) => P::PointerWidth(a.pointer_width),
            (K::Tension, S::Freehand(f)) => P::Tension(f.tension),

            _ => return None,
        };
        Some(value)
    }

    /// Write one field. Returns `false` (and changes nothing) if this variant
    /// has no such field.
    pub fn apply(&mut self, property: ShapeProperty) -> bool {
        use ShapeKind as S;
        use ShapeProperty as P;

        match (property, &mut self.kind) {
            (P::X(v), _) => self.x = v,
            (P::Y(v), _) => self.y = v,
            (P::Rotation(v), _) => self.rotation = v,
            (P::Opacity(v), _) => self.opacity = v.clamp(0.0, 1.0),
            (P::Locked(v), _) => self.locked = v,
            (P::Visible(v), _) => self.visible = v,

            (P::Width(v), S::Rectangle(r)) => r.width = v,
            (P::Width(v), S::Text(t)) => t.width = v,
            (P::Width(v), S::Image(i)) => i.width = v,
            (P::Height(v), S::Rectangle(r)) => r.height = v,
            (P::Height(v), S::Image(i)) => i.height = v,
            (P::Radius(v), S::Circle(c)) => c.radius = v,
            (P::CornerRadius(v), S::Rectangle(r)) => r.corner_radius = v,

            (P::Fill(v), S::Rectangle(r)) => r.fill = v,
            (P::Fill(v), S::Circle(c)) => c.fill = v,
            (P::Fill(v), S::Text(t)) => t.fill = v,

            (P::Stroke(v), S::Rectangle(r)) => r.stroke = v,
            (P::Stroke(v), S::Circle(c)) => c.stroke = v,
            (P::Stroke(v), S::Line(l)) => l.stroke = v,
            (P::Stroke(v), S::Arrow(a)) => a.stroke = v,
            (P::Stroke(v), S::Freehand(f)) => f.stroke = v,

            (P::StrokeWidth(v), S::Rectangle(r)) => r.stroke_width = v,
            (P::StrokeWidth(v), S::Circle(c)) => c.stroke_width = v,
            (P::StrokeWidth(v), S::Line(l)) => l.stroke_width = v,
            (P::StrokeWidth(v), S::Arrow(a)) => a.stroke_width = v,
            (P::StrokeWidth(v), S::Freehand(f)) => f.stroke_width = v,

            (P::Text(v), S::Text(t)) => t.text = v,
            (P::FontSize(v), S::Text(t)) => t.font_size = v,
            (P::FontFamily(v), S::Text(t)) => t.font_family = v,
            (P::Align(v), S::Text(t)) => t.align = v,

            (P::Src(v), S::Image(i)) => i.src = v,

            (P::Points(v), S::Line(l)) => l.points = v,
            (P::Points(v), S::Arrow(a)) => a.points = v,
            (P::Points(v), S::Freehand(f)) => f.points = v,
            (P::LineCap(v), S::Line(l)) => l.line_cap = v,
            (P::LineCap(v), S::Arrow(a)) => a.line_cap = v,
            (P::LineJoin(v), S::Line(l)) => l.line_join = v,
            (P::LineJoin(v), S::Arrow(a)) => a.line_join = v,
            (P::PointerLength(v), S::Arrow(a)) => a.pointer_length = v,
            (P::PointerWidth(v), S::Arrow(a)) => a.pointer_width = v,
            (P::Tension(v), S::Freehand(f)) => f.tension = v,

            _ => return false,
        }
        true
    }

    /// Every field this shape has, common fields first.
    pub fn properties(&self) -> Vec<ShapeProperty> {
        PropertyKey::ALL
            .iter()
            .filter_map(|key| self.property(*key))
            .collect()
    }
}
