/// Primitive shape geometry. Positions and sizes are in the diagram's
/// data units; the canvas maps them to pixels at render time.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    /// Axis-aligned rectangle anchored at its lower-left corner.
    Rect { corner_radius: f32 },
    Circle { radius: f32 },
    Polygon(Vec<(f32, f32)>),
    Polyline(Vec<(f32, f32)>),
    /// Pie slice around the anchor point. Angles are in degrees,
    /// counterclockwise, zero pointing right.
    Wedge {
        radius: f32,
        start_deg: f32,
        sweep_deg: f32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub width: f32,
}

/// Text drawn centered inside a shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeText {
    pub text: String,
    pub size: f32,
    pub color: String,
    pub bold: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub at: (f32, f32),
    pub size: (f32, f32),
    pub fill: Option<String>,
    pub alpha: f32,
    pub stroke: Option<Stroke>,
    pub label: Option<ShapeText>,
}

impl Shape {
    fn new(kind: ShapeKind, at: (f32, f32), size: (f32, f32)) -> Self {
        Self {
            kind,
            at,
            size,
            fill: None,
            alpha: 1.0,
            stroke: None,
            label: None,
        }
    }

    pub fn rect(at: (f32, f32), size: (f32, f32)) -> Self {
        Self::new(ShapeKind::Rect { corner_radius: 0.0 }, at, size)
    }

    /// Rounded rectangle; the corner radius is in pixels, matching the
    /// fixed corner look of the boxes regardless of axis scale.
    pub fn rounded_rect(at: (f32, f32), size: (f32, f32), corner_radius: f32) -> Self {
        Self::new(ShapeKind::Rect { corner_radius }, at, size)
    }

    pub fn circle(center: (f32, f32), radius: f32) -> Self {
        Self::new(ShapeKind::Circle { radius }, center, (0.0, 0.0))
    }

    pub fn polygon(points: Vec<(f32, f32)>) -> Self {
        Self::new(ShapeKind::Polygon(points), (0.0, 0.0), (0.0, 0.0))
    }

    pub fn polyline(points: Vec<(f32, f32)>) -> Self {
        Self::new(ShapeKind::Polyline(points), (0.0, 0.0), (0.0, 0.0))
    }

    pub fn wedge(center: (f32, f32), radius: f32, start_deg: f32, sweep_deg: f32) -> Self {
        Self::new(
            ShapeKind::Wedge {
                radius,
                start_deg,
                sweep_deg,
            },
            center,
            (0.0, 0.0),
        )
    }

    pub fn fill(mut self, color: &str) -> Self {
        self.fill = Some(color.to_string());
        self
    }

    pub fn alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn stroke(mut self, color: &str, width: f32) -> Self {
        self.stroke = Some(Stroke {
            color: color.to_string(),
            width,
        });
        self
    }

    /// Bold centered label, the common case for component boxes.
    pub fn label(mut self, text: &str, size: f32, color: &str) -> Self {
        self.label = Some(ShapeText {
            text: text.to_string(),
            size,
            color: color.to_string(),
            bold: true,
        });
        self
    }

    pub fn plain_label(mut self, text: &str, size: f32, color: &str) -> Self {
        self.label = Some(ShapeText {
            text: text.to_string(),
            size,
            color: color.to_string(),
            bold: false,
        });
        self
    }

    /// Geometric center used to place the label.
    pub fn center(&self) -> (f32, f32) {
        match &self.kind {
            ShapeKind::Rect { .. } => (
                self.at.0 + self.size.0 / 2.0,
                self.at.1 + self.size.1 / 2.0,
            ),
            ShapeKind::Circle { .. } | ShapeKind::Wedge { .. } => self.at,
            ShapeKind::Polygon(points) | ShapeKind::Polyline(points) => {
                let mut min = (f32::MAX, f32::MAX);
                let mut max = (f32::MIN, f32::MIN);
                for p in points {
                    min.0 = min.0.min(p.0);
                    min.1 = min.1.min(p.1);
                    max.0 = max.0.max(p.0);
                    max.1 = max.1.max(p.1);
                }
                ((min.0 + max.0) / 2.0, (min.1 + max.1) / 2.0)
            }
        }
    }
}

/// A directed or bidirectional line between two fixed points.
#[derive(Debug, Clone, PartialEq)]
pub struct Connector {
    pub from: (f32, f32),
    pub to: (f32, f32),
    pub two_headed: bool,
    /// Arc bulge as a fraction of the chord length; zero is straight.
    pub curve: f32,
    pub color: String,
    pub width: f32,
    pub alpha: f32,
    /// Gap left at each endpoint, in pixels.
    pub shrink: f32,
    pub label: Option<String>,
    pub label_size: f32,
}

impl Connector {
    pub fn arrow(from: (f32, f32), to: (f32, f32)) -> Self {
        Self {
            from,
            to,
            two_headed: false,
            curve: 0.0,
            color: "#000000".to_string(),
            width: 2.0,
            alpha: 1.0,
            shrink: 5.0,
            label: None,
            label_size: 11.0,
        }
    }

    pub fn two_headed(mut self) -> Self {
        self.two_headed = true;
        self
    }

    pub fn curved(mut self, curve: f32) -> Self {
        self.curve = curve;
        self
    }

    pub fn color(mut self, color: &str) -> Self {
        self.color = color.to_string();
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn shrink(mut self, shrink: f32) -> Self {
        self.shrink = shrink;
        self
    }

    pub fn label(mut self, text: &str, size: f32) -> Self {
        self.label = Some(text.to_string());
        self.label_size = size;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

/// Background box behind a free-standing label.
#[derive(Debug, Clone, PartialEq)]
pub struct Pill {
    pub fill: String,
    pub stroke: Option<String>,
    pub alpha: f32,
}

/// Free-standing text: titles, annotations, legend entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub at: (f32, f32),
    pub text: String,
    pub size: f32,
    pub color: String,
    pub bold: bool,
    pub italic: bool,
    pub mono: bool,
    pub anchor: Anchor,
    pub pill: Option<Pill>,
}

impl Label {
    pub fn new(at: (f32, f32), text: &str, size: f32, color: &str) -> Self {
        Self {
            at,
            text: text.to_string(),
            size,
            color: color.to_string(),
            bold: false,
            italic: false,
            mono: false,
            anchor: Anchor::Middle,
            pill: None,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn mono(mut self) -> Self {
        self.mono = true;
        self
    }

    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn pill(mut self, fill: &str) -> Self {
        self.pill = Some(Pill {
            fill: fill.to_string(),
            stroke: None,
            alpha: 1.0,
        });
        self
    }

    pub fn pill_outlined(mut self, fill: &str, stroke: &str, alpha: f32) -> Self {
        self.pill = Some(Pill {
            fill: fill.to_string(),
            stroke: Some(stroke.to_string()),
            alpha,
        });
        self
    }
}

/// One entry in a diagram's draw list. Z-order is list order.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Shape(Shape),
    Connector(Connector),
    Label(Label),
}

impl From<Shape> for Element {
    fn from(shape: Shape) -> Self {
        Element::Shape(shape)
    }
}

impl From<Connector> for Element {
    fn from(connector: Connector) -> Self {
        Element::Connector(connector)
    }
}

impl From<Label> for Element {
    fn from(label: Label) -> Self {
        Element::Label(label)
    }
}

/// An ordered collection of elements plus canvas bounds and a title.
/// One diagram produces exactly one output image.
#[derive(Debug, Clone)]
pub struct Diagram {
    pub title: String,
    /// Extent of the data coordinate space, origin at the lower left.
    pub bounds: (f32, f32),
    pub size_px: (f32, f32),
    pub background: String,
    pub elements: Vec<Element>,
}

impl Diagram {
    pub fn new(title: &str, bounds: (f32, f32), size_px: (f32, f32), background: &str) -> Self {
        Self {
            title: title.to_string(),
            bounds,
            size_px,
            background: background.to_string(),
            elements: Vec::new(),
        }
    }

    pub fn push(&mut self, element: impl Into<Element>) {
        self.elements.push(element.into());
    }

    pub fn extend(&mut self, elements: Vec<Element>) {
        self.elements.extend(elements);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_center_is_midpoint() {
        let shape = Shape::rect((2.0, 3.0), (4.0, 2.0));
        assert_eq!(shape.center(), (4.0, 4.0));
    }

    #[test]
    fn polygon_center_uses_bounding_box() {
        let shape = Shape::polygon(vec![(0.0, 0.0), (4.0, 0.0), (2.0, 2.0)]);
        assert_eq!(shape.center(), (2.0, 1.0));
    }

    #[test]
    fn connector_builder_defaults() {
        let connector = Connector::arrow((0.0, 0.0), (1.0, 1.0));
        assert!(!connector.two_headed);
        assert_eq!(connector.curve, 0.0);
        assert_eq!(connector.shrink, 5.0);
        assert!(connector.label.is_none());
    }

    #[test]
    fn elements_preserve_order() {
        let mut diagram = Diagram::new("t", (10.0, 10.0), (100.0, 100.0), "#ffffff");
        diagram.push(Shape::rect((0.0, 0.0), (1.0, 1.0)));
        diagram.push(Connector::arrow((0.0, 0.0), (1.0, 1.0)));
        diagram.push(Label::new((5.0, 5.0), "hi", 12.0, "#000000"));
        assert!(matches!(diagram.elements[0], Element::Shape(_)));
        assert!(matches!(diagram.elements[1], Element::Connector(_)));
        assert!(matches!(diagram.elements[2], Element::Label(_)));
    }
}
