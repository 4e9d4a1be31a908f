use crate::fonts::TextMeasure;
use crate::shape::{Anchor, Connector, Diagram, Element, Label, Shape, ShapeKind};

/// Tolerance for the bounds check, in data units.
const BOUNDS_EPS: f32 = 1e-3;

/// Escape XML special characters
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// A fixed 2D data-coordinate space mapped onto a pixel viewport.
/// Draw calls append SVG fragments in call order; z-order is draw order.
/// The x and y axes scale independently, so circles are emitted as
/// ellipses when the aspect is not square.
pub struct Canvas<'m> {
    bounds: (f32, f32),
    size_px: (f32, f32),
    content: String,
    measure: &'m mut dyn TextMeasure,
}

impl<'m> Canvas<'m> {
    pub fn new(
        bounds: (f32, f32),
        size_px: (f32, f32),
        measure: &'m mut dyn TextMeasure,
    ) -> Result<Self, String> {
        if bounds.0 <= 0.0 || bounds.1 <= 0.0 {
            return Err(format!("Invalid canvas bounds: {}x{}", bounds.0, bounds.1));
        }
        if size_px.0 < 1.0 || size_px.1 < 1.0 {
            return Err(format!(
                "Invalid canvas pixel size: {}x{}",
                size_px.0, size_px.1
            ));
        }

        Ok(Self {
            bounds,
            size_px,
            content: String::new(),
            measure,
        })
    }

    fn sx(&self) -> f32 {
        self.size_px.0 / self.bounds.0
    }

    fn sy(&self) -> f32 {
        self.size_px.1 / self.bounds.1
    }

    /// Map a data point to pixel space. Data y grows upward, pixel y
    /// grows downward. Coordinates outside the declared bounds are a
    /// hard error.
    fn map(&self, p: (f32, f32)) -> Result<(f32, f32), String> {
        if !p.0.is_finite() || !p.1.is_finite() {
            return Err(format!("Non-finite coordinate ({}, {})", p.0, p.1));
        }
        if p.0 < -BOUNDS_EPS
            || p.1 < -BOUNDS_EPS
            || p.0 > self.bounds.0 + BOUNDS_EPS
            || p.1 > self.bounds.1 + BOUNDS_EPS
        {
            return Err(format!(
                "Coordinate ({}, {}) outside canvas bounds {}x{}",
                p.0, p.1, self.bounds.0, self.bounds.1
            ));
        }

        Ok((p.0 * self.sx(), self.size_px.1 - p.1 * self.sy()))
    }

    pub fn draw(&mut self, element: &Element) -> Result<(), String> {
        match element {
            Element::Shape(shape) => self.draw_shape(shape),
            Element::Connector(connector) => self.draw_connector(connector),
            Element::Label(label) => self.draw_label(label),
        }
    }

    fn fill_attrs(shape: &Shape) -> String {
        let mut attrs = match &shape.fill {
            Some(color) => format!(r#" fill="{}""#, color),
            None => r#" fill="none""#.to_string(),
        };
        if shape.fill.is_some() && shape.alpha < 1.0 {
            attrs.push_str(&format!(r#" fill-opacity="{:.2}""#, shape.alpha));
        }
        if let Some(stroke) = &shape.stroke {
            attrs.push_str(&format!(
                r#" stroke="{}" stroke-width="{:.1}""#,
                stroke.color, stroke.width
            ));
        }
        attrs
    }

    pub fn draw_shape(&mut self, shape: &Shape) -> Result<(), String> {
        let attrs = Self::fill_attrs(shape);

        match &shape.kind {
            ShapeKind::Rect { corner_radius } => {
                let top_left = self.map((shape.at.0, shape.at.1 + shape.size.1))?;
                // Validate the opposite corner too.
                self.map((shape.at.0 + shape.size.0, shape.at.1))?;
                let w = shape.size.0 * self.sx();
                let h = shape.size.1 * self.sy();
                let rx = if *corner_radius > 0.0 {
                    format!(r#" rx="{:.2}""#, corner_radius)
                } else {
                    String::new()
                };
                self.content.push_str(&format!(
                    r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}"{}{} />"#,
                    top_left.0, top_left.1, w, h, rx, attrs
                ));
            }
            ShapeKind::Circle { radius } => {
                let center = self.map(shape.at)?;
                self.content.push_str(&format!(
                    r#"<ellipse cx="{:.2}" cy="{:.2}" rx="{:.2}" ry="{:.2}"{} />"#,
                    center.0,
                    center.1,
                    radius * self.sx(),
                    radius * self.sy(),
                    attrs
                ));
            }
            ShapeKind::Polygon(points) | ShapeKind::Polyline(points) => {
                if points.len() < 2 {
                    return Err("Polygon/polyline needs at least two points".to_string());
                }
                let mut coords = String::new();
                for p in points {
                    let px = self.map(*p)?;
                    coords.push_str(&format!("{:.2},{:.2} ", px.0, px.1));
                }
                let tag = if matches!(shape.kind, ShapeKind::Polygon(_)) {
                    "polygon"
                } else {
                    "polyline"
                };
                self.content.push_str(&format!(
                    r#"<{} points="{}"{} />"#,
                    tag,
                    coords.trim_end(),
                    attrs
                ));
            }
            ShapeKind::Wedge {
                radius,
                start_deg,
                sweep_deg,
            } => {
                let center = self.map(shape.at)?;
                let rx = radius * self.sx();
                let ry = radius * self.sy();
                let point_at = |deg: f32| {
                    let rad = deg.to_radians();
                    // Pixel y grows downward, so the sine flips.
                    (center.0 + rx * rad.cos(), center.1 - ry * rad.sin())
                };
                let start = point_at(*start_deg);
                let end = point_at(start_deg + sweep_deg);
                let large_arc = if sweep_deg.abs() > 180.0 { 1 } else { 0 };
                // Positive (counterclockwise) sweeps run against SVG's
                // y-down angle direction.
                let sweep_flag = if *sweep_deg > 0.0 { 0 } else { 1 };
                self.content.push_str(&format!(
                    r#"<path d="M {:.2} {:.2} L {:.2} {:.2} A {:.2} {:.2} 0 {} {} {:.2} {:.2} Z"{} />"#,
                    center.0,
                    center.1,
                    start.0,
                    start.1,
                    rx,
                    ry,
                    large_arc,
                    sweep_flag,
                    end.0,
                    end.1,
                    attrs
                ));
            }
        }

        if let Some(text) = &shape.label {
            let center = self.map(shape.center())?;
            self.draw_text_lines(
                center,
                &text.text,
                text.size,
                &text.color,
                text.bold,
                false,
                false,
                Anchor::Middle,
            );
        }

        Ok(())
    }

    pub fn draw_connector(&mut self, connector: &Connector) -> Result<(), String> {
        let mut p1 = self.map(connector.from)?;
        let mut p2 = self.map(connector.to)?;

        let dx = p2.0 - p1.0;
        let dy = p2.1 - p1.1;
        let len = (dx * dx + dy * dy).sqrt();
        if len < 1.0 {
            return Err(format!(
                "Degenerate connector from ({}, {}) to ({}, {})",
                connector.from.0, connector.from.1, connector.to.0, connector.to.1
            ));
        }

        let dir = (dx / len, dy / len);
        if len > connector.shrink * 2.0 + 2.0 {
            p1 = (
                p1.0 + dir.0 * connector.shrink,
                p1.1 + dir.1 * connector.shrink,
            );
            p2 = (
                p2.0 - dir.0 * connector.shrink,
                p2.1 - dir.1 * connector.shrink,
            );
        }

        let opacity = if connector.alpha < 1.0 {
            format!(r#" stroke-opacity="{:.2}""#, connector.alpha)
        } else {
            String::new()
        };
        let ctrl = if connector.curve != 0.0 {
            let chord = ((p2.0 - p1.0).powi(2) + (p2.1 - p1.1).powi(2)).sqrt();
            let mid = ((p1.0 + p2.0) / 2.0, (p1.1 + p2.1) / 2.0);
            let perp = ((p2.1 - p1.1) / chord, -(p2.0 - p1.0) / chord);
            Some((
                mid.0 + perp.0 * connector.curve * chord,
                mid.1 + perp.1 * connector.curve * chord,
            ))
        } else {
            None
        };

        match ctrl {
            Some(c) => {
                self.content.push_str(&format!(
                    r#"<path d="M {:.2} {:.2} Q {:.2} {:.2} {:.2} {:.2}" fill="none" stroke="{}" stroke-width="{:.1}"{} />"#,
                    p1.0, p1.1, c.0, c.1, p2.0, p2.1, connector.color, connector.width, opacity
                ));
            }
            None => {
                self.content.push_str(&format!(
                    r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{:.1}"{} />"#,
                    p1.0, p1.1, p2.0, p2.1, connector.color, connector.width, opacity
                ));
            }
        }

        let head_angle = match ctrl {
            Some(c) => (p2.1 - c.1).atan2(p2.0 - c.0),
            None => dir.1.atan2(dir.0),
        };
        self.draw_arrow_head(p2, head_angle, connector);

        if connector.two_headed {
            let tail_angle = match ctrl {
                Some(c) => (p1.1 - c.1).atan2(p1.0 - c.0),
                None => (-dir.1).atan2(-dir.0),
            };
            self.draw_arrow_head(p1, tail_angle, connector);
        }

        if let Some(text) = &connector.label {
            let mid = match ctrl {
                Some(c) => (
                    0.25 * p1.0 + 0.5 * c.0 + 0.25 * p2.0,
                    0.25 * p1.1 + 0.5 * c.1 + 0.25 * p2.1,
                ),
                None => ((p1.0 + p2.0) / 2.0, (p1.1 + p2.1) / 2.0),
            };
            let size = connector.label_size;
            let lines: Vec<&str> = text.split('\n').collect();
            let mut max_width: f32 = 0.0;
            for line in &lines {
                let (w, _) = self.measure.measure(line, size, false, false);
                max_width = max_width.max(w);
            }
            let pill_w = max_width + 10.0;
            let pill_h = size * 1.2 * lines.len() as f32 + 6.0;
            self.content.push_str(&format!(
                r##"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" rx="3" fill="#ffffff" fill-opacity="0.85" />"##,
                mid.0 - pill_w / 2.0,
                mid.1 - pill_h / 2.0,
                pill_w,
                pill_h
            ));
            self.draw_text_lines(
                mid,
                text,
                size,
                "#333333",
                false,
                false,
                false,
                Anchor::Middle,
            );
        }

        Ok(())
    }

    fn draw_arrow_head(&mut self, tip: (f32, f32), angle: f32, connector: &Connector) {
        let len = 8.0 + connector.width * 2.5;
        let half = len / 2.2;
        let cos = angle.cos();
        let sin = angle.sin();
        let base = (tip.0 - cos * len, tip.1 - sin * len);
        let p1 = (base.0 + sin * half, base.1 - cos * half);
        let p2 = (base.0 - sin * half, base.1 + cos * half);
        let opacity = if connector.alpha < 1.0 {
            format!(r#" fill-opacity="{:.2}""#, connector.alpha)
        } else {
            String::new()
        };
        self.content.push_str(&format!(
            r#"<polygon points="{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}" fill="{}"{} />"#,
            tip.0, tip.1, p1.0, p1.1, p2.0, p2.1, connector.color, opacity
        ));
    }

    pub fn draw_label(&mut self, label: &Label) -> Result<(), String> {
        let at = self.map(label.at)?;
        let lines: Vec<&str> = label.text.split('\n').collect();

        if let Some(pill) = &label.pill {
            let mut max_width: f32 = 0.0;
            for line in &lines {
                let (w, _) = self.measure.measure(line, label.size, label.bold, label.mono);
                max_width = max_width.max(w);
            }
            let pad_x = 8.0;
            let pill_w = max_width + pad_x * 2.0;
            let pill_h = label.size * 1.3 * lines.len() as f32 + 6.0;
            let x0 = match label.anchor {
                Anchor::Middle => at.0 - pill_w / 2.0,
                Anchor::Start => at.0 - pad_x,
                Anchor::End => at.0 - pill_w + pad_x,
            };
            let stroke = match &pill.stroke {
                Some(color) => format!(r#" stroke="{}" stroke-width="1""#, color),
                None => String::new(),
            };
            self.content.push_str(&format!(
                r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" rx="4" fill="{}" fill-opacity="{:.2}"{} />"#,
                x0,
                at.1 - pill_h / 2.0,
                pill_w,
                pill_h,
                pill.fill,
                pill.alpha,
                stroke
            ));
        }

        self.draw_text_lines(
            at,
            &label.text,
            label.size,
            &label.color,
            label.bold,
            label.italic,
            label.mono,
            label.anchor,
        );
        Ok(())
    }

    /// Draw text centered vertically on `at`, one `<text>` element per
    /// line, with the baseline adjustment the SVG output needs.
    #[allow(clippy::too_many_arguments)]
    fn draw_text_lines(
        &mut self,
        at: (f32, f32),
        text: &str,
        size: f32,
        color: &str,
        bold: bool,
        italic: bool,
        mono: bool,
        anchor: Anchor,
    ) {
        let lines: Vec<&str> = text.split('\n').collect();
        let line_height = size * 1.2;
        let total = line_height * lines.len() as f32;
        let first_center_y = at.1 - total / 2.0 + line_height / 2.0;

        let family = if mono { "monospace" } else { "sans-serif" };
        let weight = if bold { r#" font-weight="700""# } else { "" };
        let style = if italic { r#" font-style="italic""# } else { "" };
        let anchor_attr = match anchor {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        };

        for (i, line) in lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            let y = first_center_y + i as f32 * line_height + size / 3.0;
            self.content.push_str(&format!(
                r#"<text x="{:.2}" y="{:.2}" font-family="{}" font-size="{:.1}" fill="{}" text-anchor="{}"{}{}>{}</text>"#,
                at.0,
                y,
                family,
                size,
                color,
                anchor_attr,
                weight,
                style,
                escape_xml(line)
            ));
        }
    }

    pub fn finalize(self, background: &str) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}"><rect width="100%" height="100%" fill="{bg}" />{content}</svg>"#,
            w = self.size_px.0,
            h = self.size_px.1,
            bg = background,
            content = self.content,
        )
    }
}

impl Diagram {
    /// Draw every element in list order and return the finished SVG
    /// document. An empty element list is an authoring error.
    pub fn render(&self, measure: &mut dyn TextMeasure) -> Result<String, String> {
        if self.elements.is_empty() {
            return Err(format!("Diagram '{}' has no elements", self.title));
        }

        let mut canvas = Canvas::new(self.bounds, self.size_px, measure)?;
        for element in &self.elements {
            canvas.draw(element).map_err(|e| {
                format!("Diagram '{}': {}", self.title, e)
            })?;
        }
        Ok(canvas.finalize(&self.background))
    }
}

/// A rectangular sub-region of the canvas with its own axis limits.
/// Purely affine: panel-local coordinates map onto canvas data
/// coordinates with no layout logic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Panel {
    pub origin: (f32, f32),
    pub size: (f32, f32),
    pub xlim: (f32, f32),
    pub ylim: (f32, f32),
}

impl Panel {
    pub fn new(origin: (f32, f32), size: (f32, f32), xlim: (f32, f32), ylim: (f32, f32)) -> Self {
        Self {
            origin,
            size,
            xlim,
            ylim,
        }
    }

    pub fn map_x(&self, x: f32) -> f32 {
        self.origin.0 + (x - self.xlim.0) / (self.xlim.1 - self.xlim.0) * self.size.0
    }

    pub fn map_y(&self, y: f32) -> f32 {
        self.origin.1 + (y - self.ylim.0) / (self.ylim.1 - self.ylim.0) * self.size.1
    }

    pub fn map(&self, p: (f32, f32)) -> (f32, f32) {
        (self.map_x(p.0), self.map_y(p.1))
    }

    /// Scale a panel-local width to canvas units.
    pub fn w(&self, width: f32) -> f32 {
        width / (self.xlim.1 - self.xlim.0) * self.size.0
    }

    /// Scale a panel-local height to canvas units.
    pub fn h(&self, height: f32) -> f32 {
        height / (self.ylim.1 - self.ylim.0) * self.size.1
    }

    /// Top-center point in canvas units, used for panel titles.
    pub fn title_at(&self, offset: f32) -> (f32, f32) {
        (
            self.origin.0 + self.size.0 / 2.0,
            self.origin.1 + self.size.1 + offset,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::TextMeasure;
    use crate::shape::{Connector, Diagram, Label, Shape};
    use proptest::prelude::*;

    /// Deterministic measurement that needs no installed fonts.
    struct FixedMeasure;

    impl TextMeasure for FixedMeasure {
        fn measure(&mut self, text: &str, font_size: f32, _bold: bool, _mono: bool) -> (f32, f32) {
            (text.chars().count() as f32 * font_size * 0.6, font_size * 1.2)
        }
    }

    #[test]
    fn map_flips_y_axis() {
        let mut measure = FixedMeasure;
        let canvas = Canvas::new((10.0, 10.0), (100.0, 200.0), &mut measure).expect("canvas");
        assert_eq!(canvas.map((0.0, 0.0)).expect("origin"), (0.0, 200.0));
        assert_eq!(canvas.map((10.0, 10.0)).expect("corner"), (100.0, 0.0));
        assert_eq!(canvas.map((5.0, 5.0)).expect("center"), (50.0, 100.0));
    }

    #[test]
    fn out_of_bounds_coordinate_is_an_error() {
        let mut measure = FixedMeasure;
        let mut canvas = Canvas::new((10.0, 10.0), (100.0, 100.0), &mut measure).expect("canvas");
        let off = Shape::rect((9.0, 9.0), (2.0, 2.0)).fill("#ff0000");
        let err = canvas.draw_shape(&off).expect_err("must reject");
        assert!(err.contains("outside canvas bounds"), "{err}");
    }

    #[test]
    fn single_rectangle_diagram_renders() {
        // One rectangle at (0,0) sized (1,1) labeled "X", no connectors.
        let mut diagram = Diagram::new("smoke", (1.0, 1.0), (100.0, 100.0), "#ffffff");
        diagram.push(
            Shape::rect((0.0, 0.0), (1.0, 1.0))
                .fill("#add8e6")
                .stroke("#000080", 2.0)
                .label("X", 12.0, "#000000"),
        );
        let mut measure = FixedMeasure;
        let svg = diagram.render(&mut measure).expect("render");
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("<rect"));
        assert!(svg.contains(">X</text>"));
    }

    #[test]
    fn empty_diagram_is_rejected() {
        let diagram = Diagram::new("empty", (1.0, 1.0), (10.0, 10.0), "#ffffff");
        let mut measure = FixedMeasure;
        assert!(diagram.render(&mut measure).is_err());
    }

    #[test]
    fn connector_draws_line_and_head() {
        let mut measure = FixedMeasure;
        let mut canvas = Canvas::new((10.0, 10.0), (500.0, 500.0), &mut measure).expect("canvas");
        canvas
            .draw_connector(&Connector::arrow((1.0, 1.0), (9.0, 9.0)))
            .expect("draw");
        let svg = canvas.finalize("#ffffff");
        assert!(svg.contains("<line"));
        assert!(svg.contains("<polygon"));
    }

    #[test]
    fn curved_connector_uses_quadratic_path() {
        let mut measure = FixedMeasure;
        let mut canvas = Canvas::new((10.0, 10.0), (500.0, 500.0), &mut measure).expect("canvas");
        canvas
            .draw_connector(&Connector::arrow((1.0, 5.0), (9.0, 5.0)).curved(0.2))
            .expect("draw");
        let svg = canvas.finalize("#ffffff");
        assert!(svg.contains(" Q "));
    }

    #[test]
    fn connector_label_sits_on_a_white_pill() {
        let mut measure = FixedMeasure;
        let mut canvas = Canvas::new((10.0, 10.0), (500.0, 500.0), &mut measure).expect("canvas");
        canvas
            .draw_connector(&Connector::arrow((1.0, 5.0), (9.0, 5.0)).label("Order Data", 9.0))
            .expect("draw");
        let svg = canvas.finalize("#ffffff");
        assert!(svg.contains(r##"fill="#ffffff" fill-opacity="0.85""##));
        assert!(svg.contains("Order Data"));
    }

    #[test]
    fn circle_stretches_with_anisotropic_axes() {
        let mut measure = FixedMeasure;
        // 10x per data unit horizontally, 20x vertically.
        let mut canvas = Canvas::new((10.0, 10.0), (100.0, 200.0), &mut measure).expect("canvas");
        canvas
            .draw_shape(&Shape::circle((5.0, 5.0), 2.0).fill("#add8e6"))
            .expect("draw");
        let svg = canvas.finalize("#ffffff");
        assert!(svg.contains(r#"rx="20.00" ry="40.00""#));
    }

    #[test]
    fn wedge_emits_arc_path() {
        let mut measure = FixedMeasure;
        let mut canvas = Canvas::new((10.0, 10.0), (400.0, 400.0), &mut measure).expect("canvas");
        canvas
            .draw_shape(&Shape::wedge((5.0, 5.0), 2.0, 90.0, 120.0).fill("#ff6b6b"))
            .expect("draw");
        let svg = canvas.finalize("#ffffff");
        assert!(svg.contains(" A "));
        assert!(svg.contains(" Z\""));
    }

    #[test]
    fn labels_with_pills_draw_backgrounds() {
        let mut measure = FixedMeasure;
        let mut canvas = Canvas::new((10.0, 10.0), (400.0, 400.0), &mut measure).expect("canvas");
        canvas
            .draw_label(&Label::new((5.0, 5.0), "ETA: 25 minutes", 11.0, "#333333").pill("#ffffe0"))
            .expect("draw");
        let svg = canvas.finalize("#ffffff");
        assert!(svg.contains("<rect"));
        assert!(svg.contains("ETA: 25 minutes"));
    }

    #[test]
    fn escape_handles_special_chars() {
        assert_eq!(
            escape_xml(r#"<a href="x&y">'z'"#),
            "&lt;a href=&quot;x&amp;y&quot;&gt;&apos;z&apos;"
        );
    }

    #[test]
    fn panel_maps_corners_to_extent() {
        let panel = Panel::new((2.0, 3.0), (4.0, 5.0), (0.0, 10.0), (0.0, 20.0));
        assert_eq!(panel.map((0.0, 0.0)), (2.0, 3.0));
        assert_eq!(panel.map((10.0, 20.0)), (6.0, 8.0));
        assert_eq!(panel.w(5.0), 2.0);
        assert_eq!(panel.h(10.0), 2.5);
    }

    proptest! {
        #[test]
        fn panel_mapping_stays_inside_region(x in 0.0f32..=10.0, y in 0.0f32..=20.0) {
            let panel = Panel::new((2.0, 3.0), (4.0, 5.0), (0.0, 10.0), (0.0, 20.0));
            let (cx, cy) = panel.map((x, y));
            prop_assert!(cx >= 2.0 - 1e-4 && cx <= 6.0 + 1e-4);
            prop_assert!(cy >= 3.0 - 1e-4 && cy <= 8.0 + 1e-4);
        }

        #[test]
        fn panel_mapping_is_monotonic(a in 0.0f32..=10.0, b in 0.0f32..=10.0) {
            let panel = Panel::new((0.0, 0.0), (7.0, 7.0), (0.0, 10.0), (0.0, 10.0));
            if a < b {
                prop_assert!(panel.map_x(a) < panel.map_x(b));
                prop_assert!(panel.map_y(a) < panel.map_y(b));
            }
        }
    }
}
