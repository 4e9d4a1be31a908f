//! Chart panels for the dashboard-style diagrams. Every function turns
//! literal data series into shapes and labels placed through a `Panel`
//! with unit axis limits (0..1 on both axes); there is no data
//! processing, only layout arithmetic.

use crate::canvas::Panel;
use crate::shape::{Anchor, Diagram, Label, Shape};
use crate::style::Style;

/// Fraction of the panel taken by the plot area of axis-based charts.
const PLOT_LEFT: f32 = 0.14;
const PLOT_RIGHT: f32 = 0.96;
const PLOT_BOTTOM: f32 = 0.20;
const PLOT_TOP: f32 = 0.82;

pub struct BarSeries<'a> {
    pub name: &'a str,
    pub color: &'a str,
    pub values: &'a [f32],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieValue {
    Percent,
    Dollars,
}

fn title(diagram: &mut Diagram, panel: &Panel, style: &Style, text: &str) {
    diagram.push(
        Label::new(panel.map((0.5, 0.93)), text, style.fs(13.0), &style.text_color).bold(),
    );
}

fn axis_frame(diagram: &mut Diagram, panel: &Panel, style: &Style) {
    let x0 = panel.map_x(PLOT_LEFT);
    let x1 = panel.map_x(PLOT_RIGHT);
    let y0 = panel.map_y(PLOT_BOTTOM);
    let y1 = panel.map_y(PLOT_TOP);
    diagram.push(
        Shape::polyline(vec![(x0, y1), (x0, y0), (x1, y0)]).stroke(&style.text_color, 1.2),
    );
}

fn y_tick_labels(diagram: &mut Diagram, panel: &Panel, style: &Style, y_max: f32, step: f32) {
    let mut value = 0.0;
    while value <= y_max + 1e-3 {
        let fy = PLOT_BOTTOM + value / y_max * (PLOT_TOP - PLOT_BOTTOM);
        diagram.push(
            Label::new(
                (panel.map_x(PLOT_LEFT) - panel.w(0.015), panel.map_y(fy)),
                &format!("{:.0}", value),
                style.fs(8.0),
                &style.muted_text_color,
            )
            .anchor(Anchor::End),
        );
        value += step;
    }
}

/// Vertical bar chart with a value annotation above each bar.
#[allow(clippy::too_many_arguments)]
pub fn bar_chart(
    diagram: &mut Diagram,
    panel: &Panel,
    style: &Style,
    chart_title: &str,
    categories: &[&str],
    values: &[f32],
    colors: &[&str],
    y_max: f32,
    value_suffix: &str,
) {
    title(diagram, panel, style, chart_title);
    axis_frame(diagram, panel, style);
    y_tick_labels(diagram, panel, style, y_max, y_max / 4.0);

    let n = categories.len() as f32;
    let slot = (PLOT_RIGHT - PLOT_LEFT) / n;
    let bar_w = slot * 0.62;

    for (i, ((&category, &value), &color)) in
        categories.iter().zip(values).zip(colors).enumerate()
    {
        let cx = PLOT_LEFT + slot * (i as f32 + 0.5);
        let height = (value / y_max).min(1.0) * (PLOT_TOP - PLOT_BOTTOM);
        diagram.push(
            Shape::rect(
                panel.map((cx - bar_w / 2.0, PLOT_BOTTOM)),
                (panel.w(bar_w), panel.h(height)),
            )
            .fill(color)
            .stroke(&style.muted_text_color, 0.5),
        );
        diagram.push(
            Label::new(
                panel.map((cx, PLOT_BOTTOM + height + 0.035)),
                &format!("{}{}", trim_float(value), value_suffix),
                style.fs(8.5),
                &style.text_color,
            )
            .bold(),
        );
        diagram.push(Label::new(
            panel.map((cx, PLOT_BOTTOM - 0.06)),
            category,
            style.fs(7.5),
            &style.muted_text_color,
        ));
    }
}

/// Horizontal bar chart, categories stacked top to bottom.
#[allow(clippy::too_many_arguments)]
pub fn barh_chart(
    diagram: &mut Diagram,
    panel: &Panel,
    style: &Style,
    chart_title: &str,
    categories: &[&str],
    values: &[f32],
    colors: &[&str],
    x_label: &str,
) {
    title(diagram, panel, style, chart_title);
    axis_frame(diagram, panel, style);

    let left = 0.34;
    let x_max = values.iter().copied().fold(1.0f32, f32::max);
    let n = categories.len() as f32;
    let slot = (PLOT_TOP - PLOT_BOTTOM) / n;
    let bar_h = slot * 0.6;

    for (i, ((&category, &value), &color)) in
        categories.iter().zip(values).zip(colors).enumerate()
    {
        let cy = PLOT_TOP - slot * (i as f32 + 0.5);
        let width = value / x_max * (PLOT_RIGHT - left);
        if width > 0.0 {
            diagram.push(
                Shape::rect(
                    panel.map((left, cy - bar_h / 2.0)),
                    (panel.w(width), panel.h(bar_h)),
                )
                .fill(color),
            );
        }
        diagram.push(
            Label::new(
                (panel.map_x(left) - panel.w(0.015), panel.map_y(cy)),
                category,
                style.fs(7.5),
                &style.muted_text_color,
            )
            .anchor(Anchor::End),
        );
        diagram.push(
            Label::new(
                panel.map(((left + width + 0.02).min(0.98), cy)),
                &trim_float(value),
                style.fs(8.0),
                &style.text_color,
            )
            .anchor(Anchor::Start),
        );
    }

    diagram.push(Label::new(
        panel.map(((left + PLOT_RIGHT) / 2.0, PLOT_BOTTOM - 0.08)),
        x_label,
        style.fs(8.0),
        &style.muted_text_color,
    ));
}

/// Grouped bar chart with a legend row under the title.
#[allow(clippy::too_many_arguments)]
pub fn grouped_bar_chart(
    diagram: &mut Diagram,
    panel: &Panel,
    style: &Style,
    chart_title: &str,
    groups: &[&str],
    series: &[BarSeries<'_>],
    y_max: f32,
    y_label: &str,
) {
    title(diagram, panel, style, chart_title);
    axis_frame(diagram, panel, style);
    y_tick_labels(diagram, panel, style, y_max, y_max / 4.0);

    let n = groups.len() as f32;
    let slot = (PLOT_RIGHT - PLOT_LEFT) / n;
    let bar_w = slot * 0.8 / series.len() as f32;

    for (g, &group) in groups.iter().enumerate() {
        let group_center = PLOT_LEFT + slot * (g as f32 + 0.5);
        let group_left = group_center - bar_w * series.len() as f32 / 2.0;
        for (s, serie) in series.iter().enumerate() {
            let value = serie.values[g];
            let height = (value / y_max).min(1.0) * (PLOT_TOP - PLOT_BOTTOM);
            diagram.push(
                Shape::rect(
                    panel.map((group_left + bar_w * s as f32, PLOT_BOTTOM)),
                    (panel.w(bar_w), panel.h(height)),
                )
                .fill(serie.color),
            );
        }
        diagram.push(Label::new(
            panel.map((group_center, PLOT_BOTTOM - 0.05)),
            group,
            style.fs(8.5),
            &style.muted_text_color,
        ));
    }

    diagram.push(Label::new(
        panel.map((0.035, (PLOT_BOTTOM + PLOT_TOP) / 2.0)),
        y_label,
        style.fs(8.0),
        &style.muted_text_color,
    ));

    // Legend swatches in the top-right corner of the plot area.
    for (s, serie) in series.iter().enumerate() {
        let y = PLOT_TOP - 0.005 - 0.055 * s as f32;
        diagram.push(
            Shape::rect(panel.map((PLOT_RIGHT - 0.16, y)), (panel.w(0.025), panel.h(0.03)))
                .fill(serie.color),
        );
        diagram.push(
            Label::new(
                panel.map((PLOT_RIGHT - 0.125, y + 0.015)),
                serie.name,
                style.fs(7.5),
                &style.text_color,
            )
            .anchor(Anchor::Start),
        );
    }
}

/// Pie chart with per-slice value labels and a legend column.
pub fn pie_chart(
    diagram: &mut Diagram,
    panel: &Panel,
    style: &Style,
    chart_title: &str,
    entries: &[(&str, f32, &str)],
    value_fmt: PieValue,
) {
    title(diagram, panel, style, chart_title);

    let total: f32 = entries.iter().map(|(_, v, _)| v).sum();
    let center = panel.map((0.5, 0.44));
    let radius = panel.w(0.26).min(panel.h(0.34));

    // First slice starts at twelve o'clock and proceeds counterclockwise.
    let mut angle = 90.0;
    for &(name, value, color) in entries {
        let sweep = value / total * 360.0;
        diagram.push(
            Shape::wedge(center, radius, angle, sweep)
                .fill(color)
                .stroke("#ffffff", 1.0),
        );

        let mid = (angle + sweep / 2.0).to_radians();
        let label_r = radius * 1.28;
        let label_at = (
            center.0 + label_r * mid.cos(),
            center.1 + label_r * mid.sin(),
        );
        let value_text = match value_fmt {
            PieValue::Percent => format!("{:.1}%", value / total * 100.0),
            PieValue::Dollars => format!("${:.0}", value),
        };
        diagram.push(Label::new(
            label_at,
            &format!("{}\n{}", name, value_text),
            style.fs(7.5),
            &style.text_color,
        ));

        angle += sweep;
    }
}

/// Line chart with markers and a translucent fill under the curve.
#[allow(clippy::too_many_arguments)]
pub fn line_chart(
    diagram: &mut Diagram,
    panel: &Panel,
    style: &Style,
    chart_title: &str,
    points: &[(f32, f32)],
    x_max: f32,
    y_max: f32,
    x_label: &str,
    y_label: &str,
    color: &str,
) {
    title(diagram, panel, style, chart_title);
    axis_frame(diagram, panel, style);
    y_tick_labels(diagram, panel, style, y_max, y_max / 4.0);

    let fx = |x: f32| PLOT_LEFT + x / x_max * (PLOT_RIGHT - PLOT_LEFT);
    let fy = |y: f32| PLOT_BOTTOM + (y / y_max).min(1.0) * (PLOT_TOP - PLOT_BOTTOM);

    // Horizontal grid lines.
    for i in 1..4 {
        let y = panel.map_y(PLOT_BOTTOM + (PLOT_TOP - PLOT_BOTTOM) * i as f32 / 4.0);
        diagram.push(
            Shape::polyline(vec![(panel.map_x(PLOT_LEFT), y), (panel.map_x(PLOT_RIGHT), y)])
                .stroke(&style.grid_color, 0.6),
        );
    }

    let mut fill: Vec<(f32, f32)> = Vec::with_capacity(points.len() + 2);
    fill.push(panel.map((fx(points[0].0), PLOT_BOTTOM)));
    let mut line: Vec<(f32, f32)> = Vec::with_capacity(points.len());
    for (x, y) in points {
        let p = panel.map((fx(*x), fy(*y)));
        line.push(p);
        fill.push(p);
    }
    fill.push(panel.map((fx(points[points.len() - 1].0), PLOT_BOTTOM)));

    diagram.push(Shape::polygon(fill).fill(color).alpha(0.3));
    diagram.push(Shape::polyline(line.clone()).stroke(color, 2.0));
    for p in line {
        diagram.push(Shape::circle(p, panel.w(0.006)).fill(color));
    }

    diagram.push(Label::new(
        panel.map((0.5, PLOT_BOTTOM - 0.1)),
        x_label,
        style.fs(8.0),
        &style.muted_text_color,
    ));
    diagram.push(Label::new(
        panel.map((0.03, (PLOT_BOTTOM + PLOT_TOP) / 2.0)),
        y_label,
        style.fs(8.0),
        &style.muted_text_color,
    ));
}

/// Annotated heatmap grid. `cell_color` maps a value to its fill,
/// `cell_text` to the annotation text and its color.
#[allow(clippy::too_many_arguments)]
pub fn heatmap(
    diagram: &mut Diagram,
    panel: &Panel,
    style: &Style,
    row_labels: &[&str],
    col_labels: &[&str],
    values: &[&[f32]],
    cell_color: fn(f32) -> &'static str,
    cell_text: fn(f32) -> (&'static str, &'static str),
) {
    let rows = row_labels.len() as f32;
    let cols = col_labels.len() as f32;
    let cell_w = (PLOT_RIGHT - PLOT_LEFT) / cols;
    let cell_h = (PLOT_TOP - PLOT_BOTTOM) / rows;

    for (r, (&row, &row_label)) in values.iter().zip(row_labels).enumerate() {
        let cy = PLOT_TOP - cell_h * (r as f32 + 0.5);
        diagram.push(
            Label::new(
                (panel.map_x(PLOT_LEFT) - panel.w(0.012), panel.map_y(cy)),
                row_label,
                style.fs(10.0),
                &style.text_color,
            )
            .anchor(Anchor::End),
        );

        for (c, value) in row.iter().enumerate() {
            let cx = PLOT_LEFT + cell_w * (c as f32 + 0.5);
            diagram.push(
                Shape::rect(
                    panel.map((cx - cell_w / 2.0, cy - cell_h / 2.0)),
                    (panel.w(cell_w), panel.h(cell_h)),
                )
                .fill(cell_color(*value))
                .stroke("#ffffff", 1.0),
            );
            let (text, text_color) = cell_text(*value);
            diagram.push(
                Label::new(panel.map((cx, cy)), text, style.fs(8.0), text_color).bold(),
            );
        }
    }

    // Column labels, angled placement replaced by two-line wrapping in
    // the caller's data; here they sit under their columns.
    for (c, &col_label) in col_labels.iter().enumerate() {
        let cx = PLOT_LEFT + cell_w * (c as f32 + 0.5);
        diagram.push(Label::new(
            panel.map((cx, PLOT_BOTTOM - 0.055)),
            col_label,
            style.fs(7.0),
            &style.muted_text_color,
        ));
    }
}

/// Radar (spider) chart: spokes, an outer ring, and a filled value
/// polygon.
#[allow(clippy::too_many_arguments)]
pub fn radar_chart(
    diagram: &mut Diagram,
    panel: &Panel,
    style: &Style,
    chart_title: &str,
    axes: &[&str],
    values: &[f32],
    max: f32,
    color: &str,
) {
    title(diagram, panel, style, chart_title);

    let center = panel.map((0.5, 0.46));
    let radius = panel.w(0.26).min(panel.h(0.3));
    let n = axes.len();

    let spoke = |i: usize, r: f32| {
        let angle = std::f32::consts::FRAC_PI_2 + std::f32::consts::TAU * i as f32 / n as f32;
        (center.0 + r * angle.cos(), center.1 + r * angle.sin())
    };

    // Reference rings at 50% and 100%.
    for ring in [0.5, 1.0] {
        let points: Vec<(f32, f32)> = (0..n).map(|i| spoke(i, radius * ring)).collect();
        diagram.push(Shape::polygon(points).stroke(&style.grid_color, 0.8));
    }
    for i in 0..n {
        diagram.push(
            Shape::polyline(vec![center, spoke(i, radius)]).stroke(&style.grid_color, 0.8),
        );
        diagram.push(Label::new(
            spoke(i, radius * 1.22),
            axes[i],
            style.fs(8.0),
            &style.text_color,
        ));
    }

    let value_points: Vec<(f32, f32)> =
        (0..n).map(|i| spoke(i, radius * (values[i] / max).min(1.0))).collect();
    diagram.push(Shape::polygon(value_points.clone()).fill(color).alpha(0.25));
    diagram.push(Shape::polygon(value_points.clone()).stroke(color, 2.0));
    for p in value_points {
        diagram.push(Shape::circle(p, panel.w(0.008)).fill(color));
    }
}

fn trim_float(value: f32) -> String {
    if (value - value.round()).abs() < 1e-3 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Element;

    fn unit_panel() -> Panel {
        Panel::new((2.0, 2.0), (6.0, 6.0), (0.0, 1.0), (0.0, 1.0))
    }

    fn test_diagram() -> Diagram {
        Diagram::new("chart", (16.0, 12.0), (1280.0, 960.0), "#ffffff")
    }

    fn shapes(diagram: &Diagram) -> Vec<&Shape> {
        diagram
            .elements
            .iter()
            .filter_map(|e| match e {
                Element::Shape(s) => Some(s),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn bar_chart_draws_one_bar_per_category() {
        let mut diagram = test_diagram();
        bar_chart(
            &mut diagram,
            &unit_panel(),
            &Style::default(),
            "KPIs",
            &["Uptime", "Accuracy"],
            &[99.9, 98.0],
            &["#66b3ff", "#99ff99"],
            100.0,
            "%",
        );
        let rects = shapes(&diagram)
            .iter()
            .filter(|s| matches!(s.kind, crate::shape::ShapeKind::Rect { .. }))
            .count();
        assert_eq!(rects, 2);
    }

    #[test]
    fn pie_slices_cover_full_circle() {
        let mut diagram = test_diagram();
        pie_chart(
            &mut diagram,
            &unit_panel(),
            &Style::default(),
            "Users",
            &[("Admin", 5.0, "#ff6b6b"), ("Client", 150.0, "#4ecdc4"), ("Driver", 75.0, "#45b7d1")],
            PieValue::Percent,
        );
        let total_sweep: f32 = shapes(&diagram)
            .iter()
            .filter_map(|s| match s.kind {
                crate::shape::ShapeKind::Wedge { sweep_deg, .. } => Some(sweep_deg),
                _ => None,
            })
            .sum();
        assert!((total_sweep - 360.0).abs() < 0.01, "{total_sweep}");
    }

    #[test]
    fn heatmap_emits_cell_per_value() {
        let mut diagram = test_diagram();
        let rows: &[&[f32]] = &[&[0.0, 0.5], &[1.0, 1.0]];
        heatmap(
            &mut diagram,
            &unit_panel(),
            &Style::default(),
            &["A", "B"],
            &["X", "Y"],
            rows,
            |_| "#ffffff",
            |_| ("Full", "#000000"),
        );
        let cells = shapes(&diagram)
            .iter()
            .filter(|s| matches!(s.kind, crate::shape::ShapeKind::Rect { .. }))
            .count();
        assert_eq!(cells, 4);
    }

    #[test]
    fn radar_value_polygon_scales_with_values() {
        let mut diagram = test_diagram();
        radar_chart(
            &mut diagram,
            &unit_panel(),
            &Style::default(),
            "Health",
            &["DB", "API", "Storage", "Network"],
            &[98.0, 95.0, 99.0, 97.0],
            100.0,
            "#2ecc71",
        );
        // Two rings + one value outline + one value fill.
        let polygons = shapes(&diagram)
            .iter()
            .filter(|s| matches!(s.kind, crate::shape::ShapeKind::Polygon(_)))
            .count();
        assert_eq!(polygons, 4);
    }

    #[test]
    fn chart_panels_render_within_bounds() {
        let mut diagram = test_diagram();
        let panel = Panel::new((1.0, 1.0), (6.0, 5.0), (0.0, 1.0), (0.0, 1.0));
        let style = Style::default();
        line_chart(
            &mut diagram,
            &panel,
            &style,
            "Load",
            &[(0.0, 40.0), (6.0, 70.0), (12.0, 85.0), (18.0, 60.0), (23.0, 45.0)],
            23.0,
            100.0,
            "Hour",
            "Load (%)",
            "#1f77b4",
        );
        let mut measure = crate::fonts::CosmicTextMeasure::new().expect("measure");
        diagram.render(&mut measure).expect("in-bounds render");
    }
}
