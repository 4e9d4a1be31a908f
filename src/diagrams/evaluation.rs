//! Performance dashboard: seven chart panels on a 3x3 grid, with the
//! delivery statistics spanning the middle row.

use crate::canvas::Panel;
use crate::chart::{self, BarSeries, PieValue};
use crate::shape::{Diagram, Label};
use crate::style::Style;

// Typical daily load curve, peaking mid-morning.
const HOURLY_LOAD: &[f32] = &[
    51.0, 58.0, 66.0, 70.0, 77.0, 80.0, 82.0, 78.0, 75.0, 72.0, 64.0, 59.0,
    49.0, 43.0, 36.0, 27.0, 25.0, 20.0, 19.0, 22.0, 25.0, 30.0, 34.0, 41.0,
];

pub fn build(style: &Style) -> Diagram {
    let mut d = Diagram::new(
        "System Performance & Evaluation Dashboard",
        (16.0, 12.0),
        (1280.0, 960.0),
        &style.background_color,
    );

    d.push(
        Label::new(
            (8.0, 11.5),
            "System Performance & Evaluation Dashboard",
            style.fs(20.0),
            &style.text_color,
        )
        .bold(),
    );

    let top = |col: f32| Panel::new((0.3 + col * 5.2, 7.6), (5.0, 3.5), (0.0, 1.0), (0.0, 1.0));
    let bottom = |col: f32| Panel::new((0.3 + col * 5.2, 0.3), (5.0, 3.5), (0.0, 1.0), (0.0, 1.0));
    let middle = Panel::new((0.3, 4.0), (15.4, 3.4), (0.0, 1.0), (0.0, 1.0));

    chart::bar_chart(
        &mut d,
        &top(0.0),
        style,
        "Key Performance Indicators",
        &["Response\nTime", "Uptime", "User\nSatisfaction", "Data\nAccuracy"],
        &[85.0, 99.9, 92.0, 98.0],
        &["#ff9999", "#66b3ff", "#99ff99", "#ffcc99"],
        100.0,
        "%",
    );

    chart::pie_chart(
        &mut d,
        &top(1.0),
        style,
        "Active Users Distribution",
        &[
            ("Admin", 5.0, "#ff6b6b"),
            ("Client", 150.0, "#4ecdc4"),
            ("Driver", 75.0, "#45b7d1"),
        ],
        PieValue::Percent,
    );

    let load_points: Vec<(f32, f32)> = HOURLY_LOAD
        .iter()
        .enumerate()
        .map(|(hour, load)| (hour as f32, *load))
        .collect();
    chart::line_chart(
        &mut d,
        &top(2.0),
        style,
        "24-Hour System Load",
        &load_points,
        23.0,
        100.0,
        "Hour of Day",
        "Load (%)",
        "#1f77b4",
    );

    chart::grouped_bar_chart(
        &mut d,
        &middle,
        style,
        "Monthly Delivery Statistics",
        &["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
        &[
            BarSeries { name: "Completed", color: "#2ecc71", values: &[120.0, 135.0, 158.0, 142.0, 167.0, 189.0] },
            BarSeries { name: "Pending", color: "#f39c12", values: &[25.0, 30.0, 22.0, 28.0, 31.0, 24.0] },
            BarSeries { name: "Cancelled", color: "#e74c3c", values: &[8.0, 12.0, 15.0, 10.0, 9.0, 11.0] },
        ],
        200.0,
        "Number of Consignments",
    );

    chart::barh_chart(
        &mut d,
        &bottom(0.0),
        style,
        "Security Events (Last 30 Days)",
        &["Login Attempts", "Failed Logins", "Blocked IPs", "Data Breaches"],
        &[1250.0, 45.0, 12.0, 0.0],
        &["#2ca02c", "#ffa500", "#d62728", "#8b0000"],
        "Count",
    );

    chart::pie_chart(
        &mut d,
        &bottom(1.0),
        style,
        "Cost Distribution",
        &[
            ("Infrastructure", 15000.0, "#3498db"),
            ("Development", 35000.0, "#9b59b6"),
            ("Maintenance", 8000.0, "#1abc9c"),
            ("Support", 12000.0, "#f1c40f"),
        ],
        PieValue::Dollars,
    );

    chart::radar_chart(
        &mut d,
        &bottom(2.0),
        style,
        "System Health Score",
        &["Database", "API", "Storage", "Network"],
        &[98.0, 95.0, 99.0, 97.0],
        100.0,
        "#2ecc71",
    );

    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::CosmicTextMeasure;

    #[test]
    fn load_series_covers_a_full_day() {
        assert_eq!(HOURLY_LOAD.len(), 24);
        assert!(HOURLY_LOAD.iter().all(|&v| (0.0..=100.0).contains(&v)));
    }

    #[test]
    fn dashboard_renders_all_panels() {
        let d = build(&Style::default());
        assert!(d.elements.len() > 100);
        let mut measure = CosmicTextMeasure::new().expect("measure");
        d.render(&mut measure).expect("render");
    }
}
