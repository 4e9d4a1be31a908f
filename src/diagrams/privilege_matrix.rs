//! Access-control heatmap: four roles against twelve features, with a
//! discrete red/yellow/green colorbar.

use crate::canvas::Panel;
use crate::chart;
use crate::shape::{Anchor, Diagram, Label, Shape};
use crate::style::Style;

const USERS: &[&str] = &["Admin", "Other Admin", "Client", "Driver"];

// Wrapped onto two lines so twelve columns stay legible.
const FEATURES: &[&str] = &[
    "User\nManagement",
    "Create\nConsignments",
    "Assign\nDrivers",
    "View All\nConsignments",
    "GPS\nTracking",
    "Messaging",
    "Fuel\nManagement",
    "Reports &\nAnalytics",
    "System\nSettings",
    "Profile\nManagement",
    "View\nOwn Data",
    "Update\nStatus",
];

// 1 = full access, 0.5 = limited, 0 = none.
const PRIVILEGES: &[&[f32]] = &[
    &[1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
    &[0.5, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0, 0.5, 1.0, 1.0, 1.0],
    &[0.0, 1.0, 0.0, 0.5, 1.0, 1.0, 0.0, 0.5, 0.0, 1.0, 1.0, 0.5],
    &[0.0, 0.0, 0.0, 0.5, 1.0, 1.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0],
];

const NO_ACCESS: &str = "#d73027";
const LIMITED: &str = "#fee08b";
const FULL: &str = "#1a9850";

fn access_color(value: f32) -> &'static str {
    if value >= 1.0 {
        FULL
    } else if value >= 0.5 {
        LIMITED
    } else {
        NO_ACCESS
    }
}

fn access_text(value: f32) -> (&'static str, &'static str) {
    if value >= 1.0 {
        ("Full", "#ffffff")
    } else if value >= 0.5 {
        ("Limited", "#000000")
    } else {
        ("None", "#ffffff")
    }
}

pub fn build(style: &Style) -> Diagram {
    let mut d = Diagram::new(
        "User Privilege Matrix - Access Control Overview",
        (14.0, 10.0),
        (1120.0, 800.0),
        &style.background_color,
    );

    d.push(
        Label::new(
            (7.0, 9.5),
            "User Privilege Matrix - Access Control Overview",
            style.fs(16.0),
            &style.text_color,
        )
        .bold(),
    );

    let panel = Panel::new((0.4, 0.4), (11.8, 8.6), (0.0, 1.0), (0.0, 1.0));
    chart::heatmap(
        &mut d,
        &panel,
        style,
        USERS,
        FEATURES,
        PRIVILEGES,
        access_color,
        access_text,
    );

    // Colorbar on the right edge.
    let bar_x = 12.7;
    let bar_bottom = 2.0;
    let bar_h = 6.0;
    for (i, &color) in [NO_ACCESS, LIMITED, FULL].iter().enumerate() {
        let y = bar_bottom + bar_h / 3.0 * i as f32;
        d.push(
            Shape::rect((bar_x, y), (0.4, bar_h / 3.0))
                .fill(color)
                .stroke(&style.text_color, 0.8),
        );
    }
    for (tick, frac) in [("0.0", 0.0), ("0.5", 0.5), ("1.0", 1.0)] {
        d.push(
            Label::new(
                (bar_x + 0.55, bar_bottom + bar_h * frac),
                tick,
                style.fs(8.0),
                &style.muted_text_color,
            )
            .anchor(Anchor::Start),
        );
    }
    d.push(Label::new(
        (bar_x + 0.2, bar_bottom - 0.5),
        "Access Level",
        style.fs(9.0),
        &style.text_color,
    ));

    d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_is_four_by_twelve() {
        assert_eq!(PRIVILEGES.len(), USERS.len());
        for row in PRIVILEGES {
            assert_eq!(row.len(), FEATURES.len());
        }
    }

    #[test]
    fn admin_has_full_access_everywhere() {
        assert!(PRIVILEGES[0].iter().all(|&v| v == 1.0));
    }

    #[test]
    fn access_levels_map_to_distinct_colors() {
        assert_eq!(access_color(0.0), NO_ACCESS);
        assert_eq!(access_color(0.5), LIMITED);
        assert_eq!(access_color(1.0), FULL);
        assert_eq!(access_text(0.5).0, "Limited");
    }
}
