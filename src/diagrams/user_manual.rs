//! Quick-start guide: four quadrants with numbered step lists for each
//! role plus the shared feature list.

use crate::canvas::Panel;
use crate::shape::{Anchor, Connector, Diagram, Label, Shape};
use crate::style::{palette, Style};

const ADMIN_STEPS: &[&str] = &[
    "Login with admin credentials",
    "View dashboard overview",
    "Manage user accounts",
    "Review and assign consignments",
    "Monitor real-time tracking",
    "Generate reports and analytics",
    "Handle system settings",
];

const CLIENT_STEPS: &[&str] = &[
    "Register and login",
    "Create new consignment",
    "Fill pickup and delivery details",
    "Submit request and wait for approval",
    "Track delivery in real-time",
    "Communicate with driver",
    "Confirm delivery completion",
];

const DRIVER_STEPS: &[&str] = &[
    "Login to driver app",
    "View assigned consignments",
    "Accept delivery job",
    "Navigate to pickup location",
    "Start GPS tracking",
    "Update delivery status",
    "Confirm completion",
];

const COMMON_FEATURES: &[&str] = &[
    "In-app messaging",
    "Real-time GPS tracking",
    "Push notifications",
    "Photo sharing",
    "Status updates",
    "Secure authentication",
];

pub fn build(style: &Style) -> Diagram {
    let mut d = Diagram::new(
        "User Manual - Quick Start Guide",
        (16.0, 12.0),
        (1280.0, 960.0),
        &style.background_color,
    );

    d.push(
        Label::new((8.0, 11.5), "User Manual - Quick Start Guide", style.fs(20.0), &style.text_color)
            .bold(),
    );

    let quadrant = |col: f32, row: f32| {
        Panel::new((0.6 + col * 7.9, 0.5 + (1.0 - row) * 5.4), (7.0, 4.9), (0.0, 10.0), (0.0, 10.0))
    };

    step_list(&mut d, style, &quadrant(0.0, 0.0), "Admin User Guide", "#ff0000", ADMIN_STEPS);
    step_list(&mut d, style, &quadrant(1.0, 0.0), "Client User Guide", "#0000ff", CLIENT_STEPS);
    step_list(&mut d, style, &quadrant(0.0, 1.0), "Driver User Guide", "#008000", DRIVER_STEPS);

    let features = quadrant(1.0, 1.0);
    d.push(
        Label::new(features.title_at(0.3), "Common Features", style.fs(14.0), palette::PURPLE).bold(),
    );
    for (i, &feature) in COMMON_FEATURES.iter().enumerate() {
        let y = 8.5 - i as f32 * 1.0;
        d.push(Shape::circle(features.map((1.0, y)), features.w(0.12)).fill(palette::PURPLE).alpha(0.6));
        d.push(
            Label::new(features.map((1.6, y)), feature, style.fs(11.0), &style.text_color)
                .anchor(Anchor::Start),
        );
    }

    d
}

fn step_list(d: &mut Diagram, style: &Style, panel: &Panel, name: &str, color: &str, steps: &[&str]) {
    d.push(Label::new(panel.title_at(0.3), name, style.fs(14.0), color).bold());

    for (i, &step) in steps.iter().enumerate() {
        let y = 9.0 - i as f32;
        d.push(
            Shape::circle(panel.map((1.0, y)), panel.w(0.3))
                .fill(color)
                .alpha(0.7)
                .label(&(i + 1).to_string(), style.fs(9.0), palette::WHITE),
        );
        d.push(
            Label::new(panel.map((1.8, y)), step, style.fs(10.0), &style.text_color)
                .anchor(Anchor::Start),
        );
        if i + 1 < steps.len() {
            d.push(
                Connector::arrow(panel.map((1.0, y - 0.4)), panel.map((1.0, y - 0.6)))
                    .color(color)
                    .shrink(0.0),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Element;

    #[test]
    fn each_role_has_seven_steps() {
        assert_eq!(ADMIN_STEPS.len(), 7);
        assert_eq!(CLIENT_STEPS.len(), 7);
        assert_eq!(DRIVER_STEPS.len(), 7);
    }

    #[test]
    fn step_circles_count_across_roles() {
        let d = build(&Style::default());
        let numbered = d
            .elements
            .iter()
            .filter(|e| match e {
                Element::Shape(s) => s
                    .label
                    .as_ref()
                    .is_some_and(|t| t.text.parse::<u32>().is_ok()),
                _ => false,
            })
            .count();
        assert_eq!(numbered, 21);
    }
}
