//! Who talks to whom: three user roles, the system hub, and curved
//! bidirectional channels between them.

use crate::shape::{Anchor, Connector, Diagram, Label, Shape};
use crate::style::{palette, Style};

pub fn build(style: &Style) -> Diagram {
    let mut d = Diagram::new(
        "Communication Flow Between System Users",
        (12.0, 10.0),
        (1120.0, 800.0),
        &style.background_color,
    );

    d.push(
        Label::new(
            (6.0, 9.5),
            "Communication Flow Between System Users",
            style.fs(18.0),
            &style.text_color,
        )
        .bold(),
    );

    let users = [
        ("Admin", (2.0, 7.0), "#e74c3c"),
        ("Client", (6.0, 8.5), "#3498db"),
        ("Driver", (10.0, 7.0), "#2ecc71"),
    ];
    for (name, pos, color) in users {
        d.push(
            Shape::circle(pos, 0.6)
                .fill(color)
                .alpha(0.7)
                .label(name, style.fs(10.0), palette::WHITE),
        );
    }
    d.push(
        Shape::rect((5.2, 4.6), (1.6, 0.8))
            .fill("#f39c12")
            .alpha(0.7)
            .stroke(&style.text_color, 1.0)
            .label("System", style.fs(10.0), palette::WHITE),
    );

    let channels: &[((f32, f32), (f32, f32), &str, &str)] = &[
        ((2.0, 7.0), (6.0, 8.5), "Order Assignment\nNotifications", "#ff0000"),
        ((6.0, 8.5), (10.0, 7.0), "Delivery Instructions\nLocation Sharing", "#0000ff"),
        ((10.0, 7.0), (2.0, 7.0), "Status Updates\nDelivery Reports", "#008000"),
        ((6.0, 5.0), (2.0, 7.0), "System Alerts\nAnalytics", palette::ORANGE),
        ((6.0, 5.0), (6.0, 8.5), "Order Confirmations\nTracking Updates", palette::ORANGE),
        ((6.0, 5.0), (10.0, 7.0), "Job Assignments\nRoute Optimization", palette::ORANGE),
    ];
    for &(from, to, name, color) in channels {
        d.push(
            Connector::arrow(from, to)
                .two_headed()
                .curved(0.2)
                .color(color)
                .width(2.0)
                .alpha(0.7)
                .shrink(30.0),
        );
        let mid = ((from.0 + to.0) / 2.0, (from.1 + to.1) / 2.0 + 0.3);
        d.push(
            Label::new(mid, name, style.fs(7.5), &style.text_color)
                .pill_outlined(palette::WHITE, color, 0.8),
        );
    }

    // Channel type legend.
    d.push(
        Shape::rounded_rect((0.5, 1.0), (11.0, 2.0), 0.2)
            .fill(palette::LIGHT_GRAY)
            .alpha(0.3)
            .stroke(&style.text_color, 1.0),
    );
    d.push(Label::new((6.0, 2.5), "Communication Types", style.fs(12.0), &style.text_color).bold());
    let comm_types = [
        "Push Notifications",
        "In-App Messaging",
        "Email Alerts",
        "Location Updates",
        "Status Reports",
        "System Notifications",
    ];
    for (i, &comm_type) in comm_types.iter().enumerate() {
        let x = 1.5 + (i % 3) as f32 * 3.5;
        let y = 2.0 - (i / 3) as f32 * 0.4;
        d.push(
            Label::new((x, y), comm_type, style.fs(10.0), &style.text_color).anchor(Anchor::Start),
        );
    }

    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Element;

    #[test]
    fn six_curved_channels() {
        let d = build(&Style::default());
        let curved = d
            .elements
            .iter()
            .filter(|e| match e {
                Element::Connector(c) => c.two_headed && c.curve != 0.0,
                _ => false,
            })
            .count();
        assert_eq!(curved, 6);
    }

    #[test]
    fn hub_channels_share_the_system_color() {
        let d = build(&Style::default());
        let from_hub = d
            .elements
            .iter()
            .filter(|e| match e {
                Element::Connector(c) => c.from == (6.0, 5.0) && c.color == palette::ORANGE,
                _ => false,
            })
            .count();
        assert_eq!(from_hub, 3);
    }
}
