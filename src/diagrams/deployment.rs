//! Deployment view: cloud tier on top, client tiers in the middle,
//! external services along the bottom.

use crate::shape::{Connector, Diagram, Label, Shape};
use crate::style::{palette, Style};

pub fn build(style: &Style) -> Diagram {
    let mut d = Diagram::new(
        "System Deployment Architecture",
        (14.0, 10.0),
        (1280.0, 800.0),
        &style.background_color,
    );

    d.push(
        Label::new((7.0, 9.5), "System Deployment Architecture", style.fs(18.0), &style.text_color)
            .bold(),
    );

    // Cloud tier.
    d.push(
        Shape::rounded_rect((1.0, 6.0), (12.0, 2.5), 0.2)
            .fill(palette::LIGHT_BLUE)
            .alpha(0.3)
            .stroke("#0000ff", 2.0),
    );
    d.push(
        Label::new((7.0, 8.2), "Cloud Infrastructure (Supabase)", style.fs(14.0), &style.text_color)
            .bold(),
    );
    let cloud = [
        ("Authentication\nService", (2.5, 7.0), "#e74c3c"),
        ("PostgreSQL\nDatabase", (5.0, 7.0), "#3498db"),
        ("File Storage\n(Images)", (7.5, 7.0), "#f39c12"),
        ("Real-time\nSubscriptions", (10.0, 7.0), "#2ecc71"),
        ("API\nGateway", (12.0, 7.0), "#9b59b6"),
    ];
    for (name, (x, y), color) in cloud {
        d.push(
            Shape::rounded_rect((x - 0.6, y - 0.4), (1.2, 0.8), 0.1)
                .fill(color)
                .alpha(0.7)
                .stroke(&style.text_color, 1.0)
                .label(name, style.fs(8.0), palette::WHITE),
        );
    }

    // Mobile tier.
    d.push(
        Shape::rounded_rect((1.0, 3.5), (5.0, 1.5), 0.2)
            .fill(palette::LIGHT_GREEN)
            .alpha(0.3)
            .stroke("#008000", 2.0),
    );
    d.push(Label::new((3.5, 4.7), "Mobile Applications", style.fs(12.0), &style.text_color).bold());
    let apps = [
        ("Admin\nApp", (2.0, 4.0), "#e74c3c"),
        ("Client\nApp", (3.5, 4.0), "#3498db"),
        ("Driver\nApp", (5.0, 4.0), "#2ecc71"),
    ];
    for (name, (x, y), color) in apps {
        d.push(
            Shape::rect((x - 0.3, y - 0.4), (0.6, 0.8))
                .fill(color)
                .alpha(0.7)
                .stroke(&style.text_color, 1.0),
        );
        d.push(Label::new((x, y - 0.75), name, style.fs(8.0), &style.text_color).bold());
    }

    // Web tier.
    d.push(
        Shape::rounded_rect((8.0, 3.5), (5.0, 1.5), 0.2)
            .fill(palette::LIGHT_YELLOW)
            .alpha(0.3)
            .stroke(palette::ORANGE, 2.0),
    );
    d.push(Label::new((10.5, 4.7), "Web Dashboard", style.fs(12.0), &style.text_color).bold());
    d.push(
        Shape::rect((10.0, 3.8), (1.0, 0.6))
            .fill(palette::ORANGE)
            .alpha(0.7)
            .stroke(&style.text_color, 1.0)
            .label("Admin\nPanel", style.fs(8.0), palette::WHITE),
    );

    // External services tier.
    d.push(
        Shape::rounded_rect((1.0, 1.0), (12.0, 1.5), 0.2)
            .fill(palette::LIGHT_CORAL)
            .alpha(0.3)
            .stroke("#ff0000", 2.0),
    );
    d.push(Label::new((7.0, 2.2), "External Services", style.fs(12.0), &style.text_color).bold());
    let services = [
        ("Google Maps\nAPI", (3.0, 1.5), "#4285f4"),
        ("Firebase\nNotifications", (6.0, 1.5), "#ff9800"),
        ("Payment\nGateway", (9.0, 1.5), "#4caf50"),
        ("SMS\nService", (11.5, 1.5), "#9c27b0"),
    ];
    for (name, (x, y), color) in services {
        d.push(
            Shape::rounded_rect((x - 0.5, y - 0.3), (1.0, 0.6), 0.1)
                .fill(color)
                .alpha(0.7)
                .stroke(&style.text_color, 1.0)
                .label(name, style.fs(7.0), palette::WHITE),
        );
    }

    // Tiers talk in both directions.
    let links = [
        ((3.5, 5.0), (7.0, 6.0)),
        ((10.5, 5.0), (7.0, 6.0)),
        ((7.0, 6.0), (7.0, 2.5)),
    ];
    for (from, to) in links {
        d.push(Connector::arrow(from, to).two_headed().width(2.0));
    }

    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Element;

    #[test]
    fn tier_links_are_bidirectional() {
        let d = build(&Style::default());
        let links: Vec<bool> = d
            .elements
            .iter()
            .filter_map(|e| match e {
                Element::Connector(c) => Some(c.two_headed),
                _ => None,
            })
            .collect();
        assert_eq!(links.len(), 3);
        assert!(links.iter().all(|&b| b));
    }

    #[test]
    fn five_cloud_components() {
        let d = build(&Style::default());
        let cloud_boxes = d
            .elements
            .iter()
            .filter(|e| match e {
                Element::Shape(s) => (s.at.1 - 6.6).abs() < 1e-4 && s.size == (1.2, 0.8),
                _ => false,
            })
            .count();
        assert_eq!(cloud_boxes, 5);
    }
}
