//! Seven-step overview of an order's journey, written for
//! non-technical readers.

use crate::shape::{Connector, Diagram, Label, Shape};
use crate::style::{palette, Style};

const STEPS: &[(u32, &str, (f32, f32), &str, &str)] = &[
    (1, "Client Creates Order", (1.0, 8.0), "#3498db", "Customer fills form\nwith pickup & delivery\ndetails"),
    (2, "Admin Reviews", (4.0, 8.0), "#e74c3c", "Admin checks order\nand assigns to\navailable driver"),
    (3, "Driver Accepts", (7.0, 8.0), "#2ecc71", "Driver receives\nnotification and\naccepts the job"),
    (4, "Pickup & Delivery", (10.0, 8.0), "#f39c12", "Driver picks up item\nand delivers to\ndestination"),
    (5, "Real-time Tracking", (2.5, 5.0), "#9b59b6", "GPS tracking shows\nlive location to\nclient and admin"),
    (6, "Communication", (6.0, 5.0), "#1abc9c", "Messages between\nclient, driver,\nand admin"),
    (7, "Completion", (9.5, 5.0), "#34495e", "Delivery confirmed\nand payment\nprocessed"),
];

pub fn build(style: &Style) -> Diagram {
    let mut d = Diagram::new(
        "How the Logistics System Works - Simple Overview",
        (12.0, 10.0),
        (1280.0, 960.0),
        &style.background_color,
    );

    d.push(
        Label::new(
            (6.0, 9.5),
            "How the Logistics System Works - Simple Overview",
            style.fs(18.0),
            &style.text_color,
        )
        .bold(),
    );

    for &(number, name, pos, color, description) in STEPS {
        d.push(
            Shape::circle(pos, 0.4)
                .fill(color)
                .alpha(0.8)
                .label(&number.to_string(), style.fs(16.0), palette::WHITE),
        );
        d.push(
            Label::new((pos.0, pos.1 - 0.7), name, style.fs(11.0), &style.text_color).bold(),
        );
        d.push(
            Shape::rounded_rect((pos.0 - 0.8, pos.1 - 1.8), (1.6, 0.8), 0.1)
                .fill(color)
                .alpha(0.2)
                .stroke(color, 1.0)
                .plain_label(description, style.fs(6.5), &style.text_color),
        );
    }

    let arrows = [
        ((1.4, 8.0), (3.6, 8.0)),
        ((4.4, 8.0), (6.6, 8.0)),
        ((7.4, 8.0), (9.6, 8.0)),
        ((2.5, 7.6), (2.5, 5.4)),
        ((2.9, 5.0), (5.6, 5.0)),
        ((6.4, 5.0), (9.1, 5.0)),
    ];
    for (from, to) in arrows {
        d.push(Connector::arrow(from, to).color(palette::GRAY).width(2.0));
    }

    d.push(
        Shape::rounded_rect((0.5, 1.5), (11.0, 1.5), 0.2)
            .fill(palette::LIGHT_GREEN)
            .alpha(0.3)
            .stroke("#008000", 2.0),
    );
    d.push(Label::new((6.0, 2.7), "Key Benefits", style.fs(14.0), &style.text_color).bold());
    d.push(Label::new(
        (6.0, 2.0),
        "Real-time tracking for transparency  -  Automated notifications  -  Secure messaging\nEfficient route planning  -  Digital record keeping  -  24/7 system availability",
        style.fs(10.0),
        &style.text_color,
    ));

    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Element, ShapeKind};

    #[test]
    fn seven_numbered_steps_in_order() {
        let d = build(&Style::default());
        let numbers: Vec<String> = d
            .elements
            .iter()
            .filter_map(|e| match e {
                Element::Shape(s) if matches!(s.kind, ShapeKind::Circle { .. }) => {
                    s.label.as_ref().map(|t| t.text.clone())
                }
                _ => None,
            })
            .collect();
        assert_eq!(numbers, vec!["1", "2", "3", "4", "5", "6", "7"]);
    }

    #[test]
    fn top_row_steps_connect_left_to_right() {
        let d = build(&Style::default());
        let horizontal = d
            .elements
            .iter()
            .filter(|e| match e {
                Element::Connector(c) => c.from.1 == c.to.1,
                _ => false,
            })
            .count();
        assert_eq!(horizontal, 5);
    }
}
