//! Level-0 data flow diagram: external entities, numbered processes,
//! open-rectangle data stores, and labeled flows.

use crate::shape::{Connector, Diagram, Label, Shape};
use crate::style::{palette, Style};

pub fn build(style: &Style) -> Diagram {
    let mut d = Diagram::new(
        "Data Flow in Logistics Management System",
        (12.0, 10.0),
        (1120.0, 800.0),
        &style.background_color,
    );

    d.push(
        Label::new(
            (6.0, 9.5),
            "Data Flow in Logistics Management System",
            style.fs(18.0),
            &style.text_color,
        )
        .bold(),
    );

    // External entities.
    let entities = [
        ("Client", (1.0, 8.0), "#3498db"),
        ("Driver", (1.0, 2.0), "#2ecc71"),
        ("Admin", (11.0, 5.0), "#e74c3c"),
    ];
    for (name, (x, y), color) in entities {
        d.push(
            Shape::rect((x - 0.5, y - 0.3), (1.0, 0.6))
                .fill(color)
                .alpha(0.7)
                .stroke(&style.text_color, 1.0)
                .label(name, style.fs(9.0), palette::WHITE),
        );
    }

    // Processes.
    let processes = [
        ("P1", "Order\nProcessing", (4.0, 7.0)),
        ("P2", "Driver\nAssignment", (6.0, 8.0)),
        ("P3", "Location\nTracking", (4.0, 3.0)),
        ("P4", "Message\nHandling", (8.0, 5.0)),
        ("P5", "Status\nUpdates", (6.0, 2.0)),
    ];
    for (id, name, pos) in processes {
        d.push(
            Shape::circle(pos, 0.6)
                .fill(palette::LIGHT_YELLOW)
                .stroke(palette::ORANGE, 2.0),
        );
        d.push(Label::new((pos.0, pos.1 + 0.15), id, style.fs(10.0), &style.text_color).bold());
        d.push(Label::new((pos.0, pos.1 - 0.2), name, style.fs(7.0), &style.text_color));
    }

    // Data stores drawn as open rectangles.
    let stores = [
        ("User Database", (9.0, 8.0)),
        ("Consignment DB", (9.0, 6.5)),
        ("Location Logs", (9.0, 3.0)),
        ("Message Store", (9.0, 1.5)),
    ];
    for (name, (x, y)) in stores {
        d.push(
            Shape::polyline(vec![(x + 0.8, y + 0.2), (x - 0.8, y + 0.2), (x - 0.8, y - 0.2), (x + 0.8, y - 0.2)])
                .stroke(&style.text_color, 2.0),
        );
        d.push(Label::new((x, y), name, style.fs(8.0), &style.text_color).bold());
    }

    let flows = [
        ((1.5, 8.0), (3.4, 7.3), "Order Details"),
        ((4.6, 7.3), (5.4, 7.7), "Assignment Request"),
        ((6.6, 8.0), (8.2, 8.0), "Driver Info"),
        ((1.5, 2.0), (3.4, 2.7), "GPS Data"),
        ((4.6, 3.0), (5.4, 2.3), "Location Update"),
        ((6.6, 2.0), (8.2, 3.0), "Status Info"),
        ((8.6, 5.0), (10.5, 5.0), "Reports"),
        ((7.4, 5.0), (8.2, 1.5), "Messages"),
    ];
    for (from, to, name) in flows {
        d.push(Connector::arrow(from, to).color("#0000ff").width(1.5));
        let mid = ((from.0 + to.0) / 2.0, (from.1 + to.1) / 2.0 + 0.2);
        d.push(
            Label::new(mid, name, style.fs(7.5), &style.text_color)
                .pill_outlined(palette::WHITE, &style.muted_text_color, 0.8),
        );
    }

    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Element, ShapeKind};

    #[test]
    fn five_processes_drawn_as_circles() {
        let d = build(&Style::default());
        let circles = d
            .elements
            .iter()
            .filter(|e| match e {
                Element::Shape(s) => matches!(s.kind, ShapeKind::Circle { .. }),
                _ => false,
            })
            .count();
        assert_eq!(circles, 5);
    }

    #[test]
    fn data_stores_are_open_rectangles() {
        let d = build(&Style::default());
        let open = d
            .elements
            .iter()
            .filter(|e| match e {
                Element::Shape(s) => {
                    matches!(&s.kind, ShapeKind::Polyline(points) if points.len() == 4)
                        && s.fill.is_none()
                }
                _ => false,
            })
            .count();
        assert_eq!(open, 4);
    }

    #[test]
    fn every_flow_carries_a_label() {
        let d = build(&Style::default());
        let flows = d
            .elements
            .iter()
            .filter(|e| matches!(e, Element::Connector(_)))
            .count();
        let pills = d
            .elements
            .iter()
            .filter(|e| match e {
                Element::Label(l) => l.pill.is_some(),
                _ => false,
            })
            .count();
        assert_eq!(flows, 8);
        assert_eq!(pills, 8);
    }
}
