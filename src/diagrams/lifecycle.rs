//! Order lifecycle: ten stages snaking across two rows, each with an
//! elapsed-time tag, plus tracking and exception panels.

use crate::shape::{Connector, Diagram, Label, Shape};
use crate::style::{palette, Style};

const STAGES: &[(&str, (f32, f32), &str, &str)] = &[
    ("Order\nCreation", (2.0, 8.0), "#3498db", "0 min"),
    ("Admin\nReview", (4.0, 8.0), "#e74c3c", "5-15 min"),
    ("Driver\nAssignment", (6.0, 8.0), "#f39c12", "15-30 min"),
    ("Pickup\nScheduled", (8.0, 8.0), "#9b59b6", "30-60 min"),
    ("Item\nPickup", (10.0, 8.0), "#2ecc71", "1-2 hours"),
    ("In\nTransit", (10.0, 6.0), "#1abc9c", "2-8 hours"),
    ("Delivery\nAttempt", (8.0, 6.0), "#e67e22", "4-12 hours"),
    ("Delivery\nComplete", (6.0, 6.0), "#27ae60", "4-12 hours"),
    ("Payment\nProcessed", (4.0, 6.0), "#8e44ad", "12-24 hours"),
    ("Order\nClosed", (2.0, 6.0), "#34495e", "24-48 hours"),
];

pub fn build(style: &Style) -> Diagram {
    let mut d = Diagram::new(
        "Complete System Lifecycle - From Order to Delivery",
        (12.0, 10.0),
        (1120.0, 800.0),
        &style.background_color,
    );

    d.push(
        Label::new(
            (6.0, 9.5),
            "Complete System Lifecycle - From Order to Delivery",
            style.fs(16.0),
            &style.text_color,
        )
        .bold(),
    );

    for (i, &(name, pos, color, time)) in STAGES.iter().enumerate() {
        d.push(
            Shape::circle(pos, 0.5)
                .fill(color)
                .alpha(0.8)
                .label(name, style.fs(8.0), palette::WHITE),
        );
        d.push(
            Label::new((pos.0, pos.1 - 0.8), time, style.fs(7.5), &style.text_color)
                .italic()
                .pill(palette::LIGHT_YELLOW),
        );
        if let Some(&(_, next, _, _)) = STAGES.get(i + 1) {
            d.push(
                Connector::arrow(pos, next)
                    .color(palette::GRAY)
                    .width(2.0)
                    .shrink(25.0),
            );
        }
    }

    d.push(
        Shape::rounded_rect((1.0, 3.5), (10.0, 1.5), 0.2)
            .fill(palette::LIGHT_BLUE)
            .alpha(0.3)
            .stroke("#0000ff", 2.0),
    );
    d.push(Label::new(
        (6.0, 4.7),
        "Real-time Status Tracking Available Throughout Process",
        style.fs(12.0),
        &style.text_color,
    ).bold());
    let indicators = ["Live Updates", "GPS Tracking", "Communication", "Notifications", "Progress Reports"];
    for (i, &indicator) in indicators.iter().enumerate() {
        d.push(Label::new(
            (2.0 + i as f32 * 2.0, 4.2),
            indicator,
            style.fs(9.0),
            &style.text_color,
        ));
    }

    d.push(
        Shape::rounded_rect((1.0, 1.5), (10.0, 1.5), 0.2)
            .fill(palette::LIGHT_CORAL)
            .alpha(0.3)
            .stroke("#ff0000", 2.0),
    );
    d.push(Label::new(
        (6.0, 2.7),
        "Exception Handling & Contingencies",
        style.fs(12.0),
        &style.text_color,
    ).bold());
    let exceptions = ["Delivery Failed", "Rescheduling", "Customer Contact", "Emergency Support", "Refund Process"];
    for (i, &exception) in exceptions.iter().enumerate() {
        d.push(Label::new(
            (2.0 + i as f32 * 2.0, 2.2),
            exception,
            style.fs(9.0),
            &style.text_color,
        ));
    }

    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Element;

    #[test]
    fn stages_form_a_single_chain() {
        let d = build(&Style::default());
        let arrows: Vec<((f32, f32), (f32, f32))> = d
            .elements
            .iter()
            .filter_map(|e| match e {
                Element::Connector(c) => Some((c.from, c.to)),
                _ => None,
            })
            .collect();
        assert_eq!(arrows.len(), STAGES.len() - 1);
        for (i, (from, to)) in arrows.iter().enumerate() {
            assert_eq!(*from, STAGES[i].1);
            assert_eq!(*to, STAGES[i + 1].1);
        }
    }

    #[test]
    fn every_stage_has_a_time_tag() {
        let d = build(&Style::default());
        let tags = d
            .elements
            .iter()
            .filter(|e| match e {
                Element::Label(l) => l.italic && l.pill.is_some(),
                _ => false,
            })
            .count();
        assert_eq!(tags, STAGES.len());
    }
}
