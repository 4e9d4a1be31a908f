//! Six phone-frame mockups, one per key screen, laid out 2x3.

use crate::canvas::Panel;
use crate::shape::{Diagram, Label, Shape};
use crate::style::{palette, Style};

struct Screen {
    title: &'static str,
    user: &'static str,
    elements: &'static [((f32, f32), (f32, f32), &'static str, &'static str)],
}

const SCREENS: &[Screen] = &[
    Screen {
        title: "Admin Dashboard",
        user: "Admin",
        elements: &[
            ((2.0, 10.0), (2.5, 1.0), "#e74c3c", "Users\n250"),
            ((5.5, 10.0), (2.5, 1.0), "#2ecc71", "Active\n45"),
            ((2.0, 8.5), (6.0, 1.0), "#f39c12", "Recent Consignments"),
            ((2.0, 6.0), (6.0, 2.0), "#ecf0f1", "Analytics Chart"),
            ((2.0, 3.5), (6.0, 2.0), "#95a5a6", "System Status"),
        ],
    },
    Screen {
        title: "Client Home",
        user: "Client",
        elements: &[
            ((2.0, 10.0), (6.0, 1.0), "#3498db", "Create New Consignment"),
            ((2.0, 8.5), (6.0, 1.0), "#2ecc71", "Track My Deliveries"),
            ((2.0, 7.0), (6.0, 1.0), "#f39c12", "Message Driver"),
            ((2.0, 4.0), (6.0, 2.5), "#ecf0f1", "Recent Orders\nOrder #123\nOrder #124\nOrder #125"),
        ],
    },
    Screen {
        title: "Driver Interface",
        user: "Driver",
        elements: &[
            ((2.0, 10.0), (6.0, 1.0), "#e74c3c", "Current Delivery"),
            ((2.0, 8.5), (6.0, 1.0), "#2ecc71", "Start GPS Tracking"),
            ((2.0, 7.0), (6.0, 1.0), "#f39c12", "Fuel Card Balance"),
            ((2.0, 4.0), (6.0, 2.5), "#ecf0f1", "Assigned Orders\nPickup: Location A\nDeliver: Location B\nStatus: In Transit"),
        ],
    },
    Screen {
        title: "Consignment Form",
        user: "Client",
        elements: &[
            ((2.0, 10.0), (6.0, 0.8), "#ecf0f1", "Pickup Location"),
            ((2.0, 9.0), (6.0, 0.8), "#ecf0f1", "Delivery Location"),
            ((2.0, 8.0), (6.0, 0.8), "#ecf0f1", "Item Description"),
            ((2.0, 7.0), (6.0, 0.8), "#ecf0f1", "Weight (kg)"),
            ((2.0, 6.0), (6.0, 0.8), "#ecf0f1", "Special Instructions"),
            ((2.0, 4.5), (6.0, 1.0), "#3498db", "Submit Request"),
            ((2.0, 3.0), (6.0, 1.0), "#95a5a6", "Cancel"),
        ],
    },
    Screen {
        title: "GPS Tracking",
        user: "All Users",
        elements: &[
            ((2.0, 8.0), (6.0, 4.0), "#2ecc71", "MAP VIEW\nCurrent Location\nDriver Position\nDestination"),
            ((2.0, 6.0), (6.0, 1.0), "#f39c12", "ETA: 25 minutes"),
            ((2.0, 4.5), (6.0, 1.0), "#e74c3c", "Distance: 12.5 km"),
            ((2.0, 3.0), (6.0, 1.0), "#3498db", "Refresh Location"),
        ],
    },
    Screen {
        title: "Messaging",
        user: "All Users",
        elements: &[
            ((2.0, 9.0), (6.0, 3.0), "#ecf0f1", "Chat Messages\nDriver: On my way\nYou: Thank you\nDriver: ETA 20 min"),
            ((2.0, 7.0), (4.5, 1.0), "#bdc3c7", "Type message..."),
            ((6.8, 7.0), (1.2, 1.0), "#3498db", "Send"),
            ((2.0, 5.5), (6.0, 1.0), "#2ecc71", "Send Photo"),
            ((2.0, 4.0), (6.0, 1.0), "#f39c12", "Share Location"),
        ],
    },
];

pub fn build(style: &Style) -> Diagram {
    let mut d = Diagram::new(
        "User Interface Design Overview",
        (18.0, 12.0),
        (1440.0, 960.0),
        &style.background_color,
    );

    d.push(
        Label::new((9.0, 11.55), "User Interface Design Overview", style.fs(20.0), &style.text_color)
            .bold(),
    );

    for (i, screen) in SCREENS.iter().enumerate() {
        let col = (i % 3) as f32;
        let row = (i / 3) as f32;
        let origin = (0.9 + col * 6.0, 6.0 - row * 5.45);
        let panel = Panel::new(origin, (4.2, 4.9), (0.0, 10.0), (0.0, 15.0));
        draw_screen(&mut d, style, &panel, screen);
    }

    d
}

fn draw_screen(d: &mut Diagram, style: &Style, panel: &Panel, screen: &Screen) {
    d.push(
        Label::new(
            panel.map((5.0, 15.6)),
            &format!("{} Interface", screen.user),
            style.fs(11.0),
            &style.text_color,
        )
        .bold(),
    );

    // Phone frame and screen area.
    d.push(
        Shape::rect(panel.map((1.0, 1.0)), (panel.w(8.0), panel.h(13.0)))
            .fill(palette::BLACK)
            .stroke(palette::BLACK, 1.0),
    );
    d.push(
        Shape::rect(panel.map((1.5, 2.0)), (panel.w(7.0), panel.h(11.0)))
            .fill(palette::WHITE)
            .stroke(&style.muted_text_color, 1.0),
    );

    // Header bar.
    d.push(
        Shape::rect(panel.map((1.5, 11.5)), (panel.w(7.0), panel.h(1.5)))
            .fill("#3498db")
            .label(screen.title, style.fs(9.0), palette::WHITE),
    );

    for &(at, size, color, text) in screen.elements {
        d.push(
            Shape::rect(panel.map(at), (panel.w(size.0), panel.h(size.1)))
                .fill(color)
                .alpha(0.8)
                .stroke(&style.muted_text_color, 0.6)
                .label(text, style.fs(6.5), &style.text_color),
        );
    }

    // Navigation bar.
    d.push(
        Shape::rect(panel.map((1.5, 2.0)), (panel.w(7.0), panel.h(0.8)))
            .fill("#34495e"),
    );
    for (i, &item) in ["Home", "Orders", "Chat", "Profile"].iter().enumerate() {
        d.push(Label::new(
            panel.map((2.5 + i as f32 * 1.5, 2.4)),
            item,
            style.fs(6.0),
            palette::WHITE,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Element;

    #[test]
    fn six_phone_frames() {
        let d = build(&Style::default());
        let frames = d
            .elements
            .iter()
            .filter(|e| match e {
                Element::Shape(s) => s.fill.as_deref() == Some(palette::BLACK),
                _ => false,
            })
            .count();
        assert_eq!(frames, 6);
    }

    #[test]
    fn every_screen_has_a_header_with_its_title() {
        let d = build(&Style::default());
        for screen in SCREENS {
            let found = d.elements.iter().any(|e| match e {
                Element::Shape(s) => s.label.as_ref().is_some_and(|t| t.text == screen.title),
                _ => false,
            });
            assert!(found, "{}", screen.title);
        }
    }
}
