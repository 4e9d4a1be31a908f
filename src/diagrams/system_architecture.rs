//! High-level component map: client apps, API gateway, storage, and
//! external services, with a security layer spanning the bottom.

use crate::shape::{Anchor, Connector, Diagram, Label, Shape};
use crate::style::{palette, Style};

pub fn build(style: &Style) -> Diagram {
    let mut d = Diagram::new(
        "Logistics Management System Architecture",
        (10.0, 10.0),
        (1280.0, 960.0),
        &style.background_color,
    );

    d.push(
        Label::new((5.0, 9.5), "Logistics Management System Architecture", style.fs(20.0), &style.text_color)
            .bold(),
    );

    let boxes: &[((f32, f32), (f32, f32), &str, &str, f32, &str, f32)] = &[
        ((0.5, 7.5), (2.0, 1.5), palette::LIGHT_BLUE, palette::NAVY, 2.0, "Mobile App\n(Flutter)", 12.0),
        ((3.0, 7.5), (2.0, 1.5), palette::LIGHT_GREEN, palette::DARK_GREEN, 2.0, "Admin Dashboard\n(Web)", 12.0),
        ((1.5, 5.5), (3.0, 1.0), palette::ORANGE, palette::DARK_ORANGE, 2.0, "API Gateway\n(Supabase)", 12.0),
        ((0.5, 3.5), (2.0, 1.5), palette::LIGHT_CORAL, palette::DARK_RED, 2.0, "PostgreSQL\nDatabase", 12.0),
        ((3.0, 3.5), (2.0, 1.5), palette::LIGHT_YELLOW, palette::GOLD, 2.0, "File Storage\n(Images/Documents)", 12.0),
        ((6.0, 7.0), (1.5, 1.0), palette::LIGHT_PINK, palette::PURPLE, 2.0, "Google Maps\nAPI", 10.0),
        ((6.0, 5.5), (1.5, 1.0), palette::LIGHT_GRAY, palette::BLACK, 2.0, "Push\nNotifications", 10.0),
        ((6.0, 4.0), (1.5, 1.0), palette::LIGHT_STEEL_BLUE, palette::STEEL_BLUE, 2.0, "Real-time\nTracking", 10.0),
        ((0.5, 1.5), (7.0, 1.0), palette::MISTY_ROSE, "#ff0000", 3.0, "Security Layer: Authentication, Authorization, Encryption", 12.0),
    ];
    for &(at, size, fill, edge, lw, text, fs) in boxes {
        d.push(
            Shape::rounded_rect(at, size, 0.1)
                .fill(fill)
                .stroke(edge, lw)
                .label(text, style.fs(fs), &style.text_color),
        );
    }

    let arrows = [
        ((1.5, 7.5), (2.5, 6.5)),
        ((4.0, 7.5), (3.5, 6.5)),
        ((2.5, 5.5), (1.5, 5.0)),
        ((3.5, 5.5), (4.0, 5.0)),
        ((4.5, 6.0), (6.0, 7.0)),
        ((4.5, 6.0), (6.0, 6.0)),
        ((4.5, 6.0), (6.0, 4.5)),
    ];
    for (from, to) in arrows {
        d.push(Connector::arrow(from, to).width(2.0));
    }

    // Legend, upper right.
    let legend = [
        (palette::LIGHT_BLUE, "User Interface"),
        (palette::ORANGE, "API Layer"),
        (palette::LIGHT_CORAL, "Data Storage"),
        (palette::LIGHT_PINK, "External Services"),
        (palette::MISTY_ROSE, "Security Layer"),
    ];
    d.push(
        Shape::rect((8.0, 7.4), (1.85, 1.85))
            .fill(&style.background_color)
            .stroke(&style.muted_text_color, 1.0),
    );
    for (i, &(color, name)) in legend.iter().enumerate() {
        let y = 9.0 - 0.33 * i as f32;
        d.push(Shape::rect((8.1, y - 0.09), (0.28, 0.18)).fill(color).stroke(&style.muted_text_color, 0.5));
        d.push(Label::new((8.48, y), name, style.fs(8.5), &style.text_color).anchor(Anchor::Start));
    }

    d
}
