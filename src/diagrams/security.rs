//! Defense-in-depth view: five nested security layers with the
//! concrete controls placed inside the innermost rings.

use crate::shape::{Anchor, Diagram, Label, Shape};
use crate::style::{palette, Style};

pub fn build(style: &Style) -> Diagram {
    let mut d = Diagram::new(
        "Security Architecture & Data Protection",
        (10.0, 10.0),
        (1120.0, 800.0),
        &style.background_color,
    );

    d.push(
        Label::new((5.0, 9.5), "Security Architecture & Data Protection", style.fs(18.0), &style.text_color)
            .bold(),
    );

    let layers: &[(&str, (f32, f32, f32, f32), &str, f32)] = &[
        ("Physical Security", (0.5, 0.5, 9.0, 8.5), palette::LIGHT_GRAY, 0.3),
        ("Network Security", (1.0, 1.0, 8.0, 7.5), palette::LIGHT_BLUE, 0.4),
        ("Application Security", (1.5, 1.5, 7.0, 6.5), palette::LIGHT_GREEN, 0.5),
        ("Data Security", (2.0, 2.0, 6.0, 5.5), palette::LIGHT_YELLOW, 0.6),
        ("User Security", (2.5, 2.5, 5.0, 4.5), palette::LIGHT_CORAL, 0.7),
    ];
    for &(name, (x, y, w, h), color, alpha) in layers {
        d.push(
            Shape::rect((x, y), (w, h))
                .fill(color)
                .alpha(alpha)
                .stroke(&style.text_color, 2.0),
        );
        d.push(
            Label::new((x + 0.15, y + h - 0.3), name, style.fs(10.0), &style.text_color)
                .bold()
                .anchor(Anchor::Start),
        );
    }

    let components = [
        ("Multi-Factor\nAuthentication", (3.0, 6.2)),
        ("Role-Based\nAccess Control", (7.0, 6.2)),
        ("Data\nEncryption", (3.0, 4.7)),
        ("API\nSecurity", (7.0, 4.7)),
        ("Audit\nLogging", (3.0, 3.2)),
        ("Backup &\nRecovery", (7.0, 3.2)),
    ];
    for (name, (x, y)) in components {
        d.push(
            Shape::rounded_rect((x - 0.7, y - 0.4), (1.4, 0.8), 0.1)
                .fill(palette::WHITE)
                .stroke(palette::DARK_RED, 2.0)
                .label(name, style.fs(8.0), &style.text_color),
        );
    }

    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Element, ShapeKind};

    #[test]
    fn layers_are_nested() {
        let d = build(&Style::default());
        let mut widths: Vec<f32> = d
            .elements
            .iter()
            .filter_map(|e| match e {
                Element::Shape(s) if matches!(s.kind, ShapeKind::Rect { corner_radius } if corner_radius == 0.0) => {
                    Some(s.size.0)
                }
                _ => None,
            })
            .collect();
        widths.truncate(5);
        assert!(widths.windows(2).all(|w| w[0] > w[1]), "{widths:?}");
    }

    #[test]
    fn six_controls_sit_inside_the_layers() {
        let d = build(&Style::default());
        let controls = d
            .elements
            .iter()
            .filter(|e| match e {
                Element::Shape(s) => {
                    s.fill.as_deref() == Some(palette::WHITE) && s.label.is_some()
                }
                _ => false,
            })
            .count();
        assert_eq!(controls, 6);
    }
}
