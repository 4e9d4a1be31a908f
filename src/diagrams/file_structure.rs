//! Monospace project tree with callout boxes on the important files.

use crate::shape::{Anchor, Diagram, Label, Shape};
use crate::style::{palette, Style};

const TREE: &[(&str, u32, f32)] = &[
    ("logistics_app/", 0, 18.5),
    ("├── lib/", 1, 18.0),
    ("│   ├── models/", 2, 17.5),
    ("│   │   ├── user.dart", 3, 17.0),
    ("│   │   ├── consignment.dart", 3, 16.5),
    ("│   │   └── message.dart", 3, 16.0),
    ("│   ├── services/", 2, 15.5),
    ("│   │   ├── auth_service.dart", 3, 15.0),
    ("│   │   ├── consignment_service.dart", 3, 14.5),
    ("│   │   ├── location_service.dart", 3, 14.0),
    ("│   │   └── messaging_service.dart", 3, 13.5),
    ("│   ├── screens/", 2, 13.0),
    ("│   │   ├── admin/", 3, 12.5),
    ("│   │   │   ├── dashboard.dart", 4, 12.0),
    ("│   │   │   └── user_management.dart", 4, 11.5),
    ("│   │   ├── client/", 3, 11.0),
    ("│   │   │   ├── home.dart", 4, 10.5),
    ("│   │   │   └── create_consignment.dart", 4, 10.0),
    ("│   │   └── driver/", 3, 9.5),
    ("│   │       ├── dashboard.dart", 4, 9.0),
    ("│   │       └── tracking.dart", 4, 8.5),
    ("│   ├── widgets/", 2, 8.0),
    ("│   │   ├── custom_button.dart", 3, 7.5),
    ("│   │   ├── map_widget.dart", 3, 7.0),
    ("│   │   └── chat_widget.dart", 3, 6.5),
    ("│   ├── utils/", 2, 6.0),
    ("│   │   ├── constants.dart", 3, 5.5),
    ("│   │   └── helpers.dart", 3, 5.0),
    ("│   └── main.dart", 2, 4.5),
    ("├── assets/", 1, 4.0),
    ("│   ├── images/", 2, 3.5),
    ("│   └── icons/", 2, 3.0),
    ("├── test/", 1, 2.5),
    ("├── pubspec.yaml", 1, 2.0),
    ("├── README.md", 1, 1.5),
    ("└── .env", 1, 1.0),
];

const CALLOUTS: &[(&str, &str)] = &[
    ("user.dart", "User data model"),
    ("consignment.dart", "Delivery order model"),
    ("auth_service.dart", "Authentication logic"),
    ("main.dart", "App entry point"),
    ("dashboard.dart", "Main dashboard UI"),
    ("home.dart", "User home screen"),
];

pub fn build(style: &Style) -> Diagram {
    let mut d = Diagram::new(
        "Project File Structure",
        (10.0, 20.0),
        (1120.0, 1280.0),
        &style.background_color,
    );

    d.push(
        Label::new((5.0, 19.5), "Project File Structure", style.fs(18.0), &style.text_color).bold(),
    );

    for &(name, level, y) in TREE {
        let x = 0.5 + level as f32 * 0.5;
        d.push(
            Label::new((x, y), name, style.fs(10.0), &style.text_color)
                .mono()
                .anchor(Anchor::Start),
        );

        // Callouts only on shallow .dart files, same as the tree's focus.
        if level <= 3 && name.ends_with(".dart") {
            let file = name.rsplit(' ').next().unwrap_or_default();
            if let Some(&(_, description)) = CALLOUTS.iter().find(|(f, _)| *f == file) {
                d.push(
                    Shape::rounded_rect((x + 4.5, y - 0.15), (2.5, 0.3), 0.05)
                        .fill(palette::LIGHT_YELLOW)
                        .alpha(0.7)
                        .stroke(palette::ORANGE, 1.0),
                );
                d.push(
                    Label::new((x + 5.75, y), description, style.fs(8.0), &style.text_color)
                        .italic(),
                );
            }
        }
    }

    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Element;

    #[test]
    fn tree_rows_descend_monotonically() {
        assert!(TREE.windows(2).all(|w| w[0].2 > w[1].2));
    }

    #[test]
    fn callouts_attach_to_tree_entries() {
        let d = build(&Style::default());
        let callouts = d
            .elements
            .iter()
            .filter(|e| match e {
                Element::Label(l) => l.italic,
                _ => false,
            })
            .count();
        // dashboard.dart appears at level 4 only, so it gets no callout.
        assert_eq!(callouts, 4);
    }
}
