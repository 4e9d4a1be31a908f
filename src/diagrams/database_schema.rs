//! Entity relationship diagram: nine tables with typed field rows,
//! key highlighting, relationship arrows, and an info box.

use crate::shape::{Anchor, Connector, Diagram, Label, Shape};
use crate::style::{palette, Style};

struct Table {
    name: &'static str,
    pos: (f32, f32),
    fields: &'static [&'static str],
    color: &'static str,
}

const TABLES: &[Table] = &[
    Table {
        name: "users",
        pos: (2.0, 9.0),
        fields: &[
            "id (PK)",
            "email",
            "password_hash",
            "full_name",
            "phone",
            "role (admin/client/driver)",
            "is_active",
            "created_at",
            "updated_at",
        ],
        color: "#3498db",
    },
    Table {
        name: "consignments",
        pos: (8.0, 9.0),
        fields: &[
            "id (PK)",
            "client_id (FK)",
            "driver_id (FK)",
            "pickup_location",
            "delivery_location",
            "item_description",
            "weight",
            "status",
            "special_instructions",
            "created_at",
            "updated_at",
        ],
        color: "#e74c3c",
    },
    Table {
        name: "drivers",
        pos: (14.0, 9.0),
        fields: &[
            "id (PK)",
            "user_id (FK)",
            "license_number",
            "vehicle_type",
            "vehicle_number",
            "is_available",
            "current_location",
            "fuel_card_balance",
            "rating",
        ],
        color: "#2ecc71",
    },
    Table {
        name: "messages",
        pos: (2.0, 5.0),
        fields: &[
            "id (PK)",
            "consignment_id (FK)",
            "sender_id (FK)",
            "receiver_id (FK)",
            "message_text",
            "message_type",
            "is_read",
            "sent_at",
        ],
        color: "#f39c12",
    },
    Table {
        name: "tracking_logs",
        pos: (8.0, 5.0),
        fields: &[
            "id (PK)",
            "consignment_id (FK)",
            "driver_id (FK)",
            "latitude",
            "longitude",
            "status",
            "timestamp",
            "notes",
        ],
        color: "#9b59b6",
    },
    Table {
        name: "fuel_transactions",
        pos: (14.0, 5.0),
        fields: &[
            "id (PK)",
            "driver_id (FK)",
            "amount",
            "location",
            "transaction_type",
            "balance_before",
            "balance_after",
            "created_at",
        ],
        color: "#1abc9c",
    },
    Table {
        name: "notifications",
        pos: (2.0, 1.0),
        fields: &[
            "id (PK)",
            "user_id (FK)",
            "title",
            "message",
            "type",
            "is_read",
            "created_at",
        ],
        color: "#e67e22",
    },
    Table {
        name: "system_logs",
        pos: (8.0, 1.0),
        fields: &[
            "id (PK)",
            "user_id (FK)",
            "action",
            "table_name",
            "record_id",
            "old_values",
            "new_values",
            "timestamp",
        ],
        color: "#95a5a6",
    },
    Table {
        name: "app_settings",
        pos: (14.0, 1.0),
        fields: &[
            "id (PK)",
            "setting_key",
            "setting_value",
            "description",
            "is_active",
            "updated_at",
        ],
        color: "#34495e",
    },
];

/// Table bodies hang below their anchor point, so the whole grid is
/// lifted to keep the longest bottom-row table on the canvas.
const Y_OFF: f32 = 1.8;

fn lift(p: (f32, f32)) -> (f32, f32) {
    (p.0, p.1 + Y_OFF)
}

pub fn build(style: &Style) -> Diagram {
    let mut d = Diagram::new(
        "Database Schema - Logistics Management System",
        (16.0, 12.8),
        (1280.0, 1024.0),
        &style.background_color,
    );

    d.push(
        Label::new(
            (8.0, 12.3),
            "Database Schema - Logistics Management System",
            style.fs(18.0),
            &style.text_color,
        )
        .bold(),
    );

    for table in TABLES {
        draw_table(&mut d, style, table);
    }

    // table-to-table relationships; positions sit on table edges
    let relationships: &[((f32, f32), (f32, f32), &str)] = &[
        ((3.0, 8.5), (7.0, 8.5), "1:N (client)"),
        ((13.0, 8.5), (9.0, 8.5), "1:N (assigned)"),
        ((3.0, 9.0), (13.0, 9.0), "1:1"),
        ((7.0, 7.5), (3.0, 6.0), "1:N"),
        ((8.0, 7.5), (8.0, 6.5), "1:N"),
        ((14.0, 7.5), (14.0, 6.5), "1:N"),
        ((2.0, 7.5), (2.0, 2.5), "1:N"),
        ((3.0, 7.5), (7.0, 2.5), "1:N"),
    ];
    for &(from, to, rel) in relationships {
        let (from, to) = (lift(from), lift(to));
        d.push(Connector::arrow(from, to).color("#ff0000").width(1.5));
        let mid = ((from.0 + to.0) / 2.0, (from.1 + to.1) / 2.0);
        d.push(
            Label::new(mid, rel, style.fs(8.0), &style.text_color)
                .bold()
                .pill("#ffff00"),
        );
    }

    let legend = [
        (palette::GOLD, "Primary Key (PK)"),
        (palette::LIGHT_BLUE, "Foreign Key (FK)"),
        ("#ff0000", "Relationship"),
    ];
    for (i, &(color, name)) in legend.iter().enumerate() {
        let y = 1.1 - 0.3 * i as f32;
        d.push(Shape::rect((0.5, y - 0.1), (0.3, 0.2)).fill(color).alpha(0.7).stroke(&style.text_color, 1.0));
        d.push(Label::new((1.0, y), name, style.fs(10.0), &style.text_color).bold().anchor(Anchor::Start));
    }

    d.push(
        Shape::rounded_rect((10.0, 0.2), (5.5, 1.5), 0.2)
            .fill(palette::LIGHT_GRAY)
            .alpha(0.8)
            .stroke(&style.text_color, 2.0),
    );
    d.push(Label::new((12.75, 1.3), "Database Information", style.fs(12.0), &style.text_color).bold());
    d.push(Label::new(
        (12.75, 0.75),
        "Engine: PostgreSQL (Supabase)\nCharset: UTF-8\nTimezone: UTC",
        style.fs(9.0),
        &style.text_color,
    ));

    d
}

fn draw_table(d: &mut Diagram, style: &Style, table: &Table) {
    let (x, y) = lift(table.pos);
    let height = table.fields.len() as f32 * 0.25 + 0.5;

    d.push(
        Shape::rect((x - 1.0, y), (2.0, 0.4))
            .fill(table.color)
            .stroke(&style.text_color, 2.0)
            .label(&table.name.to_uppercase(), style.fs(10.0), palette::WHITE),
    );
    d.push(
        Shape::rect((x - 1.0, y - height), (2.0, height))
            .fill(palette::WHITE)
            .stroke(&style.text_color, 1.0),
    );

    for (i, &field) in table.fields.iter().enumerate() {
        let fy = y - 0.3 - i as f32 * 0.25;
        let (row_color, bold) = if field.contains("(PK)") {
            (palette::GOLD, true)
        } else if field.contains("(FK)") {
            (palette::LIGHT_BLUE, true)
        } else {
            (palette::WHITE, false)
        };
        let mut row = Shape::rect((x - 0.95, fy - 0.1), (1.9, 0.2))
            .fill(row_color)
            .alpha(0.7)
            .stroke(&style.muted_text_color, 0.5);
        row = if bold {
            row.label(field, style.fs(7.0), &style.text_color)
        } else {
            row.plain_label(field, style.fs(7.0), &style.text_color)
        };
        d.push(row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Element;

    #[test]
    fn draws_nine_table_headers() {
        let d = build(&Style::default());
        let headers = d
            .elements
            .iter()
            .filter(|e| match e {
                Element::Shape(s) => s
                    .label
                    .as_ref()
                    .is_some_and(|t| TABLES.iter().any(|tb| tb.name.to_uppercase() == t.text)),
                _ => false,
            })
            .count();
        assert_eq!(headers, 9);
    }

    #[test]
    fn key_fields_are_highlighted() {
        let d = build(&Style::default());
        let gold_rows = d
            .elements
            .iter()
            .filter(|e| match e {
                Element::Shape(s) => {
                    s.fill.as_deref() == Some(palette::GOLD)
                        && s.label.as_ref().is_some_and(|t| t.text.contains("(PK)"))
                }
                _ => false,
            })
            .count();
        assert_eq!(gold_rows, 9);
    }
}
