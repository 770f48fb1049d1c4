// src/card.rs
//! HTML cards, one per animal.

use std::fmt::Write;

use crate::record::{AttrPath, Record};

/// A labelled line on a card.
pub struct CardField {
    pub label: &'static str,
    pub path: AttrPath,
}

/// Card lines, in display order.
pub static CARD_FIELDS: [CardField; 5] = [
    CardField { label: "Diet", path: AttrPath::characteristic("diet") },
    CardField { label: "Skin Type", path: AttrPath::characteristic("skin_type") },
    CardField { label: "Location", path: AttrPath::Locations },
    CardField { label: "Lifespan", path: AttrPath::characteristic("lifespan") },
    CardField { label: "Type", path: AttrPath::characteristic("type") },
];

/// `<li><strong>Label:</strong> value</li>`, or nothing when the value is absent or empty.
pub fn card_item(label: &str, record: &Record, path: &AttrPath) -> Option<String> {
    record
        .lookup(path)
        .map(|value| format!("<li><strong>{label}:</strong> {value}</li>"))
}

/// Render one record as a card fragment.
pub fn render_card(record: &Record) -> String {
    let mut out = s!();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "<li class=\"cards__item\">");
    let _ = writeln!(out, "  <div class=\"card__title\">{}</div>", record.name);
    let _ = writeln!(out, "  <div class=\"card__text\">");
    let _ = writeln!(out, "    <ul>");
    for field in &CARD_FIELDS {
        if let Some(item) = card_item(field.label, record, &field.path) {
            let _ = writeln!(out, "      {item}");
        }
    }
    let _ = writeln!(out, "    </ul>");
    let _ = writeln!(out, "  </div>");
    let _ = writeln!(out, "</li>");
    out
}

/// Concatenate the cards of `records`, in order, with no separator.
pub fn render_cards<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = &'a Record>,
{
    records.into_iter().map(render_card).collect()
}
