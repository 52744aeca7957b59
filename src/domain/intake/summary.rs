//! Report sent to the doctors.
//!
//! Doctors scan the report by position, so the line order is fixed: a
//! marker line, the optional requester line, six mandatory lines (rendered
//! even when empty) and the optional comment line.

use std::borrow::Cow;

use super::fields::FieldSet;

/// Hashtag the doctors' chat filters on.
pub const REPORT_MARKER: &str = "#запрос";

/// Lead line of the review message shown before approval.
pub const REVIEW_LEAD: &str = "Нажмите \"Отправить\", чтобы отправить следующий запрос врачам:";

/// Renders the collected answers as an HTML report.
pub fn compose(fields: &FieldSet) -> String {
    let mut text = format!("{}\n", REPORT_MARKER);

    if !fields.requester_name.is_empty() {
        text.push_str(&format!(
            "\nИмя заявителя: <b>{}</b>",
            escape_html(&fields.requester_name)
        ));
    }

    let mandatory = [
        ("Имя пострадавшего", &fields.victim_name),
        ("Возраст/ДР", &fields.age_or_birthdate),
        ("Дата травм(ы)", &fields.injury_date),
        ("Травмы", &fields.injury_list),
        ("Где находится пострадавший", &fields.location),
        ("Связь", &fields.contact_method),
    ];
    text.push('\n');
    for (label, value) in mandatory {
        text.push_str(&format!("{}: <b>{}</b>\n", label, escape_html(value)));
    }

    if !fields.comments.is_empty() {
        text.push_str(&format!(
            "Вопрос/комментарий: <b>{}</b>",
            escape_html(&fields.comments)
        ));
    }

    text
}

/// Renders the report preceded by the approval lead line.
pub fn compose_for_review(fields: &FieldSet) -> String {
    format!("{}\n\n{}", REVIEW_LEAD, compose(fields))
}

/// Escapes the characters Telegram's HTML parse mode treats as markup.
fn escape_html(value: &str) -> Cow<'_, str> {
    if !value.contains(&['<', '>', '&'][..]) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}
