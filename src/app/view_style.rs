use ratatui::style::{Color, Modifier, Style};

use crate::domain::StatusKind;

pub(super) fn status_style(kind: StatusKind) -> Style {
    let color = match kind {
        StatusKind::Warning => Color::Red,
        StatusKind::Success => Color::Green,
    };
    Style::default().fg(color)
}

pub(super) fn totals_style() -> Style {
    Style::default().fg(Color::Rgb(30, 100, 30))
}

pub(super) fn section_title_style() -> Style {
    Style::default()
        .fg(Color::Gray)
        .add_modifier(Modifier::BOLD)
}

pub(super) fn field_label_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

pub(super) fn placeholder_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
}
