//! Dashboard sidebar component
//!
//! Renders the input form and the calculate button

use super::super::state::DashboardState;
use super::super::utils::text_alignment;
use crate::ui::form::{FieldId, NumberField, TextField};

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

const BUTTON_LABEL: &str = "לחץ לחישוב וניתוח התדרים";

fn field_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::LightCyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

fn number_line(field: &NumberField, focused: bool) -> Line<'static> {
    let marker = if field.is_editing() { "✎" } else { " " };
    let mut spans = vec![
        Span::styled(format!("{} ", field.label), Style::default().fg(Color::Gray)),
        Span::styled(format!(" {} ", field.display()), field_style(focused)),
        Span::raw(marker),
    ];
    if focused {
        let (min, max) = field.bounds();
        spans.push(Span::styled(
            format!(" {}-{}", min, max),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

fn text_line(field: &TextField, focused: bool) -> Line<'static> {
    let content = if focused {
        // Show the cursor position inside the focused field
        let mut shown: String = field.content().chars().take(field.cursor()).collect();
        shown.push('▏');
        shown.extend(field.content().chars().skip(field.cursor()));
        shown
    } else {
        field.content().to_string()
    };
    Line::from(vec![
        Span::styled(format!("{} ", field.label), Style::default().fg(Color::Gray)),
        Span::styled(format!(" {} ", content), field_style(focused)),
    ])
}

fn section_heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::LightBlue)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Render the input form.
pub fn render_sidebar(f: &mut Frame, area: Rect, state: &DashboardState) {
    let form = &state.form;
    let focus = form.focus();
    let alignment = text_alignment(state.rtl);

    let lines = vec![
        section_heading("תאריך לידה"),
        number_line(&form.day, focus == FieldId::Day),
        number_line(&form.month, focus == FieldId::Month),
        number_line(&form.year, focus == FieldId::Year),
        Line::from(""),
        section_heading("שם מלא (בעברית)"),
        text_line(&form.first_name, focus == FieldId::FirstName),
        text_line(&form.last_name, focus == FieldId::LastName),
        Line::from(""),
        Line::from(Span::styled(
            format!("[ {} ]", BUTTON_LABEL),
            field_style(focus == FieldId::Calculate),
        ))
        .alignment(Alignment::Center),
    ];

    let block = Block::default()
        .title("הזנת נתונים")
        .title_alignment(alignment)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    let paragraph = Paragraph::new(lines).alignment(alignment).block(block);
    f.render_widget(paragraph, area);
}
