//! Analysis text component

use super::super::page::{ANALYSIS_PLACEHOLDER, ANALYSIS_TITLE};
use super::super::utils::{markup_to_lines, text_alignment};

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the analysis prose, or the placeholder when there is none.
pub fn render_analysis(f: &mut Frame, area: Rect, analysis: Option<&str>, scroll: u16, rtl: bool) {
    let lines = match analysis {
        Some(text) => markup_to_lines(text),
        None => vec![Line::styled(
            ANALYSIS_PLACEHOLDER,
            Style::default().fg(Color::LightBlue),
        )],
    };

    let block = Block::default()
        .title(ANALYSIS_TITLE)
        .title_alignment(text_alignment(rtl))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    let paragraph = Paragraph::new(lines)
        .alignment(text_alignment(rtl))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(block);
    f.render_widget(paragraph, area);
}
