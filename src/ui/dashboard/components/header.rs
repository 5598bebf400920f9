//! Dashboard header component
//!
//! Renders the page title

use super::super::page::PAGE_TITLE;
use super::super::state::DashboardState;
use super::super::utils::text_alignment;

use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the title bar.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let version = env!("CARGO_PKG_VERSION");
    let title_text = format!("{} · v{}", PAGE_TITLE, version);

    let title = Paragraph::new(title_text)
        .alignment(text_alignment(state.rtl))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, area);
}
