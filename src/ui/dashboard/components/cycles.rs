//! Life cycle table component

use super::super::page::{CYCLES_NOTE, CYCLES_TITLE, CycleTable};
use super::super::palette::cycle_cell_style;
use super::super::utils::{centered_cell_text, text_alignment};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table};

/// The visually emphasized column.
pub const EMPHASIZED_COLUMN: usize = 1;

/// Render the life cycle table with its note underneath.
pub fn render_cycles(f: &mut Frame, area: Rect, table: &CycleTable, row_height: u16, rtl: bool) {
    let block = Block::default()
        .title(CYCLES_TITLE)
        .title_alignment(text_alignment(rtl))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let header = Row::new(
        table
            .header
            .iter()
            .map(|title| Cell::from(centered_cell_text(title, 1))),
    )
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
    .bottom_margin(1);

    let rows = table.rows.iter().map(|cells| {
        let cells = cells.iter().enumerate().map(|(col, cell)| {
            let mut style = cell.category.map(cycle_cell_style).unwrap_or_default();
            if col == EMPHASIZED_COLUMN {
                style = style.add_modifier(Modifier::BOLD);
            }
            Cell::from(centered_cell_text(&cell.text, row_height)).style(style)
        });
        Row::new(cells).height(row_height)
    });

    let widths = vec![Constraint::Ratio(1, 5); table.header.len()];
    let widget = Table::new(rows, widths).header(header).column_spacing(1);
    f.render_widget(widget, chunks[0]);

    let note = Paragraph::new(CYCLES_NOTE)
        .alignment(text_alignment(rtl))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(note, chunks[1]);
}
