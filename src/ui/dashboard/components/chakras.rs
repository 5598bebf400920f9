//! Chakra table component

use super::super::page::{CHAKRAS_TITLE, ChakraTable};
use super::super::palette::chakra_row_style;
use super::super::utils::{centered_cell_text, centered_width, text_alignment};
use super::cycles::EMPHASIZED_COLUMN;

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Row, Table};

/// Share of the section width taken by the chakra table.
const TABLE_WIDTH_PERCENT: u16 = 90;

/// Render the chakra table; each row is colored by its strength.
pub fn render_chakras(f: &mut Frame, area: Rect, table: &ChakraTable, row_height: u16, rtl: bool) {
    let block = Block::default()
        .title(CHAKRAS_TITLE)
        .title_alignment(text_alignment(rtl))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

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

    let rows = table.rows.iter().map(|row| {
        Row::new(
            row.cells
                .iter()
                .map(|text| Cell::from(centered_cell_text(text, row_height))),
        )
        .style(chakra_row_style(row.strength))
        .height(row_height)
    });

    let widths: Vec<Constraint> = (0..table.header.len())
        .map(|col| {
            if col == EMPHASIZED_COLUMN {
                Constraint::Percentage(40)
            } else {
                Constraint::Percentage(30)
            }
        })
        .collect();
    let widget = Table::new(rows, widths).header(header).column_spacing(0);
    f.render_widget(widget, centered_width(inner, TABLE_WIDTH_PERCENT));
}
