//! Dashboard main renderer

use super::components::{analysis, chakras, cycles, footer, header, logs, sidebar};
use super::page::{IDLE_HINT, Results, ResultsPage, error_message};
use super::state::DashboardState;
use super::utils::{row_heights, text_alignment};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Height of the input form inside the sidebar.
const FORM_HEIGHT: u16 = 14;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    let (sidebar_area, results_area) = content_areas(main_chunks[1], state.rtl);

    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(FORM_HEIGHT), Constraint::Fill(1)])
        .split(sidebar_area);
    sidebar::render_sidebar(f, sidebar_chunks[0], state);
    logs::render_logs_panel(f, sidebar_chunks[1], state);

    match &state.results {
        Results::Idle => render_message(
            f,
            results_area,
            IDLE_HINT,
            Style::default().fg(Color::Gray),
            state.rtl,
        ),
        Results::Failed(e) => render_message(
            f,
            results_area,
            &error_message(e),
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            state.rtl,
        ),
        Results::Ready(page) => render_results(f, results_area, page, state),
    }

    footer::render_footer(f, main_chunks[2]);
}

/// Split the body into `(sidebar, results)`; right-to-left puts the sidebar
/// on the right.
fn content_areas(area: Rect, rtl: bool) -> (Rect, Rect) {
    let (sidebar, results) = (Constraint::Percentage(30), Constraint::Percentage(70));
    let constraints = if rtl { [results, sidebar] } else { [sidebar, results] };
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);
    if rtl {
        (chunks[1], chunks[0])
    } else {
        (chunks[0], chunks[1])
    }
}

fn render_results(f: &mut Frame, area: Rect, page: &ResultsPage, state: &DashboardState) {
    let (cycle_height, chakra_height) =
        row_heights(area.height, page.cycles.rows.len(), page.chakras.rows.len());
    let cycles_len = 5 + cycle_height * page.cycles.rows.len() as u16;
    let chakras_len = 4 + chakra_height * page.chakras.rows.len() as u16;

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(cycles_len),
            Constraint::Length(chakras_len),
            Constraint::Min(3),
        ])
        .split(area);

    cycles::render_cycles(f, sections[0], &page.cycles, cycle_height, state.rtl);
    chakras::render_chakras(f, sections[1], &page.chakras, chakra_height, state.rtl);
    analysis::render_analysis(
        f,
        sections[2],
        page.analysis.as_deref(),
        state.analysis_scroll,
        state.rtl,
    );
}

fn render_message(f: &mut Frame, area: Rect, text: &str, style: Style, rtl: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));
    let paragraph = Paragraph::new(text.to_string())
        .style(style)
        .alignment(text_alignment(rtl))
        .wrap(Wrap { trim: true })
        .block(block);
    f.render_widget(paragraph, area);
}
