//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};

/// Paragraph alignment for the current text direction.
pub fn text_alignment(rtl: bool) -> Alignment {
    if rtl { Alignment::Right } else { Alignment::Left }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some((date_part, time_part)) = timestamp.split_once(' ') {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    // Fall back to the raw timestamp if parsing fails
    timestamp.to_string()
}

/// Centered text padded with blank lines so it sits in the middle of a row
/// of the given height.
pub fn centered_cell_text(text: &str, height: u16) -> Text<'static> {
    let padding = height.saturating_sub(1) / 2;
    let mut lines: Vec<Line> = (0..padding).map(|_| Line::from("")).collect();
    lines.push(Line::from(text.to_string()));
    Text::from(lines).alignment(Alignment::Center)
}

/// Horizontally centered sub-area taking `percent` of the width.
pub fn centered_width(area: Rect, percent: u16) -> Rect {
    let side = (100 - percent.min(100)) / 2;
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(side),
            Constraint::Percentage(percent),
            Constraint::Percentage(side),
        ])
        .split(area)[1]
}

/// Row heights `(cycle, chakra)` for the space available to the results.
///
/// Taller rows are preferred; they shrink when the terminal is short.
pub fn row_heights(available: u16, cycle_rows: usize, chakra_rows: usize) -> (u16, u16) {
    // Borders, table header and its margin, plus the note line under the cycles
    const CYCLE_CHROME: u16 = 5;
    const CHAKRA_CHROME: u16 = 4;
    const ANALYSIS_MIN: u16 = 6;

    let needed = |cycle_height: u16, chakra_height: u16| {
        CYCLE_CHROME
            + cycle_height * cycle_rows as u16
            + CHAKRA_CHROME
            + chakra_height * chakra_rows as u16
            + ANALYSIS_MIN
    };
    [(2, 3), (1, 2)]
        .into_iter()
        .find(|&(cycle, chakra)| needed(cycle, chakra) <= available)
        .unwrap_or((1, 1))
}

/// Convert the analysis markup (`### ` headings, `- ` bullets, `**bold**`)
/// into styled lines.
pub fn markup_to_lines(text: &str) -> Vec<Line<'static>> {
    text.lines()
        .map(|raw| {
            if let Some(heading) = raw.strip_prefix("### ") {
                Line::from(Span::styled(
                    heading.to_string(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else if let Some(item) = raw.strip_prefix("- ") {
                let mut spans = vec![Span::raw("• ")];
                spans.extend(bold_spans(item));
                Line::from(spans)
            } else {
                Line::from(bold_spans(raw))
            }
        })
        .collect()
}

/// Split on `**` markers; odd segments are bold.
fn bold_spans(text: &str) -> Vec<Span<'static>> {
    text.split("**")
        .enumerate()
        .filter(|(_, segment)| !segment.is_empty())
        .map(|(i, segment)| {
            if i % 2 == 1 {
                Span::styled(
                    segment.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                )
            } else {
                Span::raw(segment.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(
            format_compact_timestamp("2026-10-19 14:05:33"),
            "10-19 14:05"
        );
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn test_row_heights_shrink_with_space() {
        assert_eq!(row_heights(60, 4, 7), (2, 3));
        assert_eq!(row_heights(35, 4, 7), (1, 2));
        assert_eq!(row_heights(10, 4, 7), (1, 1));
    }

    #[test]
    fn test_centered_cell_text_pads_above() {
        let text = centered_cell_text("7", 3);
        assert_eq!(text.lines.len(), 2);
        assert_eq!(text.lines[1].to_string(), "7");
        assert_eq!(centered_cell_text("7", 1).lines.len(), 1);
    }

    #[test]
    fn test_markup_to_lines() {
        let lines = markup_to_lines("### כותרת\n- **לב (16)**: טקסט\nרגיל");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].to_string(), "כותרת");
        assert!(lines[0].spans[0].style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(lines[1].to_string(), "• לב (16): טקסט");
        assert!(lines[1].spans[1].style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(lines[2].to_string(), "רגיל");
    }
}
