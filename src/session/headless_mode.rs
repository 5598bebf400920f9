//! Headless mode execution
//!
//! One triggered render pass printed to stdout, as text or JSON.

use crate::events::Event;
use crate::numerology::{Calculator, ComputationError, InputSet};
use crate::print_cmd_error;
use crate::ui::dashboard::page::{
    ANALYSIS_PLACEHOLDER, ANALYSIS_TITLE, CHAKRAS_TITLE, CYCLES_NOTE, CYCLES_TITLE, RenderState,
    Results, ResultsPage, error_message, render_pass,
};
use std::error::Error;

/// Runs the calculation once without a terminal UI.
///
/// # Returns
/// * `Ok(())` - Results were printed
/// * `Err` - The calculation failed; the inline message was printed first
pub fn run_headless_mode(
    input: &InputSet,
    json: bool,
    calculator: &dyn Calculator,
) -> Result<(), Box<dyn Error>> {
    if json {
        let output = calculator
            .calculate(input)
            .map_err(|e| report_failure(input, e))?;
        println!("{}", serde_json::to_string_pretty(&output)?);
        report(Event::success(format!("חושב: {}", describe(input))));
        return Ok(());
    }

    let mut render_state = RenderState::default();
    match render_pass(input, &mut render_state, true, false, calculator) {
        Results::Ready(page) => {
            print!("{}", format_page(&page));
            report(Event::success(format!("חושב: {}", describe(input))));
            Ok(())
        }
        Results::Failed(e) => Err(report_failure(input, e).into()),
        Results::Idle => Err("render pass did not run".into()),
    }
}

fn describe(input: &InputSet) -> String {
    format!(
        "{} {} {}/{}/{}",
        input.first_name, input.last_name, input.day, input.month, input.year
    )
}

fn report(event: Event) {
    if event.should_display() {
        eprintln!("{}", event);
    }
}

/// Print the inline error message once.
fn report_failure(input: &InputSet, error: ComputationError) -> ComputationError {
    log::debug!("calculation failed for {}: {}", describe(input), error);
    print_cmd_error!(&error_message(&error));
    error
}

/// Plain-text rendering of the three result sections.
pub fn format_page(page: &ResultsPage) -> String {
    let mut out = String::new();

    out.push_str(&format!("## {}\n", CYCLES_TITLE));
    out.push_str(&format!("{}\n", page.cycles.header.join(" | ")));
    for row in &page.cycles.rows {
        let cells: Vec<&str> = row.iter().map(|cell| cell.text.as_str()).collect();
        out.push_str(&format!("{}\n", cells.join(" | ")));
    }
    out.push_str(&format!("{}\n\n", CYCLES_NOTE));

    out.push_str(&format!("## {}\n", CHAKRAS_TITLE));
    out.push_str(&format!("{}\n", page.chakras.header.join(" | ")));
    for row in &page.chakras.rows {
        out.push_str(&format!("{}\n", row.cells.join(" | ")));
    }
    out.push('\n');

    out.push_str(&format!("## {}\n", ANALYSIS_TITLE));
    match &page.analysis {
        Some(text) => out.push_str(&format!("{}\n", text)),
        None => out.push_str(&format!("{}\n", ANALYSIS_PLACEHOLDER)),
    }
    out
}
