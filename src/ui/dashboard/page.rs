//! One render pass: decide whether to calculate, then turn the calculator
//! output into display-ready tables.

use crate::numerology::{
    CalculationOutput, Calculator, ComputationError, CycleField, InputSet, StrengthCategory,
    classify_cycle_value,
};

pub const PAGE_TITLE: &str = "מפת הצ'אקרות ומחזורי החיים";
pub const ERROR_PREFIX: &str = "אירעה שגיאה בחישוב הנומרולוגי: ";
pub const CYCLES_TITLE: &str = "1. מחזורי החיים (מתנה, משאל\"ה/שיא, אתגר)";
pub const CYCLES_NOTE: &str =
    "שימו לב: 'מתנה' ו'משאל\"ה/שיא' עשויים להכיל מספרי מאסטר וקארמה. 'אתגר' הוא תמיד חד-ספרתי.";
pub const CHAKRAS_TITLE: &str = "2. מפת תדרי הצ'אקרות";
pub const ANALYSIS_TITLE: &str = "3. שילובים (ניתוח אישיות)";
pub const ANALYSIS_PLACEHOLDER: &str = "לא נמצאו נתונים לניתוח שילובים.";
pub const IDLE_HINT: &str = "הזינו נתונים ולחצו Enter לחישוב וניתוח התדרים";

/// Cycle table headers in reading order.
const CYCLE_HEADERS: [&str; 5] = [
    "מחזור חיים",
    "תקופת חיים (גילאים)",
    "מתנה (תדר+עוצמה)",
    "משאל\"ה/שיא (תדר+עוצמה)",
    "אתגר (תדר+עוצמה)",
];

/// Chakra table headers in reading order.
const CHAKRA_HEADERS: [&str; 3] = ["צ'אקרה", "ערך", "אפיון"];

/// State carried from one render pass to the next.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderState {
    /// Set once the trigger has fired in this session.
    pub calculated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCell {
    pub text: String,
    /// Highlight category; `None` for unstyled columns.
    pub category: Option<StrengthCategory>,
}

impl TableCell {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: None,
        }
    }

    fn classified(text: impl Into<String>, category: StrengthCategory) -> Self {
        Self {
            text: text.into(),
            category: Some(category),
        }
    }
}

/// Life cycle table in visual (left to right) column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleTable {
    pub header: Vec<&'static str>,
    pub rows: Vec<Vec<TableCell>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChakraDisplayRow {
    pub cells: Vec<String>,
    pub strength: StrengthCategory,
}

/// Chakra table in visual (left to right) column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChakraTable {
    pub header: Vec<&'static str>,
    pub rows: Vec<ChakraDisplayRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsPage {
    pub cycles: CycleTable,
    pub chakras: ChakraTable,
    /// `None` when the calculator produced no analysis text.
    pub analysis: Option<String>,
}

/// What the results area shows after a render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Results {
    /// The trigger has not fired yet.
    Idle,
    Ready(Box<ResultsPage>),
    /// Only the error is shown; no partial tables.
    Failed(ComputationError),
}

/// The inline message shown for a failed calculation.
pub fn error_message(error: &ComputationError) -> String {
    format!("{ERROR_PREFIX}{error}")
}

fn visual_order<T>(mut cells: Vec<T>, rtl: bool) -> Vec<T> {
    if rtl {
        cells.reverse();
    }
    cells
}

/// Turn calculator output into display tables.
///
/// The challenge column shows only the cleaned single digit; classification
/// uses the cleaned numeric fields.
pub fn build_page(output: CalculationOutput, rtl: bool) -> ResultsPage {
    let cycle_rows = output
        .cycles
        .into_iter()
        .map(|row| {
            let wish_category = classify_cycle_value(row.wish_value, CycleField::Wish);
            let challenge_category =
                classify_cycle_value(row.challenge_value, CycleField::Challenge);
            visual_order(
                vec![
                    TableCell::plain(row.period),
                    TableCell::plain(row.ages),
                    TableCell::plain(row.gift),
                    TableCell::classified(row.wish, wish_category),
                    TableCell::classified(row.challenge_value.to_string(), challenge_category),
                ],
                rtl,
            )
        })
        .collect();

    let chakra_rows = output
        .chakras
        .into_iter()
        .map(|row| ChakraDisplayRow {
            cells: visual_order(vec![row.name, row.value, row.strength.to_string()], rtl),
            strength: row.strength,
        })
        .collect();

    let analysis = Some(output.analysis).filter(|text| !text.trim().is_empty());

    ResultsPage {
        cycles: CycleTable {
            header: visual_order(CYCLE_HEADERS.to_vec(), rtl),
            rows: cycle_rows,
        },
        chakras: ChakraTable {
            header: visual_order(CHAKRA_HEADERS.to_vec(), rtl),
            rows: chakra_rows,
        },
        analysis,
    }
}

/// Run one render pass.
///
/// The calculator is called when `trigger` fires or when a previous pass
/// already set `state.calculated`; otherwise the page stays idle.
pub fn render_pass(
    input: &InputSet,
    state: &mut RenderState,
    trigger: bool,
    rtl: bool,
    calculator: &dyn Calculator,
) -> Results {
    if !trigger && !state.calculated {
        return Results::Idle;
    }
    state.calculated = true;

    match calculator.calculate(input) {
        Ok(output) => Results::Ready(Box::new(build_page(output, rtl))),
        Err(e) => Results::Failed(e),
    }
}
