//! Combination analysis text.
//!
//! Output uses a small markup: `### ` headings, `- ` bullets and `**bold**`.

use super::category::{StrengthCategory, classify_chakra_value, is_karmic, is_master};
use super::reduce::reduce_to_digit;
use super::standard::Chart;
use crate::consts::cli_consts::cycles::PERIOD_LABELS;
use std::collections::BTreeMap;
use std::fmt::Write;

/// Minimum number of appearances for a number to count as repeating.
const REPEAT_THRESHOLD: usize = 3;

/// Short meaning of a number.
pub fn meaning(value: u32) -> String {
    let text = match value {
        0 => "פוטנציאל פתוח ובחירה חופשית",
        1 => "מנהיגות, עצמאות ויוזמה",
        2 => "שיתוף פעולה ורגישות",
        3 => "יצירתיות וביטוי עצמי",
        4 => "יציבות, סדר ועבודה מתמדת",
        5 => "חופש, שינוי והרפתקה",
        6 => "אחריות, משפחה ואהבה",
        7 => "התבוננות פנימית ורוחניות",
        8 => "עוצמה, הישגים ושפע",
        9 => "חמלה, נתינה וסגירת מעגלים",
        11 => "אינטואיציה והשראה רוחנית",
        22 => "הבונה הגדול, הגשמת חזון",
        33 => "המורה המאסטר, ריפוי ונתינה",
        13 => "חוב קארמתי של עבודה והתמדה",
        14 => "חוב קארמתי של חופש ואיפוק",
        16 => "חוב קארמתי של אגו והתעוררות",
        19 => "חוב קארמתי של עצמאות ועזרה לזולת",
        v if is_master(v) => {
            return format!("תדר מאסטר מוגבר של {}", reduce_to_digit(v));
        }
        v => return meaning(reduce_to_digit(v)),
    };
    text.to_string()
}

/// Build the analysis text for a chart.
pub fn compose_analysis(chart: &Chart) -> String {
    let mut text = String::new();

    let _ = writeln!(text, "### שביל חיים: {}", chart.life_path);
    let _ = writeln!(text, "{}", meaning(chart.life_path));

    let special: Vec<String> = chart
        .chakras
        .iter()
        .filter(|c| is_master(c.value) || is_karmic(c.value))
        .map(|c| {
            format!(
                "- **{} ({})**: {}. {}",
                c.name,
                c.value,
                classify_chakra_value(c.value),
                meaning(c.value)
            )
        })
        .collect();
    if !special.is_empty() {
        let _ = writeln!(text);
        let _ = writeln!(text, "### תדרים מיוחדים בצ'אקרות");
        for line in special {
            let _ = writeln!(text, "{line}");
        }
    }

    let combinations = combinations(chart);
    if !combinations.is_empty() {
        let _ = writeln!(text);
        let _ = writeln!(text, "### שילובים");
        for line in combinations {
            let _ = writeln!(text, "{line}");
        }
    }

    text.trim_end().to_string()
}

fn combinations(chart: &Chart) -> Vec<String> {
    let mut lines = Vec::new();

    for (cycle, label) in chart.cycles.iter().zip(PERIOD_LABELS) {
        if cycle.wish == cycle.challenge {
            lines.push(format!(
                "- **{}**: המשאלה והאתגר חולקים את התדר {}, השיעור והמתנה באים יחד",
                label, cycle.wish
            ));
        }
    }

    for pair in chart.chakras.windows(2) {
        if pair[0].value == pair[1].value {
            lines.push(format!(
                "- **{} + {}**: צ'אקרות סמוכות בתדר {}, זרימה חזקה בין המרכזים",
                pair[0].name, pair[1].name, pair[0].value
            ));
        }
    }

    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    let all_values = chart
        .cycles
        .iter()
        .flat_map(|c| [c.gift, c.wish, c.challenge])
        .chain(chart.chakras.iter().map(|c| c.value));
    for value in all_values {
        *counts.entry(value).or_default() += 1;
    }
    for (value, count) in counts {
        if count >= REPEAT_THRESHOLD {
            let emphasis = match classify_chakra_value(value) {
                StrengthCategory::Master | StrengthCategory::Karmic => " (מודגש במיוחד)",
                _ => "",
            };
            lines.push(format!(
                "- **התדר {} חוזר {} פעמים{}**: {}",
                value,
                count,
                emphasis,
                meaning(value)
            ));
        }
    }

    lines
}
