//! Built-in calculator: life cycles, pinnacles and challenges from the birth
//! date, chakra frequencies from the date and the name values.

use super::analysis::compose_analysis;
use super::category::{CycleField, classify_chakra_value, classify_cycle_value};
use super::error::ComputationError;
use super::gematria::{combine_values, name_value};
use super::reduce::{digit_sum, reduce_keeping_special, reduce_to_digit};
use super::{CalculationOutput, Calculator, ChakraRow, CycleRow, InputSet};
use crate::consts::cli_consts::chakras;
use crate::consts::cli_consts::cycles::{CYCLE_SPAN_YEARS, FIRST_CYCLE_BASE_AGE, PERIOD_LABELS};
use chrono::NaiveDate;

const FIRST_NAME_FIELD: &str = "שם פרטי";
const LAST_NAME_FIELD: &str = "שם משפחה";

/// Numbers of one life cycle before formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleNumbers {
    pub start_age: u32,
    /// `None` for the open-ended last cycle.
    pub end_age: Option<u32>,
    pub gift: u32,
    pub wish: u32,
    pub challenge: u32,
}

/// One chakra before formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChakraNumber {
    pub name: &'static str,
    pub frequency_hz: u32,
    pub value: u32,
}

/// All numbers derived from one input set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chart {
    pub life_path: u32,
    pub cycles: [CycleNumbers; 4],
    pub chakras: [ChakraNumber; 7],
}

impl Chart {
    /// Derive the chart from a validated date and the two name values.
    ///
    /// # Errors
    /// `Internal` when the full name value overflows.
    pub fn new(
        day: u32,
        month: u32,
        year: u32,
        first_value: u32,
        last_value: u32,
    ) -> Result<Self, ComputationError> {
        let full_value = combine_values(first_value, last_value)?;
        let (ds_day, ds_month, ds_year) = (digit_sum(day), digit_sum(month), digit_sum(year));
        let life_path = reduce_keeping_special(ds_day + ds_month + ds_year);

        // Pinnacles
        let p1 = reduce_keeping_special(ds_month + ds_day);
        let p2 = reduce_keeping_special(ds_day + ds_year);
        let p3 = reduce_keeping_special(p1 + p2);
        let p4 = reduce_keeping_special(ds_month + ds_year);

        // Challenges always work on single digits
        let (d, m, y) = (
            reduce_to_digit(day),
            reduce_to_digit(month),
            reduce_to_digit(year),
        );
        let c1 = m.abs_diff(d);
        let c2 = d.abs_diff(y);
        let c3 = c1.abs_diff(c2);
        let c4 = m.abs_diff(y);

        let gifts = [
            reduce_keeping_special(month),
            reduce_keeping_special(day),
            reduce_keeping_special(year),
            life_path,
        ];
        let wishes = [p1, p2, p3, p4];
        let challenges = [c1, c2, c3, c4];

        let first_end = FIRST_CYCLE_BASE_AGE.saturating_sub(reduce_to_digit(life_path));
        let mut cycles = [CycleNumbers {
            start_age: 0,
            end_age: None,
            gift: 0,
            wish: 0,
            challenge: 0,
        }; 4];
        let mut start_age = 0;
        for (i, cycle) in cycles.iter_mut().enumerate() {
            let end_age = match i {
                0 => Some(first_end),
                3 => None,
                _ => Some(start_age + CYCLE_SPAN_YEARS - 1),
            };
            *cycle = CycleNumbers {
                start_age,
                end_age,
                gift: gifts[i],
                wish: wishes[i],
                challenge: challenges[i],
            };
            if let Some(end) = end_age {
                start_age = end + 1;
            }
        }

        let chakra = |(name, frequency_hz): (&'static str, u32), value: u32| ChakraNumber {
            name,
            frequency_hz,
            value,
        };
        let chakras = [
            chakra(chakras::ROOT, reduce_keeping_special(year)),
            chakra(chakras::SACRAL, reduce_keeping_special(month)),
            chakra(chakras::SOLAR_PLEXUS, reduce_keeping_special(day)),
            chakra(chakras::HEART, reduce_keeping_special(first_value)),
            chakra(chakras::THROAT, reduce_keeping_special(full_value)),
            chakra(chakras::THIRD_EYE, reduce_keeping_special(last_value)),
            chakra(chakras::CROWN, life_path),
        ];

        log::debug!(
            "chart for {day}/{month}/{year}: life path {life_path}, pinnacles {wishes:?}, challenges {challenges:?}"
        );

        Ok(Self {
            life_path,
            cycles,
            chakras,
        })
    }

    fn cycle_rows(&self) -> Vec<CycleRow> {
        self.cycles
            .iter()
            .zip(PERIOD_LABELS)
            .map(|(cycle, label)| {
                let ages = match cycle.end_age {
                    Some(end) => format!("{}-{}", cycle.start_age, end),
                    None => format!("{}+", cycle.start_age),
                };
                CycleRow {
                    period: label.to_string(),
                    ages,
                    gift: with_strength(cycle.gift, CycleField::Wish),
                    wish: with_strength(cycle.wish, CycleField::Wish),
                    challenge: with_strength(cycle.challenge, CycleField::Challenge),
                    wish_value: cycle.wish,
                    challenge_value: cycle.challenge,
                }
            })
            .collect()
    }

    fn chakra_rows(&self) -> Vec<ChakraRow> {
        self.chakras
            .iter()
            .map(|chakra| ChakraRow {
                name: chakra.name.to_string(),
                value: format!("{} · {}Hz", chakra.value, chakra.frequency_hz),
                strength: classify_chakra_value(chakra.value),
            })
            .collect()
    }
}

fn with_strength(value: u32, field: CycleField) -> String {
    format!("{} | {}", value, classify_cycle_value(value, field))
}

/// The default calculator shipped with the dashboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCalculator;

impl Calculator for StandardCalculator {
    fn calculate(&self, input: &InputSet) -> Result<CalculationOutput, ComputationError> {
        let invalid_date = || ComputationError::InvalidDate {
            day: input.day,
            month: input.month,
            year: input.year,
        };
        NaiveDate::from_ymd_opt(input.year, input.month, input.day).ok_or_else(invalid_date)?;
        let year = u32::try_from(input.year).map_err(|_| invalid_date())?;

        let first_value = name_value(&input.first_name, FIRST_NAME_FIELD)?;
        let last_value = name_value(&input.last_name, LAST_NAME_FIELD)?;

        let chart = Chart::new(input.day, input.month, year, first_value, last_value)?;
        Ok(CalculationOutput {
            cycles: chart.cycle_rows(),
            chakras: chart.chakra_rows(),
            analysis: compose_analysis(&chart),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerology::StrengthCategory;

    fn default_input() -> InputSet {
        InputSet {
            day: 26,
            month: 11,
            year: 1976,
            first_name: "תומר".to_string(),
            last_name: "נוי".to_string(),
        }
    }

    #[test]
    fn test_default_chart_numbers() {
        let chart = Chart::new(26, 11, 1976, 646, 66).unwrap();
        assert_eq!(chart.life_path, 33);
        let wishes: Vec<u32> = chart.cycles.iter().map(|c| c.wish).collect();
        let challenges: Vec<u32> = chart.cycles.iter().map(|c| c.challenge).collect();
        let gifts: Vec<u32> = chart.cycles.iter().map(|c| c.gift).collect();
        assert_eq!(wishes, vec![1, 4, 5, 7]);
        assert_eq!(challenges, vec![6, 3, 3, 3]);
        assert_eq!(gifts, vec![11, 8, 5, 33]);
    }

    #[test]
    // The first cycle ends at 36 minus the life path digit, later ones span 9 years.
    fn test_cycle_boundaries() {
        let chart = Chart::new(26, 11, 1976, 646, 66).unwrap();
        let ages: Vec<(u32, Option<u32>)> = chart
            .cycles
            .iter()
            .map(|c| (c.start_age, c.end_age))
            .collect();
        assert_eq!(
            ages,
            vec![(0, Some(30)), (31, Some(39)), (40, Some(48)), (49, None)]
        );
    }

    #[test]
    fn test_default_input_produces_complete_output() {
        let output = StandardCalculator.calculate(&default_input()).unwrap();
        assert_eq!(output.cycles.len(), 4);
        assert_eq!(output.chakras.len(), 7);
        assert!(!output.analysis.is_empty());
        for row in &output.cycles {
            assert!(row.challenge_value <= 9);
        }
        assert_eq!(output.cycles[0].gift, "11 | תדר מאסטר");
        assert_eq!(output.cycles[3].ages, "49+");
    }

    #[test]
    fn test_chakra_strengths() {
        let output = StandardCalculator.calculate(&default_input()).unwrap();
        let strengths: Vec<StrengthCategory> = output.chakras.iter().map(|c| c.strength).collect();
        assert_eq!(
            strengths,
            vec![
                StrengthCategory::Strong,
                StrengthCategory::Master,
                StrengthCategory::Strong,
                StrengthCategory::Karmic,
                StrengthCategory::Strong,
                StrengthCategory::Master,
                StrengthCategory::Master,
            ]
        );
        assert_eq!(output.chakras[3].value, "16 · 639Hz");
    }

    #[test]
    fn test_rejects_impossible_dates() {
        let mut input = default_input();
        input.day = 31;
        assert_eq!(
            StandardCalculator.calculate(&input),
            Err(ComputationError::InvalidDate {
                day: 31,
                month: 11,
                year: 1976
            })
        );
        input.day = 29;
        input.month = 2;
        input.year = 1900;
        assert!(StandardCalculator.calculate(&input).is_err());
        input.year = 2000;
        assert!(StandardCalculator.calculate(&input).is_ok());
    }

    #[test]
    fn test_rejects_bad_names() {
        let mut input = default_input();
        input.last_name = String::new();
        assert_eq!(
            StandardCalculator.calculate(&input),
            Err(ComputationError::EmptyName(LAST_NAME_FIELD))
        );
    }

    #[test]
    fn test_full_name_overflow_is_an_error() {
        assert!(matches!(
            Chart::new(26, 11, 1976, u32::MAX, 66),
            Err(ComputationError::Internal(_))
        ));
    }

    #[test]
    fn test_calculation_is_deterministic() {
        let first = StandardCalculator.calculate(&default_input()).unwrap();
        let second = StandardCalculator.calculate(&default_input()).unwrap();
        assert_eq!(first, second);
    }
}
