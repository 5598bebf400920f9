//! Strength categories and the classification rules that produce them.
//!
//! Classification always works on cleaned numeric values, never on the
//! composite display strings.

use crate::consts::cli_consts::{
    KARMIC_NUMBERS, MASTER_NUMBERS, STRONG_NUMBERS, WEAK_CHALLENGE_NUMBERS,
};
use serde::Serialize;

/// Frequency strength of a number.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
pub enum StrengthCategory {
    #[strum(to_string = "תדר מאסטר")]
    Master,
    #[strum(to_string = "תדר קארמתי")]
    Karmic,
    #[strum(to_string = "תדר חזק")]
    Strong,
    #[strum(to_string = "תדר חלש/מעכב")]
    Weak,
    #[strum(to_string = "תדר מאוזן")]
    Neutral,
    #[strum(to_string = "אתגר חזק במיוחד")]
    ExtremeChallenge,
}

/// Which life cycle column a value belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CycleField {
    /// Wish/peak (pinnacle) values; may be master or karmic.
    Wish,
    /// Challenge values; always a single digit.
    Challenge,
}

pub fn is_master(value: u32) -> bool {
    MASTER_NUMBERS.contains(&value)
}

pub fn is_karmic(value: u32) -> bool {
    KARMIC_NUMBERS.contains(&value)
}

fn is_strong(value: u32) -> bool {
    STRONG_NUMBERS.contains(&value)
}

fn is_weak_challenge(value: u32) -> bool {
    WEAK_CHALLENGE_NUMBERS.contains(&value)
}

/// Classify a life cycle value. First match wins:
/// challenge 0, master, karmic, strong, weak challenge, neutral.
pub fn classify_cycle_value(value: u32, field: CycleField) -> StrengthCategory {
    let challenge = field == CycleField::Challenge;
    if challenge && value == 0 {
        StrengthCategory::ExtremeChallenge
    } else if is_master(value) {
        StrengthCategory::Master
    } else if is_karmic(value) {
        StrengthCategory::Karmic
    } else if is_strong(value) {
        StrengthCategory::Strong
    } else if challenge && is_weak_challenge(value) {
        StrengthCategory::Weak
    } else {
        StrengthCategory::Neutral
    }
}

/// Classify a chakra value: master > karmic > weak > strong > neutral.
pub fn classify_chakra_value(value: u32) -> StrengthCategory {
    if is_master(value) {
        StrengthCategory::Master
    } else if is_karmic(value) {
        StrengthCategory::Karmic
    } else if is_weak_challenge(value) {
        StrengthCategory::Weak
    } else if is_strong(value) {
        StrengthCategory::Strong
    } else {
        StrengthCategory::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_challenge_classification() {
        for v in [1, 5, 8, 9] {
            assert_eq!(
                classify_cycle_value(v, CycleField::Challenge),
                StrengthCategory::Strong
            );
        }
        for v in [2, 7] {
            assert_eq!(
                classify_cycle_value(v, CycleField::Challenge),
                StrengthCategory::Weak
            );
        }
        assert_eq!(
            classify_cycle_value(0, CycleField::Challenge),
            StrengthCategory::ExtremeChallenge
        );
        for v in [3, 4, 6] {
            assert_eq!(
                classify_cycle_value(v, CycleField::Challenge),
                StrengthCategory::Neutral
            );
        }
    }

    #[test]
    // Master membership wins over every single-digit rule.
    fn test_master_takes_precedence() {
        for v in MASTER_NUMBERS {
            assert_eq!(
                classify_cycle_value(v, CycleField::Challenge),
                StrengthCategory::Master
            );
            assert_eq!(
                classify_cycle_value(v, CycleField::Wish),
                StrengthCategory::Master
            );
            assert_eq!(classify_chakra_value(v), StrengthCategory::Master);
        }
    }

    #[test]
    fn test_wish_karmic_and_weak_rules() {
        for v in KARMIC_NUMBERS {
            assert_eq!(
                classify_cycle_value(v, CycleField::Wish),
                StrengthCategory::Karmic
            );
        }
        // Weak and zero rules only apply to the challenge column.
        assert_eq!(
            classify_cycle_value(2, CycleField::Wish),
            StrengthCategory::Neutral
        );
        assert_eq!(
            classify_cycle_value(7, CycleField::Wish),
            StrengthCategory::Neutral
        );
        assert_eq!(
            classify_cycle_value(0, CycleField::Wish),
            StrengthCategory::Neutral
        );
        assert_eq!(
            classify_cycle_value(9, CycleField::Wish),
            StrengthCategory::Strong
        );
    }

    #[test]
    fn test_chakra_weak_beats_strong_order() {
        assert_eq!(classify_chakra_value(7), StrengthCategory::Weak);
        assert_eq!(classify_chakra_value(2), StrengthCategory::Weak);
        assert_eq!(classify_chakra_value(1), StrengthCategory::Strong);
        assert_eq!(classify_chakra_value(16), StrengthCategory::Karmic);
        assert_eq!(classify_chakra_value(4), StrengthCategory::Neutral);
    }

    #[test]
    fn test_labels_render_in_hebrew() {
        assert_eq!(StrengthCategory::Master.to_string(), "תדר מאסטר");
        assert_eq!(
            StrengthCategory::ExtremeChallenge.to_string(),
            "אתגר חזק במיוחד"
        );
    }
}
