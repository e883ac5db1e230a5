use crate::model::{SalaryAlignment, SalaryMatch, SalaryRange, YearlyRange};

use super::clamp_score;

/// Score used when either side has no salary information
const NEUTRAL_SCORE: u8 = 50;

/// Compare a candidate's expected salary with what a job offers.
///
/// Both ranges are normalized to yearly amounts before comparing. Currency is
/// taken as given; no conversion is attempted.
pub fn match_salary(expected: Option<&SalaryRange>, offered: Option<&SalaryRange>) -> SalaryMatch {
    let (expected, offered) = match (expected, offered) {
        (Some(e), Some(o)) => (to_yearly(e), to_yearly(o)),
        _ => {
            return SalaryMatch {
                score: NEUTRAL_SCORE,
                alignment: SalaryAlignment::Unknown,
                expected_yearly: expected.map(to_yearly),
                offered_yearly: offered.map(to_yearly),
            };
        }
    };

    let (score, alignment) = if offered.max >= expected.min && offered.min <= expected.max {
        (100, SalaryAlignment::Within)
    } else if offered.min > expected.max {
        let score = if expected.max > 0.0 {
            let excess = (offered.min - expected.max) / expected.max;
            clamp_score((80.0 + excess * 20.0).min(100.0))
        } else {
            100
        };
        (score, SalaryAlignment::Above)
    } else {
        let score = if expected.min > 0.0 {
            let shortfall = (expected.min - offered.max) / expected.min;
            clamp_score((100.0 - shortfall * 100.0).max(0.0))
        } else {
            0
        };
        (score, SalaryAlignment::Below)
    };

    SalaryMatch {
        score,
        alignment,
        expected_yearly: Some(expected),
        offered_yearly: Some(offered),
    }
}

/// Normalize a salary band to yearly amounts
pub fn to_yearly(range: &SalaryRange) -> YearlyRange {
    let factor = range.period.yearly_factor();
    YearlyRange {
        min: range.min * factor,
        max: range.max * factor,
    }
}
