//! Calendar step units
//!
//! The step control column carries one of the tokens
//! `day | week | biweek | month | year`. `biweek` is unit=week with
//! magnitude 2. Decode failure is an explicit fallback to (1, day) at
//! the caller, not a hidden default.

/// Granularity of one calendar step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepUnit {
    Day,
    Week,
    Month,
    Year,
}

impl StepUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepUnit::Day => "day",
            StepUnit::Week => "week",
            StepUnit::Month => "month",
            StepUnit::Year => "year",
        }
    }
}

/// A (magnitude, unit) calendar step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarStep {
    pub magnitude: u32,
    pub unit: StepUnit,
}

impl CalendarStep {
    /// Parses a step token. Returns None for unrecognized tokens; the
    /// caller substitutes `CalendarStep::default()`.
    pub fn parse(token: &str) -> Option<CalendarStep> {
        match token {
            "day" => Some(CalendarStep {
                magnitude: 1,
                unit: StepUnit::Day,
            }),
            "week" => Some(CalendarStep {
                magnitude: 1,
                unit: StepUnit::Week,
            }),
            "biweek" => Some(CalendarStep {
                magnitude: 2,
                unit: StepUnit::Week,
            }),
            "month" => Some(CalendarStep {
                magnitude: 1,
                unit: StepUnit::Month,
            }),
            "year" => Some(CalendarStep {
                magnitude: 1,
                unit: StepUnit::Year,
            }),
            _ => None,
        }
    }

    /// Renders the canonical token for the step column
    pub fn token(&self) -> String {
        match (self.magnitude, self.unit) {
            (1, unit) => unit.as_str().to_string(),
            (2, StepUnit::Week) => "biweek".to_string(),
            (magnitude, unit) => format!("{} {}", magnitude, unit.as_str()),
        }
    }
}

impl Default for CalendarStep {
    /// One day
    fn default() -> Self {
        CalendarStep {
            magnitude: 1,
            unit: StepUnit::Day,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokens() {
        assert_eq!(
            CalendarStep::parse("day"),
            Some(CalendarStep {
                magnitude: 1,
                unit: StepUnit::Day
            })
        );
        assert_eq!(
            CalendarStep::parse("week"),
            Some(CalendarStep {
                magnitude: 1,
                unit: StepUnit::Week
            })
        );
        assert_eq!(
            CalendarStep::parse("biweek"),
            Some(CalendarStep {
                magnitude: 2,
                unit: StepUnit::Week
            })
        );
        assert_eq!(
            CalendarStep::parse("month"),
            Some(CalendarStep {
                magnitude: 1,
                unit: StepUnit::Month
            })
        );
        assert_eq!(
            CalendarStep::parse("year"),
            Some(CalendarStep {
                magnitude: 1,
                unit: StepUnit::Year
            })
        );
    }

    #[test]
    fn test_unrecognized_token_is_none() {
        assert_eq!(CalendarStep::parse("fortnight"), None);
        assert_eq!(CalendarStep::parse(""), None);
        assert_eq!(CalendarStep::parse("Day"), None);
    }

    #[test]
    fn test_token_round_trip() {
        for token in ["day", "week", "biweek", "month", "year"] {
            let step = CalendarStep::parse(token).unwrap();
            assert_eq!(step.token(), token);
        }
    }

    #[test]
    fn test_default_is_one_day() {
        let step = CalendarStep::default();
        assert_eq!(step.magnitude, 1);
        assert_eq!(step.unit, StepUnit::Day);
    }
}
