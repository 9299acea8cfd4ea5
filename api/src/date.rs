use chrono::{Datelike, Local, NaiveDate, TimeDelta};
use std::fmt;

/// Years outside this range would not fit the four-digit canonical form.
const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

/// A calendar day with no time-of-day and no timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).and_then(Self::from_naive)
    }

    pub fn from_naive(date: NaiveDate) -> Option<Self> {
        (MIN_YEAR..=MAX_YEAR)
            .contains(&date.year())
            .then_some(Self(date))
    }

    /// Today on the local clock.
    pub fn today() -> Self {
        let today = Local::now().date_naive();
        Self::from_naive(today).unwrap_or(Self(NaiveDate::default()))
    }

    /// Parse a `YYYY-MM-DD` string, as typed into the date prompt or passed with `--date`.
    pub fn parse(input: &str) -> Result<Self, DateParseError> {
        let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
            .map_err(|e| DateParseError::Format(input.trim().to_owned(), e))?;
        Self::from_naive(date).ok_or(DateParseError::OutOfRange(date.year()))
    }

    /// Zero-padded `YYYY-MM-DD`, the form the schedule service is keyed on.
    pub fn canonical_string(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }

    /// Heading shown above the game list, e.g. "12 May 2023".
    pub fn title(&self) -> String {
        self.0.format("%-d %b %Y").to_string()
    }

    /// Shift by `days`; `None` when the result leaves the supported year range.
    pub fn offset(self, days: i64) -> Option<Self> {
        let delta = TimeDelta::try_days(days)?;
        self.0.checked_add_signed(delta).and_then(Self::from_naive)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    Format(String, chrono::ParseError),
    OutOfRange(i32),
}

impl fmt::Display for DateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateParseError::Format(input, e) => {
                write!(f, "invalid date {input:?} (expected YYYY-MM-DD): {e}")
            }
            DateParseError::OutOfRange(year) => {
                write!(f, "year {year} is outside {MIN_YEAR}..={MAX_YEAR}")
            }
        }
    }
}

impl std::error::Error for DateParseError {}

/// The currently selected day. Mutated only by navigation; read once at the
/// start of each pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateState {
    current: CalendarDate,
}

impl Default for DateState {
    fn default() -> Self {
        Self::new(CalendarDate::today())
    }
}

impl DateState {
    pub fn new(date: CalendarDate) -> Self {
        Self { current: date }
    }

    pub fn date(&self) -> CalendarDate {
        self.current
    }

    /// Move by `delta_days` (negative = earlier). Returns false and keeps the
    /// current date if the shift would leave the supported range.
    pub fn advance(&mut self, delta_days: i64) -> bool {
        match self.current.offset(delta_days) {
            Some(next) => {
                self.current = next;
                true
            }
            None => false,
        }
    }

    pub fn set_explicit(&mut self, date: CalendarDate) {
        self.current = date;
    }

    pub fn canonical_string(&self) -> String {
        self.current.canonical_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn canonical_string_is_zero_padded() {
        assert_eq!(date(2023, 5, 2).canonical_string(), "2023-05-02");
        assert_eq!(date(7, 1, 9).canonical_string(), "0007-01-09");
        assert_eq!(date(9999, 12, 31).canonical_string(), "9999-12-31");
    }

    #[test]
    fn canonical_string_always_has_ten_chars() {
        let mut state = DateState::new(date(1999, 12, 25));
        for _ in 0..800 {
            let s = state.canonical_string();
            assert_eq!(s.len(), 10, "{s}");
            assert_eq!(&s[4..5], "-");
            assert_eq!(&s[7..8], "-");
            assert!(s.chars().filter(|c| *c != '-').all(|c| c.is_ascii_digit()));
            assert!(state.advance(1));
        }
    }

    #[test]
    fn advance_crosses_month_and_year_boundaries() {
        let mut state = DateState::new(date(2023, 1, 31));
        state.advance(1);
        assert_eq!(state.canonical_string(), "2023-02-01");

        let mut state = DateState::new(date(2022, 12, 31));
        state.advance(1);
        assert_eq!(state.canonical_string(), "2023-01-01");

        let mut state = DateState::new(date(2024, 3, 1));
        state.advance(-1);
        assert_eq!(state.canonical_string(), "2024-02-29");
    }

    #[test]
    fn advance_is_inverse_consistent() {
        let start = date(2023, 12, 31);
        for n in [-1000, -366, -31, -1, 0, 1, 28, 59, 365, 1461] {
            let mut state = DateState::new(start);
            assert!(state.advance(n));
            assert!(state.advance(-n));
            assert_eq!(state.canonical_string(), "2023-12-31", "n = {n}");
        }
    }

    #[test]
    fn advance_out_of_range_keeps_date() {
        let mut state = DateState::new(date(9999, 12, 31));
        assert!(!state.advance(1));
        assert_eq!(state.canonical_string(), "9999-12-31");

        let mut state = DateState::new(date(1, 1, 1));
        assert!(!state.advance(-1));
        assert!(!state.advance(i64::MIN));
        assert_eq!(state.canonical_string(), "0001-01-01");
    }

    #[test]
    fn set_explicit_replaces_date() {
        let mut state = DateState::new(date(2023, 5, 12));
        state.set_explicit(date(2021, 10, 12));
        assert_eq!(state.date(), date(2021, 10, 12));
    }

    #[test]
    fn parse_accepts_canonical_form() {
        assert_eq!(CalendarDate::parse("2023-05-12").unwrap(), date(2023, 5, 12));
        assert_eq!(CalendarDate::parse("  2024-02-29 ").unwrap(), date(2024, 2, 29));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            CalendarDate::parse("2023-02-30"),
            Err(DateParseError::Format(..))
        ));
        assert!(matches!(
            CalendarDate::parse("tomorrow"),
            Err(DateParseError::Format(..))
        ));
        assert!(CalendarDate::parse("").is_err());
    }

    #[test]
    fn title_uses_day_short_month_year() {
        assert_eq!(date(2023, 5, 2).title(), "2 May 2023");
        assert_eq!(date(2022, 12, 31).title(), "31 Dec 2022");
    }
}
