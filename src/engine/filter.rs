use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::ledger::{CategoryFilter, Transaction};

/// User-chosen criteria for deriving a view of the ledger. Reconstructed per
/// UI interaction; absent bounds mean unbounded on that side.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FilterConfig {
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub category: CategoryFilter,
    /// Case-insensitive substring match against the description. Empty means
    /// no constraint.
    pub search: String,
}

impl FilterConfig {
    /// Builds a config from raw UI strings. Unparseable date bounds fail open
    /// (treated as unbounded) so an over-restrictive failure never hides all
    /// data; unknown category names match nothing.
    pub fn from_raw(
        date_from: Option<&str>,
        date_to: Option<&str>,
        category: &str,
        search: &str,
    ) -> Self {
        Self {
            date_from: date_from.and_then(parse_bound),
            date_to: date_to.and_then(parse_bound),
            category: CategoryFilter::parse(category),
            search: search.to_string(),
        }
    }
}

fn parse_bound(raw: &str) -> Option<NaiveDate> {
    match raw.parse::<NaiveDate>() {
        Ok(date) => Some(date),
        Err(_) => {
            tracing::debug!(bound = raw, "unparseable date bound, treating as unbounded");
            None
        }
    }
}

/// Compiles a filter configuration into a single predicate over a
/// transaction record. Pure function of the config; both date bounds are
/// inclusive. An inverted range (from > to) simply matches nothing.
pub fn build(config: &FilterConfig) -> impl Fn(&Transaction) -> bool + '_ {
    let search = config.search.to_lowercase();
    move |txn: &Transaction| {
        let matches_date = config.date_from.map_or(true, |from| txn.date >= from)
            && config.date_to.map_or(true, |to| txn.date <= to);
        let matches_category = config.category.matches(txn.category);
        let matches_search =
            search.is_empty() || txn.description.to_lowercase().contains(&search);
        matches_date && matches_category && matches_search
    }
}

/// Date-range presets offered by the filter UI. Switching presets rebuilds
/// the bounds from scratch; custom bounds are not remembered across presets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateRangePreset {
    #[default]
    All,
    ThisWeek,
    ThisMonth,
    LastThreeMonths,
    Custom {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
}

impl DateRangePreset {
    /// Resolves the preset into inclusive bounds relative to `today`. Weeks
    /// run Sunday through Saturday. Either custom bound may be absent,
    /// leaving that side unbounded.
    pub fn bounds(&self, today: NaiveDate) -> (Option<NaiveDate>, Option<NaiveDate>) {
        match self {
            DateRangePreset::All => (None, None),
            DateRangePreset::ThisWeek => {
                let start = today - Duration::days(today.weekday().num_days_from_sunday() as i64);
                (Some(start), Some(start + Duration::days(6)))
            }
            DateRangePreset::ThisMonth => {
                (Some(month_start(today)), Some(month_end(today)))
            }
            DateRangePreset::LastThreeMonths => {
                let from = month_start(shift_months_back(today, 2));
                (Some(from), Some(month_end(today)))
            }
            DateRangePreset::Custom { from, to } => (*from, *to),
        }
    }
}

fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn month_end(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|first_next| first_next - Duration::days(1))
        .unwrap_or(date)
}

fn shift_months_back(date: NaiveDate, months: u32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 - months as i32;
    while month < 1 {
        month += 12;
        year -= 1;
    }
    NaiveDate::from_ymd_opt(year, month as u32, 1).unwrap_or(date)
}
