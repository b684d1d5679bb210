use chrono::{Datelike, Utc};
use serde::Serialize;

use crate::models::resume::PRESENT;

/// How many calendar years the year pickers offer, counting the current one.
pub const YEAR_SPAN: i32 = 50;

pub const MONTHS: &[(&str, &str)] = &[
    ("Jan", "January"),
    ("Feb", "February"),
    ("Mar", "March"),
    ("Apr", "April"),
    ("May", "May"),
    ("Jun", "June"),
    ("Jul", "July"),
    ("Aug", "August"),
    ("Sep", "September"),
    ("Oct", "October"),
    ("Nov", "November"),
    ("Dec", "December"),
];

/// One dropdown choice. An empty `value` is the unselected placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateOptions {
    pub months: Vec<SelectOption>,
    pub years: Vec<SelectOption>,
    pub award_years: Vec<SelectOption>,
}

pub fn month_options() -> Vec<SelectOption> {
    std::iter::once(SelectOption::new("", "Month"))
        .chain(MONTHS.iter().map(|(v, l)| SelectOption::new(v, l)))
        .collect()
}

/// Placeholder, `Present`, then [`YEAR_SPAN`] years counting down from `current_year`.
pub fn year_options(current_year: i32) -> Vec<SelectOption> {
    let mut options = vec![
        SelectOption::new("", "Year"),
        SelectOption::new(PRESENT, PRESENT),
    ];
    options.extend((0..YEAR_SPAN).map(|i| {
        let year = (current_year - i).to_string();
        SelectOption::new(&year, &year)
    }));
    options
}

/// Award dates cannot be ongoing, so `Present` is left out.
pub fn award_year_options(current_year: i32) -> Vec<SelectOption> {
    year_options(current_year)
        .into_iter()
        .filter(|o| o.value != PRESENT)
        .collect()
}

pub fn date_options() -> DateOptions {
    let current_year = Utc::now().year();
    DateOptions {
        months: month_options(),
        years: year_options(current_year),
        award_years: award_year_options(current_year),
    }
}

/// Display form of a month/year pair as it appears on the rendered resume.
pub fn format_date(month: &str, year: &str) -> String {
    let (month, year) = (month.trim(), year.trim());
    if year == PRESENT {
        return PRESENT.to_string();
    }
    match (month.is_empty(), year.is_empty()) {
        (false, false) => format!("{month} {year}"),
        (true, false) => year.to_string(),
        _ => String::new(),
    }
}

pub fn format_range(start_month: &str, start_year: &str, end_month: &str, end_year: &str) -> String {
    let start = format_date(start_month, start_year);
    let end = format_date(end_month, end_year);
    match (start.is_empty(), end.is_empty()) {
        (false, false) => format!("{start} - {end}"),
        (false, true) => start,
        (true, false) => end,
        (true, true) => String::new(),
    }
}
