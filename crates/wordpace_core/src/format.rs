//! Locale-specific presentation of goals and projections.
//!
//! # Responsibility
//! - Group digits of word counts for display.
//! - Render long-form dates and the summary sentences shown to the writer.
//!
//! # Invariants
//! - Nothing here feeds back into the calculator; output is display-only.
//! - An empty projection renders no lines.

use crate::input::InputError;
use crate::model::goal::Goal;
use crate::model::projection::{PaceScenario, Projection};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const RU_MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

const EN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Display locale for numbers, dates and sentences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    Ru,
    En,
}

impl Locale {
    /// Stable locale tag (`ru|en`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ru => "ru",
            Self::En => "en",
        }
    }

    /// Thousands separator used by `group_digits`.
    pub fn group_separator(self) -> char {
        match self {
            Self::Ru => '\u{a0}',
            Self::En => ',',
        }
    }
}

impl FromStr for Locale {
    type Err = InputError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ru" | "ru-ru" => Ok(Self::Ru),
            "en" | "en-us" | "en-gb" => Ok(Self::En),
            other => Err(InputError::UnsupportedLocale(other.to_string())),
        }
    }
}

/// Formats `value` with `separator` between groups of three digits.
pub fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}

/// Formats a word count the way the given locale groups numbers.
pub fn format_word_count(value: u64, locale: Locale) -> String {
    group_digits(value, locale.group_separator())
}

/// Long-form date, e.g. `5 марта 2027 года` or `5 March 2027`.
pub fn format_long_date(date: NaiveDate, locale: Locale) -> String {
    let month_index = date.month0() as usize;
    match locale {
        Locale::Ru => format!(
            "{} {} {} года",
            date.day(),
            RU_MONTHS_GENITIVE[month_index],
            date.year()
        ),
        Locale::En => format!("{} {} {}", date.day(), EN_MONTHS[month_index], date.year()),
    }
}

/// Renders the summary sentences for a projection.
///
/// Returns the required-pace sentence followed by one sentence per scenario
/// that has a completion date. Returns an empty list for an empty projection.
pub fn render_summary(goal: &Goal, projection: &Projection, locale: Locale) -> Vec<String> {
    let (Some(required), Some(target_date)) = (projection.required_daily_words, goal.target_date)
    else {
        return Vec::new();
    };

    let mut lines = vec![required_line(required, target_date, locale)];
    for scenario in [projection.slower, projection.faster].into_iter().flatten() {
        if let Some(line) = scenario_line(&scenario, locale) {
            lines.push(line);
        }
    }
    lines
}

/// Notice shown instead of the summary while the projection is empty.
pub fn empty_notice(locale: Locale) -> &'static str {
    match locale {
        Locale::Ru => "Укажите количество слов и дату цели в будущем, чтобы получить расчёт.",
        Locale::En => "Enter a word count and a future target date to get a projection.",
    }
}

// Daily rates stay ungrouped in sentences; only the total is grouped for the input field.
fn required_line(required: u64, target_date: NaiveDate, locale: Locale) -> String {
    let words = required;
    let date = format_long_date(target_date, locale);
    match locale {
        Locale::Ru => format!(
            "Вам нужно писать {words} слов каждый день, чтобы достичь своей цели к {date}."
        ),
        Locale::En => {
            format!("You need to write {words} words every day to reach your goal by {date}.")
        }
    }
}

fn scenario_line(scenario: &PaceScenario, locale: Locale) -> Option<String> {
    let completion_date = scenario.completion_date?;
    let words = scenario.daily_words;
    let date = format_long_date(completion_date, locale);
    Some(match locale {
        Locale::Ru => format!("Если вы будете писать {words} слов в день, вы закончите к {date}."),
        Locale::En => format!("If you write {words} words a day, you will finish by {date}."),
    })
}

#[cfg(test)]
mod tests {
    use super::{format_long_date, group_digits, render_summary, Locale};
    use crate::model::goal::Goal;
    use crate::model::projection::Projection;
    use crate::pace::calculator::compute;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn group_digits_inserts_separator_every_three_digits() {
        assert_eq!(group_digits(0, ','), "0");
        assert_eq!(group_digits(999, ','), "999");
        assert_eq!(group_digits(1_000, ','), "1,000");
        assert_eq!(group_digits(12_500, ' '), "12 500");
        assert_eq!(group_digits(1_234_567, ','), "1,234,567");
    }

    #[test]
    fn long_date_uses_genitive_month_in_russian() {
        assert_eq!(format_long_date(date(2027, 3, 5), Locale::Ru), "5 марта 2027 года");
        assert_eq!(format_long_date(date(2027, 3, 5), Locale::En), "5 March 2027");
    }

    #[test]
    fn locale_parse_accepts_known_tags() {
        assert_eq!("RU".parse::<Locale>().expect("ru"), Locale::Ru);
        assert_eq!(" en-GB ".parse::<Locale>().expect("en"), Locale::En);
        assert!("de".parse::<Locale>().is_err());
    }

    #[test]
    fn summary_renders_three_sentences() {
        let goal = Goal::new(Some(1_000), Some(date(2026, 10, 28)));
        let projection = compute(goal.total_words, goal.target_date, date(2026, 10, 18));

        let lines = render_summary(&goal, &projection, Locale::En);
        assert_eq!(
            lines,
            vec![
                "You need to write 100 words every day to reach your goal by 28 October 2026."
                    .to_string(),
                "If you write 80 words a day, you will finish by 31 October 2026.".to_string(),
                "If you write 120 words a day, you will finish by 27 October 2026.".to_string(),
            ]
        );
    }

    #[test]
    fn summary_keeps_daily_rates_ungrouped() {
        let goal = Goal::new(Some(1_000_000), Some(date(2026, 10, 28)));
        let projection = compute(goal.total_words, goal.target_date, date(2026, 10, 18));

        let lines = render_summary(&goal, &projection, Locale::Ru);
        assert_eq!(
            lines[0],
            "Вам нужно писать 100000 слов каждый день, чтобы достичь своей цели к 28 октября 2026 года."
        );
        assert!(lines[1].starts_with("Если вы будете писать 80000 слов в день"));
        assert!(lines[2].starts_with("Если вы будете писать 120000 слов в день"));
        assert!(lines.iter().all(|line| !line.contains('\u{a0}')));
    }

    #[test]
    fn summary_of_empty_projection_has_no_lines() {
        let goal = Goal::new(Some(1_000), None);
        assert!(render_summary(&goal, &Projection::empty(), Locale::Ru).is_empty());
    }
}
