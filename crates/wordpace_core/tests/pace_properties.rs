use chrono::{Days, NaiveDate};
use wordpace_core::{compute, PaceCalculator, PacePolicy, Projection};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).expect("valid date")
}

fn days_ahead(days: u64) -> NaiveDate {
    today() + Days::new(days)
}

#[test]
fn required_rate_is_at_least_one_word() {
    for words in [1_u64, 2, 7, 99, 1_000, 250_000] {
        for span in [1_u64, 2, 30, 365, 3_650] {
            let projection = compute(Some(words), Some(days_ahead(span)), today());
            let required = projection
                .required_daily_words
                .expect("positive words and span project");
            assert!(required >= 1, "words={words} span={span}");
            assert_eq!(required, words.div_ceil(span));
        }
    }
}

#[test]
fn more_words_never_lower_the_required_rate() {
    let target = Some(days_ahead(45));
    let mut previous = 0;
    for words in (1..=5_000_u64).step_by(37) {
        let required = compute(Some(words), target, today())
            .required_daily_words
            .expect("projection");
        assert!(required >= previous, "words={words}");
        previous = required;
    }
}

#[test]
fn later_target_never_raises_the_required_rate() {
    let mut previous = u64::MAX;
    for span in 1..=400_u64 {
        let required = compute(Some(80_000), Some(days_ahead(span)), today())
            .required_daily_words
            .expect("projection");
        assert!(required <= previous, "span={span}");
        previous = required;
    }
}

#[test]
fn scenarios_bracket_the_required_rate() {
    for words in [1_u64, 3, 10, 123, 4_567, 90_001] {
        for span in [1_u64, 4, 17, 120] {
            let projection = compute(Some(words), Some(days_ahead(span)), today());
            let required = projection.required_daily_words.expect("projection");
            let slower = projection.slower.expect("slower");
            let faster = projection.faster.expect("faster");

            assert!(slower.daily_words <= required);
            assert!(required <= faster.daily_words);
            if slower.daily_words < required {
                assert!(slower.day_span >= span, "words={words} span={span}");
            }
            assert!(faster.day_span <= slower.day_span);
        }
    }
}

#[test]
fn scenario_dates_count_from_today() {
    let projection = compute(Some(1_000), Some(days_ahead(10)), today());
    assert_eq!(projection.slower_completion_date(), Some(days_ahead(13)));
    assert_eq!(projection.faster_completion_date(), Some(days_ahead(9)));
}

#[test]
fn past_target_date_is_empty_regardless_of_words() {
    let past = today() - Days::new(3);
    for words in [None, Some(0), Some(1), Some(10_000)] {
        assert_eq!(compute(words, Some(past), today()), Projection::empty());
    }
}

#[test]
fn identical_inputs_give_identical_projections() {
    let calculator = PaceCalculator::new(PacePolicy::new(75, 130).expect("valid policy"));
    let first = calculator.compute(Some(42_195), Some(days_ahead(29)), today());
    let second = calculator.compute(Some(42_195), Some(days_ahead(29)), today());
    assert_eq!(first, second);
}
