//! Command-line pace calculator.
//!
//! # Responsibility
//! - Accept the same two goal fields the writing form takes.
//! - Print the localized summary, or the projection as JSON.

use chrono::{NaiveDateTime, NaiveTime};
use clap::Parser;
use log::info;
use std::process::ExitCode;
use wordpace_core::{
    default_log_level, empty_notice, init_logging, parse_target_date, render_summary, Clock,
    FixedClock, Locale, PaceCalculator, PacePolicy, PaceSession, SystemClock,
};

#[derive(Parser, Debug)]
#[command(name = "wordpace")]
#[command(about = "Works out how many words a day you need to hit a target date")]
#[command(version)]
struct CliArgs {
    /// Total words to write. Non-digits are ignored, so "50 000" and "50,000" both work
    #[arg(short, long, value_name = "TEXT")]
    words: Option<String>,

    /// Target date in YYYY-MM-DD form
    #[arg(short, long, value_name = "DATE")]
    target: Option<String>,

    /// Count from this day instead of the local clock (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    today: Option<String>,

    /// Output language: ru or en
    #[arg(long, default_value = "ru")]
    locale: String,

    /// Slower pace as a percentage of the required rate (overrides WORDPACE_SLOWER_PERCENT)
    #[arg(long, value_name = "PERCENT")]
    slower_percent: Option<u32>,

    /// Faster pace as a percentage of the required rate (overrides WORDPACE_FASTER_PERCENT)
    #[arg(long, value_name = "PERCENT")]
    faster_percent: Option<u32>,

    /// Print the goal and projection as JSON
    #[arg(long)]
    json: bool,

    /// Log level for the rolling log file (trace|debug|info|warn|error)
    #[arg(long, env = "WORDPACE_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for log files; logging stays off when unset
    #[arg(long, env = "WORDPACE_LOG_DIR")]
    log_dir: Option<String>,
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    if let Some(log_dir) = args.log_dir.as_deref() {
        let level = args.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("wordpace: {err}");
            return ExitCode::from(2);
        }
    }

    let now = match pinned_now(args.today.as_deref()) {
        Ok(Some(now)) => now,
        Ok(None) => SystemClock.now(),
        Err(err) => {
            eprintln!("wordpace: {err}");
            return ExitCode::from(2);
        }
    };

    let policy = match resolve_policy(&args, |key| std::env::var(key).ok()) {
        Ok(policy) => policy,
        Err(err) => {
            eprintln!("wordpace: {err}");
            return ExitCode::from(2);
        }
    };

    match render_output(&args, policy, now) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("wordpace: {err}");
            ExitCode::from(2)
        }
    }
}

fn pinned_now(today: Option<&str>) -> Result<Option<NaiveDateTime>, String> {
    let Some(raw) = today else {
        return Ok(None);
    };
    let date = parse_target_date(raw)
        .map_err(|err| format!("--today: {err}"))?
        .ok_or_else(|| "--today must not be blank".to_string())?;
    Ok(Some(date.and_time(NaiveTime::MIN)))
}

/// Environment policy first, then `--slower-percent` / `--faster-percent` on top.
fn resolve_policy(
    args: &CliArgs,
    lookup: impl Fn(&'static str) -> Option<String>,
) -> Result<PacePolicy, String> {
    let base = PacePolicy::from_lookup(lookup).map_err(|err| err.to_string())?;
    PacePolicy::new(
        args.slower_percent.unwrap_or(base.slower_percent()),
        args.faster_percent.unwrap_or(base.faster_percent()),
    )
    .map_err(|err| err.to_string())
}

fn render_output(
    args: &CliArgs,
    policy: PacePolicy,
    now: NaiveDateTime,
) -> Result<String, String> {
    let locale = args
        .locale
        .parse::<Locale>()
        .map_err(|err| err.to_string())?;

    let mut session = PaceSession::new(PaceCalculator::new(policy), FixedClock::new(now));
    session.set_total_words_text(args.words.as_deref().unwrap_or_default());
    session
        .set_target_date_text(args.target.as_deref().unwrap_or_default())
        .map_err(|err| err.to_string())?;

    let goal = session.goal();
    let projection = session.projection();
    info!(
        "event=cli_projection module=cli status=ok has_projection={} locale={}",
        !projection.is_empty(),
        locale.as_str()
    );

    if args.json {
        let payload = serde_json::json!({
            "goal": goal,
            "policy": policy,
            "projection": projection,
        });
        return serde_json::to_string_pretty(&payload)
            .map_err(|err| format!("failed to encode projection: {err}"));
    }

    let lines = render_summary(goal, projection, locale);
    if lines.is_empty() {
        return Ok(empty_notice(locale).to_string());
    }
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::{pinned_now, render_output, resolve_policy, CliArgs};
    use chrono::NaiveDateTime;
    use clap::Parser;
    use wordpace_core::pace::policy::{FASTER_PERCENT_ENV, SLOWER_PERCENT_ENV};
    use wordpace_core::PacePolicy;

    fn now() -> NaiveDateTime {
        NaiveDateTime::parse_from_str("2026-10-18 09:00:00", "%Y-%m-%d %H:%M:%S")
            .expect("valid test instant")
    }

    fn render(argv: &[&str]) -> Result<String, String> {
        let args = args(argv);
        let policy = resolve_policy(&args, |_| None)?;
        render_output(&args, policy, now())
    }

    fn env_lookup(
        slower: &'static str,
        faster: &'static str,
    ) -> impl Fn(&'static str) -> Option<String> {
        move |key| match key {
            SLOWER_PERCENT_ENV => Some(slower.to_string()),
            FASTER_PERCENT_ENV => Some(faster.to_string()),
            _ => None,
        }
    }

    fn args(argv: &[&str]) -> CliArgs {
        let mut full = vec!["wordpace"];
        full.extend_from_slice(argv);
        CliArgs::try_parse_from(full).expect("valid arguments")
    }

    #[test]
    fn prints_english_summary() {
        let output = render(&["--words", "1,000", "--target", "2026-10-28", "--locale", "en"])
            .expect("summary");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("100 words every day"));
        assert!(lines[1].contains("80 words a day") && lines[1].contains("31 October 2026"));
        assert!(lines[2].contains("120 words a day") && lines[2].contains("27 October 2026"));
    }

    #[test]
    fn prints_notice_without_target_date() {
        let output = render(&["--words", "5000", "--locale", "en"]).expect("notice");
        assert!(output.starts_with("Enter a word count"));
    }

    #[test]
    fn json_output_carries_projection_fields() {
        let output = render(&["-w", "1000", "-t", "2026-10-28", "--json"]).expect("json");
        let value: serde_json::Value = serde_json::from_str(&output).expect("valid json");
        assert_eq!(value["projection"]["required_daily_words"], 100);
        assert_eq!(value["policy"]["slower_percent"], 80);
        assert_eq!(value["goal"]["target_date"], "2026-10-28");
    }

    #[test]
    fn rejects_invalid_policy_and_date() {
        let err = render(&["-w", "1000", "-t", "2026-10-28", "--slower-percent", "0"])
            .expect_err("invalid policy");
        assert!(err.contains("slower percent"));

        let err = render(&["-w", "1000", "-t", "28.10.2026"]).expect_err("invalid date");
        assert!(err.contains("YYYY-MM-DD"));
    }

    #[test]
    fn blank_and_padded_env_values_follow_core_policy_loading() {
        let policy = resolve_policy(&args(&[]), env_lookup("", " 150 ")).expect("env policy");
        assert_eq!(policy, PacePolicy::new(80, 150).expect("valid policy"));
    }

    #[test]
    fn percent_flags_override_env_values() {
        let policy = resolve_policy(
            &args(&["--slower-percent", "60"]),
            env_lookup("70", "140"),
        )
        .expect("merged policy");
        assert_eq!(policy.slower_percent(), 60);
        assert_eq!(policy.faster_percent(), 140);
    }

    #[test]
    fn invalid_env_value_is_reported_even_with_flags() {
        let err = resolve_policy(&args(&["--faster-percent", "130"]), env_lookup("slow", ""))
            .expect_err("non-numeric env value");
        assert!(err.contains(SLOWER_PERCENT_ENV));
    }

    #[test]
    fn pinned_now_starts_at_midnight() {
        let pinned = pinned_now(Some("2026-10-18")).expect("valid date");
        assert_eq!(pinned.map(|value| value.to_string()).as_deref(), Some("2026-10-18 00:00:00"));
        assert_eq!(pinned_now(None).expect("no override"), None);
        assert!(pinned_now(Some(" ")).is_err());
    }
}
