//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the pace calculator to Dart via FRB as flat, UI-ready envelopes.
//! - Keep input sanitizing and locale formatting on the Rust side.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - An incomplete goal is a successful call with `has_projection = false`.
//! - Counts cross the boundary as `i64`; dates as ISO `YYYY-MM-DD` strings.

use chrono::{NaiveDate, NaiveTime};
use log::warn;
use std::sync::OnceLock;
use wordpace_core::{
    core_version as core_version_inner, format_word_count, init_logging as init_logging_inner,
    parse_target_date, parse_total_words, ping as ping_inner, render_summary, Clock, FixedClock,
    Locale, PaceCalculator, PacePolicy, PaceSession, Projection, SystemClock,
};

static PACE_POLICY: OnceLock<PacePolicy> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Projection envelope for the pace form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaceProjectionResponse {
    /// Whether the inputs were well-formed.
    pub ok: bool,
    /// Whether a projection is available for display.
    pub has_projection: bool,
    /// Word count re-formatted for the input field (empty when unset).
    pub formatted_total_words: String,
    pub required_daily_words: Option<i64>,
    pub slower_daily_words: Option<i64>,
    /// ISO date when writing at the slower pace.
    pub slower_completion_date: Option<String>,
    pub faster_daily_words: Option<i64>,
    /// ISO date when writing at the faster pace.
    pub faster_completion_date: Option<String>,
    /// Localized summary sentences, ready to render.
    pub lines: Vec<String>,
    /// Human-readable diagnostics; empty on success.
    pub message: String,
}

impl PaceProjectionResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            has_projection: false,
            formatted_total_words: String::new(),
            required_daily_words: None,
            slower_daily_words: None,
            slower_completion_date: None,
            faster_daily_words: None,
            faster_completion_date: None,
            lines: Vec::new(),
            message: message.into(),
        }
    }

    fn from_projection(
        projection: &Projection,
        formatted_total_words: String,
        lines: Vec<String>,
    ) -> Self {
        Self {
            ok: true,
            has_projection: !projection.is_empty(),
            formatted_total_words,
            required_daily_words: projection.required_daily_words.map(to_ffi_count),
            slower_daily_words: projection.slower_daily_words().map(to_ffi_count),
            slower_completion_date: projection.slower_completion_date().map(to_iso_date),
            faster_daily_words: projection.faster_daily_words().map(to_ffi_count),
            faster_completion_date: projection.faster_completion_date().map(to_iso_date),
            lines,
            message: String::new(),
        }
    }
}

/// Computes a pace projection from raw form values.
///
/// Input semantics:
/// - `total_words_text`: free text; non-digits are ignored.
/// - `target_date_text`: date-picker value `YYYY-MM-DD`, or empty.
/// - `today`: optional `YYYY-MM-DD` override for "now"; local clock when `None`.
/// - `locale`: `ru|en`; defaults to `ru`.
///
/// # FFI contract
/// - Sync call, O(1), no I/O besides logging.
/// - Never panics.
/// - Malformed dates, locales or policy config return `ok = false`.
#[flutter_rust_bridge::frb(sync)]
pub fn pace_project(
    total_words_text: String,
    target_date_text: String,
    today: Option<String>,
    locale: Option<String>,
) -> PaceProjectionResponse {
    match project(
        total_words_text.as_str(),
        target_date_text.as_str(),
        today.as_deref(),
        locale.as_deref(),
    ) {
        Ok(response) => response,
        Err(message) => {
            warn!("event=pace_project module=ffi status=error");
            PaceProjectionResponse::failure(format!("pace_project failed: {message}"))
        }
    }
}

/// Re-formats raw word-count text for display in the input field.
///
/// # FFI contract
/// - Sync call, never panics.
/// - Returns an empty string when the text contains no usable digits.
#[flutter_rust_bridge::frb(sync)]
pub fn format_total_words_input(raw: String, locale: Option<String>) -> String {
    let locale = resolve_locale(locale.as_deref()).unwrap_or_default();
    parse_total_words(raw.as_str())
        .map(|value| format_word_count(value, locale))
        .unwrap_or_default()
}

fn project(
    total_words_text: &str,
    target_date_text: &str,
    today: Option<&str>,
    locale: Option<&str>,
) -> Result<PaceProjectionResponse, String> {
    let locale = resolve_locale(locale)?;
    let policy = resolve_policy()?;
    let now = match parse_optional_date(today)? {
        Some(date) => date.and_time(NaiveTime::MIN),
        None => SystemClock.now(),
    };

    let mut session = PaceSession::new(PaceCalculator::new(policy), FixedClock::new(now));
    session.set_total_words_text(total_words_text);
    session
        .set_target_date_text(target_date_text)
        .map_err(|err| err.to_string())?;

    let formatted_total_words = session
        .goal()
        .total_words
        .map(|value| format_word_count(value, locale))
        .unwrap_or_default();
    let lines = render_summary(session.goal(), session.projection(), locale);
    Ok(PaceProjectionResponse::from_projection(
        session.projection(),
        formatted_total_words,
        lines,
    ))
}

fn resolve_locale(locale: Option<&str>) -> Result<Locale, String> {
    match locale.map(str::trim) {
        None | Some("") => Ok(Locale::default()),
        Some(value) => value.parse::<Locale>().map_err(|err| err.to_string()),
    }
}

fn resolve_policy() -> Result<PacePolicy, String> {
    cached_policy(&PACE_POLICY, || {
        PacePolicy::from_env().map_err(|err| err.to_string())
    })
}

/// Returns the cached policy, loading it when absent. Load errors are not cached.
fn cached_policy(
    cache: &OnceLock<PacePolicy>,
    load: impl FnOnce() -> Result<PacePolicy, String>,
) -> Result<PacePolicy, String> {
    if let Some(policy) = cache.get() {
        return Ok(*policy);
    }
    let policy = load()?;
    Ok(*cache.get_or_init(|| policy))
}

fn parse_optional_date(raw: Option<&str>) -> Result<Option<NaiveDate>, String> {
    match raw {
        Some(value) => parse_target_date(value).map_err(|err| err.to_string()),
        None => Ok(None),
    }
}

fn to_ffi_count(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn to_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
