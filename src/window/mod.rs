//! Resolution of the target login and the `[from, to)` contribution window.
//!
//! Explicit request values always win; missing ones fall back to configuration and then to
//! fixed defaults. The resolved strings are used verbatim both as cache key material and as
//! GraphQL variables, so no ordering check between `from` and `to` is performed.

use chrono::{DateTime, NaiveDate, SecondsFormat, TimeDelta, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::core::GhError;

/// Login used when neither the request nor the configuration names one.
pub const FALLBACK_LOGIN: &str = "octocat";

/// Length of the window when `days`/`daysBack` is absent or not a number.
pub const DEFAULT_DAYS: f64 = 90.0;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Raw request parameters, as supplied via query string or JSON body.
///
/// Numbers are accepted either as JSON numbers or as strings; empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProfileParams {
    #[serde(default, deserialize_with = "de_opt_string_from_any")]
    pub login: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string_from_any")]
    pub from: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string_from_any")]
    pub to: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string_from_any")]
    pub days: Option<String>,
    #[serde(default, rename = "daysBack", deserialize_with = "de_opt_string_from_any")]
    pub days_back: Option<String>,
}

impl ProfileParams {
    /// Field-wise merge where values from `self` (the query string) win over `body`.
    #[must_use]
    pub fn or(self, body: ProfileParams) -> ProfileParams {
        ProfileParams {
            login: self.login.or(body.login),
            from: self.from.or(body.from),
            to: self.to.or(body.to),
            days: self.days.or(body.days),
            days_back: self.days_back.or(body.days_back),
        }
    }
}

/// The resolved identity and date window for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestWindow {
    pub login: String,
    pub from: String,
    pub to: String,
}

impl RequestWindow {
    /// Deterministic cache key. Textually different windows are different keys.
    pub fn cache_key(&self) -> String {
        format!("{}:{}:{}", self.login, self.from, self.to)
    }
}

/// Turns request parameters into a [`RequestWindow`].
#[derive(Debug, Clone, Default)]
pub struct IdentityResolver {
    default_login: Option<String>,
}

impl IdentityResolver {
    /// `default_login` is the configured identity used when the request names none.
    pub fn new(default_login: Option<String>) -> Self {
        Self {
            default_login: default_login.filter(|l| !l.trim().is_empty()),
        }
    }

    pub fn default_login(&self) -> &str {
        self.default_login.as_deref().unwrap_or(FALLBACK_LOGIN)
    }

    /// Resolves `params` against the instant `now`.
    ///
    /// # Errors
    /// Returns [`GhError::InvalidParams`] when the requested number of days cannot be
    /// represented as a duration.
    pub fn resolve(
        &self,
        params: &ProfileParams,
        now: DateTime<Utc>,
    ) -> Result<RequestWindow, GhError> {
        let login = non_empty(params.login.as_deref())
            .unwrap_or_else(|| self.default_login())
            .to_string();

        let to = match non_empty(params.to.as_deref()) {
            Some(t) => t.to_string(),
            None => iso_millis(now),
        };

        let from = match non_empty(params.from.as_deref()) {
            Some(f) => f.to_string(),
            None => {
                // an explicit `to` that is not a date still anchors at `now`
                let end = non_empty(params.to.as_deref())
                    .and_then(parse_instant)
                    .unwrap_or(now);
                let days = parse_days(params);
                let span = days_to_delta(days).ok_or_else(|| {
                    GhError::InvalidParams(format!("days out of range: {days}"))
                })?;
                let start = end.checked_sub_signed(span).ok_or_else(|| {
                    GhError::InvalidParams(format!("days out of range: {days}"))
                })?;
                iso_millis(start)
            }
        };

        Ok(RequestWindow { login, from, to })
    }
}

/// ISO 8601 with millisecond precision and a `Z` suffix, e.g. `2024-03-01T12:00:00.000Z`.
pub fn iso_millis(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn non_empty(v: Option<&str>) -> Option<&str> {
    v.filter(|s| !s.trim().is_empty())
}

/// `days` wins over `daysBack`; anything that does not parse as a finite number yields the default.
fn parse_days(params: &ProfileParams) -> f64 {
    non_empty(params.days.as_deref())
        .or_else(|| non_empty(params.days_back.as_deref()))
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|d| d.is_finite())
        .unwrap_or(DEFAULT_DAYS)
}

#[allow(clippy::cast_possible_truncation)]
fn days_to_delta(days: f64) -> Option<TimeDelta> {
    let millis = (days * MILLIS_PER_DAY).round();
    if millis.abs() >= i64::MAX as f64 {
        return None;
    }
    TimeDelta::try_milliseconds(millis as i64)
}

/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates (taken as UTC midnight).
fn parse_instant(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Accepts strings, numbers, booleans or null/missing and keeps the textual form.
fn de_opt_string_from_any<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    use serde_json::Value;

    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected a string or number, got {other}"
        ))),
    }
}
