//! Wall-clock helpers.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Current calendar year in UTC. Server and browser use the same zone so
/// the rendered and hydrated footer agree.
#[must_use]
pub fn current_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        year_at(js_sys::Date::now())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().year()
    }
}

/// UTC calendar year of a Unix timestamp in milliseconds. Non-finite or
/// out-of-range input yields 1970.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn year_at(timestamp_ms: f64) -> i32 {
    if !timestamp_ms.is_finite() {
        return 1970;
    }
    let secs = (timestamp_ms / 1000.0).floor() as i64;
    time::OffsetDateTime::from_unix_timestamp(secs).map_or(1970, time::OffsetDateTime::year)
}
