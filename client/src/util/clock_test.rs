use super::*;

#[test]
fn epoch_is_1970() {
    assert_eq!(year_at(0.0), 1970);
}

#[test]
fn year_boundaries_are_utc() {
    // 2023-12-31T23:59:59.999Z and 2024-01-01T00:00:00Z
    assert_eq!(year_at(1_704_067_199_999.0), 2023);
    assert_eq!(year_at(1_704_067_200_000.0), 2024);
}

#[test]
fn pre_epoch_timestamps_round_down() {
    assert_eq!(year_at(-1.0), 1969);
}

#[test]
fn invalid_timestamps_fall_back_to_epoch_year() {
    assert_eq!(year_at(f64::NAN), 1970);
    assert_eq!(year_at(f64::INFINITY), 1970);
    assert_eq!(year_at(1e300), 1970);
}

#[cfg(not(feature = "hydrate"))]
#[test]
#[allow(clippy::cast_precision_loss)]
fn current_year_matches_system_clock() {
    let now = time::OffsetDateTime::now_utc();
    let millis = now.unix_timestamp() as f64 * 1000.0;
    assert_eq!(current_year(), year_at(millis));
}
