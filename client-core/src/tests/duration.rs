// Unit tests for the restricted ISO 8601 duration grammar.
// Covers all three accepted forms plus the documented soft defaults.

use crate::duration::parse_duration;

use models::TimeOffset;

#[test]
fn given_period_form_when_parsed_then_only_matched_units_are_present() {
    let offset = parse_duration("P1Y2M3D");

    assert_eq!(
        offset,
        TimeOffset {
            years: Some(1),
            months: Some(2),
            days: Some(3),
            ..TimeOffset::default()
        }
    );
}

#[test]
fn given_time_components_when_parsed_then_t_separator_distinguishes_minutes_from_months() {
    // M before the T separator means months, after it minutes.
    assert_eq!(parse_duration("P5M").months, Some(5));
    assert_eq!(parse_duration("PT5M").minutes, Some(5));
    assert!(parse_duration("P5M").minutes.is_none());
}

#[test]
fn given_mixed_case_and_whitespace_when_parsed_then_input_is_normalized_first() {
    let offset = parse_duration("P 1y 1m T 2m 1s");

    assert_eq!(
        offset,
        TimeOffset {
            years: Some(1),
            months: Some(1),
            minutes: Some(2),
            seconds: Some(1),
            ..TimeOffset::default()
        }
    );
}

#[test]
fn given_weeks_form_when_parsed_then_only_weeks_are_present() {
    assert_eq!(parse_duration("P2W"), TimeOffset::weeks(2));
    assert_eq!(parse_duration("P12w"), TimeOffset::weeks(12));
}

#[test]
fn given_basic_stamp_form_when_parsed_then_every_field_is_present() {
    let offset = parse_duration("P00010203T030201");

    assert_eq!(
        offset,
        TimeOffset {
            years: Some(1),
            months: Some(2),
            days: Some(3),
            hours: Some(3),
            minutes: Some(2),
            seconds: Some(1),
            ..TimeOffset::default()
        }
    );
}

#[test]
fn given_extended_stamp_form_when_parsed_then_matches_basic_form() {
    assert_eq!(
        parse_duration("P0001-02-03T03:02:01"),
        parse_duration("P00010203T030201")
    );
}

#[test]
fn given_partial_stamp_when_parsed_then_no_form_matches() {
    // Stamp fields are all-mandatory; a truncated stamp is garbage.
    assert!(parse_duration("P00010203T0302").is_empty());
    // Mixing separators across the two stamp subforms is also garbage.
    assert!(parse_duration("P0001-0203T03:02:01").is_empty());
}

#[test]
fn given_garbage_when_parsed_then_yields_empty_offset() {
    assert!(parse_duration("garbage").is_empty());
    assert!(parse_duration("1Y2M").is_empty());
    assert!(parse_duration("P1Y2W").is_empty());
    assert!(parse_duration("").is_empty());
}

// Pins the open grammar question: a bare "P" matches the period form
// with every component absent, and deliberately parses to the same
// empty offset as a no-match.
#[test]
fn given_bare_p_when_parsed_then_yields_empty_offset() {
    assert!(parse_duration("P").is_empty());
    assert_eq!(parse_duration("P"), parse_duration("garbage"));
}

#[test]
fn given_zero_components_when_parsed_then_zero_is_a_present_value() {
    assert_eq!(parse_duration("P0W"), TimeOffset::weeks(0));
    assert_eq!(parse_duration("P0D").days, Some(0));
}
