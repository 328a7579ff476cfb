// Unit tests for the resource path builder.

use crate::error::format::FormatError;
use crate::resource::ResourcePath;

/// **VALUE**: Verifies the documented zero-filter policy: a numeric
/// filter of 0 is "not specified" and omitted from the path.
///
/// **WHY THIS MATTERS**: The backend parses filter segments
/// positionally; emitting `from=0` would change the query, not narrow
/// it. The policy makes filter value 0 unrepresentable - a known
/// limitation callers rely on being stable.
#[test]
fn given_zero_and_present_filters_when_built_then_zero_is_omitted() {
    let path = ResourcePath::new("vouchers")
        .filter_int("from", Some(0))
        .unwrap()
        .filter_ident("gid", Some("g1"))
        .unwrap()
        .build();

    assert_eq!(path, "vouchers/gid=g1");
}

#[test]
fn given_full_filter_chain_when_built_then_order_is_preserved() {
    let path = ResourcePath::new("vouchers")
        .maybe_ident(Some("a1b2c3"))
        .unwrap()
        .filter_int("from", Some(42))
        .unwrap()
        .filter_int("to", Some(7))
        .unwrap()
        .filter_ident("gid", Some("g1"))
        .unwrap()
        .filter_stamp("valid_after", Some("20240101T000000"))
        .unwrap()
        .filter_int("last", Some(10))
        .unwrap()
        .build();

    assert_eq!(
        path,
        "vouchers/a1b2c3/from=42/to=7/gid=g1/valid_after=20240101T000000/last=10"
    );
}

#[test]
fn given_absent_filters_when_built_then_only_base_remains() {
    let path = ResourcePath::new("registry/objects")
        .maybe_int(None)
        .unwrap()
        .filter_stamp("since", None)
        .unwrap()
        .filter_int("first", None)
        .unwrap()
        .build();

    assert_eq!(path, "registry/objects");
}

#[test]
fn given_empty_string_filter_when_built_then_treated_as_absent() {
    let path = ResourcePath::new("vouchers")
        .maybe_ident(Some(""))
        .unwrap()
        .filter_ident("gid", Some(""))
        .unwrap()
        .build();

    assert_eq!(path, "vouchers");
}

#[test]
fn given_positional_segments_when_built_then_each_is_slash_prefixed() {
    let path = ResourcePath::new("objects")
        .int(42)
        .unwrap()
        .raw("orders")
        .maybe_int(Some(9))
        .unwrap()
        .build();

    assert_eq!(path, "objects/42/orders/9");
}

/// **VALUE**: Verifies a path-reshaping value cannot pass the builder.
///
/// **BUG THIS CATCHES**: Would catch any combinator bypassing the safe
/// formatter and splicing raw caller data into the path.
#[test]
fn given_segment_separator_in_value_when_built_then_returns_conversion_error() {
    let result = ResourcePath::new("vouchers").filter_ident("gid", Some("g1/../admin"));

    assert!(matches!(
        result,
        Err(FormatError::Conversion { kind: "ident", .. })
    ));
}

#[test]
fn given_extended_timestamp_when_built_then_rejected() {
    // Filters carry ISO 8601 basic stamps; the extended form's colons
    // are not path-safe.
    let result = ResourcePath::new("vouchers").filter_stamp("valid_after", Some("2024-01-01T00:00:00"));

    assert!(result.is_err());
}
