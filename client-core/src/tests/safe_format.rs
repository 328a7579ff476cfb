// Unit tests for the type-validated formatter.

use crate::error::format::FormatError;
use crate::safe_format::safe_format;

/// **VALUE**: Verifies every converter accepts its character class and
/// nothing else.
///
/// **WHY THIS MATTERS**: The formatter is the sole injection-safety
/// mechanism for request paths; a converter accepting one character too
/// many lets caller data reshape the path the backend parses.
///
/// **BUG THIS CATCHES**: Would catch a widened character class or a
/// converter silently falling back to `str` behavior.
#[test]
fn given_each_converter_when_argument_violates_class_then_conversion_fails() {
    assert_eq!(safe_format("{:hex}", &[&"ab2e"]).unwrap(), "ab2e");
    assert_eq!(safe_format("{:int}", &[&42]).unwrap(), "42");
    assert_eq!(safe_format("{:int}", &[&-7]).unwrap(), "-7");
    assert_eq!(safe_format("{:ident}", &[&"g1_x-2"]).unwrap(), "g1_x-2");
    assert_eq!(safe_format("{:str}", &[&"any/thing at all"]).unwrap(), "any/thing at all");

    assert!(matches!(
        safe_format("{:hex}", &[&"zz"]),
        Err(FormatError::Conversion { kind: "hex", .. })
    ));
    assert!(matches!(
        safe_format("{:int}", &[&"12abc"]),
        Err(FormatError::Conversion { kind: "int", .. })
    ));
    assert!(matches!(
        safe_format("{:ident}", &[&"a/b"]),
        Err(FormatError::Conversion { kind: "ident", .. })
    ));
}

#[test]
fn given_explicit_indexes_when_formatted_then_arguments_are_reordered() {
    let result = safe_format("{1:str} {0:int}", &[&7, &"x"]).unwrap();

    assert_eq!(result, "x 7");
}

#[test]
fn given_omitted_indexes_when_formatted_then_counter_advances_left_to_right() {
    let result = safe_format("objects/{:int}/tokens/{:hex}", &[&42, &"ab2e"]).unwrap();

    assert_eq!(result, "objects/42/tokens/ab2e");
}

/// **VALUE**: Verifies the implicit counter only advances on
/// omitted-index placeholders and is shared across the whole template.
///
/// **BUG THIS CATCHES**: Would catch a counter that also advances on
/// explicit indexes, which silently shifts every later argument.
#[test]
fn given_mixed_indexes_when_formatted_then_explicit_does_not_advance_counter() {
    let result = safe_format("{1:str}-{:str}-{:str}", &[&"a", &"b", &"c"]).unwrap();

    assert_eq!(result, "b-a-b");
}

#[test]
fn given_out_of_bounds_index_when_formatted_then_returns_index_error() {
    assert!(matches!(
        safe_format("{:int}", &[]),
        Err(FormatError::IndexOutOfBounds { index: 0, supplied: 0, .. })
    ));
    assert!(matches!(
        safe_format("{5:int}", &[&1]),
        Err(FormatError::IndexOutOfBounds { index: 5, supplied: 1, .. })
    ));
}

#[test]
fn given_unknown_type_when_formatted_then_returns_unknown_type_error() {
    match safe_format("{:float}", &[&1]).unwrap_err() {
        FormatError::UnknownType { name, .. } => assert_eq!(name, "float"),
        other => panic!("expected UnknownType, got {other:?}"),
    }
}

#[test]
fn given_empty_hex_and_ident_when_formatted_then_empty_is_accepted() {
    assert_eq!(safe_format("{:hex}", &[&""]).unwrap(), "");
    assert_eq!(safe_format("{:ident}", &[&""]).unwrap(), "");
}

#[test]
fn given_text_without_placeholders_when_formatted_then_passes_through() {
    assert_eq!(safe_format("vouchers/history", &[]).unwrap(), "vouchers/history");
    // Braces that don't form a `{index:type}` placeholder stay literal.
    assert_eq!(safe_format("{} {not:a:placeholder}", &[]).unwrap(), "{} {not:a:placeholder}");
}
