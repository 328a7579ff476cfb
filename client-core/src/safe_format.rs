//! Type-validated string interpolation for path segments.
//!
//! [`safe_format`] is the only sanctioned way caller-supplied values
//! enter a request path. Every placeholder names a converter from a
//! closed registry; the argument's string form must satisfy the
//! converter's character class or formatting fails with a typed error
//! instead of silently producing an unsafe path.
//!
//! Placeholder syntax is `{[index]:type}`:
//! - `index` (optional): zero-based argument position; when omitted, an
//!   implicit left-to-right counter advances per omitted-index
//!   placeholder, shared across the whole template
//! - `type`: one of `int`, `hex`, `str`, `ident`

use crate::error::format::FormatError;

use std::fmt::Display;

use once_cell::sync::Lazy;
use regex::Regex;

static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(?P<index>\d*):(?P<kind>[a-z]+)\}").expect("placeholder regex is valid"));

/// The closed registry of argument converters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Converter {
    /// Decimal integer.
    Int,
    /// Hexadecimal digit string; may be empty.
    Hex,
    /// Unrestricted string conversion.
    Str,
    /// Letters, digits, underscore and hyphen; may be empty.
    Ident,
}

impl Converter {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "int" => Some(Converter::Int),
            "hex" => Some(Converter::Hex),
            "str" => Some(Converter::Str),
            "ident" => Some(Converter::Ident),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Converter::Int => "int",
            Converter::Hex => "hex",
            Converter::Str => "str",
            Converter::Ident => "ident",
        }
    }

    /// Validate the argument's string form against the character class.
    fn accepts(&self, value: &str) -> bool {
        match self {
            Converter::Int => value.parse::<i64>().is_ok(),
            Converter::Hex => value.chars().all(|c| c.is_ascii_hexdigit()),
            Converter::Str => true,
            Converter::Ident => value
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'),
        }
    }
}

/// Substitute each placeholder with its type-checked argument.
///
/// # Errors
///
/// Returns [`FormatError::IndexOutOfBounds`] when a placeholder resolves
/// past the argument list, [`FormatError::UnknownType`] for a type name
/// outside the registry, and [`FormatError::Conversion`] when an
/// argument's string form violates the type's character class.
///
/// ```
/// use client_core::safe_format::safe_format;
///
/// let path = safe_format("objects/{:int}/tokens/{:hex}", &[&42, &"ab2e"]).unwrap();
/// assert_eq!(path, "objects/42/tokens/ab2e");
///
/// assert!(safe_format("{:hex}", &[&"zz"]).is_err());
/// ```
pub fn safe_format(template: &str, args: &[&dyn Display]) -> Result<String, FormatError> {
    let mut output = String::with_capacity(template.len());
    let mut cursor = 0;
    let mut auto_index = 0;

    for caps in PLACEHOLDER_RE.captures_iter(template) {
        let matched = caps.get(0).expect("whole-match group always present");
        output.push_str(&template[cursor..matched.start()]);
        cursor = matched.end();

        let explicit = &caps["index"];
        let index = if explicit.is_empty() {
            let index = auto_index;
            auto_index += 1;
            index
        } else {
            explicit.parse::<usize>().unwrap_or(usize::MAX)
        };

        let argument = args
            .get(index)
            .ok_or_else(|| FormatError::index_out_of_bounds(index, args.len()))?;
        let converter =
            Converter::from_name(&caps["kind"]).ok_or_else(|| FormatError::unknown_type(&caps["kind"]))?;

        let rendered = argument.to_string();
        if !converter.accepts(&rendered) {
            return Err(FormatError::conversion(rendered, converter.name()));
        }
        output.push_str(&rendered);
    }

    output.push_str(&template[cursor..]);
    Ok(output)
}
