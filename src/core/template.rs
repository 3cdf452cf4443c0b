//! printf-style template substitution for the formatted entry points
//!
//! Supported conversions:
//!
//! | token        | consumes | rendering                                                  |
//! |--------------|----------|------------------------------------------------------------|
//! | `%%`         | no       | a literal `%`                                              |
//! | `%s`, `%v`   | yes      | the argument's `Display` form                              |
//! | `%d`, `%i`   | yes      | integer; floats truncate toward zero, bools become 0/1     |
//! | `%f`, `%.Nf` | yes      | float with 6 (or N, 0-9) decimals                          |
//! | `%x`         | yes      | lower-case hexadecimal                                     |
//! | `%q`         | yes      | the argument's text, double-quoted and escaped             |
//!
//! Arguments are consumed left to right. A conversion whose argument has the
//! wrong shape falls back to the `%s` rendering. Once the arguments run out,
//! every remaining conversion is copied verbatim. Unknown conversions and a
//! trailing `%` are copied verbatim and consume nothing. Surplus arguments
//! are ignored. Rendering never fails.
//!
//! ```
//! use nlog::core::template::render;
//! use nlog::Arg;
//!
//! let msg = render("failed after %d ms (%s)", &[Arg::from(120), Arg::from("timeout")]);
//! assert_eq!(msg, "failed after 120 ms (timeout)");
//!
//! assert_eq!(render("%s and %s", &[Arg::from("one")]), "one and %s");
//! ```

use super::arg::Arg;
use std::fmt::Write;

const DEFAULT_FLOAT_PRECISION: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Conversion {
    Percent,
    Text,
    Integer,
    Float(Option<usize>),
    Hex,
    Quoted,
}

/// Parse the conversion that follows a `%`, returning it with its byte length
fn parse_conversion(directive: &str) -> Option<(Conversion, usize)> {
    let bytes = directive.as_bytes();
    let conversion = match *bytes.first()? {
        b'%' => Conversion::Percent,
        b's' | b'v' => Conversion::Text,
        b'd' | b'i' => Conversion::Integer,
        b'f' => Conversion::Float(None),
        b'x' => Conversion::Hex,
        b'q' => Conversion::Quoted,
        b'.' => {
            let digit = *bytes.get(1)?;
            if digit.is_ascii_digit() && bytes.get(2) == Some(&b'f') {
                return Some((Conversion::Float(Some(usize::from(digit - b'0'))), 3));
            }
            return None;
        }
        _ => return None,
    };
    Some((conversion, 1))
}

fn write_arg(out: &mut String, conversion: Conversion, arg: &Arg) {
    let _ = match (conversion, arg) {
        (Conversion::Integer, Arg::UInt(u)) => write!(out, "{}", u),
        (Conversion::Integer, _) => match arg.as_i64() {
            Some(i) => write!(out, "{}", i),
            None => write!(out, "{}", arg),
        },
        (Conversion::Float(precision), _) => match arg.as_f64() {
            Some(f) => write!(
                out,
                "{:.*}",
                precision.unwrap_or(DEFAULT_FLOAT_PRECISION),
                f
            ),
            None => write!(out, "{}", arg),
        },
        (Conversion::Hex, Arg::UInt(u)) => write!(out, "{:x}", u),
        (Conversion::Hex, _) => match arg.as_i64() {
            Some(i) if i < 0 => write!(out, "-{:x}", i.unsigned_abs()),
            Some(i) => write!(out, "{:x}", i),
            None => write!(out, "{}", arg),
        },
        (Conversion::Quoted, _) => write!(out, "{:?}", arg.to_string()),
        (Conversion::Text, _) | (Conversion::Percent, _) => write!(out, "{}", arg),
    };
}

/// Substitute `args` into `template`
pub fn render(template: &str, args: &[Arg]) -> String {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut args = args.iter();
    let mut rest = template;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let directive = &rest[pos + 1..];

        match parse_conversion(directive) {
            Some((Conversion::Percent, len)) => {
                out.push('%');
                rest = &directive[len..];
            }
            Some((conversion, len)) => {
                match args.next() {
                    Some(arg) => write_arg(&mut out, conversion, arg),
                    None => out.push_str(&rest[pos..pos + 1 + len]),
                }
                rest = &directive[len..];
            }
            None => {
                out.push('%');
                rest = directive;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Number of argument-consuming conversions in `template`
pub fn placeholder_count(template: &str) -> usize {
    let mut count = 0;
    let mut rest = template;
    while let Some(pos) = rest.find('%') {
        let directive = &rest[pos + 1..];
        match parse_conversion(directive) {
            Some((Conversion::Percent, len)) => rest = &directive[len..],
            Some((_, len)) => {
                count += 1;
                rest = &directive[len..];
            }
            None => rest = directive,
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(render("no placeholders here", &[]), "no placeholders here");
        assert_eq!(render("", &[Arg::from(1)]), "");
    }

    #[test]
    fn test_basic_substitution() {
        let msg = render(
            "user %s logged in from %s after %d tries",
            &[Arg::from("ana"), Arg::from("10.0.0.1"), Arg::from(3)],
        );
        assert_eq!(msg, "user ana logged in from 10.0.0.1 after 3 tries");
    }

    #[test]
    fn test_percent_escape() {
        assert_eq!(render("100%% done", &[]), "100% done");
        assert_eq!(render("%d%%", &[Arg::from(50)]), "50%");
    }

    #[test]
    fn test_missing_args_leave_literal() {
        assert_eq!(render("%s=%d", &[Arg::from("retries")]), "retries=%d");
        assert_eq!(render("%.2f and %x", &[]), "%.2f and %x");
    }

    #[test]
    fn test_surplus_args_ignored() {
        assert_eq!(render("only %s", &[Arg::from("one"), Arg::from("two")]), "only one");
    }

    #[test]
    fn test_unknown_and_trailing_percent() {
        assert_eq!(render("%z %s", &[Arg::from("a")]), "%z a");
        assert_eq!(render("50%", &[Arg::from("a")]), "50%");
        assert_eq!(render("%.f %.xf", &[Arg::from(1.0)]), "%.f %.xf");
    }

    #[test]
    fn test_integer_conversion() {
        assert_eq!(render("%d", &[Arg::from(-7)]), "-7");
        assert_eq!(render("%d", &[Arg::from(u64::MAX)]), u64::MAX.to_string());
        assert_eq!(render("%i", &[Arg::from(9.99)]), "9");
        assert_eq!(render("%d", &[Arg::from(true)]), "1");
        assert_eq!(render("%d", &[Arg::from("n/a")]), "n/a");
    }

    #[test]
    fn test_float_conversion() {
        assert_eq!(render("%f", &[Arg::from(1.5)]), "1.500000");
        assert_eq!(render("%.2f", &[Arg::from(3.14159)]), "3.14");
        assert_eq!(render("%.0f", &[Arg::from(2)]), "2");
        assert_eq!(render("%f", &[Arg::from(false)]), "false");
    }

    #[test]
    fn test_hex_and_quoted() {
        assert_eq!(render("%x", &[Arg::from(255)]), "ff");
        assert_eq!(render("%x", &[Arg::from(-255)]), "-ff");
        assert_eq!(render("%q", &[Arg::from("a \"b\"")]), r#""a \"b\"""#);
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(render("π ≈ %.3f ✓", &[Arg::from(3.14159)]), "π ≈ 3.142 ✓");
    }

    #[test]
    fn test_placeholder_count() {
        assert_eq!(placeholder_count("%s %d %% %.2f %z"), 3);
        assert_eq!(placeholder_count("plain"), 0);
    }
}
