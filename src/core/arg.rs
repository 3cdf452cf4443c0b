//! Arguments for the formatted (`*f`) entry points

use std::fmt;
use std::sync::Arc;

/// One positional argument of a formatted log call
///
/// `Display` holds any stringifiable value. It is rendered only when the
/// record passes the level gate, so expensive or side-effecting `Display`
/// implementations cost nothing for filtered calls.
#[derive(Clone)]
pub enum Arg {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Char(char),
    Display(Arc<dyn fmt::Display + Send + Sync>),
}

impl Arg {
    /// Wrap an arbitrary `Display` value
    pub fn display<T>(value: T) -> Self
    where
        T: fmt::Display + Send + Sync + 'static,
    {
        Arg::Display(Arc::new(value))
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Arg::Int(i) => Some(*i),
            Arg::UInt(u) => i64::try_from(*u).ok(),
            Arg::Float(f) if f.is_finite() => Some(f.trunc() as i64),
            Arg::Bool(b) => Some(i64::from(*b)),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Arg::Int(i) => Some(*i as f64),
            Arg::UInt(u) => Some(*u as f64),
            Arg::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Human-readable name of the variant, used in `Debug` output
    pub fn kind(&self) -> &'static str {
        match self {
            Arg::Str(_) => "str",
            Arg::Int(_) => "int",
            Arg::UInt(_) => "uint",
            Arg::Float(_) => "float",
            Arg::Bool(_) => "bool",
            Arg::Char(_) => "char",
            Arg::Display(_) => "display",
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Str(s) => f.write_str(s),
            Arg::Int(i) => write!(f, "{}", i),
            Arg::UInt(u) => write!(f, "{}", u),
            Arg::Float(fl) => write!(f, "{}", fl),
            Arg::Bool(b) => write!(f, "{}", b),
            Arg::Char(c) => write!(f, "{}", c),
            Arg::Display(d) => write!(f, "{}", d),
        }
    }
}

impl fmt::Debug for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Rendering an opaque value here would defeat lazy formatting
            Arg::Display(_) => f.write_str("Display(..)"),
            other => write!(f, "{}({})", other.kind(), other),
        }
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Str(s)
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Str(s.to_string())
    }
}

impl From<&String> for Arg {
    fn from(s: &String) -> Self {
        Arg::Str(s.clone())
    }
}

impl From<char> for Arg {
    fn from(c: char) -> Self {
        Arg::Char(c)
    }
}

impl From<bool> for Arg {
    fn from(b: bool) -> Self {
        Arg::Bool(b)
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Arg {
            fn from(v: $t) -> Self {
                Arg::Int(i64::from(v))
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Arg {
            fn from(v: $t) -> Self {
                Arg::UInt(u64::from(v))
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<isize> for Arg {
    fn from(v: isize) -> Self {
        Arg::Int(v as i64)
    }
}

impl From<usize> for Arg {
    fn from(v: usize) -> Self {
        Arg::UInt(v as u64)
    }
}

impl From<f32> for Arg {
    fn from(v: f32) -> Self {
        Arg::Float(f64::from(v))
    }
}

impl From<f64> for Arg {
    fn from(v: f64) -> Self {
        Arg::Float(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert!(matches!(Arg::from(42), Arg::Int(42)));
        assert!(matches!(Arg::from(42u16), Arg::UInt(42)));
        assert!(matches!(Arg::from("db"), Arg::Str(ref s) if s == "db"));
        assert!(matches!(Arg::from(true), Arg::Bool(true)));
        assert!(matches!(Arg::from(1.5f32), Arg::Float(f) if f == 1.5));
    }

    #[test]
    fn test_numeric_views() {
        assert_eq!(Arg::Float(-3.9).as_i64(), Some(-3));
        assert_eq!(Arg::Bool(true).as_i64(), Some(1));
        assert_eq!(Arg::UInt(u64::MAX).as_i64(), None);
        assert_eq!(Arg::Float(f64::NAN).as_i64(), None);
        assert_eq!(Arg::Int(7).as_f64(), Some(7.0));
        assert_eq!(Arg::from("7").as_f64(), None);
    }

    #[test]
    fn test_display_wrapper() {
        let arg = Arg::display(std::net::Ipv4Addr::LOCALHOST);
        assert_eq!(arg.to_string(), "127.0.0.1");
        assert_eq!(format!("{:?}", arg), "Display(..)");
        assert_eq!(format!("{:?}", Arg::from(5)), "int(5)");
    }
}
