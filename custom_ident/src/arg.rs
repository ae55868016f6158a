//! Input model for the ident builder.
//!
//! Every value handed to [`custom_ident`](crate::custom_ident) is an [`Arg`]: a
//! single [`Scalar`], a nested sequence of args, or a mapping whose keys are
//! kept when their values are truthy.

use std::borrow::Cow;
use std::fmt;

/// A single non-container input value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// An absent value. Renders as `undefined`.
    Undefined,
    /// An explicit null. Renders as `null`.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

/// One argument to the ident builder.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Scalar(Scalar),
    /// Flattened recursively and joined as one segment.
    Sequence(Vec<Arg>),
    /// Key/value pairs in insertion order. Only the keys of truthy values are used.
    Mapping(Vec<(String, Arg)>),
}

impl Scalar {
    /// Text form of the scalar, as it is fed to the escaper.
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Scalar::Str(s) => Cow::Borrowed(s),
            other => Cow::Owned(other.to_string()),
        }
    }

    /// Loose truthiness: `false`, `0`, `-0`, `NaN`, `""`, null and undefined are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Scalar::Undefined | Scalar::Null => false,
            Scalar::Bool(b) => *b,
            Scalar::Int(n) => *n != 0,
            Scalar::Float(f) => !(f.is_nan() || *f == 0.0),
            Scalar::Str(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Undefined => f.write_str("undefined"),
            Scalar::Null => f.write_str("null"),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Int(n) => write!(f, "{n}"),
            Scalar::Float(x) => f.write_str(&number_text(*x)),
            Scalar::Str(s) => f.write_str(s),
        }
    }
}

/// Render a float the way `Number.prototype.toString` does.
///
/// Rust's `Display` already produces the shortest round-trip digits; only the
/// special values and the exponent cutoffs (`< 1e-6`, `>= 1e21`) differ.
fn number_text(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let magnitude = value.abs();
    if magnitude == 0.0 {
        return "0".to_string();
    }
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{value}");
    }
    let exponential = format!("{value:e}");
    match exponential.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exponential,
    }
}

impl Arg {
    /// An absent value, rendered as `undefined`.
    pub fn undefined() -> Self {
        Arg::Scalar(Scalar::Undefined)
    }

    pub fn null() -> Self {
        Arg::Scalar(Scalar::Null)
    }

    /// Build a sequence from anything convertible into args.
    pub fn sequence<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Arg>,
    {
        Arg::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// Build a mapping, keeping the given pair order.
    ///
    /// ```
    /// use custom_ident::{Arg, custom_ident};
    ///
    /// let flags = Arg::mapping([("my", true), ("custom", false), ("ident", true)]);
    /// assert_eq!(custom_ident(&[flags]).unwrap(), "ident_my");
    /// ```
    pub fn mapping<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Arg>,
    {
        Arg::Mapping(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    /// Sequences and mappings are always truthy, even when empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            Arg::Scalar(scalar) => scalar.is_truthy(),
            Arg::Sequence(_) | Arg::Mapping(_) => true,
        }
    }
}

impl From<Scalar> for Arg {
    fn from(scalar: Scalar) -> Self {
        Arg::Scalar(scalar)
    }
}

macro_rules! scalar_conversions {
    ($($ty:ty => |$v:ident| $body:expr),+ $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                fn from($v: $ty) -> Self {
                    $body
                }
            }

            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Arg::Scalar(Scalar::from(value))
                }
            }
        )+
    };
}

#[allow(clippy::cast_precision_loss)]
fn wide_int(value: u64) -> Scalar {
    i64::try_from(value).map_or(Scalar::Float(value as f64), Scalar::Int)
}

scalar_conversions! {
    bool => |v| Scalar::Bool(v),
    i8 => |v| Scalar::Int(i64::from(v)),
    i16 => |v| Scalar::Int(i64::from(v)),
    i32 => |v| Scalar::Int(i64::from(v)),
    i64 => |v| Scalar::Int(v),
    isize => |v| Scalar::Int(v as i64),
    u8 => |v| Scalar::Int(i64::from(v)),
    u16 => |v| Scalar::Int(i64::from(v)),
    u32 => |v| Scalar::Int(i64::from(v)),
    u64 => |v| wide_int(v),
    usize => |v| wide_int(v as u64),
    f32 => |v| Scalar::Float(f64::from(v)),
    f64 => |v| Scalar::Float(v),
    char => |v| Scalar::Str(v.to_string()),
    &str => |v| Scalar::Str(v.to_string()),
    String => |v| Scalar::Str(v),
    &String => |v| Scalar::Str(v.clone()),
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Arg::undefined, Into::into)
    }
}

impl<T: Into<Arg>> From<Vec<T>> for Arg {
    fn from(items: Vec<T>) -> Self {
        Arg::sequence(items)
    }
}

impl<T: Into<Arg>, const N: usize> From<[T; N]> for Arg {
    fn from(items: [T; N]) -> Self {
        Arg::sequence(items)
    }
}

impl<T: Clone + Into<Arg>> From<&[T]> for Arg {
    fn from(items: &[T]) -> Self {
        Arg::sequence(items.iter().cloned())
    }
}
