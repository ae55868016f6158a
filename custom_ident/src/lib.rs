#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! Build CSS `<custom-ident>` tokens from loosely typed values.
//!
//! Strings, numbers, booleans, nested lists and flag maps are flattened into a
//! single underscore-joined token. Characters outside `[a-zA-Z0-9_-]` are
//! backslash-escaped, and a leading digit (or `-` + digit) gets a `c` prefix.
//!
//! ```
//! use custom_ident::{Arg, custom_ident};
//!
//! let ident = custom_ident!("foo", "bar", "baz@").unwrap();
//! assert_eq!(ident, "foo_bar_baz\\40");
//!
//! let flags = Arg::mapping([("test", Arg::from("hi")), ("oof", Arg::from(0))]);
//! let ident = custom_ident!([Arg::undefined(), Arg::null(), true.into(), false.into(), 3.into(), flags]).unwrap();
//! assert_eq!(ident, "undefined_null_true_false_3_test");
//! ```

pub mod arg;
pub mod build;
pub mod escape;
pub mod json;

pub use arg::{Arg, Scalar};
pub use build::{CustomIdentError, custom_ident};
pub use escape::{escape, is_ident_char};

/// Build a custom ident from any number of values convertible into [`Arg`].
///
/// Expands to a call to [`custom_ident()`](build::custom_ident) and returns its `Result`.
///
/// ```
/// use custom_ident::custom_ident;
///
/// assert_eq!(custom_ident!("my", "custom", "ident").unwrap(), "my_custom_ident");
/// assert!(custom_ident!().is_err());
/// ```
#[macro_export]
macro_rules! custom_ident {
    () => {
        $crate::build::custom_ident(&[])
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::build::custom_ident(&[$($crate::Arg::from($arg)),+])
    };
}
