//! The ident builder: flattening, mapping keys, legalization.

use log::{debug, trace};
use thiserror::Error;

use crate::arg::Arg;
use crate::escape::escape;

const EMPTY_MESSAGE: &str = "customIdent must not be empty";

/// Raised when every argument contributed nothing to the ident.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CustomIdentError {
    message: String,
}

impl CustomIdentError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Turn a list of args into a CSS `<custom-ident>`.
///
/// Segments are joined with `_`; empty segments are skipped. A result starting
/// with a digit, or with `-` and a digit, gets a `c` prefix.
///
/// ```
/// use custom_ident::{Arg, custom_ident};
///
/// let args = [Arg::from("my"), Arg::from(vec!["custom", "ident"]), Arg::mapping([("another", true)])];
/// assert_eq!(custom_ident(&args).unwrap(), "my_custom_ident_another");
/// assert_eq!(custom_ident(&[Arg::from("1invalid")]).unwrap(), "c1invalid");
/// ```
///
/// # Errors
/// Returns [`CustomIdentError`] when the result would be empty.
pub fn custom_ident(args: &[Arg]) -> Result<String, CustomIdentError> {
    let mut ident = join_segments(args);

    // first char must not be a digit, nor a hyphen followed by a digit
    if has_illegal_start(&ident) {
        ident.insert(0, 'c');
    }

    if ident.is_empty() {
        debug!("no segments produced from {} argument(s)", args.len());
        return Err(CustomIdentError::new(EMPTY_MESSAGE));
    }

    Ok(ident)
}

fn has_illegal_start(ident: &str) -> bool {
    let mut chars = ident.chars();
    match chars.next() {
        Some(c) if c.is_ascii_digit() => true,
        Some('-') => chars.next().is_some_and(|c| c.is_ascii_digit()),
        _ => false,
    }
}

/// Flatten args into one `_`-joined string. Nested sequences recurse here and
/// are never legalized on their own.
fn join_segments(args: &[Arg]) -> String {
    let mut parts = Vec::with_capacity(args.len());
    for arg in args {
        let part = match arg {
            Arg::Sequence(items) => join_segments(items),
            Arg::Mapping(pairs) => mapping_segment(pairs),
            Arg::Scalar(scalar) => escape(&scalar.to_text()),
        };
        if part.is_empty() {
            trace!("skipping empty segment for {arg:?}");
            continue;
        }
        parts.push(part);
    }
    parts.join("_")
}

/// Keys of truthy entries, ordered by the first UTF-16 unit of the key only.
///
/// The sort is stable, so keys sharing a first character keep their order.
/// An empty key sorts first but always escapes to nothing.
fn mapping_segment(pairs: &[(String, Arg)]) -> String {
    let mut sorted: Vec<&(String, Arg)> = pairs.iter().collect();
    sorted.sort_by_key(|(key, _)| key.encode_utf16().next());

    sorted
        .into_iter()
        .filter(|(_, value)| value.is_truthy())
        .map(|(key, _)| escape(key))
        .filter(|key| !key.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}
