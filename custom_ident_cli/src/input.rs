//! Turns command-line values and JSON files into builder arguments.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use custom_ident::Arg;
use log::debug;

/// Convert positional values, either as plain strings or as JSON documents.
pub fn from_values(values: &[String], json: bool) -> Result<Vec<Arg>> {
    if !json {
        return Ok(values.iter().map(Arg::from).collect());
    }
    values
        .iter()
        .enumerate()
        .map(|(pos, value)| {
            serde_json::from_str(value).with_context(|| format!("value {} is not valid JSON: {value}", pos + 1))
        })
        .collect()
}

/// Load arguments from a JSON file. A top-level array is spread into separate
/// arguments; any other document is a single argument.
pub fn from_file(path: &Path) -> Result<Vec<Arg>> {
    let src = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).context("while reading stdin")?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("while reading {}", path.display()))?
    };
    debug!("read {} bytes of JSON input", src.len());
    parse_document(&src).with_context(|| format!("while parsing {}", path.display()))
}

fn parse_document(src: &str) -> Result<Vec<Arg>> {
    let doc: Arg = serde_json::from_str(src)?;
    Ok(match doc {
        Arg::Sequence(items) => items,
        other => vec![other],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn plain_values_are_strings() {
        let values = vec!["1".to_string(), "{}".to_string()];
        let args = from_values(&values, false).expect("plain values");
        assert_eq!(args, vec![Arg::from("1"), Arg::from("{}")]);
    }

    #[test]
    fn json_values_are_parsed() {
        let values = vec!["1".to_string(), r#"{"a": true}"#.to_string()];
        let args = from_values(&values, true).expect("json values");
        assert_eq!(args, vec![Arg::from(1), Arg::mapping([("a", true)])]);
    }

    #[test]
    fn bad_json_names_the_position() {
        let values = vec!["\"ok\"".to_string(), "{oops".to_string()];
        let err = from_values(&values, true).expect_err("second value is invalid");
        assert!(err.to_string().contains("value 2"), "{err}");
    }

    #[test]
    fn top_level_arrays_are_spread() {
        let args = parse_document(r#"["a", ["b"]]"#).expect("array doc");
        assert_eq!(args, vec![Arg::from("a"), Arg::from(vec!["b"])]);
        let args = parse_document(r#"{"x": 1}"#).expect("object doc");
        assert_eq!(args, vec![Arg::mapping([("x", 1)])]);
    }

    #[test]
    fn reads_arguments_from_a_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"["my", {{"custom": 1}}]"#).expect("write temp file");
        let args = from_file(file.path()).expect("file args");
        assert_eq!(args, vec![Arg::from("my"), Arg::mapping([("custom", 1)])]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = from_file(Path::new("definitely/not/here.json")).expect_err("missing file");
        assert!(err.to_string().contains("while reading"), "{err}");
    }
}
