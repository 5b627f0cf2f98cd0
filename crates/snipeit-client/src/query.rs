//! Query string encoding for list options.
//!
//! Options records are plain `Serialize` structs. Each field becomes one
//! `key=value` pair named after the serialized field name, and fields holding
//! their zero value (`0`, `""`, `false`, `None`) are left out. A caller
//! therefore cannot ask for a literal zero filter, which matches how the
//! server treats absent parameters.
//!
//! Values are form-encoded (`application/x-www-form-urlencoded`, space as
//! `+`). Parameter order is unspecified.

use crate::error::Error;
use serde::Serialize;
use serde_json::{Number, Value};
use url::{form_urlencoded, Url};

/// Base used only to check that a path is a relative reference.
const PROBE_BASE: &str = "http://probe.invalid/";

/// Append `options` to `path` as a query string.
///
/// Returns `path` unchanged when `options` is `None` or every field is zero.
/// A query already present on `path` is kept.
///
/// # Errors
///
/// Returns [`Error::Encoding`] if `path` is not a well-formed relative URL
/// reference, or if `options` does not serialize to a flat record of scalars
/// (sequences of scalars are rendered as repeated keys).
///
/// # Examples
///
/// ```
/// use snipeit_client::query::add_options;
/// use snipeit_model::HardwareListOptions;
///
/// let opts = HardwareListOptions {
///     search: "mac book".to_string(),
///     ..Default::default()
/// };
/// let path = add_options("hardware", Some(&opts)).unwrap();
/// assert_eq!(path, "hardware?search=mac+book");
///
/// let path = add_options("hardware", Some(&HardwareListOptions::default())).unwrap();
/// assert_eq!(path, "hardware");
/// ```
pub fn add_options<O>(path: &str, options: Option<&O>) -> Result<String, Error>
where
    O: Serialize + ?Sized,
{
    let Some(options) = options else {
        return Ok(path.to_string());
    };

    check_relative(path)?;

    let pairs = query_pairs(options)?;
    if pairs.is_empty() {
        return Ok(path.to_string());
    }

    let mut encoded = form_urlencoded::Serializer::new(String::new());
    for (key, value) in &pairs {
        encoded.append_pair(key, value);
    }
    let query = encoded.finish();

    let (head, fragment) = match path.split_once('#') {
        Some((head, fragment)) => (head, Some(fragment)),
        None => (path, None),
    };
    let separator = match head.find('?') {
        None => "?",
        Some(_) if head.ends_with('?') || head.ends_with('&') => "",
        Some(_) => "&",
    };

    let mut out = format!("{head}{separator}{query}");
    if let Some(fragment) = fragment {
        out.push('#');
        out.push_str(fragment);
    }
    Ok(out)
}

/// Reject anything that is not a relative reference.
fn check_relative(path: &str) -> Result<(), Error> {
    if let Some(c) = path.chars().find(|c| c.is_control()) {
        return Err(Error::Encoding(format!(
            "invalid path {path:?}: control character {c:?}"
        )));
    }
    if has_bad_escape(path) {
        return Err(Error::Encoding(format!(
            "invalid path {path:?}: malformed percent-escape"
        )));
    }

    let base = Url::parse(PROBE_BASE).map_err(|e| Error::Encoding(e.to_string()))?;
    let resolved = base
        .join(path)
        .map_err(|e| Error::Encoding(format!("invalid path {path:?}: {e}")))?;

    if resolved.scheme() != base.scheme()
        || resolved.host_str() != base.host_str()
        || resolved.port() != base.port()
    {
        return Err(Error::Encoding(format!(
            "{path:?} is not a relative reference"
        )));
    }
    Ok(())
}

/// Whether `s` has a `%` not followed by two hex digits.
fn has_bad_escape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.iter().enumerate().any(|(i, &b)| {
        b == b'%'
            && !(bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit)
                && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit))
    })
}

/// Flatten an options record into non-zero key/value pairs.
fn query_pairs<O>(options: &O) -> Result<Vec<(String, String)>, Error>
where
    O: Serialize + ?Sized,
{
    let value = serde_json::to_value(options)
        .map_err(|e| Error::Encoding(format!("options not serializable: {e}")))?;

    let fields = match value {
        Value::Object(fields) => fields,
        other => {
            return Err(Error::Encoding(format!(
                "options must be a record of named fields, got {}",
                kind(&other)
            )))
        }
    };

    let mut pairs = Vec::with_capacity(fields.len());
    for (key, value) in fields {
        if let Value::Array(items) = value {
            for item in items {
                if let Some(rendered) = render(&key, item)? {
                    pairs.push((key.clone(), rendered));
                }
            }
        } else if let Some(rendered) = render(&key, value)? {
            pairs.push((key, rendered));
        }
    }
    Ok(pairs)
}

/// Render one scalar, or `None` for a zero value.
fn render(key: &str, value: Value) -> Result<Option<String>, Error> {
    match value {
        Value::Null | Value::Bool(false) => Ok(None),
        Value::Bool(true) => Ok(Some("true".to_string())),
        Value::Number(n) if is_zero(&n) => Ok(None),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => Ok(Some(s)),
        other => Err(Error::Encoding(format!(
            "field {key:?} holds {}, expected a scalar",
            kind(&other)
        ))),
    }
}

#[allow(clippy::float_cmp)]
fn is_zero(n: &Number) -> bool {
    n.as_u64() == Some(0) || n.as_i64() == Some(0) || n.as_f64() == Some(0.0)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a nested record",
    }
}
