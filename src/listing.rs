//! Parsing of bucket listing responses.
//!
//! Listing pages are XML-ish documents carrying zero or more `<Contents>`
//! elements, each with `<Key>`, `<LastModified>` and `<Size>` children.
//! Extraction is regex-based with dot-matches-newline patterns, which copes
//! with the embedded newlines real listings produce without pulling in a
//! full XML parser.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::types::RemoteObject;

static CONTENTS_PATTERN: LazyLock<Regex> = LazyLock::new(|| pattern("<Contents>(.*?)</Contents>"));
static KEY_PATTERN: LazyLock<Regex> = LazyLock::new(|| pattern("<Key>(.*?)</Key>"));
static LAST_MODIFIED_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| pattern("<LastModified>(.*?)</LastModified>"));
static SIZE_PATTERN: LazyLock<Regex> = LazyLock::new(|| pattern("<Size>(.*?)</Size>"));

#[allow(clippy::expect_used)]
fn pattern(re: &str) -> Regex {
    Regex::new(&format!("(?s){re}")).expect("listing pattern is valid")
}

/// Iterate the listing records contained in one listing response body.
///
/// Yields one record per `<Contents>` fragment, in document order. A
/// fragment missing any required child fails with
/// [`Error::MalformedRecord`]; no fragment is silently skipped.
pub fn parse_listing(body: &str) -> impl Iterator<Item = Result<RemoteObject>> + '_ {
    CONTENTS_PATTERN
        .captures_iter(body)
        .map(|caps| parse_record(&caps[1]))
}

fn parse_record(fragment: &str) -> Result<RemoteObject> {
    let key = require_field(fragment, &KEY_PATTERN, "Key")?;
    let last_modified = require_field(fragment, &LAST_MODIFIED_PATTERN, "LastModified")?;
    let size = require_field(fragment, &SIZE_PATTERN, "Size")?;

    Ok(RemoteObject {
        key: key.to_string(),
        last_modified: RemoteObject::parse_last_modified(last_modified)?,
        size: size.parse().map_err(|source| Error::InvalidSize {
            value: size.to_string(),
            source,
        })?,
    })
}

/// Extract one child element's text. An absent or empty value is a
/// malformed record (keys are never empty, and an empty timestamp or size
/// could not parse anyway).
fn require_field<'a>(
    fragment: &'a str,
    field_pattern: &Regex,
    field: &'static str,
) -> Result<&'a str> {
    field_pattern
        .captures(fragment)
        .and_then(|caps| caps.get(1))
        .map(|value| value.as_str())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| Error::MalformedRecord {
            field,
            fragment: fragment.to_string(),
        })
}
