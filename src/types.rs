//! Core types for s3dump

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::{Error, Result};

/// Wire format of `<LastModified>` values in listing responses.
const LAST_MODIFIED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// Timestamp format embedded in dump filenames.
const FILE_NAME_TIMESTAMP_FORMAT: &str = "%Y-%m-%d__%H_%M_%S";

/// One remote object discovered in a bucket listing.
///
/// A record is only ever constructed from a fragment that carried all three
/// fields; there is no partially-populated state.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RemoteObject {
    /// Object key (its path within the bucket), never empty
    pub key: String,
    /// Last modification time reported by the listing
    pub last_modified: DateTime<Utc>,
    /// Object size in bytes as reported by the listing
    pub size: u64,
}

impl RemoteObject {
    /// Parse a `<LastModified>` value (`YYYY-MM-DDTHH:MM:SS.ffffffZ`).
    pub fn parse_last_modified(raw: &str) -> Result<DateTime<Utc>> {
        NaiveDateTime::parse_from_str(raw, LAST_MODIFIED_FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(|source| Error::InvalidTimestamp {
                value: raw.to_string(),
                source,
            })
    }

    /// File name this object is dumped under.
    ///
    /// `{key}_{last_modified}{extension}` with the timestamp rendered as
    /// `YYYY-MM-DD__HH_MM_SS`. The extension (if any) comes from the
    /// download response, not the listing, so it is passed in.
    pub fn file_name(&self, extension: &str) -> String {
        format!(
            "{}_{}{}",
            self.key,
            self.last_modified.format(FILE_NAME_TIMESTAMP_FORMAT),
            extension
        )
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn object(key: &str) -> RemoteObject {
        RemoteObject {
            key: key.to_string(),
            last_modified: Utc.with_ymd_and_hms(2023, 5, 1, 10, 20, 30).unwrap(),
            size: 1024,
        }
    }

    #[test]
    fn parses_wire_format_timestamp() {
        let parsed = RemoteObject::parse_last_modified("2023-05-01T10:20:30.000000Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2023, 5, 1, 10, 20, 30).unwrap());
    }

    #[test]
    fn parses_sub_second_precision() {
        let parsed = RemoteObject::parse_last_modified("2023-05-01T10:20:30.500000Z").unwrap();
        assert_eq!(parsed.timestamp_subsec_millis(), 500);
    }

    #[test]
    fn rejects_timestamp_without_wire_format() {
        let result = RemoteObject::parse_last_modified("01/05/2023 10:20");
        assert!(matches!(result, Err(Error::InvalidTimestamp { .. })));
    }

    #[test]
    fn file_name_includes_formatted_timestamp_and_extension() {
        assert_eq!(
            object("abc").file_name(".png"),
            "abc_2023-05-01__10_20_30.png"
        );
    }

    #[test]
    fn file_name_without_extension() {
        assert_eq!(object("abc").file_name(""), "abc_2023-05-01__10_20_30");
    }
}
