//! Request-side date parsing: RFC 3339 timestamps or bare `YYYY-MM-DD` dates.

use serde::{de::Error as _, Deserialize, Deserializer};
use time::{
    format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime,
};

pub fn parse(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if let Ok(ts) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(ts);
    }
    Date::parse(raw, format_description!("[year]-[month]-[day]"))
        .ok()
        .map(|d| d.midnight().assume_utc())
}

/// For `Option<OffsetDateTime>` fields; blank strings count as absent.
pub fn deserialize_opt<'de, D>(d: D) -> Result<Option<OffsetDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(d)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse(s)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid date: {s:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use time::macros::datetime;

    #[derive(Debug, Deserialize)]
    struct Body {
        #[serde(default, deserialize_with = "deserialize_opt")]
        at: Option<OffsetDateTime>,
    }

    #[test]
    fn parses_rfc3339_and_plain_dates() {
        assert_eq!(
            parse("2025-03-01T10:30:00Z"),
            Some(datetime!(2025-03-01 10:30 UTC))
        );
        assert_eq!(parse("2025-03-01"), Some(datetime!(2025-03-01 0:00 UTC)));
        assert_eq!(parse("01/03/2025"), None);
    }

    #[test]
    fn deserializes_optional_field() {
        let b: Body = serde_json::from_str(r#"{"at": "2024-12-24"}"#).unwrap();
        assert_eq!(b.at, Some(datetime!(2024-12-24 0:00 UTC)));

        let b: Body = serde_json::from_str(r#"{"at": "  "}"#).unwrap();
        assert_eq!(b.at, None);

        let b: Body = serde_json::from_str("{}").unwrap();
        assert_eq!(b.at, None);

        let b: Body = serde_json::from_str(r#"{"at": null}"#).unwrap();
        assert_eq!(b.at, None);

        assert!(serde_json::from_str::<Body>(r#"{"at": "tomorrow"}"#).is_err());
    }
}
