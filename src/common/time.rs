use chrono::{DateTime, NaiveDateTime, Utc};

/// Parse a timestamp as emitted by the API.
///
/// The endpoints serialize database timestamps without an offset
/// (`2024-05-01T10:00:00.123456`); those are taken as UTC. RFC 3339 strings
/// with an explicit offset are accepted too.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}

/// Human readable presence line for a contact.
pub fn format_last_seen(
    last_seen: Option<DateTime<Utc>>,
    is_online: Option<bool>,
    now: DateTime<Utc>,
) -> String {
    if is_online == Some(true) {
        return "online".to_string();
    }

    let Some(last_seen) = last_seen else {
        return "last seen a long time ago".to_string();
    };

    let elapsed = now.signed_duration_since(last_seen);
    let minutes = elapsed.num_minutes().max(0);
    if minutes < 60 {
        format!("last seen {minutes} min ago")
    } else {
        format!("last seen {} h ago", elapsed.num_hours())
    }
}

/// `serde(with = ...)` adapter for a nullable timestamp field.
pub mod optional {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => serializer.serialize_some(&value.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => super::parse_timestamp(&raw)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid timestamp `{raw}`"))),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn naive_timestamps_are_read_as_utc() {
        let parsed = parse_timestamp("2024-05-01T10:00:00.123456").unwrap();
        assert_eq!(
            parsed.timestamp(),
            Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap().timestamp()
        );

        let without_fraction = parse_timestamp("2024-05-01T10:00:00").unwrap();
        assert_eq!(without_fraction, Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap());
    }

    #[test]
    fn offsets_are_normalized() {
        let parsed = parse_timestamp("2024-05-01T13:00:00+03:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap());
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn presence_lines() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

        assert_eq!(format_last_seen(Some(now), Some(true), now), "online");
        assert_eq!(format_last_seen(None, Some(false), now), "last seen a long time ago");
        assert_eq!(
            format_last_seen(Some(now - Duration::minutes(5)), None, now),
            "last seen 5 min ago"
        );
        assert_eq!(
            format_last_seen(Some(now - Duration::minutes(150)), Some(false), now),
            "last seen 2 h ago"
        );
    }
}
