// Serde support for zone-aware date-times
// chrono can serialize DateTime<Tz> but not deserialize it, because the zone
// name is not recoverable from an RFC 3339 instant. Carry it explicitly.

use chrono::DateTime;
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize, Deserialize)]
struct Repr {
    timestamp: String,
    zone: String,
}

pub fn serialize<S: Serializer>(value: &DateTime<Tz>, serializer: S) -> Result<S::Ok, S::Error> {
    Repr {
        timestamp: value.to_rfc3339(),
        zone: value.timezone().name().to_string(),
    }
    .serialize(serializer)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Tz>, D::Error> {
    let repr = Repr::deserialize(deserializer)?;
    let zone: Tz = repr.zone.parse().map_err(serde::de::Error::custom)?;
    let instant = DateTime::parse_from_rfc3339(&repr.timestamp).map_err(serde::de::Error::custom)?;
    Ok(instant.with_timezone(&zone))
}
