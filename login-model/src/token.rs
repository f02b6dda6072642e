//! Token returned by a successful login.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer, Serialize, de};

/// Opaque credential artifact with an expiry timestamp.
///
/// Decoded from `{"value": "...", "expiryDate": ...}`. `expiryDate` may be an
/// RFC 3339 string or a Unix timestamp in seconds, integer or fractional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    value: String,
    #[serde(deserialize_with = "deserialize_expiry")]
    expiry_date: DateTime<Utc>,
}

impl Token {
    pub fn new(value: impl Into<String>, expiry_date: DateTime<Utc>) -> Self {
        Self {
            value: value.into(),
            expiry_date,
        }
    }

    /// Token expiring `lifetime` from now.
    pub fn expiring_in(value: impl Into<String>, lifetime: Duration) -> Self {
        Self::new(value, Utc::now() + lifetime)
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn expiry_date(&self) -> DateTime<Utc> {
        self.expiry_date
    }

    /// A token is expired once `now` reaches its expiry date.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expiry_date <= now
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawExpiry {
    Text(String),
    Seconds(i64),
    FractionalSeconds(f64),
}

fn deserialize_expiry<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    match RawExpiry::deserialize(deserializer)? {
        RawExpiry::Text(text) => DateTime::parse_from_rfc3339(&text)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(de::Error::custom),
        RawExpiry::Seconds(secs) => DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| de::Error::custom(format!("timestamp out of range: {secs}"))),
        RawExpiry::FractionalSeconds(secs) => {
            if !secs.is_finite() {
                return Err(de::Error::custom("timestamp is not finite"));
            }
            let mut whole = secs.floor() as i64;
            let mut nanos = ((secs - secs.floor()) * 1_000_000_000.0).round() as u32;
            if nanos >= 1_000_000_000 {
                whole += 1;
                nanos -= 1_000_000_000;
            }
            DateTime::from_timestamp(whole, nanos)
                .ok_or_else(|| de::Error::custom(format!("timestamp out of range: {secs}")))
        }
    }
}
