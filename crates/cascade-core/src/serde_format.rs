//! Serde helpers for the vendor's date-time wire formats.
//!
//! Cascade uses two mutually inconsistent shapes: MCA acceptance carries
//! `2019-02-06T00:00:00` while cancellation requests carry
//! `2024-01-15 00:00:00`. Both are preserved literally per endpoint.

/// `YYYY-MM-DDTHH:MM:SS`, used by MCA acceptance.
pub mod t_separated {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    /// Serialize a timestamp in the T-separated vendor format.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    /// Deserialize a timestamp in the T-separated vendor format.
    ///
    /// # Errors
    ///
    /// Fails if the string does not match the format.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&value, FORMAT).map_err(serde::de::Error::custom)
    }
}

/// `YYYY-MM-DD HH:MM:SS`, used by cancellation requests.
pub mod space_separated {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    /// Serialize a timestamp in the space-separated vendor format.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    /// Deserialize a timestamp in the space-separated vendor format.
    ///
    /// # Errors
    ///
    /// Fails if the string does not match the format.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&value, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct TShaped {
        #[serde(with = "super::t_separated")]
        when: chrono::NaiveDateTime,
    }

    #[derive(Serialize, Deserialize)]
    struct SpaceShaped {
        #[serde(with = "super::space_separated")]
        when: chrono::NaiveDateTime,
    }

    fn sample() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2019, 2, 6)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn t_separated_round_trip() {
        let json = serde_json::to_string(&TShaped { when: sample() }).unwrap();
        assert_eq!(json, r#"{"when":"2019-02-06T00:00:00"}"#);
        let parsed: TShaped = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.when, sample());
    }

    #[test]
    fn space_separated_round_trip() {
        let json = serde_json::to_string(&SpaceShaped { when: sample() }).unwrap();
        assert_eq!(json, r#"{"when":"2019-02-06 00:00:00"}"#);
        let parsed: SpaceShaped = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.when, sample());
    }

    #[test]
    fn formats_are_not_interchangeable() {
        let t_wire = r#"{"when":"2019-02-06T00:00:00"}"#;
        assert!(serde_json::from_str::<SpaceShaped>(t_wire).is_err());
    }
}
