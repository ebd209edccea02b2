use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub service: String,
    pub date: NaiveDateTime,
    pub status: BookingStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("field must be a string: {0}")]
    WrongType(&'static str),

    #[error("field must not be empty: {0}")]
    Empty(&'static str),

    #[error("unparseable date: {0}")]
    BadDate(String),
}

/// A validated create request. Only these four fields are ever read from the
/// inbound payload; anything else a client sends is dropped here and cannot
/// reach the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub service: String,
    pub date: NaiveDateTime,
}

impl BookingRequest {
    pub fn from_value(value: &serde_json::Value) -> Result<Self, ValidationError> {
        let name = string_field(value, "name")?;
        let email = string_field(value, "email")?;
        let service = string_field(value, "service")?;
        let raw_date = string_field(value, "date")?;
        let date = parse_date_time(&raw_date)?;

        Ok(Self {
            name,
            email,
            service,
            date,
        })
    }
}

fn string_field(
    value: &serde_json::Value,
    field: &'static str,
) -> Result<String, ValidationError> {
    let raw = value
        .get(field)
        .ok_or(ValidationError::MissingField(field))?;
    let s = raw.as_str().ok_or(ValidationError::WrongType(field))?;
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty(field));
    }
    Ok(trimmed.to_string())
}

/// Parse a client-supplied date string. Offsets are normalized to UTC; all
/// calendar-day comparisons downstream happen on the stored UTC wall clock.
pub fn parse_date_time(raw: &str) -> Result<NaiveDateTime, ValidationError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.naive_utc());
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(dt);
        }
    }

    if let Ok(day) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(dt) = day.and_hms_opt(0, 0, 0) {
            return Ok(dt);
        }
    }

    Err(ValidationError::BadDate(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    #[test]
    fn test_parse_rfc3339_utc() {
        assert_eq!(
            parse_date_time("2024-05-01T10:00:00Z").unwrap(),
            dt("2024-05-01 10:00")
        );
    }

    #[test]
    fn test_parse_rfc3339_offset_normalized_to_utc() {
        assert_eq!(
            parse_date_time("2024-05-01T10:00:00+02:00").unwrap(),
            dt("2024-05-01 08:00")
        );
    }

    #[test]
    fn test_parse_naive_datetime() {
        assert_eq!(
            parse_date_time("2024-05-01T10:00:00").unwrap(),
            dt("2024-05-01 10:00")
        );
        assert_eq!(
            parse_date_time("2024-05-01 10:00:00").unwrap(),
            dt("2024-05-01 10:00")
        );
    }

    #[test]
    fn test_parse_bare_date_is_midnight() {
        assert_eq!(
            parse_date_time("2024-05-01").unwrap(),
            dt("2024-05-01 00:00")
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_date_time("not-a-date").is_err());
        assert!(parse_date_time("").is_err());
        assert!(parse_date_time("2024-13-01").is_err());
        assert!(parse_date_time("01/05/2024").is_err());
    }

    #[test]
    fn test_from_value_accepts_valid_payload() {
        let payload = json!({
            "name": "Alice",
            "email": "a@x.com",
            "service": "Haircut",
            "date": "2024-05-01T10:00:00Z"
        });
        let request = BookingRequest::from_value(&payload).unwrap();
        assert_eq!(request.name, "Alice");
        assert_eq!(request.email, "a@x.com");
        assert_eq!(request.service, "Haircut");
        assert_eq!(request.date, dt("2024-05-01 10:00"));
    }

    #[test]
    fn test_from_value_rejects_missing_fields() {
        let full = json!({
            "name": "Alice",
            "email": "a@x.com",
            "service": "Haircut",
            "date": "2024-05-01"
        });
        for field in ["name", "email", "service", "date"] {
            let mut payload = full.clone();
            payload.as_object_mut().unwrap().remove(field);
            assert!(
                BookingRequest::from_value(&payload).is_err(),
                "missing {field} should fail"
            );
        }
    }

    #[test]
    fn test_from_value_rejects_wrong_type() {
        let payload = json!({
            "name": 42,
            "email": "a@x.com",
            "service": "Haircut",
            "date": "2024-05-01"
        });
        assert!(BookingRequest::from_value(&payload).is_err());
    }

    #[test]
    fn test_from_value_rejects_empty_strings() {
        let payload = json!({
            "name": "   ",
            "email": "a@x.com",
            "service": "Haircut",
            "date": "2024-05-01"
        });
        assert!(BookingRequest::from_value(&payload).is_err());
    }

    #[test]
    fn test_from_value_rejects_bad_date() {
        let payload = json!({
            "name": "Alice",
            "email": "a@x.com",
            "service": "Haircut",
            "date": "not-a-date"
        });
        assert!(BookingRequest::from_value(&payload).is_err());
    }

    #[test]
    fn test_from_value_ignores_extra_fields() {
        let payload = json!({
            "name": "Alice",
            "email": "a@x.com",
            "service": "Haircut",
            "date": "2024-05-01",
            "id": 99,
            "status": "confirmed"
        });
        let request = BookingRequest::from_value(&payload).unwrap();
        let roundtrip = serde_json::to_value(&request).unwrap();
        assert!(roundtrip.get("id").is_none());
        assert!(roundtrip.get("status").is_none());
    }

    #[test]
    fn test_from_value_non_object_payload() {
        assert!(BookingRequest::from_value(&json!("just a string")).is_err());
        assert!(BookingRequest::from_value(&json!([1, 2, 3])).is_err());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let booking = Booking {
            id: 1,
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            service: "Haircut".to_string(),
            date: dt("2024-05-01 10:00"),
            status: BookingStatus::Pending,
        };
        let value = serde_json::to_value(&booking).unwrap();
        assert_eq!(value["status"], "pending");
        assert_eq!(BookingStatus::Pending.as_str(), "pending");
    }
}
