//! History Record
//!
//! One measurement of souls and fragments taken at a point in time.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

use super::document::{Document, NoPatch, StoredDocument};
use crate::error::ValidationError;

/// Stored in place of a blank quantity
const BLANK_QUANTITY: &str = "-";

/// A history record (matches the `records` collection)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    /// `YYYY/MM/DD`
    #[serde(default)]
    pub date: String,
    /// `HH:MM`
    #[serde(default)]
    pub time: String,
    #[serde(default, deserialize_with = "quantity_text")]
    pub soul: String,
    #[serde(default, deserialize_with = "quantity_text")]
    pub fragment: String,
    #[serde(default)]
    pub timestamp: Option<i64>,
}

impl Document for Record {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> Option<i64> {
        self.timestamp
    }
}

impl StoredDocument for Record {
    type New = NewRecord;
    type Patch = NoPatch;

    fn materialize(id: String, created_at: i64, new: NewRecord) -> Self {
        Self {
            id,
            date: new.date,
            time: new.time,
            soul: new.soul,
            fragment: new.fragment,
            timestamp: Some(created_at),
        }
    }

    fn apply_patch(&mut self, patch: &NoPatch) {
        match *patch {}
    }
}

/// Payload for adding a record. The store adds the timestamp.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewRecord {
    pub date: String,
    pub time: String,
    pub soul: String,
    pub fragment: String,
}

impl NewRecord {
    /// Build a record payload; blank quantities are stored as `-`
    pub fn new(at: NaiveDateTime, soul: &str, fragment: &str) -> Self {
        let quantity = |value: &str| {
            let value = value.trim();
            if value.is_empty() {
                BLANK_QUANTITY.to_string()
            } else {
                value.to_string()
            }
        };
        Self {
            date: at.format("%Y/%m/%d").to_string(),
            time: at.format("%H:%M").to_string(),
            soul: quantity(soul),
            fragment: quantity(fragment),
        }
    }

    /// Validate form input: both quantities are required
    pub fn from_inputs(soul: &str, fragment: &str, at: NaiveDateTime) -> Result<Self, ValidationError> {
        if soul.trim().is_empty() {
            return Err(ValidationError::EmptyField("soul"));
        }
        if fragment.trim().is_empty() {
            return Err(ValidationError::EmptyField("fragment"));
        }
        Ok(Self::new(at, soul, fragment))
    }
}

/// Quantities were written both as strings and as plain numbers
#[derive(Deserialize)]
#[serde(untagged)]
enum RawQuantity {
    Text(String),
    Integer(i64),
    Float(f64),
}

fn quantity_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawQuantity>::deserialize(deserializer)? {
        Some(RawQuantity::Text(text)) => text,
        Some(RawQuantity::Integer(n)) => n.to_string(),
        Some(RawQuantity::Float(f)) => f.to_string(),
        None => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_new_record_stamps() {
        let record = NewRecord::new(at(9, 7), " 120 ", "45");
        assert_eq!(record.date, "2024/03/05");
        assert_eq!(record.time, "09:07");
        assert_eq!(record.soul, "120");
        assert_eq!(record.fragment, "45");
    }

    #[test]
    fn test_blank_quantity_placeholder() {
        let record = NewRecord::new(at(0, 0), "", "3");
        assert_eq!(record.soul, "-");
    }

    #[test]
    fn test_from_inputs_requires_both() {
        assert_eq!(
            NewRecord::from_inputs("  ", "3", at(1, 2)),
            Err(ValidationError::EmptyField("soul"))
        );
        assert_eq!(
            NewRecord::from_inputs("3", "", at(1, 2)),
            Err(ValidationError::EmptyField("fragment"))
        );
        assert!(NewRecord::from_inputs("1", "2", at(1, 2)).is_ok());
    }

    #[test]
    fn test_deserialize_mixed_quantities() {
        let record: Record = serde_json::from_str(
            r#"{"id":"a","date":"2024/03/05","time":"10:00","soul":120,"fragment":"45","timestamp":1700}"#,
        )
        .unwrap();
        assert_eq!(record.soul, "120");
        assert_eq!(record.fragment, "45");
        assert_eq!(record.created_at(), Some(1700));
    }

    #[test]
    fn test_deserialize_pending_timestamp() {
        let record: Record =
            serde_json::from_str(r#"{"id":"b","soul":"-","fragment":null,"timestamp":null}"#).unwrap();
        assert_eq!(record.timestamp, None);
        assert_eq!(record.fragment, "");
        assert_eq!(record.date, "");
    }

    #[test]
    fn test_serialize_new_record() {
        let json = serde_json::to_value(NewRecord::new(at(23, 59), "1", "2")).unwrap();
        assert_eq!(json["date"], "2024/03/05");
        assert_eq!(json["time"], "23:59");
        assert_eq!(json["soul"], "1");
        assert!(json.get("timestamp").is_none());
    }
}
