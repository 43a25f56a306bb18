//! Serde helpers for booking data.
//!
//! Booking tables are stored as JSON objects whose keys are either month
//! numbers (value: list of days) or years (value: object of month number to
//! list of days). JSON object keys are always strings, and untagged enums
//! cannot parse integers out of string keys, so the year-scoped shape is
//! read with string keys and converted here.

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::calendar::{BookingEntry, DisplayMonth, MonthlyBookings};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBookingEntry {
    Days(Vec<u32>),
    Months(BTreeMap<String, Vec<u32>>),
}

impl<'de> Deserialize<'de> for BookingEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawBookingEntry::deserialize(deserializer) {
            Ok(RawBookingEntry::Days(days)) => Ok(BookingEntry::LegacyMonth(days)),
            Ok(RawBookingEntry::Months(months)) => parse_month_keys(months)
                .map(BookingEntry::YearScoped)
                .map_err(D::Error::custom),
            Err(_) => Err(D::Error::custom(
                "expected a list of days or an object of month number to days",
            )),
        }
    }
}

fn parse_month_keys(months: BTreeMap<String, Vec<u32>>) -> Result<MonthlyBookings, String> {
    months
        .into_iter()
        .map(|(key, days)| {
            key.trim()
                .parse::<u32>()
                .map(|month| (month, days))
                .map_err(|_| format!("invalid month key: {key:?}"))
        })
        .collect()
}

#[derive(Serialize)]
struct DisplayMonthRepr {
    year: i32,
    month: u32,
    name: &'static str,
}

/// Serialized as `{"year": 2025, "month": 5, "name": "June"}` with the
/// 0-indexed month.
impl Serialize for DisplayMonth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        DisplayMonthRepr {
            year: self.year(),
            month: self.month(),
            name: self.name(),
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::BookingTable;

    #[test]
    fn test_deserialize_legacy_entry() {
        let entry: BookingEntry = serde_json::from_str("[10, 31]").unwrap();
        assert_eq!(entry, BookingEntry::LegacyMonth(vec![10, 31]));
    }

    #[test]
    fn test_deserialize_year_scoped_entry() {
        let entry: BookingEntry = serde_json::from_str(r#"{"6": [7, 14], "10": [4]}"#).unwrap();
        let expected = MonthlyBookings::from([(6, vec![7, 14]), (10, vec![4])]);
        assert_eq!(entry, BookingEntry::YearScoped(expected));
    }

    #[test]
    fn test_deserialize_rejects_non_numeric_month_key() {
        let result: Result<BookingEntry, _> = serde_json::from_str(r#"{"june": [7]}"#);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("invalid month key"));
    }

    #[test]
    fn test_deserialize_rejects_other_shapes() {
        let result: Result<BookingEntry, _> = serde_json::from_str(r#""7""#);
        assert!(result.is_err());
        let result: Result<BookingEntry, _> = serde_json::from_str("[-1]");
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_mixed_table() {
        let table: BookingTable =
            serde_json::from_str(r#"{"2025": {"6": [7, 14]}, "3": [1], "5": [10, 31]}"#).unwrap();

        assert!(matches!(table.entry(2025), Some(BookingEntry::YearScoped(_))));
        assert_eq!(table.entry(5), Some(&BookingEntry::LegacyMonth(vec![10, 31])));
    }

    #[test]
    fn test_serialize_table_uses_string_keys() {
        let table = BookingTable::new()
            .with_legacy_month(3, vec![1])
            .with_year(2025, [(6, vec![7])]);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"3":[1],"2025":{"6":[7]}}"#);
    }

    #[test]
    fn test_serialize_display_month() {
        let month = DisplayMonth::new(2025, 5).unwrap();
        assert_eq!(
            serde_json::to_value(month).unwrap(),
            serde_json::json!({"year": 2025, "month": 5, "name": "June"})
        );
    }
}
