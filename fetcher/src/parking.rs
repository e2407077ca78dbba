use serde::{
    Deserialize, Deserializer,
    de::{self, Visitor},
};
use std::fmt;

/// Upstream document: `{"parking": [...]}`.
#[derive(Debug, Deserialize)]
pub struct ParkingData {
    pub parking: Vec<GarageRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GarageRecord {
    pub title: String,
    #[serde(rename = "actuel", deserialize_with = "deserialize_count")]
    pub occupied: u32,
    #[serde(deserialize_with = "deserialize_count")]
    pub total: u32,
}

fn deserialize_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    struct CountVisitor;

    impl Visitor<'_> for CountVisitor {
        type Value = u32;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a non-negative integer or a string representing one")
        }

        fn visit_u64<E>(self, value: u64) -> Result<u32, E>
        where
            E: de::Error,
        {
            u32::try_from(value).map_err(de::Error::custom)
        }

        fn visit_i64<E>(self, value: i64) -> Result<u32, E>
        where
            E: de::Error,
        {
            u32::try_from(value).map_err(de::Error::custom)
        }

        fn visit_str<E>(self, value: &str) -> Result<u32, E>
        where
            E: de::Error,
        {
            value.trim().parse::<u32>().map_err(de::Error::custom)
        }
    }

    deserializer.deserialize_any(CountVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_counts_from_integers() {
        let data: ParkingData = serde_json::from_value(json!({
            "parking": [{"title": "Bouillon", "actuel": 100, "total": 100, "id": 7}]
        }))
        .unwrap();
        assert_eq!(
            data.parking,
            vec![GarageRecord {
                title: "Bouillon".to_string(),
                occupied: 100,
                total: 100,
            }]
        );
    }

    #[test]
    fn test_deserialize_counts_from_strings() {
        let record: GarageRecord =
            serde_json::from_value(json!({"title": "Gëlle Fra", "actuel": "12", "total": " 300"}))
                .unwrap();
        assert_eq!(record.occupied, 12);
        assert_eq!(record.total, 300);
    }

    #[test]
    fn test_deserialize_rejects_negative_and_missing_counts() {
        assert!(
            serde_json::from_value::<GarageRecord>(json!({"title": "A", "actuel": -1, "total": 3}))
                .is_err()
        );
        assert!(serde_json::from_value::<GarageRecord>(json!({"title": "A", "total": 3})).is_err());
        assert!(
            serde_json::from_value::<GarageRecord>(json!({"title": "A", "actuel": null, "total": 3}))
                .is_err()
        );
    }
}
