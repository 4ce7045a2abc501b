use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Service listing as captured from the seller's edit form. Every field is
/// optional: a missing field is a meaningful state that the evaluators grade.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default, deserialize_with = "deserialize_packages")]
    pub packages: Option<Vec<PackageRecord>>,
    #[serde(default)]
    pub album_images: Option<Vec<String>>,
}

/// One pricing tier. Any field may be missing on a half-filled form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub delivery_time: Option<DeliveryTime>,
}

impl PackageRecord {
    pub fn new(name: &str, price: f64, delivery_time: DeliveryTime) -> Self {
        Self {
            name: Some(name.to_string()),
            price: Some(price),
            delivery_time: Some(delivery_time),
        }
    }

    /// A tier is incomplete when it lacks a name, a price, or a delivery time.
    pub fn is_incomplete(&self) -> bool {
        let named = self.name.as_deref().is_some_and(|name| !name.is_empty());
        let scheduled = self
            .delivery_time
            .as_ref()
            .is_some_and(DeliveryTime::is_specified);

        !named || self.price.is_none() || !scheduled
    }
}

/// Delivery time arrives as free text ("3 วัน"), a day count, or whatever
/// else the form happened to send. Only whether it is filled in matters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DeliveryTime {
    Days(u32),
    Number(f64),
    Text(String),
    Other(Value),
}

impl DeliveryTime {
    /// Zero, blank text, `false` and empty collections count as unset.
    pub fn is_specified(&self) -> bool {
        match self {
            DeliveryTime::Days(days) => *days > 0,
            DeliveryTime::Number(number) => *number != 0.0,
            DeliveryTime::Text(text) => !text.is_empty(),
            DeliveryTime::Other(value) => match value {
                Value::Null => false,
                Value::Bool(flag) => *flag,
                Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
                Value::String(text) => !text.is_empty(),
                Value::Array(items) => !items.is_empty(),
                Value::Object(fields) => !fields.is_empty(),
            },
        }
    }
}

/// `null` entries in the package array count as tiers with nothing filled in.
fn deserialize_packages<'de, D>(deserializer: D) -> Result<Option<Vec<PackageRecord>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Option<PackageRecord>>>::deserialize(deserializer)?;
    Ok(raw.map(|entries| entries.into_iter().map(Option::unwrap_or_default).collect()))
}

/// Returns the text when present and non-empty.
pub(crate) fn filled(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_sparse_payload() {
        let listing: Listing = serde_json::from_value(json!({
            "title": "ออกแบบโลโก้",
            "price": 1500,
            "unknown_field": true
        }))
        .expect("sparse listing parses");

        assert_eq!(listing.title.as_deref(), Some("ออกแบบโลโก้"));
        assert_eq!(listing.price, Some(1500.0));
        assert!(listing.tags.is_none());
        assert!(listing.packages.is_none());
    }

    #[test]
    fn null_package_entries_become_empty_records() {
        let listing: Listing = serde_json::from_value(json!({
            "packages": [
                null,
                { "name": "Basic", "price": 500, "delivery_time": 3 }
            ]
        }))
        .expect("packages parse");

        let packages = listing.packages.expect("packages present");
        assert_eq!(packages.len(), 2);
        assert!(packages[0].is_incomplete());
        assert!(!packages[1].is_incomplete());
    }

    #[test]
    fn delivery_time_accepts_text_or_days() {
        let text: DeliveryTime = serde_json::from_value(json!("3 days")).expect("text");
        let days: DeliveryTime = serde_json::from_value(json!(5)).expect("days");
        assert_eq!(text, DeliveryTime::Text("3 days".to_string()));
        assert_eq!(days, DeliveryTime::Days(5));
        assert!(!DeliveryTime::Days(0).is_specified());
        assert!(!DeliveryTime::Text(String::new()).is_specified());
    }

    #[test]
    fn delivery_time_accepts_any_json_value() {
        let listing: Listing = serde_json::from_value(json!({
            "packages": [
                { "name": "Basic", "price": 500, "delivery_time": 1.5 },
                { "name": "Rush", "price": 900, "delivery_time": -2 },
                { "name": "Flag", "price": 700, "delivery_time": true },
                { "name": "Off", "price": 700, "delivery_time": false },
                { "name": "Zero", "price": 700, "delivery_time": 0.0 },
                { "name": "List", "price": 700, "delivery_time": [] }
            ]
        }))
        .expect("any delivery_time parses");

        let incomplete: Vec<bool> = listing
            .packages
            .expect("packages present")
            .iter()
            .map(PackageRecord::is_incomplete)
            .collect();
        assert_eq!(incomplete, [false, false, false, true, true, true]);
    }

    #[test]
    fn fractional_delivery_time_is_kept_as_a_number() {
        let days: DeliveryTime = serde_json::from_value(json!(1.5)).expect("number");
        assert_eq!(days, DeliveryTime::Number(1.5));
        let flag: DeliveryTime = serde_json::from_value(json!(true)).expect("bool");
        assert_eq!(flag, DeliveryTime::Other(json!(true)));
    }

    #[test]
    fn zero_price_still_counts_as_present_on_a_package() {
        let record = PackageRecord {
            name: Some("Basic".to_string()),
            price: Some(0.0),
            delivery_time: Some(DeliveryTime::Days(2)),
        };
        assert!(!record.is_incomplete());
    }
}
