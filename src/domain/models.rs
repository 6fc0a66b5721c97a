use serde::{Deserialize, Deserializer};
use std::fmt;

/// Opaque identifier of a catalog item.
///
/// The data service may hand back integer keys or text keys (uuid, slug),
/// so both are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(id) => write!(f, "{}", id),
            ItemId::Text(id) => f.write_str(id),
        }
    }
}

/// One catalog entry as returned by the data service
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItemRecord {
    #[serde(rename = "menut_item_id")]
    pub id: ItemId,
    #[serde(rename = "menu_item_name", default, deserialize_with = "deserialize_name")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default, deserialize_with = "deserialize_price")]
    pub price: Option<f64>,
}

impl ItemRecord {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            availability: None,
            price: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_availability(mut self, availability: impl Into<String>) -> Self {
        self.availability = Some(availability.into());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }
}

impl From<i64> for ItemId {
    fn from(id: i64) -> Self {
        ItemId::Number(id)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        ItemId::Text(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        ItemId::Text(id)
    }
}

/// A null or missing name becomes an empty title rather than failing the batch
fn deserialize_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Postgres `numeric` columns come back as JSON strings, `float` columns as numbers
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Number(f64),
    Text(String),
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<RawPrice> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(RawPrice::Number(value)) => Ok(Some(value)),
        Some(RawPrice::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(RawPrice::Text(text)) => text
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid price: {:?}", text))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_decodes_service_column_names() {
        let json = r#"{
            "menut_item_id": 7,
            "menu_item_name": "Salmon Nigiri",
            "description": "Two pieces",
            "availability": "Available",
            "price": 4.5
        }"#;

        let item: ItemRecord = serde_json::from_str(json).unwrap();

        assert_eq!(item.id, ItemId::Number(7));
        assert_eq!(item.name, "Salmon Nigiri");
        assert_eq!(item.description.as_deref(), Some("Two pieces"));
        assert_eq!(item.availability.as_deref(), Some("Available"));
        assert_eq!(item.price, Some(4.5));
    }

    #[test]
    fn test_item_accepts_text_id_and_numeric_string_price() {
        let json = r#"{
            "menut_item_id": "a1b2",
            "menu_item_name": "Miso Soup",
            "description": null,
            "availability": null,
            "price": "3.25"
        }"#;

        let item: ItemRecord = serde_json::from_str(json).unwrap();

        assert_eq!(item.id, ItemId::Text("a1b2".to_string()));
        assert_eq!(item.description, None);
        assert_eq!(item.price, Some(3.25));
    }

    #[test]
    fn test_item_missing_optional_columns() {
        let json = r#"{"menut_item_id": 1, "menu_item_name": "Edamame"}"#;

        let item: ItemRecord = serde_json::from_str(json).unwrap();

        assert_eq!(item, ItemRecord::new(1_i64, "Edamame"));
    }

    #[test]
    fn test_item_null_or_missing_name_is_empty() {
        let null_name: ItemRecord =
            serde_json::from_str(r#"{"menut_item_id": 2, "menu_item_name": null}"#).unwrap();
        let no_name: ItemRecord = serde_json::from_str(r#"{"menut_item_id": 3}"#).unwrap();

        assert_eq!(null_name.name, "");
        assert_eq!(no_name.name, "");
    }

    #[test]
    fn test_item_rejects_garbage_price() {
        let json = r#"{"menut_item_id": 1, "menu_item_name": "X", "price": "cheap"}"#;

        assert!(serde_json::from_str::<ItemRecord>(json).is_err());
    }

    #[test]
    fn test_item_id_display() {
        assert_eq!(ItemId::Number(42).to_string(), "42");
        assert_eq!(ItemId::from("roll-3").to_string(), "roll-3");
    }
}
