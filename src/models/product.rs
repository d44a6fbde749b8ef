use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Identifier assigned by the store; starts at 1 and is never reused.
pub type ProductId = u64;

/// Core catalog entry. Everything except `stock` is fixed once the store
/// has assigned the id and creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// No lower bound is enforced.
    pub price: f64,
    /// May go negative after a stock decrement.
    pub stock: i64,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Price with two decimals for console output.
    pub fn price_display(&self) -> String {
        format!("{:.2}", self.price)
    }
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// Body of `POST /products`. Absent and `null` fields decode to their
/// zero value; a field of the wrong type is a decode error.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CreateProduct {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub stock: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
}

/// Body of `PATCH /products/:id/stock`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StockAdjustment {
    #[serde(deserialize_with = "null_as_default")]
    pub delta: i64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode the first JSON value in `body`. A `null` document yields
/// `T::default()` and anything after the first value is ignored.
pub fn decode_body<'de, T>(body: &'de [u8]) -> serde_json::Result<T>
where
    T: Deserialize<'de> + Default,
{
    let mut de = serde_json::Deserializer::from_slice(body);
    Ok(Option::<T>::deserialize(&mut de)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make(id: ProductId, name: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            price: 89800.0,
            stock: 10,
            category: "Electronics".to_string(),
            created_at: Utc::now(),
        }
    }

    // ── Serialization ──────────────────────────────────────────────────────────

    #[test]
    fn product_serializes_wire_field_names() {
        let value = serde_json::to_value(make(1, "Laptop")).unwrap();
        let obj = value.as_object().unwrap();
        for field in ["id", "name", "price", "stock", "category", "created_at"] {
            assert!(obj.contains_key(field), "missing field {field}");
        }
        assert_eq!(obj.len(), 6);
        assert_eq!(value["id"], 1);
        assert_eq!(value["name"], "Laptop");
    }

    #[test]
    fn created_at_is_rfc3339() {
        let value = serde_json::to_value(make(1, "Laptop")).unwrap();
        let raw = value["created_at"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(raw).is_ok(), "not RFC3339: {raw}");
    }

    #[test]
    fn price_display_uses_two_decimals() {
        let mut p = make(1, "Pen");
        p.price = 2980.0;
        assert_eq!(p.price_display(), "2980.00");
    }

    // ── CreateProduct decoding ─────────────────────────────────────────────────

    #[test]
    fn create_payload_decodes_all_fields() {
        let payload: CreateProduct = serde_json::from_str(
            r#"{"name":"Pen","price":100,"stock":5,"category":"Office"}"#,
        )
        .unwrap();
        assert_eq!(payload.name, "Pen");
        assert_eq!(payload.price, 100.0);
        assert_eq!(payload.stock, 5);
        assert_eq!(payload.category, "Office");
    }

    #[test]
    fn create_payload_missing_fields_default_to_zero_values() {
        let payload: CreateProduct = serde_json::from_str(r#"{"name":"Pen"}"#).unwrap();
        assert_eq!(
            payload,
            CreateProduct {
                name: "Pen".to_string(),
                ..CreateProduct::default()
            }
        );
    }

    #[test]
    fn create_payload_rejects_wrong_type() {
        let err = serde_json::from_str::<CreateProduct>(r#"{"name":"Pen","price":"bad"}"#)
            .unwrap_err();
        assert!(err.is_data(), "expected a type error, got {err}");
    }

    #[test]
    fn create_payload_rejects_fractional_stock() {
        assert!(serde_json::from_str::<CreateProduct>(r#"{"stock":1.5}"#).is_err());
    }

    #[test]
    fn create_payload_null_fields_default_to_zero_values() {
        let payload: CreateProduct =
            decode_body(br#"{"name":"Pen","price":null,"stock":null,"category":null}"#).unwrap();
        assert_eq!(payload.name, "Pen");
        assert_eq!(payload.price, 0.0);
        assert_eq!(payload.stock, 0);
        assert_eq!(payload.category, "");
    }

    #[test]
    fn decode_body_null_document_is_default() {
        let payload: CreateProduct = decode_body(b"null").unwrap();
        assert_eq!(payload, CreateProduct::default());
    }

    #[test]
    fn decode_body_ignores_trailing_data() {
        let payload: CreateProduct = decode_body(br#"{"name":"Pen"} trailing {"x":1}"#).unwrap();
        assert_eq!(payload.name, "Pen");
    }

    #[test]
    fn decode_body_still_rejects_wrong_types_and_empty_input() {
        assert!(decode_body::<CreateProduct>(br#"{"price":"bad"}"#).is_err());
        assert!(decode_body::<CreateProduct>(b"").is_err());
        assert!(decode_body::<StockAdjustment>(br#"{"delta":"lots"}"#).is_err());
    }

    #[test]
    fn stock_adjustment_accepts_negative_delta() {
        let adj: StockAdjustment = serde_json::from_str(r#"{"delta":-10}"#).unwrap();
        assert_eq!(adj.delta, -10);
    }
}
