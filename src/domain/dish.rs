use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::errors::DomainError;
use super::fields;
use super::ports::HasId;
use super::reconcile;

/// A dish on the menu. Identity is immutable once assigned; dishes are
/// never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub image_url: String,
}

impl HasId for Dish {
    fn id(&self) -> &str {
        &self.id
    }
}

/// The client-supplied shape of a dish, before validation. `price` stays a
/// raw JSON value so the validator owns its shape error, not the framework.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct DishPayload {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub price: Option<Value>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Validate a dish payload in fixed field order, resolving its id against
/// the route. Returns the reconciled dish — the only value the create and
/// update handlers may persist.
pub fn validate(payload: Option<DishPayload>, route_id: Option<&str>) -> Result<Dish, DomainError> {
    let payload = payload.ok_or_else(|| DomainError::validation("Dish is empty"))?;
    reconcile::check_route_match("Dish", payload.id.as_deref(), route_id)?;

    let name = fields::require_text(payload.name.as_deref(), "Dish must include a name")?;
    let description = fields::require_text(
        payload.description.as_deref(),
        "Dish must include a description",
    )?;
    // A price of zero is caught here as missing, not by the range check below.
    let price = fields::require_present(payload.price.as_ref(), "Dish must include a price")?;
    let price = fields::as_integer(price)
        .filter(|price| *price >= 0)
        .ok_or_else(|| {
            DomainError::validation("Dish must have a price that is an integer greater than 0")
        })?;
    let image_url = fields::require_text(
        payload.image_url.as_deref(),
        "Dish must include a image_url",
    )?;

    Ok(Dish {
        id: route_id.map(str::to_string).unwrap_or_else(reconcile::next_id),
        name,
        description,
        price,
        image_url,
    })
}

/// Merge for update responses. Every field of a valid payload is mandatory,
/// so the incoming dish wins wholesale while the stored id is kept.
pub fn merge(existing: Dish, incoming: Dish) -> Dish {
    Dish {
        id: existing.id,
        ..incoming
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn payload() -> DishPayload {
        DishPayload {
            id: None,
            name: Some("Taco".to_string()),
            description: Some("Soft corn tortilla".to_string()),
            price: Some(json!(5)),
            image_url: Some("https://example.test/taco.jpg".to_string()),
        }
    }

    #[test]
    fn valid_payload_gets_a_generated_id() {
        let dish = validate(Some(payload()), None).unwrap();
        assert_eq!(dish.name, "Taco");
        assert_eq!(dish.price, 5);
        assert_eq!(dish.id.len(), 32);
    }

    #[test]
    fn route_id_is_adopted_when_the_payload_omits_one() {
        let dish = validate(Some(payload()), Some("abc")).unwrap();
        assert_eq!(dish.id, "abc");
    }

    #[test]
    fn missing_payload_is_empty_dish() {
        let err = validate(None, None).unwrap_err();
        assert_eq!(err.to_string(), "Dish is empty");
    }

    #[test]
    fn missing_and_empty_name_are_equivalent() {
        for name in [None, Some(String::new())] {
            let err = validate(Some(DishPayload { name, ..payload() }), None).unwrap_err();
            assert_eq!(err.to_string(), "Dish must include a name");
        }
    }

    #[test]
    fn missing_description_is_rejected() {
        let bad = DishPayload {
            description: None,
            ..payload()
        };
        let err = validate(Some(bad), None).unwrap_err();
        assert_eq!(err.to_string(), "Dish must include a description");
    }

    #[test]
    fn price_zero_reads_as_missing_price() {
        let bad = DishPayload {
            price: Some(json!(0)),
            ..payload()
        };
        let err = validate(Some(bad), None).unwrap_err();
        assert_eq!(err.to_string(), "Dish must include a price");
    }

    #[test]
    fn bad_price_shapes_hit_the_range_message() {
        for price in [json!(-5), json!(2.5), json!("5"), json!(true)] {
            let bad = DishPayload {
                price: Some(price),
                ..payload()
            };
            let err = validate(Some(bad), None).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Dish must have a price that is an integer greater than 0"
            );
        }
    }

    #[test]
    fn whole_float_price_is_accepted() {
        let ok = DishPayload {
            price: Some(json!(7.0)),
            ..payload()
        };
        assert_eq!(validate(Some(ok), None).unwrap().price, 7);
    }

    #[test]
    fn missing_image_url_is_rejected() {
        let bad = DishPayload {
            image_url: None,
            ..payload()
        };
        let err = validate(Some(bad), None).unwrap_err();
        assert_eq!(err.to_string(), "Dish must include a image_url");
    }

    #[test]
    fn id_mismatch_wins_over_later_field_errors() {
        let bad = DishPayload {
            id: Some("xyz".to_string()),
            name: None,
            ..payload()
        };
        let err = validate(Some(bad), Some("abc")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Dish id does not match route id. Dish: xyz, Route: abc"
        );
    }

    #[test]
    fn embedded_id_on_create_is_rejected() {
        let bad = DishPayload {
            id: Some("xyz".to_string()),
            ..payload()
        };
        assert!(validate(Some(bad), None).is_err());
    }

    #[test]
    fn matching_embedded_id_passes_and_keeps_the_route_id() {
        let ok = DishPayload {
            id: Some("abc".to_string()),
            ..payload()
        };
        assert_eq!(validate(Some(ok), Some("abc")).unwrap().id, "abc");
    }

    #[test]
    fn merge_keeps_the_stored_id_and_takes_incoming_fields() {
        let stored = validate(Some(payload()), Some("abc")).unwrap();
        let incoming = Dish {
            id: "abc".to_string(),
            name: "Burrito".to_string(),
            description: "Wrapped".to_string(),
            price: 9,
            image_url: "https://example.test/burrito.jpg".to_string(),
        };
        let merged = merge(stored, incoming.clone());
        assert_eq!(merged, incoming);
    }
}
