use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use super::errors::DomainError;
use super::fields;
use super::ports::HasId;
use super::reconcile;

/// A delivery order. `status` is stored exactly as supplied — creation does
/// not validate it; the status gate owns the vocabulary on update/delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub dishes: Vec<OrderLine>,
}

impl HasId for Order {
    fn id(&self) -> &str {
        &self.id
    }
}

/// One line of an order. Extra keys supplied by the client (embedded dish
/// name, price, …) ride along untouched in `rest`. The dish id is never
/// checked against the dish collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dish_id: Option<String>,
    pub quantity: i64,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub rest: Map<String, Value>,
}

impl OrderLine {
    /// Build a line from a validated element. By this point the element is
    /// an object carrying an integer quantity.
    fn from_value(item: &Value, quantity: i64) -> Self {
        let mut rest = item.as_object().cloned().unwrap_or_default();
        rest.remove("quantity");
        let dish_id = match rest.get("dishId").cloned() {
            Some(Value::String(id)) => {
                rest.remove("dishId");
                Some(id)
            }
            _ => None,
        };
        Self {
            dish_id,
            quantity,
            rest,
        }
    }
}

/// The client-supplied shape of an order, before validation. `dishes` stays
/// a raw JSON value so the validator owns its shape errors.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub deliver_to: Option<String>,
    #[serde(default)]
    pub mobile_number: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub dishes: Option<Value>,
}

/// Whether a validated payload is destined for creation or for an update of
/// the order at `route_id`. Decides how the reconciled id is resolved.
#[derive(Debug, Clone, Copy)]
pub enum WriteKind<'a> {
    Create,
    Update { route_id: &'a str },
}

/// Validate an order payload in fixed field order and resolve its id.
/// Returns the reconciled order — the only value the create and update
/// handlers may persist.
pub fn validate(payload: &OrderPayload, kind: WriteKind<'_>) -> Result<Order, DomainError> {
    let deliver_to = fields::require_text(
        payload.deliver_to.as_deref(),
        "Order must include a deliverTo",
    )?;
    let mobile_number = fields::require_text(
        payload.mobile_number.as_deref(),
        "Order must include a mobileNumber",
    )?;
    let dishes = fields::require_present(payload.dishes.as_ref(), "Order must include a dish")?;
    let items = dishes
        .as_array()
        .filter(|items| !items.is_empty())
        .ok_or_else(|| DomainError::validation("Order must include at least one dish"))?;

    let mut lines = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        // Zero is caught by the presence clause, so the accepted set is
        // strictly-positive integers.
        let quantity = item
            .get("quantity")
            .filter(|quantity| fields::is_present(quantity))
            .and_then(fields::as_integer)
            .filter(|quantity| *quantity >= 0)
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "Dish {index} must have a quantity that is an integer greater than 0"
                ))
            })?;
        lines.push(OrderLine::from_value(item, quantity));
    }

    let id = match kind {
        // Creation never trusts an embedded id; it always mints a fresh one.
        WriteKind::Create => reconcile::next_id(),
        WriteKind::Update { route_id } => match payload.id.as_deref() {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => route_id.to_string(),
        },
    };

    Ok(Order {
        id,
        deliver_to,
        mobile_number,
        status: payload.status.clone(),
        dishes: lines,
    })
}

/// Merge for update responses: payload fields win; the stored id survives.
pub fn merge(existing: Order, incoming: Order) -> Order {
    Order {
        id: existing.id,
        ..incoming
    }
}
