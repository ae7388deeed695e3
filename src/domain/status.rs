//! The order status state machine and the gate that enforces it.

use super::errors::DomainError;
use super::order::Order;

/// The four statuses an order may carry.
///
/// These are unordered flags rather than a strict progression: the update
/// gate accepts any of the four as a target without an adjacency check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pending" => Some(OrderStatus::Pending),
            "preparing" => Some(OrderStatus::Preparing),
            "outForDelivery" => Some(OrderStatus::OutForDelivery),
            "delivered" => Some(OrderStatus::Delivered),
            _ => None,
        }
    }

    /// Only pending orders may be deleted.
    pub fn is_deletable(self) -> bool {
        matches!(self, OrderStatus::Pending)
    }

    /// Delivered is terminal: no further update is permitted.
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }
}

/// The operation the status gate is asked to clear.
#[derive(Debug, Clone, Copy)]
pub enum StatusGate<'a> {
    /// An update proposing `proposed` as the order's next status.
    Update { proposed: Option<&'a str> },
    /// A deletion of the order.
    Delete,
}

/// Single gate guarding both updates and deletions, branching on the
/// operation. A failure is always a 400: the order exists, only the
/// operation is disallowed.
pub fn check(gate: StatusGate<'_>, current: &Order) -> Result<(), DomainError> {
    let stored = current.status.as_deref().and_then(OrderStatus::from_name);
    match gate {
        StatusGate::Update { proposed } => {
            if proposed.and_then(OrderStatus::from_name).is_none() {
                return Err(DomainError::validation(
                    "Order must have a status of pending, preparing, out-for-delivery, delivered.",
                ));
            }
            if stored.is_some_and(OrderStatus::is_terminal) {
                return Err(DomainError::validation("A delivery order cannot be changed"));
            }
            Ok(())
        }
        StatusGate::Delete => {
            if !stored.is_some_and(OrderStatus::is_deletable) {
                return Err(DomainError::validation(
                    "An order cannot be deleted unless it is pending",
                ));
            }
            Ok(())
        }
    }
}
